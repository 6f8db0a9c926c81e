//! Configuration parsing for lattice builds.

use anyhow::{Context, Result};
use lattice_graph::Topology;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root configuration for one lattice build.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
	/// Cube side length L.
	pub side: u32,
	/// Lattice topology.
	#[serde(default)]
	pub topology: TopologyConfig,
	/// Directory the dumps are written to (created if missing).
	#[serde(default = "default_output_dir")]
	pub output_dir: PathBuf,
	/// File name prefix for the dumps.
	#[serde(default = "default_name")]
	pub name: String,
	/// Seed for the random spin configuration (random if absent).
	#[serde(default)]
	pub seed: Option<u64>,
	/// Also dump the z = 0 cross-section of a random XY configuration.
	#[serde(default)]
	pub cross_section: bool,
}

/// Topology table, tagged by `kind`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TopologyConfig {
	/// Open-boundary nearest-neighbour cube.
	#[default]
	Grid,
	/// Octree-subdivided cube.
	Hierarchical { levels: u32 },
}

impl From<TopologyConfig> for Topology {
	fn from(config: TopologyConfig) -> Self {
		match config {
			TopologyConfig::Grid => Topology::Grid,
			TopologyConfig::Hierarchical { levels } => Topology::Hierarchical { levels },
		}
	}
}

pub fn default_output_dir() -> PathBuf {
	PathBuf::from("results")
}

pub fn default_name() -> String {
	"lattice".to_string()
}

impl Config {
	/// Config for a side length with every other field at its default.
	pub fn with_side(side: u32) -> Self {
		Self {
			side,
			topology: TopologyConfig::default(),
			output_dir: default_output_dir(),
			name: default_name(),
			seed: None,
			cross_section: false,
		}
	}

	/// Load configuration from a TOML file without validating it.
	///
	/// Command-line overrides are applied on top, so callers run
	/// [`Config::validate`] on the merged result.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		Self::parse(&content)
	}

	/// Parse configuration from TOML text without validating it.
	pub fn parse(content: &str) -> Result<Self> {
		toml::from_str(content).with_context(|| "Failed to parse config TOML")
	}

	/// Reject values that cannot produce a useful lattice.
	pub fn validate(&self) -> Result<()> {
		if self.side == 0 {
			anyhow::bail!("side must be positive");
		}
		if let TopologyConfig::Hierarchical { levels } = self.topology {
			if levels == 0 {
				anyhow::bail!("hierarchical topology needs at least 1 level");
			}
		}
		if self.name.is_empty() {
			anyhow::bail!("name must not be empty");
		}
		Ok(())
	}
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
