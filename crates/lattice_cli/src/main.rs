//! Lattice builder.
//!
//! Builds a grid or hierarchical lattice, audits half-edge symmetry and
//! writes plain-text dumps for the plotting scripts:
//! - `<name>_adjacency.txt`: one line of neighbour ids per vertex
//! - `<name>_crosssection.txt`: z = 0 plane of a random XY configuration
//!   (only with `--cross-section`)

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use lattice_graph::io::{format_cross_section, table_to_string, write_txt};
use lattice_graph::measurement::cross_section;
use lattice_graph::xy::random_spins;
use lattice_graph::{adjacency_table, audit_symmetry, Graph, GraphStats, Lattice, Topology};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use web_time::Instant;

use config::{Config, TopologyConfig};

/// Lattice builder for cluster-update spin simulations.
#[derive(Parser, Debug)]
#[command(name = "build_lattice")]
#[command(about = "Builds grid or hierarchical lattices and dumps their adjacency")]
struct Args {
	/// Path to configuration TOML file.
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Cube side length (overrides config).
	#[arg(short = 'L', long)]
	side: Option<u32>,

	/// Hierarchical levels; selects the hierarchical topology (overrides config).
	#[arg(short = 'l', long)]
	levels: Option<u32>,

	/// Output directory (overrides config).
	#[arg(short, long)]
	output_dir: Option<PathBuf>,

	/// File name prefix (overrides config).
	#[arg(short, long)]
	name: Option<String>,

	/// Seed for the random spin configuration (overrides config).
	#[arg(short, long)]
	seed: Option<u64>,

	/// Also write the z = 0 cross-section of a random XY configuration.
	#[arg(long)]
	cross_section: bool,
}

impl Args {
	/// Merge the config file (if any) with command-line overrides.
	fn resolve(self) -> Result<Config> {
		let mut config = match (&self.config, self.side) {
			(Some(path), _) => Config::load(path)?,
			(None, Some(side)) => Config::with_side(side),
			(None, None) => anyhow::bail!("either --config or --side is required"),
		};

		if let Some(side) = self.side {
			config.side = side;
		}
		if let Some(levels) = self.levels {
			config.topology = TopologyConfig::Hierarchical { levels };
		}
		if let Some(dir) = self.output_dir {
			config.output_dir = dir;
		}
		if let Some(name) = self.name {
			config.name = name;
		}
		if self.seed.is_some() {
			config.seed = self.seed;
		}
		config.cross_section |= self.cross_section;

		config.validate()?;
		Ok(config)
	}
}

fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| EnvFilter::new("build_lattice=info,lattice_graph=info")),
		)
		.init();

	let config = Args::parse().resolve()?;
	run(&config)
}

fn run(config: &Config) -> Result<()> {
	let topology = Topology::from(config.topology);
	tracing::info!(side = config.side, %topology, "Building lattice");

	let start = Instant::now();
	let lattice = Lattice::build(config.side, topology)
		.with_context(|| format!("Failed to build {} lattice of side {}", topology, config.side))?;
	let build_us = start.elapsed().as_micros() as u64;

	let stats = GraphStats::from_graph(&lattice);
	tracing::info!(
		vertices = stats.vertices,
		half_edges = stats.half_edges,
		min_degree = ?stats.min_degree(),
		max_degree = ?stats.max_degree(),
		build_us,
		"Lattice built"
	);
	for (weight, count) in &stats.weight_histogram {
		tracing::debug!(weight, count, "Coupling class");
	}

	let report = audit_symmetry(&lattice);
	if let Some(first) = report.unmatched.first() {
		anyhow::bail!(
			"{} of {} half-edges lack a matching reverse, first: {:?}",
			report.unmatched.len(),
			report.checked,
			first
		);
	}
	tracing::info!(checked = report.checked, "Symmetry audit passed");

	let adjacency = table_to_string(&adjacency_table(&lattice));
	let path = write_txt(
		&config.output_dir,
		&format!("{}_adjacency", config.name),
		&adjacency,
	)
	.with_context(|| format!("Failed to write adjacency to {}", config.output_dir.display()))?;
	tracing::info!(path = %path.display(), "Adjacency written");

	if config.cross_section {
		let seed = config.seed.unwrap_or_else(rand::random);
		let spins = random_spins(&mut StdRng::seed_from_u64(seed), lattice.nv());
		let plane = cross_section(&lattice, &spins).context("Reading cross-section")?;

		let text = format_cross_section(&plane, lattice.side() as usize)
			.context("Formatting cross-section")?;

		let path = write_txt(
			&config.output_dir,
			&format!("{}_crosssection", config.name),
			&text,
		)
		.with_context(|| {
			format!("Failed to write cross-section to {}", config.output_dir.display())
		})?;
		tracing::info!(seed, path = %path.display(), "Cross-section written");
	}

	Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;
