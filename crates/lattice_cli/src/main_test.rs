use super::*;

fn parse(args: &[&str]) -> Result<Config> {
	let args = Args::try_parse_from(std::iter::once("build_lattice").chain(args.iter().copied()))?;
	args.resolve()
}

fn scratch_dir(tag: &str) -> PathBuf {
	let dir = std::env::temp_dir().join(format!("build_lattice_{}_{}", tag, std::process::id()));
	let _ = std::fs::remove_dir_all(&dir);
	dir
}

#[test]
fn test_side_flag_builds_grid_config() {
	let config = parse(&["-L", "4"]).unwrap();
	assert_eq!(config, Config::with_side(4));
}

#[test]
fn test_levels_flag_selects_hierarchical() {
	let config = parse(&["--side", "8", "--levels", "3", "--name", "h", "--seed", "5"]).unwrap();
	assert_eq!(config.topology, TopologyConfig::Hierarchical { levels: 3 });
	assert_eq!(config.name, "h");
	assert_eq!(config.seed, Some(5));
}

#[test]
fn test_missing_side_and_config() {
	let err = parse(&[]).unwrap_err();
	assert!(err.to_string().contains("--config or --side"));
}

#[test]
fn test_flags_override_config_file() {
	let dir = scratch_dir("override");
	std::fs::create_dir_all(&dir).unwrap();
	let path = dir.join("lattice.toml");
	std::fs::write(&path, "side = 16\nname = \"file\"\n").unwrap();

	let config = parse(&["--config", path.to_str().unwrap(), "--side", "8"]).unwrap();
	assert_eq!(config.side, 8);
	assert_eq!(config.name, "file");

	std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_override_repairs_invalid_config_file() {
	let dir = scratch_dir("repair");
	std::fs::create_dir_all(&dir).unwrap();
	let path = dir.join("lattice.toml");
	std::fs::write(&path, "side = 0\n").unwrap();
	let path = path.to_str().unwrap();

	// Merged config is valid even though the file alone is not.
	let config = parse(&["--config", path, "--side", "8"]).unwrap();
	assert_eq!(config.side, 8);

	let err = parse(&["--config", path]).unwrap_err();
	assert!(err.to_string().contains("side must be positive"));

	std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_run_writes_dumps() {
	let dir = scratch_dir("run");
	let mut config = Config::with_side(8);
	config.topology = TopologyConfig::Hierarchical { levels: 3 };
	config.output_dir = dir.clone();
	config.seed = Some(11);
	config.cross_section = true;

	run(&config).unwrap();

	let adjacency = std::fs::read_to_string(dir.join("lattice_adjacency.txt")).unwrap();
	assert_eq!(adjacency.lines().count(), 512);
	let plane = std::fs::read_to_string(dir.join("lattice_crosssection.txt")).unwrap();
	assert_eq!(plane.lines().count(), 8);
	assert!(plane
		.lines()
		.all(|l| l.split_whitespace().count() == 8));

	std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_run_rejects_indivisible_side() {
	let mut config = Config::with_side(6);
	config.topology = TopologyConfig::Hierarchical { levels: 3 };
	config.output_dir = scratch_dir("reject");

	let err = run(&config).unwrap_err();
	assert!(format!("{err:#}").contains("multiple of 2^3"));
	assert!(!config.output_dir.exists());
}
