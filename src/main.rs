use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, Level};
use winpath::{
	add_extended_prefix_with, classify, directory_or_root, extension, reduce, PathFormat,
	PathRulesConfig,
};

#[derive(Parser)]
#[command(name = "winpath")]
#[command(about = "Inspect how Windows interprets path strings, without touching the disk")]
struct Cli {
	/// Enable verbose logging
	#[arg(short, long, global = true)]
	verbose: bool,

	/// JSON file with path rule settings
	#[arg(short, long, global = true)]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Print the format and root of each path
	Classify { paths: Vec<String> },
	/// Print the path with the extended-length prefix applied when needed
	Extended {
		path: String,
		/// Prefix even when below the legacy length limit
		#[arg(short, long)]
		force: bool,
	},
	/// Print the parent directory, or the root
	Directory { path: String },
	/// Print the minimal set of directories covering all paths
	Reduce { paths: Vec<String> },
	/// Print the extension of a file name
	Extension { name: String },
}

#[derive(Serialize)]
struct ClassifyReport<'a> {
	path: &'a str,
	format: PathFormat,
	root_length: isize,
	root: Option<&'a str>,
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let level = if cli.verbose {
		Level::DEBUG
	} else {
		Level::INFO
	};
	tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();

	let mut config = match &cli.config {
		Some(path) => PathRulesConfig::from_json_file(path)?,
		None => PathRulesConfig::default(),
	};
	debug!("Using path rules: {:?}", config);

	match cli.command {
		Command::Classify { paths } => {
			for path in &paths {
				let classification = classify(path);
				let report = ClassifyReport {
					path,
					format: classification.format,
					root_length: classification.root_length_or_sentinel(),
					root: classification.root(path),
				};
				println!("{}", serde_json::to_string(&report)?);
			}
		}
		Command::Extended { path, force } => {
			config.force_extended_prefix |= force;
			println!("{}", add_extended_prefix_with(&path, &config));
		}
		Command::Directory { path } => match directory_or_root(&path) {
			Some(directory) => println!("{directory}"),
			None => anyhow::bail!("cannot classify path: {path:?}"),
		},
		Command::Reduce { paths } => {
			for root in reduce(&paths) {
				println!("{root}");
			}
		}
		Command::Extension { name } => println!("{}", extension(&name)),
	}

	Ok(())
}
