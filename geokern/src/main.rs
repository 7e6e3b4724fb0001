mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Encode GeoJSON lines as polylines, or decode them
	Polyline(tools::polyline::Subcommand),

	/// Parse a GeoJSON file and summarize its content
	Check(tools::check::Subcommand),

	/// Read a GeoJSON file and write it out again
	Format(tools::format::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Polyline(arguments) => tools::polyline::run(arguments),
		Commands::Check(arguments) => tools::check::run(arguments),
		Commands::Format(arguments) => tools::format::run(arguments),
	}
}
