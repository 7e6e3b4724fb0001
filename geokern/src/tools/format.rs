use super::read_file;
use anyhow::{Context, Result};
use geokern_geometry::{CoordinateShifter, GeoJsonCodec, IdentityShifter, PrecisionShifter};
use log::{debug, info};
use std::{fs, path::PathBuf, sync::Arc};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file to read
	#[arg(required = true)]
	input_file: PathBuf,

	/// write to this file instead of stdout
	#[arg(long, short)]
	output: Option<PathBuf>,

	/// indent the output
	#[arg(long, short)]
	pretty: bool,

	/// round every ordinate to this number of decimal digits
	#[arg(long, value_name = "DIGITS")]
	quantize: Option<u8>,

	/// read and write newline-delimited GeoJSON, one object per line
	#[arg(long, short, conflicts_with = "pretty")]
	lines: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let output = format_file(arguments)?;
	match &arguments.output {
		Some(path) => {
			info!("writing {path:?}");
			fs::write(path, output).with_context(|| format!("failed to write {path:?}"))?;
		}
		None => print!("{output}"),
	}
	Ok(())
}

fn codec(arguments: &Subcommand) -> GeoJsonCodec {
	let shifter: Arc<dyn CoordinateShifter> = match arguments.quantize {
		Some(digits) => Arc::new(PrecisionShifter::new(digits)),
		None => Arc::new(IdentityShifter),
	};
	debug!("using {shifter:?}");
	GeoJsonCodec::new(shifter).with_pretty(arguments.pretty)
}

fn format_file(arguments: &Subcommand) -> Result<String> {
	let input = read_file(&arguments.input_file)?;
	let codec = codec(arguments);

	let mut output = String::new();
	if arguments.lines {
		for document in codec.clone().read_lines(input.as_bytes()) {
			output.push_str(&codec.write_string(&document?)?);
			output.push('\n');
		}
	} else {
		let document = codec
			.read_str(&input)
			.with_context(|| format!("failed to parse {:?}", arguments.input_file))?;
		output.push_str(&codec.write_string(&document)?);
		output.push('\n');
	}
	Ok(output)
}
