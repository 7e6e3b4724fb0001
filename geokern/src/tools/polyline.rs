use super::read_file;
use anyhow::{Result, bail};
use geokern_geometry::{
	GeoJson, GeoJsonObject, Geometry, LineStringGeometry,
	polyline::{DEFAULT_PRECISION, encode, simplify},
};
use log::info;
use std::path::{Path, PathBuf};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	#[command(subcommand)]
	sub_command: PolylineCommands,
}

#[derive(clap::Subcommand, Debug)]
enum PolylineCommands {
	/// Encode a LineString, or a Feature holding one, as a polyline
	Encode {
		/// GeoJSON file containing the line
		#[arg(required = true)]
		input_file: PathBuf,

		/// number of decimal digits kept per ordinate
		#[arg(long, short, default_value_t = DEFAULT_PRECISION)]
		precision: u8,

		/// simplify the line before encoding, using this tolerance in degrees
		#[arg(long, value_name = "TOLERANCE")]
		simplify: Option<f64>,
	},

	/// Decode a polyline and print it as a GeoJSON LineString
	Decode {
		/// the encoded polyline
		#[arg(required = true)]
		polyline: String,

		/// number of decimal digits used when encoding
		#[arg(long, short, default_value_t = DEFAULT_PRECISION)]
		precision: u8,
	},
}

pub fn run(command: &Subcommand) -> Result<()> {
	let output = match &command.sub_command {
		PolylineCommands::Encode {
			input_file,
			precision,
			simplify,
		} => encode_file(input_file, *precision, *simplify)?,
		PolylineCommands::Decode { polyline, precision } => decode_polyline(polyline, *precision)?,
	};
	println!("{output}");
	Ok(())
}

fn find_line(document: GeoJson) -> Result<LineStringGeometry> {
	let geometry = match document {
		GeoJson::Geometry(geometry) => Some(geometry),
		GeoJson::Feature(feature) => feature.geometry().cloned(),
		GeoJson::FeatureCollection(_) => None,
	};
	match geometry {
		Some(Geometry::LineString(line)) => Ok(line),
		Some(other) => bail!("expected a LineString, found a {}", other.type_name()),
		None => bail!("expected a LineString or a Feature with a LineString geometry"),
	}
}

fn encode_file(input_file: &Path, precision: u8, tolerance: Option<f64>) -> Result<String> {
	info!("encoding {input_file:?} with precision {precision}");
	let line = find_line(GeoJson::from_json(&read_file(input_file)?)?)?;
	Ok(match tolerance {
		Some(tolerance) => {
			let points = simplify(line.coordinates(), tolerance, false);
			info!("simplified {} positions to {}", line.coordinates().len(), points.len());
			encode(&points, precision)?
		}
		None => line.to_polyline(precision)?,
	})
}

fn decode_polyline(polyline: &str, precision: u8) -> Result<String> {
	Ok(LineStringGeometry::from_polyline(polyline, precision)?.to_json()?)
}
