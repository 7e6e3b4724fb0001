use anyhow::{Context, Result};
use geokern_geometry::{BoundingBox, GeoFeature, GeoJson, GeoJsonType, Geometry, read_geojson, read_ndgeojson_iter};
use log::info;
use std::{
	fs::File,
	io::BufReader,
	path::{Path, PathBuf},
};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file to check
	#[arg(required = true)]
	input_file: PathBuf,

	/// read newline-delimited GeoJSON, one object per line
	#[arg(long, short)]
	lines: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	println!("{}", check_file(&arguments.input_file, arguments.lines)?);
	Ok(())
}

#[derive(Default)]
struct Summary {
	documents: usize,
	counts: [usize; GeoJsonType::ALL.len()],
	bbox: Option<BoundingBox>,
}

impl Summary {
	fn add_document(&mut self, document: &GeoJson) {
		self.documents += 1;
		if let Some(bbox) = document.compute_bbox() {
			self.bbox = Some(match &self.bbox {
				Some(current) => current.union(&bbox),
				None => bbox,
			});
		}

		match document {
			GeoJson::Geometry(geometry) => self.add_geometry(geometry),
			GeoJson::Feature(feature) => self.add_feature(feature),
			GeoJson::FeatureCollection(collection) => {
				self.counts[GeoJsonType::FeatureCollection as usize] += 1;
				for feature in collection.features() {
					self.add_feature(feature);
				}
			}
		}
	}

	fn add_feature(&mut self, feature: &GeoFeature) {
		self.counts[GeoJsonType::Feature as usize] += 1;
		if let Some(geometry) = feature.geometry() {
			self.add_geometry(geometry);
		}
	}

	fn add_geometry(&mut self, geometry: &Geometry) {
		self.counts[geometry.kind() as usize] += 1;
		if let Geometry::GeometryCollection(collection) = geometry {
			for child in collection.geometries() {
				self.add_geometry(child);
			}
		}
	}

	fn to_text(&self) -> Result<String> {
		let mut lines = vec![format!("documents: {}", self.documents)];
		for kind in GeoJsonType::ALL {
			let count = self.counts[kind as usize];
			if count > 0 {
				lines.push(format!("{kind}: {count}"));
			}
		}
		let bbox = match &self.bbox {
			Some(bbox) => bbox.to_json()?,
			None => String::from("none"),
		};
		lines.push(format!("bbox: {bbox}"));
		Ok(lines.join("\n"))
	}
}

fn check_file(input_file: &Path, lines: bool) -> Result<String> {
	info!("checking {input_file:?}");
	let file = File::open(input_file).with_context(|| format!("failed to open {input_file:?}"))?;

	let mut summary = Summary::default();
	if lines {
		for document in read_ndgeojson_iter(BufReader::new(file)) {
			summary.add_document(&document?);
		}
	} else {
		summary.add_document(&read_geojson(file)?);
	}

	info!("found {} valid documents", summary.documents);
	summary.to_text()
}
