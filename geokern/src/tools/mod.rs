pub mod check;
pub mod format;
pub mod polyline;

use anyhow::{Context, Result};
use std::{fs, path::Path};

pub(crate) fn read_file(path: &Path) -> Result<String> {
	fs::read_to_string(path).with_context(|| format!("failed to read {path:?}"))
}
