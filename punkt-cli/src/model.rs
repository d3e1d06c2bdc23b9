//! Reading and writing model files

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use punkt_core::Parameters;

use crate::error::CliError;

/// Load trained parameters from a JSON model file
pub fn load(path: &Path) -> Result<Parameters> {
    let file = File::open(path)
        .map_err(|_| CliError::FileNotFound(path.display().to_string()))?;
    Parameters::from_reader(BufReader::new(file))
        .map_err(|e| CliError::ModelError(format!("{}: {e}", path.display())).into())
}

/// Load `path` if given, empty parameters otherwise
pub fn load_or_untrained(path: Option<&Path>) -> Result<Parameters> {
    match path {
        Some(path) => load(path),
        None => {
            log::info!("No model given, splitting on punctuation only");
            Ok(Parameters::new())
        }
    }
}

/// Write parameters as a pretty-printed JSON model file
pub fn save(params: &Parameters, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create model file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    params
        .to_writer(&mut writer)
        .map_err(|e| CliError::ModelError(format!("{}: {e}", path.display())))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
