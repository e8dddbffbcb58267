use crate::backend::Backend;
use crate::config::Config;
use crate::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Rendered text of the requested outputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Artifacts {
    pub assembly: Option<String>,
    pub header: Option<String>,
}

/// Renders every requested artifact. Nothing is written here, so a source
/// file that cannot be read aborts the run before any output exists.
pub fn generate(config: &Config, backend: &dyn Backend) -> Result<Artifacts, Error> {
    let assembly = match config.asm_output {
        Some(_) => Some(backend.assembly(config)?.render()),
        None => None,
    };
    let header = match config.header_output {
        Some(_) => Some(backend.header(config)?.render()),
        None => None,
    };
    Ok(Artifacts { assembly, header })
}

impl Artifacts {
    /// Writes each artifact to its output path and returns the paths written.
    pub fn write(&self, config: &Config) -> Result<Vec<PathBuf>, Error> {
        let mut written = vec![];
        let outputs = [
            (&config.asm_output, &self.assembly),
            (&config.header_output, &self.header),
        ];
        for (path, text) in outputs {
            if let (Some(path), Some(text)) = (path, text) {
                write_file(path, text.as_bytes())?;
                written.push(path.clone());
            }
        }
        Ok(written)
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    let mut file = File::create(path).map_err(|e| Error::Create(path.to_path_buf(), e))?;
    file.write_all(bytes)
        .map_err(|e| Error::Write(path.to_path_buf(), e))
}
