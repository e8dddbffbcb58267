use crate::backend::Kind;
use crate::error::Error;
use crate::resource::ResourceList;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// YAML resource manifest. Relative resource paths are resolved against the
/// directory the manifest lives in.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub guard: Option<String>,
    #[serde(default)]
    pub backend: Option<Kind>,
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub resources: ResourceList,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let file = File::open(path).map_err(|e| Error::ManifestOpen(path.to_path_buf(), e))?;
        let mut manifest: Manifest = serde_yaml::from_reader(BufReader::new(file))
            .map_err(|e| Error::Manifest(path.to_path_buf(), e))?;
        let base = path.parent().unwrap_or(Path::new(""));
        manifest.resources = std::mem::take(&mut manifest.resources).rebase(base);
        Ok(manifest)
    }

    pub fn parse(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}
