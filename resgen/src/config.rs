use crate::backend::Kind;
use crate::resource::ResourceList;
use std::path::PathBuf;

pub const DEFAULT_NAMESPACE: &str = "resources";
pub const DEFAULT_GUARD: &str = "_RESOURCES_H";

/// Everything one generator run needs. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct Config {
    pub resources: ResourceList,
    pub asm_output: Option<PathBuf>,
    pub header_output: Option<PathBuf>,
    pub backend: Kind,
    pub namespace: String,
    pub guard: String,
    pub strict: bool,
}

impl Config {
    pub fn new(resources: ResourceList) -> Self {
        Config {
            resources,
            asm_output: None,
            header_output: None,
            backend: Kind::LinkedBlob,
            namespace: DEFAULT_NAMESPACE.to_string(),
            guard: DEFAULT_GUARD.to_string(),
            strict: false,
        }
    }
}
