use crate::backend::Kind;
use crate::config::{Config, DEFAULT_GUARD, DEFAULT_NAMESPACE};
use crate::error::Error;
use crate::manifest::Manifest;
use crate::resource::ResourceList;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
pub struct Args {
    /// Output generated assembly file
    #[clap(short = 's', long, value_name = "FILE")]
    pub asm_output: Option<PathBuf>,

    /// Output generated header file
    #[clap(short = 'i', long, value_name = "FILE")]
    pub header_output: Option<PathBuf>,

    /// Add a file to the resources
    #[clap(
        short = 'f',
        long = "file",
        num_args = 2,
        value_names = ["PATH", "ALIAS"],
        action = clap::ArgAction::Append
    )]
    pub resources: Vec<String>,

    /// Code emission strategy [default: linked-blob]
    #[clap(short, long, value_enum)]
    pub backend: Option<Kind>,

    /// Namespace of the generated header [default: resources]
    #[clap(short, long)]
    pub namespace: Option<String>,

    /// Include guard of the generated header [default: _RESOURCES_H]
    #[clap(short, long)]
    pub guard: Option<String>,

    /// YAML manifest listing resources ahead of any `--file`
    #[clap(short, long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Reject aliases that mangle to the same symbol
    #[clap(long)]
    pub strict: bool,

    /// Dump resource table
    #[clap(short, long)]
    pub dump: bool,

    /// Suppress progress output
    #[clap(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Merges the manifest (if any) and the command line into one config.
    /// Command-line values win; manifest resources come first.
    pub fn config(&self) -> Result<Config, Error> {
        let manifest = match &self.manifest {
            Some(path) => Manifest::load(path)?,
            None => Manifest::default(),
        };

        let mut resources = manifest.resources;
        resources.append(ResourceList::from_flat(self.resources.as_slice())?);

        Ok(Config {
            resources,
            asm_output: self.asm_output.clone(),
            header_output: self.header_output.clone(),
            backend: self.backend.or(manifest.backend).unwrap_or(Kind::LinkedBlob),
            namespace: self
                .namespace
                .clone()
                .or(manifest.namespace)
                .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
            guard: self
                .guard
                .clone()
                .or(manifest.guard)
                .unwrap_or_else(|| DEFAULT_GUARD.to_string()),
            strict: self.strict || manifest.strict,
        })
    }
}
