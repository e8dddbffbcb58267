mod blob;
mod header;
mod literal;

pub use blob::{Blob, LinkedBlob};
pub use literal::{Literal, LiteralEmbed};

use crate::config::Config;
use crate::error::Error;
use emit::Unit;
use serde::{Deserialize, Serialize};

/// A code emission strategy over the resource list.
pub trait Backend {
    fn kind(&self) -> Kind;

    /// Assembler unit. May stat source files but never reads them.
    fn assembly(&self, config: &Config) -> Result<Unit, Error>;

    /// Header exposing `open`.
    fn header(&self, config: &Config) -> Result<Unit, Error>;
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Kind {
    /// `.incbin` assembler unit + extern declarations
    LinkedBlob,
    /// Bytes as string literals in a self-contained header
    LiteralEmbed,
}

impl Kind {
    pub fn backend(&self) -> Box<dyn Backend> {
        match self {
            Kind::LinkedBlob => Box::new(LinkedBlob),
            Kind::LiteralEmbed => Box::new(LiteralEmbed),
        }
    }
}
