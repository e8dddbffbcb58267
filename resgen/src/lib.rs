pub mod backend;
mod cli;
mod config;
mod dump;
mod emitter;
mod error;
mod lookup;
mod mangle;
mod manifest;
mod msg;
mod resource;
mod strict;

pub use backend::{Backend, Kind};
pub use cli::Args;
pub use config::Config;
pub use dump::print_dump;
pub use emitter::{generate, Artifacts};
pub use error::Error;
pub use lookup::{Case, Lookup};
pub use mangle::mangle;
pub use manifest::Manifest;
pub use msg::{Msg, Report};
pub use resource::{ResourceEntry, ResourceList};
pub use strict::check_symbols;
