use color_print::{ceprintln, cprintln};
use std::path::Path;

#[derive(Debug)]
pub enum Msg {
    Error(String),
    Warn(String),
    Note(String),
}

impl Msg {
    pub fn print(&self) {
        match self {
            Msg::Error(msg) => ceprintln!("<red,bold>error</>: {}", msg),
            Msg::Warn(msg) => ceprintln!("<yellow,bold>warn</>: {}", msg),
            Msg::Note(msg) => ceprintln!("<green,bold>note</>: {}", msg),
        }
    }
}

/// Progress output of a generator run. Silent when `quiet`.
#[derive(Debug, Clone, Copy)]
pub struct Report {
    quiet: bool,
}

impl Report {
    pub fn new(quiet: bool) -> Self {
        Report { quiet }
    }

    pub fn banner(&self) {
        if !self.quiet {
            println!("Resource Generator by kanade-k-1228");
        }
    }

    pub fn step(&self, idx: usize, title: &str) {
        if !self.quiet {
            println!("{}. {}", idx, title);
        }
    }

    pub fn input(&self, path: &Path, alias: &str) {
        if !self.quiet {
            cprintln!("  << {} <dim>as</> <g>{}</>", path.display(), alias);
        }
    }

    pub fn output(&self, path: &Path) {
        if !self.quiet {
            println!("  > {}", path.display());
        }
    }

    pub fn note(&self, text: &str) {
        if !self.quiet {
            println!("  * {}", text);
        }
    }
}
