use super::header::{key, skeleton};
use super::{Backend, Kind};
use crate::config::Config;
use crate::error::Error;
use crate::lookup::Lookup;
use crate::mangle::mangle;
use crate::resource::{ResourceEntry, ResourceList};
use emit::{quote, Node, Syntax, Unit};

/// Bytes are pulled in by the assembler with `.incbin` and reach the header
/// only as `extern "C"` arrays resolved at link time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedBlob;

/// A linked resource as the header sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub symbol: String,
    /// File size when the header was generated. The assembler includes the
    /// file independently, so both must come from the same build step.
    pub size: u64,
}

impl LinkedBlob {
    pub fn lookup(resources: &ResourceList) -> Result<Lookup<Blob>, Error> {
        Lookup::build(resources, |entry| {
            let meta = std::fs::metadata(&entry.path)
                .map_err(|e| Error::Stat(entry.path.clone(), e))?;
            Ok(Blob {
                symbol: mangle(&entry.alias),
                size: meta.len(),
            })
        })
    }

    fn block(entry: &ResourceEntry) -> Vec<Node> {
        let symbol = mangle(&entry.alias);
        let path = entry.path.to_string_lossy();
        vec![
            Node::comment(&entry.alias),
            Node::Indent(vec![
                Node::line(format!(".global {}", symbol)),
                Node::line(".align 8"),
            ]),
            Node::label(&symbol),
            Node::Indent(vec![Node::line(format!(
                ".incbin {}",
                quote(path.as_bytes())
            ))]),
        ]
    }
}

impl Backend for LinkedBlob {
    fn kind(&self) -> Kind {
        Kind::LinkedBlob
    }

    fn assembly(&self, config: &Config) -> Result<Unit, Error> {
        let mut unit = Unit::new(Syntax::Gas);
        if !config.resources.is_empty() {
            unit.push(Node::Indent(vec![Node::line(".section .rodata")]));
        }
        for entry in config.resources.first_declared() {
            unit.extend(LinkedBlob::block(entry));
            unit.push(Node::Blank);
        }
        // Without this note the linker assumes an executable stack.
        unit.push(Node::Indent(vec![Node::line(
            ".section .note.GNU-stack,\"\",@progbits",
        )]));
        Ok(unit)
    }

    fn header(&self, config: &Config) -> Result<Unit, Error> {
        let lookup = LinkedBlob::lookup(&config.resources)?;

        let externals = config
            .resources
            .first_declared()
            .map(|entry| Node::line(format!("extern \"C\" const char {}[];", mangle(&entry.alias))))
            .collect();

        let open = lookup.chain(
            |alias| format!("path == {}", key(alias)),
            |blob| {
                vec![Node::line(format!(
                    "return std::string_view(externals::{}, {});",
                    blob.symbol, blob.size
                ))]
            },
            vec![Node::line("return std::string_view();")],
        );

        Ok(skeleton(
            config,
            &["string_view"],
            vec![
                Node::scope("namespace externals", externals),
                Node::Blank,
                Node::scope(
                    "constexpr std::string_view open(const std::string_view& path)",
                    vec![open],
                ),
            ],
        ))
    }
}
