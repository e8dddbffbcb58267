use super::header::{key, skeleton};
use super::{Backend, Kind};
use crate::config::Config;
use crate::error::Error;
use crate::lookup::Lookup;
use crate::mangle::mangle;
use crate::resource::ResourceList;
use emit::{chunks, Node, Syntax, Unit};
use std::collections::HashSet;

/// Input bytes per literal piece.
const CHUNK: usize = 64;

/// Everything lives in one header: bytes as string literals and a
/// `constexpr` lookup, so no assembler pass or linker help is needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralEmbed;

/// An embedded resource: its symbol and the full file contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub symbol: String,
    pub bytes: Vec<u8>,
}

impl LiteralEmbed {
    pub fn lookup(resources: &ResourceList) -> Result<Lookup<Literal>, Error> {
        Lookup::build(resources, |entry| {
            let bytes =
                std::fs::read(&entry.path).map_err(|e| Error::Read(entry.path.clone(), e))?;
            Ok(Literal {
                symbol: mangle(&entry.alias),
                bytes,
            })
        })
    }

    /// `inline constexpr char _sym[] = "..." "...";` with one piece per line.
    /// A repeated alias is defined once, by its first declaration.
    fn definitions(lookup: &Lookup<Literal>) -> Vec<Node> {
        let mut seen = HashSet::new();
        let mut nodes = vec![];
        for case in lookup.cases() {
            if !seen.insert(case.alias.as_str()) {
                continue;
            }
            let literal = &case.value;
            let mut pieces: Vec<Node> = chunks(&literal.bytes, CHUNK)
                .into_iter()
                .map(Node::Line)
                .collect();
            if let Some(Node::Line(last)) = pieces.last_mut() {
                last.push(';');
            }
            nodes.push(Node::line(format!("inline constexpr char {}[] =", literal.symbol)));
            nodes.push(Node::Indent(pieces));
        }
        nodes
    }

    /// Byte-wise comparison; `std::strcmp` is not usable in constant evaluation.
    /// A null key matches nothing.
    fn equals() -> Node {
        Node::scope(
            "constexpr bool equals(const char* a, const char* b)",
            vec![
                Node::scope("if (a == nullptr || b == nullptr)", vec![Node::line("return false;")]),
                Node::scope(
                    "while (*a != '\\0' && *a == *b)",
                    vec![Node::line("++a;"), Node::line("++b;")],
                ),
                Node::line("return *a == *b;"),
            ],
        )
    }
}

impl Backend for LiteralEmbed {
    fn kind(&self) -> Kind {
        Kind::LiteralEmbed
    }

    fn assembly(&self, _config: &Config) -> Result<Unit, Error> {
        let mut unit = Unit::new(Syntax::Gas);
        unit.push(Node::comment(
            "literal-embed: resources are embedded in the header, nothing to assemble",
        ));
        Ok(unit)
    }

    fn header(&self, config: &Config) -> Result<Unit, Error> {
        let lookup = LiteralEmbed::lookup(&config.resources)?;
        let cond = |alias: &str| format!("equals(path, {})", key(alias));

        let open = lookup.chain(
            cond,
            |literal| vec![Node::line(format!("return literals::{};", literal.symbol))],
            vec![Node::line("return nullptr;")],
        );
        let size = lookup.chain(
            cond,
            |literal| {
                vec![Node::line(format!(
                    "return sizeof(literals::{}) - 1;",
                    literal.symbol
                ))]
            },
            vec![Node::line("return 0;")],
        );

        Ok(skeleton(
            config,
            &["cstddef"],
            vec![
                Node::scope("namespace literals", LiteralEmbed::definitions(&lookup)),
                Node::Blank,
                LiteralEmbed::equals(),
                Node::Blank,
                Node::scope("constexpr const char* open(const char* path)", vec![open]),
                Node::Blank,
                Node::scope("constexpr std::size_t size(const char* path)", vec![size]),
            ],
        ))
    }
}
