use crate::config::Config;
use emit::{quote, Node, Syntax, Unit};

/// Include guard, includes, and the namespace wrapping `body`.
pub(super) fn skeleton(config: &Config, includes: &[&str], body: Vec<Node>) -> Unit {
    let mut unit = Unit::new(Syntax::Cpp);
    unit.push(Node::directive(format!("#ifndef {}", config.guard)))
        .push(Node::directive(format!("#define {}", config.guard)))
        .push(Node::Blank);
    for include in includes {
        unit.push(Node::directive(format!("#include <{}>", include)));
    }
    unit.push(Node::Blank)
        .push(Node::scope(format!("namespace {}", config.namespace), body))
        .push(Node::Blank)
        .push(Node::directive("#endif"));
    unit
}

/// C++ string literal spelling of a lookup key.
pub(super) fn key(alias: &str) -> String {
    quote(alias.as_bytes())
}
