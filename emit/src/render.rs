use crate::node::{Arm, Node, Syntax, Unit};
use std::fmt;

const INDENT: &str = "    ";

impl Unit {
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = Writer {
            f,
            syntax: self.syntax,
        };
        w.nodes(&self.nodes, 0)
    }
}

struct Writer<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    syntax: Syntax,
}

impl Writer<'_, '_> {
    fn nodes(&mut self, nodes: &[Node], depth: usize) -> fmt::Result {
        for node in nodes {
            self.node(node, depth)?;
        }
        Ok(())
    }

    fn node(&mut self, node: &Node, depth: usize) -> fmt::Result {
        match node {
            Node::Blank => writeln!(self.f),
            Node::Line(text) => self.indented(depth, text),
            Node::Comment(text) => {
                let leader = self.syntax.comment();
                self.indented(depth, &format!("{} {}", leader, text))
            }
            Node::Directive(text) => writeln!(self.f, "{}", text),
            Node::Label(name) => self.indented(depth, &format!("{}:", name)),
            Node::Indent(body) => self.nodes(body, depth + 1),
            Node::Scope { head, body } => {
                self.indented(depth, &format!("{} {{", head))?;
                self.nodes(body, depth + 1)?;
                self.indented(depth, "}")
            }
            Node::Chain { arms, fallback } => {
                self.chain(arms, depth)?;
                self.nodes(fallback, depth)
            }
        }
    }

    fn chain(&mut self, arms: &[Arm], depth: usize) -> fmt::Result {
        for (idx, arm) in arms.iter().enumerate() {
            if idx == 0 {
                self.indented(depth, &format!("if ({}) {{", arm.cond))?;
            } else {
                self.indented(depth, &format!("}} else if ({}) {{", arm.cond))?;
            }
            self.nodes(&arm.body, depth + 1)?;
        }
        if !arms.is_empty() {
            self.indented(depth, "}")?;
        }
        Ok(())
    }

    fn indented(&mut self, depth: usize, text: &str) -> fmt::Result {
        writeln!(self.f, "{}{}", INDENT.repeat(depth), text)
    }
}
