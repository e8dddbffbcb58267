/// Target language of a rendered unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// C / C++ source or header
    Cpp,
    /// GNU assembler
    Gas,
}

impl Syntax {
    pub fn comment(&self) -> &'static str {
        match self {
            Syntax::Cpp => "//",
            Syntax::Gas => "#",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Blank,
    /// Statement or declaration at the current indent
    Line(String),
    Comment(String),
    /// Always at column 0 (`#ifndef`, `#include`, ...)
    Directive(String),
    /// `name:` at the current indent
    Label(String),
    Indent(Vec<Node>),
    /// `head {` body `}`
    Scope { head: String, body: Vec<Node> },
    /// `if (c) { .. } else if (c) { .. }` followed by the fallback
    Chain { arms: Vec<Arm>, fallback: Vec<Node> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arm {
    pub cond: String,
    pub body: Vec<Node>,
}

impl Node {
    pub fn line(text: impl Into<String>) -> Self {
        Node::Line(text.into())
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Node::Comment(text.into())
    }

    pub fn directive(text: impl Into<String>) -> Self {
        Node::Directive(text.into())
    }

    pub fn label(name: impl Into<String>) -> Self {
        Node::Label(name.into())
    }

    pub fn scope(head: impl Into<String>, body: Vec<Node>) -> Self {
        Node::Scope {
            head: head.into(),
            body,
        }
    }
}

impl Arm {
    pub fn new(cond: impl Into<String>, body: Vec<Node>) -> Self {
        Arm {
            cond: cond.into(),
            body,
        }
    }
}

/// One generated file: a node sequence and the syntax it is rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub(crate) syntax: Syntax,
    pub(crate) nodes: Vec<Node>,
}

impl Unit {
    pub fn new(syntax: Syntax) -> Self {
        Unit {
            syntax,
            nodes: vec![],
        }
    }

    pub fn push(&mut self, node: Node) -> &mut Self {
        self.nodes.push(node);
        self
    }

    pub fn extend(&mut self, nodes: impl IntoIterator<Item = Node>) -> &mut Self {
        self.nodes.extend(nodes);
        self
    }
}
