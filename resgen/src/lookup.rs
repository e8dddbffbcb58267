use crate::error::Error;
use crate::resource::{ResourceEntry, ResourceList};
use emit::{Arm, Node};

/// The dispatch table behind a generated `open`: one case per resource,
/// tested in declaration order, first match wins.
#[derive(Debug, Clone)]
pub struct Lookup<T> {
    cases: Vec<Case<T>>,
}

#[derive(Debug, Clone)]
pub struct Case<T> {
    pub alias: String,
    pub value: T,
}

impl<T: Clone> Lookup<T> {
    /// Resolves `f` once per distinct alias. A repeated alias shares the
    /// value of its first declaration, since its arm is unreachable.
    pub fn build<F>(list: &ResourceList, mut f: F) -> Result<Self, Error>
    where
        F: FnMut(&ResourceEntry) -> Result<T, Error>,
    {
        let mut cases: Vec<Case<T>> = Vec::with_capacity(list.len());
        for entry in list {
            let value = match cases.iter().find(|case| case.alias == entry.alias) {
                Some(first) => first.value.clone(),
                None => f(entry)?,
            };
            cases.push(Case {
                alias: entry.alias.clone(),
                value,
            });
        }
        Ok(Lookup { cases })
    }
}

impl<T> Lookup<T> {
    /// What the generated `open` resolves `key` to.
    pub fn find(&self, key: &str) -> Option<&T> {
        self.cases
            .iter()
            .find(|case| case.alias == key)
            .map(|case| &case.value)
    }

    pub fn cases(&self) -> &[Case<T>] {
        &self.cases
    }

    /// Every case becomes an arm, including ones shadowed by an earlier
    /// duplicate alias.
    pub fn chain<C, B>(&self, cond: C, body: B, fallback: Vec<Node>) -> Node
    where
        C: Fn(&str) -> String,
        B: Fn(&T) -> Vec<Node>,
    {
        Node::Chain {
            arms: self
                .cases
                .iter()
                .map(|case| Arm::new(cond(&case.alias), body(&case.value)))
                .collect(),
            fallback,
        }
    }
}
