use crate::error::Error;
use crate::mangle::mangle;
use crate::resource::ResourceList;
use indexmap::IndexMap;

/// Rejects distinct aliases that mangle onto the same symbol. Returns the
/// aliases declared more than once, which are legal but shadowed.
pub fn check_symbols(resources: &ResourceList) -> Result<Vec<String>, Error> {
    let mut symbols: IndexMap<String, &str> = IndexMap::new();
    let mut repeated = vec![];
    for entry in resources {
        let symbol = mangle(&entry.alias);
        match symbols.get(&symbol) {
            None => {
                symbols.insert(symbol, &entry.alias);
            }
            Some(&first) if first == entry.alias => {
                if !repeated.contains(&entry.alias) {
                    repeated.push(entry.alias.clone());
                }
            }
            Some(&first) => {
                return Err(Error::SymbolCollision {
                    symbol,
                    first: first.to_string(),
                    second: entry.alias.clone(),
                });
            }
        }
    }
    Ok(repeated)
}
