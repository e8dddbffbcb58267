/// Maps an alias onto the symbol both the header and the assembler unit use.
///
/// Every `/` and `.` becomes `_` and a leading `_` is prepended, so aliases
/// like `3d/cube.obj` still yield a valid identifier (`_3d_cube_obj`).
/// Aliases that differ only in `/` vs `.` map to the same symbol.
pub fn mangle(alias: &str) -> String {
    let mut symbol = String::with_capacity(alias.len() + 1);
    symbol.push('_');
    symbol.extend(alias.chars().map(|c| match c {
        '/' | '.' => '_',
        c => c,
    }));
    symbol
}
