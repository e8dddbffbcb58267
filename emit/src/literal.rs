//! Escaping of raw bytes into C string literals.
//!
//! Printable ASCII is kept verbatim except `"`, `\` and `?` (trigraphs).
//! Every other byte becomes a three digit octal escape, which can never
//! absorb a following digit the way `\x` escapes do. GNU as accepts the
//! same escapes, so the output is valid in both syntaxes.

pub fn escape_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &byte in bytes {
        push_escaped(&mut out, byte);
    }
    out
}

/// `"..."` around the escaped bytes.
pub fn quote(bytes: &[u8]) -> String {
    format!("\"{}\"", escape_bytes(bytes))
}

/// Splits `bytes` into quoted literals of at most `width` input bytes,
/// also breaking after every newline. Adjacent literals are concatenated
/// by the compiler, so the pieces together spell out `bytes` exactly.
/// Always returns at least one literal.
pub fn chunks(bytes: &[u8], width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = vec![];
    let mut cur = String::new();
    let mut len = 0;
    for &byte in bytes {
        push_escaped(&mut cur, byte);
        len += 1;
        if byte == b'\n' || len == width {
            out.push(format!("\"{}\"", cur));
            cur.clear();
            len = 0;
        }
    }
    if len > 0 || out.is_empty() {
        out.push(format!("\"{}\"", cur));
    }
    out
}

fn push_escaped(out: &mut String, byte: u8) {
    match byte {
        b'"' => out.push_str("\\\""),
        b'\\' => out.push_str("\\\\"),
        b'?' => out.push_str("\\?"),
        b'\n' => out.push_str("\\n"),
        b'\t' => out.push_str("\\t"),
        b'\r' => out.push_str("\\r"),
        0x20..=0x7E => out.push(byte as char),
        _ => out.push_str(&format!("\\{:03o}", byte)),
    }
}
