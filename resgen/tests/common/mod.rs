#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Reverses C string literal escaping (content between the quotes).
pub fn unescape(text: &str) -> Vec<u8> {
    let bytes = text.as_bytes();
    let mut out = vec![];
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx] != b'\\' {
            out.push(bytes[idx]);
            idx += 1;
            continue;
        }
        match bytes[idx + 1] {
            b'n' => out.push(b'\n'),
            b't' => out.push(b'\t'),
            b'r' => out.push(b'\r'),
            b'0'..=b'7' => {
                let digits = std::str::from_utf8(&bytes[idx + 1..idx + 4]).unwrap();
                out.push(u8::from_str_radix(digits, 8).unwrap());
                idx += 4;
                continue;
            }
            other => out.push(other),
        }
        idx += 2;
    }
    out
}

/// Content of the quoted literal in `line`.
fn quoted(line: &str) -> &str {
    let start = line.find('"').unwrap();
    let end = line.rfind('"').unwrap();
    &line[start + 1..end]
}

/// `(key, return statement)` of every if/else-if arm, in order.
fn arms(header: &str) -> Vec<(Vec<u8>, String)> {
    let lines: Vec<&str> = header.lines().map(str::trim).collect();
    let mut arms = vec![];
    for (idx, line) in lines.iter().enumerate() {
        if line.starts_with("if (") || line.starts_with("} else if (") {
            arms.push((unescape(quoted(line)), lines[idx + 1].to_string()));
        }
    }
    arms
}

/// What the linked-blob `open` returns for `key`: resolves the matching
/// extern symbol through the assembler unit's `.incbin` and applies the
/// length recorded in the header.
pub fn blob_open(header: &str, asm: &str, key: &str) -> Option<Vec<u8>> {
    let ret = arms(header)
        .into_iter()
        .find(|(k, _)| k == key.as_bytes())
        .map(|(_, ret)| ret)?;
    let args = ret
        .strip_prefix("return std::string_view(externals::")
        .and_then(|s| s.strip_suffix(");"))
        .unwrap();
    let (symbol, size) = args.split_once(", ").unwrap();
    let size: usize = size.parse().unwrap();

    let path = incbin(asm, symbol).expect("symbol defined in assembly");
    let bytes = std::fs::read(path).unwrap();
    Some(bytes[..size].to_vec())
}

/// Path the assembler unit includes for `symbol`.
pub fn incbin(asm: &str, symbol: &str) -> Option<PathBuf> {
    let lines: Vec<&str> = asm.lines().map(str::trim).collect();
    let label = format!("{}:", symbol);
    let idx = lines.iter().position(|l| *l == label)?;
    let path = unescape(quoted(lines[idx + 1]));
    Some(PathBuf::from(String::from_utf8(path).unwrap()))
}

/// What the literal-embed `open`/`size` pair returns for `key`.
pub fn literal_open(header: &str, key: &str) -> Option<Vec<u8>> {
    let symbol = arms(header)
        .into_iter()
        .filter(|(k, _)| k == key.as_bytes())
        .find_map(|(_, ret)| {
            ret.strip_prefix("return literals::")
                .and_then(|s| s.strip_suffix(';'))
                .map(str::to_string)
        })?;

    let lines: Vec<&str> = header.lines().map(str::trim).collect();
    let decl = format!("inline constexpr char {}[] =", symbol);
    let start = lines.iter().position(|l| *l == decl).unwrap();
    let mut bytes = vec![];
    for line in &lines[start + 1..] {
        bytes.extend(unescape(quoted(line)));
        if line.ends_with(';') {
            break;
        }
    }
    Some(bytes)
}

/// Braces balance outside of string and character literals.
pub fn balanced(text: &str) -> bool {
    let mut depth: i64 = 0;
    let mut quote: Option<char> = None;
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(_), '\\') => {
                chars.next();
            }
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"') | (None, '\'') => quote = Some(c),
            (None, '{') => depth += 1,
            (None, '}') => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0 && quote.is_none()
}

pub fn write(dir: &Path, rel: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, bytes).unwrap();
    path
}

/// A small PNG-like binary with NUL bytes and every byte value.
pub fn binary_blob() -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];
    bytes.extend(0..=255u8);
    bytes.extend([0u8; 7]);
    bytes.extend(b"\"quoted\" \\ ??= {braces}\n".iter());
    bytes
}
