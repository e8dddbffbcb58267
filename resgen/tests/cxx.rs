//! Builds the generated artifacts with the host C++ toolchain and runs the
//! generated lookup code. Skipped when no compiler is on PATH.
#![cfg(target_os = "linux")]

mod common;

use common::{binary_blob, write};
use resgen::{generate, Config, Kind, ResourceEntry, ResourceList};
use std::path::{Path, PathBuf};
use std::process::Command;

fn compiler() -> Option<&'static str> {
    ["c++", "g++", "clang++"].into_iter().find(|cxx| {
        Command::new(cxx)
            .arg("--version")
            .output()
            .map(|out| out.status.success())
            .unwrap_or(false)
    })
}

fn emit(dir: &Path, kind: Kind, resources: ResourceList) {
    let mut config = Config::new(resources);
    config.backend = kind;
    config.asm_output = Some(dir.join("resources.s"));
    config.header_output = Some(dir.join("resources.h"));
    generate(&config, kind.backend().as_ref())
        .unwrap()
        .write(&config)
        .unwrap();
}

fn build(cxx: &str, dir: &Path, sources: &[&str]) -> PathBuf {
    let exe = dir.join("main");
    let out = Command::new(cxx)
        .current_dir(dir)
        .args(["-std=c++17", "-o"])
        .arg(&exe)
        .args(sources)
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    exe
}

fn run(exe: &Path, key: &str) -> Option<Vec<u8>> {
    let out = Command::new(exe).arg(key).output().unwrap();
    match out.status.code() {
        Some(0) => Some(out.stdout),
        Some(2) => None,
        other => panic!("{:?}: {}", other, String::from_utf8_lossy(&out.stderr)),
    }
}

fn resources(dir: &Path) -> (ResourceList, Vec<(&'static str, Vec<u8>)>) {
    let files = vec![
        ("logo", binary_blob()),
        ("docs/readme", b"# readme\nhello\n".to_vec()),
        ("empty", vec![]),
    ];
    let mut list: ResourceList = files
        .iter()
        .map(|(alias, bytes)| ResourceEntry::new(write(dir, &format!("src/{}.bin", alias), bytes), *alias))
        .collect();
    list.push(ResourceEntry::new(write(dir, "src/shadow.bin", b"shadowed"), "logo"));
    (list, files)
}

#[test]
fn literal_header_evaluates_at_compile_time() {
    let Some(cxx) = compiler() else {
        eprintln!("no C++ compiler, skipping");
        return;
    };
    let dir = tempfile::tempdir().unwrap();
    let (list, files) = resources(dir.path());
    emit(dir.path(), Kind::LiteralEmbed, list);

    let logo = files[0].1.len();
    let main = format!(
        r#"#include "resources.h"
#include <cstdio>

static_assert(resources::open("nope") == nullptr);
static_assert(resources::open("") == nullptr);
static_assert(resources::open("log") == nullptr);
static_assert(resources::open("logos") == nullptr);
static_assert(resources::open(nullptr) == nullptr);
static_assert(resources::open("logo") != nullptr);
static_assert(resources::size("logo") == {logo});
static_assert(resources::size("docs/readme") == 15);
static_assert(resources::size("empty") == 0);
static_assert(resources::size("log") == 0);

int main(int argc, char** argv) {{
    const char* data = resources::open(argv[1]);
    if (data == nullptr) {{
        return 2;
    }}
    std::fwrite(data, 1, resources::size(argv[1]), stdout);
    return 0;
}}
"#
    );
    write(dir.path(), "main.cpp", main.as_bytes());
    let exe = build(cxx, dir.path(), &["main.cpp"]);

    for (alias, bytes) in &files {
        assert_eq!(run(&exe, alias).as_ref(), Some(bytes), "{}", alias);
    }
    assert!(run(&exe, "log").is_none());
    assert!(run(&exe, "docs").is_none());
}

#[test]
fn linked_blob_resolves_at_link_time() {
    let Some(cxx) = compiler() else {
        eprintln!("no C++ compiler, skipping");
        return;
    };
    let dir = tempfile::tempdir().unwrap();
    let (list, files) = resources(dir.path());
    emit(dir.path(), Kind::LinkedBlob, list);

    let main = r#"#include "resources.h"
#include <cstdio>

static_assert(resources::open("nope").empty());

int main(int argc, char** argv) {
    std::string_view data = resources::open(argv[1]);
    if (data.data() == nullptr) {
        return 2;
    }
    std::fwrite(data.data(), 1, data.size(), stdout);
    return 0;
}
"#;
    write(dir.path(), "main.cpp", main.as_bytes());
    let exe = build(cxx, dir.path(), &["main.cpp", "resources.s"]);

    for (alias, bytes) in &files {
        assert_eq!(run(&exe, alias).as_ref(), Some(bytes), "{}", alias);
    }
    assert!(run(&exe, "log").is_none());
    assert!(run(&exe, "").is_none());
}
