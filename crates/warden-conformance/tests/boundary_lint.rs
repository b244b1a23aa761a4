//! Source lint: the kernel crates must not touch I/O, processes, networking,
//! threads, clocks, randomness, or dynamic execution.
//!
//! The lint itself reads files, which is exactly why it lives in the
//! conformance crate and not in the kernel.

use std::fs;
use std::path::{Path, PathBuf};

/// Crates covered by the boundary rule. The conformance crate is excluded:
/// its tests are allowed to read sources (this file) and generate data.
const KERNEL_CRATES: &[&str] = &[
    "warden-types",
    "warden-boundary",
    "warden-workflow",
    "warden-knowledge",
    "warden-triage",
    "warden-capability",
    "warden-evidence",
    "warden-decision",
    "warden-authority",
    "warden-dispatch",
    "warden-mirror",
];

/// Tokens that must not appear in kernel sources.
const FORBIDDEN: &[&str] = &[
    "std::fs",
    "std::net",
    "std::process",
    "std::thread",
    "std::time::SystemTime",
    "std::time::Instant",
    "tokio",
    "async_std",
    "reqwest",
    "hyper",
    "mio::",
    "rand::",
    "getrandom",
    "libloading",
    "Command::new",
    "Utc::now",
    "Local::now",
    "Instant::now",
    "SystemTime::now",
];

fn workspace_crates_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("conformance crate lives under crates/")
        .to_path_buf()
}

fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).expect("readable source dir") {
        let path = entry.expect("readable dir entry").path();
        if path.is_dir() {
            rust_sources(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            out.push(path);
        }
    }
}

#[test]
fn kernel_sources_contain_no_forbidden_primitives() {
    let crates_dir = workspace_crates_dir();
    let mut violations = Vec::new();

    for krate in KERNEL_CRATES {
        let src = crates_dir.join(krate).join("src");
        assert!(src.is_dir(), "missing sources for {krate}");

        let mut files = Vec::new();
        rust_sources(&src, &mut files);
        assert!(!files.is_empty(), "no sources found for {krate}");

        for file in files {
            let content = fs::read_to_string(&file).expect("readable source file");
            for token in FORBIDDEN {
                if content.contains(token) {
                    violations.push(format!("{}: {token}", file.display()));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "forbidden primitives in kernel sources:\n{}",
        violations.join("\n")
    );
}

#[test]
fn kernel_manifests_do_not_declare_io_dependencies() {
    let crates_dir = workspace_crates_dir();
    let forbidden_deps = [
        "tokio", "async-trait", "futures", "reqwest", "hyper", "axum", "sqlx", "rand",
        "getrandom", "uuid",
    ];

    for krate in KERNEL_CRATES {
        let manifest = crates_dir.join(krate).join("Cargo.toml");
        let content = fs::read_to_string(&manifest).expect("readable manifest");
        // Only the [dependencies] table matters; dev-dependencies may pull
        // test tooling.
        let deps_section = content
            .split("[dev-dependencies]")
            .next()
            .unwrap_or(&content);
        for dep in forbidden_deps {
            assert!(
                !deps_section
                    .lines()
                    .any(|l| l.trim_start().starts_with(&format!("{dep} "))
                        || l.trim_start().starts_with(&format!("{dep}="))),
                "{krate} declares forbidden dependency {dep}"
            );
        }
    }
}
