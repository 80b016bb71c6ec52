#![forbid(unsafe_code)]

//! Snapshot testing for boxtree output.
//!
//! Compares rendered trees against stored `.snap` files and shows a line
//! diff on mismatch.
//!
//! # Quick Start
//!
//! ```ignore
//! use boxtree_harness::assert_text_snapshot;
//!
//! #[test]
//! fn expression_tree() {
//!     let out = printer.render(&tree);
//!     assert_text_snapshot!("expression_tree", &out);
//! }
//! ```
//!
//! # Updating Snapshots
//!
//! Run tests with `BLESS=1` to create or update snapshot files:
//!
//! ```sh
//! BLESS=1 cargo test -p boxtree-harness
//! ```
//!
//! Snapshot files are stored under `tests/snapshots/` relative to the
//! crate's `CARGO_MANIFEST_DIR`.

pub mod sample;

use std::fmt::Write as FmtWrite;
use std::path::{Path, PathBuf};

// ============================================================================
// ANSI
// ============================================================================

/// Remove SGR escapes, leaving only the visible text.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    boxtree_style::ansi::strip_sgr(text)
}

// ============================================================================
// Match Modes & Normalization
// ============================================================================

/// Comparison mode for snapshot testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Byte-exact string comparison.
    Exact,
    /// Trim trailing whitespace on each line before comparing.
    TrimTrailing,
    /// Collapse all whitespace runs to single spaces and trim each line.
    Fuzzy,
}

fn normalize(text: &str, mode: MatchMode) -> String {
    match mode {
        MatchMode::Exact => text.to_string(),
        MatchMode::TrimTrailing => text
            .lines()
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n"),
        MatchMode::Fuzzy => text
            .lines()
            .map(|l| l.split_whitespace().collect::<Vec<_>>().join(" "))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

// ============================================================================
// Diff
// ============================================================================

/// Line-by-line diff of two texts.
///
/// Lines prefixed with ` ` match, `-` appear only in `expected`, `+` only in
/// `actual`. Returns an empty string when the inputs are identical.
#[must_use]
pub fn diff_text(expected: &str, actual: &str) -> String {
    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();

    let mut out = String::new();
    let mut has_diff = false;

    for i in 0..expected_lines.len().max(actual_lines.len()) {
        // Writing to a String cannot fail.
        let _ = match (expected_lines.get(i), actual_lines.get(i)) {
            (Some(e), Some(a)) if e == a => writeln!(out, " {e}"),
            (Some(e), Some(a)) => {
                has_diff = true;
                writeln!(out, "-{e}\n+{a}")
            }
            (Some(e), None) => {
                has_diff = true;
                writeln!(out, "-{e}")
            }
            (None, Some(a)) => {
                has_diff = true;
                writeln!(out, "+{a}")
            }
            (None, None) => Ok(()),
        };
    }

    if has_diff { out } else { String::new() }
}

// ============================================================================
// Snapshot Assertion
// ============================================================================

fn snapshot_path(base_dir: &Path, name: &str, extension: &str) -> PathBuf {
    base_dir
        .join("tests")
        .join("snapshots")
        .join(format!("{name}.{extension}"))
}

fn is_bless() -> bool {
    std::env::var("BLESS").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

fn bless(path: &Path, actual: &str) {
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            panic!("failed to create {}: {e}", parent.display());
        }
    }
    if let Err(e) = std::fs::write(path, actual) {
        panic!("failed to write snapshot {}: {e}", path.display());
    }
}

fn compare(name: &str, path: &Path, actual: &str, mode: MatchMode) {
    if is_bless() {
        bless(path, actual);
        return;
    }

    match std::fs::read_to_string(path) {
        Ok(expected) => {
            let norm_expected = normalize(&expected, mode);
            let norm_actual = normalize(actual, mode);
            if norm_expected != norm_actual {
                let diff = diff_text(&norm_expected, &norm_actual);
                panic!(
                    "\n\
                     === Snapshot mismatch: '{name}' ===\n\
                     File: {}\n\
                     Mode: {mode:?}\n\
                     Set BLESS=1 to update.\n\n\
                     Diff (- expected, + actual):\n{diff}",
                    path.display()
                );
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            panic!(
                "\n\
                 === No snapshot found: '{name}' ===\n\
                 Expected at: {}\n\
                 Run with BLESS=1 to create it.\n\n\
                 Actual output:\n{actual}",
                path.display(),
            );
        }
        Err(e) => panic!("Failed to read snapshot '{}': {e}", path.display()),
    }
}

/// Assert that rendered text matches `tests/snapshots/{name}.snap`.
///
/// ANSI escapes are stripped before comparing.
///
/// # Panics
///
/// * If the snapshot file does not exist and `BLESS=1` is **not** set.
/// * If the text does not match the stored snapshot under `mode`.
pub fn assert_text_snapshot(name: &str, actual: &str, base_dir: &str, mode: MatchMode) {
    let path = snapshot_path(Path::new(base_dir), name, "snap");
    compare(name, &path, &strip_ansi(actual), mode);
}

/// Assert that rendered text, escapes included, matches
/// `tests/snapshots/{name}.ansi.snap` byte for byte.
///
/// # Panics
///
/// Same conditions as [`assert_text_snapshot`].
pub fn assert_ansi_snapshot(name: &str, actual: &str, base_dir: &str) {
    let path = snapshot_path(Path::new(base_dir), name, "ansi.snap");
    compare(name, &path, actual, MatchMode::Exact);
}

// ============================================================================
// Convenience Macros
// ============================================================================

/// Assert that rendered text matches a stored snapshot.
///
/// Uses `CARGO_MANIFEST_DIR` to locate the snapshot directory.
///
/// ```ignore
/// // Default mode: Exact
/// assert_text_snapshot!("leaf", &out);
///
/// assert_text_snapshot!("leaf", &out, MatchMode::TrimTrailing);
/// ```
#[macro_export]
macro_rules! assert_text_snapshot {
    ($name:expr, $text:expr) => {
        $crate::assert_text_snapshot(
            $name,
            $text,
            env!("CARGO_MANIFEST_DIR"),
            $crate::MatchMode::Exact,
        )
    };
    ($name:expr, $text:expr, $mode:expr) => {
        $crate::assert_text_snapshot($name, $text, env!("CARGO_MANIFEST_DIR"), $mode)
    };
}

/// Assert that rendered text matches a stored ANSI snapshot.
#[macro_export]
macro_rules! assert_ansi_snapshot {
    ($name:expr, $text:expr) => {
        $crate::assert_ansi_snapshot($name, $text, env!("CARGO_MANIFEST_DIR"))
    };
}
