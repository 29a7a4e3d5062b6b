//! Source file expansion for a job's `src` entries.

use std::path::{Component, Path, PathBuf};

use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::core::extract::SourceKind;
use crate::error::{Error, Result};

/// Check if a pattern contains glob wildcards.
/// Patterns without wildcards are treated as literal file or directory paths.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?') || pattern.contains('[')
}

/// Result of expanding source entries.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Files to scan, in order of first appearance.
    pub files: Vec<PathBuf>,
    /// Literal entries that do not exist on disk.
    pub missing: Vec<PathBuf>,
}

impl ScanResult {
    fn push(&mut self, path: PathBuf) {
        if !self.files.contains(&path) {
            self.files.push(path);
        }
    }
}

/// Drop `.` components so `./a.html`, `a.html` and glob results compare equal.
fn clean_path(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

/// Join a pattern onto `base_dir`, escaping any glob metacharacters in the base.
fn rooted_pattern(base_dir: &Path, pattern: &str) -> String {
    let mut pattern = pattern;
    while let Some(rest) = pattern.strip_prefix("./") {
        pattern = rest;
    }

    let base = clean_path(base_dir);
    let base = base.to_string_lossy();
    if base.is_empty() {
        pattern.to_string()
    } else {
        format!("{}/{}", Pattern::escape(base.trim_end_matches('/')), pattern)
    }
}

fn compile(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|source| Error::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Expand `sources` relative to `base_dir`.
///
/// - `src/**/*.html`: glob, regular files only
/// - `!src/legacy/**`: drops files matched so far
/// - `src/views`: directory, walked for markup and script files
/// - `src/index.html`: literal file, reported as missing if absent
///
/// Returned paths never carry `.` components, whatever form `base_dir` and
/// the entries were given in.
pub fn scan_sources(base_dir: &Path, sources: &[String]) -> Result<ScanResult> {
    let mut result = ScanResult::default();

    for source in sources {
        if let Some(negated) = source.strip_prefix('!') {
            let pattern = compile(&rooted_pattern(base_dir, negated))?;
            result.files.retain(|f| !pattern.matches_path(f));
            continue;
        }

        let full = base_dir.join(source);

        if is_glob_pattern(source) {
            let pattern = rooted_pattern(base_dir, source);
            let entries = glob(&pattern).map_err(|source| Error::Pattern {
                pattern: pattern.clone(),
                source,
            })?;
            for entry in entries.flatten() {
                if entry.is_file() {
                    result.push(clean_path(&entry));
                }
            }
        } else if full.is_dir() {
            let mut walked: Vec<PathBuf> = WalkDir::new(&full)
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file())
                .map(|entry| clean_path(entry.path()))
                .filter(|path| SourceKind::is_scannable(path))
                .collect();
            walked.sort();
            for path in walked {
                result.push(path);
            }
        } else if full.is_file() {
            result.push(clean_path(&full));
        } else {
            result.missing.push(clean_path(&full));
        }
    }

    Ok(result)
}
