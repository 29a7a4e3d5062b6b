//! Job pipeline: extraction → normalization → reconciliation → generation.
//!
//! Each job is computed entirely in memory and only written once every
//! artifact has rendered, so a failing job leaves its destination untouched.
//! Jobs share nothing and run in parallel.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use rayon::prelude::*;

use crate::core::{
    catalog::discover,
    extract::{KeyExtractor, SourceKind},
    file_scanner::scan_sources,
    generate::{Action, MockResources, OutputFile, render},
    normalize::{CanonicalKeySet, namespace_of, normalize},
    reconcile::reconcile,
};
use crate::error::{Error, Result};

/// Options after defaults, task-level and job-level options are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// Kept as text so an unknown action fails only its own job.
    pub action: String,
    pub translation_file: Option<PathBuf>,
    pub namespaces: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub name: String,
    /// Directory `sources` are relative to.
    pub base_dir: PathBuf,
    pub sources: Vec<String>,
    /// Output file, or output directory for `gen_prop_list`.
    pub dest: PathBuf,
    pub options: ResolvedOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobWarning {
    MissingSource(PathBuf),
    DroppedCatalogLine { file: PathBuf, line: usize },
    DuplicateLocale { locale: String, file: PathBuf },
    UndeclaredNamespace { key: String },
}

impl JobWarning {
    /// Diagnostics that are only shown in verbose mode.
    pub fn is_verbose_only(&self) -> bool {
        matches!(self, JobWarning::DroppedCatalogLine { .. })
    }
}

impl fmt::Display for JobWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobWarning::MissingSource(path) => {
                write!(f, "Source file \"{}\" not found.", path.display())
            }
            JobWarning::DroppedCatalogLine { file, line } => write!(
                f,
                "{}:{}: ignored line (expected exactly one '=')",
                file.display(),
                line
            ),
            JobWarning::DuplicateLocale { locale, file } => write!(
                f,
                "locale \"{}\" defined by several files, using \"{}\"",
                locale,
                file.display()
            ),
            JobWarning::UndeclaredNamespace { key } => {
                write!(f, "key \"{}\" uses an undeclared namespace", key)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobReport {
    pub name: String,
    pub keys: usize,
    pub written: Vec<PathBuf>,
    pub warnings: Vec<JobWarning>,
}

/// Everything a job will write, before it is written.
#[derive(Debug)]
pub struct RenderedJob {
    pub keys: CanonicalKeySet,
    pub outputs: Vec<OutputFile>,
    pub warnings: Vec<JobWarning>,
}

/// Extract and normalize the keys of every readable source.
pub fn collect_keys(job: &Job, warnings: &mut Vec<JobWarning>) -> Result<CanonicalKeySet> {
    let scan = scan_sources(&job.base_dir, &job.sources)?;
    warnings.extend(scan.missing.into_iter().map(JobWarning::MissingSource));

    let extractor = KeyExtractor::new(&job.options.namespaces);
    let mut tokens = Vec::new();
    for path in &scan.files {
        // Templates are often Latin-1; undecodable bytes become U+FFFD.
        let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
        let text = String::from_utf8_lossy(&bytes);
        let keys = extractor
            .extract(&text, SourceKind::from_path(path))
            .map_err(|e| e.in_file(path))?;
        tokens.extend(keys);
    }

    let keys = normalize(tokens);

    if !job.options.namespaces.is_empty() {
        for key in keys.iter() {
            if let Some(ns) = namespace_of(key)
                && !job.options.namespaces.iter().any(|declared| declared == ns)
            {
                warnings.push(JobWarning::UndeclaredNamespace {
                    key: key.to_string(),
                });
            }
        }
    }

    Ok(keys)
}

/// Run every stage except writing.
pub fn render_job(job: &Job) -> Result<RenderedJob> {
    let action: Action = job.options.action.parse()?;
    let mut warnings = Vec::new();
    let keys = collect_keys(job, &mut warnings)?;

    let outputs = match action {
        Action::GenPropList => {
            let stem = job
                .options
                .translation_file
                .as_ref()
                .ok_or(Error::MissingOption {
                    option: "translationFile",
                })?;
            let family = discover(stem)?;

            for file in &family.files {
                warnings.extend(file.dropped_lines.iter().map(|&line| {
                    JobWarning::DroppedCatalogLine {
                        file: file.path.clone(),
                        line,
                    }
                }));
            }
            warnings.extend(family.duplicate_locales.iter().map(|(locale, file)| {
                JobWarning::DuplicateLocale {
                    locale: locale.clone(),
                    file: file.clone(),
                }
            }));

            let report = reconcile(&keys, &family);
            MockResources::generate(&keys, &report, &family, &job.dest)?
        }
        action => vec![OutputFile::new(job.dest.clone(), render(action, &keys)?)],
    };

    Ok(RenderedJob {
        keys,
        outputs,
        warnings,
    })
}

/// Hidden sibling an output is staged in before it is renamed into place.
fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}

fn discard(staged: &[PathBuf]) {
    for path in staged {
        let _ = fs::remove_file(path);
    }
}

/// Write every output, or none of them.
///
/// Directories are prepared and every file is staged next to its target
/// first. Targets are only replaced once all of them have been staged.
pub fn write_outputs(outputs: &[OutputFile]) -> Result<Vec<PathBuf>> {
    for output in outputs {
        if output.path.is_dir() {
            return Err(Error::io(
                &output.path,
                io::Error::new(io::ErrorKind::IsADirectory, "output path is a directory"),
            ));
        }
        if let Some(parent) = output.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }

    let mut staged = Vec::with_capacity(outputs.len());
    for output in outputs {
        let temp = staging_path(&output.path);
        if let Err(e) = fs::write(&temp, &output.contents) {
            discard(&staged);
            let _ = fs::remove_file(&temp);
            return Err(Error::io(&output.path, e));
        }
        staged.push(temp);
    }

    let mut written = Vec::with_capacity(outputs.len());
    for (i, (output, temp)) in outputs.iter().zip(&staged).enumerate() {
        if let Err(e) = fs::rename(temp, &output.path) {
            discard(&staged[i..]);
            return Err(Error::io(&output.path, e));
        }
        written.push(output.path.clone());
    }
    Ok(written)
}

pub fn run_job(job: &Job) -> Result<JobReport> {
    let rendered = render_job(job)?;
    let written = write_outputs(&rendered.outputs)?;
    Ok(JobReport {
        name: job.name.clone(),
        keys: rendered.keys.len(),
        written,
        warnings: rendered.warnings,
    })
}

/// Run independent jobs in parallel. Results are in job order.
pub fn run_jobs(jobs: &[Job]) -> Vec<Result<JobReport>> {
    jobs.par_iter().map(run_job).collect()
}

/// Resolve `path` against `base_dir` unless it is already absolute.
pub fn resolve_path(base_dir: &Path, path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
