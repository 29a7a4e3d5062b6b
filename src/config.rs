use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{
    generate::Action,
    pipeline::{Job, ResolvedOptions, resolve_path},
};

pub const CONFIG_FILE_NAME: &str = ".springrc.json";

/// Options recognized at task level and per job. Job-level values override
/// task-level values field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespaces: Option<Vec<String>>,
}

impl TaskOptions {
    /// `self` overridden by every field `over` sets.
    pub fn merged_with(&self, over: &TaskOptions) -> TaskOptions {
        TaskOptions {
            action: over.action.clone().or_else(|| self.action.clone()),
            translation_file: over
                .translation_file
                .clone()
                .or_else(|| self.translation_file.clone()),
            namespaces: over.namespaces.clone().or_else(|| self.namespaces.clone()),
        }
    }

    pub fn resolve(&self, root_dir: &Path) -> ResolvedOptions {
        ResolvedOptions {
            action: self
                .action
                .clone()
                .unwrap_or_else(|| Action::default().to_string()),
            translation_file: self
                .translation_file
                .as_ref()
                .map(|stem| resolve_path(root_dir, stem)),
            namespaces: self.namespaces.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobConfig {
    #[serde(default)]
    pub options: TaskOptions,
    #[serde(default)]
    pub src: Vec<String>,
    pub dest: String,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub options: TaskOptions,
    #[serde(default)]
    pub jobs: BTreeMap<String, JobConfig>,
}

fn default_jobs() -> BTreeMap<String, JobConfig> {
    let src = vec![
        "src/tmpl/**/*.tmpl".to_string(),
        "src/views/**/*.html".to_string(),
        "src/index.html".to_string(),
    ];
    let job = |action: Action, dest: &str| JobConfig {
        options: TaskOptions {
            action: Some(action.to_string()),
            ..Default::default()
        },
        src: src.clone(),
        dest: dest.to_string(),
    };

    BTreeMap::from([
        (
            "build_list_props".to_string(),
            job(Action::ListProps, "build/prop_list.txt"),
        ),
        (
            "build_norm_props".to_string(),
            job(Action::NormProps, "build/norm_props.json"),
        ),
        (
            "build_spring_props".to_string(),
            job(Action::SpringProps, "build/spring_props.json"),
        ),
    ])
}

impl Default for Config {
    fn default() -> Self {
        Self {
            options: TaskOptions {
                action: Some(Action::default().to_string()),
                ..Default::default()
            },
            jobs: default_jobs(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any `src` glob pattern is invalid or a job has no
    /// destination. Actions are checked when each job runs, so an unknown
    /// action only fails its own job.
    pub fn validate(&self) -> Result<()> {
        for (name, job) in &self.jobs {
            if job.dest.trim().is_empty() {
                bail!("Job \"{}\" has an empty 'dest'", name);
            }
            for pattern in &job.src {
                let pattern = pattern.strip_prefix('!').unwrap_or(pattern);
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in job \"{}\": \"{}\"", name, pattern)
                })?;
            }
        }

        Ok(())
    }

    /// Build runnable jobs, resolving paths against `root_dir`.
    ///
    /// `only` restricts the result to the named jobs (all jobs when empty).
    pub fn jobs(&self, root_dir: &Path, only: &[String]) -> Result<Vec<Job>> {
        for name in only {
            if !self.jobs.contains_key(name) {
                bail!(
                    "Unknown job \"{}\". Available jobs: {}",
                    name,
                    self.jobs.keys().cloned().collect::<Vec<_>>().join(", ")
                );
            }
        }

        Ok(self
            .jobs
            .iter()
            .filter(|(name, _)| only.is_empty() || only.contains(name))
            .map(|(name, job)| Job {
                name: name.clone(),
                base_dir: root_dir.to_path_buf(),
                sources: job.src.clone(),
                dest: resolve_path(root_dir, &job.dest),
                options: self.options.merged_with(&job.options).resolve(root_dir),
            })
            .collect())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory the config file was found in; relative paths resolve here.
    pub root_dir: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    let Some(path) = find_config_file(start_dir) else {
        bail!(
            "No {} found in '{}' or its parents.\n\
             Hint: Run `spring-cleaning init` to create one.",
            CONFIG_FILE_NAME,
            start_dir.display()
        );
    };

    let content =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;

    let root_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| start_dir.to_path_buf());

    Ok(ConfigLoadResult { config, root_dir })
}
