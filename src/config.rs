use anyhow::{Context, Result};
use std::path::PathBuf;

pub(crate) const DATA_DIR_ENV: &str = "SPENDWISE_DATA_DIR";

/// Runtime settings resolved from flags, environment and platform defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) data_dir: PathBuf,
    pub(crate) verbose: bool,
    /// Remaining positional arguments: the command and its operands.
    pub(crate) command: Vec<String>,
}

impl Config {
    /// Resolve from process arguments (without the program name).
    ///
    /// Data directory priority: `--data-dir` > `SPENDWISE_DATA_DIR` > platform data dir.
    pub(crate) fn from_args(args: &[String]) -> Result<Self> {
        let env_dir = std::env::var(DATA_DIR_ENV).ok().filter(|v| !v.is_empty());
        Self::resolve(args, env_dir)
    }

    fn resolve(args: &[String], env_dir: Option<String>) -> Result<Self> {
        let mut flag_dir = None;
        let mut verbose = false;
        let mut command = Vec::new();

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--data-dir" | "-d" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--data-dir requires a path"))?;
                    flag_dir = Some(value.clone());
                }
                "--verbose" | "-v" => verbose = true,
                _ => command.push(arg.clone()),
            }
        }

        let data_dir = match flag_dir.or(env_dir) {
            Some(dir) => PathBuf::from(shellexpand(&dir)),
            None => default_data_dir()?,
        };

        Ok(Self {
            data_dir,
            verbose,
            command,
        })
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "spendwise", "Spendwise")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.to_path_buf())
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
