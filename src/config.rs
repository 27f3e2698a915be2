use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(s) = path.to_str() {
        if let Some(stripped) = s.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if s == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

/// Configuration for git-submodule-describe
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DescribeConfig {
    /// Git executable used to list submodules
    #[serde(default = "defaults::default_git_binary")]
    pub git_binary: PathBuf,
    /// Work tree to run git in, the current directory when unset
    #[serde(default)]
    pub work_tree: Option<PathBuf>,
}

impl Default for DescribeConfig {
    fn default() -> Self {
        Self {
            git_binary: defaults::default_git_binary(),
            work_tree: None,
        }
    }
}

impl DescribeConfig {
    /// Load configuration from the config file (if any) and environment variables
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        tracing::debug!("loading git-submodule-describe config from {:?}", config_path);
        let mut config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    /// Apply `GIT_SUBMODULE_DESCRIBE_*` overrides looked up through `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("GIT_SUBMODULE_DESCRIBE_GIT") {
            self.git_binary = expand_tilde(&PathBuf::from(path));
        }

        if let Some(path) = lookup("GIT_SUBMODULE_DESCRIBE_WORK_TREE") {
            self.work_tree = Some(expand_tilde(&PathBuf::from(path)));
        }
    }

    /// Load configuration from a file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let mut config: DescribeConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        config.git_binary = expand_tilde(&config.git_binary);
        if let Some(ref work_tree) = config.work_tree {
            config.work_tree = Some(expand_tilde(work_tree));
        }

        Ok(config)
    }

    /// Get default config file path
    pub fn config_file_path() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(".config/git-submodule-describe/config.yaml"))
            .context("Could not determine home directory for config file")
    }
}

mod defaults {
    use std::path::PathBuf;

    pub(crate) fn default_git_binary() -> PathBuf {
        PathBuf::from("git")
    }
}
