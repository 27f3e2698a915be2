use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result};

use super::{parse_status_line, Submodule, SubmoduleSource};
use crate::config::DescribeConfig;

/// Lists submodules by running `git submodule status`
pub struct GitCli {
    git_binary: PathBuf,
    work_tree: Option<PathBuf>,
}

impl GitCli {
    pub fn new(git_binary: PathBuf, work_tree: Option<PathBuf>) -> Self {
        Self {
            git_binary,
            work_tree,
        }
    }

    pub fn from_config(config: &DescribeConfig) -> Self {
        Self::new(config.git_binary.clone(), config.work_tree.clone())
    }
}

impl SubmoduleSource for GitCli {
    fn submodules(&self) -> Result<Vec<Submodule>> {
        let mut cmd = Command::new(&self.git_binary);
        if let Some(dir) = &self.work_tree {
            cmd.current_dir(dir);
        }
        cmd.arg("submodule").arg("status");

        tracing::debug!("Running {:?} submodule status in {:?}", self.git_binary, self.work_tree);
        let output = cmd
            .output()
            .with_context(|| format!("Failed to run {:?} submodule status", self.git_binary))?;

        if !output.status.success() {
            anyhow::bail!(
                "git submodule status failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let stdout = String::from_utf8(output.stdout)
            .context("git submodule status printed invalid UTF-8")?;

        let submodules = stdout
            .lines()
            .map(parse_status_line)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Listed {} submodule(s)", submodules.len());
        Ok(submodules)
    }
}
