use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;
use tokio::runtime::RuntimeFlavor;

use crate::errors::{FixAgentError, FixAgentResult};
use crate::helpers::naming;
use crate::structs::config::workspace_config::WorkspaceConfig;
use crate::structs::repository::Repository;

/// Owns one cloned working copy. The directory is removed exactly once, either
/// through [`Workspace::release`] or when the value is dropped.
#[derive(Debug)]
pub struct Workspace {
    repository: Repository,
    released: bool,
}

impl Workspace {
    pub fn new(repository: Repository) -> Self {
        Self {
            repository,
            released: false,
        }
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn path(&self) -> &Path {
        &self.repository.workspace_path
    }

    pub fn release(&mut self) {
        if !self.released {
            self.released = true;
            WorkspaceManager::release(&self.repository);
        }
    }

    /// Same as [`Workspace::release`] without blocking a runtime worker. If the
    /// future is dropped midway, `Drop` still removes the directory.
    pub async fn release_async(&mut self) {
        if !self.released {
            WorkspaceManager::release_async(&self.repository).await;
            self.released = true;
        }
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        match tokio::runtime::Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| self.release());
            }
            _ => self.release(),
        }
    }
}

pub struct WorkspaceManager {
    temp_root: PathBuf,
    cleanup_delay: Duration,
}

impl WorkspaceManager {
    pub fn new(config: &WorkspaceConfig) -> Self {
        Self {
            temp_root: PathBuf::from(&config.temp_dir),
            cleanup_delay: Duration::from_secs(config.cleanup_delay_secs),
        }
    }

    pub fn with_cleanup_delay(mut self, delay: Duration) -> Self {
        self.cleanup_delay = delay;
        self
    }

    pub fn temp_root(&self) -> &Path {
        &self.temp_root
    }

    /// Clones `repo_url` into `<temp_root>/<team>_<leader>_<unixMillis>`.
    pub async fn acquire(&self, repo_url: &str, team: &str, leader: &str) -> FixAgentResult<Workspace> {
        tokio::fs::create_dir_all(&self.temp_root)
            .await
            .map_err(|e| FixAgentError::acquisition_error(repo_url, &format!(
                "cannot create workspace root {}: {}", self.temp_root.display(), e
            )))?;

        let dir_name = naming::workspace_dir_name(team, leader, chrono::Utc::now().timestamp_millis());
        let workspace_path = self.temp_root.join(&dir_name);

        Self::clone_into(repo_url, &workspace_path).await?;
        Ok(Workspace::new(Repository::new(repo_url.to_string(), workspace_path, dir_name)))
    }

    /// Clones into a directory that must not exist yet. A directory that is
    /// already there belongs to another run and is never touched.
    async fn clone_into(repo_url: &str, workspace_path: &Path) -> FixAgentResult<()> {
        if tokio::fs::try_exists(workspace_path).await.unwrap_or(true) {
            log::error!("❌ Workspace {} is already in use", workspace_path.display());
            return Err(FixAgentError::acquisition_error(repo_url, &format!(
                "workspace directory {} already exists", workspace_path.display()
            )));
        }

        let target = workspace_path.to_string_lossy().to_string();
        log::info!("📥 Cloning repository: {} to {}", repo_url, target);

        if let Err(reason) = run_git(&["clone", repo_url, &target], None).await {
            log::error!("❌ Clone failed for {}: {}", repo_url, reason);
            Self::remove_dir_async(workspace_path).await;
            return Err(FixAgentError::acquisition_error(repo_url, &reason));
        }

        Ok(())
    }

    /// Creates and checks out a new local branch with exactly `branch_name`.
    pub async fn create_branch(&self, workspace: &mut Workspace, branch_name: &str) -> FixAgentResult<()> {
        run_git(&["checkout", "-b", branch_name], Some(workspace.path()))
            .await
            .map_err(|reason| {
                log::error!("❌ Branch creation failed: {}", reason);
                FixAgentError::branch_error(branch_name, &reason)
            })?;

        log::info!("🌿 Created branch {}", branch_name);
        workspace.repository.branch_name = Some(branch_name.to_string());
        Ok(())
    }

    /// Removes the workspace directory. Never fails; safe to call repeatedly.
    pub fn release(repository: &Repository) {
        Self::log_removal(&repository.workspace_path, std::fs::remove_dir_all(&repository.workspace_path));
    }

    pub async fn release_async(repository: &Repository) {
        Self::remove_dir_async(&repository.workspace_path).await;
    }

    /// Releases the workspace after the configured grace delay so responses and
    /// artifacts referring to it are complete first.
    pub async fn schedule_release(&self, mut workspace: Workspace) {
        if self.cleanup_delay.is_zero() {
            workspace.release_async().await;
            return;
        }

        let delay = self.cleanup_delay;
        log::debug!("🧹 Cleanup of {} scheduled in {}s", workspace.path().display(), delay.as_secs());
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            workspace.release_async().await;
        });
    }

    async fn remove_dir_async(path: &Path) {
        Self::log_removal(path, tokio::fs::remove_dir_all(path).await);
    }

    fn log_removal(path: &Path, outcome: std::io::Result<()>) {
        match outcome {
            Ok(()) => log::info!("🧹 Cleaned up: {}", path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("Workspace already removed: {}", path.display());
            }
            Err(e) => log::error!("❌ Cleanup error for {}: {}", path.display(), e),
        }
    }
}

/// Runs git non-interactively; the error carries git's own diagnostic text.
async fn run_git(args: &[&str], cwd: Option<&Path>) -> Result<String, String> {
    let mut command = Command::new("git");
    command.args(args).env("GIT_TERMINAL_PROMPT", "0");
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    let output = command
        .output()
        .await
        .map_err(|e| format!("failed to run git: {}", e))?;

    if output.status.success() {
        return Ok(String::from_utf8_lossy(&output.stdout).trim().to_string());
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if stderr.is_empty() {
        Err(format!("git {} exited with {}", args.first().unwrap_or(&""), output.status))
    } else {
        Err(stderr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager_in(root: &Path, delay_secs: u64) -> WorkspaceManager {
        WorkspaceManager::new(&WorkspaceConfig {
            temp_dir: root.to_string_lossy().to_string(),
            cleanup_delay_secs: delay_secs,
        })
    }

    fn fake_repository(path: PathBuf) -> Repository {
        Repository::new("https://example.com/repo.git".to_string(), path, "dir".to_string())
    }

    #[test]
    fn release_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("ws");
        std::fs::create_dir_all(path.join("src")).unwrap();
        std::fs::write(path.join("src/main.js"), "x").unwrap();

        let repository = fake_repository(path.clone());
        WorkspaceManager::release(&repository);
        assert!(!path.exists());
        WorkspaceManager::release(&repository);
        assert!(!path.exists());
    }

    #[test]
    fn dropping_workspace_removes_directory() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("ws");
        std::fs::create_dir_all(&path).unwrap();

        let mut workspace = Workspace::new(fake_repository(path.clone()));
        workspace.release();
        assert!(!path.exists());

        std::fs::create_dir_all(&path).unwrap();
        drop(workspace);
        // Already released once; drop must not touch the directory again.
        assert!(path.exists());

        drop(Workspace::new(fake_repository(path.clone())));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn failed_clone_is_an_acquisition_error_and_leaves_nothing() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("temp");
        let manager = manager_in(&root, 0);
        let missing = tmp.path().join("no-such-repo");

        let err = manager
            .acquire(&missing.to_string_lossy(), "Rift Organisers", "Saiyam Kumar")
            .await
            .unwrap_err();

        assert!(matches!(err, FixAgentError::Acquisition { .. }));
        assert!(!err.reason().is_empty());
        assert_eq!(std::fs::read_dir(&root).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn branch_creation_outside_a_repository_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("plain");
        std::fs::create_dir_all(&path).unwrap();
        let manager = manager_in(tmp.path(), 0);

        let mut workspace = Workspace::new(fake_repository(path));
        let err = manager.create_branch(&mut workspace, "TEAM_LEAD_AI_Fix").await.unwrap_err();
        assert!(matches!(err, FixAgentError::Branch { ref branch, .. } if branch == "TEAM_LEAD_AI_Fix"));
        assert!(workspace.repository().branch_name.is_none());
    }

    #[tokio::test]
    async fn delayed_release_runs_after_grace_period() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("ws");
        std::fs::create_dir_all(&path).unwrap();

        let manager = manager_in(tmp.path(), 1).with_cleanup_delay(Duration::from_millis(50));
        manager.schedule_release(Workspace::new(fake_repository(path.clone()))).await;
        assert!(path.exists());

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn zero_delay_releases_before_returning() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("ws");
        std::fs::create_dir_all(&path).unwrap();

        manager_in(tmp.path(), 0).schedule_release(Workspace::new(fake_repository(path.clone()))).await;
        assert!(!path.exists());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn dropping_inside_multi_thread_runtime_removes_directory() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("ws");
        std::fs::create_dir_all(path.join("nested")).unwrap();

        drop(Workspace::new(fake_repository(path.clone())));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn clone_never_touches_an_existing_workspace() {
        let tmp = TempDir::new().unwrap();
        let busy = tmp.path().join("Team_Lead_1700000000000");
        std::fs::create_dir_all(&busy).unwrap();
        std::fs::write(busy.join("results.json"), "{}").unwrap();

        let err = WorkspaceManager::clone_into(&tmp.path().join("origin").to_string_lossy(), &busy)
            .await
            .unwrap_err();

        assert!(matches!(err, FixAgentError::Acquisition { .. }));
        assert!(err.reason().contains("already exists"));
        assert!(busy.join("results.json").exists());
    }
}
