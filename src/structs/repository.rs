use std::path::PathBuf;

/// A cloned working copy owned by one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub url: String,
    pub workspace_path: PathBuf,
    pub dir_name: String,
    pub branch_name: Option<String>,
}

impl Repository {
    pub fn new(url: String, workspace_path: PathBuf, dir_name: String) -> Self {
        Self {
            url,
            workspace_path,
            dir_name,
            branch_name: None,
        }
    }
}
