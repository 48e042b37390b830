use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::config::constants::{EXCLUDED_DIRECTORIES, SUPPORTED_FILE_EXTENSIONS};
use crate::errors::{FixAgentError, FixAgentResult};
use crate::structs::code_file::CodeFile;
use crate::structs::repository::Repository;

pub struct FileInventory;

impl FileInventory {
    pub fn list(repository: &Repository) -> FixAgentResult<Vec<CodeFile>> {
        Self::list_dir(&repository.workspace_path)
    }

    /// Depth-first walk in name order, skipping excluded directories and
    /// keeping only source files. Fails only when the root itself is unreadable.
    pub fn list_dir(root: &Path) -> FixAgentResult<Vec<CodeFile>> {
        std::fs::read_dir(root)
            .map_err(|e| FixAgentError::scan_error(&root.to_string_lossy(), &e.to_string()))?;

        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !Self::is_excluded_dir(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("⚠️ Skipping unreadable path: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let Some(extension) = Self::supported_extension(entry.path()) else {
                continue;
            };

            let relative_path = entry.path()
                .strip_prefix(root)
                .unwrap_or(entry.path())
                .to_string_lossy()
                .to_string();

            files.push(CodeFile {
                absolute_path: entry.path().to_path_buf(),
                relative_path,
                extension,
            });
        }

        log::info!("📂 Found {} code files", files.len());
        Ok(files)
    }

    fn is_excluded_dir(entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && entry.file_name()
                .to_str()
                .is_some_and(|name| EXCLUDED_DIRECTORIES.contains(&name))
    }

    fn supported_extension(path: &Path) -> Option<String> {
        path.extension()
            .and_then(|e| e.to_str())
            .filter(|e| SUPPORTED_FILE_EXTENSIONS.contains(e))
            .map(|e| e.to_string())
    }
}
