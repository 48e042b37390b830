use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFile {
    pub absolute_path: PathBuf,
    /// Path relative to the workspace root; the identity surfaced to callers.
    pub relative_path: String,
    /// Extension without the leading dot, e.g. `ts`.
    pub extension: String,
}

impl CodeFile {
    pub fn language(&self) -> &'static str {
        match self.extension.as_str() {
            "js" => "JavaScript",
            "jsx" => "JavaScript React",
            "ts" => "TypeScript",
            "tsx" => "TypeScript React",
            "py" => "Python",
            "java" => "Java",
            "go" => "Go",
            _ => "Unknown",
        }
    }
}
