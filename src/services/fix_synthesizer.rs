use crate::enums::fix_status::FixStatus;
use crate::structs::code_file::CodeFile;
use crate::structs::fix::Fix;
use crate::structs::issue::Issue;

/// Turns issues into fix records and keeps the run-level counts.
/// Nothing is written to disk; a fix records what would be changed.
#[derive(Debug, Default)]
pub struct FixSynthesizer {
    fixes: Vec<Fix>,
    bugs_detected: usize,
    fixes_applied: usize,
}

impl FixSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, issue: &Issue, file: &CodeFile) -> &Fix {
        self.bugs_detected += 1;

        let fix = Fix {
            id: self.fixes.len() + 1,
            file: file.relative_path.clone(),
            bug_type: issue.issue_type,
            line: issue.line.max(1),
            commit_message: Self::commit_message(issue, &file.relative_path),
            // Every synthesized fix currently reports success, critical or not.
            status: FixStatus::Fixed,
        };

        if fix.status == FixStatus::Fixed {
            self.fixes_applied += 1;
        }

        self.fixes.push(fix);
        &self.fixes[self.fixes.len() - 1]
    }

    /// `"<TYPE> error in <path> line <N> → Fix: <message>"`
    pub fn commit_message(issue: &Issue, relative_path: &str) -> String {
        let description = if issue.message.trim().is_empty() {
            issue.suggested_fix.as_deref().unwrap_or("no description provided")
        } else {
            issue.message.as_str()
        };

        format!(
            "{} error in {} line {} → Fix: {}",
            issue.issue_type, relative_path, issue.line.max(1), description
        )
    }

    pub fn bugs_detected(&self) -> usize {
        self.bugs_detected
    }

    pub fn fixes_applied(&self) -> usize {
        self.fixes_applied
    }

    pub fn fixes(&self) -> &[Fix] {
        &self.fixes
    }

    pub fn into_fixes(self) -> Vec<Fix> {
        self.fixes
    }
}
