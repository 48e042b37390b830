use std::path::Path;
use std::process::Command;

use fix_agent::services::analysis_pipeline::AnalysisPipeline;
use fix_agent::services::detectors::fallback_detector::FallbackDetector;
use fix_agent::services::detectors::local_heuristic_detector::LocalHeuristicDetector;
use fix_agent::services::workspace_manager::WorkspaceManager;
use fix_agent::structs::config::analysis_config::AnalysisConfig;
use fix_agent::structs::config::workspace_config::WorkspaceConfig;

pub fn git_available() -> bool {
    Command::new("git").arg("--version").output().is_ok_and(|o| o.status.success())
}

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args(["-c", "user.name=Fixture", "-c", "user.email=fixture@example.com"])
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap()
        .status;
    assert!(status.success(), "git {:?} failed", args);
}

/// A committed repository with two analyzable files and some noise the
/// inventory must skip.
pub fn fixture_repository(dir: &Path) {
    let files = [
        ("src/app.js", "var count = 0;\nconsole.log(count);\nif (count == 1) {\n  count++;\n}\n"),
        ("src/util.py", "import os\n\ndef size(path):\n    return os.path.getsize(path)\n"),
        ("README.md", "# fixture\n"),
        ("node_modules/dep/index.js", "console.log('vendored');\n"),
    ];
    let files: Vec<(&str, Vec<u8>)> = files.iter().map(|(p, c)| (*p, c.as_bytes().to_vec())).collect();
    committed_repository(dir, &files);
}

/// Writes `files` (raw bytes) under `dir` and commits them as one commit.
pub fn committed_repository(dir: &Path, files: &[(&str, Vec<u8>)]) {
    for (relative, content) in files {
        let path = dir.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    git(dir, &["init", "-q"]);
    git(dir, &["add", "-A", "-f"]);
    git(dir, &["commit", "-q", "-m", "fixture"]);
}

pub fn local_pipeline(temp_root: &Path, cleanup_delay_secs: u64) -> AnalysisPipeline {
    let workspace = WorkspaceManager::new(&WorkspaceConfig {
        temp_dir: temp_root.to_string_lossy().to_string(),
        cleanup_delay_secs,
    });
    AnalysisPipeline::new(
        workspace,
        FallbackDetector::new(None, LocalHeuristicDetector::new()),
        AnalysisConfig::default(),
    )
}
