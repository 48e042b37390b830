use std::sync::Arc;
use tempfile::TempDir;

use fix_agent::enums::fix_status::FixStatus;
use fix_agent::errors::FixAgentError;
use fix_agent::structs::analyze_request::AnalyzeRequest;

use crate::common::{committed_repository, fixture_repository, git_available, local_pipeline};

fn request_for(repo: &std::path::Path) -> AnalyzeRequest {
    AnalyzeRequest::new(&repo.to_string_lossy(), "Rift Organisers", "Saiyam Kumar")
}

#[tokio::test]
async fn full_run_against_local_repository() {
    if !git_available() {
        eprintln!("git not found, skipping");
        return;
    }
    let tmp = TempDir::new().unwrap();
    let origin = tmp.path().join("origin");
    std::fs::create_dir_all(&origin).unwrap();
    fixture_repository(&origin);
    let temp_root = tmp.path().join("temp");

    let pipeline = Arc::new(local_pipeline(&temp_root, 0));
    let result = pipeline.run_isolated(request_for(&origin)).await.unwrap();

    assert_eq!(result.branch, "RIFT_ORGANISERS_SAIYAM_KUMAR_AI_Fix");
    assert_eq!(result.team_name, "Rift Organisers");
    assert!(result.bugs_detected > 0);
    assert_eq!(result.bugs_detected, result.fixes.len());
    assert_eq!(result.fixes_applied, result.fixes.len());

    let ids: Vec<usize> = result.fixes.iter().map(|f| f.id).collect();
    assert_eq!(ids, (1..=result.fixes.len()).collect::<Vec<_>>());
    assert!(result.fixes.iter().all(|f| f.status == FixStatus::Fixed));
    assert!(result.fixes.iter().all(|f| f.file == "src/app.js" || f.file == "src/util.py"));
    assert!(result.fixes.iter().any(|f| f.file == "src/app.js"));

    assert_eq!(result.cicd_runs.len(), 3);
    assert_eq!(result.cicd_result, result.cicd_runs[2].status);
    assert!((0..=100).contains(&result.score.final_score));
    assert_eq!(result.score.base, 100);
    assert!(result.execution_time.ends_with('s'));

    // Zero grace period: the clone is gone as soon as the run returns.
    assert_eq!(std::fs::read_dir(&temp_root).unwrap().count(), 0);
}

#[tokio::test]
async fn results_artifact_is_written_before_release() {
    if !git_available() {
        return;
    }
    let tmp = TempDir::new().unwrap();
    let origin = tmp.path().join("origin");
    std::fs::create_dir_all(&origin).unwrap();
    fixture_repository(&origin);
    let temp_root = tmp.path().join("temp");

    let pipeline = Arc::new(local_pipeline(&temp_root, 30));
    let result = pipeline.run_isolated(request_for(&origin)).await.unwrap();

    let workspace = std::fs::read_dir(&temp_root).unwrap().next().unwrap().unwrap().path();
    assert!(workspace.file_name().unwrap().to_string_lossy().starts_with("Rift_Organisers_Saiyam_Kumar_"));

    let artifact: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(workspace.join("results.json")).unwrap()).unwrap();
    assert_eq!(artifact["team_name"], "RIFT_ORGANISERS");
    assert_eq!(artifact["branch_name"], result.branch);
    assert_eq!(artifact["bugs_detected"], result.bugs_detected);
    assert_eq!(artifact["score"], result.score.final_score);
    assert_eq!(artifact["iterations"], 3);
    assert_eq!(artifact["fixes"].as_array().unwrap().len(), result.fixes.len());
}

#[tokio::test]
async fn repeated_runs_report_the_same_findings() {
    if !git_available() {
        return;
    }
    let tmp = TempDir::new().unwrap();
    let origin = tmp.path().join("origin");
    std::fs::create_dir_all(&origin).unwrap();
    fixture_repository(&origin);

    let pipeline = Arc::new(local_pipeline(&tmp.path().join("temp"), 0));
    let first = Arc::clone(&pipeline).run_isolated(request_for(&origin)).await.unwrap();
    let second = pipeline.run_isolated(request_for(&origin)).await.unwrap();

    let key = |r: &fix_agent::structs::analysis_result::AnalysisResult| {
        r.fixes.iter().map(|f| (f.file.clone(), f.line, f.bug_type)).collect::<Vec<_>>()
    };
    assert_eq!(key(&first), key(&second));
}

#[tokio::test]
async fn unreachable_repository_is_an_acquisition_failure() {
    if !git_available() {
        return;
    }
    let tmp = TempDir::new().unwrap();
    let temp_root = tmp.path().join("temp");
    let pipeline = Arc::new(local_pipeline(&temp_root, 0));

    let err = pipeline
        .run_isolated(request_for(&tmp.path().join("nowhere")))
        .await
        .unwrap_err();

    assert!(matches!(err, FixAgentError::Acquisition { .. }));
    assert_eq!(std::fs::read_dir(&temp_root).unwrap().count(), 0);
}

#[tokio::test]
async fn file_limits_and_unreadable_files_are_skipped() {
    if !git_available() {
        return;
    }
    let tmp = TempDir::new().unwrap();
    let origin = tmp.path().join("origin");
    std::fs::create_dir_all(&origin).unwrap();

    // Name order: big.js, binary.js, m01.js .. m10.js. Only the first ten are
    // considered, and the first two of those are skipped.
    let mut files: Vec<(String, Vec<u8>)> = vec![
        ("big.js".to_string(), "console.log(1);\n".repeat(1_000).into_bytes()),
        ("binary.js".to_string(), vec![0xff, 0xfe, 0x00, b'\n', 0xc3, 0x28]),
    ];
    for i in 1..=10 {
        files.push((format!("m{:02}.js", i), b"console.log(1);\n".to_vec()));
    }
    let borrowed: Vec<(&str, Vec<u8>)> = files.iter().map(|(p, c)| (p.as_str(), c.clone())).collect();
    committed_repository(&origin, &borrowed);

    let pipeline = Arc::new(local_pipeline(&tmp.path().join("temp"), 0));
    let result = pipeline.run_isolated(request_for(&origin)).await.unwrap();

    let mut analysed: Vec<&str> = result.fixes.iter().map(|f| f.file.as_str()).collect();
    analysed.dedup();
    let expected: Vec<String> = (1..=8).map(|i| format!("m{:02}.js", i)).collect();
    assert_eq!(analysed, expected.iter().map(String::as_str).collect::<Vec<_>>());
    assert_eq!(result.bugs_detected, 8);
    assert_eq!(result.cicd_runs.len(), 3);
}
