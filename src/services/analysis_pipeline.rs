use std::sync::Arc;
use std::time::Instant;
use chrono::Utc;
use uuid::Uuid;

use crate::enums::run_status::RunStatus;
use crate::errors::{FixAgentError, FixAgentResult};
use crate::helpers::naming;
use crate::services::detectors::fallback_detector::FallbackDetector;
use crate::services::file_inventory::FileInventory;
use crate::services::fix_synthesizer::FixSynthesizer;
use crate::services::result_persister::ResultPersister;
use crate::services::scoring_engine::ScoringEngine;
use crate::services::verification_simulator::VerificationSimulator;
use crate::services::workspace_manager::{Workspace, WorkspaceManager};
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::analyze_request::AnalyzeRequest;
use crate::structs::config::analysis_config::AnalysisConfig;
use crate::structs::config::config::Config;

/// Clone → inventory → detect/synthesize per file → simulate CI → score →
/// persist. The workspace is always handed back for delayed release.
pub struct AnalysisPipeline {
    workspace_manager: WorkspaceManager,
    detector: FallbackDetector,
    analysis: AnalysisConfig,
}

impl AnalysisPipeline {
    pub fn new(workspace_manager: WorkspaceManager, detector: FallbackDetector, analysis: AnalysisConfig) -> Self {
        Self {
            workspace_manager,
            detector,
            analysis,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            WorkspaceManager::new(&config.workspace),
            FallbackDetector::from_config(&config.ai, config.ai.resolve_api_key()),
            config.analysis.clone(),
        )
    }

    /// Runs on its own task so a panic mid-pipeline surfaces as an analysis error.
    pub async fn run_isolated(self: Arc<Self>, request: AnalyzeRequest) -> FixAgentResult<AnalysisResult> {
        tokio::spawn(async move { self.run(&request).await })
            .await
            .map_err(|e| FixAgentError::analysis_error("pipeline", &e.to_string()))?
    }

    pub async fn run(&self, request: &AnalyzeRequest) -> FixAgentResult<AnalysisResult> {
        let run_id = Uuid::new_v4();
        let started = Instant::now();

        log::info!("[{}] 🔍 Starting analysis for {}/{}", run_id, request.team, request.leader);
        log::info!("[{}] 📦 Repository: {}", run_id, request.repo);

        let mut workspace = self.workspace_manager
            .acquire(&request.repo, &request.team, &request.leader)
            .await?;
        log::info!(
            "[{}] 📁 Workspace {} ready for {}",
            run_id, workspace.repository().dir_name, workspace.repository().url
        );

        let outcome = self.analyze_workspace(run_id, &mut workspace, request, started).await;
        match &outcome {
            Ok(result) => log::info!(
                "[{}] ✅ Analysis complete: {} bugs detected, {} fixes applied",
                run_id, result.bugs_detected, result.fixes_applied
            ),
            Err(e) => log::error!("[{}] ❌ Analysis failed: {}", run_id, e),
        }

        self.workspace_manager.schedule_release(workspace).await;
        outcome
    }

    async fn analyze_workspace(
        &self,
        run_id: Uuid,
        workspace: &mut Workspace,
        request: &AnalyzeRequest,
        started: Instant,
    ) -> FixAgentResult<AnalysisResult> {
        let branch = naming::branch_name(&request.team, &request.leader);
        self.workspace_manager.create_branch(workspace, &branch).await?;

        let files = FileInventory::list(workspace.repository())?;
        let mut synthesizer = FixSynthesizer::new();

        for file in files.iter().take(self.analysis.max_files) {
            let code = match tokio::fs::read_to_string(&file.absolute_path).await {
                Ok(code) => code,
                Err(e) => {
                    log::warn!("[{}] ⚠️ Skipping {}: {}", run_id, file.relative_path, e);
                    continue;
                }
            };

            if code.len() > self.analysis.max_file_bytes {
                log::debug!("[{}] Skipping {} ({} bytes)", run_id, file.relative_path, code.len());
                continue;
            }

            log::debug!("[{}] Analyzing: {}", run_id, file.relative_path);
            let issues = self.detector.detect_issues(&code, &file.relative_path, file.language()).await;
            for issue in &issues {
                let fix = synthesizer.apply(issue, file);
                log::debug!("[{}] 🔧 #{} {}", run_id, fix.id, fix.commit_message);
            }
        }

        let bugs_detected = synthesizer.bugs_detected();
        let fixes_applied = synthesizer.fixes_applied();
        let cicd_runs = VerificationSimulator::simulate(bugs_detected, Utc::now());

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let score = ScoringEngine::score(bugs_detected, fixes_applied, elapsed_ms, cicd_runs.len());

        let result = AnalysisResult {
            repo: request.repo.clone(),
            team_name: request.team.clone(),
            leader_name: request.leader.clone(),
            branch,
            bugs_detected,
            fixes_applied,
            cicd_result: cicd_runs.last().map_or(RunStatus::Passed, |run| run.status),
            execution_time: naming::format_duration(elapsed_ms),
            score,
            fixes: synthesizer.into_fixes(),
            cicd_runs,
        };

        // A failed write is reported but the computed result still stands.
        if let Err(e) = ResultPersister::persist(workspace.repository(), &result, &request.team, &request.leader) {
            log::error!("[{}] ❌ {}", run_id, e.user_message());
        }

        Ok(result)
    }
}
