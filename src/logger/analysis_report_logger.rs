use crate::enums::fix_status::FixStatus;
use crate::enums::run_status::RunStatus;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::fix::Fix;
use crate::structs::score::Score;
use crate::structs::verification_run::VerificationRun;

pub struct AnalysisReportLogger {}

impl AnalysisReportLogger {

    pub fn print_analysis_report(result: &AnalysisResult) {
        println!("🔍 REPOSITORY ANALYSIS REPORT");
        println!("=============================");
        println!("📦 Repository: {}", result.repo);
        println!("👥 Team: {} (leader: {})", result.team_name, result.leader_name);
        println!("🌿 Branch: {}", result.branch);
        println!("⏱️  Execution time: {}", result.execution_time);
        println!("🐛 Bugs detected: {}   🔧 Fixes applied: {}", result.bugs_detected, result.fixes_applied);

        Self::print_fixes(&result.fixes);
        Self::print_timeline(&result.cicd_runs);
        Self::print_score(&result.score);
    }

    fn print_fixes(fixes: &[Fix]) {
        println!("\n🔧 FIXES ({} total):", fixes.len());
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        if fixes.is_empty() {
            println!("  ✨ No issues found");
            return;
        }

        for fix in fixes {
            let marker = match fix.status {
                FixStatus::Fixed => "✅",
                FixStatus::Failed => "❌",
            };
            println!("  {} #{:<3} {:<12} {}:{} [{}]", marker, fix.id, fix.bug_type, fix.file, fix.line, fix.status.as_str());
            println!("        {}", fix.commit_message);
        }
    }

    fn print_timeline(runs: &[VerificationRun]) {
        println!("\n🚦 CI/CD TIMELINE:");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        for run in runs {
            let marker = match run.status {
                RunStatus::Passed => "🟢",
                RunStatus::Failed => "🔴",
            };
            println!(
                "  {} Iteration {} [{}] {} · {}/{} tests · {}",
                marker,
                run.iteration,
                run.status.as_str(),
                run.timestamp.format("%H:%M:%S"),
                run.tests_passed,
                run.tests_run,
                run.duration
            );
            for check in &run.checks {
                println!("      {}", check);
            }
        }
    }

    fn print_score(score: &Score) {
        println!("\n🏆 SCORE:");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("  Base:               {:>4}", score.base);
        println!("  Speed bonus:        {:>+4}", score.speed_bonus);
        println!("  Efficiency penalty: {:>+4}", score.efficiency_penalty);
        println!("  Final:              {:>4} / 100", score.final_score);
    }
}
