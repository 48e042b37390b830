use std::sync::Arc;
use std::time::Instant;

use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{ErrorHandler, FixAgentError, FixAgentResult};
use crate::logger::analysis_report_logger::AnalysisReportLogger;
use crate::services::analysis_pipeline::AnalysisPipeline;
use crate::structs::analyze_request::AnalyzeRequest;
use crate::structs::config::config::Config;
use crate::ui::api_server::ApiServer;

pub struct CommandRunner {
    config_path: Option<String>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config_path: Option<String>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> FixAgentResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
            Commands::Analyze { repo, team, leader, json } => {
                self.analyze_command(AnalyzeRequest::new(&repo, &team, &leader), json).await
            }
            Commands::Serve { port } => self.serve_command(port).await,
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> FixAgentResult<()> {
        log::info!("🚀 Initializing fix-agent configuration...");

        match ConfigManager::create_sample_config() {
            Ok(_) => {
                log::info!("📝 Edit the configuration file to set your model and API keys.");
                log::info!("🔧 Run 'fix-agent validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    fn validate_command(&self) -> FixAgentResult<()> {
        log::info!("🔍 Validating configuration...");
        let config = self.load_config()?;

        log::info!("🤖 AI provider: {} ({})", config.ai.provider, config.ai.model);
        if config.ai.resolve_api_key().is_some() {
            log::info!("🔑 API key found in {}", config.ai.api_key_env);
        } else {
            log::info!("⚠️ {} is not set; local heuristics will be used", config.ai.api_key_env);
        }
        log::info!("📁 Workspace root: {}", config.workspace.temp_dir);
        log::info!("🌐 Server port: {} ({} API keys)", config.server.port, config.server.resolve_api_keys().len());
        log::info!("✅ Configuration is valid");
        Ok(())
    }

    async fn analyze_command(&self, request: AnalyzeRequest, json: bool) -> FixAgentResult<()> {
        let missing = request.missing_fields();
        if !missing.is_empty() {
            return Err(FixAgentError::config_error(
                &format!("missing required fields: {}", missing.join(", ")),
                missing.first().copied(),
            ));
        }

        let config = self.load_config()?;
        let pipeline = Arc::new(AnalysisPipeline::from_config(&config));

        match pipeline.run_isolated(request).await {
            Ok(result) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                } else {
                    AnalysisReportLogger::print_analysis_report(&result);
                }
                Ok(())
            }
            Err(e) => {
                ErrorHandler::handle_error(&e);
                Err(e)
            }
        }
    }

    async fn serve_command(&self, port: Option<u16>) -> FixAgentResult<()> {
        let config = self.load_config()?;
        let pipeline = Arc::new(AnalysisPipeline::from_config(&config));
        let server = ApiServer::new(pipeline, &config.server, port);

        log::info!("🤖 AI provider: {}", if config.ai.resolve_api_key().is_some() { config.ai.model.as_str() } else { "local heuristics" });
        server.run().await
    }

    fn load_config(&self) -> FixAgentResult<Config> {
        let config = ConfigManager::load(self.config_path.as_deref()).map_err(|e| {
            log::error!("❌ Failed to load configuration: {}", e);
            log::error!("💡 Run 'fix-agent init' to create a configuration file.");
            e
        })?;

        if let Err(errors) = ConfigManager::validate_config(&config) {
            for error in &errors {
                log::error!("   • {}", error);
            }
            return Err(FixAgentError::config_error(&errors.join("; "), None));
        }

        Ok(config)
    }
}
