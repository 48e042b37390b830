use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use serde_json::json;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};

use crate::errors::{FixAgentError, FixAgentResult};
use crate::services::analysis_pipeline::AnalysisPipeline;
use crate::structs::analyze_request::AnalyzeRequest;
use crate::structs::config::server_config::ServerConfig;
use crate::ui::error_hints;

const MAX_BODY_BYTES: u64 = 16 * 1024;

#[derive(Clone)]
struct ServerState {
    pipeline: Arc<AnalysisPipeline>,
    api_keys: Arc<Vec<String>>,
}

impl ServerState {
    fn is_valid_key(&self, key: &str) -> bool {
        self.api_keys.iter().any(|k| k == key)
    }
}

pub struct ApiServer {
    state: ServerState,
    allowed_origins: Vec<String>,
    port: u16,
}

impl ApiServer {
    pub fn new(pipeline: Arc<AnalysisPipeline>, config: &ServerConfig, port: Option<u16>) -> Self {
        let api_keys = config.resolve_api_keys();
        if api_keys.is_empty() {
            log::warn!("⚠️ No API keys configured; every /api/analyze request will be rejected");
        }

        Self {
            state: ServerState {
                pipeline,
                api_keys: Arc::new(api_keys),
            },
            allowed_origins: config.allowed_origins.clone(),
            port: port.unwrap_or(config.port),
        }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn routes(&self) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
        let state = self.state.clone();
        let state_filter = warp::any().map(move || state.clone());

        let health = warp::path!("health")
            .and(warp::get())
            .and_then(health_handler);

        let verify = warp::path!("api" / "verify")
            .and(warp::get())
            .and(api_key_filter())
            .and(state_filter.clone())
            .and_then(verify_handler);

        let analyze = warp::path!("api" / "analyze")
            .and(warp::post())
            .and(api_key_filter())
            .and(warp::body::content_length_limit(MAX_BODY_BYTES))
            .and(warp::body::json())
            .and(state_filter)
            .and_then(analyze_handler);

        let cors = warp::cors()
            .allow_origins(self.allowed_origins.iter().map(String::as_str))
            .allow_headers(vec!["content-type", "x-api-key", "authorization"])
            .allow_methods(vec!["GET", "POST", "OPTIONS"]);

        health.or(verify).or(analyze).with(cors)
    }

    /// Serves until Ctrl-C.
    pub async fn run(self) -> FixAgentResult<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        let routes = self.routes();

        let (bound, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(addr, async {
                let _ = tokio::signal::ctrl_c().await;
                log::info!("🛑 Shutting down server...");
            })
            .map_err(|e| FixAgentError::config_error(
                &format!("cannot bind {}: {}", addr, e),
                Some("server.port"),
            ))?;

        log::info!("🚀 Server running on http://{}", bound);
        log::info!("📍 Health check: http://localhost:{}/health", bound.port());
        server.await;
        Ok(())
    }
}

/// `X-API-Key` wins over `Authorization: Bearer <key>`.
fn api_key_filter() -> impl Filter<Extract = (Option<String>,), Error = Rejection> + Clone {
    warp::header::optional::<String>("x-api-key")
        .and(warp::header::optional::<String>("authorization"))
        .map(|api_key: Option<String>, authorization: Option<String>| {
            api_key
                .or_else(|| authorization.and_then(|v| v.strip_prefix("Bearer ").map(str::to_string)))
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
        })
}

fn json_reply(body: &serde_json::Value, status: StatusCode) -> Response {
    warp::reply::with_status(warp::reply::json(body), status).into_response()
}

/// `None` when the key is present and allowed.
fn reject_key(key: Option<&str>, state: &ServerState) -> Option<Response> {
    match key {
        None => Some(json_reply(
            &json!({
                "error": "API key required",
                "message": "Please provide X-API-Key header or Authorization Bearer token"
            }),
            StatusCode::UNAUTHORIZED,
        )),
        Some(key) if !state.is_valid_key(key) => {
            log::warn!("🔒 Rejected request with invalid API key");
            Some(json_reply(
                &json!({ "error": "Invalid API key", "message": "The provided API key is not valid" }),
                StatusCode::FORBIDDEN,
            ))
        }
        Some(_) => None,
    }
}

async fn health_handler() -> Result<impl Reply, Infallible> {
    Ok(warp::reply::json(&json!({
        "status": "ok",
        "message": "Autonomous CI/CD Healing Agent API"
    })))
}

/// Open endpoint: reports whether the presented key is on the allow-list.
async fn verify_handler(key: Option<String>, state: ServerState) -> Result<impl Reply, Infallible> {
    let valid = key.as_deref().is_some_and(|k| state.is_valid_key(k));
    Ok(warp::reply::json(&json!({
        "valid": valid,
        "message": if valid { "API key is valid" } else { "Invalid API key" }
    })))
}

async fn analyze_handler(key: Option<String>, request: AnalyzeRequest, state: ServerState) -> Result<Response, Infallible> {
    if let Some(rejection) = reject_key(key.as_deref(), &state) {
        return Ok(rejection);
    }

    let missing = request.missing_fields();
    if !missing.is_empty() {
        return Ok(json_reply(
            &json!({
                "error": "Missing required fields: repo, team, leader",
                "missing": missing
            }),
            StatusCode::BAD_REQUEST,
        ));
    }

    let repo = request.repo.clone();
    match Arc::clone(&state.pipeline).run_isolated(request).await {
        Ok(result) => Ok(warp::reply::json(&result).into_response()),
        Err(e) => {
            log::error!("❌ Analysis request failed: {}", e);
            Ok(json_reply(&error_hints::failure_body(&e, &repo), StatusCode::INTERNAL_SERVER_ERROR))
        }
    }
}
