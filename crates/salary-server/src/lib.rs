//! HTTP server assembly for the salary tracker.
//!
//! Mounts the [`salary_api`] router under `/api`, adds `/health` and the JSON
//! 404 fallback, and wraps everything in the ambient layers: request tracing,
//! CORS, and a panic catcher that answers with a JSON 500.

use std::{
  any::Any,
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::{
  Json, Router,
  http::{HeaderValue, Method, StatusCode, header},
  response::{IntoResponse, Response},
  routing::get,
};
use salary_core::store::SalaryStore;
use serde::Deserialize;
use serde_json::json;
use tower_http::{
  catch_panic::CatchPanicLayer,
  cors::{AllowOrigin, Any as AnyOrigin, CorsLayer},
  trace::TraceLayer,
};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `SALARY_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:            String,
  #[serde(default = "default_port")]
  pub port:            u16,
  /// SQLite database file; a leading `~/` is expanded at startup.
  #[serde(default = "default_store_path")]
  pub store_path:      PathBuf,
  /// Origins allowed by CORS. Empty means any origin (without credentials).
  #[serde(default)]
  pub allowed_origins: Vec<String>,
}

fn default_host() -> String { "0.0.0.0".to_owned() }

fn default_port() -> u16 { 5050 }

fn default_store_path() -> PathBuf { PathBuf::from("salary_tracker.db") }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:            default_host(),
      port:            default_port(),
      store_path:      default_store_path(),
      allowed_origins: Vec::new(),
    }
  }
}

impl ServerConfig {
  /// Layer the optional TOML file at `path` under `SALARY_*` environment
  /// variables (e.g. `SALARY_PORT=8080`,
  /// `SALARY_ALLOWED_ORIGINS=http://localhost:3000,http://127.0.0.1:3000`).
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(
        config::Environment::with_prefix("SALARY")
          .try_parsing(true)
          .list_separator(",")
          .with_list_parse_key("allowed_origins"),
      )
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Application state ────────────────────────────────────────────────────────

/// Everything the router is built from. The store handle is opened by the
/// caller and shared by reference count with every handler.
#[derive(Clone)]
pub struct AppState<S: SalaryStore> {
  pub store:  Arc<S>,
  pub config: Arc<ServerConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the complete application router.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: SalaryStore + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let routes = Router::new()
    .route("/health", get(salary_api::health))
    .nest("/api", salary_api::api_router(state.store.clone()))
    .fallback(salary_api::endpoint_not_found);

  with_ambient_layers(routes, &state.config)
}

/// Wrap `routes` in panic catching, CORS, and request tracing.
pub fn with_ambient_layers(routes: Router, config: &ServerConfig) -> Router {
  routes
    .layer(CatchPanicLayer::custom(panic_response))
    .layer(cors_layer(&config.allowed_origins))
    .layer(TraceLayer::new_for_http())
}

/// CORS policy for the browser form.
///
/// With no configured origins any origin is allowed, without credentials.
/// Otherwise only the listed origins are allowed, with credentials; entries
/// that are not valid header values are skipped.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
  let base = CorsLayer::new()
    .allow_methods([
      Method::GET,
      Method::POST,
      Method::PUT,
      Method::DELETE,
      Method::OPTIONS,
    ])
    .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

  if origins.is_empty() {
    return base.allow_origin(AnyOrigin);
  }

  let parsed: Vec<HeaderValue> = origins
    .iter()
    .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
      Ok(v) => Some(v),
      Err(_) => {
        tracing::warn!(%origin, "ignoring invalid CORS origin");
        None
      }
    })
    .collect();

  base
    .allow_origin(AllowOrigin::list(parsed))
    .allow_credentials(true)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
  let detail = if let Some(s) = err.downcast_ref::<String>() {
    s.clone()
  } else if let Some(s) = err.downcast_ref::<&str>() {
    (*s).to_owned()
  } else {
    "unknown panic".to_owned()
  };

  tracing::error!(%detail, "request handler panicked");
  (
    StatusCode::INTERNAL_SERVER_ERROR,
    Json(json!({
      "success": false,
      "message": "Internal server error",
      "error": detail,
    })),
  )
    .into_response()
}

// ─── Integration tests ────────────────────────────────────────────────────────
