//! GraphQL API for the emails service.
//!
//! Exposes an axum [`Router`] serving an async-graphql schema whose resolvers
//! delegate to any [`EmailService`]. TLS and auth are the caller's concern.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let service = Arc::new(StoreService::new(store));
//! axum::serve(listener, emails_graphql::app(service)).await?;
//! ```

pub mod error;
pub mod handlers;
pub mod resolver;
pub mod schema;

pub use error::ApiError;
pub use resolver::EmailsResolver;
pub use schema::{EmailsSchema, build_schema, sdl};

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use emails_core::EmailService;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `EMAILS_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  /// SQLite file; `:memory:` keeps everything in process.
  pub store_path: PathBuf,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build an axum [`Router`] around an already-built schema.
pub fn router(schema: EmailsSchema) -> Router {
  Router::new()
    .route("/graphql", get(handlers::graphiql).post(handlers::graphql))
    .route("/health", get(handlers::health))
    .layer(TraceLayer::new_for_http())
    .with_state(schema)
}

/// Wire `service` through a resolver and schema into a ready router.
pub fn app(service: Arc<dyn EmailService>) -> Router {
  router(build_schema(EmailsResolver::new(service)))
}

// ─── Integration tests ────────────────────────────────────────────────────────
