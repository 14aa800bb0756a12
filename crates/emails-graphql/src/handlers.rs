//! HTTP handlers mounted by [`router`](crate::router).
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/graphql` | GraphQL endpoint; 400 on client errors |
//! | `GET`  | `/graphql` | GraphiQL explorer |
//! | `GET`  | `/health`  | Liveness probe |

use async_graphql::{ServerError, Value, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
  extract::State,
  http::StatusCode,
  response::{Html, IntoResponse, Response},
};
use tracing::warn;

use crate::{error::BAD_USER_INPUT, schema::EmailsSchema};

/// `POST /graphql`
///
/// Executes the request and picks the HTTP status from the outcome: input
/// that failed validation, or a document that never reached execution
/// (syntax error, unknown field, missing argument), is answered with 400.
/// Everything else is 200 with any field errors in `errors`.
pub async fn graphql(State(schema): State<EmailsSchema>, req: GraphQLRequest) -> Response {
  let response = schema.execute(req.into_inner()).await;
  let status = status_for(&response);

  if status == StatusCode::BAD_REQUEST {
    let messages: Vec<&str> = response.errors.iter().map(|e| e.message.as_str()).collect();
    warn!(?messages, "rejected graphql request");
  }

  let mut res = GraphQLResponse::from(response).into_response();
  *res.status_mut() = status;
  res
}

/// `GET /graphql`
pub async fn graphiql() -> impl IntoResponse {
  Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// `GET /health`
pub async fn health() -> &'static str { "ok" }

fn status_for(response: &async_graphql::Response) -> StatusCode {
  if response.errors.iter().any(is_bad_user_input) || is_request_error(response) {
    StatusCode::BAD_REQUEST
  } else {
    StatusCode::OK
  }
}

fn is_bad_user_input(err: &ServerError) -> bool {
  err
    .extensions
    .as_ref()
    .and_then(|ext| ext.get("code"))
    .is_some_and(|code| matches!(code, Value::String(c) if c == BAD_USER_INPUT))
}

/// Parse and validation failures carry no path and produce no data.
fn is_request_error(response: &async_graphql::Response) -> bool {
  !response.errors.is_empty()
    && response.data == Value::Null
    && response.errors.iter().all(|e| e.path.is_empty())
}
