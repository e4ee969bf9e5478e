//! The dispatch handler — one handler serves every registered path.

use axum::Json;
use axum::body::{Body, to_bytes};
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use picomock_app::ports::NoiseSource;
use picomock_app::simulator::Outcome;
use picomock_domain::error::BodyError;
use picomock_domain::method::Method;

use crate::error::ApiError;
use crate::state::AppState;

/// Largest request body the simulator accepts.
const BODY_LIMIT: usize = 64 * 1024;

/// Possible responses from the dispatch handler.
pub enum DispatchResponse {
    /// A simulated endpoint answered with a JSON fixture.
    Reply(StatusCode, Json<Value>),
    /// Registered path, unregistered method.
    MethodNotAllowed,
    /// Unreachable through generated routes; kept so the outcome mapping
    /// stays total.
    NotSimulated,
}

impl IntoResponse for DispatchResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Reply(status, json) => (status, json).into_response(),
            Self::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response()
            }
            Self::NotSimulated => StatusCode::NOT_FOUND.into_response(),
        }
    }
}

/// Handler bound to every registered path.
///
/// Parses the body only for body-carrying methods; a body on a GET is
/// ignored rather than failing the request. Method names outside the
/// registrable set can never match a table entry, so they short-circuit
/// to the method-miss reply.
///
/// # Errors
///
/// Returns [`ApiError`] for unreadable or malformed JSON bodies and for
/// fixture failures inside hooks.
pub async fn dispatch<N>(
    State(state): State<AppState<N>>,
    request: Request<Body>,
) -> Result<DispatchResponse, ApiError>
where
    N: NoiseSource + Send + Sync + 'static,
{
    let path = request.uri().path().to_owned();
    let Some(method) = Method::from_name(request.method().as_str()) else {
        return Ok(DispatchResponse::MethodNotAllowed);
    };

    let body = if method.carries_body() {
        read_json_body(request).await?
    } else {
        None
    };

    match state.simulator.dispatch(&path, method, body.as_ref())? {
        Outcome::Reply(reply) => Ok(DispatchResponse::Reply(
            StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(reply.body),
        )),
        Outcome::MethodNotAllowed => Ok(DispatchResponse::MethodNotAllowed),
        Outcome::PassThrough => Ok(DispatchResponse::NotSimulated),
    }
}

async fn read_json_body(request: Request<Body>) -> Result<Option<Value>, ApiError> {
    let bytes = to_bytes(request.into_body(), BODY_LIMIT)
        .await
        .map_err(|_| BodyError::Unreadable)?;
    if bytes.is_empty() {
        return Ok(None);
    }
    let value = serde_json::from_slice(&bytes).map_err(BodyError::Json)?;
    Ok(Some(value))
}
