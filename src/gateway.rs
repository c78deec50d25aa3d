use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Local, Utc};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tokio::time::sleep;
use tracing::{debug, error, warn};

use crate::domain::order::STATUS_SUCCESS;
use crate::domain::{Coupon, EmulatedResponse, OrderRequest, OrderResponse, RequestFilters};
use crate::engine;
use crate::error::EmulatorError;
use crate::server::AppState;
use crate::time_format;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// JSON body indented with four spaces.
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        match self.0.serialize(&mut ser) {
            Ok(()) => (
                [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
                buf,
            )
                .into_response(),
            Err(err) => {
                error!("failed to serialize response: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    status: &'static str,
    messages: Vec<String>,
}

#[derive(Debug)]
pub enum ApiError {
    MissingRequestId,
    Engine(EmulatorError),
}

impl From<EmulatorError> for ApiError {
    fn from(err: EmulatorError) -> Self {
        ApiError::Engine(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MissingRequestId => (
                StatusCode::BAD_REQUEST,
                "missing X-Request-Id header".to_string(),
            ),
            ApiError::Engine(err @ EmulatorError::LimitTooLarge { .. }) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            ApiError::Engine(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };
        let body = PrettyJson(ErrorBody {
            status: "error",
            messages: vec![message],
        });
        (status, body).into_response()
    }
}

pub async fn post_orders(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<OrderRequest>,
) -> Result<PrettyJson<OrderResponse>, ApiError> {
    let request_id = match headers.get(REQUEST_ID_HEADER).and_then(|v| v.to_str().ok()) {
        Some(id) => id.to_owned(),
        None => {
            warn!("order request without request id");
            return Err(ApiError::MissingRequestId);
        }
    };
    debug!(request_id = %request_id, filters = ?req.filters, "order request received");

    let (response, delay) = prepare_orders(&state, &request_id, &req.filters).map_err(|err| {
        error!(request_id = %request_id, "failed to generate order response: {}", err);
        err
    })?;

    debug!(
        request_id = %request_id,
        delay_ms = delay.as_millis() as u64,
        "delaying order response"
    );
    sleep(delay).await;
    Ok(PrettyJson(response))
}

// Keeps the thread-local rng out of the async state machine.
fn prepare_orders(
    state: &AppState,
    request_id: &str,
    filters: &RequestFilters,
) -> Result<(OrderResponse, Duration), EmulatorError> {
    let mut rng = rand::thread_rng();
    let response = engine::generate_order_response(
        request_id,
        filters,
        &*state.catalog,
        time_format::local_now(),
        &mut rng,
    )?;
    Ok((response, state.delay.sample(&mut rng)))
}

pub async fn get_cpns(State(state): State<Arc<AppState>>) -> PrettyJson<Vec<Coupon>> {
    debug!("catalog listing requested");
    PrettyJson(state.catalog.coupons().to_vec())
}

pub async fn get_emulated(State(state): State<Arc<AppState>>) -> PrettyJson<EmulatedResponse> {
    let response = EmulatedResponse {
        timestamp: Utc::now().timestamp_millis(),
        status: STATUS_SUCCESS,
        message: format!(
            "Response generated at: {}",
            Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S%.3f")
        ),
    };
    let delay = state.delay.sample(&mut rand::thread_rng());
    debug!(delay_ms = delay.as_millis() as u64, "delaying emulated response");

    sleep(delay).await;
    PrettyJson(response)
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
