use crate::backend::BookingStore;
use crate::configuration::Configuration;
use crate::scheduler::{BookingOutcome, Scheduler};
use axum::body::Body;
use axum::extract::rejection::JsonRejection;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::post;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

#[derive(Clone)]
struct AppState<B: BookingStore> {
    scheduler: Scheduler<B>,
    api_key: String,
}

pub fn create_app<B, C>(store: B, configuration: C) -> Router
where
    B: BookingStore,
    C: Configuration,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState {
        scheduler: Scheduler::new(store),
        api_key: configuration.api_key(),
    };

    Router::new()
        .route("/schedule", post(schedule_appointment::<B>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key::<B>,
        ))
        .with_state(state)
        .layer(cors)
}

/// Missing and wrong keys get the same answer, so the header leaks nothing
/// about which it was.
async fn require_api_key<B: BookingStore>(
    State(state): State<AppState<B>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let presented = request
        .headers()
        .get("x-api-key")
        .and_then(|value| value.to_str().ok());
    if presented != Some(state.api_key.as_str()) {
        info!("Rejected request with a missing or wrong api key");
        return BookingOutcome::Unauthorized.into_response();
    }
    next.run(request).await
}

async fn schedule_appointment<B: BookingStore>(
    State(state): State<AppState<B>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Ok(Json(payload)) = payload else {
        info!("Rejected a request body that is not JSON");
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Invalid JSON body" })),
        )
            .into_response();
    };
    state.scheduler.schedule(&payload).into_response()
}

impl IntoResponse for BookingOutcome {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            BookingOutcome::Scheduled => (
                StatusCode::OK,
                json!({ "message": "Appointment Scheduled!" }),
            ),
            BookingOutcome::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "message": "Unauthorized" }),
            ),
            BookingOutcome::BadRequest(errors) => (
                StatusCode::BAD_REQUEST,
                json!({ "message": "Validation failed", "errors": errors }),
            ),
            BookingOutcome::Conflict(detail) => {
                let message = detail.unwrap_or_else(|| {
                    "An appointment already exists at the requested time".into()
                });
                (StatusCode::CONFLICT, json!({ "message": message }))
            }
            BookingOutcome::InternalError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": "Internal Server Error" }),
            ),
        };
        (status, Json(body)).into_response()
    }
}
