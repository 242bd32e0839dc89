// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use stayhub::SystemClock;
use stayhub_api::{
    ApiError, CreateBookingRequest, CreateBookingResponse, ExtendBookingRequest,
    ExtendBookingResponse, create_booking, extend_booking,
};
use stayhub_persistence::SqlitePersistence;

/// StayHub Server - HTTP server for the StayHub booking system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The persistence layer sits behind a single mutex that each booking
/// handler holds across its whole check-then-write sequence. That lock is
/// the serialization point required to keep two concurrent proposals for
/// the same dates from both passing the availability check.
#[derive(Clone)]
struct AppState {
    /// The booking store.
    persistence: Arc<Mutex<SqlitePersistence>>,
}

/// Health check response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Always "OK" while the server is up.
    message: String,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// The stable machine-readable error kind, when one applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The stable machine-readable error kind, when one applies.
    kind: Option<String>,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            kind: self.kind,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                kind: Some(String::from("invalid_input")),
                message: err.to_string(),
            },
            ApiError::BookingRejected { kind, .. } => Self {
                status: StatusCode::BAD_REQUEST,
                kind: Some(kind.to_string()),
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                kind: Some(String::from("not_found")),
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    kind: None,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Handler for GET /health endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: String::from("OK"),
    })
}

/// Handler for POST /bookings endpoint.
///
/// Creates a new booking. The persistence lock is held across the whole
/// invocation so the availability check and the insert form one atomic
/// step with respect to other booking requests.
async fn handle_create_booking(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<Json<CreateBookingResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: CreateBookingResponse = create_booking(&mut persistence, &SystemClock, &req)?;
    drop(persistence);

    info!(
        booking_id = response.booking.booking_id,
        unit_id = %response.booking.unit_id,
        "Successfully created booking"
    );

    Ok(Json(response))
}

/// Handler for PATCH `/bookings/{booking_id}/extend` endpoint.
///
/// Lengthens an existing booking. As with creation, the persistence lock
/// spans the conflict check and the update.
async fn handle_extend_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    Json(req): Json<ExtendBookingRequest>,
) -> Result<Json<ExtendBookingResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ExtendBookingResponse = extend_booking(&mut persistence, booking_id, &req)?;
    drop(persistence);

    info!(
        booking_id,
        number_of_nights = response.booking.number_of_nights,
        "Successfully extended booking"
    );

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/bookings", post(handle_create_booking))
        .route("/bookings/{booking_id}/extend", patch(handle_extend_booking))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing StayHub Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: SqlitePersistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqlitePersistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqlitePersistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
