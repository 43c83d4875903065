use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{Wish, WishPayload};
use crate::repository::{GatewayError, WishRepo};
use crate::{AppError, AppState};

fn parse_id(id: Result<Path<Uuid>, PathRejection>) -> Result<Uuid, AppError> {
    id.map(|Path(id)| id)
        .map_err(|rejection| AppError::MalformedInput(rejection.body_text()))
}

fn parse_body(
    payload: Result<Json<WishPayload>, JsonRejection>,
) -> Result<WishPayload, AppError> {
    payload
        .map(|Json(payload)| payload)
        .map_err(|rejection| AppError::MalformedInput(rejection.body_text()))
}

fn log_not_found(err: GatewayError) -> AppError {
    if let GatewayError::NotFound(id) = &err {
        warn!("Wish not found with ID: {id}");
    }
    err.into()
}

/// List all wishes
#[utoipa::path(
    get,
    path = "/wishes",
    responses(
        (status = 200, description = "All wishes", body = [Wish]),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_wishes(State(state): State<AppState>) -> Result<Json<Vec<Wish>>, AppError> {
    let wishes = WishRepo::list_all(&state.db_pool).await?;
    info!("Returning {} wishes", wishes.len());
    Ok(Json(wishes))
}

/// Get wish by ID
#[utoipa::path(
    get,
    path = "/wishes/{id}",
    params(
        ("id" = Uuid, Path, description = "Wish ID")
    ),
    responses(
        (status = 200, description = "Wish found", body = Wish),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "Wish not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_wish(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Wish>, AppError> {
    let id = parse_id(id)?;
    info!("Fetching wish with ID: {id}");

    let wish = WishRepo::get_by_id(&state.db_pool, id)
        .await
        .map_err(log_not_found)?;
    Ok(Json(wish))
}

/// Create a new wish
///
/// The assigned identifier is returned in the `Location` header.
#[utoipa::path(
    post,
    path = "/wishes",
    request_body = WishPayload,
    responses(
        (status = 201, description = "Wish created"),
        (status = 400, description = "Malformed JSON or empty field"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_wish(
    State(state): State<AppState>,
    payload: Result<Json<WishPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = parse_body(payload)?;

    let wish = Wish::new(payload.name, payload.description);
    WishRepo::insert(&state.db_pool, &wish).await?;
    info!("Created wish with ID: {}", wish.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/wishes/{}", wish.id))],
    ))
}

/// Update an existing wish
#[utoipa::path(
    put,
    path = "/wishes/{id}",
    params(
        ("id" = Uuid, Path, description = "Wish ID")
    ),
    request_body = WishPayload,
    responses(
        (status = 200, description = "Wish updated"),
        (status = 400, description = "Malformed ID, malformed JSON or empty field"),
        (status = 404, description = "Wish not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_wish(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<WishPayload>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(id)?;
    let payload = parse_body(payload)?;

    let wish = WishRepo::update_by_id(&state.db_pool, id, &payload)
        .await
        .map_err(log_not_found)?;
    info!("Updated wish with ID: {}", wish.id);

    Ok(StatusCode::OK)
}

/// Delete a wish
#[utoipa::path(
    delete,
    path = "/wishes/{id}",
    params(
        ("id" = Uuid, Path, description = "Wish ID")
    ),
    responses(
        (status = 200, description = "Wish deleted"),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "Wish not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_wish(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(id)?;

    WishRepo::delete_by_id(&state.db_pool, id)
        .await
        .map_err(log_not_found)?;
    info!("Deleted wish with ID: {id}");

    Ok(StatusCode::OK)
}
