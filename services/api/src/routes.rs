//! API service routes
//!
//! Auth and contact endpoints are public; every item endpoint sits behind
//! the bearer-token gate and only ever touches the caller's own records.

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, patch, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::info;
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    middleware::{AuthUser, auth_middleware},
    models::{NewContactMessage, NewItem, NewUser, PublicUser},
    qr, validation,
    state::AppState,
};

/// Request for account signup
#[derive(Deserialize)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request for account login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response for signup and login
#[derive(Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: PublicUser,
    pub token: String,
}

/// Request for item creation
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    pub item_name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i32>,
    pub location: Option<String>,
}

/// Request for a contact form submission
#[derive(Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    let item_routes = Router::new()
        .route("/items", post(create_item).get(list_items))
        .route("/items/:id", get(get_item))
        .route("/items/:id/quantity", patch(adjust_quantity))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/contact", post(submit_contact))
        .merge(item_routes)
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database_up = common::database::health_check(&state.db_pool)
        .await
        .unwrap_or(false);

    Json(json!({
        "status": "ok",
        "service": "scanventory-api",
        "database": if database_up { "up" } else { "down" },
    }))
}

/// Account signup endpoint
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> ApiResult<impl IntoResponse> {
    let name = payload.name.unwrap_or_default();
    let name = name.trim();
    let email = payload.email.unwrap_or_default();
    let email = email.trim();
    let password = payload.password.unwrap_or_default();

    validation::validate_name(name).map_err(ApiError::Validation)?;
    validation::validate_email(email).map_err(ApiError::Validation)?;
    validation::validate_password(&password).map_err(ApiError::Validation)?;

    if state.user_repository.find_by_email(email).await?.is_some() {
        return Err(ApiError::Conflict(
            "An account with this email already exists.".to_string(),
        ));
    }

    let user = state
        .user_repository
        .create(&NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password,
        })
        .await?;

    let token = state.jwt_service.generate_token(&user)?;

    info!("Account created: {}", user.id);

    let response = AuthResponse {
        message: "Account created successfully.".to_string(),
        user: PublicUser::from(&user),
        token,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Account login endpoint
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let email = payload.email.unwrap_or_default();
    let email = email.trim();
    let password = payload.password.unwrap_or_default();

    if email.is_empty() || password.is_empty() {
        return Err(ApiError::Validation(
            "Email and password are required.".to_string(),
        ));
    }

    let user = state
        .user_repository
        .find_by_email(email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !state.user_repository.verify_password(&user, &password).await? {
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.jwt_service.generate_token(&user)?;

    info!("Account logged in: {}", user.id);

    let response = AuthResponse {
        message: "Logged in successfully.".to_string(),
        user: PublicUser::from(&user),
        token,
    };

    Ok((StatusCode::OK, Json(response)))
}

/// Create a new inventory item and generate its QR code
///
/// The insert must complete before the QR artifact can be generated: the
/// payload is the store-assigned id, which does not exist until the row
/// does. Only the finished record, artifact included, is returned.
pub async fn create_item(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateItemRequest>,
) -> ApiResult<impl IntoResponse> {
    let item_name = payload.item_name.unwrap_or_default();
    let item_name = item_name.trim();
    let category = payload.category.unwrap_or_default();
    let category = category.trim();
    let location = payload.location.unwrap_or_default();
    let location = location.trim();

    // Quantity may be zero but not absent.
    let quantity = match payload.quantity {
        Some(q) => q,
        None => {
            return Err(ApiError::Validation("All fields are required.".to_string()));
        }
    };

    if item_name.is_empty() || category.is_empty() || location.is_empty() {
        return Err(ApiError::Validation("All fields are required.".to_string()));
    }

    if quantity < 0 {
        return Err(ApiError::Validation(
            "Quantity cannot be negative.".to_string(),
        ));
    }

    let item = state
        .item_repository
        .create(
            user.id,
            &NewItem {
                item_name: item_name.to_string(),
                category: category.to_string(),
                quantity,
                location: location.to_string(),
            },
        )
        .await?;

    let qr_code = qr::encode_item_id(&item.id.to_string())?;
    let item = state.item_repository.attach_qr_code(item.id, &qr_code).await?;

    info!("Item created: {} for account {}", item.id, user.id);

    Ok((StatusCode::CREATED, Json(item)))
}

/// Get all items for the caller, newest first
pub async fn list_items(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let items = state.item_repository.list_by_owner(user.id).await?;

    Ok(Json(items))
}

/// Get a single item by id, only if the caller owns it
pub async fn get_item(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let item = state
        .item_repository
        .find_by_id(user.id, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Item not found.".to_string()))?;

    Ok(Json(item))
}

/// Apply a signed quantity delta to an owned item
///
/// This is the only path that changes quantity. An absolute target value
/// is translated to a delta by the caller, so the non-negativity check
/// lives in exactly one place.
pub async fn adjust_quantity(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<Value>,
) -> ApiResult<impl IntoResponse> {
    let delta = payload
        .get("delta")
        .and_then(Value::as_i64)
        .ok_or_else(|| ApiError::Validation("delta (number) is required.".to_string()))?;
    let delta = i32::try_from(delta)
        .map_err(|_| ApiError::Validation("delta is out of range.".to_string()))?;

    match state
        .item_repository
        .adjust_quantity(user.id, id, delta)
        .await?
    {
        Some(item) => Ok(Json(item)),
        // The guarded update matched nothing: either no such owned item,
        // or the delta would have taken the quantity below zero.
        None => match state.item_repository.find_by_id(user.id, id).await? {
            Some(_) => Err(ApiError::InvalidOperation(
                "Quantity cannot be negative.".to_string(),
            )),
            None => Err(ApiError::NotFound("Item not found.".to_string())),
        },
    }
}

/// Contact form submission endpoint
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequest>,
) -> ApiResult<impl IntoResponse> {
    let name = payload.name.unwrap_or_default();
    let name = name.trim();
    let email = payload.email.unwrap_or_default();
    let email = email.trim();
    let message = payload.message.unwrap_or_default();
    let message = message.trim();

    validation::validate_name(name).map_err(ApiError::Validation)?;
    validation::validate_email(email).map_err(ApiError::Validation)?;
    validation::validate_message(message).map_err(ApiError::Validation)?;

    let saved = state
        .contact_repository
        .create(&NewContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
        .await?;

    info!("Contact submission received from {}", saved.email);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Thank you for contacting us! We will get back to you soon.",
        })),
    ))
}
