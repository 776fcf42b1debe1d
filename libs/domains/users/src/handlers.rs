use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
};
use axum_helpers::{
    AppError, AuditEvent, AuditOutcome, JsonBody, JwtAuth,
    errors::responses::{
        BadRequestValidationResponse, ConflictResponse, InternalServerErrorResponse,
        UnauthorizedResponse, UnprocessableEntityResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, TokenRequest, TokenResponse, UserResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

pub const TAG: &str = "Users";

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(create_user, issue_token),
    components(
        schemas(UserResponse, CreateUser, TokenRequest, TokenResponse),
        responses(
            BadRequestValidationResponse,
            UnprocessableEntityResponse,
            UnauthorizedResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Registration and token issuance")
    )
)]
pub struct ApiDoc;

/// Shared by the user endpoints
pub struct UsersState<R: UserRepository> {
    service: Arc<UserService<R>>,
    jwt: JwtAuth,
}

impl<R: UserRepository> Clone for UsersState<R> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            jwt: self.jwt.clone(),
        }
    }
}

/// Create the users router; `jwt` signs the tokens handed out by `/token`.
pub fn router<R: UserRepository + 'static>(service: UserService<R>, jwt: JwtAuth) -> Router {
    let state = UsersState {
        service: Arc::new(service),
        jwt,
    };

    Router::new()
        .route("/", post(create_user))
        .route("/token", post(issue_token))
        .with_state(state)
}

/// Register a new user
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateUser,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 422, response = UnprocessableEntityResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(state): State<UsersState<R>>,
    headers: HeaderMap,
    JsonBody(input): JsonBody<CreateUser>,
) -> UserResult<impl IntoResponse> {
    let user = state.service.register(input).await?;

    AuditEvent::new("user.register", AuditOutcome::Success)
        .with_user(user.id.to_string())
        .with_resource(format!("user:{}", user.id))
        .with_request(&headers)
        .log();

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// Exchange email and password for a bearer token
#[utoipa::path(
    post,
    path = "/token",
    tag = TAG,
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn issue_token<R: UserRepository>(
    State(state): State<UsersState<R>>,
    headers: HeaderMap,
    payload: Result<Json<TokenRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, AppError> {
    let Json(request) = payload?;

    let user = match state
        .service
        .authenticate(&request.email, &request.password)
        .await
    {
        Ok(user) => user,
        Err(e) => {
            if matches!(e, UserError::InvalidCredentials) {
                AuditEvent::new("user.token", AuditOutcome::Denied)
                    .with_resource(format!("user:{}", request.email))
                    .with_request(&headers)
                    .log();
            }
            return Err(e.into());
        }
    };

    let issued = state.jwt.issue(user.id.to_string()).map_err(|e| {
        tracing::error!(error = %e, "Failed to sign access token");
        AppError::InternalServerError("Failed to issue token".to_string())
    })?;

    AuditEvent::new("user.token", AuditOutcome::Success)
        .with_user(user.id.to_string())
        .with_request(&headers)
        .log();

    Ok(Json(TokenResponse {
        access_token: issued.access_token,
    }))
}
