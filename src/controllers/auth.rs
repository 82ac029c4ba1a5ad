use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::{
        shared::MessageResponse,
        user::{CredentialsRequest, LoginResponse, UserService},
    },
    error::{AppError, AppResult},
};

pub struct AuthController {
    user_service: Arc<UserService>,
}

impl AuthController {
    pub fn new(user_service: Arc<UserService>) -> Self {
        Self { user_service }
    }

    /// POST /api/register - Create an account
    pub async fn register(
        State(controller): State<Arc<AuthController>>,
        body: Option<Json<CredentialsRequest>>,
    ) -> AppResult<Json<MessageResponse>> {
        let request = require_body(body)?;
        let (username, password) = request.fields().ok_or_else(missing_fields)?;

        controller.user_service.register(username, password).await?;

        Ok(Json(MessageResponse::new("User registered successfully")))
    }

    /// POST /api/login - Check credentials and return the user's id
    pub async fn login(
        State(controller): State<Arc<AuthController>>,
        body: Option<Json<CredentialsRequest>>,
    ) -> AppResult<Json<LoginResponse>> {
        let request = require_body(body)?;
        let (username, password) = request.fields().ok_or_else(missing_fields)?;

        let user = controller.user_service.login(username, password).await?;

        Ok(Json(LoginResponse {
            message: "Login successful".to_string(),
            user_id: user.id,
        }))
    }
}

fn require_body(body: Option<Json<CredentialsRequest>>) -> AppResult<CredentialsRequest> {
    body.map(|Json(request)| request).ok_or_else(missing_fields)
}

fn missing_fields() -> AppError {
    AppError::BadRequest("Username and password are required".to_string())
}
