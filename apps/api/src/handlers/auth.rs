use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::Account;
use crate::presence::{presence, time_ago, Presence};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Directory listing row: the account plus the derived presence fields the
/// admin view renders.
#[derive(Debug, Serialize)]
pub struct AccountView {
    #[serde(flatten)]
    pub account: Account,
    pub presence: Presence,
    pub last_login_ago: String,
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<Account>, AppError> {
    let mut ats = state.ats.write().await;
    ats.login(&req.email, &req.password, Utc::now())
        .map(Json)
        .ok_or(AppError::InvalidCredentials)
}

/// POST /api/v1/auth/logout
pub async fn handle_logout(State(state): State<AppState>) -> StatusCode {
    let mut ats = state.ats.write().await;
    ats.logout(Utc::now());
    StatusCode::NO_CONTENT
}

/// GET /api/v1/auth/session
pub async fn handle_session(State(state): State<AppState>) -> Json<Option<Account>> {
    let ats = state.ats.read().await;
    Json(ats.active().cloned())
}

/// GET /api/v1/accounts
pub async fn handle_accounts(State(state): State<AppState>) -> Json<Vec<AccountView>> {
    let now = Utc::now();
    let ats = state.ats.read().await;
    let views = ats
        .accounts()
        .iter()
        .map(|account| AccountView {
            presence: presence(Some(account.last_action), now),
            last_login_ago: time_ago(Some(account.last_login), now),
            account: account.clone(),
        })
        .collect();
    Json(views)
}
