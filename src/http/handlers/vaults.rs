use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::domain::savings::{VaultError, DEFAULT_GOAL_NAME};
use crate::domain::wallet::WalletAddress;
use crate::http::error::ApiError;
use crate::http::AppState;

// ============================================================================
// Vault Handlers
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetGoalRequest {
    #[serde(default)]
    pub goal: u64,
    pub goal_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VaultTransactionRequest {
    pub amount: Option<u64>,
    /// "deposit" or "withdraw"
    #[serde(rename = "type", default)]
    pub kind: String,
}

pub async fn get_vault(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let address = WalletAddress::new(path.into_inner());
    HttpResponse::Ok().json(state.vaults.vault(&address))
}

pub async fn set_vault_goal(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<SetGoalRequest>,
) -> HttpResponse {
    let address = WalletAddress::new(path.into_inner());
    let req = body.into_inner();
    let goal_name = req
        .goal_name
        .unwrap_or_else(|| DEFAULT_GOAL_NAME.to_string());

    let vault = state.vaults.set_goal(&address, req.goal, goal_name);
    tracing::info!(address = %address, goal = vault.goal, "Vault goal updated");

    HttpResponse::Ok().json(vault)
}

pub async fn vault_transaction(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<VaultTransactionRequest>,
) -> Result<HttpResponse, ApiError> {
    let address = WalletAddress::new(path.into_inner());
    let req = body.into_inner();
    let amount = req.amount.unwrap_or(0);

    let result = match req.kind.as_str() {
        "deposit" => state.vaults.deposit(&address, amount),
        "withdraw" => state.vaults.withdraw(&address, amount),
        _ => return Err(ApiError::bad_request("Invalid transaction type")),
    };

    match result {
        Ok(vault) => {
            state.metrics.record_vault_transaction(&req.kind, true, "");
            tracing::info!(
                address = %address,
                kind = %req.kind,
                amount,
                balance = vault.balance,
                "Vault transaction applied"
            );
            Ok(HttpResponse::Ok().json(vault))
        }
        Err(err) => {
            state
                .metrics
                .record_vault_transaction(&req.kind, false, rejection_reason(&err));
            Err(err.into())
        }
    }
}

fn rejection_reason(err: &VaultError) -> &'static str {
    match err {
        VaultError::InsufficientBalance => "insufficient_balance",
        VaultError::InvalidAmount => "invalid_amount",
    }
}
