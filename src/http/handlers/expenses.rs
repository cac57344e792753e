use std::collections::HashMap;

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::expenses::NewExpense;
use crate::domain::wallet::WalletAddress;
use crate::http::error::ApiError;
use crate::http::AppState;

// ============================================================================
// Expense Handlers
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    #[serde(default)]
    pub creator: String,
    pub title: Option<String>,
    #[serde(default)]
    pub total_amount: u64,
    #[serde(default)]
    pub participants: Vec<WalletAddress>,
    pub shares: Option<HashMap<WalletAddress, u64>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayExpenseRequest {
    pub expense_id: Uuid,
    #[serde(default)]
    pub sender: String,
}

#[derive(Debug, Deserialize)]
pub struct ListExpensesQuery {
    #[serde(default)]
    pub wallet: String,
}

pub async fn create_expense(
    state: web::Data<AppState>,
    body: web::Json<CreateExpenseRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = body.into_inner();
    let split_mode = if req.shares.as_ref().is_some_and(|s| !s.is_empty()) {
        "custom"
    } else {
        "equal"
    };

    let expense = state.expenses.create_expense(NewExpense {
        creator: req.creator,
        title: req.title,
        total_amount: req.total_amount,
        participants: req.participants,
        shares: req.shares,
    })?;

    state
        .metrics
        .expenses_created
        .with_label_values(&[split_mode])
        .inc();
    tracing::info!(
        expense_id = %expense.id,
        total = expense.total_amount,
        participants = expense.participants.len(),
        split_mode,
        "Expense created"
    );

    Ok(HttpResponse::Created().json(expense))
}

pub async fn get_expense(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let expense = state
        .expenses
        .expense(path.into_inner())
        .ok_or_else(|| ApiError::NotFound("Expense not found".to_string()))?;

    Ok(HttpResponse::Ok().json(expense))
}

pub async fn pay_expense_share(
    state: web::Data<AppState>,
    body: web::Json<PayExpenseRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = body.into_inner();

    if req.sender.is_empty() {
        return Err(ApiError::bad_request("sender is required"));
    }

    let sender = WalletAddress::new(req.sender);
    let expense = state.expenses.mark_paid(req.expense_id, &sender)?;

    state.metrics.shares_paid.inc();
    tracing::info!(expense_id = %req.expense_id, sender = %sender, "Share marked paid");

    // The transfer itself is settled on the external ledger by the payer's
    // wallet; the core records the reported payment.
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "expense": expense,
        "message": "Marked share as paid. Complete the transfer from your wallet.",
    })))
}

pub async fn list_expenses(
    state: web::Data<AppState>,
    query: web::Query<ListExpensesQuery>,
) -> Result<HttpResponse, ApiError> {
    if query.wallet.is_empty() {
        return Err(ApiError::bad_request("wallet query parameter is required"));
    }

    let wallet = WalletAddress::new(&query.wallet);
    Ok(HttpResponse::Ok().json(state.expenses.list_for_wallet(&wallet)))
}
