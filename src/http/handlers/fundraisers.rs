use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::domain::fundraising::NewFundraiser;
use crate::domain::wallet::WalletAddress;
use crate::http::error::ApiError;
use crate::http::AppState;

// ============================================================================
// Fundraiser Handlers
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFundraiserRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub goal: Option<u64>,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub deadline: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct ContributeRequest {
    pub amount: Option<u64>,
}

pub async fn create_fundraiser(
    state: web::Data<AppState>,
    body: web::Json<CreateFundraiserRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = body.into_inner();

    let required_present = !req.title.is_empty()
        && !req.description.is_empty()
        && req.goal.is_some_and(|g| g > 0)
        && !req.creator.is_empty()
        && !req.deadline.is_empty()
        && !req.category.is_empty();

    if !required_present {
        return Err(ApiError::bad_request(
            "All fields (title, description, goal, creator, deadline, category) are required",
        ));
    }

    let fundraiser = state.fundraisers.create_fundraiser(NewFundraiser {
        title: req.title,
        description: req.description,
        goal: req.goal.unwrap_or(0),
        creator: WalletAddress::new(req.creator),
        deadline: req.deadline,
        category: req.category,
    });

    state.metrics.fundraisers_created.inc();
    tracing::info!(fundraiser_id = %fundraiser.id, goal = fundraiser.goal, "Fundraiser created");

    Ok(HttpResponse::Created().json(fundraiser))
}

pub async fn contribute(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<ContributeRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let amount = match body.amount {
        Some(amount) if amount > 0 => amount,
        _ => {
            return Err(ApiError::bad_request(
                "Contribution amount must be greater than zero",
            ))
        }
    };

    let fundraiser = state.fundraisers.contribute(&id, amount)?;

    state.metrics.record_contribution(amount);
    tracing::info!(
        fundraiser_id = %fundraiser.id,
        amount,
        raised = fundraiser.raised,
        "Contribution recorded"
    );

    Ok(HttpResponse::Ok().json(fundraiser))
}

pub async fn get_fundraiser(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let fundraiser = state
        .fundraisers
        .fundraiser(&path.into_inner())
        .ok_or_else(|| ApiError::NotFound("Fundraiser not found".to_string()))?;

    Ok(HttpResponse::Ok().json(fundraiser))
}

pub async fn list_fundraisers(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.fundraisers.list_fundraisers())
}
