use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::domain::expenses::ExpenseError;
use crate::domain::fundraising::FundraiserError;
use crate::domain::savings::VaultError;
use crate::domain::ticketing::TicketError;

// ============================================================================
// API Error Mapping
// ============================================================================
//
// Every store failure is an expected, user-facing condition, never a
// defect: unknown ids map to 404, everything else the caller can correct
// maps to 400. Bodies carry the `{ "error": ... }` shape.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}

impl From<TicketError> for ApiError {
    fn from(err: TicketError) -> Self {
        match err {
            TicketError::NotFound(_) => ApiError::NotFound("Event not found".to_string()),
            TicketError::SoldOut => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl From<ExpenseError> for ApiError {
    fn from(err: ExpenseError) -> Self {
        match err {
            ExpenseError::NotFound(_) => ApiError::NotFound("Expense not found".to_string()),
            ExpenseError::NotParticipant | ExpenseError::InvalidRequest(_) => {
                ApiError::BadRequest(err.to_string())
            }
        }
    }
}

impl From<FundraiserError> for ApiError {
    fn from(err: FundraiserError) -> Self {
        match err {
            FundraiserError::NotFound(_) => ApiError::NotFound("Fundraiser not found".to_string()),
            FundraiserError::InvalidAmount => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl From<VaultError> for ApiError {
    fn from(err: VaultError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
