use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::ticketing::{NewEvent, TicketError};
use crate::domain::wallet::WalletAddress;
use crate::http::error::ApiError;
use crate::http::AppState;

// ============================================================================
// Event & Ticketing Handlers
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub ticket_price: Option<u64>,
    pub total_tickets: Option<u32>,
    #[serde(default)]
    pub creator: String,
    pub asset_id: Option<u64>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Deserialize)]
pub struct BuyTicketRequest {
    #[serde(default)]
    pub buyer: String,
}

pub async fn create_event(
    state: web::Data<AppState>,
    body: web::Json<CreateEventRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = body.into_inner();

    let required_present = !req.name.is_empty()
        && !req.description.is_empty()
        && req.ticket_price.is_some()
        && req.total_tickets.is_some_and(|t| t > 0)
        && !req.creator.is_empty()
        && !req.category.is_empty()
        && !req.date.is_empty()
        && !req.location.is_empty();

    if !required_present {
        return Err(ApiError::bad_request(
            "name, description, ticketPrice, totalTickets, creator, category, date and location are required",
        ));
    }

    let event = state.tickets.create_event(NewEvent {
        name: req.name,
        description: req.description,
        ticket_price: req.ticket_price.unwrap_or(0),
        total_tickets: req.total_tickets.unwrap_or(0),
        asset_id: req.asset_id.unwrap_or(state.config.campus_token_id),
        creator: WalletAddress::new(req.creator),
        category: req.category,
        date: req.date,
        location: req.location,
    });

    state.metrics.events_created.inc();
    tracing::info!(event_id = %event.id, tickets = event.total_tickets, "Event created");

    Ok(HttpResponse::Created().json(event))
}

pub async fn buy_ticket(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<BuyTicketRequest>,
) -> Result<HttpResponse, ApiError> {
    let event_id = path.into_inner();
    let req = body.into_inner();

    if req.buyer.is_empty() {
        return Err(ApiError::bad_request("buyer is required"));
    }

    let buyer = WalletAddress::new(req.buyer);
    let event = state
        .tickets
        .purchase_ticket(event_id, &buyer)
        .inspect_err(|err| {
            state
                .metrics
                .ticket_rejections
                .with_label_values(&[rejection_reason(err)])
                .inc();
        })?;

    state.metrics.tickets_sold.inc();
    tracing::info!(
        event_id = %event_id,
        buyer = %buyer,
        remaining = event.remaining_tickets,
        "Ticket reserved"
    );

    // The actual asset transfer on the external ledger is the caller's
    // job; the core only tracks ownership.
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "event": event,
        "message": "Ticket reserved. Complete the asset transfer from your wallet.",
    })))
}

pub async fn verify_tickets(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    let wallet = WalletAddress::new(path.into_inner());
    let event_ids = state.tickets.tickets_of_wallet(&wallet);

    HttpResponse::Ok().json(serde_json::json!({
        "walletAddress": wallet,
        "eventIds": event_ids,
    }))
}

pub async fn get_event(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let event = state
        .tickets
        .event(path.into_inner())
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;

    Ok(HttpResponse::Ok().json(event))
}

pub async fn list_events(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.tickets.list_events())
}

fn rejection_reason(err: &TicketError) -> &'static str {
    match err {
        TicketError::NotFound(_) => "not_found",
        TicketError::SoldOut => "sold_out",
    }
}
