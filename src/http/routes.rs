use actix_web::web;

use super::handlers::{events, expenses, fundraisers, system, vaults};

// ============================================================================
// Route Table
// ============================================================================
//
// Mirrors the public API of the original service. The external-network
// asset-creation route is intentionally absent: signing and broadcasting
// happen outside this service.
//
// ============================================================================

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Health check
            .route("/health", web::get().to(system::health))
            // Expense splitting
            .route("/expense/create", web::post().to(expenses::create_expense))
            .route("/expense/pay", web::post().to(expenses::pay_expense_share))
            .route("/expense/{id}", web::get().to(expenses::get_expense))
            .route("/expenses", web::get().to(expenses::list_expenses))
            // Events & ticketing
            .route("/event/create", web::post().to(events::create_event))
            .route("/event/verify/{walletAddress}", web::get().to(events::verify_tickets))
            .route("/event/{id}/buy", web::post().to(events::buy_ticket))
            .route("/event/{id}", web::get().to(events::get_event))
            .route("/events", web::get().to(events::list_events))
            // Fundraisers
            .route("/fundraiser/create", web::post().to(fundraisers::create_fundraiser))
            .route("/fundraiser/{id}/contribute", web::post().to(fundraisers::contribute))
            .route("/fundraiser/{id}", web::get().to(fundraisers::get_fundraiser))
            .route("/fundraisers", web::get().to(fundraisers::list_fundraisers))
            // Vaults (savings)
            .route("/vault/{address}/goal", web::post().to(vaults::set_vault_goal))
            .route("/vault/{address}/transaction", web::post().to(vaults::vault_transaction))
            .route("/vault/{address}", web::get().to(vaults::get_vault)),
    );

    // Prometheus scrape endpoint
    cfg.route("/metrics", web::get().to(system::metrics));
}

// ============================================================================
// API Tests - full dispatch surface against isolated stores
// ============================================================================

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::{json, Value};

    use super::configure;
    use crate::config::AppConfig;
    use crate::http::AppState;

    fn test_state() -> web::Data<AppState> {
        web::Data::new(AppState::new(AppConfig::default()).unwrap())
    }

    macro_rules! test_app {
        () => {
            test::init_service(App::new().app_data(test_state()).configure(configure)).await
        };
    }

    fn sample_event_body() -> Value {
        json!({
            "name": "Open Mic Night",
            "description": "Monthly open mic at the student union",
            "ticketPrice": 250,
            "totalTickets": 2,
            "creator": "ORGANIZER1",
            "category": "music",
            "date": "2026-10-03",
            "location": "Student Union",
        })
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test_app!();
        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn test_create_event_requires_all_fields() {
        let app = test_app!();
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/event/create")
                .set_json(json!({ "name": "No details" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("required"));
    }

    #[actix_web::test]
    async fn test_ticket_purchase_flow_until_sold_out() {
        let app = test_app!();

        let created = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/event/create")
                .set_json(sample_event_body())
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);
        let event: Value = test::read_body_json(created).await;
        let event_id = event["id"].as_str().unwrap().to_string();
        assert_eq!(event["remainingTickets"], 2);

        // Two purchases drain the inventory
        for expected_remaining in [1, 0] {
            let resp = test::call_service(
                &app,
                test::TestRequest::post()
                    .uri(&format!("/api/event/{}/buy", event_id))
                    .set_json(json!({ "buyer": "BUYER1" }))
                    .to_request(),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::OK);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["event"]["remainingTickets"], expected_remaining);
        }

        // Third purchase is rejected
        let sold_out = test::call_service(
            &app,
            test::TestRequest::post()
                .uri(&format!("/api/event/{}/buy", event_id))
                .set_json(json!({ "buyer": "BUYER2" }))
                .to_request(),
        )
        .await;
        assert_eq!(sold_out.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(sold_out).await;
        assert_eq!(body["error"], "Event sold out");

        // The buyer holds both tickets, lookup is case-normalized
        let verify = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/event/verify/buyer1")
                .to_request(),
        )
        .await;
        let body: Value = test::read_body_json(verify).await;
        assert_eq!(body["eventIds"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_buy_ticket_for_unknown_event_is_404() {
        let app = test_app!();
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri(&format!("/api/event/{}/buy", uuid::Uuid::new_v4()))
                .set_json(json!({ "buyer": "BUYER1" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_expense_equal_split_and_payment() {
        let app = test_app!();

        let created = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/expense/create")
                .set_json(json!({
                    "creator": "ALICE",
                    "title": "Pizza night",
                    "totalAmount": 100,
                    "participants": ["A", "B", "C"],
                }))
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);
        let expense: Value = test::read_body_json(created).await;
        assert_eq!(expense["amountPerParticipant"], 33);
        assert_eq!(expense["paid"]["A"], false);

        let paid = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/expense/pay")
                .set_json(json!({
                    "expenseId": expense["id"],
                    "sender": "a",
                }))
                .to_request(),
        )
        .await;
        assert_eq!(paid.status(), StatusCode::OK);
        let body: Value = test::read_body_json(paid).await;
        assert_eq!(body["expense"]["paid"]["A"], true);
    }

    #[actix_web::test]
    async fn test_expense_custom_split_totals_shares() {
        let app = test_app!();

        let created = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/expense/create")
                .set_json(json!({
                    "creator": "ALICE",
                    "shares": { "A": 40, "B": 60 },
                }))
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);
        let expense: Value = test::read_body_json(created).await;
        assert_eq!(expense["totalAmount"], 100);
        assert_eq!(expense["participants"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_list_expenses_requires_wallet_param() {
        let app = test_app!();
        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/expenses").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_fundraiser_lifecycle_and_zero_contribution() {
        let app = test_app!();

        let missing = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/fundraiser/create")
                .set_json(json!({ "title": "Half-filled" }))
                .to_request(),
        )
        .await;
        assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

        let created = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/fundraiser/create")
                .set_json(json!({
                    "title": "Community Garden",
                    "description": "Planters and soil for the quad",
                    "goal": 5000,
                    "creator": "GARDENER",
                    "deadline": "2026-11-01",
                    "category": "campus",
                }))
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);
        let fundraiser: Value = test::read_body_json(created).await;
        assert_eq!(fundraiser["raised"], 0);
        let id = fundraiser["id"].as_str().unwrap().to_string();

        let contributed = test::call_service(
            &app,
            test::TestRequest::post()
                .uri(&format!("/api/fundraiser/{}/contribute", id))
                .set_json(json!({ "amount": 750 }))
                .to_request(),
        )
        .await;
        assert_eq!(contributed.status(), StatusCode::OK);
        let body: Value = test::read_body_json(contributed).await;
        assert_eq!(body["raised"], 750);

        let zero = test::call_service(
            &app,
            test::TestRequest::post()
                .uri(&format!("/api/fundraiser/{}/contribute", id))
                .set_json(json!({ "amount": 0 }))
                .to_request(),
        )
        .await;
        assert_eq!(zero.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_negative_contribution_fails_deserialization() {
        let app = test_app!();
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/fundraiser/deadbeefdeadbeef/contribute")
                .set_json(json!({ "amount": -5 }))
                .to_request(),
        )
        .await;
        // u64 amounts make negatives unrepresentable on the wire
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_vault_flow() {
        let app = test_app!();

        // Fresh vault has the default shape
        let fresh = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/vault/SAVER1").to_request(),
        )
        .await;
        let body: Value = test::read_body_json(fresh).await;
        assert_eq!(body["balance"], 0);
        assert_eq!(body["goalName"], "General Savings");

        // Set a goal, then deposit and withdraw
        let goal = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/vault/SAVER1/goal")
                .set_json(json!({ "goal": 2000, "goalName": "Laptop fund" }))
                .to_request(),
        )
        .await;
        let body: Value = test::read_body_json(goal).await;
        assert_eq!(body["goalName"], "Laptop fund");

        let deposit = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/vault/SAVER1/transaction")
                .set_json(json!({ "amount": 500, "type": "deposit" }))
                .to_request(),
        )
        .await;
        let body: Value = test::read_body_json(deposit).await;
        assert_eq!(body["balance"], 500);

        let overdraw = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/vault/SAVER1/transaction")
                .set_json(json!({ "amount": 501, "type": "withdraw" }))
                .to_request(),
        )
        .await;
        assert_eq!(overdraw.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(overdraw).await;
        assert_eq!(body["error"], "Insufficient vault balance");

        let invalid = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/vault/SAVER1/transaction")
                .set_json(json!({ "amount": 10, "type": "transfer" }))
                .to_request(),
        )
        .await;
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(invalid).await;
        assert_eq!(body["error"], "Invalid transaction type");
    }

    #[actix_web::test]
    async fn test_metrics_endpoint_exposes_counters() {
        let app = test_app!();

        test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/event/create")
                .set_json(sample_event_body())
                .to_request(),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/metrics").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("events_created_total 1"));
    }
}
