//! Integration tests for the HTTP API.
//!
//! These tests drive the full router with a mock generation service:
//! 1. Submissions commit a scorecard and record an audit entry
//! 2. Scorecard filtering and report export
//! 3. Failure responses leave the previous analysis in place

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use contract_lens::adapters::ai::{MockAIProvider, MockError};
use contract_lens::adapters::http::app_router;
use contract_lens::bootstrap::Services;
use contract_lens::config::AiConfig;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn vendor_reply() -> String {
    json!({
        "contractType": "Vendor Service Agreement",
        "parties": ["Acme Pvt Ltd", "Sharma Traders"],
        "jurisdiction": "Bengaluru, Karnataka",
        "financialAmount": "₹5,00,000",
        "effectiveDate": "2024-04-01",
        "compositeRiskScore": 85,
        "summary": "One-sided indemnity and no liability cap.",
        "clauses": [
            {
                "id": "c1",
                "originalText": "Vendor shall indemnify Client for all losses.",
                "explanation": "You pay for every loss, however caused.",
                "riskLevel": "High",
                "category": "Indemnity",
                "suggestion": "Limit indemnity to losses caused by Vendor's negligence.",
                "isUnfavorable": true
            },
            {
                "id": "c2",
                "originalText": "Payment within 90 days of invoice.",
                "explanation": "Long payment cycle.",
                "riskLevel": "Medium",
                "category": "Payment",
                "isUnfavorable": true
            },
            {
                "id": "c3",
                "originalText": "Notices shall be in writing.",
                "explanation": "Standard notice clause.",
                "riskLevel": "Low",
                "category": "Notices",
                "isUnfavorable": false
            }
        ],
        "missingCrucialTerms": ["Limitation of liability"],
        "suggestedRenegotiationPoints": ["Cap liability at the contract value"]
    })
    .to_string()
}

struct TestApp {
    router: Router,
    provider: Arc<MockAIProvider>,
}

fn test_app(provider: MockAIProvider) -> TestApp {
    let provider = Arc::new(provider);
    let services = Services::new(provider.clone(), &AiConfig::default());
    TestApp {
        router: app_router(&services, &[]),
        provider,
    }
}

impl TestApp {
    async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, body) = self
            .send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let (status, body) = self
            .send(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await;
        (status, serde_json::from_slice(&body).unwrap())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn submission_produces_scorecard_and_audit_entry() {
    let app = test_app(MockAIProvider::new().with_response(vendor_reply()));

    let (status, json) = app
        .post_json(
            "/api/analyses",
            json!({"contractName": "Vendor Agreement", "text": "Vendor shall indemnify..."}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["scorecard"]["riskScore"], 85);
    assert_eq!(json["scorecard"]["riskBand"], "High");
    assert_eq!(json["scorecard"]["clauses"].as_array().unwrap().len(), 3);

    let (_, audit) = app.get_json("/api/audit").await;
    assert_eq!(audit["total"], 1);
    assert_eq!(audit["entries"][0]["action"], "Analysis Completed");
    assert_eq!(audit["entries"][0]["contractName"], "Vendor Agreement");

    let (_, dashboard) = app.get_json("/api/dashboard").await;
    assert_eq!(dashboard["totalAudits"], 1);
    assert_eq!(dashboard["recentAudits"][0]["contractName"], "Vendor Agreement");
}

#[tokio::test]
async fn scorecard_filter_selects_clauses_by_level() {
    let app = test_app(MockAIProvider::new().with_response(vendor_reply()));
    app.post_json(
        "/api/analyses",
        json!({"contractName": "Vendor Agreement", "text": "terms"}),
    )
    .await;

    let (status, high) = app.get_json("/api/analysis?risk=High").await;
    assert_eq!(status, StatusCode::OK);
    let clauses = high["clauses"].as_array().unwrap();
    assert_eq!(clauses.len(), 1);
    assert_eq!(clauses[0]["id"], "c1");

    let (_, medium) = app.get_json("/api/analysis?risk=Medium").await;
    assert_eq!(
        medium["clauses"][0]["suggestion"],
        "No alternative wording was suggested for this clause."
    );
    let (_, low) = app.get_json("/api/analysis?risk=Low").await;
    assert_eq!(low["clauses"][0]["suggestion"], Value::Null);

    let (_, all) = app.get_json("/api/analysis").await;
    let ids: Vec<&str> = all["clauses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["c1", "c2", "c3"]);

    let (status, _) = app.get_json("/api/analysis?risk=Severe").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn failed_submission_keeps_previous_analysis() {
    let app = test_app(
        MockAIProvider::new()
            .with_response(vendor_reply())
            .with_error(MockError::Unavailable {
                message: "overloaded".to_string(),
            }),
    );
    app.post_json(
        "/api/analyses",
        json!({"contractName": "First", "text": "terms"}),
    )
    .await;

    let (status, error) = app
        .post_json(
            "/api/analyses",
            json!({"contractName": "Second", "text": "terms"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(error["code"], "ANALYSIS_FAILED");

    let (_, scorecard) = app.get_json("/api/analysis").await;
    assert_eq!(scorecard["contractName"], "First");
    let (_, audit) = app.get_json("/api/audit").await;
    assert_eq!(audit["total"], 1);
}

#[tokio::test]
async fn malformed_reply_is_reported_as_analysis_failure() {
    let app = test_app(MockAIProvider::new().with_response("I could not analyze this."));

    let (status, error) = app
        .post_json(
            "/api/analyses",
            json!({"contractName": "Lease", "text": "terms"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(error["code"], "ANALYSIS_FAILED");

    let (status, _) = app.get_json("/api/analysis").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn incomplete_input_makes_no_service_call() {
    let app = test_app(MockAIProvider::new());

    let (status, error) = app
        .post_json(
            "/api/analyses",
            json!({"contractName": "NDA", "text": "   "}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INPUT_INCOMPLETE");
    assert_eq!(
        error["message"],
        "Please provide both a contract name and some text content."
    );
    assert_eq!(app.provider.call_count(), 0);
}

#[tokio::test]
async fn hindi_submission_translates_first() {
    let app = test_app(
        MockAIProvider::new()
            .with_response("The vendor shall indemnify the client.")
            .with_response(vendor_reply()),
    );

    let (status, _) = app
        .post_json(
            "/api/analyses",
            json!({
                "contractName": "Hindi Vendor Agreement",
                "text": "विक्रेता ग्राहक की क्षतिपूर्ति करेगा।",
                "sourceLanguage": "Hindi"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let calls = app.provider.get_calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[1]
        .user_text()
        .unwrap()
        .ends_with("The vendor shall indemnify the client."));
}

#[tokio::test]
async fn failed_translation_is_bad_gateway() {
    let app = test_app(MockAIProvider::new().with_error(MockError::AuthenticationFailed));

    let (status, error) = app
        .post_json(
            "/api/analyses",
            json!({"contractName": "Hindi NDA", "text": "गोपनीयता", "sourceLanguage": "Hindi"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(error["code"], "TRANSLATION_FAILED");
    assert_eq!(app.provider.call_count(), 1);
}

#[tokio::test]
async fn report_export_renders_and_is_audited() {
    let app = test_app(MockAIProvider::new().with_response(vendor_reply()));
    app.post_json(
        "/api/analyses",
        json!({"contractName": "Vendor Agreement", "text": "terms"}),
    )
    .await;

    let (status, body) = app
        .send(
            Request::builder()
                .uri("/api/analysis/report?format=markdown")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let markdown = String::from_utf8(body).unwrap();
    assert!(markdown.contains("# Risk Scorecard: Vendor Agreement"));
    assert!(markdown.contains("Cap liability at the contract value"));

    let (status, body) = app
        .send(
            Request::builder()
                .uri("/api/analysis/report")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("<html"));

    let (_, audit) = app.get_json("/api/audit").await;
    assert_eq!(audit["total"], 3);
    assert_eq!(audit["entries"][0]["action"], "Report Exported");
}

#[tokio::test]
async fn template_library_is_served() {
    let app = test_app(MockAIProvider::new());

    let (status, json) = app.get_json("/api/templates?category=Services").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["templates"][0]["title"], "Vendor Service Contract");

    let (status, json) = app.get_json("/api/templates/t3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["category"], "Lease");
}
