//! Router tests against an in-memory record source.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::{NaiveDate, TimeZone, Utc};
use http_body_util::BodyExt;
use polimoney_core::loader::InMemoryLoader;
use polimoney_core::model::{
    District, Election, JournalEntry, Ledger, LedgerScope, Organization, Politician,
};
use polimoney_shared::config::AppSettings;
use polimoney_shared::types::{
    DistrictId, ElectionId, JournalId, LedgerId, OrganizationId, PoliticianId,
};
use rstest::rstest;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use super::*;

// ============================================================================
// Fixtures
// ============================================================================

struct Fixture {
    loader: InMemoryLoader,
    political_ledger: LedgerId,
    election_ledger: LedgerId,
}

fn ledger(scope: LedgerScope, politician_id: PoliticianId) -> Ledger {
    let stamp = Utc.with_ymd_and_hms(2025, 4, 1, 9, 0, 0).unwrap();
    Ledger {
        id: LedgerId::new(),
        politician_id,
        scope,
        fiscal_year: 2025,
        total_income: 1_000_000,
        total_expense: 760_000,
        journal_count: 42,
        last_updated_at: stamp,
        first_synced_at: stamp,
        created_at: stamp,
        is_test: false,
    }
}

fn journal(ledger_id: LedgerId, code: &str, public_expense_amount: Option<i64>) -> JournalEntry {
    let stamp = Utc.with_ymd_and_hms(2025, 4, 1, 9, 0, 0).unwrap();
    JournalEntry {
        id: JournalId::new(),
        ledger_id,
        journal_source_id: Uuid::new_v4(),
        date: NaiveDate::from_ymd_opt(2026, 1, 29).unwrap(),
        description: Some("車上運動員報酬".to_string()),
        amount: 30_605,
        contact_name: None,
        contact_type: None,
        account_code: Some(code.to_string()),
        classification: Some("pre-campaign".to_string()),
        non_monetary_basis: None,
        note: None,
        public_expense_amount,
        content_hash: "hash".to_string(),
        synced_at: stamp,
        created_at: stamp,
        is_test: false,
    }
}

fn fixture() -> Fixture {
    let politician = Politician {
        id: PoliticianId::new(),
        name: "山田太郎".to_string(),
        name_kana: None,
    };
    let organization = Organization {
        id: OrganizationId::new(),
        name: "山田太郎後援会".to_string(),
        kind: None,
    };
    let district = District {
        id: DistrictId::new(),
        name: "東京都第1区".to_string(),
    };
    let election = Election {
        id: ElectionId::new(),
        name: "第50回衆議院議員総選挙".to_string(),
        election_type: "HR".to_string(),
        district_id: district.id,
        election_date: NaiveDate::from_ymd_opt(2026, 2, 8).unwrap(),
    };
    let political = ledger(LedgerScope::Organization(organization.id), politician.id);
    let campaign = ledger(LedgerScope::Election(election.id), politician.id);

    let loader = InMemoryLoader::new()
        .with_journal(journal(political.id, "EXP_PERSONNEL_ELEC", Some(0)))
        .with_journal(journal(campaign.id, "EXP_PERSONNEL_ELEC", Some(30_605)))
        .with_politician(politician)
        .with_organization(organization)
        .with_election(election)
        .with_district(district);

    Fixture {
        political_ledger: political.id,
        election_ledger: campaign.id,
        loader: loader.with_ledger(political).with_ledger(campaign),
    }
}

fn app(loader: InMemoryLoader, debug: bool) -> Router {
    let settings = AppSettings {
        debug,
        ..AppSettings::default()
    };
    create_router(AppState::new(Arc::new(loader), debug), &settings)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// ============================================================================
// Reports
// ============================================================================

#[tokio::test]
async fn test_political_funds_ok() {
    let fixture = fixture();
    let uri = format!("/api/v1/political-funds/{}", fixture.political_ledger);

    let (status, body) = get(app(fixture.loader, false), &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["api_version"], "v1");
    assert_eq!(body["meta"]["organization"]["name"], "山田太郎後援会");
    assert_eq!(body["meta"]["summary"]["balance"], 240_000);
    assert_eq!(body["meta"]["summary"]["journal_count"], 42);
    let line = &body["data"][0];
    assert_eq!(line["type"], "政治活動");
    assert_eq!(line["category"], "personnel");
    assert_eq!(line["category_name"], "人件費");
    assert!(line["public_expense_amount"].is_null());
}

#[tokio::test]
async fn test_election_funds_ok() {
    let fixture = fixture();
    let uri = format!("/api/v1/election-funds/{}", fixture.election_ledger);

    let (status, body) = get(app(fixture.loader, false), &uri).await;

    assert_eq!(status, StatusCode::OK);
    let meta = &body["meta"];
    assert_eq!(meta["election"]["type"], "HR");
    assert_eq!(meta["election"]["type_name"], "衆議院議員選挙");
    assert_eq!(meta["election"]["district_name"], "東京都第1区");
    assert_eq!(meta["election"]["election_date"], "2026-02-08");
    assert_eq!(meta["summary"]["public_expense_total"], 30_605);
    let line = &body["data"][0];
    assert_eq!(line["date"], "2026-01-29");
    assert_eq!(line["type"], "立候補準備");
    assert_eq!(line["public_expense_amount"], 30_605);
}

#[rstest]
#[case("political-funds", false, "政治資金の台帳が見つかりません")]
#[case("election-funds", true, "選挙資金の台帳が見つかりません")]
#[tokio::test]
async fn test_ledger_of_other_scope_is_not_found(
    #[case] route: &str,
    #[case] use_political_ledger: bool,
    #[case] expected: &str,
) {
    let fixture = fixture();
    let ledger = if use_political_ledger {
        fixture.political_ledger
    } else {
        fixture.election_ledger
    };
    let uri = format!("/api/v1/{route}/{ledger}");

    let (status, body) = get(app(fixture.loader, false), &uri).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(body["message"], expected);
}

#[tokio::test]
async fn test_missing_politician_message() {
    let organization = Organization {
        id: OrganizationId::new(),
        name: "後援会".to_string(),
        kind: None,
    };
    let ledger = ledger(
        LedgerScope::Organization(organization.id),
        PoliticianId::new(),
    );
    let uri = format!("/api/v1/political-funds/{}", ledger.id);
    let loader = InMemoryLoader::new()
        .with_ledger(ledger)
        .with_organization(organization);

    let (status, body) = get(app(loader, false), &uri).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "政治家情報が見つかりません");
}

#[rstest]
#[case("/api/v1/political-funds/not-a-uuid")]
#[case("/api/v1/election-funds/12345")]
#[tokio::test]
async fn test_malformed_ledger_id(#[case] uri: &str) {
    let (status, body) = get(app(InMemoryLoader::new(), false), uri).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body.get("detail").is_none());
}

#[tokio::test]
async fn test_loader_failure_detail_is_generic() {
    let uri = format!("/api/v1/political-funds/{}", LedgerId::new());

    let (status, body) = get(app(InMemoryLoader::unavailable("pool closed"), false), &uri).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "DATABASE_ERROR");
    assert_eq!(body["message"], "An error occurred");
    assert_eq!(body["detail"], "An unexpected error occurred");
}

#[tokio::test]
async fn test_loader_failure_detail_in_debug() {
    let uri = format!("/api/v1/election-funds/{}", LedgerId::new());

    let (status, body) = get(app(InMemoryLoader::unavailable("pool closed"), true), &uri).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "An error occurred");
    assert_eq!(body["detail"], "record source unavailable: pool closed");
}

// ============================================================================
// Health and middleware
// ============================================================================

#[tokio::test]
async fn test_health() {
    let (status, body) = get(app(InMemoryLoader::new(), false), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_welcome() {
    let (status, body) = get(app(InMemoryLoader::new(), false), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to Polimoney API");
    assert_eq!(body["health"], "/health");
}

#[tokio::test]
async fn test_request_id_generated_and_echoed() {
    let app = app(InMemoryLoader::new(), false);

    let generated = app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let id = generated.headers().get("x-request-id").unwrap();
    assert!(Uuid::parse_str(id.to_str().unwrap()).is_ok());

    let echoed = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "req-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(echoed.headers()["x-request-id"], "req-123");
}

#[rstest]
#[case(vec!["http://localhost:3000".to_string()], "http://localhost:3000", Some("http://localhost:3000"))]
#[case(vec!["http://localhost:3000".to_string()], "https://evil.example", None)]
#[case(vec!["*".to_string()], "https://any.example", Some("*"))]
#[tokio::test]
async fn test_cors_origins(
    #[case] origins: Vec<String>,
    #[case] origin: &str,
    #[case] expected: Option<&str>,
) {
    let settings = AppSettings {
        cors_origins: origins,
        ..AppSettings::default()
    };
    let app = create_router(AppState::new(Arc::new(InMemoryLoader::new()), false), &settings);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, origin)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let allowed = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .map(|value| value.to_str().unwrap());
    assert_eq!(allowed, expected);
}
