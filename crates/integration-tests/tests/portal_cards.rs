//! Integration tests for the portal's business-card gallery.
//!
//! These tests require a running portal (cargo run -p ctu-portal).
//! Run with: cargo test -p ctu-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use ctu_integration_tests::{DEMO_USER_HEADER, portal_base_url};

fn client() -> Client {
    Client::builder().build().expect("Failed to create HTTP client")
}

fn card_payload(name: &str, is_default: bool) -> Value {
    json!({
        "name": name,
        "is_default": is_default,
        "is_public": true,
        "data": {
            "company_name": "Atelier Lefort",
            "contact_name": "Marie Lefort",
            "job_title": "Gérante",
            "phone": "+33 6 12 34 56 78",
            "email": "contact@atelier-lefort.fr",
            "primary_color": "#1d4ed8",
            "secondary_color": "#3b82f6",
            "accent_color": "#f59e0b",
            "template": "modern"
        }
    })
}

#[tokio::test]
#[ignore = "Requires running portal server"]
async fn test_card_crud_flow() {
    let client = client();
    let base_url = portal_base_url();

    // Create
    let created: Value = client
        .post(format!("{base_url}/suppliers/sup-atelier-lefort/cards"))
        .json(&card_payload("Carte test", false))
        .send()
        .await
        .expect("create request")
        .json()
        .await
        .expect("create response body");
    let id = created["id"].as_str().expect("card id").to_owned();

    // Read back
    let fetched: Value = client
        .get(format!("{base_url}/cards/{id}"))
        .send()
        .await
        .expect("get request")
        .json()
        .await
        .expect("get response body");
    assert_eq!(fetched["name"], "Carte test");
    assert_eq!(fetched["downloads"], 0);

    // Patch
    let patched: Value = client
        .patch(format!("{base_url}/cards/{id}"))
        .json(&json!({ "name": "Carte renommée" }))
        .send()
        .await
        .expect("patch request")
        .json()
        .await
        .expect("patch response body");
    assert_eq!(patched["name"], "Carte renommée");

    // Counter bump
    let counters: Value = client
        .post(format!("{base_url}/cards/{id}/download"))
        .send()
        .await
        .expect("download request")
        .json()
        .await
        .expect("download response body");
    assert_eq!(counters["downloads"], 1);

    // Delete, then the card is gone
    let resp = client
        .delete(format!("{base_url}/cards/{id}"))
        .send()
        .await
        .expect("delete request");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base_url}/cards/{id}"))
        .send()
        .await
        .expect("get after delete");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running portal server"]
async fn test_default_flag_is_exclusive_per_supplier() {
    let client = client();
    let base_url = portal_base_url();

    let first: Value = client
        .post(format!("{base_url}/suppliers/sup-atelier-lefort/cards"))
        .json(&card_payload("Défaut A", true))
        .send()
        .await
        .expect("create A")
        .json()
        .await
        .expect("A body");
    let second: Value = client
        .post(format!("{base_url}/suppliers/sup-atelier-lefort/cards"))
        .json(&card_payload("Défaut B", true))
        .send()
        .await
        .expect("create B")
        .json()
        .await
        .expect("B body");

    let gallery: Vec<Value> = client
        .get(format!("{base_url}/suppliers/sup-atelier-lefort/cards"))
        .send()
        .await
        .expect("gallery request")
        .json()
        .await
        .expect("gallery body");

    let defaults: Vec<&Value> = gallery
        .iter()
        .filter(|c| c["is_default"] == true)
        .collect();
    assert_eq!(defaults.len(), 1);
    assert_eq!(defaults[0]["id"], second["id"]);
    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
#[ignore = "Requires running portal server"]
async fn test_other_roles_cannot_manage_cards() {
    let client = client();
    let base_url = portal_base_url();

    // The influencer identity is not the supplier owner
    let resp = client
        .post(format!("{base_url}/suppliers/sup-atelier-lefort/cards"))
        .header(DEMO_USER_HEADER, "u-lea")
        .json(&card_payload("Interdit", false))
        .send()
        .await
        .expect("create request");
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "Requires running portal server"]
async fn test_public_profile_renders() {
    let client = client();
    let base_url = portal_base_url();

    let resp = client
        .get(format!("{base_url}/suppliers/sup-atelier-lefort/profile"))
        .send()
        .await
        .expect("profile request");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("profile body");
    assert!(body.contains("Atelier Lefort"));
}
