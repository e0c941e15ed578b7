//! Integration tests for the Connect HTTP client against a mock server
//!
//! Each test mounts the exact endpoints the client should call and asserts
//! on the mapped results and errors.

use oplookup_core::{ClientError, ConnectClient, ConnectConfig, SecretStore};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-connect-token";
const VAULT_ID: &str = "hfnjvi6aymbsnfc2xeeoheizda";
const ITEM_ID: &str = "ydbgbmrq5lywd3qyedbrzxbe6u";

async fn setup() -> (MockServer, ConnectClient) {
    let server = MockServer::start().await;
    let config = ConnectConfig::new(&server.uri(), TOKEN.into()).expect("valid config");
    let client = ConnectClient::new(&config).expect("client builds");
    (server, client)
}

fn item_body() -> serde_json::Value {
    json!({
        "id": ITEM_ID,
        "title": "MySQL Database",
        "vault": {"id": VAULT_ID},
        "category": "DATABASE",
        "sections": [{"id": "credentials", "label": "Credentials"}],
        "fields": [
            {"id": "username", "type": "STRING", "label": "username", "value": "admin",
             "section": {"id": "credentials"}}
        ]
    })
}

#[tokio::test]
async fn vault_by_name_sends_filter_and_bearer() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/vaults"))
        .and(query_param("filter", r#"name eq "Automation""#))
        .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": VAULT_ID, "name": "Automation"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let id = client.get_vault_id_by_name("Automation").await.unwrap();
    assert_eq!(id, VAULT_ID);
}

#[tokio::test]
async fn vault_by_name_takes_first_of_duplicates() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/vaults"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "first", "name": "Shared"},
            {"id": "second", "name": "Shared"}
        ])))
        .mount(&server)
        .await;

    assert_eq!(client.get_vault_id_by_name("Shared").await.unwrap(), "first");
}

#[tokio::test]
async fn vault_by_name_empty_list_is_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/vaults"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let err = client.get_vault_id_by_name("Missing").await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(ref r) if r.contains("Missing")));
}

#[tokio::test]
async fn item_by_id_fetches_full_item() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/vaults/{VAULT_ID}/items/{ITEM_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(item_body()))
        .expect(1)
        .mount(&server)
        .await;

    let item = client.get_item_by_id(ITEM_ID, VAULT_ID).await.unwrap();
    assert_eq!(item.title, "MySQL Database");
    assert_eq!(item.fields[0].value.as_deref(), Some("admin"));
    assert_eq!(item.fields[0].section_id(), Some("credentials"));
}

#[tokio::test]
async fn item_by_name_lists_then_fetches() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/vaults/{VAULT_ID}/items")))
        .and(query_param("filter", r#"title eq "MySQL Database""#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": ITEM_ID, "title": "MySQL Database", "category": "DATABASE"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/vaults/{VAULT_ID}/items/{ITEM_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(item_body()))
        .expect(1)
        .mount(&server)
        .await;

    let item = client
        .get_item_by_name("MySQL Database", VAULT_ID)
        .await
        .unwrap();
    assert_eq!(item.id, ITEM_ID);
}

#[tokio::test]
async fn item_by_name_without_match_does_not_fetch() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/vaults/{VAULT_ID}/items")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/vaults/{VAULT_ID}/items/{ITEM_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(item_body()))
        .expect(0)
        .mount(&server)
        .await;

    let err = client
        .get_item_by_name("Nope", VAULT_ID)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn missing_item_maps_404() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/vaults/{VAULT_ID}/items/{ITEM_ID}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": 404, "message": "item not found"
        })))
        .mount(&server)
        .await;

    let err = client.get_item_by_id(ITEM_ID, VAULT_ID).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
    assert!(!err.to_string().contains("item not found"), "raw body must not leak");
}

#[tokio::test]
async fn unauthorized_maps_401() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/vaults"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client.get_vault_id_by_name("Automation").await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
}

#[tokio::test]
async fn forbidden_maps_403() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/vaults/{VAULT_ID}/items/{ITEM_ID}")))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = client.get_item_by_id(ITEM_ID, VAULT_ID).await.unwrap_err();
    assert!(matches!(err, ClientError::Forbidden(_)));
}

#[tokio::test]
async fn server_error_maps_5xx() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/vaults"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client.get_vault_id_by_name("Automation").await.unwrap_err();
    assert!(matches!(err, ClientError::Server(503)));
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/vaults/{VAULT_ID}/items/{ITEM_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client.get_item_by_id(ITEM_ID, VAULT_ID).await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    let config = ConnectConfig::new("http://127.0.0.1:1", TOKEN.into()).unwrap();
    let client = ConnectClient::new(&config).unwrap();
    let err = client.get_vault_id_by_name("Automation").await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
    assert!(!err.to_string().contains(TOKEN));
}
