mod common;

use atlasdeck::gateway::{GatewayClient, GatewayError, ListQuery, SortField, SortOrder};

use crate::common::mock_gateway::MockGateway;

fn client_for(gateway: &MockGateway) -> GatewayClient {
    GatewayClient::new(&gateway.base_url()).expect("Failed to build client")
}

#[tokio::test(flavor = "multi_thread")]
async fn list_sends_current_query_parameters() {
    let gateway = MockGateway::start().await;
    gateway
        .set_countries(serde_json::json!({
            "countries": [
                {
                    "name": "France",
                    "population": 67000000u64,
                    "area": 551695.0,
                    "population_density": 121.44,
                    "region": "Europe"
                }
            ]
        }))
        .await;

    let client = client_for(&gateway);
    let query = ListQuery {
        sort_by: SortField::Population,
        order_by: SortOrder::Desc,
        limit: Some(100),
    };
    let countries = client
        .list_countries(&query)
        .await
        .expect("List request failed");

    assert_eq!(countries.len(), 1);
    assert_eq!(countries[0].name, "France");
    assert_eq!(countries[0].population, 67000000);
    assert_eq!(countries[0].population_density, 121.44);

    let requests = gateway.requests_for("GET", "/countries").await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].query.get("limit").map(String::as_str), Some("100"));
    assert_eq!(
        requests[0].query.get("sortBy").map(String::as_str),
        Some("population")
    );
    assert_eq!(
        requests[0].query.get("orderBy").map(String::as_str),
        Some("desc")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn list_omits_limit_when_unset() {
    let gateway = MockGateway::start().await;
    gateway
        .set_countries(serde_json::json!({ "countries": [] }))
        .await;

    let client = client_for(&gateway);
    let countries = client
        .list_countries(&ListQuery::default())
        .await
        .expect("List request failed");
    assert!(countries.is_empty());

    let requests = gateway.requests_for("GET", "/countries").await;
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].query.contains_key("limit"));
    assert_eq!(requests[0].query.get("sortBy").map(String::as_str), Some("name"));
    assert_eq!(requests[0].query.get("orderBy").map(String::as_str), Some("asc"));
}

#[tokio::test(flavor = "multi_thread")]
async fn list_error_status_is_reported() {
    let gateway = MockGateway::start().await;
    gateway.set_countries_error(500).await;

    let client = client_for(&gateway);
    let err = client
        .list_countries(&ListQuery::default())
        .await
        .expect_err("Expected a status error");

    match err {
        GatewayError::Status { operation, status } => {
            assert_eq!(operation, "list countries");
            assert_eq!(status.as_u16(), 500);
        }
        other => panic!("Unexpected error: {other}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn country_detail_supports_names_needing_encoding() {
    let gateway = MockGateway::start().await;
    gateway
        .set_detail(serde_json::json!({
            "country": {
                "country_name": "Côte d'Ivoire",
                "population": 26378274u64,
                "area": 322463.0,
                "region": "Africa"
            }
        }))
        .await;

    let client = client_for(&gateway);
    let detail = client
        .country("Côte d'Ivoire")
        .await
        .expect("Detail request failed");

    assert_eq!(detail.country_name, "Côte d'Ivoire");
    assert_eq!(detail.population, Some(26378274));
    assert_eq!(detail.region.as_deref(), Some("Africa"));

    // The path segment goes out percent-encoded and decodes back to the
    // original key on the server side.
    let requests = gateway
        .requests_for("GET", "/countries/Côte d'Ivoire")
        .await;
    assert_eq!(requests.len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn detail_tolerates_missing_optional_fields() {
    let gateway = MockGateway::start().await;
    gateway
        .set_detail(serde_json::json!({
            "country": { "country_name": "Atlantis" }
        }))
        .await;

    let client = client_for(&gateway);
    let detail = client.country("Atlantis").await.expect("Detail request failed");

    assert_eq!(detail.country_name, "Atlantis");
    assert_eq!(detail.population, None);
    assert_eq!(detail.area, None);
    assert_eq!(detail.region, None);
    assert_eq!(detail.population_density(), None);
}

#[tokio::test(flavor = "multi_thread")]
async fn absent_images_field_is_an_empty_collection() {
    let gateway = MockGateway::start().await;
    gateway.set_images(serde_json::json!({})).await;

    let client = client_for(&gateway);
    let records = client.images("France").await.expect("Images request failed");
    assert!(records.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn images_roundtrip_preserves_metadata() {
    let gateway = MockGateway::start().await;
    gateway
        .set_images(serde_json::json!({
            "images": [
                { "file": "aGVsbG8=", "title": "Flag", "description": "The flag" },
                { "file": "d29ybGQ=" }
            ]
        }))
        .await;

    let client = client_for(&gateway);
    let records = client.images("France").await.expect("Images request failed");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title.as_deref(), Some("Flag"));
    assert_eq!(records[0].description.as_deref(), Some("The flag"));
    assert_eq!(records[1].file, "d29ybGQ=");
    assert_eq!(records[1].title, None);
}

#[tokio::test(flavor = "multi_thread")]
async fn upload_sends_multipart_fields() {
    let gateway = MockGateway::start().await;

    let client = client_for(&gateway);
    client
        .upload_image(
            "France",
            "flag.png".to_string(),
            vec![1, 2, 3, 4],
            "Flag".to_string(),
            "The tricolore".to_string(),
        )
        .await
        .expect("Upload failed");

    let requests = gateway
        .requests_for("POST", "/countries/France/images")
        .await;
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(
        request
            .fields
            .iter()
            .find(|(name, _)| name == "file")
            .map(|(_, bytes)| bytes.clone()),
        Some(vec![1, 2, 3, 4])
    );
    assert_eq!(request.field_text("title").as_deref(), Some("Flag"));
    assert_eq!(
        request.field_text("description").as_deref(),
        Some("The tricolore")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn upload_rejection_is_a_status_error() {
    let gateway = MockGateway::start().await;
    gateway.set_upload_status(500).await;

    let client = client_for(&gateway);
    let err = client
        .upload_image(
            "France",
            "flag.png".to_string(),
            vec![0],
            "Flag".to_string(),
            "desc".to_string(),
        )
        .await
        .expect_err("Expected a status error");

    match err {
        GatewayError::Status { operation, status } => {
            assert_eq!(operation, "upload image");
            assert_eq!(status.as_u16(), 500);
        }
        other => panic!("Unexpected error: {other}"),
    }
}
