use agri_client::{ApiClient, ClientConfig, Farmer, FarmerPatch, FarmerRepository, Operation};
use anyhow::Result;
use httpmock::prelude::*;
use serde_json::json;

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ClientConfig::new(Some(server.base_url().as_str()), None))
}

#[tokio::test]
async fn test_get_farmer() -> Result<()> {
    let server = MockServer::start();

    let get_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/farmers/1")
            .header_missing("content-type");
        then.status(200).json_body(json!({
            "id": 1,
            "name": "Rajesh Kumar",
            "location": "Mandya, Karnataka"
        }));
    });

    let farmer = client_for(&server).get_farmer(1).await?;

    get_mock.assert();
    assert_eq!(farmer.id, Some(1));
    assert_eq!(farmer.name, "Rajesh Kumar");
    assert_eq!(farmer.location, "Mandya, Karnataka");
    Ok(())
}

#[tokio::test]
async fn test_get_farmer_failure() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/api/farmers/1");
        then.status(404);
    });

    let err = client_for(&server).get_farmer(1).await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to load farmer");
    assert_eq!(err.operation(), Some(Operation::LoadFarmer));
    Ok(())
}

#[tokio::test]
async fn test_update_farmer_location() -> Result<()> {
    let server = MockServer::start();

    let update_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/farmers/1")
            .header("content-type", "application/json")
            .json_body(json!({"location": "Mysuru"}));
        then.status(200).json_body(json!({
            "id": 1,
            "name": "Rajesh Kumar",
            "location": "Mysuru"
        }));
    });

    let patch = FarmerPatch {
        location: Some("Mysuru".to_string()),
        ..Default::default()
    };
    let updated = client_for(&server).update_farmer(1, &patch).await?;

    update_mock.assert();
    assert_eq!(
        updated,
        Farmer {
            id: Some(1),
            name: "Rajesh Kumar".to_string(),
            location: "Mysuru".to_string(),
        }
    );
    Ok(())
}

#[tokio::test]
async fn test_update_farmer_server_error() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(PUT).path("/api/farmers/1");
        then.status(500);
    });

    let patch = FarmerPatch {
        location: Some("Mysuru".to_string()),
        ..Default::default()
    };
    let err = client_for(&server)
        .update_farmer(1, &patch)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to update farmer");
    Ok(())
}

#[tokio::test]
async fn test_list_and_create_farmers() -> Result<()> {
    let server = MockServer::start();

    let list_mock = server.mock(|when, then| {
        when.method(GET).path("/api/farmers");
        then.status(200).json_body(json!([
            {"id": 1, "name": "Rajesh Kumar", "location": "Mandya, Karnataka"}
        ]));
    });
    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/farmers")
            .json_body(json!({"name": "Lakshmi", "location": "Hassan"}));
        then.status(200).json_body(json!({
            "id": 2,
            "name": "Lakshmi",
            "location": "Hassan"
        }));
    });

    let client = client_for(&server);
    let farmers = client.list_farmers().await?;

    let mut new_farmer = Farmer::new("Lakshmi", "Hassan");
    new_farmer.id = Some(5);
    let created = client.create_farmer(&new_farmer).await?;

    list_mock.assert();
    create_mock.assert();
    assert_eq!(farmers.len(), 1);
    assert_eq!(created.id, Some(2));
    Ok(())
}

#[tokio::test]
async fn test_create_farmer_failure() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/api/farmers");
        then.status(400);
    });

    let err = client_for(&server)
        .create_farmer(&Farmer::new("Lakshmi", "Hassan"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to create farmer");
    Ok(())
}
