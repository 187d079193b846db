use crate::helpers::spawn_app;
use serde_json::json;

#[tokio::test]
async fn existing_config_is_returned_in_full() {
    let app = spawn_app().await;
    let data = json!({
        "name": "Contact API",
        "mail": "admin@example.com",
        "page": {"403": "", "404": "", "front": "/node"},
        "weight_select_max": 100,
        "langcode": "en"
    });
    app.store.insert_config("system.site", data.clone());

    let response = app.get_config_export("system.site").await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, data);
}

#[tokio::test]
async fn unknown_config_returns_404() {
    let app = spawn_app().await;
    app.store.insert_config("system.site", json!({"name": "Contact API"}));

    let response = app.get_config_export("system.performance").await;

    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"error": "Configuration 'system.performance' does not exist."})
    );
}

#[tokio::test]
async fn missing_config_name_returns_400() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    for uri in ["/api/config-export", "/api/config-export/"] {
        let response = client
            .get(&format!("{}{}", &app.address, uri))
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(response.status().as_u16(), 400, "uri: {}", uri);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "Config name parameter is missing."}));
    }
}

#[tokio::test]
async fn zero_config_name_returns_400() {
    let app = spawn_app().await;
    app.store.insert_config("0", json!({"name": "Contact API"}));

    let response = app.get_config_export("0").await;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Config name parameter is missing."}));
}
