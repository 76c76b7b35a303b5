use crate::helpers::spawn_app;
use serde_json::json;

const ALL_ENDPOINTS: [&str; 9] = [
    "booleanInputTemplate",
    "booleanCustomization",
    "datetimeInput",
    "temperatureSensor",
    "aggregatingSensor",
    "wateringStatusChangeAutomation",
    "isHomeDashboardButton",
    "plantDashboardCard",
    "setDemandingWateringStatusAutomation",
];

#[tokio::test]
async fn boolean_input_template_returns_the_three_flag_entries() {
    let app = spawn_app().await;

    let response = app
        .post_template("booleanInputTemplate", &json!({ "plantName": "Basil" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("basil_info:"));
    assert!(body.contains("basil_is_watered:"));
    assert!(body.contains("basil_is_in_home:"));
    assert!(body.contains("name: \"Basil\""));
}

#[tokio::test]
async fn boolean_customization_renders_the_literal_field_values() {
    let app = spawn_app().await;

    let response = app
        .post_template(
            "booleanCustomization",
            &json!({
                "plantName": "Mint",
                "wateringFrequencyDays": 3,
                "minimumTemperature": 10,
                "imageUrl": "/img/mint.png"
            }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let expected = r#"#--------------Mint--------------
mint_info:
    watering_frequency_days: 3
    minimum_temperature: 10
    entity_picture: "/img/mint.png"
"#;
    assert_eq!(response.text().await.unwrap(), expected);
}

#[tokio::test]
async fn responses_are_plain_text() {
    let app = spawn_app().await;

    let response = app
        .post_template("datetimeInput", &json!({ "plantName": "Basil" }))
        .await;

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("text/plain"));
}

#[tokio::test]
async fn rendering_the_same_payload_twice_yields_identical_text() {
    let app = spawn_app().await;
    let payload = json!({ "plantName": "Basil", "displayedName": "Window basil" });

    for endpoint in ALL_ENDPOINTS {
        let body = match endpoint {
            "booleanCustomization" => json!({
                "plantName": "Basil",
                "wateringFrequencyDays": 2,
                "minimumTemperature": 12.5,
                "imageUrl": "/img/basil.png"
            }),
            _ => payload.clone(),
        };

        let first = app.post_template(endpoint, &body).await.text().await.unwrap();
        let second = app.post_template(endpoint, &body).await.text().await.unwrap();
        assert_eq!(first, second, "{endpoint} is not deterministic");
    }
}

#[tokio::test]
async fn missing_plant_name_is_rejected_by_every_endpoint() {
    let app = spawn_app().await;

    for endpoint in ALL_ENDPOINTS {
        let response = app.post_template(endpoint, &json!({})).await;

        assert_eq!(
            response.status().as_u16(),
            400,
            "{endpoint} did not reject a payload without plantName"
        );
        let body = response.text().await.unwrap();
        assert!(
            body.contains("plantName"),
            "{endpoint} error does not name the offending field: {body}"
        );
    }
}

#[tokio::test]
async fn non_positive_watering_frequency_is_rejected() {
    let app = spawn_app().await;

    for days in [0, -4] {
        let response = app
            .post_template(
                "booleanCustomization",
                &json!({
                    "plantName": "Mint",
                    "wateringFrequencyDays": days,
                    "minimumTemperature": 10,
                    "imageUrl": "/img/mint.png"
                }),
            )
            .await;

        assert_eq!(response.status().as_u16(), 400);
        let body = response.text().await.unwrap();
        assert!(body.contains("wateringFrequencyDays"));
    }
}

#[tokio::test]
async fn dashboard_cards_fall_back_to_the_plant_name() {
    let app = spawn_app().await;

    let response = app
        .post_template("isHomeDashboardButton", &json!({ "plantName": "Aloe" }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await.unwrap();
    assert!(body.contains("name: \"Aloe\""));
    assert!(body.contains("entity: input_boolean.aloe_is_in_home"));
}

#[tokio::test]
async fn machine_keys_are_lowercased_slugs() {
    let app = spawn_app().await;

    let response = app
        .post_template("temperatureSensor", &json!({ "plantName": "TOMATO" }))
        .await;

    let body = response.text().await.unwrap();
    assert!(body.contains("tomato_is_too_cold:"));
    assert!(body.contains("friendly_name: \"TOMATO - too cold\""));
}
