//! End-to-end tests against a local mock of the generation endpoint.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use wf_models::{mock, Priority, Sentiment, TrafficIntensity};
use wf_sdk::{fallback, AssistantClient, AssistantConfig, SdkError};

const KEY: &str = "test-key";

/// Canned reply plus a record of what was received.
struct MockEndpoint {
    status: StatusCode,
    body: String,
    hits: AtomicUsize,
    last_call: Mutex<Option<String>>,
    last_key: Mutex<Option<String>>,
    last_request: Mutex<Option<Value>>,
}

async fn generate(
    State(mock): State<Arc<MockEndpoint>>,
    Path(call): Path<String>,
    headers: HeaderMap,
    Json(request): Json<Value>,
) -> impl IntoResponse {
    mock.hits.fetch_add(1, Ordering::SeqCst);
    *mock.last_call.lock().unwrap() = Some(call);
    *mock.last_key.lock().unwrap() = headers
        .get("x-goog-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    *mock.last_request.lock().unwrap() = Some(request);
    (
        mock.status,
        [("content-type", "application/json")],
        mock.body.clone(),
    )
}

async fn serve(status: StatusCode, body: String) -> (AssistantClient, Arc<MockEndpoint>) {
    let mock = Arc::new(MockEndpoint {
        status,
        body,
        hits: AtomicUsize::new(0),
        last_call: Mutex::new(None),
        last_key: Mutex::new(None),
        last_request: Mutex::new(None),
    });
    let app = Router::new()
        .route("/v1beta/models/{call}", post(generate))
        .with_state(mock.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    let config = AssistantConfig::with_endpoint(&format!("http://{addr}/v1beta"), KEY);
    (AssistantClient::new(config), mock)
}

/// A successful response whose candidate text is `text`.
fn answer(text: &str) -> String {
    json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
    })
    .to_string()
}

#[tokio::test]
async fn traffic_analysis_parses_schema_answer() {
    let payload = json!({
        "tip": "Slowdowns near Barberino.",
        "segments": [
            { "id": "a", "intensity": "Heavy", "label": "A1 Variante" },
            { "id": "b", "intensity": "Low", "label": "A11" }
        ]
    });
    let (client, mock) = serve(StatusCode::OK, answer(&payload.to_string())).await;

    let report = client.traffic_analysis("Florence").await;
    assert_eq!(report.tip, "Slowdowns near Barberino.");
    assert_eq!(report.segments.len(), 2);
    assert_eq!(report.segments[0].intensity, TrafficIntensity::Heavy);

    assert_eq!(mock.hits.load(Ordering::SeqCst), 1);
    assert_eq!(
        mock.last_call.lock().unwrap().as_deref(),
        Some("gemini-3-flash-preview:generateContent")
    );
    assert_eq!(mock.last_key.lock().unwrap().as_deref(), Some(KEY));
    let request = mock.last_request.lock().unwrap().clone().unwrap();
    assert_eq!(request["tools"][0], json!({ "googleSearch": {} }));
    assert_eq!(request["generationConfig"]["responseMimeType"], "application/json");
    let prompt = request["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("near Florence, Italy"));
}

#[tokio::test]
async fn server_error_yields_fallbacks() {
    let (client, mock) = serve(StatusCode::INTERNAL_SERVER_ERROR, "{\"error\":{}}".into()).await;
    let route = mock::route();

    let err = client.try_optimize_route(&route).await.unwrap_err();
    assert!(matches!(err, SdkError::Status { status: 500, .. }));

    assert_eq!(client.traffic_analysis("Rome").await, fallback::traffic_report());
    assert_eq!(client.analyze_message("late?").await, fallback::message_insight());
    assert_eq!(client.optimize_route(&route).await, fallback::ROUTE_ADVICE);
    assert_eq!(
        client.arrival_notification(&route[1]).await,
        fallback::arrival_notification(&route[1])
    );
    assert_eq!(client.nearby_places("fuel", 43.7, 11.2).await, fallback::nearby_places());
    assert_eq!(mock.hits.load(Ordering::SeqCst), 6);
}

#[tokio::test]
async fn malformed_body_is_serialization_error() {
    let (client, _mock) = serve(StatusCode::OK, "not json at all".into()).await;
    let err = client.try_analyze_message("hello").await.unwrap_err();
    assert!(matches!(err, SdkError::Serialization(_)));
    assert_eq!(client.analyze_message("hello").await, fallback::message_insight());
}

#[tokio::test]
async fn unknown_intensity_falls_back_wholesale() {
    let payload = json!({
        "tip": "ok",
        "segments": [
            { "id": "a", "intensity": "Low", "label": "A1" },
            { "id": "b", "intensity": "Gridlock", "label": "A14" }
        ]
    });
    let (client, _mock) = serve(StatusCode::OK, answer(&payload.to_string())).await;
    assert_eq!(client.traffic_analysis("Bologna").await, fallback::traffic_report());
}

#[tokio::test]
async fn missing_field_falls_back() {
    let (client, _mock) = serve(StatusCode::OK, answer(r#"{"priority":"High","sentiment":"Negative"}"#)).await;
    assert_eq!(client.analyze_message("where is my van").await, fallback::message_insight());
}

#[tokio::test]
async fn triage_parses_camel_case_answer() {
    let body = answer(r#"{"priority":"High","sentiment":"Negative","suggestedAction":"Call the pharmacy."}"#);
    let (client, _mock) = serve(StatusCode::OK, body).await;
    let insight = client.analyze_message("The delivery is late").await;
    assert_eq!(insight.priority, Priority::High);
    assert_eq!(insight.sentiment, Sentiment::Negative);
    assert_eq!(insight.suggested_action, "Call the pharmacy.");
}

#[tokio::test]
async fn empty_text_is_a_failure_for_free_text_calls() {
    let (client, _mock) = serve(StatusCode::OK, json!({ "candidates": [] }).to_string()).await;
    let route = mock::route();
    assert!(matches!(
        client.try_arrival_notification(&route[1]).await,
        Err(SdkError::EmptyResponse)
    ));
    assert_eq!(client.optimize_route(&route).await, fallback::ROUTE_ADVICE);
}

#[tokio::test]
async fn free_text_answers_are_trimmed() {
    let (client, _mock) = serve(StatusCode::OK, answer("  Avoid the A1 at Barberino.\n")).await;
    assert_eq!(
        client.optimize_route(&mock::route()).await,
        "Avoid the A1 at Barberino."
    );
}

#[tokio::test]
async fn nearby_search_collects_map_links() {
    let body = json!({
        "candidates": [{
            "content": { "parts": [{ "text": "Two fuel stations nearby." }] },
            "groundingMetadata": { "groundingChunks": [
                { "maps": { "title": "Q8 Firenze Nord", "uri": "https://maps.google.com/?cid=1" } },
                { "maps": { "title": "Eni Peretola", "uri": "https://maps.google.com/?cid=2" } }
            ]}
        }]
    });
    let (client, mock) = serve(StatusCode::OK, body.to_string()).await;

    let places = client.nearby_places("fuel station", 43.7696, 11.2558).await;
    assert_eq!(places.text, "Two fuel stations nearby.");
    assert_eq!(places.links.len(), 2);
    assert_eq!(places.links[1].title, "Eni Peretola");

    assert_eq!(
        mock.last_call.lock().unwrap().as_deref(),
        Some("gemini-2.5-flash:generateContent")
    );
    let request = mock.last_request.lock().unwrap().clone().unwrap();
    assert_eq!(request["tools"][0], json!({ "googleMaps": {} }));
    assert_eq!(request["toolConfig"]["retrievalConfig"]["latLng"]["latitude"], 43.7696);
    assert_eq!(request["contents"][0]["parts"][0]["text"], "fuel station");
}

#[tokio::test]
async fn nearby_search_with_empty_text_is_not_a_failure() {
    let (client, _mock) = serve(StatusCode::OK, json!({ "candidates": [{}] }).to_string()).await;
    let places = client.nearby_places("rest area", 44.0, 11.0).await;
    assert_eq!(places.text, fallback::NO_RESULTS);
    assert!(places.links.is_empty());
}

#[tokio::test]
async fn unreachable_endpoint_yields_fallback() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = AssistantClient::new(AssistantConfig::with_endpoint(&format!("http://{addr}"), KEY));
    assert!(matches!(
        client.try_traffic_analysis("Milan").await,
        Err(SdkError::Http(_))
    ));
    assert_eq!(client.traffic_analysis("Milan").await, fallback::traffic_report());
}

#[tokio::test]
async fn missing_key_sends_nothing() {
    let (client, mock) = serve(StatusCode::OK, answer("unused")).await;
    let keyless = AssistantClient::new(AssistantConfig {
        api_key: None,
        ..client.config().clone()
    });
    let stop = &mock::route()[1];
    assert_eq!(
        keyless.arrival_notification(stop).await,
        fallback::arrival_notification(stop)
    );
    assert_eq!(mock.hits.load(Ordering::SeqCst), 0);
}
