//! Integration tests for `TrailApiClient` using wiremock HTTP mocks.

use geoview_core::{Coordinate, FailureKind, SourceLimits, TrailAdapterKind};
use geoview_trails::{filter_by_activities, TrailApiClient, TrailError, TrailSource};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LIMITS: SourceLimits = SourceLimits {
    radius: 80,
    limit: 20,
};
const HOST: &str = "trails.example.test";

fn test_client(base_url: &str) -> TrailApiClient {
    TrailApiClient::with_base_url(
        Some("test-key"),
        HOST,
        5,
        "geoview-test/0.1",
        &format!("{base_url}/activity/"),
    )
    .expect("client construction should not fail")
}

fn boise() -> Coordinate {
    Coordinate::new(43.5, -116.0).unwrap()
}

fn hulls_gulch() -> serde_json::Value {
    json!({
        "name": "Hulls Gulch",
        "city": "Boise",
        "state": "Idaho",
        "country": "United States",
        "description": "Foothills loop",
        "directions": "Take 8th St north",
        "lat": 43.64,
        "lon": -116.17,
        "parent_id": "0",
        "place_id": 555,
        "activities": {
            "hiking": {
                "url": "https://trails.example/555",
                "length": "6.2",
                "description": "Steady climb",
                "name": "Hulls Gulch Interpretive",
                "rank": "1",
                "rating": "4.5",
                "thumbnail": "https://img.example/555.jpg",
                "activity_type_name": "Hiking"
            },
            "mountain biking": {
                "name": "Hulls Gulch MTB",
                "activity_type_name": "Mountain Biking",
                "attribs": { "length": "6.2" }
            }
        }
    })
}

#[tokio::test]
async fn fetch_returns_normalized_trails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/activity/"))
        .and(header("X-RapidAPI-Host", HOST))
        .and(header("X-RapidAPI-Key", "test-key"))
        .and(query_param("lat", "43.5"))
        .and(query_param("lon", "-116"))
        .and(query_param("radius", "80"))
        .and(query_param("limit", "20"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "trails": { "555": hulls_gulch() } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client
        .fetch_nearby(boise(), LIMITS)
        .await
        .expect("should parse trails");

    assert_eq!(result.dropped, 0);
    assert_eq!(result.trails.len(), 1);

    let trail = &result.trails[0];
    assert_eq!(trail.place_id, 555);
    assert_eq!(trail.name, "Hulls Gulch");
    assert_eq!(trail.source, TrailAdapterKind::TrailApi);
    assert!((trail.latitude() - 43.64).abs() < 1e-9);
    assert!(trail.offers_activity("hiking"));
    assert!(trail.offers_activity("Mountain Biking"));
    assert_eq!(trail.activities["hiking"].length, Some(6.2));
    assert_eq!(trail.activities["mountain biking"].length, Some(6.2));
}

#[tokio::test]
async fn entries_with_bad_coordinates_or_no_activities_are_dropped() {
    let server = MockServer::start().await;

    let body = json!({
        "count": 4,
        "trails": [
            hulls_gulch(),
            { "place_id": 600, "name": "Nowhere", "lat": "north", "lon": 1.0,
              "activities": { "hiking": { "name": "x" } } },
            { "place_id": 601, "name": "Off Planet", "lat": 120.0, "lon": 1.0,
              "activities": { "hiking": { "name": "x" } } },
            { "place_id": 602, "name": "Parking Lot", "lat": 43.0, "lon": -116.0,
              "activities": {} }
        ]
    });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_nearby(boise(), LIMITS).await.unwrap();

    let ids: Vec<i64> = result.trails.iter().map(|t| t.place_id).collect();
    assert_eq!(ids, vec![555]);
    assert_eq!(result.dropped, 3);
    assert_eq!(result.reported_count, Some(4));
}

#[tokio::test]
async fn unknown_fields_do_not_change_the_result() {
    let server = MockServer::start().await;

    let mut noisy = hulls_gulch();
    noisy["sponsored"] = json!(true);
    noisy["activities"]["hiking"]["place_activity_id"] = json!("901");

    Mock::given(method("GET"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "trails": [hulls_gulch()] })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("limit", "10"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "trails": [noisy], "advert": { "id": 3 } })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let plain = client.fetch_nearby(boise(), LIMITS).await.unwrap();
    let with_extras = client
        .fetch_nearby(
            boise(),
            SourceLimits {
                radius: 80,
                limit: 10,
            },
        )
        .await
        .unwrap();
    assert_eq!(plain.trails, with_extras.trails);
}

#[tokio::test]
async fn activity_filter_narrows_fetched_trails() {
    let server = MockServer::start().await;

    let camp = json!({
        "place_id": 700,
        "name": "Mores Creek",
        "lat": 43.7,
        "lon": -115.9,
        "activities": { "camping": { "activity_type_name": "Camping" } }
    });

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "places": [hulls_gulch(), camp] })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_trails(boise(), LIMITS).await.unwrap();

    let camping: Vec<i64> = filter_by_activities(&result.trails, &["camping"])
        .iter()
        .map(|t| t.place_id)
        .collect();
    assert_eq!(camping, vec![700]);

    let no_filter = filter_by_activities::<&str>(&result.trails, &[]);
    assert_eq!(no_filter.len(), 2);
}

#[tokio::test]
async fn server_error_is_network_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_nearby(boise(), LIMITS).await.unwrap_err();
    assert!(matches!(err, TrailError::UnexpectedStatus { status: 500, .. }));
    assert_eq!(err.kind(), FailureKind::Network);
}

#[tokio::test]
async fn forbidden_is_auth_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({ "message": "You are not subscribed to this API." })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_nearby(boise(), LIMITS).await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Auth);
}

#[tokio::test]
async fn unknown_envelope_is_decode_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "quota" })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_nearby(boise(), LIMITS).await.unwrap_err();
    assert!(matches!(err, TrailError::UnexpectedShape { .. }));
    assert_eq!(err.kind(), FailureKind::Decode);
}

#[tokio::test]
async fn missing_api_key_sends_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "trails": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let client = TrailApiClient::with_base_url(None, HOST, 5, "geoview-test/0.1", &server.uri())
        .expect("client construction should not fail");
    let err = client.fetch_nearby(boise(), LIMITS).await.unwrap_err();
    assert!(matches!(err, TrailError::MissingApiKey));
    assert_eq!(err.kind(), FailureKind::Auth);
}

#[tokio::test]
async fn out_of_bounds_limits_send_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "trails": [] })))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .fetch_nearby(
            boise(),
            SourceLimits {
                radius: 80,
                limit: 500,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::Validation);
}
