//! Integration tests for `WebcamClient` using wiremock HTTP mocks.

use geoview_core::{Coordinate, FailureKind, SourceLimits};
use geoview_webcams::{WebcamClient, WebcamError, WebcamSource};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LIMITS: SourceLimits = SourceLimits {
    radius: 250,
    limit: 25,
};

fn test_client(base_url: &str) -> WebcamClient {
    WebcamClient::with_base_url(
        Some("test-key"),
        5,
        "geoview-test/0.1",
        &format!("{base_url}/webcams"),
    )
    .expect("client construction should not fail")
}

fn boise() -> Coordinate {
    Coordinate::new(43.5, -116.0).unwrap()
}

fn two_webcams() -> serde_json::Value {
    json!({
        "total": 42,
        "webcams": [
            {
                "title": "Bogus Basin Summit",
                "viewCount": 1200,
                "webcamId": 101,
                "status": "active",
                "lastUpdatedOn": "2024-11-02T10:15:00.000Z",
                "categories": [{ "id": "mountain", "name": "Mountain" }],
                "images": {
                    "current": {
                        "icon": "https://img.example/101/icon.jpg",
                        "thumbnail": "https://img.example/101/thumb.jpg",
                        "preview": "https://img.example/101/preview.jpg"
                    },
                    "sizes": {
                        "icon": { "width": 48, "height": 48 },
                        "thumbnail": { "width": 200, "height": 112 },
                        "preview": { "width": 400, "height": 224 }
                    },
                    "daylight": {
                        "icon": "https://img.example/101/day-icon.jpg",
                        "thumbnail": "https://img.example/101/day-thumb.jpg",
                        "preview": "https://img.example/101/day-preview.jpg"
                    }
                },
                "location": {
                    "city": "Boise",
                    "region": "Idaho",
                    "region_code": "US.ID",
                    "country": "United States",
                    "country_code": "US",
                    "continent": "North America",
                    "continent_code": "NA",
                    "latitude": 43.76,
                    "longitude": -116.1
                },
                "urls": {
                    "detail": "https://webcams.example/101",
                    "edit": "https://webcams.example/101/edit",
                    "provider": "https://provider.example/101"
                }
            },
            {
                "title": "Lucky Peak Dam",
                "viewCount": 88,
                "webcamId": 102,
                "status": "active",
                "lastUpdatedOn": "2024-11-02T09:00:00.000Z",
                "location": { "latitude": 43.53, "longitude": -116.05 }
            }
        ]
    })
}

#[tokio::test]
async fn fetch_returns_parsed_webcams() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/webcams"))
        .and(header("x-windy-api-key", "test-key"))
        .and(query_param("nearby", "43.5,-116,250"))
        .and(query_param("limit", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_webcams()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client
        .fetch_nearby(boise(), LIMITS)
        .await
        .expect("should parse webcams");

    assert_eq!(result.total, 42);
    assert_eq!(result.dropped, 0);
    assert_eq!(result.webcams.len(), 2);

    let summit = &result.webcams[0];
    assert_eq!(summit.id, 101);
    assert_eq!(summit.title, "Bogus Basin Summit");
    assert_eq!(summit.view_count, 1200);
    assert_eq!(summit.location.region_code, "US.ID");
    assert_eq!(summit.images.sizes.preview.width, 400);
    assert_eq!(summit.images.daylight.icon, "https://img.example/101/day-icon.jpg");
    assert_eq!(summit.urls.provider, "https://provider.example/101");
    assert!(summit.has_category("MOUNTAIN"));
    assert!(summit.last_updated().is_some());

    let dam = &result.webcams[1];
    assert_eq!(dam.id, 102);
    assert!(dam.categories.is_empty());
    assert_eq!(dam.urls.detail, "");
}

#[tokio::test]
async fn fetch_through_trait_matches_inherent_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_webcams()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let via_trait = client.fetch_webcams(boise(), LIMITS).await.unwrap();
    let direct = client.fetch_nearby(boise(), LIMITS).await.unwrap();
    assert_eq!(via_trait, direct);
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

    assert!(matches!(
        err,
        WebcamError::UnexpectedStatus { status: 500, .. }
    ));
    assert_eq!(err.kind(), FailureKind::Network);
}

#[tokio::test]
async fn unauthorized_is_auth_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "bad key" })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_nearby(boise(), LIMITS).await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Auth);
}

#[tokio::test]
async fn malformed_body_is_decode_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_nearby(boise(), LIMITS).await.unwrap_err();
    assert!(matches!(err, WebcamError::Deserialize { .. }));
    assert_eq!(err.kind(), FailureKind::Decode);
}

#[tokio::test]
async fn missing_api_key_sends_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_webcams()))
        .expect(0)
        .mount(&server)
        .await;

    let client = WebcamClient::with_base_url(None, 5, "geoview-test/0.1", &server.uri())
        .expect("client construction should not fail");
    let err = client.fetch_nearby(boise(), LIMITS).await.unwrap_err();
    assert!(matches!(err, WebcamError::MissingApiKey));
    assert_eq!(err.kind(), FailureKind::Auth);
}

#[tokio::test]
async fn out_of_bounds_limits_send_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_webcams()))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .fetch_nearby(
            boise(),
            SourceLimits {
                radius: 1000,
                limit: 25,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::Validation);
}

#[tokio::test]
async fn entries_with_bad_locations_are_dropped() {
    let server = MockServer::start().await;

    let body = json!({
        "total": 3,
        "webcams": [
            { "webcamId": 1, "title": "ok", "location": { "latitude": 10.0, "longitude": 10.0 } },
            { "webcamId": 2, "title": "no location" },
            { "webcamId": 3, "title": "off the map", "location": { "latitude": -91.0, "longitude": 0.0 } }
        ]
    });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_nearby(boise(), LIMITS).await.unwrap();
    assert_eq!(result.webcams.len(), 1);
    assert_eq!(result.webcams[0].id, 1);
    assert_eq!(result.dropped, 2);
    for webcam in &result.webcams {
        assert!((-90.0..=90.0).contains(&webcam.latitude()));
        assert!((-180.0..=180.0).contains(&webcam.longitude()));
    }
}
