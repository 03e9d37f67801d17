//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - Pelias adapter against a mocked provider
//! - Configuration to adapter wiring

use application::ApplicationError;
use application::ports::{AutocompleteRequest, GeocodingPort};
use domain::GeoLocation;
use infrastructure::{AppConfig, PeliasGeocodingAdapter};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PORTLAND: &str = r#"{
    "type": "FeatureCollection",
    "features": [{
        "type": "Feature",
        "geometry": { "type": "Point", "coordinates": [-122.6784, 45.5152] },
        "properties": {
            "label": "Portland, OR, USA",
            "locality": "Portland",
            "region": "Oregon",
            "country": "United States",
            "postalcode": "97204",
            "layer": "locality",
            "source": "whosonfirst",
            "confidence": 0.9
        }
    }]
}"#;

fn adapter_for(server: &MockServer, api_key: Option<&str>) -> PeliasGeocodingAdapter {
    let mut toml = format!("[pelias]\nbase_url = \"{}/v1\"\ntimeout_secs = 5\n", server.uri());
    if let Some(key) = api_key {
        toml.push_str(&format!("api_key = \"{key}\"\n"));
    }
    let config = AppConfig::from_toml(&toml).unwrap();
    config.validate().unwrap();
    PeliasGeocodingAdapter::from_config(&config.pelias.to_pelias_config()).unwrap()
}

fn json(body: &'static str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "application/json")
}

mod pelias_adapter_tests {
    use super::*;

    #[tokio::test]
    async fn reverse_geocode_projects_first_feature() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/reverse"))
            .and(query_param("point.lat", "45.5152"))
            .and(query_param("point.lon", "-122.6784"))
            .respond_with(json(PORTLAND))
            .expect(1)
            .mount(&server)
            .await;

        let adapter = adapter_for(&server, None);
        let location = adapter
            .reverse_geocode(GeoLocation::portland())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(location.label, "Portland, OR, USA");
        assert_eq!(location.postal_code, "97204");
        assert!((location.latitude - 45.5152).abs() < f64::EPSILON);
        assert!((location.longitude - -122.6784).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn geocode_sends_configured_api_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .and(query_param("text", "Portland"))
            .and(query_param("api_key", "ge-wired"))
            .respond_with(json(PORTLAND))
            .expect(1)
            .mount(&server)
            .await;

        let adapter = adapter_for(&server, Some("ge-wired"));
        let point = adapter.geocode("Portland").await.unwrap().unwrap();
        assert_eq!(point, GeoLocation::portland());
    }

    #[tokio::test]
    async fn autocomplete_forwards_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/autocomplete"))
            .and(query_param("layers", "locality,venue"))
            .and(query_param("size", "3"))
            .and(query_param("focus.point.lat", "47.6062"))
            .respond_with(json(PORTLAND))
            .expect(1)
            .mount(&server)
            .await;

        let adapter = adapter_for(&server, None);
        let request = AutocompleteRequest {
            text: "port".to_string(),
            focus: Some(GeoLocation::seattle()),
            layers: vec!["locality".to_string(), "venue".to_string()],
            sources: Vec::new(),
            size: 3,
        };
        let suggestions = adapter.autocomplete(&request).await.unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].locality, "Portland");
    }

    #[tokio::test]
    async fn provider_failure_maps_to_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let adapter = adapter_for(&server, None);
        let err = adapter.search("coffee", None).await.unwrap_err();
        assert!(matches!(err, ApplicationError::ProviderUnavailable(_)));
        assert!(err.is_provider_failure());
    }

    #[tokio::test]
    async fn garbage_body_maps_to_response_invalid() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let adapter = adapter_for(&server, None);
        let err = adapter.search_suggestions("coffee", None).await.unwrap_err();
        assert!(matches!(err, ApplicationError::ProviderResponseInvalid(_)));
    }

    #[tokio::test]
    async fn unreachable_provider_hides_api_key() {
        let config = AppConfig::from_toml(
            "[pelias]\nbase_url = \"http://127.0.0.1:9/v1\"\napi_key = \"ge-private\"",
        )
        .unwrap();
        let adapter =
            PeliasGeocodingAdapter::from_config(&config.pelias.to_pelias_config()).unwrap();

        let err = adapter.geocode("Seattle").await.unwrap_err();
        assert!(matches!(err, ApplicationError::ProviderUnavailable(_)));
        assert!(!err.to_string().contains("ge-private"));
    }
}
