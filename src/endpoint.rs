use serde_json::Value;

use crate::config::Config;
use crate::types::CheckResult;

/// The four mapping-service endpoints exercised by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Geocoding,
    Places,
    Directions,
    DistanceMatrix,
}

impl Endpoint {
    /// Execution order of a run.
    pub const ALL: [Endpoint; 4] = [
        Endpoint::Geocoding,
        Endpoint::Places,
        Endpoint::Directions,
        Endpoint::DistanceMatrix,
    ];

    /// Stable identifier used as the result-set key.
    pub fn id(self) -> &'static str {
        match self {
            Endpoint::Geocoding => "geocoding",
            Endpoint::Places => "places",
            Endpoint::Directions => "directions",
            Endpoint::DistanceMatrix => "distance_matrix",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Endpoint::Geocoding => "Geocoding API",
            Endpoint::Places => "Places API",
            Endpoint::Directions => "Directions API",
            Endpoint::DistanceMatrix => "Distance Matrix API",
        }
    }

    /// Path relative to the service root.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Geocoding => "geocode/json",
            Endpoint::Places => "place/textsearch/json",
            Endpoint::Directions => "directions/json",
            Endpoint::DistanceMatrix => "distancematrix/json",
        }
    }

    /// Endpoint-specific query parameters (the credential is added by the client).
    pub fn params(self, config: &Config) -> Vec<(&'static str, String)> {
        match self {
            Endpoint::Geocoding => vec![("address", config.geocoding.address.clone())],
            Endpoint::Places => vec![("query", config.places.query.clone())],
            Endpoint::Directions => vec![
                ("origin", config.directions.origin.clone()),
                ("destination", config.directions.destination.clone()),
            ],
            Endpoint::DistanceMatrix => vec![
                ("origins", config.distance_matrix.origins.clone()),
                ("destinations", config.distance_matrix.destinations.clone()),
            ],
        }
    }

    /// Whether a top-level `status` value counts as a pass.
    /// Place search treats "no results found" as a non-error outcome.
    pub fn accepts(self, status: &str) -> bool {
        match self {
            Endpoint::Places => matches!(status, "OK" | "ZERO_RESULTS"),
            _ => status == "OK",
        }
    }

    /// Classify a parsed response body.
    pub fn classify(self, body: Value) -> CheckResult {
        let Some(status) = body.get("status").and_then(Value::as_str) else {
            return CheckResult::TransportError("response has no `status` field".to_string());
        };

        if self.accepts(status) {
            return CheckResult::Success(body);
        }

        CheckResult::Failure {
            status: status.to_string(),
            message: body
                .get("error_message")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }

    /// Illustrative fields from a successful payload, for human inspection.
    /// Missing fields are skipped rather than treated as errors.
    pub fn highlights(self, body: &Value) -> Vec<String> {
        let mut lines = Vec::new();
        match self {
            Endpoint::Geocoding => {
                if let Some(address) = body
                    .pointer("/results/0/formatted_address")
                    .and_then(Value::as_str)
                {
                    lines.push(format!("Location: {address}"));
                }
            }
            Endpoint::Places => {
                if body.get("status").and_then(Value::as_str) == Some("OK") {
                    if let Some(results) = body.get("results").and_then(Value::as_array) {
                        lines.push(format!("Found {} places", results.len()));
                    }
                }
            }
            Endpoint::Directions => {
                if let Some(leg) = body.pointer("/routes/0/legs/0") {
                    push_distance_duration(&mut lines, leg);
                }
            }
            Endpoint::DistanceMatrix => {
                if let Some(element) = body.pointer("/rows/0/elements/0") {
                    if element.get("status").and_then(Value::as_str) == Some("OK") {
                        push_distance_duration(&mut lines, element);
                    }
                }
            }
        }
        lines
    }
}

fn push_distance_duration(lines: &mut Vec<String>, node: &Value) {
    if let Some(distance) = node.pointer("/distance/text").and_then(Value::as_str) {
        lines.push(format!("Distance: {distance}"));
    }
    if let Some(duration) = node.pointer("/duration/text").and_then(Value::as_str) {
        lines.push(format!("Duration: {duration}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ids_are_stable_and_ordered() {
        let ids: Vec<&str> = Endpoint::ALL.iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["geocoding", "places", "directions", "distance_matrix"]);
    }

    #[test]
    fn test_ok_passes_everywhere() {
        for endpoint in Endpoint::ALL {
            assert!(endpoint.classify(json!({"status": "OK"})).passed(), "{endpoint:?}");
        }
    }

    #[test]
    fn test_zero_results_only_passes_for_places() {
        for endpoint in Endpoint::ALL {
            let passed = endpoint.classify(json!({"status": "ZERO_RESULTS"})).passed();
            assert_eq!(passed, endpoint == Endpoint::Places, "{endpoint:?}");
        }
    }

    #[test]
    fn test_error_statuses_fail_everywhere() {
        for status in ["REQUEST_DENIED", "OVER_QUERY_LIMIT", "INVALID_REQUEST", "NOT_FOUND", "UNKNOWN_ERROR"] {
            for endpoint in Endpoint::ALL {
                let result = endpoint.classify(json!({"status": status}));
                assert!(!result.passed(), "{endpoint:?} {status}");
            }
        }
    }

    #[test]
    fn test_failure_carries_error_message() {
        let result = Endpoint::Geocoding.classify(json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid."
        }));
        assert_eq!(
            result,
            CheckResult::Failure {
                status: "REQUEST_DENIED".to_string(),
                message: Some("The provided API key is invalid.".to_string()),
            }
        );
    }

    #[test]
    fn test_missing_status_is_transport_error() {
        let result = Endpoint::Directions.classify(json!({"routes": []}));
        assert!(matches!(result, CheckResult::TransportError(_)));
    }

    #[test]
    fn test_params_use_config() {
        let config = Config::default();
        let params = Endpoint::DistanceMatrix.params(&config);
        assert_eq!(
            params,
            vec![
                ("origins", "Jakarta".to_string()),
                ("destinations", "Surabaya".to_string()),
            ]
        );
    }

    #[test]
    fn test_geocoding_highlight() {
        let body = json!({
            "status": "OK",
            "results": [{"formatted_address": "Jakarta, Indonesia"}]
        });
        assert_eq!(Endpoint::Geocoding.highlights(&body), vec!["Location: Jakarta, Indonesia"]);
    }

    #[test]
    fn test_places_highlight_skipped_for_zero_results() {
        let body = json!({"status": "ZERO_RESULTS", "results": []});
        assert!(Endpoint::Places.highlights(&body).is_empty());

        let body = json!({"status": "OK", "results": [{}, {}, {}]});
        assert_eq!(Endpoint::Places.highlights(&body), vec!["Found 3 places"]);
    }

    #[test]
    fn test_distance_matrix_highlight_requires_element_ok() {
        let body = json!({
            "status": "OK",
            "rows": [{"elements": [{"status": "NOT_FOUND"}]}]
        });
        assert!(Endpoint::DistanceMatrix.highlights(&body).is_empty());

        let body = json!({
            "status": "OK",
            "rows": [{"elements": [{
                "status": "OK",
                "distance": {"text": "780 km"},
                "duration": {"text": "9 hours 40 mins"}
            }]}]
        });
        assert_eq!(
            Endpoint::DistanceMatrix.highlights(&body),
            vec!["Distance: 780 km", "Duration: 9 hours 40 mins"]
        );
    }

    #[test]
    fn test_missing_nested_fields_are_tolerated() {
        let body = json!({"status": "OK", "routes": []});
        assert!(Endpoint::Directions.highlights(&body).is_empty());
        assert!(Endpoint::Directions.classify(body).passed());
    }
}
