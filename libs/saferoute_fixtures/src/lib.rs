//! Canned backend and geocoder payloads shared by the `saferoute` tests.
//!
//! Coordinates are `(lat, lon)` pairs in decimal degrees.

/// Connaught Place, New Delhi. The original client's initial view.
pub const CONNAUGHT_PLACE: (f64, f64) = (28.6139, 77.209);

/// Greater Noida. The default fallback start.
pub const GREATER_NOIDA: (f64, f64) = (28.474780644693578, 77.47638190820159);

/// India Gate, New Delhi.
pub const INDIA_GATE: (f64, f64) = (28.612912, 77.229510);

/// Qutub Minar, New Delhi.
pub const QUTUB_MINAR: (f64, f64) = (28.524428, 77.185456);

/// One degree of longitude along the equator, as returned by the backend.
pub const EQUATOR_ROUTE: &str = r#"{
    "original_route": [[0, 0], [0, 1]],
    "safe_path": [[0, 0], [0, 1]],
    "segments": 1,
    "nodes": 2,
    "distance_meters": 111319.49,
    "avg_risk": 0.25
}"#;

/// A short detour through central Delhi, including the optional `segment_risks` list.
pub const DELHI_DETOUR: &str = r#"{
    "original_route": [[28.6129, 77.2295], [28.6100, 77.2200], [28.5244, 77.1854]],
    "segment_risks": [0.12, 0.30],
    "safe_path": [[28.6129, 77.2295], [28.6000, 77.2400], [28.5244, 77.1854]],
    "distance_meters": 10412.7,
    "avg_risk": 0.21,
    "nodes": 3,
    "segments": 2
}"#;

/// Same payload as [`EQUATOR_ROUTE`] with `avg_risk` missing.
pub const MISSING_AVG_RISK: &str = r#"{
    "original_route": [[0, 0], [0, 1]],
    "safe_path": [[0, 0], [0, 1]],
    "segments": 1,
    "nodes": 2,
    "distance_meters": 111319.49
}"#;

/// A route whose safe path leaves the valid latitude range.
pub const OUT_OF_RANGE_ROUTE: &str = r#"{
    "original_route": [[0, 0], [0, 1]],
    "safe_path": [[0, 0], [91.5, 1]],
    "segments": 1,
    "nodes": 2,
    "distance_meters": 12.0,
    "avg_risk": 0.1
}"#;

/// Body an upstream proxy returns in place of JSON.
pub const HTML_ERROR_PAGE: &str = "<html><body>502 Bad Gateway</body></html>";

/// Nominatim search result for "India Gate" (trimmed to the fields the client reads).
pub const NOMINATIM_INDIA_GATE: &str = r#"[
    {"place_id": 1, "lat": "28.612912", "lon": "77.229510", "display_name": "India Gate, New Delhi"},
    {"place_id": 2, "lat": "28.613000", "lon": "77.229000", "display_name": "India Gate Lawns"}
]"#;

/// Nominatim search result with no candidates.
pub const NOMINATIM_EMPTY: &str = "[]";

/// A candidate whose latitude is not a number.
pub const NOMINATIM_GARBLED: &str = r#"[{"lat": "north-ish", "lon": "77.2"}]"#;
