use crate::route::RouteResult;

/// The four display lines for a rendered route, in display order.
pub fn route_stats(result: &RouteResult) -> Vec<String> {
    vec![
        format!("Segments (OSRM): {}", result.segments()),
        format!("Graph nodes: {}", result.nodes()),
        format!("Distance (m): {}", result.distance_meters().round() as u64),
        format!("Avg segment risk: {:.3}", round_half_up(result.avg_risk(), 1000.0)),
    ]
}

// `{:.3}` alone rounds exact binary ties to even, so 0.0625 would read 0.062.
fn round_half_up(value: f64, scale: f64) -> f64 {
    (value * scale).round() / scale
}
