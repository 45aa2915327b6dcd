//! The resolver entry point.

use crate::error::RouteResult;
use crate::request::RouteRequest;
use crate::table::{recommend, RouteRecommendation};

/// Resolve the safest exit for the given flooded-zone set.
///
/// Validates the request, then indexes the exit table with the flooded
/// mask. Pure and synchronous: identical requests always produce the
/// identical recommendation, and the contextual fields never change the
/// outcome.
pub fn find_safe_route(request: &RouteRequest) -> RouteResult<RouteRecommendation> {
    let flooded = request.flooded_set()?;
    Ok(recommend(flooded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouteError;

    fn request(zones: &[&str]) -> RouteRequest {
        RouteRequest::new(
            "main hallway",
            zones.iter().map(|z| z.to_string()).collect(),
            "three zones, three exits",
        )
    }

    #[test]
    fn resolves_from_labels() {
        let rec = find_safe_route(&request(&["Zone A", "Zone B"])).unwrap();
        assert_eq!(rec.nearest_safe_exit, "Exit 2");
    }

    #[test]
    fn invalid_label_is_err_not_panic() {
        assert_eq!(
            find_safe_route(&request(&["Zone Q"])),
            Err(RouteError::InvalidInput)
        );
    }

    #[test]
    fn idempotent() {
        let req = request(&["C"]);
        let first = find_safe_route(&req).unwrap();
        let second = find_safe_route(&req).unwrap();
        assert_eq!(first, second);
    }
}
