//! Route ranking and filtering for search results.

use serde::Deserialize;

use crate::domain::{CarrierId, RouteResult, SeaMode};

/// Rank routes by total transit time, fastest first.
///
/// The sort is stable: routes with equal times keep their discovery order.
pub fn rank_routes(mut routes: Vec<RouteResult>) -> Vec<RouteResult> {
    routes.sort_by_key(|route| route.total_transit_time);
    routes
}

/// Criteria for narrowing a ranked result list.
///
/// All set criteria must hold for a route to be kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteFilter {
    /// Keep only routes whose sea portion is served this way.
    pub sea_mode: Option<SeaMode>,

    /// Keep only routes taking at most this many days.
    pub max_transit_days: Option<u32>,

    /// Keep only routes whose every sea segment is run by one of these
    /// carriers. Empty means any carrier.
    pub carriers: Vec<CarrierId>,
}

impl RouteFilter {
    /// Returns true if no criteria are set.
    pub fn is_empty(&self) -> bool {
        self.sea_mode.is_none() && self.max_transit_days.is_none() && self.carriers.is_empty()
    }

    /// Check a single route against the filter.
    pub fn matches(&self, route: &RouteResult) -> bool {
        if self.sea_mode.is_some_and(|mode| mode != route.sea_mode) {
            return false;
        }

        if self
            .max_transit_days
            .is_some_and(|max| route.total_transit_time > max)
        {
            return false;
        }

        if !self.carriers.is_empty() && !route.carriers().all(|c| self.carriers.contains(c)) {
            return false;
        }

        true
    }

    /// Keep matching routes, preserving order.
    pub fn apply<'a>(&self, routes: impl IntoIterator<Item = &'a RouteResult>) -> Vec<RouteResult> {
        routes
            .into_iter()
            .filter(|route| self.matches(route))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinates, Port, PortType, RouteSegment, RouteType, Service, ServiceLeg};
    use std::sync::Arc;

    fn port(id: &str) -> Port {
        Port::new(id, id, id, "X", Coordinates::new(0.0, 0.0), PortType::Seaport)
    }

    fn segment(carrier: &str) -> RouteSegment {
        let service = Arc::new(Service::new(
            format!("s-{carrier}"),
            carrier,
            "svc",
            "SVC",
            vec![ServiceLeg::new("l", "a", "b", 1, carrier)],
        ));
        RouteSegment::from_chain(&service, &port("a"), &port("b"), 0..1)
    }

    fn route(id: &str, days: u32, mode: SeaMode, carriers: &[&str]) -> RouteResult {
        RouteResult {
            id: id.to_string(),
            route_type: RouteType::from(mode),
            sea_mode: mode,
            has_inland_legs: false,
            total_transit_time: days,
            pre_carriage: None,
            segments: carriers.iter().map(|c| segment(c)).collect(),
            on_carriage: None,
            transshipment_port: None,
        }
    }

    fn ids(routes: &[RouteResult]) -> Vec<&str> {
        routes.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn rank_by_transit_time() {
        let ranked = rank_routes(vec![
            route("slow", 40, SeaMode::Direct, &["c1"]),
            route("fast", 20, SeaMode::Direct, &["c1"]),
            route("mid", 30, SeaMode::Transshipment, &["c1", "c1"]),
        ]);
        assert_eq!(ids(&ranked), ["fast", "mid", "slow"]);
    }

    #[test]
    fn rank_is_stable_on_ties() {
        let ranked = rank_routes(vec![
            route("first", 25, SeaMode::Transshipment, &["c1", "c2"]),
            route("second", 25, SeaMode::Direct, &["c1"]),
            route("quick", 10, SeaMode::Direct, &["c1"]),
            route("third", 25, SeaMode::Direct, &["c2"]),
        ]);
        assert_eq!(ids(&ranked), ["quick", "first", "second", "third"]);
    }

    #[test]
    fn rank_empty() {
        assert!(rank_routes(vec![]).is_empty());
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let filter = RouteFilter::default();
        assert!(filter.is_empty());

        let routes = vec![
            route("a", 10, SeaMode::Direct, &["c1"]),
            route("b", 90, SeaMode::Transshipment, &["c1", "c2"]),
        ];
        assert_eq!(ids(&filter.apply(&routes)), ["a", "b"]);
    }

    #[test]
    fn filter_by_sea_mode() {
        let routes = vec![
            route("direct", 10, SeaMode::Direct, &["c1"]),
            route("trans", 20, SeaMode::Transshipment, &["c1", "c2"]),
        ];
        let filter = RouteFilter {
            sea_mode: Some(SeaMode::Transshipment),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&routes)), ["trans"]);
    }

    #[test]
    fn filter_by_max_days_is_inclusive() {
        let routes = vec![
            route("a", 30, SeaMode::Direct, &["c1"]),
            route("b", 31, SeaMode::Direct, &["c1"]),
        ];
        let filter = RouteFilter {
            max_transit_days: Some(30),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&routes)), ["a"]);
    }

    #[test]
    fn filter_by_carriers_requires_all_segments() {
        let routes = vec![
            route("only-c1", 10, SeaMode::Direct, &["c1"]),
            route("mixed", 20, SeaMode::Transshipment, &["c1", "c2"]),
            route("only-c2", 30, SeaMode::Direct, &["c2"]),
        ];
        let filter = RouteFilter {
            carriers: vec![CarrierId::new("c1")],
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&routes)), ["only-c1"]);
    }

    #[test]
    fn filter_deserializes_partial_json() {
        let filter: RouteFilter = serde_json::from_str(r#"{"maxTransitDays": 45}"#).unwrap();
        assert_eq!(filter.max_transit_days, Some(45));
        assert!(filter.sea_mode.is_none());

        let filter: RouteFilter =
            serde_json::from_str(r#"{"seaMode": "DIRECT", "carriers": ["c1"]}"#).unwrap();
        assert_eq!(filter.sea_mode, Some(SeaMode::Direct));
        assert_eq!(filter.carriers, vec![CarrierId::new("c1")]);
    }
}
