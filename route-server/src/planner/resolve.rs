//! Inland linkage resolution.
//!
//! Turns a requested location into the seaports where the sea portion of a
//! route may begin or end. A seaport resolves to itself. An inland hub
//! resolves to each gateway seaport it has an inland connection to, carrying
//! the inland leg that bridges hub and gateway.

use std::collections::HashMap;

use tracing::trace;

use crate::domain::{InlandLeg, NetworkSnapshot, Port, PortId, TransportMode};

use super::config::SearchConfig;
use super::search::SearchError;

/// A seaport where the sea portion of a route starts or ends.
#[derive(Debug, Clone)]
pub struct SeaEndpoint<'a> {
    /// The seaport.
    pub port: &'a Port,

    /// Inland leg between the seaport and the requested hub, if any.
    pub inland_leg: Option<InlandLeg>,
}

/// Which end of a route is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Carriage {
    /// Hub to gateway, before the sea portion.
    Pre,
    /// Gateway to hub, after the sea portion.
    On,
}

/// Resolve the seaports a route from `origin` may sail from.
pub fn resolve_start_points<'a>(
    origin: &'a Port,
    network: &'a NetworkSnapshot,
    config: &SearchConfig,
) -> Result<Vec<SeaEndpoint<'a>>, SearchError> {
    resolve(origin, Carriage::Pre, network, config)
}

/// Resolve the seaports a route to `destination` may arrive at.
pub fn resolve_end_points<'a>(
    destination: &'a Port,
    network: &'a NetworkSnapshot,
    config: &SearchConfig,
) -> Result<Vec<SeaEndpoint<'a>>, SearchError> {
    resolve(destination, Carriage::On, network, config)
}

fn resolve<'a>(
    location: &'a Port,
    carriage: Carriage,
    network: &'a NetworkSnapshot,
    config: &SearchConfig,
) -> Result<Vec<SeaEndpoint<'a>>, SearchError> {
    if !location.is_inland() {
        return Ok(vec![SeaEndpoint {
            port: location,
            inland_leg: None,
        }]);
    }

    let mut endpoints = Vec::new();
    for link in network.inland_links_from(&location.id) {
        let gateway = network
            .port(&link.port_id)
            .ok_or_else(|| SearchError::UnknownLocation(link.port_id.clone()))?;

        let (origin, destination) = match carriage {
            Carriage::Pre => (location, gateway),
            Carriage::On => (gateway, location),
        };

        endpoints.push(SeaEndpoint {
            port: gateway,
            inland_leg: Some(InlandLeg {
                origin: origin.clone(),
                destination: destination.clone(),
                mode: link.mode,
                transit_time: link.transit_time_days,
            }),
        });
    }

    if config.dedupe_gateways {
        endpoints = dedupe_by_gateway(endpoints);
    }

    trace!(
        location = %location.id,
        ?carriage,
        endpoints = endpoints.len(),
        "Resolved inland hub"
    );

    Ok(endpoints)
}

/// Keep the fastest link per (gateway, mode); the first wins on ties.
///
/// Surviving endpoints stay at the position of the first link for their key.
fn dedupe_by_gateway(endpoints: Vec<SeaEndpoint<'_>>) -> Vec<SeaEndpoint<'_>> {
    let mut result: Vec<SeaEndpoint<'_>> = Vec::with_capacity(endpoints.len());
    let mut seen: HashMap<(PortId, Option<TransportMode>), usize> = HashMap::new();

    for endpoint in endpoints {
        let key = (
            endpoint.port.id.clone(),
            endpoint.inland_leg.as_ref().map(|leg| leg.mode),
        );
        match seen.get(&key) {
            Some(&idx) => {
                if transit(&endpoint) < transit(&result[idx]) {
                    result[idx] = endpoint;
                }
            }
            None => {
                seen.insert(key, result.len());
                result.push(endpoint);
            }
        }
    }

    result
}

fn transit(endpoint: &SeaEndpoint<'_>) -> u32 {
    endpoint
        .inland_leg
        .as_ref()
        .map_or(0, |leg| leg.transit_time)
}
