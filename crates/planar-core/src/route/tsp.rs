use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use crate::error::{PlanarError, Result};
use crate::graph::NodeId;
use crate::matrix::{PathMatrix, UNREACHABLE_COST};
use crate::route::hubs::HubMap;
use crate::trace_time;

/// Greedy nearest-neighbour route construction.
///
/// Starting at the source hub, repeatedly walks to the cheapest unvisited hub
/// until every hub has been visited. The route is open: it does not repeat
/// the source at the end. See [`closed_tour_cost`](Self::closed_tour_cost)
/// for the cost including the return leg.
///
/// Candidates at [`UNREACHABLE_COST`] are never selected. Among equally cheap
/// candidates the lowest hub index wins, so a route is fully determined by
/// the cost table and the source.
#[derive(Debug)]
pub struct NearestNeighbourTsp<'a> {
    distances: &'a PathMatrix,
    hubs: &'a HubMap,
    source_hub: usize,
    route: Vec<usize>,
    computation_time: Duration,
}

impl<'a> NearestNeighbourTsp<'a> {
    pub fn new(distances: &'a PathMatrix, hubs: &'a HubMap, source_hub: usize) -> Result<Self> {
        if source_hub >= distances.num_hubs() {
            return Err(PlanarError::invalid_value(
                "source hub",
                format!("{} (matrix has {} hubs)", source_hub, distances.num_hubs()),
            ));
        }

        Ok(NearestNeighbourTsp {
            distances,
            hubs,
            source_hub,
            route: Vec::new(),
            computation_time: Duration::ZERO,
        })
    }

    /// Construct the route and return it, source first.
    ///
    /// Fails with [`PlanarError::RouteConstruction`] when hubs remain but none
    /// has a known cost from the current hub.
    #[tracing::instrument(
        skip(self),
        fields(source_hub = self.source_hub, hubs = self.distances.num_hubs())
    )]
    pub fn execute(&mut self) -> Result<Vec<usize>> {
        let start = Instant::now();
        let num_hubs = self.distances.num_hubs();

        self.route.clear();
        self.route.reserve(num_hubs);
        self.route.push(self.source_hub);

        let mut unvisited: BTreeSet<usize> = (0..num_hubs).collect();
        unvisited.remove(&self.source_hub);

        let mut current = self.source_hub;
        let outcome = loop {
            if unvisited.is_empty() {
                break Ok(());
            }
            match self.nearest(current, &unvisited) {
                Some(next) => {
                    unvisited.remove(&next);
                    self.route.push(next);
                    current = next;
                }
                None => {
                    break Err(PlanarError::RouteConstruction {
                        current_hub: current,
                        remaining: unvisited.len(),
                    })
                }
            }
        };

        self.computation_time = start.elapsed();
        trace_time!(start, "nearest_neighbour_tsp", route_len = self.route.len());
        outcome?;

        tracing::debug!(
            route_len = self.route.len(),
            elapsed_us = self.computation_time.as_micros() as u64,
            "route constructed"
        );
        Ok(self.route.clone())
    }

    /// Cheapest selectable hub from `current`, lowest index on ties
    fn nearest(&self, current: usize, unvisited: &BTreeSet<usize>) -> Option<usize> {
        let mut selected: Option<(usize, i32)> = None;
        for &hub in unvisited {
            if hub == current {
                continue;
            }
            let cost = self.distances.cost(current, hub);
            if cost == UNREACHABLE_COST {
                continue;
            }
            let better = match selected {
                Some((_, best)) => cost < best,
                None => true,
            };
            if better {
                selected = Some((hub, cost));
            }
        }
        selected.map(|(hub, _)| hub)
    }

    /// Route built by the last `execute`, partial if it failed
    pub fn route(&self) -> &[usize] {
        &self.route
    }

    /// Wall-clock time spent in the last `execute`. Informational only.
    pub fn computation_time(&self) -> Duration {
        self.computation_time
    }

    pub fn source_hub(&self) -> usize {
        self.source_hub
    }

    /// The last route translated to graph nodes through the hub map
    pub fn route_nodes(&self) -> Result<Vec<NodeId>> {
        self.route
            .iter()
            .map(|hub| {
                self.hubs
                    .node(*hub)
                    .ok_or_else(|| PlanarError::not_found("hub", hub))
            })
            .collect()
    }

    /// Cost of the last route including the leg back to the source, or
    /// `None` if some leg has no known cost or no route was built
    pub fn closed_tour_cost(&self) -> Option<i64> {
        let first = *self.route.first()?;
        let last = *self.route.last()?;
        let open = tour_cost(self.distances, &self.route)?;
        if self.route.len() == 1 {
            return Some(open);
        }
        let back = self.distances.cost(last, first);
        (back != UNREACHABLE_COST).then(|| open + i64::from(back))
    }
}

/// Summed cost of walking `route` in order, or `None` if a leg is unknown
pub fn tour_cost(distances: &PathMatrix, route: &[usize]) -> Option<i64> {
    route.windows(2).try_fold(0i64, |total, leg| {
        let cost = distances.cost(leg[0], leg[1]);
        (cost != UNREACHABLE_COST).then(|| total + i64::from(cost))
    })
}

#[cfg(test)]
mod tests;
