use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{PlanarError, Result};
use crate::matrix::Matrix;

/// Cost stored between two hubs whose distance was never set. Route
/// construction treats it as worse than every real cost.
pub const UNREACHABLE_COST: i32 = -i32::MAX;

/// Square table of integer costs between hubs `0..num_hubs`.
///
/// The diagonal is always 0. Every other entry starts as
/// [`UNREACHABLE_COST`] until a cost is set. Costs are not required to be
/// symmetric, and no shortest-path closure is ever computed.
///
/// Equality and hashing look at the cost entries only, never at
/// `max_distance`.
#[derive(Debug, Clone)]
pub struct PathMatrix {
    costs: Matrix<i32>,
    max_distance: i32,
}

impl PathMatrix {
    pub fn new(num_hubs: usize) -> Self {
        Self::with_max_distance(num_hubs, 0)
    }

    pub fn with_max_distance(num_hubs: usize, max_distance: i32) -> Self {
        let mut costs = Matrix::filled(num_hubs, num_hubs, UNREACHABLE_COST);
        for hub in 0..num_hubs {
            if let Some(cell) = costs.get_mut(hub, hub) {
                *cell = 0;
            }
        }
        PathMatrix {
            costs,
            max_distance,
        }
    }

    /// Build from a full cost table, one row per source hub.
    ///
    /// The table must be square with a zero diagonal. Off-diagonal entries are
    /// non-negative costs or [`UNREACHABLE_COST`].
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self> {
        let costs = Matrix::from_rows(rows)?;
        if costs.rows() != costs.cols() {
            return Err(PlanarError::malformed_matrix(format!(
                "cost table must be square, got {}x{}",
                costs.rows(),
                costs.cols()
            )));
        }

        for (source, row) in costs.iter_rows().enumerate() {
            for (target, cost) in row.iter().enumerate() {
                validate_cost(source, target, *cost)
                    .map_err(|e| PlanarError::malformed_matrix(e.to_string()))?;
            }
        }

        Ok(PathMatrix {
            costs,
            max_distance: 0,
        })
    }

    pub fn num_hubs(&self) -> usize {
        self.costs.rows()
    }

    pub fn max_distance(&self) -> i32 {
        self.max_distance
    }

    pub fn set_max_distance(&mut self, max_distance: i32) {
        self.max_distance = max_distance;
    }

    /// Cost of travelling from `source` to `target`.
    ///
    /// Unset entries and hubs outside the table report [`UNREACHABLE_COST`].
    pub fn cost(&self, source: usize, target: usize) -> i32 {
        self.costs
            .get(source, target)
            .copied()
            .unwrap_or(UNREACHABLE_COST)
    }

    /// Whether a real cost is known from `source` to `target`
    pub fn is_known(&self, source: usize, target: usize) -> bool {
        self.cost(source, target) != UNREACHABLE_COST
    }

    /// Set the cost from `source` to `target`. The reverse direction is left
    /// untouched.
    pub fn set_cost(&mut self, source: usize, target: usize, cost: i32) -> Result<()> {
        validate_cost(source, target, cost)?;
        self.costs.set(source, target, cost).map_err(|_| {
            PlanarError::invalid_value(
                "hub",
                format!(
                    "{} -> {} outside {} hubs",
                    source,
                    target,
                    self.num_hubs()
                ),
            )
        })
    }

    /// Costs out of `source`, indexed by target hub
    pub fn row(&self, source: usize) -> Option<&[i32]> {
        self.costs.row(source)
    }

    pub fn as_matrix(&self) -> &Matrix<i32> {
        &self.costs
    }
}

fn validate_cost(source: usize, target: usize, cost: i32) -> Result<()> {
    if source == target && cost != 0 {
        crate::bail_invalid!("cost", format!("{} on diagonal at hub {}", cost, source));
    }
    if cost < 0 && cost != UNREACHABLE_COST {
        crate::bail_invalid!("cost", format!("{} from hub {} to {}", cost, source, target));
    }
    Ok(())
}

impl PartialEq for PathMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.costs == other.costs
    }
}

impl Eq for PathMatrix {}

impl Hash for PathMatrix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.costs.hash(state);
    }
}

impl fmt::Display for PathMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.costs, f)
    }
}
