use crate::transport::{Cost, TransportMode, MODES, MODE_COUNT};
use serde::{Deserialize, Serialize};

/// Sentinel cost marking a forbidden mode pair.
///
/// Finite, and half of the representable range, so that adding it to any
/// accumulated cost never wraps. Entries at or above this value are
/// treated as absent.
pub const NO_TRANSFER: Cost = Cost::MAX / 2;

/// A square cost table indexed by [`TransportMode`].
///
/// Attached to a vertex, `cost(a, b)` is the price of switching from `a`
/// to `b` in place. Attached to an arc, it is the price of traversing the
/// arc while boarding in `a` and arriving in `b`, so a scalar weight `w`
/// is the [diagonal](TransferMatrix::diagonal) matrix of `w`.
///
/// The matrix performs no validation of its values; deciding whether a
/// negative entry is acceptable is up to the search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransferMatrix {
    costs: [[Cost; MODE_COUNT]; MODE_COUNT],
}

impl Default for TransferMatrix {
    /// Every mode pair forbidden.
    fn default() -> Self {
        TransferMatrix::uniform(NO_TRANSFER)
    }
}

impl From<Cost> for TransferMatrix {
    fn from(weight: Cost) -> Self {
        TransferMatrix::diagonal(weight)
    }
}

impl TransferMatrix {
    /// Continuing in the same mode costs `cost`, switching is forbidden.
    pub const fn diagonal(cost: Cost) -> Self {
        let mut costs = [[NO_TRANSFER; MODE_COUNT]; MODE_COUNT];
        let mut mode = 0;
        while mode < MODE_COUNT {
            costs[mode][mode] = cost;
            mode += 1;
        }

        TransferMatrix { costs }
    }

    /// Every mode pair, including continuing, costs `cost`.
    pub const fn uniform(cost: Cost) -> Self {
        TransferMatrix {
            costs: [[cost; MODE_COUNT]; MODE_COUNT],
        }
    }

    #[inline]
    pub const fn cost(&self, from: TransportMode, to: TransportMode) -> Cost {
        self.costs[from.index()][to.index()]
    }

    pub fn set_cost(&mut self, from: TransportMode, to: TransportMode, cost: Cost) -> &mut Self {
        self.costs[from.index()][to.index()] = cost;
        self
    }

    /// Forbids the `from -> to` pair.
    pub fn forbid(&mut self, from: TransportMode, to: TransportMode) -> &mut Self {
        self.set_cost(from, to, NO_TRANSFER)
    }

    #[inline]
    pub const fn allows(&self, from: TransportMode, to: TransportMode) -> bool {
        self.cost(from, to) < NO_TRANSFER
    }

    /// The permitted targets reachable from `from`, with their cost,
    /// in [`TransportMode::index`] order.
    pub fn transitions(
        &self,
        from: TransportMode,
    ) -> impl Iterator<Item = (TransportMode, Cost)> + 'static {
        let row = self.costs[from.index()];
        MODES
            .into_iter()
            .map(move |to| (to, row[to.index()]))
            .filter(|(_, cost)| *cost < NO_TRANSFER)
    }
}
