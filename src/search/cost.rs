use crate::transport::Cost;
use std::fmt::{Display, Formatter};

/// Distance of a state that has not been reached.
///
/// Candidates at or above `INF` are discarded, so summing real costs can
/// never produce it.
pub const INF: Cost = Cost::MAX;

/// A cost accumulated along a path from the source.
///
/// Extending it is overflow-checked: a step that would leave the
/// representable range is rejected instead of wrapping, and the search
/// treats it as a transition that does not exist.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccumulatedCost(Cost);

impl Default for AccumulatedCost {
    fn default() -> Self {
        AccumulatedCost::UNREACHED
    }
}

impl Display for AccumulatedCost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_reached() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "inf")
        }
    }
}

impl AccumulatedCost {
    pub const ZERO: AccumulatedCost = AccumulatedCost(0);
    pub const UNREACHED: AccumulatedCost = AccumulatedCost(INF);

    #[inline]
    pub const fn value(self) -> Cost {
        self.0
    }

    #[inline]
    pub const fn is_reached(self) -> bool {
        self.0 != INF
    }

    /// The cost after taking one more step of `step`, or `None` if this
    /// cost is unreached or the sum is not representable below [`INF`].
    #[inline]
    pub fn extend(self, step: Cost) -> Option<AccumulatedCost> {
        if !self.is_reached() {
            return None;
        }

        self.0
            .checked_add(step)
            .filter(|total| *total < INF)
            .map(AccumulatedCost)
    }
}
