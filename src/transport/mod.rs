pub mod matrix;
pub mod mode;


#[doc(inline)]
pub use matrix::{TransferMatrix, NO_TRANSFER};
#[doc(inline)]
pub use mode::{TransportMode, MODES, MODE_COUNT};

/// Scalar traversal and transfer cost.
pub type Cost = i64;
