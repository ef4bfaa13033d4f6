use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// The vehicle a traveller currently occupies.
///
/// Every search begins on [`TransportMode::Feet`], which is also the
/// default mode. The discriminants are dense and double as matrix and
/// state indices, see [`TransportMode::index`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Display,
    EnumString,
    AsRefStr,
    EnumCount,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum TransportMode {
    Bus,
    Car,
    #[default]
    Feet,
}

/// Number of transport modes.
pub const MODE_COUNT: usize = <TransportMode as EnumCount>::COUNT;

/// All modes, ordered by [`TransportMode::index`].
pub const MODES: [TransportMode; MODE_COUNT] =
    [TransportMode::Bus, TransportMode::Car, TransportMode::Feet];

impl TransportMode {
    /// Dense index of the mode, in `0..MODE_COUNT`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<TransportMode> {
        if index < MODE_COUNT {
            Some(MODES[index])
        } else {
            None
        }
    }
}
