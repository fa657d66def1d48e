use crate::{Region, ViewportPhase};

/// A snapshot of the viewport, delivered to listeners after each refresh.
///
/// `revision` counts completed refreshes, so listeners can tell two deliveries apart even
/// when the edges did not move.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub region: Region,
    pub phase: ViewportPhase,
    pub revision: u64,
}

impl From<&ViewportState> for Region {
    fn from(state: &ViewportState) -> Self {
        state.region
    }
}

impl From<ViewportState> for Region {
    fn from(state: ViewportState) -> Self {
        state.region
    }
}
