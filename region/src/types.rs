/// A plain edge description, as received from a host or a deserialized payload.
///
/// `top` and `left` are required; `right` and `bottom` default to `left` and `top`.
/// Edges may be given in any order, they are normalized by [`crate::Region::from_bounds`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Bounds {
    pub top: Option<f64>,
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
}

impl Bounds {
    /// Bounds with only the required edges set (a point).
    pub fn at(top: f64, left: f64) -> Self {
        Self {
            top: Some(top),
            left: Some(left),
            right: None,
            bottom: None,
        }
    }

    pub fn new(top: f64, left: f64, right: f64, bottom: f64) -> Self {
        Self {
            top: Some(top),
            left: Some(left),
            right: Some(right),
            bottom: Some(bottom),
        }
    }

    pub fn with_right(mut self, right: f64) -> Self {
        self.right = Some(right);
        self
    }

    pub fn with_bottom(mut self, bottom: f64) -> Self {
        self.bottom = Some(bottom);
        self
    }
}

/// Document offset and rendered size of a matched element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementMetrics {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

/// Scroll offset and visible extent of the display surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceMetrics {
    pub scroll_left: f64,
    pub scroll_top: f64,
    pub width: f64,
    pub height: f64,
}

/// Notifications delivered by the host surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurfaceEvent {
    /// The surface became measurable. Fired once.
    Ready,
    Load,
    Resize,
    Scroll,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewportPhase {
    /// Waiting for the host ready signal; scroll offsets read as zero.
    #[default]
    Uninitialized,
    /// Refreshed from live surface measurements.
    Active,
}
