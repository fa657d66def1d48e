use region::{Region, RegionError};

/// Absolute positioning derived from a region: `left`/`top` offsets plus size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Placement {
    /// The region this placement covers.
    pub fn region(&self) -> Result<Region, RegionError> {
        Region::new(
            self.left,
            self.top,
            self.left + self.width,
            self.top + self.height,
        )
    }
}

impl From<Region> for Placement {
    fn from(region: Region) -> Self {
        Self {
            left: region.left(),
            top: region.top(),
            width: region.width(),
            height: region.height(),
        }
    }
}

/// Applies absolute positioning to host elements.
///
/// Implemented by the UI layer (e.g. by writing `position: absolute; left; top; width;
/// height` onto the element's style).
pub trait StyleSink {
    fn apply_placement(&mut self, selector: &str, placement: Placement);
}

impl<T: StyleSink + ?Sized> StyleSink for &mut T {
    fn apply_placement(&mut self, selector: &str, placement: Placement) {
        (**self).apply_placement(selector, placement);
    }
}
