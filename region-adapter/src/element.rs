use core::fmt;

use region::{ElementQuery, Region, RegionError, RegionSource};

use crate::{Placement, StyleSink};

/// A selector bound to the host's element query.
///
/// Every call re-measures the element, so results follow layout changes. Each predicate
/// resolves the element's region first and fails with [`RegionError::NotFound`] when the
/// selector matches nothing; the comparison itself never fails.
pub struct ElementRegion<'a, Q: ?Sized> {
    query: &'a Q,
    selector: &'a str,
}

impl<'a, Q: ElementQuery + ?Sized> ElementRegion<'a, Q> {
    pub fn new(query: &'a Q, selector: &'a str) -> Self {
        Self { query, selector }
    }

    pub fn selector(&self) -> &'a str {
        self.selector
    }

    pub fn region(&self) -> Result<Region, RegionError> {
        Region::from_element(self.query, self.selector)
    }

    pub fn area(&self) -> Result<f64, RegionError> {
        Ok(self.region()?.area())
    }

    pub fn is_above(&self, other: impl Into<Region>) -> Result<bool, RegionError> {
        Ok(self.region()?.is_above(other))
    }

    pub fn is_below(&self, other: impl Into<Region>) -> Result<bool, RegionError> {
        Ok(self.region()?.is_below(other))
    }

    pub fn is_left_of(&self, other: impl Into<Region>) -> Result<bool, RegionError> {
        Ok(self.region()?.is_left_of(other))
    }

    pub fn is_right_of(&self, other: impl Into<Region>) -> Result<bool, RegionError> {
        Ok(self.region()?.is_right_of(other))
    }

    pub fn intersects(&self, other: impl Into<Region>) -> Result<bool, RegionError> {
        Ok(self.region()?.intersects(other))
    }

    pub fn intersection(&self, other: impl Into<Region>) -> Result<Option<Region>, RegionError> {
        Ok(self.region()?.intersection(other))
    }

    pub fn contains(&self, other: impl Into<Region>) -> Result<bool, RegionError> {
        Ok(self.region()?.contains(other))
    }

    pub fn is_contained_by(&self, other: impl Into<Region>) -> Result<bool, RegionError> {
        Ok(self.region()?.is_contained_by(other))
    }

    /// Positions the element absolutely over `source`.
    ///
    /// `source` is resolved with [`Region::factory`], so any accepted shape works (another
    /// element, raw corners, bounds, ...). Nothing is applied when resolution fails.
    pub fn place<'s, S: StyleSink + ?Sized>(
        &self,
        sink: &mut S,
        source: impl Into<RegionSource<'s>>,
    ) -> Result<Placement, RegionError> {
        let placement = Placement::from(Region::factory(source)?);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "region_adapter",
            selector = self.selector,
            left = placement.left,
            top = placement.top,
            width = placement.width,
            height = placement.height,
            "ElementRegion::place"
        );
        sink.apply_placement(self.selector, placement);
        Ok(placement)
    }
}

impl<Q: ?Sized> Clone for ElementRegion<'_, Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q: ?Sized> Copy for ElementRegion<'_, Q> {}

impl<Q: ?Sized> fmt::Debug for ElementRegion<'_, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementRegion")
            .field("selector", &self.selector)
            .finish_non_exhaustive()
    }
}
