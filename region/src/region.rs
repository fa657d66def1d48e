use core::fmt;

use crate::error::{ArgumentError, RegionError, finite};
use crate::{Bounds, ElementMetrics, ElementQuery, Surface};

/// An axis-aligned rectangle with `left <= right` and `top <= bottom`.
///
/// The coordinate space has its origin at the top-left corner, with `y` growing downward.
/// Every constructor normalizes opposing edges with `min`/`max`, so a built region always
/// upholds the invariant; there is no way to obtain a crossed rectangle.
///
/// `Region` is a `Copy` value: passing an existing region anywhere yields an independent
/// copy.
///
/// With `feature = "serde"`, regions (de)serialize as [`Bounds`], and deserialization runs
/// the same validation as [`Region::from_bounds`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Bounds", into = "Bounds"))]
pub struct Region {
    top: f64,
    left: f64,
    right: f64,
    bottom: f64,
}

impl Region {
    /// Builds a region from two opposite corners `(x1, y1)` and `(x2, y2)`, in any order.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, RegionError> {
        let x1 = finite("x1", x1)?;
        let y1 = finite("y1", y1)?;
        let x2 = finite("x2", x2)?;
        let y2 = finite("y2", y2)?;
        Ok(Self::normalized(x1, y1, x2, y2))
    }

    /// A degenerate region covering the single point `(x, y)`.
    pub fn from_point(x: f64, y: f64) -> Result<Self, RegionError> {
        let x = finite("x", x)?;
        let y = finite("y", y)?;
        Ok(Self::normalized(x, y, x, y))
    }

    pub fn from_bounds(bounds: Bounds) -> Result<Self, RegionError> {
        let top = bounds.top.ok_or(ArgumentError::MissingField("top"))?;
        let left = bounds.left.ok_or(ArgumentError::MissingField("left"))?;
        let top = finite("top", top)?;
        let left = finite("left", left)?;
        let right = finite("right", bounds.right.unwrap_or(left))?;
        let bottom = finite("bottom", bounds.bottom.unwrap_or(top))?;
        Ok(Self::normalized(left, top, right, bottom))
    }

    /// The box occupied by an element: its offset plus its rendered size.
    pub fn from_metrics(metrics: ElementMetrics) -> Result<Self, RegionError> {
        let left = finite("left", metrics.left)?;
        let top = finite("top", metrics.top)?;
        let width = finite("width", metrics.width)?;
        let height = finite("height", metrics.height)?;
        Ok(Self::normalized(left, top, left + width, top + height))
    }

    /// Measures the first element matching `selector`.
    ///
    /// Fails with [`RegionError::NotFound`] when nothing matches.
    pub fn from_element<Q: ElementQuery + ?Sized>(
        query: &Q,
        selector: &str,
    ) -> Result<Self, RegionError> {
        let Some(metrics) = query.measure(selector) else {
            rwarn!(selector, "Region::from_element: no matching element");
            return Err(RegionError::NotFound(selector.into()));
        };
        Self::from_metrics(metrics)
    }

    /// The visible area of the surface: scroll offset plus visible extent.
    ///
    /// Scroll offsets read as zero while the surface is not ready.
    pub fn from_surface<S: Surface + ?Sized>(surface: &S) -> Self {
        Self::measure_surface(surface, surface.is_ready())
    }

    pub(crate) fn measure_surface<S: Surface + ?Sized>(surface: &S, scrolled: bool) -> Self {
        let m = surface.metrics();
        let (left, top) = if scrolled {
            (or_zero(m.scroll_left), or_zero(m.scroll_top))
        } else {
            (0.0, 0.0)
        };
        Self::normalized(
            left,
            top,
            left + or_zero(m.width),
            top + or_zero(m.height),
        )
    }

    /// Resolves any accepted source shape into a region.
    ///
    /// This is the normalization point used before comparisons: raw coordinates, bounds,
    /// elements and surfaces all go through here.
    pub fn factory<'a>(source: impl Into<RegionSource<'a>>) -> Result<Self, RegionError> {
        Self::try_from(source.into())
    }

    fn normalized(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            left: x1.min(x2),
            right: x1.max(x2),
            top: y1.min(y2),
            bottom: y1.max(y2),
        }
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Zero for points and lines.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// `true` when there is a gap between this region's bottom and `other`'s top.
    ///
    /// Touching edges do not count.
    pub fn is_above(&self, other: impl Into<Region>) -> bool {
        self.bottom < other.into().top
    }

    pub fn is_below(&self, other: impl Into<Region>) -> bool {
        self.top > other.into().bottom
    }

    pub fn is_left_of(&self, other: impl Into<Region>) -> bool {
        self.right < other.into().left
    }

    pub fn is_right_of(&self, other: impl Into<Region>) -> bool {
        self.left > other.into().right
    }

    /// `true` when the regions overlap on both axes. Touching edges count as overlap.
    pub fn intersects(&self, other: impl Into<Region>) -> bool {
        let other = other.into();
        self.bottom.min(other.bottom) >= self.top.max(other.top)
            && self.right.min(other.right) >= self.left.max(other.left)
    }

    /// The overlapping region, or `None` when the regions do not intersect.
    ///
    /// Touching regions yield a zero-area region along the shared edge.
    pub fn intersection(&self, other: impl Into<Region>) -> Option<Region> {
        let other = other.into();
        if !self.intersects(other) {
            return None;
        }
        Some(Self::normalized(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        ))
    }

    /// Non-strict: a region contains itself.
    pub fn contains(&self, other: impl Into<Region>) -> bool {
        let other = other.into();
        self.left <= other.left
            && self.top <= other.top
            && self.right >= other.right
            && self.bottom >= other.bottom
    }

    pub fn is_contained_by(&self, other: impl Into<Region>) -> bool {
        other.into().contains(*self)
    }
}

fn or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

impl From<&Region> for Region {
    fn from(region: &Region) -> Self {
        *region
    }
}

impl TryFrom<Bounds> for Region {
    type Error = RegionError;

    fn try_from(bounds: Bounds) -> Result<Self, Self::Error> {
        Self::from_bounds(bounds)
    }
}

impl From<Region> for Bounds {
    fn from(region: Region) -> Self {
        Bounds::new(region.top, region.left, region.right, region.bottom)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[top={}, left={}, right={}, bottom={}]",
            self.top, self.left, self.right, self.bottom
        )
    }
}

/// Every input shape a region can be built from.
///
/// Plain values convert into this through `From`, so most callers just pass their value to
/// [`Region::factory`].
#[derive(Clone, Copy)]
pub enum RegionSource<'a> {
    /// An existing region, copied.
    Region(Region),
    Point { x: f64, y: f64 },
    /// Two opposite corners in any order.
    Edges { x1: f64, y1: f64, x2: f64, y2: f64 },
    Bounds(Bounds),
    Metrics(ElementMetrics),
    Element {
        query: &'a dyn ElementQuery,
        selector: &'a str,
    },
    Surface(&'a dyn Surface),
}

impl TryFrom<RegionSource<'_>> for Region {
    type Error = RegionError;

    fn try_from(source: RegionSource<'_>) -> Result<Self, Self::Error> {
        match source {
            RegionSource::Region(region) => Ok(region),
            RegionSource::Point { x, y } => Self::from_point(x, y),
            RegionSource::Edges { x1, y1, x2, y2 } => Self::new(x1, y1, x2, y2),
            RegionSource::Bounds(bounds) => Self::from_bounds(bounds),
            RegionSource::Metrics(metrics) => Self::from_metrics(metrics),
            RegionSource::Element { query, selector } => Self::from_element(query, selector),
            RegionSource::Surface(surface) => Ok(Self::from_surface(surface)),
        }
    }
}

impl From<Region> for RegionSource<'_> {
    fn from(region: Region) -> Self {
        Self::Region(region)
    }
}

impl From<&Region> for RegionSource<'_> {
    fn from(region: &Region) -> Self {
        Self::Region(*region)
    }
}

impl From<(f64, f64)> for RegionSource<'_> {
    fn from((x, y): (f64, f64)) -> Self {
        Self::Point { x, y }
    }
}

impl From<[f64; 2]> for RegionSource<'_> {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::Point { x, y }
    }
}

impl From<(f64, f64, f64, f64)> for RegionSource<'_> {
    fn from((x1, y1, x2, y2): (f64, f64, f64, f64)) -> Self {
        Self::Edges { x1, y1, x2, y2 }
    }
}

impl From<[f64; 4]> for RegionSource<'_> {
    fn from([x1, y1, x2, y2]: [f64; 4]) -> Self {
        Self::Edges { x1, y1, x2, y2 }
    }
}

impl From<Bounds> for RegionSource<'_> {
    fn from(bounds: Bounds) -> Self {
        Self::Bounds(bounds)
    }
}

impl From<ElementMetrics> for RegionSource<'_> {
    fn from(metrics: ElementMetrics) -> Self {
        Self::Metrics(metrics)
    }
}

impl fmt::Debug for RegionSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Region(r) => f.debug_tuple("Region").field(r).finish(),
            Self::Point { x, y } => f.debug_struct("Point").field("x", x).field("y", y).finish(),
            Self::Edges { x1, y1, x2, y2 } => f
                .debug_struct("Edges")
                .field("x1", x1)
                .field("y1", y1)
                .field("x2", x2)
                .field("y2", y2)
                .finish(),
            Self::Bounds(b) => f.debug_tuple("Bounds").field(b).finish(),
            Self::Metrics(m) => f.debug_tuple("Metrics").field(m).finish(),
            Self::Element { selector, .. } => f
                .debug_struct("Element")
                .field("selector", selector)
                .finish_non_exhaustive(),
            Self::Surface(_) => f.write_str("Surface(..)"),
        }
    }
}
