//! Interfaces to the host UI layer.
//!
//! The crate never measures anything on its own: element boxes and surface geometry are
//! supplied by the embedding toolkit through these traits.

use crate::{ElementMetrics, SurfaceMetrics};

/// Resolves selectors to element geometry.
pub trait ElementQuery {
    /// Measures the first element matched by `selector`.
    ///
    /// Returns `None` when the selector matches no element.
    fn measure(&self, selector: &str) -> Option<ElementMetrics>;
}

/// The scrollable display surface (e.g. a window).
pub trait Surface {
    /// Whether scroll offsets can be measured yet.
    fn is_ready(&self) -> bool {
        true
    }

    fn metrics(&self) -> SurfaceMetrics;
}

impl<Q: ElementQuery + ?Sized> ElementQuery for &Q {
    fn measure(&self, selector: &str) -> Option<ElementMetrics> {
        (**self).measure(selector)
    }
}

impl<S: Surface + ?Sized> Surface for &S {
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn metrics(&self) -> SurfaceMetrics {
        (**self).metrics()
    }
}

/// Fixed measurements of an always-ready surface.
impl Surface for SurfaceMetrics {
    fn metrics(&self) -> SurfaceMetrics {
        *self
    }
}
