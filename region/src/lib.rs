//! Axis-aligned regions with spatial comparisons, plus a change-notifying viewport.
//!
//! For element-bound shortcuts and style application, see the `region-adapter` crate.
//!
//! A [`Region`] is an immutable rectangle in a top-left-origin coordinate space. It can be
//! built from corners, a point, plain [`Bounds`], an element box or the display surface, and
//! compared against other regions (above/below/left-of/right-of, intersects, contains).
//!
//! A [`Viewport`] tracks the visible, scrolled area of the display surface. It is UI-agnostic:
//! the host provides measurements through [`Surface`] and forwards its resize/scroll/load
//! notifications; the viewport refreshes and notifies its listeners synchronously.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod emitter;
mod error;
mod host;
mod options;
mod region;
#[cfg(feature = "std")]
mod shared;
mod state;
mod types;
mod viewport;


pub use emitter::{ChangeListener, ListenerId};
pub use error::{ArgumentError, RegionError};
pub use host::{ElementQuery, Surface};
pub use options::ViewportOptions;
pub use region::{Region, RegionSource};
#[cfg(feature = "std")]
pub use shared::{SharedViewport, global, init_global};
pub use state::ViewportState;
pub use types::{Bounds, ElementMetrics, SurfaceEvent, SurfaceMetrics, ViewportPhase};
pub use viewport::Viewport;
