//! Element-binding helpers for the `region` crate.
//!
//! The `region` crate works on plain values and host-provided measurements. This crate adds
//! the conveniences a UI layer usually wants on top:
//!
//! - [`ElementRegion`]: a selector bound to an element query, with every region predicate
//!   available directly on the element
//! - [`Placement`] / [`StyleSink`]: applying a region back onto an element as absolute
//!   positioning
//!
//! This crate is intentionally framework-agnostic (no DOM or toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod element;
mod placement;

#[cfg(test)]
mod tests;

pub use element::ElementRegion;
pub use placement::{Placement, StyleSink};
