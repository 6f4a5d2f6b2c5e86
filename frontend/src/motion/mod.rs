//! Scroll-driven motion: where a region sits in its scroll band, how that
//! maps onto a parallax displacement, and the one-shot reveal latch.
//!
//! Everything here is plain arithmetic over layout numbers; the browser
//! bindings live in [`crate::hooks`].

pub mod offset;
pub mod progress;
pub mod reveal;
pub mod transform;

pub use offset::ScrollOffset;
pub use progress::{scroll_progress, RegionGeometry};
pub use reveal::{RevealMotion, RevealPhase, RevealState};
pub use transform::{parallax_offset, translate_y_style};
