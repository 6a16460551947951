//! Self-rotating display window.
//!
//! Shows one item of a collection at a time in a fixed-height viewport,
//! advancing automatically after a dwell time with an optional slide
//! transition. Rendering is left to the host; see [`Carousel::slots`].

pub mod animation;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod easing;
pub mod error;
pub mod rotation;
pub mod scheduler;
pub mod state;

#[cfg(feature = "windowed")]
pub mod window;

pub use animation::{OffsetAnimator, SlideAnimation, Tween};
pub use carousel::{Carousel, CarouselBuilder, Observer, Slot};
pub use config::CarouselConfig;
pub use easing::Easing;
pub use error::CarouselError;
pub use state::CarouselState;
