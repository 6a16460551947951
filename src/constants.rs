use std::time::Duration;

pub const DEFAULT_DWELL: Duration = Duration::from_millis(3000);          // Time each item stays on screen
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(250); // Duration of one slide transition
pub const FALLBACK_DELAY: Duration = Duration::from_millis(1);            // Delay before sliding away from the default item
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 48.0;                            // Height of one item slot (pixels)

pub const FPS: u32 = 60;                                                  // Frames per second of the demo loop
pub const FRAME_TIME: f32 = 1.0 / FPS as f32;                             // Time per frame (seconds)
