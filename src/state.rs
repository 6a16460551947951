#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum CarouselState {
    #[default]
    Idle,      // Nothing pending, the window is static
    Armed,     // A dwell timer is counting down to the next advance
    Animating, // The window is sliding to the next item
}

impl CarouselState {
    pub fn is_idle(self) -> bool {
        self == CarouselState::Idle
    }
}
