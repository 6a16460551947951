use std::time::Duration;

use raylib::prelude::*;

use crate::animation::{OffsetAnimator, SlideAnimation};
use crate::carousel::Carousel;
use crate::constants::FPS;
use crate::easing::Easing;

const WINDOW_WIDTH: i32 = 640;
const WINDOW_HEIGHT: i32 = 360;
const FONT_SIZE: i32 = 24;
const MARGIN: i32 = 20;

/// Slide animator driven by raylib's easing tweens.
pub struct EaseAnimator {
    tween: Option<ease::Tween>,
    offset: f32,
    end: f32,
    duration: f32,
    animation_timer: f32,
    is_animating: bool,
}

impl EaseAnimator {
    pub fn new() -> Self {
        Self {
            tween: None,
            offset: 0.0,
            end: 0.0,
            duration: 0.0,
            animation_timer: 0.0,
            is_animating: false,
        }
    }
}

impl Default for EaseAnimator {
    fn default() -> Self {
        Self::new()
    }
}

fn easer(easing: Easing) -> fn(f32, f32, f32, f32) -> f32 {
    match easing {
        Easing::Linear => ease::linear_none,
        Easing::EaseOutCubic => ease::cubic_out,
        Easing::EaseInOutCubic => ease::cubic_in_out,
    }
}

impl OffsetAnimator for EaseAnimator {
    fn animate(&mut self, animation: SlideAnimation) {
        self.duration = animation.duration.as_secs_f32();
        self.end = animation.to;
        self.offset = animation.from;
        self.tween = Some(ease::Tween::new(
            easer(animation.easing),
            animation.from,
            animation.to,
            self.duration,
        ));
        self.animation_timer = 0.0;
        self.is_animating = true;
    }

    fn step(&mut self, dt: Duration) -> bool {
        if !self.is_animating {
            return false;
        }
        let dt = dt.as_secs_f32();
        self.animation_timer += dt;

        if self.animation_timer >= self.duration {
            self.is_animating = false;
            self.tween = None;
            self.offset = self.end;
            return true;
        }

        if let Some(tween) = self.tween.as_mut() {
            self.offset = tween.apply(dt);
        }
        false
    }

    fn offset(&self) -> f32 {
        self.offset
    }

    fn set_offset(&mut self, value: f32) {
        self.offset = value;
    }

    fn is_animating(&self) -> bool {
        self.is_animating
    }
}

/// Opens a window and draws `carousel` until it is closed.
///
/// R restarts the rotation, C stops it.
pub fn run<T: Clone>(carousel: &mut Carousel<T, String>) {
    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let viewport_height = carousel.viewport_height().round() as i32;

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        if rl.is_key_pressed(KeyboardKey::KEY_R) {
            tracing::info!("restarting rotation");
            carousel.start_over();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_C) {
            tracing::info!("clearing pending rotation");
            carousel.clear();
        }

        carousel.update(Duration::from_secs_f32(dt.max(0.0)));

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        let viewport_width = d.get_screen_width() - 2 * MARGIN;
        let viewport_y = (d.get_screen_height() - viewport_height) / 2;
        let text_offset = (viewport_height - FONT_SIZE) / 2;

        d.draw_rectangle_lines(
            MARGIN - 1,
            viewport_y - 1,
            viewport_width + 2,
            viewport_height + 2,
            Color::DARKGRAY,
        );

        let mut s = d.begin_scissor_mode(MARGIN, viewport_y, viewport_width, viewport_height);
        for slot in carousel.slots() {
            s.draw_text(
                &slot.content,
                MARGIN + 8,
                viewport_y + slot.y.round() as i32 + text_offset,
                FONT_SIZE,
                Color::WHITE,
            );
        }
        drop(s);

        let status = format!("#{}  {:?}", carousel.counter(), carousel.state());
        d.draw_text(&status, MARGIN, MARGIN, 16, Color::GRAY);
    }

    carousel.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_animator_completes_once() {
        let mut animator = EaseAnimator::new();
        animator.animate(SlideAnimation::slide_up(100.0, Duration::from_millis(200), Easing::Linear));

        assert!(!animator.step(Duration::from_millis(100)));
        assert!(animator.offset() < 0.0 && animator.offset() > -100.0);
        assert!(animator.step(Duration::from_millis(100)));
        assert_eq!(animator.offset(), -100.0);
        assert!(!animator.step(Duration::from_millis(16)));
    }
}
