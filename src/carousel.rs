//! The self-rotating display window.
//!
//! A [`Carousel`] shows one item of a collection at a time in a fixed-height
//! viewport. While animation is enabled it waits out the dwell time, slides
//! the stack up by one slot, then rotates its window so the next item sits at
//! the top, and starts waiting again.
//!
//! The host owns the clock: call [`Carousel::update`] once per frame with the
//! elapsed time. All state changes happen inside `update` or inside the
//! imperative calls ([`Carousel::start_over`], [`Carousel::clear`], the
//! `set_*` family), never concurrently.
//!
//! ```text
//!   Idle --arm--> Armed --timer--> Animating --done, >1 item--> Armed
//!    ^                                  |
//!    +------------- clear / re-init ----+--done, 1 item--> Idle
//! ```

use std::fmt;
use std::time::Duration;

use tracing::debug;

use crate::animation::{OffsetAnimator, SlideAnimation, Tween};
use crate::config::CarouselConfig;
use crate::constants::FALLBACK_DELAY;
use crate::error::Result;
use crate::rotation::{normalize_offset, rotate_left_one, rotation};
use crate::scheduler::{Fired, Scheduler};
use crate::state::CarouselState;

/// Called with the newly visible item and its rotation counter.
pub type Observer<T> = Box<dyn FnMut(&T, usize)>;

/// Maps an item to whatever the host draws.
pub type RenderFn<T, C> = Box<dyn Fn(&T) -> C>;

/// One rendered entry of the window that overlaps the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot<C> {
    /// Top edge relative to the viewport's top edge.
    pub y: f32,
    pub content: C,
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    counter: usize,
    generation: u64,
}

pub struct Carousel<T, C> {
    config: CarouselConfig,
    items: Vec<T>,
    default_item: Option<T>,
    render: RenderFn<T, C>,
    observer: Option<Observer<T>>,
    animator: Box<dyn OffsetAnimator>,
    scheduler: Scheduler,

    window: Vec<T>,
    counter: usize,
    was_showing_default: bool,
    state: CarouselState,
    in_flight: Option<InFlight>,
    // Bumped by every re-initialization and clear; stale timers and
    // transitions carry an older value.
    generation: u64,
}

pub struct CarouselBuilder<T, C> {
    config: CarouselConfig,
    items: Vec<T>,
    default_item: Option<T>,
    render: RenderFn<T, C>,
    observer: Option<Observer<T>>,
    animator: Option<Box<dyn OffsetAnimator>>,
}

impl<T: Clone, C> CarouselBuilder<T, C> {
    pub fn config(mut self, config: CarouselConfig) -> Self {
        self.config = config;
        self
    }

    pub fn items(mut self, items: Vec<T>) -> Self {
        self.items = items;
        self
    }

    pub fn default_item(mut self, item: T) -> Self {
        self.default_item = Some(item);
        self
    }

    pub fn observer<F>(mut self, observer: F) -> Self
    where
        F: FnMut(&T, usize) + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Replaces the built-in [`Tween`].
    pub fn animator<A>(mut self, animator: A) -> Self
    where
        A: OffsetAnimator + 'static,
    {
        self.animator = Some(Box::new(animator));
        self
    }

    /// Validates the configuration and runs the first initialization, which
    /// notifies the observer of the first visible item.
    pub fn build(self) -> Result<Carousel<T, C>> {
        self.config.validate()?;

        let scheduler = Scheduler::new(self.config.dwell, self.config.animation_enabled);
        let mut carousel = Carousel {
            config: self.config,
            items: self.items,
            default_item: self.default_item,
            render: self.render,
            observer: self.observer,
            animator: self.animator.unwrap_or_else(|| Box::new(Tween::new())),
            scheduler,
            window: Vec::new(),
            counter: 0,
            was_showing_default: false,
            state: CarouselState::Idle,
            in_flight: None,
            generation: 0,
        };
        carousel.initialize();
        Ok(carousel)
    }
}

impl<T: Clone, C> Carousel<T, C> {
    pub fn builder<R>(render: R) -> CarouselBuilder<T, C>
    where
        R: Fn(&T) -> C + 'static,
    {
        CarouselBuilder {
            config: CarouselConfig::default(),
            items: Vec::new(),
            default_item: None,
            render: Box::new(render),
            observer: None,
            animator: None,
        }
    }

    // --- Setup ---

    fn initialize(&mut self) {
        self.scheduler.cancel();
        self.generation = self.generation.wrapping_add(1);
        self.state = CarouselState::Idle;
        self.counter = 0;

        if self.items.is_empty() {
            match &self.default_item {
                Some(default_item) => {
                    // Silent placeholder, no notification and no timer.
                    self.window = vec![default_item.clone()];
                    self.was_showing_default = true;
                    debug!("no items, showing the default item");
                }
                None => {
                    self.window.clear();
                    self.was_showing_default = false;
                    debug!("no items and no default item, nothing to show");
                }
            }
            return;
        }

        let start = normalize_offset(self.config.start_offset, self.items.len());
        let mut window = rotation(&self.items, start as i64);
        self.counter = start;

        if self.config.animation_enabled && self.was_showing_default {
            if let Some(default_item) = &self.default_item {
                // Slide from the placeholder into the first real item
                // instead of cutting to it.
                window.insert(0, default_item.clone());
                self.window = window;
                debug!(start, "items arrived, sliding away from the default item");
                self.arm(Some(FALLBACK_DELAY));
                return;
            }
        }

        self.was_showing_default = false;
        self.window = window;
        debug!(start, items = self.items.len(), "initialized rotation window");
        self.notify();
        self.arm(None);
    }

    fn notify(&mut self) {
        if let (Some(observer), Some(visible)) = (self.observer.as_mut(), self.window.first()) {
            observer(visible, self.counter);
        }
    }

    // --- Timer ---

    fn arm(&mut self, delay: Option<Duration>) {
        if self
            .scheduler
            .arm(self.window.len(), self.counter, self.generation, delay)
        {
            self.state = CarouselState::Armed;
        }
    }

    // --- Update Logic ---

    /// Advances the carousel by `dt`.
    pub fn update(&mut self, dt: Duration) {
        let completed = self.animator.step(dt);
        if self.is_settling() {
            // Keep a transition from a previous window off screen.
            self.animator.set_offset(0.0);
        }
        let fired = self.scheduler.advance(dt);

        // A completion always belongs to the transition started before a
        // timer that fires in this same frame.
        if completed {
            self.complete_transition();
        }
        if let Some(fired) = fired {
            self.fire(fired);
        }
    }

    fn fire(&mut self, fired: Fired) {
        if fired.generation != self.generation {
            debug!(generation = fired.generation, "ignoring stale timer");
            return;
        }

        self.in_flight = Some(InFlight {
            counter: fired.counter,
            generation: fired.generation,
        });
        self.state = CarouselState::Animating;
        self.animator.animate(SlideAnimation::slide_up(
            self.config.viewport_height,
            self.config.animation_duration,
            self.config.easing,
        ));
        debug!(counter = fired.counter, "transition started");
    }

    fn complete_transition(&mut self) {
        let Some(in_flight) = self.in_flight.take() else {
            return;
        };

        self.animator.set_offset(0.0);
        if in_flight.generation != self.generation {
            debug!(generation = in_flight.generation, "discarding stale transition");
            return;
        }

        let len = self.window.len();
        if len == 0 {
            self.state = CarouselState::Idle;
            return;
        }

        let mut next = (in_flight.counter + 1) % len;
        let mut shifted = rotate_left_one(&self.window);

        if self.was_showing_default {
            // The placeholder rotated to the tail; it is not a real advance.
            shifted.pop();
            self.was_showing_default = false;
            next = next.saturating_sub(1);
        }

        self.counter = next;
        self.window = shifted;
        debug!(counter = next, "transition finished");
        self.notify();

        self.state = CarouselState::Idle;
        self.arm(None);
    }

    // --- Controls ---

    /// Cancels pending work. The window is left as is and the observer is
    /// not called. A transition already in flight is snapped back to rest and
    /// no longer rotates the window.
    pub fn clear(&mut self) {
        self.scheduler.cancel();
        self.generation = self.generation.wrapping_add(1);
        self.state = CarouselState::Idle;
        if self.in_flight.is_some() {
            self.animator.set_offset(0.0);
        }
    }

    /// A transition started for an older window is still running.
    fn is_settling(&self) -> bool {
        self.in_flight
            .is_some_and(|in_flight| in_flight.generation != self.generation)
    }

    /// Restarts the cycle from the configured start offset.
    pub fn start_over(&mut self) {
        self.clear();
        self.initialize();
    }

    // --- Input changes ---

    /// Replaces the item collection and re-initializes.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.start_over();
    }

    pub fn set_default_item(&mut self, item: Option<T>) {
        self.default_item = item;
        self.start_over();
    }

    pub fn set_start_offset(&mut self, offset: i64) {
        self.config.start_offset = offset;
        self.start_over();
    }

    pub fn set_animation_enabled(&mut self, enabled: bool) {
        self.config.animation_enabled = enabled;
        self.scheduler.set_enabled(enabled);
        self.start_over();
    }

    // --- Accessors ---

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn default_item(&self) -> Option<&T> {
        self.default_item.as_ref()
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The current rotation window, visible item first.
    pub fn window(&self) -> &[T] {
        &self.window
    }

    pub fn visible_item(&self) -> Option<&T> {
        self.window.first()
    }

    /// Index of the visible item within the item collection.
    pub fn counter(&self) -> usize {
        self.counter
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn is_showing_default(&self) -> bool {
        self.was_showing_default
    }

    pub fn is_armed(&self) -> bool {
        self.scheduler.is_armed()
    }

    /// Time left before the next advance, if one is pending.
    pub fn time_until_advance(&self) -> Option<Duration> {
        self.scheduler.pending().map(|timer| timer.remaining)
    }

    /// Current vertical offset of the stack; `0` at rest, `-viewport_height`
    /// at the end of a slide.
    pub fn offset(&self) -> f32 {
        if self.is_settling() {
            return 0.0;
        }
        self.animator.offset()
    }

    pub fn viewport_height(&self) -> f32 {
        self.config.viewport_height
    }

    pub fn render(&self, item: &T) -> C {
        (self.render)(item)
    }

    /// Rendered window entries that overlap the viewport.
    pub fn slots(&self) -> Vec<Slot<C>> {
        let height = self.config.viewport_height;
        let offset = self.offset();

        self.window
            .iter()
            .enumerate()
            .map(|(i, item)| (i as f32 * height + offset, item))
            .filter(|(y, _)| *y < height && *y + height > 0.0)
            .map(|(y, item)| Slot {
                y,
                content: (self.render)(item),
            })
            .collect()
    }
}

impl<T, C> Drop for Carousel<T, C> {
    fn drop(&mut self) {
        self.scheduler.cancel();
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Carousel<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("config", &self.config)
            .field("items", &self.items)
            .field("default_item", &self.default_item)
            .field("window", &self.window)
            .field("counter", &self.counter)
            .field("was_showing_default", &self.was_showing_default)
            .field("state", &self.state)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<(char, usize)>>>;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn recording(items: Vec<char>, config: CarouselConfig) -> (Carousel<char, String>, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let carousel = Carousel::builder(|c: &char| c.to_string())
            .config(config)
            .items(items)
            .observer(move |item, counter| sink.borrow_mut().push((*item, counter)))
            .build()
            .unwrap();
        (carousel, log)
    }

    #[test]
    fn test_initial_notification() {
        let (carousel, log) = recording(vec!['a', 'b', 'c'], CarouselConfig::default());
        assert_eq!(*log.borrow(), vec![('a', 0)]);
        assert_eq!(carousel.state(), CarouselState::Armed);
        assert_eq!(carousel.time_until_advance(), Some(ms(3000)));
    }

    #[test]
    fn test_start_offset_wraps() {
        let config = CarouselConfig::default().with_start_offset(-1);
        let (carousel, log) = recording(vec!['a', 'b', 'c'], config);
        assert_eq!(carousel.window(), &['c', 'a', 'b']);
        assert_eq!(*log.borrow(), vec![('c', 2)]);
    }

    #[test]
    fn test_state_machine_walk() {
        let (mut carousel, _) = recording(vec!['a', 'b'], CarouselConfig::default());
        assert_eq!(carousel.state(), CarouselState::Armed);

        carousel.update(ms(3000));
        assert_eq!(carousel.state(), CarouselState::Animating);

        carousel.update(ms(100));
        assert!(carousel.offset() < 0.0);

        carousel.update(ms(150));
        assert_eq!(carousel.state(), CarouselState::Armed);
        assert_eq!(carousel.offset(), 0.0);
        assert_eq!(carousel.visible_item(), Some(&'b'));
    }

    #[test]
    fn test_single_item_never_arms() {
        let (mut carousel, log) = recording(vec!['a'], CarouselConfig::default());
        assert!(!carousel.is_armed());
        assert!(carousel.state().is_idle());
        carousel.update(ms(60_000));
        assert_eq!(*log.borrow(), vec![('a', 0)]);
    }

    #[test]
    fn test_disabled_animation_is_static() {
        let config = CarouselConfig::default()
            .with_animation_enabled(false)
            .with_start_offset(1);
        let (mut carousel, log) = recording(vec!['a', 'b', 'c'], config);
        for _ in 0..100 {
            carousel.update(ms(1000));
        }
        assert_eq!(*log.borrow(), vec![('b', 1)]);
        assert_eq!(carousel.visible_item(), Some(&'b'));
        assert!(!carousel.is_armed());
    }

    #[test]
    fn test_clear_with_nothing_pending() {
        let (mut carousel, log) = recording(vec!['a'], CarouselConfig::default());
        carousel.clear();
        carousel.clear();
        assert_eq!(carousel.window(), &['a']);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_clear_mid_transition_snaps_back_and_discards_completion() {
        let (mut carousel, log) = recording(vec!['a', 'b', 'c'], CarouselConfig::default());
        carousel.update(ms(3000));
        carousel.update(ms(100));
        assert_eq!(carousel.state(), CarouselState::Animating);
        assert!(carousel.offset() < 0.0);

        carousel.clear();
        assert_eq!(carousel.state(), CarouselState::Idle);
        assert_eq!(carousel.offset(), 0.0);

        carousel.update(ms(100));
        assert_eq!(carousel.offset(), 0.0);
        carousel.update(ms(50));

        assert_eq!(carousel.window(), &['a', 'b', 'c']);
        assert_eq!(carousel.offset(), 0.0);
        assert!(!carousel.is_armed());
        assert_eq!(*log.borrow(), vec![('a', 0)]);
    }

    #[test]
    fn test_slots_follow_offset() {
        let config = CarouselConfig::default().with_viewport_height(100.0);
        let (mut carousel, _) = recording(vec!['a', 'b', 'c'], config);

        let slots = carousel.slots();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0], Slot { y: 0.0, content: "a".to_string() });

        carousel.update(ms(3000));
        carousel.update(ms(125));
        let slots = carousel.slots();
        assert_eq!(slots.len(), 2);
        assert!((slots[0].y + 50.0).abs() < 0.5);
        assert_eq!(slots[1].content, "b");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let result = Carousel::builder(|c: &char| *c)
            .config(CarouselConfig::default().with_viewport_height(0.0))
            .items(vec!['a'])
            .build();
        assert!(result.is_err());
    }
}
