//! Promotional banner carousel.
//!
//! [`BannerCarousel`] owns the rotation state and the timer that drives it.
//! The timer only reports "a period elapsed" through the caller's callback;
//! the caller feeds that back as [`BannerIntent::Tick`], so every tick is
//! applied to the current index rather than one captured at mount time.

mod intent;
mod reducer;
mod slides;
mod state;
mod timer;
mod widget;

pub use intent::BannerIntent;
pub use reducer::BannerReducer;
pub use slides::{Slide, SlideStyle, SLIDES};
pub use state::BannerState;
pub use timer::RotationTimer;
pub use widget::{banner_hit, render_banner, BannerHit};

use std::time::Duration;
use thiserror::Error;

use crate::context::Navigator;
use crate::ui::mvi::dispatch;

pub const DEFAULT_ROTATION_PERIOD: Duration = Duration::from_millis(5000);

/// Jump target outside `[0, slide_count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("slide index {index} is out of range for {slide_count} slides")]
pub struct InvalidIndex {
    pub index: usize,
    pub slide_count: usize,
}

pub struct BannerCarousel {
    slides: &'static [Slide],
    state: BannerState,
    generation: u64,
    timer: Option<RotationTimer>,
}

impl BannerCarousel {
    pub fn new(slides: &'static [Slide]) -> Self {
        Self {
            slides,
            state: BannerState::default(),
            generation: 0,
            timer: None,
        }
    }

    pub fn slides(&self) -> &'static [Slide] {
        self.slides
    }

    pub fn state(&self) -> &BannerState {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.state.is_mounted()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.state.index()
    }

    pub fn current_slide(&self) -> Option<&'static Slide> {
        let slides = self.slides;
        self.state.index().and_then(|index| slides.get(index))
    }

    /// Shows the first slide and starts the rotation timer.
    ///
    /// `on_tick` receives the mount generation and should route it back as
    /// [`BannerIntent::Tick`]. Must be called from within a tokio runtime.
    /// Mounting again restarts rotation from the first slide.
    pub fn mount<F>(&mut self, period: Duration, on_tick: F)
    where
        F: Fn(u64) + Send + 'static,
    {
        self.unmount();
        self.generation += 1;
        let generation = self.generation;
        self.apply(BannerIntent::Mount {
            slide_count: self.slides.len(),
            generation,
        });
        if self.is_mounted() {
            self.timer = Some(RotationTimer::spawn(period, move || on_tick(generation)));
            tracing::debug!(generation, ?period, "banner mounted");
        }
    }

    /// Stops the timer and drops rotation state. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
            tracing::debug!(generation = self.generation, "banner unmounted");
        }
        self.apply(BannerIntent::Unmount);
    }

    pub fn apply(&mut self, intent: BannerIntent) {
        dispatch::<BannerReducer>(&mut self.state, intent);
    }

    pub fn tick(&mut self, generation: u64) {
        self.apply(BannerIntent::Tick { generation });
    }

    pub fn next(&mut self) {
        self.apply(BannerIntent::Next);
    }

    pub fn previous(&mut self) {
        self.apply(BannerIntent::Previous);
    }

    /// Shows slide `index`. Out-of-range requests are rejected and leave
    /// the current slide in place.
    pub fn jump_to(&mut self, index: usize) -> Result<(), InvalidIndex> {
        let slide_count = self.state.slide_count();
        if index >= slide_count {
            tracing::warn!(index, slide_count, "rejected banner jump");
            return Err(InvalidIndex { index, slide_count });
        }
        self.apply(BannerIntent::JumpTo { index });
        Ok(())
    }

    /// Forwards the current slide's route to `navigator`. The index is unchanged.
    pub fn select(&self, navigator: &dyn Navigator) -> Option<&'static str> {
        let slide = self.current_slide()?;
        navigator.navigate_to(slide.target_route);
        Some(slide.target_route)
    }
}

impl Drop for BannerCarousel {
    fn drop(&mut self) {
        self.timer.take();
    }
}
