//! Owned handle over the page's audio element.
//!
//! The player never touches the element directly. It goes through a
//! [`MediaBinding`], which is empty until the element has mounted and fired
//! its first `loadedmetadata`, and which owns every time-update subscription
//! registered on the element.

use crate::db::ProgressListenerMode;
use crate::error::{PlayerError, Result};
use dioxus::logger::tracing::debug;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{locate_media_element, WebAudio as PlatformMedia};

/// Callback receiving the element's elapsed time in seconds.
pub type TimeUpdateFn = Box<dyn FnMut(f64)>;

/// The imperative surface of an audio-capable element.
pub trait MediaElement {
    type Subscription;

    fn play(&self) -> Result<()>;
    fn pause(&self) -> Result<()>;
    fn set_current_time(&self, seconds: f64);
    fn subscribe_time_update(&self, on_tick: TimeUpdateFn) -> Self::Subscription;
    fn unsubscribe_time_update(&self, subscription: Self::Subscription);
}

pub struct MediaBinding<M: MediaElement> {
    element: Option<M>,
    subscriptions: Vec<M::Subscription>,
    mode: ProgressListenerMode,
}

impl<M: MediaElement> MediaBinding<M> {
    pub fn new(mode: ProgressListenerMode) -> Self {
        Self {
            element: None,
            subscriptions: Vec::new(),
            mode,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.element.is_some()
    }

    pub fn active_listeners(&self) -> usize {
        self.subscriptions.len()
    }

    /// Binds `element`, replacing any element bound before.
    pub fn attach(&mut self, element: M) {
        if self.mode == ProgressListenerMode::Single {
            self.release_listeners();
        }
        self.element = Some(element);
    }

    /// Drops the element. Subscriptions are released in single-listener mode.
    pub fn detach(&mut self) {
        if self.mode == ProgressListenerMode::Single {
            self.release_listeners();
        }
        self.element = None;
    }

    /// Starts or pauses playback to match `playing`.
    pub fn sync_playing(&self, playing: bool) -> Result<()> {
        let element = self.element.as_ref().ok_or(PlayerError::Detached)?;
        if playing {
            element.play()
        } else {
            element.pause()
        }
    }

    pub fn seek(&self, seconds: u32) -> Result<()> {
        let element = self.element.as_ref().ok_or(PlayerError::Detached)?;
        element.set_current_time(f64::from(seconds));
        Ok(())
    }

    /// Rewinds the element and registers `on_tick` for time updates.
    ///
    /// Returns the number of subscriptions alive afterwards.
    pub fn setup_progress_listener(&mut self, on_tick: TimeUpdateFn) -> Result<usize> {
        if self.element.is_none() {
            return Err(PlayerError::Detached);
        }
        if self.mode == ProgressListenerMode::Single {
            self.release_listeners();
        }
        let element = self.element.as_ref().ok_or(PlayerError::Detached)?;
        element.set_current_time(0.0);
        let subscription = element.subscribe_time_update(on_tick);
        self.subscriptions.push(subscription);
        debug!(
            active = self.subscriptions.len(),
            mode = ?self.mode,
            "registered time-update listener"
        );
        Ok(self.subscriptions.len())
    }

    fn release_listeners(&mut self) {
        if self.subscriptions.is_empty() {
            return;
        }
        let released = self.subscriptions.len();
        match self.element.as_ref() {
            Some(element) => {
                for subscription in self.subscriptions.drain(..) {
                    element.unsubscribe_time_update(subscription);
                }
            }
            None => self.subscriptions.clear(),
        }
        debug!(released, "released time-update listeners");
    }
}

impl<M: MediaElement> Drop for MediaBinding<M> {
    fn drop(&mut self) {
        self.release_listeners();
    }
}

/// Converts an element timestamp to whole seconds within `[0, duration]`.
pub fn progress_from_time(seconds: f64, duration: u32) -> u32 {
    if !seconds.is_finite() || seconds <= 0.0 {
        return 0;
    }
    (seconds.floor() as u32).min(duration)
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::{locate_media_element, NoMedia as PlatformMedia};

/// Native webviews are not reachable from Rust, so no element ever binds.
#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::{MediaElement, TimeUpdateFn};
    use crate::error::Result;

    pub enum NoMedia {}

    impl MediaElement for NoMedia {
        type Subscription = ();

        fn play(&self) -> Result<()> {
            match *self {}
        }

        fn pause(&self) -> Result<()> {
            match *self {}
        }

        fn set_current_time(&self, _seconds: f64) {
            match *self {}
        }

        fn subscribe_time_update(&self, _on_tick: TimeUpdateFn) -> Self::Subscription {
            match *self {}
        }

        fn unsubscribe_time_update(&self, _subscription: Self::Subscription) {
            match *self {}
        }
    }

    pub fn locate_media_element(_id: &str) -> Option<NoMedia> {
        None
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{Call, RecordingElement};
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn attached(mode: ProgressListenerMode) -> (MediaBinding<RecordingElement>, RecordingElement) {
        let element = RecordingElement::default();
        let mut binding = MediaBinding::new(mode);
        binding.attach(element.clone());
        (binding, element)
    }

    fn tracker(progress: &Rc<Cell<u32>>, duration: u32) -> TimeUpdateFn {
        let progress = progress.clone();
        Box::new(move |seconds| progress.set(progress_from_time(seconds, duration)))
    }

    #[test]
    fn detached_binding_issues_no_instructions() {
        let binding = MediaBinding::<RecordingElement>::new(ProgressListenerMode::Single);
        assert!(matches!(binding.sync_playing(true), Err(PlayerError::Detached)));
        assert!(matches!(binding.seek(10), Err(PlayerError::Detached)));
    }

    #[test]
    fn playing_flag_drives_play_and_pause() {
        let (binding, element) = attached(ProgressListenerMode::Single);
        binding.sync_playing(true).unwrap();
        binding.sync_playing(false).unwrap();
        assert_eq!(element.calls(), vec![Call::Play, Call::Pause]);
    }

    #[test]
    fn seek_writes_elapsed_time() {
        let (binding, element) = attached(ProgressListenerMode::Single);
        binding.seek(42).unwrap();
        assert_eq!(element.time(), 42.0);
    }

    #[test]
    fn setup_rewinds_and_tracks_floored_time() {
        let (mut binding, element) = attached(ProgressListenerMode::Single);
        element.advance_to(30.0);
        let progress = Rc::new(Cell::new(30));

        binding.setup_progress_listener(tracker(&progress, 100)).unwrap();
        assert_eq!(element.time(), 0.0);
        assert!(element.calls().contains(&Call::SetTime(0.0)));

        element.advance_to(12.9);
        assert_eq!(progress.get(), 12);
    }

    #[test]
    fn single_mode_keeps_one_listener_across_episode_loads() {
        let (mut binding, element) = attached(ProgressListenerMode::Single);
        let progress = Rc::new(Cell::new(0));
        for _ in 0..5 {
            binding.setup_progress_listener(tracker(&progress, 100)).unwrap();
        }
        assert_eq!(binding.active_listeners(), 1);
        assert_eq!(element.0.borrow().live_listeners(), 1);
    }

    #[test]
    fn accumulate_mode_keeps_every_listener() {
        let (mut binding, element) = attached(ProgressListenerMode::Accumulate);
        let progress = Rc::new(Cell::new(0));
        for _ in 0..5 {
            binding.setup_progress_listener(tracker(&progress, 100)).unwrap();
        }
        assert_eq!(binding.active_listeners(), 5);
        assert_eq!(element.0.borrow().live_listeners(), 5);
    }

    #[test]
    fn reattaching_releases_listeners_on_the_old_element() {
        let (mut binding, first) = attached(ProgressListenerMode::Single);
        let progress = Rc::new(Cell::new(0));
        binding.setup_progress_listener(tracker(&progress, 100)).unwrap();

        let second = RecordingElement::default();
        binding.attach(second.clone());
        assert_eq!(first.0.borrow().live_listeners(), 0);
        assert_eq!(binding.active_listeners(), 0);

        binding.setup_progress_listener(tracker(&progress, 100)).unwrap();
        assert_eq!(second.0.borrow().live_listeners(), 1);
    }

    #[test]
    fn detach_releases_listeners() {
        let (mut binding, element) = attached(ProgressListenerMode::Single);
        let progress = Rc::new(Cell::new(0));
        binding.setup_progress_listener(tracker(&progress, 100)).unwrap();
        binding.detach();
        assert!(!binding.is_attached());
        assert_eq!(element.0.borrow().live_listeners(), 0);
    }

    #[test]
    fn progress_is_clamped_to_duration() {
        assert_eq!(progress_from_time(-3.0, 60), 0);
        assert_eq!(progress_from_time(f64::NAN, 60), 0);
        assert_eq!(progress_from_time(59.99, 60), 59);
        assert_eq!(progress_from_time(75.0, 60), 60);
    }
}
