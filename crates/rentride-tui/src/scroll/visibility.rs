//! L3 Molecular Layer: Shared scroll signal for the tab bar
//!
//! The scroll surface and the tab bar live in different parts of the
//! screen. The context connects them through `tokio::sync::watch`
//! channels: one publisher (which owns the detector) writes, any number of
//! subscriptions read the latest values. Two values are broadcast: the
//! debounced direction signal and the raw offset of the most recent event.

use tokio::sync::watch;

use super::config::ScrollConfig;
use super::detector::{ScrollDirectionDetector, ScrollSignal};

/// Screen-lifetime broadcast of the latest scroll signal and offset
#[derive(Debug)]
pub struct ScrollVisibilityContext {
    unclaimed: Option<ScrollPublisher>,
    signal_rx: watch::Receiver<ScrollSignal>,
    offset_rx: watch::Receiver<f64>,
}

impl ScrollVisibilityContext {
    pub fn new(config: ScrollConfig) -> Self {
        let (mut context, publisher) = Self::with_publisher(config);
        context.unclaimed = Some(publisher);
        context
    }

    /// Create a context whose publisher has already been handed out
    pub fn with_publisher(config: ScrollConfig) -> (Self, ScrollPublisher) {
        let (signal_tx, signal_rx) = watch::channel(ScrollSignal::default());
        let (offset_tx, offset_rx) = watch::channel(0.0);
        let publisher = ScrollPublisher {
            detector: ScrollDirectionDetector::from_config(&config),
            signal_tx,
            offset_tx,
        };
        let context = Self {
            unclaimed: None,
            signal_rx,
            offset_rx,
        };
        (context, publisher)
    }

    /// Hand out the single writer
    ///
    /// Returns `None` once the publisher has been taken.
    pub fn publisher(&mut self) -> Option<ScrollPublisher> {
        self.unclaimed.take()
    }

    /// Create a reader; a late subscriber immediately sees the latest values
    pub fn subscribe(&self) -> ScrollSubscription {
        ScrollSubscription {
            signal_rx: self.signal_rx.clone(),
            offset_rx: self.offset_rx.clone(),
        }
    }
}

/// Writer side: runs the detector and publishes what it sees
#[derive(Debug)]
pub struct ScrollPublisher {
    detector: ScrollDirectionDetector,
    signal_tx: watch::Sender<ScrollSignal>,
    offset_tx: watch::Sender<f64>,
}

impl ScrollPublisher {
    /// Report a scroll offset; returns the signal if one was published
    ///
    /// The offset itself is always published, classified or not.
    pub fn on_scroll(&mut self, offset: f64) -> Option<ScrollSignal> {
        // send_replace succeeds even while nobody is subscribed
        self.offset_tx.send_replace(offset);

        let signal = self.detector.observe(offset)?;
        tracing::trace!(direction = ?signal.direction, offset, "Scroll signal");
        self.signal_tx.send_replace(signal);
        Some(signal)
    }

    /// Start over on a new scroll surface (e.g. after switching tabs)
    pub fn reset(&mut self) {
        self.detector.reset();
    }
}

/// Reader side of the context
#[derive(Debug, Clone)]
pub struct ScrollSubscription {
    signal_rx: watch::Receiver<ScrollSignal>,
    offset_rx: watch::Receiver<f64>,
}

impl ScrollSubscription {
    /// Peek at the latest signal without marking it seen
    pub fn latest(&self) -> ScrollSignal {
        *self.signal_rx.borrow()
    }

    /// Latest signal if it was published since the last take
    ///
    /// Returns `None` once the publisher is gone.
    pub fn take_changed(&mut self) -> Option<ScrollSignal> {
        match self.signal_rx.has_changed() {
            Ok(true) => Some(*self.signal_rx.borrow_and_update()),
            _ => None,
        }
    }

    /// Latest raw offset if one was reported since the last take
    pub fn take_offset(&mut self) -> Option<f64> {
        match self.offset_rx.has_changed() {
            Ok(true) => Some(*self.offset_rx.borrow_and_update()),
            _ => None,
        }
    }

    /// Wait for the next published signal; `None` when the publisher is gone
    pub async fn changed(&mut self) -> Option<ScrollSignal> {
        self.signal_rx.changed().await.ok()?;
        Some(*self.signal_rx.borrow_and_update())
    }

    pub fn is_closed(&self) -> bool {
        self.signal_rx.has_changed().is_err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::detector::ScrollDirection;

    fn context() -> ScrollVisibilityContext {
        ScrollVisibilityContext::new(ScrollConfig::default())
    }

    #[test]
    fn test_single_publisher() {
        let mut ctx = context();
        assert!(ctx.publisher().is_some());
        assert!(ctx.publisher().is_none());
    }

    #[test]
    fn test_with_publisher() {
        let (mut ctx, mut publisher) =
            ScrollVisibilityContext::with_publisher(ScrollConfig::default());
        assert!(ctx.publisher().is_none());
        let mut sub = ctx.subscribe();
        publisher.on_scroll(12.0);
        assert_eq!(sub.take_changed(), Some(ScrollSignal::idle(12.0)));
    }

    #[test]
    fn test_subscribers_see_latest_signal() {
        let mut ctx = context();
        let mut publisher = ctx.publisher().unwrap();
        let mut a = ctx.subscribe();
        let mut b = ctx.subscribe();

        assert_eq!(a.latest(), ScrollSignal::idle(0.0));
        assert_eq!(a.take_changed(), None);

        publisher.on_scroll(0.0);
        publisher.on_scroll(100.0);

        let expected = ScrollSignal {
            direction: ScrollDirection::Down,
            offset: 100.0,
        };
        // intermediate Idle is coalesced, readers get the newest value
        assert_eq!(a.take_changed(), Some(expected));
        assert_eq!(a.take_changed(), None);
        assert_eq!(b.take_changed(), Some(expected));
    }

    #[test]
    fn test_jitter_publishes_nothing() {
        let mut ctx = context();
        let mut publisher = ctx.publisher().unwrap();
        let mut sub = ctx.subscribe();

        publisher.on_scroll(200.0);
        sub.take_changed();
        assert_eq!(publisher.on_scroll(204.0), None);
        assert_eq!(sub.take_changed(), None);
        // the raw offset still goes out
        assert_eq!(sub.take_offset(), Some(204.0));
        assert_eq!(sub.take_offset(), None);
    }

    #[test]
    fn test_slow_return_to_top_reveals_bar() {
        use crate::scroll::tab_bar::{AnimatedTabBar, Visibility};
        use std::time::Duration;

        let config = ScrollConfig::default();
        let (ctx, mut publisher) = ScrollVisibilityContext::with_publisher(config.clone());
        let mut sub = ctx.subscribe();
        let mut bar = AnimatedTabBar::new(Default::default(), config.reveal_threshold);

        fn frame(bar: &mut AnimatedTabBar, sub: &mut ScrollSubscription) {
            if let Some(signal) = sub.take_changed() {
                bar.on_signal(signal);
            }
            if let Some(offset) = sub.take_offset() {
                bar.on_offset(offset);
            }
            bar.tick(Duration::from_millis(16));
        }

        for offset in (0..=400).step_by(20) {
            publisher.on_scroll(offset as f64);
            frame(&mut bar, &mut sub);
        }
        for _ in 0..20 {
            frame(&mut bar, &mut sub);
        }
        assert_eq!(bar.visibility(), Visibility::Hidden);

        // every step is below the noise threshold: no direction is emitted
        for offset in (0..80).rev().map(|i| i * 5) {
            assert_eq!(publisher.on_scroll(offset as f64), None);
            frame(&mut bar, &mut sub);
        }
        for _ in 0..200 {
            frame(&mut bar, &mut sub);
        }
        assert_eq!(bar.visibility(), Visibility::Visible);
    }

    #[test]
    fn test_late_subscriber_gets_latest() {
        let mut ctx = context();
        let mut publisher = ctx.publisher().unwrap();
        publisher.on_scroll(0.0);
        publisher.on_scroll(90.0);

        let mut late = ctx.subscribe();
        assert_eq!(late.take_changed().map(|s| s.offset), Some(90.0));
    }

    #[test]
    fn test_closed_after_publisher_dropped() {
        let mut ctx = context();
        let publisher = ctx.publisher().unwrap();
        let mut sub = ctx.subscribe();
        assert!(!sub.is_closed());
        drop(publisher);
        assert!(sub.is_closed());
        assert_eq!(sub.take_changed(), None);
    }

    #[tokio::test]
    async fn test_async_changed() {
        let mut ctx = context();
        let mut publisher = ctx.publisher().unwrap();
        let mut sub = ctx.subscribe();

        let reader = tokio::spawn(async move { sub.changed().await });
        tokio::task::yield_now().await;
        publisher.on_scroll(30.0);

        let signal = reader.await.unwrap().unwrap();
        assert_eq!(signal, ScrollSignal::idle(30.0));
    }

    #[test]
    fn test_reset_starts_new_surface() {
        let mut ctx = context();
        let mut publisher = ctx.publisher().unwrap();
        publisher.on_scroll(0.0);
        publisher.on_scroll(300.0);
        publisher.reset();
        assert_eq!(publisher.on_scroll(20.0), Some(ScrollSignal::idle(20.0)));
    }
}
