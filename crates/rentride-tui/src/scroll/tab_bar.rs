//! L3 Molecular Layer: Auto-hiding tab bar controller
//!
//! Two settled states (`Visible`, `Hidden`) plus an in-flight transition
//! that acts as a re-entrancy guard. Time is supplied by the caller through
//! `tick()`, so the controller is fully deterministic.

use std::fmt;
use std::time::Duration;

use super::config::{ScrollConfig, TabBarConfig, TabBarConfigExt};
use super::detector::{ScrollDirection, ScrollSignal};
use super::easing::{EasingType, EasingTypeExt, Spring};
use super::timing::{is_complete, lerp, progress};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

/// Rendered position of the bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarPose {
    /// Downward displacement from the resting position
    pub translate_y: f64,
    /// 0.0 (transparent) to 1.0 (opaque)
    pub opacity: f64,
}

impl BarPose {
    pub const VISIBLE: BarPose = BarPose {
        translate_y: 0.0,
        opacity: 1.0,
    };

    pub fn hidden(offset: f64) -> Self {
        Self {
            translate_y: offset,
            opacity: 0.0,
        }
    }

    fn interpolate(from: BarPose, to: BarPose, t: f64) -> Self {
        Self {
            translate_y: lerp(from.translate_y, to.translate_y, t),
            opacity: lerp(from.opacity, to.opacity, t).clamp(0.0, 1.0),
        }
    }
}

/// Snapshot of the controller for renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityState {
    pub hidden: bool,
    pub animating: bool,
}

/// What happened to a visibility request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// A transition towards the requested state began
    Started,
    /// Another transition is in flight; this one runs after it settles
    Queued,
    /// Already there or already heading there
    Dropped,
}

#[derive(Debug, Clone, Copy)]
enum Curve {
    Timing { duration: Duration, easing: EasingType },
    Spring { spring: Spring, max: Duration },
}

#[derive(Debug, Clone)]
struct Transition {
    target: Visibility,
    from: BarPose,
    to: BarPose,
    elapsed: Duration,
    curve: Curve,
}

impl Transition {
    /// Advance by `dt`; returns true once the transition has finished
    fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(dt);
        match self.curve {
            Curve::Timing { duration, .. } => is_complete(self.elapsed, duration),
            Curve::Spring { spring, max } => self.elapsed >= max || spring.is_at_rest(self.elapsed),
        }
    }

    fn pose(&self) -> BarPose {
        let t = match self.curve {
            Curve::Timing { duration, easing } => easing.apply(progress(self.elapsed, duration)),
            Curve::Spring { spring, .. } => spring.progress(self.elapsed),
        };
        BarPose::interpolate(self.from, self.to, t)
    }
}

type SettledListener = Box<dyn FnMut(Visibility)>;

/// Scroll-driven show/hide controller for the bottom tab bar
pub struct AnimatedTabBar {
    config: TabBarConfig,
    reveal_threshold: f64,
    settled: Visibility,
    pose: BarPose,
    transition: Option<Transition>,
    queued: Option<Visibility>,
    on_settled: Option<SettledListener>,
    mounted: bool,
}

impl fmt::Debug for AnimatedTabBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimatedTabBar")
            .field("settled", &self.settled)
            .field("pose", &self.pose)
            .field("transition", &self.transition)
            .field("queued", &self.queued)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

impl Default for AnimatedTabBar {
    fn default() -> Self {
        Self::new(TabBarConfig::default(), ScrollConfig::default().reveal_threshold)
    }
}

impl AnimatedTabBar {
    pub fn new(config: TabBarConfig, reveal_threshold: f64) -> Self {
        Self {
            config,
            reveal_threshold,
            settled: Visibility::Visible,
            pose: BarPose::VISIBLE,
            transition: None,
            queued: None,
            on_settled: None,
            mounted: true,
        }
    }

    /// Register the completion listener, replacing any previous one
    pub fn set_on_settled(&mut self, listener: impl FnMut(Visibility) + 'static) {
        if self.mounted {
            self.on_settled = Some(Box::new(listener));
        }
    }

    /// Settled visibility; changes only when a transition completes
    pub fn visibility(&self) -> Visibility {
        self.settled
    }

    /// Where the bar is heading (the settled state when idle)
    pub fn target(&self) -> Visibility {
        self.transition
            .as_ref()
            .map(|t| t.target)
            .unwrap_or(self.settled)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn state(&self) -> VisibilityState {
        VisibilityState {
            hidden: self.settled == Visibility::Hidden,
            animating: self.is_animating(),
        }
    }

    #[inline]
    pub fn pose(&self) -> BarPose {
        self.pose
    }

    /// Map a scroll signal to a visibility request
    ///
    /// Scrolling down past the reveal threshold hides the bar. Scrolling up,
    /// or sitting within the reveal threshold of the top in any direction,
    /// shows it.
    pub fn on_signal(&mut self, signal: ScrollSignal) -> Option<RequestOutcome> {
        let near_top = signal.offset <= self.reveal_threshold;
        let target = match signal.direction {
            ScrollDirection::Down if !near_top => Visibility::Hidden,
            ScrollDirection::Up => Visibility::Visible,
            _ if near_top => Visibility::Visible,
            _ => return None,
        };
        Some(self.request(target))
    }

    /// Apply the near-top rule to the latest raw offset
    ///
    /// Offsets arrive even when the movement was too small to classify, so
    /// creeping back to the top still reveals the bar.
    pub fn on_offset(&mut self, offset: f64) -> Option<RequestOutcome> {
        if offset <= self.reveal_threshold {
            Some(self.request(Visibility::Visible))
        } else {
            None
        }
    }

    /// Ask for a visibility state, subject to the re-entrancy guard
    pub fn request(&mut self, target: Visibility) -> RequestOutcome {
        if !self.mounted {
            return RequestOutcome::Dropped;
        }

        match self.transition.as_ref().map(|t| t.target) {
            Some(in_flight) if in_flight == target => {
                // back to the in-flight target cancels a queued reversal
                self.queued = None;
                RequestOutcome::Dropped
            }
            Some(_) => {
                self.queued = Some(target);
                RequestOutcome::Queued
            }
            None if self.settled == target => RequestOutcome::Dropped,
            None => {
                self.start(target);
                RequestOutcome::Started
            }
        }
    }

    fn start(&mut self, target: Visibility) {
        let to = self.rest_pose(target);
        let curve = match target {
            Visibility::Hidden => Curve::Timing {
                duration: self.config.hide_duration(),
                easing: self.config.hide_easing,
            },
            Visibility::Visible => Curve::Spring {
                spring: self.config.show_spring(),
                max: self.config.spring_max_duration(),
            },
        };

        tracing::debug!(?target, "Tab bar transition started");

        self.transition = Some(Transition {
            target,
            from: self.pose,
            to,
            elapsed: Duration::ZERO,
            curve,
        });
    }

    fn rest_pose(&self, visibility: Visibility) -> BarPose {
        match visibility {
            Visibility::Visible => BarPose::VISIBLE,
            Visibility::Hidden => BarPose::hidden(self.config.hidden_offset()),
        }
    }

    /// Advance the in-flight transition by one frame
    ///
    /// Returns the new settled state when a transition completes. A queued
    /// request for the opposite state starts right after.
    pub fn tick(&mut self, dt: Duration) -> Option<Visibility> {
        if !self.mounted {
            return None;
        }

        let transition = self.transition.as_mut()?;
        let done = transition.advance(dt);
        if !done {
            self.pose = transition.pose();
            return None;
        }

        let target = transition.target;
        self.transition = None;
        self.settled = target;
        self.pose = self.rest_pose(target);

        tracing::debug!(?target, "Tab bar transition settled");
        if let Some(listener) = self.on_settled.as_mut() {
            listener(target);
        }

        if let Some(next) = self.queued.take() {
            if next != target {
                self.start(next);
            }
        }

        Some(target)
    }

    /// Stop everything; no callback fires after this returns
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        if self.transition.is_some() {
            tracing::debug!("Tab bar unmounted mid-transition");
        }
        self.transition = None;
        self.queued = None;
        self.on_settled = None;
        self.mounted = false;
    }
}

impl Drop for AnimatedTabBar {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::detector::ScrollDirectionDetector;
    use std::cell::RefCell;
    use std::rc::Rc;

    const FRAME: Duration = Duration::from_millis(16);

    fn bar() -> AnimatedTabBar {
        AnimatedTabBar::new(TabBarConfig::default(), 50.0)
    }

    fn down(offset: f64) -> ScrollSignal {
        ScrollSignal {
            direction: ScrollDirection::Down,
            offset,
        }
    }

    fn up(offset: f64) -> ScrollSignal {
        ScrollSignal {
            direction: ScrollDirection::Up,
            offset,
        }
    }

    /// Tick until a transition settles; returns it and the frames taken
    fn settle(bar: &mut AnimatedTabBar) -> (Option<Visibility>, u32) {
        for frame in 1..=1000 {
            if let Some(v) = bar.tick(FRAME) {
                return (Some(v), frame);
            }
        }
        (None, 1000)
    }

    fn recorder(bar: &mut AnimatedTabBar) -> Rc<RefCell<Vec<Visibility>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        bar.set_on_settled(move |v| sink.borrow_mut().push(v));
        log
    }

    #[test]
    fn test_initial_state() {
        let bar = bar();
        assert_eq!(bar.visibility(), Visibility::Visible);
        assert_eq!(
            bar.state(),
            VisibilityState {
                hidden: false,
                animating: false
            }
        );
        assert_eq!(bar.pose(), BarPose::VISIBLE);
    }

    #[test]
    fn test_hide_runs_for_configured_duration() {
        let mut bar = bar();
        assert_eq!(bar.on_signal(down(120.0)), Some(RequestOutcome::Started));
        assert!(bar.state().animating);
        assert!(!bar.state().hidden);

        // 200ms at 16ms frames completes on frame 13
        let (settled, frames) = settle(&mut bar);
        assert_eq!(settled, Some(Visibility::Hidden));
        assert_eq!(frames, 13);
        assert_eq!(
            bar.state(),
            VisibilityState {
                hidden: true,
                animating: false
            }
        );
        assert_eq!(bar.pose(), BarPose::hidden(80.0));
    }

    #[test]
    fn test_pose_moves_during_hide() {
        let mut bar = bar();
        bar.request(Visibility::Hidden);
        bar.tick(Duration::from_millis(100));
        let pose = bar.pose();
        assert!(pose.translate_y > 0.0 && pose.translate_y < 80.0);
        assert!(pose.opacity > 0.0 && pose.opacity < 1.0);
        // cubic ease-out is past the midpoint at half time
        assert!(pose.translate_y > 40.0);
    }

    #[test]
    fn test_show_uses_spring_and_settles() {
        let mut bar = bar();
        bar.request(Visibility::Hidden);
        settle(&mut bar);

        assert_eq!(bar.on_signal(up(300.0)), Some(RequestOutcome::Started));
        let (settled, frames) = settle(&mut bar);
        assert_eq!(settled, Some(Visibility::Visible));
        assert!(frames * 16 <= 1500 + 16);
        assert_eq!(bar.pose(), BarPose::VISIBLE);
    }

    #[test]
    fn test_spring_capped_by_max_duration() {
        let config = TabBarConfig {
            spring_max_ms: 64,
            ..Default::default()
        };
        let mut bar = AnimatedTabBar::new(config, 50.0);
        bar.request(Visibility::Hidden);
        settle(&mut bar);
        bar.request(Visibility::Visible);
        let (settled, frames) = settle(&mut bar);
        assert_eq!(settled, Some(Visibility::Visible));
        assert_eq!(frames, 4);
    }

    #[test]
    fn test_signal_mapping() {
        let mut bar = bar();
        // down near the top keeps the bar shown
        assert_eq!(bar.on_signal(down(50.0)), Some(RequestOutcome::Dropped));
        assert!(!bar.is_animating());
        // idle above the threshold asks for nothing
        assert_eq!(bar.on_signal(ScrollSignal::idle(400.0)), None);

        bar.request(Visibility::Hidden);
        settle(&mut bar);
        // idle near the top reveals
        assert_eq!(bar.on_signal(ScrollSignal::idle(10.0)), Some(RequestOutcome::Started));
        assert_eq!(bar.target(), Visibility::Visible);
    }

    #[test]
    fn test_same_target_dropped_while_animating() {
        let mut bar = bar();
        assert_eq!(bar.request(Visibility::Hidden), RequestOutcome::Started);
        bar.tick(FRAME);
        assert_eq!(bar.request(Visibility::Hidden), RequestOutcome::Dropped);
        assert_eq!(bar.on_signal(down(500.0)), Some(RequestOutcome::Dropped));

        let (settled, _) = settle(&mut bar);
        assert_eq!(settled, Some(Visibility::Hidden));
        assert!(!bar.is_animating());
    }

    #[test]
    fn test_opposite_request_waits_for_in_flight() {
        let mut bar = bar();
        let log = recorder(&mut bar);

        bar.request(Visibility::Hidden);
        bar.tick(FRAME);
        assert_eq!(bar.request(Visibility::Visible), RequestOutcome::Queued);
        // still heading down, not reversed mid-flight
        assert_eq!(bar.target(), Visibility::Hidden);

        let (first, _) = settle(&mut bar);
        assert_eq!(first, Some(Visibility::Hidden));
        assert!(bar.is_animating());
        assert_eq!(bar.target(), Visibility::Visible);

        let (second, _) = settle(&mut bar);
        assert_eq!(second, Some(Visibility::Visible));
        assert_eq!(*log.borrow(), [Visibility::Hidden, Visibility::Visible]);
    }

    #[test]
    fn test_queued_reversal_cancelled_by_return_to_target() {
        let mut bar = bar();
        bar.request(Visibility::Hidden);
        assert_eq!(bar.request(Visibility::Visible), RequestOutcome::Queued);
        assert_eq!(bar.request(Visibility::Hidden), RequestOutcome::Dropped);

        settle(&mut bar);
        assert_eq!(bar.visibility(), Visibility::Hidden);
        assert!(!bar.is_animating());
    }

    #[test]
    fn test_crossing_threshold_fires_once_each_way() {
        let mut bar = bar();
        let log = recorder(&mut bar);
        let mut detector = ScrollDirectionDetector::new(8.0);

        let descending = (0..=20).map(|i| i as f64 * 20.0);
        let ascending = (0..20).rev().map(|i| i as f64 * 20.0);

        for offset in descending.chain(ascending) {
            if let Some(signal) = detector.observe(offset) {
                bar.on_signal(signal);
            }
            bar.tick(FRAME);
        }
        settle(&mut bar);

        assert_eq!(*log.borrow(), [Visibility::Hidden, Visibility::Visible]);
        assert_eq!(bar.visibility(), Visibility::Visible);
    }

    #[test]
    fn test_rapid_reversals_do_not_stack() {
        let mut bar = bar();
        let log = recorder(&mut bar);

        for i in 0..40 {
            let signal = if i % 2 == 0 { down(200.0) } else { up(180.0) };
            bar.on_signal(signal);
            bar.tick(Duration::from_millis(5));
        }
        settle(&mut bar);
        while bar.is_animating() {
            settle(&mut bar);
        }

        let log = log.borrow();
        assert!(log.windows(2).all(|w| w[0] != w[1]), "{:?}", log);
        assert!(log.len() <= 2, "{:?}", log);
    }

    #[test]
    fn test_unmount_mid_animation_silences_callbacks() {
        let mut bar = bar();
        let log = recorder(&mut bar);

        bar.request(Visibility::Hidden);
        bar.request(Visibility::Visible);
        bar.tick(Duration::from_millis(50));
        bar.unmount();

        assert!(!bar.is_animating());
        assert_eq!(bar.tick(Duration::from_secs(1)), None);
        assert_eq!(bar.request(Visibility::Hidden), RequestOutcome::Dropped);
        assert_eq!(bar.on_signal(down(900.0)), Some(RequestOutcome::Dropped));
        assert!(log.borrow().is_empty());

        // a listener registered after unmount is ignored
        let late = Rc::new(RefCell::new(0));
        let sink = late.clone();
        bar.set_on_settled(move |_| *sink.borrow_mut() += 1);
        bar.tick(Duration::from_secs(1));
        assert_eq!(*late.borrow(), 0);
    }

    #[test]
    fn test_drop_mid_animation_releases_listener() {
        let mut bar = bar();
        let log = recorder(&mut bar);
        bar.request(Visibility::Hidden);
        bar.tick(FRAME);
        drop(bar);

        assert!(log.borrow().is_empty());
        // the listener's clone of the log was released with the bar
        assert_eq!(Rc::strong_count(&log), 1);
    }
}
