//! Scroll-driven tab bar visibility for the Rentride TUI
//!
//! The list the user scrolls reports its offset to a publisher, which
//! classifies the movement and broadcasts it. The tab bar subscribes to the
//! broadcast and animates itself out of the way while the user scrolls down.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing curves (cubic, quintic, exponential) and a damped spring
//! - `timing` - Elapsed-time progress and interpolation
//! - `config` - Configuration types and defaults (re-exported from rentride-core)
//! - `detector` - Offset stream to up/down/idle reducer
//!
//! ## L3 Molecular Layer
//! - `visibility` - Single-writer broadcast of the latest scroll signal
//! - `tab_bar` - Show/hide state machine with a re-entrancy guard
//!
//! # Usage
//!
//! ```ignore
//! use rentride_tui::scroll::{AnimatedTabBar, ScrollVisibilityContext};
//!
//! let mut ctx = ScrollVisibilityContext::new(config.ui.scroll.clone());
//! let mut publisher = ctx.publisher().unwrap();
//! let mut subscription = ctx.subscribe();
//! let mut tab_bar = AnimatedTabBar::new(config.ui.tab_bar.clone(), 50.0);
//!
//! // Scroll surface
//! publisher.on_scroll(offset);
//!
//! // Each frame
//! if let Some(signal) = subscription.take_changed() {
//!     tab_bar.on_signal(signal);
//! }
//! tab_bar.tick(frame_delta);
//! let pose = tab_bar.pose();
//! ```

// L4 Atomic Layer
pub mod config;
pub mod detector;
pub mod easing;
pub mod timing;

// L3 Molecular Layer
pub mod tab_bar;
pub mod visibility;

// Re-exports for convenient access
pub use config::{ScrollConfig, ScrollConfigExt, TabBarConfig, TabBarConfigExt};
pub use detector::{ScrollDirection, ScrollDirectionDetector, ScrollSignal};
pub use easing::{EasingType, EasingTypeExt, Spring};
pub use tab_bar::{AnimatedTabBar, BarPose, RequestOutcome, Visibility, VisibilityState};
pub use visibility::{ScrollPublisher, ScrollSubscription, ScrollVisibilityContext};
