//! L4 Atomic Layer: Configuration types for scroll detection and the tab bar
//!
//! Re-exports configuration from rentride-core and provides additional utilities.

use std::time::Duration;

// Re-export config types from core
pub use rentride_core::{EasingType, ScrollConfig, TabBarConfig};

use super::easing::Spring;

/// Extension trait for ScrollConfig with utility methods
pub trait ScrollConfigExt {
    /// Scroll offset of a list row, in layout units
    fn offset_for_row(&self, row: usize) -> f64;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn offset_for_row(&self, row: usize) -> f64 {
        row as f64 * self.row_height.max(0.0)
    }
}

/// Extension trait for TabBarConfig with utility methods
pub trait TabBarConfigExt {
    /// Get hide duration as Duration
    fn hide_duration(&self) -> Duration;

    /// Hard cap on the show spring
    fn spring_max_duration(&self) -> Duration;

    /// Spring used by the show animation
    fn show_spring(&self) -> Spring;

    /// Vertical travel from the visible pose to the hidden pose
    fn hidden_offset(&self) -> f64;
}

impl TabBarConfigExt for TabBarConfig {
    #[inline]
    fn hide_duration(&self) -> Duration {
        Duration::from_millis(self.hide_duration_ms)
    }

    #[inline]
    fn spring_max_duration(&self) -> Duration {
        Duration::from_millis(self.spring_max_ms)
    }

    fn show_spring(&self) -> Spring {
        Spring::new(self.spring_stiffness, self.spring_damping, self.spring_mass)
    }

    #[inline]
    fn hidden_offset(&self) -> f64 {
        (self.height + self.margin).max(0.0)
    }
}
