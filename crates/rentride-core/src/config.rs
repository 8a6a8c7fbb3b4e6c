use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (holds the log file)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds when nothing is animating
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while the tab bar is animating
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Scroll direction detection
    #[serde(default)]
    pub scroll: ScrollConfig,
    /// Auto-hiding tab bar
    #[serde(default)]
    pub tab_bar: TabBarConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            scroll: ScrollConfig::default(),
            tab_bar: TabBarConfig::default(),
        }
    }
}

/// Scroll direction detection parameters.
///
/// Offsets are in abstract layout units; the TUI maps one list row to
/// `row_height` units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Movement at or below this delta is treated as jitter
    #[serde(default = "default_noise_threshold")]
    pub noise_threshold: f64,
    /// Offset at or below which the tab bar is always shown
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f64,
    /// Layout units per list row
    #[serde(default = "default_row_height")]
    pub row_height: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            noise_threshold: default_noise_threshold(),
            reveal_threshold: default_reveal_threshold(),
            row_height: default_row_height(),
        }
    }
}

/// Easing curve for timed animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Jump to the end value at completion
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
}

/// Auto-hiding tab bar parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabBarConfig {
    /// Bar height in layout units
    #[serde(default = "default_bar_height")]
    pub height: f64,
    /// Extra distance below the bar when hidden
    #[serde(default = "default_bar_margin")]
    pub margin: f64,
    /// Duration of the hide animation
    #[serde(default = "default_hide_duration")]
    pub hide_duration_ms: u64,
    /// Easing of the hide animation
    #[serde(default)]
    pub hide_easing: EasingType,
    /// Spring stiffness of the show animation
    #[serde(default = "default_spring_stiffness")]
    pub spring_stiffness: f64,
    /// Spring damping of the show animation
    #[serde(default = "default_spring_damping")]
    pub spring_damping: f64,
    /// Spring mass of the show animation
    #[serde(default = "default_spring_mass")]
    pub spring_mass: f64,
    /// Upper bound on how long the spring may run
    #[serde(default = "default_spring_max")]
    pub spring_max_ms: u64,
}

impl Default for TabBarConfig {
    fn default() -> Self {
        Self {
            height: default_bar_height(),
            margin: default_bar_margin(),
            hide_duration_ms: default_hide_duration(),
            hide_easing: EasingType::default(),
            spring_stiffness: default_spring_stiffness(),
            spring_damping: default_spring_damping(),
            spring_mass: default_spring_mass(),
            spring_max_ms: default_spring_max(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Flat platform fee added to every booking
    #[serde(default = "default_platform_fee")]
    pub platform_fee: u64,
    /// Tax rate in basis points (1800 = 18%)
    #[serde(default = "default_tax_rate_bps")]
    pub tax_rate_bps: u32,
    /// Symbol printed before amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            platform_fee: default_platform_fee(),
            tax_rate_bps: default_tax_rate_bps(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rentride")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_noise_threshold() -> f64 {
    8.0
}

fn default_reveal_threshold() -> f64 {
    50.0
}

fn default_row_height() -> f64 {
    16.0
}

fn default_bar_height() -> f64 {
    64.0
}

fn default_bar_margin() -> f64 {
    16.0
}

fn default_hide_duration() -> u64 {
    200
}

fn default_spring_stiffness() -> f64 {
    180.0
}

fn default_spring_damping() -> f64 {
    22.0
}

fn default_spring_mass() -> f64 {
    1.0
}

fn default_spring_max() -> u64 {
    1500
}

fn default_platform_fee() -> u64 {
    100
}

fn default_tax_rate_bps() -> u32 {
    1800 // 18% GST
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config = Self::from_toml(&content)?;
            tracing::debug!("Loaded configuration from {}", config_path.display());
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/rentride/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("rentride")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("rentride.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}
