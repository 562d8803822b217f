mod errors;
mod storage;

use std::time::Duration;

use iced::Size;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

pub(crate) use storage::load_initial_config;

use crate::widgets::article_params::OpenStateOwner;

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;

const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
const DEFAULT_SIDEBAR_WIDTH: f32 = 480.0;
const MIN_SIDEBAR_WIDTH: f32 = 320.0;
const MAX_SIDEBAR_WIDTH: f32 = 720.0;
const DEFAULT_GRACE_PERIOD_MS: u64 = 500;
const MAX_GRACE_PERIOD_MS: u64 = 5_000;

/// Normalized application configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AppConfig {
    window: WindowConfig,
    sidebar: SidebarConfig,
}

/// Initial window geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WindowConfig {
    width: f32,
    height: f32,
}

/// Sidebar panel layout and lifecycle parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SidebarConfig {
    width: f32,
    grace_period: Duration,
    open_state: OpenStateOwner,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig {
                width: DEFAULT_WINDOW_WIDTH,
                height: DEFAULT_WINDOW_HEIGHT,
            },
            sidebar: SidebarConfig {
                width: DEFAULT_SIDEBAR_WIDTH,
                grace_period: Duration::from_millis(DEFAULT_GRACE_PERIOD_MS),
                open_state: OpenStateOwner::Host,
            },
        }
    }
}

impl AppConfig {
    /// Return the initial window size.
    pub(crate) fn window_size(&self) -> Size {
        Size::new(self.window.width, self.window.height)
    }

    /// Return the sidebar panel width in logical pixels.
    pub(crate) fn sidebar_width(&self) -> f32 {
        self.sidebar.width
    }

    /// Return how long a closed sidebar stays mounted.
    pub(crate) fn grace_period(&self) -> Duration {
        self.sidebar.grace_period
    }

    /// Return who owns the sidebar open/closed flag.
    pub(crate) fn open_state(&self) -> OpenStateOwner {
        self.sidebar.open_state
    }

    /// Build a normalized config from a parsed config file.
    pub(crate) fn from_file(file: ConfigFile) -> Self {
        let defaults = AppConfig::default();

        let width = file
            .window
            .width
            .filter(|value| value.is_finite())
            .map(|value| value.max(MIN_WINDOW_WIDTH))
            .unwrap_or(defaults.window.width);
        let height = file
            .window
            .height
            .filter(|value| value.is_finite())
            .map(|value| value.max(MIN_WINDOW_HEIGHT))
            .unwrap_or(defaults.window.height);

        let sidebar_width = file
            .sidebar
            .width
            .filter(|value| value.is_finite())
            .map(|value| value.clamp(MIN_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH))
            .unwrap_or(defaults.sidebar.width);
        let grace_period = file
            .sidebar
            .grace_period_ms
            .map(|value| Duration::from_millis(value.min(MAX_GRACE_PERIOD_MS)))
            .unwrap_or(defaults.sidebar.grace_period);
        let open_state =
            file.sidebar.open_state.unwrap_or(defaults.sidebar.open_state);

        Self {
            window: WindowConfig { width, height },
            sidebar: SidebarConfig {
                width: sidebar_width,
                grace_period,
                open_state,
            },
        }
    }
}

/// On-disk config layout; every field is optional.
///
/// A malformed value only drops itself: it is logged and read as absent,
/// its siblings are kept.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ConfigFile {
    #[serde(deserialize_with = "lenient")]
    window: WindowSection,
    #[serde(deserialize_with = "lenient")]
    sidebar: SidebarSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WindowSection {
    #[serde(deserialize_with = "lenient")]
    width: Option<f32>,
    #[serde(deserialize_with = "lenient")]
    height: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SidebarSection {
    #[serde(deserialize_with = "lenient")]
    width: Option<f32>,
    #[serde(deserialize_with = "lenient")]
    grace_period_ms: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    open_state: Option<OpenStateOwner>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match serde_json::from_value::<T>(value.clone()) {
        Ok(parsed) => Ok(parsed),
        Err(err) => {
            log::warn!("ignoring config value {value}: {err}");
            Ok(T::default())
        },
    }
}
