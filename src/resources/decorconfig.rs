//! Decoration configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//! vsync = true
//! title = FoodFlex
//!
//! [decor]
//! variant = scene
//! icon_count = 15
//! seed = 42
//! layout = ./assets/layout.json
//! time_scale = 1.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::resources::stage::StageVariant;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_TITLE: &str = "FoodFlex";
const DEFAULT_ICON_COUNT: usize = 15;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_CONFIG_PATH: &str = "./decor.ini";
/// Window dimensions are clamped so they fit raylib's `i32` sizes.
pub const MAX_WINDOW_DIMENSION: u32 = i32::MAX as u32;

/// Decoration configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct DecorConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second. 0 leaves the frame rate uncapped.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Window title.
    pub title: String,
    /// Which decoration to show.
    pub variant: StageVariant,
    /// Number of icons in the icon field.
    pub icon_count: usize,
    /// Seed for cosmetic placement. `None` varies per run.
    pub seed: Option<u64>,
    /// Optional JSON layout overriding the built-in one.
    pub layout_path: Option<PathBuf>,
    /// Multiplier applied to the clock before it drives the animation.
    pub time_scale: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for DecorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DecorConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            title: DEFAULT_TITLE.to_string(),
            variant: StageVariant::default(),
            icon_count: DEFAULT_ICON_COUNT,
            seed: None,
            layout_path: None,
            time_scale: DEFAULT_TIME_SCALE,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    pub fn with_variant(mut self, variant: StageVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_icon_count(mut self, icon_count: usize) -> Self {
        self.icon_count = icon_count;
        self
    }

    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed, if `variant`
    /// is not a known variant, or if `time_scale` is negative or not finite.
    /// On error nothing is changed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        let variant = config
            .get("decor", "variant")
            .map(|v| v.parse::<StageVariant>())
            .transpose()?;
        let time_scale = match config.getfloat("decor", "time_scale").ok().flatten() {
            Some(scale) if !scale.is_finite() || scale < 0.0 => {
                return Err(format!("Invalid time_scale {} in config file", scale));
            }
            Some(scale) => Some(scale as f32),
            None => None,
        };

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = clamp_dimension(width);
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = clamp_dimension(height);
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps.min(u32::MAX as u64) as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }

        // [decor] section
        if let Some(variant) = variant {
            self.variant = variant;
        }
        if let Some(count) = config.getuint("decor", "icon_count").ok().flatten() {
            self.icon_count = count as usize;
        }
        if let Some(seed) = config.getuint("decor", "seed").ok().flatten() {
            self.seed = Some(seed);
        }
        if let Some(layout) = config.get("decor", "layout") {
            self.layout_path = Some(PathBuf::from(layout));
        }
        if let Some(time_scale) = time_scale {
            self.time_scale = time_scale;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, variant={}, icons={}, seed={:?}, time_scale={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.variant,
            self.icon_count,
            self.seed,
            self.time_scale
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));
        config.set("window", "title", Some(self.title.clone()));

        // [decor] section
        config.set("decor", "variant", Some(self.variant.to_string()));
        config.set("decor", "icon_count", Some(self.icon_count.to_string()));
        if let Some(seed) = self.seed {
            config.set("decor", "seed", Some(seed.to_string()));
        }
        if let Some(layout) = &self.layout_path {
            config.set("decor", "layout", Some(layout.display().to_string()));
        }
        config.set("decor", "time_scale", Some(self.time_scale.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Window size as raylib wants it. Values past `i32::MAX` saturate.
    pub fn window_size_px(&self) -> (i32, i32) {
        (
            i32::try_from(self.window_width).unwrap_or(i32::MAX),
            i32::try_from(self.window_height).unwrap_or(i32::MAX),
        )
    }
}

fn clamp_dimension(value: u64) -> u32 {
    value.min(MAX_WINDOW_DIMENSION as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_ini(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "foodflex-decor-{}-{}.ini",
            name,
            std::process::id()
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = DecorConfig::new();
        assert_eq!(config.window_size(), (1280, 720));
        assert_eq!(config.variant, StageVariant::Scene);
        assert_eq!(config.icon_count, 15);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_missing_file_is_an_error_and_keeps_defaults() {
        let mut config = DecorConfig::with_path("/nonexistent/decor.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_size(), (1280, 720));
    }

    #[test]
    fn test_load_overrides_present_keys_only() {
        let path = temp_ini(
            "load",
            "[window]\nwidth = 800\n\n[decor]\nvariant = icons\nseed = 42\nlayout = ./l.json\n",
        );
        let mut config = DecorConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.window_size(), (800, 720));
        assert_eq!(config.variant, StageVariant::Icons);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.layout_path, Some(PathBuf::from("./l.json")));
        assert_eq!(config.target_fps, 120);
        std::fs::remove_file(path).ok();
    }

    fn assert_untouched(config: &DecorConfig) {
        assert_eq!(config.window_size(), (1280, 720));
        assert_eq!(config.target_fps, 120);
        assert!(config.vsync);
        assert_eq!(config.title, "FoodFlex");
        assert_eq!(config.variant, StageVariant::Scene);
        assert_eq!(config.icon_count, 15);
        assert!(config.seed.is_none());
        assert!(config.layout_path.is_none());
        assert_eq!(config.time_scale, 1.0);
    }

    #[test]
    fn test_unknown_variant_is_rejected_and_nothing_applied() {
        let path = temp_ini(
            "variant",
            "[window]\nwidth = 640\nheight = 480\ntarget_fps = 30\nvsync = false\ntitle = Other\n\n\
             [decor]\nvariant = charts\nicon_count = 4\nseed = 3\nlayout = ./x.json\ntime_scale = 2.0\n",
        );
        let mut config = DecorConfig::with_path(&path);
        assert!(config.load_from_file().is_err());
        assert_untouched(&config);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_negative_time_scale_is_rejected_and_nothing_applied() {
        let path = temp_ini("scale", "[window]\nwidth = 640\n\n[decor]\ntime_scale = -1\n");
        let mut config = DecorConfig::with_path(&path);
        assert!(config.load_from_file().is_err());
        assert_untouched(&config);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_time_scale_is_loaded() {
        let path = temp_ini("scale-ok", "[decor]\ntime_scale = 0.5\n");
        let mut config = DecorConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.time_scale, 0.5);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_oversized_window_is_clamped() {
        let path = temp_ini("huge", "[window]\nwidth = 99999999999\nheight = 3000000000\n");
        let mut config = DecorConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.window_size(), (MAX_WINDOW_DIMENSION, MAX_WINDOW_DIMENSION));
        assert_eq!(config.window_size_px(), (i32::MAX, i32::MAX));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_window_size_px_saturates_direct_values() {
        let mut config = DecorConfig::new();
        config.window_width = u32::MAX;
        assert_eq!(config.window_size_px(), (i32::MAX, 720));
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_ini("save", "");
        let saved = DecorConfig::with_path(&path)
            .with_variant(StageVariant::Icons)
            .with_seed(7)
            .with_icon_count(9)
            .with_time_scale(1.5);
        saved.save_to_file().unwrap();

        let mut loaded = DecorConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded.variant, StageVariant::Icons);
        assert_eq!(loaded.seed, Some(7));
        assert_eq!(loaded.icon_count, 9);
        assert_eq!(loaded.time_scale, 1.5);
        std::fs::remove_file(path).ok();
    }
}
