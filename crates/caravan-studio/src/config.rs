use std::path::{Path, PathBuf};

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "desert_caravan.png";
pub const DEFAULT_TITLE: &str = "Desert Truck Caravan";

// ── SceneConfig ───────────────────────────────────────────────────────────

/// Everything a run of the composer can vary.
///
/// ```rust
/// use caravan_studio::SceneConfig;
///
/// let config = SceneConfig::new()
///     .output("out/caravan.png")
///     .seed(7)
///     .dpi(72.0);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub output: PathBuf,
    /// RNG seed for cactus heights and the plant field. `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub dpi: f32,
    /// Width of the plot area in inches.
    pub width_in: f32,
    /// Figure title; `None` leaves the title band out entirely.
    pub title: Option<String>,
    /// Font file for the title. Without one, system fonts are searched.
    pub font_path: Option<PathBuf>,
    /// Open a preview window after saving. Ignored on headless machines.
    pub show: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            seed: None,
            dpi: 300.0,
            width_in: 16.0,
            title: Some(DEFAULT_TITLE.to_string()),
            font_path: None,
            show: false,
        }
    }
}

impl SceneConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(mut self, path: impl AsRef<Path>) -> Self {
        self.output = path.as_ref().to_path_buf();
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn dpi(mut self, dpi: f32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn width_in(mut self, width_in: f32) -> Self {
        self.width_in = width_in;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn no_title(mut self) -> Self {
        self.title = None;
        self
    }

    pub fn font_path(mut self, path: impl AsRef<Path>) -> Self {
        self.font_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn show(mut self) -> Self {
        self.show = true;
        self
    }
}
