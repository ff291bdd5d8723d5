use std::path::PathBuf;

use caravan_engine::logging::LoggingConfig;
use caravan_studio::SceneConfig;
use caravan_studio::config::{DEFAULT_OUTPUT, DEFAULT_TITLE};
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "desert-caravan")]
#[command(about = "Render the desert truck caravan scene to a PNG", long_about = None)]
pub struct Cli {
    /// Output image path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Seed for cactus heights and plant placement (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output resolution in dots per inch
    #[arg(long, default_value_t = 300.0, value_parser = positive_f32)]
    pub dpi: f32,

    /// Plot width in inches
    #[arg(long = "width", default_value_t = 16.0, value_parser = positive_f32)]
    pub width_in: f32,

    /// Figure title
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Font file for the title (system fonts are searched otherwise)
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Leave the title out
    #[arg(long = "no-title")]
    pub no_title: bool,

    /// Show the rendered scene in a window after saving it
    #[arg(long)]
    pub show: bool,

    /// Log filter in env_logger syntax, e.g. "debug" (overrides RUST_LOG)
    #[arg(long = "log")]
    pub log: Option<String>,
}

fn positive_f32(s: &str) -> Result<f32, String> {
    let v: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err(format!("expected a positive number, got {s}"))
    }
}

impl Cli {
    pub fn logging(&self) -> LoggingConfig {
        match &self.log {
            Some(filter) => LoggingConfig::with_filter(filter.clone()),
            None => LoggingConfig::default(),
        }
    }

    pub fn scene_config(&self) -> SceneConfig {
        let mut config = SceneConfig::new()
            .output(&self.output)
            .dpi(self.dpi)
            .width_in(self.width_in)
            .title(self.title.clone());
        if let Some(seed) = self.seed {
            config = config.seed(seed);
        }
        if let Some(font) = &self.font {
            config = config.font_path(font);
        }
        if self.no_title {
            config = config.no_title();
        }
        if self.show {
            config = config.show();
        }
        config
    }
}
