use std::path::PathBuf;

use anyhow::Context;
use caravan_engine::export::save_png;
use caravan_engine::render::{Pixmap, SceneRenderer};
use caravan_engine::text::FontSystem;
use caravan_engine::window::{self, PreviewConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::composer::compose;
use crate::config::{DEFAULT_TITLE, SceneConfig};

/// RNG for a run: seeded when asked, OS entropy otherwise.
pub fn scene_rng(config: &SceneConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Fonts for the title. An explicit font that fails to load is an error; a
/// missing system font only drops the title.
pub fn load_fonts(config: &SceneConfig) -> anyhow::Result<FontSystem> {
    let mut fonts = FontSystem::new();
    if config.title.is_none() {
        return Ok(fonts);
    }
    match &config.font_path {
        Some(path) => {
            fonts
                .load_font_file(path)
                .with_context(|| format!("failed to load title font {}", path.display()))?;
        }
        None => {
            if fonts.load_system_font().is_none() {
                log::warn!("no system font found; rendering without a title");
            }
        }
    }
    Ok(fonts)
}

/// Composes and rasterizes the scene.
pub fn render(config: &SceneConfig) -> anyhow::Result<Pixmap> {
    let fonts = load_fonts(config)?;
    let mut scene = compose(config, &mut scene_rng(config));
    let pixmap = SceneRenderer::new()
        .render(&scene.figure, &mut scene.draw_list, &fonts)
        .with_context(|| format!("cannot render a {} dpi, {} in wide figure", config.dpi, config.width_in))?;
    log::debug!("rendered {}x{} px", pixmap.width(), pixmap.height());
    Ok(pixmap)
}

/// Composes, rasterizes and writes the scene to `config.output`, then opens
/// a preview window when `config.show` is set.
///
/// Returns the path written.
pub fn render_to_file(config: &SceneConfig) -> anyhow::Result<PathBuf> {
    let pixmap = render(config)?;
    save_png(&pixmap, &config.output)
        .with_context(|| format!("failed to export scene to {}", config.output.display()))?;
    if config.show {
        preview(&pixmap, config)?;
    }
    Ok(config.output.clone())
}

fn preview(pixmap: &Pixmap, config: &SceneConfig) -> anyhow::Result<()> {
    let title = config.title.clone().unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let shown = window::show(pixmap, PreviewConfig { title, ..PreviewConfig::default() })
        .context("failed to show the preview window")?;
    if !shown {
        log::warn!("--show needs a display; the scene was only saved to {}", config.output.display());
    }
    Ok(())
}
