//! Scene composition: the ordered drawing steps that build the picture.
//!
//! Every step records into its own [`layer`](crate::scene::layer), so the
//! stacking follows the step order below regardless of how a renderer
//! walks the list.

pub mod flora;
pub mod ornaments;
pub mod road;
pub mod sky;
pub mod terrain;
pub mod vehicles;

use caravan_engine::coords::Rect;
use caravan_engine::figure::{Figure, Title};
use caravan_engine::scene::DrawList;
use caravan_engine::text::FontId;
use rand::Rng;

use crate::config::SceneConfig;
use crate::scene::{Scene, SceneManifest};

/// Plot-space extent of the scene.
pub const PLOT_BOUNDS: Rect = Rect::new(0.0, 0.0, 100.0, 60.0);
pub const PLOT_WIDTH: f32 = 100.0;
/// Where the desert floor meets the mountains.
pub const HORIZON: f32 = 25.0;

pub const TITLE_SIZE: f32 = 20.0;
pub const TITLE_PAD: f32 = 20.0;
/// Margin kept around the content when cropping, in inches.
pub const TIGHT_PAD_IN: f32 = 0.1;

/// Output frame: fixed bounds, no axis chrome, tight crop.
pub fn figure(config: &SceneConfig) -> Figure {
    let figure = Figure::new(PLOT_BOUNDS)
        .dpi(config.dpi)
        .width_in(config.width_in)
        .axis_off()
        .tight(TIGHT_PAD_IN);

    match &config.title {
        Some(text) => figure.title(
            Title::new(text.clone(), FontId::PRIMARY)
                .size(TITLE_SIZE)
                .pad(TITLE_PAD),
        ),
        None => figure,
    }
}

/// Builds the scene. Randomness (cactus heights, plant jitter) comes from `rng` only.
pub fn compose(config: &SceneConfig, rng: &mut impl Rng) -> Scene {
    let mut list = DrawList::new();

    sky::draw(&mut list);
    terrain::draw_ground(&mut list);
    let mountain = terrain::draw_mountains(&mut list);
    road::draw_highway(&mut list);
    road::draw_lane_marks(&mut list);
    let trucks = vehicles::draw_convoy(&mut list);
    let cacti = flora::draw_cacti(&mut list, rng);
    let plant_count =
        flora::draw_plant_field(&mut list, rng, flora::FIELD_START, flora::FIELD_END, HORIZON);
    ornaments::draw_sun(&mut list);
    ornaments::draw_clouds(&mut list);

    log::debug!("composed {} draw items", list.len());

    Scene {
        figure: figure(config),
        draw_list: list,
        manifest: SceneManifest { mountain, trucks, cacti, plant_count },
    }
}
