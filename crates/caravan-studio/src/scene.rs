//! The composed scene and what went into it.

use caravan_engine::coords::Vec2;
use caravan_engine::figure::Figure;
use caravan_engine::scene::DrawList;

use crate::composer::flora::Cactus;
use crate::composer::vehicles::Truck;

/// Draw layers, back to front. Each composer step records into its own layer.
pub mod layer {
    use caravan_engine::scene::ZIndex;

    pub const SKY: ZIndex = ZIndex::new(0);
    pub const GROUND: ZIndex = SKY.above();
    pub const MOUNTAINS: ZIndex = GROUND.above();
    pub const ROAD: ZIndex = MOUNTAINS.above();
    pub const LANES: ZIndex = ROAD.above();
    pub const VEHICLES: ZIndex = LANES.above();
    pub const CACTI: ZIndex = VEHICLES.above();
    pub const PLANTS: ZIndex = CACTI.above();
    pub const ORNAMENTS: ZIndex = PLANTS.above();
}

/// The parameters the composer chose, kept for inspection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneManifest {
    pub mountain: Vec<Vec2>,
    pub trucks: Vec<Truck>,
    pub cacti: Vec<Cactus>,
    pub plant_count: usize,
}

/// A fully composed scene, ready to rasterize.
#[derive(Debug)]
pub struct Scene {
    pub figure: Figure,
    pub draw_list: DrawList,
    pub manifest: SceneManifest,
}
