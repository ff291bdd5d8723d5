//! Desert caravan scene composer.
//!
//! Lays out a desert highway (sky, mountains, road, a six-truck convoy,
//! cacti, a plant field, sun and clouds) on a `100 × 60` plot, then renders
//! it to a PNG through `caravan-engine`.
//!
//! ```rust,no_run
//! use caravan_studio::{render_to_file, SceneConfig};
//!
//! let path = render_to_file(&SceneConfig::new().seed(42))?;
//! println!("wrote {}", path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod composer;
pub mod config;
pub mod palette;
pub mod render;
pub mod scene;

pub use composer::compose;
pub use config::SceneConfig;
pub use render::{render, render_to_file};
pub use scene::{Scene, SceneManifest};
