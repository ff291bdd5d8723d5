use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::ellipse::EllipseCmd;
use crate::scene::shapes::polygon::PolygonCmd;
use crate::scene::shapes::rect::RectCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `render::shapes` how to rasterize it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Circle(CircleCmd),
    Ellipse(EllipseCmd),
    Polygon(PolygonCmd),
}

impl DrawCmd {
    /// Short variant name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::Rect(_) => "rect",
            DrawCmd::Circle(_) => "circle",
            DrawCmd::Ellipse(_) => "ellipse",
            DrawCmd::Polygon(_) => "polygon",
        }
    }
}
