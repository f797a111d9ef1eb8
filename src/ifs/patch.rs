//! Plain polygon descriptions handed to whatever draws them. The fractal core
//! never looks at these again once they are built.
pub use csscolorparser::Color;
use geo_types::LineString;
use serde::{Deserialize, Serialize};

/// A filled (or outlined) polygon, vertices in order, not closed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Patch {
    pub vertices: LineString<f64>,
    pub fill: bool,
    pub color: Color,
    pub edge_color: Option<Color>,
}

impl Patch {
    pub fn filled(vertices: LineString<f64>, color: &Color) -> Patch {
        Patch {
            vertices,
            fill: true,
            color: color.clone(),
            edge_color: None,
        }
    }

    pub fn with_edge(mut self, edge: &Color) -> Patch {
        self.edge_color = Some(edge.clone());
        self
    }
}

/// Colors used when turning shapes and rule maps into patches.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PatchStyle {
    pub shape_fill: Color,
    pub map_fill: Color,
    pub map_edge: Color,
    pub marker_fill: Color,
}

impl Default for PatchStyle {
    fn default() -> Self {
        Self {
            shape_fill: Color::from_rgba8(0, 0, 255, 255),
            map_fill: Color::from_rgba8(0, 255, 255, 255),
            map_edge: Color::from_rgba8(0, 0, 0, 255),
            marker_fill: Color::from_rgba8(255, 0, 0, 255),
        }
    }
}
