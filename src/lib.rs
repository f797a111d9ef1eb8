//! ArmyOfEvilRobots iterated function system fractals
//!
//! Define a handful of affine rules, seed a polygon, and step the whole pile of
//! shapes forward until it looks like the attractor. The results come back as
//! plain `geo_types` line strings, or as colored [`ifs::Patch`]es ready to hand
//! to an SVG document (see [`geo_types::svg`]) or any other polygon renderer.
//!
//! *CAUTION: Memory use is exponential in the generation count. Seven or eight
//! generations of a three rule system is plenty for a plotter.*

/// Extensions/Traits for geo_types geometry: affine matrix helpers, seed shapes,
/// and the SVG adapter for rendered patches.
pub mod geo_types;

/// Affine rules, the fractal iteration, and RON rule sets.
pub mod ifs;

pub mod errors;

/// Make your life easy! Just import prelude::* and get going.
pub mod prelude {
    pub use crate::geo_types::matrix::{ifs_matrix, TransformGeometry};
    pub use crate::geo_types::shapes::{marker_triangle, unit_square};
    pub use crate::geo_types::svg::{patches_to_svg, Arrangement, ToSvg};
    pub use crate::geo_types::PointDistance;
    pub use crate::ifs::{degrees, AffineTransform, FractalSystem, Patch, PatchStyle, RuleSet};
}
