use crate::geo_types::matrix::{ifs_matrix, unit_matrix, TransformGeometry};
use geo::coord;
use geo_types::{Coord, LineString};
use nalgebra::{Affine2, Matrix2, Point2 as NPoint2, Vector2};
use serde::{Deserialize, Serialize};

/// Helper function to convert degrees to radians
pub fn degrees(deg: f64) -> f64 {
    std::f64::consts::PI * (deg / 180.0)
}

/// The six numbers that define one IFS rule. Angles are radians.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct IfsParams {
    pub r: f64,
    pub s: f64,
    pub phi: f64,
    pub psi: f64,
    pub e: f64,
    pub f: f64,
}

/// # AffineTransform
///
/// One rule of an iterated function system: `P' = M·P + T`, where the columns of
/// `M` are the x and y basis vectors scaled by `r`/`s` and rotated by `phi`/`psi`.
/// Fixed at construction; nothing is validated, so zero or negative scales and
/// any angle are fair game.
///
/// # Example
///
/// ```rust
/// use aoer_ifs::ifs::AffineTransform;
/// use geo_types::coord;
///
/// let half_right = AffineTransform::new(0.5, 0.5, 0.0, 0.0, 0.5, 0.0);
/// assert_eq!(half_right.apply(coord! {x: 1.0, y: 1.0}), coord! {x: 1.0, y: 0.5});
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    affine: Affine2<f64>,
}

impl AffineTransform {
    pub fn new(r: f64, s: f64, phi: f64, psi: f64, e: f64, f: f64) -> AffineTransform {
        AffineTransform {
            affine: ifs_matrix(r, s, phi, psi, e, f),
        }
    }

    pub fn identity() -> AffineTransform {
        AffineTransform {
            affine: unit_matrix(),
        }
    }

    /// Map a single point. NaN and infinities just ride along.
    pub fn apply(&self, xy: Coord<f64>) -> Coord<f64> {
        let out = self.affine * NPoint2::new(xy.x, xy.y);
        coord!(x: out.x, y: out.y)
    }

    /// Map every vertex of a shape, keeping order and length. The input is untouched.
    pub fn apply_sequence(&self, shape: &LineString<f64>) -> LineString<f64> {
        shape.transformed(&self.affine)
    }

    pub fn apply_points(&self, points: &[Coord<f64>]) -> Vec<Coord<f64>> {
        points.iter().map(|xy| self.apply(*xy)).collect()
    }

    pub fn matrix(&self) -> &Affine2<f64> {
        &self.affine
    }

    /// The 2x2 linear part, `M`.
    pub fn linear(&self) -> Matrix2<f64> {
        self.affine.matrix().fixed_view::<2, 2>(0, 0).into_owned()
    }

    /// The translation, `T = [e, f]`.
    pub fn translation(&self) -> Vector2<f64> {
        self.affine.matrix().fixed_view::<2, 1>(0, 2).into_owned()
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<IfsParams> for AffineTransform {
    fn from(p: IfsParams) -> Self {
        AffineTransform::new(p.r, p.s, p.phi, p.psi, p.e, p.f)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geo_types::shapes::{marker_triangle, unit_square};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn assert_coord_eq(left: Coord<f64>, right: Coord<f64>) {
        assert_relative_eq!(left.x, right.x, epsilon = 1e-12);
        assert_relative_eq!(left.y, right.y, epsilon = 1e-12);
    }

    #[test]
    fn test_identity_construction() {
        let t = AffineTransform::new(1.0, 1.0, 0.0, 0.0, 0.0, 0.0);
        for xy in [
            coord! {x: 0.0, y: 0.0},
            coord! {x: 1.5, y: -2.25},
            coord! {x: -1e6, y: 3e-7},
        ] {
            assert_coord_eq(t.apply(xy), xy);
            assert_coord_eq(AffineTransform::identity().apply(xy), xy);
        }
    }

    #[test]
    fn test_matrix_layout() {
        let t = AffineTransform::new(2.0, 3.0, PI / 2., 0.0, 4.0, 5.0);
        let m = t.linear();
        assert_relative_eq!(m[(0, 0)], 0.0, epsilon = 1e-12);
        assert_relative_eq!(m[(1, 0)], 2.0, epsilon = 1e-12);
        assert_relative_eq!(m[(0, 1)], 0.0, epsilon = 1e-12);
        assert_relative_eq!(m[(1, 1)], 3.0, epsilon = 1e-12);
        assert_eq!(t.translation(), Vector2::new(4.0, 5.0));
    }

    #[test]
    fn test_linear_part_is_linear() {
        let t = AffineTransform::new(0.7, -1.3, 0.4, 2.1, 0.0, 0.0);
        let p = coord! {x: 3.0, y: -1.0};
        let q = coord! {x: -0.5, y: 8.0};
        for a in [0.0, 0.25, 0.5, 1.0, 3.0] {
            let mixed = coord! {x: a * p.x + (1.0 - a) * q.x, y: a * p.y + (1.0 - a) * q.y};
            let tp = t.apply(p);
            let tq = t.apply(q);
            assert_coord_eq(
                t.apply(mixed),
                coord! {x: a * tp.x + (1.0 - a) * tq.x, y: a * tp.y + (1.0 - a) * tq.y},
            );
        }
        let doubled = t.apply(coord! {x: 2.0 * p.x, y: 2.0 * p.y});
        let tp = t.apply(p);
        assert_coord_eq(doubled, coord! {x: 2.0 * tp.x, y: 2.0 * tp.y});
    }

    #[test]
    fn test_translation_breaks_scaling() {
        let t = AffineTransform::new(1.0, 1.0, 0.0, 0.0, 1.0, 0.0);
        let p = t.apply(coord! {x: 2.0, y: 0.0});
        assert_ne!(p, coord! {x: 2.0 * t.apply(coord! {x: 1.0, y: 0.0}).x, y: 0.0});
    }

    #[test]
    fn test_apply_sequence_keeps_length_and_order() {
        let t = AffineTransform::new(0.5, 0.5, 0.0, 0.0, 0.25, 0.5);
        let square = unit_square();
        let out = t.apply_sequence(&square);
        assert_eq!(out.0.len(), square.0.len());
        for (src, dst) in square.coords().zip(out.coords()) {
            assert_coord_eq(t.apply(*src), *dst);
        }
        assert_eq!(square, unit_square());

        let tri = marker_triangle();
        assert_eq!(t.apply_points(&tri.0), t.apply_sequence(&tri).0);
        assert!(t.apply_sequence(&LineString::new(vec![])).0.is_empty());
    }

    #[test]
    fn test_degenerate_collapses() {
        let t = AffineTransform::new(0.0, 0.0, 0.3, 1.1, 2.0, -1.0);
        for xy in unit_square().coords() {
            assert_coord_eq(t.apply(*xy), coord! {x: 2.0, y: -1.0});
        }
    }

    #[test]
    fn test_nan_propagates() {
        let t = AffineTransform::new(1.0, 1.0, 0.0, 0.0, 0.0, 0.0);
        let out = t.apply(coord! {x: f64::NAN, y: 1.0});
        assert!(out.x.is_nan());
        let out = t.apply(coord! {x: f64::INFINITY, y: 0.0});
        assert!(out.x.is_infinite());
    }

    #[test]
    fn test_from_params_and_degrees() {
        let params = IfsParams {
            r: 1.0,
            s: 1.0,
            phi: degrees(90.0),
            psi: degrees(90.0),
            e: 0.0,
            f: 0.0,
        };
        let t = AffineTransform::from(params);
        assert_coord_eq(t.apply(coord! {x: 1.0, y: 0.0}), coord! {x: 0.0, y: 1.0});
    }
}
