use geo::coord;
use geo::map_coords::MapCoords;
use geo::Coord;
use geo_types::CoordNum;
use geo_types::Geometry;
use nalgebra::Matrix3;
use nalgebra::{Affine2, Point2 as NPoint2, RealField};
use num_traits::Float;

/// Helper to create a scaling matrix
pub fn scale_matrix<T>(sx: T, sy: T) -> Affine2<T>
where
    T: RealField,
    T: Float,
{
    Affine2::from_matrix_unchecked(Matrix3::<T>::new(
        sx,
        T::zero(),
        T::zero(),
        T::zero(),
        sy,
        T::zero(),
        T::zero(),
        T::zero(),
        T::one(),
    ))
}

/// Helper to create a translation matrix
pub fn translate_matrix<T>(tx: T, ty: T) -> Affine2<T>
where
    T: RealField,
    T: Float,
{
    Affine2::from_matrix_unchecked(Matrix3::<T>::new(
        T::one(),
        T::zero(),
        tx,
        T::zero(),
        T::one(),
        ty,
        T::zero(),
        T::zero(),
        T::one(),
    ))
}

/// Counter-clockwise rotation in the usual y-up orientation.
pub fn rotate_matrix<T>(radians: T) -> Affine2<T>
where
    T: RealField,
    T: Float,
{
    ifs_matrix(T::one(), T::one(), radians, radians, T::zero(), T::zero())
}

/// Unit matrix. Basically a no-op
pub fn unit_matrix() -> Affine2<f64> {
    Affine2::from_matrix_unchecked(Matrix3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0))
}

/// Builds the classic IFS map out of two scale factors, two angles and a translation.
///
/// The first column is the x basis scaled by `r` and rotated by `phi`, the second
/// is the y basis scaled by `s` and rotated by `psi`. When `phi != psi` the result
/// shears; with `phi == psi` and `r == s` it is a plain similarity.
///
/// ```text
/// | r·cos(phi)  -s·sin(psi)  e |
/// | r·sin(phi)   s·cos(psi)  f |
/// | 0            0           1 |
/// ```
pub fn ifs_matrix<T>(r: T, s: T, phi: T, psi: T, e: T, f: T) -> Affine2<T>
where
    T: RealField,
    T: Float,
{
    Affine2::from_matrix_unchecked(Matrix3::<T>::new(
        r * Float::cos(phi),
        -(s * Float::sin(psi)),
        e,
        r * Float::sin(phi),
        s * Float::cos(psi),
        f,
        T::zero(),
        T::zero(),
        T::one(),
    ))
}

pub trait TransformGeometry<T>
where
    T: CoordNum,
    T: RealField,
    T: Float,
{
    fn xform_coord(xy: &Coord<T>, affine: &Affine2<T>) -> Coord<T> {
        let out = affine * NPoint2::new(xy.x, xy.y);
        coord!(x: out.x, y: out.y)
    }

    fn transformed(&self, affine: &Affine2<T>) -> Self;
}

impl<T> TransformGeometry<T> for Geometry<T>
where
    T: CoordNum,
    T: RealField,
    T: Float,
{
    fn transformed(&self, affine: &Affine2<T>) -> Geometry<T> {
        self.map_coords(|xy| Self::xform_coord(&xy, affine))
    }
}

impl<T> TransformGeometry<T> for geo_types::LineString<T>
where
    T: CoordNum,
    T: RealField,
    T: Float,
{
    fn transformed(&self, affine: &Affine2<T>) -> geo_types::LineString<T> {
        self.map_coords(|xy| Self::xform_coord(&xy, affine))
    }
}
