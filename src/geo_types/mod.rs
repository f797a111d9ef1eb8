use geo_types::{CoordNum, Point};
use num_traits::real::Real;

/// Affine matrix helpers, including the two-angle IFS map, and a trait to
/// push geo_types geometry through an [`nalgebra::Affine2`].
pub mod matrix;

/// Trait to convert patches into an SVG object (or specifically, SVG components)
pub mod svg;

/// Trait that implements a distance function between two [`geo_types::Point`] structs.
/// Also includes a length function which returns the length of a [`geo_types::Point`]
/// as if it were a Vector.
pub trait PointDistance<T: CoordNum> {
    /// Return the scalar distance between two [`geo_types::Point`]s.
    fn distance(&self, other: &Point<T>) -> T;

    /// Treat a [`geo_types::Point`] as a Vector and return its scalar length.
    fn length(&self) -> T;
}

/// Seed shapes and markers. Shapes here are open vertex loops; whoever draws
/// them closes the last edge.
pub mod shapes {
    use crate::errors::ShapeParseError;
    use geo_types::{coord, LineString, Polygon};
    use std::f64::consts::PI;
    use std::str::FromStr;
    use wkt::Wkt;

    /// The default seed, `(0,0) (0,1) (1,1) (1,0)`. Every call hands out fresh storage.
    pub fn unit_square() -> LineString<f64> {
        LineString::new(vec![
            coord! {x: 0.0, y: 0.0},
            coord! {x: 0.0, y: 1.0},
            coord! {x: 1.0, y: 1.0},
            coord! {x: 1.0, y: 0.0},
        ])
    }

    /// Small asymmetric triangle inside the unit square, so you can see which way
    /// a map flips or rotates things.
    pub fn marker_triangle() -> LineString<f64> {
        LineString::new(vec![
            coord! {x: 0.1, y: 0.1},
            coord! {x: 0.2, y: 0.1},
            coord! {x: 0.1, y: 0.3},
        ])
    }

    /// Regular polygon with `sides` vertices around (x, y). Anything under three
    /// sides collapses to the center point.
    pub fn regular_poly(sides: usize, x: f64, y: f64, radius: f64, rotation: f64) -> LineString<f64> {
        if sides < 3 {
            return LineString::new(vec![coord! {x: x, y: y}]);
        }
        LineString::new(
            (0..sides)
                .map(|i| {
                    let angle = rotation + (i as f64 / sides as f64) * (2.0 * PI);
                    coord! {x: x + angle.cos() * radius, y: y + angle.sin() * radius}
                })
                .collect(),
        )
    }

    /// Read a seed shape out of a WKT polygon. Only the exterior ring is used,
    /// and the repeated closing vertex is dropped.
    pub fn shape_from_wkt(text: &str) -> Result<LineString<f64>, ShapeParseError> {
        let wkt = Wkt::<f64>::from_str(text).map_err(|e| ShapeParseError::InvalidWkt(e.to_string()))?;
        let poly =
            Polygon::try_from(wkt).map_err(|e| ShapeParseError::NotAPolygon(e.to_string()))?;
        let mut coords = poly.exterior().0.clone();
        if coords.len() > 1 && coords.first() == coords.last() {
            coords.pop();
        }
        if coords.is_empty() {
            return Err(ShapeParseError::Empty);
        }
        Ok(LineString::new(coords))
    }

}

impl<T> PointDistance<T> for Point<T>
where
    T: CoordNum,
    T: Real,
{
    fn distance(&self, other: &Point<T>) -> T {
        let p = *self - *other;
        p.length()
    }

    fn length(&self) -> T {
        (self.x().powi(2) + self.y().powi(2)).sqrt()
    }
}
