use crate::errors::SvgCreationError;
use crate::geo_types::matrix::{scale_matrix, translate_matrix, TransformGeometry};
use crate::ifs::patch::{Color, Patch};
use geo::bounding_rect::BoundingRect;
use geo_types::{coord, LineString, MultiLineString, Rect};
use nalgebra::Affine2;
use svg::node::element::path::Data;
use svg::node::element::Path;
use svg::Document;

/// An arrangement is a plan for fitting a pile of patches into a viewbox.
/// The `bool` flips the y axis, since fractal maths is y-up and SVG is y-down.
#[derive(Debug, Clone)]
pub enum Arrangement {
    Unit(Rect<f64>),
    FitCenter(Rect<f64>, bool),
    FitCenterMargin(f64, Rect<f64>, bool),
}

impl Arrangement {
    pub fn viewbox(&self) -> Rect<f64> {
        match self {
            Arrangement::Unit(bounds) => *bounds,
            Arrangement::FitCenter(bounds, _) => *bounds,
            Arrangement::FitCenterMargin(_, bounds, _) => *bounds,
        }
    }

    /// Work out the transform that places geometry bounded by `gbox` according to
    /// this arrangement. Returns None if the geometry has no extent to scale.
    pub fn transform_for(&self, gbox: &Rect<f64>) -> Option<Affine2<f64>> {
        let (margin, bounds, invert) = match self {
            Arrangement::Unit(_) => return Some(Affine2::identity()),
            Arrangement::FitCenter(bounds, invert) => (0.0, bounds, *invert),
            Arrangement::FitCenterMargin(margin, bounds, invert) => (*margin, bounds, *invert),
        };
        let scale = ((bounds.width() - 2.0 * margin) / gbox.width())
            .min((bounds.height() - 2.0 * margin) / gbox.height());
        if !scale.is_finite() {
            return None;
        }
        let bcenter = bounds.center();
        let gcenter = gbox.center() * scale;
        let delta = bcenter - gcenter;
        let tx = translate_matrix(delta.x, delta.y) * scale_matrix(scale, scale);
        if invert {
            Some(translate_matrix(0.0, bounds.min().y + bounds.max().y) * scale_matrix(1.0, -1.0) * tx)
        } else {
            Some(tx)
        }
    }
}

fn css_hex(color: &Color) -> String {
    let [r, g, b, _] = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

pub trait ToSvg {
    /// Convert into a closed SVG PathData item
    fn to_path_data(&self) -> Data;

    /// Convert into an SVG Path, with the geometry pushed through `affine` first
    fn to_path(&self, affine: &Affine2<f64>) -> Path;
}

impl ToSvg for LineString<f64> {
    fn to_path_data(&self) -> Data {
        let mut svg_data = Data::new();
        for point in self.points().take(1) {
            svg_data = svg_data.move_to((point.x(), point.y()));
        }
        for point in self.points().skip(1) {
            svg_data = svg_data.line_to((point.x(), point.y()));
        }
        if !self.0.is_empty() {
            svg_data = svg_data.close();
        }
        svg_data
    }

    fn to_path(&self, affine: &Affine2<f64>) -> Path {
        Path::new().set("d", self.transformed(affine).to_path_data())
    }
}

impl ToSvg for Patch {
    fn to_path_data(&self) -> Data {
        self.vertices.to_path_data()
    }

    /// Unfilled patches are drawn as outlines in their main color unless they
    /// carry a separate edge color.
    fn to_path(&self, affine: &Affine2<f64>) -> Path {
        let path = self.vertices.to_path(affine);
        let path = if self.fill {
            path.set("fill", css_hex(&self.color))
                .set("fill-opacity", self.color.a)
        } else {
            path.set("fill", "none")
        };
        match (&self.edge_color, self.fill) {
            (Some(edge), _) => path.set("stroke", css_hex(edge)).set("stroke-width", 0.5),
            (None, false) => path
                .set("stroke", css_hex(&self.color))
                .set("stroke-width", 0.5),
            (None, true) => path.set("stroke", "none"),
        }
    }
}

/// Bounding box of every vertex in every patch.
pub fn patch_bounds(patches: &[Patch]) -> Option<Rect<f64>> {
    MultiLineString::new(patches.iter().map(|p| p.vertices.clone()).collect()).bounding_rect()
}

/// Lay the patches out per `arrangement` and wrap them up in an SVG document,
/// in order, so later patches paint over earlier ones.
pub fn patches_to_svg(
    patches: &[Patch],
    arrangement: &Arrangement,
) -> Result<Document, SvgCreationError> {
    let gbox = patch_bounds(patches).ok_or(SvgCreationError::NullGeometry)?;
    let affine = arrangement
        .transform_for(&gbox)
        .ok_or(SvgCreationError::NullGeometry)?;
    let viewbox = arrangement.viewbox();
    let doc = Document::new()
        .set(
            "viewBox",
            (viewbox.min().x, viewbox.min().y, viewbox.width(), viewbox.height()),
        )
        .set("width", format!("{}mm", viewbox.width()))
        .set("height", format!("{}mm", viewbox.height()));
    Ok(patches
        .iter()
        .fold(doc, |doc, patch| doc.add(patch.to_path(&affine))))
}

/// A square viewbox of `size` starting at the origin, handy for FitCenter.
pub fn square_viewbox(size: f64) -> Rect<f64> {
    Rect::new(coord! {x: 0.0, y: 0.0}, coord! {x: size, y: size})
}
