//! The ifs module grows iterated function system fractals out of a handful of
//! [`AffineTransform`] rules. See [`FractalSystem`] for the iteration itself and
//! [`RuleSet`] for loading rules from RON.

use std::sync::Arc;

use geo_types::LineString;
use log::{debug, warn};

use crate::geo_types::shapes::{marker_triangle, unit_square};

pub mod affine;
pub mod patch;
pub mod rules;

pub use affine::{degrees, AffineTransform, IfsParams};
pub use patch::{Patch, PatchStyle};
pub use rules::RuleSet;

/// # FractalSystem
///
/// Holds a fixed rule set and the current generation of shapes. Every call to
/// [`FractalSystem::step`] replaces each shape with one copy per rule, so with
/// `k` rules and one seed there are `k^g` shapes after `g` steps. Nothing is
/// capped; pick your generation count with your memory in mind.
///
/// # Example
///
/// ```rust
/// use aoer_ifs::ifs::{AffineTransform, FractalSystem};
///
/// let mut sierpinski = FractalSystem::new(vec![
///     AffineTransform::new(0.5, 0.5, 0.0, 0.0, 0.0, 0.0),
///     AffineTransform::new(0.5, 0.5, 0.0, 0.0, 0.5, 0.0),
///     AffineTransform::new(0.5, 0.5, 0.0, 0.0, 0.25, 0.5),
/// ]);
/// sierpinski.iterate(4);
/// assert_eq!(sierpinski.shapes().len(), 81);
/// let patches = sierpinski.render_shapes();
/// assert_eq!(patches.len(), 81);
/// ```
#[derive(Debug, Clone)]
pub struct FractalSystem {
    transforms: Arc<[AffineTransform]>,
    shapes: Vec<LineString<f64>>,
    generation: usize,
    style: PatchStyle,
}

impl FractalSystem {
    /// Seeded with its own copy of the unit square.
    pub fn new(transforms: impl Into<Arc<[AffineTransform]>>) -> FractalSystem {
        Self::with_seed(transforms, unit_square())
    }

    /// Start from `seed` instead of the unit square. The seed is the whole of
    /// generation zero.
    pub fn with_seed(
        transforms: impl Into<Arc<[AffineTransform]>>,
        seed: LineString<f64>,
    ) -> FractalSystem {
        FractalSystem {
            transforms: transforms.into(),
            shapes: vec![seed],
            generation: 0,
            style: PatchStyle::default(),
        }
    }

    /// Colors used by [`FractalSystem::render_shapes`] and [`FractalSystem::render_map`].
    pub fn with_style(mut self, style: PatchStyle) -> FractalSystem {
        self.style = style;
        self
    }

    /// The rule set, in the order each step applies it.
    pub fn transforms(&self) -> &[AffineTransform] {
        &self.transforms
    }

    pub fn style(&self) -> &PatchStyle {
        &self.style
    }

    /// How many times [`FractalSystem::step`] has run.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Advance one generation. Shapes come out grouped by source shape, then by
    /// rule order within each group.
    pub fn step(&mut self) {
        if self.transforms.is_empty() {
            warn!("Stepping a fractal with no transforms; the shape list will be empty");
        }
        let next: Vec<LineString<f64>> = self
            .shapes
            .iter()
            .flat_map(|shape| {
                self.transforms
                    .iter()
                    .map(move |transform| transform.apply_sequence(shape))
            })
            .collect();
        self.shapes = next;
        self.generation += 1;
        debug!(
            "Fractal generation {} has {} shapes",
            self.generation,
            self.shapes.len()
        );
    }

    /// Run [`FractalSystem::step`] `count` times.
    pub fn iterate(&mut self, count: usize) -> &mut Self {
        for _ in 0..count {
            self.step();
        }
        self
    }

    /// The current generation, or the seed if we never stepped.
    pub fn shapes(&self) -> &[LineString<f64>] {
        &self.shapes
    }

    /// Every current shape as a filled patch in the shape color.
    pub fn render_shapes(&self) -> Vec<Patch> {
        self.shapes
            .iter()
            .map(|shape| Patch::filled(shape.clone(), &self.style.shape_fill))
            .collect()
    }

    /// Where each rule sends the unit square (outlined) and the orientation
    /// marker, two patches per rule in rule order. Ignores the current shapes.
    pub fn render_map(&self) -> Vec<Patch> {
        let square = unit_square();
        let marker = marker_triangle();
        self.transforms
            .iter()
            .flat_map(|transform| {
                [
                    Patch::filled(transform.apply_sequence(&square), &self.style.map_fill)
                        .with_edge(&self.style.map_edge),
                    Patch::filled(transform.apply_sequence(&marker), &self.style.marker_fill),
                ]
            })
            .collect()
    }
}
