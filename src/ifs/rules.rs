use anyhow::Result;
use geo_types::{Coord, LineString};
use serde::{Deserialize, Serialize};

use std::f64::consts::FRAC_PI_2;

use crate::geo_types::shapes::regular_poly;

use super::{AffineTransform, FractalSystem, IfsParams, PatchStyle};

/// Serializable description of a whole fractal: its rules, an optional seed
/// polygon (the unit square if missing) and the colors to draw it with.
///
/// ```rust
/// use aoer_ifs::ifs::RuleSet;
///
/// let rules = RuleSet::from_ron(r#"(
///     rules: [
///         (r: 0.5, s: 0.5, phi: 0.0, psi: 0.0, e: 0.0, f: 0.0),
///         (r: 0.5, s: 0.5, phi: 0.0, psi: 0.0, e: 0.5, f: 0.5),
///     ],
///     seed: Some([(0.0, 0.0), (1.0, 0.0), (0.5, 1.0)]),
/// )"#).unwrap();
/// let mut fractal = rules.build();
/// fractal.iterate(3);
/// assert_eq!(fractal.shapes().len(), 8);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RuleSet {
    pub rules: Vec<IfsParams>,
    #[serde(default)]
    pub seed: Option<Vec<(f64, f64)>>,
    #[serde(default)]
    pub style: PatchStyle,
}

impl RuleSet {
    pub fn new(rules: Vec<IfsParams>) -> RuleSet {
        RuleSet {
            rules,
            seed: None,
            style: PatchStyle::default(),
        }
    }

    /// Three half-size copies of the seed, bottom left, bottom right and top middle.
    pub fn sierpinski() -> RuleSet {
        RuleSet::new(
            [(0.0, 0.0), (0.5, 0.0), (0.25, 0.5)]
                .into_iter()
                .map(|(e, f)| IfsParams {
                    r: 0.5,
                    s: 0.5,
                    phi: 0.0,
                    psi: 0.0,
                    e,
                    f,
                })
                .collect(),
        )
    }

    /// Sierpinski carpet: a 3x3 grid of third-size copies minus the middle one.
    pub fn carpet() -> RuleSet {
        let third = 1.0 / 3.0;
        RuleSet::new(
            (0..3)
                .flat_map(|row| (0..3).map(move |col| (col, row)))
                .filter(|&(col, row)| !(col == 1 && row == 1))
                .map(|(col, row)| IfsParams {
                    r: third,
                    s: third,
                    phi: 0.0,
                    psi: 0.0,
                    e: col as f64 * third,
                    f: row as f64 * third,
                })
                .collect(),
        )
    }

    /// Swap the seed for a regular polygon with `sides` vertices inscribed in
    /// the unit square, first vertex pointing straight up.
    pub fn with_regular_seed(mut self, sides: usize) -> RuleSet {
        let seed = regular_poly(sides, 0.5, 0.5, 0.5, FRAC_PI_2);
        self.seed = Some(seed.coords().map(|xy| xy.x_y()).collect());
        self
    }

    pub fn from_ron(data: &str) -> Result<RuleSet> {
        Ok(ron::from_str(data)?)
    }

    pub fn to_ron(&self) -> Result<String> {
        Ok(ron::to_string(self)?)
    }

    pub fn transforms(&self) -> Vec<AffineTransform> {
        self.rules.iter().copied().map(AffineTransform::from).collect()
    }

    /// A fresh [`FractalSystem`] at generation zero.
    pub fn build(&self) -> FractalSystem {
        let system = match &self.seed {
            Some(seed) => FractalSystem::with_seed(
                self.transforms(),
                LineString::new(seed.iter().map(|&xy| Coord::from(xy)).collect()),
            ),
            None => FractalSystem::new(self.transforms()),
        };
        system.with_style(self.style.clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geo_types::shapes::unit_square;

    #[test]
    fn test_sierpinski_preset() {
        let rules = RuleSet::sierpinski();
        assert_eq!(rules.rules.len(), 3);
        assert_eq!(rules.rules[2].e, 0.25);
        assert_eq!(rules.rules[2].f, 0.5);
    }

    #[test]
    fn test_carpet_skips_middle() {
        let rules = RuleSet::carpet();
        assert_eq!(rules.rules.len(), 8);
        let third = 1.0 / 3.0;
        assert!(!rules.rules.iter().any(|p| p.e == third && p.f == third));
        let mut fractal = rules.build();
        fractal.iterate(2);
        assert_eq!(fractal.shapes().len(), 64);
    }

    #[test]
    fn test_build_default_seed() {
        let fractal = RuleSet::sierpinski().build();
        assert_eq!(fractal.shapes(), &[unit_square()]);
        assert_eq!(fractal.transforms().len(), 3);
    }

    #[test]
    fn test_regular_seed() {
        let rules = RuleSet::sierpinski().with_regular_seed(5);
        let seed = rules.seed.clone().expect("Should have a seed");
        assert_eq!(seed.len(), 5);
        assert!((seed[0].0 - 0.5).abs() < 1e-12);
        assert!((seed[0].1 - 1.0).abs() < 1e-12);
        assert!(seed
            .iter()
            .all(|&(x, y)| (-1e-12..=1.0 + 1e-12).contains(&x) && (-1e-12..=1.0 + 1e-12).contains(&y)));
        let mut fractal = rules.build();
        fractal.iterate(2);
        assert_eq!(fractal.shapes().len(), 9);
        assert!(fractal.shapes().iter().all(|shape| shape.0.len() == 5));
    }

    #[test]
    fn test_ron_style_colors() {
        let rules = RuleSet::from_ron(
            r##"(
                rules: [(r: 1.0, s: 1.0, phi: 0.0, psi: 0.0, e: 0.0, f: 0.0)],
                style: (
                    shape_fill: "green",
                    map_fill: "#ffff00",
                    map_edge: "black",
                    marker_fill: "red",
                ),
            )"##,
        )
        .expect("Should parse rules with a style");
        assert_eq!(rules.style.map_fill.to_rgba8(), [255, 255, 0, 255]);
        assert_eq!(rules.style.shape_fill.to_rgba8(), [0, 128, 0, 255]);
        let map = rules.build().render_map();
        assert_eq!(map[0].color.to_rgba8(), [255, 255, 0, 255]);
    }

    #[test]
    fn test_ron_rejects_garbage() {
        assert!(RuleSet::from_ron("(rules: [(r: 1.0)])").is_err());
        assert!(RuleSet::from_ron("not ron at all").is_err());
    }

    #[test]
    fn test_ron_round_trip() {
        let mut rules = RuleSet::carpet();
        rules.seed = Some(vec![(0.0, 0.0), (1.0, 0.0), (0.5, 1.0)]);
        let text = rules.to_ron().expect("Should serialize");
        let back = RuleSet::from_ron(&text).expect("Should deserialize");
        assert_eq!(back.rules, rules.rules);
        assert_eq!(back.seed, rules.seed);
        assert_eq!(back.style, rules.style);
    }
}
