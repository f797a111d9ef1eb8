use aoer_ifs::geo_types::svg::square_viewbox;
use aoer_ifs::prelude::*;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

/// Usage: sierpinski_svg [rules.ron|-] [generations] [seed sides]
///
/// Without a rule file (or with `-`) you get the Sierpinski triangle. Passing a
/// side count swaps the seed for a regular polygon. Writes `<name>.svg`
/// with the fractal and `<name>-map.svg` with where each rule sends the unit square.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let (rules, name) = match args.get(1).filter(|arg| arg.as_str() != "-") {
        Some(path) => {
            let path = PathBuf::from(path);
            let rules = RuleSet::from_ron(&std::fs::read_to_string(&path)?)?;
            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_else(|| "fractal".to_string());
            (rules, name)
        }
        None => (RuleSet::sierpinski(), "sierpinski".to_string()),
    };
    let generations: usize = match args.get(2) {
        Some(count) => count.parse()?,
        None => 6,
    };

    let rules = match args.get(3) {
        Some(sides) => rules.with_regular_seed(sides.parse()?),
        None => rules,
    };

    let mut fractal = rules.build();
    fractal.iterate(generations);
    info!(
        "{} rules, {} generations, {} shapes",
        fractal.transforms().len(),
        fractal.generation(),
        fractal.shapes().len()
    );

    // A4-ish square, 10mm margin, y up.
    let arrangement = Arrangement::FitCenterMargin(10.0, square_viewbox(200.0), true);
    let doc = patches_to_svg(&fractal.render_shapes(), &arrangement)?;
    svg::save(format!("{}.svg", name), &doc)?;
    let map = patches_to_svg(&fractal.render_map(), &arrangement)?;
    svg::save(format!("{}-map.svg", name), &map)?;
    info!("Wrote {}.svg and {}-map.svg", name, name);
    Ok(())
}
