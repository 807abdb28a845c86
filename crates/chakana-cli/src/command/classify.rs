use std::path::PathBuf;

use chakana_engine::Palette;

use crate::pattern;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ClassifyArg {
    /// Pattern image to classify
    image: PathBuf,
    /// Grid dimension (boxes per side)
    #[clap(long, default_value_t = 7)]
    grid: usize,
    /// Also print the sampled RGB triples
    #[clap(long, default_value_t = false)]
    samples: bool,
}

/// Samples and classifies a pattern image the same way `play` deals it, and
/// prints the resulting category grid for calibration.
pub(crate) fn run(arg: &ClassifyArg) -> anyhow::Result<()> {
    anyhow::ensure!(arg.grid > 0, "grid must be at least 1");
    let palette = Palette::reference();
    let samples = pattern::sample_image(&arg.image, arg.grid)?;

    let width = palette
        .categories()
        .map(|(_, spec)| spec.name.len())
        .max()
        .unwrap_or(0);
    for row in samples.chunks(arg.grid) {
        let names: Vec<String> = row
            .iter()
            .map(|&sample| format!("{:<width$}", palette.spec(palette.classify(sample)).name))
            .collect();
        println!("{}", names.join("  "));
    }

    if arg.samples {
        println!();
        for row in samples.chunks(arg.grid) {
            let triples: Vec<String> = row
                .iter()
                .map(|sample| format!("({:>3},{:>3},{:>3})", sample.0, sample.1, sample.2))
                .collect();
            println!("{}", triples.join(" "));
        }
    }
    Ok(())
}
