use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chakana_engine::{Palette, Rgb};
use rand::Rng as _;

/// Where the box samples for a round come from.
#[derive(Debug, Clone)]
pub(crate) enum PatternSource {
    /// Sample one pixel per box from an image, at the box's logical center.
    Image(PathBuf),
    /// The built-in chakana motif.
    Builtin,
    /// Uniform random reference colors.
    Random,
}

impl PatternSource {
    /// Produces the `grid`² row-major samples for one round.
    pub(crate) fn samples(&self, grid: usize, palette: &Palette) -> anyhow::Result<Vec<Rgb>> {
        match self {
            PatternSource::Image(path) => sample_image(path, grid),
            PatternSource::Builtin => Ok(builtin(grid, palette)),
            PatternSource::Random => Ok(random(grid, palette)),
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            PatternSource::Image(path) => path
                .file_name()
                .map_or_else(|| path.display().to_string(), |name| {
                    name.to_string_lossy().into_owned()
                }),
            PatternSource::Builtin => "built-in chakana".to_owned(),
            PatternSource::Random => "random".to_owned(),
        }
    }
}

/// Samples the pixel at each box's logical center, row-major.
pub(crate) fn sample_image(path: &Path, grid: usize) -> anyhow::Result<Vec<Rgb>> {
    let img = image::open(path)
        .with_context(|| format!("failed to load pattern image {}", path.display()))?
        .to_rgb8();
    Ok(sample_rgb_image(&img, grid))
}

#[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn sample_rgb_image(img: &image::RgbImage, grid: usize) -> Vec<Rgb> {
    let (width, height) = img.dimensions();
    let mut samples = Vec::with_capacity(grid * grid);
    for row in 0..grid {
        for col in 0..grid {
            let sx = ((col as f64 + 0.5) / grid as f64 * f64::from(width)) as u32;
            let sy = ((row as f64 + 0.5) / grid as f64 * f64::from(height)) as u32;
            let image::Rgb([r, g, b]) = *img.get_pixel(sx.min(width - 1), sy.min(height - 1));
            samples.push(Rgb(r, g, b));
        }
    }
    samples
}

// Stepped-cross motif over the three reference categories:
// 0 = verde, 1 = amarillo, 2 = marron.
const CHAKANA: [[u8; 7]; 7] = [
    [0, 0, 2, 2, 2, 0, 0],
    [0, 2, 1, 1, 1, 2, 0],
    [2, 1, 0, 0, 0, 1, 2],
    [2, 1, 0, 2, 0, 1, 2],
    [2, 1, 0, 0, 0, 1, 2],
    [0, 2, 1, 1, 1, 2, 0],
    [0, 0, 2, 2, 2, 0, 0],
];

/// The built-in motif, rescaled to `grid` by nearest-neighbor like the image
/// sampler, emitted as exact reference colors.
fn builtin(grid: usize, palette: &Palette) -> Vec<Rgb> {
    let references: Vec<Rgb> = palette.categories().map(|(_, spec)| spec.reference).collect();
    let pick = |index: usize| references[index.min(references.len() - 1)];

    #[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let motif_index = |i: usize| ((i as f64 + 0.5) / grid as f64 * 7.0) as usize;

    let mut samples = Vec::with_capacity(grid * grid);
    for row in 0..grid {
        for col in 0..grid {
            let motif = CHAKANA[motif_index(row).min(6)][motif_index(col).min(6)];
            samples.push(pick(usize::from(motif)));
        }
    }
    samples
}

/// Uniform random reference colors, one per box.
fn random(grid: usize, palette: &Palette) -> Vec<Rgb> {
    let references: Vec<Rgb> = palette.categories().map(|(_, spec)| spec.reference).collect();
    let mut rng = rand::rng();
    (0..grid * grid)
        .map(|_| references[rng.random_range(0..references.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_reproduces_the_motif_at_native_size() {
        let palette = Palette::reference();
        let samples = builtin(7, &palette);
        assert_eq!(samples.len(), 49);

        // Samples are exact reference colors, so classification recovers
        // the motif indices.
        for (sample, expected) in samples.iter().zip(CHAKANA.iter().flatten()) {
            let category = palette.classify(*sample);
            assert_eq!(category.index(), usize::from(*expected));
        }
    }

    #[test]
    fn test_builtin_rescales_to_other_grids() {
        let palette = Palette::reference();
        assert_eq!(builtin(2, &palette).len(), 4);
        assert_eq!(builtin(11, &palette).len(), 121);
    }

    #[test]
    fn test_random_covers_the_board() {
        let palette = Palette::reference();
        let samples = random(5, &palette);
        assert_eq!(samples.len(), 25);
        let references: Vec<Rgb> = palette
            .categories()
            .map(|(_, spec)| spec.reference)
            .collect();
        assert!(samples.iter().all(|sample| references.contains(sample)));
    }

    #[test]
    fn test_image_sampling_reads_box_centers() {
        // Four 50×50 quadrants of distinct colors.
        let img = image::RgbImage::from_fn(100, 100, |x, y| {
            match (x < 50, y < 50) {
                (true, true) => image::Rgb([235, 244, 228]),
                (false, true) => image::Rgb([255, 230, 153]),
                (true, false) => image::Rgb([191, 143, 0]),
                (false, false) => image::Rgb([10, 20, 30]),
            }
        });
        let samples = sample_rgb_image(&img, 2);
        assert_eq!(
            samples,
            vec![
                Rgb(235, 244, 228),
                Rgb(255, 230, 153),
                Rgb(191, 143, 0),
                Rgb(10, 20, 30),
            ],
        );
    }

    #[test]
    fn test_image_sampling_single_box_takes_the_center_pixel() {
        let img = image::RgbImage::from_fn(9, 9, |x, y| {
            if x == 4 && y == 4 {
                image::Rgb([1, 2, 3])
            } else {
                image::Rgb([200, 200, 200])
            }
        });
        assert_eq!(sample_rgb_image(&img, 1), vec![Rgb(1, 2, 3)]);
    }
}
