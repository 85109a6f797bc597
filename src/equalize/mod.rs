//! Local histogram equalization.
//!
//! For every output pixel the equalizer histograms the intensities of a
//! small window centered on that pixel, builds the cumulative distribution
//! function and remaps the pixel through the normalized CDF. Borders draw
//! their windows from reflect-padded samples.
//!
//! Pixels are independent, so the remap is parallelized over output rows;
//! each worker owns its histogram buffer and writes a disjoint row.

mod histogram;
mod padding;

use crate::image::io::GrayImageU8;
use crate::image::{ImageU8, ImageView};
use histogram::IntensityHistogram;
use log::debug;
use padding::PaddedImage;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Parameters of the local equalization transform.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EqualizeParams {
    /// Side length of the square neighborhood window, in pixels (>= 1).
    ///
    /// Odd sizes center the window on the target pixel. Even sizes are
    /// accepted and keep the exact `size / 2` padding rule, which anchors
    /// the window half a pixel up and to the left.
    pub neighborhood_size: usize,
    /// Number of discrete intensity levels (histogram bins). Samples are
    /// stored as `u8`, so at most 256.
    pub levels: usize,
}

impl Default for EqualizeParams {
    fn default() -> Self {
        Self {
            neighborhood_size: 3,
            levels: 256,
        }
    }
}

/// Serializable summary of one equalization run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct EqualizeReport {
    pub width: usize,
    pub height: usize,
    pub neighborhood_size: usize,
    pub levels: usize,
    /// Reflect padding applied on each side (`neighborhood_size / 2`).
    pub pad: usize,
    pub elapsed_ms: f64,
    pub elapsed_pad_ms: f64,
}

/// Enhanced image together with the run report.
#[derive(Clone, Debug)]
pub struct EqualizeOutcome {
    pub enhanced: GrayImageU8,
    pub report: EqualizeReport,
}

/// Neighborhood-based histogram equalizer for 8-bit grayscale images.
#[derive(Clone, Debug)]
pub struct LocalEqualizer {
    params: EqualizeParams,
}

impl LocalEqualizer {
    pub fn new(params: EqualizeParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EqualizeParams {
        &self.params
    }

    /// Equalize `image`, returning a freshly allocated buffer of the same
    /// shape. Pure: the input is only read.
    pub fn equalize(&self, image: ImageU8<'_>) -> Result<GrayImageU8, String> {
        Ok(self.equalize_with_diagnostics(image)?.enhanced)
    }

    /// Equalize `image` and report per-stage timings alongside the result.
    pub fn equalize_with_diagnostics(
        &self,
        image: ImageU8<'_>,
    ) -> Result<EqualizeOutcome, String> {
        self.validate(&image)?;
        let EqualizeParams {
            neighborhood_size: size,
            levels,
        } = self.params;
        let (w, h) = (image.w, image.h);
        let pad = size / 2;

        let t0 = Instant::now();
        let padded = PaddedImage::reflect(&image, pad);
        let elapsed_pad_ms = t0.elapsed().as_secs_f64() * 1e3;
        debug!("LocalEqualizer::equalize {w}x{h} size={size} levels={levels} pad={pad}");

        let mut out = vec![0u8; w * h];
        out.par_chunks_mut(w).enumerate().for_each(|(y, dst_row)| {
            let mut hist = IntensityHistogram::new(levels);
            for (x, dst) in dst_row.iter_mut().enumerate() {
                hist.reset();
                for row in padded.window_rows(x, y, size) {
                    for &v in row {
                        hist.accumulate(v);
                    }
                }
                *dst = hist.equalized_level(image.get(x, y));
            }
        });

        let report = EqualizeReport {
            width: w,
            height: h,
            neighborhood_size: size,
            levels,
            pad,
            elapsed_ms: t0.elapsed().as_secs_f64() * 1e3,
            elapsed_pad_ms,
        };
        Ok(EqualizeOutcome {
            enhanced: GrayImageU8::new(w, h, out),
            report,
        })
    }

    fn validate(&self, image: &ImageU8<'_>) -> Result<(), String> {
        let EqualizeParams {
            neighborhood_size,
            levels,
        } = self.params;
        if neighborhood_size == 0 {
            return Err("neighborhood_size must be at least 1".to_string());
        }
        if levels == 0 {
            return Err("levels must be at least 1".to_string());
        }
        if levels > 256 {
            return Err(format!(
                "levels must fit 8-bit samples (at most 256), got {levels}"
            ));
        }
        if image.w == 0 || image.h == 0 {
            return Err(format!(
                "input image is empty ({}x{})",
                image.w, image.h
            ));
        }
        if image.stride < image.w {
            return Err(format!(
                "image stride {} is smaller than width {}",
                image.stride, image.w
            ));
        }
        for (y, row) in image.rows().enumerate() {
            if let Some(x) = row.iter().position(|&v| (v as usize) >= levels) {
                return Err(format!(
                    "sample {} at ({x}, {y}) is outside [0, {}]",
                    row[x],
                    levels - 1
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{EqualizeParams, LocalEqualizer};
    use crate::image::ImageU8;

    fn image_3x3(data: &[u8; 9]) -> ImageU8<'_> {
        ImageU8 {
            w: 3,
            h: 3,
            stride: 3,
            data,
        }
    }

    #[test]
    fn rejects_zero_neighborhood() {
        let data = [0u8; 9];
        let eq = LocalEqualizer::new(EqualizeParams {
            neighborhood_size: 0,
            levels: 256,
        });
        let err = eq.equalize(image_3x3(&data)).unwrap_err();
        assert!(err.contains("neighborhood_size"), "{err}");
    }

    #[test]
    fn rejects_bad_level_counts() {
        let data = [0u8; 9];
        for levels in [0usize, 257] {
            let eq = LocalEqualizer::new(EqualizeParams {
                neighborhood_size: 3,
                levels,
            });
            let err = eq.equalize(image_3x3(&data)).unwrap_err();
            assert!(err.contains("levels"), "{err}");
        }
    }

    #[test]
    fn rejects_empty_image() {
        let eq = LocalEqualizer::new(EqualizeParams::default());
        let img = ImageU8 {
            w: 0,
            h: 0,
            stride: 0,
            data: &[],
        };
        let err = eq.equalize(img).unwrap_err();
        assert!(err.contains("empty"), "{err}");
    }

    #[test]
    fn rejects_out_of_range_samples() {
        let data = [0u8, 1, 2, 3, 9, 5, 6, 7, 8];
        let eq = LocalEqualizer::new(EqualizeParams {
            neighborhood_size: 3,
            levels: 9,
        });
        let err = eq.equalize(image_3x3(&data)).unwrap_err();
        assert!(err.contains("(1, 1)"), "{err}");
        assert!(err.contains("outside [0, 8]"), "{err}");
    }

    #[test]
    fn even_window_keeps_integer_division_padding() {
        // size = 2, pad = 1: the window covers the pixel and its up-left
        // neighbors in the padded grid.
        let data = [0u8, 1, 2, 3];
        let img = ImageU8 {
            w: 2,
            h: 2,
            stride: 2,
            data: &data,
        };
        let eq = LocalEqualizer::new(EqualizeParams {
            neighborhood_size: 2,
            levels: 4,
        });
        let out = eq.equalize(img).expect("even window accepted");
        // (0,0): window {3,2,1,0}, rank(0) = 1 -> 1 * 3 / 4 -> 0
        assert_eq!(out.get(0, 0), 0);
        // (1,1): window {0,1,2,3}, rank(3) = 4 -> 3
        assert_eq!(out.get(1, 1), 3);
    }
}
