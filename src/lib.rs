#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod equalize;
pub mod image;

// --- High-level re-exports -------------------------------------------------

// Main entry points: equalizer + results.
pub use crate::equalize::{EqualizeOutcome, EqualizeParams, EqualizeReport, LocalEqualizer};
pub use crate::image::io::GrayImageU8;

/// Small prelude for quick experiments.
///
/// ```no_run
/// use local_histeq::prelude::*;
///
/// # fn main() -> Result<(), String> {
/// let (w, h) = (640usize, 480usize);
/// let gray = vec![0u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &gray };
///
/// let eq = LocalEqualizer::new(EqualizeParams::default());
/// let enhanced = eq.equalize(img)?;
/// println!("{}x{}", enhanced.width(), enhanced.height());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::{EqualizeParams, GrayImageU8, LocalEqualizer};
}
