//! Reflect padding for neighborhood windows at the image border.
//!
//! Out-of-bounds samples mirror in-bounds samples across the edge without
//! duplicating the edge pixel itself, so a row `[1, 2, 3]` padded by one
//! becomes `[2, 1, 2, 3, 2]`. Border histograms therefore never see
//! synthetic zeros.

use crate::image::{ImageU8, ImageView};

/// Owned copy of an image extended by `pad` mirrored pixels on every side.
///
/// Ephemeral: built at the start of one equalization run and dropped with it.
#[derive(Clone, Debug)]
pub(crate) struct PaddedImage {
    w: usize,
    h: usize,
    data: Vec<u8>,
}

impl PaddedImage {
    /// Extend `src` by `pad` reflected pixels on each side.
    pub(crate) fn reflect(src: &ImageU8<'_>, pad: usize) -> Self {
        assert!(
            src.w > 0 && src.h > 0,
            "reflect padding requires a non-empty image"
        );
        let w = src.w + 2 * pad;
        let h = src.h + 2 * pad;

        // Column mapping is identical for every row; compute it once.
        let col_map: Vec<usize> = (0..w)
            .map(|x| reflect_index(x as isize - pad as isize, src.w))
            .collect();

        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            let sy = reflect_index(y as isize - pad as isize, src.h);
            let row = src.row(sy);
            data.extend(col_map.iter().map(|&sx| row[sx]));
        }
        Self { w, h, data }
    }

    #[inline]
    pub(crate) fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }

    #[cfg(test)]
    pub(crate) fn dims(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    /// Rows of the `size × size` window whose top-left corner sits at padded
    /// coordinate `(x, y)`; for the canonical odd window size this centers
    /// the window on output pixel `(x, y)`.
    #[inline]
    pub(crate) fn window_rows(
        &self,
        x: usize,
        y: usize,
        size: usize,
    ) -> impl Iterator<Item = &[u8]> {
        (y..y + size).map(move |py| &self.row(py)[x..x + size])
    }
}

/// Mirror an out-of-bounds index back into `[0, len)` without repeating the
/// edge sample. Folds repeatedly, so pads larger than the image are valid.
fn reflect_index(i: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let period = 2 * (len as isize - 1);
    let mut m = i.rem_euclid(period);
    if m >= len as isize {
        m = period - m;
    }
    m as usize
}
