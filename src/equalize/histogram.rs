/// Intensity histogram over `[0, levels)` for one neighborhood window.
///
/// Reused across pixels within a worker: `reset`, accumulate the window,
/// then remap the center value through the normalized CDF.
pub(crate) struct IntensityHistogram {
    bins: Vec<u32>,
    count: u32,
}

impl IntensityHistogram {
    pub(crate) fn new(levels: usize) -> Self {
        assert!(levels > 0, "intensity histogram requires at least one bin");
        IntensityHistogram {
            bins: vec![0; levels],
            count: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn bins(&self) -> &[u32] {
        &self.bins
    }

    pub(crate) fn reset(&mut self) {
        self.bins.fill(0);
        self.count = 0;
    }

    /// Count one sample. The caller guarantees `value < levels`.
    #[inline]
    pub(crate) fn accumulate(&mut self, value: u8) {
        self.bins[value as usize] += 1;
        self.count += 1;
    }

    /// Remap `value` through the normalized CDF of the accumulated window:
    /// `cdf[value] * (levels - 1) / cdf[levels - 1]`, truncated toward zero.
    pub(crate) fn equalized_level(&self, value: u8) -> u8 {
        debug_assert!(self.count > 0, "equalized_level on an empty histogram");
        let rank: u32 = self.bins[..=value as usize].iter().sum();
        let top = (self.bins.len() - 1) as f64;
        let scaled = f64::from(rank) * top / f64::from(self.count);
        scaled as u8
    }
}
