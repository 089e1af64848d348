use crate::error::Result;

/// Fixed-resolution table of scalar samples over the normalized `[0, 1]` range.
///
/// Sample `i` holds the value at `a_i = i / (resolution - 1)`. The table is
/// dirty from construction until the first successful [`rebuild`](Self::rebuild)
/// and again after every [`invalidate`](Self::invalidate).
#[derive(Debug, Clone)]
pub(crate) struct HeightCache {
    samples: Vec<f64>,
    dirty: bool,
}

impl HeightCache {
    /// `resolution` must be at least 2.
    pub(crate) fn new(resolution: usize) -> Self {
        debug_assert!(resolution >= 2);
        Self {
            samples: vec![0.0; resolution],
            dirty: true,
        }
    }

    pub(crate) fn resolution(&self) -> usize {
        self.samples.len()
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Normalized parameter of sample `index`.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn sample_parameter(&self, index: usize) -> f64 {
        index as f64 / (self.samples.len() - 1) as f64
    }

    /// Refills every sample from `sample_fn` and clears the dirty flag.
    ///
    /// On error the cache stays dirty.
    pub(crate) fn rebuild<F>(&mut self, mut sample_fn: F) -> Result<()>
    where
        F: FnMut(f64) -> Result<f64>,
    {
        for i in 0..self.samples.len() {
            let a = self.sample_parameter(i);
            self.samples[i] = sample_fn(a)?;
        }
        self.dirty = false;
        Ok(())
    }

    /// Nearest sample to `a`, or `None` while dirty.
    ///
    /// `a` is clamped to `[0, 1]`.
    pub(crate) fn lookup(&self, a: f64) -> Option<f64> {
        if self.dirty {
            return None;
        }
        Some(self.samples[self.index_of(a)])
    }

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn index_of(&self, a: f64) -> usize {
        let last = self.samples.len() - 1;
        let scaled = (a.clamp(0.0, 1.0) * last as f64).round();
        (scaled as usize).min(last)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::CurveError;

    #[test]
    fn new_cache_is_dirty_and_unreadable() {
        let cache = HeightCache::new(5);
        assert!(cache.is_dirty());
        assert_eq!(cache.lookup(0.5), None);
    }

    #[test]
    fn rebuild_samples_evenly_spaced_parameters() {
        let mut cache = HeightCache::new(5);
        let mut seen = Vec::new();
        cache
            .rebuild(|a| {
                seen.push(a);
                Ok(a * 10.0)
            })
            .unwrap();
        assert_eq!(seen, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert!(!cache.is_dirty());
        assert_eq!(cache.lookup(0.5), Some(5.0));
    }

    #[test]
    fn lookup_rounds_to_nearest_sample() {
        let mut cache = HeightCache::new(5);
        cache.rebuild(|a| Ok(a)).unwrap();
        assert_eq!(cache.lookup(0.1), Some(0.0));
        assert_eq!(cache.lookup(0.13), Some(0.25));
        assert_eq!(cache.lookup(0.9), Some(1.0));
    }

    #[test]
    fn lookup_clamps_out_of_range_parameters() {
        let mut cache = HeightCache::new(3);
        cache.rebuild(|a| Ok(a + 1.0)).unwrap();
        assert_eq!(cache.lookup(-4.0), Some(1.0));
        assert_eq!(cache.lookup(7.0), Some(2.0));
    }

    #[test]
    fn failed_rebuild_leaves_cache_dirty() {
        let mut cache = HeightCache::new(3);
        let result = cache.rebuild(|_| Err(CurveError::Precomposition { count: 0 }.into()));
        assert!(result.is_err());
        assert!(cache.is_dirty());
    }

    #[test]
    fn invalidate_marks_dirty_again() {
        let mut cache = HeightCache::new(2);
        cache.rebuild(|_| Ok(0.0)).unwrap();
        cache.invalidate();
        assert!(cache.is_dirty());
        assert_eq!(cache.resolution(), 2);
    }
}
