use crate::libs::circular::CircularSeq;
use crate::libs::error::{Result, SegmentError};
use crate::libs::nt;
use crate::libs::params::{Band, SegmentParams};
use crate::libs::tm::TmStrategy;

/// A candidate window read from a fixed start position
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    pub sequence: Vec<u8>,
    pub length: usize,
    /// GC percent
    pub gc: f64,
    /// °C
    pub tm: f64,
}

/// Searches `min_length..=max_length` for the shortest window whose GC% and
/// Tm both fall inside their targets.
pub struct WindowOptimizer<'t> {
    pub min_length: usize,
    pub max_length: usize,
    pub target_gc: Band,
    pub target_tm: Band,
    tm: &'t dyn TmStrategy,
}

impl<'t> WindowOptimizer<'t> {
    pub fn new(
        min_length: usize,
        max_length: usize,
        target_gc: Band,
        target_tm: Band,
        tm: &'t dyn TmStrategy,
    ) -> Self {
        Self {
            min_length,
            max_length,
            target_gc,
            target_tm,
            tm,
        }
    }

    pub fn from_params(params: &SegmentParams, tm: &'t dyn TmStrategy) -> Self {
        Self::new(
            params.min_length,
            params.max_length,
            params.target_gc,
            params.target_tm,
            tm,
        )
    }

    /// The first qualifying window in ascending length order. When none
    /// qualifies, the window whose Tm lies closest to the middle of the Tm
    /// target; ties keep the shorter window.
    pub fn optimize(&self, seq: &CircularSeq, start: usize) -> Result<Window> {
        if seq.is_empty() {
            return Err(SegmentError::EmptySequence);
        }
        if start >= seq.len() {
            return Err(SegmentError::InvalidParameter(format!(
                "start ({}) is outside the sequence of length {}",
                start,
                seq.len()
            )));
        }
        if self.min_length == 0 || self.min_length > self.max_length {
            return Err(SegmentError::InvalidParameter(format!(
                "window length range {}-{} is empty",
                self.min_length, self.max_length
            )));
        }

        let target_mid = self.target_tm.midpoint();
        let mut best: Option<Window> = None;

        for length in self.min_length..=self.max_length {
            let sequence = seq.window(start, length);
            let gc = nt::gc_content(&sequence);
            let tm = self.tm.compute_tm(&sequence);

            if self.target_gc.contains(gc) && self.target_tm.contains(tm) {
                return Ok(Window {
                    sequence,
                    length,
                    gc,
                    tm,
                });
            }

            let closer = match &best {
                None => true,
                Some(b) => (tm - target_mid).abs() < (b.tm - target_mid).abs(),
            };
            if closer {
                best = Some(Window {
                    sequence,
                    length,
                    gc,
                    tm,
                });
            }
        }

        // the length range is non-empty, so at least one window was tracked
        best.ok_or_else(|| SegmentError::InvalidParameter("no window evaluated".to_string()))
    }
}
