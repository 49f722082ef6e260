//! Circular traversal that stitches optimized windows into overlapping
//! segments.
//!
//! The cursor starts at 0. Each step asks [`WindowOptimizer`] for a window,
//! takes the tail of that window as the overlap with the next segment, and
//! moves the cursor to the start of the overlap. The walk closes when the
//! cursor lands on a position it has already started a segment from.

use std::collections::HashSet;

use crate::libs::circular::CircularSeq;
use crate::libs::error::{Result, SegmentError};
use crate::libs::params::{SegmentParams, Traversal};
use crate::libs::tm::TmStrategy;
use crate::libs::window::WindowOptimizer;

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// 0-based offset of the first symbol
    pub start: usize,
    pub sequence: Vec<u8>,
    pub length: usize,
    pub gc: f64,
    pub tm: f64,
    /// The last `overlap_length` symbols of `sequence`
    pub overlap: Vec<u8>,
    pub overlap_length: usize,
}

impl Segment {
    pub fn sequence_str(&self) -> String {
        String::from_utf8_lossy(&self.sequence).into_owned()
    }

    pub fn overlap_str(&self) -> String {
        String::from_utf8_lossy(&self.overlap).into_owned()
    }

    /// Segment text with the trailing overlap wrapped in brackets
    ///
    /// ```
    /// use gibsembler::libs::segment::Segment;
    /// let seg = Segment {
    ///     start: 0,
    ///     sequence: b"ACGTGGCC".to_vec(),
    ///     length: 8,
    ///     gc: 75.0,
    ///     tm: 28.0,
    ///     overlap: b"GGCC".to_vec(),
    ///     overlap_length: 4,
    /// };
    /// assert_eq!(seg.highlighted(), "ACGT[GGCC]");
    /// ```
    pub fn highlighted(&self) -> String {
        if self.overlap.is_empty() {
            return self.sequence_str();
        }
        let body = self.sequence.len().saturating_sub(self.overlap.len());
        format!(
            "{}[{}]",
            String::from_utf8_lossy(&self.sequence[..body]),
            self.overlap_str()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The cursor returned to a visited position
    Closed,
    /// The input had no symbols
    Empty,
    /// `max_iterations` was reached first; segments are partial
    LoopGuard,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segmentation {
    pub segments: Vec<Segment>,
    /// Number of optimizer calls
    pub iterations: usize,
    pub status: Status,
}

impl Segmentation {
    pub fn guard_tripped(&self) -> bool {
        self.status == Status::LoopGuard
    }

    /// Turns a loop-guard trip into an error when `strict` is set
    pub fn into_checked(self, strict: bool) -> Result<Self> {
        if strict && self.guard_tripped() {
            return Err(SegmentError::LoopGuardExceeded {
                iterations: self.iterations,
            });
        }
        Ok(self)
    }
}

/// Segments `seq` as a circular molecule.
///
/// Configuration errors are reported before any window is evaluated. An empty
/// sequence yields no segments with [`Status::Empty`].
pub fn segment(seq: &[u8], params: &SegmentParams, tm: &dyn TmStrategy) -> Result<Segmentation> {
    params.validate()?;

    let circ = CircularSeq::new(seq);
    if circ.is_empty() {
        log::warn!("Empty sequence, nothing to segment");
        return Ok(Segmentation {
            segments: vec![],
            iterations: 0,
            status: Status::Empty,
        });
    }

    let len = circ.len();
    let optimizer = WindowOptimizer::from_params(params, tm);

    let mut segments = vec![];
    let mut visited: HashSet<usize> = HashSet::new();
    let mut iterations = 0usize;
    let mut i = 0usize;
    let mut passed_origin = false;

    while !visited.contains(&i) && iterations < params.max_iterations {
        let window = optimizer.optimize(&circ, i)?;
        let end = (i + window.length) % len;

        let overlap_length = (window.length / 2).clamp(params.overlap_min, params.overlap_max);
        let mut overlap = circ.preceding(end, overlap_length);
        overlap.truncate(params.overlap_max);

        log::debug!(
            "segment {}: start {}, length {}, GC {:.2}, Tm {:.2}",
            segments.len() + 1,
            i,
            window.length,
            window.gc,
            window.tm
        );

        if i + window.length >= len {
            passed_origin = true;
        }
        let length = window.length;
        segments.push(Segment {
            start: i,
            sequence: window.sequence,
            length,
            gc: window.gc,
            tm: window.tm,
            overlap_length: overlap.len(),
            overlap,
        });

        visited.insert(i);
        i = (i + length - overlap_length) % len;
        iterations += 1;

        if passed_origin && params.traversal == Traversal::SinglePass {
            break;
        }
    }

    let closed = visited.contains(&i) || (passed_origin && params.traversal == Traversal::SinglePass);
    let status = if closed {
        Status::Closed
    } else {
        log::warn!(
            "Loop guard tripped after {} iterations at cursor {}; returning {} partial segments",
            iterations,
            i,
            segments.len()
        );
        Status::LoopGuard
    };

    log::info!(
        "{} segments from {} bp in {} iterations",
        segments.len(),
        len,
        iterations
    );

    Ok(Segmentation {
        segments,
        iterations,
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::params::Band;
    use crate::libs::tm::{NearestNeighbor, Wallace};

    const ATGC44: &[u8] = b"ATGCATGCATGCATGCATGCATGCATGCATGCATGCATGCATGC";

    fn open_params() -> SegmentParams {
        SegmentParams {
            min_length: 20,
            max_length: 30,
            target_gc: Band::new(0.0, 100.0),
            target_tm: Band::new(0.0, 200.0),
            overlap_min: 10,
            overlap_max: 12,
            ..Default::default()
        }
    }

    #[test]
    fn test_first_segment() {
        let result = segment(ATGC44, &open_params(), &Wallace).unwrap();
        let first = &result.segments[0];
        assert_eq!(first.start, 0);
        assert_eq!(first.length, 20);
        assert_eq!(first.overlap_length, 10);
        assert_eq!(first.overlap, b"GCATGCATGC");
        assert_eq!(first.overlap, &first.sequence[10..]);
    }

    #[test]
    fn test_revisit_closes() {
        let result = segment(ATGC44, &open_params(), &Wallace).unwrap();
        assert_eq!(result.status, Status::Closed);
        // the cursor steps by 10 modulo 44, visiting every even offset once
        assert_eq!(result.segments.len(), 22);
        assert_eq!(result.iterations, 22);
        let starts: Vec<usize> = result.segments.iter().map(|s| s.start).collect();
        assert_eq!(&starts[..6], &[0, 10, 20, 30, 40, 6]);
        let unique: HashSet<usize> = starts.iter().copied().collect();
        assert_eq!(unique.len(), starts.len());
    }

    #[test]
    fn test_single_pass() {
        let params = SegmentParams {
            traversal: Traversal::SinglePass,
            ..open_params()
        };
        let result = segment(ATGC44, &params, &Wallace).unwrap();
        assert_eq!(result.status, Status::Closed);
        let starts: Vec<usize> = result.segments.iter().map(|s| s.start).collect();
        assert_eq!(starts, vec![0, 10, 20, 30]);

        // the last window wraps to the head
        let last = result.segments.last().unwrap();
        assert_eq!(last.sequence, [&ATGC44[30..], &ATGC44[..6]].concat());
        assert_eq!(last.overlap, [&ATGC44[40..], &ATGC44[..6]].concat());
    }

    #[test]
    fn test_segment_invariants() {
        let seq: Vec<u8> = b"ATGCGCGTTAGCATCGATCGGGCTAGCTAGGATCCAAATTTGGGCCCATATATG"
            .iter()
            .cycle()
            .take(500)
            .copied()
            .collect();
        let params = SegmentParams::default();
        let nn = NearestNeighbor::default();
        let strategies: [&dyn TmStrategy; 2] = [&Wallace, &nn];
        for tm in strategies {
            let result = segment(&seq, &params, tm).unwrap();
            assert!(result.iterations <= params.max_iterations);
            for seg in &result.segments {
                assert!(seg.start < seq.len());
                assert!(seg.length >= params.min_length && seg.length <= params.max_length);
                assert!(seg.overlap_length >= params.overlap_min);
                assert!(seg.overlap_length <= params.overlap_max);
                assert!(seg.overlap_length <= seg.length);
                assert_eq!(seg.overlap.len(), seg.overlap_length);
                assert_eq!(seg.sequence.len(), seg.length);
                assert_eq!(seg.overlap, &seg.sequence[seg.length - seg.overlap_length..]);
            }
        }
    }

    #[test]
    fn test_consecutive_segments_share_overlap() {
        let seq: Vec<u8> = b"GATTACAGGCCTTAAGCGCATATCGATGCCGGTA"
            .iter()
            .cycle()
            .take(300)
            .copied()
            .collect();
        let params = SegmentParams {
            traversal: Traversal::SinglePass,
            ..Default::default()
        };
        let result = segment(&seq, &params, &Wallace).unwrap();
        for pair in result.segments.windows(2) {
            let head = &pair[1].sequence[..pair[0].overlap_length];
            assert_eq!(head, &pair[0].overlap[..]);
        }
    }

    #[test]
    fn test_loop_guard() {
        let params = SegmentParams {
            max_iterations: 5,
            ..open_params()
        };
        let result = segment(ATGC44, &params, &Wallace).unwrap();
        assert_eq!(result.status, Status::LoopGuard);
        assert!(result.guard_tripped());
        assert_eq!(result.segments.len(), 5);
        assert_eq!(result.iterations, 5);

        assert_eq!(
            result.clone().into_checked(true),
            Err(SegmentError::LoopGuardExceeded { iterations: 5 })
        );
        assert!(result.into_checked(false).is_ok());
    }

    #[test]
    fn test_guard_at_exact_closure_is_closed() {
        let params = SegmentParams {
            max_iterations: 22,
            ..open_params()
        };
        let result = segment(ATGC44, &params, &Wallace).unwrap();
        assert_eq!(result.status, Status::Closed);
    }

    #[test]
    fn test_empty_sequence() {
        let result = segment(b"", &SegmentParams::default(), &Wallace).unwrap();
        assert_eq!(result.status, Status::Empty);
        assert!(result.segments.is_empty());
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_invalid_before_traversal() {
        struct Panicking;
        impl TmStrategy for Panicking {
            fn compute_tm(&self, _window: &[u8]) -> f64 {
                panic!("traversal started")
            }
        }
        let params = SegmentParams {
            min_length: 15,
            max_length: 30,
            overlap_min: 10,
            overlap_max: 20,
            ..Default::default()
        };
        assert!(matches!(
            segment(ATGC44, &params, &Panicking),
            Err(SegmentError::InvalidParameter(_))
        ));
        // also rejected for an empty input
        assert!(segment(b"", &params, &Panicking).is_err());
    }

    #[test]
    fn test_short_sequence_wraps() {
        let params = SegmentParams {
            min_length: 8,
            max_length: 10,
            overlap_min: 2,
            overlap_max: 3,
            target_gc: Band::new(0.0, 100.0),
            target_tm: Band::new(0.0, 200.0),
            ..Default::default()
        };
        let result = segment(b"ACGTA", &params, &Wallace).unwrap();
        assert_eq!(result.status, Status::Closed);
        let first = &result.segments[0];
        assert_eq!(first.sequence, b"ACGTAACG");
        assert_eq!(first.overlap_length, 3);
        assert_eq!(first.overlap, b"ACG");
    }

    #[test]
    fn test_deterministic() {
        let params = SegmentParams::default();
        let seq: Vec<u8> = ATGC44.iter().cycle().take(400).copied().collect();
        let a = segment(&seq, &params, &Wallace).unwrap();
        let b = segment(&seq, &params, &Wallace).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_highlighted() {
        let result = segment(ATGC44, &open_params(), &Wallace).unwrap();
        let first = &result.segments[0];
        // the overlap also occurs at offset 2; only the tail is marked
        assert_eq!(first.highlighted(), "ATGCATGCAT[GCATGCATGC]");
    }
}
