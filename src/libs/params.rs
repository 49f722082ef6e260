use crate::libs::error::{Result, SegmentError};

/// A closed interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

/// When the circular walk stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    /// Stop when the next cursor position has already been visited
    #[default]
    Revisit,
    /// Also stop after the first window that reaches the end of the sequence
    SinglePass,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentParams {
    pub min_length: usize,
    pub max_length: usize,
    /// GC percent
    pub target_gc: Band,
    /// °C
    pub target_tm: Band,
    pub overlap_min: usize,
    pub overlap_max: usize,
    pub max_iterations: usize,
    pub traversal: Traversal,
}

impl Default for SegmentParams {
    fn default() -> Self {
        Self {
            min_length: 20,
            max_length: 50,
            target_gc: Band::new(40.0, 60.0),
            target_tm: Band::new(57.0, 60.0),
            overlap_min: 10,
            overlap_max: 15,
            max_iterations: 10_000,
            traversal: Traversal::Revisit,
        }
    }
}

impl SegmentParams {
    /// Rejects any configuration under which the walk cannot move forward
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| -> Result<()> { Err(SegmentError::InvalidParameter(msg)) };

        if self.min_length == 0 {
            return invalid("min_length must be at least 1".to_string());
        }
        if self.min_length > self.max_length {
            return invalid(format!(
                "min_length ({}) is greater than max_length ({})",
                self.min_length, self.max_length
            ));
        }
        if self.overlap_min > self.overlap_max {
            return invalid(format!(
                "overlap_min ({}) is greater than overlap_max ({})",
                self.overlap_min, self.overlap_max
            ));
        }
        // the cursor advances by length - overlap_length, which must stay positive
        if self.overlap_max >= self.min_length {
            return invalid(format!(
                "overlap_max ({}) must be less than min_length ({})",
                self.overlap_max, self.min_length
            ));
        }
        if self.max_iterations == 0 {
            return invalid("max_iterations must be at least 1".to_string());
        }
        if !self.target_gc.is_valid() {
            return invalid(format!(
                "GC range {}-{} is inverted",
                self.target_gc.min, self.target_gc.max
            ));
        }
        if !self.target_tm.is_valid() {
            return invalid(format!(
                "Tm range {}-{} is inverted",
                self.target_tm.min, self.target_tm.max
            ));
        }

        Ok(())
    }
}
