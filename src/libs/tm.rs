//! Melting-temperature estimates.
//!
//! Both estimators implement [`TmStrategy`], so the window optimizer and the
//! segmenter never know which one is in use.

use itertools::Itertools;
use std::str::FromStr;

use crate::libs::nt;

const GAS_CONSTANT: f64 = 1.987; // cal/(K·mol)

pub trait TmStrategy {
    /// Melting temperature of `window` in °C
    fn compute_tm(&self, window: &[u8]) -> f64;
}

/// Wallace rule: `2 × (A + T) + 4 × (G + C)`
///
/// ```
/// use gibsembler::libs::tm::{TmStrategy, Wallace};
/// assert_eq!(Wallace.compute_tm(b"AAAA"), 8.0);
/// assert_eq!(Wallace.compute_tm(b"GGGG"), 16.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Wallace;

impl TmStrategy for Wallace {
    fn compute_tm(&self, window: &[u8]) -> f64 {
        (2 * nt::at_count(window) + 4 * nt::gc_count(window)) as f64
    }
}

/// Two-state nearest-neighbor model with SantaLucia (1998) unified parameters
/// and the SantaLucia sodium correction on entropy.
#[derive(Debug, Clone, Copy)]
pub struct NearestNeighbor {
    /// Monovalent cation concentration, mol/L
    pub na: f64,
    /// Total strand concentration, mol/L
    pub strand_conc: f64,
}

impl Default for NearestNeighbor {
    fn default() -> Self {
        Self {
            na: 0.05,
            strand_conc: 250e-9,
        }
    }
}

// (ΔH kcal/mol, ΔS cal/(K·mol)) for the 5'->3' dinucleotide
fn nn_params(a: u8, b: u8) -> Option<(f64, f64)> {
    let p = match (a, b) {
        (b'A', b'A') | (b'T', b'T') => (-7.9, -22.2),
        (b'A', b'T') => (-7.2, -20.4),
        (b'T', b'A') => (-7.2, -21.3),
        (b'C', b'A') | (b'T', b'G') => (-8.5, -22.7),
        (b'G', b'T') | (b'A', b'C') => (-8.4, -22.4),
        (b'C', b'T') | (b'A', b'G') => (-7.8, -21.0),
        (b'G', b'A') | (b'T', b'C') => (-8.2, -22.2),
        (b'C', b'G') => (-10.6, -27.2),
        (b'G', b'C') => (-9.8, -24.4),
        (b'G', b'G') | (b'C', b'C') => (-8.0, -19.9),
        _ => return None,
    };
    Some(p)
}

fn init_params(terminal: u8) -> (f64, f64) {
    match terminal {
        b'G' | b'C' => (0.1, -2.8),
        _ => (2.3, 4.1),
    }
}

fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        other => other,
    }
}

fn is_self_complementary(seq: &[u8]) -> bool {
    seq.iter()
        .zip(seq.iter().rev())
        .all(|(&a, &b)| a == complement(b))
}

impl TmStrategy for NearestNeighbor {
    fn compute_tm(&self, window: &[u8]) -> f64 {
        let seq: Vec<u8> = window.iter().map(|b| b.to_ascii_uppercase()).collect();
        let valid: Vec<u8> = seq
            .iter()
            .copied()
            .filter(|b| matches!(b, b'A' | b'C' | b'G' | b'T'))
            .collect();
        if valid.len() < 2 {
            return 0.0;
        }

        let (mut dh, mut ds) = seq
            .iter()
            .tuple_windows()
            .filter_map(|(&a, &b)| nn_params(a, b))
            .fold((0.0, 0.0), |(h, s), (dh, ds)| (h + dh, s + ds));

        for terminal in [valid[0], valid[valid.len() - 1]] {
            let (h, s) = init_params(terminal);
            dh += h;
            ds += s;
        }

        let factor = if is_self_complementary(&valid) {
            ds += -1.4;
            1.0
        } else {
            4.0
        };

        ds += 0.368 * (valid.len() - 1) as f64 * self.na.ln();

        1000.0 * dh / (ds + GAS_CONSTANT * (self.strand_conc / factor).ln()) - 273.15
    }
}

/// Selects an estimator by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TmMethod {
    #[default]
    Wallace,
    NearestNeighbor,
}

impl TmMethod {
    pub fn strategy(&self) -> Box<dyn TmStrategy> {
        match self {
            TmMethod::Wallace => Box::new(Wallace),
            TmMethod::NearestNeighbor => Box::new(NearestNeighbor::default()),
        }
    }
}

impl FromStr for TmMethod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wallace" => Ok(TmMethod::Wallace),
            "nn" | "nearest-neighbor" => Ok(TmMethod::NearestNeighbor),
            _ => Err(anyhow::anyhow!("Unknown Tm method: {}", s)),
        }
    }
}
