//! Nucleotide counting.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nt {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
    N = 4,
    Invalid = 5,
}

/// Case-insensitive base lookup. `U` is read as `T`; IUPAC ambiguity codes are `N`.
pub fn to_nt(base: u8) -> Nt {
    match base {
        b'A' | b'a' => Nt::A,
        b'C' | b'c' => Nt::C,
        b'G' | b'g' => Nt::G,
        b'T' | b't' | b'U' | b'u' => Nt::T,
        b'N' | b'n' | b'R' | b'r' | b'Y' | b'y' | b'S' | b's' | b'W' | b'w' | b'K' | b'k'
        | b'M' | b'm' | b'B' | b'b' | b'D' | b'd' | b'H' | b'h' | b'V' | b'v' => Nt::N,
        _ => Nt::Invalid,
    }
}

/// Counts of A, C, G, T, N
pub fn count_bases(seq: &[u8]) -> [usize; 5] {
    let mut base_cnt = [0usize; 5];
    for &el in seq {
        let nt = to_nt(el);
        if !matches!(nt, Nt::Invalid) {
            base_cnt[nt as usize] += 1;
        }
    }
    base_cnt
}

pub fn gc_count(seq: &[u8]) -> usize {
    let cnt = count_bases(seq);
    cnt[Nt::G as usize] + cnt[Nt::C as usize]
}

pub fn at_count(seq: &[u8]) -> usize {
    let cnt = count_bases(seq);
    cnt[Nt::A as usize] + cnt[Nt::T as usize]
}

/// GC percentage over the whole window length, ambiguity symbols included in the denominator.
///
/// ```
/// use gibsembler::libs::nt::gc_content;
/// assert_eq!(gc_content(b"GGCC"), 100.0);
/// assert_eq!(gc_content(b"ATAT"), 0.0);
/// assert_eq!(gc_content(b""), 0.0);
/// ```
pub fn gc_content(seq: &[u8]) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    gc_count(seq) as f64 / seq.len() as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_count_bases() {
        let cnt = count_bases(b"AACGTTn-");
        assert_eq!(cnt, [2, 1, 1, 2, 1]);
    }

    #[test]
    fn test_gc_content() {
        assert_relative_eq!(gc_content(b"GGCC"), 100.0);
        assert_relative_eq!(gc_content(b"ATAT"), 0.0);
        assert_relative_eq!(gc_content(b""), 0.0);
        assert_relative_eq!(gc_content(b"atgc"), 50.0);
        // N is counted in the length
        assert_relative_eq!(gc_content(b"GCNN"), 50.0);
    }
}
