/// A read-only view over a sequence addressed modulo its length
#[derive(Debug, Clone, Copy)]
pub struct CircularSeq<'a> {
    seq: &'a [u8],
}

impl<'a> CircularSeq<'a> {
    pub fn new(seq: &'a [u8]) -> Self {
        Self { seq }
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.seq
    }

    /// `length` symbols starting at `start`, wrapping around the origin as many
    /// times as needed.
    ///
    /// ```
    /// use gibsembler::libs::circular::CircularSeq;
    /// let seq = CircularSeq::new(b"ACGT");
    /// assert_eq!(seq.window(1, 2), b"CG");
    /// assert_eq!(seq.window(3, 3), b"TAC");
    /// assert_eq!(seq.window(2, 9), b"GTACGTACG");
    /// ```
    pub fn window(&self, start: usize, length: usize) -> Vec<u8> {
        let len = self.seq.len();
        if len == 0 || length == 0 {
            return vec![];
        }
        let start = start % len;
        if start + length <= len {
            return self.seq[start..start + length].to_vec();
        }

        let mut out = Vec::with_capacity(length);
        out.extend_from_slice(&self.seq[start..]);
        while out.len() < length {
            let take = std::cmp::min(len, length - out.len());
            out.extend_from_slice(&self.seq[..take]);
        }
        out
    }

    /// The `length` symbols immediately preceding `end`, read circularly
    pub fn preceding(&self, end: usize, length: usize) -> Vec<u8> {
        let len = self.seq.len();
        if len == 0 || length == 0 {
            return vec![];
        }
        let end = end % len;
        let start = (end + len - length % len) % len;
        self.window(start, length)
    }
}
