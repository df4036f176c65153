/// Dense visited bitmap over a `rows x cols` grid, one bit per cell.
///
/// Cells are indexed row-major (`row * cols + col`). Bounds are the caller's
/// job: [`crate::board::grid::GridState`] only hands in-bounds indices here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VisitedSet {
    words: Vec<u64>,
    len: usize,
}

impl VisitedSet {
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(64)],
            len,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        debug_assert!(idx < self.len);
        self.words[idx >> 6] & (1u64 << (idx & 63)) != 0
    }

    #[inline]
    pub fn insert(&mut self, idx: usize) {
        debug_assert!(idx < self.len);
        self.words[idx >> 6] |= 1u64 << (idx & 63);
    }

    #[inline]
    pub fn remove(&mut self, idx: usize) {
        debug_assert!(idx < self.len);
        self.words[idx >> 6] &= !(1u64 << (idx & 63));
    }

    /// Number of set cells.
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}
