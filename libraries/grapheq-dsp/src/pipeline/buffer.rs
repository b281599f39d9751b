/// Fixed-capacity buffer with a sliding `(offset, len)` window
///
/// Allocated once and never resized. `compact` moves the live window to the
/// front so the spare tail can be refilled.
#[derive(Debug)]
pub(crate) struct Window<T> {
    data: Box<[T]>,
    offset: usize,
    len: usize,
}

impl<T: Copy + Default> Window<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![T::default(); capacity].into_boxed_slice(),
            offset: 0,
            len: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Room after the window
    pub(crate) fn spare_len(&self) -> usize {
        self.capacity() - self.offset - self.len
    }

    pub(crate) fn is_full(&self) -> bool {
        self.spare_len() == 0
    }

    pub(crate) fn filled(&self) -> &[T] {
        &self.data[self.offset..self.offset + self.len]
    }

    pub(crate) fn spare_mut(&mut self) -> &mut [T] {
        let end = self.offset + self.len;
        &mut self.data[end..]
    }

    /// Extend the window over `n` elements written into `spare_mut`
    pub(crate) fn commit(&mut self, n: usize) {
        debug_assert!(n <= self.spare_len());
        self.len += n;
    }

    /// Drop `n` elements from the front of the window
    pub(crate) fn consume(&mut self, n: usize) {
        debug_assert!(n <= self.len);
        self.offset += n;
        self.len -= n;
    }

    pub(crate) fn clear(&mut self) {
        self.offset = 0;
        self.len = 0;
    }

    pub(crate) fn compact(&mut self) {
        if self.offset != 0 && self.len > 0 {
            self.data
                .copy_within(self.offset..self.offset + self.len, 0);
        }
        self.offset = 0;
    }
}
