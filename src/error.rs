use core::fmt;

/// A positional write addressed an index outside the container.
///
/// The rejected value is handed back so the caller keeps ownership of it.
/// The container is left unchanged.
#[derive(Clone, PartialEq, Eq)]
pub struct OutOfRange<T> {
    pub index: usize,
    /// Length of the container when the write was rejected.
    pub len: usize,
    pub value: T,
}

impl<T> OutOfRange<T> {
    pub(crate) fn new(index: usize, len: usize, value: T) -> Self {
        Self { index, len, value }
    }

    /// Recover the value that was not stored.
    pub fn into_value(self) -> T {
        self.value
    }
}

// The value is left out so `T` needs no `Debug` bound.
impl<T> fmt::Debug for OutOfRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutOfRange")
            .field("index", &self.index)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for OutOfRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of range for container of length {}",
            self.index, self.len
        )
    }
}

impl<T> std::error::Error for OutOfRange<T> {}
