use super::VolatileCell;
use crate::bits::RegRaw;

/// `N` inaccessible words of type `T` inside a register block.
///
/// Keeps the following registers at their hardware offsets in a
/// `#[repr(C)]` block struct.
#[repr(transparent)]
pub struct Reserved<T, const N: usize> {
    _words: [VolatileCell<T>; N],
}

impl<T: RegRaw, const N: usize> Reserved<T, N> {
    /// Creates zeroed reserved words.
    #[inline(always)]
    pub const fn new() -> Self {
        Self { _words: [const { VolatileCell::new(T::ZERO) }; N] }
    }
}

impl<T: RegRaw, const N: usize> Default for Reserved<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::size_of;

    #[test]
    fn size_of_reserved() {
        assert_eq!(size_of::<Reserved<u32, 0>>(), 0);
        assert_eq!(size_of::<Reserved<u32, 3>>(), 12);
        assert_eq!(size_of::<Reserved<u16, 5>>(), 10);
    }
}
