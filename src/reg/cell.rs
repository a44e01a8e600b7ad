use crate::bits::RegRaw;
use core::cell::UnsafeCell;
use core::ptr::{read_volatile, write_volatile};

/// Storage of a register value.
pub trait RegCell {
    /// Raw integer type of the stored value.
    type Raw: RegRaw;

    /// Reads the stored value.
    fn load(&self) -> Self::Raw;

    /// Replaces the stored value.
    fn store(&self, raw: Self::Raw);
}

/// A word accessed only with volatile reads and writes.
///
/// Has the size and alignment of `T`.
#[repr(transparent)]
pub struct VolatileCell<T> {
    value: UnsafeCell<T>,
}

impl<T> VolatileCell<T> {
    /// Creates a cell holding `value`.
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self { value: UnsafeCell::new(value) }
    }
}

impl<T: RegRaw> RegCell for VolatileCell<T> {
    type Raw = T;

    #[inline(always)]
    fn load(&self) -> T {
        unsafe { read_volatile(self.value.get()) }
    }

    #[inline(always)]
    fn store(&self, raw: T) {
        unsafe { write_volatile(self.value.get(), raw) };
    }
}

impl<C: RegCell + ?Sized> RegCell for &C {
    type Raw = C::Raw;

    #[inline(always)]
    fn load(&self) -> Self::Raw {
        (**self).load()
    }

    #[inline(always)]
    fn store(&self, raw: Self::Raw) {
        (**self).store(raw);
    }
}
