use super::{RegId, Register};
use core::mem::align_of;

/// Returns a reference to a `T` overlaid on the memory at `address`.
///
/// `T` is normally a [`Register`] or a `#[repr(C)]` struct of registers and
/// [`Reserved`](super::Reserved) gaps describing a peripheral block.
///
/// # Safety
///
/// * `address` must be the address of memory laid out exactly as `T`, valid
///   for volatile reads and writes for the lifetime `'a`.
/// * No other reference to that memory may be alive during `'a`.
///
/// # Panics
///
/// In debug builds, if `address` is not aligned for `T`.
#[inline(always)]
pub unsafe fn place<'a, T>(address: usize) -> &'a mut T {
    debug_assert_eq!(address % align_of::<T>(), 0, "misaligned register address");
    unsafe { &mut *(address as *mut T) }
}

impl<R: RegId> Register<R> {
    /// Returns the register located at `address`.
    ///
    /// # Safety
    ///
    /// See [`place`].
    #[inline(always)]
    pub unsafe fn at<'a>(address: usize) -> &'a mut Self {
        unsafe { place(address) }
    }
}
