//! Bit-range arithmetic.
//!
//! Masks exist twice: as `const fn`s over plain integers, and as type-level
//! [`typenum`] numbers computed by [`BitRange`]. Both produce the same bits;
//! the type-level form is what lets [`Update`](crate::reg::Update) carry its
//! mask in its type.

use core::fmt::{Debug, LowerHex};
use core::ops::{Add, BitAnd, BitOr, Not, Shl, Sub};
use typenum::operator_aliases::{Shleft, Sub1, Sum};
use typenum::{IsLess, IsLessOrEqual, True, Unsigned, B1, U1, U16, U32, U64, U8};

/// Raw register value type.
pub trait RegRaw
where
    Self: Sized
        + Debug
        + LowerHex
        + Copy
        + Eq
        + Not<Output = Self>
        + BitAnd<Output = Self>
        + BitOr<Output = Self>
        + 'static,
{
    /// Width of the type in bits as a type-level number.
    type Width: Unsigned;

    /// Width of the type in bits.
    const BITS: u32;

    /// All bits cleared.
    const ZERO: Self;

    /// All bits set.
    const MAX: Self;

    /// Returns `width` consecutive one bits starting at `start`.
    ///
    /// # Panics
    ///
    /// If `start + width` is greater than [`BITS`](RegRaw::BITS).
    fn bit_mask(start: u32, width: u32) -> Self;

    /// Shifts left, yielding zero when `offset` is the full width.
    fn shl_or_zero(self, offset: u32) -> Self;

    /// Shifts right, yielding zero when `offset` is the full width.
    fn shr_or_zero(self, offset: u32) -> Self;
}

/// Conversion of a type-level number into a raw register constant.
pub trait ToRaw<T: RegRaw>: Unsigned {
    /// The number truncated to `T`.
    const RAW: T;
}

/// Returns `width` consecutive one bits starting at `start`, as `T`.
///
/// # Panics
///
/// If `start + width` is greater than the width of `T`.
#[inline]
pub fn bit_mask<T: RegRaw>(start: u32, width: u32) -> T {
    T::bit_mask(start, width)
}

macro_rules! reg_raw {
    ($type:ident, $width:ident, $bit_mask:ident) => {
        #[doc = concat!(
            "Returns a `", stringify!($type), "` with `width` consecutive one ",
            "bits starting at `start`."
        )]
        ///
        /// # Panics
        ///
        /// If `start + width` exceeds the width of the type. Inside a `const`
        /// item this is a compile-time error.
        #[must_use]
        pub const fn $bit_mask(start: u32, width: u32) -> $type {
            assert!(
                width <= <$type>::BITS && start <= <$type>::BITS - width,
                "bit range exceeds the register width"
            );
            if width == 0 {
                0
            } else {
                (<$type>::MAX >> (<$type>::BITS - width)) << start
            }
        }

        impl RegRaw for $type {
            type Width = $width;

            const BITS: u32 = <$type>::BITS;
            const ZERO: Self = 0;
            const MAX: Self = <$type>::MAX;

            #[inline(always)]
            fn bit_mask(start: u32, width: u32) -> Self {
                $bit_mask(start, width)
            }

            #[inline(always)]
            fn shl_or_zero(self, offset: u32) -> Self {
                self.checked_shl(offset).unwrap_or(0)
            }

            #[inline(always)]
            fn shr_or_zero(self, offset: u32) -> Self {
                self.checked_shr(offset).unwrap_or(0)
            }
        }

        impl<U: Unsigned> ToRaw<$type> for U {
            const RAW: $type = U::$width;
        }
    };
}

reg_raw!(u8, U8, bit_mask_u8);
reg_raw!(u16, U16, bit_mask_u16);
reg_raw!(u32, U32, bit_mask_u32);
reg_raw!(u64, U64, bit_mask_u64);

/// A contiguous `(start, width)` range of bits inside a `T` register.
///
/// Implemented for pairs of type-level numbers `(S, W)` whose range fits
/// into `T`. A pair that does not fit has no implementation, which turns an
/// out-of-range field into a compile-time error.
#[diagnostic::on_unimplemented(
    message = "bit range `{Self}` does not fit in a `{T}` register",
    label = "start + width exceeds the register width"
)]
pub trait BitRange<T: RegRaw> {
    /// First bit of the range.
    type Start: Unsigned;

    /// Number of bits in the range.
    type Width: Unsigned;

    /// `1 << Width`, the smallest value that does not fit in the range.
    type Limit: Unsigned;

    /// `Width` one bits at offset zero.
    type Low: ToRaw<T>;

    /// `Width` one bits at offset `Start`.
    type Mask: ToRaw<T>;

    /// First bit of the range.
    const START: u32 = <Self::Start as Unsigned>::U32;

    /// Number of bits in the range.
    const WIDTH: u32 = <Self::Width as Unsigned>::U32;

    /// `WIDTH` one bits at offset zero.
    const LOW: T = <Self::Low as ToRaw<T>>::RAW;

    /// `WIDTH` one bits at offset `START`.
    const MASK: T = <Self::Mask as ToRaw<T>>::RAW;
}

/// Type-level mask of a range: `((1 << W) - 1) << S`.
pub type BitMask<S, W> = Shleft<Sub1<Shleft<U1, W>>, S>;

impl<T, S, W> BitRange<T> for (S, W)
where
    T: RegRaw,
    S: Unsigned + Add<W>,
    W: Unsigned,
    Sum<S, W>: IsLessOrEqual<T::Width, Output = True>,
    U1: Shl<W>,
    Shleft<U1, W>: Unsigned + Sub<B1>,
    Sub1<Shleft<U1, W>>: ToRaw<T> + Shl<S>,
    BitMask<S, W>: ToRaw<T>,
{
    type Start = S;
    type Width = W;
    type Limit = Shleft<U1, W>;
    type Low = Sub1<Shleft<U1, W>>;
    type Mask = BitMask<S, W>;
}

/// A type-level value that fits below `Limit`.
#[diagnostic::on_unimplemented(
    message = "literal `{Self}` does not fit in the field",
    label = "the value has bits set beyond the field width"
)]
pub trait FitsIn<Limit> {}

impl<V, L> FitsIn<L> for V where V: IsLess<L, Output = True> {}
