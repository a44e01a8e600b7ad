use super::{RegId, Update};
use crate::bits::{BitRange, FitsIn, RegRaw, ToRaw};
use core::fmt;
use core::marker::PhantomData;
use core::ops::Shl;
use typenum::operator_aliases::Shleft;
use typenum::{Unsigned, U1};

/// Update produced by the field `Field<R, S, W>`.
pub type FieldUpdate<R, S, W> =
    Update<R, <(S, W) as BitRange<<R as RegId>::Raw>>::Mask>;

/// Descriptor of the `W` bits starting at bit `S` of the register `R`.
///
/// A field is stateless. It produces [`Update`]s for its bits and decodes its
/// bits out of a raw register value. Creating a field whose range does not
/// fit into `R::Raw` is rejected at compile time.
pub struct Field<R, S, W> {
    marker: PhantomData<(R, S, W)>,
}

/// A field with all of its parameters known.
///
/// [`Register::read`](super::Register::read) and
/// [`Register::is_set`](super::Register::is_set) accept any `FieldSpec`, so
/// the bit range is only checked once the field type is fully resolved.
pub trait FieldSpec: Copy {
    /// Register the field belongs to.
    type Reg: RegId;

    /// Number of bits in the field as a type-level number.
    type Width: Unsigned;

    /// First bit of the field.
    const START: u32;

    /// Number of bits in the field.
    const WIDTH: u32;

    /// Bits of the register covered by the field.
    const MASK: <Self::Reg as RegId>::Raw;

    /// Extracts the field value from the raw register value `raw`.
    fn decode(self, raw: <Self::Reg as RegId>::Raw) -> <Self::Reg as RegId>::Raw;
}

impl<R, S, W> Field<R, S, W>
where
    R: RegId,
    S: Unsigned,
    W: Unsigned,
{
    /// Creates the field descriptor.
    ///
    /// # Panics
    ///
    /// If the range does not fit into `R::Raw`. The check runs at compile
    /// time.
    #[inline(always)]
    pub const fn new() -> Self {
        const {
            assert!(
                S::U64.saturating_add(W::U64) <= <R::Raw as RegRaw>::BITS as u64,
                "field does not fit into the register"
            );
        }
        Self { marker: PhantomData }
    }
}

impl<R, S, W> Field<R, S, W>
where
    R: RegId,
    (S, W): BitRange<R::Raw>,
{
    /// First bit of the field.
    pub const START: u32 = <(S, W) as BitRange<R::Raw>>::START;

    /// Number of bits in the field.
    pub const WIDTH: u32 = <(S, W) as BitRange<R::Raw>>::WIDTH;

    /// Bits of the register covered by the field.
    pub const MASK: R::Raw = <(S, W) as BitRange<R::Raw>>::MASK;

    /// Creates an update writing the compile-time value `V` to the field.
    ///
    /// A `V` with bits set beyond the field width does not compile.
    #[inline(always)]
    pub const fn literal<V>(self) -> FieldUpdate<R, S, W>
    where
        V: Unsigned + FitsIn<<(S, W) as BitRange<R::Raw>>::Limit> + Shl<S>,
        Shleft<V, S>: ToRaw<R::Raw>,
    {
        Update::from_payload(<Shleft<V, S> as ToRaw<R::Raw>>::RAW)
    }

    /// Creates an update writing the run-time `value` to the field.
    ///
    /// Bits of `value` beyond the field width are discarded.
    #[inline(always)]
    pub fn value(self, value: R::Raw) -> FieldUpdate<R, S, W> {
        let low = <(S, W) as BitRange<R::Raw>>::LOW;
        Update::from_payload((value & low).shl_or_zero(Self::START))
    }

    /// Extracts the field value from the raw register value `raw`.
    #[inline(always)]
    pub fn decode(self, raw: R::Raw) -> R::Raw {
        (raw & Self::MASK).shr_or_zero(Self::START)
    }
}

impl<R, S, W> FieldSpec for Field<R, S, W>
where
    R: RegId,
    (S, W): BitRange<R::Raw>,
{
    type Reg = R;
    type Width = <(S, W) as BitRange<R::Raw>>::Width;

    const START: u32 = <(S, W) as BitRange<R::Raw>>::START;
    const WIDTH: u32 = <(S, W) as BitRange<R::Raw>>::WIDTH;
    const MASK: R::Raw = <(S, W) as BitRange<R::Raw>>::MASK;

    #[inline(always)]
    fn decode(self, raw: R::Raw) -> R::Raw {
        (raw & <Self as FieldSpec>::MASK).shr_or_zero(<Self as FieldSpec>::START)
    }
}

impl<R, S> Field<R, S, U1>
where
    R: RegId,
    (S, U1): BitRange<R::Raw>,
{
    /// Creates an update setting the bit.
    #[inline(always)]
    pub const fn set(self) -> FieldUpdate<R, S, U1> {
        Update::from_payload(Self::MASK)
    }

    /// Creates an update clearing the bit.
    #[inline(always)]
    pub const fn clear(self) -> FieldUpdate<R, S, U1> {
        Update::from_payload(R::Raw::ZERO)
    }

    /// Returns the state of the bit in the raw register value `raw`.
    #[inline(always)]
    pub fn is_set_in(self, raw: R::Raw) -> bool {
        raw & Self::MASK != R::Raw::ZERO
    }
}

impl<R, S, W> Clone for Field<R, S, W> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, S, W> Copy for Field<R, S, W> {}

impl<R, S, W> fmt::Debug for Field<R, S, W>
where
    R: RegId,
    (S, W): BitRange<R::Raw>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("start", &Self::START)
            .field("width", &Self::WIDTH)
            .finish()
    }
}
