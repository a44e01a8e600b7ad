use super::RegId;
use crate::bits::{RegRaw, ToRaw};
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, BitAnd, BitOr};
use typenum::operator_aliases::Or;
use typenum::U0;

/// A masked update of the register `R`.
///
/// `M` is a type-level mask with one bits exactly at the positions the
/// update writes. The payload never has a bit set outside of `M`. Updates are
/// created by [`Field`](super::Field) constructors, combined with `+`, and
/// consumed by [`Register::apply`](super::Register::apply).
#[must_use = "an update does nothing until it is applied to a register"]
pub struct Update<R: RegId, M> {
    payload: R::Raw,
    marker: PhantomData<(R, M)>,
}

/// Masks `Self` and `Rhs` share no bits.
#[diagnostic::on_unimplemented(
    message = "masks must not overlap",
    label = "this update writes bits that the other update also writes"
)]
pub trait Disjoint<Rhs> {}

impl<A, B> Disjoint<B> for A where A: BitAnd<B, Output = U0> {}

impl<R: RegId, M> Update<R, M> {
    /// The caller guarantees `payload & !M == 0`.
    #[inline(always)]
    pub(crate) const fn from_payload(payload: R::Raw) -> Self {
        Self { payload, marker: PhantomData }
    }

    /// Returns the bits to write, already shifted into position.
    #[inline(always)]
    pub const fn payload(&self) -> R::Raw {
        self.payload
    }
}

impl<R: RegId, M: ToRaw<R::Raw>> Update<R, M> {
    /// Bits written by this update.
    pub const MASK: R::Raw = <M as ToRaw<R::Raw>>::RAW;

    /// Returns the bits written by this update.
    #[inline(always)]
    pub const fn mask(&self) -> R::Raw {
        Self::MASK
    }

    /// Returns `true` if the update writes every bit of the register.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        Self::MASK == R::Raw::MAX
    }
}

impl<R, A, B> Add<Update<R, B>> for Update<R, A>
where
    R: RegId,
    A: Disjoint<B> + BitOr<B>,
{
    type Output = Update<R, Or<A, B>>;

    #[inline(always)]
    fn add(self, rhs: Update<R, B>) -> Self::Output {
        Update::from_payload(self.payload | rhs.payload)
    }
}

impl<R: RegId, M> Clone for Update<R, M> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: RegId, M> Copy for Update<R, M> {}

impl<R: RegId, M> PartialEq for Update<R, M> {
    fn eq(&self, other: &Self) -> bool {
        self.payload == other.payload
    }
}

impl<R: RegId, M> Eq for Update<R, M> {}

impl<R: RegId, M: ToRaw<R::Raw>> fmt::Debug for Update<R, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Update")
            .field("mask", &format_args!("{:#x}", Self::MASK))
            .field("payload", &format_args!("{:#x}", self.payload))
            .finish()
    }
}
