use super::{FieldSpec, RegCell, Update, VolatileCell};
use crate::bits::{RegRaw, ToRaw};
use core::marker::PhantomData;
use core::ops::ShlAssign;
use typenum::U1;

/// Register identity.
///
/// Every logical register has its own identity type. Fields and updates are
/// tagged with it, so mixing fields of two registers is a type error. The type
/// is never instantiated; [`hw_reg!`](crate::hw_reg) generates an uninhabited
/// enum for it.
pub trait RegId: 'static {
    /// Raw integer type of the register value.
    type Raw: RegRaw;
}

/// Memory-mapped register with the identity `R`, backed by the word `C`.
///
/// The layout is exactly the layout of the backing word, so a `Register` (or
/// a `#[repr(C)]` struct of them) can be overlaid on the hardware address.
///
/// Each [`apply`](Register::apply) is a separate volatile read and write. The
/// sequence is not atomic with respect to interrupt handlers or hardware that
/// modify the same word; callers that need atomicity across accesses must
/// provide their own mutual exclusion.
#[repr(transparent)]
pub struct Register<R: RegId, C = VolatileCell<<R as RegId>::Raw>> {
    cell: C,
    id: PhantomData<R>,
}

impl<R: RegId> Register<R> {
    /// Creates a register backed by an ordinary memory word holding `init`.
    #[inline(always)]
    pub const fn new(init: R::Raw) -> Self {
        Self { cell: VolatileCell::new(init), id: PhantomData }
    }
}

impl<R, C> Register<R, C>
where
    R: RegId,
    C: RegCell<Raw = R::Raw>,
{
    /// Creates a register backed by `cell`.
    #[inline(always)]
    pub const fn from_cell(cell: C) -> Self {
        Self { cell, id: PhantomData }
    }

    /// Writes the bits selected by the update's mask, leaving the other bits
    /// unchanged.
    ///
    /// Performs one volatile read and one volatile write. When the update
    /// covers every bit of the register the read is skipped.
    #[inline(always)]
    pub fn apply<M: ToRaw<R::Raw>>(&self, update: Update<R, M>) {
        let mask = Update::<R, M>::MASK;
        reg_trace!(R, "apply mask={:#x} payload={:#x}", mask, update.payload());
        if mask == R::Raw::MAX {
            self.cell.store(update.payload());
        } else {
            self.cell.store(self.cell.load() & !mask | update.payload());
        }
    }

    /// Reads the current value of `field`.
    #[inline(always)]
    pub fn read<F: FieldSpec<Reg = R>>(&self, field: F) -> R::Raw {
        let value = field.decode(self.cell.load());
        reg_trace!(R, "read start={} width={} value={:#x}", F::START, F::WIDTH, value);
        value
    }

    /// Reads the current state of the single-bit `field`.
    #[inline(always)]
    pub fn is_set<F: FieldSpec<Reg = R, Width = U1>>(&self, field: F) -> bool {
        self.read(field) != R::Raw::ZERO
    }
}

impl<R, C, M> ShlAssign<Update<R, M>> for Register<R, C>
where
    R: RegId,
    C: RegCell<Raw = R::Raw>,
    M: ToRaw<R::Raw>,
{
    #[inline(always)]
    fn shl_assign(&mut self, update: Update<R, M>) {
        self.apply(update);
    }
}
