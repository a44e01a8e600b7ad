//! Register traits prelude.

pub use super::{Field, FieldSpec, FieldUpdate, RegCell, RegId, Register, Reserved, Update};
pub use crate::bits::RegRaw;
