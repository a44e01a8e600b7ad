//! Type-checked masked updates of memory-mapped hardware registers.
//!
//! A register's bit-fields are declared once. Named updates of those fields
//! are then composed and applied as a single masked read-modify-write, which
//! compiles down to the same instructions as hand-written mask-and-shift
//! code. Misuse is rejected before the program runs:
//!
//! * combining two updates that write the same bits;
//! * a compile-time literal that does not fit into its field;
//! * combining or applying updates of a different register;
//! * a field that does not fit into its register.
//!
//! Values known only at run time are truncated to the field width instead.
//!
//! See the [`reg`] module for an overview.
//!
//! # Layers
//!
//! * [`bits`] - bit-range arithmetic, both as `const fn`s and at the type
//!   level.
//! * [`reg::Update`] - the masked update algebra.
//! * [`reg::Field`] and [`reg::Register`] - descriptors producing updates and
//!   the register applying them.
//!
//! # Cargo features
//!
//! * `log` - trace register accesses through the [`log`](https://docs.rs/log)
//!   facade.

#![no_std]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::inline_always)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::new_without_default)]
#![allow(clippy::precedence)]

extern crate self as drone_hwreg;

#[macro_use]
mod trace;

pub mod bits;
pub mod reg;

pub use drone_hwreg_macros::hw_reg;
pub use typenum;
