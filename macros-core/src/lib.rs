//! Procedural macros base for drone-hwreg.
//!
//! See `drone-hwreg` documentation for details.

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod macros;
mod raw;
mod uint;

pub use self::{
    raw::{raw_bits, RAW_TYPES},
    uint::uint,
};
