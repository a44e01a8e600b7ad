//! Procedural macros for drone-hwreg.
//!
//! See `drone-hwreg` documentation for details.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod hw_reg;

use proc_macro::TokenStream;

#[proc_macro]
pub fn hw_reg(input: TokenStream) -> TokenStream {
    hw_reg::proc_macro(input)
}
