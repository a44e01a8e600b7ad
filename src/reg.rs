//! Memory-mapped registers.
//!
//! # Registers, Fields and Updates
//!
//! A register is described once with [`hw_reg!`](crate::hw_reg): its raw
//! width, its fields as `offset width` pairs, and optional named values for
//! each field.
//!
//! ```
//! use drone_hwreg::reg::prelude::*;
//!
//! drone_hwreg::hw_reg! {
//!     /// UART control register.
//!     pub UartControl u32;
//!
//!     /// Parity mode.
//!     PARITY { 0 2
//!         NONE = 0;
//!         EVEN = 1;
//!         ODD = 2;
//!     }
//!     /// Flow control.
//!     HANDSHAKE { 3 2
//!         NONE = 0;
//!         SOFTWARE = 1;
//!         HARDWARE = 2;
//!     }
//!     /// Baud rate divisor.
//!     BAUDRATE { 8 9 }
//! }
//!
//! fn main() {
//!     let mut control = Register::<UartControl>::new(0);
//!     control <<= UartControl::PARITY_ODD
//!         + UartControl::HANDSHAKE_SOFTWARE
//!         + UartControl::BAUDRATE.value(120);
//!     assert_eq!(control.read(UartControl::PARITY), 2);
//!     assert_eq!(control.read(UartControl::HANDSHAKE), 1);
//!     assert_eq!(control.read(UartControl::BAUDRATE), 120);
//! }
//! ```
//!
//! Each field produces [`Update`]s. An update is a payload plus a mask, and
//! the mask lives in the update's type. Updates of one register combine with
//! `+` as long as their masks do not overlap; the combined update is applied
//! with a single read-modify-write, or a single write if it covers the whole
//! register.
//!
//! # Compile-time checks
//!
//! Values known at compile time go through [`Field::literal`], which rejects
//! values that do not fit into the field. Values known only at run time go
//! through [`Field::value`], which truncates them to the field width.
//!
//! # Placement
//!
//! The crate does not decide where registers live. [`place`] and
//! [`Register::at`] overlay a register or a `#[repr(C)]` block of registers
//! on an address supplied by the caller.

pub mod prelude;

mod cell;
mod field;
mod place;
mod register;
mod reserved;
mod update;

pub use self::{cell::*, field::*, place::*, register::*, reserved::*, update::*};

mod compile_tests {
    //! ```compile_fail
    //! use drone_hwreg::reg::prelude::*;
    //! drone_hwreg::hw_reg! {
    //!     pub Ctrl u32;
    //!     A { 0 2 }
    //!     B { 1 2 }
    //! }
    //! fn main() {
    //!     let _ = Ctrl::A.value(1) + Ctrl::B.value(1);
    //! }
    //! ```
    //!
    //! ```
    //! use drone_hwreg::reg::prelude::*;
    //! drone_hwreg::hw_reg! {
    //!     pub Ctrl u32;
    //!     A { 0 2 }
    //!     B { 2 2 }
    //! }
    //! fn main() {
    //!     let _ = Ctrl::A.value(1) + Ctrl::B.value(1);
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_hwreg::reg::prelude::*;
    //! drone_hwreg::hw_reg! {
    //!     pub Ctrl u32;
    //!     A { 0 2 }
    //!     B { 2 2 }
    //! }
    //! fn main() {
    //!     let _ = Ctrl::A.value(1) + Ctrl::A.value(2);
    //! }
    //! ```
    //!
    //! ```
    //! use drone_hwreg::reg::prelude::*;
    //! drone_hwreg::hw_reg! {
    //!     pub Ctrl u32;
    //!     A { 0 2 }
    //!     B { 2 2 }
    //! }
    //! fn main() {
    //!     let _ = Ctrl::A.value(1);
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_hwreg::reg::prelude::*;
    //! use drone_hwreg::typenum::U4;
    //! drone_hwreg::hw_reg! {
    //!     pub Ctrl u32;
    //!     A { 3 2 }
    //! }
    //! fn main() {
    //!     assert_eq!(Ctrl::A.literal::<U4>().payload(), 0b100 << 3);
    //! }
    //! ```
    //!
    //! ```
    //! use drone_hwreg::reg::prelude::*;
    //! use drone_hwreg::typenum::U3;
    //! drone_hwreg::hw_reg! {
    //!     pub Ctrl u32;
    //!     A { 3 2 }
    //! }
    //! fn main() {
    //!     assert_eq!(Ctrl::A.literal::<U3>().payload(), 0b11 << 3);
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_hwreg::reg::prelude::*;
    //! drone_hwreg::hw_reg! {
    //!     pub Ctrl u32;
    //!     A { 0 2 }
    //!     C { 2 2 }
    //! }
    //! drone_hwreg::hw_reg! {
    //!     pub Status u32;
    //!     B { 4 2 }
    //! }
    //! fn main() {
    //!     let ctrl = Register::<Ctrl>::new(0);
    //!     let _ = Ctrl::A.value(1) + Status::B.value(1);
    //! }
    //! ```
    //!
    //! ```
    //! use drone_hwreg::reg::prelude::*;
    //! drone_hwreg::hw_reg! {
    //!     pub Ctrl u32;
    //!     A { 0 2 }
    //!     C { 2 2 }
    //! }
    //! drone_hwreg::hw_reg! {
    //!     pub Status u32;
    //!     B { 4 2 }
    //! }
    //! fn main() {
    //!     let ctrl = Register::<Ctrl>::new(0);
    //!     let _ = Ctrl::A.value(1) + Ctrl::C.value(1);
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_hwreg::reg::prelude::*;
    //! drone_hwreg::hw_reg! {
    //!     pub Ctrl u32;
    //!     A { 0 2 }
    //!     C { 2 2 }
    //! }
    //! drone_hwreg::hw_reg! {
    //!     pub Status u32;
    //!     B { 4 2 }
    //! }
    //! fn main() {
    //!     let ctrl = Register::<Ctrl>::new(0);
    //!     ctrl.apply(Status::B.value(1));
    //! }
    //! ```
    //!
    //! ```
    //! use drone_hwreg::reg::prelude::*;
    //! drone_hwreg::hw_reg! {
    //!     pub Ctrl u32;
    //!     A { 0 2 }
    //!     C { 2 2 }
    //! }
    //! drone_hwreg::hw_reg! {
    //!     pub Status u32;
    //!     B { 4 2 }
    //! }
    //! fn main() {
    //!     let ctrl = Register::<Ctrl>::new(0);
    //!     ctrl.apply(Ctrl::C.value(1));
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_hwreg::reg::prelude::*;
    //! drone_hwreg::hw_reg! {
    //!     pub Ctrl u32;
    //!     A { 0 2 }
    //!     C { 2 2 }
    //! }
    //! drone_hwreg::hw_reg! {
    //!     pub Status u32;
    //!     B { 4 2 }
    //! }
    //! fn main() {
    //!     let ctrl = Register::<Ctrl>::new(0);
    //!     let _ = ctrl.read(Status::B);
    //! }
    //! ```
    //!
    //! ```
    //! use drone_hwreg::reg::prelude::*;
    //! drone_hwreg::hw_reg! {
    //!     pub Ctrl u32;
    //!     A { 0 2 }
    //!     C { 2 2 }
    //! }
    //! drone_hwreg::hw_reg! {
    //!     pub Status u32;
    //!     B { 4 2 }
    //! }
    //! fn main() {
    //!     let ctrl = Register::<Ctrl>::new(0);
    //!     let _ = ctrl.read(Ctrl::C);
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_hwreg::reg::prelude::*;
    //! use drone_hwreg::typenum::{U30, U4};
    //! enum Ctrl {}
    //! impl RegId for Ctrl {
    //!     type Raw = u32;
    //! }
    //! const FIELD: Field<Ctrl, U30, U4> = Field::new();
    //! fn main() {
    //!     assert_eq!(FIELD.value(0xF).payload(), 0xF << 30);
    //! }
    //! ```
    //!
    //! ```
    //! use drone_hwreg::reg::prelude::*;
    //! use drone_hwreg::typenum::{U28, U4};
    //! enum Ctrl {}
    //! impl RegId for Ctrl {
    //!     type Raw = u32;
    //! }
    //! const FIELD: Field<Ctrl, U28, U4> = Field::new();
    //! fn main() {
    //!     assert_eq!(FIELD.value(0xF).payload(), 0xF000_0000);
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! use drone_hwreg::reg::prelude::*;
    //! drone_hwreg::hw_reg! {
    //!     pub Ctrl u8;
    //!     A { 6 3 }
    //! }
    //! fn main() {
    //!     assert_eq!(Ctrl::A.value(0b111).payload(), 0b1110_0000);
    //! }
    //! ```
    //!
    //! ```
    //! use drone_hwreg::reg::prelude::*;
    //! drone_hwreg::hw_reg! {
    //!     pub Ctrl u8;
    //!     A { 5 3 }
    //! }
    //! fn main() {
    //!     assert_eq!(Ctrl::A.value(0b111).payload(), 0b1110_0000);
    //! }
    //! ```
    //!
    //! ```compile_fail
    //! const MASK: u8 = drone_hwreg::bits::bit_mask_u8(6, 3);
    //! fn main() {
    //!     assert_eq!(MASK, 0b1110_0000);
    //! }
    //! ```
    //!
    //! ```
    //! const MASK: u8 = drone_hwreg::bits::bit_mask_u8(5, 3);
    //! fn main() {
    //!     assert_eq!(MASK, 0b1110_0000);
    //! }
    //! ```
}
