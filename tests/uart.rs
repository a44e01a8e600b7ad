use drone_hwreg::reg::prelude::*;
use drone_hwreg::typenum::{U2, U3, U8, U9};
use std::cell::Cell;

drone_hwreg::hw_reg! {
    /// UART control register.
    pub UartControl u32;

    /// Parity mode.
    PARITY { 0 2
        NONE = 0;
        EVEN = 1;
        ODD = 2;
    }
    /// Flow control.
    HANDSHAKE { 3 2
        NONE = 0;
        SOFTWARE = 1;
        HARDWARE = 2;
    }
    /// Baud rate divisor.
    BAUDRATE { 8 9 }
}

drone_hwreg::hw_reg! {
    /// UART status register.
    pub UartStatus u32;

    /// Transmitter idle.
    TX_IDLE { 0 1 }
    /// Receiver holds a byte.
    RX_READY { 1 1 }
}

drone_hwreg::hw_reg! {
    /// UART data register.
    pub UartData u32;

    /// Whole register.
    WORD { 0 32 }
}

#[derive(Default)]
struct Word {
    value: Cell<u32>,
    loads: Cell<usize>,
    stores: Cell<usize>,
}

impl Word {
    fn new(value: u32) -> Self {
        let word = Self::default();
        word.value.set(value);
        word
    }

    fn counts(&self) -> (usize, usize) {
        (self.loads.get(), self.stores.get())
    }
}

impl RegCell for Word {
    type Raw = u32;

    fn load(&self) -> u32 {
        self.loads.set(self.loads.get() + 1);
        self.value.get()
    }

    fn store(&self, raw: u32) {
        self.stores.set(self.stores.get() + 1);
        self.value.set(raw);
    }
}

#[test]
fn named_values() {
    assert_eq!(UartControl::PARITY_NONE.payload(), 0);
    assert_eq!(UartControl::PARITY_EVEN.payload(), 0b01);
    assert_eq!(UartControl::PARITY_ODD.payload(), 0b10);
    assert_eq!(UartControl::HANDSHAKE_HARDWARE.payload(), 0b10 << 3);
    assert_eq!(UartControl::PARITY_ODD.mask(), 0b11);
    assert_eq!(UartControl::HANDSHAKE_NONE.mask(), 0b11 << 3);
}

#[test]
fn field_constants() {
    assert_eq!(UartControl::BAUDRATE.decode(0xFFFF_FFFF), 0x1FF);
    assert_eq!(
        Field::<UartControl, U8, U9>::MASK,
        0x1FF << 8
    );
}

#[test]
fn combined_update() {
    let update = UartControl::PARITY_ODD
        + UartControl::HANDSHAKE_SOFTWARE
        + UartControl::BAUDRATE.value(120);
    assert_eq!(update.payload(), 0b10 | 0b01 << 3 | 120 << 8);
    assert_eq!(update.mask(), 0b11 | 0b11 << 3 | 0x1FF << 8);
    assert_eq!(
        update,
        UartControl::BAUDRATE.value(120)
            + (UartControl::HANDSHAKE_SOFTWARE + UartControl::PARITY_ODD)
    );
}

#[test]
fn apply_combined_update() {
    let word = Word::new(0xFFFF_0000);
    let control = Register::<UartControl, _>::from_cell(&word);
    control.apply(
        UartControl::PARITY_ODD
            + UartControl::HANDSHAKE_SOFTWARE
            + UartControl::BAUDRATE.value(120),
    );
    assert_eq!(word.counts(), (1, 1));
    assert_eq!(word.value.get(), 0xFFFE_0000 | 120 << 8 | 0b01 << 3 | 0b10);
}

#[test]
fn write_then_read() {
    let mut control = Register::<UartControl>::new(0);
    control <<= UartControl::HANDSHAKE.literal::<U2>();
    assert_eq!(control.read(UartControl::HANDSHAKE), 0b10);
    assert_eq!(control.read(UartControl::PARITY), 0);
    control <<= UartControl::HANDSHAKE.literal::<U3>() + UartControl::PARITY_EVEN;
    assert_eq!(control.read(UartControl::HANDSHAKE), 0b11);
    assert_eq!(control.read(UartControl::PARITY), 0b01);
}

#[test]
fn runtime_value_truncates() {
    let control = Register::<UartControl>::new(0xFFFF_FFFF);
    control.apply(UartControl::HANDSHAKE.value(0b100));
    assert_eq!(control.read(UartControl::HANDSHAKE), 0);
    assert_eq!(control.read(UartControl::PARITY), 0b11);
    assert_eq!(control.read(UartControl::BAUDRATE), 0x1FF);
}

#[test]
fn full_width_update_writes_only() {
    let word = Word::new(0xDEAD_BEEF);
    let data = Register::<UartData, _>::from_cell(&word);
    data.apply(UartData::WORD.value(0x55));
    assert_eq!(word.counts(), (0, 1));
    assert_eq!(word.value.get(), 0x55);
}

#[test]
fn single_bit_flags() {
    let word = Word::new(0b01);
    let status = Register::<UartStatus, _>::from_cell(&word);
    assert!(status.is_set(UartStatus::TX_IDLE));
    assert!(!status.is_set(UartStatus::RX_READY));
    status.apply(UartStatus::RX_READY.set() + UartStatus::TX_IDLE.clear());
    assert_eq!(word.value.get(), 0b10);
    assert!(UartStatus::RX_READY.is_set_in(word.value.get()));
    assert_eq!(word.counts(), (3, 1));
}

#[test]
fn inferred_field_types() {
    let control = Register::<UartControl>::new(0b10 | 120 << 8);
    assert_eq!(control.read(UartControl::PARITY), 0b10);
    let baudrate = Field::new();
    assert_eq!(control.read::<Field<UartControl, U8, U9>>(baudrate), 120);
    let status = Register::<UartStatus>::new(0b10);
    assert!(status.is_set(UartStatus::RX_READY));
    assert!(!status.is_set(UartStatus::TX_IDLE));
}
