use drone_hwreg::reg::prelude::*;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::Cell;
use std::sync::{Mutex, Once};

drone_hwreg::hw_reg! {
    /// UART control register.
    pub UartControl u32;

    PARITY { 0 2
        NONE = 0;
        ODD = 2;
    }
    HANDSHAKE { 3 2
        SOFTWARE = 1;
    }
    BAUDRATE { 8 9 }
}

drone_hwreg::hw_reg! {
    /// UART data register.
    pub UartData u32;

    WORD { 0 32 }
}

struct Capture {
    records: Mutex<Vec<String>>,
}

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record<'_>) {
        self.records.lock().unwrap().push(record.args().to_string());
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture { records: Mutex::new(Vec::new()) };
static INIT: Once = Once::new();

fn records(register: &str) -> Vec<String> {
    let prefix = format!("::{register}: ");
    CAPTURE
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|record| record.contains(&prefix))
        .cloned()
        .collect()
}

fn init() {
    INIT.call_once(|| {
        log::set_logger(&CAPTURE).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

#[derive(Default)]
struct Word {
    value: Cell<u32>,
    loads: Cell<usize>,
    stores: Cell<usize>,
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
fn traced_partial_update() {
    init();
    let word = Word::default();
    word.value.set(0xFFFF_0000);
    let control = Register::<UartControl, _>::from_cell(&word);
    control.apply(
        UartControl::PARITY_ODD
            + UartControl::HANDSHAKE_SOFTWARE
            + UartControl::BAUDRATE.value(120),
    );
    assert_eq!((word.loads.get(), word.stores.get()), (1, 1));
    assert_eq!(control.read(UartControl::BAUDRATE), 120);
    assert_eq!((word.loads.get(), word.stores.get()), (2, 1));
    assert_eq!(word.value.get(), 0xFFFE_0000 | 120 << 8 | 0b01 << 3 | 0b10);
    let records = records("UartControl");
    assert_eq!(records.len(), 2);
    assert!(records[0].ends_with("UartControl: apply mask=0x1ff1b payload=0x780a"));
    assert!(records[1].ends_with("UartControl: read start=8 width=9 value=0x78"));
}

#[test]
fn traced_full_update() {
    init();
    let word = Word::default();
    let data = Register::<UartData, _>::from_cell(&word);
    data.apply(UartData::WORD.value(0x55));
    assert_eq!((word.loads.get(), word.stores.get()), (0, 1));
    assert_eq!(word.value.get(), 0x55);
    let records = records("UartData");
    assert_eq!(records.len(), 1);
    assert!(records[0].ends_with("UartData: apply mask=0xffffffff payload=0x55"));
}
