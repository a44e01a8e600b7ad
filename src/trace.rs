//! Optional tracing of register accesses.

#[cfg(feature = "log")]
macro_rules! reg_trace {
    ($reg:ty, $fmt:literal $(, $arg:expr)* $(,)?) => {
        ::log::trace!(
            concat!("{}: ", $fmt),
            ::core::any::type_name::<$reg>()
            $(, $arg)*
        )
    };
}

#[cfg(not(feature = "log"))]
macro_rules! reg_trace {
    ($reg:ty, $fmt:literal $(, $arg:expr)* $(,)?) => {};
}
