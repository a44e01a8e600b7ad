/// Returns from the surrounding function with an error spanned at `$span`.
#[macro_export]
macro_rules! bail {
    ($span:expr, $fmt:expr, $($args:tt)*) => {
        return Err(::syn::Error::new($span, format!($fmt, $($args)*)))
    };
    ($span:expr, $fmt:expr) => {
        $crate::bail!($span, $fmt,)
    };
}
