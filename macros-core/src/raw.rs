use syn::Ident;

/// Integer types a register value can be stored in.
pub const RAW_TYPES: &[&str] = &["u8", "u16", "u32", "u64"];

/// Returns the number of bits in the raw register type `ident`, or `None` if
/// `ident` is not a supported raw type.
pub fn raw_bits(ident: &Ident) -> Option<u32> {
    match ident.to_string().as_str() {
        "u8" => Some(8),
        "u16" => Some(16),
        "u32" => Some(32),
        "u64" => Some(64),
        _ => None,
    }
}
