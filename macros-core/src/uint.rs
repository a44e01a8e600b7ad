use proc_macro2::TokenStream;
use quote::quote;

/// Generates the `typenum` unsigned integer type for `value`.
///
/// `typenum` is reached through `krate`, which is the path of a crate
/// re-exporting it, e.g. `::drone_hwreg`. The generated type is the canonical
/// one: `UTerm` for zero, and otherwise a chain of `UInt`s with the most
/// significant bit innermost and no leading zeros.
pub fn uint(value: u64, krate: &TokenStream) -> TokenStream {
    let mut tokens = quote!(#krate::typenum::UTerm);
    if value == 0 {
        return tokens;
    }
    for shift in (0..u64::BITS - value.leading_zeros()).rev() {
        let bit = if value >> shift & 1 == 1 {
            quote!(#krate::typenum::B1)
        } else {
            quote!(#krate::typenum::B0)
        };
        tokens = quote!(#krate::typenum::UInt<#tokens, #bit>);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(value: u64) -> String {
        uint(value, &quote!(::k)).to_string().replace(' ', "")
    }

    #[test]
    fn zero() {
        assert_eq!(expand(0), "::k::typenum::UTerm");
    }

    #[test]
    fn one() {
        assert_eq!(expand(1), "::k::typenum::UInt<::k::typenum::UTerm,::k::typenum::B1>");
    }

    #[test]
    fn msb_innermost() {
        assert_eq!(
            expand(0b110),
            "::k::typenum::UInt<::k::typenum::UInt<::k::typenum::UInt<\
             ::k::typenum::UTerm,::k::typenum::B1>,::k::typenum::B1>,::k::typenum::B0>"
        );
    }

    #[test]
    fn depth_matches_bit_length() {
        let tokens = expand(u64::MAX);
        assert_eq!(tokens.matches("UInt<").count(), 64);
        assert_eq!(tokens.matches("B0").count(), 0);
        assert_eq!(expand(1 << 40).matches("B0").count(), 40);
    }
}
