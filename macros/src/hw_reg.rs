use drone_hwreg_macros_core::{bail, raw_bits, uint, RAW_TYPES};
use inflector::Inflector;
use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use std::collections::HashSet;
use syn::{
    braced,
    parse::{Parse, ParseStream, Result},
    parse_macro_input, Attribute, Ident, LitInt, Token, Visibility,
};

struct HwReg {
    attrs: Vec<Attribute>,
    vis: Visibility,
    ident: Ident,
    raw: Ident,
    fields: Vec<Field>,
}

struct Field {
    attrs: Vec<Attribute>,
    ident: Ident,
    offset: u32,
    width: u32,
    width_span: Span,
    values: Vec<Value>,
}

struct Value {
    attrs: Vec<Attribute>,
    ident: Ident,
    value: u64,
    value_span: Span,
}

impl Parse for HwReg {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis = input.parse()?;
        let ident = input.parse()?;
        let raw = input.parse::<Ident>()?;
        let Some(bits) = raw_bits(&raw) else {
            bail!(raw.span(), "Expected one of {}", RAW_TYPES.join(", "));
        };
        input.parse::<Token![;]>()?;
        let mut fields = Vec::new();
        while !input.is_empty() {
            fields.push(input.parse::<Field>()?);
        }
        let mut names = HashSet::new();
        for field in &fields {
            let end = u64::from(field.offset) + u64::from(field.width);
            if end > u64::from(bits) {
                bail!(
                    field.width_span,
                    "Field `{}` at bits {}..{} does not fit into `{}`",
                    field.ident,
                    field.offset,
                    end,
                    raw
                );
            }
            let field_ident = field.const_ident();
            if !names.insert(field_ident.to_string()) {
                bail!(field.ident.span(), "Duplicate name `{}`", field_ident);
            }
            for value in &field.values {
                if u128::from(value.value) >> field.width != 0 {
                    bail!(
                        value.value_span,
                        "Value {} does not fit into the {}-bit field `{}`",
                        value.value,
                        field.width,
                        field.ident
                    );
                }
                let value_ident = value.const_ident(&field_ident);
                if !names.insert(value_ident.to_string()) {
                    bail!(value.ident.span(), "Duplicate name `{}`", value_ident);
                }
            }
        }
        Ok(Self { attrs, vis, ident, raw, fields })
    }
}

impl Parse for Field {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let ident = input.parse()?;
        let content;
        braced!(content in input);
        let offset = content.parse::<LitInt>()?.base10_parse()?;
        let width = content.parse::<LitInt>()?;
        let width_span = width.span();
        let width = width.base10_parse()?;
        let mut values = Vec::new();
        while !content.is_empty() {
            values.push(content.parse()?);
        }
        Ok(Self { attrs, ident, offset, width, width_span, values })
    }
}

impl Parse for Value {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let ident = input.parse()?;
        input.parse::<Token![=]>()?;
        let value = input.parse::<LitInt>()?;
        let value_span = value.span();
        let value = value.base10_parse()?;
        input.parse::<Token![;]>()?;
        Ok(Self { attrs, ident, value, value_span })
    }
}

impl Field {
    fn const_ident(&self) -> Ident {
        format_ident!(
            "{}",
            self.ident.to_string().to_screaming_snake_case(),
            span = self.ident.span()
        )
    }
}

impl Value {
    fn const_ident(&self, field_ident: &Ident) -> Ident {
        format_ident!(
            "{}_{}",
            field_ident,
            self.ident.to_string().to_screaming_snake_case(),
            span = self.ident.span()
        )
    }
}

impl HwReg {
    fn expand(&self) -> TokenStream2 {
        let krate = quote!(::drone_hwreg);
        let Self { attrs, vis, ident, raw, fields } = self;
        let mut consts = Vec::new();
        for field in fields {
            let field_attrs = &field.attrs;
            let field_ident = field.const_ident();
            let start = uint(field.offset.into(), &krate);
            let width = uint(field.width.into(), &krate);
            consts.push(quote! {
                #(#field_attrs)*
                pub const #field_ident: #krate::reg::Field<Self, #start, #width> =
                    #krate::reg::Field::<Self, #start, #width>::new();
            });
            for value in &field.values {
                let value_attrs = &value.attrs;
                let value_ident = value.const_ident(&field_ident);
                let literal = uint(value.value, &krate);
                let doc = value.attrs.is_empty().then(|| {
                    let doc = format!(
                        "Writes `{}` to [`{1}`](Self::{1}).",
                        value.value, field_ident
                    );
                    quote!(#[doc = #doc])
                });
                consts.push(quote! {
                    #(#value_attrs)*
                    #doc
                    pub const #value_ident: #krate::reg::FieldUpdate<Self, #start, #width> =
                        Self::#field_ident.literal::<#literal>();
                });
            }
        }
        quote! {
            #(#attrs)*
            #vis enum #ident {}

            impl #krate::reg::RegId for #ident {
                type Raw = #raw;
            }

            impl #ident {
                #(#consts)*
            }
        }
    }
}

pub fn proc_macro(input: TokenStream) -> TokenStream {
    let reg = parse_macro_input!(input as HwReg);
    reg.expand().into()
}
