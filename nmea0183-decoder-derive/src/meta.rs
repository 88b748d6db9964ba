use std::{collections::HashSet, fmt::Display};

use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::{
    Attribute, Error, Ident, Lit, Path, Result, Token, parenthesized,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token::Paren,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum MetaAttributeType {
    Trailing,
    With,
}

impl MetaAttributeType {
    pub fn from_ident(ident: &Ident) -> Option<Self> {
        match ident.to_string().as_str() {
            "trailing" => Some(Self::Trailing),
            "with" => Some(Self::With),
            _ => None,
        }
    }

    fn takes_argument(&self) -> bool {
        matches!(self, Self::With)
    }
}

impl Display for MetaAttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Trailing => "trailing",
            Self::With => "with",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug)]
pub struct MetaAttribute {
    pub r#type: MetaAttributeType,
    arg: Option<TokenStream>,
    span: Span,
}

impl MetaAttribute {
    pub fn new(r#type: MetaAttributeType, arg: Option<TokenStream>, span: Span) -> Self {
        Self { r#type, arg, span }
    }

    pub fn arg(&self) -> Option<&TokenStream> {
        self.arg.as_ref()
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl Parse for MetaAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let ident: Ident = input.parse()?;
        let attribute_type = MetaAttributeType::from_ident(&ident).ok_or_else(|| {
            Error::new(
                ident.span(),
                format!("nmea0183-decoder-derive: Unknown nmea attribute `{ident}`"),
            )
        })?;

        let arg = if attribute_type.takes_argument() {
            // read (value) or ="value"
            Some(parse_argument::<Path>(input)?)
        } else {
            None
        };

        Ok(MetaAttribute::new(attribute_type, arg, ident.span()))
    }
}

#[derive(Debug)]
pub struct List<T: Parse>(pub Vec<T>);

impl<T: Parse> Parse for List<T> {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(List(
            Punctuated::<T, Token![,]>::parse_terminated(input)?
                .into_iter()
                .collect(),
        ))
    }
}

fn parse_argument<P>(input: ParseStream) -> Result<TokenStream>
where
    P: Parse + ToTokens,
{
    if input.peek(Token![=]) {
        let _: Token![=] = input.parse()?;
        let value = Lit::parse(input)?;

        match value {
            Lit::Str(string) => {
                let parsed: P = string.parse()?;
                Ok(quote! { #parsed })
            }
            _ => Err(Error::new(
                value.span(),
                "nmea0183-decoder-derive: Unexpected type for nmea attribute content",
            )),
        }
    } else if input.peek(Paren) {
        let content;
        parenthesized!(content in input);
        let parsed: P = content.parse()?;
        Ok(quote! { #parsed })
    } else {
        Err(Error::new(
            input.span(),
            "nmea0183-decoder-derive: Expected '= <value>' or '(<value>)' for nmea attribute",
        ))
    }
}

fn nmea_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    Ok(attrs
        .iter()
        .filter(|attr| attr.path().is_ident("nmea"))
        .map(|attr| attr.parse_args::<List<MetaAttribute>>())
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flat_map(|list| list.0.into_iter())
        .collect())
}

/// Container attributes are not supported; any `#[nmea(...)]` on the struct
/// itself is an error.
pub fn reject_top_level_attributes(attrs: &[Attribute]) -> Result<()> {
    match nmea_attributes(attrs)?.first() {
        Some(meta_attr) => Err(Error::new(
            meta_attr.span(),
            format!(
                "nmea0183-decoder-derive: Attribute `{}` is not allowed at the top level",
                meta_attr.r#type
            ),
        )),
        None => Ok(()),
    }
}

pub fn parse_field_level_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    let mut attributes_set = HashSet::new();

    nmea_attributes(attrs)?
        .into_iter()
        .map(|meta_attr| {
            if !attributes_set.insert(meta_attr.r#type) {
                return Err(Error::new(
                    meta_attr.span(),
                    format!(
                        "nmea0183-decoder-derive: Duplicate nmea attribute `{}`",
                        meta_attr.r#type
                    ),
                ));
            }

            // Only one of `trailing` or `with` can be used.
            if attributes_set.contains(&MetaAttributeType::Trailing)
                && attributes_set.contains(&MetaAttributeType::With)
            {
                return Err(Error::new(
                    meta_attr.span(),
                    "nmea0183-decoder-derive: Attributes `trailing` and `with` cannot be combined",
                ));
            }

            Ok(meta_attr)
        })
        .collect()
}
