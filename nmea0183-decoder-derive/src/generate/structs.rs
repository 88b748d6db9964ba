use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataStruct, Error, Fields, Generics, Ident, Result, spanned::Spanned};

use crate::{
    generate::Generator,
    meta::{self, MetaAttributeType},
};

pub struct FieldReader {
    pub name: Ident,
    pub reader: TokenStream,
}

pub struct Struct {
    name: Ident,
    generics: Generics,
    readers: Vec<FieldReader>,
}

impl Struct {
    pub fn from_datastruct(
        name: &Ident,
        datastruct: &DataStruct,
        generics: &Generics,
    ) -> Result<Self> {
        let fields = match &datastruct.fields {
            Fields::Named(fields) => fields,
            Fields::Unnamed(_) | Fields::Unit => {
                return Err(Error::new(
                    name.span(),
                    "nmea0183-decoder-derive: Only structs with named fields are supported",
                ));
            }
        };

        let readers = fields
            .named
            .iter()
            .map(|field| {
                let attributes = meta::parse_field_level_attributes(&field.attrs)?;
                let name = field
                    .ident
                    .clone()
                    .ok_or_else(|| Error::new(field.span(), "nmea0183-decoder-derive: Unnamed field"))?;

                let reader = match attributes.first() {
                    Some(attribute) => match (attribute.r#type, attribute.arg()) {
                        (MetaAttributeType::Trailing, _) => quote! { fields.decode_or_default()? },
                        (MetaAttributeType::With, Some(path)) => quote! { #path(fields)? },
                        (MetaAttributeType::With, None) => {
                            return Err(Error::new(
                                attribute.span(),
                                "nmea0183-decoder-derive: Attribute `with` requires a function path",
                            ));
                        }
                    },
                    None => quote! { fields.decode()? },
                };

                Ok(FieldReader { name, reader })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: name.clone(),
            generics: generics.clone(),
            readers,
        })
    }
}

impl Generator for Struct {
    fn name(&self) -> &Ident {
        &self.name
    }

    fn generics(&self) -> &Generics {
        &self.generics
    }

    fn generate_decode_body(&self) -> TokenStream {
        // Struct expression fields are evaluated in the order they are written
        let names = self.readers.iter().map(|field| &field.name);
        let readers = self.readers.iter().map(|field| &field.reader);

        quote! {
            Ok(Self {
                #(#names: #readers),*
            })
        }
    }
}
