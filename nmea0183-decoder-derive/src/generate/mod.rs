use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Generics, Ident, Result, WhereClause, parse_quote};

use crate::{generate::structs::Struct, meta};

mod structs;

// Usage:
// #[derive(Decode)]
// pub struct MySentence {
//     pub time: Option<UtcTime>,
//     #[nmea(with(satellite_slots))]
//     pub satellites: heapless::Vec<u8, 12>,
//     #[nmea(trailing)]
//     pub mode: Option<char>,
// }

trait Generator {
    fn name(&self) -> &Ident;
    fn generics(&self) -> &Generics;
    fn generate_decode_body(&self) -> TokenStream;

    fn generate_impl(&self) -> TokenStream {
        let name = self.name();
        let body = self.generate_decode_body();
        let generics = self.generics();
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        // If there is no where clause, create a new one
        let mut impl_where: WhereClause = if where_clause.is_some() {
            parse_quote!(#where_clause)
        } else {
            parse_quote!(where)
        };

        // Generic fields are decoded from a single token
        for param in generics.type_params() {
            let param = &param.ident;
            impl_where
                .predicates
                .push(parse_quote!(#param: nmea0183_decoder::FromField));
        }

        quote! {
            impl #impl_generics nmea0183_decoder::Decode for #name #ty_generics #impl_where {
                fn decode<'nmea>(
                    fields: &mut nmea0183_decoder::Fields<'nmea>,
                ) -> nmea0183_decoder::Result<'nmea, Self> {
                    #body
                }
            }
        }
    }
}

pub fn generate_decode_impl(input: &DeriveInput) -> Result<TokenStream> {
    meta::reject_top_level_attributes(&input.attrs)?;

    let generator: Box<dyn Generator> = match &input.data {
        Data::Struct(datastruct) => Box::new(Struct::from_datastruct(
            &input.ident,
            datastruct,
            &input.generics,
        )?),
        Data::Enum(_) => {
            return Err(Error::new(
                input.ident.span(),
                "nmea0183-decoder-derive: Enums not supported",
            ));
        }
        Data::Union(_) => {
            return Err(Error::new(
                input.ident.span(),
                "nmea0183-decoder-derive: Unions not supported",
            ));
        }
    };

    Ok(generator.generate_impl())
}
