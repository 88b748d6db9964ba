//! # Derive macro for NMEA 0183 sentence records
//!
//! `nmea0183-decoder-derive` generates the positional field readers of
//! [`nmea0183-decoder`]: every named field of a struct is decoded from the
//! next token of the sentence, in declaration order.
//!
//! [`nmea0183-decoder`]: https://crates.io/crates/nmea0183-decoder

use generate::generate_decode_impl;
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod generate;
mod meta;

#[doc = include_str!("../README.md")]
#[proc_macro_derive(Decode, attributes(nmea))]
pub fn derive_decode(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_decode_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
