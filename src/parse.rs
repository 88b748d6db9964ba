use core::iter::FusedIterator;

use nom::{
    Parser,
    bytes::complete::take_till,
    character::complete::{anychar, char},
    combinator::{all_consuming, opt},
    sequence::preceded,
};

use crate::{Error, Result, nmea_content::SentenceType};

/// Trait for types that can be read from a single NMEA 0183 field.
///
/// A field is the text between two commas. Implementations must consume the
/// whole token and return `None` if any of it is left over or malformed.
///
/// The `Option<T>` implementation turns an empty token into `Some(None)`:
/// an empty field means "absent", never zero.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::FromField;
///
/// assert_eq!(u8::from_field("08"), Some(8));
/// assert_eq!(u8::from_field("8x"), None);
/// assert_eq!(<Option<f32>>::from_field(""), Some(None));
/// assert_eq!(<Option<f32>>::from_field("0.9"), Some(Some(0.9)));
/// assert_eq!(char::from_field("N"), Some('N'));
/// ```
pub trait FromField: Sized {
    /// Parses the token, returning `None` if it is not a valid `Self`.
    fn from_field(token: &str) -> Option<Self>;
}

macro_rules! impl_uints_type {
    ($($t:tt),*) => ($(
        impl FromField for $t {
            fn from_field(token: &str) -> Option<Self> {
                let parsed: nom::IResult<&str, $t> =
                    all_consuming(nom::character::complete::$t).parse(token);
                parsed.ok().map(|(_, value)| value)
            }
        }
    )*)
}

macro_rules! impl_ints_type {
    ($($t:tt),*) => ($(
        impl FromField for $t {
            fn from_field(token: &str) -> Option<Self> {
                // NMEA writes positive zone offsets as "+03"
                let parsed: nom::IResult<&str, $t> =
                    all_consuming(preceded(opt(char('+')), nom::character::complete::$t))
                        .parse(token);
                parsed.ok().map(|(_, value)| value)
            }
        }
    )*)
}

impl_uints_type!(u8, u16, u32);
impl_ints_type!(i8);

macro_rules! impl_float_type {
    ($($t:ty, $p:ident),*) => ($(
        impl FromField for $t {
            fn from_field(token: &str) -> Option<Self> {
                let parsed: nom::IResult<&str, $t> =
                    all_consuming(nom::number::complete::$p).parse(token);
                parsed.ok().map(|(_, value)| value).filter(|value| value.is_finite())
            }
        }
    )*)
}

impl_float_type!(f32, float, f64, double);

impl FromField for char {
    fn from_field(token: &str) -> Option<Self> {
        let parsed: nom::IResult<&str, char> = all_consuming(anychar).parse(token);
        parsed.ok().map(|(_, value)| value)
    }
}

impl<T: FromField> FromField for Option<T> {
    fn from_field(token: &str) -> Option<Self> {
        if token.is_empty() {
            Some(None)
        } else {
            T::from_field(token).map(Some)
        }
    }
}

/// The comma-separated fields of one sentence, following its type code.
///
/// `Fields` is a lazy, single-pass iterator over the raw tokens. Two adjacent
/// commas produce an empty token at that position, and a trailing comma
/// produces a final empty token, so every token keeps its position.
///
/// Besides plain iteration it offers typed access that reports the position
/// and sentence type of whatever went wrong:
/// - [`Fields::next_field`] fails with [`Error::TruncatedSentence`] past the last token,
/// - [`Fields::decode`] also fails with [`Error::FieldParseError`] on a malformed token.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{Error, Fields, nmea_content::SentenceType};
///
/// let mut fields = Fields::new(SentenceType::MSS, ",42,,A");
/// assert_eq!(fields.decode::<u8>(), Ok(42));
/// assert_eq!(fields.decode::<Option<u8>>(), Ok(None));
/// assert_eq!(
///     fields.decode::<u8>(),
///     Err(Error::FieldParseError {
///         sentence_type: SentenceType::MSS,
///         field_index: 3,
///         raw_token: "A",
///     }),
/// );
/// assert_eq!(
///     fields.next_field(),
///     Err(Error::TruncatedSentence {
///         sentence_type: SentenceType::MSS,
///         expected_index: 4,
///     }),
/// );
/// ```
#[derive(Debug)]
pub struct Fields<'a> {
    sentence_type: SentenceType,
    remaining: Option<&'a str>,
    index: usize,
}

impl<'a> Fields<'a> {
    /// Creates the tokenizer over the text that follows the type code.
    ///
    /// `rest` is either empty (a sentence without fields) or starts with the
    /// comma that separates the code from the first field.
    pub fn new(sentence_type: SentenceType, rest: &'a str) -> Self {
        Self {
            sentence_type,
            remaining: rest.strip_prefix(','),
            index: 0,
        }
    }

    /// Type of the sentence these fields belong to.
    pub fn sentence_type(&self) -> SentenceType {
        self.sentence_type
    }

    /// 1-based index of the last token handed out, 0 before the first.
    pub fn index(&self) -> usize {
        self.index
    }

    /// `true` once every token has been handed out.
    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_none()
    }

    /// Returns the next raw token, failing if the sentence has ended.
    pub fn next_field(&mut self) -> Result<'a, &'a str> {
        self.next().ok_or(Error::TruncatedSentence {
            sentence_type: self.sentence_type,
            expected_index: self.index + 1,
        })
    }

    /// Parses the next token as `T`.
    pub fn decode<T: FromField>(&mut self) -> Result<'a, T> {
        let token = self.next_field()?;
        self.parse_token(token)
    }

    /// Parses the next token as `T`, or returns `T::default()` if the
    /// sentence has already ended.
    ///
    /// This is meant for fields that later NMEA revisions appended, which
    /// older receivers leave out entirely.
    pub fn decode_or_default<T: FromField + Default>(&mut self) -> Result<'a, T> {
        match self.next() {
            Some(token) => self.parse_token(token),
            None => Ok(T::default()),
        }
    }

    /// Parses a token already taken from this iterator, attributing any
    /// failure to the current index.
    pub fn parse_token<T: FromField>(&self, token: &'a str) -> Result<'a, T> {
        T::from_field(token).ok_or(Error::FieldParseError {
            sentence_type: self.sentence_type,
            field_index: self.index,
            raw_token: token,
        })
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.remaining?;
        let split: nom::IResult<&str, &str> = take_till(|c| c == ',').parse(i);
        let (rest, token) = split.ok()?;

        self.remaining = rest.strip_prefix(',');
        self.index += 1;

        Some(token)
    }
}

impl FusedIterator for Fields<'_> {}

/// Trait for records decoded from the positional fields of one sentence type.
///
/// Usually derived: `#[derive(Decode)]` reads one token per struct field, in
/// declaration order.
///
/// # Examples
///
/// ```rust
/// use nmea0183_decoder::{Decode, Fields, nmea_content::SentenceType};
///
/// #[derive(Debug, PartialEq, Decode)]
/// struct Beacon {
///     strength: Option<f32>,
///     #[nmea(trailing)]
///     channel: Option<u16>,
/// }
///
/// let mut fields = Fields::new(SentenceType::MSS, ",55.5");
/// assert_eq!(
///     Beacon::decode(&mut fields),
///     Ok(Beacon { strength: Some(55.5), channel: None }),
/// );
/// ```
pub trait Decode: Sized {
    /// Reads `Self` from the fields, leaving any tokens it does not need.
    fn decode<'a>(fields: &mut Fields<'a>) -> Result<'a, Self>;
}
