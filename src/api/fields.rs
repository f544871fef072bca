//! Decoding of raw inbound fields into bound shapes.
//!
//! The body is JSON text and goes through `serde_json`. Header and path
//! parameter maps are handed to the shape directly as a serde map whose values
//! are all strings, so a shape decodes from a map the way it would from the
//! JSON object `{"key": "value", ...}` without building that text.
//!
//! Map decoding into a struct follows JSON object decoding as API Gateway
//! integrations have always seen it: keys match field names exactly first,
//! then ignoring ASCII case, and a field with no matching key takes its zero
//! value (`""`, `0`, `false`, `None`, empty collection) instead of failing.

use http::HeaderMap;
use serde::Deserializer;
use serde::de::value::{MapDeserializer, SeqDeserializer};
use serde::de::{DeserializeOwned, Error as _, IntoDeserializer, Visitor};
use std::borrow::Cow;
use std::collections::HashMap;

use crate::errors::DecodeError;

type Entries<'a> = Vec<(&'a str, Cow<'a, str>)>;

/// Decodes a JSON body into `T`. An empty body is not valid JSON and fails.
///
/// # Errors
///
/// Returns the `serde_json` error for malformed JSON or a shape mismatch.
pub fn decode_body<T: DeserializeOwned>(raw: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Decodes a single-valued string map into `T`.
///
/// Fields must accept a string: `String`, `Option<String>`, string newtypes
/// and unit-variant enums do; numbers and booleans given a value do not.
///
/// # Errors
///
/// Returns a `DecodeError` when a value has the wrong type, or when a missing
/// field has no zero value (an enum).
pub fn decode_map<T: DeserializeOwned>(map: &HashMap<String, String>) -> Result<T, DecodeError> {
    decode_entries(
        map.iter()
            .map(|(key, value)| (key.as_str(), Cow::Borrowed(value.as_str())))
            .collect(),
    )
}

/// Decodes a header map into `T`, one value per name.
///
/// Header names arrive lowercased, so shapes rely on the case-insensitive
/// key match. When a name repeats, the first value is used. Values that are
/// not UTF-8 are decoded lossily.
///
/// # Errors
///
/// Same as [`decode_map`].
pub fn decode_headers<T: DeserializeOwned>(headers: &HeaderMap) -> Result<T, DecodeError> {
    decode_entries(
        headers
            .keys()
            .filter_map(|name| {
                headers
                    .get(name)
                    .map(|value| (name.as_str(), String::from_utf8_lossy(value.as_bytes())))
            })
            .collect(),
    )
}

// Serde reports one missing field per attempt. Each reported field is filled
// with its zero value and decoding starts over; fields with a serde default,
// and `Option` fields, are never reported.
fn decode_entries<T: DeserializeOwned>(entries: Entries<'_>) -> Result<T, DecodeError> {
    let mut zeroed: Vec<&'static str> = Vec::new();
    loop {
        let fields = FieldMap {
            entries: entries.clone(),
            zeroed: &zeroed,
        };
        match T::deserialize(fields) {
            Err(e) => match e.missing_field_name() {
                Some(field) if !zeroed.contains(&field) => zeroed.push(field),
                _ => return Err(e),
            },
            ok => return ok,
        }
    }
}

/// The whole map, as the top-level deserializer.
struct FieldMap<'a> {
    entries: Entries<'a>,
    zeroed: &'a [&'static str],
}

impl<'de> Deserializer<'de> for FieldMap<'_> {
    type Error = DecodeError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        let mut map = MapDeserializer::new(
            self.entries
                .into_iter()
                .map(|(key, value)| (key, FieldValue::Text(value))),
        );
        let value = visitor.visit_map(&mut map)?;
        map.end()?;
        Ok(value)
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        let entries = match_field_names(self.entries, fields);
        let zeroes: Vec<&'static str> = self
            .zeroed
            .iter()
            .copied()
            .filter(|field| fields.contains(field) && !entries.iter().any(|(key, _)| key == field))
            .collect();

        let values = entries
            .into_iter()
            .map(|(key, value)| (key, FieldValue::Text(value)))
            .chain(zeroes.into_iter().map(|field| (field, FieldValue::Zero(field))));

        let mut map = MapDeserializer::new(values);
        let value = visitor.visit_map(&mut map)?;
        map.end()?;
        Ok(value)
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map enum identifier ignored_any
    }
}

/// Renames keys to the declared field they match. An exact match claims its
/// field first; a key matching a field only by case is dropped if the field
/// is already claimed.
fn match_field_names<'a>(entries: Entries<'a>, fields: &'static [&'static str]) -> Entries<'a> {
    let (mut matched, rest): (Entries<'a>, Entries<'a>) = entries
        .into_iter()
        .partition(|(key, _)| fields.iter().any(|field| field == key));

    for (key, value) in rest {
        match fields.iter().find(|field| field.eq_ignore_ascii_case(key)) {
            Some(field) if matched.iter().any(|(claimed, _)| claimed == field) => {}
            Some(field) => matched.push((*field, value)),
            None => matched.push((key, value)),
        }
    }

    matched
}

/// One map value: the string the event carried, or the zero value of a
/// field the event did not carry.
enum FieldValue<'a> {
    Text(Cow<'a, str>),
    Zero(&'static str),
}

impl<'de> IntoDeserializer<'de, DecodeError> for FieldValue<'_> {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self::Deserializer {
        self
    }
}

fn empty_seq() -> SeqDeserializer<std::iter::Empty<()>, DecodeError> {
    SeqDeserializer::new(std::iter::empty())
}

fn empty_map<'de>() -> MapDeserializer<'de, std::iter::Empty<((), ())>, DecodeError> {
    MapDeserializer::new(std::iter::empty())
}

// Text values go to `visit_str` whatever was asked for; zero values answer
// with the visitor's own zero.
macro_rules! zero_or_text {
    ($($method:ident => $visit:ident($zero:expr)),* $(,)?) => {$(
        fn $method<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
            match self {
                FieldValue::Zero(_) => visitor.$visit($zero),
                text => text.deserialize_any(visitor),
            }
        }
    )*};
}

impl<'de> Deserializer<'de> for FieldValue<'_> {
    type Error = DecodeError;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self {
            FieldValue::Text(text) => visitor.visit_str(&text),
            FieldValue::Zero(_) => visitor.visit_unit(),
        }
    }

    zero_or_text! {
        deserialize_bool => visit_bool(false),
        deserialize_i8 => visit_i64(0),
        deserialize_i16 => visit_i64(0),
        deserialize_i32 => visit_i64(0),
        deserialize_i64 => visit_i64(0),
        deserialize_i128 => visit_i128(0),
        deserialize_u8 => visit_u64(0),
        deserialize_u16 => visit_u64(0),
        deserialize_u32 => visit_u64(0),
        deserialize_u64 => visit_u64(0),
        deserialize_u128 => visit_u128(0),
        deserialize_f32 => visit_f64(0.0),
        deserialize_f64 => visit_f64(0.0),
        deserialize_char => visit_char('\0'),
        deserialize_str => visit_str(""),
        deserialize_string => visit_str(""),
        deserialize_identifier => visit_str(""),
        deserialize_bytes => visit_bytes(&[]),
        deserialize_byte_buf => visit_bytes(&[]),
        deserialize_seq => visit_seq(empty_seq()),
        deserialize_map => visit_map(empty_map()),
    }

    fn deserialize_unit<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self {
            FieldValue::Zero(_) => visitor.visit_unit(),
            text => text.deserialize_any(visitor),
        }
    }

    // A present value of an optional field is `Some`, as in JSON.
    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self {
            FieldValue::Text(_) => visitor.visit_some(self),
            FieldValue::Zero(_) => visitor.visit_none(),
        }
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_tuple<V: Visitor<'de>>(
        self,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        self.deserialize_seq(visitor)
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        self.deserialize_map(visitor)
    }

    // Enums have no zero value.
    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        match self {
            FieldValue::Text(text) => visitor.visit_enum(text.into_deserializer()),
            FieldValue::Zero(field) => Err(DecodeError::missing_field(field)),
        }
    }

    fn deserialize_ignored_any<V: Visitor<'de>>(
        self,
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        visitor.visit_unit()
    }
}
