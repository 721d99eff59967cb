//! Deserialization of a [`Value`] tree into any `T: Deserialize`.
//!
//! This closes the loop of the typical pipeline: externally shaped data is
//! loaded as a `Value`, renamed with [`format`](crate::format), and then
//! deserialized into the host's own types.
//!
//! Map keys are handed to the target as strings (string labels, symbols and
//! raw literals) or numbers (integer and float literals). Enums are read
//! externally tagged, mirroring [`to_value`](crate::to_value).
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_rekey::{from_value, tree};
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Point { x: i32, y: i32 }
//!
//! let point: Point = from_value(tree!({"x": 1, "y": 2})).unwrap();
//! assert_eq!(point, Point { x: 1, y: 2 });
//! ```

use crate::{Error, KeyToken, Literal, Number, Result, Value};
use serde::de::value::{MapDeserializer, SeqDeserializer, StringDeserializer};
use serde::de::{
    self, DeserializeOwned, DeserializeSeed, EnumAccess, IntoDeserializer, VariantAccess, Visitor,
};
use serde::forward_to_deserialize_any;

/// Deserializes an instance of `T` from a [`Value`].
///
/// # Errors
///
/// Returns an error if the value's shape does not match `T`.
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(value)
}

impl<'de> IntoDeserializer<'de, Error> for Value {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self::Deserializer {
        self
    }
}

impl<'de> de::Deserializer<'de> for Value {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Number(Number::Integer(i)) => visitor.visit_i64(i),
            Value::Number(Number::Float(f)) => visitor.visit_f64(f),
            Value::String(s) => visitor.visit_string(s),
            Value::Array(items) => {
                let mut seq: SeqDeserializer<_, Error> = SeqDeserializer::new(items.into_iter());
                let value = visitor.visit_seq(&mut seq)?;
                seq.end()?;
                Ok(value)
            }
            Value::Object(map) => {
                let mut entries: MapDeserializer<'_, _, Error> =
                    MapDeserializer::new(map.into_iter());
                let value = visitor.visit_map(&mut entries)?;
                entries.end()?;
                Ok(value)
            }
            Value::Date(dt) => visitor.visit_string(dt.to_rfc3339()),
            Value::BigInt(bi) => match u64::try_from(&bi) {
                Ok(n) => visitor.visit_u64(n),
                Err(_) => visitor.visit_string(bi.to_string()),
            },
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::Null => visitor.visit_none(),
            other => visitor.visit_some(other),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::String(variant) => {
                let variant: StringDeserializer<Error> = variant.into_deserializer();
                visitor.visit_enum(variant)
            }
            Value::Object(map) if map.len() == 1 => {
                let mut entries = map.into_iter();
                match entries.next() {
                    Some((variant, value)) => {
                        visitor.visit_enum(EnumDeserializer { variant, value })
                    }
                    None => Err(Error::custom(format!("expected enum {}", name))),
                }
            }
            other => Err(Error::custom(format!(
                "expected enum {} as a string or a single-entry map, found {}",
                name,
                other.type_name()
            ))),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

/// Deserializer for map keys.
pub struct KeyTokenDeserializer(KeyToken);

impl<'de> IntoDeserializer<'de, Error> for KeyToken {
    type Deserializer = KeyTokenDeserializer;

    fn into_deserializer(self) -> Self::Deserializer {
        KeyTokenDeserializer(self)
    }
}

impl<'de> de::Deserializer<'de> for KeyTokenDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.0 {
            KeyToken::Str(s) | KeyToken::Lit(Literal::Raw(s)) => visitor.visit_string(s),
            KeyToken::Sym(sym) => visitor.visit_str(sym.as_str()),
            KeyToken::Lit(Literal::Integer(i)) => visitor.visit_i64(i),
            KeyToken::Lit(Literal::Float(f)) => visitor.visit_f64(f),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

struct EnumDeserializer {
    variant: KeyToken,
    value: Value,
}

impl<'de> EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<S>(self, seed: S) -> Result<(S::Value, Self::Variant)>
    where
        S: DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(self.variant.into_deserializer())?;
        Ok((variant, VariantDeserializer(self.value)))
    }
}

struct VariantDeserializer(Value);

impl<'de> VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.0 {
            Value::Null => Ok(()),
            other => Err(Error::custom(format!(
                "expected unit variant, found {}",
                other.type_name()
            ))),
        }
    }

    fn newtype_variant_seed<S>(self, seed: S) -> Result<S::Value>
    where
        S: DeserializeSeed<'de>,
    {
        seed.deserialize(self.0)
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.0 {
            value @ Value::Array(_) => de::Deserializer::deserialize_any(value, visitor),
            other => Err(Error::custom(format!(
                "expected tuple variant, found {}",
                other.type_name()
            ))),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self.0 {
            value @ Value::Object(_) => de::Deserializer::deserialize_any(value, visitor),
            other => Err(Error::custom(format!(
                "expected struct variant, found {}",
                other.type_name()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{to_value, KeyMap};
    use chrono::{DateTime, Utc};
    use num_bigint::BigInt;
    use serde::{Deserialize, Serialize};
    use std::collections::BTreeMap;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        nickname: Option<String>,
        roles: Vec<Role>,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    enum Role {
        Admin,
        Member(u32),
        Guest { until: String },
    }

    #[test]
    fn test_record_round_trip_through_value() {
        let user = User {
            id: 7,
            name: "Alice".to_string(),
            nickname: None,
            roles: vec![
                Role::Admin,
                Role::Member(3),
                Role::Guest {
                    until: "friday".to_string(),
                },
            ],
        };
        let value = to_value(&user).unwrap();
        let back: User = from_value(value).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_string_keys_feed_struct_fields() {
        let mut map = KeyMap::new();
        map.insert("id", Value::from(1));
        map.insert("name", Value::from("Bob"));
        map.insert("nickname", Value::from("bobby"));
        map.insert("roles", Value::Array(vec![]));
        let user: User = from_value(Value::Object(map)).unwrap();
        assert_eq!(user.nickname.as_deref(), Some("bobby"));
    }

    #[test]
    fn test_integer_literal_keys() {
        let mut map = KeyMap::new();
        map.insert(KeyToken::from(2), Value::from("two"));
        let parsed: BTreeMap<u8, String> = from_value(Value::Object(map)).unwrap();
        assert_eq!(parsed.get(&2).map(String::as_str), Some("two"));
    }

    #[test]
    fn test_opaque_leaves_read_as_strings_or_numbers() {
        let created = DateTime::parse_from_rfc3339("2024-01-02T03:04:05Z")
            .unwrap()
            .with_timezone(&Utc);
        let text: String = from_value(Value::from(created)).unwrap();
        assert_eq!(text, "2024-01-02T03:04:05+00:00");

        let wide: u64 = from_value(Value::BigInt(BigInt::from(u64::MAX))).unwrap();
        assert_eq!(wide, u64::MAX);
        let huge: String = from_value(Value::BigInt(BigInt::from(u64::MAX) * BigInt::from(2))).unwrap();
        assert_eq!(huge, "36893488147419103230");
    }

    #[test]
    fn test_shape_mismatch_is_an_error() {
        let result: Result<User> = from_value(Value::from("nope"));
        assert!(result.is_err());
    }
}
