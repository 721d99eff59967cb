//! Conversion of any `T: Serialize` into a [`Value`] tree.
//!
//! This is how record types take part in renaming. A struct is normalized
//! into a map whose keys are its field names as symbolic tokens
//! ([`KeyToken::Sym`]); map keys keep the kind they serialize as (strings
//! become string labels, integers and floats become literal keys). The
//! formatter itself never sees a concrete record type.
//!
//! Enum variants carrying data are represented externally tagged, as a
//! one-entry map from the variant name (a symbol) to the content.
//!
//! ```rust
//! use serde::Serialize;
//! use serde_rekey::{to_value, KeyToken, Value};
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let value = to_value(&Point { x: 1, y: 2 }).unwrap();
//! let map = value.as_object().unwrap();
//! assert_eq!(map.get(&KeyToken::sym("x")), Some(&Value::from(1)));
//! ```

use crate::{Error, KeyMap, KeyToken, Literal, Number, Result, Symbol, Value};
use num_bigint::BigInt;
use serde::{ser, Serialize};

/// Serializer producing a [`Value`] instead of text.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeTupleVariant {
    variant: &'static str,
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: KeyMap,
    current_key: Option<KeyToken>,
}

pub struct SerializeStructVariant {
    variant: &'static str,
    map: KeyMap,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v)))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        match i64::try_from(v) {
            Ok(i) => Ok(Value::Number(Number::Integer(i))),
            Err(_) => Ok(Value::BigInt(BigInt::from(v))),
        }
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        match i64::try_from(v) {
            Ok(i) => Ok(Value::Number(Number::Integer(i))),
            Err(_) => Ok(Value::BigInt(BigInt::from(v))),
        }
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        match i64::try_from(v) {
            Ok(i) => Ok(Value::Number(Number::Integer(i))),
            Err(_) => Ok(Value::BigInt(BigInt::from(v))),
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Number(Number::Float(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        let vec = v
            .iter()
            .map(|&b| Value::Number(Number::Integer(b as i64)))
            .collect();
        Ok(Value::Array(vec))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(tagged(variant, to_value(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            variant,
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            variant,
            map: KeyMap::with_capacity(len),
        })
    }
}

impl SerializeVec {
    fn new(capacity: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl SerializeMap {
    fn new(capacity: usize) -> Self {
        SerializeMap {
            map: KeyMap::with_capacity(capacity),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(tagged(self.variant, Value::Array(self.vec)))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = match to_value(key)? {
            Value::String(s) => KeyToken::Str(s),
            Value::Number(Number::Integer(i)) => KeyToken::Lit(Literal::Integer(i)),
            Value::Number(Number::Float(f)) => KeyToken::Lit(Literal::Float(f)),
            other => {
                return Err(Error::custom(format!(
                    "map keys must be strings or numbers, found {}",
                    other.type_name()
                )))
            }
        };
        self.current_key = Some(key);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(Symbol::from_static(key), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(Symbol::from_static(key), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(tagged(self.variant, Value::Object(self.map)))
    }
}

fn tagged(variant: &'static str, content: Value) -> Value {
    let mut map = KeyMap::with_capacity(1);
    map.insert(Symbol::from_static(variant), content);
    Value::Object(map)
}

/// Converts any `T: Serialize` into a [`Value`].
///
/// # Errors
///
/// Returns an error if the value's `Serialize` implementation fails or
/// produces a map key that is neither a string nor a number.
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Account {
        id: u64,
        owner: Owner,
        tags: Vec<String>,
    }

    #[derive(Serialize)]
    struct Owner {
        name: String,
    }

    #[derive(Serialize)]
    enum Event {
        Ping,
        Moved(i32),
        Resized { width: u32 },
    }

    #[test]
    fn test_struct_fields_become_symbols() {
        let account = Account {
            id: 1,
            owner: Owner {
                name: "Alice".to_string(),
            },
            tags: vec!["x".to_string()],
        };
        let value = to_value(&account).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.get(&KeyToken::sym("id")), Some(&Value::from(1)));
        let owner = map.get(&KeyToken::sym("owner")).unwrap().as_object().unwrap();
        assert_eq!(owner.get(&KeyToken::sym("name")), Some(&Value::from("Alice")));
        assert!(map.get_str("id").is_none());
    }

    #[test]
    fn test_map_keys_keep_their_kind() {
        let mut by_name = BTreeMap::new();
        by_name.insert("a".to_string(), 1);
        let value = to_value(&by_name).unwrap();
        assert_eq!(value.as_object().unwrap().get_str("a"), Some(&Value::from(1)));

        let mut by_id = BTreeMap::new();
        by_id.insert(7i64, "seven");
        let value = to_value(&by_id).unwrap();
        assert_eq!(
            value.as_object().unwrap().get(&KeyToken::from(7)),
            Some(&Value::from("seven"))
        );
    }

    #[test]
    fn test_rejects_non_scalar_map_keys() {
        let mut map = BTreeMap::new();
        map.insert(vec![1], 1);
        assert!(to_value(&map).is_err());
    }

    #[test]
    fn test_enum_variants_are_externally_tagged() {
        assert_eq!(to_value(&Event::Ping).unwrap(), Value::from("Ping"));

        let moved = to_value(&Event::Moved(3)).unwrap();
        assert_eq!(
            moved.as_object().unwrap().get(&KeyToken::sym("Moved")),
            Some(&Value::from(3))
        );

        let resized = to_value(&Event::Resized { width: 9 }).unwrap();
        let inner = resized
            .as_object()
            .unwrap()
            .get(&KeyToken::sym("Resized"))
            .unwrap();
        assert_eq!(
            inner.as_object().unwrap().get(&KeyToken::sym("width")),
            Some(&Value::from(9))
        );
    }

    #[test]
    fn test_wide_integers_become_bigint() {
        assert_eq!(
            to_value(&u64::MAX).unwrap(),
            Value::BigInt(BigInt::from(u64::MAX))
        );
        assert_eq!(to_value(&5u128).unwrap(), Value::from(5));
    }
}
