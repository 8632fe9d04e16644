//! Checkbox-style boolean flag used on the create path.
//!
//! HTML forms submit a checked checkbox as the string `"on"` and omit the
//! field entirely when unchecked. [`CheckboxFlag`] accepts any incoming value
//! and resolves it to `true` only for that exact string, so a create request
//! never fails because of the flag's type.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

/// The literal value a checked checkbox submits.
pub const CHECKED: &str = "on";

/// A boolean decoded from a form-style checkbox value.
///
/// Defaults to unchecked, so a missing field deserializes to `false`
/// when the containing struct marks it `#[serde(default)]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckboxFlag(bool);

impl CheckboxFlag {
    /// Coerce a raw string value.
    pub fn from_value(value: &str) -> Self {
        Self(value == CHECKED)
    }

    pub fn is_checked(self) -> bool {
        self.0
    }
}

impl From<CheckboxFlag> for bool {
    fn from(flag: CheckboxFlag) -> Self {
        flag.0
    }
}

impl<'de> Deserialize<'de> for CheckboxFlag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(CheckboxVisitor)
    }
}

struct CheckboxVisitor;

impl<'de> Visitor<'de> for CheckboxVisitor {
    type Value = CheckboxFlag;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any checkbox value")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(CheckboxFlag::from_value(v))
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Self::Value, E> {
        Ok(CheckboxFlag(false))
    }

    fn visit_i64<E: de::Error>(self, _v: i64) -> Result<Self::Value, E> {
        Ok(CheckboxFlag(false))
    }

    fn visit_u64<E: de::Error>(self, _v: u64) -> Result<Self::Value, E> {
        Ok(CheckboxFlag(false))
    }

    fn visit_f64<E: de::Error>(self, _v: f64) -> Result<Self::Value, E> {
        Ok(CheckboxFlag(false))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(CheckboxFlag(false))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(CheckboxFlag(false))
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(CheckboxFlag(false))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(CheckboxFlag(false))
    }
}
