//! Tri-state record field that remembers how a key arrived.
//!
//! BigTime omits some keys, sends `null` for others, and a value for the
//! rest. Records are echoed back to the caller, so all three states have to
//! survive a decode/encode cycle. Pair every `Field` with
//! `#[serde(default, skip_serializing_if = "Field::is_absent")]`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field<T> {
    /// Key not sent.
    Absent,
    /// Key sent as `null`.
    Null,
    Value(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T> Field<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Value(value) => Some(value),
            Field::Absent | Field::Null => None,
        }
    }
}

impl<T: Copy> Field<T> {
    pub fn get(&self) -> Option<T> {
        self.value().copied()
    }
}

impl Field<String> {
    pub fn as_str(&self) -> Option<&str> {
        self.value().map(String::as_str)
    }
}

// Only reached when the key is present; a missing key takes `Default`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<T>::deserialize(deserializer)?.map_or(Field::Null, Field::Value))
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Value(value) => value.serialize(serializer),
            Field::Absent | Field::Null => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        #[serde(default, skip_serializing_if = "Field::is_absent")]
        a: Field<i64>,
        #[serde(default, skip_serializing_if = "Field::is_absent")]
        b: Field<String>,
    }

    #[test]
    fn distinguishes_missing_null_and_value() {
        let row: Row = serde_json::from_value(json!({ "a": null })).unwrap();
        assert!(row.a.is_null());
        assert!(row.b.is_absent());

        let row: Row = serde_json::from_value(json!({ "a": 3, "b": "x" })).unwrap();
        assert_eq!(row.a.get(), Some(3));
        assert_eq!(row.b.as_str(), Some("x"));
    }

    #[test]
    fn encodes_back_to_the_same_shape() {
        for raw in [json!({}), json!({ "a": null }), json!({ "a": 1, "b": null }), json!({ "b": "x" })] {
            let row: Row = serde_json::from_value(raw.clone()).unwrap();
            assert_eq!(serde_json::to_value(&row).unwrap(), raw);
        }
    }

    #[test]
    fn wrong_type_is_still_an_error() {
        assert!(serde_json::from_value::<Row>(json!({ "a": "three" })).is_err());
    }
}
