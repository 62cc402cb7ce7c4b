//! String-keyed wire form of an [`ActionSet`]:
//! `{"remove": [..], "set": {..}, "toggle": {..}}`.
//!
//! Object order is kept, since it decides where new parameters land. A `null`
//! entry inside `set` or `toggle` drops that key; unknown top-level keys are ignored.

use crate::action::{ActionSet, ParamAction, SetValue, Value, upsert};
use crate::compat::{String, Vec};
use core::fmt;
use core::marker::PhantomData;
use serde::de::{Deserialize, Deserializer, Error as _, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String(s) => serializer.serialize_str(s),
            Self::Integer(n) => serializer.serialize_i64(*n),
            Self::Unsigned(n) => serializer.serialize_u64(*n),
            Self::Float(n) => serializer.serialize_f64(*n),
            Self::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

struct ValueVisitor;

impl Visitor<'_> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number or boolean")
    }

    fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Integer(v))
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(Value::Unsigned(v))
    }

    fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.into()))
    }

    fn visit_string<E: serde::de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

impl Serialize for SetValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::One(value) => value.serialize(serializer),
            Self::Many(values) => serializer.collect_seq(values),
        }
    }
}

/// Scalars become [`SetValue::One`], arrays [`SetValue::Many`].
struct SetValueVisitor;

impl<'de> Visitor<'de> for SetValueVisitor {
    type Value = SetValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean or an array of those")
    }

    fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<SetValue, E> {
        ValueVisitor.visit_bool(v).map(SetValue::One)
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<SetValue, E> {
        ValueVisitor.visit_i64(v).map(SetValue::One)
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<SetValue, E> {
        ValueVisitor.visit_u64(v).map(SetValue::One)
    }

    fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<SetValue, E> {
        ValueVisitor.visit_f64(v).map(SetValue::One)
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<SetValue, E> {
        ValueVisitor.visit_str(v).map(SetValue::One)
    }

    fn visit_string<E: serde::de::Error>(self, v: String) -> Result<SetValue, E> {
        ValueVisitor.visit_string(v).map(SetValue::One)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<SetValue, A::Error> {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element()? {
            values.push(value);
        }
        Ok(SetValue::Many(values))
    }
}

impl<'de> Deserialize<'de> for SetValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SetValueVisitor)
    }
}

/// Object entries in declaration order.
struct Entries<T>(Vec<(String, T)>);

struct EntriesVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
    type Value = Entries<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object of parameter values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Entries<T>, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, Option<T>>()? {
            match value {
                Some(value) => upsert(&mut entries, key, value),
                None => entries.retain(|(k, _)| *k != key),
            }
        }
        Ok(Entries(entries))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Entries<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

struct EntriesRef<'a, T>(&'a [(String, T)]);

impl<T: Serialize> Serialize for EntriesRef<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

impl Serialize for ActionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = ParamAction::RESOLVE_ORDER
            .iter()
            .filter(|&&action| self.has(action))
            .count();
        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(remove) = &self.remove {
            map.serialize_entry(ParamAction::Remove.as_str(), remove)?;
        }
        if let Some(set) = &self.set {
            map.serialize_entry(ParamAction::Set.as_str(), &EntriesRef(set))?;
        }
        if let Some(toggle) = &self.toggle {
            map.serialize_entry(ParamAction::Toggle.as_str(), &EntriesRef(toggle))?;
        }
        map.end()
    }
}

struct ActionSetVisitor;

impl<'de> Visitor<'de> for ActionSetVisitor {
    type Value = ActionSet;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with optional `remove`, `set` and `toggle` fields")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ActionSet, A::Error> {
        let mut actions = ActionSet::new();
        while let Some(key) = map.next_key::<String>()? {
            match key.parse::<ParamAction>() {
                Ok(ParamAction::Remove) => {
                    if actions.remove.is_some() {
                        return Err(A::Error::duplicate_field(ParamAction::Remove.as_str()));
                    }
                    actions.remove = map.next_value()?;
                }
                Ok(ParamAction::Set) => {
                    if actions.set.is_some() {
                        return Err(A::Error::duplicate_field(ParamAction::Set.as_str()));
                    }
                    actions.set = map.next_value::<Option<Entries<SetValue>>>()?.map(|e| e.0);
                }
                Ok(ParamAction::Toggle) => {
                    if actions.toggle.is_some() {
                        return Err(A::Error::duplicate_field(ParamAction::Toggle.as_str()));
                    }
                    actions.toggle = map.next_value::<Option<Entries<Value>>>()?.map(|e| e.0);
                }
                Err(_) => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(actions)
    }
}

impl<'de> Deserialize<'de> for ActionSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ActionSetVisitor)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_keeps_order() {
        let actions: ActionSet = serde_json::from_str(
            r#"{"set": {"z": 1, "a": [20, 40], "m": "x"}, "toggle": {"tbm": "isch"}, "remove": ["q"]}"#,
        )
        .unwrap();

        let expected = ActionSet::new()
            .set("z", 1_u64)
            .set_many("a", [20_u64, 40])
            .set("m", "x")
            .toggle("tbm", "isch")
            .remove("q");
        assert_eq!(actions, expected);
    }

    #[test]
    fn test_null_entries_dropped() {
        let actions: ActionSet =
            serde_json::from_value(json!({"set": {"a": null, "b": 2}, "toggle": null})).unwrap();
        assert_eq!(actions, ActionSet::new().set("b", 2_u64));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let actions: ActionSet = serde_json::from_value(json!({"other": [1, 2]})).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn test_scalar_types() {
        let actions: ActionSet =
            serde_json::from_value(json!({"set": {"i": -3, "f": 1.5, "b": true}})).unwrap();
        assert_eq!(
            actions,
            ActionSet::new().set("i", -3_i64).set("f", 1.5).set("b", true)
        );
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(serde_json::from_value::<ActionSet>(json!([])).is_err());
        assert!(serde_json::from_value::<ActionSet>(json!({"remove": "a"})).is_err());
        assert!(serde_json::from_value::<ActionSet>(json!({"set": {"a": {"b": 1}}})).is_err());
        assert!(serde_json::from_str::<ActionSet>(r#"{"set": {}, "set": {}}"#).is_err());
    }

    #[test]
    fn test_serialize() {
        let actions = ActionSet::new()
            .remove("q")
            .set_many("num", [20, 40])
            .toggle("tbm", "isch");
        assert_eq!(
            serde_json::to_string(&actions).unwrap(),
            r#"{"remove":["q"],"set":{"num":[20,40]},"toggle":{"tbm":"isch"}}"#
        );
    }
}
