// This file is part of the terraform-provider-prowlarr project
//
// Copyright (C) ANEO, 2024-2024. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License")
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

use lazy_static::lazy_static;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as Json;
use tf_provider::value::Value;

use crate::kind::{AttrKind, KINDS};

use super::layout::Layout;

lazy_static! {
    /// Type of every flat attribute, across all resources and data sources.
    /// Attribute names are typed consistently, which lets a state object be
    /// decoded without knowing which resource it belongs to.
    static ref ATTRIBUTE_KINDS: HashMap<&'static str, AttrKind> = KINDS
        .iter()
        .flat_map(|kind| Layout::resource(kind, None).columns)
        .map(|column| (column.name, column.kind))
        .collect();
}

fn attribute_kind(name: &str) -> Option<AttrKind> {
    ATTRIBUTE_KINDS.get(name).copied()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    String(Value<String>),
    Number(Value<i64>),
    Bool(Value<bool>),
    NumberSet(Value<BTreeSet<Value<i64>>>),
    StringSet(Value<BTreeSet<Value<String>>>),
}

impl AttrValue {
    pub fn null(kind: AttrKind) -> Self {
        match kind {
            AttrKind::String => Self::String(Value::Null),
            AttrKind::Number => Self::Number(Value::Null),
            AttrKind::Bool => Self::Bool(Value::Null),
            AttrKind::NumberSet => Self::NumberSet(Value::Null),
            AttrKind::StringSet => Self::StringSet(Value::Null),
        }
    }

    pub fn unknown(kind: AttrKind) -> Self {
        match kind {
            AttrKind::String => Self::String(Value::Unknown),
            AttrKind::Number => Self::Number(Value::Unknown),
            AttrKind::Bool => Self::Bool(Value::Unknown),
            AttrKind::NumberSet => Self::NumberSet(Value::Unknown),
            AttrKind::StringSet => Self::StringSet(Value::Unknown),
        }
    }

    pub fn is_null(&self) -> bool {
        match self {
            Self::String(value) => value.is_null(),
            Self::Number(value) => value.is_null(),
            Self::Bool(value) => value.is_null(),
            Self::NumberSet(value) => value.is_null(),
            Self::StringSet(value) => value.is_null(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        match self {
            Self::String(value) => value.is_unknown(),
            Self::Number(value) => value.is_unknown(),
            Self::Bool(value) => value.is_unknown(),
            Self::NumberSet(value) => value.is_unknown(),
            Self::StringSet(value) => value.is_unknown(),
        }
    }

    /// Convert a wire value, anything that does not fit `kind` is null
    pub fn from_json(kind: AttrKind, json: Option<&Json>) -> Self {
        let Some(json) = json else {
            return Self::null(kind);
        };
        match kind {
            AttrKind::String => Self::String(known(json.as_str().map(str::to_owned))),
            AttrKind::Number => Self::Number(known(json.as_i64())),
            AttrKind::Bool => Self::Bool(known(json.as_bool())),
            AttrKind::NumberSet => Self::NumberSet(known(json.as_array().map(|items| {
                items
                    .iter()
                    .filter_map(Json::as_i64)
                    .map(Value::Value)
                    .collect()
            }))),
            AttrKind::StringSet => Self::StringSet(known(json.as_array().map(|items| {
                items
                    .iter()
                    .filter_map(Json::as_str)
                    .map(|item| Value::Value(item.to_owned()))
                    .collect()
            }))),
        }
    }

    /// Wire value of a known attribute, `None` when null or unknown
    pub fn to_json(&self) -> Option<Json> {
        match self {
            Self::String(Value::Value(value)) => Some(Json::from(value.as_str())),
            Self::Number(Value::Value(value)) => Some(Json::from(*value)),
            Self::Bool(Value::Value(value)) => Some(Json::from(*value)),
            Self::NumberSet(Value::Value(items)) => Some(
                items
                    .iter()
                    .filter_map(|item| item.as_ref_option().copied())
                    .collect(),
            ),
            Self::StringSet(Value::Value(items)) => Some(
                items
                    .iter()
                    .filter_map(|item| item.as_ref_option().cloned())
                    .collect(),
            ),
            _ => None,
        }
    }
}

fn known<T>(value: Option<T>) -> Value<T> {
    match value {
        Some(value) => Value::Value(value),
        None => Value::Null,
    }
}

impl Serialize for AttrValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String(value) => value.serialize(serializer),
            Self::Number(value) => value.serialize(serializer),
            Self::Bool(value) => value.serialize(serializer),
            Self::NumberSet(value) => value.serialize(serializer),
            Self::StringSet(value) => value.serialize(serializer),
        }
    }
}

/// Flat state object of a table driven resource or data source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectState {
    values: BTreeMap<String, AttrValue>,
}

impl ObjectState {
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.values.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: AttrValue) {
        self.values.insert(name.into(), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Known string value
    pub fn string(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(AttrValue::String(Value::Value(value))) => Some(value),
            _ => None,
        }
    }

    /// Known number value
    pub fn number(&self, name: &str) -> Option<i64> {
        match self.values.get(name) {
            Some(AttrValue::Number(Value::Value(value))) => Some(*value),
            _ => None,
        }
    }
}

impl Serialize for ObjectState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in &self.values {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ObjectState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ObjectStateVisitor)
    }
}

struct ObjectStateVisitor;

impl<'de> Visitor<'de> for ObjectStateVisitor {
    type Value = ObjectState;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ObjectState, A::Error> {
        let mut state = ObjectState::default();
        while let Some(name) = map.next_key::<String>()? {
            let value = match attribute_kind(&name) {
                Some(AttrKind::String) => AttrValue::String(map.next_value()?),
                Some(AttrKind::Number) => AttrValue::Number(map.next_value()?),
                Some(AttrKind::Bool) => AttrValue::Bool(map.next_value()?),
                Some(AttrKind::NumberSet) => AttrValue::NumberSet(map.next_value()?),
                Some(AttrKind::StringSet) => AttrValue::StringSet(map.next_value()?),
                None => {
                    return Err(de::Error::custom(format!(
                        "unsupported attribute `{name}`"
                    )))
                }
            };
            state.values.insert(name, value);
        }
        Ok(state)
    }
}

/// State of a plural data source: a single attribute, named after the
/// collection, holding every object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectListState {
    pub name: String,
    pub objects: Value<Vec<Value<ObjectState>>>,
}

impl Serialize for ObjectListState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.objects)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for ObjectListState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ObjectListStateVisitor)
    }
}

struct ObjectListStateVisitor;

impl<'de> Visitor<'de> for ObjectListStateVisitor {
    type Value = ObjectListState;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object with a single list attribute")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ObjectListState, A::Error> {
        let mut state = ObjectListState::default();
        while let Some(name) = map.next_key::<String>()? {
            if !state.name.is_empty() {
                return Err(de::Error::custom(format!(
                    "unexpected attribute `{name}` next to `{}`",
                    state.name
                )));
            }
            state.objects = map.next_value()?;
            state.name = name;
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::client::{RemoteObject, SettingField};
    use crate::object::layout::{Column, Placement};

    #[test]
    fn registry_types() {
        assert_eq!(attribute_kind("id"), Some(AttrKind::Number));
        assert_eq!(attribute_kind("label"), Some(AttrKind::String));
        assert_eq!(attribute_kind("tags"), Some(AttrKind::NumberSet));
        assert_eq!(attribute_kind("field_tags"), Some(AttrKind::StringSet));
        assert_eq!(attribute_kind("item_priority"), Some(AttrKind::Number));
        assert_eq!(attribute_kind("nope"), None);
    }

    #[test]
    fn json_conversion() {
        assert_eq!(
            AttrValue::from_json(AttrKind::NumberSet, Some(&json!([3, 1, 2]))),
            AttrValue::NumberSet(Value::Value(
                [1, 2, 3].into_iter().map(Value::Value).collect()
            ))
        );
        assert_eq!(
            AttrValue::from_json(AttrKind::Number, Some(&json!("8080"))),
            AttrValue::Number(Value::Null)
        );
        assert_eq!(
            AttrValue::from_json(AttrKind::Bool, None),
            AttrValue::Bool(Value::Null)
        );
        assert_eq!(
            AttrValue::StringSet(Value::Value(
                ["b", "a"]
                    .into_iter()
                    .map(|item| Value::Value(item.to_owned()))
                    .collect()
            ))
            .to_json(),
            Some(json!(["a", "b"]))
        );
        assert_eq!(AttrValue::unknown(AttrKind::String).to_json(), None);
    }

    #[test]
    fn serializes_as_flat_object() {
        let mut state = ObjectState::default();
        state.set("id", AttrValue::Number(Value::Value(4)));
        state.set("label", AttrValue::String(Value::Value("movies".into())));

        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({"id": 4, "label": "movies"})
        );
    }

    #[test]
    fn tags_decode_as_number_set() {
        let state: ObjectState =
            serde_json::from_value(json!({"name": "deluge", "tags": [1, 2]})).unwrap();
        assert_eq!(
            state.get("tags"),
            Some(&AttrValue::NumberSet(Value::Value(
                [Value::Value(1), Value::Value(2)].into()
            )))
        );

        let state: ObjectState = serde_json::from_value(json!({"tags": []})).unwrap();
        assert_eq!(
            state.get("tags"),
            Some(&AttrValue::NumberSet(Value::Value(BTreeSet::new())))
        );
        assert_eq!(state.get("tags").and_then(AttrValue::to_json), Some(json!([])));
    }

    #[test]
    fn list_state_keeps_its_name() {
        let state: ObjectListState =
            serde_json::from_value(json!({"tags": [{"id": 1, "label": "movies"}]})).unwrap();
        assert_eq!(state.name, "tags");
        let Value::Value(objects) = &state.objects else {
            panic!("tags is not a known list: {state:?}");
        };
        assert_eq!(
            objects[0].as_ref_option().and_then(|tag| tag.string("label")),
            Some("movies")
        );
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({"tags": [{"id": 1, "label": "movies"}]})
        );

        let state: ObjectListState = serde_json::from_value(json!({"tags": null})).unwrap();
        assert_eq!(state.name, "tags");
        assert!(state.objects.is_null());

        assert!(serde_json::from_value::<ObjectListState>(json!({"tags": null, "id": 1})).is_err());
    }

    /// Wire value of a populated column
    fn sample(column: &Column) -> Json {
        match column.kind {
            AttrKind::String => match column.one_of.first() {
                Some(value) => json!(value),
                None => json!(format!("{}-value", column.name)),
            },
            AttrKind::Number => json!(7),
            AttrKind::Bool => json!(true),
            AttrKind::NumberSet => json!([1, 2]),
            AttrKind::StringSet => json!(["a", "b"]),
        }
    }

    fn populated(layout: &Layout) -> RemoteObject {
        let mut remote = RemoteObject::default();
        let mut fields = Vec::new();
        for column in &layout.columns {
            match column.placement {
                Placement::Id => remote.id = Some(3),
                Placement::Property => {
                    remote
                        .properties
                        .insert(column.wire.to_owned(), sample(column));
                }
                Placement::Setting => fields.push(SettingField::new(column.wire, sample(column))),
            }
        }
        if let Some(implementation) = layout.implementation {
            remote
                .properties
                .insert("implementation".to_owned(), json!(implementation.implementation));
            remote
                .properties
                .insert("configContract".to_owned(), json!(implementation.config_contract));
            if let Some(protocol) = implementation.protocol {
                remote.properties.insert("protocol".to_owned(), json!(protocol));
            }
        }
        if layout.kind.is_definition() {
            remote.fields = Some(fields);
        }
        remote
    }

    #[test]
    fn every_layout_survives_serde() {
        for kind in KINDS {
            let layouts = std::iter::once(Layout::resource(kind, None)).chain(
                kind.implementations
                    .iter()
                    .map(move |implementation| Layout::resource(kind, Some(implementation))),
            );
            for layout in layouts {
                let name = layout.full_name();
                let remote = populated(&layout);
                if kind.tagged {
                    assert_eq!(remote.property("tags"), Some(&json!([1, 2])), "{name}");
                }

                let state = layout.read(&remote, None);
                let encoded = serde_json::to_value(&state).unwrap();
                let decoded: ObjectState = serde_json::from_value(encoded)
                    .unwrap_or_else(|err| panic!("{name}: {err}"));

                assert_eq!(decoded, state, "{name}");
                assert_eq!(layout.write(&decoded), remote, "{name}");
            }
        }
    }

    #[test]
    fn rejects_unknown_attribute() {
        let result = serde_json::from_value::<ObjectState>(json!({"nope": 1}));
        assert!(result.is_err());
    }
}
