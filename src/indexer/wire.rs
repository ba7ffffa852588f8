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

use std::borrow::Cow;
use std::collections::BTreeSet;

use serde_json::{json, Map, Value as Json};
use tf_provider::value::{Value, ValueNumber, ValueString};

use crate::client::{RemoteObject, SettingField};

use super::state::{IndexerField, IndexerState};

fn string_json(value: &ValueString) -> Option<Json> {
    value.as_deref_option().map(|value| Json::String(value.to_owned()))
}

fn number_json(value: &ValueNumber) -> Option<Json> {
    value.as_ref_option().map(|value| json!(value))
}

fn set_json(value: &Value<BTreeSet<ValueNumber>>) -> Option<Json> {
    value.as_ref_option().map(|values| {
        Json::Array(
            values
                .iter()
                .filter_map(|value| value.as_ref_option())
                .map(|value| json!(value))
                .collect(),
        )
    })
}

fn json_string(json: Option<&Json>) -> ValueString<'static> {
    match json {
        Some(Json::String(value)) => Value::Value(Cow::Owned(value.clone())),
        Some(Json::Number(value)) => Value::Value(Cow::Owned(value.to_string())),
        Some(Json::Bool(value)) => Value::Value(Cow::Owned(value.to_string())),
        _ => Value::Null,
    }
}

fn json_number(json: Option<&Json>) -> ValueNumber {
    match json.and_then(Json::as_i64) {
        Some(value) => Value::Value(value),
        None => Value::Null,
    }
}

fn json_bool(json: Option<&Json>) -> Value<bool> {
    match json.and_then(Json::as_bool) {
        Some(value) => Value::Value(value),
        None => Value::Null,
    }
}

fn json_set(json: Option<&Json>) -> Value<BTreeSet<ValueNumber>> {
    match json.and_then(Json::as_array) {
        Some(values) => Value::Value(
            values
                .iter()
                .filter_map(Json::as_i64)
                .map(Value::Value)
                .collect(),
        ),
        None => Value::Null,
    }
}

impl<'a> IndexerField<'a> {
    fn to_json(&self) -> Option<Json> {
        string_json(&self.text_value)
            .or_else(|| number_json(&self.number_value))
            .or_else(|| self.bool_value.as_ref_option().map(|value| json!(value)))
            .or_else(|| set_json(&self.set_value))
    }

    /// Entry guessed from the JSON type, for fields absent from the configuration
    fn from_json(name: &str, json: &Json) -> Option<IndexerField<'static>> {
        let field = IndexerField {
            name: Value::Value(Cow::Owned(name.to_owned())),
            ..Default::default()
        };
        match json {
            Json::String(_) => Some(IndexerField {
                text_value: json_string(Some(json)),
                ..field
            }),
            Json::Number(number) if number.is_i64() => Some(IndexerField {
                number_value: json_number(Some(json)),
                ..field
            }),
            Json::Bool(_) => Some(IndexerField {
                bool_value: json_bool(Some(json)),
                ..field
            }),
            Json::Array(values) if values.iter().all(Json::is_i64) => Some(IndexerField {
                set_value: json_set(Some(json)),
                ..field
            }),
            _ => None,
        }
    }

    /// Same value slot as `self`, filled from `json`
    fn refresh(&self, json: Option<&Json>) -> IndexerField<'static> {
        let name = self.name.as_deref_option().unwrap_or_default().to_owned();
        IndexerField {
            name: Value::Value(Cow::Owned(name)),
            text_value: if !self.text_value.is_null() {
                json_string(json)
            } else {
                Value::Null
            },
            number_value: if !self.number_value.is_null() {
                json_number(json)
            } else {
                Value::Null
            },
            bool_value: if !self.bool_value.is_null() {
                json_bool(json)
            } else {
                Value::Null
            },
            set_value: if !self.set_value.is_null() {
                json_set(json)
            } else {
                Value::Null
            },
        }
    }
}

impl<'a> IndexerState<'a> {
    /// Request body for create and update
    pub fn to_remote(&self) -> RemoteObject {
        let mut properties = Map::new();
        let mut insert = |wire: &str, json: Option<Json>| {
            if let Some(json) = json {
                properties.insert(wire.to_owned(), json);
            }
        };
        insert("name", string_json(&self.name));
        insert("enable", self.enable.as_ref_option().map(|value| json!(value)));
        insert("priority", number_json(&self.priority));
        insert("appProfileId", number_json(&self.app_profile_id));
        insert("downloadClientId", number_json(&self.download_client_id));
        insert("implementation", string_json(&self.implementation));
        insert("configContract", string_json(&self.config_contract));
        insert("protocol", string_json(&self.protocol));
        insert("tags", set_json(&self.tags));

        let fields = self
            .fields
            .iter()
            .flatten()
            .filter_map(|field| field.as_ref_option())
            .filter_map(|field| {
                Some(SettingField::new(
                    field.name.as_deref_option()?,
                    field.to_json()?,
                ))
            });
        let sensitive_fields = self
            .sensitive_fields
            .iter()
            .flatten()
            .filter_map(|(name, value)| {
                Some(SettingField::new(name.to_string(), string_json(value)?))
            });

        RemoteObject {
            id: self.id.as_ref_option().copied(),
            fields: Some(fields.chain(sensitive_fields).collect()),
            properties,
        }
    }

    /// State from a wire object.
    ///
    /// With a `prior` state, only the settings it lists are read back, in the
    /// same order and value slots; masked secrets keep their prior value.
    /// Without one, every non private setting is returned.
    pub fn from_remote(remote: &RemoteObject, prior: Option<&IndexerState<'_>>) -> IndexerState<'static> {
        let string = |wire: &str| json_string(remote.property(wire));
        let number = |wire: &str| json_number(remote.property(wire));

        let prior_fields = prior.and_then(|prior| prior.fields.as_ref_option());
        let fields = match prior_fields {
            Some(fields) => fields
                .iter()
                .map(|field| match field {
                    Value::Value(field) => {
                        let name = field.name.as_deref_option().unwrap_or_default();
                        Value::Value(field.refresh(remote.setting(name).and_then(SettingField::value)))
                    }
                    _ => Value::Null,
                })
                .collect(),
            None => remote
                .settings()
                .filter(|setting| !setting.is_private())
                .filter_map(|setting| {
                    IndexerField::from_json(&setting.name, setting.value()?).map(Value::Value)
                })
                .collect(),
        };

        let sensitive_fields = match prior.map(|prior| &prior.sensitive_fields) {
            Some(Value::Value(prior)) => Value::Value(
                prior
                    .iter()
                    .map(|(name, value)| {
                        let value = match remote.setting(name) {
                            Some(setting) if !setting.is_masked() => {
                                json_string(setting.value())
                            }
                            _ => match value {
                                Value::Value(value) => Value::Value(Cow::Owned(value.to_string())),
                                _ => Value::Null,
                            },
                        };
                        (Cow::Owned(name.to_string()), value)
                    })
                    .collect(),
            ),
            _ => Value::Null,
        };

        IndexerState {
            id: match remote.id {
                Some(id) => Value::Value(id),
                None => Value::Null,
            },
            name: string("name"),
            enable: json_bool(remote.property("enable")),
            priority: number("priority"),
            app_profile_id: number("appProfileId"),
            download_client_id: number("downloadClientId"),
            implementation: string("implementation"),
            config_contract: string("configContract"),
            protocol: string("protocol"),
            privacy: string("privacy"),
            language: string("language"),
            tags: json_set(remote.property("tags")),
            fields: Value::Value(fields),
            sensitive_fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::client::types::MASK;

    fn remote() -> RemoteObject {
        serde_json::from_value(json!({
            "id": 7,
            "name": "Nyaa",
            "enable": true,
            "priority": 25,
            "appProfileId": 1,
            "downloadClientId": 0,
            "implementation": "Cardigann",
            "configContract": "CardigannSettings",
            "protocol": "torrent",
            "privacy": "public",
            "language": "en-US",
            "tags": [1, 2],
            "fields": [
                {"name": "definitionFile", "value": "nyaasi"},
                {"name": "baseUrl", "value": "https://nyaa.si/"},
                {"name": "torrentBaseSettings.seedRatio", "value": null},
                {"name": "sonarr_compatibility", "value": false},
                {"name": "radarr_compatibility", "value": true},
                {"name": "filter-id", "value": 2},
                {"name": "cat-id", "value": [1000, 2000]},
                {"name": "info", "value": {"type": "info"}},
                {"name": "passkey", "value": MASK, "privacy": "apiKey"}
            ]
        }))
        .unwrap()
    }

    fn text<'a>(name: &'a str, value: &'a str) -> Value<IndexerField<'a>> {
        Value::Value(IndexerField {
            name: Value::Value(Cow::Borrowed(name)),
            text_value: Value::Value(Cow::Borrowed(value)),
            ..Default::default()
        })
    }

    #[test]
    fn import_reads_every_public_setting() {
        let state = IndexerState::from_remote(&remote(), None);

        assert_eq!(state.id, Value::Value(7));
        assert_eq!(state.privacy, Value::Value(Cow::Borrowed("public")));
        assert_eq!(
            state.tags,
            Value::Value([Value::Value(1), Value::Value(2)].into())
        );
        assert_eq!(
            state.setting_names().collect::<Vec<_>>(),
            vec![
                "definitionFile",
                "baseUrl",
                "sonarr_compatibility",
                "radarr_compatibility",
                "filter-id",
                "cat-id"
            ]
        );
        assert!(state.sensitive_fields.is_null());
    }

    #[test]
    fn read_keeps_prior_layout() {
        let prior = IndexerState {
            fields: Value::Value(vec![
                text("baseUrl", "https://nyaa.land/"),
                Value::Value(IndexerField {
                    name: Value::Value(Cow::Borrowed("filter-id")),
                    text_value: Value::Value(Cow::Borrowed("2")),
                    ..Default::default()
                }),
                text("definitionFile", "nyaasi"),
            ]),
            sensitive_fields: Value::Value(
                [(Cow::Borrowed("passkey"), Value::Value(Cow::Borrowed("hunter2")))].into(),
            ),
            ..Default::default()
        };
        let state = IndexerState::from_remote(&remote(), Some(&prior));

        assert_eq!(
            state.fields,
            Value::Value(vec![
                text("baseUrl", "https://nyaa.si/"),
                text("filter-id", "2"),
                text("definitionFile", "nyaasi"),
            ])
        );
        assert_eq!(state.sensitive_fields, prior.sensitive_fields);
    }

    #[test]
    fn write_then_read() {
        let state = IndexerState {
            name: Value::Value(Cow::Borrowed("Nyaa")),
            enable: Value::Value(true),
            priority: Value::Unknown,
            app_profile_id: Value::Value(1),
            implementation: Value::Value(Cow::Borrowed("Cardigann")),
            config_contract: Value::Value(Cow::Borrowed("CardigannSettings")),
            tags: Value::Value([Value::Value(3)].into()),
            fields: Value::Value(vec![
                text("definitionFile", "nyaasi"),
                Value::Value(IndexerField {
                    name: Value::Value(Cow::Borrowed("cat-id")),
                    set_value: Value::Value([Value::Value(1000)].into()),
                    ..Default::default()
                }),
            ]),
            sensitive_fields: Value::Value(
                [(Cow::Borrowed("passkey"), Value::Value(Cow::Borrowed("hunter2")))].into(),
            ),
            ..Default::default()
        };

        let remote = state.to_remote();
        assert_eq!(
            serde_json::to_value(&remote).unwrap(),
            json!({
                "name": "Nyaa",
                "enable": true,
                "appProfileId": 1,
                "implementation": "Cardigann",
                "configContract": "CardigannSettings",
                "tags": [3],
                "fields": [
                    {"name": "definitionFile", "value": "nyaasi"},
                    {"name": "cat-id", "value": [1000]},
                    {"name": "passkey", "value": "hunter2"}
                ]
            })
        );

        let read = IndexerState::from_remote(&remote, Some(&state));
        assert_eq!(read.fields, state.fields);
        assert_eq!(read.sensitive_fields, state.sensitive_fields);
        assert_eq!(read.tags, state.tags);
    }
}
