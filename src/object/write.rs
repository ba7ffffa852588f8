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

use serde_json::Value as Json;

use crate::client::{RemoteObject, SettingField};

use super::layout::{Layout, Placement};
use super::state::ObjectState;

impl Layout {
    /// Convert state into a wire object.
    ///
    /// Null and unknown attributes are left out so the server keeps its
    /// defaults. Specific resources inject their vendor constants.
    pub fn write(&self, state: &ObjectState) -> RemoteObject {
        let mut remote = RemoteObject::default();
        let mut fields = Vec::new();

        for column in &self.columns {
            let Some(json) = state.get(column.name).and_then(|value| value.to_json()) else {
                continue;
            };
            match column.placement {
                Placement::Id => remote.id = json.as_i64(),
                Placement::Property => {
                    remote.properties.insert(column.wire.to_owned(), json);
                }
                Placement::Setting => fields.push(SettingField::new(column.wire, json)),
            }
        }

        if let Some(implementation) = self.implementation {
            remote.properties.insert(
                "implementation".to_owned(),
                Json::from(implementation.implementation),
            );
            remote.properties.insert(
                "configContract".to_owned(),
                Json::from(implementation.config_contract),
            );
            if let Some(protocol) = implementation.protocol {
                remote
                    .properties
                    .insert("protocol".to_owned(), Json::from(protocol));
            }
        }

        if self.kind.is_definition() {
            remote.fields = Some(fields);
        }

        remote
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tf_provider::value::Value;

    use super::*;
    use crate::kind::{Implementation, APPLICATION, INDEXER_PROXY, TAG};
    use crate::object::state::AttrValue;

    fn implementation(name: &str) -> &'static Implementation {
        APPLICATION
            .implementations
            .iter()
            .chain(INDEXER_PROXY.implementations)
            .find(|implementation| implementation.name == name)
            .unwrap()
    }

    #[test]
    fn injects_vendor_constants() {
        let layout = Layout::resource(&APPLICATION, Some(implementation("sonarr")));
        let mut state = ObjectState::default();
        state.set("id", AttrValue::Number(Value::Unknown));
        state.set("name", AttrValue::String(Value::Value("sonarr".into())));
        state.set("sync_level", AttrValue::String(Value::Value("fullSync".into())));
        state.set("api_key", AttrValue::String(Value::Value("0123".into())));
        state.set("base_url", AttrValue::String(Value::Null));
        state.set(
            "sync_categories",
            AttrValue::NumberSet(Value::Value(
                [5000, 5010].into_iter().map(Value::Value).collect(),
            )),
        );

        assert_eq!(
            serde_json::to_value(layout.write(&state)).unwrap(),
            json!({
                "name": "sonarr",
                "syncLevel": "fullSync",
                "implementation": "Sonarr",
                "configContract": "SonarrSettings",
                "fields": [
                    {"name": "apiKey", "value": "0123"},
                    {"name": "syncCategories", "value": [5000, 5010]}
                ]
            })
        );
    }

    #[test]
    fn specific_round_trip() {
        // wire -> state -> wire keeps every exposed field and the constants
        let layout = Layout::resource(&INDEXER_PROXY, Some(implementation("socks5")));
        let body = json!({
            "id": 3,
            "name": "proxy",
            "implementation": "Socks5",
            "configContract": "Socks5Settings",
            "tags": [1, 4],
            "fields": [
                {"name": "host", "value": "proxy.local"},
                {"name": "port", "value": 1080},
                {"name": "username", "value": "user"},
                {"name": "password", "value": "pass"}
            ]
        });
        let remote: RemoteObject = serde_json::from_value(body.clone()).unwrap();

        let state = layout.read(&remote, None);
        assert_eq!(serde_json::to_value(layout.write(&state)).unwrap(), body);
        assert_eq!(layout.read(&layout.write(&state), None), state);
    }

    #[test]
    fn generic_round_trip() {
        let layout = Layout::resource(&INDEXER_PROXY, None);
        let body = json!({
            "id": 3,
            "name": "flaresolverr",
            "implementation": "FlareSolverr",
            "configContract": "FlareSolverrSettings",
            "tags": [],
            "fields": [
                {"name": "host", "value": "http://flaresolverr:8191/"},
                {"name": "requestTimeout", "value": 60}
            ]
        });
        let remote: RemoteObject = serde_json::from_value(body.clone()).unwrap();

        let state = layout.read(&remote, None);
        assert_eq!(state.string("implementation"), Some("FlareSolverr"));
        assert_eq!(serde_json::to_value(layout.write(&state)).unwrap(), body);
    }

    #[test]
    fn plain_objects_have_no_fields() {
        let layout = Layout::resource(&TAG, None);
        let mut state = ObjectState::default();
        state.set("id", AttrValue::Number(Value::Value(2)));
        state.set("label", AttrValue::String(Value::Value("tv".into())));

        assert_eq!(
            serde_json::to_value(layout.write(&state)).unwrap(),
            json!({"id": 2, "label": "tv"})
        );
    }
}
