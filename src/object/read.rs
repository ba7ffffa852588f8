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

use tf_provider::value::Value;

use crate::client::RemoteObject;

use super::layout::{Column, Layout, Placement};
use super::state::{AttrValue, ObjectState};

impl Layout {
    /// Convert a wire object into state.
    ///
    /// Sensitive settings come back masked (or not at all): their value is
    /// taken from `prior` instead, or left null when there is no prior value.
    pub fn read(&self, remote: &RemoteObject, prior: Option<&ObjectState>) -> ObjectState {
        let mut state = ObjectState::default();
        for column in &self.columns {
            state.set(column.name, read_column(column, remote, prior));
        }
        state
    }
}

fn read_column(column: &Column, remote: &RemoteObject, prior: Option<&ObjectState>) -> AttrValue {
    match column.placement {
        Placement::Id => AttrValue::Number(match remote.id {
            Some(id) => Value::Value(id),
            None => Value::Null,
        }),
        Placement::Property => AttrValue::from_json(column.kind, remote.property(column.wire)),
        Placement::Setting => {
            let setting = remote.setting(column.wire);
            let hidden = setting.map_or(true, |setting| setting.is_masked());
            if column.sensitive && hidden {
                prior
                    .and_then(|prior| prior.get(column.name))
                    .filter(|value| !value.is_unknown())
                    .cloned()
                    .unwrap_or_else(|| AttrValue::null(column.kind))
            } else {
                AttrValue::from_json(column.kind, setting.and_then(|setting| setting.value()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::client::types::MASK;
    use crate::kind::{APPLICATION, DOWNLOAD_CLIENT, SYNC_PROFILE};

    fn deluge() -> Layout {
        let deluge = DOWNLOAD_CLIENT
            .implementations
            .iter()
            .find(|implementation| implementation.name == "deluge")
            .unwrap();
        Layout::resource(&DOWNLOAD_CLIENT, Some(deluge))
    }

    fn remote(body: serde_json::Value) -> RemoteObject {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn reads_properties_and_settings() {
        let state = deluge().read(
            &remote(json!({
                "id": 7,
                "name": "deluge",
                "enable": true,
                "priority": 1,
                "protocol": "torrent",
                "implementation": "Deluge",
                "tags": [2, 1],
                "fields": [
                    {"name": "host", "value": "deluge"},
                    {"name": "port", "value": 8112},
                    {"name": "useSsl", "value": false},
                    {"name": "priority", "value": 0},
                    {"name": "category"},
                    {"name": "unexposed", "value": "x"}
                ]
            })),
            None,
        );

        assert_eq!(state.number("id"), Some(7));
        assert_eq!(state.string("name"), Some("deluge"));
        assert_eq!(state.get("enable"), Some(&AttrValue::Bool(Value::Value(true))));
        assert_eq!(state.number("port"), Some(8112));
        assert_eq!(state.number("item_priority"), Some(0));
        assert_eq!(state.get("category"), Some(&AttrValue::String(Value::Null)));
        assert_eq!(state.get("url_base"), Some(&AttrValue::String(Value::Null)));
        assert_eq!(
            state.get("tags"),
            Some(&AttrValue::NumberSet(Value::Value(
                [1, 2].into_iter().map(Value::Value).collect()
            )))
        );
        // vendor constants are not part of the specific schema
        assert!(!state.contains("implementation"));
        assert!(!state.contains("unexposed"));
    }

    #[test]
    fn masked_secret_keeps_prior_value() {
        let layout = deluge();
        let mut prior = ObjectState::default();
        prior.set("password", AttrValue::String(Value::Value("hunter2".into())));

        let body = remote(json!({
            "id": 7,
            "name": "deluge",
            "fields": [{"name": "password", "value": MASK, "privacy": "password"}]
        }));

        let state = layout.read(&body, Some(&prior));
        assert_eq!(state.string("password"), Some("hunter2"));

        let state = layout.read(&body, None);
        assert_eq!(state.get("password"), Some(&AttrValue::String(Value::Null)));

        prior.set("password", AttrValue::String(Value::Unknown));
        let state = layout.read(&body, Some(&prior));
        assert_eq!(state.get("password"), Some(&AttrValue::String(Value::Null)));
    }

    #[test]
    fn clear_secret_is_read() {
        let state = Layout::resource(&APPLICATION, None).read(
            &remote(json!({
                "id": 1,
                "name": "sonarr",
                "fields": [{"name": "apiKey", "value": "0123"}]
            })),
            None,
        );
        assert_eq!(state.string("api_key"), Some("0123"));
    }

    #[test]
    fn reads_plain_object() {
        let state = Layout::resource(&SYNC_PROFILE, None).read(
            &remote(json!({
                "id": 1,
                "name": "Standard",
                "enableRss": true,
                "enableInteractiveSearch": true,
                "enableAutomaticSearch": false,
                "minimumSeeders": 1
            })),
            None,
        );
        assert_eq!(state.string("name"), Some("Standard"));
        assert_eq!(
            state.get("enable_automatic_search"),
            Some(&AttrValue::Bool(Value::Value(false)))
        );
        assert_eq!(state.number("minimum_seeders"), Some(1));
        assert!(!state.contains("tags"));
    }
}
