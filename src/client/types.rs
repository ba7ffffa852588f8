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

// Wire shapes of the Prowlarr `/api/v1` endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as Json};

/// Value Prowlarr sends in place of a secret
pub const MASK: &str = "********";

/// Any object of a Prowlarr collection.
///
/// Only `id` and the `fields` array of provider definitions are typed; every
/// other property is kept as raw JSON and interpreted by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<SettingField>>,
    #[serde(flatten)]
    pub properties: Map<String, Json>,
}

impl RemoteObject {
    /// Non-null top-level property
    pub fn property(&self, wire: &str) -> Option<&Json> {
        self.properties.get(wire).filter(|value| !value.is_null())
    }

    pub fn label(&self, wire: &str) -> Option<&str> {
        self.property(wire).and_then(Json::as_str)
    }

    pub fn setting(&self, wire: &str) -> Option<&SettingField> {
        self.fields.iter().flatten().find(|field| field.name == wire)
    }

    pub fn settings(&self) -> impl Iterator<Item = &SettingField> {
        self.fields.iter().flatten()
    }
}

/// Entry of the `fields` array of a provider definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingField {
    pub name: String,
    #[serde(default)]
    pub value: Json,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<String>,
}

impl SettingField {
    pub fn new(name: impl Into<String>, value: Json) -> Self {
        Self {
            name: name.into(),
            value,
            privacy: None,
        }
    }

    /// Non-null value
    pub fn value(&self) -> Option<&Json> {
        Some(&self.value).filter(|value| !value.is_null())
    }

    /// Passwords and API keys are never sent back in clear
    pub fn is_private(&self) -> bool {
        matches!(self.privacy.as_deref(), Some("password" | "apiKey"))
    }

    pub fn is_masked(&self) -> bool {
        self.value.as_str() == Some(MASK)
    }
}

/// One entry of a 400 response body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationFailure {
    #[serde(default)]
    pub property_name: Option<String>,
    pub error_message: String,
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.property_name.as_deref() {
            Some(property) if !property.is_empty() => {
                write!(f, "{property}: {}", self.error_message)
            }
            _ => f.write_str(&self.error_message),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
    #[serde(default)]
    pub app_name: Option<String>,
    #[serde(default)]
    pub instance_name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub authentication: Option<String>,
    #[serde(default)]
    pub url_base: Option<String>,
    #[serde(default)]
    pub os_name: Option<String>,
    #[serde(default)]
    pub is_docker: Option<bool>,
    #[serde(default)]
    pub start_time: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn remote_object_keeps_unknown_properties() {
        let body = json!({
            "id": 3,
            "name": "deluge",
            "enable": true,
            "implementationName": "Deluge",
            "fields": [
                {"name": "host", "value": "localhost", "privacy": "normal"},
                {"name": "password", "value": MASK, "privacy": "password"},
                {"name": "category"}
            ]
        });
        let remote: RemoteObject = serde_json::from_value(body).unwrap();

        assert_eq!(remote.id, Some(3));
        assert_eq!(remote.label("name"), Some("deluge"));
        assert_eq!(remote.property("enable"), Some(&json!(true)));
        assert!(remote.setting("password").unwrap().is_private());
        assert!(remote.setting("password").unwrap().is_masked());
        assert_eq!(remote.setting("category").unwrap().value(), None);
        assert!(remote.setting("missing").is_none());
    }

    #[test]
    fn remote_object_serializes_flat() {
        let mut remote = RemoteObject {
            id: None,
            fields: Some(vec![SettingField::new("host", json!("localhost"))]),
            ..Default::default()
        };
        remote.properties.insert("name".into(), json!("deluge"));

        assert_eq!(
            serde_json::to_value(&remote).unwrap(),
            json!({
                "name": "deluge",
                "fields": [{"name": "host", "value": "localhost"}]
            })
        );
    }

    #[test]
    fn validation_failure_display() {
        let failures: Vec<ValidationFailure> = serde_json::from_value(json!([
            {"propertyName": "BaseUrl", "errorMessage": "Unable to connect"},
            {"propertyName": "", "errorMessage": "Test failed"}
        ]))
        .unwrap();

        assert_eq!(failures[0].to_string(), "BaseUrl: Unable to connect");
        assert_eq!(failures[1].to_string(), "Test failed");
    }
}
