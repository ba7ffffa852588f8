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
use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use tf_provider::schema::{
    AttributeConstraint, AttributeType, Block, Description, NestedBlock,
};
use tf_provider::value::{Value, ValueList, ValueMap, ValueNumber, ValueString};
use tf_provider::{AttributePath, Diagnostics, Schema};

use crate::kind::PROTOCOLS;
use crate::utils::{attribute, DisplayJoinable, WithNormalize, WithSchema, WithValidate};

/// One entry of the indexer `fields` array, holding exactly one value
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexerField<'a> {
    pub name: ValueString<'a>,
    pub text_value: ValueString<'a>,
    pub number_value: ValueNumber,
    pub bool_value: Value<bool>,
    pub set_value: Value<BTreeSet<ValueNumber>>,
}

impl<'a> IndexerField<'a> {
    fn value_slots(&self) -> [(&'static str, bool, bool); 4] {
        [
            (
                "text_value",
                self.text_value.is_null(),
                self.text_value.is_unknown(),
            ),
            (
                "number_value",
                self.number_value.is_null(),
                self.number_value.is_unknown(),
            ),
            (
                "bool_value",
                self.bool_value.is_null(),
                self.bool_value.is_unknown(),
            ),
            (
                "set_value",
                self.set_value.is_null(),
                self.set_value.is_unknown(),
            ),
        ]
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexerState<'a> {
    pub id: ValueNumber,
    pub name: ValueString<'a>,
    pub enable: Value<bool>,
    pub priority: ValueNumber,
    pub app_profile_id: ValueNumber,
    pub download_client_id: ValueNumber,
    pub implementation: ValueString<'a>,
    pub config_contract: ValueString<'a>,
    pub protocol: ValueString<'a>,
    pub privacy: ValueString<'a>,
    pub language: ValueString<'a>,
    pub tags: Value<BTreeSet<ValueNumber>>,
    pub fields: ValueList<Value<IndexerField<'a>>>,
    pub sensitive_fields: ValueMap<'a, ValueString<'a>>,
}

/// Attributes shared by the resource and the data sources
fn attributes(
    constraint: impl Fn(&'static str) -> AttributeConstraint,
) -> std::collections::HashMap<String, tf_provider::schema::Attribute> {
    let number_set = || AttributeType::Set(Box::new(AttributeType::Number));
    [
        ("id", AttributeType::Number, "Indexer ID.", false),
        ("name", AttributeType::String, "Indexer name.", false),
        ("enable", AttributeType::Bool, "Enabled flag.", false),
        ("priority", AttributeType::Number, "Priority.", false),
        ("app_profile_id", AttributeType::Number, "Application profile ID.", false),
        ("download_client_id", AttributeType::Number, "Download client ID.", false),
        ("implementation", AttributeType::String, "Implementation.", false),
        ("config_contract", AttributeType::String, "Config contract.", false),
        ("protocol", AttributeType::String, "Protocol. Valid values are `torrent` and `usenet`.", false),
        ("privacy", AttributeType::String, "Privacy.", false),
        ("language", AttributeType::String, "Language.", false),
        ("tags", number_set(), "List of associated tags.", false),
        (
            "sensitive_fields",
            AttributeType::Map(Box::new(AttributeType::String)),
            "Sensitive settings, by field name. Returned masked by Prowlarr.",
            true,
        ),
    ]
    .into_iter()
    .map(|(name, attr_type, description, sensitive)| {
        (
            name.to_owned(),
            attribute(attr_type, description, constraint(name), sensitive),
        )
    })
    .collect()
}

/// `Optional` for the resource block, `Computed` for the data sources
fn field_attributes(
    constraint: AttributeConstraint,
) -> std::collections::HashMap<String, tf_provider::schema::Attribute> {
    [
        ("name", AttributeType::String, "Field name."),
        ("text_value", AttributeType::String, "Text value."),
        ("number_value", AttributeType::Number, "Number value."),
        ("bool_value", AttributeType::Bool, "Bool value."),
        (
            "set_value",
            AttributeType::Set(Box::new(AttributeType::Number)),
            "Set of numbers value.",
        ),
    ]
    .into_iter()
    .map(|(name, attr_type, description)| {
        let constraint = match constraint {
            AttributeConstraint::Optional if name == "name" => AttributeConstraint::Required,
            AttributeConstraint::Optional => AttributeConstraint::Optional,
            _ => AttributeConstraint::Computed,
        };
        (
            name.to_owned(),
            attribute(attr_type, description, constraint, false),
        )
    })
    .collect()
}

/// Object type of a `fields` entry
pub(super) fn field_type() -> AttributeType {
    AttributeType::Object(
        field_attributes(AttributeConstraint::Computed)
            .into_iter()
            .map(|(name, attribute)| (name, attribute.attr_type))
            .collect(),
    )
}

/// Schema of the indexer resource
impl<'a> WithSchema for IndexerState<'a> {
    fn schema() -> Schema {
        Schema {
            version: 0,
            block: Block {
                attributes: attributes(|name| match name {
                    "id" | "privacy" | "language" => AttributeConstraint::Computed,
                    "name" | "app_profile_id" | "implementation" | "config_contract" => {
                        AttributeConstraint::Required
                    }
                    "sensitive_fields" => AttributeConstraint::Optional,
                    _ => AttributeConstraint::OptionalComputed,
                }),
                blocks: [(
                    "fields".to_owned(),
                    NestedBlock::List(Block {
                        attributes: field_attributes(AttributeConstraint::Optional),
                        description: Description::plain(
                            "Indexer setting. Exactly one value must be set.",
                        ),
                        ..Default::default()
                    }),
                )]
                .into(),
                description: Description::markdown(
                    "Indexer resource.\nSettings depend on the indexer definition and are given as a list of `fields` blocks.",
                ),
                ..Default::default()
            },
        }
    }
}

impl<'a> IndexerState<'a> {
    /// Attributes of the data sources, where every setting is computed
    pub(super) fn data_source_attributes(
        lookup: bool,
    ) -> std::collections::HashMap<String, tf_provider::schema::Attribute> {
        let mut attributes = attributes(|name| {
            if lookup && name == "name" {
                AttributeConstraint::Required
            } else {
                AttributeConstraint::Computed
            }
        });
        attributes.insert(
            "fields".to_owned(),
            attribute(
                AttributeType::List(Box::new(field_type())),
                "Indexer settings.",
                AttributeConstraint::Computed,
                false,
            ),
        );
        attributes
    }

    /// Object type of one element of the `indexers` data source
    pub(super) fn object_type() -> AttributeType {
        AttributeType::Object(
            Self::data_source_attributes(false)
                .into_iter()
                .map(|(name, attribute)| (name, attribute.attr_type))
                .collect(),
        )
    }

    #[cfg(test)]
    pub fn setting_names(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .flatten()
            .filter_map(|field| field.as_ref_option())
            .filter_map(|field| field.name.as_deref_option())
    }
}

impl<'a> WithNormalize for IndexerState<'a> {
    fn normalize(&mut self, _diags: &mut Diagnostics) {
        if self.id.is_null() {
            self.id = Value::Unknown;
        }
        for value in [&mut self.priority, &mut self.download_client_id] {
            if value.is_null() {
                *value = Value::Unknown;
            }
        }
        for value in [&mut self.protocol, &mut self.privacy, &mut self.language] {
            if value.is_null() {
                *value = Value::Unknown;
            }
        }
        if self.enable.is_null() {
            self.enable = Value::Unknown;
        }
        if self.tags.is_null() {
            self.tags = Value::Unknown;
        }
        if self.fields.is_null() {
            self.fields = Value::Value(Vec::new());
        }
    }
}

#[async_trait]
impl<'a> WithValidate for IndexerState<'a> {
    async fn validate(&self, diags: &mut Diagnostics, attr_path: AttributePath) {
        if let Value::Value(protocol) = &self.protocol {
            let protocol: &str = protocol;
            if !PROTOCOLS.contains(&protocol) {
                diags.error(
                    "Invalid Attribute Value",
                    format!(
                        "Attribute `protocol` value must be one of: {}, got: `{protocol}`",
                        PROTOCOLS.iter().join_with(", ")
                    ),
                    attr_path.clone().attribute("protocol"),
                );
            }
        }

        let mut seen = BTreeMap::<Cow<'_, str>, usize>::new();
        for (index, field) in self.fields.iter().flatten().enumerate() {
            let Value::Value(field) = field else {
                continue;
            };
            let path = attr_path.clone().attribute("fields").index(index as i64);

            let slots = field.value_slots();
            if slots.iter().any(|(_, _, unknown)| *unknown) {
                continue;
            }
            let set: Vec<_> = slots
                .iter()
                .filter(|(_, null, _)| !null)
                .map(|(name, _, _)| *name)
                .collect();
            if set.len() != 1 {
                diags.error(
                    "Invalid Indexer Field",
                    format!(
                        "Exactly one of text_value, number_value, bool_value or set_value must be set, got {}",
                        if set.is_empty() {
                            "none".to_owned()
                        } else {
                            set.iter().join_with(", ").to_string()
                        }
                    ),
                    path.clone(),
                );
            }

            if let Value::Value(name) = &field.name {
                if let Some(previous) = seen.insert(name.clone(), index) {
                    diags.error(
                        "Duplicate Indexer Field",
                        format!("Field {name:?} is already set by fields[{previous}]"),
                        path.attribute("name"),
                    );
                }
            }
        }

        for name in self.sensitive_fields.iter().flatten().map(|(name, _)| name) {
            if let Some(index) = seen.get(name) {
                diags.error(
                    "Duplicate Indexer Field",
                    format!("Field {name:?} is set both in fields[{index}] and sensitive_fields"),
                    attr_path.clone().attribute("sensitive_fields").key(name.to_string()),
                );
            }
        }
    }
}
