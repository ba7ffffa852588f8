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

use std::collections::HashMap;

use tf_provider::schema::{AttributeConstraint, AttributeType, Block, Description};
use tf_provider::Schema;

use crate::kind::{AttrKind, Field, Implementation, Kind, PROTOCOLS};
use crate::prowlarr_provider::PROVIDER_NAME;
use crate::utils::attribute;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    OptionalComputed,
    Computed,
}

impl From<Presence> for AttributeConstraint {
    fn from(presence: Presence) -> Self {
        match presence {
            Presence::Required => AttributeConstraint::Required,
            Presence::OptionalComputed => AttributeConstraint::OptionalComputed,
            Presence::Computed => AttributeConstraint::Computed,
        }
    }
}

/// Where a column lives in the wire object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Id,
    Property,
    Setting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub wire: &'static str,
    pub kind: AttrKind,
    pub placement: Placement,
    pub presence: Presence,
    pub sensitive: bool,
    pub one_of: &'static [&'static str],
    pub description: &'static str,
}

impl Column {
    fn fixed(
        name: &'static str,
        wire: &'static str,
        kind: AttrKind,
        presence: Presence,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            wire,
            kind,
            placement: Placement::Property,
            presence,
            sensitive: false,
            one_of: &[],
            description,
        }
    }

    fn field(field: &Field, placement: Placement, presence: Presence) -> Self {
        Self {
            name: field.name,
            wire: field.wire,
            kind: field.kind,
            placement,
            presence,
            sensitive: field.sensitive,
            one_of: field.one_of,
            description: field.description,
        }
    }

    pub fn attribute_type(&self) -> AttributeType {
        match self.kind {
            AttrKind::String => AttributeType::String,
            AttrKind::Number => AttributeType::Number,
            AttrKind::Bool => AttributeType::Bool,
            AttrKind::NumberSet => AttributeType::Set(Box::new(AttributeType::Number)),
            AttrKind::StringSet => AttributeType::Set(Box::new(AttributeType::String)),
        }
    }
}

/// Schema columns of one resource or data source, derived from a [`Kind`]
/// and an optional vendor [`Implementation`].
#[derive(Debug, Clone)]
pub struct Layout {
    pub kind: &'static Kind,
    pub implementation: Option<&'static Implementation>,
    pub columns: Vec<Column>,
}

impl Layout {
    pub fn resource(kind: &'static Kind, implementation: Option<&'static Implementation>) -> Self {
        let mut columns = vec![
            Column {
                placement: Placement::Id,
                ..Column::fixed("id", "id", AttrKind::Number, Presence::Computed, "ID.")
            },
            Column::fixed(
                kind.label,
                kind.label,
                AttrKind::String,
                Presence::Required,
                if kind.label == "label" {
                    "Label."
                } else {
                    "Name."
                },
            ),
        ];

        if kind.is_definition() && implementation.is_none() {
            columns.push(Column::fixed(
                "implementation",
                "implementation",
                AttrKind::String,
                Presence::Required,
                "Implementation name.",
            ));
            columns.push(Column::fixed(
                "config_contract",
                "configContract",
                AttrKind::String,
                Presence::Required,
                "Configuration contract.",
            ));
            if kind.protocol {
                columns.push(Column {
                    one_of: PROTOCOLS,
                    ..Column::fixed(
                        "protocol",
                        "protocol",
                        AttrKind::String,
                        Presence::Required,
                        "Protocol. Valid values are `torrent` and `usenet`.",
                    )
                });
            }
        }

        for field in kind.attributes {
            let presence = if field.required {
                Presence::Required
            } else {
                Presence::OptionalComputed
            };
            columns.push(Column::field(field, Placement::Property, presence));
        }

        if kind.tagged {
            columns.push(Column::fixed(
                "tags",
                "tags",
                AttrKind::NumberSet,
                Presence::OptionalComputed,
                "List of associated tags.",
            ));
        }

        match implementation {
            Some(implementation) => {
                for field in implementation
                    .fields
                    .iter()
                    .filter_map(|name| kind.setting(name))
                {
                    let presence = if implementation.required.contains(&field.name) {
                        Presence::Required
                    } else {
                        Presence::OptionalComputed
                    };
                    columns.push(Column::field(field, Placement::Setting, presence));
                }
            }
            None => {
                for field in kind.settings {
                    columns.push(Column::field(
                        field,
                        Placement::Setting,
                        Presence::OptionalComputed,
                    ));
                }
            }
        }

        Self {
            kind,
            implementation,
            columns,
        }
    }

    /// Generic columns, all computed except the lookup label
    pub fn data_source(kind: &'static Kind) -> Self {
        let mut layout = Self::resource(kind, None);
        for column in &mut layout.columns {
            if column.name != kind.label {
                column.presence = Presence::Computed;
            }
        }
        layout
    }

    /// Generic columns, all computed
    pub fn computed(kind: &'static Kind) -> Self {
        let mut layout = Self::resource(kind, None);
        for column in &mut layout.columns {
            column.presence = Presence::Computed;
        }
        layout
    }

    /// Type name without the provider prefix
    pub fn type_name(&self) -> String {
        match self.implementation {
            Some(implementation) => format!("{}_{}", self.kind.name, implementation.name),
            None => self.kind.name.to_owned(),
        }
    }

    /// Type name as written in a configuration
    pub fn full_name(&self) -> String {
        format!("{PROVIDER_NAME}_{}", self.type_name())
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn schema(&self, description: Description) -> Schema {
        Schema {
            version: 0,
            block: Block {
                attributes: self
                    .columns
                    .iter()
                    .map(|column| {
                        (
                            column.name.to_owned(),
                            attribute(
                                column.attribute_type(),
                                column.description,
                                column.presence.into(),
                                column.sensitive,
                            ),
                        )
                    })
                    .collect(),
                description,
                ..Default::default()
            },
        }
    }

    /// Object type of one element of a plural data source
    pub fn object_type(&self) -> AttributeType {
        AttributeType::Object(
            self.columns
                .iter()
                .map(|column| (column.name.to_owned(), column.attribute_type()))
                .collect::<HashMap<_, _>>(),
        )
    }
}
