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

//! Constant tables describing the Prowlarr objects managed by the provider.
//!
//! A [`Kind`] describes one REST collection (path, label attribute, top-level
//! properties and the entries of its `fields` array). Each [`Implementation`]
//! row selects the vendor constants and the subset of settings exposed by a
//! vendor specific resource such as `prowlarr_download_client_deluge`.

mod application;
mod download_client;
mod indexer_proxy;
mod notification;
mod sync_profile;
mod tag;

pub use application::APPLICATION;
pub use download_client::DOWNLOAD_CLIENT;
pub use indexer_proxy::INDEXER_PROXY;
pub use notification::NOTIFICATION;
pub use sync_profile::SYNC_PROFILE;
pub use tag::TAG;

/// Every table driven kind, in registration order
pub static KINDS: &[&Kind] = &[
    &APPLICATION,
    &DOWNLOAD_CLIENT,
    &INDEXER_PROXY,
    &NOTIFICATION,
    &SYNC_PROFILE,
    &TAG,
];

pub const PROTOCOLS: &[&str] = &["torrent", "usenet"];

/// Terraform value type of a flat attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrKind {
    String,
    Number,
    Bool,
    NumberSet,
    StringSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Terraform attribute name
    pub name: &'static str,
    /// Name on the wire, either a JSON property or a `fields` entry
    pub wire: &'static str,
    pub kind: AttrKind,
    pub description: &'static str,
    pub sensitive: bool,
    pub required: bool,
    /// Allowed values, empty when unconstrained
    pub one_of: &'static [&'static str],
}

impl Field {
    const fn new(
        kind: AttrKind,
        name: &'static str,
        wire: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            wire,
            kind,
            description,
            sensitive: false,
            required: false,
            one_of: &[],
        }
    }

    pub const fn string(name: &'static str, wire: &'static str, description: &'static str) -> Self {
        Self::new(AttrKind::String, name, wire, description)
    }
    pub const fn number(name: &'static str, wire: &'static str, description: &'static str) -> Self {
        Self::new(AttrKind::Number, name, wire, description)
    }
    pub const fn bool(name: &'static str, wire: &'static str, description: &'static str) -> Self {
        Self::new(AttrKind::Bool, name, wire, description)
    }
    pub const fn number_set(
        name: &'static str,
        wire: &'static str,
        description: &'static str,
    ) -> Self {
        Self::new(AttrKind::NumberSet, name, wire, description)
    }
    pub const fn string_set(
        name: &'static str,
        wire: &'static str,
        description: &'static str,
    ) -> Self {
        Self::new(AttrKind::StringSet, name, wire, description)
    }

    pub const fn sensitive(self) -> Self {
        Self {
            sensitive: true,
            ..self
        }
    }
    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }
    pub const fn one_of(self, values: &'static [&'static str]) -> Self {
        Self {
            one_of: values,
            ..self
        }
    }
}

/// Vendor constants of a specific resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Implementation {
    /// Suffix of the resource type name
    pub name: &'static str,
    pub implementation: &'static str,
    pub config_contract: &'static str,
    pub protocol: Option<&'static str>,
    /// Settings exposed by the specific resource, by attribute name
    pub fields: &'static [&'static str],
    /// Settings that must be given in the configuration
    pub required: &'static [&'static str],
}

#[derive(Debug)]
pub struct Kind {
    /// Resource type name, without the provider prefix
    pub name: &'static str,
    /// Name of the "list all" data source
    pub plural: &'static str,
    /// Human readable name used in descriptions
    pub title: &'static str,
    /// REST collection, relative to `/api/v1/`
    pub path: &'static str,
    /// Attribute used by the find-by-name data source (also its wire name)
    pub label: &'static str,
    pub tagged: bool,
    /// Whether the object carries a `protocol` discriminator
    pub protocol: bool,
    /// Top-level properties besides id, label and tags
    pub attributes: &'static [Field],
    /// Entries of the `fields` array
    pub settings: &'static [Field],
    pub implementations: &'static [Implementation],
}

impl Kind {
    /// Provider definitions carry `implementation`, `configContract` and `fields`
    pub fn is_definition(&self) -> bool {
        !self.implementations.is_empty()
    }

    pub fn setting(&self, name: &str) -> Option<&'static Field> {
        self.settings.iter().find(|field| field.name == name)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;

    #[test]
    fn implementation_fields_exist() {
        for kind in KINDS {
            for implementation in kind.implementations {
                for name in implementation.fields {
                    assert!(
                        kind.setting(name).is_some(),
                        "{}_{} exposes unknown setting `{name}`",
                        kind.name,
                        implementation.name
                    );
                }
                for name in implementation.required {
                    assert!(
                        implementation.fields.contains(name),
                        "{}_{} requires `{name}` but does not expose it",
                        kind.name,
                        implementation.name
                    );
                }
                assert_eq!(
                    implementation.protocol.is_some(),
                    kind.protocol,
                    "{}_{} protocol mismatch",
                    kind.name,
                    implementation.name
                );
            }
        }
    }

    #[test]
    fn attribute_kinds_are_consistent() {
        let mut seen: HashMap<&str, AttrKind> = HashMap::new();
        for kind in KINDS {
            for field in kind.attributes.iter().chain(kind.settings) {
                if let Some(previous) = seen.insert(field.name, field.kind) {
                    assert_eq!(previous, field.kind, "`{}` has two types", field.name);
                }
            }
        }
    }

    #[test]
    fn wire_names_are_unique_per_kind() {
        for kind in KINDS {
            let mut wires = HashSet::new();
            for field in kind.settings {
                assert!(wires.insert(field.wire), "{}: `{}`", kind.name, field.wire);
            }
        }
    }

    #[test]
    fn definitions_are_tagged() {
        for kind in KINDS.iter().filter(|kind| kind.is_definition()) {
            assert!(kind.tagged, "{}", kind.name);
            assert_eq!(kind.label, "name");
        }
    }
}
