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

use std::cell::RefCell;
use std::fmt::Display;

use async_trait::async_trait;

use tf_provider::schema::{Attribute, AttributeConstraint, AttributeType, Description};
use tf_provider::{AttributePath, Diagnostics, Schema};

pub(crate) trait WithSchema {
    fn schema() -> Schema;
}

#[async_trait]
pub(crate) trait WithValidate {
    async fn validate(&self, diags: &mut Diagnostics, attr_path: AttributePath);
}

pub(crate) trait WithNormalize {
    fn normalize(&mut self, diags: &mut Diagnostics);
}

pub(crate) fn attribute(
    attr_type: AttributeType,
    description: &str,
    constraint: AttributeConstraint,
    sensitive: bool,
) -> Attribute {
    Attribute {
        attr_type,
        description: Description::plain(description),
        constraint,
        sensitive,
        deprecated: false,
    }
}

/// Verb used in client error diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Create,
    Read,
    Update,
    Delete,
    List,
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::List => "list",
        })
    }
}

pub(crate) fn client_error(
    diags: &mut Diagnostics,
    action: Action,
    resource: &str,
    err: &dyn Display,
) {
    diags.root_error(
        "Client Error",
        format!("Unable to {action} {resource}, got error: {err}"),
    );
}

pub(crate) fn data_source_error(diags: &mut Diagnostics, resource: &str, label: &str) {
    diags.root_error(
        "Data Source Error",
        format!("Unable to find {resource}: {label}"),
    );
}

pub struct DisplayJoiner<'a, T, I>
where
    T: Iterator<Item = I>,
    I: std::fmt::Display,
{
    iter: RefCell<T>,
    sep: &'a str,
}

pub trait DisplayJoinable {
    type Joiner<'a>;
    fn join_with(self, sep: &str) -> Self::Joiner<'_>;
}

impl<T, I> DisplayJoinable for T
where
    T: Iterator<Item = I>,
    I: std::fmt::Display,
{
    type Joiner<'a> = DisplayJoiner<'a, T, I>;

    fn join_with(self, sep: &str) -> Self::Joiner<'_> {
        DisplayJoiner {
            iter: RefCell::new(self),
            sep,
        }
    }
}

impl<'a, T, I> std::fmt::Display for DisplayJoiner<'a, T, I>
where
    T: Iterator<Item = I>,
    I: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut sep = "";
        let mut iter = self.iter.try_borrow_mut().or(Err(std::fmt::Error))?;
        for elt in iter.by_ref() {
            f.write_str(sep)?;
            f.write_fmt(format_args!("{elt}"))?;
            sep = self.sep;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_with() {
        assert_eq!(["a", "b", "c"].iter().join_with(", ").to_string(), "a, b, c");
        assert_eq!(std::iter::empty::<&str>().join_with(", ").to_string(), "");
    }

    #[test]
    fn client_error_message() {
        let mut diags = Diagnostics::default();
        client_error(&mut diags, Action::Create, "prowlarr_tag", &"boom");
        assert_eq!(diags.errors.len(), 1);
        let rendered = format!("{:?}", diags.errors);
        assert!(rendered.contains("Client Error"), "{rendered}");
        assert!(
            rendered.contains("Unable to create prowlarr_tag, got error: boom"),
            "{rendered}"
        );
    }
}
