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

use tf_provider::{AttributePath, Diagnostics};

use crate::utils::DisplayJoinable;

use super::layout::Layout;
use super::state::ObjectState;

impl Layout {
    pub fn validate(&self, diags: &mut Diagnostics, state: &ObjectState) {
        for column in self.columns.iter().filter(|column| !column.one_of.is_empty()) {
            let Some(value) = state.string(column.name) else {
                continue;
            };
            if !column.one_of.contains(&value) {
                diags.error(
                    "Invalid Attribute Value",
                    format!(
                        "Attribute `{}` value must be one of: {}, got: `{value}`",
                        column.name,
                        column.one_of.iter().join_with(", ")
                    ),
                    AttributePath::new(column.name),
                );
            }
        }
    }
}
