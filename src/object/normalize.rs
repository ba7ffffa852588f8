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

use super::layout::{Layout, Placement, Presence};
use super::state::{AttrValue, ObjectState};

impl Layout {
    /// Make sure every column of the schema has a value
    pub fn normalize(&self, state: &mut ObjectState) {
        for column in &self.columns {
            if !state.contains(column.name) {
                state.set(column.name, AttrValue::null(column.kind));
            }
        }
    }

    /// Values the server will fill in on create
    pub fn mark_computed(&self, state: &mut ObjectState) {
        for column in &self.columns {
            let computed = match column.presence {
                Presence::Computed => true,
                Presence::OptionalComputed => state.get(column.name).map_or(true, AttrValue::is_null),
                Presence::Required => false,
            };
            if computed || column.placement == Placement::Id {
                state.set(column.name, AttrValue::unknown(column.kind));
            }
        }
    }

    /// State of a freshly imported object, filled by the next read
    pub fn import(&self, id: i64) -> ObjectState {
        let mut state = ObjectState::default();
        state.set("id", AttrValue::Number(Value::Value(id)));
        self.normalize(&mut state);
        state
    }
}
