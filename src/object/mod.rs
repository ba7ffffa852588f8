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

//! Table driven resources and data sources.
//!
//! Every object managed through a [`Kind`](crate::kind::Kind) shares one
//! dynamic state representation (`ObjectState`) and one conversion layer
//! between that state and the Prowlarr wire object.

mod data_source;
mod layout;
mod normalize;
mod read;
mod resource;
mod state;
mod validate;
mod write;

pub use data_source::{ObjectDataSource, ObjectListDataSource};
pub use resource::ObjectResource;
