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

//! Indexer resource and data sources.
//!
//! Indexer settings come from an open set of definitions, so they are not
//! described by a table: the configuration lists them as `fields` blocks and
//! secrets go through the `sensitive_fields` map.

mod data_source;
mod resource;
mod state;
mod wire;

pub use data_source::{IndexerDataSource, IndexersDataSource};
pub use resource::IndexerResource;

const INDEXER_PATH: &str = "indexer";
const RESOURCE_NAME: &str = "prowlarr_indexer";
