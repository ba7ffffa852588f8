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

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use tf_provider::schema::{AttributeConstraint, AttributeType, Block, Description};
use tf_provider::value::{Value, ValueEmpty, ValueList};
use tf_provider::{map, DataSource, Diagnostics, Schema};

use crate::client::RemoteObject;
use crate::prowlarr_provider::SharedClient;
use crate::utils::{attribute, client_error, data_source_error, Action};

use super::state::IndexerState;
use super::{INDEXER_PATH, RESOURCE_NAME};

async fn list(client: &SharedClient, diags: &mut Diagnostics, resource: &str) -> Option<Vec<RemoteObject>> {
    let client = client.get(diags)?;
    match client.list::<RemoteObject>(INDEXER_PATH).await {
        Ok(indexers) => Some(indexers),
        Err(err) => {
            client_error(diags, Action::Read, resource, &err);
            None
        }
    }
}

#[derive(Debug, Default)]
pub struct IndexerDataSource {
    client: SharedClient,
}

impl IndexerDataSource {
    pub fn new(client: SharedClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataSource for IndexerDataSource {
    type State<'a> = IndexerState<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(Schema {
            version: 0,
            block: Block {
                attributes: IndexerState::data_source_attributes(true),
                description: Description::markdown("Single indexer, found by its name."),
                ..Default::default()
            },
        })
    }

    async fn validate<'a>(&self, _diags: &mut Diagnostics, _config: Self::State<'a>) -> Option<()> {
        Some(())
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        let name = config.name.as_deref_option().unwrap_or_default();
        let indexers = list(&self.client, diags, RESOURCE_NAME).await?;

        match indexers
            .iter()
            .find(|indexer| indexer.label("name") == Some(name))
        {
            Some(indexer) => {
                debug!("found {RESOURCE_NAME}: {name}");
                Some(IndexerState::from_remote(indexer, None))
            }
            None => {
                data_source_error(diags, RESOURCE_NAME, name);
                None
            }
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexersState<'a> {
    pub indexers: ValueList<Value<IndexerState<'a>>>,
}

#[derive(Debug, Default)]
pub struct IndexersDataSource {
    client: SharedClient,
}

impl IndexersDataSource {
    pub fn new(client: SharedClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataSource for IndexersDataSource {
    type State<'a> = IndexersState<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(Schema {
            version: 0,
            block: Block {
                attributes: map! {
                    "indexers" => attribute(
                        AttributeType::Set(Box::new(IndexerState::object_type())),
                        "Indexer list.",
                        AttributeConstraint::Computed,
                        true,
                    ),
                },
                description: Description::markdown("List all available indexers."),
                ..Default::default()
            },
        })
    }

    async fn validate<'a>(&self, _diags: &mut Diagnostics, _config: Self::State<'a>) -> Option<()> {
        Some(())
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        _config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        let indexers = list(&self.client, diags, "prowlarr_indexers").await?;
        debug!("listed {} indexers", indexers.len());

        Some(IndexersState {
            indexers: Value::Value(
                indexers
                    .iter()
                    .map(|indexer| Value::Value(IndexerState::from_remote(indexer, None)))
                    .collect(),
            ),
        })
    }
}
