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
use tracing::debug;

use tf_provider::value::{Value, ValueEmpty};
use tf_provider::{AttributePath, Diagnostics, Resource, Schema};

use crate::client::RemoteObject;
use crate::prowlarr_provider::SharedClient;
use crate::utils::{client_error, Action, WithNormalize, WithSchema, WithValidate};

use super::state::IndexerState;
use super::{INDEXER_PATH, RESOURCE_NAME};

#[derive(Debug, Default)]
pub struct IndexerResource {
    client: SharedClient,
}

impl IndexerResource {
    pub fn new(client: SharedClient) -> Self {
        Self { client }
    }
}

fn known_id(diags: &mut Diagnostics, state: &IndexerState) -> Option<i64> {
    let id = state.id.as_ref_option().copied();
    if id.is_none() {
        diags.error_short(
            format!("{RESOURCE_NAME} has no known ID"),
            AttributePath::new("id"),
        );
    }
    id
}

#[async_trait]
impl Resource for IndexerResource {
    type State<'a> = IndexerState<'a>;
    type PrivateState<'a> = ValueEmpty;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(IndexerState::schema())
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        config.validate(diags, Default::default()).await;

        if diags.errors.is_empty() {
            Some(())
        } else {
            None
        }
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        state: Self::State<'a>,
        private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let client = self.client.get(diags)?;
        let id = known_id(diags, &state)?;

        match client.get::<RemoteObject>(INDEXER_PATH, id).await {
            Ok(remote) => {
                debug!("read {RESOURCE_NAME}: {id}");
                Some((IndexerState::from_remote(&remote, Some(&state)), private_state))
            }
            Err(err) => {
                client_error(diags, Action::Read, RESOURCE_NAME, &err);
                None
            }
        }
    }

    async fn plan_create<'a>(
        &self,
        diags: &mut Diagnostics,
        proposed_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let mut state = proposed_state;
        state.normalize(diags);

        Some((state, Default::default()))
    }

    async fn plan_update<'a>(
        &self,
        _diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        proposed_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        prior_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(
        Self::State<'a>,
        Self::PrivateState<'a>,
        Vec<tf_provider::AttributePath>,
    )> {
        let mut trigger_replace = Vec::new();
        if prior_state.implementation != proposed_state.implementation {
            trigger_replace.push(AttributePath::new("implementation"));
        }
        if prior_state.config_contract != proposed_state.config_contract {
            trigger_replace.push(AttributePath::new("config_contract"));
        }

        Some((proposed_state, prior_private_state, trigger_replace))
    }

    async fn plan_destroy<'a>(
        &self,
        _diags: &mut Diagnostics,
        _prior_state: Self::State<'a>,
        _prior_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<()> {
        Some(())
    }

    async fn create<'a>(
        &self,
        diags: &mut Diagnostics,
        planned_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let client = self.client.get(diags)?;

        match client
            .create::<RemoteObject, _>(INDEXER_PATH, &planned_state.to_remote())
            .await
        {
            Ok(remote) => {
                debug!("created {RESOURCE_NAME}: {}", remote.id.unwrap_or_default());
                Some((IndexerState::from_remote(&remote, Some(&planned_state)), private_state))
            }
            Err(err) => {
                client_error(diags, Action::Create, RESOURCE_NAME, &err);
                None
            }
        }
    }

    async fn update<'a>(
        &self,
        diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        planned_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let client = self.client.get(diags)?;
        let id = known_id(diags, &prior_state)?;
        let mut request = planned_state.to_remote();
        request.id = Some(id);

        match client
            .update::<RemoteObject, _>(INDEXER_PATH, id, &request)
            .await
        {
            Ok(remote) => {
                debug!("updated {RESOURCE_NAME}: {id}");
                Some((IndexerState::from_remote(&remote, Some(&planned_state)), private_state))
            }
            Err(err) => {
                client_error(diags, Action::Update, RESOURCE_NAME, &err);
                None
            }
        }
    }

    async fn destroy<'a>(
        &self,
        diags: &mut Diagnostics,
        state: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<()> {
        let client = self.client.get(diags)?;
        let id = known_id(diags, &state)?;

        match client.delete(INDEXER_PATH, id).await {
            Ok(()) => {
                debug!("deleted {RESOURCE_NAME}: {id}");
                Some(())
            }
            Err(err) => {
                client_error(diags, Action::Delete, RESOURCE_NAME, &err);
                None
            }
        }
    }

    async fn import<'a>(
        &self,
        diags: &mut Diagnostics,
        id: String,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let Ok(id) = id.trim().parse::<i64>() else {
            diags.root_error(
                "Unexpected Import Identifier",
                format!("Expected import identifier with format: ID. Got: {id:?}"),
            );
            return None;
        };

        let state = IndexerState {
            id: Value::Value(id),
            ..Default::default()
        };
        Some((state, Value::Null))
    }
}
