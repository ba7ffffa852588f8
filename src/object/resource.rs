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

use tf_provider::schema::Description;
use tf_provider::value::{Value, ValueEmpty};
use tf_provider::{AttributePath, Diagnostics, Resource, Schema};

use crate::client::RemoteObject;
use crate::kind::{Implementation, Kind};
use crate::prowlarr_provider::SharedClient;
use crate::utils::{client_error, Action};

use super::layout::Layout;
use super::state::ObjectState;

/// Resource backed by a [`Kind`] table, either generic or vendor specific
#[derive(Debug)]
pub struct ObjectResource {
    layout: Layout,
    client: SharedClient,
}

impl ObjectResource {
    pub fn new(
        kind: &'static Kind,
        implementation: Option<&'static Implementation>,
        client: SharedClient,
    ) -> Self {
        Self {
            layout: Layout::resource(kind, implementation),
            client,
        }
    }

    pub fn type_name(&self) -> String {
        self.layout.type_name()
    }

    fn description(&self) -> Description {
        let kind = self.layout.kind;
        match self.layout.implementation {
            Some(implementation) => Description::markdown(format!(
                "{} {} resource.\nFor more information refer to [{}](https://wiki.servarr.com/prowlarr/settings) documentation.",
                kind.title, implementation.implementation, kind.title
            )),
            None if kind.is_definition() => Description::markdown(format!(
                "Generic {} resource. When possible use a specific resource instead.\nFor more information refer to [{}](https://wiki.servarr.com/prowlarr/settings) documentation.",
                kind.title, kind.title
            )),
            None => Description::markdown(format!(
                "{} resource.\nFor more information refer to [{}](https://wiki.servarr.com/prowlarr/settings) documentation.",
                kind.title, kind.title
            )),
        }
    }

    fn id(&self, diags: &mut Diagnostics, state: &ObjectState) -> Option<i64> {
        let id = state.number("id");
        if id.is_none() {
            diags.error_short(
                format!("{} has no known ID", self.layout.full_name()),
                AttributePath::new("id"),
            );
        }
        id
    }
}

#[async_trait]
impl Resource for ObjectResource {
    type State<'a> = ObjectState;
    type PrivateState<'a> = ValueEmpty;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(self.layout.schema(self.description()))
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        self.layout.validate(diags, &config);

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
        let id = self.id(diags, &state)?;

        match client
            .get::<RemoteObject>(self.layout.kind.path, id)
            .await
        {
            Ok(remote) => {
                debug!("read {}: {id}", self.layout.full_name());
                Some((self.layout.read(&remote, Some(&state)), private_state))
            }
            Err(err) => {
                client_error(diags, Action::Read, &self.layout.full_name(), &err);
                None
            }
        }
    }

    async fn plan_create<'a>(
        &self,
        _diags: &mut Diagnostics,
        proposed_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let mut state = proposed_state;
        self.layout.normalize(&mut state);
        self.layout.mark_computed(&mut state);

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
        let mut state = proposed_state;
        self.layout.normalize(&mut state);

        // A generic object cannot change its vendor in place
        let trigger_replace = ["implementation", "config_contract"]
            .into_iter()
            .filter(|name| self.layout.column(name).is_some())
            .filter(|name| prior_state.get(name) != state.get(name))
            .map(AttributePath::new)
            .collect();

        Some((state, prior_private_state, trigger_replace))
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
        let request = self.layout.write(&planned_state);

        match client
            .create::<RemoteObject, _>(self.layout.kind.path, &request)
            .await
        {
            Ok(remote) => {
                debug!(
                    "created {}: {}",
                    self.layout.full_name(),
                    remote.id.unwrap_or_default()
                );
                Some((self.layout.read(&remote, Some(&planned_state)), private_state))
            }
            Err(err) => {
                client_error(diags, Action::Create, &self.layout.full_name(), &err);
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
        let id = self.id(diags, &prior_state)?;
        let mut request = self.layout.write(&planned_state);
        request.id = Some(id);

        match client
            .update::<RemoteObject, _>(self.layout.kind.path, id, &request)
            .await
        {
            Ok(remote) => {
                debug!("updated {}: {id}", self.layout.full_name());
                Some((self.layout.read(&remote, Some(&planned_state)), private_state))
            }
            Err(err) => {
                client_error(diags, Action::Update, &self.layout.full_name(), &err);
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
        let id = self.id(diags, &state)?;

        match client.delete(self.layout.kind.path, id).await {
            Ok(()) => {
                debug!("deleted {}: {id}", self.layout.full_name());
                Some(())
            }
            Err(err) => {
                client_error(diags, Action::Delete, &self.layout.full_name(), &err);
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
        debug!("imported {}: {id}", self.layout.full_name());

        Some((self.layout.import(id), Value::Null))
    }
}
