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
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use tracing::{debug, info};

use tf_provider::data_source::DynamicDataSource;
use tf_provider::resource::DynamicResource;
use tf_provider::{Diagnostics, Provider, Schema, ValueEmpty};

use crate::client::ProwlarrClient;
use crate::config::ProviderConfig;
use crate::indexer::{IndexerDataSource, IndexerResource, IndexersDataSource};
use crate::kind::KINDS;
use crate::object::{ObjectDataSource, ObjectListDataSource, ObjectResource};
use crate::system_status::SystemStatusDataSource;
use crate::utils::WithSchema;

pub const PROVIDER_NAME: &str = "prowlarr";

/// Client handle shared by every resource, filled by `configure`
#[derive(Debug, Default, Clone)]
pub struct SharedClient(Arc<RwLock<Option<ProwlarrClient>>>);

impl SharedClient {
    pub fn set(&self, client: ProwlarrClient) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = Some(client);
    }

    pub fn get(&self, diags: &mut Diagnostics) -> Option<ProwlarrClient> {
        let client = self
            .0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if client.is_none() {
            diags.root_error(
                "Unconfigured HTTP Client",
                "Expected configured HTTP client. Please report this issue to the provider developers.",
            );
        }
        client
    }
}

#[derive(Debug, Default, Clone)]
pub struct ProwlarrProvider {
    client: SharedClient,
}

#[async_trait]
impl Provider for ProwlarrProvider {
    type Config<'a> = ProviderConfig<'a>;
    type MetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(ProviderConfig::schema())
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::Config<'a>) -> Option<()> {
        config.validate(diags);

        if diags.errors.is_empty() {
            Some(())
        } else {
            None
        }
    }

    async fn configure<'a>(
        &self,
        diags: &mut Diagnostics,
        terraform_version: String,
        config: Self::Config<'a>,
    ) -> Option<()> {
        let settings = match config.resolve(|name| std::env::var(name).ok()) {
            Ok(settings) => settings,
            Err(err) => {
                err.report(diags);
                return None;
            }
        };

        match ProwlarrClient::new(&settings.url, &settings.api_key) {
            Ok(client) => {
                info!(
                    "configured prowlarr client for {} (terraform {terraform_version})",
                    settings.url
                );
                self.client.set(client);
                Some(())
            }
            Err(err) => {
                diags.root_error(
                    "Unable to Create Prowlarr API Client",
                    format!("An unexpected error occurred when creating the Prowlarr API client: {err}"),
                );
                None
            }
        }
    }

    fn get_resources(
        &self,
        _diags: &mut Diagnostics,
    ) -> Option<HashMap<String, Box<dyn DynamicResource>>> {
        let mut resources: HashMap<String, Box<dyn DynamicResource>> = HashMap::new();
        let mut register = |resource: ObjectResource| {
            resources.insert(resource.type_name(), Box::new(resource));
        };

        for kind in KINDS {
            register(ObjectResource::new(kind, None, self.client.clone()));
            for implementation in kind.implementations {
                register(ObjectResource::new(
                    kind,
                    Some(implementation),
                    self.client.clone(),
                ));
            }
        }
        resources.insert(
            "indexer".to_owned(),
            Box::new(IndexerResource::new(self.client.clone())),
        );
        debug!("registered {} resources", resources.len());

        Some(resources)
    }

    fn get_data_sources(
        &self,
        _diags: &mut Diagnostics,
    ) -> Option<HashMap<String, Box<dyn DynamicDataSource>>> {
        let mut data_sources: HashMap<String, Box<dyn DynamicDataSource>> = HashMap::new();

        for kind in KINDS {
            data_sources.insert(
                kind.name.to_owned(),
                Box::new(ObjectDataSource::new(kind, self.client.clone())),
            );
            data_sources.insert(
                kind.plural.to_owned(),
                Box::new(ObjectListDataSource::new(kind, self.client.clone())),
            );
        }
        data_sources.insert(
            "indexer".to_owned(),
            Box::new(IndexerDataSource::new(self.client.clone())),
        );
        data_sources.insert(
            "indexers".to_owned(),
            Box::new(IndexersDataSource::new(self.client.clone())),
        );
        data_sources.insert(
            "system_status".to_owned(),
            Box::new(SystemStatusDataSource::new(self.client.clone())),
        );
        debug!("registered {} data sources", data_sources.len());

        Some(data_sources)
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use tf_provider::value::Value;

    use super::*;

    #[test]
    fn registers_every_type() {
        let provider = ProwlarrProvider::default();
        let mut diags = Diagnostics::default();

        let resources = provider.get_resources(&mut diags).unwrap();
        for name in [
            "application",
            "application_sonarr",
            "download_client",
            "download_client_deluge",
            "download_client_sabnzbd",
            "indexer",
            "indexer_proxy_flaresolverr",
            "notification_discord",
            "sync_profile",
            "tag",
        ] {
            assert!(resources.contains_key(name), "missing resource {name}");
        }

        let data_sources = provider.get_data_sources(&mut diags).unwrap();
        for name in [
            "application",
            "applications",
            "download_clients",
            "indexer",
            "indexers",
            "indexer_proxies",
            "notifications",
            "sync_profiles",
            "tag",
            "tags",
            "system_status",
        ] {
            assert!(data_sources.contains_key(name), "missing data source {name}");
        }
    }

    #[tokio::test]
    async fn unconfigured_client() {
        let client = SharedClient::default();
        let mut diags = Diagnostics::default();
        assert!(client.get(&mut diags).is_none());
        assert!(format!("{:?}", diags.errors).contains("Unconfigured HTTP Client"));
    }

    #[tokio::test]
    async fn configure_sets_client() {
        let provider = ProwlarrProvider::default();
        let mut diags = Diagnostics::default();
        let config = ProviderConfig {
            url: Value::Value(Cow::Borrowed("http://prowlarr:9696")),
            api_key: Value::Value(Cow::Borrowed("abc")),
        };

        assert!(provider
            .configure(&mut diags, "1.9.0".to_owned(), config)
            .await
            .is_some());
        assert!(provider.client.get(&mut diags).is_some());
        assert!(diags.errors.is_empty());
    }
}
