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

use tf_provider::schema::{AttributeConstraint, AttributeType, Block, Description};
use tf_provider::value::{Value, ValueEmpty};
use tf_provider::{map, DataSource, Diagnostics, Schema};

use crate::client::RemoteObject;
use crate::kind::Kind;
use crate::prowlarr_provider::SharedClient;
use crate::utils::{attribute, client_error, data_source_error, Action};

use super::layout::Layout;
use super::state::{ObjectListState, ObjectState};

/// Look up a single object by its name, or label for tags
#[derive(Debug)]
pub struct ObjectDataSource {
    layout: Layout,
    client: SharedClient,
}

impl ObjectDataSource {
    pub fn new(kind: &'static Kind, client: SharedClient) -> Self {
        Self {
            layout: Layout::data_source(kind),
            client,
        }
    }
}

#[async_trait]
impl DataSource for ObjectDataSource {
    type State<'a> = ObjectState;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        let kind = self.layout.kind;
        Some(self.layout.schema(Description::markdown(format!(
            "Single {} data source, found by its {}.",
            kind.title, kind.label
        ))))
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
        let client = self.client.get(diags)?;
        let kind = self.layout.kind;
        let resource = self.layout.full_name();
        let label = config.string(kind.label).unwrap_or_default().to_owned();

        let objects = match client.list::<RemoteObject>(kind.path).await {
            Ok(objects) => objects,
            Err(err) => {
                client_error(diags, Action::Read, &resource, &err);
                return None;
            }
        };

        match objects
            .iter()
            .find(|object| object.label(kind.label) == Some(label.as_str()))
        {
            Some(object) => {
                debug!("found {resource}: {label}");
                Some(self.layout.read(object, None))
            }
            None => {
                data_source_error(diags, &resource, &label);
                None
            }
        }
    }
}

/// List every object of a kind
#[derive(Debug)]
pub struct ObjectListDataSource {
    layout: Layout,
    client: SharedClient,
}

impl ObjectListDataSource {
    pub fn new(kind: &'static Kind, client: SharedClient) -> Self {
        Self {
            layout: Layout::computed(kind),
            client,
        }
    }
}

#[async_trait]
impl DataSource for ObjectListDataSource {
    type State<'a> = ObjectListState;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        let kind = self.layout.kind;
        Some(Schema {
            version: 0,
            block: Block {
                attributes: map! {
                    kind.plural => attribute(
                        AttributeType::Set(Box::new(self.layout.object_type())),
                        &format!("{} list.", kind.title),
                        AttributeConstraint::Computed,
                        self.layout.columns.iter().any(|column| column.sensitive),
                    ),
                },
                description: Description::markdown(format!("List all available {}.", kind.title)),
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
        let client = self.client.get(diags)?;
        let kind = self.layout.kind;

        let objects = match client.list::<RemoteObject>(kind.path).await {
            Ok(objects) => objects,
            Err(err) => {
                client_error(diags, Action::List, &format!("prowlarr_{}", kind.plural), &err);
                return None;
            }
        };
        debug!("listed {} {}", objects.len(), kind.plural);

        Some(ObjectListState {
            name: kind.plural.to_owned(),
            objects: Value::Value(
                objects
                    .iter()
                    .map(|object| Value::Value(self.layout.read(object, None)))
                    .collect(),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::client::ProwlarrClient;
    use crate::kind::{APPLICATION, TAG};
    use crate::object::state::AttrValue;

    async fn setup(body: serde_json::Value) -> (MockServer, SharedClient) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/applications"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/tag"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"id": 1, "label": "movies"}, {"id": 2, "label": "Movies"}])),
            )
            .mount(&server)
            .await;

        let url = Url::parse(&server.uri()).unwrap();
        let client = SharedClient::default();
        client.set(ProwlarrClient::with_client(reqwest::Client::new(), &url));
        (server, client)
    }

    fn applications() -> serde_json::Value {
        json!([
            {
                "id": 1,
                "name": "Radarr",
                "syncLevel": "fullSync",
                "implementation": "Radarr",
                "configContract": "RadarrSettings",
                "tags": [3],
                "fields": [
                    {"name": "prowlarrUrl", "value": "http://prowlarr:9696"},
                    {"name": "baseUrl", "value": "http://radarr:7878"},
                    {"name": "apiKey", "value": "********", "privacy": "apiKey"},
                    {"name": "syncCategories", "value": [2000, 2010]}
                ]
            },
            {
                "id": 2,
                "name": "Sonarr",
                "syncLevel": "addOnly",
                "implementation": "Sonarr",
                "configContract": "SonarrSettings",
                "tags": [],
                "fields": []
            }
        ])
    }

    fn lookup(label_name: &str, label: &str) -> ObjectState {
        let mut config = ObjectState::default();
        config.set(label_name, AttrValue::String(Value::Value(label.to_owned())));
        config
    }

    #[tokio::test]
    async fn find_by_name() {
        let (_server, client) = setup(applications()).await;
        let data_source = ObjectDataSource::new(&APPLICATION, client);
        let mut diags = Diagnostics::default();

        let state = DataSource::read(&data_source, &mut diags, lookup("name", "Radarr"), Value::Null)
            .await
            .unwrap();

        assert!(diags.errors.is_empty());
        assert_eq!(state.number("id"), Some(1));
        assert_eq!(state.string("sync_level"), Some("fullSync"));
        assert_eq!(state.string("base_url"), Some("http://radarr:7878"));
        assert_eq!(state.get("api_key"), Some(&AttrValue::String(Value::Null)));
        assert_eq!(
            state.get("sync_categories"),
            Some(&AttrValue::NumberSet(Value::Value(
                [Value::Value(2000), Value::Value(2010)].into()
            )))
        );
    }

    #[tokio::test]
    async fn find_by_label_is_case_sensitive() {
        let (_server, client) = setup(applications()).await;
        let data_source = ObjectDataSource::new(&TAG, client);
        let mut diags = Diagnostics::default();

        let state = DataSource::read(&data_source, &mut diags, lookup("label", "Movies"), Value::Null)
            .await
            .unwrap();
        assert_eq!(state.number("id"), Some(2));
    }

    #[tokio::test]
    async fn missing_object() {
        let (_server, client) = setup(applications()).await;
        let data_source = ObjectDataSource::new(&APPLICATION, client);
        let mut diags = Diagnostics::default();

        assert!(
            DataSource::read(&data_source, &mut diags, lookup("name", "Lidarr"), Value::Null)
                .await
                .is_none()
        );
        let rendered = format!("{:?}", diags.errors);
        assert!(rendered.contains("Data Source Error"), "{rendered}");
        assert!(
            rendered.contains("Unable to find prowlarr_application: Lidarr"),
            "{rendered}"
        );
    }

    #[tokio::test]
    async fn list_all() {
        let (_server, client) = setup(applications()).await;
        let data_source = ObjectListDataSource::new(&APPLICATION, client);
        let mut diags = Diagnostics::default();

        let state = DataSource::read(&data_source, &mut diags, Default::default(), Value::Null)
            .await
            .unwrap();

        assert_eq!(state.name, "applications");
        let Value::Value(objects) = &state.objects else {
            panic!("applications is not a known list: {state:?}");
        };
        let names: Vec<_> = objects
            .iter()
            .filter_map(|object| object.as_ref_option())
            .filter_map(|object| object.string("name"))
            .collect();
        assert_eq!(names, vec!["Radarr", "Sonarr"]);
    }

    #[tokio::test]
    async fn empty_list() {
        let (_server, client) = setup(json!([])).await;
        let data_source = ObjectListDataSource::new(&APPLICATION, client);
        let mut diags = Diagnostics::default();

        let state = DataSource::read(&data_source, &mut diags, Default::default(), Value::Null)
            .await
            .unwrap();
        assert_eq!(state.name, "applications");
        assert_eq!(state.objects, Value::Value(vec![]));
    }
}
