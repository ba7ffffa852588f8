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

use std::borrow::Cow;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use tf_provider::schema::{AttributeConstraint, AttributeType, Block, Description};
use tf_provider::value::{Value, ValueEmpty, ValueString};
use tf_provider::{DataSource, Diagnostics, Schema};

use crate::client::SystemStatus;
use crate::prowlarr_provider::SharedClient;
use crate::utils::{attribute, client_error, Action};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemStatusState<'a> {
    pub app_name: ValueString<'a>,
    pub instance_name: ValueString<'a>,
    pub version: ValueString<'a>,
    pub branch: ValueString<'a>,
    pub authentication: ValueString<'a>,
    pub url_base: ValueString<'a>,
    pub os_name: ValueString<'a>,
    pub is_docker: Value<bool>,
    pub start_time: ValueString<'a>,
}

fn known<T>(value: Option<T>) -> Value<T> {
    match value {
        Some(value) => Value::Value(value),
        None => Value::Null,
    }
}

impl From<SystemStatus> for SystemStatusState<'static> {
    fn from(status: SystemStatus) -> Self {
        let string = |value: Option<String>| known(value.map(Cow::Owned));
        Self {
            app_name: string(status.app_name),
            instance_name: string(status.instance_name),
            version: string(status.version),
            branch: string(status.branch),
            authentication: string(status.authentication),
            url_base: string(status.url_base),
            os_name: string(status.os_name),
            is_docker: known(status.is_docker),
            start_time: string(status.start_time),
        }
    }
}

/// Status of the configured Prowlarr instance
#[derive(Debug, Default)]
pub struct SystemStatusDataSource {
    client: SharedClient,
}

impl SystemStatusDataSource {
    pub fn new(client: SharedClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataSource for SystemStatusDataSource {
    type State<'a> = SystemStatusState<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        let attributes = [
            ("app_name", AttributeType::String, "Application name."),
            ("instance_name", AttributeType::String, "Instance name."),
            ("version", AttributeType::String, "Version."),
            ("branch", AttributeType::String, "Update branch."),
            ("authentication", AttributeType::String, "Authentication method."),
            ("url_base", AttributeType::String, "URL base."),
            ("os_name", AttributeType::String, "Operating system."),
            ("is_docker", AttributeType::Bool, "Running in a docker container."),
            ("start_time", AttributeType::String, "Start time."),
        ]
        .into_iter()
        .map(|(name, attr_type, description)| {
            (
                name.to_owned(),
                attribute(attr_type, description, AttributeConstraint::Computed, false),
            )
        })
        .collect();

        Some(Schema {
            version: 0,
            block: Block {
                attributes,
                description: Description::markdown("System status of the Prowlarr instance."),
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
        match client.system_status().await {
            Ok(status) => Some(status.into()),
            Err(err) => {
                client_error(diags, Action::Read, "prowlarr_system_status", &err);
                None
            }
        }
    }
}
