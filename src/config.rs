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

use serde::{Deserialize, Serialize};
use secrecy::SecretString;
use url::Url;

use tf_provider::schema::{AttributeConstraint, AttributeType, Block, Description};
use tf_provider::value::{Value, ValueString};
use tf_provider::{AttributePath, Diagnostics, Schema};

use crate::utils::{attribute, WithSchema};

pub const URL_ENV: &str = "PROWLARR_URL";
pub const API_KEY_ENV: &str = "PROWLARR_API_KEY";

/// Provider block
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig<'a> {
    pub url: ValueString<'a>,
    pub api_key: ValueString<'a>,
}

/// Resolved connection settings
#[derive(Debug)]
pub struct Settings {
    pub url: Url,
    pub api_key: SecretString,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("The provider cannot create the Prowlarr client as there is a missing or empty value for the Prowlarr URL. Set the url value in the configuration or use the PROWLARR_URL environment variable.")]
    MissingUrl,

    #[error("The provider cannot create the Prowlarr client as there is a missing or empty value for the Prowlarr API key. Set the api_key value in the configuration or use the PROWLARR_API_KEY environment variable.")]
    MissingApiKey,

    #[error("Invalid Prowlarr URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("The provider cannot create the Prowlarr client as there is an unknown configuration value for `{0}`. Either target apply the source of the value first or set the value statically.")]
    Unknown(&'static str),
}

impl ConfigError {
    pub fn attribute(&self) -> &'static str {
        match self {
            ConfigError::MissingUrl | ConfigError::InvalidUrl { .. } => "url",
            ConfigError::MissingApiKey => "api_key",
            ConfigError::Unknown(attribute) => *attribute,
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            ConfigError::MissingUrl => "Missing Prowlarr URL",
            ConfigError::MissingApiKey => "Missing Prowlarr API Key",
            ConfigError::InvalidUrl { .. } => "Invalid Prowlarr URL",
            ConfigError::Unknown(_) => "Unknown Prowlarr Configuration",
        }
    }

    pub fn report(&self, diags: &mut Diagnostics) {
        diags.error(
            self.summary(),
            self.to_string(),
            AttributePath::new(self.attribute()),
        );
    }
}

fn parse_url(url: &str) -> Result<Url, ConfigError> {
    Url::parse(url).map_err(|source| ConfigError::InvalidUrl {
        url: url.to_owned(),
        source,
    })
}

/// Configuration value, falling back to the environment when null or empty
fn lookup(
    value: &ValueString,
    name: &'static str,
    var: &str,
    env: &impl Fn(&str) -> Option<String>,
) -> Result<Option<String>, ConfigError> {
    match value {
        Value::Unknown => Err(ConfigError::Unknown(name)),
        Value::Value(value) if !value.is_empty() => Ok(Some(value.to_string())),
        _ => Ok(env(var).filter(|value| !value.is_empty())),
    }
}

impl<'a> ProviderConfig<'a> {
    /// Resolve the settings, reading environment variables through `env`
    pub fn resolve(&self, env: impl Fn(&str) -> Option<String>) -> Result<Settings, ConfigError> {
        let url = lookup(&self.url, "url", URL_ENV, &env)?.ok_or(ConfigError::MissingUrl)?;
        let api_key =
            lookup(&self.api_key, "api_key", API_KEY_ENV, &env)?.ok_or(ConfigError::MissingApiKey)?;

        Ok(Settings {
            url: parse_url(&url)?,
            api_key: api_key.into(),
        })
    }

    /// Checks that only need the configuration
    pub fn validate(&self, diags: &mut Diagnostics) {
        if let Value::Value(url) = &self.url {
            if !url.is_empty() {
                if let Err(err) = parse_url(url) {
                    err.report(diags);
                }
            }
        }
    }
}

impl<'a> WithSchema for ProviderConfig<'a> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                attributes: [
                    (
                        "url".to_owned(),
                        attribute(
                            AttributeType::String,
                            &format!("Full Prowlarr URL with protocol and port (e.g. `https://test.prowlarr.com:9696`). You should NOT supply any path (`/api`), the provider adds the API path itself. Can be specified via the `{URL_ENV}` environment variable."),
                            AttributeConstraint::Optional,
                            false,
                        ),
                    ),
                    (
                        "api_key".to_owned(),
                        attribute(
                            AttributeType::String,
                            &format!("API key for Prowlarr authentication. Can be specified via the `{API_KEY_ENV}` environment variable."),
                            AttributeConstraint::Optional,
                            true,
                        ),
                    ),
                ]
                .into(),
                description: Description::markdown(
                    "The Prowlarr provider is used to interact with any [Prowlarr](https://prowlarr.com) installation. You must configure the provider with the proper credentials before you can use it.",
                ),
                ..Default::default()
            },
        }
    }
}
