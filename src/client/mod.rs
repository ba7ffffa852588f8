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

//! Async client for the Prowlarr `/api/v1` REST API.
//!
//! Authentication uses the `X-Api-Key` header. Every call is a single
//! request/response round trip: no retry and no caching.

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::utils::DisplayJoinable;

pub mod types;

pub use types::{RemoteObject, SettingField, SystemStatus};

use types::ValidationFailure;

const API_PATH: &str = "api/v1/";
const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),

    /// The server rejected the API key
    #[error("401 Unauthorized")]
    Unauthorized,

    #[error("{status} {message}")]
    Api { status: StatusCode, message: String },

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ProwlarrClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ProwlarrClient {
    /// Build a client sending `api_key` with every request
    pub fn new(url: &Url, api_key: &SecretString) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(api_key.expose_secret())
            .map_err(|err| Error::InvalidApiKey(err.to_string()))?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!(
                "terraform-provider-prowlarr/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self::with_client(http, url))
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn with_client(http: reqwest::Client, url: &Url) -> Self {
        let mut base_url = url.clone();
        let path = format!("{}/{API_PATH}", base_url.path().trim_end_matches('/'));
        base_url.set_path(&path);
        Self { http, base_url }
    }

    pub async fn list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, Error> {
        self.send(Method::GET, path, None::<&()>).await
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, id: i64) -> Result<T, Error> {
        self.send(Method::GET, &format!("{path}/{id}"), None::<&()>)
            .await
    }

    pub async fn create<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        self.send(Method::POST, path, Some(body)).await
    }

    pub async fn update<T, B>(&self, path: &str, id: i64, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + Sync,
    {
        self.send(Method::PUT, &format!("{path}/{id}"), Some(body))
            .await
    }

    pub async fn delete(&self, path: &str, id: i64) -> Result<(), Error> {
        let url = self.url(&format!("{path}/{id}"))?;
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(parse_error(status, resp).await)
        }
    }

    pub async fn system_status(&self) -> Result<SystemStatus, Error> {
        self.send(Method::GET, "system/status", None::<&()>).await
    }

    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    async fn send<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let url = self.url(path)?;
        debug!("{method} {url}");

        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let resp = request.send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(parse_error(status, resp).await);
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|err| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{err} (body preview: {preview:?})"),
                body,
            }
        })
    }
}

async fn parse_error(status: StatusCode, resp: reqwest::Response) -> Error {
    if status == StatusCode::UNAUTHORIZED {
        return Error::Unauthorized;
    }

    let raw = resp.text().await.unwrap_or_default();

    let message = if let Ok(failures) = serde_json::from_str::<Vec<ValidationFailure>>(&raw) {
        failures.iter().join_with("; ").to_string()
    } else if let Ok(ErrorResponse {
        message: Some(message),
    }) = serde_json::from_str::<ErrorResponse>(&raw)
    {
        message
    } else if raw.is_empty() {
        status
            .canonical_reason()
            .unwrap_or_default()
            .to_owned()
    } else {
        raw
    };

    Error::Api { status, message }
}
