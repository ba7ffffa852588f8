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

use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Variable holding the provider log filter, e.g. `debug` or
/// `terraform_provider_prowlarr=trace`
pub const LOG_ENV: &str = "TF_LOG_PROVIDER";

fn filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Log to stderr, stdout is reserved for the plugin handshake.
///
/// Fails when a global subscriber is already installed.
pub fn init() -> Result<(), TryInitError> {
    let directives = std::env::var(LOG_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .finish()
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter() {
        assert_eq!(filter(None).to_string(), "info");
        assert_eq!(filter(Some("debug")).to_string(), "debug");
    }

    #[test]
    fn second_init_is_reported() {
        init().ok();
        assert!(init().is_err());
    }
}
