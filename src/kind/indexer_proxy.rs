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

use super::{Field, Implementation, Kind};

const PROXY_FIELDS: &[&str] = &["host", "port", "username", "password"];

const fn proxy(
    name: &'static str,
    implementation: &'static str,
    config_contract: &'static str,
) -> Implementation {
    Implementation {
        name,
        implementation,
        config_contract,
        protocol: None,
        fields: PROXY_FIELDS,
        required: &["host", "port"],
    }
}

pub static INDEXER_PROXY: Kind = Kind {
    name: "indexer_proxy",
    plural: "indexer_proxies",
    title: "Indexer Proxy",
    path: "indexerproxy",
    label: "name",
    tagged: true,
    protocol: false,
    attributes: &[],
    settings: &[
        Field::string("host", "host", "Host."),
        Field::number("port", "port", "Port."),
        Field::string("username", "username", "Username."),
        Field::string("password", "password", "Password.").sensitive(),
        Field::number("request_timeout", "requestTimeout", "Request timeout in seconds."),
    ],
    implementations: &[
        Implementation {
            name: "flaresolverr",
            implementation: "FlareSolverr",
            config_contract: "FlareSolverrSettings",
            protocol: None,
            fields: &["host", "request_timeout"],
            required: &["host"],
        },
        proxy("http", "Http", "HttpSettings"),
        proxy("socks4", "Socks4", "Socks4Settings"),
        proxy("socks5", "Socks5", "Socks5Settings"),
    ],
};
