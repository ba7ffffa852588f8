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

const fn torrent(
    name: &'static str,
    implementation: &'static str,
    config_contract: &'static str,
    fields: &'static [&'static str],
) -> Implementation {
    Implementation {
        name,
        implementation,
        config_contract,
        protocol: Some("torrent"),
        fields,
        required: &[],
    }
}

const fn usenet(
    name: &'static str,
    implementation: &'static str,
    config_contract: &'static str,
    fields: &'static [&'static str],
) -> Implementation {
    Implementation {
        protocol: Some("usenet"),
        ..torrent(name, implementation, config_contract, fields)
    }
}

pub static DOWNLOAD_CLIENT: Kind = Kind {
    name: "download_client",
    plural: "download_clients",
    title: "Download Client",
    path: "downloadclient",
    label: "name",
    tagged: true,
    protocol: true,
    attributes: &[
        Field::bool("enable", "enable", "Enable flag."),
        Field::number("priority", "priority", "Priority."),
    ],
    settings: &[
        Field::string("host", "host", "Host."),
        Field::number("port", "port", "Port."),
        Field::bool("use_ssl", "useSsl", "Use SSL flag."),
        Field::string("url_base", "urlBase", "Base URL."),
        Field::string("username", "username", "Username."),
        Field::string("password", "password", "Password.").sensitive(),
        Field::string("api_key", "apiKey", "API key.").sensitive(),
        Field::string("category", "category", "Category."),
        Field::string("directory", "directory", "Download directory."),
        Field::string("destination", "destination", "Destination path."),
        Field::number("item_priority", "priority", "Priority of the downloaded items."),
        Field::number("initial_state", "initialState", "Initial state of added items."),
        Field::bool("sequential_order", "sequentialOrder", "Download in sequential order."),
        Field::bool("first_and_last", "firstAndLast", "Download first and last pieces first."),
        Field::bool("add_paused", "addPaused", "Add items paused."),
        Field::bool("add_stopped", "addStopped", "Add items stopped."),
        Field::bool("start_on_add", "startOnAdd", "Start items on add."),
        Field::string("rpc_path", "rpcPath", "RPC path."),
        Field::string("secret_token", "secretToken", "Secret token.").sensitive(),
        Field::string("torrent_folder", "torrentFolder", "Torrent folder."),
        Field::string("nzb_folder", "nzbFolder", "NZB folder."),
        Field::bool("save_magnet_files", "saveMagnetFiles", "Save magnet files."),
        Field::string(
            "magnet_file_extension",
            "magnetFileExtension",
            "Extension of saved magnet files.",
        ),
    ],
    implementations: &[
        torrent(
            "aria2",
            "Aria2",
            "Aria2Settings",
            &[
                "host",
                "port",
                "use_ssl",
                "rpc_path",
                "secret_token",
            ],
        ),
        torrent(
            "deluge",
            "Deluge",
            "DelugeSettings",
            &[
                "host",
                "port",
                "use_ssl",
                "url_base",
                "password",
                "category",
                "item_priority",
                "add_paused",
            ],
        ),
        torrent(
            "flood",
            "Flood",
            "FloodSettings",
            &[
                "host",
                "port",
                "use_ssl",
                "url_base",
                "username",
                "password",
                "destination",
                "start_on_add",
            ],
        ),
        usenet(
            "nzbget",
            "Nzbget",
            "NzbgetSettings",
            &[
                "host",
                "port",
                "use_ssl",
                "url_base",
                "username",
                "password",
                "category",
                "item_priority",
                "add_paused",
            ],
        ),
        torrent(
            "qbittorrent",
            "QBittorrent",
            "QBittorrentSettings",
            &[
                "host",
                "port",
                "use_ssl",
                "url_base",
                "username",
                "password",
                "category",
                "item_priority",
                "initial_state",
                "sequential_order",
                "first_and_last",
            ],
        ),
        torrent(
            "rtorrent",
            "RTorrent",
            "RTorrentSettings",
            &[
                "host",
                "port",
                "use_ssl",
                "url_base",
                "username",
                "password",
                "category",
                "directory",
                "item_priority",
                "add_stopped",
            ],
        ),
        usenet(
            "sabnzbd",
            "Sabnzbd",
            "SabnzbdSettings",
            &[
                "host",
                "port",
                "use_ssl",
                "url_base",
                "api_key",
                "username",
                "password",
                "category",
                "item_priority",
            ],
        ),
        torrent(
            "torrent_blackhole",
            "TorrentBlackhole",
            "TorrentBlackholeSettings",
            &[
                "torrent_folder",
                "save_magnet_files",
                "magnet_file_extension",
            ],
        ),
        torrent(
            "transmission",
            "Transmission",
            "TransmissionSettings",
            &[
                "host",
                "port",
                "use_ssl",
                "url_base",
                "username",
                "password",
                "category",
                "directory",
                "item_priority",
                "add_paused",
            ],
        ),
        usenet(
            "usenet_blackhole",
            "UsenetBlackhole",
            "UsenetBlackholeSettings",
            &[
                "nzb_folder",
            ],
        ),
        torrent(
            "utorrent",
            "UTorrent",
            "UTorrentSettings",
            &[
                "host",
                "port",
                "use_ssl",
                "url_base",
                "username",
                "password",
                "category",
                "item_priority",
                "initial_state",
            ],
        ),
    ],
};
