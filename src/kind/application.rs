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

const SYNC_LEVELS: &[&str] = &["addOnly", "fullSync", "disabled"];

const ARR_FIELDS: &[&str] = &["prowlarr_url", "base_url", "api_key", "sync_categories"];
const ARR_REQUIRED: &[&str] = &["prowlarr_url", "base_url", "api_key"];

const fn arr(
    name: &'static str,
    implementation: &'static str,
    config_contract: &'static str,
) -> Implementation {
    Implementation {
        name,
        implementation,
        config_contract,
        protocol: None,
        fields: ARR_FIELDS,
        required: ARR_REQUIRED,
    }
}

pub static APPLICATION: Kind = Kind {
    name: "application",
    plural: "applications",
    title: "Application",
    path: "applications",
    label: "name",
    tagged: true,
    protocol: false,
    attributes: &[Field::string(
        "sync_level",
        "syncLevel",
        "Sync level. Valid values are `addOnly`, `fullSync` and `disabled`.",
    )
    .required()
    .one_of(SYNC_LEVELS)],
    settings: &[
        Field::string("prowlarr_url", "prowlarrUrl", "Prowlarr URL as seen by the application."),
        Field::string("base_url", "baseUrl", "Application URL."),
        Field::string("api_key", "apiKey", "API key.").sensitive(),
        Field::number_set("sync_categories", "syncCategories", "Categories to sync."),
        Field::number_set(
            "anime_sync_categories",
            "animeSyncCategories",
            "Anime categories to sync.",
        ),
        Field::bool(
            "sync_anime_standard_format_search",
            "syncAnimeStandardFormatSearch",
            "Search anime using the standard numbering.",
        ),
    ],
    implementations: &[
        arr("lazy_librarian", "LazyLibrarian", "LazyLibrarianSettings"),
        arr("lidarr", "Lidarr", "LidarrSettings"),
        arr("mylar", "Mylar", "MylarSettings"),
        arr("radarr", "Radarr", "RadarrSettings"),
        arr("readarr", "Readarr", "ReadarrSettings"),
        Implementation {
            name: "sonarr",
            implementation: "Sonarr",
            config_contract: "SonarrSettings",
            protocol: None,
            fields: &[
                "prowlarr_url",
                "base_url",
                "api_key",
                "sync_categories",
                "anime_sync_categories",
                "sync_anime_standard_format_search",
            ],
            required: ARR_REQUIRED,
        },
        arr("whisparr", "Whisparr", "WhisparrSettings"),
    ],
};
