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

use super::{Field, Kind};

pub static SYNC_PROFILE: Kind = Kind {
    name: "sync_profile",
    plural: "sync_profiles",
    title: "Sync Profile",
    path: "appprofile",
    label: "name",
    tagged: false,
    protocol: false,
    attributes: &[
        Field::bool("enable_rss", "enableRss", "Enable RSS flag."),
        Field::bool(
            "enable_interactive_search",
            "enableInteractiveSearch",
            "Enable interactive search flag.",
        ),
        Field::bool(
            "enable_automatic_search",
            "enableAutomaticSearch",
            "Enable automatic search flag.",
        ),
        Field::number("minimum_seeders", "minimumSeeders", "Minimum seeders."),
    ],
    settings: &[],
    implementations: &[],
};
