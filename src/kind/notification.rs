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

const fn notification(
    name: &'static str,
    implementation: &'static str,
    config_contract: &'static str,
    fields: &'static [&'static str],
    required: &'static [&'static str],
) -> Implementation {
    Implementation {
        name,
        implementation,
        config_contract,
        protocol: None,
        fields,
        required,
    }
}

pub static NOTIFICATION: Kind = Kind {
    name: "notification",
    plural: "notifications",
    title: "Notification",
    path: "notification",
    label: "name",
    tagged: true,
    protocol: false,
    attributes: &[
        Field::bool("on_grab", "onGrab", "On grab flag."),
        Field::bool("on_health_issue", "onHealthIssue", "On health issue flag."),
        Field::bool("on_health_restored", "onHealthRestored", "On health restored flag."),
        Field::bool(
            "on_application_update",
            "onApplicationUpdate",
            "On application update flag.",
        ),
        Field::bool(
            "include_health_warnings",
            "includeHealthWarnings",
            "Include health warnings.",
        ),
        Field::bool("include_manual_grabs", "includeManualGrabs", "Include manual grabs."),
    ],
    settings: &[
        Field::string("web_hook_url", "webHookUrl", "Webhook URL."),
        Field::string("username", "username", "Username."),
        Field::string("password", "password", "Password.").sensitive(),
        Field::string("avatar", "avatar", "Avatar."),
        Field::string("author", "author", "Author."),
        Field::string("icon", "icon", "Icon."),
        Field::string("channel", "channel", "Channel."),
        Field::string("server", "server", "Server."),
        Field::number("port", "port", "Port."),
        Field::number(
            "use_encryption",
            "useEncryption",
            "Encryption mode: `0` preferred, `1` always, `2` never.",
        ),
        Field::string("from", "from", "From address."),
        Field::string_set("to", "to", "Recipients."),
        Field::string_set("cc", "cc", "CC recipients."),
        Field::string_set("bcc", "bcc", "BCC recipients."),
        Field::string("app_token", "appToken", "Application token.").sensitive(),
        Field::number("priority", "priority", "Notification priority."),
        Field::string("api_key", "apiKey", "API key.").sensitive(),
        Field::string("user_key", "userKey", "User key.").sensitive(),
        Field::string_set("devices", "devices", "Devices."),
        Field::number("retry", "retry", "Retry interval in seconds."),
        Field::number("expire", "expire", "Expiration in seconds."),
        Field::string("sound", "sound", "Sound."),
        Field::string("bot_token", "botToken", "Bot token.").sensitive(),
        Field::string("chat_id", "chatId", "Chat ID."),
        Field::number("topic_id", "topicId", "Topic ID."),
        Field::bool("send_silently", "sendSilently", "Send silently flag."),
        Field::string("url", "url", "URL."),
        Field::number("method", "method", "HTTP method: `1` POST, `2` PUT."),
        Field::string("path", "path", "Script path."),
        Field::string("arguments", "arguments", "Script arguments."),
        Field::string("server_url", "serverUrl", "Server URL."),
        Field::string("access_token", "accessToken", "Access token.").sensitive(),
        Field::string_set("topics", "topics", "Topics."),
        Field::string_set("field_tags", "tags", "Tags sent along the notification."),
        Field::string("click_url", "clickUrl", "Click URL."),
        Field::string("configuration_key", "configurationKey", "Configuration key."),
        Field::string("stateless_urls", "statelessUrls", "Stateless URLs."),
        Field::number("notification_type", "notificationType", "Notification type."),
        Field::string("auth_username", "authUsername", "Basic auth username."),
        Field::string("auth_password", "authPassword", "Basic auth password.").sensitive(),
    ],
    implementations: &[
        notification(
            "apprise",
            "Apprise",
            "AppriseSettings",
            &[
                "server_url",
                "configuration_key",
                "stateless_urls",
                "notification_type",
                "field_tags",
                "auth_username",
                "auth_password",
            ],
            &["server_url"],
        ),
        notification(
            "custom_script",
            "CustomScript",
            "CustomScriptSettings",
            &["path", "arguments"],
            &["path"],
        ),
        notification(
            "discord",
            "Discord",
            "DiscordSettings",
            &["web_hook_url", "username", "avatar", "author"],
            &["web_hook_url"],
        ),
        notification(
            "email",
            "Email",
            "EmailSettings",
            &[
                "server",
                "port",
                "use_encryption",
                "username",
                "password",
                "from",
                "to",
                "cc",
                "bcc",
            ],
            &["server", "from", "to"],
        ),
        notification(
            "gotify",
            "Gotify",
            "GotifySettings",
            &["server", "app_token", "priority"],
            &["server", "app_token"],
        ),
        notification(
            "ntfy",
            "Ntfy",
            "NtfySettings",
            &[
                "server_url",
                "access_token",
                "username",
                "password",
                "topics",
                "priority",
                "field_tags",
                "click_url",
            ],
            &["topics"],
        ),
        notification(
            "pushover",
            "Pushover",
            "PushoverSettings",
            &[
                "api_key", "user_key", "devices", "priority", "retry", "expire", "sound",
            ],
            &["api_key", "user_key"],
        ),
        notification(
            "slack",
            "Slack",
            "SlackSettings",
            &["web_hook_url", "username", "icon", "channel"],
            &["web_hook_url"],
        ),
        notification(
            "telegram",
            "Telegram",
            "TelegramSettings",
            &["bot_token", "chat_id", "topic_id", "send_silently"],
            &["bot_token", "chat_id"],
        ),
        notification(
            "webhook",
            "Webhook",
            "WebhookSettings",
            &["url", "method", "username", "password"],
            &["url"],
        ),
    ],
};
