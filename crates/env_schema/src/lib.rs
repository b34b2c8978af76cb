// crates/env_schema/src/lib.rs

//! Field schema for the bot's `.env` file.
//!
//! The canonical table in [`FIELDS`] is fixed at build time. Everything else in
//! the workspace reads it through a [`Schema`] view, which tests can also build
//! over their own small slices.

mod choices;

pub use choices::{choices_for, CHOICE_OVERRIDES};

/// Value type of a field. Selects the input widget and the validation rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Boolean,
    Number,
}

/// Display cluster of a field. Declaration order is display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    Boolean,
    Timers,
    Roles,
    Channels,
    Numbers,
    Text,
}

/// Title and blurb shown above a group of fields.
#[derive(Clone, Copy, Debug)]
pub struct GroupInfo {
    pub group: Group,
    pub title: &'static str,
    pub description: &'static str,
}

/// Every group in display order.
pub static GROUPS: &[GroupInfo] = &[
    GroupInfo {
        group: Group::Boolean,
        title: "Feature switches",
        description: "Toggles that enable or disable bot features",
    },
    GroupInfo {
        group: Group::Timers,
        title: "Timers and timezone",
        description: "Time settings and polling delays",
    },
    GroupInfo {
        group: Group::Roles,
        title: "Roles",
        description: "Discord role IDs used by various features",
    },
    GroupInfo {
        group: Group::Channels,
        title: "Channels",
        description: "Discord and other platform channel IDs",
    },
    GroupInfo {
        group: Group::Numbers,
        title: "Numeric settings",
        description: "Assorted numeric parameters",
    },
    GroupInfo {
        group: Group::Text,
        title: "Text settings",
        description: "File names and other text values",
    },
];

/// Static metadata describing one configurable key.
#[derive(Clone, Copy, Debug)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub default_value: &'static str,
    pub field_type: FieldType,
    pub group: Group,
}

impl FieldDescriptor {
    pub const fn new(
        key: &'static str,
        label: &'static str,
        description: &'static str,
        default_value: &'static str,
        field_type: FieldType,
        group: Group,
    ) -> Self {
        Self {
            key,
            label,
            description,
            default_value,
            field_type,
            group,
        }
    }

    pub fn is_number(&self) -> bool {
        self.field_type == FieldType::Number
    }
}

/// An ordered, read-only view over a list of field descriptors.
#[derive(Clone, Copy, Debug)]
pub struct Schema<'a> {
    fields: &'a [FieldDescriptor],
}

impl<'a> Schema<'a> {
    pub const fn new(fields: &'a [FieldDescriptor]) -> Self {
        Self { fields }
    }

    pub fn iter(&self) -> std::slice::Iter<'a, FieldDescriptor> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Looks up a descriptor by key.
    pub fn find(&self, key: &str) -> Option<&'a FieldDescriptor> {
        self.fields.iter().find(|field| field.key == key)
    }

    /// Fields of one group, in schema order.
    pub fn fields_in(&self, group: Group) -> impl Iterator<Item = &'a FieldDescriptor> {
        self.fields.iter().filter(move |field| field.group == group)
    }

    /// Groups that have at least one field, in display order.
    pub fn groups(&self) -> Vec<&'static GroupInfo> {
        GROUPS
            .iter()
            .filter(|info| self.fields.iter().any(|field| field.group == info.group))
            .collect()
    }

    /// Returns the first key that appears more than once, if any.
    pub fn duplicate_key(&self) -> Option<&'a str> {
        self.fields.iter().enumerate().find_map(|(i, field)| {
            self.fields[..i]
                .iter()
                .any(|earlier| earlier.key == field.key)
                .then_some(field.key)
        })
    }
}

/// The canonical schema used by the CLI.
pub fn canonical() -> Schema<'static> {
    Schema::new(FIELDS)
}

use FieldType::{Boolean as B, Number as N, Text as T};

/// Canonical field table. File-name fields hold the bare stem; their extension
/// is appended when the file is written.
pub static FIELDS: &[FieldDescriptor] = &[
    // Feature switches
    FieldDescriptor::new("DEBUG", "Debug mode", "Enable verbose logging", "false", B, Group::Boolean),
    FieldDescriptor::new("DELETE_LINKS", "Delete links", "Automatically delete messages containing links", "false", B, Group::Boolean),
    FieldDescriptor::new("DISABLE_CHAT_IN_VOICE", "Disable chat in voice", "Forbid writing in voice channel chats", "true", B, Group::Boolean),
    FieldDescriptor::new("DISABLE_EMOJI_CONSOLE", "Disable emoji in console", "Strip emoji from console output", "false", B, Group::Boolean),
    FieldDescriptor::new("DISABLE_EMOJI_DISCORD", "Disable emoji in Discord", "Strip emoji from Discord messages", "false", B, Group::Boolean),
    FieldDescriptor::new("DISABLE_EMOJI_FILE", "Disable emoji in files", "Strip emoji when writing files", "true", B, Group::Boolean),
    FieldDescriptor::new("DISABLE_KEYBOARD_INTERRUPT", "Disable keyboard interrupt", "Ignore Ctrl+C", "true", B, Group::Boolean),
    FieldDescriptor::new("DISABLE_LOGGER", "Disable logger", "Turn the logging system off completely", "false", B, Group::Boolean),
    FieldDescriptor::new("DO_REACTIONS", "Add reactions", "Automatically react to messages", "false", B, Group::Boolean),
    FieldDescriptor::new("ENABLE_ATTACHMENT_CHECK", "Attachment check", "Check attachments in messages", "true", B, Group::Boolean),
    FieldDescriptor::new("ENABLE_DISCORD_CHANNEL_PROTECTION", "Discord channel protection", "Protect selected channels", "true", B, Group::Boolean),
    FieldDescriptor::new("ENABLE_EXTRA_MODULE", "Extra module", "Activate extended functionality", "true", B, Group::Boolean),
    FieldDescriptor::new("ENABLE_GLOBAL_LOG", "Global logging", "Send logs to the global channel", "true", B, Group::Boolean),
    FieldDescriptor::new("ENABLE_LIVE_MONITORING", "Stream monitoring", "Track live broadcasts", "true", B, Group::Boolean),
    FieldDescriptor::new("ENABLE_PDF_MONITOR_MODULE", "PDF monitor module", "Track PDF updates", "true", B, Group::Boolean),
    FieldDescriptor::new("ENABLE_POST_MONITORING", "Post monitoring", "Track new posts in groups", "true", B, Group::Boolean),
    FieldDescriptor::new("ENABLE_ROLE_CLEANER_MODULE", "Role cleaner module", "Clean up roles automatically", "true", B, Group::Boolean),
    FieldDescriptor::new("ENABLE_TELEGRAM_MODULE", "Telegram module", "Enable the Telegram integration", "true", B, Group::Boolean),
    FieldDescriptor::new("ENABLE_TRELLO_MODULE", "Trello module", "Enable the Trello integration", "true", B, Group::Boolean),
    FieldDescriptor::new("ENABLE_VIDEO_CHECK", "Video check", "Check videos in messages", "true", B, Group::Boolean),
    FieldDescriptor::new("FULL_LOG_EXTRA", "Full extra-module logging", "Verbose logging for the extra module", "false", B, Group::Boolean),
    // Timers and timezone
    FieldDescriptor::new("TELEGRAM_DELAY", "Telegram delay (sec)", "Delay between Telegram checks", "60", N, Group::Timers),
    FieldDescriptor::new("TIMEZONE", "Timezone", "Timezone used for timestamps", "Europe/Moscow", T, Group::Timers),
    FieldDescriptor::new("TRELLO_CHECK_INTERVAL", "Trello check interval (sec)", "Interval between Trello update checks", "120", N, Group::Timers),
    FieldDescriptor::new("VK_DELAY", "VK delay (sec)", "Delay between VK checks", "60", N, Group::Timers),
    FieldDescriptor::new("VK_LIVE_DELAY", "VK stream delay (sec)", "Delay between VK live broadcast checks", "300", N, Group::Timers),
    // Roles
    FieldDescriptor::new("AUTO_ROLE_ID", "Auto role ID", "Role granted to members automatically", "1412061713217359916", T, Group::Roles),
    FieldDescriptor::new("BAN_ROLE_ID", "Ban role ID", "Role for banned members", "1428698132438319205", T, Group::Roles),
    FieldDescriptor::new("PDF_MENTION_ROLE_ID", "PDF mention role ID", "Role mentioned on PDF updates", "1148137082867429456", T, Group::Roles),
    FieldDescriptor::new("RESTORE_ROLE_ID", "Curator role ID", "Role used to restore access", "1412061713217359916", T, Group::Roles),
    FieldDescriptor::new("STARTER_ROLE_ID", "Starter role ID", "Role for new members", "1183737126769143909", T, Group::Roles),
    // Channels
    FieldDescriptor::new("ANNOUNCEMENTS_CHANNEL_ID", "Announcements channel ID", "Channel for announcements", "1288046806991597690", T, Group::Channels),
    FieldDescriptor::new("DISCORD_CHANNEL_ID", "Main Discord channel ID", "Main Discord channel", "1066654932068950077", T, Group::Channels),
    FieldDescriptor::new("DISCORD_LOG_CHANNEL_ID", "Discord log channel ID", "Channel receiving Discord logs", "1214148163823243264", T, Group::Channels),
    FieldDescriptor::new("GLOBAL_LOG_CHANNEL_ID", "Global log channel ID", "Channel receiving global logs", "1214148163823243264", T, Group::Channels),
    FieldDescriptor::new("PDF_CHANNEL_ID", "PDF channel ID", "Channel where PDF documents are posted", "1148137082867429456", T, Group::Channels),
    FieldDescriptor::new("TELEGRAM_CHANNEL_ID", "Telegram channel ID", "Telegram channel to monitor", "@FromRussiaDiv2", T, Group::Channels),
    FieldDescriptor::new("TELEGRAM_EXCLUDED_VOICE_CHANNELS", "Excluded Discord voice channels", "Comma-separated voice channel IDs", "1111694334182563901,1064867508647116881,1275714782267183114", T, Group::Channels),
    FieldDescriptor::new("TRELLO_CHANNEL_ID", "Trello channel ID", "Channel for Trello updates", "1103248055068528681", T, Group::Channels),
    FieldDescriptor::new("VK_CHANNEL_ID", "VK channel ID", "Channel for posts from VK", "1099230906866188379", T, Group::Channels),
    FieldDescriptor::new("VK_LIVE_CHANNEL_ID", "VK stream channel ID", "Channel for stream notifications", "1096038843655032843", T, Group::Channels),
    FieldDescriptor::new("VOICE_CHANNEL_CATEGORY_ID", "Voice channel category ID", "Category where voice channels are created", "1080068433044615238", T, Group::Channels),
    // Numeric settings
    FieldDescriptor::new("MAX_RETRIES", "Max retries", "Maximum number of retry attempts", "3", N, Group::Numbers),
    FieldDescriptor::new("PDF_CHECK_INTERVAL", "PDF check interval (sec)", "Interval between PDF update checks", "3600", N, Group::Numbers),
    FieldDescriptor::new("TELEGRAM_THREAD_ID", "Telegram thread ID", "Thread that receives Telegram messages", "183", N, Group::Numbers),
    FieldDescriptor::new("VK_CHECK_INTERVAL", "VK check interval (sec)", "Interval between VK update checks", "300", N, Group::Numbers),
    // Text settings
    FieldDescriptor::new("ACTIVITY_DATABASE_FILE_NAME", "Activity database", "File storing activity data", "activity", T, Group::Text),
    FieldDescriptor::new("BAN_DATABASE_FILE_NAME", "Ban database", "File storing ban records", "ban", T, Group::Text),
    FieldDescriptor::new("BIRTHDAYS_FILE_NAME", "Birthdays file", "File storing birthdays", "birthdays", T, Group::Text),
    FieldDescriptor::new("GREETINGS_FILE_NAME", "Greetings file", "File with greeting texts", "greetings", T, Group::Text),
    FieldDescriptor::new("LIVE_DATABASE_FILE_NAME", "Stream database", "Database tracking streams", "vk_live", T, Group::Text),
    FieldDescriptor::new("LOG_FILE_NAME", "Log file", "File the bot writes its log to", "bot", T, Group::Text),
    FieldDescriptor::new("PDF_CACHE_FILE_NAME", "PDF cache", "File caching PDF data", "pdf_cache", T, Group::Text),
    FieldDescriptor::new("PDF_MONITOR_URL", "PDF monitor URL", "URL watched for PDF documents", "https://division.inot.pro/", T, Group::Text),
    FieldDescriptor::new("SERVER_ID", "Discord server ID", "Discord server identifier", "835802952521351180", T, Group::Text),
    FieldDescriptor::new("TELEGRAM_CACHE_FILE_NAME", "Telegram cache", "File caching Telegram data", "telegram_cache", T, Group::Text),
    FieldDescriptor::new("TRELLO_CACHE_FILE_NAME", "Trello cache", "File caching Trello data", "trello_cache", T, Group::Text),
    FieldDescriptor::new("VK_GROUPS", "VK groups", "Comma-separated VK group IDs to monitor", "-114642088,-122813847", T, Group::Text),
    FieldDescriptor::new("VOICE_CHANNEL_FILE_NAME", "Protected voice channels", "File listing protected voice channels", "protected_channels_voice", T, Group::Text),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_keys_are_unique() {
        assert_eq!(canonical().duplicate_key(), None);
    }

    #[test]
    fn test_duplicate_key_detected() {
        let fields = [
            FieldDescriptor::new("A", "a", "", "1", FieldType::Number, Group::Numbers),
            FieldDescriptor::new("B", "b", "", "x", FieldType::Text, Group::Text),
            FieldDescriptor::new("A", "a again", "", "2", FieldType::Number, Group::Numbers),
        ];
        assert_eq!(Schema::new(&fields).duplicate_key(), Some("A"));
    }

    #[test]
    fn test_boolean_defaults_are_literals() {
        for field in canonical().iter().filter(|f| f.field_type == FieldType::Boolean) {
            assert!(
                field.default_value == "true" || field.default_value == "false",
                "{} has default {:?}",
                field.key,
                field.default_value
            );
        }
    }

    #[test]
    fn test_number_defaults_are_digits() {
        for field in canonical().iter().filter(|f| f.is_number()) {
            assert!(
                field.default_value.chars().all(|c| c.is_ascii_digit()),
                "{} has default {:?}",
                field.key,
                field.default_value
            );
        }
    }

    #[test]
    fn test_find_and_groups() {
        let schema = canonical();
        assert_eq!(schema.find("TIMEZONE").unwrap().group, Group::Timers);
        assert!(schema.find("NOT_A_KEY").is_none());

        let order: Vec<Group> = schema.groups().iter().map(|g| g.group).collect();
        assert_eq!(
            order,
            vec![
                Group::Boolean,
                Group::Timers,
                Group::Roles,
                Group::Channels,
                Group::Numbers,
                Group::Text
            ]
        );
        assert_eq!(schema.fields_in(Group::Numbers).count(), 4);
    }

    #[test]
    fn test_groups_skip_empty() {
        let fields = [FieldDescriptor::new("X", "x", "", "", FieldType::Text, Group::Roles)];
        let groups = Schema::new(&fields).groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].title, "Roles");
    }
}
