// crates/env_serializer/src/tables.rs

/// Fixed lookup tables applied while writing the file.
#[derive(Clone, Copy, Debug)]
pub struct Tables<'a> {
    /// Emitted first, always with an empty value. Filled in by hand after saving.
    pub secrets: &'a [&'a str],
    /// Emitted after the secrets, always `"true"`.
    pub capability_flags: &'a [&'a str],
    /// Extension appended to the value of file-name keys.
    pub suffixes: &'a [(&'a str, &'a str)],
}

impl<'a> Tables<'a> {
    pub fn suffix_for(&self, key: &str) -> Option<&'a str> {
        self.suffixes
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, suffix)| *suffix)
    }
}

pub const SECRETS: &[&str] = &["DISCORD_BOT_TOKEN", "TELEGRAM_BOT_TOKEN", "VK_TOKEN"];

pub const CAPABILITY_FLAGS: &[&str] = &["ENABLE_DISCORD_MODULE", "ENABLE_VK_MODULE"];

pub const SUFFIXES: &[(&str, &str)] = &[
    ("ACTIVITY_DATABASE_FILE_NAME", ".db"),
    ("BAN_DATABASE_FILE_NAME", ".db"),
    ("BIRTHDAYS_FILE_NAME", ".json"),
    ("GREETINGS_FILE_NAME", ".json"),
    ("LIVE_DATABASE_FILE_NAME", ".db"),
    ("LOG_FILE_NAME", ".log"),
    ("PDF_CACHE_FILE_NAME", ".json"),
    ("TELEGRAM_CACHE_FILE_NAME", ".json"),
    ("TRELLO_CACHE_FILE_NAME", ".json"),
    ("VOICE_CHANNEL_FILE_NAME", ".json"),
];

/// Tables used for the bot's `.env` file.
pub const DEFAULT_TABLES: Tables<'static> = Tables {
    secrets: SECRETS,
    capability_flags: CAPABILITY_FLAGS,
    suffixes: SUFFIXES,
};
