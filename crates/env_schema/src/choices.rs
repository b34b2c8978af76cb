// crates/env_schema/src/choices.rs

/// Fields rendered as a select instead of a free-form input, with their options.
/// Adding an enumerated field only needs a new row here.
pub static CHOICE_OVERRIDES: &[(&str, &[&str])] = &[(
    "TIMEZONE",
    &[
        "Europe/Kaliningrad",
        "Europe/Moscow",
        "Europe/Samara",
        "Asia/Yekaterinburg",
        "Asia/Omsk",
        "Asia/Novosibirsk",
        "Asia/Krasnoyarsk",
        "Asia/Irkutsk",
        "Asia/Yakutsk",
        "Asia/Vladivostok",
        "Asia/Magadan",
        "Asia/Kamchatka",
        "UTC",
    ],
)];

/// Returns the option list for `key` if it is an enumerated field.
pub fn choices_for(key: &str) -> Option<&'static [&'static str]> {
    CHOICE_OVERRIDES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, options)| *options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timezone_has_choices() {
        let options = choices_for("TIMEZONE").expect("TIMEZONE is enumerated");
        assert!(options.contains(&"Europe/Moscow"));
    }

    #[test]
    fn test_plain_field_has_no_choices() {
        assert!(choices_for("DEBUG").is_none());
    }

    #[test]
    fn test_overrides_name_real_fields() {
        let schema = crate::canonical();
        for (key, _) in CHOICE_OVERRIDES {
            assert!(schema.find(key).is_some(), "{} is not in the schema", key);
        }
    }
}
