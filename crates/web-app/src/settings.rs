#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Show success and info notifications. Validation errors are always shown.
    pub notifications: bool,
    /// Show the routine list when the page is loaded.
    pub show_routines: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notifications: true,
            show_routines: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::empty("{}", Settings::default())]
    #[case::partial(
        r#"{"show_routines": true}"#,
        Settings { notifications: true, show_routines: true }
    )]
    #[case::complete(
        r#"{"notifications": false, "show_routines": false}"#,
        Settings { notifications: false, show_routines: false }
    )]
    fn test_settings_deserialize(#[case] json: &str, #[case] expected: Settings) {
        assert_eq!(serde_json::from_str::<Settings>(json).unwrap(), expected);
    }
}
