//! Label tables for the two supported languages.

use std::fmt::Display;

use serde::Deserialize;

/// Which fixed string table is used for day labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum Locale {
    En,
    #[default]
    Cn,
}

/// Keys into a locale's label table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Today,
    Yesterday,
}

impl Locale {
    /// Resolve a locale code. Unknown codes fall back to the default locale
    /// so configuration never fails on this field.
    pub fn from_code(code: &str) -> Locale {
        match code.trim().to_lowercase().as_str() {
            "en" | "en-us" | "english" => Locale::En,
            "cn" | "zh" | "zh-cn" | "chinese" => Locale::Cn,
            other => {
                log::warn!(
                    "Unknown locale {:?}, falling back to {}",
                    other,
                    Locale::default()
                );
                Locale::default()
            }
        }
    }

    /// Resolve a locale by its table position (`0` English, `1` Chinese).
    pub fn from_index(index: usize) -> Locale {
        match index {
            0 => Locale::En,
            1 => Locale::Cn,
            _ => Locale::default(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Cn => "cn",
        }
    }

    pub fn label(&self, label: Label) -> &'static str {
        match (self, label) {
            (Locale::En, Label::Today) => "Today",
            (Locale::En, Label::Yesterday) => "Yesterday",
            (Locale::Cn, Label::Today) => "今天",
            (Locale::Cn, Label::Yesterday) => "昨天",
        }
    }
}

impl From<String> for Locale {
    fn from(value: String) -> Self {
        Locale::from_code(&value)
    }
}

impl From<&str> for Locale {
    fn from(value: &str) -> Self {
        Locale::from_code(value)
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
