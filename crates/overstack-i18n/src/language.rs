#![forbid(unsafe_code)]

//! Language table with explicit fallback.
//!
//! # Invariants
//!
//! 1. **Total table**: every [`Language`] provides every [`TextKey`].
//! 2. **Fallback terminates**: [`Language::resolve`] always yields a language;
//!    unknown or empty codes resolve to [`Language::default`] (`cn`).
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unknown code | `"fr"`, `""`, typos | `from_str` errors, `resolve` falls back to `cn` |
//! | Unknown key name | `TextKey::from_name("x")` | Returns `None` |

use std::fmt;
use std::str::FromStr;

/// Errors from language lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// The code does not name a built-in language.
    UnknownLanguage(String),
}

impl fmt::Display for I18nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLanguage(code) => write!(f, "unknown language code: {code:?}"),
        }
    }
}

impl std::error::Error for I18nError {}

/// Built-in overlay languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum Language {
    /// Simplified Chinese (`cn`).
    #[default]
    Cn,
    /// English (`en`).
    En,
    /// Portuguese (`pt`).
    Pt,
    /// Japanese (`jp`).
    Jp,
}

impl Language {
    /// Every built-in language.
    pub const ALL: [Self; 4] = [Self::Cn, Self::En, Self::Pt, Self::Jp];

    /// Short code used in configuration.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Cn => "cn",
            Self::En => "en",
            Self::Pt => "pt",
            Self::Jp => "jp",
        }
    }

    /// Resolve a configuration code, falling back to the default language.
    #[must_use]
    pub fn resolve(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }

    /// The full string table for this language.
    pub fn pack(self) -> &'static LanguagePack {
        match self {
            Self::Cn => &CN,
            Self::En => &EN,
            Self::Pt => &PT,
            Self::Jp => &JP,
        }
    }

    /// Look up a single string.
    #[inline]
    pub fn text(self, key: TextKey) -> &'static str {
        self.pack().get(key)
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let trimmed = code.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| I18nError::UnknownLanguage(code.to_owned()))
    }
}

impl From<&str> for Language {
    fn from(code: &str) -> Self {
        Self::resolve(code)
    }
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        Self::resolve(&code)
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.code().to_owned()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Keys of the built-in vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    TitleInfo,
    TitleWarning,
    TitleError,
    TitleSuccess,
    TitleConfirm,
    BtnOk,
    BtnCancel,
    MaskText,
}

impl TextKey {
    /// Every key, in table order.
    pub const ALL: [Self; 8] = [
        Self::TitleInfo,
        Self::TitleWarning,
        Self::TitleError,
        Self::TitleSuccess,
        Self::TitleConfirm,
        Self::BtnOk,
        Self::BtnCancel,
        Self::MaskText,
    ];

    /// Key name as used by string tables (`"titleInfo"`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::TitleInfo => "titleInfo",
            Self::TitleWarning => "titleWarning",
            Self::TitleError => "titleError",
            Self::TitleSuccess => "titleSuccess",
            Self::TitleConfirm => "titleConfirm",
            Self::BtnOk => "btnOk",
            Self::BtnCancel => "btnCancel",
            Self::MaskText => "maskText",
        }
    }

    /// Parse a key name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }
}

/// Strings for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguagePack {
    pub title_info: &'static str,
    pub title_warning: &'static str,
    pub title_error: &'static str,
    pub title_success: &'static str,
    pub title_confirm: &'static str,
    pub btn_ok: &'static str,
    pub btn_cancel: &'static str,
    pub mask_text: &'static str,
}

impl LanguagePack {
    /// Look up a string by key.
    pub const fn get(&self, key: TextKey) -> &'static str {
        match key {
            TextKey::TitleInfo => self.title_info,
            TextKey::TitleWarning => self.title_warning,
            TextKey::TitleError => self.title_error,
            TextKey::TitleSuccess => self.title_success,
            TextKey::TitleConfirm => self.title_confirm,
            TextKey::BtnOk => self.btn_ok,
            TextKey::BtnCancel => self.btn_cancel,
            TextKey::MaskText => self.mask_text,
        }
    }
}

static CN: LanguagePack = LanguagePack {
    title_info: "提示",
    title_warning: "警告",
    title_error: "错误",
    title_success: "成功",
    title_confirm: "确认",
    btn_ok: "确认",
    btn_cancel: "取消",
    mask_text: "数据加载中……",
};

static EN: LanguagePack = LanguagePack {
    title_info: "Information",
    title_warning: "Warning",
    title_error: "Error",
    title_success: "Success",
    title_confirm: "Confirmation",
    btn_ok: "OK",
    btn_cancel: "Cancel",
    mask_text: "Loading……",
};

static PT: LanguagePack = LanguagePack {
    title_info: "Aviso",
    title_warning: "Alerta",
    title_error: "Erro",
    title_success: "Sucesso",
    title_confirm: "Confirmação",
    btn_ok: "OK",
    btn_cancel: "Cancelar",
    mask_text: "Carregando……",
};

static JP: LanguagePack = LanguagePack {
    title_info: "ヒント",
    title_warning: "警告",
    title_error: "エラー",
    title_success: "成功",
    title_confirm: "確認",
    btn_ok: "確認",
    btn_cancel: "キャンセル",
    mask_text: "データロード……",
};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_language_is_cn() {
        assert_eq!(Language::default(), Language::Cn);
        assert_eq!(Language::default().text(TextKey::BtnCancel), "取消");
    }

    #[test]
    fn parses_known_codes() {
        assert_eq!("en".parse::<Language>(), Ok(Language::En));
        assert_eq!(" PT ".parse::<Language>(), Ok(Language::Pt));
        assert_eq!("jp".parse::<Language>(), Ok(Language::Jp));
    }

    #[test]
    fn unknown_code_is_an_error_but_resolves_to_default() {
        let err = "fr".parse::<Language>().unwrap_err();
        assert_eq!(err, I18nError::UnknownLanguage("fr".into()));
        assert_eq!(err.to_string(), "unknown language code: \"fr\"");
        assert_eq!(Language::resolve("fr"), Language::Cn);
        assert_eq!(Language::resolve(""), Language::Cn);
    }

    #[test]
    fn english_table() {
        let en = Language::En;
        assert_eq!(en.text(TextKey::TitleInfo), "Information");
        assert_eq!(en.text(TextKey::TitleConfirm), "Confirmation");
        assert_eq!(en.text(TextKey::BtnOk), "OK");
        assert_eq!(en.text(TextKey::MaskText), "Loading……");
    }

    #[test]
    fn every_language_provides_every_key() {
        for lang in Language::ALL {
            for key in TextKey::ALL {
                assert!(!lang.text(key).is_empty(), "{lang} is missing {}", key.name());
            }
        }
    }

    #[test]
    fn key_names_round_trip() {
        for key in TextKey::ALL {
            assert_eq!(TextKey::from_name(key.name()), Some(key));
        }
        assert_eq!(TextKey::from_name("titleUnknown"), None);
    }

    #[test]
    fn converts_from_strings_with_fallback() {
        assert_eq!(Language::from("jp"), Language::Jp);
        assert_eq!(Language::from(String::from("xx")), Language::Cn);
        assert_eq!(String::from(Language::Pt), "pt");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_codes_and_falls_back_to_cn() {
        let json = serde_json::to_string(&Language::En).expect("serialize");
        assert_eq!(json, "\"en\"");
        let back: Language = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Language::En);
        let unknown: Language = serde_json::from_str("\"fr\"").expect("deserialize");
        assert_eq!(unknown, Language::Cn);
        let shouted: Language = serde_json::from_str("\"JP\"").expect("deserialize");
        assert_eq!(shouted, Language::Jp);
    }

    proptest! {
        #[test]
        fn resolve_never_fails(code in ".{0,8}") {
            let lang = Language::resolve(&code);
            prop_assert!(Language::ALL.contains(&lang));
        }
    }
}
