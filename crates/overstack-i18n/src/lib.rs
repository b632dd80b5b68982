#![forbid(unsafe_code)]

//! Built-in overlay text for overstack.
//!
//! Overlays carry a small fixed vocabulary (dialog titles, button labels,
//! loading text) in four languages. Lookups by an unknown language code fall
//! back to [`Language::default`] instead of failing.

pub mod language;

pub use language::{I18nError, Language, LanguagePack, TextKey};
