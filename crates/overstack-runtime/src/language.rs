#![forbid(unsafe_code)]

//! Language used by overlays that do not pick one explicitly.
//!
//! Unconfigured overlays read [`LanguageContext::current_language`] once, at
//! construction. The context defaults to [`DEFAULT_OVERLAY_LANGUAGE`]
//! (`en`); this is separate from the table fallback for unknown codes
//! (`cn`, see `Language::resolve`).
//!
//! # Invariants
//!
//! - Overrides nest LIFO; the innermost live override wins.
//! - Dropping an [`LanguageOverride`] restores what was active before it.

use std::cell::RefCell;
use std::rc::Rc;

use overstack_i18n::Language;

/// Language of overlays created without an explicit `language` option.
pub const DEFAULT_OVERLAY_LANGUAGE: Language = Language::En;

/// Base language plus a stack of scoped overrides. Clones share state.
#[derive(Clone, Debug)]
pub struct LanguageContext {
    base: Language,
    overrides: Rc<RefCell<Vec<Language>>>,
}

impl Default for LanguageContext {
    fn default() -> Self {
        Self::new(DEFAULT_OVERLAY_LANGUAGE)
    }
}

impl LanguageContext {
    #[must_use]
    pub fn new(base: Language) -> Self {
        Self {
            base,
            overrides: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Active language, honoring the innermost override.
    #[must_use]
    pub fn current_language(&self) -> Language {
        self.overrides.borrow().last().copied().unwrap_or(self.base)
    }

    /// Override the language until the returned guard drops.
    #[must_use = "dropping this guard clears the language override"]
    pub fn push_override(&self, language: Language) -> LanguageOverride {
        self.overrides.borrow_mut().push(language);
        LanguageOverride {
            overrides: Rc::clone(&self.overrides),
        }
    }
}

/// Scoped language override.
#[must_use = "dropping this guard clears the language override"]
#[derive(Debug)]
pub struct LanguageOverride {
    overrides: Rc<RefCell<Vec<Language>>>,
}

impl Drop for LanguageOverride {
    fn drop(&mut self) {
        self.overrides.borrow_mut().pop();
    }
}
