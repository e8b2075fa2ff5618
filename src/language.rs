use clap::ValueEnum;

use crate::page_context::PageContext;

/// Local-storage key the site uses for the language preference.
pub const LANGUAGE_KEY: &str = "language";

/// The two site languages. Arabic is the site default and drives the
/// default collation of the title sort.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Ar,
    Fr,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::Fr => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "ar" => Some(Language::Ar),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }

    /// The persisted preference, or the site default when nothing valid
    /// was stored.
    pub fn load(ctx: &dyn PageContext) -> Language {
        ctx.read(LANGUAGE_KEY)
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default()
    }

    pub fn store(&self, ctx: &mut dyn PageContext) {
        ctx.write(LANGUAGE_KEY, self.code());
    }
}
