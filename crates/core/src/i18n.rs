//! Message translation seam.

use std::borrow::Cow;

/// Translates source message templates into a target language.
///
/// Implementations return the source text unchanged when they have no entry.
pub trait Translator: Send + Sync {
    fn translate<'a>(&'a self, lang: &str, source: &'a str) -> Cow<'a, str>;
}

/// Translator that always returns the source text.
#[derive(Debug, Default, Clone, Copy)]
pub struct Untranslated;

impl Translator for Untranslated {
    fn translate<'a>(&'a self, _lang: &str, source: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(source)
    }
}

/// Substitute `{name}` placeholders in a (translated) template.
///
/// Unknown placeholders are left as-is so a bad translation stays visible.
pub fn render(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}
