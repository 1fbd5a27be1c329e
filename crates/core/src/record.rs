//! Typed references to records, used for links embedded in audit messages.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A reference to a stored record: model name, identifier and display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordRef {
    pub model: Cow<'static, str>,
    pub id: Uuid,
    pub display_name: String,
}

impl RecordRef {
    pub fn new(
        model: impl Into<Cow<'static, str>>,
        id: impl Into<Uuid>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            id: id.into(),
            display_name: display_name.into(),
        }
    }

    /// Render the reference as an HTML anchor understood by the chatter UI.
    pub fn to_html_link(&self) -> String {
        format!(
            r##"<a href="#" data-oe-model="{}" data-oe-id="{}">{}</a>"##,
            self.model,
            self.id,
            escape_html(&self.display_name)
        )
    }
}

impl core::fmt::Display for RecordRef {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}({})", self.model, self.id)
    }
}

/// Escape text for inclusion in an HTML message body.
pub fn escape_html(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(raw);
    }
    let mut out = String::with_capacity(raw.len() + 8);
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}
