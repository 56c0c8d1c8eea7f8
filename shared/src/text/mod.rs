pub mod color;
mod component;
mod legacy;

use color::TextColor;

/// Formatting applied to one run of text
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct TextStyle {
    pub color: Option<TextColor>,
    pub bold: bool,
    pub italic: bool,
    pub underlined: bool,
    pub strikethrough: bool,
    pub obfuscated: bool,
}

impl TextStyle {
    pub fn colored(color: TextColor) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    /// This style with any RGB color replaced by its nearest legacy color
    pub fn downgraded(&self) -> Self {
        Self {
            color: self
                .color
                .map(|color| TextColor::Named(color.to_named())),
            ..*self
        }
    }
}

/// A run of text sharing one style
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextSpan {
    pub content: String,
    pub style: TextStyle,
}

impl TextSpan {
    pub fn new(content: impl Into<String>, style: TextStyle) -> Self {
        Self {
            content: content.into(),
            style,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, TextStyle::default())
    }
}

/// Rich text for a floating line. Revisions that cannot show every feature
/// get a downgraded rendering, never an error.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Text {
    spans: Vec<TextSpan>,
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(content: impl Into<String>) -> Self {
        let mut text = Self::new();
        text.push(TextSpan::plain(content));
        text
    }

    /// Parse a string using `§` formatting codes
    pub fn from_legacy(input: &str) -> Self {
        legacy::parse(input)
    }

    /// Appends a span, merging it into the last one when the styles match.
    /// Empty spans are dropped.
    pub fn push(&mut self, span: TextSpan) -> &mut Self {
        if span.content.is_empty() {
            return self;
        }
        if let Some(last) = self.spans.last_mut() {
            if last.style == span.style {
                last.content.push_str(&span.content);
                return self;
            }
        }
        self.spans.push(span);
        self
    }

    pub fn spans(&self) -> &[TextSpan] {
        &self.spans
    }

    /// True if nothing would be displayed
    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|span| span.content.is_empty())
    }

    /// The text with all styling removed
    pub fn to_plain_string(&self) -> String {
        self.spans.iter().map(|span| span.content.as_str()).collect()
    }

    /// Rendering for revisions whose names are plain strings
    pub fn to_legacy_string(&self) -> String {
        legacy::render(self)
    }

    /// Rendering for revisions whose names are JSON chat components
    pub fn to_json(&self) -> String {
        component::render(self)
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text::from_legacy(value)
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Text::from_legacy(&value)
    }
}
