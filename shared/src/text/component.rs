use log::warn;
use serde::Serialize;

use crate::{Text, TextSpan};

const EMPTY_COMPONENT: &str = r#"{"text":""}"#;

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Serialize)]
struct ChatComponent<'t> {
    text: &'t str,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    bold: bool,
    #[serde(skip_serializing_if = "is_false")]
    italic: bool,
    #[serde(skip_serializing_if = "is_false")]
    underlined: bool,
    #[serde(skip_serializing_if = "is_false")]
    strikethrough: bool,
    #[serde(skip_serializing_if = "is_false")]
    obfuscated: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    extra: Vec<ChatComponent<'t>>,
}

impl<'t> ChatComponent<'t> {
    fn empty() -> Self {
        Self {
            text: "",
            color: None,
            bold: false,
            italic: false,
            underlined: false,
            strikethrough: false,
            obfuscated: false,
            extra: Vec::new(),
        }
    }

    fn from_span(span: &'t TextSpan) -> Self {
        Self {
            text: &span.content,
            color: span.style.color.map(|color| color.to_string()),
            bold: span.style.bold,
            italic: span.style.italic,
            underlined: span.style.underlined,
            strikethrough: span.style.strikethrough,
            obfuscated: span.style.obfuscated,
            extra: Vec::new(),
        }
    }
}

pub(crate) fn render(text: &Text) -> String {
    let component = match text.spans() {
        [] => ChatComponent::empty(),
        [single] => ChatComponent::from_span(single),
        spans => {
            let mut root = ChatComponent::empty();
            root.extra = spans.iter().map(ChatComponent::from_span).collect();
            root
        }
    };

    serde_json::to_string(&component).unwrap_or_else(|error| {
        warn!("failed to serialize chat component: {}", error);
        EMPTY_COMPONENT.to_string()
    })
}
