use crate::{NamedColor, Text, TextColor, TextSpan, TextStyle};

const SECTION: char = '§';

pub(crate) fn parse(input: &str) -> Text {
    let mut text = Text::new();
    let mut style = TextStyle::default();
    let mut content = String::new();

    let chars: Vec<char> = input.chars().collect();
    let mut index = 0;

    while index < chars.len() {
        let current = chars[index];
        if current != SECTION || index + 1 >= chars.len() {
            content.push(current);
            index += 1;
            continue;
        }

        let code = chars[index + 1].to_ascii_lowercase();

        if let Some(color) = NamedColor::from_code(code) {
            flush(&mut text, &mut content, style);
            style = TextStyle::colored(TextColor::Named(color));
            index += 2;
            continue;
        }

        if code == 'x' {
            if let Some(color) = parse_hex(&chars[index + 2..]) {
                flush(&mut text, &mut content, style);
                style = TextStyle::colored(color);
                index += 14;
                continue;
            }
        }

        let mut next_style = style;
        match code {
            'k' => next_style.obfuscated = true,
            'l' => next_style.bold = true,
            'm' => next_style.strikethrough = true,
            'n' => next_style.underlined = true,
            'o' => next_style.italic = true,
            'r' => next_style = TextStyle::default(),
            _ => {
                // not a formatting code, keep it verbatim
                content.push(current);
                index += 1;
                continue;
            }
        }
        flush(&mut text, &mut content, style);
        style = next_style;
        index += 2;
    }

    flush(&mut text, &mut content, style);
    text
}

// `§x§r§r§g§g§b§b`, with `rest` starting just after the `§x`
fn parse_hex(rest: &[char]) -> Option<TextColor> {
    if rest.len() < 12 {
        return None;
    }
    let mut digits = String::with_capacity(6);
    for pair in rest[..12].chunks(2) {
        if pair[0] != SECTION || !pair[1].is_ascii_hexdigit() {
            return None;
        }
        digits.push(pair[1]);
    }
    let value = u32::from_str_radix(&digits, 16).ok()?;
    Some(TextColor::Rgb(
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    ))
}

fn flush(text: &mut Text, content: &mut String, style: TextStyle) {
    if content.is_empty() {
        return;
    }
    text.push(TextSpan::new(std::mem::take(content), style));
}

pub(crate) fn render(text: &Text) -> String {
    let mut output = String::new();
    let mut current = TextStyle::default();

    for span in text.spans() {
        let style = span.style.downgraded();
        if style != current {
            // formats can be appended, anything else needs a color code or reset first
            let additive = style.color == current.color
                && formats(&current)
                    .iter()
                    .zip(formats(&style).iter())
                    .all(|((was, _), (is, _))| !*was || *is);
            if !additive {
                output.push(SECTION);
                match style.color {
                    Some(color) => output.push(color.to_named().code()),
                    None => output.push('r'),
                }
            }
            for ((was, _), (enabled, code)) in formats(&current).iter().zip(formats(&style).iter()) {
                if *enabled && !(additive && *was) {
                    output.push(SECTION);
                    output.push(*code);
                }
            }
            current = style;
        }
        output.push_str(&span.content);
    }

    output
}

fn formats(style: &TextStyle) -> [(bool, char); 5] {
    [
        (style.obfuscated, 'k'),
        (style.bold, 'l'),
        (style.strikethrough, 'm'),
        (style.underlined, 'n'),
        (style.italic, 'o'),
    ]
}
