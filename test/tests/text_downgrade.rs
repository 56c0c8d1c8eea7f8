//! Rich text is rendered in whatever form the bound revision understands.
//! Nothing a revision cannot show is ever an error.

use holo_shared::{
    ByteReader, EntityId, NamedColor, PacketBuilder, PacketFactory, Revision, Serde, Text,
    TextColor, TextSpan, TextStyle, VarInt,
};

fn contains(haystack: &[u8], needle: &str) -> bool {
    haystack
        .windows(needle.len())
        .any(|window| window == needle.as_bytes())
}

fn rgb_text() -> Text {
    let mut text = Text::new();
    text.push(TextSpan::new("Sunset ", TextStyle::colored(TextColor::Rgb(0xFF, 0x55, 0x50))))
        .push(TextSpan::new(
            "sky",
            TextStyle {
                color: Some(TextColor::Rgb(0x10, 0x20, 0xC0)),
                bold: true,
                ..TextStyle::default()
            },
        ));
    text
}

#[test]
fn rgb_downgrades_to_nearest_legacy_color() {
    assert_eq!(rgb_text().to_legacy_string(), "§cSunset §1§lsky");

    for revision in [Revision::V1_8_R3, Revision::V1_12_R1] {
        let packet = PacketFactory::new(revision).build_name_update(EntityId::new(1), &rgb_text());
        assert!(contains(&packet, "§cSunset §1§lsky"), "{} lost the text", revision);
        assert!(!contains(&packet, "#"), "{} leaked a hex color", revision);
    }
}

#[test]
fn rgb_survives_on_rich_text_revisions() {
    assert!(Revision::V1_16_R3.supports_rich_text());

    let packet =
        PacketFactory::new(Revision::V1_16_R3).build_name_update(EntityId::new(1), &rgb_text());
    assert!(contains(&packet, r##"{"text":"Sunset ","color":"#ff5550"}"##));
    assert!(contains(&packet, r##"{"text":"sky","color":"#1020c0","bold":true}"##));
}

#[test]
fn spigot_hex_codes_are_parsed() {
    let text = Text::from("§x§f§f§5§5§5§5Almost red");

    assert_eq!(text.spans().len(), 1);
    assert_eq!(
        text.spans()[0].style.color,
        Some(TextColor::Rgb(0xFF, 0x55, 0x55))
    );
    assert_eq!(text.to_legacy_string(), "§cAlmost red");
    assert_eq!(
        TextColor::Rgb(0xFF, 0x55, 0x55).to_named(),
        NamedColor::Red
    );
}

#[test]
fn legacy_codes_round_trip() {
    for input in ["§aGreen §lbold§r plain", "§6§oGold italic", "no codes at all"] {
        assert_eq!(Text::from(input).to_legacy_string(), input);
    }
}

#[test]
fn unicode_length_prefix_counts_bytes() {
    let text = Text::plain("héllo ✓");
    let packet = PacketFactory::new(Revision::V1_12_R1).build_name_update(EntityId::new(1), &text);

    let mut reader = ByteReader::new(&packet);
    VarInt::de(&mut reader).unwrap();
    VarInt::de(&mut reader).unwrap();
    reader.read_bytes(3).unwrap();
    reader.read_bytes(2).unwrap();
    let length = VarInt::de(&mut reader).unwrap().0;

    assert_eq!(length as usize, "héllo ✓".len());
    assert_eq!(String::de(&mut ByteReader::new(&packet[reader.offset() - 1..])).unwrap(), "héllo ✓");
}
