//! Byte-exact packets for every factory operation on every supported revision.
//!
//! All fixtures describe entity 300 at (1.5, 64.0, -2.25) with the UUID
//! 01234567-89ab-cdef-0123-456789abcdef.

use holo_shared::{
    CarrierId, EntityId, ItemAppearance, PacketBuilder, PacketFactory, PhantomKind, Position,
    Revision, Text,
};
use holo_test::load_fixture;
use uuid::Uuid;

const ENTITY: i32 = 300;
const CARRIER: i32 = 299;

fn uuid() -> Uuid {
    Uuid::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef)
}

fn position(kind: PhantomKind) -> Position {
    Position::for_kind(kind, 1.5, 64.0, -2.25)
}

fn fixture_name(revision: Revision, operation: &str) -> String {
    format!("{}/{}", revision.nms_token().to_lowercase(), operation)
}

fn assert_matches_fixture(revision: Revision, operation: &str, packet: Vec<u8>) {
    let expected = load_fixture(&fixture_name(revision, operation));
    assert_eq!(
        packet, expected,
        "{} {} does not match its fixture",
        revision, operation
    );
}

#[test]
fn spawn() {
    for revision in Revision::ALL {
        let factory = PacketFactory::new(revision);
        let id = EntityId::new(ENTITY);

        let text = factory.build_spawn(id, &uuid(), PhantomKind::Text, &position(PhantomKind::Text));
        assert_matches_fixture(revision, "spawn_text", text);

        let item = factory.build_spawn(id, &uuid(), PhantomKind::Item, &position(PhantomKind::Item));
        assert_matches_fixture(revision, "spawn_item", item);
    }
}

#[test]
fn destroy() {
    for revision in Revision::ALL {
        let packet = PacketFactory::new(revision).build_destroy(EntityId::new(ENTITY));
        assert_matches_fixture(revision, "destroy", packet);
    }
}

#[test]
fn teleport() {
    for revision in Revision::ALL {
        let packet = PacketFactory::new(revision)
            .build_teleport(EntityId::new(ENTITY), &position(PhantomKind::Text));
        assert_matches_fixture(revision, "teleport", packet);
    }
}

#[test]
fn name_update() {
    for revision in Revision::ALL {
        let factory = PacketFactory::new(revision);
        let id = EntityId::new(ENTITY);

        let named = factory.build_name_update(id, &Text::from("§aHello"));
        assert_matches_fixture(revision, "name_update", named);

        let empty = factory.build_name_update(id, &Text::new());
        assert_matches_fixture(revision, "name_update_empty", empty);
    }
}

#[test]
fn item_update() {
    for revision in Revision::ALL {
        let packet = PacketFactory::new(revision)
            .build_item_update(EntityId::new(ENTITY), &ItemAppearance::new(264));
        assert_matches_fixture(revision, "item_update", packet);
    }
}

#[test]
fn mount() {
    for revision in Revision::ALL {
        let packet = PacketFactory::new(revision)
            .build_mount(EntityId::new(ENTITY), CarrierId::new(CARRIER).into());
        assert_matches_fixture(revision, "mount", packet);
    }
}

#[test]
fn fixed_point_floors_negative_coordinates() {
    let packet = PacketFactory::new(Revision::V1_8_R3).build_teleport(
        EntityId::new(1),
        &Position::for_kind(PhantomKind::Item, -0.01, 0.0, 0.0),
    );

    // -0.01 * 32 = -0.32, floored to -1
    assert_eq!(&packet[2..6], &[0xFF, 0xFF, 0xFF, 0xFF]);
}
