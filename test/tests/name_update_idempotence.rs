use holo_shared::{Position, Revision, Text};
use holo_test::{assert_no_packets, assert_packet_kinds, test_server, TestHost};

#[test]
fn same_text_twice_sends_one_packet() {
    for revision in Revision::ALL {
        let (mut server, log) = test_server(revision);
        let mut host = TestHost::new();
        let alice = host.place_observer(1, 0.0, 64.0, 0.0);

        let id = server
            .spawn_text_entity(&mut host, Position::new(0.0, 64.0, 0.0))
            .id();
        server.tick(&host);
        log.take();

        server.entity_mut(&id).set_text("Hello");
        server.entity_mut(&id).set_text("Hello");
        server.entity_mut(&id).set_text(Text::from("Hello"));

        assert_packet_kinds!(log, alice, [Metadata]);
    }
}

#[test]
fn formatting_counts_as_a_change() {
    let (mut server, log) = test_server(Revision::V1_16_R3);
    let mut host = TestHost::new();
    let alice = host.place_observer(1, 0.0, 64.0, 0.0);

    let id = server
        .spawn_text_entity(&mut host, Position::new(0.0, 64.0, 0.0))
        .set_text("Hello")
        .id();
    server.tick(&host);
    log.take();

    server.entity_mut(&id).set_text("§cHello");
    assert_packet_kinds!(log, alice, [Metadata]);
}

#[test]
fn updates_reach_only_visible_observers() {
    let (mut server, log) = test_server(Revision::V1_8_R3);
    let mut host = TestHost::new();
    let near = host.place_observer(1, 0.0, 64.0, 0.0);
    let far = host.place_observer(2, 0.0, 64.0, 200.0);

    let id = server
        .spawn_text_entity(&mut host, Position::new(0.0, 64.0, 0.0))
        .id();
    server.tick(&host);
    log.take();

    server.entity_mut(&id).set_text("Only for near");
    server.entity_mut(&id).move_to(Position::new(0.0, 65.0, 0.0));

    assert_packet_kinds!(log, near, [Metadata, Teleport]);
    assert_no_packets!(log, far);
}

#[test]
fn moving_to_the_same_spot_sends_nothing() {
    let (mut server, log) = test_server(Revision::V1_12_R1);
    let mut host = TestHost::new();
    let alice = host.place_observer(1, 0.0, 64.0, 0.0);

    let id = server
        .spawn_text_entity(&mut host, Position::new(0.0, 64.0, 0.0))
        .id();
    server.tick(&host);
    log.take();

    server.entity_mut(&id).move_to(Position::new(0.0, 64.0, 0.0));
    assert_no_packets!(log, alice);
}
