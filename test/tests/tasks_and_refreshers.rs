use std::{cell::Cell, rc::Rc, thread};

use holo_server::{RefreshError, ServerConfig, Task};
use holo_shared::{ItemAppearance, PacketBuilder, PacketFactory, Position, Revision, Text};
use holo_test::{
    assert_no_packets, assert_packet_kinds, test_server, test_server_with_config, PacketKind, TestHost,
};

#[test]
fn background_tasks_apply_on_next_tick() {
    let (mut server, log) = test_server(Revision::V1_12_R1);
    let mut host = TestHost::new();
    let alice = host.place_observer(1, 0.0, 64.0, 0.0);
    let id = server
        .spawn_text_entity(&mut host, Position::new(0.0, 64.0, 0.0))
        .id();
    server.tick(&host);
    log.take();

    let sender = server.task_queue_sender();
    thread::spawn(move || {
        sender.set_text(id, "from a worker").unwrap();
        sender
            .send(Task::MoveTo {
                entity: id,
                position: Position::new(0.0, 70.0, 0.0),
            })
            .unwrap();
    })
    .join()
    .unwrap();

    assert!(log.is_empty());
    assert_eq!(server.entity(&id).text(), &Text::new());

    server.tick(&host);
    assert_packet_kinds!(log, alice, [Metadata, Teleport]);
    assert_eq!(server.entity(&id).text(), &Text::from("from a worker"));
}

#[test]
fn tasks_for_destroyed_entities_are_dropped() {
    let (mut server, log) = test_server(Revision::V1_8_R3);
    let mut host = TestHost::new();
    let alice = host.place_observer(1, 0.0, 64.0, 0.0);
    let id = server
        .spawn_item_entity(&mut host, Position::new(0.0, 64.0, 0.0), ItemAppearance::new(1))
        .id();
    let sender = server.task_queue_sender();
    server.tick(&host);
    log.take();

    sender
        .send(Task::SetAppearance {
            entity: id,
            appearance: ItemAppearance::new(2),
        })
        .unwrap();
    sender.send(Task::Destroy { entity: id }).unwrap();
    sender.set_text(id, "gone").unwrap();
    server.tick(&host);

    assert_packet_kinds!(log, alice, [Metadata, Destroy]);
    assert!(!server.has_entity(&id));
}

#[test]
fn refreshers_run_on_their_period() {
    let config = ServerConfig {
        text_refresh_period: 3,
        ..ServerConfig::default()
    };
    let (mut server, log) = test_server_with_config(Revision::V1_16_R3, config);
    let mut host = TestHost::new();
    let alice = host.place_observer(1, 0.0, 64.0, 0.0);
    let runs = Rc::new(Cell::new(0));

    let counter = runs.clone();
    server
        .spawn_text_entity(&mut host, Position::new(0.0, 64.0, 0.0))
        .set_text_refresher(move || {
            counter.set(counter.get() + 1);
            Ok(Text::plain(format!("players online: {}", counter.get())))
        });

    for _ in 0..9 {
        server.tick(&host);
    }

    assert_eq!(runs.get(), 3);
    assert_packet_kinds!(log, alice, [Spawn, Metadata, Metadata, Metadata, Metadata]);
}

#[test]
fn failing_refresher_does_not_affect_siblings() {
    let (mut server, log) = test_server(Revision::V1_8_R3);
    let mut host = TestHost::new();
    let alice = host.place_observer(1, 0.0, 64.0, 0.0);

    let broken = server
        .spawn_text_entity(&mut host, Position::new(0.0, 64.0, 0.0))
        .set_text("stale")
        .set_text_refresher(|| Err(RefreshError::from("placeholder service offline")))
        .id();
    let panicking = server
        .spawn_text_entity(&mut host, Position::new(0.0, 65.0, 0.0))
        .set_text("stale")
        .set_text_refresher(|| panic!("placeholder bug"))
        .id();
    let healthy = server
        .spawn_text_entity(&mut host, Position::new(0.0, 66.0, 0.0))
        .set_text("stale")
        .set_text_refresher(|| Ok(Text::from("fresh")))
        .id();

    server.tick(&host);
    log.take();
    server.tick(&host);

    assert_eq!(server.entity(&broken).text(), &Text::from("stale"));
    assert_eq!(server.entity(&panicking).text(), &Text::from("stale"));
    assert_eq!(server.entity(&healthy).text(), &Text::from("fresh"));
    assert!(log.kinds_for_entity(&alice, &broken).is_empty());
    assert!(log.kinds_for_entity(&alice, &panicking).is_empty());
    assert_eq!(log.kinds_for_entity(&alice, &healthy), vec![PacketKind::Metadata]);
}

#[test]
fn refresher_needs_a_text_holder() {
    let (mut server, log) = test_server(Revision::V1_12_R1);
    let mut host = TestHost::new();
    let alice = host.place_observer(1, 0.0, 64.0, 0.0);
    let runs = Rc::new(Cell::new(0));

    let counter = runs.clone();
    let id = server
        .spawn_item_entity(&mut host, Position::new(0.0, 64.0, 0.0), ItemAppearance::new(1))
        .id();
    let error = server
        .entity_mut(&id)
        .try_set_text_refresher(move || {
            counter.set(counter.get() + 1);
            Ok(Text::from("never"))
        })
        .unwrap_err();
    assert!(error.to_string().contains("set_text_refresher"));

    for _ in 0..6 {
        server.tick(&host);
    }
    assert_eq!(runs.get(), 0);
    assert_packet_kinds!(log, alice, [Spawn, Metadata]);
}

#[test]
#[should_panic(expected = "set_text_refresher")]
fn refresher_on_item_holder_is_loud() {
    let (mut server, _log) = test_server(Revision::V1_8_R3);
    let mut host = TestHost::new();

    server
        .spawn_item_entity(&mut host, Position::new(0.0, 64.0, 0.0), ItemAppearance::new(1))
        .set_text_refresher(|| Ok(Text::from("never")));
}

#[test]
fn tick_lock_batches_changes() {
    let (mut server, log) = test_server(Revision::V1_12_R1);
    let mut host = TestHost::new();
    let alice = host.place_observer(1, 0.0, 64.0, 0.0);
    let id = server
        .spawn_text_entity(&mut host, Position::new(0.0, 64.0, 0.0))
        .id();
    server.tick(&host);
    log.take();

    server
        .entity_mut(&id)
        .set_tick_locked(true)
        .set_text("one")
        .set_text("two")
        .move_to(Position::new(0.0, 66.0, 0.0));
    assert!(server.entity(&id).is_tick_locked());
    server.tick(&host);
    assert_no_packets!(log, alice);

    server.entity_mut(&id).set_tick_locked(false);
    assert_packet_kinds!(log, alice, [Teleport, Metadata]);
    assert_eq!(server.entity(&id).text(), &Text::from("two"));
}

#[test]
fn destroy_clears_the_lock() {
    let (mut server, log) = test_server(Revision::V1_8_R3);
    let mut host = TestHost::new();
    let alice = host.place_observer(1, 0.0, 64.0, 0.0);
    let id = server
        .spawn_text_entity(&mut host, Position::new(0.0, 64.0, 0.0))
        .id();
    server.tick(&host);
    log.take();

    let mut entity = server.entity_mut(&id);
    entity.set_tick_locked(true).set_text("never shown");
    entity.destroy();

    assert_packet_kinds!(log, alice, [Destroy]);
}

#[test]
fn observer_arriving_during_lock_gets_the_whole_batch() {
    let (mut server, log) = test_server(Revision::V1_12_R1);
    let mut host = TestHost::new();
    let alice = host.place_observer(1, 0.0, 64.0, 0.0);
    let id = server
        .spawn_text_entity(&mut host, Position::new(0.0, 64.0, 0.0))
        .set_text("Old")
        .id();
    server.tick(&host);
    log.take();

    server
        .entity_mut(&id)
        .set_tick_locked(true)
        .set_text("New")
        .move_to(Position::new(0.0, 65.0, 0.0));
    let bob = host.place_observer(2, 0.0, 64.0, 5.0);
    server.tick(&host);
    assert!(log.is_empty());
    assert!(!server.observer_scope(&bob).has(&id));

    server.entity_mut(&id).set_tick_locked(false);
    assert_packet_kinds!(log, alice, [Teleport, Metadata]);
    assert_packet_kinds!(log, bob, [Spawn, Metadata]);
    let factory = PacketFactory::new(Revision::V1_12_R1);
    assert_eq!(
        log.payloads_for(&bob)[1],
        factory.build_name_update(id, &Text::from("New"))
    );
    assert!(server.observer_scope(&bob).has(&id));

    server.tick(&host);
    assert_packet_kinds!(log, bob, [Spawn, Metadata]);
}

#[test]
fn observer_leaving_during_lock_is_never_spawned() {
    let (mut server, log) = test_server(Revision::V1_8_R3);
    let mut host = TestHost::new();
    let id = server
        .spawn_text_entity(&mut host, Position::new(0.0, 64.0, 0.0))
        .id();
    server.entity_mut(&id).set_tick_locked(true);

    let bob = host.place_observer(2, 0.0, 64.0, 0.0);
    server.tick(&host);
    host.remove_observer(&bob);
    server.tick(&host);
    server.entity_mut(&id).set_tick_locked(false);

    assert_no_packets!(log, bob);
}
