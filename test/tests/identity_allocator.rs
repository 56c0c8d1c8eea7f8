use std::{collections::HashSet, sync::atomic::AtomicI32};

use proptest::prelude::*;

use holo_server::HoloServerError;
use holo_shared::{AllocatorError, EntityId, EntityIdAllocator, EntityIdSource, Position, Revision};
use holo_test::{test_server, TestHost};

/// A broken host counter that always hands out the same identity
struct StuckCounter;

impl EntityIdSource for StuckCounter {
    fn next_entity_id(&mut self) -> i32 {
        42
    }
}

proptest! {
    #[test]
    fn sequential_allocations_are_distinct(count in 1usize..500, start in any::<i32>()) {
        let mut allocator = EntityIdAllocator::new();
        let mut counter = AtomicI32::new(start);

        let ids: HashSet<EntityId> = (0..count).map(|_| allocator.allocate(&mut counter)).collect();
        prop_assert_eq!(ids.len(), count);
        prop_assert_eq!(allocator.live_count(), count);
    }

    #[test]
    fn live_entities_never_share_an_identity(
        operations in prop::collection::vec(any::<bool>(), 1..200)
    ) {
        let (mut server, _log) = test_server(Revision::V1_8_R3);
        let mut host = TestHost::new();
        let mut live: Vec<EntityId> = Vec::new();

        for spawn in operations {
            if spawn || live.is_empty() {
                let id = server
                    .spawn_text_entity(&mut host, Position::new(0.0, 0.0, 0.0))
                    .id();
                prop_assert!(!live.contains(&id));
                live.push(id);
            } else {
                let id = live.remove(0);
                prop_assert!(server.destroy_entity(&id));
            }
        }

        let unique: HashSet<EntityId> = live.iter().copied().collect();
        prop_assert_eq!(unique.len(), live.len());
        prop_assert_eq!(server.entity_count(), live.len());
    }
}

#[test]
fn identities_come_from_the_host_counter() {
    let (mut server, _log) = test_server(Revision::V1_12_R1);
    let mut host = TestHost::with_counter(7000);

    let first = server
        .spawn_text_entity(&mut host, Position::new(0.0, 0.0, 0.0))
        .id();
    let carrier = host.spawn_carrier();
    let second = server
        .spawn_text_entity(&mut host, Position::new(0.0, 0.0, 0.0))
        .id();

    assert_eq!(first, EntityId::new(7000));
    assert_eq!(carrier.value(), 7001);
    assert_eq!(second, EntityId::new(7002));
    assert_eq!(host.peek_counter(), 7003);
}

#[test]
fn collision_is_reported() {
    let mut allocator = EntityIdAllocator::new();
    let mut counter = StuckCounter;

    assert_eq!(allocator.try_allocate(&mut counter), Ok(EntityId::new(42)));
    assert_eq!(
        allocator.try_allocate(&mut counter),
        Err(AllocatorError::Collision {
            id: EntityId::new(42)
        })
    );

    let (mut server, _log) = test_server(Revision::V1_8_R3);
    server.spawn_text_entity(&mut StuckCounter, Position::new(0.0, 0.0, 0.0));
    let result = server.try_spawn_text_entity(&mut StuckCounter, Position::new(0.0, 0.0, 0.0));
    assert!(matches!(
        result,
        Err(HoloServerError::Allocator(AllocatorError::Collision { .. }))
    ));
}

#[test]
#[should_panic(expected = "released twice")]
fn double_release_is_loud() {
    let mut allocator = EntityIdAllocator::new();
    let id = allocator.allocate(&mut AtomicI32::new(1));

    allocator.release(&id);
    allocator.release(&id);
}
