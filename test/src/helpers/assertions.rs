/// Assert the exact sequence of packet kinds an observer received
#[macro_export]
macro_rules! assert_packet_kinds {
    ($log:expr, $observer:expr, [$($kind:ident),* $(,)?]) => {
        assert_eq!(
            $log.kinds_for(&$observer),
            vec![$($crate::PacketKind::$kind),*],
            "unexpected packets for {:?}",
            $observer
        );
    };
}

/// Assert that an observer received nothing
#[macro_export]
macro_rules! assert_no_packets {
    ($log:expr, $observer:expr) => {
        assert!(
            $log.kinds_for(&$observer).is_empty(),
            "{:?} should not have received any packet",
            $observer
        );
    };
}
