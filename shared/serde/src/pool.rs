use std::cell::RefCell;

use crate::ByteWriter;

thread_local! {
    static POOLED_WRITER: RefCell<Option<ByteWriter>> = RefCell::new(Some(ByteWriter::new()));
}

/// Runs `f` with this thread's pooled writer, cleared before and after use.
///
/// Each thread owns its own writer so concurrent callers never share one.
/// A nested call on the same thread gets a fresh temporary writer instead of
/// the pooled one.
pub fn with_pooled_writer<R>(f: impl FnOnce(&mut ByteWriter) -> R) -> R {
    let pooled = POOLED_WRITER.with(|cell| cell.borrow_mut().take());
    let mut writer = pooled.unwrap_or_default();
    writer.clear();

    let output = f(&mut writer);

    writer.clear();
    POOLED_WRITER.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            *slot = Some(writer);
        }
    });

    output
}
