use std::ops::Deref;
use std::ops::DerefMut;
use std::sync::Mutex;

/// One process-wide scratch buffer shared by all renders.
static SHARED_BUFFER: Mutex<Option<String>> = Mutex::new(None);

/// A scratch buffer checked out of [`SHARED_BUFFER`] (or freshly allocated
/// when the shared one is already in use). Dropping it clears the buffer and
/// puts it back into the empty slot.
pub(crate) struct PooledBuffer {
    buffer: String,
}
impl Deref for PooledBuffer {
    type Target = String;

    fn deref(&self) -> &String {
        &self.buffer
    }
}
impl DerefMut for PooledBuffer {
    fn deref_mut(&mut self) -> &mut String {
        &mut self.buffer
    }
}
impl Drop for PooledBuffer {
    fn drop(&mut self) {
        let mut buffer = std::mem::take(&mut self.buffer);
        buffer.clear();
        if let Ok(mut slot) = SHARED_BUFFER.try_lock()
            && slot.is_none() {
            *slot = Some(buffer);
        }
    }
}

/// Takes the shared buffer without ever blocking. Falls back to a new
/// allocation when another render holds it (or the slot's lock is poisoned).
pub(crate) fn acquire() -> PooledBuffer {
    let buffer =
        SHARED_BUFFER.try_lock()
            .ok()
            .and_then(|mut slot| slot.take())
            .unwrap_or_default();

    PooledBuffer { buffer }
}
