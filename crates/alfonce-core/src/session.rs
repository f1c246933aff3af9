//! Per-browser session id used to attribute reactions, comments and orders.

use crate::backend::PersistenceBackend;
use crate::error::StorageResult;
use crate::keys;
use crate::storage::StorageService;

const SUFFIX_LEN: usize = 7;
const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// `user_<epoch_ms>_<suffix>` where the suffix is the first seven base-36
/// fraction digits of `entropy` (a value in `[0, 1)`).
pub fn generate_session_id(epoch_ms: i64, entropy: f64) -> String {
    format!("user_{}_{}", epoch_ms, base36_fraction(entropy, SUFFIX_LEN))
}

fn base36_fraction(value: f64, len: usize) -> String {
    let mut frac = value.abs().fract();
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        frac *= 36.0;
        let digit = (frac.floor() as usize).min(35);
        out.push(DIGITS[digit] as char);
        frac -= digit as f64;
    }
    out
}

/// Write a fresh session id unless one is stored. Returns the id in effect.
pub fn ensure_session_id<B: PersistenceBackend>(
    storage: &StorageService<B>,
    epoch_ms: i64,
    entropy: f64,
) -> StorageResult<String> {
    if let Some(existing) = current_user_id(storage) {
        return Ok(existing);
    }
    let id = generate_session_id(epoch_ms, entropy);
    log::info!("New session {}", id);
    storage.set_item(keys::SESSION_ID, &id)?;
    Ok(id)
}

/// Session id of the current browser, if one was generated
pub fn current_user_id<B: PersistenceBackend>(storage: &StorageService<B>) -> Option<String> {
    storage
        .get_item::<String>(keys::SESSION_ID)
        .ok()
        .flatten()
        .filter(|id| !id.is_empty())
}
