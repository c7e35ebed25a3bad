//! UTF-8 boundary repair for raw document chunks.
//!
//! Chunks are loaded by byte count from arbitrary document offsets, so a
//! chunk commonly ends in the middle of a multi-byte character and, after a
//! misaligned seek, may begin with stray continuation bytes. [`trim_chunk`]
//! repairs both ends in place so the rest of the engine only ever sees
//! complete characters.
//!
//! Policy (hard contract):
//! - a truncated multi-byte sequence at the end is dropped entirely, lead
//!   byte included;
//! - leading continuation bytes are replaced with ASCII spaces rather than
//!   rejected, so a misaligned load still yields usable text and forward
//!   progress is guaranteed;
//! - an invalid sequence anywhere else truncates the chunk at that point.

/// Length of the longest prefix of `bytes` that is complete, valid UTF-8.
///
/// A partial multi-byte sequence at the end is excluded, as is everything
/// from the first invalid sequence onward.
pub fn utf8_prefix_len(bytes: &[u8]) -> usize {
    match core::str::from_utf8(bytes) {
        Ok(_) => bytes.len(),
        Err(err) => {
            match err.error_len() {
                None => log::debug!(
                    "dropping incomplete UTF-8 sequence at byte {}",
                    err.valid_up_to()
                ),
                Some(_) => log::debug!(
                    "truncating at invalid UTF-8 sequence at byte {}",
                    err.valid_up_to()
                ),
            }
            err.valid_up_to()
        }
    }
}

/// Repair a raw chunk in place and return its usable byte length.
///
/// `usable` is the number of bytes actually loaded into `buf`; the buffer
/// must have at least one spare byte beyond it, which receives a 0
/// terminator at the returned length (an end-of-valid-text marker for
/// callers that hand the buffer to C-style renderers). `usable` is clamped
/// to `buf.len() - 1` if the spare byte is missing.
///
/// The result is always `<= usable`, and `buf[..result]` is complete, valid
/// UTF-8. Runs in O(`usable`).
pub fn trim_chunk(buf: &mut [u8], usable: usize) -> usize {
    if buf.is_empty() {
        return 0;
    }
    let usable = usable.min(buf.len() - 1);

    // The chunk may start mid-character after a misaligned load; blank the
    // orphaned continuation bytes so the remainder stays usable.
    let mut lead = 0;
    while lead < usable && is_continuation(buf[lead]) {
        buf[lead] = b' ';
        lead += 1;
    }
    if lead > 0 {
        log::debug!("replaced {} leading continuation bytes with spaces", lead);
    }

    let valid = utf8_prefix_len(&buf[..usable]);
    buf[valid] = 0;
    valid
}

#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}
