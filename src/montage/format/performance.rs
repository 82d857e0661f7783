//! Performance payload decoding. Only the payload size is interpreted.

use crate::montage::types::models::Performance;

pub fn decode(payload: &[u8]) -> Performance {
    Performance {
        data_len: payload.len(),
    }
}
