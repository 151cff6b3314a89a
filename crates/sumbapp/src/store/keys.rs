//! Record store key encoding.
//!
//! Note ids are decimal strings at the API boundary and fixed-width, big-endian
//! `u64`s inside the store. Byte-wise comparison of two encoded keys therefore
//! matches numeric comparison of the ids, so a reverse key scan yields the most
//! recently allocated notes first.

use crate::error::{Result, SumbError};

pub const KEY_LEN: usize = 8;

/// Parses a decimal id and encodes it as a store key.
pub fn encode_id(id: &str) -> Result<[u8; KEY_LEN]> {
    let n = parse_id(id)?;
    Ok(n.to_be_bytes())
}

/// Parses a decimal id into its numeric form.
pub fn parse_id(id: &str) -> Result<u64> {
    id.parse::<u64>()
        .map_err(|_| SumbError::MalformedIdentifier(id.to_string()))
}

/// Decodes a store key back into a decimal id.
///
/// Returns `None` for anything that is not a note key, which is how the
/// sequence sentinel (and any other reserved key) stays out of enumerations.
pub fn decode_id(key: &[u8]) -> Option<String> {
    let bytes: [u8; KEY_LEN] = key.try_into().ok()?;
    Some(u64::from_be_bytes(bytes).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::SEQUENCE_KEY;

    #[test]
    fn encodes_big_endian() {
        assert_eq!(encode_id("1").unwrap(), [0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(encode_id("256").unwrap(), [0, 0, 0, 0, 0, 0, 1, 0]);
    }

    #[test]
    fn byte_order_matches_numeric_order() {
        let ids = ["1", "2", "9", "10", "255", "256", "1000", "18446744073709551615"];
        let keys: Vec<_> = ids.iter().map(|id| encode_id(id).unwrap()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn rejects_malformed_ids() {
        for bad in ["", "abc", "-1", "1.5", "18446744073709551616"] {
            assert!(
                matches!(encode_id(bad), Err(SumbError::MalformedIdentifier(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn decode_skips_sentinel() {
        assert_eq!(decode_id(&encode_id("42").unwrap()), Some("42".to_string()));
        assert_eq!(decode_id(SEQUENCE_KEY), None);
    }
}
