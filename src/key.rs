//! Canonical verse addressing.
//!
//! Every verse is addressed by a key of the form `"{sura}:{ayah}"`, e.g.
//! `"2:255"`. Historic data files mix raw key strings with separate
//! (sura, ayah) fields, so all other modules go through this one to compose
//! or parse keys instead of concatenating strings ad hoc.

use thiserror::Error;

/// Number of suras in the Quran.
pub const SURA_COUNT: u16 = 114;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("invalid verse address: sura {0} out of range 1..=114")]
    SuraOutOfRange(u16),
    #[error("invalid verse address: ayah {0} must be >= 1")]
    AyahOutOfRange(u16),
    #[error("invalid verse address: malformed key {0:?}")]
    MalformedKey(String),
}

/// Format a canonical verse key from its parts.
///
/// Fails when `sura_id` is outside 1..=114 or `ayah` is zero. Upper-bound
/// validation of the ayah number is left to the dataset lookup itself, since
/// per-sura verse counts live in the metadata, not here.
pub fn make_key(sura_id: u16, ayah: u16) -> Result<String, KeyError> {
    if sura_id < 1 || sura_id > SURA_COUNT {
        return Err(KeyError::SuraOutOfRange(sura_id));
    }
    if ayah < 1 {
        return Err(KeyError::AyahOutOfRange(ayah));
    }
    Ok(format!("{}:{}", sura_id, ayah))
}

/// Strict parse of a canonical verse key into `(sura_id, ayah)`.
///
/// This is the hard-failure path: a string that does not match `int:int`
/// indicates a caller bug or corrupted persisted state, not missing content.
pub fn parse_key(key: &str) -> Result<(u16, u16), KeyError> {
    let malformed = || KeyError::MalformedKey(key.to_string());

    let (sura_part, ayah_part) = key.split_once(':').ok_or_else(malformed)?;
    let sura_id: u16 = sura_part.parse().map_err(|_| malformed())?;
    let ayah: u16 = ayah_part.parse().map_err(|_| malformed())?;

    // Re-validate ranges so parse_key and make_key accept the same universe
    if sura_id < 1 || sura_id > SURA_COUNT {
        return Err(KeyError::SuraOutOfRange(sura_id));
    }
    if ayah < 1 {
        return Err(KeyError::AyahOutOfRange(ayah));
    }
    Ok((sura_id, ayah))
}

/// A verse address in either of the two supported calling conventions.
///
/// Callers historically pass either a preformatted key string or a separate
/// (sura, ayah) pair. Both shapes are part of the compatibility contract, so
/// the variants are resolved once here rather than by runtime type sniffing
/// inside lookup code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Address {
    /// A canonical key string such as `"2:255"`.
    Key(String),
    /// A `(sura_id, ayah_number)` pair.
    Pair(u16, u16),
}

impl Address {
    /// Resolve the address to its canonical key string.
    ///
    /// A `Key` variant is parsed and re-formatted so that both conventions
    /// produce byte-identical keys (`"02:5"` normalizes to `"2:5"` instead
    /// of being passed through).
    pub fn canonicalize(&self) -> Result<String, KeyError> {
        match self {
            Address::Key(raw) => {
                let (sura_id, ayah) = parse_key(raw)?;
                make_key(sura_id, ayah)
            }
            Address::Pair(sura_id, ayah) => make_key(*sura_id, *ayah),
        }
    }
}

impl From<&str> for Address {
    fn from(key: &str) -> Self {
        Address::Key(key.to_string())
    }
}

impl From<String> for Address {
    fn from(key: String) -> Self {
        Address::Key(key)
    }
}

impl From<(u16, u16)> for Address {
    fn from((sura_id, ayah): (u16, u16)) -> Self {
        Address::Pair(sura_id, ayah)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_key_basic() {
        assert_eq!(make_key(1, 1).unwrap(), "1:1");
        assert_eq!(make_key(114, 6).unwrap(), "114:6");
    }

    #[test]
    fn test_make_key_rejects_bad_sura() {
        assert_eq!(make_key(0, 1), Err(KeyError::SuraOutOfRange(0)));
        assert_eq!(make_key(115, 1), Err(KeyError::SuraOutOfRange(115)));
    }

    #[test]
    fn test_make_key_rejects_zero_ayah() {
        assert_eq!(make_key(2, 0), Err(KeyError::AyahOutOfRange(0)));
    }

    #[test]
    fn test_parse_key_round_trip() {
        for (sura, ayah) in [(1u16, 1u16), (2, 255), (114, 6)] {
            let key = make_key(sura, ayah).unwrap();
            assert_eq!(parse_key(&key).unwrap(), (sura, ayah));
        }
    }

    #[test]
    fn test_parse_key_malformed() {
        for bad in ["", "2", "2:", ":5", "2:5:7", "two:five", "2.255", " 2:5"] {
            assert!(
                matches!(parse_key(bad), Err(KeyError::MalformedKey(_))),
                "expected malformed error for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_parse_key_out_of_range() {
        assert_eq!(parse_key("0:1"), Err(KeyError::SuraOutOfRange(0)));
        assert_eq!(parse_key("120:1"), Err(KeyError::SuraOutOfRange(120)));
        assert_eq!(parse_key("3:0"), Err(KeyError::AyahOutOfRange(0)));
    }

    #[test]
    fn test_address_canonicalize_equivalence() {
        let from_key: Address = "2:255".into();
        let from_pair: Address = (2, 255).into();
        assert_eq!(
            from_key.canonicalize().unwrap(),
            from_pair.canonicalize().unwrap()
        );
    }

    #[test]
    fn test_address_canonicalize_normalizes_padded_key() {
        let padded: Address = "02:5".into();
        assert_eq!(padded.canonicalize().unwrap(), "2:5");
    }
}
