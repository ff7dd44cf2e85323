//! 32-bit record type keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Record type key: the `time_low` field of the record's type UUID, or the
/// raw type-table slot for records without a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeId(pub u32);

impl TypeId {
    pub fn from_uuid(uuid: &Uuid) -> Self {
        TypeId(uuid.as_fields().0)
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

impl FromStr for TypeId {
    type Err = std::num::ParseIntError;

    /// Parses the 8-hex-digit tag form, with or without `0x`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim_start_matches("0x").trim_start_matches("0X");
        u32::from_str_radix(digits, 16).map(TypeId)
    }
}

impl From<u32> for TypeId {
    fn from(v: u32) -> Self { TypeId(v) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        let id: TypeId = "0AA8AF46".parse().unwrap();
        assert_eq!(id, TypeId(0x0AA8AF46));
        assert_eq!(id.to_string(), "0AA8AF46");
        assert_eq!("0xF8A779F9".parse::<TypeId>().unwrap(), TypeId(0xF8A779F9));
        assert!("zz".parse::<TypeId>().is_err());
    }

    #[test]
    fn test_from_uuid_uses_time_low() {
        let uuid = Uuid::parse_str("ca7163a3-5124-4fd3-a94d-9c7c5e6a4b6c").unwrap();
        assert_eq!(TypeId::from_uuid(&uuid), TypeId(0xCA7163A3));
    }
}
