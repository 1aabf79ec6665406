use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize};

/// An EVM chain identifier.
///
/// Serializes as a plain number. Deserialization in human-readable formats
/// also accepts decimal or `0x`-prefixed strings, because JSON object keys
/// (as used by the deployment record) always arrive as strings.
#[derive(Copy, Clone, Debug, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChainId(u64);

impl ChainId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let value: serde_json::Value = Deserialize::deserialize(deserializer)?;
            match &value {
                serde_json::Value::Number(number) => number
                    .as_u64()
                    .map(ChainId)
                    .ok_or_else(|| de::Error::custom(format!("Failed to parse: {number}, expected u64"))),
                serde_json::Value::String(string) => string.parse().map_err(de::Error::custom),
                _ => Err(de::Error::custom(format!(
                    "Failed to parse: {value}, expected number or string"
                ))),
            }
        } else {
            u64::deserialize(deserializer).map(ChainId)
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChainId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = match s.strip_prefix("0x") {
            Some(hex) => u64::from_str_radix(hex, 16),
            None => s.parse::<u64>(),
        }
        .map_err(|err| format!("Failed to parse ChainId: {err}"))?;
        Ok(ChainId(number))
    }
}

impl From<u64> for ChainId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ChainId> for u64 {
    fn from(value: ChainId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_and_hex() {
        assert_eq!("137".parse::<ChainId>().unwrap(), ChainId::new(137));
        assert_eq!("0xa4b1".parse::<ChainId>().unwrap(), ChainId::new(42161));
        assert!("not-a-chain".parse::<ChainId>().is_err());
    }

    #[test]
    fn deserializes_from_number_and_string() {
        let from_number: ChainId = serde_json::from_str("8453").unwrap();
        let from_string: ChainId = serde_json::from_str("\"8453\"").unwrap();
        assert_eq!(from_number, from_string);
    }

    #[test]
    fn round_trips_as_json_map_key() {
        use std::collections::BTreeMap;

        let mut map = BTreeMap::new();
        map.insert(ChainId::new(1), "ethereum");
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"1":"ethereum"}"#);
        let back: BTreeMap<ChainId, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.keys().next(), Some(&ChainId::new(1)));
    }
}
