use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Which published dollar quote is used as the USD→ARS conversion rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateKind {
    Crypto,
    Card,
}

// Serialized with the same lowercase names accepted on input and in config
impl Serialize for RateKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl RateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateKind::Crypto => "crypto",
            RateKind::Card => "card",
        }
    }

    /// Human readable name shown next to the rate in the admin view
    pub fn label(&self) -> &'static str {
        match self {
            RateKind::Crypto => "Crypto dollar",
            RateKind::Card => "Card dollar",
        }
    }
}

impl fmt::Display for RateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RateKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "crypto" | "cripto" => Ok(RateKind::Crypto),
            "card" | "tarjeta" => Ok(RateKind::Card),
            other => Err(anyhow!("Unknown rate kind: {}", other)),
        }
    }
}

/// Which rates a calculator needs before it can price anything.
///
/// `transfer` and `dual` name the two built-in calculators and are accepted
/// wherever a source is parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RateSource {
    Crypto,
    Card,
    Both,
}

impl Serialize for RateSource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

// Config values go through the same lenient parsing as the CLI
impl<'de> Deserialize<'de> for RateSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

impl RateSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateSource::Crypto => "crypto",
            RateSource::Card => "card",
            RateSource::Both => "both",
        }
    }

    /// Rate kinds this source fetches, in display order
    pub fn kinds(&self) -> &'static [RateKind] {
        match self {
            RateSource::Crypto => &[RateKind::Crypto],
            RateSource::Card => &[RateKind::Card],
            RateSource::Both => &[RateKind::Crypto, RateKind::Card],
        }
    }
}

impl fmt::Display for RateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RateSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "both" | "dual" => Ok(RateSource::Both),
            "transfer" => Ok(RateSource::Crypto),
            other => other
                .parse::<RateKind>()
                .map(RateSource::from)
                .map_err(|_| anyhow!("Unknown rate source: {}", other)),
        }
    }
}

impl From<RateKind> for RateSource {
    fn from(kind: RateKind) -> Self {
        match kind {
            RateKind::Crypto => RateSource::Crypto,
            RateKind::Card => RateSource::Card,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_kind_accepts_spanish_names() {
        assert_eq!("cripto".parse::<RateKind>().unwrap(), RateKind::Crypto);
        assert_eq!("TARJETA".parse::<RateKind>().unwrap(), RateKind::Card);
        assert!("blue".parse::<RateKind>().is_err());
    }

    #[test]
    fn test_rate_source_kinds() {
        assert_eq!("dual".parse::<RateSource>().unwrap(), RateSource::Both);
        assert_eq!("card".parse::<RateSource>().unwrap(), RateSource::Card);
        assert_eq!(RateSource::Both.kinds(), &[RateKind::Crypto, RateKind::Card]);
        assert_eq!(serde_json::to_string(&RateSource::Both).unwrap(), "\"both\"");
    }

    #[test]
    fn test_rate_source_accepts_calculator_names() {
        assert_eq!("transfer".parse::<RateSource>().unwrap(), RateSource::Crypto);
        assert_eq!("Dual".parse::<RateSource>().unwrap(), RateSource::Both);
        assert_eq!(
            serde_json::from_str::<RateSource>("\"transfer\"").unwrap(),
            RateSource::Crypto
        );
        assert_eq!(
            serde_json::from_str::<RateSource>("\"tarjeta\"").unwrap(),
            RateSource::Card
        );
        assert!(serde_json::from_str::<RateSource>("\"blue\"").is_err());
    }
}
