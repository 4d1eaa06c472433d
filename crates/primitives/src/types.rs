use alloy_primitives::U256;
use std::fmt::{Debug, Display, Formatter};


pub type BlockNumber = u64;


/// Unsigned integer in the JSON-RPC "quantity" encoding.
///
/// Nodes send quantities as `0x`-prefixed hex strings, while web3 formatted
/// records carry them as plain JSON numbers. Both forms are accepted,
/// serialization produces a JSON number.
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Quantity(pub u64);


impl Quantity {
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }

    pub fn to_hex(self) -> String {
        format!("{:#x}", self.0)
    }

    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))?;
        if digits.is_empty() {
            return None
        }
        u64::from_str_radix(digits, 16).ok().map(Quantity)
    }
}


impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Quantity(value)
    }
}


impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}


impl Debug for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}


impl serde::Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer
    {
        serializer.serialize_u64(self.0)
    }
}


struct QuantityVisitor;


impl<'de> serde::de::Visitor<'de> for QuantityVisitor {
    type Value = Quantity;

    fn expecting(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "a hex encoded quantity or an unsigned integer")
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Quantity(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        u64::try_from(v).map(Quantity).map_err(|_| {
            serde::de::Error::custom(format!("negative quantity {}", v))
        })
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Quantity::from_hex(v).ok_or_else(|| {
            serde::de::Error::custom(format!("failed to deserialize `{}` as quantity", v))
        })
    }
}


impl<'de> serde::Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>
    {
        deserializer.deserialize_any(QuantityVisitor)
    }
}


/// Wei amount (`value`, `gasPrice`, ...).
///
/// Read from a hex quantity, a decimal string or a JSON number,
/// written as a decimal string.
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Wei(pub U256);


impl Wei {
    pub fn from_u64(value: u64) -> Self {
        Wei(U256::from(value))
    }

    fn parse(s: &str) -> Option<Self> {
        let value = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some("") => return None,
            Some(digits) => U256::from_str_radix(digits, 16).ok()?,
            None if s.is_empty() => return None,
            None => U256::from_str_radix(s, 10).ok()?
        };
        Some(Wei(value))
    }
}


impl Display for Wei {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}


impl Debug for Wei {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} wei", self.0)
    }
}


impl serde::Serialize for Wei {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer
    {
        serializer.collect_str(&self.0)
    }
}


struct WeiVisitor;


impl<'de> serde::de::Visitor<'de> for WeiVisitor {
    type Value = Wei;

    fn expecting(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "a hex quantity, a decimal string or an unsigned integer")
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Wei::from_u64(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        u64::try_from(v).map(Wei::from_u64).map_err(|_| {
            serde::de::Error::custom(format!("negative amount {}", v))
        })
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Wei::parse(v).ok_or_else(|| {
            serde::de::Error::custom(format!("failed to deserialize `{}` as wei amount", v))
        })
    }
}


impl<'de> serde::Deserialize<'de> for Wei {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>
    {
        deserializer.deserialize_any(WeiVisitor)
    }
}


#[cfg(test)]
mod tests {
    use super::{Quantity, Wei};


    #[test]
    fn hex_and_numeric_forms() {
        let q: Quantity = serde_json::from_str("\"0x1a\"").unwrap();
        assert_eq!(q, Quantity(26));

        let q: Quantity = serde_json::from_str("26").unwrap();
        assert_eq!(q, Quantity(26));

        assert_eq!(serde_json::to_string(&Quantity(0)).unwrap(), "0");
        assert_eq!(serde_json::to_string(&Quantity(255)).unwrap(), "255");
        assert_eq!(Quantity(255).to_hex(), "0xff");
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(serde_json::from_str::<Quantity>("\"0x\"").is_err());
        assert!(serde_json::from_str::<Quantity>("\"12\"").is_err());
        assert!(serde_json::from_str::<Quantity>("\"0xzz\"").is_err());
        assert!(serde_json::from_str::<Quantity>("-1").is_err());
    }

    #[test]
    fn displays_as_decimal() {
        assert_eq!(Quantity(16).to_string(), "16");
        assert_eq!(format!("{:?}", Quantity(16)), "0x10");
    }

    #[test]
    fn wei_is_written_in_decimal() {
        let w: Wei = serde_json::from_str("\"0x4a817c800\"").unwrap();
        assert_eq!(serde_json::to_string(&w).unwrap(), "\"20000000000\"");

        let w: Wei = serde_json::from_str("\"20000000000\"").unwrap();
        assert_eq!(w, Wei::from_u64(20_000_000_000));

        let w: Wei = serde_json::from_str("0").unwrap();
        assert_eq!(serde_json::to_string(&w).unwrap(), "\"0\"");
    }

    #[test]
    fn wei_beyond_u64() {
        let w: Wei = serde_json::from_str("\"0xde0b6b3a76400000\"").unwrap();
        assert_eq!(w.to_string(), "16000000000000000000");

        assert!(serde_json::from_str::<Wei>("\"0x\"").is_err());
        assert!(serde_json::from_str::<Wei>("\"\"").is_err());
        assert!(serde_json::from_str::<Wei>("\"12ab\"").is_err());
    }
}
