use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::quantity::frequency::Frequency;

/// Standardized maintenance task category.
///
/// Parsed case-insensitively, both on the command line and in requests.
#[derive(
    Debug,
    Hash,
    Ord,
    PartialOrd,
    serde_with::DeserializeFromStr,
    serde_with::SerializeDisplay,
    enumset::EnumSetType,
)]
pub enum ServiceCode {
    /// Comprehensive inspection.
    A,

    /// Oil and filter change.
    B,

    /// Coolant service.
    C,

    /// Oil, coolant, and fuel laboratory analysis.
    D,

    /// Load bank testing.
    E,

    /// Diesel engine tune-up.
    F,

    /// Gas engine tune-up.
    G,

    /// Electrical testing.
    H,

    /// Automatic transfer switch service.
    I,

    /// Infrared thermal imaging.
    J,

    /// Starting battery replacement.
    K,
}

impl ServiceCode {
    pub const fn title(self) -> &'static str {
        match self {
            Self::A => "Comprehensive Inspection",
            Self::B => "Oil & Filter Service",
            Self::C => "Coolant Service",
            Self::D => "Fluid Analysis",
            Self::E => "Load Bank Testing",
            Self::F => "Diesel Tune-Up",
            Self::G => "Gas Tune-Up",
            Self::H => "Electrical Testing",
            Self::I => "Transfer Switch Service",
            Self::J => "Thermal Imaging",
            Self::K => "Battery Replacement",
        }
    }

    /// Frequency used when a service is selected without an explicit one.
    pub const fn default_frequency(self) -> Frequency {
        match self {
            Self::A => Frequency::QUARTERLY,
            Self::H => Frequency::QUINQUENNIAL,
            Self::B
            | Self::C
            | Self::D
            | Self::E
            | Self::F
            | Self::G
            | Self::I
            | Self::J
            | Self::K => Frequency::ANNUAL,
        }
    }
}

impl Display for ServiceCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown service code `{0}`, expected one of A–K")]
pub struct UnknownServiceCode(pub String);

impl FromStr for ServiceCode {
    type Err = UnknownServiceCode;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "E" => Ok(Self::E),
            "F" => Ok(Self::F),
            "G" => Ok(Self::G),
            "H" => Ok(Self::H),
            "I" => Ok(Self::I),
            "J" => Ok(Self::J),
            "K" => Ok(Self::K),
            _ => Err(UnknownServiceCode(code.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use enumset::EnumSet;

    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("a".parse::<ServiceCode>(), Ok(ServiceCode::A));
        assert_eq!(" K ".parse::<ServiceCode>(), Ok(ServiceCode::K));
    }

    #[test]
    fn test_parse_unknown_code() {
        assert_eq!("Z".parse::<ServiceCode>(), Err(UnknownServiceCode("Z".to_string())));
        assert_eq!("AB".parse::<ServiceCode>(), Err(UnknownServiceCode("AB".to_string())));
    }

    #[test]
    fn test_all_codes_round_trip_through_display() {
        for code in EnumSet::<ServiceCode>::all() {
            assert_eq!(code.to_string().parse::<ServiceCode>(), Ok(code));
        }
        assert_eq!(EnumSet::<ServiceCode>::all().len(), 11);
    }

    #[test]
    fn test_deserialize_is_case_insensitive() {
        let codes: Vec<ServiceCode> = serde_json::from_str(r#"["a", "K"]"#).unwrap();
        assert_eq!(codes, [ServiceCode::A, ServiceCode::K]);
        assert!(serde_json::from_str::<ServiceCode>(r#""Z""#).is_err());
        assert_eq!(serde_json::to_string(&ServiceCode::B).unwrap(), r#""B""#);
    }

    #[test]
    fn test_default_frequencies() {
        assert_eq!(ServiceCode::A.default_frequency(), Frequency::QUARTERLY);
        assert_eq!(ServiceCode::B.default_frequency(), Frequency::ANNUAL);
        assert_eq!(ServiceCode::H.default_frequency(), Frequency::QUINQUENNIAL);
    }
}
