use std::collections::BTreeMap;

use enumset::EnumSet;
use serde::Deserialize;

use crate::{core::service::ServiceCode, prelude::*, quantity::frequency::Frequency};

/// Selected services with their annual frequencies.
///
/// A zero or missing frequency excludes the service.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "SelectionRepr")]
pub struct ServiceSelection(BTreeMap<ServiceCode, Frequency>);

/// Either `{"A": 4, "B": 1}`, or `["A", "B"]` for the default frequencies.
#[derive(Deserialize)]
#[serde(untagged)]
enum SelectionRepr {
    Frequencies(BTreeMap<ServiceCode, Frequency>),
    Codes(Vec<ServiceCode>),
}

impl From<SelectionRepr> for ServiceSelection {
    fn from(repr: SelectionRepr) -> Self {
        match repr {
            SelectionRepr::Frequencies(frequencies) => Self(frequencies),
            SelectionRepr::Codes(codes) => Self::with_defaults(codes),
        }
    }
}

impl ServiceSelection {
    /// Select the services at their default frequencies.
    pub fn with_defaults(codes: impl IntoIterator<Item = ServiceCode>) -> Self {
        codes.into_iter().map(|code| (code, code.default_frequency())).collect()
    }

    /// Services to price, in code order.
    ///
    /// Negative frequencies are excluded with a warning.
    pub fn included(&self) -> impl Iterator<Item = (ServiceCode, Frequency)> {
        self.0.iter().filter_map(|(code, frequency)| {
            if frequency.0.is_sign_negative() && !frequency.is_zero() {
                warn!(%code, %frequency, "negative frequency, excluding the service");
            }
            frequency.is_positive().then_some((*code, *frequency))
        })
    }

    /// Reject frequencies too large to price.
    pub fn validated(&self) -> Result<&Self> {
        for (code, frequency) in &self.0 {
            frequency.validated().with_context(|| format!("invalid frequency of service {code}"))?;
        }
        Ok(self)
    }

    pub fn codes(&self) -> EnumSet<ServiceCode> {
        self.included().map(|(code, _)| code).collect()
    }
}

impl FromIterator<(ServiceCode, Frequency)> for ServiceSelection {
    fn from_iter<T: IntoIterator<Item = (ServiceCode, Frequency)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_parse_json() {
        let selection: ServiceSelection =
            serde_json::from_str(r#"{"A": 4, "B": 1, "H": 0.2, "K": 0}"#).unwrap();
        assert_eq!(
            selection.included().collect::<Vec<_>>(),
            [
                (ServiceCode::A, Frequency(dec!(4))),
                (ServiceCode::B, Frequency(dec!(1))),
                (ServiceCode::H, Frequency(dec!(0.2))),
            ],
        );
    }

    #[test]
    fn test_parse_code_list() {
        let selection: ServiceSelection = serde_json::from_str(r#"["A", "H", "J"]"#).unwrap();
        assert_eq!(
            selection.included().collect::<Vec<_>>(),
            [
                (ServiceCode::A, Frequency::QUARTERLY),
                (ServiceCode::H, Frequency::QUINQUENNIAL),
                (ServiceCode::J, Frequency::ANNUAL),
            ],
        );
    }

    #[test]
    fn test_lowercase_codes() {
        let selection: ServiceSelection = serde_json::from_str(r#"{"a": 4, "h": 0.2}"#).unwrap();
        assert_eq!(selection.codes(), ServiceCode::A | ServiceCode::H);
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert!(serde_json::from_str::<ServiceSelection>(r#"{"Z": 1}"#).is_err());
    }

    #[test]
    fn test_negative_frequency_is_excluded() {
        let selection: ServiceSelection =
            [(ServiceCode::A, Frequency(dec!(-1))), (ServiceCode::B, Frequency::ANNUAL)]
                .into_iter()
                .collect();
        assert_eq!(selection.codes(), EnumSet::only(ServiceCode::B));
    }

    #[test]
    fn test_excessive_frequency_is_rejected() {
        let selection: ServiceSelection = serde_json::from_str(r#"{"A": 1e9, "B": 1}"#).unwrap();
        assert!(selection.validated().is_err());
        let selection: ServiceSelection = serde_json::from_str(r#"{"A": 4, "B": -1}"#).unwrap();
        assert!(selection.validated().is_ok());
    }

    #[test]
    fn test_with_defaults() {
        let selection = ServiceSelection::with_defaults([ServiceCode::A, ServiceCode::H]);
        assert_eq!(
            selection.included().collect::<Vec<_>>(),
            [(ServiceCode::A, Frequency::QUARTERLY), (ServiceCode::H, Frequency::QUINQUENNIAL)],
        );
    }
}
