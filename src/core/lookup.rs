//! Bracketed lookup tables with spreadsheet `XLOOKUP` semantics.

use std::{
    fmt::{Display, Formatter},
    ops::RangeInclusive,
    str::FromStr,
};

use crate::prelude::*;

/// Lookup table key: either an inclusive numeric bracket written as `min-max`, or an exact text.
#[derive(Clone, Debug, PartialEq)]
pub enum LookupKey {
    Range(RangeInclusive<f64>),
    Exact(String),
}

impl LookupKey {
    fn matches(&self, value: LookupValue<'_>) -> bool {
        match (self, value) {
            (Self::Range(range), LookupValue::Number(number)) => range.contains(&number),
            (Self::Exact(key), LookupValue::Text(text)) => key == text,
            _ => false,
        }
    }
}

impl FromStr for LookupKey {
    type Err = Error;

    fn from_str(key: &str) -> Result<Self> {
        let key = key.trim();
        let Some((min, max)) = key.split_once('-') else {
            return Ok(Self::Exact(key.to_string()));
        };
        let (Ok(min), Ok(max)) = (min.trim().parse::<f64>(), max.trim().parse::<f64>()) else {
            return Ok(Self::Exact(key.to_string()));
        };
        ensure!(min <= max, "inverted range key `{key}`");
        Ok(Self::Range(min..=max))
    }
}

impl Display for LookupKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Range(range) => write!(f, "{}-{}", range.start(), range.end()),
            Self::Exact(key) => write!(f, "{key}"),
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub enum LookupValue<'a> {
    Number(f64),
    Text(&'a str),
}

impl From<f64> for LookupValue<'_> {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<u32> for LookupValue<'_> {
    fn from(number: u32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl<'a> From<&'a str> for LookupValue<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

/// Parallel key and value columns, parsed once and scanned in order.
#[derive(Clone, Debug)]
pub struct RangeLookup<V> {
    entries: Vec<(LookupKey, V)>,
}

impl<V> RangeLookup<V> {
    /// Build the table from a key column and a value column of the same length.
    pub fn try_new<K: AsRef<str>>(
        keys: impl IntoIterator<Item = K>,
        values: impl IntoIterator<Item = V>,
    ) -> Result<Self> {
        let keys: Vec<LookupKey> = keys
            .into_iter()
            .map(|key| key.as_ref().parse())
            .collect::<Result<_>>()?;
        let values: Vec<V> = values.into_iter().collect();
        ensure!(
            keys.len() == values.len(),
            "lookup table has {} keys but {} values",
            keys.len(),
            values.len(),
        );
        ensure!(!keys.is_empty(), "lookup table is empty");
        Ok(Self { entries: keys.into_iter().zip(values).collect() })
    }

    /// Return the position of the first entry matching the value.
    pub fn position<'a>(&self, value: impl Into<LookupValue<'a>>) -> Option<usize> {
        let value = value.into();
        self.entries.iter().position(|(key, _)| key.matches(value))
    }

    /// Return the value of the first entry matching the value.
    pub fn find<'a>(&self, value: impl Into<LookupValue<'a>>) -> Option<&V> {
        self.position(value).map(|index| &self.entries[index].1)
    }

    /// Return the value of the first matching entry, or the not-found default.
    pub fn find_or<'s, 'a>(&'s self, value: impl Into<LookupValue<'a>>, not_found: &'s V) -> &'s V {
        self.find(value).unwrap_or(not_found)
    }

    pub fn keys(&self) -> impl Iterator<Item = &LookupKey> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Non-empty by construction.
    pub fn first(&self) -> (&LookupKey, &V) {
        let (key, value) = &self.entries[0];
        (key, value)
    }

    /// Non-empty by construction.
    pub fn last(&self) -> (&LookupKey, &V) {
        let (key, value) = &self.entries[self.entries.len() - 1];
        (key, value)
    }

    pub fn get(&self, index: usize) -> Option<(&LookupKey, &V)> {
        self.entries.get(index).map(|(key, value)| (key, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw_table() -> RangeLookup<&'static str> {
        RangeLookup::try_new(["2-14", "15-30", "35-150"], ["tiny", "small", "medium"]).unwrap()
    }

    #[test]
    fn test_parse_range_key() {
        assert_eq!("2-14".parse::<LookupKey>().unwrap(), LookupKey::Range(2.0..=14.0));
        assert_eq!(
            " 1055 - 1500 ".parse::<LookupKey>().unwrap(),
            LookupKey::Range(1055.0..=1500.0),
        );
    }

    #[test]
    fn test_parse_exact_key() {
        assert_eq!("8 PopNoz".parse::<LookupKey>().unwrap(), LookupKey::Exact("8 PopNoz".into()));
        assert_eq!("pop-noz".parse::<LookupKey>().unwrap(), LookupKey::Exact("pop-noz".into()));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        assert!("30-15".parse::<LookupKey>().is_err());
    }

    #[test]
    fn test_mismatched_columns_are_rejected() {
        assert!(RangeLookup::try_new(["2-14", "15-30"], [1]).is_err());
        assert!(RangeLookup::<u32>::try_new(Vec::<&str>::new(), []).is_err());
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let table = kw_table();
        assert_eq!(table.find(2.0), Some(&"tiny"));
        assert_eq!(table.find(14.0), Some(&"tiny"));
        assert_eq!(table.find(15.0), Some(&"small"));
        assert_eq!(table.find(150.0), Some(&"medium"));
    }

    #[test]
    fn test_not_found_returns_default() {
        let table = kw_table();
        assert_eq!(table.find(1.0), None);
        assert_eq!(table.find_or(32.0, &"none"), &"none");
        assert_eq!(table.find_or(151.0, &"none"), &"none");
    }

    #[test]
    fn test_first_match_wins_on_shared_edges() {
        let table = RangeLookup::try_new(["1055-1500", "1500-2050"], [8, 9]).unwrap();
        assert_eq!(table.find(1500.0), Some(&8));
        assert_eq!(table.find(1501.0), Some(&9));
    }

    #[test]
    fn test_exact_text_lookup() {
        let table = RangeLookup::try_new(["6 PopNoz", "6 UnitInj"], [6, 8]).unwrap();
        assert_eq!(table.find("6 UnitInj"), Some(&8));
        assert_eq!(table.find_or("7 UnitInj", &0), &0);
    }

    #[test]
    fn test_text_never_matches_ranges_and_numbers_never_match_text() {
        let table = RangeLookup::try_new(["2-14", "20"], [1, 2]).unwrap();
        assert_eq!(table.find("2-14"), None);
        assert_eq!(table.find(20.0), None);
        assert_eq!(table.find("20"), Some(&2));
        assert_eq!(table.find(6.0), Some(&1));
    }

    #[test]
    fn test_integer_lookup() {
        let table = RangeLookup::try_new(["1-4", "5-6"], [3, 4]).unwrap();
        assert_eq!(table.find(5_u32), Some(&4));
    }
}
