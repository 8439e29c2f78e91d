use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

quantity!(
    /// Generator power rating.
    Kilowatts, via: f64, unit: "kW"
);

impl Kilowatts {
    const KILOWATTS_PER_HORSEPOWER: f64 = 0.746;

    /// Horsepower ratings are converted and rounded to a tenth of a kilowatt.
    fn from_horsepower(horsepower: f64) -> Self {
        Self((horsepower * Self::KILOWATTS_PER_HORSEPOWER * 10.0).round() / 10.0)
    }
}

impl Display for Kilowatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} kW", self.0)
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseKilowattsError {
    #[error("empty power rating")]
    Empty,

    #[error("cannot parse `{0}` as a power rating")]
    Invalid(String),
}

impl FromStr for Kilowatts {
    type Err = ParseKilowattsError;

    /// Parse the ratings as they appear in equipment lists: `500`, `500 kW`, `500 eKW`,
    /// `1.5 MW`, or `200 HP`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let normalized = text.trim().to_ascii_uppercase();
        if normalized.is_empty() {
            return Err(ParseKilowattsError::Empty);
        }
        let (number, unit) = normalized
            .find(|c: char| c.is_ascii_alphabetic())
            .map_or((normalized.as_str(), ""), |index| normalized.split_at(index));
        let value: f64 = number
            .trim()
            .replace(',', "")
            .parse()
            .map_err(|_| ParseKilowattsError::Invalid(text.to_string()))?;
        match unit.trim() {
            "" | "KW" | "EKW" | "KWE" => Ok(Self(value)),
            "MW" => Ok(Self(value * 1000.0)),
            "HP" => Ok(Self::from_horsepower(value)),
            _ => Err(ParseKilowattsError::Invalid(text.to_string())),
        }
    }
}
