/// Decimal places used by the reference decimal pipeline
pub const REFERENCE_DECIMAL_PLACES: u32 = 40;

/// How intermediate values are rounded while encoding
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Precision {
    /// floor(sqrt(reserve1 * 2^192 / reserve0)), exact to the last bit
    #[default]
    Exact,
    /// Round the ratio and its square root half-up to this many decimal
    /// places before scaling by 2^96
    DecimalPlaces(u32),
}

impl Precision {
    /// 40 decimal places, the setting fixture values were originally generated with
    pub const fn reference() -> Self {
        Precision::DecimalPlaces(REFERENCE_DECIMAL_PLACES)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncoderConfig {
    pub precision: Precision,
}

impl EncoderConfig {
    pub const fn new(precision: Precision) -> Self {
        Self { precision }
    }

    pub const fn reference() -> Self {
        Self::new(Precision::reference())
    }

    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_exact() {
        assert_eq!(EncoderConfig::default().precision, Precision::Exact);
    }

    #[test]
    fn test_reference_precision() {
        assert_eq!(EncoderConfig::reference().precision, Precision::DecimalPlaces(40));
        assert_eq!(
            EncoderConfig::default().with_precision(Precision::DecimalPlaces(18)),
            EncoderConfig::new(Precision::DecimalPlaces(18))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_config() {
        let exact: EncoderConfig = serde_json::from_str(r#"{"precision": "exact"}"#).unwrap();
        assert_eq!(exact, EncoderConfig::default());

        let decimal: EncoderConfig =
            serde_json::from_str(r#"{"precision": {"decimal_places": 40}}"#).unwrap();
        assert_eq!(decimal, EncoderConfig::reference());

        let empty: EncoderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, EncoderConfig::default());
    }
}
