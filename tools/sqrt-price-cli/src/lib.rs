use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use price_math::{EncoderConfig, Precision, SqrtPriceEncoder};
use price_types::Reserve;

#[derive(Parser, Debug)]
#[command(name = "encode-price-sqrt")]
#[command(about = "Encode reserve1 / reserve0 as a Q64.96 sqrt price")]
#[command(allow_negative_numbers = true)]
pub struct Args {
    /// Token1 reserve (decimal or 0x-prefixed hex)
    pub reserve1: String,

    /// Token0 reserve (decimal or 0x-prefixed hex)
    pub reserve0: String,

    /// Encoder configuration file (JSON), e.g. {"precision": {"decimal_places": 40}}
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Round intermediates to this many decimal places instead of computing exactly.
    /// Overrides the precision from --config
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(..=1000))]
    pub decimal_places: Option<u32>,

    /// Fail unless MIN_SQRT_RATIO <= result < MAX_SQRT_RATIO
    #[arg(long)]
    pub check_bounds: bool,

    /// Print the result as 0x-prefixed hex
    #[arg(long)]
    pub hex: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn encoder_config(&self) -> Result<EncoderConfig> {
        let config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("Failed to parse config {}", path.display()))?
            }
            None => EncoderConfig::default(),
        };

        Ok(match self.decimal_places {
            Some(places) => config.with_precision(Precision::DecimalPlaces(places)),
            None => config,
        })
    }
}

/// Encode the requested ratio and render it for stdout
pub fn run(args: &Args) -> Result<String> {
    let reserve1: Reserve = args
        .reserve1
        .parse()
        .with_context(|| format!("Failed to parse reserve1 {:?}", args.reserve1))?;
    let reserve0: Reserve = args
        .reserve0
        .parse()
        .with_context(|| format!("Failed to parse reserve0 {:?}", args.reserve0))?;

    let config = args.encoder_config()?;
    tracing::debug!(?config, "encoding sqrt price");

    let sqrt_price = SqrtPriceEncoder::new(config)
        .encode(&reserve1, &reserve0)
        .with_context(|| format!("Failed to encode {} / {}", reserve1, reserve0))?;

    if args.check_bounds {
        sqrt_price.check_bounds()?;
    } else if !sqrt_price.is_within_bounds() {
        tracing::warn!(%sqrt_price, "sqrt price outside [MIN_SQRT_RATIO, MAX_SQRT_RATIO)");
    }

    Ok(if args.hex {
        format!("{:#x}", sqrt_price)
    } else {
        sqrt_price.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use price_types::PriceError;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["encode-price-sqrt"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_run_exact() {
        assert_eq!(run(&args(&["1", "1"])).unwrap(), "79228162514264337593543950336");
        assert_eq!(run(&args(&["2", "1"])).unwrap(), "112045541949572279837463876454");
    }

    #[test]
    fn test_run_hex() {
        assert_eq!(
            run(&args(&["1", "1", "--hex"])).unwrap(),
            "0x1000000000000000000000000"
        );
    }

    #[test]
    fn test_run_decimal_places() {
        let parsed = args(&["1", "2", "--decimal-places", "40"]);
        assert_eq!(parsed.encoder_config().unwrap(), EncoderConfig::reference());
        assert_eq!(run(&parsed).unwrap(), "56022770974786139918731938227");
    }

    #[test]
    fn test_run_check_bounds() {
        // sqrt(1 / 2^192) * 2^96 = 1, below MIN_SQRT_RATIO
        let tiny = "6277101735386680763835789423207666416102355444464034512896";
        assert_eq!(run(&args(&["1", tiny])).unwrap(), "1");

        let err = run(&args(&["1", tiny, "--check-bounds"])).unwrap_err();
        assert_eq!(
            err.downcast_ref::<PriceError>(),
            Some(&PriceError::SqrtRatioOutOfBounds { value: "1".into() })
        );
    }

    #[test]
    fn test_run_errors_carry_context() {
        let err = run(&args(&["1", "0"])).unwrap_err();
        assert_eq!(err.root_cause().to_string(), "Division by zero");
        assert!(err.to_string().contains("Failed to encode 1 / 0"));

        let err = run(&args(&["abc", "1"])).unwrap_err();
        assert!(err.to_string().contains("reserve1"));
        assert!(matches!(
            err.downcast_ref::<PriceError>(),
            Some(PriceError::InvalidReserve { .. })
        ));
    }

    #[test]
    fn test_run_negative_reserve() {
        let parsed = Args::try_parse_from(["encode-price-sqrt", "1", "-4"]).unwrap();
        let err = run(&parsed).unwrap_err();
        assert_eq!(
            err.downcast_ref::<PriceError>(),
            Some(&PriceError::NegativeReserve { value: "-4".into() })
        );

        let parsed = Args::try_parse_from(["encode-price-sqrt", "-5", "1"]).unwrap();
        assert_eq!(parsed.reserve1, "-5");
        assert!(matches!(
            run(&parsed).unwrap_err().downcast_ref::<PriceError>(),
            Some(PriceError::NegativeReserve { .. })
        ));
    }

    #[test]
    fn test_decimal_places_upper_limit() {
        assert!(Args::try_parse_from(["encode-price-sqrt", "1", "2", "-d", "1000"]).is_ok());
        assert!(Args::try_parse_from(["encode-price-sqrt", "1", "2", "-d", "1001"]).is_err());
        assert!(
            Args::try_parse_from(["encode-price-sqrt", "1", "2", "--decimal-places", "4000000000"])
                .is_err()
        );
    }

    #[test]
    fn test_config_file() {
        let path = std::env::temp_dir().join(format!(
            "encode-price-sqrt-config-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{"precision": {"decimal_places": 40}}"#).unwrap();
        let path_arg = path.to_str().unwrap();

        let parsed = args(&["1", "2", "--config", path_arg]);
        assert_eq!(parsed.encoder_config().unwrap(), EncoderConfig::reference());
        assert_eq!(run(&parsed).unwrap(), "56022770974786139918731938227");

        // --decimal-places wins over the file
        let parsed = args(&["2", "1", "--config", path_arg, "-d", "2"]);
        assert_eq!(
            parsed.encoder_config().unwrap().precision,
            Precision::DecimalPlaces(2)
        );

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_config_file_errors() {
        let missing = args(&["1", "1", "--config", "/nonexistent/encoder.json"]);
        assert!(run(&missing).unwrap_err().to_string().contains("Failed to read config"));
    }
}
