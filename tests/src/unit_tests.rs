//! Unit-level properties of the shared gateway types: side and exchange
//! parsing, fixed-point behavior, payload normalization, and signing.

use proptest::prelude::*;
use rstest::*;
use serde_json::json;
use serial_test::serial;
use tradegate_core::prelude::*;
use tradegate_exchanges::binance::{BinanceCredentials, BinanceSigner};
use tradegate_exchanges::prelude::*;
use tradegate_gateway::aggregator::normalize_price;

mod parsing {
    use super::*;

    #[rstest]
    #[case("Buy", Side::Buy)]
    #[case("buy", Side::Buy)]
    #[case("BUY", Side::Buy)]
    #[case("Sell", Side::Sell)]
    #[case("SELL", Side::Sell)]
    fn test_side_parses_in_any_casing(#[case] token: &str, #[case] expected: Side) {
        assert_eq!(token.parse::<Side>().unwrap(), expected);
    }

    #[rstest]
    #[case("Hold")]
    #[case("short")]
    #[case("")]
    fn test_non_side_tokens_rejected(#[case] token: &str) {
        assert!(token.parse::<Side>().is_err());
    }

    #[rstest]
    #[case("binance", ExchangeId::Binance)]
    #[case("Binance", ExchangeId::Binance)]
    #[case("BYBIT", ExchangeId::Bybit)]
    fn test_exchange_parses_in_any_casing(#[case] token: &str, #[case] expected: ExchangeId) {
        assert_eq!(token.parse::<ExchangeId>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_exchange_rejected() {
        assert!("kraken".parse::<ExchangeId>().is_err());
    }

    #[test]
    fn test_side_wire_casing() {
        // Display casing is Bybit's wire casing; Binance adapters
        // upper-case it themselves.
        assert_eq!(Side::Buy.to_string(), "Buy");
        assert_eq!(Side::Sell.to_string(), "Sell");
    }
}

mod normalization {
    use super::*;

    #[rstest]
    #[case(json!({"symbol": "BTCUSDT", "price": "60000.01"}), Some("60000.01"))]
    #[case(json!({"symbol": "BTCUSDT", "price": 59999}), Some("59999"))]
    #[case(json!({"symbol": "BTCUSDT"}), None)]
    #[case(json!({"price": null}), None)]
    #[case(json!({"price": "not a number"}), None)]
    fn test_binance_price_extraction(
        #[case] raw: serde_json::Value,
        #[case] expected: Option<&str>,
    ) {
        let expected = expected.map(|s| Fixed::from_str_exact(s).unwrap());
        assert_eq!(normalize_price(ExchangeId::Binance, &raw), expected);
    }

    #[rstest]
    #[case(json!({"retCode": 0, "result": {"list": [{"lastPrice": "61000.5"}]}}), Some("61000.5"))]
    #[case(json!({"retCode": 0, "result": {"list": [{"lastPrice": null}]}}), None)]
    #[case(json!({"retCode": 0, "result": {"list": []}}), None)]
    #[case(json!({"retCode": 10001, "retMsg": "params error"}), None)]
    fn test_bybit_price_extraction(
        #[case] raw: serde_json::Value,
        #[case] expected: Option<&str>,
    ) {
        let expected = expected.map(|s| Fixed::from_str_exact(s).unwrap());
        assert_eq!(normalize_price(ExchangeId::Bybit, &raw), expected);
    }

    proptest! {
        #[test]
        fn prop_any_nonnegative_price_survives_normalization(units in 0u64..1_000_000, cents in 0u64..100) {
            let text = format!("{units}.{cents:02}");
            let raw = json!({"symbol": "BTCUSDT", "price": text});

            let price = normalize_price(ExchangeId::Binance, &raw).unwrap();
            prop_assert_eq!(price, Fixed::from_str_exact(&text).unwrap());
            prop_assert!(!price.is_negative());
        }

        #[test]
        fn prop_negative_prices_never_surface(units in 1u64..1_000_000) {
            let raw = json!({"price": format!("-{units}")});
            prop_assert_eq!(normalize_price(ExchangeId::Binance, &raw), None);
        }

        #[test]
        fn prop_fixed_string_round_trip(units in 0i64..10_000_000, scale in 0u32..9) {
            let value = Fixed::from_i64(units).round_dp(scale);
            let reparsed = Fixed::from_str_exact(&value.to_string()).unwrap();
            prop_assert_eq!(value, reparsed);
        }
    }
}

mod signing {
    use super::*;

    fn signer() -> BinanceSigner {
        let credentials =
            BinanceCredentials::new("test-key".to_string(), "test-secret".to_string());
        BinanceSigner::new(credentials).unwrap()
    }

    #[test]
    fn test_signature_is_deterministic_hex() {
        let signer = signer();
        let payload = "quantity=0.001&side=BUY&symbol=BTCUSDT&timestamp=1700000000000";

        let first = signer.sign(payload).unwrap();
        let second = signer.sign(payload).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(signer.validate_signature(payload, &first));
    }

    #[test]
    fn test_signature_changes_with_payload() {
        let signer = signer();
        let buy = signer.sign("side=BUY").unwrap();
        let sell = signer.sign("side=SELL").unwrap();
        assert_ne!(buy, sell);
    }
}

mod credentials {
    use super::*;

    #[test]
    #[serial]
    fn test_env_credentials_loaded() {
        std::env::set_var("BINANCE_API_KEY", "env-key");
        std::env::set_var("BINANCE_SECRET_KEY", "env-secret");

        let config = BinanceConfig::testnet().with_env_credentials().unwrap();
        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.api_secret, "env-secret");
        assert!(config.testnet);

        std::env::remove_var("BINANCE_API_KEY");
        std::env::remove_var("BINANCE_SECRET_KEY");
    }

    #[test]
    #[serial]
    fn test_missing_env_credentials_fail() {
        std::env::remove_var("BYBIT_API_KEY");
        std::env::remove_var("BYBIT_SECRET_KEY");

        let result = BybitConfig::testnet().with_env_credentials();
        assert!(matches!(
            result,
            Err(ExchangeError::MissingCredentials(_))
        ));
    }
}
