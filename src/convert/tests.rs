#[cfg(test)]
mod tests {
    use super::super::converter::*;
    use super::super::error::ConvertError;
    use crate::format::NumberLocale;
    use crate::units::{units_for, Category, Unit};
    use proptest::prelude::*;

    fn unit_pair() -> impl Strategy<Value = (Category, Unit, Unit)> {
        prop::sample::select(Category::all().to_vec()).prop_flat_map(|category| {
            let units = units_for(category).to_vec();
            (
                Just(category),
                prop::sample::select(units.clone()),
                prop::sample::select(units),
            )
        })
    }

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(
            convert(0.0, Category::Temperature, Unit::Celsius, Unit::Fahrenheit).unwrap(),
            32.0
        );
        assert_eq!(
            convert(100.0, Category::Temperature, Unit::Celsius, Unit::Fahrenheit).unwrap(),
            212.0
        );
        assert_eq!(
            convert(-40.0, Category::Temperature, Unit::Fahrenheit, Unit::Celsius).unwrap(),
            -40.0
        );
        assert_eq!(
            convert(0.0, Category::Temperature, Unit::Kelvin, Unit::Celsius).unwrap(),
            -273.15
        );
    }

    #[test]
    fn test_miles_to_feet() {
        let feet = convert(1.0, Category::Distance, Unit::Miles, Unit::Feet).unwrap();
        assert!(
            ((feet - 5280.0) / 5280.0).abs() < 0.01,
            "Expected ~5280 ft, got {}",
            feet
        );
    }

    #[test]
    fn test_grams_to_kilograms() {
        assert_eq!(
            convert(1000.0, Category::Mass, Unit::Grams, Unit::Kilograms).unwrap(),
            1.0
        );
        let pounds = convert(1.0, Category::Mass, Unit::Kilograms, Unit::Pounds).unwrap();
        assert!((pounds - 2.20462262).abs() < 1e-6);
    }

    #[test]
    fn test_time_units() {
        assert_eq!(
            convert(2.0, Category::Time, Unit::Hours, Unit::Minutes).unwrap(),
            120.0
        );
        assert_eq!(
            convert(90.0, Category::Time, Unit::Seconds, Unit::Minutes).unwrap(),
            1.5
        );
    }

    #[test]
    fn test_hundred_kilometers_in_miles() {
        let miles = convert(100.0, Category::Distance, Unit::Kilometers, Unit::Miles).unwrap();
        assert!((miles - 62.1371).abs() < 1e-4, "got {}", miles);
    }

    #[test]
    fn test_non_finite_amount_is_invalid_input() {
        for amount in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                convert(amount, Category::Distance, Unit::Meters, Unit::Feet),
                Err(ConvertError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_unit_outside_category_is_rejected() {
        let err = convert(1.0, Category::Distance, Unit::Meters, Unit::Grams).unwrap_err();
        assert_eq!(
            err,
            ConvertError::CategoryMismatch {
                unit: Unit::Grams,
                category: Category::Distance
            }
        );
        assert!(ConversionRequest::new(1.0, Category::Time, Unit::Celsius, Unit::Hours).is_err());
    }

    #[test]
    fn test_overflow_is_out_of_range() {
        assert!(matches!(
            convert(f64::MAX, Category::Distance, Unit::Miles, Unit::Meters),
            Err(ConvertError::OutOfRange { .. })
        ));
        // Finite before rounding to 15 digits, infinite after
        assert!(matches!(
            convert(1.797693134862315e305, Category::Distance, Unit::Kilometers, Unit::Meters),
            Err(ConvertError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_request_between_infers_category() {
        let request = ConversionRequest::between(100.0, Unit::Celsius, Unit::Fahrenheit).unwrap();
        assert_eq!(request.category, Category::Temperature);
        assert_eq!(request.execute().unwrap(), 212.0);
    }

    #[test]
    fn test_parse_amount() {
        let en = NumberLocale::en_us();
        let de = NumberLocale::de_de();
        assert_eq!(parse_amount("100", &en).unwrap(), 100.0);
        assert_eq!(parse_amount(" 1,234.5 ", &en).unwrap(), 1234.5);
        assert_eq!(parse_amount("1.234,5", &de).unwrap(), 1234.5);
        assert_eq!(parse_amount("-0.25", &en).unwrap(), -0.25);
        assert_eq!(parse_amount("1e3", &en).unwrap(), 1000.0);

        for bad in ["", "   ", "abc", "12abc", "inf", "NaN", "-infinity"] {
            assert!(
                matches!(parse_amount(bad, &en), Err(ConvertError::InvalidInput(_))),
                "'{}' should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_parse_amount_grouping() {
        let en = NumberLocale::en_us();
        let de = NumberLocale::de_de();
        let posix = NumberLocale::posix();
        assert_eq!(parse_amount("1,234,567.25", &en).unwrap(), 1234567.25);
        assert_eq!(parse_amount("-12,000", &en).unwrap(), -12000.0);
        assert_eq!(parse_amount("1.234.567", &de).unwrap(), 1234567.0);
        assert_eq!(parse_amount("1234,5", &de).unwrap(), 1234.5);

        for bad in ["1,2,3", ",123", "1234,567", "1,23", "1.5,000", "1,000.000,5"] {
            assert!(
                matches!(parse_amount(bad, &en), Err(ConvertError::InvalidInput(_))),
                "'{}' should be rejected in en-US",
                bad
            );
        }
        for bad in ["1.5", "12.34,5", "1,5.000"] {
            assert!(
                matches!(parse_amount(bad, &de), Err(ConvertError::InvalidInput(_))),
                "'{}' should be rejected in de-DE",
                bad
            );
        }
        assert!(parse_amount("1,000", &posix).is_err());
    }

    proptest! {
        #[test]
        fn prop_round_trip((category, from, to) in unit_pair(), amount in -1.0e6f64..1.0e6) {
            let there = convert(amount, category, from, to).unwrap();
            let back = convert(there, category, to, from).unwrap();
            let tolerance = 1e-9 * amount.abs().max(1.0);
            prop_assert!(
                (back - amount).abs() <= tolerance,
                "{} {:?} -> {} {:?} -> {}", amount, from, there, to, back
            );
        }

        #[test]
        fn prop_identity_is_exact((category, unit, _) in unit_pair(), amount in any::<f64>()) {
            prop_assume!(amount.is_finite());
            prop_assert_eq!(convert(amount, category, unit, unit).unwrap(), amount);
        }
    }
}
