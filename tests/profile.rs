mod tests {
    use light_therapy::{
        Rgb, TimeBucket, compute_auto_adjustment, resolve_profile, resolve_thresholds,
    };

    fn expected_bucket(hour: u8) -> TimeBucket {
        match hour {
            6 => TimeBucket::Sunrise,
            7..=9 => TimeBucket::Morning,
            10..=15 => TimeBucket::Midday,
            16..=18 => TimeBucket::GoldenHour,
            19 => TimeBucket::Dusk,
            _ => TimeBucket::Night,
        }
    }

    #[test]
    fn test_every_hour_has_exactly_one_bucket() {
        for hour in 0..24 {
            let matching = TimeBucket::ALL
                .iter()
                .filter(|bucket| **bucket == TimeBucket::from_hour(hour))
                .count();
            assert_eq!(matching, 1, "hour {hour}");
            assert_eq!(TimeBucket::from_hour(hour), expected_bucket(hour), "hour {hour}");
        }
    }

    #[test]
    fn test_bucket_edges() {
        assert_eq!(TimeBucket::from_hour(5), TimeBucket::Night);
        assert_eq!(TimeBucket::from_hour(6), TimeBucket::Sunrise);
        assert_eq!(TimeBucket::from_hour(9), TimeBucket::Morning);
        assert_eq!(TimeBucket::from_hour(10), TimeBucket::Midday);
        assert_eq!(TimeBucket::from_hour(15), TimeBucket::Midday);
        assert_eq!(TimeBucket::from_hour(16), TimeBucket::GoldenHour);
        assert_eq!(TimeBucket::from_hour(19), TimeBucket::Dusk);
        assert_eq!(TimeBucket::from_hour(20), TimeBucket::Night);
        assert_eq!(TimeBucket::from_hour(0), TimeBucket::Night);
        assert_eq!(TimeBucket::from_hour(23), TimeBucket::Night);
        assert_eq!(TimeBucket::from_hour(42), TimeBucket::Night);
    }

    #[test]
    fn test_profiles_match_buckets() {
        for hour in 0..24 {
            let bucket = expected_bucket(hour);
            assert_eq!(resolve_profile(hour), bucket.profile());
            assert_eq!(resolve_thresholds(hour), bucket.thresholds());
        }
    }

    #[test]
    fn test_profile_values() {
        let midday = resolve_profile(12);
        assert_eq!(midday.brightness, 200);
        assert_eq!(midday.color, Rgb::new(255, 255, 255));

        let sunrise = resolve_profile(6);
        assert_eq!(sunrise.brightness, 100);
        assert_eq!(sunrise.color, Rgb::new(255, 100, 0));

        let night = resolve_profile(2);
        assert_eq!(night.brightness, 50);
        assert_eq!(night.color, Rgb::new(50, 50, 100));

        for bucket in TimeBucket::ALL {
            let brightness = bucket.profile().brightness;
            assert!((50..=200).contains(&brightness), "{}", bucket.as_str());
            let limits = bucket.thresholds();
            assert!(limits.too_dark < limits.too_bright, "{}", bucket.as_str());
        }
    }

    #[test]
    fn test_auto_adjustment_midday_too_bright() {
        assert_eq!(compute_auto_adjustment(12, 500.0), 150);
    }

    #[test]
    fn test_auto_adjustment_night_too_dark() {
        assert_eq!(compute_auto_adjustment(22, 5.0), 100);
    }

    #[test]
    fn test_auto_adjustment_within_window() {
        assert_eq!(compute_auto_adjustment(12, 200.0), 200);
        // Thresholds themselves are inside the window
        assert_eq!(compute_auto_adjustment(12, 100.0), 200);
        assert_eq!(compute_auto_adjustment(12, 350.0), 200);
    }

    #[test]
    fn test_auto_adjustment_extreme_readings() {
        for hour in 0..24 {
            for lux in [
                f32::MIN,
                -1.0,
                0.0,
                f32::MAX,
                f32::INFINITY,
                f32::NEG_INFINITY,
                f32::NAN,
            ] {
                let target = resolve_profile(hour).brightness;
                let adjusted = compute_auto_adjustment(hour, lux);
                assert!(adjusted.abs_diff(target) <= 50, "hour {hour} lux {lux}");
            }
        }
        assert_eq!(compute_auto_adjustment(12, f32::NAN), 200);
        assert_eq!(compute_auto_adjustment(2, -10.0), 100);
        assert_eq!(compute_auto_adjustment(2, f32::INFINITY), 0);
    }
}
