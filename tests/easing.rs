mod tests {
    use ohm_led::easing::{Easing, ease_time, triangle_progress};

    #[test]
    fn test_curve_boundaries() {
        for easing in Easing::ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{} at 0", easing.as_str());
            assert_eq!(easing.apply(1.0), 1.0, "{} at 1", easing.as_str());
        }
    }

    #[test]
    fn test_curves_stay_in_unit_range() {
        for easing in Easing::ALL {
            for step in 0..=100 {
                let t = step as f32 / 100.0;
                let value = easing.apply(t);
                assert!(
                    (0.0..=1.0).contains(&value),
                    "{} left [0, 1] at t = {t}: {value}",
                    easing.as_str()
                );
            }
        }
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        assert_eq!(Easing::InQuad.apply(-0.5), 0.0);
        assert_eq!(Easing::InQuad.apply(1.5), 1.0);
        assert_eq!(Easing::Linear.apply(f32::NAN), 0.0);
    }

    #[test]
    fn test_curve_shapes() {
        assert_eq!(Easing::Linear.apply(0.25), 0.25);
        assert_eq!(Easing::InQuad.apply(0.5), 0.25);
        assert_eq!(Easing::OutQuad.apply(0.5), 0.75);
        assert_eq!(Easing::InOutQuad.apply(0.25), 0.125);
        assert_eq!(Easing::InCubic.apply(0.5), 0.125);
        assert!((Easing::InExpo.apply(0.5) - 0.031_25).abs() < 1e-6);
        assert!(Easing::InCirc.apply(0.5) < 0.5);
        assert!(Easing::OutBounce.apply(0.5) > 0.5);
    }

    #[test]
    fn test_names_round_trip() {
        for easing in Easing::ALL {
            assert_eq!(Easing::parse_from_str(easing.as_str()), Some(easing));
        }
        assert_eq!(Easing::parse_from_str("in-out-quad"), Some(Easing::InOutQuad));
        assert_eq!(Easing::parse_from_str("out-circ"), Some(Easing::OutCirc));
        assert_eq!(Easing::parse_from_str("InQuad"), None);
        assert_eq!(Easing::parse_from_str("wobble"), None);
        assert_eq!(Easing::parse_from_str(""), None);
        assert_eq!(Easing::default(), Easing::InOutQuad);
    }

    #[test]
    fn test_zero_period_freezes_at_zero() {
        assert_eq!(triangle_progress(1234, 0), None);
        for easing in Easing::ALL {
            for time_ms in [0, 1, 999, 123_456] {
                assert_eq!(ease_time(easing, 0, time_ms, 255), 0);
            }
        }
    }

    #[test]
    fn test_triangle_wave() {
        let period = 1000;
        assert_eq!(ease_time(Easing::Linear, period, 0, 255), 0);
        assert_eq!(ease_time(Easing::Linear, period, 999, 255), 255);
        // Reflected overshoot is clamped
        assert_eq!(ease_time(Easing::Linear, period, 1000, 255), 255);
        assert_eq!(ease_time(Easing::Linear, period, 1998, 255), 1);
        assert_eq!(ease_time(Easing::Linear, period, 2000, 255), 0);
    }

    #[test]
    fn test_period_of_one() {
        assert_eq!(ease_time(Easing::Linear, 1, 0, 100), 0);
        assert_eq!(ease_time(Easing::Linear, 1, 1, 100), 100);
        assert_eq!(ease_time(Easing::Linear, 1, 2, 100), 0);
    }

    #[test]
    fn test_repeats_every_two_periods() {
        for easing in Easing::ALL {
            for period in [7, 250, 5000] {
                for time_ms in [0, 3, 100, 4999, 7777] {
                    let double = 2 * u64::from(period);
                    assert_eq!(
                        ease_time(easing, period, time_ms, 255),
                        ease_time(easing, period, time_ms + double, 255),
                        "{} period {period} at {time_ms}",
                        easing.as_str()
                    );
                }
            }
        }
    }

    #[test]
    fn test_wave_is_a_palindrome() {
        let period: u32 = 300;
        for easing in Easing::ALL {
            for time_ms in 1..u64::from(period) {
                assert_eq!(
                    ease_time(easing, period, time_ms, 1000),
                    ease_time(easing, period, 2 * u64::from(period) - time_ms, 1000),
                );
            }
        }
    }

    #[test]
    fn test_result_never_exceeds_multiplier() {
        for easing in Easing::ALL {
            for time_ms in (0..4000).step_by(13) {
                assert!(ease_time(easing, 1000, time_ms, 15) <= 15);
            }
        }
    }
}
