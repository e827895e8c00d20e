mod tests {
    use embassy_time::Instant;
    use ohm_led::color::{BLACK, Rgb, heat_color, hsv};
    use ohm_led::easing::Easing;
    use ohm_led::effect::{Ball, EffectSet, RenderContext};
    use ohm_led::filter::{FilterProcessorConfig, PowerBudget, TYPICAL_LED_STRIP, estimate_power_mw};
    use ohm_led::math8::scale8;
    use ohm_led::renderer::{Renderer, RendererConfig};
    use ohm_led::state::{State, StateMode};

    const MAX_LEDS: usize = 128;
    const NUM_LEDS: usize = 16;

    fn state_with(mode: StateMode) -> State {
        let mut state = State::new();
        state.mode = mode;
        state.hue = 0;
        state.saturation = 255;
        state.value = 255;
        state.easing = Easing::Linear;
        state.period = 1000;
        state
    }

    fn render_at(effects: &mut EffectSet<MAX_LEDS>, state: &State, time_ms: u64) -> [Rgb; NUM_LEDS] {
        let mut leds = [BLACK; NUM_LEDS];
        let ctx = RenderContext {
            now: Instant::from_millis(time_ms),
            state,
        };
        effects.render(&ctx, &mut leds);
        leds
    }

    fn effects() -> EffectSet<MAX_LEDS> {
        EffectSet::new(0x5EED, true)
    }

    #[test]
    fn test_off_and_on() {
        let mut effects = effects();

        let state = state_with(StateMode::Off);
        assert_eq!(render_at(&mut effects, &state, 1234), [BLACK; NUM_LEDS]);

        let state = state_with(StateMode::On);
        assert_eq!(render_at(&mut effects, &state, 1234), [hsv(0, 255, 255); NUM_LEDS]);
    }

    #[test]
    fn test_pulse_fades_with_time() {
        let mut effects = effects();
        let state = state_with(StateMode::Pulse);

        assert_eq!(render_at(&mut effects, &state, 0), [hsv(0, 255, 255); NUM_LEDS]);
        assert_eq!(render_at(&mut effects, &state, 999), [BLACK; NUM_LEDS]);
        // And back up on the way down the triangle
        assert_eq!(render_at(&mut effects, &state, 2000), [hsv(0, 255, 255); NUM_LEDS]);
    }

    #[test]
    fn test_colorloop_walks_hue() {
        let mut effects = effects();
        let state = state_with(StateMode::Colorloop);

        assert_eq!(render_at(&mut effects, &state, 0), [hsv(0, 255, 255); NUM_LEDS]);

        let hue = state.ease_time(400, 255) as u8;
        assert_eq!(render_at(&mut effects, &state, 400), [hsv(hue, 255, 255); NUM_LEDS]);
    }

    #[test]
    fn test_rainbow_spreads_hues() {
        let mut effects = effects();
        let mut state = state_with(StateMode::Rainbow);
        state.value = 200;

        let leds = render_at(&mut effects, &state, 0);
        let delta = (255 / NUM_LEDS) as u8;
        for (i, led) in leds.iter().enumerate() {
            assert_eq!(*led, hsv(delta * i as u8, 240, 200));
        }
    }

    #[test]
    fn test_knight_rider_single_pixel() {
        let mut effects = effects();
        let state = state_with(StateMode::KnightRider);
        let lit = hsv(0, 255, 255);

        let leds = render_at(&mut effects, &state, 0);
        assert_eq!(leds[0], lit);

        let leds = render_at(&mut effects, &state, 999);
        assert_eq!(leds[NUM_LEDS - 1], lit);

        for time_ms in (0..3000).step_by(37) {
            let leds = render_at(&mut effects, &state, time_ms);
            assert_eq!(leds.iter().filter(|led| **led != BLACK).count(), 1);
        }
    }

    #[test]
    fn test_balls_seeded_once() {
        let mut effects = effects();
        let mut state = state_with(StateMode::Balls);
        state.num_balls = 10;

        assert!(effects.balls().is_none());
        render_at(&mut effects, &state, 0);
        let seeded = effects.balls().unwrap().to_vec();
        assert_eq!(seeded.len(), 10);

        for (i, ball) in seeded.iter().enumerate() {
            assert!((50..100).contains(&ball.speed));
            assert!(ball.time_offset < 2000);
            assert_eq!(usize::from(ball.hue), i * 255 / 10);
        }

        for time_ms in (0..1000).map(|frame| frame * 8) {
            let leds = render_at(&mut effects, &state, time_ms);
            let lit = leds.iter().filter(|led| **led != BLACK).count();
            assert!((1..=10).contains(&lit));
        }

        assert_eq!(effects.balls().unwrap(), seeded.as_slice());
    }

    #[test]
    fn test_single_ball_position() {
        let mut effects = effects();
        let state = state_with(StateMode::Balls);

        for time_ms in (0..5000).step_by(11) {
            let leds = render_at(&mut effects, &state, time_ms);
            let ball = effects.balls().unwrap()[0];
            let position = state.ease_time(ball.local_time(time_ms), 15) as usize;
            assert!(position < NUM_LEDS);
            assert_eq!(leds[position], hsv(ball.hue, 255, 255));
            assert_eq!(leds.iter().filter(|led| **led != BLACK).count(), 1);
        }
    }

    #[test]
    fn test_ball_clock_saturates() {
        let ball = Ball {
            time_offset: 1999,
            speed: 99,
            hue: 0,
        };

        assert_eq!(ball.local_time(0), 1999);
        assert_eq!(ball.local_time(100), 198 + 1999);
        assert_eq!(ball.local_time(u64::MAX), u64::MAX / 50 + 1999);
    }

        #[test]
    fn test_balls_disabled_renders_off() {
        let mut effects = EffectSet::<MAX_LEDS>::new(1, false);
        let state = state_with(StateMode::Balls);

        assert_eq!(render_at(&mut effects, &state, 500), [BLACK; NUM_LEDS]);
        assert!(effects.balls().is_none());
    }

    #[test]
    fn test_fire_without_sparks_stays_dark() {
        let mut effects = effects();
        let mut state = state_with(StateMode::Fire);
        state.fire_sparking = 0;

        for frame in 0..100 {
            assert_eq!(render_at(&mut effects, &state, frame * 8), [BLACK; NUM_LEDS]);
        }
    }

    #[test]
    fn test_fire_long_run() {
        let mut effects = effects();
        let mut state = state_with(StateMode::Fire);
        state.fire_sparking = 255;
        state.fire_cooling = 40;

        let mut ever_hot = false;
        for frame in 0..1000 {
            let leds = render_at(&mut effects, &state, frame * 8);
            let heat = effects.fire_heat();
            assert_eq!(heat.len(), NUM_LEDS);
            for (led, cell) in leds.iter().zip(heat) {
                assert_eq!(*led, heat_color(*cell));
            }
            ever_hot |= heat.iter().any(|cell| *cell > 0);
        }
        assert!(ever_hot);
    }

    #[test]
    fn test_fire_heat_survives_mode_switch() {
        let mut effects = effects();
        let mut state = state_with(StateMode::Fire);
        state.fire_sparking = 255;

        for frame in 0..50 {
            render_at(&mut effects, &state, frame * 8);
        }
        let heat = effects.fire_heat().to_vec();

        state.mode = StateMode::Rainbow;
        render_at(&mut effects, &state, 500);
        assert_eq!(effects.fire_heat(), heat.as_slice());
    }

    #[test]
    fn test_renderer_tracks_strip_length() {
        let mut renderer = Renderer::<MAX_LEDS>::new(&RendererConfig::default());
        let state = state_with(StateMode::On);

        let frame = renderer.render(Instant::from_millis(0), &state, 16);
        assert_eq!(frame.len(), 16);

        let frame = renderer.render(Instant::from_millis(8), &state, 8);
        assert_eq!(frame, [hsv(0, 255, 255); 8]);

        // Longer than the buffer is clamped
        let frame = renderer.render(Instant::from_millis(16), &state, 500);
        assert_eq!(frame.len(), MAX_LEDS);
    }

    #[test]
    fn test_renderer_color_correction() {
        let config = RendererConfig {
            filters: FilterProcessorConfig {
                color_correction: TYPICAL_LED_STRIP,
                power: None,
            },
            ..RendererConfig::default()
        };
        let mut renderer = Renderer::<MAX_LEDS>::new(&config);
        let state = state_with(StateMode::On);
        let lit = hsv(0, 255, 255);

        let frame = renderer.render(Instant::from_millis(0), &state, 4);
        let expected = Rgb {
            r: scale8(lit.r, 255),
            g: scale8(lit.g, 176),
            b: scale8(lit.b, 240),
        };
        assert_eq!(frame, [expected; 4]);
    }

    #[test]
    fn test_power_estimate() {
        let white = [Rgb {
            r: 255,
            g: 255,
            b: 255,
        }; NUM_LEDS];
        assert_eq!(estimate_power_mw(&white), 3426);
        assert_eq!(estimate_power_mw(&[BLACK; NUM_LEDS]), 80);
        assert_eq!(estimate_power_mw(&[]), 0);
    }

    #[test]
    fn test_renderer_power_limit() {
        let budget = PowerBudget {
            volts: 5,
            milliamps: 100,
        };
        assert_eq!(budget.milliwatts(), 500);

        let config = RendererConfig {
            filters: FilterProcessorConfig {
                power: Some(budget),
                ..FilterProcessorConfig::default()
            },
            ..RendererConfig::default()
        };
        let mut renderer = Renderer::<MAX_LEDS>::new(&config);
        let mut unlimited = Renderer::<MAX_LEDS>::new(&RendererConfig::default());
        let state = state_with(StateMode::On);

        let full = unlimited
            .render(Instant::from_millis(0), &state, NUM_LEDS)
            .to_vec();
        assert!(estimate_power_mw(&full) > budget.milliwatts());

        let frame = renderer.render(Instant::from_millis(0), &state, NUM_LEDS);
        assert!(frame.iter().all(|led| *led == frame[0]));
        assert!(estimate_power_mw(frame) < estimate_power_mw(&full));
        assert!(frame[0].r <= full[0].r && frame[0].g <= full[0].g && frame[0].b <= full[0].b);
        assert_ne!(frame[0], full[0]);

        // A frame within budget is left alone
        let frame = renderer.render(Instant::from_millis(8), &state, 1);
        assert_eq!(frame, &full[..1]);
    }
}
