mod tests {
    use ohm_led::color::{
        BLACK, HEAT_PALETTE, Rgb, blend_colors, color_from_palette, fade_to_black_by, fill_rainbow,
        heat_color, hsv, rgb_from_u32,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_blend_colors() {
        assert_eq!(blend_colors(RED, BLUE, 0), RED);
        assert_eq!(blend_colors(RED, BLUE, 255), BLUE);
        assert_eq!(
            blend_colors(RED, BLUE, 128),
            Rgb {
                r: 127,
                g: 0,
                b: 128
            }
        );

        assert_eq!(
            blend_colors(BLACK, WHITE, 128),
            Rgb {
                r: 128,
                g: 128,
                b: 128
            }
        );
        assert_eq!(blend_colors(WHITE, BLACK, 255), BLACK);
        assert_eq!(blend_colors(WHITE, BLACK, 0), WHITE);
    }

    #[test]
    fn test_fade_to_black_by() {
        let mut leds = [WHITE; 3];
        fade_to_black_by(&mut leds, 0);
        assert_eq!(leds, [WHITE; 3]);

        fade_to_black_by(&mut leds, 128);
        assert_eq!(
            leds,
            [Rgb {
                r: 127,
                g: 127,
                b: 127
            }; 3]
        );

        fade_to_black_by(&mut leds, 255);
        assert_eq!(leds, [BLACK; 3]);
    }

    #[test]
    fn test_fill_rainbow() {
        let mut leds = [BLACK; 4];
        fill_rainbow(&mut leds, 250, 3, 240, 200);

        assert_eq!(leds[0], hsv(250, 240, 200));
        assert_eq!(leds[1], hsv(253, 240, 200));
        // Hue wraps around the wheel
        assert_eq!(leds[2], hsv(0, 240, 200));
        assert_eq!(leds[3], hsv(3, 240, 200));
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(
            rgb_from_u32(0x12_34_56),
            Rgb {
                r: 0x12,
                g: 0x34,
                b: 0x56
            }
        );
    }

    #[test]
    fn test_color_from_palette() {
        assert_eq!(color_from_palette(&HEAT_PALETTE, 0), BLACK);
        assert_eq!(color_from_palette(&HEAT_PALETTE, 16), rgb_from_u32(0x33_00_00));
        assert_eq!(color_from_palette(&HEAT_PALETTE, 240), WHITE);
        // Halfway between the first two stops
        assert_eq!(color_from_palette(&HEAT_PALETTE, 8), Rgb { r: 26, g: 0, b: 0 });
    }

    #[test]
    fn test_heat_color_ramp() {
        assert_eq!(heat_color(0), BLACK);
        assert_eq!(heat_color(255), WHITE);

        // Hotter never gets darker on the red channel
        let mut previous = 0;
        for heat in 0..=255u8 {
            let color = heat_color(heat);
            assert!(color.r >= previous, "red dropped at heat {heat}");
            previous = color.r;
        }
    }
}
