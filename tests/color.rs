mod tests {
    use dmx_rig_composer::color::{BLUE, GREEN, RED, Rgb, hsv_to_rgb, hue_to_rgb, wrap_unit};

    fn assert_close(actual: Rgb, expected: Rgb) {
        let near = |a: u8, b: u8| a.abs_diff(b) <= 1;
        assert!(
            near(actual.r, expected.r) && near(actual.g, expected.g) && near(actual.b, expected.b),
            "{:?} is not close to {:?}",
            actual,
            expected
        );
    }

    #[test]
    fn test_primary_hues() {
        assert_eq!(hue_to_rgb(0.0), RED);
        assert_close(hue_to_rgb(1.0 / 3.0), GREEN);
        assert_close(hue_to_rgb(2.0 / 3.0), BLUE);
        assert_eq!(hue_to_rgb(0.5), Rgb::new(0, 255, 255));
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(hue_to_rgb(1.0), hue_to_rgb(0.0));
        assert_eq!(hue_to_rgb(1.5), hue_to_rgb(0.5));
        assert_eq!(hue_to_rgb(-0.5), hue_to_rgb(0.5));
    }

    #[test]
    fn test_sectors_are_continuous() {
        let mut previous = hue_to_rgb(0.0);
        for step in 1..=600 {
            let color = hue_to_rgb(step as f32 / 600.0);
            assert!(color.r.abs_diff(previous.r) <= 3);
            assert!(color.g.abs_diff(previous.g) <= 3);
            assert!(color.b.abs_diff(previous.b) <= 3);
            previous = color;
        }
    }

    #[test]
    fn test_saturation_and_value() {
        assert_eq!(hsv_to_rgb(0.3, 0.0, 1.0), Rgb::new(255, 255, 255));
        assert_eq!(hsv_to_rgb(0.3, 1.0, 0.0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_wrap_unit() {
        assert_eq!(wrap_unit(0.0), 0.0);
        assert_eq!(wrap_unit(1.0), 0.0);
        assert_eq!(wrap_unit(1.25), 0.25);
        assert_eq!(wrap_unit(-0.25), 0.75);
    }
}
