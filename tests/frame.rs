mod tests {
    use ramp_light_composer::color::{BLACK, Rgb};
    use ramp_light_composer::{Frame, RampLayout, Strip};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    fn marker(v: u8) -> Rgb {
        Rgb { r: v, g: 0, b: 0 }
    }

    #[test]
    fn test_layout_ranges() {
        let layout = RampLayout::new(4);
        assert_eq!(layout.count(), 8);
        assert_eq!(layout.range(Strip::Left), 0..4);
        assert_eq!(layout.range(Strip::Right), 4..8);
    }

    #[test]
    fn test_layout_right_strip_is_mirrored() {
        let layout = RampLayout::new(4);
        assert_eq!(layout.index_of(Strip::Left, 0), Some(0));
        assert_eq!(layout.index_of(Strip::Left, 3), Some(3));
        assert_eq!(layout.index_of(Strip::Right, 0), Some(7));
        assert_eq!(layout.index_of(Strip::Right, 3), Some(4));
        assert_eq!(layout.index_of(Strip::Right, 4), None);
    }

    #[test]
    fn test_set_at_uses_strip_positions() {
        let layout = RampLayout::new(3);
        let mut leds = [BLACK; 6];
        let mut frame = Frame::new(&mut leds, layout);
        frame.set_at(Strip::Left, 0, RED);
        frame.set_at(Strip::Right, 0, BLUE);
        assert_eq!(frame.get_at(Strip::Right, 0), BLUE);
        assert_eq!(leds, [RED, BLACK, BLACK, BLACK, BLACK, BLUE]);
    }

    #[test]
    fn test_shift_toward_top_left() {
        let layout = RampLayout::new(3);
        let mut leds = [marker(1), marker(2), marker(3), BLACK, BLACK, BLACK];
        let mut frame = Frame::new(&mut leds, layout);
        frame.shift_toward_top(Strip::Left);
        assert_eq!(frame.get_at(Strip::Left, 1), marker(1));
        assert_eq!(frame.get_at(Strip::Left, 2), marker(2));
        // Entry keeps its color until a new one is injected
        assert_eq!(frame.get_at(Strip::Left, 0), marker(1));
        // Right strip untouched
        assert_eq!(&frame.as_slice()[3..], &[BLACK; 3]);
    }

    #[test]
    fn test_shift_toward_top_right() {
        let layout = RampLayout::new(3);
        // Right strip buffer order: top .. entry
        let mut leds = [BLACK, BLACK, BLACK, marker(3), marker(2), marker(1)];
        let mut frame = Frame::new(&mut leds, layout);
        frame.shift_toward_top(Strip::Right);
        assert_eq!(frame.get_at(Strip::Right, 0), marker(1));
        assert_eq!(frame.get_at(Strip::Right, 1), marker(1));
        assert_eq!(frame.get_at(Strip::Right, 2), marker(2));
        assert_eq!(&frame.as_slice()[..3], &[BLACK; 3]);
    }

    #[test]
    fn test_fill_strip_and_clear() {
        let layout = RampLayout::new(2);
        let mut leds = [BLACK; 4];
        let mut frame = Frame::new(&mut leds, layout);
        frame.fill_strip(Strip::Right, BLUE);
        assert_eq!(frame.as_slice(), &[BLACK, BLACK, BLUE, BLUE]);
        frame.fill(RED);
        assert_eq!(frame.as_slice(), &[RED; 4]);
        frame.clear();
        assert_eq!(frame.as_slice(), &[BLACK; 4]);
    }

    #[test]
    fn test_get_out_of_range_is_black() {
        let layout = RampLayout::new(2);
        let mut leds = [RED; 4];
        let frame = Frame::new(&mut leds, layout);
        assert_eq!(frame.get(10), BLACK);
        assert_eq!(frame.get_at(Strip::Left, 5), BLACK);
    }
}
