mod tests {
    use logo_light::color::{PackedColor, Rgb, color, decay, scale_channel, wheel};
    use logo_light::LogoPalette;

    const MAGENTA: Rgb = Rgb {
        r: 255,
        g: 0,
        b: 255,
    };

    #[test]
    fn test_full_brightness_is_identity() {
        let rgb = Rgb {
            r: 12,
            g: 200,
            b: 255,
        };
        let packed = color(rgb, 255);
        assert_eq!(packed.to_rgb(), rgb);
        assert_eq!(packed.to_u32(), 0x0C_C8_FF);
    }

    #[test]
    fn test_zero_brightness_is_off() {
        assert_eq!(color(MAGENTA, 0), PackedColor::OFF);
        assert_eq!(color(Rgb { r: 255, g: 255, b: 255 }, 0).to_u32(), 0);
    }

    #[test]
    fn test_scaling_truncates() {
        assert_eq!(scale_channel(255, 150), 150);
        assert_eq!(scale_channel(30, 150), 17);
        assert_eq!(scale_channel(150, 150), 88);
        assert_eq!(scale_channel(1, 254), 0);

        let palette = LogoPalette::default();
        let background = color(palette.background, 150);
        assert_eq!(background, PackedColor::from_channels(17, 17, 88));
    }

    #[test]
    fn test_packed_layout() {
        let packed = PackedColor::from_channels(0x12, 0x34, 0x56);
        assert_eq!(packed.to_u32(), 0x12_34_56);
        assert_eq!((packed.r(), packed.g(), packed.b()), (0x12, 0x34, 0x56));
        assert_eq!(PackedColor::from_u32(0xFF12_3456), packed);
    }

    #[test]
    fn test_decay() {
        let faded = decay(PackedColor::from_channels(255, 100, 0));
        assert_eq!(faded, PackedColor::from_channels(216, 85, 0));

        let mut packed = PackedColor::from_channels(255, 255, 255);
        for _ in 0..64 {
            packed = decay(packed);
        }
        assert_eq!(packed, PackedColor::OFF);
    }

    #[test]
    fn test_wheel_segments() {
        assert_eq!(wheel(0), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(wheel(84), Rgb { r: 3, g: 252, b: 0 });
        assert_eq!(wheel(85), Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(wheel(169), Rgb { r: 0, g: 3, b: 252 });
        assert_eq!(wheel(170), Rgb { r: 0, g: 0, b: 255 });
        assert_eq!(wheel(255), Rgb { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_wheel_channels_sum_to_full() {
        for position in 0..=255u8 {
            let rgb = wheel(position);
            let sum = u16::from(rgb.r) + u16::from(rgb.g) + u16::from(rgb.b);
            assert_eq!(sum, 255, "position {position}");
        }
    }

    #[test]
    fn test_default_palette() {
        let palette = LogoPalette::default();
        assert_eq!(palette.letter_a, MAGENTA);
        assert_eq!(palette.letter_b, Rgb { r: 255, g: 255, b: 255 });
        assert_eq!(palette.background, Rgb { r: 30, g: 30, b: 150 });
    }
}
