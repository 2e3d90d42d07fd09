mod tests {
    use logo_light::LOGO_LED_COUNT;
    use logo_light::color::PackedColor;
    use logo_light::ws2812::{
        BITS_PER_LED, PulseBuffer, PulseTiming, RESET_LEN, RESET_PULSE, decode, encode,
        pulse_buffer_len,
    };

    const TIMING: PulseTiming = PulseTiming::for_timer_clock(48_000_000);

    #[test]
    fn test_timing_for_48mhz() {
        assert_eq!(TIMING.period, 60);
        assert_eq!(TIMING.zero, 19);
        assert_eq!(TIMING.one, 38);
        assert_eq!(TIMING.auto_reload(), 59);
        assert_eq!(PulseTiming::default(), TIMING);
        assert!(TIMING.zero < TIMING.one && TIMING.one < TIMING.period);
    }

    #[test]
    fn test_buffer_length() {
        assert_eq!(pulse_buffer_len(LOGO_LED_COUNT), 1874);

        let colors = [PackedColor::OFF; 3];
        let mut pulses = PulseBuffer::<{ pulse_buffer_len(3) }>::new();
        encode(&colors, TIMING, &mut pulses);
        assert_eq!(pulses.len(), 3 * BITS_PER_LED + RESET_LEN);
        assert!(
            pulses.as_slice()[..3 * BITS_PER_LED]
                .iter()
                .all(|&p| p == TIMING.zero)
        );
    }

    #[test]
    fn test_grb_msb_first() {
        // r = 0b1001_0110, g = 0, b = 0b0000_0001
        let colors = [PackedColor::from_channels(150, 0, 1)];
        let mut pulses = PulseBuffer::<{ pulse_buffer_len(1) }>::new();
        encode(&colors, TIMING, &mut pulses);

        let (z, o) = (TIMING.zero, TIMING.one);
        let slice = pulses.as_slice();
        assert_eq!(&slice[0..8], &[z; 8]);
        assert_eq!(&slice[8..16], &[o, z, z, o, z, o, o, z]);
        assert_eq!(&slice[16..24], &[z, z, z, z, z, z, z, o]);
    }

    #[test]
    fn test_reset_gap() {
        let colors = [PackedColor::from_channels(255, 255, 255); 2];
        let mut pulses = PulseBuffer::<{ pulse_buffer_len(2) }>::new();
        encode(&colors, TIMING, &mut pulses);

        let (data, gap) = pulses.as_slice().split_at(2 * BITS_PER_LED);
        assert!(data.iter().all(|&p| p == TIMING.one));
        assert_eq!(gap.len(), RESET_LEN);
        assert!(gap.iter().all(|&p| p == RESET_PULSE));
    }

    #[test]
    fn test_reencode_replaces_previous_frame() {
        let mut pulses = PulseBuffer::<{ pulse_buffer_len(1) }>::new();
        encode(&[PackedColor::from_channels(255, 255, 255)], TIMING, &mut pulses);
        encode(&[PackedColor::OFF], TIMING, &mut pulses);

        assert_eq!(pulses.len(), pulse_buffer_len(1));
        assert!(pulses.as_slice()[..BITS_PER_LED].iter().all(|&p| p == TIMING.zero));
    }

    #[test]
    fn test_truncates_at_capacity() {
        let colors = [PackedColor::from_channels(1, 2, 3); 4];
        let mut pulses = PulseBuffer::<30>::new();
        encode(&colors, TIMING, &mut pulses);
        assert_eq!(pulses.len(), 30);
        assert_eq!(pulses.capacity(), 30);

        // Room for the data but not the whole gap
        let mut pulses = PulseBuffer::<{ BITS_PER_LED + 10 }>::new();
        encode(&colors[..1], TIMING, &mut pulses);
        assert_eq!(pulses.len(), BITS_PER_LED + 10);
    }

    #[test]
    fn test_decode_recovers_colors() {
        let colors = [
            PackedColor::from_channels(150, 0, 150),
            PackedColor::from_channels(17, 17, 88),
            PackedColor::from_channels(255, 128, 1),
        ];
        let mut pulses = PulseBuffer::<{ pulse_buffer_len(3) }>::new();
        encode(&colors, TIMING, &mut pulses);

        let mut decoded = [PackedColor::OFF; 3];
        assert_eq!(decode(pulses.as_slice(), TIMING, &mut decoded), 3);
        assert_eq!(decoded, colors);
    }
}
