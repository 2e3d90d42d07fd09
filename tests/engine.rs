mod tests {
    use embassy_time::{Duration, Instant};
    use logo_light::color::{LogoPalette, PackedColor, Rgb, color, wheel};
    use logo_light::effect::MODE_COUNT;
    use logo_light::ws2812::{PulseTiming, RESET_LEN};
    use logo_light::{
        BrightnessLevel, EngineConfig, LOGO_LED_COUNT, LogoBoardEngine, LogoLayout, Mode,
        OutputDriver,
    };

    /// Output that keeps every frame it was asked to send
    #[derive(Default)]
    struct Recorder {
        frames: Vec<Vec<u16>>,
        fail: bool,
    }

    impl OutputDriver for Recorder {
        type Error = ();

        fn write(&mut self, pulses: &[u16]) -> Result<(), Self::Error> {
            self.frames.push(pulses.to_vec());
            if self.fail { Err(()) } else { Ok(()) }
        }
    }

    fn engine() -> LogoBoardEngine<Recorder> {
        LogoBoardEngine::new(Recorder::default(), &EngineConfig::default())
    }

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_static_logo_end_to_end() {
        let mut engine = engine();
        assert!(engine.run_effect(Mode::StaticLogo, at(0)));

        let colors = engine.colors();
        assert_eq!(colors.get(0).map(PackedColor::to_u32), Some(0x96_00_96));
        assert_eq!(colors.get(19).map(PackedColor::to_u32), Some(0x96_00_96));
        assert_eq!(colors.get(20).map(PackedColor::to_u32), Some(0x96_96_96));
        assert_eq!(colors.get(28).map(PackedColor::to_u32), Some(0x96_96_96));
        assert_eq!(colors.get(29).map(PackedColor::to_u32), Some(0x11_11_58));
        assert_eq!(colors.get(75).map(PackedColor::to_u32), Some(0x11_11_58));

        let frames = &engine.output().frames;
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].len(), 1874);
        assert_eq!(engine.pulses(), frames[0].as_slice());
        assert!(frames[0][1874 - RESET_LEN..].iter().all(|&p| p == 0));

        // Painted once: later steps send nothing
        assert!(!engine.run_effect(Mode::StaticLogo, at(5_000)));
        assert_eq!(engine.output().frames.len(), 1);
    }

    #[test]
    fn test_not_due_sends_nothing() {
        let mut engine = engine();
        assert!(engine.run_effect(Mode::Rainbow, at(100)));
        let colors = engine.colors().clone();
        let pulses = engine.pulses().to_vec();

        for ms in 101..120 {
            assert!(!engine.run_effect(Mode::Rainbow, at(ms)));
        }
        assert_eq!(engine.output().frames.len(), 1);
        assert_eq!(engine.colors(), &colors);
        assert_eq!(engine.pulses(), pulses.as_slice());

        assert!(engine.run_effect(Mode::Rainbow, at(120)));
        assert_eq!(engine.output().frames.len(), 2);
    }

    #[test]
    fn test_rainbow_formula() {
        let mut engine = engine();
        let brightness = engine.brightness();

        for step in 0..6u64 {
            assert!(engine.run_effect(Mode::Rainbow, at(step * 20)));
            for index in [0usize, 1, 40, 75] {
                let hue = u8::try_from((index as u64 + 3 * step) % 256).unwrap();
                let expected = color(wheel(hue), brightness);
                assert_eq!(engine.colors().get(index), Some(expected));
            }
        }
        assert_eq!(engine.effects().rainbow.hue(), 18);
    }

    #[test]
    fn test_strobe_end_to_end() {
        let mut engine = engine();
        let layout = LogoLayout::default();
        let palette = LogoPalette::default();

        for step in 0..8u64 {
            assert!(engine.run_effect(Mode::Strobe, at(step * 150)));
            let colors = engine.colors();
            let a = colors.get(usize::from(layout.letter_a.start));
            let b = colors.get(usize::from(layout.letter_b.start));
            if step < 4 {
                assert_eq!(a, Some(color(palette.letter_a, 255)));
                assert_eq!(b, Some(PackedColor::OFF));
            } else {
                assert_eq!(a, Some(PackedColor::OFF));
                assert_eq!(b, Some(color(palette.letter_b, 255)));
            }
            assert_eq!(colors.get(50), Some(PackedColor::OFF));
        }
        assert_eq!(engine.output().frames.len(), 8);
    }

    #[test]
    fn test_mode_switch_keeps_effect_state() {
        let mut engine = engine();
        assert!(engine.run_effect(Mode::Rainbow, at(0)));
        assert!(engine.run_effect(Mode::Rainbow, at(20)));
        assert_eq!(engine.effects().rainbow.hue(), 6);

        assert!(engine.run_effect(Mode::StaticLogo, at(30)));
        assert_eq!(engine.active_mode(), Some(Mode::StaticLogo));

        // Back in rainbow: hue resumes, cadence still counts from 20 ms
        assert!(!engine.run_effect(Mode::Rainbow, at(35)));
        assert!(engine.run_effect(Mode::Rainbow, at(40)));
        assert_eq!(engine.effects().rainbow.hue(), 9);

        // Re-entering the static logo repaints it
        assert!(engine.run_effect(Mode::StaticLogo, at(50)));
        assert_eq!(
            engine.colors().get(0),
            Some(color(LogoPalette::default().letter_a, 150))
        );
    }

    #[test]
    fn test_brightness_change_repaints_static_logo() {
        let mut engine = engine();
        assert!(engine.run_effect(Mode::StaticLogo, at(0)));
        assert!(!engine.run_effect(Mode::StaticLogo, at(1)));

        let dimmest = BrightnessLevel::from_raw(0).unwrap_or_default();
        engine.set_brightness_level(dimmest);
        assert_eq!(engine.brightness(), 50);
        assert!(engine.run_effect(Mode::StaticLogo, at(2)));
        assert_eq!(
            engine.colors().get(20),
            Some(PackedColor::from_channels(50, 50, 50))
        );
    }

    #[test]
    fn test_unknown_raw_mode_runs_static_logo() {
        let mut engine = engine();
        assert!(engine.run_raw(200, at(0)));
        assert_eq!(engine.active_mode(), Some(Mode::StaticLogo));
        assert_eq!(
            engine.colors().get(29),
            Some(PackedColor::from_channels(17, 17, 88))
        );

        assert!(engine.run_raw(5, at(1)));
        assert_eq!(engine.active_mode(), Some(Mode::Rainbow));
    }

    #[test]
    fn test_clear_sends_dark_frame() {
        let mut engine = engine();
        assert!(engine.run_effect(Mode::StaticLogo, at(0)));
        engine.clear();

        assert!(engine.colors().as_slice().iter().all(|&c| c == PackedColor::OFF));
        let frames = &engine.output().frames;
        assert_eq!(frames.len(), 2);
        let timing = PulseTiming::default();
        assert!(frames[1][..LOGO_LED_COUNT * 24].iter().all(|&p| p == timing.zero));
    }

    #[test]
    fn test_failed_transmission_is_not_fatal() {
        let mut engine = engine();
        engine.output_mut().fail = true;
        assert!(engine.run_effect(Mode::Pulse, at(0)));
        assert!(engine.run_effect(Mode::Pulse, at(500)));
        assert_eq!(engine.output().frames.len(), 2);
    }

    #[test]
    fn test_custom_config() {
        let mut config = EngineConfig {
            palette: LogoPalette {
                letter_a: Rgb { r: 0, g: 255, b: 0 },
                ..LogoPalette::default()
            },
            brightness_level: BrightnessLevel::from_raw(4).unwrap_or_default(),
            ..EngineConfig::default()
        };
        config.timings.rainbow = Duration::from_millis(5);

        let mut engine = LogoBoardEngine::new(Recorder::default(), &config);
        assert!(engine.run_effect(Mode::StaticLogo, at(0)));
        assert_eq!(
            engine.colors().get(0),
            Some(PackedColor::from_channels(0, 255, 0))
        );

        assert!(engine.run_effect(Mode::Rainbow, at(10)));
        assert!(engine.run_effect(Mode::Rainbow, at(15)));
    }

    #[test]
    fn test_static_logo_retried_after_failed_send() {
        let mut engine = engine();
        engine.output_mut().fail = true;
        assert!(engine.run_effect(Mode::StaticLogo, at(0)));
        assert_eq!(engine.output().frames.len(), 1);

        engine.output_mut().fail = false;
        assert!(engine.run_effect(Mode::StaticLogo, at(1)));
        assert_eq!(engine.output().frames.len(), 2);
        assert_eq!(engine.output().frames[1], engine.output().frames[0]);

        // Delivered: nothing more to send
        assert!(!engine.run_effect(Mode::StaticLogo, at(2)));
        assert_eq!(engine.output().frames.len(), 2);

        // The repaint after a brightness change is retried the same way
        engine.output_mut().fail = true;
        engine.set_brightness_level(BrightnessLevel::from_raw(0).unwrap_or_default());
        assert!(engine.run_effect(Mode::StaticLogo, at(3)));
        engine.output_mut().fail = false;
        assert!(engine.run_effect(Mode::StaticLogo, at(4)));
        assert!(!engine.run_effect(Mode::StaticLogo, at(5)));
        assert_eq!(engine.output().frames.len(), 4);
        assert_eq!(
            engine.colors().get(20),
            Some(PackedColor::from_channels(50, 50, 50))
        );
    }

    #[test]
    fn test_rainbow_hue_wraps() {
        let mut engine = engine();
        let brightness = engine.brightness();

        for step in 0..86u64 {
            assert!(engine.run_effect(Mode::Rainbow, at(step * 20)));
            for index in 0..LOGO_LED_COUNT {
                let hue = u8::try_from((index as u64 + 3 * step) % 256).unwrap();
                let expected = color(wheel(hue), brightness);
                assert_eq!(engine.colors().get(index), Some(expected), "step {step} led {index}");
            }
        }
        // 86 steps of 3 is 258, one past a full turn of the wheel
        assert_eq!(engine.effects().rainbow.hue(), 2);
    }

    #[test]
    fn test_no_mode_sends_when_not_due() {
        for raw in 0..MODE_COUNT {
            let mode = Mode::from_raw(raw).unwrap();
            let mut engine = engine();
            assert!(engine.run_effect(mode, at(1_000)), "{mode:?} first step");

            let colors = engine.colors().clone();
            let pulses = engine.pulses().to_vec();
            let frames = engine.output().frames.len();

            assert!(!engine.run_effect(mode, at(1_001)), "{mode:?} sent early");
            assert_eq!(engine.colors(), &colors, "{mode:?} colors changed");
            assert_eq!(engine.pulses(), pulses.as_slice(), "{mode:?} pulses changed");
            assert_eq!(engine.output().frames.len(), frames, "{mode:?} frame sent");
        }
    }
}
