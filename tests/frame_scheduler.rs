mod tests {
    use embedded_hal::digital::{Error, ErrorKind, ErrorType, InputPin};
    use rand::{SeedableRng, rngs::SmallRng};
    use ramp_light_composer::color::{BLACK, Rgb};
    use ramp_light_composer::{
        AnimationId, ConfigError, Duration, FrameScheduler, Instant, OutputDriver, RampConfig,
        SmartLedsOutput,
    };
    use smart_leds::SmartLedsWrite;

    #[derive(Debug)]
    struct PinFault;

    impl Error for PinFault {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    /// Digital input controlled by the test
    #[derive(Default)]
    struct MockPin {
        high: bool,
        failing: bool,
    }

    impl ErrorType for MockPin {
        type Error = PinFault;
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            if self.failing {
                return Err(PinFault);
            }
            Ok(self.high)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.is_high().map(|high| !high)
        }
    }

    #[derive(Default)]
    struct RecordingOutput {
        frames: Vec<Vec<Rgb>>,
    }

    impl OutputDriver for RecordingOutput {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames.push(colors.to_vec());
        }
    }

    type TestScheduler = FrameScheduler<RecordingOutput, MockPin, SmallRng, 40>;

    fn config() -> RampConfig {
        RampConfig {
            strip_len: 10,
            ..RampConfig::DEFAULT
        }
    }

    /// Default config treats a low pin as an obstructed ramp
    fn scheduler(high: bool) -> TestScheduler {
        let pin = MockPin {
            high,
            failing: false,
        };
        match FrameScheduler::new(
            &config(),
            RecordingOutput::default(),
            pin,
            SmallRng::seed_from_u64(42),
        ) {
            Ok(scheduler) => scheduler,
            Err(err) => panic!("config rejected: {err}"),
        }
    }

    #[test]
    fn test_rejects_layout_larger_than_buffer() {
        let result: Result<TestScheduler, _> = FrameScheduler::new(
            &RampConfig::DEFAULT,
            RecordingOutput::default(),
            MockPin::default(),
            SmallRng::seed_from_u64(1),
        );
        assert!(matches!(
            result,
            Err(ConfigError::StripTooLong {
                requested: 60,
                capacity: 40
            })
        ));
    }

    #[test]
    fn test_initial_animation_follows_sensor() {
        assert_eq!(scheduler(true).renderer().animation_id(), AnimationId::Chase);
        assert_eq!(scheduler(false).renderer().animation_id(), AnimationId::Glow);
    }

    #[test]
    fn test_failed_first_read_starts_idle() {
        let pin = MockPin {
            high: true,
            failing: true,
        };
        let result: Result<TestScheduler, _> = FrameScheduler::new(
            &config(),
            RecordingOutput::default(),
            pin,
            SmallRng::seed_from_u64(1),
        );
        let Ok(scheduler) = result else {
            panic!("config rejected");
        };
        assert_eq!(scheduler.renderer().animation_id(), AnimationId::Idle);
    }

    #[test]
    fn test_first_tick_flushes_without_rendering() {
        let mut scheduler = scheduler(true);
        let result = scheduler.tick(Instant::from_millis(0));

        assert!(!result.rendered);
        assert!(result.flushed);
        assert_eq!(result.switched, None);
        assert_eq!(result.sleep_duration, Duration::from_millis(40));
        assert_eq!(scheduler.output().frames, [vec![BLACK; 20]]);
    }

    #[test]
    fn test_flushes_only_rendered_frames() {
        let mut scheduler = scheduler(true);
        scheduler.tick(Instant::from_millis(0));

        let result = scheduler.tick(Instant::from_millis(20));
        assert!(!result.rendered);
        assert!(!result.flushed);
        assert_eq!(result.sleep_duration, Duration::from_millis(20));

        let result = scheduler.tick(Instant::from_millis(40));
        assert!(result.rendered);
        assert!(result.flushed);
        assert_eq!(scheduler.output().frames.len(), 2);
    }

    #[test]
    fn test_sensor_change_switches_after_cooldown() {
        let mut scheduler = scheduler(true);
        scheduler.tick(Instant::from_millis(0));
        scheduler.sensor_mut().pin_mut().high = false;

        let mut switches = Vec::new();
        for t in (10..=1000).step_by(10) {
            let result = scheduler.tick(Instant::from_millis(t));
            if let Some(animation) = result.switched {
                switches.push((t, animation));
                assert_eq!(result.sleep_duration, Duration::from_millis(0));
                assert_eq!(scheduler.renderer().frame(), &[BLACK; 20]);
            }
        }

        assert_eq!(switches, [(610, AnimationId::Glow)]);
        assert_eq!(scheduler.renderer().animation_id(), AnimationId::Glow);
        assert_eq!(scheduler.selector().current(), AnimationId::Glow);
    }

    #[test]
    fn test_read_failure_keeps_animation() {
        let mut scheduler = scheduler(true);
        scheduler.tick(Instant::from_millis(0));
        {
            let pin = scheduler.sensor_mut().pin_mut();
            pin.high = false;
            pin.failing = true;
        }

        for t in (10..=2000).step_by(10) {
            let result = scheduler.tick(Instant::from_millis(t));
            assert_eq!(result.switched, None);
        }
        assert_eq!(scheduler.renderer().animation_id(), AnimationId::Chase);
        assert_eq!(scheduler.selector().flips(), 0);
    }

    #[derive(Default)]
    struct FakeStrip {
        written: Vec<Rgb>,
        writes: usize,
    }

    impl SmartLedsWrite for FakeStrip {
        type Error = ();
        type Color = Rgb;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            self.writes += 1;
            self.written = iterator.into_iter().map(Into::into).collect();
            Ok(())
        }
    }

    #[test]
    fn test_smart_leds_output_forwards_frames() {
        let colors = [Rgb { r: 1, g: 2, b: 3 }, BLACK];
        let mut output = SmartLedsOutput::new(FakeStrip::default());
        output.write(&colors);
        output.write(&colors);

        let strip = output.into_inner();
        assert_eq!(strip.writes, 2);
        assert_eq!(strip.written, colors);
    }

    #[test]
    fn test_scheduler_drives_smart_leds_writer() {
        let result: Result<FrameScheduler<_, MockPin, SmallRng, 40>, _> = FrameScheduler::new(
            &config(),
            SmartLedsOutput::new(FakeStrip::default()),
            MockPin::default(),
            SmallRng::seed_from_u64(9),
        );
        let Ok(mut scheduler) = result else {
            panic!("config rejected");
        };

        // Low pin reads as obstructed, so the ramp glows
        for t in (0..=100).step_by(25) {
            scheduler.tick(Instant::from_millis(t));
        }
        assert_eq!(scheduler.output().writer().writes, 5);
        assert_eq!(scheduler.output().writer().written.len(), 20);
    }
}
