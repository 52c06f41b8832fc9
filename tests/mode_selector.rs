mod tests {
    use ramp_light_composer::{
        AnimationId, DebounceConfig, Duration, InstabilityPolicy, ModeSelector, RampConfig,
        SensorState,
    };

    const STEP: Duration = Duration::from_millis(10);

    fn flip(state: SensorState) -> SensorState {
        match state {
            SensorState::Open => SensorState::Closed,
            _ => SensorState::Open,
        }
    }

    fn hold(selector: &mut ModeSelector, state: SensorState, steps: usize) -> Vec<AnimationId> {
        (0..steps)
            .filter_map(|_| selector.evaluate(state, STEP))
            .collect()
    }

    #[test]
    fn test_initial_state_picks_animation() {
        let config = RampConfig::DEFAULT;
        assert_eq!(
            ModeSelector::new(SensorState::Open, &config).current(),
            AnimationId::Chase
        );
        assert_eq!(
            ModeSelector::new(SensorState::Closed, &config).current(),
            AnimationId::Glow
        );
        assert_eq!(
            ModeSelector::new(SensorState::Unknown, &config).current(),
            AnimationId::Idle
        );
    }

    #[test]
    fn test_steady_reading_never_switches() {
        let mut selector = ModeSelector::new(SensorState::Open, &RampConfig::DEFAULT);
        assert!(hold(&mut selector, SensorState::Open, 500).is_empty());
        assert_eq!(selector.countdown(), Duration::from_millis(0));
    }

    #[test]
    fn test_unknown_reading_is_ignored() {
        let mut selector = ModeSelector::new(SensorState::Open, &RampConfig::DEFAULT);
        assert!(hold(&mut selector, SensorState::Unknown, 100).is_empty());
        assert_eq!(selector.flips(), 0);
    }

    #[test]
    fn test_single_flip_switches_after_cooldown() {
        let mut selector = ModeSelector::new(SensorState::Open, &RampConfig::DEFAULT);

        // The flip itself plus 59 steps leaves 10ms of cooldown
        assert!(hold(&mut selector, SensorState::Closed, 60).is_empty());
        assert_eq!(selector.desired(), SensorState::Closed);
        assert_eq!(selector.countdown(), Duration::from_millis(10));

        assert_eq!(
            hold(&mut selector, SensorState::Closed, 1),
            [AnimationId::Glow]
        );
        assert_eq!(selector.locked(), SensorState::Closed);
        assert_eq!(selector.desired(), SensorState::Unknown);
        assert_eq!(selector.instability(), 0.0);

        assert_eq!(
            hold(&mut selector, SensorState::Open, 61),
            [AnimationId::Chase]
        );
        assert_eq!(selector.locked(), SensorState::Open);
    }

    #[test]
    fn test_flip_back_reemits_locked_animation() {
        let mut selector = ModeSelector::new(SensorState::Open, &RampConfig::DEFAULT);

        assert!(hold(&mut selector, SensorState::Closed, 20).is_empty());
        assert_eq!(
            hold(&mut selector, SensorState::Open, 61),
            [AnimationId::Chase]
        );
        assert_eq!(selector.current(), AnimationId::Chase);
        assert_eq!(selector.flips(), 0);
    }

    #[test]
    fn test_unknown_start_settles_on_first_reading() {
        let mut selector = ModeSelector::new(SensorState::Unknown, &RampConfig::DEFAULT);
        assert_eq!(
            hold(&mut selector, SensorState::Open, 61),
            [AnimationId::Chase]
        );
    }

    #[test]
    fn test_first_flip_weighs_full() {
        let mut selector = ModeSelector::new(SensorState::Open, &RampConfig::DEFAULT);
        hold(&mut selector, SensorState::Closed, 1);
        assert_eq!(selector.instability(), 45.0);
        assert_eq!(selector.flips(), 1);
    }

    #[test]
    fn test_flapping_sensor_escalates_to_decay_once() {
        let mut selector = ModeSelector::new(SensorState::Open, &RampConfig::DEFAULT);
        let mut emitted = Vec::new();

        // Sensor toggles every 100ms
        for t in (10..=4200).step_by(10) {
            let state = if (t / 100) % 2 == 1 {
                SensorState::Closed
            } else {
                SensorState::Open
            };
            if let Some(animation) = selector.evaluate(state, STEP) {
                emitted.push((t, animation));
            }
        }

        assert_eq!(emitted, [(4200, AnimationId::Decay)]);
        assert_eq!(selector.current(), AnimationId::Decay);
        assert_eq!(selector.flips(), 42);

        // Further flapping stays in decay
        for t in (4210..=5000).step_by(10) {
            let state = if (t / 100) % 2 == 1 {
                SensorState::Closed
            } else {
                SensorState::Open
            };
            assert_eq!(selector.evaluate(state, STEP), None);
        }

        // Last flip at 5000ms went to open
        assert_eq!(
            hold(&mut selector, SensorState::Open, 60),
            [AnimationId::Chase]
        );
        assert_eq!(selector.instability(), 0.0);
        assert_eq!(selector.flips(), 0);
    }

    #[test]
    fn test_flip_count_policy_escalates_on_limit() {
        let config = RampConfig {
            debounce: DebounceConfig {
                policy: InstabilityPolicy::FLIP_COUNT,
                ..DebounceConfig::DEFAULT
            },
            ..RampConfig::DEFAULT
        };
        let mut selector = ModeSelector::new(SensorState::Open, &config);
        let mut state = SensorState::Open;

        for _ in 0..6 {
            state = flip(state);
            assert_eq!(selector.evaluate(state, STEP), None);
        }
        state = flip(state);
        assert_eq!(selector.evaluate(state, STEP), Some(AnimationId::Decay));
        assert_eq!(selector.flips(), 7);

        state = flip(state);
        assert_eq!(selector.evaluate(state, STEP), None);
    }
}
