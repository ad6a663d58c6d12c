mod tests {
    use dmx_rig_composer::{ChannelOffset, ChannelStore, MAX_FIXTURES, STEP_COUNT};

    fn eased_store(from: u8, to: u8) -> ChannelStore<MAX_FIXTURES> {
        let mut store = ChannelStore::new(1);
        store.set_immediate(0, ChannelOffset::Red, from);
        store.set_scene_target(0, ChannelOffset::Red, to);
        store.ensure_transition(0);
        store
    }

    fn run(store: &mut ChannelStore<MAX_FIXTURES>, ticks: u8) {
        for _ in 0..ticks {
            store.advance_transitions();
        }
    }

    #[test]
    fn test_lands_exactly_on_target() {
        for (from, to) in [(0, 255), (255, 0), (128, 130), (77, 77)] {
            let mut store = eased_store(from, to);
            run(&mut store, STEP_COUNT);

            let channel = store.channel(0, ChannelOffset::Red).unwrap();
            assert_eq!(channel.current(), to, "{} -> {}", from, to);
            assert_eq!(channel.target(), to);
            assert!(!channel.is_pending());
            assert!(!store.is_transitioning(0));
        }
    }

    #[test]
    fn test_still_pending_one_step_early() {
        let mut store = eased_store(0, 255);
        run(&mut store, STEP_COUNT - 1);

        let channel = store.channel(0, ChannelOffset::Red).unwrap();
        assert!(channel.is_pending());
        assert!(channel.current() < 255);
        assert!(store.is_transitioning(0));
    }

    #[test]
    fn test_first_step_does_not_move() {
        let mut store = eased_store(0, 255);
        run(&mut store, 1);
        assert_eq!(store.channel(0, ChannelOffset::Red).unwrap().current(), 0);
    }

    #[test]
    fn test_progress_is_monotonic() {
        let mut store = eased_store(0, 255);
        let mut previous = 0;
        for _ in 0..STEP_COUNT {
            store.advance_transitions();
            let current = store.channel(0, ChannelOffset::Red).unwrap().current();
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_retarget_mid_transition() {
        let mut store = eased_store(0, 255);
        run(&mut store, 25);
        let midway = store.channel(0, ChannelOffset::Red).unwrap().current();
        assert!(midway > 0);

        store.set_scene_target(0, ChannelOffset::Red, 10);
        store.ensure_transition(0);
        store.advance_transitions();
        let redirected = store.channel(0, ChannelOffset::Red).unwrap().current();
        assert!(redirected <= midway);

        run(&mut store, STEP_COUNT - 26);
        assert_eq!(store.channel(0, ChannelOffset::Red).unwrap().current(), 10);
        assert!(!store.is_transitioning(0));
    }

    #[test]
    fn test_only_pending_channels_move() {
        let mut store = eased_store(0, 255);
        store.set_immediate(0, ChannelOffset::Dimmer, 42);
        run(&mut store, STEP_COUNT);
        assert_eq!(store.channel(0, ChannelOffset::Dimmer).unwrap().current(), 42);
    }

    #[test]
    fn test_immediate_write_overrides_transition() {
        let mut store = eased_store(0, 255);
        run(&mut store, 10);
        store.set_immediate(0, ChannelOffset::Red, 99);

        let channel = store.channel(0, ChannelOffset::Red).unwrap();
        assert_eq!(channel.current(), 99);
        assert_eq!(channel.target(), 99);
        assert!(!channel.is_pending());

        run(&mut store, STEP_COUNT);
        assert_eq!(store.channel(0, ChannelOffset::Red).unwrap().current(), 99);
    }

    #[test]
    fn test_fixtures_past_count_are_frozen() {
        let mut store: ChannelStore<MAX_FIXTURES> = ChannelStore::new(2);
        store.set_scene_target(1, ChannelOffset::Blue, 200);
        store.ensure_transition(1);
        store.set_fixture_count(1).unwrap();
        run(&mut store, STEP_COUNT);

        assert!(store.is_transitioning(1));
        assert_eq!(store.channel(1, ChannelOffset::Blue).unwrap().current(), 0);
    }
}
