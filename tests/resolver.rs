mod tests {
    use midi_dmx_scenes::{
        AuthoringError, Channel, DMX_UNIVERSE_SIZE, InvalidScene, InvalidScenePolicy,
        ResolverConfig, SceneResolver, SceneRow, SceneTable, SlotTable, resolve_row,
    };

    const SLOTS: SlotTable<4> = SlotTable::from_raw([1, 2, 3, 4]);
    const SCENES: [SceneRow<4>; 2] = [[0, 0, 0, 0], [64, 255, 128, 0]];

    fn ch(raw: u16) -> Channel {
        Channel::new(raw).unwrap()
    }

    fn resolver(policy: InvalidScenePolicy) -> SceneResolver<'static, 4> {
        let config = ResolverConfig {
            invalid_scene: policy,
        };
        SceneResolver::new(&SLOTS, SceneTable::new(&SCENES), &config).unwrap()
    }

    #[test]
    fn test_resolve_blackout_scene() {
        let frame = resolver(InvalidScenePolicy::Reject).resolve(0).unwrap();
        assert_eq!(frame.len(), 4);
        for raw in 1..=4 {
            assert_eq!(frame.get(ch(raw)), Some(0));
        }
    }

    #[test]
    fn test_resolve_scene_values() {
        let frame = resolver(InvalidScenePolicy::Reject).resolve(1).unwrap();
        let entries: Vec<(u16, u8)> = frame.iter().map(|(c, v)| (c.raw(), v)).collect();
        assert_eq!(entries, [(1, 64), (2, 255), (3, 128), (4, 0)]);
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let resolver = resolver(InvalidScenePolicy::Reject);
        for scene in 0..resolver.scene_count() {
            assert_eq!(resolver.resolve(scene), resolver.resolve(scene));
        }
    }

    #[test]
    fn test_invalid_scene_is_rejected() {
        let resolver = resolver(InvalidScenePolicy::Reject);
        assert_eq!(
            resolver.resolve(2),
            Err(InvalidScene {
                index: 2,
                scene_count: 2
            })
        );
        assert!(resolver.resolve(127).is_err());
        assert!(resolver.resolve(usize::MAX).is_err());
    }

    #[test]
    fn test_invalid_scene_falls_back_to_blackout() {
        let resolver = resolver(InvalidScenePolicy::Blackout);
        assert_eq!(resolver.effective_scene(5), Ok(0));
        assert_eq!(resolver.effective_scene(1), Ok(1));
        assert_eq!(resolver.resolve(5), resolver.resolve(0));
    }

    #[test]
    fn test_resolve_scene_reports_fallback() {
        let fallback = resolver(InvalidScenePolicy::Blackout);
        let (scene, frame) = fallback.resolve_scene(9).unwrap();
        assert_eq!(scene, 0);
        assert_eq!(frame, fallback.resolve(0).unwrap());

        let (scene, frame) = fallback.resolve_scene(1).unwrap();
        assert_eq!(scene, 1);
        assert_eq!(frame, fallback.resolve_row(&SCENES[1]));

        let strict = resolver(InvalidScenePolicy::Reject);
        assert!(strict.resolve_scene(9).is_err());
    }

    #[test]
    fn test_slot_change_is_isolated() {
        let row = SCENES[1];
        let before = resolve_row(&SLOTS, &row);
        let remapped = SLOTS.with_channel(2, ch(40));
        let after = resolve_row(&remapped, &row);

        assert_eq!(after.get(ch(3)), None);
        assert_eq!(after.get(ch(40)), Some(128));
        for raw in [1, 2, 4] {
            assert_eq!(after.get(ch(raw)), before.get(ch(raw)));
        }
    }

    #[test]
    fn test_duplicate_channel_later_slot_wins() {
        let slots = SlotTable::from_raw([1, 2, 1, 3]);
        let frame = resolve_row(&slots, &[10, 20, 30, 40]);
        assert_eq!(frame.len(), 3);
        assert_eq!(frame.get(ch(1)), Some(30));
        assert_eq!(frame.get(ch(2)), Some(20));
        assert_eq!(frame.get(ch(3)), Some(40));
    }

    #[test]
    fn test_validation_rejects_duplicate_channel() {
        let slots = SlotTable::from_raw([1, 2, 1, 3]);
        let config = ResolverConfig::default();
        let result = SceneResolver::new(&slots, SceneTable::new(&SCENES), &config);
        assert_eq!(
            result.unwrap_err(),
            AuthoringError::DuplicateChannel {
                first_slot: 0,
                second_slot: 2,
                channel: Channel::from_raw(1),
            }
        );
    }

    #[test]
    fn test_validation_rejects_channel_out_of_range() {
        let slots = SlotTable::from_raw([1, 2, 512, 3]);
        let config = ResolverConfig::default();
        let result = SceneResolver::new(&slots, SceneTable::new(&SCENES), &config);
        assert_eq!(
            result.unwrap_err(),
            AuthoringError::ChannelOutOfRange {
                slot: 2,
                channel: Channel::from_raw(512),
            }
        );
    }

    #[test]
    fn test_validation_rejects_scene_count() {
        let config = ResolverConfig::default();
        let empty: [SceneRow<4>; 0] = [];
        let result = SceneResolver::new(&SLOTS, SceneTable::new(&empty), &config);
        assert_eq!(result.unwrap_err(), AuthoringError::NoScenes);

        let too_many = [[0u8; 4]; 129];
        let result = SceneResolver::new(&SLOTS, SceneTable::new(&too_many), &config);
        assert_eq!(
            result.unwrap_err(),
            AuthoringError::TooManyScenes { count: 129 }
        );

        let full = [[0u8; 4]; 128];
        assert!(SceneResolver::new(&SLOTS, SceneTable::new(&full), &config).is_ok());
    }

    #[test]
    fn test_frame_apply_keeps_other_channels() {
        let frame = resolver(InvalidScenePolicy::Reject).resolve(1).unwrap();
        let mut universe = [7u8; DMX_UNIVERSE_SIZE];
        frame.apply(&mut universe);
        assert_eq!(universe[0], 7);
        assert_eq!(&universe[1..5], &[64, 255, 128, 0]);
        assert!(universe[5..].iter().all(|value| *value == 7));
    }

    #[test]
    #[should_panic(expected = "slot index out of range")]
    fn test_slot_out_of_range_panics() {
        let _ = SLOTS.channel_for_slot(4);
    }

    #[test]
    fn test_channel_bounds() {
        assert_eq!(Channel::new(511).map(Channel::raw), Some(511));
        assert_eq!(Channel::new(512), None);
        assert_eq!(SLOTS.get(4), None);
        assert_eq!(SLOTS.channel_for_slot(3), ch(4));
    }
}
