mod tests {
    use midi_dmx_scenes::color::{BLUE, ORANGE};
    use midi_dmx_scenes::rig::{RIG_SCENE_COUNT, RIG_SLOT_TABLE, RIG_SLOTS, rig_resolver};
    use midi_dmx_scenes::{Channel, ResolverConfig};

    #[test]
    fn test_rig_tables_are_valid() {
        let resolver = rig_resolver(&ResolverConfig::default()).unwrap();
        assert_eq!(resolver.scene_count(), RIG_SCENE_COUNT);
        assert_eq!(RIG_SLOT_TABLE.len(), RIG_SLOTS);
    }

    #[test]
    fn test_rig_slot_layout() {
        let raw: Vec<u16> = RIG_SLOT_TABLE.iter().map(Channel::raw).collect();
        assert_eq!(
            raw,
            [1, 2, 3, 4, 10, 11, 12, 13, 20, 21, 22, 23, 30, 31, 32, 33]
        );
    }

    #[test]
    fn test_rig_frames_cover_slot_table() {
        let resolver = rig_resolver(&ResolverConfig::default()).unwrap();
        for scene in 0..RIG_SCENE_COUNT {
            let frame = resolver.resolve(scene).unwrap();
            assert_eq!(frame.len(), RIG_SLOTS);
            for channel in RIG_SLOT_TABLE.iter() {
                assert!(frame.contains(channel));
            }
        }
    }

    #[test]
    fn test_rig_scene_zero_is_blackout() {
        let frame = rig_resolver(&ResolverConfig::default())
            .unwrap()
            .resolve(0)
            .unwrap();
        assert!(frame.iter().all(|(_, value)| value == 0));
    }

    #[test]
    fn test_rig_scene_one_is_orange_and_blue() {
        let frame = rig_resolver(&ResolverConfig::default())
            .unwrap()
            .resolve(1)
            .unwrap();
        let value = |raw| frame.get(Channel::from_raw(raw)).unwrap();

        for base in [1, 20] {
            assert_eq!(value(base), 255);
            assert_eq!(
                (value(base + 1), value(base + 2), value(base + 3)),
                (ORANGE.r, ORANGE.g, ORANGE.b)
            );
        }
        for base in [10, 30] {
            assert_eq!(value(base), 255);
            assert_eq!(
                (value(base + 1), value(base + 2), value(base + 3)),
                (BLUE.r, BLUE.g, BLUE.b)
            );
        }
    }

    #[test]
    fn test_rig_scene_past_end_is_rejected() {
        let resolver = rig_resolver(&ResolverConfig::default()).unwrap();
        assert!(resolver.resolve(RIG_SCENE_COUNT).is_err());
    }
}
