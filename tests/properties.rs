//! Invariants of the motion state machines, collision and pruning

use glam::Vec2;
use proptest::prelude::*;

use gopher_hunter::Tuning;
use gopher_hunter::sim::{
    Aabb, Creature, CreatureKind, JumpPhase, Player, SimRng, remove_indices,
};

fn kind_strategy() -> impl Strategy<Value = CreatureKind> {
    prop::sample::select(CreatureKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn creatures_never_drift_right(
        kind in kind_strategy(),
        seed in any::<u64>(),
        steps in prop::collection::vec(0.0f32..0.5, 1..200),
    ) {
        let tuning = Tuning::default();
        let mut rng = SimRng::new(seed);
        let mut creature = Creature::spawn(kind, 1, &tuning, &mut rng);
        for dt in steps {
            let before = creature.position.x;
            creature.advance(dt, &tuning, &mut rng);
            prop_assert!(creature.position.x <= before);
        }
    }

    #[test]
    fn jumper_height_stays_in_bounds(
        seed in any::<u64>(),
        steps in prop::collection::vec(0.0f32..0.2, 1..400),
    ) {
        let tuning = Tuning::default();
        let mut rng = SimRng::new(seed);
        let mut crab = Creature::spawn(CreatureKind::Jumper, 1, &tuning, &mut rng);
        for dt in steps {
            crab.advance(dt, &tuning, &mut rng);
            let jump = *crab.jump().expect("jumper state");
            prop_assert!(jump.height >= 0.0 && jump.height <= jump.ceiling);
            if jump.phase == JumpPhase::Grounded {
                prop_assert_eq!(jump.height, 0.0);
                prop_assert_eq!(crab.position.y, jump.baseline);
            }
        }
    }

    #[test]
    fn player_never_jumps_and_ducks_at_once(
        inputs in prop::collection::vec((any::<bool>(), any::<bool>(), 0.0f32..0.3), 1..300),
    ) {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        for (jump, duck, dt) in inputs {
            if jump {
                player.request_jump();
            }
            if duck {
                player.request_duck();
            }
            player.advance(dt, &tuning);
            prop_assert!(player.jump_height == 0.0 || player.recede_offset == 0.0);
            prop_assert!(player.jump_height <= player.jump_ceiling);
            prop_assert!(player.recede_offset <= player.recede_limit());
            prop_assert_eq!(
                player.position,
                Vec2::new(player.anchor.x - player.recede_offset, player.anchor.y + player.jump_height)
            );
        }
    }

    #[test]
    fn adjacent_boxes_never_collide(
        x in -500i32..500, y in -500i32..500,
        w in 1i32..200, h in 1i32..200,
        ow in 1i32..200, oh in 1i32..200,
        slide in -300i32..300,
    ) {
        let a = Aabb::new(
            Vec2::new(x as f32, y as f32),
            Vec2::new((x + w) as f32, (y + h) as f32),
        );
        // Flush against the right edge, anywhere vertically
        let b = Aabb::new(
            Vec2::new((x + w) as f32, (y + slide) as f32),
            Vec2::new((x + w + ow) as f32, (y + slide + oh) as f32),
        );
        prop_assert!(!a.overlaps(&b));
        prop_assert!(!b.overlaps(&a));
    }

    #[test]
    fn one_unit_overlap_always_collides(
        x in -500i32..500, y in -500i32..500,
        w in 1i32..200, h in 1i32..200,
        ow in 1i32..200, oh in 1i32..200,
    ) {
        let a = Aabb::new(
            Vec2::new(x as f32, y as f32),
            Vec2::new((x + w) as f32, (y + h) as f32),
        );
        // Corner overlap of exactly one unit square
        let b = Aabb::new(
            Vec2::new((x + w - 1) as f32, (y + h - 1) as f32),
            Vec2::new((x + w - 1 + ow) as f32, (y + h - 1 + oh) as f32),
        );
        prop_assert!(a.overlaps(&b));
        prop_assert!(b.overlaps(&a));
    }

    #[test]
    fn removal_matches_filter_by_original_index(
        len in 0usize..40,
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..20),
    ) {
        let original: Vec<usize> = (0..len).collect();
        let indices: Vec<usize> = if len == 0 {
            Vec::new()
        } else {
            picks.iter().map(|p| p.index(len)).collect()
        };

        let mut pruned = original.clone();
        remove_indices(&mut pruned, &indices);

        let expected: Vec<usize> = original
            .iter()
            .copied()
            .filter(|i| !indices.contains(i))
            .collect();
        prop_assert_eq!(pruned, expected);
    }
}
