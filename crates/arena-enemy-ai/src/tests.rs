#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use arena_core::config::EnemyTuning;
    use arena_core::enums::EnemyState;

    use crate::fsm::{evaluate, turn_toward, EnemyContext};
    use crate::targeting::{nearest_player, PlayerSighting};

    const DT: f32 = 0.1;

    fn sighting(slot: usize, x: f32, z: f32) -> PlayerSighting {
        PlayerSighting {
            slot,
            position: Vec3::new(x, 0.0, z),
        }
    }

    fn make_context<'a>(
        state: EnemyState,
        players: &'a [PlayerSighting],
        waypoint: Option<Vec3>,
        tuning: &'a EnemyTuning,
    ) -> EnemyContext<'a> {
        EnemyContext {
            state,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            players,
            waypoint,
            tuning,
            dt: DT,
        }
    }

    // ---- Targeting ----

    #[test]
    fn test_nearest_player_picks_minimum_distance() {
        let players = [sighting(0, 10.0, 0.0), sighting(1, 3.0, 0.0), sighting(2, 0.0, 7.0)];
        let lock = nearest_player(Vec3::ZERO, &players).unwrap();
        assert_eq!(lock.slot, 1);
        assert_eq!(lock.distance, 3.0);
    }

    #[test]
    fn test_nearest_player_tie_goes_to_first_scanned() {
        let players = [sighting(2, 5.0, 0.0), sighting(0, -5.0, 0.0)];
        let lock = nearest_player(Vec3::ZERO, &players).unwrap();
        assert_eq!(lock.slot, 2);
    }

    #[test]
    fn test_nearest_player_none_when_empty() {
        assert!(nearest_player(Vec3::ZERO, &[]).is_none());
    }

    // ---- State selection ----

    #[test]
    fn test_pursue_when_inside_detect_range() {
        let tuning = EnemyTuning::default();
        let players = [sighting(0, 10.0, 0.0)];
        let update = evaluate(&make_context(EnemyState::Patrol, &players, None, &tuning));

        assert_eq!(update.new_state, EnemyState::Pursue);
        assert!(update.state_changed);
        assert_eq!(update.target, Some(0));
        // Moved move_speed * dt toward the target
        let expected = Vec3::new(tuning.move_speed * DT, 0.0, 0.0);
        assert!(update.position.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn test_exact_detect_range_is_patrol() {
        let tuning = EnemyTuning::default();
        let players = [sighting(0, tuning.detect_range, 0.0)];
        let update = evaluate(&make_context(EnemyState::Pursue, &players, None, &tuning));

        assert_eq!(update.new_state, EnemyState::Patrol);
        assert!(update.state_changed);
        // The nearest player is still reported as the target
        assert_eq!(update.target, Some(0));
    }

    #[test]
    fn test_no_players_falls_back_to_patrol() {
        let tuning = EnemyTuning::default();
        let update = evaluate(&make_context(EnemyState::Pursue, &[], None, &tuning));
        assert_eq!(update.new_state, EnemyState::Patrol);
        assert_eq!(update.target, None);
    }

    #[test]
    fn test_pursues_nearest_not_first() {
        let tuning = EnemyTuning::default();
        let players = [sighting(0, 0.0, 12.0), sighting(1, -4.0, 0.0)];
        let update = evaluate(&make_context(EnemyState::Patrol, &players, None, &tuning));
        assert_eq!(update.target, Some(1));
        assert!(update.position.x < 0.0);
        assert_eq!(update.position.z, 0.0);
    }

    // ---- Patrol ----

    #[test]
    fn test_empty_route_never_moves() {
        let tuning = EnemyTuning::default();
        let mut ctx = make_context(EnemyState::Patrol, &[], None, &tuning);
        ctx.position = Vec3::new(4.0, 0.0, -2.0);
        ctx.rotation = Quat::from_rotation_y(0.7);

        for _ in 0..100 {
            let update = evaluate(&ctx);
            assert_eq!(update.position, ctx.position);
            assert_eq!(update.rotation, ctx.rotation);
            assert!(!update.waypoint_reached);
            ctx.position = update.position;
            ctx.rotation = update.rotation;
        }
    }

    #[test]
    fn test_patrol_moves_toward_waypoint() {
        let tuning = EnemyTuning::default();
        let waypoint = Vec3::new(0.0, 0.0, 20.0);
        let update = evaluate(&make_context(EnemyState::Patrol, &[], Some(waypoint), &tuning));

        assert_eq!(update.new_state, EnemyState::Patrol);
        assert!(!update.state_changed);
        assert!((update.position.z - tuning.move_speed * DT).abs() < 1e-5);
        assert!(!update.waypoint_reached);
    }

    #[test]
    fn test_patrol_reports_arrival_inside_radius() {
        let tuning = EnemyTuning::default();
        // One step of 0.3 lands 0.9 units away: inside the 1.0 radius
        let waypoint = Vec3::new(1.2, 0.0, 0.0);
        let update = evaluate(&make_context(EnemyState::Patrol, &[], Some(waypoint), &tuning));
        assert!(update.waypoint_reached);
    }

    #[test]
    fn test_far_player_does_not_interrupt_patrol() {
        let tuning = EnemyTuning::default();
        let players = [sighting(0, 100.0, 0.0)];
        let waypoint = Vec3::new(0.0, 0.0, -10.0);
        let update = evaluate(&make_context(EnemyState::Patrol, &players, Some(waypoint), &tuning));
        assert_eq!(update.new_state, EnemyState::Patrol);
        assert!(update.position.z < 0.0);
    }

    // ---- Rotation ----

    #[test]
    fn test_rotation_turns_partially() {
        let tuning = EnemyTuning::default();
        let waypoint = Vec3::new(10.0, 0.0, 0.0);
        let update = evaluate(&make_context(EnemyState::Patrol, &[], Some(waypoint), &tuning));

        // rotation_speed * dt = 0.5: halfway between facing +Z and +X
        let forward = update.rotation * Vec3::Z;
        let halfway = Vec3::new(1.0, 0.0, 1.0).normalize();
        assert!(forward.abs_diff_eq(halfway, 1e-4), "forward = {:?}", forward);
    }

    #[test]
    fn test_turn_toward_clamps_and_ignores_zero_direction() {
        let current = Quat::IDENTITY;
        let turned = turn_toward(current, Vec3::X, 7.0);
        assert!((turned * Vec3::Z).abs_diff_eq(Vec3::X, 1e-5));

        assert_eq!(turn_toward(current, Vec3::ZERO, 0.5), current);
    }

    #[test]
    fn test_pursuit_on_top_of_target_stays_put() {
        let tuning = EnemyTuning::default();
        let players = [sighting(0, 0.0, 0.0)];
        let update = evaluate(&make_context(EnemyState::Pursue, &players, None, &tuning));
        assert_eq!(update.new_state, EnemyState::Pursue);
        assert_eq!(update.position, Vec3::ZERO);
        assert_eq!(update.rotation, Quat::IDENTITY);
    }
}
