#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use crate::commands::MatchCommand;
    use crate::components::{PatrolRoute, PlayerTank};
    use crate::config::{ArenaLayout, MatchConfig, PlayerConfig};
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::health::Health;
    use crate::types::{format_clock, look_rotation, TankColor};

    // ---- Health ----

    #[test]
    fn test_damage_subtracts_health() {
        let mut health = Health::new(100.0);
        assert_eq!(health.apply_damage(30.0), DamageOutcome::Damaged);
        assert_eq!(health.current(), 70.0);
        assert!(!health.is_dead());
    }

    #[test]
    fn test_death_fires_exactly_once() {
        let mut health = Health::new(100.0);
        assert_eq!(health.apply_damage(60.0), DamageOutcome::Damaged);
        assert_eq!(health.apply_damage(40.0), DamageOutcome::Killed);
        assert!(health.is_dead());
        assert_eq!(health.current(), 0.0);

        // Further hits keep subtracting but never kill again
        assert_eq!(health.apply_damage(10.0), DamageOutcome::Damaged);
        assert_eq!(health.current(), -10.0);
        assert!(health.is_dead());
    }

    #[test]
    fn test_shield_blocks_one_hit_then_clears() {
        let mut health = Health::new(100.0);
        health.toggle_shield();
        assert!(health.is_shielded());

        assert_eq!(health.apply_damage(50.0), DamageOutcome::ShieldAbsorbed);
        assert_eq!(health.current(), 100.0);
        assert!(!health.is_shielded());

        assert_eq!(health.apply_damage(50.0), DamageOutcome::Damaged);
        assert_eq!(health.current(), 50.0);
    }

    #[test]
    fn test_invincibility_blocks_everything_and_persists() {
        let mut health = Health::new(100.0);
        health.toggle_invincibility();
        for _ in 0..10 {
            assert_eq!(health.apply_damage(500.0), DamageOutcome::Invincible);
        }
        assert_eq!(health.current(), 100.0);
        assert!(health.is_invincible());
    }

    #[test]
    fn test_invincibility_checked_before_shield() {
        let mut health = Health::new(100.0);
        health.toggle_shield();
        health.toggle_invincibility();

        assert_eq!(health.apply_damage(25.0), DamageOutcome::Invincible);
        assert!(health.is_shielded(), "Invincibility must not consume the shield");
    }

    #[test]
    fn test_toggles_are_self_inverse() {
        let mut health = Health::new(100.0);
        health.toggle_shield();
        health.toggle_shield();
        health.toggle_invincibility();
        health.toggle_invincibility();
        assert!(!health.is_shielded());
        assert!(!health.is_invincible());
    }

    #[test]
    fn test_heal_clamps_to_starting_health() {
        let mut health = Health::new(100.0);
        health.apply_damage(30.0);
        health.heal(10.0);
        assert_eq!(health.current(), 80.0);
        health.heal(500.0);
        assert_eq!(health.current(), 100.0);
    }

    #[test]
    fn test_heal_ignored_when_dead() {
        let mut health = Health::new(100.0);
        health.apply_damage(150.0);
        health.heal(50.0);
        assert_eq!(health.current(), -50.0);
        assert!(health.is_dead());
    }

    #[test]
    fn test_reset_restores_full_health_and_clears_flags() {
        let mut health = Health::new(80.0);
        health.toggle_invincibility();
        health.toggle_invincibility();
        health.toggle_shield();
        health.apply_damage(10.0); // shield eaten
        health.apply_damage(100.0);
        health.toggle_shield();
        health.toggle_invincibility();
        assert!(health.is_dead());

        health.reset();
        assert_eq!(health, Health::new(80.0));
    }

    #[test]
    fn test_health_bar_color_endpoints() {
        let mut health = Health::new(100.0);
        assert_eq!(health.bar_color(), TankColor::GREEN);
        health.apply_damage(50.0);
        assert_eq!(health.bar_color(), TankColor::new(128, 128, 0));
        health.apply_damage(80.0);
        assert_eq!(health.bar_color(), TankColor::RED);
    }

    // ---- Clock formatting ----

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(240.0 - 45.0), "03:15");
        assert_eq!(format_clock(240.0 - 65.0), "02:55");
        assert_eq!(format_clock(125.0), "02:05");
        assert_eq!(format_clock(59.99), "00:59");
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(-3.0), "00:00");
        assert_eq!(format_clock(f64::NAN), "00:00");
    }

    #[test]
    fn test_time_up_message_lines() {
        use crate::constants::TIME_UP_MESSAGE;
        let lines: Vec<&str> = TIME_UP_MESSAGE.lines().collect();
        assert_eq!(lines, vec!["TIME'S UP", "EVERYONE LOSES"]);
    }

    // ---- Players and routes ----

    #[test]
    fn test_colored_name() {
        let tank = PlayerTank {
            slot: 1,
            player_number: 2,
            color: TankColor::new(0x1E, 0x90, 0xFF),
            control_index: 1,
            is_computer: false,
            wins: 0,
            control_enabled: false,
        };
        assert_eq!(tank.colored_name(), "<color=#1E90FF>PLAYER 2</color>");
    }

    #[test]
    fn test_patrol_route_wraps() {
        let mut route = PatrolRoute::new(vec![Vec3::X, Vec3::Y, Vec3::Z]);
        assert_eq!(route.current_waypoint(), Some(Vec3::X));
        route.advance();
        route.advance();
        assert_eq!(route.current_waypoint(), Some(Vec3::Z));
        route.advance();
        assert_eq!(route.current_waypoint(), Some(Vec3::X));
    }

    #[test]
    fn test_empty_patrol_route() {
        let mut route = PatrolRoute::default();
        route.advance();
        assert_eq!(route.current, 0);
        assert_eq!(route.current_waypoint(), None);
    }

    // ---- Geometry ----

    #[test]
    fn test_look_rotation_faces_direction() {
        let dir = Vec3::new(1.0, 0.0, 1.0).normalize();
        let rot = look_rotation(dir).unwrap();
        let forward = rot * Vec3::Z;
        assert!(forward.abs_diff_eq(dir, 1e-5), "forward = {:?}", forward);
        let up = rot * Vec3::Y;
        assert!(up.abs_diff_eq(Vec3::Y, 1e-5));
    }

    #[test]
    fn test_look_rotation_degenerate() {
        assert!(look_rotation(Vec3::ZERO).is_none());
        let rot = look_rotation(Vec3::Y).unwrap();
        assert!((rot * Vec3::Z).abs_diff_eq(Vec3::Y, 1e-5));
    }

    // ---- Configuration ----

    #[test]
    fn test_default_config_is_valid() {
        let config = MatchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rounds_to_win, 5);
        assert_eq!(config.max_match_secs, 240.0);
        assert_eq!(config.enemy.detect_range, 15.0);
    }

    #[test]
    fn test_partial_json_config_uses_defaults() {
        let config =
            MatchConfig::from_json_str(r#"{ "rounds_to_win": 3, "enemy": { "move_speed": 6.0 } }"#)
                .unwrap();
        assert_eq!(config.rounds_to_win, 3);
        assert_eq!(config.start_delay_secs, 3.0);
        assert_eq!(config.enemy.move_speed, 6.0);
        assert_eq!(config.enemy.detect_range, 15.0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = MatchConfig::from_json_str(r#"{ "rounds_to_win": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "rounds_to_win",
                ..
            }
        ));

        let err = MatchConfig::from_json_str(r#"{ "end_delay_secs": -1.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "end_delay_secs",
                ..
            }
        ));

        let err = MatchConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_default_arena_layout() {
        let layout = ArenaLayout::default_arena();
        assert_eq!(layout.spawn_points.len(), 4);
        assert_eq!(layout.enemy_spawns.len(), 2);
        assert!(layout.enemy_spawns.iter().all(|e| e.waypoints.len() == 4));

        // Corner slots face the arena center
        let first = layout.spawn_points[0];
        let forward = first.rotation * Vec3::Z;
        assert!(forward.dot(-first.position.normalize()) > 0.99);
    }

    #[test]
    fn test_arena_layout_json() {
        let layout = ArenaLayout::default_arena();
        let json = serde_json::to_string(&layout).unwrap();
        let back = ArenaLayout::from_json_str(&json).unwrap();
        assert_eq!(layout, back);
    }

    #[test]
    fn test_command_serde_tagged() {
        let cmd = MatchCommand::StartMatch {
            players: vec![PlayerConfig::human(TankColor::BLUE, 0)],
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains(r#""type":"StartMatch""#));

        let cmd = MatchCommand::MovePlayer {
            slot: 0,
            position: Vec3::ONE,
            rotation: Quat::IDENTITY,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let back: MatchCommand = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, MatchCommand::MovePlayer { slot: 0, .. }));
    }

    #[test]
    fn test_match_phase_modes() {
        assert_eq!(MatchPhase::MainMenu.mode(), GameMode::MainMenu);
        for phase in [
            MatchPhase::RoundStarting,
            MatchPhase::RoundPlaying,
            MatchPhase::RoundEnding,
            MatchPhase::MatchOver,
        ] {
            assert_eq!(phase.mode(), GameMode::Game);
        }
    }
}
