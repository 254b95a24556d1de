#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::config::*;
    use crate::constants::*;
    use crate::draw::{health_bar, Color, DrawCommand, DrawList, DrawSurface};
    use crate::enums::*;
    use crate::error::{CommandError, ConfigError};
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::*;

    #[test]
    fn test_empty_path_rejected() {
        assert!(matches!(Path::new(Vec::new()), Err(ConfigError::EmptyPath)));
        assert!(matches!(
            Path::from_waypoints(&[]),
            Err(ConfigError::EmptyPath)
        ));
    }

    #[test]
    fn test_path_clones_share_storage() {
        let path = Path::new(vec![Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)]).unwrap();
        let other = path.clone();
        assert!(path.shares_route_with(&other));
        assert_eq!(path.start(), Vec2::new(0.0, 0.0));
        assert_eq!(path.end(), Vec2::new(100.0, 0.0));
        assert_eq!(path.last_index(), 1);
        assert_eq!(path.get(2), None);

        let rebuilt = Path::new(path.waypoints().to_vec()).unwrap();
        assert_eq!(rebuilt, path);
        assert!(!rebuilt.shares_route_with(&path));
    }

    #[test]
    fn test_tank_preset_overrides_grunt() {
        let grunt = EnemyPreset::for_kind(EnemyKind::Grunt);
        let tank = EnemyPreset::for_kind(EnemyKind::Tank);
        assert_eq!(grunt.speed, 1.0);
        assert_eq!(grunt.health, 100.0);
        assert_eq!(grunt.reward, 10);
        assert_eq!(tank.speed, 0.5);
        assert_eq!(tank.health, 400.0);
        assert_eq!((tank.width, tank.height), (30.0, 30.0));
        assert_eq!(tank.reward, 50);
        assert_ne!(tank.color, grunt.color);
    }

    #[test]
    fn test_weapon_presets() {
        let mg = WeaponSpec::for_kind(WeaponKind::MachineGun);
        assert_eq!(mg.range, 150.0);
        assert_eq!(mg.damage, 20.0);
        assert_eq!(mg.attack_speed, 60);
        assert_eq!(mg.projectile_speed, 5.0);
        assert_eq!(mg.splash_radius, 0.0);

        let cannon = WeaponSpec::for_kind(WeaponKind::Cannon);
        assert_eq!(cannon.range, 120.0);
        assert_eq!(cannon.damage, 40.0);
        assert_eq!(cannon.attack_speed, 180);
        assert_eq!(cannon.projectile_speed, 4.0);
        assert_eq!(cannon.splash_radius, 50.0);
        assert_eq!(cannon.cost, 250);
    }

    /// Partial preset JSON fills the rest from defaults.
    #[test]
    fn test_partial_preset_uses_defaults() {
        let wall: WallSpec = serde_json::from_str(r#"{ "health": 500.0 }"#).unwrap();
        assert_eq!(wall.health, 500.0);
        assert_eq!(wall.size, WALL_SIZE);
        assert_eq!(wall.cost, WALL_COST);

        let area: DefenseAreaSpec =
            serde_json::from_str(r#"{ "x": 700.0, "y": 300.0 }"#).unwrap();
        assert_eq!(area.health, DEFENSE_AREA_HEALTH);
        assert_eq!(area.width, 100.0);
    }

    /// A partial tank or cannon override keeps that kind's own defaults.
    #[test]
    fn test_partial_presets_keep_kind_defaults() {
        let presets: Presets = serde_json::from_str(
            r#"{ "tank": { "speed": 0.75 }, "cannon": { "damage": 60.0 } }"#,
        )
        .unwrap();
        assert_eq!(presets.tank.speed, 0.75);
        assert_eq!(presets.tank.health, 400.0);
        assert_eq!(presets.tank.reward, 50);
        assert_eq!(presets.cannon.damage, 60.0);
        assert_eq!(presets.cannon.splash_radius, 50.0);
        assert_eq!(presets.cannon.attack_speed, 180);
        assert_eq!(presets.grunt, EnemyPreset::default());
    }

    #[test]
    fn test_preset_validation() {
        let mut preset = EnemyPreset::default();
        assert!(preset.validate().is_ok());
        preset.speed = 0.0;
        let err = preset.validate().unwrap_err();
        assert!(err.to_string().contains("enemy speed"));
    }

    #[test]
    fn test_player_command_tagged_json() {
        let json = r#"{ "type": "AttachModule", "base": 3, "kind": "Cannon" }"#;
        let cmd: PlayerCommand = serde_json::from_str(json).unwrap();
        assert_eq!(
            cmd,
            PlayerCommand::AttachModule {
                base: BaseId(3),
                kind: WeaponKind::Cannon,
            }
        );
    }

    #[test]
    fn test_game_event_serializes_with_tag() {
        let event = GameEvent::EnemyKilled {
            enemy: EnemyId(7),
            kind: EnemyKind::Tank,
            reward: 50,
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "EnemyKilled");
        assert_eq!(value["reward"], 50);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snap = GameStateSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::Setup);
        assert!(back.enemies.is_empty());
    }

    #[test]
    fn test_draw_list_records_in_order() {
        let mut list = DrawList::new();
        list.fill_rect(0.0, 0.0, 10.0, 10.0, Color::BROWN);
        list.stroke_circle(Vec2::new(5.0, 5.0), 150.0, Color::BLUE_RANGE, 1.0);
        assert_eq!(list.len(), 2);
        assert!(matches!(list.commands[0], DrawCommand::FillRect { .. }));
        assert!(matches!(
            list.commands[1],
            DrawCommand::StrokeCircle { radius, .. } if radius == 150.0
        ));
    }

    #[test]
    fn test_health_bar_fill_width() {
        let mut list = DrawList::new();
        health_bar(&mut list, 0.0, 0.0, 40.0, 5.0, 0.25, Color::GREY, Color::LIME);
        assert_eq!(list.len(), 2);
        match &list.commands[1] {
            DrawCommand::FillRect { width, color, .. } => {
                assert_eq!(*width, 10.0);
                assert_eq!(*color, Color::LIME);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_color_css() {
        assert_eq!(Color::BLUE_RANGE.to_css(), "rgba(0, 0, 255, 0.3)");
    }

    #[test]
    fn test_command_error_messages() {
        let err = CommandError::InsufficientGold {
            needed: 250,
            available: 100,
        };
        assert_eq!(err.to_string(), "not enough gold: need 250, have 100");
        assert!(GamePhase::Defeat.is_over());
        assert!(!GamePhase::Paused.is_over());
    }

    #[test]
    fn test_frame_clock() {
        let mut clock = FrameClock::default();
        for _ in 0..TICK_RATE {
            clock.advance();
        }
        assert_eq!(clock.frame, TICK_RATE as u64);
        assert!((clock.elapsed_secs() - 1.0).abs() < 1e-12);
    }
}
