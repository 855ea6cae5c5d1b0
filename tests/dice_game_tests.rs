use dice_scene::camera::CameraMove;
use dice_scene::game::{Action, GameEvent, GameState, RollPhase, WINNING_SCORE};
use dice_scene::picking::PickTarget;
use dice_scene::render::{CommandRecorder, DrawCommand};
use dice_scene::scenes::dice_scene::{DIE_IDS, HOLD_ID, TEXT_Z};
use dice_scene::scenes::DiceScene;
use dice_scene::traits::{DrawTarget, FrameUniforms, SceneComposer};
use glam::{Mat4, Vec3};

const TICK: f32 = 0.05;

#[cfg(test)]
mod dice_game_tests {
    use super::*;

    /// Click die 1 and tick until the roll is over. Returns the settle event.
    fn roll(game: &mut GameState) -> GameEvent {
        assert_eq!(
            game.handle_pick(PickTarget::Object(DIE_IDS[0])),
            Some(GameEvent::RollStarted)
        );
        let mut settled = None;
        for _ in 0..500 {
            if let Some(event) = game.tick(TICK) {
                assert!(settled.is_none(), "roll settled twice");
                settled = Some(event);
            }
            if game.roll().phase() == RollPhase::Idle {
                break;
            }
        }
        settled.expect("roll never settled")
    }

    fn record(scene: &DiceScene, game: &GameState) -> Vec<DrawCommand> {
        let mut recorder = CommandRecorder::new(100, 100);
        recorder.begin_pass(&FrameUniforms::new(Mat4::IDENTITY, game.camera(), game.light_position()));
        scene.compose(game, &mut recorder);
        recorder.last_pass().unwrap().commands.clone()
    }

    fn draw_count(scene: &DiceScene, game: &GameState) -> usize {
        record(scene, game).len()
    }

    #[test]
    fn test_full_roll_updates_score() {
        let mut game = GameState::new(Some(42), true);

        let event = roll(&mut game);
        let value = game.last_value().unwrap();
        assert!((1..=6).contains(&value));

        let expected = if value == 1 { 0 } else { value };
        assert_eq!(game.score(), expected);
        assert_eq!(event, GameEvent::Rolled { value, score: expected });
        assert_eq!(game.bounce_height(), 0);
    }

    #[test]
    fn test_die_one_ignored_while_rolling() {
        let mut game = GameState::new(Some(1), true);
        game.handle_pick(PickTarget::Object(DIE_IDS[0]));
        game.tick(TICK);

        assert_eq!(game.handle_pick(PickTarget::Object(DIE_IDS[0])), None);
        assert_eq!(game.roll().phase(), RollPhase::Bouncing);
    }

    #[test]
    fn test_other_targets_do_not_roll() {
        let mut game = GameState::new(Some(1), true);
        for id in DIE_IDS[1..].iter().chain([&HOLD_ID]) {
            assert_eq!(game.handle_pick(PickTarget::Object(*id)), None);
        }
        assert_eq!(game.roll().phase(), RollPhase::Idle);
    }

    #[test]
    fn test_seeded_games_roll_the_same() {
        let mut a = GameState::new(Some(99), false);
        let mut b = GameState::new(Some(99), false);
        for _ in 0..5 {
            assert_eq!(roll(&mut a), roll(&mut b));
            assert_eq!(a.theta(), b.theta());
        }
    }

    #[test]
    fn test_theta_stays_in_range() {
        let mut game = GameState::new(Some(5), false);
        for _ in 0..3 {
            roll(&mut game);
            let theta = game.theta();
            for angle in [theta.x, theta.y, theta.z] {
                assert!((0.0..360.0).contains(&angle), "{angle} out of range");
            }
        }
    }

    #[test]
    fn test_win_reported_once_and_banner_drawn() {
        let (scene, _) = DiceScene::build();
        let mut game = GameState::new(Some(2024), false);
        let before = draw_count(&scene, &game);

        let mut wins = 0;
        for _ in 0..1000 {
            if let GameEvent::Won { score } = roll(&mut game) {
                assert!(score >= WINNING_SCORE);
                wins += 1;
            }
            if game.has_won() {
                break;
            }
        }
        assert!(game.has_won());
        assert_eq!(wins, 1);

        // one more roll after winning is a plain roll
        assert!(matches!(roll(&mut game), GameEvent::Rolled { .. }));

        // two more score digits and the seven-letter banner
        assert!(game.score() >= 100 && game.score() < 1000);
        assert_eq!(draw_count(&scene, &game), before + 2 + 7);
    }

    /// Whether `c` is drawn unpickable at text position (x, y)
    fn has_text(scene: &DiceScene, game: &GameState, c: char, x: f32, y: f32) -> bool {
        let mesh = scene.glyphs().get(c).unwrap();
        let expected = DiceScene::base_transform(game.camera())
            * Mat4::from_translation(Vec3::new(x, y, TEXT_Z));
        record(scene, game).iter().any(|command| {
            command.mesh == mesh
                && command.pick_id.is_none()
                && command.model_view.abs_diff_eq(expected, 1e-5)
        })
    }

    #[test]
    fn test_opponent_board_is_static() {
        let (scene, _) = DiceScene::build();
        let mut game = GameState::new(Some(8), false);

        for _ in 0..3 {
            assert!(has_text(&scene, &game, 'A', 1.5, 12.0));
            assert!(has_text(&scene, &game, '_', 1.5, 11.0));
            assert!(has_text(&scene, &game, 'I', 3.0, 12.0));
            assert!(has_text(&scene, &game, ':', 4.0, 12.0));
            assert!(has_text(&scene, &game, '0', 8.0, 12.0));
            roll(&mut game);
        }
    }

    #[test]
    fn test_score_digits_placed_by_place_value() {
        let (scene, _) = DiceScene::build();
        let mut game = GameState::new(Some(13), false);
        for _ in 0..200 {
            if game.score() >= 10 {
                break;
            }
            roll(&mut game);
        }

        let score = game.score();
        assert!((10..100).contains(&score));
        let digit = |d: u32| char::from_digit(d, 10).unwrap();
        assert!(has_text(&scene, &game, digit(score % 10), -1.5, 12.0));
        assert!(has_text(&scene, &game, digit(score / 10), -2.8, 12.0));
    }

    #[test]
    fn test_actions() {
        let mut game = GameState::new(None, true);
        let start = game.camera();

        game.apply(Action::Camera(CameraMove::Forward));
        assert_ne!(game.camera(), start);

        game.apply(Action::ToggleLight);
        assert!(!game.light().spinning);
        let angle = game.light().angle;
        game.tick(TICK);
        assert_eq!(game.light().angle, angle);

        assert!(!game.quit_requested());
        game.apply(Action::Quit);
        assert!(game.quit_requested());
    }
}
