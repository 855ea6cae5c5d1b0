use dice_scene::camera::Projection;
use dice_scene::game::GameState;
use dice_scene::picking::{PickTarget, NO_HIT_COLOR};
use dice_scene::render::{CommandRecorder, SoftwareRasterizer};
use dice_scene::scenes::dice_scene::{DIE_IDS, DIE_OFFSETS, DIE_ROW_Y};
use dice_scene::scenes::DiceScene;
use dice_scene::traits::{DrawTarget, FrameUniforms, HitTester, PassMode, Pickable, SceneComposer};
use glam::Vec3;

const SIZE: u32 = 160;
const WHITE: [u8; 4] = [255, 255, 255, 255];

#[cfg(test)]
mod rasterizer_tests {
    use super::*;

    fn render(raster: &mut SoftwareRasterizer, scene: &DiceScene, game: &GameState, id_mode: bool) {
        let (width, height) = raster.viewport();
        let uniforms = FrameUniforms::new(
            Projection::default().matrix(width, height),
            game.camera(),
            game.light_position(),
        );
        raster.render_in_id_mode(id_mode);
        raster.begin_pass(&uniforms);
        scene.compose(game, raster);
        raster.render_in_id_mode(false);
    }

    fn setup() -> (DiceScene, SoftwareRasterizer, GameState) {
        let (scene, meshes) = DiceScene::build();
        let raster = SoftwareRasterizer::new(SIZE, SIZE, meshes);
        (scene, raster, GameState::new(Some(11), false))
    }

    fn die_one_pixel(game: &GameState) -> (u32, u32) {
        let eye = DiceScene::base_transform(game.camera())
            .transform_point3(Vec3::new(DIE_OFFSETS[0], DIE_ROW_Y, 0.0));
        let clip = Projection::default().matrix(SIZE, SIZE) * eye.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        (
            ((ndc.x * 0.5 + 0.5) * SIZE as f32) as u32,
            ((0.5 - ndc.y * 0.5) * SIZE as f32) as u32,
        )
    }

    #[test]
    fn test_lit_frame_shows_red_die_on_white() {
        let (scene, mut raster, game) = setup();
        render(&mut raster, &scene, &game, false);

        let (x, y) = die_one_pixel(&game);
        let die = raster.read_pixel(x, y).unwrap();
        assert!(die[0] > 0, "die face is unlit: {die:?}");
        assert_eq!(&die[1..], &[0, 0, 255]);
        assert_eq!(raster.read_pixel(SIZE - 1, SIZE - 1), Some(WHITE));
        assert_eq!(raster.last_pass(), Some(PassMode::Lit));
    }

    #[test]
    fn test_every_mesh_triangle_is_submitted() {
        let (scene, mut raster, game) = setup();
        render(&mut raster, &scene, &game, false);

        let cube = raster.meshes().get(scene.cube()).triangle_count();
        assert!(raster.triangles_drawn() >= DIE_IDS.len() * cube);
    }

    #[test]
    fn test_id_coverage_lies_inside_lit_coverage() {
        let (scene, mut raster, game) = setup();

        render(&mut raster, &scene, &game, true);
        let ids = raster.pixels().to_vec();
        render(&mut raster, &scene, &game, false);
        let lit = raster.pixels();

        let mut pickable = 0;
        for (id, color) in ids.chunks_exact(4).zip(lit.chunks_exact(4)) {
            if id != NO_HIT_COLOR {
                pickable += 1;
                assert_ne!(color, WHITE);
            }
        }
        assert!(pickable > 0);
    }

    #[test]
    fn test_frames_are_deterministic() {
        let (scene, mut raster, game) = setup();
        render(&mut raster, &scene, &game, false);
        let first = raster.pixels().to_vec();
        render(&mut raster, &scene, &game, false);
        assert_eq!(raster.pixels(), first.as_slice());
    }

    #[test]
    fn test_same_state_records_same_commands() {
        let (scene, _, mut game) = setup();
        game.handle_pick(PickTarget::Object(DIE_IDS[0]));
        game.tick(0.05);

        let uniforms = FrameUniforms::new(
            Projection::default().matrix(SIZE, SIZE),
            game.camera(),
            game.light_position(),
        );
        let mut recorder = CommandRecorder::new(SIZE, SIZE);
        for _ in 0..2 {
            recorder.begin_pass(&uniforms);
            scene.compose(&game, &mut recorder);
        }

        let passes = recorder.passes();
        assert_eq!(passes.len(), 2);
        assert_eq!(passes[0].mode, PassMode::Lit);
        assert!(!passes[0].commands.is_empty());
        assert_eq!(passes[0], passes[1]);
    }

    #[test]
    fn test_id_frame_is_never_presentable() {
        let (scene, mut raster, game) = setup();
        render(&mut raster, &scene, &game, true);
        assert!(raster.presentable_pixels().is_none());

        let (x, y) = die_one_pixel(&game);
        assert_eq!(raster.hit_test(x, y), PickTarget::Object(DIE_IDS[0]));

        render(&mut raster, &scene, &game, false);
        assert!(raster.presentable_pixels().is_some());
        assert_eq!(raster.hit_test(x, y), PickTarget::None);
    }

    #[test]
    fn test_resize_keeps_die_under_projected_center() {
        let (scene, mut raster, game) = setup();
        raster.resize(SIZE * 2, SIZE);
        render(&mut raster, &scene, &game, true);

        let eye = DiceScene::base_transform(game.camera())
            .transform_point3(Vec3::new(DIE_OFFSETS[0], DIE_ROW_Y, 0.0));
        let clip = Projection::default().matrix(SIZE * 2, SIZE) * eye.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        let x = ((ndc.x * 0.5 + 0.5) * (SIZE * 2) as f32) as u32;
        let y = ((0.5 - ndc.y * 0.5) * SIZE as f32) as u32;

        assert_eq!(raster.pixels().len(), (SIZE * 2 * SIZE * 4) as usize);
        assert_eq!(raster.hit_test(x, y), PickTarget::Object(DIE_IDS[0]));
    }
}
