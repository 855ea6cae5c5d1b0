//! Hit testing against object-space bounding boxes instead of a rendered
//! id buffer. Records draws like any [`DrawTarget`] and casts the pick ray
//! through them on demand.

use glam::{Mat4, Vec2, Vec3, Vec4};

use super::pick_id::{PickId, PickTarget};
use crate::math::{intersect_aabb, AABB};
use crate::scenes::{MeshId, MeshLibrary};
use crate::traits::{DrawTarget, FrameUniforms, HitTester, Pickable};

#[derive(Debug, Clone, Copy)]
struct Placed {
    world_to_object: Mat4,
    bounds: AABB,
    id: Option<PickId>,
}

pub struct BoundsPicker {
    bounds: Vec<Option<AABB>>,
    width: u32,
    height: u32,
    inverse_projection: Mat4,
    current_id: Option<PickId>,
    placed: Vec<Placed>,
}

impl BoundsPicker {
    pub fn new(meshes: &MeshLibrary, width: u32, height: u32) -> Self {
        let bounds = meshes.iter().map(|(_, mesh)| mesh.bounds()).collect();
        Self {
            bounds,
            width,
            height,
            inverse_projection: Mat4::IDENTITY,
            current_id: None,
            placed: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    /// Eye-space segment from the near to the far plane through the pixel center
    fn eye_ray(&self, x: u32, y: u32) -> (Vec3, Vec3) {
        let ndc = Vec2::new(
            (x as f32 + 0.5) / self.width as f32 * 2.0 - 1.0,
            1.0 - (y as f32 + 0.5) / self.height as f32 * 2.0,
        );
        let unproject = |z: f32| {
            let p = self.inverse_projection * Vec4::new(ndc.x, ndc.y, z, 1.0);
            p.truncate() / p.w
        };
        let near = unproject(-1.0);
        let far = unproject(1.0);
        (near, far - near)
    }
}

impl Pickable for BoundsPicker {
    fn assign_id(&mut self, id: Option<PickId>) {
        self.current_id = id;
    }

    /// Bounds never change with the pass mode
    fn render_in_id_mode(&mut self, _enabled: bool) {}
}

impl DrawTarget for BoundsPicker {
    fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn begin_pass(&mut self, uniforms: &FrameUniforms) {
        self.inverse_projection = uniforms.projection.inverse();
        self.current_id = None;
        self.placed.clear();
    }

    fn draw(&mut self, model_view: Mat4, mesh: MeshId) {
        let Some(bounds) = self.bounds.get(mesh.index()).copied().flatten() else {
            return;
        };
        if model_view.determinant().abs() < f32::EPSILON {
            return;
        }
        self.placed.push(Placed {
            world_to_object: model_view.inverse(),
            bounds,
            id: self.current_id,
        });
    }
}

impl HitTester for BoundsPicker {
    /// Nearest box along the ray wins. Boxes drawn without an id still
    /// occlude what lies behind them.
    fn hit_test(&self, x: u32, y: u32) -> PickTarget {
        if x >= self.width || y >= self.height {
            return PickTarget::None;
        }
        let (origin, dir) = self.eye_ray(x, y);

        self.placed
            .iter()
            .filter_map(|placed| {
                let o = placed.world_to_object.transform_point3(origin);
                let d = placed.world_to_object.transform_vector3(dir);
                intersect_aabb(o, d, &placed.bounds).map(|t| (t, placed.id))
            })
            .filter(|(t, _)| *t <= 1.0)
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .and_then(|(_, id)| id)
            .map_or(PickTarget::None, PickTarget::Object)
    }
}
