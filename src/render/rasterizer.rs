//! CPU triangle rasterizer.
//!
//! Produces an RGBA8 color buffer and an `f32` depth buffer. Vertices are
//! lit in eye space (Gouraud) and colors are interpolated perspective
//! correctly. In id mode every fragment of a draw gets the same flat pick
//! color, so the buffer can be read back to resolve what lies under a pixel.

use glam::{Mat4, Vec2, Vec3, Vec4};
use log::trace;

use super::lighting::{light_in_eye_space, LightSettings};
use crate::math::color::WHITE;
use crate::math::to_rgba8;
use crate::picking::{PickId, PickTarget, NO_HIT_COLOR};
use crate::scenes::{MeshId, MeshLibrary};
use crate::traits::{DrawTarget, FrameUniforms, HitTester, PassMode, Pickable};

/// Triangles with a vertex this close to the eye plane are dropped
const MIN_CLIP_W: f32 = 1e-5;

/// Projected vertex ready for scan conversion
#[derive(Debug, Clone, Copy)]
struct ScreenVertex {
    position: Vec2,
    depth: f32,
    inv_w: f32,
    color: Vec4,
}

pub struct SoftwareRasterizer {
    width: u32,
    height: u32,
    color: Vec<u8>,
    depth: Vec<f32>,
    meshes: MeshLibrary,
    lighting: LightSettings,
    id_mode: bool,
    current_id: Option<PickId>,
    uniforms: FrameUniforms,
    light_eye: Vec3,
    last_pass: Option<PassMode>,
    triangles_drawn: usize,
}

impl SoftwareRasterizer {
    pub fn new(width: u32, height: u32, meshes: MeshLibrary) -> Self {
        let pixels = width as usize * height as usize;
        Self {
            width,
            height,
            color: vec![0; pixels * 4],
            depth: vec![f32::INFINITY; pixels],
            meshes,
            lighting: LightSettings::default(),
            id_mode: false,
            current_id: None,
            uniforms: FrameUniforms::new(Mat4::IDENTITY, Mat4::IDENTITY, Vec4::ZERO),
            light_eye: Vec3::ZERO,
            last_pass: None,
            triangles_drawn: 0,
        }
    }

    /// Reallocate buffers. Contents are undefined until the next pass.
    pub fn resize(&mut self, width: u32, height: u32) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        trace!("rasterizer resize {}x{} -> {}x{}", self.width, self.height, width, height);
        let pixels = width as usize * height as usize;
        self.width = width;
        self.height = height;
        self.color = vec![0; pixels * 4];
        self.depth = vec![f32::INFINITY; pixels];
        self.last_pass = None;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn meshes(&self) -> &MeshLibrary {
        &self.meshes
    }

    /// Mode of the most recent pass, `None` before the first one
    pub fn last_pass(&self) -> Option<PassMode> {
        self.last_pass
    }

    /// Triangles submitted since the last `begin_pass`, culled ones included
    pub fn triangles_drawn(&self) -> usize {
        self.triangles_drawn
    }

    /// Raw RGBA8 rows, top row first, whatever the last pass wrote
    pub fn pixels(&self) -> &[u8] {
        &self.color
    }

    /// The color buffer, unless it currently holds an id pass
    pub fn presentable_pixels(&self) -> Option<&[u8]> {
        match self.last_pass {
            Some(PassMode::Lit) => Some(&self.color),
            _ => None,
        }
    }

    pub fn read_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let index = self.index(x, y)? * 4;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.color[index..index + 4]);
        Some(rgba)
    }

    pub fn read_depth(&self, x: u32, y: u32) -> Option<f32> {
        self.index(x, y).map(|i| self.depth[i])
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    fn clear(&mut self, rgba: [u8; 4]) {
        for pixel in self.color.chunks_exact_mut(4) {
            pixel.copy_from_slice(&rgba);
        }
        self.depth.fill(f32::INFINITY);
    }

    /// Clip to NDC to pixels. `None` when the vertex is at or behind the eye.
    fn project(&self, clip: Vec4, color: Vec4) -> Option<ScreenVertex> {
        if clip.w <= MIN_CLIP_W {
            return None;
        }
        let inv_w = 1.0 / clip.w;
        let ndc = clip.truncate() * inv_w;
        Some(ScreenVertex {
            position: Vec2::new(
                (ndc.x * 0.5 + 0.5) * self.width as f32,
                (0.5 - ndc.y * 0.5) * self.height as f32,
            ),
            depth: ndc.z,
            inv_w,
            color,
        })
    }

    fn fill_triangle(&mut self, tri: [ScreenVertex; 3], flat: Option<[u8; 4]>) {
        let [a, b, c] = tri;
        let area = edge(a.position, b.position, c.position);
        if area.abs() < f32::EPSILON {
            return;
        }

        let lo = a.position.min(b.position).min(c.position).floor().max(Vec2::ZERO);
        let hi = a
            .position
            .max(b.position)
            .max(c.position)
            .ceil()
            .min(Vec2::new(self.width as f32, self.height as f32));
        if lo.x >= hi.x || lo.y >= hi.y {
            return;
        }

        for y in lo.y as u32..hi.y as u32 {
            for x in lo.x as u32..hi.x as u32 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let w0 = edge(b.position, c.position, p) / area;
                let w1 = edge(c.position, a.position, p) / area;
                let w2 = edge(a.position, b.position, p) / area;
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }

                let depth = w0 * a.depth + w1 * b.depth + w2 * c.depth;
                if !(-1.0..=1.0).contains(&depth) {
                    continue;
                }
                let index = y as usize * self.width as usize + x as usize;
                if depth >= self.depth[index] {
                    continue;
                }
                self.depth[index] = depth;

                let rgba = match flat {
                    Some(rgba) => rgba,
                    None => {
                        let inv_w = w0 * a.inv_w + w1 * b.inv_w + w2 * c.inv_w;
                        let color = (a.color * (w0 * a.inv_w)
                            + b.color * (w1 * b.inv_w)
                            + c.color * (w2 * c.inv_w))
                            / inv_w;
                        to_rgba8(color)
                    }
                };
                self.color[index * 4..index * 4 + 4].copy_from_slice(&rgba);
            }
        }
    }
}

/// Twice the signed area of `a b p`
fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

impl Pickable for SoftwareRasterizer {
    fn assign_id(&mut self, id: Option<PickId>) {
        self.current_id = id;
    }

    fn render_in_id_mode(&mut self, enabled: bool) {
        self.id_mode = enabled;
    }
}

impl DrawTarget for SoftwareRasterizer {
    fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn begin_pass(&mut self, uniforms: &FrameUniforms) {
        let (mode, background) = if self.id_mode {
            (PassMode::PickId, NO_HIT_COLOR)
        } else {
            (PassMode::Lit, to_rgba8(WHITE))
        };
        self.clear(background);
        self.uniforms = *uniforms;
        self.light_eye = light_in_eye_space(uniforms.camera, uniforms.light_position);
        self.current_id = None;
        self.last_pass = Some(mode);
        self.triangles_drawn = 0;
    }

    fn draw(&mut self, model_view: Mat4, mesh: MeshId) {
        let flat = self
            .id_mode
            .then(|| self.current_id.map_or(NO_HIT_COLOR, PickId::encode));
        let projection = self.uniforms.projection;

        let triangle_count = self.meshes.get(mesh).triangle_count();
        for t in 0..triangle_count {
            let mut screen = [None; 3];
            {
                let mesh = self.meshes.get(mesh);
                let material = mesh.material();
                for (slot, vertex) in screen.iter_mut().zip(&mesh.vertices()[t * 3..t * 3 + 3]) {
                    let eye = model_view.transform_point3(vertex.position);
                    let color = match flat {
                        Some(_) => Vec4::ZERO,
                        None => {
                            let normal = model_view.transform_vector3(vertex.normal);
                            self.lighting.shade(material, eye, normal, self.light_eye)
                        }
                    };
                    *slot = self.project(projection * eye.extend(1.0), color);
                }
            }
            self.triangles_drawn += 1;
            if let [Some(a), Some(b), Some(c)] = screen {
                self.fill_triangle([a, b, c], flat);
            }
        }
    }
}

impl HitTester for SoftwareRasterizer {
    /// Only meaningful right after an id pass; lit pixels never resolve.
    fn hit_test(&self, x: u32, y: u32) -> PickTarget {
        if self.last_pass != Some(PassMode::PickId) {
            return PickTarget::None;
        }
        self.read_pixel(x, y)
            .map_or(PickTarget::None, PickTarget::from_color)
    }
}
