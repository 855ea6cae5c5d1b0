use glam::{Mat4, Vec3, Vec4};

use crate::scenes::Material;

/// Light source color terms. Each is multiplied by the material color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSettings {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl Default for LightSettings {
    fn default() -> Self {
        Self {
            ambient: Vec3::ZERO,
            diffuse: Vec3::ONE,
            specular: Vec3::splat(0.4),
        }
    }
}

impl LightSettings {
    /// Phong color of one vertex. All vectors are in eye space and the
    /// viewer sits at the origin.
    pub fn shade(&self, material: Material, position: Vec3, normal: Vec3, light: Vec3) -> Vec4 {
        let n = normal.normalize_or_zero();
        let l = (light - position).normalize_or_zero();
        let e = (-position).normalize_or_zero();
        let h = (l + e).normalize_or_zero();

        let base = material.color.truncate();
        let l_dot_n = l.dot(n);

        let ambient = self.ambient * base;
        let diffuse = l_dot_n.max(0.0) * self.diffuse * base;
        let specular = if l_dot_n < 0.0 {
            Vec3::ZERO
        } else {
            n.dot(h).max(0.0).powf(material.shininess) * self.specular * base
        };

        (ambient + diffuse + specular)
            .clamp(Vec3::ZERO, Vec3::ONE)
            .extend(material.color.w)
    }
}

/// Light position in eye space. The light is given relative to the camera
/// transform, not to the object being drawn.
pub fn light_in_eye_space(camera: Mat4, light_position: Vec4) -> Vec3 {
    (camera * light_position).truncate()
}
