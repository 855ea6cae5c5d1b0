use glam::Vec4;

pub const RED: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);
pub const WHITE: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);

/// Quantize a linear `[0, 1]` color to RGBA8, clamping out-of-range channels
pub fn to_rgba8(color: Vec4) -> [u8; 4] {
    let c = color.clamp(Vec4::ZERO, Vec4::ONE) * 255.0 + Vec4::splat(0.5);
    [c.x as u8, c.y as u8, c.z as u8, c.w as u8]
}
