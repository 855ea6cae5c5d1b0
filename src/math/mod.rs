mod aabb;
pub mod color;
mod ray;
mod transform_stack;

pub use aabb::AABB;
pub use color::to_rgba8;
pub use ray::intersect_aabb;
pub use transform_stack::{TransformStack, MAX_DEPTH};
