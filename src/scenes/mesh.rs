use glam::{Vec3, Vec4};

use crate::math::AABB;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
}

/// Surface properties shared by every vertex of a mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Vec4,
    pub shininess: f32,
}

impl Material {
    pub const fn new(color: Vec4, shininess: f32) -> Self {
        Self { color, shininess }
    }
}

/// Triangle list in object space
#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    material: Material,
    bounds: Option<AABB>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex>, material: Material) -> Self {
        assert!(
            vertices.len() % 3 == 0,
            "mesh vertex count {} is not a multiple of 3",
            vertices.len()
        );
        let bounds = AABB::from_points(vertices.iter().map(|v| v.position));
        Self {
            vertices,
            material,
            bounds,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn triangles(&self) -> impl Iterator<Item = &[Vertex]> {
        self.vertices.chunks_exact(3)
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn material(&self) -> Material {
        self.material
    }

    /// `None` for an empty mesh
    pub fn bounds(&self) -> Option<AABB> {
        self.bounds
    }
}

/// Accumulates flat-shaded quads into a triangle list
#[derive(Debug, Default, Clone)]
pub struct MeshBuilder {
    vertices: Vec<Vertex>,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Two triangles `a b c` and `a c d` sharing the normal of `a b c`.
    /// Corners must wind counter-clockwise seen from the front.
    pub fn quad(&mut self, a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> &mut Self {
        let normal = (b - a).cross(c - b).normalize_or_zero();
        for position in [a, b, c, a, c, d] {
            self.vertices.push(Vertex { position, normal });
        }
        self
    }

    /// Axis-aligned box spanning `min..max`, outward normals
    pub fn cuboid(&mut self, min: Vec3, max: Vec3) -> &mut Self {
        let corners = [
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(min.x, max.y, max.z),
            Vec3::new(max.x, max.y, max.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(max.x, min.y, min.z),
        ];
        for [a, b, c, d] in CUBOID_FACES {
            self.quad(corners[a], corners[b], corners[c], corners[d]);
        }
        self
    }

    pub fn build(self, material: Material) -> Mesh {
        Mesh::new(self.vertices, material)
    }
}

/// Corner indices per face: front, left, top, bottom, right, back
const CUBOID_FACES: [[usize; 4]; 6] = [
    [1, 0, 3, 2],
    [5, 4, 0, 1],
    [6, 5, 1, 2],
    [3, 0, 4, 7],
    [2, 3, 7, 6],
    [4, 5, 6, 7],
];

/// Handle into a [`MeshLibrary`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(usize);

impl MeshId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Geometry uploaded once at startup and referenced by id afterwards
#[derive(Debug, Default, Clone)]
pub struct MeshLibrary {
    meshes: Vec<Mesh>,
}

impl MeshLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, mesh: Mesh) -> MeshId {
        self.meshes.push(mesh);
        MeshId(self.meshes.len() - 1)
    }

    /// # Panics
    /// If `id` came from a different library
    pub fn get(&self, id: MeshId) -> &Mesh {
        &self.meshes[id.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = (MeshId, &Mesh)> {
        self.meshes.iter().enumerate().map(|(i, mesh)| (MeshId(i), mesh))
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    pub fn total_triangles(&self) -> usize {
        self.meshes.iter().map(Mesh::triangle_count).sum()
    }
}
