/// Mesh storage: a vertex list and a list of faces indexing into it
use crate::vector::Vector3;

/// A polygon given as 0-based indices into [`Mesh::vertices`]
pub type Face = Vec<u32>;

/// A mesh as loaded from a model file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vector3>,
    pub faces: Vec<Face>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, vertex: Vector3) {
        self.vertices.push(vertex);
    }

    /// Appends a face. Empty faces are dropped.
    pub fn add_face(&mut self, face: Face) {
        if !face.is_empty() {
            self.faces.push(face);
        }
    }

    /// Resolves the vertices of a face in order
    ///
    /// Returns `None` if any index is outside the vertex list.
    pub fn face_vertices(&self, face: &[u32]) -> Option<Vec<Vector3>> {
        face.iter()
            .map(|&i| self.vertices.get(i as usize).copied())
            .collect()
    }

    /// The first triangle of a face, or `None` when it has fewer than three corners
    pub fn first_triangle(&self, face: &[u32]) -> Option<[Vector3; 3]> {
        match face {
            [a, b, c, ..] => Some([
                *self.vertices.get(*a as usize)?,
                *self.vertices.get(*b as usize)?,
                *self.vertices.get(*c as usize)?,
            ]),
            _ => None,
        }
    }

    /// Finds the first face index that does not refer to a loaded vertex
    ///
    /// Returns `(face number, offending 0-based index)`.
    pub fn find_invalid_index(&self) -> Option<(usize, u32)> {
        let count = self.vertices.len();
        self.faces.iter().enumerate().find_map(|(n, face)| {
            face.iter().find(|&&i| i as usize >= count).map(|&i| (n, i))
        })
    }
}
