use crate::math::Vec3;

/// Vertex structure with world position, screen position, and view depth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub screen_position: [f64; 2],
    pub depth: f64,
}
