//! The 3D background: a slowly turning point cloud and a wobbling wireframe
//! sphere, rasterised into the canvas from the choreographed camera.

use crate::camera::CameraFrame;
use crate::graphics::{apply_fog, draw_line, Canvas};
use crate::math::{
    add, multiply_matrices, multiply_matrix_vector, project, rotation_x, rotation_y, subtract,
    transpose, Mat3, Vec3,
};
use crate::vertex::Vertex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;
use std::time::Duration;

/// Vertical field of view of the camera
pub const FOV_Y: f64 = 35.0 * PI / 180.0;
/// Width of a terminal cell relative to its height
pub const CELL_ASPECT: f64 = 0.5;
pub const FOG_NEAR: f64 = 30.0;
pub const FOG_FAR: f64 = 130.0;

pub const DEFAULT_POINT_COUNT: usize = 800;
/// Edge length of the cube the point cloud is spread over
const POINT_SPREAD: f64 = 100.0;
/// Point cloud spin per frame, about x and y
const POINT_SPIN: [f64; 2] = [0.0001, 0.0003];

const SPHERE_CENTER: Vec3 = [0.0, 0.0, -25.0];
const SPHERE_RADIUS: f64 = 8.0;
const SPHERE_RINGS: usize = 8;
const SPHERE_SEGMENTS: usize = 24;

const POINT_COLOR: (u8, u8, u8) = (255, 0, 128);
const SPHERE_COLOR: (u8, u8, u8) = (219, 39, 119);

pub struct Scene {
    points: Vec<Vec3>,
    points_rotation: [f64; 2],
    sphere_rotation: [f64; 2],
    elapsed: Duration,
}

impl Scene {
    pub fn new(point_count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let points = (0..point_count)
            .map(|_| {
                [
                    (rng.gen::<f64>() - 0.5) * POINT_SPREAD,
                    (rng.gen::<f64>() - 0.5) * POINT_SPREAD,
                    (rng.gen::<f64>() - 0.5) * POINT_SPREAD,
                ]
            })
            .collect();
        Scene {
            points,
            points_rotation: [0.0, 0.0],
            sphere_rotation: [0.0, 0.0],
            elapsed: Duration::ZERO,
        }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// One frame of ambient motion
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed += dt;
        self.points_rotation[0] += POINT_SPIN[0];
        self.points_rotation[1] += POINT_SPIN[1];
        let time = self.elapsed.as_secs_f64();
        self.sphere_rotation = [(time * 0.15).sin() * 0.2, (time * 0.25).cos() * 0.2];
    }

    /// Draws the scene as seen from `camera`
    pub fn draw(&self, canvas: &mut Canvas, camera: &CameraFrame) {
        let view = transpose(&camera.orientation);
        let (width, height) = (canvas.width(), canvas.height());
        let project_vertex = |world: Vec3| -> Option<Vertex> {
            let camera_space = multiply_matrix_vector(&view, &subtract(&world, &camera.position));
            project(&camera_space, FOV_Y, width, height, CELL_ASPECT).map(
                |(screen_position, depth)| Vertex {
                    position: world,
                    screen_position,
                    depth,
                },
            )
        };

        // Point cloud
        let spin = multiply_matrices(
            &rotation_y(self.points_rotation[1]),
            &rotation_x(self.points_rotation[0]),
        );
        for point in &self.points {
            let Some(vertex) = project_vertex(multiply_matrix_vector(&spin, point)) else {
                continue;
            };
            if let Some(color) = apply_fog(POINT_COLOR, vertex.depth, FOG_NEAR, FOG_FAR) {
                let symbol = if vertex.depth < FOG_NEAR { '*' } else { '.' };
                canvas.plot(
                    vertex.screen_position[0],
                    vertex.screen_position[1],
                    vertex.depth,
                    symbol,
                    color,
                );
            }
        }

        // Wireframe sphere
        let wobble = multiply_matrices(
            &rotation_y(self.sphere_rotation[1]),
            &rotation_x(self.sphere_rotation[0]),
        );
        for (start, end) in sphere_edges(&wobble) {
            let (Some(v0), Some(v1)) = (project_vertex(start), project_vertex(end)) else {
                continue;
            };
            let depth = (v0.depth + v1.depth) / 2.0;
            if let Some(color) = apply_fog(SPHERE_COLOR, depth, FOG_NEAR, FOG_FAR) {
                draw_line(&v0, &v1, canvas, '·', color);
            }
        }
    }
}

/// Latitude rings and meridians of the sphere, in world space
fn sphere_edges(rotation: &Mat3) -> Vec<(Vec3, Vec3)> {
    let point = |latitude: f64, longitude: f64| -> Vec3 {
        let local = [
            SPHERE_RADIUS * latitude.cos() * longitude.cos(),
            SPHERE_RADIUS * latitude.sin(),
            SPHERE_RADIUS * latitude.cos() * longitude.sin(),
        ];
        add(&multiply_matrix_vector(rotation, &local), &SPHERE_CENTER)
    };
    let mut edges = Vec::with_capacity(2 * SPHERE_RINGS * SPHERE_SEGMENTS);

    for ring in 1..SPHERE_RINGS {
        let latitude = -PI / 2.0 + PI * ring as f64 / SPHERE_RINGS as f64;
        for segment in 0..SPHERE_SEGMENTS {
            let a = 2.0 * PI * segment as f64 / SPHERE_SEGMENTS as f64;
            let b = 2.0 * PI * (segment + 1) as f64 / SPHERE_SEGMENTS as f64;
            edges.push((point(latitude, a), point(latitude, b)));
        }
    }
    for meridian in 0..SPHERE_SEGMENTS / 2 {
        let longitude = 2.0 * PI * meridian as f64 / (SPHERE_SEGMENTS / 2) as f64;
        for ring in 0..SPHERE_RINGS {
            let a = -PI / 2.0 + PI * ring as f64 / SPHERE_RINGS as f64;
            let b = -PI / 2.0 + PI * (ring + 1) as f64 / SPHERE_RINGS as f64;
            edges.push((point(a, longitude), point(b, longitude)));
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraChoreographer;
    use crate::math::{length, IDENTITY};
    use crate::section::Section;

    #[test]
    fn points_fill_the_spread_cube() {
        let scene = Scene::new(DEFAULT_POINT_COUNT, 9);
        assert_eq!(scene.points().len(), DEFAULT_POINT_COUNT);
        assert!(scene
            .points()
            .iter()
            .all(|p| p.iter().all(|c| c.abs() <= POINT_SPREAD / 2.0)));
    }

    #[test]
    fn sphere_vertices_sit_on_the_radius() {
        for (start, end) in sphere_edges(&IDENTITY) {
            assert!((length(&subtract(&start, &SPHERE_CENTER)) - SPHERE_RADIUS).abs() < 1e-9);
            assert!((length(&subtract(&end, &SPHERE_CENTER)) - SPHERE_RADIUS).abs() < 1e-9);
        }
    }

    #[test]
    fn sphere_is_visible_from_every_section() {
        let scene = Scene::new(0, 0);
        let mut camera = CameraChoreographer::default();
        for section in Section::ALL {
            camera.frame_section(section);
            let frame = camera.advance(Duration::from_secs(5));
            let mut canvas = Canvas::new(80, 24);
            scene.draw(&mut canvas, &frame);
            let drawn = (0..24).map(|y| canvas.row_text(y)).filter(|row| row.contains('·')).count();
            assert!(drawn > 0, "sphere missing from {section}");
        }
    }
}
