/// A point or direction in 3D space
pub type Vec3 = [f64; 3];

/// A 3x3 row-major matrix
pub type Mat3 = [[f64; 3]; 3];

pub const IDENTITY: Mat3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// World up direction used when aiming the camera
pub const UP: Vec3 = [0.0, 1.0, 0.0];

/// Multiplies a 3x3 matrix by a 3-dimensional vector
pub fn multiply_matrix_vector(matrix: &Mat3, vector: &Vec3) -> Vec3 {
    let mut result = [0.0; 3];
    for i in 0..3 {
        for j in 0..3 {
            result[i] += matrix[i][j] * vector[j];
        }
    }
    result
}

/// Multiplies two 3x3 matrices
pub fn multiply_matrices(a: &Mat3, b: &Mat3) -> Mat3 {
    let mut result = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    result
}

pub fn transpose(m: &Mat3) -> Mat3 {
    let mut result = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            result[i][j] = m[j][i];
        }
    }
    result
}

/// Rotation about the X-axis
pub fn rotation_x(angle: f64) -> Mat3 {
    let (sin, cos) = angle.sin_cos();
    [[1.0, 0.0, 0.0], [0.0, cos, -sin], [0.0, sin, cos]]
}

/// Rotation about the Y-axis
pub fn rotation_y(angle: f64) -> Mat3 {
    let (sin, cos) = angle.sin_cos();
    [[cos, 0.0, sin], [0.0, 1.0, 0.0], [-sin, 0.0, cos]]
}

/// Rotation about the Z-axis
pub fn rotation_z(angle: f64) -> Mat3 {
    let (sin, cos) = angle.sin_cos();
    [[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]]
}

/// Builds a rotation matrix from Euler angles applied in XYZ order
pub fn euler_to_matrix(euler: &Vec3) -> Mat3 {
    let xy = multiply_matrices(&rotation_x(euler[0]), &rotation_y(euler[1]));
    multiply_matrices(&xy, &rotation_z(euler[2]))
}

/// Extracts XYZ-order Euler angles from a pure rotation matrix
pub fn matrix_to_euler(m: &Mat3) -> Vec3 {
    let y = m[0][2].clamp(-1.0, 1.0).asin();
    if m[0][2].abs() < 0.999_999_9 {
        [(-m[1][2]).atan2(m[2][2]), y, (-m[0][1]).atan2(m[0][0])]
    } else {
        // Gimbal lock: fold all remaining rotation into X
        [m[2][1].atan2(m[1][1]), y, 0.0]
    }
}

pub fn add(a: &Vec3, b: &Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn subtract(a: &Vec3, b: &Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn scale(v: &Vec3, factor: f64) -> Vec3 {
    [v[0] * factor, v[1] * factor, v[2] * factor]
}

pub fn dot(a: &Vec3, b: &Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn cross(u: &Vec3, v: &Vec3) -> Vec3 {
    [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ]
}

pub fn length(v: &Vec3) -> f64 {
    dot(v, v).sqrt()
}

/// Normalizes a vector; the zero vector is returned unchanged
pub fn normalize(v: &Vec3) -> Vec3 {
    let length = length(v);
    if length == 0.0 {
        return *v;
    }
    [v[0] / length, v[1] / length, v[2] / length]
}

/// Linear interpolation between two vectors
pub fn lerp(from: &Vec3, to: &Vec3, t: f64) -> Vec3 {
    [
        from[0] + (to[0] - from[0]) * t,
        from[1] + (to[1] - from[1]) * t,
        from[2] + (to[2] - from[2]) * t,
    ]
}

/// Orientation of a camera at `eye` aimed at `target`.
///
/// The columns of the result are the camera's right, up and backward axes in
/// world space; the camera looks down its local -Z.
pub fn look_at(eye: &Vec3, target: &Vec3, up: &Vec3) -> Mat3 {
    let mut z = subtract(eye, target);
    if length(&z) == 0.0 {
        z = [0.0, 0.0, 1.0];
    }
    let z = normalize(&z);

    let mut x = cross(up, &z);
    if length(&x) == 0.0 {
        // Looking straight along the up axis: nudge z to pick a right vector
        let nudged = normalize(&[z[0] + 1e-4, z[1], z[2]]);
        x = cross(up, &nudged);
    }
    let x = normalize(&x);
    let y = cross(&z, &x);

    [[x[0], y[0], z[0]], [x[1], y[1], z[1]], [x[2], y[2], z[2]]]
}

/// Perspective projection of a camera-space point onto a character grid.
///
/// Returns the screen position (column, row) and the view depth, or `None`
/// when the point sits behind the near plane. `cell_aspect` is the width of a
/// cell divided by its height.
pub fn project(
    camera_space: &Vec3,
    fov_y: f64,
    width: usize,
    height: usize,
    cell_aspect: f64,
) -> Option<([f64; 2], f64)> {
    let depth = -camera_space[2];
    if depth <= 0.1 {
        return None;
    }
    let focal = 1.0 / (fov_y / 2.0).tan();
    let half_height = height as f64 / 2.0;
    let half_width = width as f64 / 2.0;
    let ndc_y = camera_space[1] * focal / depth;
    // One row is 1/cell_aspect columns tall, so columns spread wider than rows
    let ndc_x = camera_space[0] * focal / depth;
    let screen_x = half_width + ndc_x * half_height / cell_aspect;
    let screen_y = half_height - ndc_y * half_height;
    Some(([screen_x, screen_y], depth))
}
