//! Identity, perspective and look-at matrices
//!
//! All builders write into an existing matrix and hand it back, so the
//! camera can keep its `view`/`projection` storage across frames. Layout is
//! column-major: index `i` of [`Mat4Array`] is column `i / 4`, row `i % 4`.

use glam::{Mat4, Vec3};

/// Flat column-major matrix, as uploaded to shaders.
pub type Mat4Array = [f32; 16];

/// Per-axis tolerance under which eye and center are treated as the same point.
pub const LOOK_AT_EPSILON: f32 = 0.000_001;

/// Write the identity matrix into `out`.
pub fn set_identity(out: &mut Mat4) -> &mut Mat4 {
    *out = Mat4::IDENTITY;
    out
}

/// Write an OpenGL-style symmetric perspective frustum into `out`.
///
/// `fovy` is the vertical field of view in radians. Nothing is validated:
/// a zero `aspect` or `near == far` produces non-finite entries.
pub fn set_perspective(out: &mut Mat4, fovy: f32, aspect: f32, near: f32, far: f32) -> &mut Mat4 {
    let f = 1.0 / (fovy / 2.0).tan();
    let nf = 1.0 / (near - far);

    let mut m: Mat4Array = [0.0; 16];
    m[0] = f / aspect;
    m[5] = f;
    m[10] = (far + near) * nf;
    m[11] = -1.0;
    m[14] = 2.0 * far * near * nf;

    *out = Mat4::from_cols_array(&m);
    out
}

/// Write a right-handed view matrix looking from `eye` towards `center`.
///
/// Coincident eye and center give the identity. When `up` is parallel to the
/// viewing axis the x axis (and then the y axis) collapses to the zero vector
/// instead of dividing by zero.
pub fn set_look_at(out: &mut Mat4, eye: Vec3, center: Vec3, up: Vec3) -> &mut Mat4 {
    if (eye.x - center.x).abs() < LOOK_AT_EPSILON
        && (eye.y - center.y).abs() < LOOK_AT_EPSILON
        && (eye.z - center.z).abs() < LOOK_AT_EPSILON
    {
        return set_identity(out);
    }

    let z = eye - center;
    let z = z * (1.0 / z.length());
    let x = normalize_or_zero(up.cross(z));
    let y = normalize_or_zero(z.cross(x));

    let m: Mat4Array = [
        x.x,
        y.x,
        z.x,
        0.0,
        x.y,
        y.y,
        z.y,
        0.0,
        x.z,
        y.z,
        z.z,
        0.0,
        -x.dot(eye),
        -y.dot(eye),
        -z.dot(eye),
        1.0,
    ];

    *out = Mat4::from_cols_array(&m);
    out
}

/// Build a fresh identity matrix.
#[must_use]
pub fn identity() -> Mat4 {
    let mut out = Mat4::ZERO;
    set_identity(&mut out);
    out
}

/// Build a fresh perspective matrix. See [`set_perspective`].
#[must_use]
pub fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let mut out = Mat4::ZERO;
    set_perspective(&mut out, fovy, aspect, near, far);
    out
}

/// Build a fresh look-at matrix. See [`set_look_at`].
#[must_use]
pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Mat4 {
    let mut out = Mat4::ZERO;
    set_look_at(&mut out, eye, center, up);
    out
}

// Exact zero check: only a truly degenerate axis falls back to zero.
fn normalize_or_zero(v: Vec3) -> Vec3 {
    let len = v.length();
    if len == 0.0 { Vec3::ZERO } else { v * (1.0 / len) }
}
