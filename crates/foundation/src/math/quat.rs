use super::Vec3;

/// Unit quaternion `[x, y, z, w]` used for camera orbit orientation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quat {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle_rad` around `axis` (need not be normalized).
    pub fn from_axis_angle(axis: Vec3, angle_rad: f64) -> Self {
        let axis = axis.normalize();
        let (s, c) = (angle_rad * 0.5).sin_cos();
        Self::new(axis.x * s, axis.y * s, axis.z * s, c)
    }

    /// Shortest rotation taking unit vector `a` onto unit vector `b`.
    pub fn from_unit_vectors(a: Vec3, b: Vec3) -> Self {
        let dot = a.dot(b).clamp(-1.0, 1.0);

        // Nearly opposite vectors: pick arbitrary orthogonal axis.
        if dot < -0.999999 {
            let mut axis = Vec3::X.cross(a);
            if axis.length_squared() < 1e-12 {
                axis = Vec3::Y.cross(a);
            }
            let axis = axis.normalize();
            return Self::new(axis.x, axis.y, axis.z, 0.0);
        }

        if dot > 0.999999 {
            return Self::IDENTITY;
        }

        let axis = a.cross(b);
        Self::new(axis.x, axis.y, axis.z, 1.0 + dot).normalize()
    }

    pub fn normalize(self) -> Self {
        let n = (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt();
        if n > 1e-10 {
            Self::new(self.x / n, self.y / n, self.z / n, self.w / n)
        } else {
            Self::IDENTITY
        }
    }

    /// Rotation angle in radians, in [0, 2π].
    pub fn angle(self) -> f64 {
        2.0 * self.w.clamp(-1.0, 1.0).acos()
    }

    pub fn rotate(self, v: Vec3) -> Vec3 {
        let qv = Vec3::new(self.x, self.y, self.z);
        let t = qv.cross(v) * 2.0;
        v + t * self.w + qv.cross(t)
    }

    /// Fraction `t` of this rotation, interpolated from identity.
    pub fn scaled(self, t: f64) -> Self {
        Self::IDENTITY.slerp(self, t)
    }

    pub fn slerp(self, other: Self, t: f64) -> Self {
        let mut dot = self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w;

        // Take the shorter path.
        let mut b = other;
        if dot < 0.0 {
            b = Self::new(-b.x, -b.y, -b.z, -b.w);
            dot = -dot;
        }

        if dot > 0.9995 {
            return Self::new(
                self.x + t * (b.x - self.x),
                self.y + t * (b.y - self.y),
                self.z + t * (b.z - self.z),
                self.w + t * (b.w - self.w),
            )
            .normalize();
        }

        let theta_0 = dot.clamp(-1.0, 1.0).acos();
        let theta = theta_0 * t;
        let sin_theta = theta.sin();
        let sin_theta_0 = theta_0.sin();

        let s0 = theta.cos() - dot * sin_theta / sin_theta_0;
        let s1 = sin_theta / sin_theta_0;

        Self::new(
            s0 * self.x + s1 * b.x,
            s0 * self.y + s1 * b.y,
            s0 * self.z + s1 * b.z,
            s0 * self.w + s1 * b.w,
        )
    }
}

impl std::ops::Mul for Quat {
    type Output = Self;

    /// Hamilton product: `self * rhs` applies `rhs` first.
    fn mul(self, b: Self) -> Self::Output {
        let a = self;
        Self::new(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Quat;
    use crate::math::Vec3;

    fn assert_vec_close(a: Vec3, b: Vec3, eps: f64) {
        let diff = (a - b).length();
        assert!(diff <= eps, "expected {a:?} ~= {b:?} (diff {diff})");
    }

    #[test]
    fn identity_leaves_vectors_alone() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_vec_close(Quat::IDENTITY.rotate(v), v, 1e-12);
    }

    #[test]
    fn from_unit_vectors_maps_a_onto_b() {
        let q = Quat::from_unit_vectors(Vec3::X, Vec3::Y);
        assert_vec_close(q.rotate(Vec3::X), Vec3::Y, 1e-9);

        let flipped = Quat::from_unit_vectors(Vec3::Z, -Vec3::Z);
        assert_vec_close(flipped.rotate(Vec3::Z), -Vec3::Z, 1e-9);
    }

    #[test]
    fn axis_angle_quarter_turn_about_y() {
        let q = Quat::from_axis_angle(Vec3::Y, std::f64::consts::FRAC_PI_2);
        assert_vec_close(q.rotate(Vec3::Z), Vec3::X, 1e-9);
        assert!((q.angle() - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn scaled_halves_the_angle() {
        let q = Quat::from_axis_angle(Vec3::Y, 0.8);
        assert!((q.scaled(0.5).angle() - 0.4).abs() < 1e-9);
        assert_eq!(q.scaled(0.0), Quat::IDENTITY);
    }

    #[test]
    fn product_composes_rotations() {
        let a = Quat::from_axis_angle(Vec3::Y, 0.3);
        let b = Quat::from_axis_angle(Vec3::Y, 0.5);
        let ab = (a * b).normalize();
        assert!((ab.angle() - 0.8).abs() < 1e-9);
    }
}
