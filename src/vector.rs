use nalgebra::{ClosedAdd, ClosedMul, ClosedSub, Point3, SVector, Scalar};

pub type Vector<T, const N: usize> = SVector<T, N>;

pub type Vec2 = Vector<f32, 2>;
pub type Vec3 = Vector<f32, 3>;
pub type Vec4 = Vector<f32, 4>;
pub type IVec2 = Vector<i32, 2>;
pub type IVec3 = Vector<i32, 3>;
pub type IVec4 = Vector<i32, 4>;

pub type P3 = Point3<f32>;
pub type V3 = Vec3;

/// Numeric types a `Vector` can carry lengths for.
///
/// Lengths are measured in `Real`; integer components are scaled back by
/// truncating toward zero.
pub trait Component: Scalar + Copy + ClosedAdd + ClosedSub + ClosedMul {
    type Real: Copy;

    const ZERO: Self;

    /// Square root of a squared length.
    fn root(self) -> Self::Real;
    fn scale_down(self, len: Self::Real) -> Self;
}

impl Component for f32 {
    type Real = f32;

    const ZERO: Self = 0.0;

    fn root(self) -> f32 {
        self.sqrt()
    }

    fn scale_down(self, len: f32) -> Self {
        self / len
    }
}

impl Component for f64 {
    type Real = f64;

    const ZERO: Self = 0.0;

    fn root(self) -> f64 {
        self.sqrt()
    }

    fn scale_down(self, len: f64) -> Self {
        self / len
    }
}

impl Component for i32 {
    type Real = f32;

    const ZERO: Self = 0;

    fn root(self) -> f32 {
        (self as f32).sqrt()
    }

    fn scale_down(self, len: f32) -> Self {
        (self as f32 / len) as i32
    }
}

/// Length and normalization helpers on top of nalgebra's fixed-size vectors.
///
/// Arithmetic, `dot` and `cross` come straight from nalgebra; this trait only
/// adds the degenerate-input policy used across the tracer.
pub trait VectorExt: Sized {
    type Scalar;
    type Real;

    fn length(&self) -> Self::Real;
    fn length2(&self) -> Self::Scalar;

    /// Unit vector in the same direction, or `self` unchanged when its length is zero.
    fn normalized(&self) -> Self;

    fn distance(&self, other: &Self) -> Self::Real;
    fn distance2(&self, other: &Self) -> Self::Scalar;
}

impl<T: Component, const N: usize> VectorExt for Vector<T, N> {
    type Scalar = T;
    type Real = T::Real;

    fn length(&self) -> T::Real {
        self.length2().root()
    }

    fn length2(&self) -> T {
        self.iter().fold(T::ZERO, |sum, &c| sum + c * c)
    }

    fn normalized(&self) -> Self {
        if self.length2() == T::ZERO {
            return *self;
        }
        let len = self.length();
        self.map(|c| c.scale_down(len))
    }

    fn distance(&self, other: &Self) -> T::Real {
        (self - other).length()
    }

    fn distance2(&self, other: &Self) -> T {
        (self - other).length2()
    }
}

/// Mirror `d` about `n`. Both are expected to be unit length.
pub fn reflect(d: &V3, n: &V3) -> V3 {
    (n * (2.0 * n.dot(d)) - d).normalized()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn componentwise_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));
        assert_ne!(a, b);

        let i = IVec2::new(3, -4);
        assert_eq!(i + IVec2::new(1, 1), IVec2::new(4, -3));
        assert_eq!(i * 2, IVec2::new(6, -8));
        assert_eq!(IVec4::new(1, 2, 3, 4).dot(&IVec4::new(1, 1, 1, 1)), 10);
    }

    #[test]
    fn dot_cross_length() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(&b), 32.0);
        assert_eq!(a.cross(&b), Vec3::new(-3.0, 6.0, -3.0));
        assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Vec4::new(1.0, 1.0, 1.0, 1.0).length2(), 4.0);
        assert_eq!(Vec3::new(1.0, 0.0, 0.0).distance(&Vec3::new(1.0, 3.0, 4.0)), 5.0);
        assert_eq!(Vec3::zeros().distance2(&Vec3::new(1.0, 2.0, 2.0)), 9.0);
    }

    #[test]
    fn normalize_zero_is_unchanged() {
        let z = Vec3::zeros();
        let n = z.normalized();
        assert_eq!(n, z);
        assert!(n.iter().all(|c| c.is_finite()));
        assert_eq!(Vec2::zeros().normalized(), Vec2::zeros());
        assert_eq!(IVec3::zeros().normalized(), IVec3::zeros());
    }

    #[test]
    fn integer_lengths() {
        let v = IVec3::new(1, 2, 2);
        assert_eq!(v.length2(), 9);
        assert_eq!(v.length(), 3.0);
        assert_eq!(IVec2::new(3, 4).distance2(&IVec2::zeros()), 25);
        assert_eq!(IVec2::new(3, 4).distance(&IVec2::zeros()), 5.0);
        assert_eq!(IVec4::new(0, 0, -7, 0).normalized(), IVec4::new(0, 0, -1, 0));
    }

    #[test]
    fn distance2_skips_the_root() {
        let a = Vec3::zeros();
        let b = Vec3::new(1.0, 1.0, 0.0);
        assert_eq!(a.distance2(&b), 2.0);
        assert_eq!(a.distance2(&b), (a - b).length2());
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let v = Vec3::new(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
            );
            let once = v.normalized();
            let twice = once.normalized();
            assert!(close(once.length(), 1.0));
            for i in 0..3 {
                assert!(close(once[i], twice[i]));
            }
        }
    }

    #[test]
    fn reflect_about_normal() {
        let n = V3::new(0.0, 1.0, 0.0);
        let d = V3::new(1.0, 1.0, 0.0).normalized();
        let r = reflect(&d, &n);
        assert!(close(r[0], -d[0]));
        assert!(close(r[1], d[1]));
        assert!(close(r.length(), 1.0));
        // head-on
        assert_eq!(reflect(&n, &n), n);
    }
}
