/// Elliptic curves in short Weierstrass form y^2 = x^3 + ax + b over F_p,
/// with points kept in projective coordinates (X : Y : Z).
///
/// The affine point (x, y) is (x : y : 1); any nonzero multiple of the
/// triple names the same point, and Z = 0 is the point at infinity.
/// Addition works on the raw triples and never inverts, so a single
/// inversion is paid only when a point is printed or compared.

use crate::bigint::BigInt;
use crate::error::{Error, Result};
use crate::group::Group;
use crate::modular::{mod_inverse, reduce, sqrt_3_mod_4};
use std::fmt;

/// Projective point (X : Y : Z)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    x: BigInt,
    y: BigInt,
    z: BigInt,
}

impl Point {
    /// The point at infinity, (1 : 0 : 0)
    pub fn identity() -> Self {
        Point {
            x: BigInt::one(),
            y: BigInt::zero(),
            z: BigInt::zero(),
        }
    }

    /// (x : y : 1); not checked against any curve
    pub fn affine(x: BigInt, y: BigInt) -> Self {
        Point {
            x,
            y,
            z: BigInt::one(),
        }
    }

    pub fn projective(x: BigInt, y: BigInt, z: BigInt) -> Self {
        Point { x, y, z }
    }

    pub fn x(&self) -> &BigInt {
        &self.x
    }

    pub fn y(&self) -> &BigInt {
        &self.y
    }

    pub fn z(&self) -> &BigInt {
        &self.z
    }
}

/// A point normalized to affine coordinates
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AffinePoint {
    Infinity,
    Affine { x: BigInt, y: BigInt },
}

impl fmt::Display for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AffinePoint::Infinity => write!(f, "Z"),
            AffinePoint::Affine { x, y } => write!(f, "{} {}", x, y),
        }
    }
}

/// Curve parameters plus a base point of known order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    p: BigInt,
    a: BigInt,
    b: BigInt,
    generator: Point,
    order: BigInt,
}

fn decimal(digits: &str) -> BigInt {
    digits
        .parse()
        .expect("curve constants are valid decimal literals")
}

impl Curve {
    /// Build a curve, rejecting a base point that does not satisfy the equation
    pub fn new(p: BigInt, a: BigInt, b: BigInt, generator: Point, order: BigInt) -> Result<Self> {
        if p <= BigInt::from_u64(3) {
            return Err(Error::InvalidModulus(format!("{} is too small for a curve", p)));
        }
        let a = reduce(&a, &p);
        let b = reduce(&b, &p);
        let curve = Curve {
            p,
            a,
            b,
            generator,
            order,
        };
        if !curve.is_on_curve(&curve.generator) {
            return Err(Error::PointNotOnCurve {
                x: curve.generator.x.clone(),
            });
        }
        Ok(curve)
    }

    /// NIST P-256 (secp256r1)
    pub fn p256() -> Self {
        let two = BigInt::from_u64(2);
        let p = two.pow(256) - two.pow(224) + two.pow(192) + two.pow(96) - BigInt::one();
        let a = reduce(&BigInt::from_i64(-3), &p);
        let b = decimal("41058363725152142129326129780047268409114441015993725554835256314039467401291");
        let generator = Point::affine(
            decimal("48439561293906451759052585252797914202762949526041747995844080717082404635286"),
            decimal("36134250956749795798585127919587881956611106672985015071877198253568414405109"),
        );
        let order =
            decimal("115792089210356248762697446949407573529996955224135760342422259061068512044369");
        Curve {
            p,
            a,
            b,
            generator,
            order,
        }
    }

    pub fn modulus(&self) -> &BigInt {
        &self.p
    }

    pub fn a(&self) -> &BigInt {
        &self.a
    }

    pub fn b(&self) -> &BigInt {
        &self.b
    }

    pub fn generator(&self) -> &Point {
        &self.generator
    }

    /// Order n of the base point
    pub fn generator_order(&self) -> &BigInt {
        &self.order
    }

    fn is_infinity(&self, point: &Point) -> bool {
        reduce(&point.z, &self.p).is_zero()
    }

    /// x^3 + ax + b mod p
    fn rhs(&self, x: &BigInt) -> BigInt {
        let x = reduce(x, &self.p);
        let x_cubed = &(&x * &x) * &x;
        reduce(&(x_cubed + &self.a * &x + &self.b), &self.p)
    }

    /// Y^2 Z = X^3 + a X Z^2 + b Z^3 (mod p)
    pub fn is_on_curve(&self, point: &Point) -> bool {
        if self.is_infinity(point) {
            return true;
        }
        let (x, y, z) = (&point.x, &point.y, &point.z);
        let z_squared = z * z;
        let left = &(y * y) * z;
        let right = &(&(x * x) * x) + &(&(&self.a * x) * &z_squared) + &(&self.b * &(&z_squared * z));
        reduce(&(left - right), &self.p).is_zero()
    }

    /// Mirror image across the x-axis
    pub fn negate(&self, point: &Point) -> Point {
        if self.is_infinity(point) {
            return Point::identity();
        }
        Point {
            x: point.x.clone(),
            y: reduce(&-&point.y, &self.p),
            z: point.z.clone(),
        }
    }

    /// Chord-tangent addition on projective triples
    ///
    /// With X1Z2 ≡ X2Z1 the points share an x-coordinate: they are either
    /// mirror images (sum is infinity) or equal, and the tangent slope
    /// k / deter = (3X1^2 + aZ1^2) / (2Y1Z1) is used. Otherwise the chord slope
    /// (Y2Z1 - Y1Z2) / (X2Z1 - X1Z2). The triple computed below is the third
    /// intersection of that line with the curve, so it is negated at the end.
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Point {
        if self.is_infinity(rhs) {
            return lhs.clone();
        }
        if self.is_infinity(lhs) {
            return rhs.clone();
        }
        let p = &self.p;
        let (x1, y1, z1) = (&lhs.x, &lhs.y, &lhs.z);
        let (x2, y2, z2) = (&rhs.x, &rhs.y, &rhs.z);
        let x1z2 = x1 * z2;
        let x2z1 = x2 * z1;

        let (k, deter) = if reduce(&(&x1z2 - &x2z1), p).is_zero() {
            if reduce(&(y1 * z2 + y2 * z1), p).is_zero() {
                return Point::identity();
            }
            let k = BigInt::from_u64(3) * &(x1 * x1) + &(&self.a * &(z1 * z1));
            let deter = BigInt::from_u64(2) * &(y1 * z1);
            (k, deter)
        } else {
            (y2 * z1 - y1 * z2, &x2z1 - &x1z2)
        };
        let k = reduce(&k, p);
        let deter = reduce(&deter, p);

        let z1z2 = reduce(&(z1 * z2), p);
        let deter2 = reduce(&(&deter * &deter), p);
        let x3 = reduce(&(&(&k * &k) * &z1z2 - &(&x1z2 + &x2z1) * &deter2), p);
        let z3 = reduce(&(&z1z2 * &deter2), p);
        let y3 = &k * &(&x3 * z1 - x1 * &z3) + &(&(y1 * &deter) * &z3);
        let x3 = &(&x3 * z1) * &deter;
        let z3 = &(&z3 * z1) * &deter;

        self.negate(&Point {
            x: reduce(&x3, p),
            y: reduce(&y3, p),
            z: reduce(&z3, p),
        })
    }

    pub fn double(&self, point: &Point) -> Point {
        self.add(point, point)
    }

    /// Divide through by Z
    pub fn to_affine(&self, point: &Point) -> Result<AffinePoint> {
        if self.is_infinity(point) {
            return Ok(AffinePoint::Infinity);
        }
        let z_inv = mod_inverse(&point.z, &self.p)?;
        Ok(AffinePoint::Affine {
            x: reduce(&(&point.x * &z_inv), &self.p),
            y: reduce(&(&point.y * &z_inv), &self.p),
        })
    }

    /// Whether two triples name the same point
    pub fn equivalent(&self, lhs: &Point, rhs: &Point) -> bool {
        match (self.is_infinity(lhs), self.is_infinity(rhs)) {
            (true, true) => true,
            (false, false) => {
                reduce(&(&lhs.x * &rhs.z - &rhs.x * &lhs.z), &self.p).is_zero()
                    && reduce(&(&lhs.y * &rhs.z - &rhs.y * &lhs.z), &self.p).is_zero()
            }
            _ => false,
        }
    }

    /// The point with the given x-coordinate and y = rhs^((p+1)/4)
    ///
    /// Fails with [`Error::PointNotOnCurve`] when x^3 + ax + b is not a
    /// square mod p.
    pub fn lift_x(&self, x: &BigInt) -> Result<Point> {
        let x = reduce(x, &self.p);
        let rhs = self.rhs(&x);
        let y = sqrt_3_mod_4(&rhs, &self.p)?;
        if reduce(&(&y * &y), &self.p) != rhs {
            return Err(Error::PointNotOnCurve { x });
        }
        Ok(Point::affine(x, y))
    }
}

impl Group for Curve {
    type Element = Point;

    fn identity(&self) -> Point {
        Point::identity()
    }

    fn is_identity(&self, element: &Point) -> bool {
        self.is_infinity(element)
    }

    fn combine(&self, a: &Point, b: &Point) -> Point {
        self.add(a, b)
    }

    fn invert(&self, element: &Point) -> Result<Point> {
        Ok(self.negate(element))
    }

    fn order(&self) -> BigInt {
        self.order.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: i64) -> BigInt {
        BigInt::from_i64(v)
    }

    /// y^2 = x^3 + 2x + 2 over F_17; (5, 1) generates a group of order 19
    fn small_curve() -> Curve {
        Curve::new(n(17), n(2), n(2), Point::affine(n(5), n(1)), n(19)).unwrap()
    }

    fn affine(curve: &Curve, point: &Point) -> AffinePoint {
        curve.to_affine(point).unwrap()
    }

    fn xy(x: i64, y: i64) -> AffinePoint {
        AffinePoint::Affine { x: n(x), y: n(y) }
    }

    #[test]
    fn test_point_on_curve() {
        let curve = small_curve();
        assert!(curve.is_on_curve(&Point::affine(n(6), n(3))));
        assert!(!curve.is_on_curve(&Point::affine(n(6), n(4))));
        assert!(curve.is_on_curve(&Point::identity()));
        // (6 : 3 : 1) scaled by 2
        assert!(curve.is_on_curve(&Point::projective(n(12), n(6), n(2))));
    }

    #[test]
    fn test_point_addition() {
        let curve = small_curve();
        let p = Point::affine(n(5), n(1));
        let q = Point::affine(n(6), n(3));
        assert_eq!(affine(&curve, &curve.add(&p, &q)), xy(10, 6));
        assert_eq!(affine(&curve, &curve.add(&q, &p)), xy(10, 6));
    }

    #[test]
    fn test_point_doubling() {
        let curve = small_curve();
        let p = Point::affine(n(5), n(1));
        assert_eq!(affine(&curve, &curve.double(&p)), xy(6, 3));
    }

    #[test]
    fn test_identity_and_inverse() {
        let curve = small_curve();
        let p = Point::affine(n(5), n(1));
        assert!(curve.equivalent(&curve.add(&p, &Point::identity()), &p));
        assert!(curve.equivalent(&curve.add(&Point::identity(), &p), &p));

        let minus_p = curve.negate(&p);
        assert_eq!(affine(&curve, &minus_p), xy(5, 16));
        assert!(curve.is_identity(&curve.add(&p, &minus_p)));
        assert_eq!(affine(&curve, &Point::identity()), AffinePoint::Infinity);
    }

    #[test]
    fn test_generator_order() {
        let curve = small_curve();
        let g = curve.generator().clone();
        assert!(curve.is_identity(&curve.scale(&g, &n(19))));
        assert!(!curve.is_identity(&curve.scale(&g, &n(18))));

        // Every multiple stays on the curve
        let mut acc = Point::identity();
        for _ in 0..19 {
            acc = curve.add(&acc, &g);
            assert!(curve.is_on_curve(&acc));
        }
    }

    #[test]
    fn test_addition_is_associative() {
        let curve = small_curve();
        let g = curve.generator().clone();
        let a = curve.scale(&g, &n(3));
        let b = curve.scale(&g, &n(7));
        let c = curve.scale(&g, &n(11));
        let left = curve.add(&curve.add(&a, &b), &c);
        let right = curve.add(&a, &curve.add(&b, &c));
        assert!(curve.equivalent(&left, &right));
        assert!(curve.equivalent(&left, &curve.scale(&g, &n(21))));
    }

    #[test]
    fn test_rejects_generator_off_curve() {
        assert!(matches!(
            Curve::new(n(17), n(2), n(2), Point::affine(n(5), n(2)), n(19)),
            Err(Error::PointNotOnCurve { .. })
        ));
    }

    #[test]
    fn test_p256_doubling() {
        let curve = Curve::p256();
        assert!(curve.is_on_curve(curve.generator()));
        let two_g = curve.double(curve.generator());
        assert_eq!(
            affine(&curve, &two_g),
            AffinePoint::Affine {
                x: decimal("56515219790691171413109057904011688695424810155802929973526481321309856242040"),
                y: decimal("3377031843712258259223711451491452598088675519751548567112458094635497583569"),
            }
        );
        let three_g = curve.add(&two_g, curve.generator());
        assert_eq!(
            affine(&curve, &three_g),
            AffinePoint::Affine {
                x: decimal("42877656971275811310262564894490210024759287182177196162425349131675946712428"),
                y: decimal("61154801112014214504178281461992570017247172004704277041681093927569603776562"),
            }
        );
    }

    #[test]
    fn test_p256_generator_order() {
        let curve = Curve::p256();
        let g = curve.generator().clone();
        assert!(curve.is_identity(&curve.scale(&g, curve.generator_order())));
        let last = curve.scale(&g, &(curve.generator_order() - &BigInt::one()));
        assert!(curve.equivalent(&last, &curve.negate(&g)));
    }

    #[test]
    fn test_lift_x() {
        let curve = Curve::p256();
        // "world" packed in radix 64
        let point = curve.lift_x(&n(666_852_538)).unwrap();
        assert!(curve.is_on_curve(&point));
        assert_eq!(point.x(), &n(666_852_538));

        // "Hello" has no point above it
        assert_eq!(
            curve.lift_x(&n(851_376_657)),
            Err(Error::PointNotOnCurve { x: n(851_376_657) })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(AffinePoint::Infinity.to_string(), "Z");
        assert_eq!(xy(6, 3).to_string(), "6 3");
    }
}
