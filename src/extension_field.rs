use crate::bigint::BigInt;
use crate::error::{Error, Result};
use crate::group::Group;
use crate::modular::{mod_inverse, reduce};
use std::cmp::Ordering;
use std::fmt;

/// Extension field F_{p^d} represented as F_p[X] / (h(X))
/// where h(X) is an irreducible polynomial of degree d over F_p.
///
/// The field is a context value: it owns p and the reduction rule, and all
/// arithmetic on [`ExtensionFieldElement`]s goes through it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtensionField {
    /// Base prime p
    p: BigInt,
    /// Extension degree d = deg h
    degree: usize,
    /// `X^d ≡ Σ reduction[j] · X^j (mod h)`, j < d
    reduction: Vec<BigInt>,
}

/// Element of F_{p^d}: coefficients in [0, p), lowest degree first,
/// fewer than d of them and no zero leading coefficient.
/// The zero element has no coefficients.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExtensionFieldElement {
    coeffs: Vec<BigInt>,
}

impl ExtensionFieldElement {
    pub fn coefficients(&self) -> &[BigInt] {
        &self.coeffs
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Coefficients extended with zeros up to `len`
    pub fn padded_coefficients(&self, len: usize) -> Vec<BigInt> {
        let mut coeffs = self.coeffs.clone();
        if coeffs.len() < len {
            coeffs.resize(len, BigInt::zero());
        }
        coeffs
    }

    fn trim(&mut self) {
        while self.coeffs.last().is_some_and(|c| c.is_zero()) {
            self.coeffs.pop();
        }
    }
}

impl ExtensionField {
    /// Build F_{p^d} from the coefficients of h, lowest degree first.
    ///
    /// Coefficients may be negative or exceed p. High zero coefficients are
    /// dropped and h is made monic. h must be irreducible over F_p; that is
    /// not checked here (see [`ExtensionField::probe_irreducible`]).
    pub fn new(p: BigInt, h: &[BigInt]) -> Result<Self> {
        if p <= BigInt::one() {
            return Err(Error::InvalidModulus(format!("{} is not a prime", p)));
        }
        let mut h: Vec<BigInt> = h.iter().map(|c| reduce(c, &p)).collect();
        while h.last().is_some_and(|c| c.is_zero()) {
            h.pop();
        }
        let Some(lead) = h.pop() else {
            return Err(Error::InvalidModulus(
                "reduction polynomial is zero".to_string(),
            ));
        };
        if h.is_empty() {
            return Err(Error::InvalidModulus(
                "reduction polynomial must have degree at least 1".to_string(),
            ));
        }

        let lead_inv = mod_inverse(&lead, &p)?;
        let reduction = h
            .iter()
            .map(|c| reduce(&-(c * &lead_inv), &p))
            .collect::<Vec<_>>();

        Ok(ExtensionField {
            degree: reduction.len(),
            p,
            reduction,
        })
    }

    pub fn modulus(&self) -> &BigInt {
        &self.p
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Monic h, lowest degree first
    pub fn reduction_polynomial(&self) -> Vec<BigInt> {
        let mut h: Vec<BigInt> = self
            .reduction
            .iter()
            .map(|c| reduce(&-c, &self.p))
            .collect();
        h.push(BigInt::one());
        h
    }

    /// Field size minus one, the order of the multiplicative group
    pub fn multiplicative_order(&self) -> BigInt {
        let size = (0..self.degree).fold(BigInt::one(), |acc, _| &acc * &self.p);
        &size - &BigInt::one()
    }

    /// Element from arbitrary integer coefficients, lowest degree first
    pub fn element(&self, coeffs: &[BigInt]) -> ExtensionFieldElement {
        let mut coeffs: Vec<BigInt> = coeffs.iter().map(|c| reduce(c, &self.p)).collect();
        self.reduce_polynomial(&mut coeffs);
        let mut element = ExtensionFieldElement { coeffs };
        element.trim();
        element
    }

    pub fn zero(&self) -> ExtensionFieldElement {
        ExtensionFieldElement { coeffs: Vec::new() }
    }

    pub fn one(&self) -> ExtensionFieldElement {
        ExtensionFieldElement {
            coeffs: vec![BigInt::one()],
        }
    }

    /// Eliminate every term of degree >= d, highest first, so that
    /// contributions pushed into lower terms are reduced in turn.
    fn reduce_polynomial(&self, coeffs: &mut Vec<BigInt>) {
        let d = self.degree;
        for i in (d..coeffs.len()).rev() {
            let c = std::mem::take(&mut coeffs[i]);
            if c.is_zero() {
                continue;
            }
            for (j, r) in self.reduction.iter().enumerate() {
                let target = &mut coeffs[i - d + j];
                *target = reduce(&(&*target + &(&c * r)), &self.p);
            }
        }
        coeffs.truncate(d);
    }

    pub fn add(&self, a: &ExtensionFieldElement, b: &ExtensionFieldElement) -> ExtensionFieldElement {
        let len = a.coeffs.len().max(b.coeffs.len());
        let zero = BigInt::zero();
        let coeffs = (0..len)
            .map(|i| {
                let x = a.coeffs.get(i).unwrap_or(&zero);
                let y = b.coeffs.get(i).unwrap_or(&zero);
                reduce(&(x + y), &self.p)
            })
            .collect();
        let mut sum = ExtensionFieldElement { coeffs };
        sum.trim();
        sum
    }

    pub fn neg(&self, a: &ExtensionFieldElement) -> ExtensionFieldElement {
        ExtensionFieldElement {
            coeffs: a.coeffs.iter().map(|c| reduce(&-c, &self.p)).collect(),
        }
    }

    pub fn sub(&self, a: &ExtensionFieldElement, b: &ExtensionFieldElement) -> ExtensionFieldElement {
        self.add(a, &self.neg(b))
    }

    /// Convolution product followed by reduction modulo h
    pub fn mul(&self, a: &ExtensionFieldElement, b: &ExtensionFieldElement) -> ExtensionFieldElement {
        if a.is_zero() || b.is_zero() {
            return self.zero();
        }
        let mut coeffs = vec![BigInt::zero(); a.coeffs.len() + b.coeffs.len() - 1];
        for (i, x) in a.coeffs.iter().enumerate() {
            for (j, y) in b.coeffs.iter().enumerate() {
                coeffs[i + j] += x * y;
            }
        }
        for c in coeffs.iter_mut() {
            *c = reduce(c, &self.p);
        }
        self.reduce_polynomial(&mut coeffs);
        let mut product = ExtensionFieldElement { coeffs };
        product.trim();
        product
    }

    /// Exponentiation with square-and-multiply, O(log(exp)) multiplications
    pub fn pow(&self, a: &ExtensionFieldElement, exp: &BigInt) -> ExtensionFieldElement {
        let mut result = self.one();
        for bit in exp.bits_le().into_iter().rev() {
            result = self.mul(&result, &result);
            if bit {
                result = self.mul(&result, a);
            }
        }
        result
    }

    /// Multiplicative inverse `a^(p^d - 2)`.
    ///
    /// The multiplicative group has order p^d - 1, not p - 1. The result is
    /// only a true inverse when h is irreducible; callers that care check
    /// `a * a^-1 == 1`.
    pub fn inverse(&self, a: &ExtensionFieldElement) -> Result<ExtensionFieldElement> {
        if a.is_zero() {
            return Err(Error::NotInvertible {
                value: BigInt::zero(),
                modulus: self.p.clone(),
            });
        }
        let exponent = &self.multiplicative_order() - &BigInt::one();
        Ok(self.pow(a, &exponent))
    }

    /// Cheap irreducibility probe: invert `X` and `X + 1` and confirm the
    /// products come back as one. Passing does not prove irreducibility.
    pub fn probe_irreducible(&self) -> Result<()> {
        if self.degree < 2 {
            return Ok(());
        }
        let probes = [
            self.element(&[BigInt::zero(), BigInt::one()]),
            self.element(&[BigInt::one(), BigInt::one()]),
        ];
        for probe in &probes {
            let inverse = self.inverse(probe)?;
            if self.mul(probe, &inverse) != self.one() {
                return Err(Error::InvalidModulus(format!(
                    "reduction polynomial is reducible: ({}) has no inverse",
                    probe
                )));
            }
        }
        Ok(())
    }
}

impl Group for ExtensionField {
    type Element = ExtensionFieldElement;

    fn identity(&self) -> ExtensionFieldElement {
        self.one()
    }

    fn is_identity(&self, element: &ExtensionFieldElement) -> bool {
        *element == self.one()
    }

    fn combine(&self, a: &ExtensionFieldElement, b: &ExtensionFieldElement) -> ExtensionFieldElement {
        self.mul(a, b)
    }

    fn invert(&self, element: &ExtensionFieldElement) -> Result<ExtensionFieldElement> {
        self.inverse(element)
    }

    fn order(&self) -> BigInt {
        self.multiplicative_order()
    }

    fn scale(&self, element: &ExtensionFieldElement, k: &BigInt) -> ExtensionFieldElement {
        self.pow(element, k)
    }
}

// Ordering reads the coefficient vector as one big number, most
// significant coefficient last; it has no meaning in the field.
impl PartialOrd for ExtensionFieldElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExtensionFieldElement {
    fn cmp(&self, other: &Self) -> Ordering {
        self.coeffs
            .len()
            .cmp(&other.coeffs.len())
            .then_with(|| self.coeffs.iter().rev().cmp(other.coeffs.iter().rev()))
    }
}

impl fmt::Display for ExtensionFieldElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.coeffs.is_empty() {
            return write!(f, "0");
        }
        let terms: Vec<String> = self.coeffs.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", terms.join(" "))
    }
}
