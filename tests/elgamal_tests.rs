use l4::{
    BigInt, Ciphertext, Curve, ElGamal, ExtensionField, Group, Point, PrimeGroup, PrivateKey,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn n(v: i64) -> BigInt {
    BigInt::from_i64(v)
}

/// Encrypt every message with a seeded RNG, decrypt, and compare with `same`
fn assert_round_trip<G: Group>(
    group: &G,
    generator: G::Element,
    private: i64,
    messages: &[G::Element],
    same: impl Fn(&G::Element, &G::Element) -> bool,
) {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let scheme = ElGamal::new(group);
    let private = PrivateKey::new(n(private)).unwrap();
    let public = scheme.public_key(generator, &private);

    let ciphertexts = scheme.encrypt_all(&public, messages, &mut rng).unwrap();
    assert_eq!(ciphertexts.len(), messages.len());
    let decryption = scheme.decrypt_all(&private, &ciphertexts).unwrap();
    assert!(decryption.inconsistent_blocks.is_empty());
    for (expected, actual) in messages.iter().zip(&decryption.messages) {
        assert!(same(expected, actual), "{:?} != {:?}", expected, actual);
    }
}

#[test]
fn test_prime_group_round_trip() {
    let group = PrimeGroup::new(n(1_000_003)).unwrap();
    let messages: Vec<BigInt> = [0, 1, 2, 500_000, 1_000_002].iter().map(|&v| n(v)).collect();
    assert_round_trip(&group, n(2), 4242, &messages, |a, b| a == b);
}

#[test]
fn test_prime_group_p256_prime() {
    let p: BigInt = "115792089210356248762697446949407573530086143415290314195533631308867097853951"
        .parse()
        .unwrap();
    let group = PrimeGroup::new(p).unwrap();
    let messages = vec![
        "98765432109876543210987654321".parse().unwrap(),
        n(31337),
    ];
    assert_round_trip(&group, n(3), 1_000_000_007, &messages, |a, b| a == b);
}

#[test]
fn test_extension_field_round_trip() {
    // X^2 + 1 is irreducible over F_p for p ≡ 3 (mod 4)
    let field = ExtensionField::new(n(1_000_003), &[n(1), n(0), n(1)]).unwrap();
    let messages = vec![
        field.zero(),
        field.one(),
        field.element(&[n(17), n(42)]),
        field.element(&[n(0), n(999_999)]),
    ];
    let generator = field.element(&[n(2), n(1)]);
    assert_round_trip(&field, generator, 777, &messages, |a, b| a == b);
}

#[test]
fn test_every_element_of_f25_round_trips() {
    // X^2 + 2 is irreducible over F_5
    let field = ExtensionField::new(n(5), &[n(2), n(0), n(1)]).unwrap();
    let mut messages = Vec::new();
    for a in 0..5 {
        for b in 0..5 {
            messages.push(field.element(&[n(a), n(b)]));
        }
    }
    let generator = field.element(&[n(1), n(1)]);
    assert_round_trip(&field, generator, 13, &messages, |a, b| a == b);
}

#[test]
fn test_extension_inverse_needs_field_order() {
    let field = ExtensionField::new(n(7), &[n(1), n(0), n(1)]).unwrap();
    let x = field.element(&[n(0), n(1)]);
    // x^(p-2) = x^5 = x (since x^4 = 1) is not the inverse of x
    let naive = field.pow(&x, &n(5));
    assert_ne!(field.mul(&x, &naive), field.one());
    let inverse = field.inverse(&x).unwrap();
    assert_eq!(field.mul(&x, &inverse), field.one());
}

#[test]
fn test_curve_round_trip() {
    let curve = Curve::p256();
    // x-coordinates of "world", "Hi" and "x"
    let messages: Vec<Point> = [666_852_538, 2833, 59]
        .iter()
        .map(|&x| curve.lift_x(&n(x)).unwrap())
        .collect();
    let generator = curve.generator().clone();
    assert_round_trip(&curve, generator, 123_456_789, &messages, |a, b| {
        curve.equivalent(a, b)
    });
}

#[test]
fn test_ephemeral_exponent_is_visible_in_c1() {
    let group = PrimeGroup::new(n(23)).unwrap();
    let scheme = ElGamal::new(&group);
    let private = PrivateKey::new(n(6)).unwrap();
    let public = scheme.public_key(n(5), &private);
    for k in 1..22 {
        let ct = scheme.encrypt_with_ephemeral(&public, &n(10), &n(k));
        assert_eq!(ct.c1, group.scale(&n(5), &n(k)));
        assert_eq!(scheme.decrypt(&private, &ct).unwrap(), n(10));
    }
}

#[test]
fn test_reducible_polynomial_is_reported_per_block() {
    // X^2 - 1 = (X - 1)(X + 1): X + 1 is a zero divisor
    let ring = ExtensionField::new(n(7), &[n(-1), n(0), n(1)]).unwrap();
    let scheme = ElGamal::new(&ring);
    let private = PrivateKey::new(n(3)).unwrap();
    let ciphertexts = vec![
        Ciphertext {
            c1: ring.element(&[n(2)]),
            c2: ring.element(&[n(3)]),
        },
        Ciphertext {
            c1: ring.element(&[n(1), n(1)]),
            c2: ring.element(&[n(3)]),
        },
    ];
    let decryption = scheme.decrypt_all(&private, &ciphertexts).unwrap();
    assert_eq!(decryption.messages.len(), 2);
    assert_eq!(decryption.inconsistent_blocks, vec![1]);
}
