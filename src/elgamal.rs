//! ElGamal encryption over any [`Group`]
//!
//! With generator g and private exponent a the public key is (g, h = g^a).
//! A message element m encrypts under an ephemeral exponent k to
//! (c1, c2) = (g^k, m · h^k), and decrypts as m = c2 · (c1^a)^-1.
//! The same code runs over Z_p*, F_{p^d}* and curve points; only the group
//! law changes.

use crate::bigint::BigInt;
use crate::error::{Error, Result};
use crate::group::Group;
use log::{debug, warn};
use rand::Rng;

/// Public half of a key pair: the generator and `generator^a`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey<E> {
    pub generator: E,
    pub key: E,
}

/// Secret exponent `a`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrivateKey(BigInt);

impl PrivateKey {
    pub fn new(exponent: BigInt) -> Result<Self> {
        if exponent.is_negative() {
            return Err(Error::NegativeExponent);
        }
        Ok(PrivateKey(exponent))
    }

    pub fn exponent(&self) -> &BigInt {
        &self.0
    }
}

/// One encrypted block
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext<E> {
    pub c1: E,
    pub c2: E,
}

/// Result of decrypting a run of blocks
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decryption<E> {
    pub messages: Vec<E>,
    /// Indices of blocks whose shared secret failed `s · s^-1 = 1`.
    /// Only happens when the group is not really a group, e.g. a reducible
    /// polynomial was used for F_{p^d}; the block's message is garbage.
    pub inconsistent_blocks: Vec<usize>,
}

/// The scheme, bound to one group context
#[derive(Clone, Copy, Debug)]
pub struct ElGamal<'a, G: Group> {
    group: &'a G,
}

impl<'a, G: Group> ElGamal<'a, G> {
    pub fn new(group: &'a G) -> Self {
        ElGamal { group }
    }

    pub fn group(&self) -> &'a G {
        self.group
    }

    /// Derive `generator^a` from the private exponent
    pub fn public_key(&self, generator: G::Element, private: &PrivateKey) -> PublicKey<G::Element> {
        let key = self.group.scale(&generator, private.exponent());
        PublicKey { generator, key }
    }

    /// Deterministic encryption with a caller-chosen ephemeral exponent
    pub fn encrypt_with_ephemeral(
        &self,
        public: &PublicKey<G::Element>,
        message: &G::Element,
        ephemeral: &BigInt,
    ) -> Ciphertext<G::Element> {
        let c1 = self.group.scale(&public.generator, ephemeral);
        let shared = self.group.scale(&public.key, ephemeral);
        let c2 = self.group.combine(message, &shared);
        Ciphertext { c1, c2 }
    }

    /// Encrypt under a fresh ephemeral exponent drawn from `[1, order - 1]`
    pub fn encrypt<R: Rng + ?Sized>(
        &self,
        public: &PublicKey<G::Element>,
        message: &G::Element,
        rng: &mut R,
    ) -> Result<Ciphertext<G::Element>> {
        let ephemeral = self.random_exponent(rng)?;
        Ok(self.encrypt_with_ephemeral(public, message, &ephemeral))
    }

    pub fn encrypt_all<R: Rng + ?Sized>(
        &self,
        public: &PublicKey<G::Element>,
        messages: &[G::Element],
        rng: &mut R,
    ) -> Result<Vec<Ciphertext<G::Element>>> {
        let ciphertexts = messages
            .iter()
            .map(|m| self.encrypt(public, m, rng))
            .collect::<Result<Vec<_>>>()?;
        debug!("encrypted {} block(s)", ciphertexts.len());
        Ok(ciphertexts)
    }

    /// `c2 · (c1^a)^-1`
    pub fn decrypt(
        &self,
        private: &PrivateKey,
        ciphertext: &Ciphertext<G::Element>,
    ) -> Result<G::Element> {
        self.decrypt_block(private, ciphertext).map(|(m, _)| m)
    }

    pub fn decrypt_all(
        &self,
        private: &PrivateKey,
        ciphertexts: &[Ciphertext<G::Element>],
    ) -> Result<Decryption<G::Element>> {
        let mut messages = Vec::with_capacity(ciphertexts.len());
        let mut inconsistent_blocks = Vec::new();
        for (index, ciphertext) in ciphertexts.iter().enumerate() {
            let (message, consistent) = self.decrypt_block(private, ciphertext)?;
            if !consistent {
                warn!("block {}: shared secret times its inverse is not the identity", index);
                inconsistent_blocks.push(index);
            }
            messages.push(message);
        }
        debug!("decrypted {} block(s)", messages.len());
        Ok(Decryption {
            messages,
            inconsistent_blocks,
        })
    }

    fn decrypt_block(
        &self,
        private: &PrivateKey,
        ciphertext: &Ciphertext<G::Element>,
    ) -> Result<(G::Element, bool)> {
        let shared = self.group.scale(&ciphertext.c1, private.exponent());
        let shared_inv = self.group.invert(&shared)?;
        let consistent = self
            .group
            .is_identity(&self.group.combine(&shared, &shared_inv));
        Ok((self.group.combine(&ciphertext.c2, &shared_inv), consistent))
    }

    fn random_exponent<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<BigInt> {
        let order = self.group.order();
        let span = &order - &BigInt::one();
        if !span.is_positive() {
            return Err(Error::InvalidModulus(format!(
                "group order {} leaves no ephemeral exponents",
                order
            )));
        }
        Ok(BigInt::random_below(rng, &span) + BigInt::one())
    }
}
