//! Fiat-Shamir transcript for the ring argument.
//!
//! A chained SHA-512 state absorbing length-prefixed, labeled canonical
//! serializations. Challenges are 128-bit field elements, which is plenty
//! for the soundness of the aggregation they steer.

use ark_ff::PrimeField;
use ark_serialize::CanonicalSerialize;
use ark_std::vec::Vec;
use digest::Digest;
use sha2::Sha512;

#[derive(Clone)]
pub struct Transcript {
    state: [u8; 64],
}

impl Transcript {
    /// Fresh transcript bound to a protocol label (the suite identifier).
    pub fn new(label: &[u8]) -> Self {
        let mut state = [0u8; 64];
        let h = Sha512::new()
            .chain_update(b"ring-proof-transcript")
            .chain_update(label)
            .finalize();
        state.copy_from_slice(&h);
        Self { state }
    }

    /// Absorb a serializable item under a label.
    pub fn append<T: CanonicalSerialize>(&mut self, label: &'static [u8], item: &T) {
        let mut buf = Vec::new();
        item.serialize_compressed(&mut buf)
            .expect("writing to a Vec can't fail");
        self.absorb(label, &buf);
    }

    fn absorb(&mut self, label: &[u8], data: &[u8]) {
        let h = Sha512::new()
            .chain_update(self.state)
            .chain_update([0x00])
            .chain_update((label.len() as u64).to_le_bytes())
            .chain_update(label)
            .chain_update((data.len() as u64).to_le_bytes())
            .chain_update(data)
            .finalize();
        self.state.copy_from_slice(&h);
    }

    /// Squeeze a 128-bit challenge, advancing the state.
    pub fn challenge<F: PrimeField>(&mut self, label: &'static [u8]) -> F {
        let h = Sha512::new()
            .chain_update(self.state)
            .chain_update([0x01])
            .chain_update((label.len() as u64).to_le_bytes())
            .chain_update(label)
            .finalize();
        self.state.copy_from_slice(&h);
        F::from_be_bytes_mod_order(&self.state[..16])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::Fr;

    #[test]
    fn deterministic_and_order_sensitive() {
        let mut t1 = Transcript::new(b"test");
        let mut t2 = Transcript::new(b"test");
        t1.append(b"a", &42u64);
        t2.append(b"a", &42u64);
        let c1: Fr = t1.challenge(b"c");
        let c2: Fr = t2.challenge(b"c");
        assert_eq!(c1, c2);

        let mut t3 = Transcript::new(b"test");
        t3.append(b"a", &43u64);
        let c3: Fr = t3.challenge(b"c");
        assert_ne!(c1, c3);

        // Same state squeezed twice yields distinct challenges.
        let c4: Fr = t1.challenge(b"c");
        assert_ne!(c1, c4);
    }
}
