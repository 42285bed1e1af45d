//! Built-in cipher suites.

#[cfg(feature = "bandersnatch")]
pub mod bandersnatch;

#[cfg(feature = "baby-jubjub")]
pub mod baby_jubjub;

#[cfg(feature = "ed25519")]
pub mod ed25519;

#[cfg(feature = "jubjub")]
pub mod jubjub;

#[cfg(feature = "secp256r1")]
pub mod secp256r1;

#[cfg(test)]
pub(crate) mod testing;
