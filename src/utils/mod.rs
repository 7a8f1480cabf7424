//! Stream plumbing shared by the encoder and decoder.

pub(crate) mod runes;
pub(crate) mod stream;
