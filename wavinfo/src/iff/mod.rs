//! RIFF based formats

pub(crate) mod chunk;
pub mod wav;
