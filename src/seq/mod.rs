pub mod synth;
pub mod scan;

use crate::err::{Error, validate_param};

pub use synth::synthesize;
pub use scan::{SeqSummary, analyze, count_motif};

/// Nucleotide alphabet. Symbol order defines the mapping `value % 4 -> symbol`.
pub const ALPHABET: [u8; 4] = *b"ACGT";

/// Counted motif.
pub const MOTIF: &'static [u8] = b"GATTACA";

/// Count the number of C,G nucleotides in the sequence.
pub fn gc_count(seq: &[u8]) -> u32 {
    seq.iter().fold(0_u32, |acc, &nt| acc + u32::from(nt == b'C' || nt == b'G'))
}

/// Sequence synthesis and analysis parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    /// Symbols, selected by the generated value modulo alphabet size.
    pub alphabet: [u8; 4],
    /// Motif, occurrences of which are counted without overlaps.
    pub motif: Vec<u8>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            alphabet: ALPHABET,
            motif: MOTIF.to_vec(),
        }
    }
}

impl Params {
    pub fn validate(&self) -> Result<(), Error> {
        validate_param!(!self.motif.is_empty(), "Motif must not be empty");
        for (i, &nt) in self.alphabet.iter().enumerate() {
            validate_param!(!self.alphabet[..i].contains(&nt), "Alphabet contains symbol '{}' twice", char::from(nt));
        }
        Ok(())
    }

    /// Motif as a string, for output.
    pub fn motif_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.motif)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gc() {
        assert_eq!(gc_count(b""), 0);
        assert_eq!(gc_count(b"ATTA"), 0);
        assert_eq!(gc_count(b"GATTACA"), 2);
        assert_eq!(gc_count(b"GGCC"), 4);
        // Case-sensitive.
        assert_eq!(gc_count(b"gc"), 0);
    }

    #[test]
    fn default_params() {
        let params = Params::default();
        assert!(params.validate().is_ok());
        assert_eq!(&params.alphabet, b"ACGT");
        assert_eq!(params.motif_str(), "GATTACA");
    }

    #[test]
    fn invalid_params() {
        let params = Params { motif: Vec::new(), ..Params::default() };
        assert!(matches!(params.validate(), Err(Error::InvalidInput(_))));
        let params = Params { alphabet: *b"ACGA", ..Params::default() };
        assert!(matches!(params.validate(), Err(Error::InvalidInput(_))));
    }
}
