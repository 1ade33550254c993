//! Pseudo-random sequence synthesis.

use crate::ext::rand::Lcg;
use super::ALPHABET;

/// Clears `buf` and fills it with `length` symbols, each selected as `alphabet[value % 4]`
/// for consecutive generator values. Exactly `length` values are drawn.
pub fn synthesize_into(alphabet: &[u8; 4], length: u32, rng: &mut Lcg, buf: &mut Vec<u8>) {
    buf.clear();
    buf.extend((0..length).map(|_| alphabet[(rng.draw() % 4) as usize]));
}

/// Synthesizes new sequence of length `length` over the A,C,G,T alphabet.
pub fn synthesize(length: u32, rng: &mut Lcg) -> Vec<u8> {
    let mut seq = Vec::with_capacity(length as usize);
    synthesize_into(&ALPHABET, length, rng, &mut seq);
    seq
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ext::rand;

    #[test]
    fn empty() {
        let mut rng = Lcg::new(12);
        assert!(synthesize(0, &mut rng).is_empty());
        assert_eq!(rng.state(), 12);
    }

    #[test]
    fn first_symbol() {
        let mut rng = Lcg::default();
        let seq = synthesize(1, &mut rng);
        assert_eq!(seq, b"C");
        assert_eq!(rng.state(), 12345);
    }

    #[test]
    fn consumes_one_draw_per_symbol() {
        let mut rng = Lcg::new(3);
        let seq = synthesize(50, &mut rng);
        let mut state = 3;
        for &nt in seq.iter() {
            let (new_state, value) = rand::next(state);
            assert_eq!(nt, ALPHABET[(value % 4) as usize]);
            state = new_state;
        }
        assert_eq!(rng.state(), state);
    }

    #[test]
    fn split_equals_whole() {
        let mut rng1 = Lcg::default();
        let whole = synthesize(200, &mut rng1);
        let mut rng2 = Lcg::default();
        let mut parts = synthesize(120, &mut rng2);
        parts.extend(synthesize(80, &mut rng2));
        assert_eq!(whole, parts);
        assert_eq!(rng1, rng2);
    }

    #[test]
    fn buffer_reuse() {
        let mut rng1 = Lcg::new(99);
        let mut buf = b"leftover".to_vec();
        synthesize_into(&ALPHABET, 16, &mut rng1, &mut buf);
        let mut rng2 = Lcg::new(99);
        assert_eq!(buf, synthesize(16, &mut rng2));
    }

    #[test]
    fn alphabet_coverage() {
        const LEN: u32 = 10_000;
        let seq = synthesize(LEN, &mut Lcg::default());
        for nt in ALPHABET {
            let freq = seq.iter().filter(|&&c| c == nt).count() as f64 / f64::from(LEN);
            assert!(0.2 <= freq && freq <= 0.3, "Frequency of {} is {:.4}", char::from(nt), freq);
        }
    }
}
