use rand::Rng;

/// Samples `length` symbols uniformly, with replacement, from `alphabet`.
///
/// # Panics
///
/// Panics if `alphabet` is empty.
pub fn random_dna<R: Rng + ?Sized>(alphabet: &[char], length: usize, rng: &mut R) -> String {
    assert!(!alphabet.is_empty(), "cannot sample from an empty alphabet");
    (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

/// Splices `signature` into `sequence` at a character offset drawn uniformly
/// from `0..=len`.
pub fn insert_signature<R: Rng + ?Sized>(sequence: &str, signature: &str, rng: &mut R) -> String {
    let n_chars = sequence.chars().count();
    let idx = rng.gen_range(0..=n_chars);
    let split = sequence
        .char_indices()
        .nth(idx)
        .map(|(pos, _)| pos)
        .unwrap_or(sequence.len());

    let mut out = String::with_capacity(sequence.len() + signature.len());
    out.push_str(&sequence[..split]);
    out.push_str(signature);
    out.push_str(&sequence[split..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::DNA_ALPHABET;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    #[test]
    fn length_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(42);
        for len in [1usize, 7, 80, 1000] {
            let seq = random_dna(&DNA_ALPHABET, len, &mut rng);
            assert_eq!(seq.chars().count(), len);
            assert!(seq.chars().all(|c| DNA_ALPHABET.contains(&c)));
        }
    }

    #[test]
    fn all_symbols_appear() {
        const LEN: usize = 10_000;
        let mut rng = StdRng::seed_from_u64(7);
        let seq = random_dna(&DNA_ALPHABET, LEN, &mut rng);
        for c in DNA_ALPHABET {
            assert!(seq.contains(c), "missing {c}");
        }
    }

    #[test]
    fn zero_source_picks_first_symbol() {
        let mut rng = StepRng::new(0, 0);
        assert_eq!(random_dna(&DNA_ALPHABET, 10, &mut rng), "AAAAAAAAAA");
    }

    #[test]
    #[should_panic(expected = "empty alphabet")]
    fn empty_alphabet_panics() {
        random_dna(&[], 5, &mut StepRng::new(0, 0));
    }

    #[test]
    fn seeded_runs_repeat() {
        let a = random_dna(&DNA_ALPHABET, 200, &mut StdRng::seed_from_u64(1));
        let b = random_dna(&DNA_ALPHABET, 200, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn signature_split_around_insertion() {
        let mut rng = StdRng::seed_from_u64(3);
        let seq = "ACGTACGTAC";
        for _ in 0..50 {
            let out = insert_signature(seq, "XYZ", &mut rng);
            assert_eq!(out.len(), seq.len() + 3);
            let i = out.find("XYZ").unwrap();
            assert!(i <= seq.len());
            assert_eq!(format!("{}{}", &out[..i], &out[i + 3..]), seq);
        }
    }

    #[test]
    fn signature_at_front_with_zero_source() {
        let mut rng = StepRng::new(0, 0);
        assert_eq!(insert_signature("ACGT", "sig", &mut rng), "sigACGT");
    }

    #[test]
    fn signature_into_empty_sequence() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(insert_signature("", "Ola", &mut rng), "Ola");
    }

    #[test]
    fn multibyte_signature_keeps_counts() {
        let mut rng = StdRng::seed_from_u64(9);
        let out = insert_signature("ACGTACGT", "Łukasz", &mut rng);
        assert_eq!(out.chars().count(), 8 + 6);
        assert!(out.contains("Łukasz"));
    }

    #[test]
    fn every_offset_reachable() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 4];
        for _ in 0..500 {
            let out = insert_signature("ACG", "-", &mut rng);
            seen[out.find('-').unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
