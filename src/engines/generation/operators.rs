use crate::engines::generation::genome::{Genome, BASES};
use rand::Rng;

/// Point-mutate a codon: replace one uniformly chosen position with a base
/// drawn uniformly from the three other bases, so the output differs from
/// the input at exactly that position.
pub fn mutate_codon<R: Rng>(codon: [u8; 3], rng: &mut R) -> [u8; 3] {
    let pos = rng.gen_range(0..3);
    let mut alternatives = [0u8; 3];
    let mut n = 0;
    for &base in &BASES {
        if base != codon[pos] && n < alternatives.len() {
            alternatives[n] = base;
            n += 1;
        }
    }

    let mut mutated = codon;
    mutated[pos] = alternatives[rng.gen_range(0..n)];
    mutated
}

/// Walk a genome in non-overlapping 3-symbol codons, point-mutating each
/// one with independent probability `mutation_rate / 100`.
///
/// Trailing symbols that do not fill a codon are dropped, so the output
/// length is always a multiple of 3 and never exceeds the input length.
pub fn mutate_sequence<R: Rng>(genome: &str, mutation_rate: f64, rng: &mut R) -> Genome {
    let bytes = genome.as_bytes();
    let mut mutated = String::with_capacity(bytes.len() - bytes.len() % 3);

    for chunk in bytes.chunks_exact(3) {
        let codon = [chunk[0], chunk[1], chunk[2]];
        let codon = if rng.gen::<f64>() < mutation_rate / 100.0 {
            mutate_codon(codon, rng)
        } else {
            codon
        };
        for base in codon {
            mutated.push(base as char);
        }
    }

    mutated
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn codon_mutation_changes_exactly_one_position() {
        let mut rng = StdRng::seed_from_u64(7);

        for codon in [*b"ATG", *b"CCC", *b"GTA", *b"TTT"] {
            for _ in 0..200 {
                let mutated = mutate_codon(codon, &mut rng);
                let differing = codon
                    .iter()
                    .zip(mutated.iter())
                    .filter(|(a, b)| a != b)
                    .count();
                assert_eq!(differing, 1, "{:?} -> {:?}", codon, mutated);
                assert!(mutated.iter().all(|b| BASES.contains(b)));
            }
        }
    }

    #[test]
    fn rate_zero_is_identity_on_full_codons() {
        let mut rng = StdRng::seed_from_u64(1);
        let genome = "ATGCGATCGATC";
        assert_eq!(mutate_sequence(genome, 0.0, &mut rng), genome);
    }

    #[test]
    fn rate_zero_drops_trailing_partial_codon() {
        let mut rng = StdRng::seed_from_u64(1);
        // 41 symbols: 13 full codons plus 2 leftovers.
        let genome = "ATGCGATCGATCGATCGATCGATCGATCGATCGATCGATCG";
        assert_eq!(genome.len(), 41);

        let mutated = mutate_sequence(genome, 0.0, &mut rng);
        assert_eq!(mutated.len(), 39);
        assert_eq!(mutated, &genome[..39]);
    }

    #[test]
    fn rate_hundred_mutates_every_codon() {
        let mut rng = StdRng::seed_from_u64(99);
        let genome = "ATGCGATCGATCGATCGATCGAT";

        let mutated = mutate_sequence(genome, 100.0, &mut rng);
        assert_eq!(mutated.len(), 21);

        for (original, new) in genome.as_bytes().chunks_exact(3).zip(mutated.as_bytes().chunks_exact(3)) {
            assert_ne!(original, new);
        }
    }
}
