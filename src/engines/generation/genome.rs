/// Genome representation for the evolution engine
///
/// A genome is a nucleotide string over {A, T, C, G}. Mutation and
/// translation both read it in non-overlapping 3-symbol codons starting at
/// offset 0:
/// - **Mutation**: each codon is an independent mutation target
/// - **Translation**: each codon maps to one amino acid or a stop signal
/// - **Trailing symbols**: 1-2 leftover symbols never form a codon and are
///   dropped by the sequence mutator
///
/// # Why a plain string instead of a nucleotide enum?
///
/// The engine only ever reads genomes codon-by-codon and replaces whole
/// codons; there is no per-base arithmetic that would benefit from a packed
/// representation, and a string round-trips through config files and JSON
/// results without any codec.
pub type Genome = String;

/// The four nucleotide symbols, in the order mutation draws from them.
pub const BASES: [u8; 4] = [b'A', b'T', b'C', b'G'];

/// Check that a genome is non-empty and contains only nucleotide symbols.
pub fn is_valid_genome(genome: &str) -> bool {
    !genome.is_empty() && genome.bytes().all(|b| BASES.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_genome_accepts_all_bases() {
        assert!(is_valid_genome("ATCG"));
        assert!(is_valid_genome("A"));
    }

    #[test]
    fn valid_genome_rejects_empty_and_foreign_symbols() {
        assert!(!is_valid_genome(""));
        assert!(!is_valid_genome("ATCU"));
        assert!(!is_valid_genome("atcg"));
    }
}
