//! Property-based tests for genepool
//!
//! Uses proptest to verify invariants of the chromosome operators.

use genepool::prelude::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

type N = IntNucleotide<-5, 5>;
type G = Genom<N, f64>;

proptest! {
    // ==================== Length invariants ====================

    #[test]
    fn random_genom_has_requested_length(len in 1usize..64, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let g = G::random(len, &mut rng);
        prop_assert_eq!(g.len(), len);
    }

    #[test]
    fn crossover_preserves_length(len in 1usize..64, seed in any::<u64>(), point_frac in 0.0f64..=1.0) {
        let mut rng = StdRng::seed_from_u64(seed);
        let a = G::random(len, &mut rng);
        let b = G::random(len, &mut rng);
        let mut out = G::random(len, &mut rng);

        // Every legal point including both degenerate ends
        let point = (len as f64 * point_frac) as usize;
        Genom::crossover_into(&a, &b, &mut out, point);
        prop_assert_eq!(out.len(), len);
    }

    #[test]
    fn mutation_preserves_length(len in 1usize..64, seed in any::<u64>(), index_frac in 0.0f64..1.0) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut g = G::random(len, &mut rng);
        let index = ((len as f64 * index_frac) as usize).min(len - 1);
        g.mutate(index, &mut rng);
        prop_assert_eq!(g.len(), len);
    }

    // ==================== Crossover boundary ====================

    #[test]
    fn crossover_degenerate_ends_agree(len in 1usize..64, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let a = G::random(len, &mut rng);
        let b = G::random(len, &mut rng);
        let mut from_zero = G::random(len, &mut rng);
        let mut from_len = G::random(len, &mut rng);

        // Point 0 of (a, b) runs every slot in (b, a) order; point len of
        // (b, a) does the same.
        Genom::crossover_into(&a, &b, &mut from_zero, 0);
        Genom::crossover_into(&b, &a, &mut from_len, len);

        let zero_values: Vec<i32> = from_zero.nucleotides().iter().map(|n| n.value()).collect();
        let len_values: Vec<i32> = from_len.nucleotides().iter().map(|n| n.value()).collect();
        prop_assert_eq!(zero_values, len_values);
    }

    // ==================== Shift ====================

    #[test]
    fn shift_full_cycle_is_identity(len in 1usize..32, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut g = G::random(len, &mut rng);
        let original: Vec<i32> = g.nucleotides().iter().map(|n| n.value()).collect();

        for _ in 0..len {
            g.shift(1);
        }

        let rotated: Vec<i32> = g.nucleotides().iter().map(|n| n.value()).collect();
        prop_assert_eq!(rotated, original);
    }

    #[test]
    fn shift_by_len_is_identity(len in 1usize..32, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut g = G::random(len, &mut rng);
        let original: Vec<i32> = g.nucleotides().iter().map(|n| n.value()).collect();

        g.shift(len);

        let rotated: Vec<i32> = g.nucleotides().iter().map(|n| n.value()).collect();
        prop_assert_eq!(rotated, original);
    }

    // ==================== Engine-level lengths ====================

    #[test]
    fn evolved_population_keeps_genom_length(
        pairs in 1usize..6,
        len in 1usize..16,
        seed in any::<u64>(),
    ) {
        let config = GenePoolConfig {
            population_size: pairs * 2,
            genom_length: len,
            elite_fraction: 0.25,
        };
        let mut pool: GenePool<N, f64, _> =
            GenePool::new(config, StdRng::seed_from_u64(seed)).unwrap();
        let simulator = FnSimulator::new(|g: &G| {
            g.nucleotides().iter().map(|n| n.value() as f64).sum::<f64>()
        });

        pool.simulate(&simulator).unwrap();
        for _ in 0..5 {
            pool.select();
            pool.simulate(&simulator).unwrap();
            prop_assert!(pool.iter().all(|g| g.len() == len));
        }
    }
}
