//! Tests for deterministic generation
//!
//! CRITICAL: Determinism is sacred. Same (seed, stream, permutation) MUST
//! produce the same sequence on every construction.

use pcg_streams_rs::{OutputPermutation, PcgMonitor};

#[test]
fn test_same_seed_same_sequence() {
    let rng1 = PcgMonitor::with_seed(12345, 7, OutputPermutation::XshRr);
    let rng2 = PcgMonitor::with_seed(12345, 7, OutputPermutation::XshRr);

    for i in 0..1000 {
        assert_eq!(
            rng1.next_int(),
            rng2.next_int(),
            "determinism broken at draw {}",
            i
        );
    }
}

#[test]
fn test_different_seeds_different_sequences() {
    let rng1 = PcgMonitor::with_seed(12345, 7, OutputPermutation::XshRr);
    let rng2 = PcgMonitor::with_seed(54321, 7, OutputPermutation::XshRr);

    let mut any_differ = false;
    for _ in 0..10 {
        if rng1.next_int() != rng2.next_int() {
            any_differ = true;
            break;
        }
    }
    assert!(any_differ, "different seeds should produce different values");
}

#[test]
fn test_different_streams_different_sequences() {
    let rng1 = PcgMonitor::with_seed(12345, 0, OutputPermutation::XshRr);
    let rng2 = PcgMonitor::with_seed(12345, 1, OutputPermutation::XshRr);

    let mut any_differ = false;
    for _ in 0..10 {
        if rng1.next_int() != rng2.next_int() {
            any_differ = true;
            break;
        }
    }
    assert!(
        any_differ,
        "different streams should produce different values"
    );
}

#[test]
fn test_permutations_produce_different_sequences() {
    let rr = PcgMonitor::with_seed(12345, 7, OutputPermutation::XshRr);
    let rs = PcgMonitor::with_seed(12345, 7, OutputPermutation::XshRs);

    let mut any_differ = false;
    for _ in 0..10 {
        if rr.next_int() != rs.next_int() {
            any_differ = true;
            break;
        }
    }
    assert!(any_differ, "the two output permutations should disagree");
}

#[test]
fn test_replay_from_observed_state() {
    let rng1 = PcgMonitor::with_seed(12345, 7, OutputPermutation::XshRr);
    for _ in 0..10 {
        rng1.next_int();
    }

    let rng2 = PcgMonitor::restore(rng1.state(), rng1.increment(), rng1.permutation())
        .expect("odd increment always restores");

    assert_eq!(rng1.next_int(), rng2.next_int());
    assert_eq!(rng1.next_long(), rng2.next_long());
    assert_eq!(rng1.next_double(), rng2.next_double());
}

#[test]
fn test_entropy_seeded_generators_differ() {
    let rng1 = PcgMonitor::new(OutputPermutation::XshRr);
    let rng2 = PcgMonitor::new(OutputPermutation::XshRr);

    // Streams are drawn from OS entropy; a collision would need equal
    // 64-bit stream numbers.
    assert_ne!(
        rng1.increment(),
        rng2.increment(),
        "entropy-seeded generators should land on distinct streams"
    );
}

#[test]
fn test_produces_diverse_values() {
    let rng = PcgMonitor::with_seed(12345, 7, OutputPermutation::XshRr);
    let mut values = Vec::new();

    for _ in 0..100 {
        values.push(rng.next_int());
    }

    let unique_count = values.iter().collect::<std::collections::HashSet<_>>().len();
    assert!(
        unique_count > 90,
        "generator not diverse enough: only {} unique values out of 100",
        unique_count
    );
}
