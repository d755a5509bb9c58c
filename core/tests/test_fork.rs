//! Tests for the fork engine
//!
//! split() yields a state-identical twin that evolves independently;
//! split_distinct() yields a freshly seeded generator on a new stream.

use pcg_streams_rs::{OutputPermutation, PcgMonitor, PcgSingle};

#[test]
fn test_split_matches_source_until_mutated() {
    let source = PcgMonitor::with_seed(42, 7, OutputPermutation::XshRr);
    for _ in 0..25 {
        source.next_int();
    }

    let twin = source.split();
    assert_eq!(twin.state(), source.state());
    assert_eq!(twin.increment(), source.increment());

    for i in 0..100 {
        assert_eq!(
            twin.next_int(),
            source.next_int(),
            "twin diverged at draw {} without mutation",
            i
        );
    }
}

#[test]
fn test_split_shares_no_storage() {
    let source = PcgMonitor::with_seed(42, 7, OutputPermutation::XshRr);
    let twin = source.split();

    source.advance(1);
    assert_ne!(
        twin.state(),
        source.state(),
        "advancing the source must not move the twin"
    );
    assert_eq!(twin.distance(&source), Ok(1));
}

#[test]
fn test_split_preserves_eager_timing() {
    let source = PcgSingle::with_seed(42, 7, OutputPermutation::XshRs);
    source.next_int();
    let twin = source.split();

    assert!(twin.is_fast());
    for _ in 0..100 {
        assert_eq!(twin.next_int(), source.next_int());
    }
}

#[test]
fn test_split_distinct_lands_on_new_streams() {
    let source = PcgMonitor::with_seed(42, 7, OutputPermutation::XshRr);

    let trials = 32;
    let mut distinct = 0;
    for _ in 0..trials {
        let child = source.split_distinct();
        assert_eq!(child.permutation(), source.permutation());
        if child.increment() != source.increment() {
            distinct += 1;
        }
    }
    assert!(
        distinct > trials - 2,
        "only {} of {} distinct-split children left the source stream",
        distinct,
        trials
    );
}

#[test]
fn test_split_distinct_sequences_diverge() {
    let source = PcgMonitor::with_seed(42, 7, OutputPermutation::XshRr);
    let child = source.split_distinct();

    let mut any_differ = false;
    for _ in 0..10 {
        if source.next_int() != child.next_int() {
            any_differ = true;
            break;
        }
    }
    assert!(any_differ, "distinct split should not mirror the source");
}
