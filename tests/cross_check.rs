use std::ops::RangeInclusive;

use hanoi_tower::puzzle::Puzzle;
use hanoi_tower::solve::generate;
use hanoi_tower::verify::{validate, SequenceValidator};

fn all_puzzles(discs: RangeInclusive<u32>, towers: RangeInclusive<u32>) -> Vec<Puzzle> {
    let mut out = Vec::new();
    for t in towers {
        for n in discs.clone() {
            for s in 1..=t {
                for d in (1..=t).filter(|&d| d != s) {
                    out.push(Puzzle::new(n, t, s, d));
                }
            }
        }
    }
    out
}

#[test]
fn every_generated_sequence_checks_out() {
    for p in all_puzzles(1..=6, 3..=6) {
        let moves = generate(&p).unwrap();
        let report = validate(&p, moves.iter().copied()).unwrap();
        assert!(
            report.is_correct(),
            "{p}: {:?}",
            report.rejection().map(ToString::to_string)
        );
        assert_eq!(report.moves_seen, moves.len());
        assert_eq!(report.final_state.peg(p.destination).len(), p.discs as usize);
    }
}

#[test]
fn discs_are_conserved_and_ordered_after_every_move() {
    for p in all_puzzles(1..=7, 3..=5) {
        let mut v = SequenceValidator::new(p).unwrap();
        assert!(v.state().is_well_formed(p.discs));
        for mv in generate(&p).unwrap() {
            v.check(mv).unwrap();
            assert!(v.state().is_well_formed(p.discs), "{p} after {mv}");
            assert_eq!(v.state().disc_count(), p.discs as usize);
        }
    }
}

#[test]
fn larger_instances_stay_sound() {
    for p in [
        Puzzle::new(15, 4, 1, 4),
        Puzzle::new(20, 5, 2, 5),
        Puzzle::new(30, 8, 8, 1),
        Puzzle::new(10, 3, 3, 2),
    ] {
        let moves = generate(&p).unwrap();
        assert!(validate(&p, moves).unwrap().is_correct(), "{p}");
    }
}
