use std::fs;

use hanoi_tower::format::{
    export_solution, load_solution, open_solution, solution_file_name, ExportOptions, FormatError,
};
use hanoi_tower::puzzle::Puzzle;
use hanoi_tower::solve::generate;
use hanoi_tower::verify::{validate, SequenceValidator};

#[test]
fn exported_solution_reloads_and_validates() {
    let dir = tempfile::tempdir().unwrap();
    let puzzle = Puzzle::new(6, 4, 2, 3);
    let moves = generate(&puzzle).unwrap();

    let path = export_solution(dir.path(), &puzzle, &moves, ExportOptions::default()).unwrap();
    assert_eq!(path, dir.path().join("ToH_n6_t4_s2_d3.txt"));

    let (loaded_puzzle, loaded_moves) = load_solution(&path).unwrap();
    assert_eq!(loaded_puzzle, puzzle);
    assert_eq!(loaded_moves, moves);
    assert!(validate(&loaded_puzzle, loaded_moves).unwrap().is_correct());
}

#[test]
fn export_refuses_to_clobber_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let puzzle = Puzzle::new(2, 3, 1, 3);
    let moves = generate(&puzzle).unwrap();

    export_solution(dir.path(), &puzzle, &moves, ExportOptions::default()).unwrap();
    let err = export_solution(dir.path(), &puzzle, &moves, ExportOptions::default()).unwrap_err();
    assert!(matches!(err, FormatError::AlreadyExists { .. }));

    export_solution(dir.path(), &puzzle, &moves, ExportOptions { force: true }).unwrap();
}

#[test]
fn export_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let puzzle = Puzzle::new(1, 3, 1, 2);
    let moves = generate(&puzzle).unwrap();
    let path = export_solution(&nested, &puzzle, &moves, ExportOptions::default()).unwrap();
    assert_eq!(path, nested.join(solution_file_name(&puzzle)));
    assert_eq!(fs::read_to_string(&path).unwrap(), "1 3 1 2\n1 1 2\n");
}

#[test]
fn hand_written_file_streams_into_the_checker() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    // Second move puts disc 2 on disc 1.
    fs::write(&path, "2 3 1 3\n1 1 2\n2 1 2\n1 2 3\n").unwrap();

    let (puzzle, moves) = open_solution(&path).unwrap();
    let mut v = SequenceValidator::new(puzzle).unwrap();
    let mut consumed = 0;
    for mv in moves {
        consumed += 1;
        if v.check(mv.unwrap()).is_err() {
            break;
        }
    }
    assert_eq!(consumed, 2);
    let report = v.finish();
    assert_eq!(report.violation().map(|x| x.kind()), Some("IllegalMove"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_solution(&dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(
        err,
        FormatError::Io {
            stage: "solution_open",
            ..
        }
    ));
}
