#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};
    use std::num::NonZero;
    use std::sync::atomic::AtomicBool;

    use crate::board::Board;
    use crate::builder::{Builder, BuilderInvalidReason, GridBoardBuilder};
    use crate::color::Weights;
    use crate::location::Location;
    use crate::path::{enumerate_paths, Path};
    use crate::score::{dedupe, score_of, ScoreClasses, ScoreExpression};
    use crate::shape::KnightStep;
    use crate::solution::{parse_cells, Solution};
    use crate::solver::{satisfying_assignments, solve};
    use crate::puzzle::Puzzle;
    use crate::cache;

    const SAMPLE_ROWS: [&str; 6] = [
        "AAABBC",
        "AAABBC",
        "AABBCC",
        "AABBCC",
        "ABBCCC",
        "ABBCCC",
    ];

    fn sample_board() -> Board<KnightStep> {
        GridBoardBuilder::from_rows(&SAMPLE_ROWS).build().unwrap()
    }

    fn is_knight_move(a: Location, b: Location) -> bool {
        let dx = a.0.abs_diff(b.0);
        let dy = a.1.abs_diff(b.1);
        matches!((dx, dy), (1, 2) | (2, 1))
    }

    #[test]
    fn board_display() {
        let board = sample_board();
        assert_eq!(format!("{}", board), "AAABBC
AAABBC
AABBCC
AABBCC
ABBCCC
ABBCCC
");
    }

    #[test]
    fn board_neighbors() {
        let board = sample_board();

        let corner = board.neighbors(Location(0, 0)).unwrap();
        assert_eq!(
            corner.into_iter().collect::<HashSet<_>>(),
            HashSet::from([Location(1, 2), Location(2, 1)])
        );

        // interior cells see all eight exits
        assert_eq!(board.neighbors(Location(2, 2)).unwrap().len(), 8);

        assert!(board.neighbors(Location(6, 0)).is_err());
    }

    #[test]
    fn board_rejects_out_of_bounds_lookup() {
        let board = sample_board();
        assert!(board.color_at(Location(0, 6)).is_err());
        assert!(board.color_at(Location(5, 5)).is_ok());
    }

    #[test]
    fn step_between_is_adjacency() {
        let board = sample_board();
        assert!(board.step_between(Location(0, 0), Location(2, 1)).is_some());
        assert!(board.step_between(Location(2, 1), Location(0, 0)).is_some());
        assert!(board.step_between(Location(0, 0), Location(1, 1)).is_none());
    }

    #[test]
    fn flipped_board_reverses_rows() {
        let board = sample_board();
        let flipped = board.flipped();

        for x in 0..6 {
            for y in 0..6 {
                assert_eq!(
                    flipped.color_at(Location(x, y)).unwrap(),
                    board.color_at(Location(x, 5 - y)).unwrap()
                );
            }
        }
    }

    #[test]
    fn builder_collects_invalid_reasons() {
        let invalid = GridBoardBuilder::from_rows(&["AAX", "ABC", "CCC"]).build();
        assert_eq!(invalid.err().unwrap(), vec![BuilderInvalidReason::UnknownColor('X')]);

        let narrow = GridBoardBuilder::from_rows(&["ABC", "AB", "CCC"]).build();
        assert_eq!(narrow.err().unwrap(), vec![BuilderInvalidReason::RowWidthMismatch]);

        let mut short = GridBoardBuilder::with_dims((NonZero::new(3).unwrap(), NonZero::new(3).unwrap()));
        short.push_row("ABC").push_row("ABC");
        // nothing wrong yet, but a row is still owed at build time
        assert!(short.is_valid().is_none());
        assert_eq!(short.build().err().unwrap(), vec![BuilderInvalidReason::MissingRows]);
    }

    #[test]
    fn paths_satisfy_invariants() {
        let board = sample_board();
        let paths = enumerate_paths(&board, Location(0, 0), Location(5, 5), 5..=7).unwrap();

        for path in &paths {
            let cells = path.cells();
            assert_eq!(*cells.first().unwrap(), Location(0, 0));
            assert_eq!(*cells.last().unwrap(), Location(5, 5));
            assert!((5..=7).contains(&path.moves()));

            // simple path: no cell repeats
            assert_eq!(cells.iter().collect::<HashSet<_>>().len(), cells.len());

            for pair in cells.windows(2) {
                assert!(is_knight_move(pair[0], pair[1]));
                assert!(board.step_between(pair[0], pair[1]).is_some());
            }
        }
    }

    #[test]
    fn enumeration_matches_reference_counts() {
        let board = sample_board();

        // every such path has exactly six moves: a knight move flips the
        // parity of x + y, which is even at both endpoints
        let paths = enumerate_paths(&board, Location(0, 0), Location(5, 5), 5..=7).unwrap();
        assert_eq!(paths.len(), 90);
        assert!(paths.iter().all(|path| path.moves() == 6));

        let wider = enumerate_paths(&board, Location(0, 0), Location(5, 5), 4..=6).unwrap();
        assert_eq!(wider.len(), 94);

        let widest = enumerate_paths(&board, Location(0, 0), Location(5, 5), 2..=8).unwrap();
        assert_eq!(widest.len(), 1090);
    }

    #[test]
    fn trivial_and_empty_enumerations() {
        let board = sample_board();

        let trivial = enumerate_paths(&board, Location(3, 3), Location(3, 3), 0..=0).unwrap();
        assert_eq!(trivial, vec![Path::from(vec![Location(3, 3)])]);

        // leaving and returning would revisit the endpoint
        let returning = enumerate_paths(&board, Location(3, 3), Location(3, 3), 1..=2).unwrap();
        assert!(returning.is_empty());

        // a knight is stuck on a 2×2 board; zero paths is a result, not an error
        let cramped = GridBoardBuilder::from_rows(&["AA", "AA"]).build().unwrap();
        let none = enumerate_paths(&cramped, Location(0, 0), Location(1, 1), 1..=6).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn enumerator_rejects_out_of_bounds_endpoints() {
        let board = sample_board();
        assert!(enumerate_paths(&board, Location(0, 0), Location(6, 6), 1..=4).is_err());
        assert!(enumerate_paths(&board, Location(9, 0), Location(5, 5), 1..=4).is_err());
    }

    #[test]
    fn score_of_is_deterministic() {
        let board = sample_board();
        let paths = enumerate_paths(&board, Location(0, 0), Location(5, 5), 5..=7).unwrap();

        for path in &paths {
            assert_eq!(score_of(&board, path).unwrap(), score_of(&board, path).unwrap());
        }
    }

    #[test]
    fn concrete_scenario_score() {
        let board = sample_board();
        let path = Path::from(vec![
            Location(0, 0),
            Location(2, 1),
            Location(1, 3),
            Location(3, 2),
            Location(2, 4),
            Location(4, 3),
            Location(5, 5),
        ]);

        let score = score_of(&board, &path).unwrap();

        // 3abc + bc + c, compared as polynomials rather than text
        let expected = ScoreExpression::from_terms([
            ([1, 1, 1], 3),
            ([0, 1, 1], 1),
            ([0, 0, 1], 1),
        ]);
        assert_eq!(score, expected);

        assert_eq!(score.to_string(), "3*a*b*c + b*c + c");
        assert_eq!(score.eval(Weights([2, 3, 5])), 3 * 2 * 3 * 5 + 3 * 5 + 5);
    }

    #[test]
    fn reflection_symmetry() {
        let board = sample_board();
        let flipped_board = board.flipped();
        let height = board.dims().1;

        let paths = enumerate_paths(&board, Location(0, 0), Location(5, 5), 5..=7).unwrap();
        for path in &paths {
            assert_eq!(
                score_of(&flipped_board, path).unwrap(),
                score_of(&board, &path.flipped(height)).unwrap()
            );
        }
    }

    #[test]
    fn dedupe_is_idempotent_over_copies() {
        let board = sample_board();
        let path = Path::from(vec![Location(0, 0), Location(2, 1), Location(4, 2)]);

        let classes = dedupe(&board, &[path.clone(), path.clone(), path]).unwrap();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes.values().next().unwrap().len(), 3);
    }

    #[test]
    fn dedupe_matches_reference_class_counts() {
        let board = sample_board();
        let height = board.dims().1;
        let paths = enumerate_paths(&board, Location(0, 0), Location(5, 5), 5..=7).unwrap();

        let primary = dedupe(&board, &paths).unwrap();
        assert_eq!(primary.len(), 18);

        let reflected = paths.iter().map(|path| path.flipped(height)).collect::<Vec<_>>();
        assert_eq!(dedupe(&board, &reflected).unwrap().len(), 52);
    }

    #[test]
    fn algebraic_notation_round_trip() {
        assert_eq!(Location(0, 0).to_algebraic(), "a1");
        assert_eq!(Location(5, 5).to_algebraic(), "f6");

        assert_eq!("a1".parse::<Location>().unwrap(), Location(0, 0));
        assert_eq!("f6".parse::<Location>().unwrap(), Location(5, 5));

        let cells = vec![Location(0, 0), Location(2, 1), Location(1, 3)];
        let rendered = cells.iter().map(Location::to_algebraic).collect::<Vec<_>>().join(",");
        assert_eq!(parse_cells(&rendered).unwrap(), cells);
    }

    #[test]
    fn bad_notation_is_rejected() {
        assert!("".parse::<Location>().is_err());
        assert!("1a".parse::<Location>().is_err());
        assert!("a".parse::<Location>().is_err());
        assert!("a0".parse::<Location>().is_err());
    }

    #[test]
    fn solution_renders_comma_separated() {
        let solution = Solution {
            weights: Weights([1, 2, 3]),
            first: Path::from(vec![Location(0, 0), Location(2, 1)]),
            second: Path::from(vec![Location(0, 5), Location(2, 4)]),
        };

        assert_eq!(format!("{}", solution), "1,2,3,a1,c2,a6,c5");
    }

    #[test]
    fn solver_agrees_with_oracle_on_reduced_cube() {
        let witness_one = Path::from(vec![Location(0, 0)]);
        let witness_two = Path::from(vec![Location(0, 5)]);

        // a + b*c and a*b + c
        let e1 = ScoreExpression::from_terms([([1, 0, 0], 1), ([0, 1, 1], 1)]);
        let e2 = ScoreExpression::from_terms([([1, 1, 0], 1), ([0, 0, 1], 1)]);

        let side_one: ScoreClasses = HashMap::from([(e1.clone(), vec![witness_one])]);
        let side_two: ScoreClasses = HashMap::from([(e2.clone(), vec![witness_two])]);

        let stop = AtomicBool::new(false);
        let found = solve(&side_one, &side_two, 10, 1..=10, &stop);

        let mut oracle = HashSet::new();
        for a in 1..=10 {
            for b in 1..=10 {
                for c in 1..=10 {
                    let assignment = Weights([a, b, c]);
                    if e1.eval(assignment) == 10 && e2.eval(assignment) == 10 {
                        oracle.insert(assignment);
                    }
                }
            }
        }

        assert!(!oracle.is_empty());
        assert_eq!(found.keys().copied().collect::<HashSet<_>>(), oracle);
    }

    #[test]
    fn interrupted_search_keeps_partial_results() {
        let e1 = ScoreExpression::from_terms([([1, 0, 0], 1)]);
        let classes: ScoreClasses = HashMap::from([(e1, vec![Path::from(vec![Location(0, 0)])])]);

        let raised = AtomicBool::new(true);
        assert!(satisfying_assignments(&classes, 5, 1..=10, &raised).is_empty());

        let lowered = AtomicBool::new(false);
        let found = satisfying_assignments(&classes, 5, 1..=10, &lowered);
        // a == 5, b and c free
        assert_eq!(found.len(), 100);
    }

    #[test]
    fn puzzle_validates_configuration() {
        assert!(Puzzle::new(sample_board(), Location(0, 0), Location(6, 6), 5..=7, 2024, 1..=49).is_err());
        assert!(Puzzle::new(sample_board(), Location(0, 0), Location(5, 5), 7..=5, 2024, 1..=49).is_err());
        assert!(Puzzle::new(sample_board(), Location(0, 0), Location(5, 5), 5..=7, 2024, 1..=49).is_ok());
    }

    #[test]
    fn full_pipeline_reference_run() {
        let puzzle = Puzzle::new(
            sample_board(),
            Location(0, 0),
            Location(5, 5),
            5..=7,
            2024,
            1..=49,
        )
        .unwrap();

        let stop = AtomicBool::new(false);
        let report = puzzle.run(&stop).unwrap();

        assert_eq!(report.paths.len(), 90);
        assert_eq!(report.classes.0.len(), 18);
        assert_eq!(report.classes.1.len(), 52);
        assert_eq!(report.solutions.len(), 59);

        let best = report.best.unwrap();
        assert_eq!(best.weights, Weights([4, 7, 8]));

        // the first trip runs a1 → f6, the second its reflection a6 → f1
        assert_eq!(*best.first.cells().first().unwrap(), Location(0, 0));
        assert_eq!(*best.first.cells().last().unwrap(), Location(5, 5));
        assert_eq!(*best.second.cells().first().unwrap(), Location(0, 5));
        assert_eq!(*best.second.cells().last().unwrap(), Location(5, 0));

        // both witnesses really score the target under the chosen weights
        let board = puzzle.board();
        assert_eq!(score_of(board, &best.first).unwrap().eval(best.weights), 2024);
        assert_eq!(score_of(board, &best.second).unwrap().eval(best.weights), 2024);

        for (assignment, (first, second)) in &report.solutions {
            assert_eq!(score_of(board, first).unwrap().eval(*assignment), 2024);
            assert_eq!(score_of(board, second).unwrap().eval(*assignment), 2024);
        }
    }

    #[test]
    fn cache_round_trips_artifacts() {
        let board = sample_board();
        let paths = enumerate_paths(&board, Location(0, 0), Location(5, 5), 5..=7).unwrap();
        let classes = dedupe(&board, &paths).unwrap();

        let dir = std::env::temp_dir();
        let path_file = dir.join(format!("hippogonal-paths-{}.json", std::process::id()));
        let class_file = dir.join(format!("hippogonal-classes-{}.json", std::process::id()));

        cache::save_paths(&path_file, &paths).unwrap();
        assert_eq!(cache::load_paths(&path_file).unwrap(), paths);

        cache::save_score_classes(&class_file, &classes).unwrap();
        let records = cache::load_score_classes(&class_file).unwrap();
        assert_eq!(records.len(), classes.len());
        assert_eq!(
            records.iter().map(|record| record.paths.len()).sum::<usize>(),
            paths.len()
        );

        let _ = std::fs::remove_file(path_file);
        let _ = std::fs::remove_file(class_file);
    }
}
