use hanoi_tty::solver::{self, DiskCount, SolveError, MAX_DISKS, MIN_DISKS};
use hanoi_tty::tower::{Move, PegLabel, Towers};

fn disks(n: u8) -> DiskCount {
    DiskCount::new(n).expect("disk count in range")
}

#[test]
fn test_solution_length_is_two_pow_n_minus_one() {
    for n in MIN_DISKS..=MAX_DISKS {
        let solution = solver::solve(disks(n));
        assert_eq!(solution.len(), (1usize << n) - 1, "n = {}", n);
        assert_eq!(solution.len(), disks(n).move_count());
    }
}

#[test]
fn test_two_disk_solution() {
    let solution = solver::solve(disks(2));
    assert_eq!(
        solution.moves(),
        &[
            Move::new(PegLabel::A, PegLabel::B, 1),
            Move::new(PegLabel::A, PegLabel::C, 2),
            Move::new(PegLabel::B, PegLabel::C, 1),
        ]
    );
}

#[test]
fn test_three_disks_moves_largest_once_in_the_middle() {
    let solution = solver::solve(disks(3));
    assert_eq!(solution.len(), 7);
    assert_eq!(solution.moves()[3], Move::new(PegLabel::A, PegLabel::C, 3));

    let largest_moves = solution.iter().filter(|mv| mv.disk == 3).count();
    assert_eq!(largest_moves, 1);
}

#[test]
fn test_applying_every_solution_is_legal_and_solves() {
    for n in MIN_DISKS..=MAX_DISKS {
        let solution = solver::solve(disks(n));
        let mut towers = Towers::new(n);
        for mv in &solution {
            towers.apply(mv);
            assert!(towers.is_valid(n), "invalid state after {} (n = {})", mv, n);
        }
        assert!(towers.is_solved(n), "n = {} not solved", n);
    }
}

#[test]
fn test_solving_is_deterministic() {
    assert_eq!(solver::solve(disks(6)), solver::solve(disks(6)));
}

#[test]
fn test_disk_count_range() {
    assert_eq!(
        DiskCount::new(0),
        Err(SolveError::InvalidDiskCount {
            requested: 0,
            min: MIN_DISKS,
            max: MAX_DISKS,
        })
    );
    assert!(DiskCount::new(9).is_err());
    for n in MIN_DISKS..=MAX_DISKS {
        assert_eq!(disks(n).get(), n);
    }
}

#[test]
fn test_disk_count_from_str() {
    assert_eq!("4".parse::<DiskCount>(), Ok(disks(4)));
    assert_eq!(" 8 ".parse::<DiskCount>(), Ok(disks(8)));
    assert!(matches!(
        "-1".parse::<DiskCount>(),
        Err(SolveError::InvalidDiskCount { requested: -1, .. })
    ));
    assert!(matches!(
        "three".parse::<DiskCount>(),
        Err(SolveError::NotANumber { .. })
    ));

    let message = "12".parse::<DiskCount>().unwrap_err().to_string();
    assert!(message.contains("between 1 and 8"), "{}", message);
}

#[test]
fn test_trace_matches_solution() {
    for n in MIN_DISKS..=MAX_DISKS {
        let (solution, trace) = solver::solve_with_trace(disks(n));
        assert_eq!(solution, solver::solve(disks(n)));
        assert_eq!(trace.len(), solution.len());

        for (idx, mv) in solution.iter().enumerate() {
            let frames = trace.snapshot(idx).expect("one snapshot per move");
            let outermost = frames.first().expect("top-level call is always active");
            assert_eq!(outermost.depth, 0);
            assert_eq!(outermost.disks, n);
            assert_eq!(
                (outermost.source, outermost.target, outermost.auxiliary),
                (PegLabel::A, PegLabel::C, PegLabel::B)
            );

            let innermost = frames.last().expect("non-empty snapshot");
            assert_eq!(innermost.disks, mv.disk);
            assert_eq!(innermost.source, mv.source);
            assert_eq!(innermost.target, mv.target);
            assert_eq!(frames.len(), (n - mv.disk) as usize + 1);

            for (depth, frame) in frames.iter().enumerate() {
                assert_eq!(frame.depth, depth);
            }
        }
    }
}

#[test]
fn test_trace_lines_are_indented_by_depth() {
    let (_, trace) = solver::solve_with_trace(disks(3));
    assert_eq!(
        trace.lines(0),
        vec![
            "move_stack(3, A, C, B)".to_string(),
            "  move_stack(2, A, B, C)".to_string(),
            "    move_stack(1, A, C, B)".to_string(),
        ]
    );
    assert_eq!(trace.lines(3), vec!["move_stack(3, A, C, B)".to_string()]);
    assert!(trace.lines(7).is_empty());
}
