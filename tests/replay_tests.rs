use hanoi_tty::replay::{Replay, TickOutcome, DEFAULT_INTERVAL_MS, MAX_INTERVAL_MS, MIN_INTERVAL_MS};
use hanoi_tty::session::Session;
use hanoi_tty::solver::{self, DiskCount, MAX_DISKS, MIN_DISKS};
use hanoi_tty::tower::{PegLabel, Towers};

fn replay(n: u8) -> Replay {
    Replay::new(solver::solve(DiskCount::new(n).expect("valid disk count")))
}

fn pegs(replay: &Replay) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    (
        replay.peg(PegLabel::A).disks().to_vec(),
        replay.peg(PegLabel::B).disks().to_vec(),
        replay.peg(PegLabel::C).disks().to_vec(),
    )
}

#[test]
fn test_initial_state() {
    let replay = replay(4);
    assert_eq!(replay.cursor(), 0);
    assert_eq!(replay.total_moves(), 15);
    assert!(!replay.is_playing());
    assert_eq!(replay.interval_ms(), DEFAULT_INTERVAL_MS);
    assert_eq!(pegs(&replay), (vec![4, 3, 2, 1], vec![], vec![]));
    assert!(replay.is_at_start());
    assert!(replay.last_move().is_none());
}

#[test]
fn test_two_disk_walkthrough() {
    let mut replay = replay(2);

    for _ in 0..3 {
        assert!(replay.step_forward());
    }
    assert_eq!(pegs(&replay), (vec![], vec![], vec![2, 1]));
    assert!(replay.is_at_end());

    for _ in 0..3 {
        assert!(replay.step_backward());
    }
    assert_eq!(pegs(&replay), (vec![2, 1], vec![], vec![]));
    assert_eq!(replay.cursor(), 0);
}

#[test]
fn test_stepping_past_bounds_is_a_no_op() {
    let mut replay = replay(1);
    assert!(!replay.step_backward());
    assert_eq!(replay.cursor(), 0);

    assert!(replay.step_forward());
    let solved = replay.towers().clone();
    assert!(!replay.step_forward());
    assert_eq!(replay.cursor(), 1);
    assert_eq!(replay.towers(), &solved);
}

#[test]
fn test_full_replay_ends_solved_for_every_size() {
    for n in MIN_DISKS..=MAX_DISKS {
        let mut replay = replay(n);
        while replay.step_forward() {
            assert!(replay.towers().is_valid(n));
        }
        assert_eq!(replay.cursor(), replay.total_moves());
        assert!(replay.towers().is_solved(n), "n = {}", n);

        while replay.step_backward() {
            assert!(replay.towers().is_valid(n));
        }
        assert_eq!(replay.towers(), &Towers::new(n));
    }
}

#[test]
fn test_backward_after_forward_restores_state() {
    let mut replay = replay(5);
    replay.step_forward_by(11);
    for _ in 0..replay.total_moves() {
        let before = (replay.cursor(), replay.towers().clone());
        if !replay.step_forward() {
            break;
        }
        assert!(replay.step_backward());
        assert_eq!((replay.cursor(), replay.towers().clone()), before);
        replay.step_forward();
    }
}

#[test]
fn test_reset_matches_fresh_replay() {
    let mut replay = replay(6);
    replay.step_forward_by(40);
    replay.step_backward_by(7);
    replay.set_playing(true);
    replay.reset();

    let fresh = self::replay(6);
    assert_eq!(replay.cursor(), 0);
    assert_eq!(replay.towers(), fresh.towers());
    assert!(!replay.is_playing());
    assert_eq!(replay.elapsed_ms(), 0);
}

#[test]
fn test_step_by_counts_steps_taken() {
    let mut replay = replay(2);
    assert_eq!(replay.step_forward_by(9), 3);
    assert_eq!(replay.step_backward_by(2), 2);
    assert_eq!(replay.cursor(), 1);
}

#[test]
fn test_jump_to_end_stops_playing() {
    let mut replay = replay(3);
    replay.set_playing(true);
    assert_eq!(replay.jump_to_end(), 7);
    assert!(replay.is_at_end());
    assert!(!replay.is_playing());
    assert!(replay.towers().is_solved(3));
}

#[test]
fn test_last_and_next_move() {
    let mut replay = replay(2);
    assert_eq!(replay.next_move(), replay.solution().get(0));
    replay.step_forward();
    assert_eq!(replay.last_move(), replay.solution().get(0));
    assert_eq!(replay.next_move(), replay.solution().get(1));
    replay.jump_to_end();
    assert!(replay.next_move().is_none());
}

#[test]
fn test_autoplay_waits_for_interval() {
    let mut replay = replay(3);
    replay.set_interval_ms(100);
    replay.set_playing(true);

    assert_eq!(replay.tick(50), TickOutcome::Waiting);
    assert_eq!(replay.cursor(), 0);

    assert_eq!(replay.tick(60), TickOutcome::Stepped);
    assert_eq!(replay.cursor(), 1);
    assert_eq!(replay.elapsed_ms(), 0);
}

#[test]
fn test_autoplay_moves_at_most_once_per_tick() {
    let mut replay = replay(3);
    replay.set_interval_ms(100);
    replay.set_playing(true);
    assert_eq!(replay.tick(1_000), TickOutcome::Stepped);
    assert_eq!(replay.cursor(), 1);
}

#[test]
fn test_tick_without_playing_is_idle() {
    let mut replay = replay(3);
    assert_eq!(replay.tick(5_000), TickOutcome::Idle);
    assert_eq!(replay.cursor(), 0);
    assert_eq!(replay.elapsed_ms(), 0);
}

#[test]
fn test_interval_change_applies_on_next_tick() {
    let mut replay = replay(3);
    replay.set_interval_ms(500);
    replay.set_playing(true);
    assert_eq!(replay.tick(300), TickOutcome::Waiting);

    replay.set_interval_ms(200);
    assert_eq!(replay.cursor(), 0);

    assert_eq!(replay.tick(0), TickOutcome::Stepped);
    assert_eq!(replay.cursor(), 1);
}

#[test]
fn test_autoplay_stops_at_end() {
    let mut replay = replay(1);
    replay.set_interval_ms(100);
    replay.set_playing(true);

    assert_eq!(replay.tick(100), TickOutcome::Stepped);
    assert!(replay.is_at_end());
    assert_eq!(replay.tick(100), TickOutcome::Finished);
    assert!(!replay.is_playing());
    assert_eq!(replay.tick(100), TickOutcome::Idle);
    assert_eq!(replay.cursor(), 1);
}

#[test]
fn test_pause_keeps_cursor() {
    let mut replay = replay(3);
    replay.set_interval_ms(100);
    replay.set_playing(true);
    replay.tick(100);
    replay.tick(100);
    assert!(!replay.toggle_playing());
    assert_eq!(replay.cursor(), 2);
}

#[test]
fn test_interval_is_clamped() {
    let mut replay = replay(2);
    replay.set_interval_ms(1);
    assert_eq!(replay.interval_ms(), MIN_INTERVAL_MS);
    replay.faster();
    assert_eq!(replay.interval_ms(), MIN_INTERVAL_MS);

    replay.set_interval_ms(60_000);
    assert_eq!(replay.interval_ms(), MAX_INTERVAL_MS);
    replay.slower();
    assert_eq!(replay.interval_ms(), MAX_INTERVAL_MS);

    replay.set_interval_ms(500);
    replay.faster();
    assert_eq!(replay.interval_ms(), 400);
}

#[test]
fn test_session_trace_follows_cursor() {
    let mut session = Session::new(2).expect("valid session");
    assert_eq!(
        session.current_trace_lines(),
        vec![
            "move_stack(2, A, C, B)".to_string(),
            "  move_stack(1, A, B, C)".to_string(),
        ]
    );
    session.replay_mut().step_forward();
    assert_eq!(
        session.current_trace_lines(),
        vec!["move_stack(2, A, C, B)".to_string()]
    );
    session.replay_mut().jump_to_end();
    assert!(session.current_trace_lines().is_empty());
}

#[test]
fn test_session_rejects_invalid_disk_count() {
    assert!(Session::new(0).is_err());
    assert!(Session::new(MAX_DISKS + 1).is_err());
    assert_eq!(Session::new(MAX_DISKS).expect("max is valid").trace().len(), 255);
}
