use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hanoi_tty::session::Session;
use hanoi_tty::settings::{SettingsStore, ThemeKind};
use hanoi_tty::ui::panes::CancelAction;
use hanoi_tty::ui::App;
use ratatui::{backend::TestBackend, Terminal};
use std::time::Duration;
use tempfile::TempDir;

fn app(disks: u8) -> (App, TempDir) {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = SettingsStore::at_path(dir.path().join("settings.toml"));
    let session = Session::new(disks).expect("valid session");
    (App::new(session, store, ThemeKind::Light), dir)
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn screen(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(160, 40)).expect("test terminal");
    terminal.draw(|f| app.render(f)).expect("draw");
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_renders_initial_state() {
    let (mut app, _dir) = app(3);
    let screen = screen(&mut app);

    assert!(screen.contains("Move 0/7"), "{}", screen);
    assert!(screen.contains("Towers"));
    assert!(screen.contains("Recursive Call Stack"));
    assert!(screen.contains("move_stack(3, A, C, B)"));
    assert!(screen.contains("disk 1: A -> C"));
    assert!(screen.contains("START"));
}

#[test]
fn test_arrow_keys_step() {
    let (mut app, _dir) = app(3);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.session.replay().cursor(), 2);

    press(&mut app, KeyCode::Left);
    assert_eq!(app.session.replay().cursor(), 1);
    assert!(screen(&mut app).contains("Move 1/7"));
}

#[test]
fn test_end_and_reset_keys() {
    let (mut app, _dir) = app(3);
    press(&mut app, KeyCode::Enter);
    assert!(app.session.replay().is_at_end());
    let solved = screen(&mut app);
    assert!(solved.contains("Completed"));
    assert!(solved.contains("no active calls"));

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.session.replay().cursor(), 0);
}

#[test]
fn test_space_plays_and_tick_steps() {
    let (mut app, _dir) = app(2);
    press(&mut app, KeyCode::Char(' '));
    assert!(app.session.replay().is_playing());

    app.tick(Duration::from_millis(200));
    assert_eq!(app.session.replay().cursor(), 0);
    app.tick(Duration::from_millis(300));
    assert_eq!(app.session.replay().cursor(), 1);

    // Stepping by hand pauses auto-play
    press(&mut app, KeyCode::Right);
    assert!(!app.session.replay().is_playing());
}

#[test]
fn test_theme_toggle_is_persisted() {
    let (mut app, _dir) = app(2);
    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.theme_kind, ThemeKind::Dark);
    assert_eq!(app.store.load().expect("saved").theme, ThemeKind::Dark);
}

#[test]
fn test_new_game_dialog() {
    let (mut app, _dir) = app(3);
    press(&mut app, KeyCode::Char('n'));
    assert!(app.dialog.is_some());
    assert!(screen(&mut app).contains("Selected: 3 disks"));

    press(&mut app, KeyCode::Char('5'));
    press(&mut app, KeyCode::Enter);
    assert!(app.dialog.is_none());
    assert_eq!(app.session.disks().get(), 5);
    assert_eq!(app.session.replay().total_moves(), 31);
}

#[test]
fn test_dialog_cancel() {
    let (mut app, _dir) = app(3);
    press(&mut app, KeyCode::Char('n'));
    press(&mut app, KeyCode::Esc);
    assert!(app.dialog.is_none());
    assert!(!app.should_quit);
    assert_eq!(app.session.disks().get(), 3);

    app.open_setup_dialog(CancelAction::Quit);
    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit);
}

#[test]
fn test_digits_step_forward_outside_dialog() {
    let (mut app, _dir) = app(3);
    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.session.replay().cursor(), 4);
    press(&mut app, KeyCode::Char('9'));
    assert_eq!(app.session.replay().cursor(), 7);
}
