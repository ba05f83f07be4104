mod common;

use dualcount::config::Variant;
use dualcount::ui::app::App;
use dualcount::ui::component::Props;

#[test]
fn test_fresh_screen_shows_both_components_at_zero() {
    let mut app = App::mount(&[Variant::Class, Variant::Function], &Props::Null);
    let screen = common::render_to_string(&mut app, 100, 16);

    assert!(screen.contains("Demo of Class Component"), "{screen}");
    assert!(screen.contains("Demo of Functional Component"), "{screen}");
    assert_eq!(screen.matches("counter: 0").count(), 2, "{screen}");
    assert_eq!(screen.matches("[ Increment ]").count(), 2, "{screen}");
}

#[test]
fn test_screen_tracks_committed_value() {
    let mut app = App::mount(&[Variant::Function], &Props::Null);
    common::render_to_string(&mut app, 60, 16);

    app.activate_focused();
    let before_commit = common::render_to_string(&mut app, 60, 16);
    assert!(before_commit.contains("counter: 0"), "{before_commit}");

    app.commit();
    let after_commit = common::render_to_string(&mut app, 60, 16);
    assert!(after_commit.contains("counter: 1"), "{after_commit}");
}

#[test]
fn test_header_and_footer_are_drawn() {
    let mut app = App::mount(&[Variant::Class], &Props::Null);
    let screen = common::render_to_string(&mut app, 80, 16);
    assert!(screen.contains("dualcount"), "{screen}");
    assert!(screen.contains("1 mounted"), "{screen}");
    assert!(screen.contains("Enter/Space: Increment"), "{screen}");
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = App::mount(&[Variant::Class, Variant::Function], &Props::Null);
    common::render_to_string(&mut app, 4, 2);
}
