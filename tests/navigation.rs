//! Root navigation, global keys and persisted preferences.

mod common;

use clap::Parser;
use common::{click, ctrl, TestApp};
use crossterm::event::KeyCode;
use stayzy::cli::Cli;
use stayzy::config::Config;
use stayzy::flow::View;
use stayzy::keymap::KeymapPreset;

fn saved_config(t: &TestApp) -> Config {
    Config::load_or_create(t.app.config_path()).unwrap()
}

/// An app started as `stayzy <args>` on top of the default config file.
fn launched_with(args: &[&str]) -> TestApp {
    let cli = Cli::try_parse_from(args).unwrap();
    let mut saved = Config::default();
    saved.icons = Some("ascii".to_string());
    let mut session = saved.clone();
    cli.apply_overrides(&mut session, false);
    TestApp::with_session(saved, session)
}

#[test]
fn test_landing_shows_both_personas_and_features() {
    let mut t = TestApp::new();
    let screen = t.render();
    assert!(screen.contains("Find Your Perfect Student Accommodation"));
    assert!(screen.contains("I'm a Student"));
    assert!(screen.contains("I'm a Host"));
    assert!(screen.contains("Verification System"));
}

#[test]
fn test_quit_keys() {
    let mut t = TestApp::new();
    t.press(KeyCode::Char('q'));
    assert!(t.app.should_quit());

    let mut t = TestApp::new();
    t.press(KeyCode::Enter);
    t.send(ctrl('c'));
    assert!(t.app.should_quit());

    // Esc inside a flow goes home instead of quitting
    let mut t = TestApp::new();
    t.press(KeyCode::Enter);
    t.press(KeyCode::Esc);
    assert_eq!(t.view(), View::Landing);
    assert!(!t.app.should_quit());
}

#[test]
fn test_ctrl_c_quits_even_while_editing() {
    let mut t = TestApp::new();
    t.press(KeyCode::Enter);
    t.press(KeyCode::Enter);
    assert!(t.app.is_input_focused());
    t.send(ctrl('c'));
    assert!(t.app.should_quit());
}

#[test]
fn test_help_overlay_switches_preset_and_saves() {
    let mut t = TestApp::new();
    t.press(KeyCode::Char('?'));
    assert!(t.app.show_help());
    assert!(t.render().contains("Keyboard Shortcuts - Standard Preset"));

    t.press(KeyCode::Char('2'));
    assert!(t.app.show_help());
    assert_eq!(t.app.config().keymap.preset, KeymapPreset::Vim);
    assert_eq!(saved_config(&t).keymap.preset, KeymapPreset::Vim);
    assert!(t.render().contains("Keyboard Shortcuts - Vim Preset"));

    // Any other key closes without acting on it
    t.press(KeyCode::Char('q'));
    assert!(!t.app.show_help());
    assert!(!t.app.should_quit());

    // The new preset is live
    t.press(KeyCode::Char('j'));
    t.press(KeyCode::Enter);
    assert_eq!(t.view(), View::Host);
}

#[test]
fn test_cycle_theme_saves_config() {
    let mut t = TestApp::new();
    assert_eq!(t.app.config().theme, "dark");
    t.press(KeyCode::Char('t'));
    assert_eq!(t.app.config().theme, "light");
    assert_eq!(saved_config(&t).theme, "light");
}

#[test]
fn test_number_keys_pick_a_persona() {
    let mut t = TestApp::new();
    t.send(common::alt('2'));
    assert_eq!(t.view(), View::Host);
}

#[test]
fn test_clicking_a_persona_card() {
    let mut t = TestApp::new();
    let (column, row) = t.find("I'm a Host").expect("host card on screen");
    t.send(click(column, row));
    assert_eq!(t.view(), View::Host);
}

#[test]
fn test_switching_flows_drops_the_other() {
    let mut t = TestApp::new();
    t.press(KeyCode::Enter);
    assert!(t.app.navigator().student().is_some());
    t.press(KeyCode::Esc);
    t.press(KeyCode::Down);
    t.press(KeyCode::Enter);
    assert!(t.app.navigator().student().is_none());
    assert!(t.app.navigator().host().is_some());
}

#[test]
fn test_preset_switch_keeps_cli_theme_out_of_the_file() {
    let mut t = launched_with(&["stayzy", "--no-colors", "--keymap", "emacs"]);
    assert_eq!(t.app.config().theme, "nocolor");
    assert_eq!(t.app.config().keymap.preset, KeymapPreset::Emacs);

    t.press(KeyCode::Char('?'));
    t.press(KeyCode::Char('2'));
    assert_eq!(t.app.config().keymap.preset, KeymapPreset::Vim);
    // The session still runs without colors
    assert_eq!(t.app.config().theme, "nocolor");

    let saved = saved_config(&t);
    assert_eq!(saved.theme, "dark");
    assert_eq!(saved.keymap.preset, KeymapPreset::Vim);
}

#[test]
fn test_theme_cycle_keeps_cli_keymap_out_of_the_file() {
    let mut t = launched_with(&["stayzy", "--keymap", "vim", "--theme", "light"]);
    t.press(KeyCode::Char('t'));
    assert_eq!(t.app.config().theme, "nocolor");
    assert_eq!(t.app.config().keymap.preset, KeymapPreset::Vim);

    let saved = saved_config(&t);
    assert_eq!(saved.theme, "nocolor");
    assert_eq!(saved.keymap.preset, KeymapPreset::Standard);
}
