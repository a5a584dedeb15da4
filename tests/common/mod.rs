//! Shared helpers for the journey tests.
//!
//! `TestApp` wraps an [`App`] with a config file in a `TempDir` and an
//! in-memory terminal, so tests can press keys and look at the screen.

#![allow(dead_code)]

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use stayzy::config::Config;
use stayzy::flow::View;
use stayzy::App;
use tempfile::TempDir;

pub const WIDTH: u16 = 120;
pub const HEIGHT: u16 = 60;

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

pub fn alt(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT))
}

pub fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

pub struct TestApp {
    // Held so the config directory outlives the app.
    pub temp_dir: TempDir,
    pub app: App,
    terminal: Terminal<TestBackend>,
}

impl TestApp {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.icons = Some("ascii".to_string());
        Self::with_config(config)
    }

    pub fn with_config(config: Config) -> Self {
        Self::with_session(config.clone(), config)
    }

    /// `saved` goes to the config file, `session` is what the app runs with.
    pub fn with_session(saved: Config, session: Config) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        saved.save(&config_path).unwrap();
        let app = App::with_session(saved, session, config_path);
        let terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        Self {
            temp_dir,
            app,
            terminal,
        }
    }

    pub fn send(&mut self, event: Event) {
        self.app.handle_event(&event).unwrap();
    }

    pub fn press(&mut self, code: KeyCode) {
        self.send(key(code));
    }

    pub fn press_n(&mut self, code: KeyCode, times: usize) {
        for _ in 0..times {
            self.press(code);
        }
    }

    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    pub fn view(&self) -> View {
        self.app.navigator().view()
    }

    /// Draw one frame and return the screen as lines of text.
    pub fn render(&mut self) -> String {
        let app = &mut self.app;
        self.terminal
            .draw(|frame| {
                app.render(frame).unwrap();
            })
            .unwrap();
        buffer_text(&self.terminal)
    }

    /// Render and find the first cell of `needle` on screen.
    pub fn find(&mut self, needle: &str) -> Option<(u16, u16)> {
        let screen = self.render();
        screen.lines().enumerate().find_map(|(row, line)| {
            line.find(needle).map(|byte| {
                let column = line[..byte].chars().count();
                (column as u16, row as u16)
            })
        })
    }
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
