use crate::components::HelpOverlay;
use crate::config::Config;
use crate::flow::{ActiveView, Navigator, View};
use crate::icons::Icons;
use crate::keymap::Action;
use crate::screens::{
    HostFlowScreen, LandingScreen, RenderContext, Screen, ScreenAction, ScreenContext,
    StudentFlowScreen,
};
use crate::styles::{init_theme, ThemeType};
use crate::tui::Tui;
use crate::widgets::{ToastManager, ToastVariant};
use anyhow::{Context, Result};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Root of the TUI: owns the navigator, one controller per view and the
/// overlays drawn on top of them.
pub struct App {
    /// What the session runs with, CLI overrides included.
    config: Config,
    /// What `config_path` holds. Only this copy is ever saved.
    saved_config: Config,
    config_path: PathBuf,
    icons: Icons,
    navigator: Navigator,
    landing: LandingScreen,
    student: StudentFlowScreen,
    host: HostFlowScreen,
    toasts: ToastManager,
    show_help: bool,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, config_path: PathBuf) -> Self {
        Self::with_session(config.clone(), config, config_path)
    }

    /// Start with `config` for this session while preference changes are
    /// written on top of `saved_config`.
    pub fn with_session(saved_config: Config, config: Config, config_path: PathBuf) -> Self {
        let theme_type = config.theme.parse::<ThemeType>().unwrap_or_default();
        init_theme(theme_type);
        let icons = Icons::from_config(&config);
        info!(
            "Starting with theme {}, {} keymap, {} icons",
            theme_type.as_str(),
            config.keymap.preset.name(),
            icons.icon_set().name()
        );
        Self {
            config,
            saved_config,
            config_path,
            icons,
            navigator: Navigator::new(),
            landing: LandingScreen::new(),
            student: StudentFlowScreen::new(),
            host: HostFlowScreen::new(),
            toasts: ToastManager::new(),
            show_help: false,
            should_quit: false,
        }
    }

    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        tui.enter()?;
        loop {
            self.draw(tui)?;
            if self.should_quit {
                break;
            }
            if let Some(event) = tui.poll_event(POLL_INTERVAL)? {
                self.handle_event(&event)?;
            }
            self.toasts.tick();
        }
        info!("Quitting");
        tui.exit()
    }

    fn draw(&mut self, tui: &mut Tui) -> Result<()> {
        let mut result = Ok(());
        tui.terminal_mut()
            .draw(|frame| result = self.render(frame))
            .context("Failed to draw frame")?;
        result
    }

    pub fn render(&mut self, frame: &mut Frame) -> Result<()> {
        let area = frame.area();
        let ctx = RenderContext::new(&self.config, &self.icons);
        match self.navigator.active() {
            ActiveView::Landing => self.landing.render(frame, area, &(), &ctx)?,
            ActiveView::Student(flow) => self.student.render(frame, area, flow, &ctx)?,
            ActiveView::Host(flow) => self.host.render(frame, area, flow, &ctx)?,
        }

        if self.show_help {
            let path = self.config_path.display().to_string();
            HelpOverlay::render(frame, area, &self.config.keymap, &path)?;
        }
        self.toasts.render(frame, area, &self.icons);
        Ok(())
    }

    pub fn handle_event(&mut self, event: &Event) -> Result<()> {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }
            if is_interrupt(key) {
                self.should_quit = true;
                return Ok(());
            }
            if self.show_help {
                self.handle_help_key(key);
                return Ok(());
            }
            if !self.is_input_focused() {
                match self.config.keymap.action_for(key) {
                    Some(Action::Quit) => {
                        self.should_quit = true;
                        return Ok(());
                    }
                    Some(Action::Help) => {
                        self.show_help = true;
                        return Ok(());
                    }
                    Some(Action::CycleTheme) => {
                        self.cycle_theme();
                        return Ok(());
                    }
                    _ => {}
                }
            }
        } else if self.show_help {
            return Ok(());
        }

        let ctx = ScreenContext::new(&self.config);
        let action = match self.navigator.view() {
            View::Landing => self.landing.handle_event(event, &mut (), &ctx)?,
            View::Student => match self.navigator.student_mut() {
                Some(flow) => self.student.handle_event(event, flow, &ctx)?,
                None => ScreenAction::None,
            },
            View::Host => match self.navigator.host_mut() {
                Some(flow) => self.host.handle_event(event, flow, &ctx)?,
                None => ScreenAction::None,
            },
        };
        self.apply(action);
        Ok(())
    }

    fn apply(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::None => {}
            ScreenAction::Navigate(view) => self.navigate(view),
            ScreenAction::Notify { message, variant } => self.toasts.notify(message, variant),
            ScreenAction::Quit => self.should_quit = true,
            ScreenAction::ShowHelp => self.show_help = true,
        }
    }

    fn navigate(&mut self, view: View) {
        self.navigator.select(view);
        match view {
            View::Landing => self.landing.on_enter(),
            View::Student => self.student.on_enter(),
            View::Host => self.host.on_enter(),
        }
    }

    /// Any key closes the overlay; 1/2/3 switch preset first.
    fn handle_help_key(&mut self, key: &KeyEvent) {
        if let KeyCode::Char(c) = key.code {
            if let Some(preset) = HelpOverlay::preset_for_key(c) {
                if preset != self.config.keymap.preset {
                    self.config.keymap.preset = preset;
                    self.saved_config.keymap.preset = preset;
                    info!("Keymap preset changed to {}", preset.name());
                    self.save_config();
                    self.toasts
                        .notify(format!("Keymap: {}", preset.name()), ToastVariant::Success);
                }
                return;
            }
        }
        self.show_help = false;
    }

    fn cycle_theme(&mut self) {
        let next = self
            .config
            .theme
            .parse::<ThemeType>()
            .unwrap_or_default()
            .next();
        init_theme(next);
        self.config.theme = next.as_str().to_string();
        self.saved_config.theme = next.as_str().to_string();
        info!("Theme changed to {}", next.as_str());
        self.save_config();
    }

    fn save_config(&mut self) {
        if let Err(e) = self.saved_config.save(&self.config_path) {
            error!("Failed to save config: {:#}", e);
            self.toasts
                .notify("Could not save settings", ToastVariant::Warning);
        }
    }

    pub fn is_input_focused(&self) -> bool {
        match self.navigator.view() {
            View::Landing => self.landing.is_input_focused(),
            View::Student => self.student.is_input_focused(),
            View::Host => self.host.is_input_focused(),
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
