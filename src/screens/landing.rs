//! Landing screen: persona picker, journey overview and platform features.

use crate::components::{Footer, Header};
use crate::flow::View;
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::layout::{create_split_layout, create_standard_layout};
use crate::widgets::{Menu, MenuItem, MenuState};
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use indoc::indoc;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

const HERO: &str = indoc! {"
    Find Your Perfect Student Accommodation
    Connecting students with verified, affordable housing and property owners with reliable tenants.
"};

/// Persona entries in menu order.
const PERSONAS: [View; 2] = [View::Student, View::Host];

const STUDENT_JOURNEY: [(&str, &str); 4] = [
    (
        "Register & Search",
        "Create your profile and search with filters for price, location and amenities.",
    ),
    (
        "View Verified Listings",
        "Browse verified properties with host information.",
    ),
    (
        "Book Securely",
        "Submit booking requests and pay through the platform.",
    ),
    (
        "Move In & Review",
        "Enjoy your stay and leave reviews to help future students.",
    ),
];

const HOST_JOURNEY: [(&str, &str); 4] = [
    (
        "Register & List",
        "Create your host profile and submit your property for listing.",
    ),
    (
        "Get Verified",
        "Identity and property details are verified for safety.",
    ),
    (
        "Receive Bookings",
        "Review student profiles and accept booking requests.",
    ),
    (
        "Manage & Earn",
        "Host students and receive payments through the platform.",
    ),
];

pub const FEATURES: [(&str, &str); 6] = [
    (
        "Verification System",
        "All hosts and properties are verified for safety and authenticity.",
    ),
    (
        "Smart Matching",
        "Match students with the accommodation that fits them.",
    ),
    (
        "Secure Payments",
        "Safe payment processing with buyer protection.",
    ),
    (
        "Two-Way Reviews",
        "Students and hosts review each other for transparency.",
    ),
    (
        "Profile Verification",
        "Verified student and host profiles for added security.",
    ),
    (
        "Quality Listings",
        "Curated, high-quality accommodation options for students.",
    ),
];

#[derive(Debug, Default)]
pub struct LandingScreen {
    menu: MenuState,
    card_areas: Vec<(Rect, usize)>,
}

impl LandingScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persona under the menu cursor.
    pub fn selected(&self) -> View {
        PERSONAS[self.menu.selected()]
    }

    fn journey(view: View) -> (&'static str, &'static [(&'static str, &'static str); 4]) {
        match view {
            View::Host => ("For Property Owners", &HOST_JOURNEY),
            View::Student | View::Landing => ("For Students", &STUDENT_JOURNEY),
        }
    }

    fn menu_items(ctx: &RenderContext) -> Vec<MenuItem> {
        let t = theme();
        vec![
            MenuItem::new(ctx.icons.student(), "I'm a Student", t.primary)
                .info("Find Accommodation"),
            MenuItem::new(ctx.icons.host(), "I'm a Host", t.secondary).info("List Property"),
        ]
    }

    fn hero_lines() -> Vec<Line<'static>> {
        let t = theme();
        let mut lines = HERO.lines();
        let mut out = Vec::new();
        if let Some(title) = lines.next() {
            out.push(Line::from(Span::styled(title, t.title_style())));
        }
        out.extend(lines.map(|l| Line::from(Span::styled(l, t.muted_style()))));
        out
    }

    fn info_lines(&self, ctx: &RenderContext) -> Vec<Line<'static>> {
        let t = theme();
        let (heading, journey) = Self::journey(self.selected());
        let mut lines = vec![
            Line::from(Span::styled("How Stayzy Works", t.title_style())),
            Line::from(Span::styled(heading, t.emphasis_style())),
        ];
        for (i, (step, detail)) in journey.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!(" {}. ", i + 1), t.emphasis_style()),
                Span::styled(*step, t.text_style()),
            ]));
            lines.push(Line::from(Span::styled(format!("    {}", detail), t.muted_style())));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Platform Features", t.title_style())));
        for (name, detail) in FEATURES {
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", ctx.icons.verified()), t.success_style()),
                Span::styled(format!("{}: ", name), t.text_style()),
                Span::styled(detail, t.muted_style()),
            ]));
        }
        lines
    }

    fn choose(&mut self, index: usize) -> ScreenAction {
        self.menu.select(index, PERSONAS.len());
        ScreenAction::Navigate(self.selected())
    }
}

impl Screen for LandingScreen {
    type Model = ();

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        _model: &(),
        ctx: &RenderContext,
    ) -> Result<()> {
        let t = theme();
        let (header, body, footer) = create_standard_layout(area, Header::HEIGHT, Footer::HEIGHT);
        Header::render(frame, header, "Student Accommodation", None)?;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(body);
        frame.render_widget(
            Paragraph::new(Self::hero_lines())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            chunks[0],
        );

        let (left, right) = create_split_layout(chunks[1], 35);
        let menu_block = Block::default()
            .borders(Borders::ALL)
            .title(" Get Started ")
            .border_style(t.border_focused_style());
        let menu_area = menu_block.inner(left);
        frame.render_widget(menu_block, left);

        let menu = Menu::new(Self::menu_items(ctx));
        self.card_areas = menu.clickable_areas(menu_area);
        frame.render_stateful_widget(menu, menu_area, &mut self.menu);

        let info_block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style())
            .padding(Padding::horizontal(1));
        frame.render_widget(
            Paragraph::new(self.info_lines(ctx))
                .block(info_block)
                .wrap(Wrap { trim: false }),
            right,
        );

        Footer::render(frame, footer, &ctx.config.keymap.footer_landing())?;
        Ok(())
    }

    fn handle_event(
        &mut self,
        event: &Event,
        _model: &mut (),
        ctx: &ScreenContext,
    ) -> Result<ScreenAction> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = match ctx.config.keymap.action_for(key) {
                    Some(Action::MoveUp | Action::MoveLeft | Action::PrevField) => {
                        self.menu.move_by(false, PERSONAS.len());
                        ScreenAction::None
                    }
                    Some(Action::MoveDown | Action::MoveRight | Action::NextField) => {
                        self.menu.move_by(true, PERSONAS.len());
                        ScreenAction::None
                    }
                    Some(Action::Confirm | Action::ToggleSelect) => {
                        ScreenAction::Navigate(self.selected())
                    }
                    Some(Action::JumpToStep1) => self.choose(0),
                    Some(Action::JumpToStep2) => self.choose(1),
                    Some(Action::Cancel | Action::Quit) => ScreenAction::Quit,
                    _ => ScreenAction::None,
                };
                Ok(action)
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    Ok(Menu::hit_test(&self.card_areas, mouse.column, mouse.row)
                        .map_or(ScreenAction::None, |i| self.choose(i)))
                }
                MouseEventKind::ScrollUp => {
                    self.menu.move_by(false, PERSONAS.len());
                    Ok(ScreenAction::None)
                }
                MouseEventKind::ScrollDown => {
                    self.menu.move_by(true, PERSONAS.len());
                    Ok(ScreenAction::None)
                }
                _ => Ok(ScreenAction::None),
            },
            _ => Ok(ScreenAction::None),
        }
    }

    fn on_enter(&mut self) {
        self.card_areas.clear();
    }
}
