//! Student flow screen.
//!
//! Every step is a column of rows built from the flow's current records.
//! Buttons call the flow's transitions; text, select and checkbox rows
//! write straight back into the matching form field.

use crate::components::{Footer, Header, StepBar};
use crate::flow::fixtures::{self, format_usd, ListingId};
use crate::flow::forms::{
    Amenity, BookingField, Choice, SearchField, StudentRegistrationField, TextField, TextForm,
};
use crate::flow::{FlowStep, StudentFlow, StudentStep, Transition, View};
use crate::icons::Icons;
use crate::keymap::Action;
use crate::screens::screen_trait::{
    RenderContext, Screen, ScreenAction, ScreenContext, StepRequest,
};
use crate::styles::{theme, Theme};
use crate::utils::form::{ControlKind, FormCommand, FormControl, FormState};
use crate::utils::layout::create_standard_layout;
use crate::widgets::{FormRow, FormView, RowBuilder};
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentControl {
    Registration(StudentRegistrationField),
    CreateProfile,
    Search(SearchField),
    SearchDuration,
    SearchAmenity(Amenity),
    SearchAccommodations,
    BookNow(ListingId),
    Booking(BookingField),
    BookingDuration,
    SubmitBooking,
    ReturnHome,
}

impl FormControl for StudentControl {
    fn kind(&self) -> ControlKind {
        match self {
            Self::Registration(_) | Self::Search(_) | Self::Booking(_) => ControlKind::Text,
            Self::SearchDuration | Self::BookingDuration => ControlKind::Select,
            Self::SearchAmenity(_) => ControlKind::Toggle,
            Self::CreateProfile
            | Self::SearchAccommodations
            | Self::BookNow(_)
            | Self::SubmitBooking
            | Self::ReturnHome => ControlKind::Button,
        }
    }
}

#[derive(Debug, Default)]
pub struct StudentFlowScreen {
    form: FormState<StudentControl>,
    step_hits: Vec<(Rect, StudentStep)>,
}

impl StudentFlowScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focusable controls of `step`, top to bottom.
    pub fn controls(step: StudentStep) -> Vec<StudentControl> {
        use StudentControl as C;
        match step {
            StudentStep::Register => StudentRegistrationField::ALL
                .into_iter()
                .map(C::Registration)
                .chain([C::CreateProfile])
                .collect(),
            StudentStep::Search => [
                C::Search(SearchField::Location),
                C::Search(SearchField::MaxPrice),
                C::SearchDuration,
            ]
            .into_iter()
            .chain(Amenity::SEARCH_FILTERS.into_iter().map(C::SearchAmenity))
            .chain([C::SearchAccommodations])
            .collect(),
            StudentStep::Listings => fixtures::listings()
                .iter()
                .map(|listing| C::BookNow(listing.id))
                .collect(),
            StudentStep::Booking => vec![
                C::Booking(BookingField::MoveInDate),
                C::BookingDuration,
                C::Booking(BookingField::Message),
                C::SubmitBooking,
            ],
            StudentStep::Confirmation => vec![C::ReturnHome],
        }
    }

    pub fn focused(&self, flow: &StudentFlow) -> Option<StudentControl> {
        self.form.focused(&Self::controls(flow.step()))
    }

    fn text_value(flow: &StudentFlow, control: StudentControl) -> String {
        match control {
            StudentControl::Registration(field) => flow.registration().value(field),
            StudentControl::Search(field) => flow.search().value(field),
            StudentControl::Booking(field) => flow.booking().value(field),
            _ => "",
        }
        .to_string()
    }

    fn text_row<F: TextField>(
        &self,
        b: &RowBuilder,
        control: StudentControl,
        field: F,
        value: &str,
        focus: Option<StudentControl>,
    ) -> FormRow<StudentControl> {
        b.text_field(
            control,
            field.label(),
            value,
            field.placeholder(),
            focus == Some(control),
            self.form.editing(control),
        )
    }

    pub fn rows(
        &self,
        flow: &StudentFlow,
        t: &Theme,
        icons: &Icons,
    ) -> Vec<FormRow<StudentControl>> {
        use StudentControl as C;
        let b = RowBuilder::new(t, icons);
        let focus = self.focused(flow);
        let is = |c: StudentControl| focus == Some(c);
        let mut rows = Vec::new();

        match flow.step() {
            StudentStep::Register => {
                rows.push(b.section("Create Your Student Profile"));
                rows.push(FormRow::plain(Span::styled(
                    "Join Stayzy to book verified student housing.",
                    t.muted_style(),
                )));
                rows.push(FormRow::blank());
                for field in StudentRegistrationField::ALL {
                    let value = flow.registration().value(field);
                    rows.push(self.text_row(&b, C::Registration(field), field, value, focus));
                }
                rows.push(FormRow::blank());
                rows.push(b.button(
                    C::CreateProfile,
                    "Create Profile & Continue",
                    is(C::CreateProfile),
                ));
            }
            StudentStep::Search => {
                let search = flow.search();
                rows.push(b.section("Find Your Perfect Accommodation"));
                rows.push(FormRow::blank());
                for field in [SearchField::Location, SearchField::MaxPrice] {
                    let value = search.value(field);
                    rows.push(self.text_row(&b, C::Search(field), field, value, focus));
                }
                rows.push(b.select(
                    C::SearchDuration,
                    "Duration",
                    search.duration.label(),
                    is(C::SearchDuration),
                ));
                rows.push(FormRow::blank());
                rows.push(FormRow::plain(Span::styled("Amenities", t.emphasis_style())));
                for amenity in Amenity::SEARCH_FILTERS {
                    let control = C::SearchAmenity(amenity);
                    let checked = search.amenities.contains(amenity);
                    rows.push(b.checkbox(control, amenity.label(), checked, is(control)));
                }
                rows.push(FormRow::blank());
                rows.push(b.button(
                    C::SearchAccommodations,
                    "Search Accommodations",
                    is(C::SearchAccommodations),
                ));
            }
            StudentStep::Listings => {
                let listings = fixtures::listings();
                rows.push(b.section("Available Accommodations"));
                rows.push(FormRow::plain(Span::styled(
                    format!("{} properties found", listings.len()),
                    t.muted_style(),
                )));
                for listing in listings {
                    rows.push(FormRow::blank());
                    let mut title = vec![Span::styled(listing.title, t.emphasis_style())];
                    if listing.verified {
                        title.push(Span::styled(
                            format!("  {} Verified", icons.verified()),
                            t.success_style(),
                        ));
                    }
                    rows.push(FormRow::plain(Line::from(title)));
                    rows.push(FormRow::plain(Span::styled(
                        format!("{} {}", icons.location(), listing.location),
                        t.muted_style(),
                    )));
                    rows.push(FormRow::plain(Line::from(vec![
                        Span::styled(listing.price_label(), t.title_style()),
                        Span::styled(format!("  {}  ", listing.duration), t.muted_style()),
                        Span::styled(
                            format!("{} {:.1}", icons.star(), listing.rating),
                            t.star_style(),
                        ),
                    ])));
                    let amenities: Vec<&str> =
                        listing.amenities.iter().map(|a| a.label()).collect();
                    rows.push(FormRow::plain(Span::styled(amenities.join(" · "), t.text_style())));
                    rows.push(FormRow::plain(Span::styled(
                        format!("{} Host: {}", icons.user(), listing.host),
                        t.muted_style(),
                    )));
                    let control = C::BookNow(listing.id);
                    rows.push(b.button(control, "Book Now", is(control)));
                }
            }
            StudentStep::Booking => {
                let listing = flow.selected_listing();
                let quote = flow.quote();
                let booking = flow.booking();
                rows.push(b.section("Booking Request"));
                rows.push(FormRow::blank());
                rows.push(FormRow::plain(Span::styled("Selected Property", t.emphasis_style())));
                rows.push(FormRow::plain(Span::styled(listing.title, t.text_style())));
                rows.push(FormRow::plain(Span::styled(
                    format!("{} • {}", listing.location, listing.price_label()),
                    t.muted_style(),
                )));
                rows.push(FormRow::blank());
                let date = BookingField::MoveInDate;
                rows.push(self.text_row(&b, C::Booking(date), date, booking.value(date), focus));
                rows.push(b.select(
                    C::BookingDuration,
                    "Stay Duration",
                    booking.duration.label(),
                    is(C::BookingDuration),
                ));
                let message = BookingField::Message;
                let value = booking.value(message);
                rows.push(self.text_row(&b, C::Booking(message), message, value, focus));
                rows.push(FormRow::blank());
                for (label, amount, style) in [
                    ("Monthly Rent:", quote.monthly_rent, t.text_style()),
                    ("Security Deposit:", quote.security_deposit, t.text_style()),
                    ("Platform Fee:", quote.platform_fee, t.text_style()),
                    ("Total Due Today:", quote.total_due_today(), t.title_style()),
                ] {
                    rows.push(FormRow::plain(Line::from(vec![
                        Span::styled(format!("  {:<24}", label), style),
                        Span::styled(format_usd(amount), style),
                    ])));
                }
                rows.push(FormRow::blank());
                rows.push(b.button(
                    C::SubmitBooking,
                    "Submit Booking Request",
                    is(C::SubmitBooking),
                ));
            }
            StudentStep::Confirmation => {
                rows.push(FormRow::plain(Span::styled(
                    format!("{} Booking Request Submitted!", icons.success()),
                    t.success_style(),
                )));
                rows.push(FormRow::blank());
                rows.push(FormRow::plain(Span::styled(
                    format!(
                        "Your request for {} has been sent to {}.",
                        flow.selected_listing().title,
                        flow.selected_listing().host
                    ),
                    t.text_style(),
                )));
                rows.push(FormRow::blank());
                rows.push(FormRow::plain(Span::styled("Next Steps:", t.emphasis_style())));
                for step in [
                    "Host will review your profile",
                    "You'll receive a response within 24 hours",
                    "Payment will be processed upon acceptance",
                    "Move-in instructions will be provided",
                ] {
                    rows.push(FormRow::plain(Span::styled(
                        format!("  • {}", step),
                        t.muted_style(),
                    )));
                }
                rows.push(FormRow::blank());
                rows.push(b.button(C::ReturnHome, "Return to Home", is(C::ReturnHome)));
            }
        }
        rows
    }

    fn after(&mut self, transition: Transition<StudentStep>) -> ScreenAction {
        match transition {
            Transition::Moved { .. } => {
                self.form.reset();
                ScreenAction::None
            }
            Transition::Back => ScreenAction::Navigate(View::Landing),
            Transition::Ignored { .. } => ScreenAction::None,
        }
    }

    fn apply(
        &mut self,
        command: FormCommand<StudentControl>,
        flow: &mut StudentFlow,
    ) -> ScreenAction {
        use StudentControl as C;
        match command {
            FormCommand::SetText(C::Registration(field), value) => {
                flow.set_registration(field, value)
            }
            FormCommand::SetText(C::Search(field), value) => flow.set_search(field, value),
            FormCommand::SetText(C::Booking(field), value) => flow.set_booking(field, value),
            FormCommand::Toggle(C::SearchAmenity(amenity)) => {
                flow.toggle_search_amenity(amenity);
            }
            FormCommand::Cycle(C::SearchDuration, forward) => {
                flow.set_search_duration(flow.search().duration.cycle(forward));
            }
            FormCommand::Cycle(C::BookingDuration, forward) => {
                flow.set_booking_duration(flow.booking().duration.cycle(forward));
            }
            FormCommand::Press(control) => {
                let transition = match control {
                    C::CreateProfile => flow.create_profile(),
                    C::SearchAccommodations => flow.search_accommodations(),
                    C::BookNow(id) => flow.book_now(id),
                    C::SubmitBooking => flow.submit_booking(),
                    C::ReturnHome => flow.return_home(),
                    _ => return ScreenAction::None,
                };
                return self.after(transition);
            }
            _ => {}
        }
        ScreenAction::None
    }

    fn request_step(
        &mut self,
        request: StepRequest<StudentStep>,
        flow: &mut StudentFlow,
    ) -> ScreenAction {
        let transition = match request {
            StepRequest::By { forward } => flow.step_by(forward),
            StepRequest::To(step) => flow.jump_to(step),
        };
        self.after(transition)
    }
}

impl Screen for StudentFlowScreen {
    type Model = StudentFlow;

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        flow: &StudentFlow,
        ctx: &RenderContext,
    ) -> Result<()> {
        let t = theme();
        let keymap = &ctx.config.keymap;
        let (header, body, footer) = create_standard_layout(area, Header::HEIGHT, Footer::HEIGHT);
        let back = format!("{}: Back to Home", keymap.key_for(Action::Cancel));
        Header::render(frame, header, "Student Journey", Some(&back))?;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(StepBar::HEIGHT), Constraint::Min(0)])
            .split(body);
        self.step_hits = StepBar::render(frame, chunks[0], |step| flow.status_of(step));

        let step = flow.step();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style())
            .title(format!(
                " Step {} of {}: {} ",
                step.index() + 1,
                StudentStep::ALL.len(),
                step.label()
            ))
            .padding(Padding::horizontal(1));
        let inner = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);

        let rows = self.rows(flow, &t, ctx.icons);
        FormView::render(frame, inner, rows, &Self::controls(step), &mut self.form);

        Footer::render(frame, footer, &keymap.footer_flow(self.form.is_editing()))?;
        Ok(())
    }

    fn handle_event(
        &mut self,
        event: &Event,
        flow: &mut StudentFlow,
        ctx: &ScreenContext,
    ) -> Result<ScreenAction> {
        let controls = Self::controls(flow.step());
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = ctx.config.keymap.action_for(key);
                if !self.form.is_editing() {
                    if let Some(request) = StepRequest::from_action(action) {
                        return Ok(self.request_step(request, flow));
                    }
                }
                let command = self
                    .form
                    .handle_key(key, action, &controls, |c| Self::text_value(flow, c));
                if command == FormCommand::Unhandled && action == Some(Action::Cancel) {
                    return Ok(self.after(flow.back()));
                }
                Ok(self.apply(command, flow))
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if let Some(step) = StepBar::hit_test(&self.step_hits, mouse.column, mouse.row) {
                    self.form.stop_editing();
                    return Ok(self.request_step(StepRequest::To(step), flow));
                }
                let command = self
                    .form
                    .handle_click(mouse.column, mouse.row, |c| Self::text_value(flow, c));
                Ok(self.apply(command, flow))
            }
            _ => Ok(ScreenAction::None),
        }
    }

    fn is_input_focused(&self) -> bool {
        self.form.is_editing()
    }

    fn on_enter(&mut self) {
        self.form.reset();
        self.step_hits.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::icons::IconSet;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn send(
        screen: &mut StudentFlowScreen,
        flow: &mut StudentFlow,
        codes: &[KeyCode],
    ) -> ScreenAction {
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let mut last = ScreenAction::None;
        for code in codes {
            last = screen.handle_event(&press(*code), flow, &ctx).unwrap();
        }
        last
    }

    #[test]
    fn test_rows_expose_every_control_in_order() {
        let screen = StudentFlowScreen::new();
        let t = theme();
        let icons = Icons::with_icon_set(IconSet::Ascii);
        for step in StudentStep::ALL {
            let mut flow = StudentFlow::new();
            let _ = flow.jump_to(*step);
            let from_rows: Vec<StudentControl> = screen
                .rows(&flow, &t, &icons)
                .iter()
                .filter_map(|r| r.control)
                .collect();
            assert_eq!(from_rows, StudentFlowScreen::controls(*step), "{:?}", step);
        }
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut screen = StudentFlowScreen::new();
        let mut flow = StudentFlow::new();
        send(
            &mut screen,
            &mut flow,
            &[
                KeyCode::Enter,
                KeyCode::Char('A'),
                KeyCode::Char('n'),
                KeyCode::Char('a'),
                KeyCode::Enter,
            ],
        );
        assert_eq!(flow.registration().full_name, "Ana");
        assert!(!screen.is_input_focused());
    }

    #[test]
    fn test_button_advances_and_resets_focus() {
        let mut screen = StudentFlowScreen::new();
        let mut flow = StudentFlow::new();
        // Up wraps to the last control, the button
        send(&mut screen, &mut flow, &[KeyCode::Up, KeyCode::Enter]);
        assert_eq!(flow.step(), StudentStep::Search);
        assert_eq!(screen.focused(&flow), Some(StudentControl::Search(SearchField::Location)));
    }

    #[test]
    fn test_space_toggles_amenity() {
        let mut screen = StudentFlowScreen::new();
        let mut flow = StudentFlow::new();
        let _ = flow.jump_to(StudentStep::Search);
        // Location, Max price, Duration, WiFi
        let keys = [KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Char(' ')];
        send(&mut screen, &mut flow, &keys);
        assert!(flow.search().amenities.contains(Amenity::WiFi));
        send(&mut screen, &mut flow, &[KeyCode::Char(' ')]);
        assert!(flow.search().amenities.is_empty());
    }

    #[test]
    fn test_escape_goes_back_to_landing() {
        let mut screen = StudentFlowScreen::new();
        let mut flow = StudentFlow::new();
        let action = send(&mut screen, &mut flow, &[KeyCode::Esc]);
        assert_eq!(action, ScreenAction::Navigate(View::Landing));
    }

    #[test]
    fn test_page_keys_walk_steps() {
        let mut screen = StudentFlowScreen::new();
        let mut flow = StudentFlow::new();
        send(&mut screen, &mut flow, &[KeyCode::PageDown, KeyCode::PageDown]);
        assert_eq!(flow.step(), StudentStep::Listings);
        send(&mut screen, &mut flow, &[KeyCode::PageUp]);
        assert_eq!(flow.step(), StudentStep::Search);
    }
}
