//! Host flow screen.

use crate::components::{Footer, Header, StepBar};
use crate::flow::fixtures::{self, format_usd, BookingId};
use crate::flow::forms::{
    Amenity, Choice, HostRegistrationField, PropertyField, Rating, RatingKind, ReviewField,
    TextField, TextForm,
};
use crate::flow::{BookingAction, FlowStep, HostFlow, HostStep, Transition, View};
use crate::icons::Icons;
use crate::keymap::Action;
use crate::screens::screen_trait::{
    RenderContext, Screen, ScreenAction, ScreenContext, StepRequest,
};
use crate::styles::{theme, Theme};
use crate::utils::form::{ControlKind, FormCommand, FormControl, FormState};
use crate::utils::layout::create_standard_layout;
use crate::widgets::{FormRow, FormView, RowBuilder, ToastVariant};
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding};

/// Text fields of the property step, in display order. The type select
/// sits after the title.
const PROPERTY_TEXT: [PropertyField; 6] = [
    PropertyField::Rent,
    PropertyField::Address,
    PropertyField::Bedrooms,
    PropertyField::Bathrooms,
    PropertyField::SquareFeet,
    PropertyField::Description,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostControl {
    Registration(HostRegistrationField),
    CreateProfile,
    Property(PropertyField),
    PropertyType,
    PropertyAmenity(Amenity),
    SubmitProperty,
    SimulateApproval,
    Booking(BookingId, BookingAction),
    Stars(RatingKind),
    HostAgain,
    Review(ReviewField),
    SubmitReview,
}

impl FormControl for HostControl {
    fn kind(&self) -> ControlKind {
        match self {
            Self::Registration(_) | Self::Property(_) | Self::Review(_) => ControlKind::Text,
            Self::PropertyType | Self::HostAgain => ControlKind::Select,
            Self::PropertyAmenity(_) => ControlKind::Toggle,
            Self::Stars(_) => ControlKind::Rating,
            Self::CreateProfile
            | Self::SubmitProperty
            | Self::SimulateApproval
            | Self::Booking(..)
            | Self::SubmitReview => ControlKind::Button,
        }
    }
}

#[derive(Debug, Default)]
pub struct HostFlowScreen {
    form: FormState<HostControl>,
    step_hits: Vec<(Rect, HostStep)>,
}

impl HostFlowScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn controls(step: HostStep) -> Vec<HostControl> {
        use HostControl as C;
        match step {
            HostStep::Register => HostRegistrationField::ALL
                .into_iter()
                .map(C::Registration)
                .chain([C::CreateProfile])
                .collect(),
            HostStep::ListProperty => [C::Property(PropertyField::Title), C::PropertyType]
                .into_iter()
                .chain(PROPERTY_TEXT.into_iter().map(C::Property))
                .chain(Amenity::PROPERTY_FEATURES.into_iter().map(C::PropertyAmenity))
                .chain([C::SubmitProperty])
                .collect(),
            HostStep::Verification => vec![C::SimulateApproval],
            HostStep::ManageBookings => fixtures::bookings()
                .iter()
                .flat_map(|booking| {
                    BookingAction::for_status(booking.status)
                        .iter()
                        .map(move |action| C::Booking(booking.id, *action))
                })
                .collect(),
            HostStep::Reviews => RatingKind::ALL
                .into_iter()
                .map(C::Stars)
                .chain([
                    C::HostAgain,
                    C::Review(ReviewField::WrittenReview),
                    C::SubmitReview,
                ])
                .collect(),
        }
    }

    pub fn focused(&self, flow: &HostFlow) -> Option<HostControl> {
        self.form.focused(&Self::controls(flow.step()))
    }

    fn text_value(flow: &HostFlow, control: HostControl) -> String {
        match control {
            HostControl::Registration(field) => flow.registration().value(field),
            HostControl::Property(field) => flow.property().value(field),
            HostControl::Review(field) => flow.review().value(field),
            _ => "",
        }
        .to_string()
    }

    fn text_row<F: TextField>(
        &self,
        b: &RowBuilder,
        control: HostControl,
        field: F,
        value: &str,
        focus: Option<HostControl>,
    ) -> FormRow<HostControl> {
        b.text_field(
            control,
            field.label(),
            value,
            field.placeholder(),
            focus == Some(control),
            self.form.editing(control),
        )
    }

    pub fn rows(&self, flow: &HostFlow, t: &Theme, icons: &Icons) -> Vec<FormRow<HostControl>> {
        use HostControl as C;
        let b = RowBuilder::new(t, icons);
        let focus = self.focused(flow);
        let is = |c: HostControl| focus == Some(c);
        let mut rows = Vec::new();

        match flow.step() {
            HostStep::Register => {
                rows.push(b.section("Create Your Host Profile"));
                rows.push(FormRow::blank());
                for field in HostRegistrationField::ALL {
                    let value = flow.registration().value(field);
                    rows.push(self.text_row(&b, C::Registration(field), field, value, focus));
                }
                rows.push(FormRow::plain(Span::styled(
                    "  Government ID upload happens during verification.",
                    t.muted_style(),
                )));
                rows.push(FormRow::blank());
                rows.push(b.button(
                    C::CreateProfile,
                    "Create Profile & Continue",
                    is(C::CreateProfile),
                ));
            }
            HostStep::ListProperty => {
                let property = flow.property();
                rows.push(b.section("List Your Property"));
                rows.push(FormRow::blank());
                let title = PropertyField::Title;
                let value = property.value(title);
                rows.push(self.text_row(&b, C::Property(title), title, value, focus));
                rows.push(b.select(
                    C::PropertyType,
                    "Property Type",
                    property.property_type.label(),
                    is(C::PropertyType),
                ));
                for field in PROPERTY_TEXT {
                    let value = property.value(field);
                    rows.push(self.text_row(&b, C::Property(field), field, value, focus));
                }
                rows.push(FormRow::blank());
                rows.push(FormRow::plain(Span::styled("Amenities", t.emphasis_style())));
                for amenity in Amenity::PROPERTY_FEATURES {
                    let control = C::PropertyAmenity(amenity);
                    let checked = property.amenities.contains(amenity);
                    rows.push(b.checkbox(control, amenity.label(), checked, is(control)));
                }
                rows.push(FormRow::blank());
                rows.push(b.button(
                    C::SubmitProperty,
                    "Submit Property for Verification",
                    is(C::SubmitProperty),
                ));
            }
            HostStep::Verification => {
                rows.push(FormRow::plain(Span::styled(
                    format!("{} Verification in Progress", icons.clock()),
                    t.warning_style(),
                )));
                rows.push(FormRow::plain(Span::styled(
                    "Our team is reviewing your property and documents. This typically takes 24-48 hours.",
                    t.muted_style(),
                )));
                rows.push(FormRow::blank());
                rows.push(FormRow::plain(Span::styled(
                    "Verification Checklist:",
                    t.emphasis_style(),
                )));
                for (done, item) in [
                    (true, "Identity verification completed"),
                    (true, "Property photos uploaded"),
                    (false, "Property details review pending"),
                    (false, "Legal compliance check pending"),
                ] {
                    let (icon, style) = if done {
                        (icons.check(), t.success_style())
                    } else {
                        (icons.clock(), t.warning_style())
                    };
                    rows.push(FormRow::plain(Line::from(vec![
                        Span::styled(format!("  {} ", icon), style),
                        Span::styled(item, t.text_style()),
                    ])));
                }
                rows.push(FormRow::blank());
                rows.push(FormRow::plain(Span::styled(
                    "Once verified, your property goes live and can receive booking requests.",
                    t.muted_style(),
                )));
                rows.push(FormRow::blank());
                rows.push(b.button(
                    C::SimulateApproval,
                    "Simulate: Property Approved",
                    is(C::SimulateApproval),
                ));
            }
            HostStep::ManageBookings => {
                let earnings = fixtures::earnings();
                rows.push(b.section("Manage Bookings"));
                rows.push(FormRow::plain(Line::from(vec![
                    Span::styled(
                        format!("{} Properties Listed", earnings.properties_listed),
                        t.muted_style(),
                    ),
                    Span::styled("  Active", t.success_style()),
                ])));
                for booking in fixtures::bookings() {
                    rows.push(FormRow::blank());
                    rows.push(FormRow::plain(Line::from(vec![
                        Span::styled(
                            format!("{} {}", icons.user(), booking.student),
                            t.emphasis_style(),
                        ),
                        Span::styled(
                            format!("  [{}]", booking.status.label()),
                            t.status_style(booking.status),
                        ),
                    ])));
                    rows.push(FormRow::plain(Span::styled(
                        format!(
                            "{} {:.1} ({} reviews)",
                            icons.star(),
                            booking.student_rating,
                            booking.student_reviews
                        ),
                        t.star_style(),
                    )));
                    rows.push(FormRow::plain(Span::styled(
                        format!(
                            "{} · Move-in {} · {} · {}",
                            booking.property,
                            booking.move_in_label(),
                            booking.duration,
                            format_usd(booking.amount)
                        ),
                        t.text_style(),
                    )));
                    for action in BookingAction::for_status(booking.status) {
                        let control = C::Booking(booking.id, *action);
                        rows.push(b.button(control, action.label(), is(control)));
                    }
                }
                rows.push(FormRow::blank());
                rows.push(b.section("Earnings Summary"));
                for (label, value) in [
                    ("Total Earnings", format_usd(earnings.total_earnings)),
                    ("This Month", format_usd(earnings.this_month)),
                    ("Total Bookings", earnings.total_bookings.to_string()),
                    ("Average Rating", format!("{:.1}", earnings.average_rating)),
                ] {
                    rows.push(FormRow::plain(Line::from(vec![
                        Span::styled(format!("  {:<24}", label), t.muted_style()),
                        Span::styled(value, t.title_style()),
                    ])));
                }
            }
            HostStep::Reviews => {
                let review = flow.review();
                let student = flow.review_subject().map_or("your guest", |b| b.student);
                rows.push(b.section(&format!("Leave Review for {}", student)));
                rows.push(FormRow::blank());
                for kind in RatingKind::ALL {
                    let control = C::Stars(kind);
                    let stars = review.rating(kind).stars();
                    rows.push(b.rating(control, kind.label(), stars, is(control)));
                }
                rows.push(b.select(
                    C::HostAgain,
                    "Would you host again?",
                    review.host_again.label(),
                    is(C::HostAgain),
                ));
                let field = ReviewField::WrittenReview;
                rows.push(self.text_row(&b, C::Review(field), field, review.value(field), focus));
                rows.push(FormRow::blank());
                rows.push(b.button(C::SubmitReview, "Submit Review", is(C::SubmitReview)));
            }
        }
        rows
    }

    fn after(&mut self, transition: Transition<HostStep>) -> ScreenAction {
        match transition {
            Transition::Moved { .. } => {
                self.form.reset();
                ScreenAction::None
            }
            Transition::Back => ScreenAction::Navigate(View::Landing),
            Transition::Ignored { .. } => ScreenAction::None,
        }
    }

    fn press(&mut self, control: HostControl, flow: &mut HostFlow) -> ScreenAction {
        use HostControl as C;
        let transition = match control {
            C::CreateProfile => flow.create_profile(),
            C::SubmitProperty => flow.submit_property(),
            C::SimulateApproval => flow.simulate_approval(),
            C::Booking(id, action) if action.is_placeholder() => {
                let _ = flow.perform_booking_action(id, action);
                let student = fixtures::booking(id).map_or("this booking", |b| b.student);
                return ScreenAction::notify(
                    format!("{}: {} (demo only)", action.label(), student),
                    ToastVariant::Info,
                );
            }
            C::Booking(id, action) => flow.perform_booking_action(id, action),
            C::SubmitReview => {
                let _ = flow.submit_review();
                let student = flow.review_subject().map_or("your guest", |b| b.student);
                return ScreenAction::notify(
                    format!("Review for {} submitted", student),
                    ToastVariant::Success,
                );
            }
            _ => return ScreenAction::None,
        };
        self.after(transition)
    }

    fn apply(&mut self, command: FormCommand<HostControl>, flow: &mut HostFlow) -> ScreenAction {
        use HostControl as C;
        match command {
            FormCommand::SetText(C::Registration(field), value) => {
                flow.set_registration(field, value)
            }
            FormCommand::SetText(C::Property(field), value) => flow.set_property(field, value),
            FormCommand::SetText(C::Review(field), value) => flow.set_review(field, value),
            FormCommand::Toggle(C::PropertyAmenity(amenity)) => {
                flow.toggle_property_amenity(amenity);
            }
            FormCommand::Cycle(C::PropertyType, forward) => {
                flow.set_property_type(flow.property().property_type.cycle(forward));
            }
            FormCommand::Cycle(C::HostAgain, forward) => {
                flow.set_host_again(flow.review().host_again.cycle(forward));
            }
            FormCommand::Nudge(C::Stars(kind), up) => {
                flow.set_rating(kind, flow.review().rating(kind).step(up));
            }
            FormCommand::Rate(C::Stars(kind), stars) => {
                if let Some(rating) = Rating::new(stars) {
                    flow.set_rating(kind, rating);
                }
            }
            FormCommand::Press(control) => return self.press(control, flow),
            _ => {}
        }
        ScreenAction::None
    }

    fn request_step(
        &mut self,
        request: StepRequest<HostStep>,
        flow: &mut HostFlow,
    ) -> ScreenAction {
        let transition = match request {
            StepRequest::By { forward } => flow.step_by(forward),
            StepRequest::To(step) => flow.jump_to(step),
        };
        self.after(transition)
    }
}

impl Screen for HostFlowScreen {
    type Model = HostFlow;

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        flow: &HostFlow,
        ctx: &RenderContext,
    ) -> Result<()> {
        let t = theme();
        let keymap = &ctx.config.keymap;
        let (header, body, footer) = create_standard_layout(area, Header::HEIGHT, Footer::HEIGHT);
        let back = format!("{}: Back to Home", keymap.key_for(Action::Cancel));
        Header::render(frame, header, "Host Dashboard", Some(&back))?;

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
                HostStep::ALL.len(),
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
        flow: &mut HostFlow,
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
    use crate::flow::BookingStatus;
    use crate::icons::IconSet;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn send(screen: &mut HostFlowScreen, flow: &mut HostFlow, codes: &[KeyCode]) -> ScreenAction {
        let config = Config::default();
        let ctx = ScreenContext::new(&config);
        let mut last = ScreenAction::None;
        for code in codes {
            let event = Event::Key(KeyEvent::new(*code, KeyModifiers::NONE));
            last = screen.handle_event(&event, flow, &ctx).unwrap();
        }
        last
    }

    fn at(step: HostStep) -> HostFlow {
        let mut flow = HostFlow::new();
        let _ = flow.jump_to(step);
        flow
    }

    #[test]
    fn test_rows_expose_every_control_in_order() {
        let screen = HostFlowScreen::new();
        let t = theme();
        let icons = Icons::with_icon_set(IconSet::Ascii);
        for step in HostStep::ALL {
            let flow = at(*step);
            let from_rows: Vec<HostControl> = screen
                .rows(&flow, &t, &icons)
                .iter()
                .filter_map(|r| r.control)
                .collect();
            assert_eq!(from_rows, HostFlowScreen::controls(*step), "{:?}", step);
        }
    }

    #[test]
    fn test_booking_buttons_follow_status() {
        let controls = HostFlowScreen::controls(HostStep::ManageBookings);
        let completed = fixtures::first_completed_booking().unwrap();
        assert!(controls.contains(&HostControl::Booking(completed.id, BookingAction::LeaveReview)));
        let pending: Vec<_> = fixtures::bookings()
            .iter()
            .filter(|b| b.status == BookingStatus::Pending)
            .collect();
        for booking in pending {
            let review = HostControl::Booking(booking.id, BookingAction::LeaveReview);
            assert!(!controls.contains(&review));
        }
    }

    #[test]
    fn test_placeholder_action_notifies_without_moving() {
        let mut screen = HostFlowScreen::new();
        let mut flow = at(HostStep::ManageBookings);
        // First control is "Accept Booking" on the pending booking
        let action = send(&mut screen, &mut flow, &[KeyCode::Enter]);
        assert!(matches!(action, ScreenAction::Notify { variant: ToastVariant::Info, .. }));
        assert_eq!(flow.step(), HostStep::ManageBookings);
    }

    #[test]
    fn test_leave_review_moves_to_reviews() {
        let mut screen = HostFlowScreen::new();
        let mut flow = at(HostStep::ManageBookings);
        // Accept, Decline, Message, View Details, Leave Review
        send(&mut screen, &mut flow, &[KeyCode::Up, KeyCode::Enter]);
        assert_eq!(flow.step(), HostStep::Reviews);
    }

    #[test]
    fn test_digit_sets_exact_rating() {
        let mut screen = HostFlowScreen::new();
        let mut flow = at(HostStep::Reviews);
        send(&mut screen, &mut flow, &[KeyCode::Char('2')]);
        assert_eq!(flow.review().overall_rating.stars(), 2);
        send(&mut screen, &mut flow, &[KeyCode::Char('4')]);
        assert_eq!(flow.review().overall_rating.stars(), 4);
        send(&mut screen, &mut flow, &[KeyCode::Left]);
        assert_eq!(flow.review().overall_rating.stars(), 3);
    }

    #[test]
    fn test_submit_review_stays_on_reviews() {
        let mut screen = HostFlowScreen::new();
        let mut flow = at(HostStep::Reviews);
        let action = send(&mut screen, &mut flow, &[KeyCode::Up, KeyCode::Enter]);
        assert_eq!(
            action,
            ScreenAction::notify("Review for John Kim submitted", ToastVariant::Success)
        );
        assert_eq!(flow.step(), HostStep::Reviews);
    }
}
