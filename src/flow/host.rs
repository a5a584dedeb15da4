//! Host journey: profile, list a property, verification, bookings, reviews.

use super::fixtures::{self, Booking, BookingId, BookingStatus};
use super::forms::{
    Amenity, HostAgain, HostRegistration, HostRegistrationField, PropertyField, PropertyForm,
    PropertyType, Rating, RatingKind, ReviewField, ReviewForm, TextForm,
};
use super::machine::{FlowStep, StepMachine, StepStatus, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostStep {
    Register,
    ListProperty,
    Verification,
    ManageBookings,
    Reviews,
}

impl FlowStep for HostStep {
    const ALL: &'static [Self] = &[
        HostStep::Register,
        HostStep::ListProperty,
        HostStep::Verification,
        HostStep::ManageBookings,
        HostStep::Reviews,
    ];

    fn label(self) -> &'static str {
        match self {
            HostStep::Register => "Profile",
            HostStep::ListProperty => "List Property",
            HostStep::Verification => "Verification",
            HostStep::ManageBookings => "Bookings",
            HostStep::Reviews => "Reviews",
        }
    }
}

/// Per-booking buttons on the manage-bookings step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    Accept,
    Decline,
    MessageStudent,
    ViewDetails,
    LeaveReview,
}

impl BookingAction {
    /// Buttons offered for a booking in `status`.
    pub fn for_status(status: BookingStatus) -> &'static [BookingAction] {
        match status {
            BookingStatus::Pending => &[BookingAction::Accept, BookingAction::Decline],
            BookingStatus::Confirmed => {
                &[BookingAction::MessageStudent, BookingAction::ViewDetails]
            }
            BookingStatus::Completed => &[BookingAction::LeaveReview],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BookingAction::Accept => "Accept Booking",
            BookingAction::Decline => "Decline",
            BookingAction::MessageStudent => "Message Student",
            BookingAction::ViewDetails => "View Details",
            BookingAction::LeaveReview => "Leave Review",
        }
    }

    /// Whether the action is a mock that never changes state.
    pub fn is_placeholder(self) -> bool {
        !matches!(self, BookingAction::LeaveReview)
    }
}

/// State of one mounted host flow. Dropped when the user leaves it.
#[derive(Debug, Clone, Default)]
pub struct HostFlow {
    machine: StepMachine<HostStep>,
    registration: HostRegistration,
    property: PropertyForm,
    review: ReviewForm,
    review_booking: Option<BookingId>,
}

impl HostFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> HostStep {
        self.machine.current()
    }

    pub fn status_of(&self, step: HostStep) -> StepStatus {
        self.machine.status_of(step)
    }

    pub fn registration(&self) -> &HostRegistration {
        &self.registration
    }

    pub fn property(&self) -> &PropertyForm {
        &self.property
    }

    pub fn review(&self) -> &ReviewForm {
        &self.review
    }

    // ---- step transitions ----

    pub fn create_profile(&mut self) -> Transition<HostStep> {
        self.machine
            .advance(HostStep::Register, HostStep::ListProperty)
    }

    /// "Submit Property for Verification".
    pub fn submit_property(&mut self) -> Transition<HostStep> {
        self.machine
            .advance(HostStep::ListProperty, HostStep::Verification)
    }

    /// "Simulate: Property Approved".
    pub fn simulate_approval(&mut self) -> Transition<HostStep> {
        self.machine
            .advance(HostStep::Verification, HostStep::ManageBookings)
    }

    /// "Leave Review" on a booking. Only completed bookings qualify.
    pub fn leave_review(&mut self, id: BookingId) -> Transition<HostStep> {
        let completed = fixtures::booking(id)
            .is_some_and(|b| b.status == BookingStatus::Completed);
        if !completed {
            tracing::debug!("Leave Review ignored for booking {}", id);
            return Transition::Ignored {
                current: self.step(),
            };
        }
        let transition = self
            .machine
            .advance(HostStep::ManageBookings, HostStep::Reviews);
        if transition.is_moved() {
            self.review_booking = Some(id);
        }
        transition
    }

    /// Dispatch a booking button. Placeholders log and leave state alone.
    pub fn perform_booking_action(
        &mut self,
        id: BookingId,
        action: BookingAction,
    ) -> Transition<HostStep> {
        if action == BookingAction::LeaveReview {
            return self.leave_review(id);
        }
        tracing::info!("Placeholder booking action {:?} on booking {}", action, id);
        Transition::Ignored {
            current: self.step(),
        }
    }

    /// "Submit Review". The review is not stored anywhere.
    pub fn submit_review(&self) -> Transition<HostStep> {
        tracing::info!(
            "Review submitted for {} (overall {})",
            self.review_subject().map_or("unknown", |b| b.student),
            self.review.overall_rating.stars()
        );
        Transition::Ignored {
            current: self.step(),
        }
    }

    pub fn back(&self) -> Transition<HostStep> {
        Transition::Back
    }

    pub fn jump_to(&mut self, step: HostStep) -> Transition<HostStep> {
        self.machine.jump(step)
    }

    pub fn step_by(&mut self, forward: bool) -> Transition<HostStep> {
        self.machine.step_by(forward)
    }

    // ---- form updates ----

    pub fn set_registration(&mut self, field: HostRegistrationField, value: String) {
        tracing::debug!("Host registration {:?} updated", field);
        self.registration.set(field, value);
    }

    pub fn set_property(&mut self, field: PropertyField, value: String) {
        tracing::debug!("Property form {:?} updated", field);
        self.property.set(field, value);
    }

    pub fn set_property_type(&mut self, property_type: PropertyType) {
        self.property.property_type = property_type;
    }

    pub fn toggle_property_amenity(&mut self, amenity: Amenity) -> bool {
        let selected = self.property.amenities.toggle(amenity);
        tracing::debug!("Property amenity {} selected={}", amenity.label(), selected);
        selected
    }

    pub fn set_rating(&mut self, kind: RatingKind, rating: Rating) {
        self.review.set_rating(kind, rating);
    }

    pub fn set_host_again(&mut self, answer: HostAgain) {
        self.review.host_again = answer;
    }

    pub fn set_review(&mut self, field: ReviewField, value: String) {
        self.review.set(field, value);
    }

    /// Booking whose student is being reviewed. Falls back to the first
    /// completed booking when the step was reached by a direct jump.
    pub fn review_subject(&self) -> Option<&'static Booking> {
        self.review_booking
            .and_then(fixtures::booking)
            .or_else(fixtures::first_completed_booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_manage_bookings() -> HostFlow {
        let mut flow = HostFlow::new();
        let _ = flow.jump_to(HostStep::ManageBookings);
        flow
    }

    #[test]
    fn test_every_distinct_step_pair_is_allowed() {
        let machine = StepMachine::<HostStep>::new();
        assert_eq!(machine.table().len(), 20);
        for from in HostStep::ALL {
            for to in HostStep::ALL {
                assert_eq!(machine.table().allows(*from, *to), from != to);
            }
        }
    }

    #[test]
    fn test_forward_chain() {
        let mut flow = HostFlow::new();
        assert_eq!(flow.step(), HostStep::Register);
        assert!(flow.create_profile().is_moved());
        assert!(flow.submit_property().is_moved());
        assert!(flow.simulate_approval().is_moved());
        assert_eq!(flow.step(), HostStep::ManageBookings);
        assert!(flow.leave_review(3).is_moved());
        assert_eq!(flow.step(), HostStep::Reviews);
    }

    #[test]
    fn test_leave_review_only_for_completed() {
        let mut flow = at_manage_bookings();
        assert!(!flow.leave_review(1).is_moved());
        assert!(!flow.leave_review(2).is_moved());
        assert!(!flow.leave_review(77).is_moved());
        assert_eq!(flow.step(), HostStep::ManageBookings);
    }

    #[test]
    fn test_placeholder_actions_change_nothing() {
        let mut flow = at_manage_bookings();
        for action in [
            BookingAction::Accept,
            BookingAction::Decline,
            BookingAction::MessageStudent,
            BookingAction::ViewDetails,
        ] {
            assert!(!flow.perform_booking_action(1, action).is_moved());
        }
        assert_eq!(flow.step(), HostStep::ManageBookings);
        assert_eq!(
            fixtures::booking(1).map(|b| b.status),
            Some(BookingStatus::Pending)
        );
    }

    #[test]
    fn test_actions_for_status() {
        assert_eq!(
            BookingAction::for_status(BookingStatus::Completed),
            &[BookingAction::LeaveReview]
        );
        assert!(BookingAction::for_status(BookingStatus::Pending)
            .iter()
            .all(|a| a.is_placeholder()));
    }

    #[test]
    fn test_review_subject_fallback() {
        let mut flow = HostFlow::new();
        let _ = flow.jump_to(HostStep::Reviews);
        assert_eq!(flow.review_subject().map(|b| b.student), Some("John Kim"));
    }

    #[test]
    fn test_amenity_toggle_round_trip() {
        let mut flow = HostFlow::new();
        assert!(flow.toggle_property_amenity(Amenity::Heating));
        assert!(!flow.toggle_property_amenity(Amenity::Heating));
        assert!(flow.property().amenities.is_empty());
    }

    #[test]
    fn test_ratings_keep_last_choice() {
        let mut flow = HostFlow::new();
        for stars in [1, 4, 2] {
            if let Some(rating) = Rating::new(stars) {
                flow.set_rating(RatingKind::Communication, rating);
            }
        }
        assert_eq!(flow.review().communication_rating.stars(), 2);
    }

    #[test]
    fn test_jump_backwards() {
        let mut flow = HostFlow::new();
        let _ = flow.jump_to(HostStep::Reviews);
        assert!(flow.jump_to(HostStep::Register).is_moved());
        assert_eq!(flow.step(), HostStep::Register);
    }
}
