//! Student journey: register, search, browse, book, confirm.

use super::fixtures::{self, BookingQuote, Listing, ListingId};
use super::forms::{
    Amenity, BookingDuration, BookingField, BookingForm, SearchField, SearchFilters,
    StayDuration, StudentRegistration, StudentRegistrationField, TextForm,
};
use super::machine::{FlowStep, StepMachine, StepStatus, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudentStep {
    Register,
    Search,
    Listings,
    Booking,
    Confirmation,
}

impl FlowStep for StudentStep {
    const ALL: &'static [Self] = &[
        StudentStep::Register,
        StudentStep::Search,
        StudentStep::Listings,
        StudentStep::Booking,
        StudentStep::Confirmation,
    ];

    fn label(self) -> &'static str {
        match self {
            StudentStep::Register => "Register",
            StudentStep::Search => "Search",
            StudentStep::Listings => "Browse",
            StudentStep::Booking => "Book",
            StudentStep::Confirmation => "Confirm",
        }
    }
}

/// State of one mounted student flow. Dropped when the user leaves it.
#[derive(Debug, Clone, Default)]
pub struct StudentFlow {
    machine: StepMachine<StudentStep>,
    registration: StudentRegistration,
    search: SearchFilters,
    booking: BookingForm,
    selected_listing: Option<ListingId>,
}

impl StudentFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> StudentStep {
        self.machine.current()
    }

    pub fn status_of(&self, step: StudentStep) -> StepStatus {
        self.machine.status_of(step)
    }

    pub fn registration(&self) -> &StudentRegistration {
        &self.registration
    }

    pub fn search(&self) -> &SearchFilters {
        &self.search
    }

    pub fn booking(&self) -> &BookingForm {
        &self.booking
    }

    // ---- step transitions ----

    /// "Create Profile & Continue".
    pub fn create_profile(&mut self) -> Transition<StudentStep> {
        self.machine
            .advance(StudentStep::Register, StudentStep::Search)
    }

    /// "Search Accommodations".
    pub fn search_accommodations(&mut self) -> Transition<StudentStep> {
        self.machine
            .advance(StudentStep::Search, StudentStep::Listings)
    }

    /// "Book Now" on a listing card. Unknown ids are ignored.
    pub fn book_now(&mut self, id: ListingId) -> Transition<StudentStep> {
        if fixtures::listing(id).is_none() {
            tracing::warn!("Book Now on unknown listing {}", id);
            return Transition::Ignored {
                current: self.step(),
            };
        }
        let transition = self
            .machine
            .advance(StudentStep::Listings, StudentStep::Booking);
        if transition.is_moved() {
            self.selected_listing = Some(id);
        }
        transition
    }

    /// "Submit Booking Request".
    pub fn submit_booking(&mut self) -> Transition<StudentStep> {
        self.machine
            .advance(StudentStep::Booking, StudentStep::Confirmation)
    }

    /// "Return to Home", only offered on the confirmation step.
    pub fn return_home(&self) -> Transition<StudentStep> {
        if self.step() == StudentStep::Confirmation {
            Transition::Back
        } else {
            Transition::Ignored {
                current: self.step(),
            }
        }
    }

    /// Header back button.
    pub fn back(&self) -> Transition<StudentStep> {
        Transition::Back
    }

    pub fn jump_to(&mut self, step: StudentStep) -> Transition<StudentStep> {
        self.machine.jump(step)
    }

    pub fn step_by(&mut self, forward: bool) -> Transition<StudentStep> {
        self.machine.step_by(forward)
    }

    // ---- form updates ----

    pub fn set_registration(&mut self, field: StudentRegistrationField, value: String) {
        tracing::debug!("Student registration {:?} updated", field);
        self.registration.set(field, value);
    }

    pub fn set_search(&mut self, field: SearchField, value: String) {
        tracing::debug!("Search filter {:?} updated", field);
        self.search.set(field, value);
    }

    pub fn set_search_duration(&mut self, duration: StayDuration) {
        self.search.duration = duration;
    }

    /// Returns whether the amenity is selected afterwards.
    pub fn toggle_search_amenity(&mut self, amenity: Amenity) -> bool {
        let selected = self.search.amenities.toggle(amenity);
        tracing::debug!("Search amenity {} selected={}", amenity.label(), selected);
        selected
    }

    pub fn set_booking(&mut self, field: BookingField, value: String) {
        tracing::debug!("Booking form {:?} updated", field);
        self.booking.set(field, value);
    }

    pub fn set_booking_duration(&mut self, duration: BookingDuration) {
        self.booking.duration = duration;
    }

    /// Listing chosen with "Book Now", or the default subject when the
    /// booking step was reached by a direct jump.
    pub fn selected_listing(&self) -> &'static Listing {
        self.selected_listing
            .and_then(fixtures::listing)
            .unwrap_or_else(fixtures::default_listing)
    }

    pub fn quote(&self) -> BookingQuote {
        self.selected_listing().quote()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_distinct_step_pair_is_allowed() {
        let machine = StepMachine::<StudentStep>::new();
        assert_eq!(machine.table().len(), 20);
        for from in StudentStep::ALL {
            for to in StudentStep::ALL {
                assert_eq!(machine.table().allows(*from, *to), from != to);
            }
        }
    }

    #[test]
    fn test_new_flow_starts_at_register() {
        let flow = StudentFlow::new();
        assert_eq!(flow.step(), StudentStep::Register);
        assert_eq!(flow.search().duration, StayDuration::AcademicYear);
        assert!(flow.search().amenities.is_empty());
    }

    #[test]
    fn test_forward_chain() {
        let mut flow = StudentFlow::new();
        assert!(flow.create_profile().is_moved());
        assert_eq!(flow.step(), StudentStep::Search);
        assert!(flow.search_accommodations().is_moved());
        assert_eq!(flow.step(), StudentStep::Listings);
        assert!(flow.book_now(1).is_moved());
        assert_eq!(flow.step(), StudentStep::Booking);
        assert!(flow.submit_booking().is_moved());
        assert_eq!(flow.step(), StudentStep::Confirmation);
        assert!(flow.return_home().is_back());
    }

    #[test]
    fn test_actions_ignored_on_wrong_step() {
        let mut flow = StudentFlow::new();
        assert!(!flow.submit_booking().is_moved());
        assert!(!flow.book_now(2).is_moved());
        assert!(!flow.return_home().is_back());
        assert_eq!(flow.step(), StudentStep::Register);
    }

    #[test]
    fn test_jump_in_both_directions() {
        let mut flow = StudentFlow::new();
        for target in StudentStep::ALL.iter().rev() {
            let _ = flow.jump_to(*target);
            assert_eq!(flow.step(), *target);
        }
        let _ = flow.jump_to(StudentStep::Confirmation);
        assert_eq!(flow.step(), StudentStep::Confirmation);
    }

    #[test]
    fn test_book_now_threads_listing() {
        let mut flow = StudentFlow::new();
        let _ = flow.jump_to(StudentStep::Listings);
        let _ = flow.book_now(3);
        assert_eq!(flow.selected_listing().title, "Cozy Apartment with Study Room");
        assert_eq!(flow.quote().total_due_today(), 700 + 700 + 50);
    }

    #[test]
    fn test_book_now_unknown_listing_ignored() {
        let mut flow = StudentFlow::new();
        let _ = flow.jump_to(StudentStep::Listings);
        assert!(!flow.book_now(99).is_moved());
        assert_eq!(flow.step(), StudentStep::Listings);
    }

    #[test]
    fn test_direct_jump_to_booking_uses_default_listing() {
        let mut flow = StudentFlow::new();
        let _ = flow.jump_to(StudentStep::Booking);
        assert_eq!(flow.selected_listing().id, 1);
        assert_eq!(flow.quote().total_due_today(), 1650);
    }

    #[test]
    fn test_empty_fields_accepted() {
        let mut flow = StudentFlow::new();
        flow.set_registration(StudentRegistrationField::FullName, String::new());
        assert!(flow.create_profile().is_moved());
        assert_eq!(flow.registration().full_name, "");
    }

    #[test]
    fn test_field_updates_replace_one_field() {
        let mut flow = StudentFlow::new();
        flow.set_search(SearchField::Location, "Boston".to_string());
        flow.set_search(SearchField::MaxPrice, "900".to_string());
        flow.set_search(SearchField::Location, "Cambridge".to_string());
        assert_eq!(flow.search().location, "Cambridge");
        assert_eq!(flow.search().max_price, "900");

        flow.set_booking(BookingField::Message, "Hi".to_string());
        flow.set_booking_duration(BookingDuration::Monthly);
        assert_eq!(flow.booking().message, "Hi");
        assert_eq!(flow.booking().duration, BookingDuration::Monthly);
        assert_eq!(flow.booking().move_in_date, "");
    }
}
