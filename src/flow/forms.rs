//! Form records owned by the flows.
//!
//! Fields are free text with no validation: every update replaces exactly
//! one field with the value it is given, empty strings included. Fixed
//! option lists are modelled as [`Choice`] enums and amenity pickers as
//! an [`AmenitySet`].

use serde::Serialize;
use std::collections::BTreeSet;

/// An enumerated select box.
pub trait Choice: Copy + PartialEq + 'static {
    /// Options in display order. Never empty.
    const OPTIONS: &'static [Self];

    fn label(&self) -> &'static str;

    /// Next (or previous) option, wrapping around.
    fn cycle(self, forward: bool) -> Self {
        let options = Self::OPTIONS;
        let len = options.len();
        let index = options.iter().position(|o| *o == self).unwrap_or(0);
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        options[next]
    }
}

/// Metadata for a free-text field, used when rendering a form.
pub trait TextField: Copy + PartialEq + std::fmt::Debug + 'static {
    fn label(self) -> &'static str;
    fn placeholder(self) -> &'static str;
}

/// A record whose text fields can be read and replaced by key.
pub trait TextForm {
    type Field: TextField;

    fn value(&self, field: Self::Field) -> &str;
    fn set(&mut self, field: Self::Field, value: String);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Amenity {
    #[serde(rename = "WiFi")]
    WiFi,
    Furnished,
    Parking,
    Kitchen,
    Laundry,
    #[serde(rename = "A/C")]
    AirConditioning,
    Heating,
    #[serde(rename = "Study Room")]
    StudyRoom,
    Garden,
}

impl Amenity {
    /// Amenities offered as search filters.
    pub const SEARCH_FILTERS: [Amenity; 5] = [
        Amenity::WiFi,
        Amenity::Furnished,
        Amenity::Parking,
        Amenity::Kitchen,
        Amenity::Laundry,
    ];

    /// Amenities a host can tick when listing a property.
    pub const PROPERTY_FEATURES: [Amenity; 8] = [
        Amenity::WiFi,
        Amenity::Furnished,
        Amenity::Parking,
        Amenity::Kitchen,
        Amenity::Laundry,
        Amenity::AirConditioning,
        Amenity::Heating,
        Amenity::StudyRoom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Amenity::WiFi => "WiFi",
            Amenity::Furnished => "Furnished",
            Amenity::Parking => "Parking",
            Amenity::Kitchen => "Kitchen",
            Amenity::Laundry => "Laundry",
            Amenity::AirConditioning => "A/C",
            Amenity::Heating => "Heating",
            Amenity::StudyRoom => "Study Room",
            Amenity::Garden => "Garden",
        }
    }
}

/// Set of amenities with toggle-in/toggle-out semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmenitySet(BTreeSet<Amenity>);

impl AmenitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the amenity if absent, remove it if present.
    ///
    /// Returns whether the amenity is in the set afterwards.
    pub fn toggle(&mut self, amenity: Amenity) -> bool {
        if self.0.remove(&amenity) {
            false
        } else {
            self.0.insert(amenity);
            true
        }
    }

    pub fn contains(&self, amenity: Amenity) -> bool {
        self.0.contains(&amenity)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Amenity> + '_ {
        self.0.iter().copied()
    }
}

/// Stay length used as a search filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StayDuration {
    #[default]
    AcademicYear,
    Semester,
    Monthly,
    Summer,
}

impl Choice for StayDuration {
    const OPTIONS: &'static [Self] = &[
        StayDuration::AcademicYear,
        StayDuration::Semester,
        StayDuration::Monthly,
        StayDuration::Summer,
    ];

    fn label(&self) -> &'static str {
        match self {
            StayDuration::AcademicYear => "Academic Year",
            StayDuration::Semester => "Semester",
            StayDuration::Monthly => "Monthly",
            StayDuration::Summer => "Summer",
        }
    }
}

/// Stay length requested in a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingDuration {
    #[default]
    AcademicYear,
    Semester,
    Monthly,
}

impl Choice for BookingDuration {
    const OPTIONS: &'static [Self] = &[
        BookingDuration::AcademicYear,
        BookingDuration::Semester,
        BookingDuration::Monthly,
    ];

    fn label(&self) -> &'static str {
        match self {
            BookingDuration::AcademicYear => "Academic Year (10 months)",
            BookingDuration::Semester => "Semester (5 months)",
            BookingDuration::Monthly => "Monthly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertyType {
    #[default]
    StudioApartment,
    OneBedroomApartment,
    SharedHouse,
    PrivateRoom,
    DormRoom,
}

impl Choice for PropertyType {
    const OPTIONS: &'static [Self] = &[
        PropertyType::StudioApartment,
        PropertyType::OneBedroomApartment,
        PropertyType::SharedHouse,
        PropertyType::PrivateRoom,
        PropertyType::DormRoom,
    ];

    fn label(&self) -> &'static str {
        match self {
            PropertyType::StudioApartment => "Studio Apartment",
            PropertyType::OneBedroomApartment => "1 Bedroom Apartment",
            PropertyType::SharedHouse => "Shared House",
            PropertyType::PrivateRoom => "Private Room",
            PropertyType::DormRoom => "Dorm Room",
        }
    }
}

/// Answer to "Would you host again?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostAgain {
    #[default]
    Yes,
    No,
}

impl Choice for HostAgain {
    const OPTIONS: &'static [Self] = &[HostAgain::Yes, HostAgain::No];

    fn label(&self) -> &'static str {
        match self {
            HostAgain::Yes => "Yes",
            HostAgain::No => "No",
        }
    }
}

/// Star rating, always within `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(stars: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&stars).then_some(Self(stars))
    }

    pub fn stars(self) -> u8 {
        self.0
    }

    /// One star more or less, saturating at the bounds.
    pub fn step(self, up: bool) -> Self {
        if up {
            Self(self.0.saturating_add(1).min(Self::MAX))
        } else {
            Self(self.0.saturating_sub(1).max(Self::MIN))
        }
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

// ============ Student records ============

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentRegistration {
    pub full_name: String,
    pub email: String,
    pub university: String,
    pub student_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentRegistrationField {
    FullName,
    Email,
    University,
    StudentId,
}

impl StudentRegistrationField {
    pub const ALL: [Self; 4] = [
        Self::FullName,
        Self::Email,
        Self::University,
        Self::StudentId,
    ];
}

impl TextField for StudentRegistrationField {
    fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::University => "University",
            Self::StudentId => "Student ID",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Self::FullName => "Enter your full name",
            Self::Email => "student@university.edu",
            Self::University => "Your university name",
            Self::StudentId => "Student identification number",
        }
    }
}

impl TextForm for StudentRegistration {
    type Field = StudentRegistrationField;

    fn value(&self, field: Self::Field) -> &str {
        match field {
            StudentRegistrationField::FullName => &self.full_name,
            StudentRegistrationField::Email => &self.email,
            StudentRegistrationField::University => &self.university,
            StudentRegistrationField::StudentId => &self.student_id,
        }
    }

    fn set(&mut self, field: Self::Field, value: String) {
        match field {
            StudentRegistrationField::FullName => self.full_name = value,
            StudentRegistrationField::Email => self.email = value,
            StudentRegistrationField::University => self.university = value,
            StudentRegistrationField::StudentId => self.student_id = value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub location: String,
    pub max_price: String,
    pub duration: StayDuration,
    pub amenities: AmenitySet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Location,
    MaxPrice,
}

impl TextField for SearchField {
    fn label(self) -> &'static str {
        match self {
            Self::Location => "Location",
            Self::MaxPrice => "Max Budget (monthly)",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Self::Location => "City or university area",
            Self::MaxPrice => "$800",
        }
    }
}

impl TextForm for SearchFilters {
    type Field = SearchField;

    fn value(&self, field: Self::Field) -> &str {
        match field {
            SearchField::Location => &self.location,
            SearchField::MaxPrice => &self.max_price,
        }
    }

    fn set(&mut self, field: Self::Field, value: String) {
        match field {
            SearchField::Location => self.location = value,
            SearchField::MaxPrice => self.max_price = value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub move_in_date: String,
    pub duration: BookingDuration,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingField {
    MoveInDate,
    Message,
}

impl TextField for BookingField {
    fn label(self) -> &'static str {
        match self {
            Self::MoveInDate => "Move-in Date",
            Self::Message => "Additional Message",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Self::MoveInDate => "YYYY-MM-DD",
            Self::Message => "Tell the host about yourself...",
        }
    }
}

impl TextForm for BookingForm {
    type Field = BookingField;

    fn value(&self, field: Self::Field) -> &str {
        match field {
            BookingField::MoveInDate => &self.move_in_date,
            BookingField::Message => &self.message,
        }
    }

    fn set(&mut self, field: Self::Field, value: String) {
        match field {
            BookingField::MoveInDate => self.move_in_date = value,
            BookingField::Message => self.message = value,
        }
    }
}

// ============ Host records ============

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostRegistration {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostRegistrationField {
    FullName,
    Email,
    Phone,
    Address,
}

impl HostRegistrationField {
    pub const ALL: [Self; 4] = [Self::FullName, Self::Email, Self::Phone, Self::Address];
}

impl TextField for HostRegistrationField {
    fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::Phone => "Phone Number",
            Self::Address => "Address",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Self::FullName => "Enter your full name",
            Self::Email => "host@email.com",
            Self::Phone => "Your contact number",
            Self::Address => "Your address",
        }
    }
}

impl TextForm for HostRegistration {
    type Field = HostRegistrationField;

    fn value(&self, field: Self::Field) -> &str {
        match field {
            HostRegistrationField::FullName => &self.full_name,
            HostRegistrationField::Email => &self.email,
            HostRegistrationField::Phone => &self.phone,
            HostRegistrationField::Address => &self.address,
        }
    }

    fn set(&mut self, field: Self::Field, value: String) {
        match field {
            HostRegistrationField::FullName => self.full_name = value,
            HostRegistrationField::Email => self.email = value,
            HostRegistrationField::Phone => self.phone = value,
            HostRegistrationField::Address => self.address = value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyForm {
    pub title: String,
    pub property_type: PropertyType,
    pub rent: String,
    pub address: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub square_feet: String,
    pub description: String,
    pub amenities: AmenitySet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyField {
    Title,
    Rent,
    Address,
    Bedrooms,
    Bathrooms,
    SquareFeet,
    Description,
}

impl TextField for PropertyField {
    fn label(self) -> &'static str {
        match self {
            Self::Title => "Property Title",
            Self::Rent => "Monthly Rent ($)",
            Self::Address => "Address",
            Self::Bedrooms => "Bedrooms",
            Self::Bathrooms => "Bathrooms",
            Self::SquareFeet => "Square Feet",
            Self::Description => "Property Description",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            Self::Title => "e.g. Modern Studio Near University",
            Self::Rent => "800",
            Self::Address => "Property address",
            Self::Bedrooms | Self::Bathrooms => "1",
            Self::SquareFeet => "500",
            Self::Description => "Describe your property and neighborhood...",
        }
    }
}

impl TextForm for PropertyForm {
    type Field = PropertyField;

    fn value(&self, field: Self::Field) -> &str {
        match field {
            PropertyField::Title => &self.title,
            PropertyField::Rent => &self.rent,
            PropertyField::Address => &self.address,
            PropertyField::Bedrooms => &self.bedrooms,
            PropertyField::Bathrooms => &self.bathrooms,
            PropertyField::SquareFeet => &self.square_feet,
            PropertyField::Description => &self.description,
        }
    }

    fn set(&mut self, field: Self::Field, value: String) {
        match field {
            PropertyField::Title => self.title = value,
            PropertyField::Rent => self.rent = value,
            PropertyField::Address => self.address = value,
            PropertyField::Bedrooms => self.bedrooms = value,
            PropertyField::Bathrooms => self.bathrooms = value,
            PropertyField::SquareFeet => self.square_feet = value,
            PropertyField::Description => self.description = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingKind {
    Overall,
    Cleanliness,
    Communication,
}

impl RatingKind {
    pub const ALL: [Self; 3] = [Self::Overall, Self::Cleanliness, Self::Communication];

    pub fn label(self) -> &'static str {
        match self {
            RatingKind::Overall => "Overall Rating",
            RatingKind::Cleanliness => "Cleanliness",
            RatingKind::Communication => "Communication",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewForm {
    pub overall_rating: Rating,
    pub cleanliness_rating: Rating,
    pub communication_rating: Rating,
    pub host_again: HostAgain,
    pub written_review: String,
}

impl ReviewForm {
    pub fn rating(&self, kind: RatingKind) -> Rating {
        match kind {
            RatingKind::Overall => self.overall_rating,
            RatingKind::Cleanliness => self.cleanliness_rating,
            RatingKind::Communication => self.communication_rating,
        }
    }

    /// Store exactly `rating` for `kind`; earlier picks are discarded.
    pub fn set_rating(&mut self, kind: RatingKind, rating: Rating) {
        match kind {
            RatingKind::Overall => self.overall_rating = rating,
            RatingKind::Cleanliness => self.cleanliness_rating = rating,
            RatingKind::Communication => self.communication_rating = rating,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewField {
    WrittenReview,
}

impl TextField for ReviewField {
    fn label(self) -> &'static str {
        "Written Review"
    }

    fn placeholder(self) -> &'static str {
        "Share your experience hosting this student..."
    }
}

impl TextForm for ReviewForm {
    type Field = ReviewField;

    fn value(&self, field: Self::Field) -> &str {
        match field {
            ReviewField::WrittenReview => &self.written_review,
        }
    }

    fn set(&mut self, field: Self::Field, value: String) {
        match field {
            ReviewField::WrittenReview => self.written_review = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_set() {
        let mut set = AmenitySet::new();
        set.toggle(Amenity::Parking);
        let before = set.clone();

        assert!(set.toggle(Amenity::WiFi));
        assert!(!set.toggle(Amenity::WiFi));
        assert_eq!(set, before);
    }

    #[test]
    fn test_toggle_two_amenities_order_independent() {
        let mut a = AmenitySet::new();
        a.toggle(Amenity::WiFi);
        a.toggle(Amenity::Kitchen);

        let mut b = AmenitySet::new();
        b.toggle(Amenity::Kitchen);
        b.toggle(Amenity::WiFi);

        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
        assert!(a.contains(Amenity::WiFi));
        assert!(a.contains(Amenity::Kitchen));
    }

    #[test]
    fn test_choice_cycle_wraps() {
        assert_eq!(StayDuration::Summer.cycle(true), StayDuration::AcademicYear);
        assert_eq!(StayDuration::AcademicYear.cycle(false), StayDuration::Summer);
        assert_eq!(HostAgain::Yes.cycle(true), HostAgain::No);
    }

    #[test]
    fn test_form_defaults() {
        assert_eq!(SearchFilters::default().duration.label(), "Academic Year");
        assert_eq!(
            BookingForm::default().duration.label(),
            "Academic Year (10 months)"
        );
        assert_eq!(
            PropertyForm::default().property_type.label(),
            "Studio Apartment"
        );
        let review = ReviewForm::default();
        assert_eq!(review.overall_rating.stars(), 5);
        assert_eq!(review.host_again, HostAgain::Yes);
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_none());
        assert!(Rating::new(6).is_none());
        assert_eq!(Rating::new(3).map(Rating::stars), Some(3));
        assert_eq!(Rating::default().step(true).stars(), 5);
        assert_eq!(Rating::new(1).map(|r| r.step(false).stars()), Some(1));
    }

    #[test]
    fn test_set_rating_keeps_last_value() {
        let mut review = ReviewForm::default();
        for stars in [2, 4, 1, 3] {
            if let Some(rating) = Rating::new(stars) {
                review.set_rating(RatingKind::Cleanliness, rating);
            }
        }
        assert_eq!(review.rating(RatingKind::Cleanliness).stars(), 3);
        assert_eq!(review.rating(RatingKind::Overall).stars(), 5);
    }

    #[test]
    fn test_text_form_set_replaces_one_field() {
        let mut form = StudentRegistration::default();
        form.set(StudentRegistrationField::Email, "a@b.edu".to_string());
        form.set(StudentRegistrationField::Email, String::new());
        form.set(StudentRegistrationField::University, "MIT".to_string());
        assert_eq!(form.email, "");
        assert_eq!(form.university, "MIT");
        assert_eq!(form.value(StudentRegistrationField::FullName), "");
    }
}
