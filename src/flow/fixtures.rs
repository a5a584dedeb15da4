//! Read-only mock datasets.
//!
//! Listings, host bookings and the earnings panel are fixed records shared
//! by the screens and the `listings` / `bookings` subcommands. Nothing here
//! is ever mutated.

use chrono::NaiveDate;
use serde::Serialize;

use super::forms::Amenity;

/// Flat fee added to every booking quote.
pub const PLATFORM_FEE: u32 = 50;

pub type ListingId = u32;
pub type BookingId = u32;

#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub id: ListingId,
    pub title: &'static str,
    pub location: &'static str,
    /// Monthly rent in whole dollars.
    pub price: u32,
    pub duration: &'static str,
    pub image: &'static str,
    pub amenities: &'static [Amenity],
    pub rating: f32,
    pub host: &'static str,
    pub verified: bool,
}

impl Listing {
    pub fn price_label(&self) -> String {
        format!("{}/month", format_usd(self.price))
    }

    /// Cost breakdown shown on the booking step.
    pub fn quote(&self) -> BookingQuote {
        BookingQuote {
            monthly_rent: self.price,
            security_deposit: self.price,
            platform_fee: PLATFORM_FEE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookingQuote {
    pub monthly_rent: u32,
    pub security_deposit: u32,
    pub platform_fee: u32,
}

impl BookingQuote {
    pub fn total_due_today(&self) -> u32 {
        self.monthly_rent + self.security_deposit + self.platform_fee
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
}

impl BookingStatus {
    pub fn label(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub id: BookingId,
    pub student: &'static str,
    pub property: &'static str,
    /// ISO date, `YYYY-MM-DD`.
    pub move_in: &'static str,
    pub duration: &'static str,
    pub amount: u32,
    pub status: BookingStatus,
    pub student_rating: f32,
    pub student_reviews: u32,
}

impl Booking {
    /// Move-in date as "Sep 1, 2024": chrono's `%b %-d, %Y`, so every month
    /// is a three-letter abbreviation. Falls back to the raw string.
    pub fn move_in_label(&self) -> String {
        NaiveDate::parse_from_str(self.move_in, "%Y-%m-%d")
            .map(|date| date.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|_| self.move_in.to_string())
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EarningsSummary {
    pub total_earnings: u32,
    pub this_month: u32,
    pub total_bookings: u32,
    pub average_rating: f32,
    pub properties_listed: u32,
}

static LISTINGS: [Listing; 3] = [
    Listing {
        id: 1,
        title: "Modern Studio Near University",
        location: "Downtown Campus Area",
        price: 800,
        duration: "Academic Year",
        image: "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=400&h=300&fit=crop",
        amenities: &[Amenity::WiFi, Amenity::Furnished, Amenity::Parking],
        rating: 4.8,
        host: "Sarah Johnson",
        verified: true,
    },
    Listing {
        id: 2,
        title: "Shared House with 3 Bedrooms",
        location: "Student Quarter",
        price: 550,
        duration: "Semester",
        image: "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?w=400&h=300&fit=crop",
        amenities: &[Amenity::WiFi, Amenity::Kitchen, Amenity::Garden],
        rating: 4.6,
        host: "Mike Chen",
        verified: true,
    },
    Listing {
        id: 3,
        title: "Cozy Apartment with Study Room",
        location: "Library District",
        price: 700,
        duration: "Monthly",
        image: "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?w=400&h=300&fit=crop",
        amenities: &[Amenity::WiFi, Amenity::StudyRoom, Amenity::Laundry],
        rating: 4.9,
        host: "Emma Wilson",
        verified: true,
    },
];

static BOOKINGS: [Booking; 3] = [
    Booking {
        id: 1,
        student: "Alex Thompson",
        property: "Modern Studio Near University",
        move_in: "2024-09-01",
        duration: "Academic Year",
        amount: 8000,
        status: BookingStatus::Pending,
        student_rating: 4.8,
        student_reviews: 12,
    },
    Booking {
        id: 2,
        student: "Maria Garcia",
        property: "Modern Studio Near University",
        move_in: "2024-08-15",
        duration: "Semester",
        amount: 4000,
        status: BookingStatus::Confirmed,
        student_rating: 4.9,
        student_reviews: 8,
    },
    Booking {
        id: 3,
        student: "John Kim",
        property: "Modern Studio Near University",
        move_in: "2024-07-01",
        duration: "Summer",
        amount: 2400,
        status: BookingStatus::Completed,
        student_rating: 4.7,
        student_reviews: 15,
    },
];

static EARNINGS: EarningsSummary = EarningsSummary {
    total_earnings: 14_400,
    this_month: 1_200,
    total_bookings: 18,
    average_rating: 4.8,
    properties_listed: 3,
};

pub fn listings() -> &'static [Listing] {
    &LISTINGS
}

pub fn listing(id: ListingId) -> Option<&'static Listing> {
    LISTINGS.iter().find(|l| l.id == id)
}

/// Listing shown when the booking step has no selection.
pub fn default_listing() -> &'static Listing {
    &LISTINGS[0]
}

pub fn bookings() -> &'static [Booking] {
    &BOOKINGS
}

pub fn booking(id: BookingId) -> Option<&'static Booking> {
    BOOKINGS.iter().find(|b| b.id == id)
}

/// First booking with status `completed`, the default review subject.
pub fn first_completed_booking() -> Option<&'static Booking> {
    BOOKINGS
        .iter()
        .find(|b| b.status == BookingStatus::Completed)
}

pub fn earnings() -> &'static EarningsSummary {
    &EARNINGS
}

/// Whole dollars with thousands separators: `8000` becomes `"$8,000"`.
pub fn format_usd(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
