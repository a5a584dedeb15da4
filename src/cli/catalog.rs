//! `stayzy listings` and `stayzy bookings`.

use crate::flow::fixtures::{self, format_usd};
use anyhow::{Context, Result};
use std::fmt::Write;

pub fn listings_table() -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<3} {:<32} {:<22} {:>12} {:>6}  {}",
        "ID", "TITLE", "LOCATION", "PRICE", "RATING", "HOST"
    );
    for listing in fixtures::listings() {
        let host = if listing.verified {
            format!("{} (verified)", listing.host)
        } else {
            listing.host.to_string()
        };
        let _ = writeln!(
            out,
            "{:<3} {:<32} {:<22} {:>12} {:>6.1}  {}",
            listing.id,
            listing.title,
            listing.location,
            listing.price_label(),
            listing.rating,
            host
        );
    }
    out
}

pub fn listings_json() -> Result<String> {
    serde_json::to_string_pretty(fixtures::listings()).context("Failed to serialize listings")
}

pub fn bookings_table() -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<3} {:<16} {:<14} {:<14} {:>8}  {}",
        "ID", "STUDENT", "MOVE-IN", "DURATION", "AMOUNT", "STATUS"
    );
    for booking in fixtures::bookings() {
        let _ = writeln!(
            out,
            "{:<3} {:<16} {:<14} {:<14} {:>8}  {}",
            booking.id,
            booking.student,
            booking.move_in_label(),
            booking.duration,
            format_usd(booking.amount),
            booking.status.label()
        );
    }
    let earnings = fixtures::earnings();
    let _ = writeln!(
        out,
        "\nTotal earnings {} · this month {} · {} bookings · average rating {:.1}",
        format_usd(earnings.total_earnings),
        format_usd(earnings.this_month),
        earnings.total_bookings,
        earnings.average_rating
    );
    out
}

pub fn bookings_json() -> Result<String> {
    serde_json::to_string_pretty(fixtures::bookings()).context("Failed to serialize bookings")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listings_table_has_every_listing() {
        let table = listings_table();
        assert_eq!(table.lines().count(), 1 + fixtures::listings().len());
        assert!(table.contains("Modern Studio Near University"));
        assert!(table.contains("$800/month"));
    }

    #[test]
    fn test_bookings_table_shows_status_and_earnings() {
        let table = bookings_table();
        assert!(table.contains("John Kim"));
        assert!(table.contains("completed"));
        assert!(table.contains("$14,400"));
    }

    #[test]
    fn test_json_uses_lowercase_status() {
        let json: serde_json::Value = serde_json::from_str(&bookings_json().unwrap()).unwrap();
        assert_eq!(json[0]["status"], "pending");
        let json: serde_json::Value = serde_json::from_str(&listings_json().unwrap()).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(3));
        assert_eq!(json[0]["amenities"][0], "WiFi");
    }
}
