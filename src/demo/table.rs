//! Fixed-width rendering of the showroom listing.
//!
//! Rendering is a pure function over already-fetched rows so the clipping
//! and row-cap behaviour can be tested without a database.

use rust_decimal::Decimal;

use crate::models::AvailableCar;

const BRAND_WIDTH: usize = 8;
const MODEL_WIDTH: usize = 10;
const COLOR_WIDTH: usize = 8;
/// The table never prints more rows than this, whatever the query returned.
pub const MAX_ROWS: usize = 8;

/// Render the listing as a fixed-width text table, prices in millions.
pub fn render(cars: &[AvailableCar]) -> String {
    let mut out = String::new();
    out.push_str("Brand     Model       Year  Color     Price     Mileage   Transmission\n");

    for car in cars.iter().take(MAX_ROWS) {
        let millions = format!("{:.2}", car.price / Decimal::from(1_000_000));
        out.push_str(&format!(
            " {:<8}  {:<10}  {:<4}  {:<8}  {:<8}  {:<8}  {:<11}\n",
            clip(&car.brand_name, BRAND_WIDTH),
            clip(&car.model, MODEL_WIDTH),
            car.year,
            clip(&car.color, COLOR_WIDTH),
            millions,
            car.mileage,
            car.transmission,
        ));
    }

    out.push_str("   * prices are in millions of rubles\n");
    out
}

/// Clip `value` to `max` characters, marking the cut with a trailing `.`.
///
/// Counts characters rather than bytes so Cyrillic values clip cleanly.
fn clip(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        let mut clipped: String = value.chars().take(max - 1).collect();
        clipped.push('.');
        clipped
    } else {
        value.to_string()
    }
}
