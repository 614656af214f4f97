//! Distance conversion and display helpers.

/// Metres per mile, as Strava totals are reported in metres.
pub const METERS_PER_MILE: f64 = 1609.0;

/// Convert metres to whole miles, rounding half to even.
///
/// Negative and non-finite inputs clamp to zero.
pub fn meters_to_miles(meters: f64) -> u32 {
    if !meters.is_finite() || meters <= 0.0 {
        return 0;
    }
    let miles = (meters / METERS_PER_MILE).round_ties_even();
    if miles >= u32::MAX as f64 {
        u32::MAX
    } else {
        miles as u32
    }
}

/// Format an integer with `,` thousands separators: `1234567` -> `1,234,567`.
pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Distance label as drawn on the card and the dashboard: `1,234m`.
pub fn format_distance(miles: u32) -> String {
    format!("{}m", format_thousands(miles))
}
