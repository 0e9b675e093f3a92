//! User-facing formatting of membership values

use domain::MembershipDegree;

/// Render a membership value rounded to 4 decimal places, without
/// trailing zeros
pub fn format_membership(value: MembershipDegree) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    format!("{rounded}")
}
