use celes::Country;
use phonenumber::metadata::DATABASE;

/// `+<country code> <number>`, followed by the country name when the number
/// can be placed. Failing to place it is not an error.
pub fn format_public_phone(country_code: &str, number: &str) -> String {
    let unresolved = format!("+{country_code} {number}");
    match country_name(&unresolved) {
        Some(country) => format!("{unresolved} ({country})"),
        None => unresolved,
    }
}

/// Placed by country calling code alone, using the main region registered for
/// that code, so short or unassigned national numbers still get a name.
fn country_name(phone: &str) -> Option<&'static str> {
    let parsed = phonenumber::parse(None, phone).ok()?;
    let code = parsed.code().value();
    let regions = DATABASE.region(&code)?;
    let alpha2 = regions.first()?;
    let country = Country::from_alpha2(alpha2).ok()?;
    Some(display_name(country.long_name))
}

// Formal names carry a leading article ("The Russian Federation").
fn display_name(long_name: &'static str) -> &'static str {
    long_name.strip_prefix("The ").unwrap_or(long_name)
}
