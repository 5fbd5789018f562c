use super::{format_public_phone, LABEL_WIDTH};
use crate::lookup::{EnrichmentOutcome, LookupError, LookupReport, ProfileRecord};
use anyhow::Result;
use std::fmt::Display;
use std::io::Write;

const NO_PICTURE: &str = "No picture";
const NOT_AVAILABLE: &str = "N/A";
const SEPARATOR_WIDTH: usize = 24;

/// Writes the human readable report.
pub fn render_report<W: Write>(report: &LookupReport, out: &mut W) -> Result<()> {
    let profile = &report.profile;

    field(out, "Informations about", profile.username().unwrap_or(NOT_AVAILABLE))?;
    field(out, "userID", profile.account_id().unwrap_or(NOT_AVAILABLE))?;
    field(
        out,
        "Verified",
        format!(
            "{} | Is business Account : {}",
            profile.flag("is_verified"),
            profile.flag("is_business")
        ),
    )?;
    field(out, "Is private Account", profile.flag("is_private"))?;
    field(
        out,
        "Follower",
        format!(
            "{} | Following : {}",
            profile.count("follower_count"),
            profile.count("following_count")
        ),
    )?;
    field(out, "Number of posts", profile.count("media_count"))?;
    if let Some(url) = profile.non_empty_text("external_url") {
        field(out, "External url", url)?;
    }
    let biography = profile.text("biography").unwrap_or_default();
    field(out, "Biography", indent_continuation(biography))?;
    field(out, "Linked WhatsApp", profile.flag("is_whatsapp_linked"))?;
    field(out, "Memorial Account", profile.flag("is_memorialized"))?;
    field(out, "New Instagram user", profile.flag("is_new_to_instagram"))?;

    if let Some(email) = profile.non_empty_text("public_email") {
        field(out, "Public Email", email)?;
    }
    if let Some(phone) = public_phone(profile) {
        field(out, "Public Phone number", phone)?;
    }

    render_enrichment(report, out)?;

    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    field(
        out,
        "Profile Picture",
        profile.profile_picture_url().unwrap_or(NO_PICTURE),
    )?;
    Ok(())
}

fn render_enrichment<W: Write>(report: &LookupReport, out: &mut W) -> Result<()> {
    let record = match &report.enrichment {
        Ok(record) => record,
        Err(LookupError::RateLimited) => {
            writeln!(out, "Rate limit, please wait a few minutes before trying again")?;
            return Ok(());
        }
        Err(error) => {
            writeln!(out, "Advanced lookup failed: {error}")?;
            return Ok(());
        }
    };

    match record.outcome() {
        EnrichmentOutcome::NoMatch => {
            writeln!(out, "The lookup did not work on this account")?;
        }
        EnrichmentOutcome::Contacts { email, phone } => {
            match email {
                Some(email) => field(out, "Obfuscated email", email)?,
                None => writeln!(out, "No obfuscated email found")?,
            }
            match phone {
                Some(phone) => field(out, "Obfuscated phone", phone)?,
                None => writeln!(out, "No obfuscated phone found")?,
            }
        }
    }
    Ok(())
}

fn public_phone(profile: &ProfileRecord) -> Option<String> {
    let number = profile
        .scalar("public_phone_number")
        .filter(|number| !number.is_empty())?;
    let country_code = profile
        .scalar("public_phone_country_code")
        .unwrap_or_default();
    Some(format_public_phone(&country_code, &number))
}

/// Aligns every line after the first under the value column.
fn indent_continuation(text: &str) -> String {
    let indent = format!("\n{}", " ".repeat(LABEL_WIDTH + 2));
    text.split('\n').collect::<Vec<_>>().join(&indent)
}

fn field<W: Write>(out: &mut W, label: &str, value: impl Display) -> Result<()> {
    writeln!(out, "{label:<width$}: {value}", width = LABEL_WIDTH)?;
    Ok(())
}
