//! Due Date Normalization
//!
//! Tasks keep the due date exactly as typed and, when it looks like
//! `year-month-day`, a display form `month/day/year` derived from it.
//! Only the shape is checked: `2024-13-40` becomes `13/40/2024`.

/// `year-month-day` → `month/day/year`
///
/// The raw value is split on the first `-` and the remainder on the next
/// one, so the day component keeps any further `-`. All three components
/// must be non-empty ASCII digit strings.
pub fn normalize_due_date(raw: &str) -> Option<String> {
    let (year, rest) = raw.split_once('-')?;
    let (month, day) = rest.split_once('-')?;

    if [year, month, day].iter().all(|part| is_digits(part)) {
        Some(format!("{month}/{day}/{year}"))
    } else {
        None
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
