//! Headline length to font size policy.

/// Smallest size the policy ever recommends.
pub const MIN_RECOMMENDED_PX: u32 = 24;
/// Largest size the policy ever recommends.
pub const MAX_RECOMMENDED_PX: u32 = 64;

const BASE_PX: u32 = 48;

/// Recommended headline font size (px) for a headline of `headline_len` characters.
///
/// Monotonic step function: `<=20 -> 56`, `<=40 -> 48`, `<=60 -> 40`, `<=80 -> 32`, else `24`.
pub fn recommend(headline_len: usize) -> u32 {
    match headline_len {
        0..=20 => (BASE_PX + 8).min(MAX_RECOMMENDED_PX),
        21..=40 => BASE_PX,
        41..=60 => (BASE_PX - 8).max(32),
        61..=80 => (BASE_PX - 16).max(28),
        _ => (BASE_PX - 24).max(MIN_RECOMMENDED_PX),
    }
}

/// [`recommend`] for a headline, counting characters rather than bytes.
pub fn recommend_for(headline: &str) -> u32 {
    recommend(headline.chars().count())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/sizer.rs"]
mod tests;
