//! Download filename derivation.

use lunisol_resolve::ConversionResult;

/// Fallback stem when sanitisation leaves nothing of the title.
const DEFAULT_STEM: &str = "기념일";

/// Characters rejected by at least one mainstream filesystem.
const HOSTILE: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Derives a safe download filename for the conversion result:
/// the sanitised title plus a fixed `_음력{M}월{D}일_양력변환.csv` suffix.
pub fn suggested_filename(result: &ConversionResult) -> String {
    let anniversary = result.anniversary();
    let stem = sanitize(anniversary.title());
    format!(
        "{stem}_음력{}월{}일_양력변환.csv",
        anniversary.month(),
        anniversary.day()
    )
}

/// Replaces path-hostile and control characters with underscores.
fn sanitize(title: &str) -> String {
    let cleaned: String = title
        .trim()
        .chars()
        .map(|c| {
            if HOSTILE.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();
    if cleaned.is_empty() {
        DEFAULT_STEM.to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lunisol_resolve::{ConversionResult, LunarAnniversary};

    fn result(title: &str, month: u8, day: u8) -> ConversionResult {
        ConversionResult::new(LunarAnniversary::new(title, month, day).unwrap(), Vec::new())
    }

    #[test]
    fn plain_title_kept_verbatim() {
        assert_eq!(
            suggested_filename(&result("할머니 생신", 1, 1)),
            "할머니 생신_음력1월1일_양력변환.csv"
        );
    }

    #[test]
    fn hostile_characters_replaced() {
        assert_eq!(
            suggested_filename(&result("a/b\\c:d?e", 8, 15)),
            "a_b_c_d_e_음력8월15일_양력변환.csv"
        );
    }

    #[test]
    fn control_characters_replaced() {
        assert_eq!(
            suggested_filename(&result("a\tb", 1, 1)),
            "a_b_음력1월1일_양력변환.csv"
        );
    }

    #[test]
    fn suffix_uses_unpadded_month_day() {
        assert_eq!(
            suggested_filename(&result("x", 11, 3)),
            "x_음력11월3일_양력변환.csv"
        );
    }
}
