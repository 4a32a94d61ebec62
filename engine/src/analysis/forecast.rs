//! Wedding-year recommendation and child forecast
//!
//! Signs in the same Three Harmony group share a triple of recommended
//! years; the child forecast keys off the element relation alone.

use crate::types::ZodiacSign;
use crate::types::ZodiacSign::{
    Dog, Dragon, Goat, Horse, Monkey, Ox, Pig, Rabbit, Rat, Rooster, Snake, Tiger,
};

use super::elements::ElementRelationKind;

/// Recommended marriage years per sign, grouped by Three Harmony trine.
const WEDDING_YEARS: [(ZodiacSign, [u16; 3]); 12] = [
    (Rat, [2024, 2028, 2032]),
    (Monkey, [2024, 2028, 2032]),
    (Dragon, [2024, 2028, 2032]),
    (Tiger, [2026, 2030, 2034]),
    (Dog, [2026, 2030, 2034]),
    (Horse, [2026, 2030, 2034]),
    (Snake, [2025, 2029, 2033]),
    (Rooster, [2025, 2029, 2033]),
    (Ox, [2025, 2029, 2033]),
    (Rabbit, [2027, 2031, 2035]),
    (Goat, [2027, 2031, 2035]),
    (Pig, [2027, 2031, 2035]),
];

/// Ascending recommended years for a sign. Covers all 12 signs.
pub fn wedding_years(sign: ZodiacSign) -> Option<[u16; 3]> {
    WEDDING_YEARS
        .iter()
        .find(|(s, _)| *s == sign)
        .map(|(_, years)| *years)
}

/// Render a year triple as the "first – last" range shown to the user,
/// or the literal "Any" when no recommendation exists.
pub fn format_wedding_years(years: Option<[u16; 3]>) -> String {
    match years {
        Some(years) => format!("{} – {}", years[0], years[2]),
        None => "Any".to_string(),
    }
}

/// Child fortune advice for an element relation.
pub fn child_forecast(kind: ElementRelationKind) -> &'static str {
    match kind {
        ElementRelationKind::Generates => "Favorable child fortune; elements flow smoothly.",
        ElementRelationKind::Overcomes => "Exercise care in child health; suggest prenatal balance.",
        ElementRelationKind::Balances => "Balanced child fortune; upbringing is key.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sign_has_a_recommendation() {
        for sign in ZodiacSign::CYCLE {
            let years = wedding_years(sign).expect("sign missing from table");
            assert!(years[0] < years[1] && years[1] < years[2]);
        }
    }

    #[test]
    fn test_trine_members_share_their_years() {
        assert_eq!(wedding_years(Rat), wedding_years(Monkey));
        assert_eq!(wedding_years(Rat), wedding_years(Dragon));
        assert_ne!(wedding_years(Rat), wedding_years(Tiger));
    }

    #[test]
    fn test_range_formatting() {
        assert_eq!(format_wedding_years(wedding_years(Rat)), "2024 – 2032");
        assert_eq!(format_wedding_years(None), "Any");
    }

    #[test]
    fn test_forecasts_are_distinct() {
        let texts = [
            child_forecast(ElementRelationKind::Generates),
            child_forecast(ElementRelationKind::Overcomes),
            child_forecast(ElementRelationKind::Balances),
        ];
        assert_ne!(texts[0], texts[1]);
        assert_ne!(texts[1], texts[2]);
        assert_ne!(texts[0], texts[2]);
    }
}
