//! Compatibility scoring
//!
//! Weighted additive formula over the zodiac relation set, the element
//! relation and the NaYin name match, clamped to 0..=100. Deterministic by
//! construction; the same inputs always produce the same score.

use super::elements::{ElementRelation, ElementRelationKind};
use super::relations::ZodiacRelation;

const BASE_SCORE: i32 = 60;
const PER_RELATION: i32 = 10;
const SIX_HARMONY_BONUS: i32 = 15;
const THREE_HARMONY_BONUS: i32 = 10;
const GENERATES_BONUS: i32 = 20;
const OVERCOMES_PENALTY: i32 = 15;
const NAYIN_MATCH_BONUS: i32 = 10;

/// Whether two NaYin names fall in the same category.
///
/// Compares the final word of each name, the part that carries the
/// category noun ("Gold in the Sea" vs "Water of the Great Sea").
pub fn nayin_names_match(a: &str, b: &str) -> bool {
    match (a.split_whitespace().last(), b.split_whitespace().last()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Composite compatibility score out of 100.
///
/// Every entry of the relation set counts, Ordinary included, with extra
/// weight for Six Harmony and Three Harmony.
pub fn score(
    relations: &[ZodiacRelation],
    element_relation: &ElementRelation,
    nayin_match: bool,
) -> u8 {
    let mut total = BASE_SCORE;

    total += relations.len() as i32 * PER_RELATION;
    if relations.contains(&ZodiacRelation::SixHarmony) {
        total += SIX_HARMONY_BONUS;
    }
    if relations.contains(&ZodiacRelation::ThreeHarmony) {
        total += THREE_HARMONY_BONUS;
    }

    match element_relation.kind {
        ElementRelationKind::Generates => total += GENERATES_BONUS,
        ElementRelationKind::Overcomes => total -= OVERCOMES_PENALTY,
        ElementRelationKind::Balances => {}
    }

    if nayin_match {
        total += NAYIN_MATCH_BONUS;
    }

    total.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::elements::element_relation;
    use crate::types::Element;

    fn balances() -> ElementRelation {
        element_relation(Element::Fire, Element::Fire)
    }

    #[test]
    fn test_ordinary_pair_baseline() {
        assert_eq!(score(&[ZodiacRelation::Ordinary], &balances(), false), 70);
    }

    #[test]
    fn test_harmony_bonuses_stack() {
        let relations = [ZodiacRelation::SixHarmony, ZodiacRelation::ThreeHarmony];
        // 60 + 2x10 + 15 + 10 lands past the ceiling
        assert_eq!(score(&relations, &balances(), false), 100);
    }

    #[test]
    fn test_overcoming_elements_lower_the_score() {
        let overcomes = element_relation(Element::Wood, Element::Earth);
        assert_eq!(score(&[ZodiacRelation::Ordinary], &overcomes, false), 55);
    }

    #[test]
    fn test_clamped_to_valid_range_for_extreme_inputs() {
        let every_relation = [
            ZodiacRelation::SixHarmony,
            ZodiacRelation::SixClash,
            ZodiacRelation::SixHarm,
            ZodiacRelation::ThreeHarmony,
            ZodiacRelation::Ordinary,
        ];
        let kinds = [
            element_relation(Element::Wood, Element::Fire),
            element_relation(Element::Wood, Element::Earth),
            balances(),
        ];
        for upto in 0..=every_relation.len() {
            for relation in &kinds {
                for nayin_match in [false, true] {
                    let s = score(&every_relation[..upto], relation, nayin_match);
                    assert!(s <= 100);
                }
            }
        }
        // The richest combination pins at the ceiling
        assert_eq!(
            score(&every_relation, &kinds[0], true),
            100
        );
    }

    #[test]
    fn test_nayin_names_match_on_final_word() {
        assert!(nayin_names_match("Gold in the Sea", "Water of the Great Sea"));
        assert!(nayin_names_match("Earth on the Roadside", "Earth on the Roadside"));
        assert!(!nayin_names_match("Earth on the Roadside", "Sword-Edge Gold"));
        assert!(!nayin_names_match("", "Gold in the Sea"));
    }
}
