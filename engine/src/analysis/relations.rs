//! Zodiac relation analysis
//!
//! Classifies a pair of signs against the four traditional relation
//! categories. Every category is checked; a pair can land in more than one.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::ZodiacSign;
use crate::types::ZodiacSign::{
    Dog, Dragon, Goat, Horse, Monkey, Ox, Pig, Rabbit, Rat, Rooster, Snake, Tiger,
};

/// Six Harmony pairs
const SIX_HARMONY: [(ZodiacSign, ZodiacSign); 6] = [
    (Rat, Ox),
    (Tiger, Pig),
    (Rabbit, Dog),
    (Dragon, Rooster),
    (Snake, Monkey),
    (Horse, Goat),
];

/// Six Clash pairs
const SIX_CLASH: [(ZodiacSign, ZodiacSign); 6] = [
    (Rat, Horse),
    (Ox, Goat),
    (Tiger, Monkey),
    (Rabbit, Rooster),
    (Dragon, Dog),
    (Snake, Pig),
];

/// Six Harm pairs
const SIX_HARM: [(ZodiacSign, ZodiacSign); 6] = [
    (Rat, Goat),
    (Ox, Horse),
    (Tiger, Snake),
    (Rabbit, Dragon),
    (Dog, Rooster),
    (Monkey, Pig),
];

/// Three Harmony groups; two signs relate when they share a group
const THREE_HARMONY: [[ZodiacSign; 3]; 4] = [
    [Monkey, Rat, Dragon],
    [Tiger, Horse, Dog],
    [Snake, Rooster, Ox],
    [Pig, Rabbit, Goat],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacRelation {
    SixHarmony,
    SixClash,
    SixHarm,
    ThreeHarmony,
    Ordinary,
}

impl fmt::Display for ZodiacRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ZodiacRelation::SixHarmony => "Six Harmony",
            ZodiacRelation::SixClash => "Six Clash",
            ZodiacRelation::SixHarm => "Six Harm",
            ZodiacRelation::ThreeHarmony => "Three Harmony",
            ZodiacRelation::Ordinary => "Ordinary",
        };
        write!(f, "{}", name)
    }
}

fn pair_listed(table: &[(ZodiacSign, ZodiacSign)], a: ZodiacSign, b: ZodiacSign) -> bool {
    table
        .iter()
        .any(|&(x, y)| (a == x && b == y) || (a == y && b == x))
}

fn share_harmony_group(a: ZodiacSign, b: ZodiacSign) -> bool {
    THREE_HARMONY
        .iter()
        .any(|group| group.contains(&a) && group.contains(&b))
}

/// All relations holding between two signs, in fixed category order.
///
/// Symmetric in its arguments. Returns `[Ordinary]` when no category
/// matches; never returns an empty list.
pub fn relations_between(a: ZodiacSign, b: ZodiacSign) -> Vec<ZodiacRelation> {
    let mut relations = Vec::new();

    if pair_listed(&SIX_HARMONY, a, b) {
        relations.push(ZodiacRelation::SixHarmony);
    }
    if pair_listed(&SIX_CLASH, a, b) {
        relations.push(ZodiacRelation::SixClash);
    }
    if pair_listed(&SIX_HARM, a, b) {
        relations.push(ZodiacRelation::SixHarm);
    }
    if share_harmony_group(a, b) {
        relations.push(ZodiacRelation::ThreeHarmony);
    }

    if relations.is_empty() {
        relations.push(ZodiacRelation::Ordinary);
    }
    relations
}
