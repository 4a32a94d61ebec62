//! Value types for compatibility analysis
//!
//! Signs, stems, branches, pillars and elements, plus the year-derivation
//! functions that map a calendar year onto each cycle.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Zodiac cycle (12 years)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl ZodiacSign {
    pub const CYCLE: [ZodiacSign; 12] = [
        ZodiacSign::Rat,
        ZodiacSign::Ox,
        ZodiacSign::Tiger,
        ZodiacSign::Rabbit,
        ZodiacSign::Dragon,
        ZodiacSign::Snake,
        ZodiacSign::Horse,
        ZodiacSign::Goat,
        ZodiacSign::Monkey,
        ZodiacSign::Rooster,
        ZodiacSign::Dog,
        ZodiacSign::Pig,
    ];

    /// Sign for a calendar year. Year 4 is a Rat year; the cycle extends
    /// backwards arithmetically, so negative years are defined but carry no
    /// practical calendar meaning.
    pub fn from_year(year: i32) -> Self {
        Self::CYCLE[(year - 4).rem_euclid(12) as usize]
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ZodiacSign::Rat => "Rat",
            ZodiacSign::Ox => "Ox",
            ZodiacSign::Tiger => "Tiger",
            ZodiacSign::Rabbit => "Rabbit",
            ZodiacSign::Dragon => "Dragon",
            ZodiacSign::Snake => "Snake",
            ZodiacSign::Horse => "Horse",
            ZodiacSign::Goat => "Goat",
            ZodiacSign::Monkey => "Monkey",
            ZodiacSign::Rooster => "Rooster",
            ZodiacSign::Dog => "Dog",
            ZodiacSign::Pig => "Pig",
        };
        write!(f, "{}", name)
    }
}

// ============================================================================
// Stem-branch cycles (10 and 12 years, full pillar repeats every 60)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

impl HeavenlyStem {
    pub const CYCLE: [HeavenlyStem; 10] = [
        HeavenlyStem::Jia,
        HeavenlyStem::Yi,
        HeavenlyStem::Bing,
        HeavenlyStem::Ding,
        HeavenlyStem::Wu,
        HeavenlyStem::Ji,
        HeavenlyStem::Geng,
        HeavenlyStem::Xin,
        HeavenlyStem::Ren,
        HeavenlyStem::Gui,
    ];
}

impl fmt::Display for HeavenlyStem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeavenlyStem::Jia => "Jia",
            HeavenlyStem::Yi => "Yi",
            HeavenlyStem::Bing => "Bing",
            HeavenlyStem::Ding => "Ding",
            HeavenlyStem::Wu => "Wu",
            HeavenlyStem::Ji => "Ji",
            HeavenlyStem::Geng => "Geng",
            HeavenlyStem::Xin => "Xin",
            HeavenlyStem::Ren => "Ren",
            HeavenlyStem::Gui => "Gui",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

impl EarthlyBranch {
    pub const CYCLE: [EarthlyBranch; 12] = [
        EarthlyBranch::Zi,
        EarthlyBranch::Chou,
        EarthlyBranch::Yin,
        EarthlyBranch::Mao,
        EarthlyBranch::Chen,
        EarthlyBranch::Si,
        EarthlyBranch::Wu,
        EarthlyBranch::Wei,
        EarthlyBranch::Shen,
        EarthlyBranch::You,
        EarthlyBranch::Xu,
        EarthlyBranch::Hai,
    ];
}

impl fmt::Display for EarthlyBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EarthlyBranch::Zi => "Zi",
            EarthlyBranch::Chou => "Chou",
            EarthlyBranch::Yin => "Yin",
            EarthlyBranch::Mao => "Mao",
            EarthlyBranch::Chen => "Chen",
            EarthlyBranch::Si => "Si",
            EarthlyBranch::Wu => "Wu",
            EarthlyBranch::Wei => "Wei",
            EarthlyBranch::Shen => "Shen",
            EarthlyBranch::You => "You",
            EarthlyBranch::Xu => "Xu",
            EarthlyBranch::Hai => "Hai",
        };
        write!(f, "{}", name)
    }
}

/// Year pillar: one heavenly stem paired with one earthly branch.
///
/// Both indices advance together each year, so only the 60 pairings with
/// matching parity ever occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl Pillar {
    /// Pillar for a calendar year. Total for any year, like the zodiac.
    pub fn from_year(year: i32) -> Self {
        let offset = year - 4;
        Pillar {
            stem: HeavenlyStem::CYCLE[offset.rem_euclid(10) as usize],
            branch: EarthlyBranch::CYCLE[offset.rem_euclid(12) as usize],
        }
    }

    /// The i-th pillar of the canonical 60-year cycle, starting at JiaZi.
    pub fn from_cycle_index(index: u8) -> Self {
        Pillar {
            stem: HeavenlyStem::CYCLE[(index % 10) as usize],
            branch: EarthlyBranch::CYCLE[(index % 12) as usize],
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

// ============================================================================
// Five elements
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Element::Wood => "Wood",
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Metal => "Metal",
            Element::Water => "Water",
        };
        write!(f, "{}", name)
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Engine failures. The NaYin gap variant signals an incomplete lookup
/// table, which is a data defect rather than a user input problem.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("no NaYin entry covers pillar {pillar}, lookup table is incomplete")]
    NayinTableGap { pillar: Pillar },

    #[error("report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zodiac_known_years() {
        assert_eq!(ZodiacSign::from_year(1990), ZodiacSign::Horse);
        assert_eq!(ZodiacSign::from_year(1992), ZodiacSign::Monkey);
        assert_eq!(ZodiacSign::from_year(2024), ZodiacSign::Dragon);
    }

    #[test]
    fn test_zodiac_cycles_every_12_years() {
        for year in 1900..1960 {
            assert_eq!(ZodiacSign::from_year(year), ZodiacSign::from_year(year + 12));
        }
    }

    #[test]
    fn test_pillar_known_years() {
        // 1984 opens a sexagenary cycle
        let p = Pillar::from_year(1984);
        assert_eq!(p.stem, HeavenlyStem::Jia);
        assert_eq!(p.branch, EarthlyBranch::Zi);

        let p = Pillar::from_year(1990);
        assert_eq!(p.stem, HeavenlyStem::Geng);
        assert_eq!(p.branch, EarthlyBranch::Wu);
    }

    #[test]
    fn test_pillar_cycles_every_60_years() {
        for year in 1900..1960 {
            assert_eq!(Pillar::from_year(year), Pillar::from_year(year + 60));
        }
    }

    #[test]
    fn test_derivations_total_for_negative_years() {
        // B.C. years have no practical meaning but must not panic
        let _ = ZodiacSign::from_year(-221);
        let _ = Pillar::from_year(-221);
        assert_eq!(ZodiacSign::from_year(-8), ZodiacSign::from_year(-8 + 12));
    }

    #[test]
    fn test_pillar_display_concatenates_pinyin() {
        assert_eq!(Pillar::from_year(1984).to_string(), "JiaZi");
        assert_eq!(Pillar::from_year(1990).to_string(), "GengWu");
    }
}
