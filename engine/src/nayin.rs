//! NaYin lookup table
//!
//! The traditional sexagenary cycle groups its 60 pillars into 30 named
//! entries, each carrying one of the five elements and covering exactly two
//! adjacent pillars. The table below is the complete set; a lookup miss
//! means the table itself is broken and surfaces as a distinct error.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

use crate::types::{EarthlyBranch, Element, EngineError, HeavenlyStem, Pillar};
use crate::types::{EarthlyBranch as B, HeavenlyStem as S};

/// One named NaYin grouping and the two pillars it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NayinEntry {
    pub name: &'static str,
    pub element: Element,
    pub pillars: [Pillar; 2],
}

const fn pillar(stem: HeavenlyStem, branch: EarthlyBranch) -> Pillar {
    Pillar { stem, branch }
}

const fn entry(
    name: &'static str,
    element: Element,
    first: Pillar,
    second: Pillar,
) -> NayinEntry {
    NayinEntry {
        name,
        element,
        pillars: [first, second],
    }
}

/// All 30 NaYin entries in sexagenary order, JiaZi through GuiHai.
pub const TABLE: &[NayinEntry] = &[
    entry("Gold in the Sea", Element::Metal, pillar(S::Jia, B::Zi), pillar(S::Yi, B::Chou)),
    entry("Fire in the Furnace", Element::Fire, pillar(S::Bing, B::Yin), pillar(S::Ding, B::Mao)),
    entry("Wood of the Great Forest", Element::Wood, pillar(S::Wu, B::Chen), pillar(S::Ji, B::Si)),
    entry("Earth on the Roadside", Element::Earth, pillar(S::Geng, B::Wu), pillar(S::Xin, B::Wei)),
    entry("Sword-Edge Gold", Element::Metal, pillar(S::Ren, B::Shen), pillar(S::Gui, B::You)),
    entry("Fire on the Mountain", Element::Fire, pillar(S::Jia, B::Xu), pillar(S::Yi, B::Hai)),
    entry("Water in the Ravine", Element::Water, pillar(S::Bing, B::Zi), pillar(S::Ding, B::Chou)),
    entry("Earth on the City Wall", Element::Earth, pillar(S::Wu, B::Yin), pillar(S::Ji, B::Mao)),
    entry("White Wax Gold", Element::Metal, pillar(S::Geng, B::Chen), pillar(S::Xin, B::Si)),
    entry("Wood of the Willow", Element::Wood, pillar(S::Ren, B::Wu), pillar(S::Gui, B::Wei)),
    entry("Water in the Spring", Element::Water, pillar(S::Jia, B::Shen), pillar(S::Yi, B::You)),
    entry("Earth on the Roof", Element::Earth, pillar(S::Bing, B::Xu), pillar(S::Ding, B::Hai)),
    entry("Fire of the Thunderbolt", Element::Fire, pillar(S::Wu, B::Zi), pillar(S::Ji, B::Chou)),
    entry("Wood of the Pine", Element::Wood, pillar(S::Geng, B::Yin), pillar(S::Xin, B::Mao)),
    entry("Water of the Long River", Element::Water, pillar(S::Ren, B::Chen), pillar(S::Gui, B::Si)),
    entry("Gold in the Sand", Element::Metal, pillar(S::Jia, B::Wu), pillar(S::Yi, B::Wei)),
    entry("Fire Below the Mountain", Element::Fire, pillar(S::Bing, B::Shen), pillar(S::Ding, B::You)),
    entry("Wood of the Plain", Element::Wood, pillar(S::Wu, B::Xu), pillar(S::Ji, B::Hai)),
    entry("Earth on the Wall", Element::Earth, pillar(S::Geng, B::Zi), pillar(S::Xin, B::Chou)),
    entry("Gold of the Foil", Element::Metal, pillar(S::Ren, B::Yin), pillar(S::Gui, B::Mao)),
    entry("Fire of the Lamp", Element::Fire, pillar(S::Jia, B::Chen), pillar(S::Yi, B::Si)),
    entry("Water of the Sky River", Element::Water, pillar(S::Bing, B::Wu), pillar(S::Ding, B::Wei)),
    entry("Earth of the Highway", Element::Earth, pillar(S::Wu, B::Shen), pillar(S::Ji, B::You)),
    entry("Gold of the Hairpin", Element::Metal, pillar(S::Geng, B::Xu), pillar(S::Xin, B::Hai)),
    entry("Wood of the Mulberry", Element::Wood, pillar(S::Ren, B::Zi), pillar(S::Gui, B::Chou)),
    entry("Water of the Great Stream", Element::Water, pillar(S::Jia, B::Yin), pillar(S::Yi, B::Mao)),
    entry("Earth in the Sand", Element::Earth, pillar(S::Bing, B::Chen), pillar(S::Ding, B::Si)),
    entry("Fire in the Sky", Element::Fire, pillar(S::Wu, B::Wu), pillar(S::Ji, B::Wei)),
    entry("Wood of the Pomegranate", Element::Wood, pillar(S::Geng, B::Shen), pillar(S::Xin, B::You)),
    entry("Water of the Great Sea", Element::Water, pillar(S::Ren, B::Xu), pillar(S::Gui, B::Hai)),
];

/// Pillar index built once at process start, never mutated afterwards.
static INDEX: Lazy<HashMap<Pillar, &'static NayinEntry>> = Lazy::new(|| {
    TABLE
        .iter()
        .flat_map(|e| e.pillars.iter().map(move |p| (*p, e)))
        .collect()
});

/// Exact-match NaYin lookup for a pillar.
///
/// A miss is a data-completeness defect in [`TABLE`], not a user error.
pub fn lookup(pillar: Pillar) -> Result<&'static NayinEntry, EngineError> {
    INDEX
        .get(&pillar)
        .copied()
        .ok_or(EngineError::NayinTableGap { pillar })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_all_60_pillars() {
        for index in 0..60 {
            let pillar = Pillar::from_cycle_index(index);
            assert!(
                lookup(pillar).is_ok(),
                "cycle index {} ({}) has no NaYin entry",
                index,
                pillar
            );
        }
    }

    #[test]
    fn test_adjacent_pillars_share_an_entry() {
        for pair in 0..30 {
            let first = lookup(Pillar::from_cycle_index(pair * 2)).unwrap();
            let second = lookup(Pillar::from_cycle_index(pair * 2 + 1)).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_known_entries() {
        let jiazi = lookup(Pillar::from_year(1984)).unwrap();
        assert_eq!(jiazi.name, "Gold in the Sea");
        assert_eq!(jiazi.element, Element::Metal);

        let gengwu = lookup(Pillar::from_year(1990)).unwrap();
        assert_eq!(gengwu.name, "Earth on the Roadside");
        assert_eq!(gengwu.element, Element::Earth);

        let guihai = lookup(Pillar::from_cycle_index(59)).unwrap();
        assert_eq!(guihai.name, "Water of the Great Sea");
        assert_eq!(guihai.element, Element::Water);
    }

    #[test]
    fn test_miss_reports_the_offending_pillar() {
        // Parity-mismatched pairings never occur in the 60-cycle, so the
        // table legitimately omits them; they exercise the error path.
        let bogus = Pillar {
            stem: HeavenlyStem::Jia,
            branch: EarthlyBranch::Chou,
        };
        match lookup(bogus) {
            Err(EngineError::NayinTableGap { pillar }) => assert_eq!(pillar, bogus),
            other => panic!("expected a table gap error, got {:?}", other),
        }
    }
}
