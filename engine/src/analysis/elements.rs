//! Five-element relation
//!
//! Wood feeds Fire, Fire makes Earth, Earth bears Metal, Metal carries
//! Water, Water nourishes Wood; overcoming skips one step in that cycle.

use serde::Serialize;
use std::fmt;

use crate::types::Element;

impl Element {
    /// The element this one generates.
    pub fn generates(self) -> Element {
        match self {
            Element::Wood => Element::Fire,
            Element::Fire => Element::Earth,
            Element::Earth => Element::Metal,
            Element::Metal => Element::Water,
            Element::Water => Element::Wood,
        }
    }

    /// The element this one overcomes.
    pub fn overcomes(self) -> Element {
        match self {
            Element::Wood => Element::Earth,
            Element::Earth => Element::Water,
            Element::Water => Element::Fire,
            Element::Fire => Element::Metal,
            Element::Metal => Element::Wood,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ElementRelationKind {
    Generates,
    Overcomes,
    Balances,
}

impl fmt::Display for ElementRelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementRelationKind::Generates => "Generates",
            ElementRelationKind::Overcomes => "Overcomes",
            ElementRelationKind::Balances => "Balances",
        };
        write!(f, "{}", name)
    }
}

/// Relation between two elements with its canonical flow direction.
///
/// `flow` always points from the source element to the target of the
/// matched rule, whichever argument position the source came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementRelation {
    pub kind: ElementRelationKind,
    pub flow: Option<(Element, Element)>,
}

impl ElementRelation {
    fn directed(kind: ElementRelationKind, source: Element, target: Element) -> Self {
        ElementRelation {
            kind,
            flow: Some((source, target)),
        }
    }
}

impl fmt::Display for ElementRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.flow {
            Some((source, target)) => write!(f, "{} ({} → {})", self.kind, source, target),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Classify the relation between two elements.
///
/// Rules are tried in fixed order: e1 generates e2, e1 overcomes e2, e2
/// generates e1, e2 overcomes e1. No element generates or overcomes
/// itself, so equal elements always balance.
pub fn element_relation(e1: Element, e2: Element) -> ElementRelation {
    if e1.generates() == e2 {
        ElementRelation::directed(ElementRelationKind::Generates, e1, e2)
    } else if e1.overcomes() == e2 {
        ElementRelation::directed(ElementRelationKind::Overcomes, e1, e2)
    } else if e2.generates() == e1 {
        ElementRelation::directed(ElementRelationKind::Generates, e2, e1)
    } else if e2.overcomes() == e1 {
        ElementRelation::directed(ElementRelationKind::Overcomes, e2, e1)
    } else {
        ElementRelation {
            kind: ElementRelationKind::Balances,
            flow: None,
        }
    }
}
