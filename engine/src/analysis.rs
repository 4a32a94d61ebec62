//! Analysis passes - each maps derived attributes to one report facet

pub mod elements;
pub mod forecast;
pub mod relations;
pub mod scoring;

pub use elements::{element_relation, ElementRelation, ElementRelationKind};
pub use relations::{relations_between, ZodiacRelation};
pub use scoring::{nayin_names_match, score};
