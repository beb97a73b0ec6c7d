//! # NER Label Set
//!
//! Defines the tag set for sequence labeling of e-commerce posts.
//! Uses the BIO (Begin-Inside-Outside) tagging scheme over three entity
//! types: product, price and location.

use std::fmt;

/// BIO tags for labeling tokens in Telegram e-commerce posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NerTag {
    /// Outside (irrelevant token). Always id 0.
    Outside,
    BeginProduct,
    InsideProduct,
    BeginPrice,
    InsidePrice,
    BeginLoc,
    InsideLoc,
}

impl NerTag {
    /// Total number of distinct tags.
    pub const NUM_TAGS: usize = 7;

    /// Get all possible tags in id order.
    pub fn all_tags() -> &'static [NerTag] {
        &[
            NerTag::Outside,
            NerTag::BeginProduct,
            NerTag::InsideProduct,
            NerTag::BeginPrice,
            NerTag::InsidePrice,
            NerTag::BeginLoc,
            NerTag::InsideLoc,
        ]
    }

    /// Get the integer id used in encoded datasets.
    ///
    /// The mapping is process-wide static configuration and never changes:
    /// the non-entity tag is 0, entities follow in B/I pairs.
    pub fn index(&self) -> usize {
        match self {
            NerTag::Outside => 0,
            NerTag::BeginProduct => 1,
            NerTag::InsideProduct => 2,
            NerTag::BeginPrice => 3,
            NerTag::InsidePrice => 4,
            NerTag::BeginLoc => 5,
            NerTag::InsideLoc => 6,
        }
    }

    /// Get tag from integer id.
    pub fn from_index(idx: usize) -> Option<Self> {
        match idx {
            0 => Some(NerTag::Outside),
            1 => Some(NerTag::BeginProduct),
            2 => Some(NerTag::InsideProduct),
            3 => Some(NerTag::BeginPrice),
            4 => Some(NerTag::InsidePrice),
            5 => Some(NerTag::BeginLoc),
            6 => Some(NerTag::InsideLoc),
            _ => None,
        }
    }

    /// Parse a tag from its CoNLL string form (`"O"`, `"B-PRODUCT"`, ...).
    pub fn from_tag_str(s: &str) -> Option<Self> {
        match s {
            "O" => Some(NerTag::Outside),
            "B-PRODUCT" => Some(NerTag::BeginProduct),
            "I-PRODUCT" => Some(NerTag::InsideProduct),
            "B-PRICE" => Some(NerTag::BeginPrice),
            "I-PRICE" => Some(NerTag::InsidePrice),
            "B-LOC" => Some(NerTag::BeginLoc),
            "I-LOC" => Some(NerTag::InsideLoc),
            _ => None,
        }
    }

    /// Check if this is a "Begin" tag.
    pub fn is_begin(&self) -> bool {
        matches!(
            self,
            NerTag::BeginProduct | NerTag::BeginPrice | NerTag::BeginLoc
        )
    }

    /// Check if this is an "Inside" tag.
    pub fn is_inside(&self) -> bool {
        matches!(
            self,
            NerTag::InsideProduct | NerTag::InsidePrice | NerTag::InsideLoc
        )
    }
}

impl fmt::Display for NerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NerTag::Outside => write!(f, "O"),
            NerTag::BeginProduct => write!(f, "B-PRODUCT"),
            NerTag::InsideProduct => write!(f, "I-PRODUCT"),
            NerTag::BeginPrice => write!(f, "B-PRICE"),
            NerTag::InsidePrice => write!(f, "I-PRICE"),
            NerTag::BeginLoc => write!(f, "B-LOC"),
            NerTag::InsideLoc => write!(f, "I-LOC"),
        }
    }
}
