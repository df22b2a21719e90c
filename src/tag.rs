//! Tag module: the shared class/tag vocabulary for filter trees.
//!
//! This module provides the BerClass, FilterTag, and SubstringTag enums consumed by both
//! the compiler and the decompiler, so the two directions cannot drift out of sync.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Universal tag for an ASN.1 SEQUENCE, used for the substrings value list.
pub const SEQUENCE_TAG: u32 = 16;

/// Universal tag for an ASN.1 OCTET STRING, used for attribute and value payloads.
pub const OCTET_STRING_TAG: u32 = 4;

/// Tag class of a BER element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BerClass {
    Universal,
    Application,
    ContextSpecific,
    Private,
}

/// Context-specific tags identifying the operator of a filter node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterTag {
    And,
    Or,
    Not,
    EqualityMatch,
    Substrings,
    GreaterOrEqual,
    LessOrEqual,
    Present,
    ApproxMatch,
    ExtensibleMatch,
}

impl FilterTag {
    /// Raw tag value as carried on the wire.
    pub fn tag(&self) -> u32 {
        match self {
            FilterTag::And => 0,
            FilterTag::Or => 1,
            FilterTag::Not => 2,
            FilterTag::EqualityMatch => 3,
            FilterTag::Substrings => 4,
            FilterTag::GreaterOrEqual => 5,
            FilterTag::LessOrEqual => 6,
            FilterTag::Present => 7,
            FilterTag::ApproxMatch => 8,
            FilterTag::ExtensibleMatch => 9,
        }
    }

    /// Look up the operator for a raw tag value.
    pub fn from_tag(tag: u32) -> Option<FilterTag> {
        match tag {
            0 => Some(FilterTag::And),
            1 => Some(FilterTag::Or),
            2 => Some(FilterTag::Not),
            3 => Some(FilterTag::EqualityMatch),
            4 => Some(FilterTag::Substrings),
            5 => Some(FilterTag::GreaterOrEqual),
            6 => Some(FilterTag::LessOrEqual),
            7 => Some(FilterTag::Present),
            8 => Some(FilterTag::ApproxMatch),
            9 => Some(FilterTag::ExtensibleMatch),
            _ => None,
        }
    }

    /// Diagnostic label attached to nodes carrying this tag.
    pub fn label(&self) -> &'static str {
        match self {
            FilterTag::And => "and",
            FilterTag::Or => "or",
            FilterTag::Not => "not",
            FilterTag::EqualityMatch => "equalityMatch",
            FilterTag::Substrings => "substrings",
            FilterTag::GreaterOrEqual => "greaterOrEqual",
            FilterTag::LessOrEqual => "lessOrEqual",
            FilterTag::Present => "present",
            FilterTag::ApproxMatch => "approxMatch",
            FilterTag::ExtensibleMatch => "extensibleMatch",
        }
    }

    /// Text operator symbol for the two-child comparison tags, None otherwise.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            FilterTag::EqualityMatch => Some("="),
            FilterTag::GreaterOrEqual => Some(">="),
            FilterTag::LessOrEqual => Some("<="),
            FilterTag::ApproxMatch => Some("~="),
            _ => None,
        }
    }
}

impl fmt::Display for FilterTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tags of the single element inside a substrings sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubstringTag {
    /// Leading fragment, rendered as `value*`.
    Initial,
    /// Embedded fragment, rendered as `*value*`.
    Any,
    /// Trailing fragment, rendered as `*value`.
    Final,
}

impl SubstringTag {
    pub fn tag(&self) -> u32 {
        match self {
            SubstringTag::Initial => 0,
            SubstringTag::Any => 1,
            SubstringTag::Final => 2,
        }
    }

    pub fn from_tag(tag: u32) -> Option<SubstringTag> {
        match tag {
            0 => Some(SubstringTag::Initial),
            1 => Some(SubstringTag::Any),
            2 => Some(SubstringTag::Final),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubstringTag::Initial => "initial",
            SubstringTag::Any => "any",
            SubstringTag::Final => "final",
        }
    }
}

impl fmt::Display for SubstringTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
