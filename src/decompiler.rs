//! Decompiler module: renders a tagged BER element tree back into filter text.
//!
//! This module provides the FilterDecompiler, a pure recursive tree walk keyed on
//! the shared tag vocabulary. It is the left inverse of the compiler for every
//! filter expressible in the supported grammar.

use crate::error::DecompileError;
use crate::node::BerNode;
use crate::tag::{FilterTag, SubstringTag};
use std::panic::{self, AssertUnwindSafe};

/// Renders filter trees back into text for display and logging.
pub struct FilterDecompiler;

impl FilterDecompiler {
    /// Decompile a filter tree into filter text.
    ///
    /// Trees carrying an unsupported tag yield [`DecompileError::UnsupportedFilterKind`];
    /// structurally malformed trees and any internal fault yield
    /// [`DecompileError::FilterDecompileError`] instead of unwinding into the caller.
    pub fn decompile(node: &BerNode) -> Result<String, DecompileError> {
        log::trace!("decompiling filter tree: {node}");
        match panic::catch_unwind(AssertUnwindSafe(|| Self::render(node))) {
            Ok(result) => result,
            Err(_) => Err(Self::malformed("internal decompiler fault")),
        }
    }

    fn render(node: &BerNode) -> Result<String, DecompileError> {
        let tag = FilterTag::from_tag(node.tag())
            .ok_or(DecompileError::UnsupportedFilterKind { tag: node.tag() })?;
        let mut out = String::from("(");
        match tag {
            FilterTag::And | FilterTag::Or => {
                out.push(if tag == FilterTag::And { '&' } else { '|' });
                for child in Self::children(node)? {
                    out.push_str(&Self::render(child)?);
                }
            }
            FilterTag::Not => {
                out.push('!');
                out.push_str(&Self::render(Self::child(node, 0)?)?);
            }
            FilterTag::EqualityMatch
            | FilterTag::GreaterOrEqual
            | FilterTag::LessOrEqual
            | FilterTag::ApproxMatch => {
                let symbol = tag
                    .symbol()
                    .ok_or_else(|| Self::malformed("comparison tag without operator symbol"))?;
                out.push_str(Self::payload_text(Self::child(node, 0)?)?);
                out.push_str(symbol);
                out.push_str(Self::payload_text(Self::child(node, 1)?)?);
            }
            FilterTag::Present => {
                out.push_str(Self::payload_text(Self::child(node, 0)?)?);
                out.push_str("=*");
            }
            FilterTag::Substrings => {
                out.push_str(Self::payload_text(Self::child(node, 0)?)?);
                out.push('=');
                let sequence = Self::child(node, 1)?;
                let part = Self::child(sequence, 0)?;
                let kind = SubstringTag::from_tag(part.tag())
                    .ok_or_else(|| Self::malformed("unknown substring element tag"))?;
                let value = Self::payload_text(part)?;
                match kind {
                    SubstringTag::Initial => {
                        out.push_str(value);
                        out.push('*');
                    }
                    SubstringTag::Any => {
                        out.push('*');
                        out.push_str(value);
                        out.push('*');
                    }
                    SubstringTag::Final => {
                        out.push('*');
                        out.push_str(value);
                    }
                }
            }
            FilterTag::ExtensibleMatch => {
                return Err(DecompileError::UnsupportedFilterKind { tag: node.tag() })
            }
        }
        out.push(')');
        Ok(out)
    }

    fn children(node: &BerNode) -> Result<&[BerNode], DecompileError> {
        node.children()
            .ok_or_else(|| Self::malformed("expected a constructed node"))
    }

    fn child(node: &BerNode, index: usize) -> Result<&BerNode, DecompileError> {
        node.child(index)
            .ok_or_else(|| Self::malformed(format!("missing child {index} under '{}'", node.label())))
    }

    fn payload_text(node: &BerNode) -> Result<&str, DecompileError> {
        node.payload_str()
            .ok_or_else(|| Self::malformed("expected a primitive text payload"))
    }

    fn malformed(reason: impl Into<String>) -> DecompileError {
        DecompileError::FilterDecompileError {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::{BerClass, OCTET_STRING_TAG};

    fn equality(attribute: &str, value: &str) -> BerNode {
        let tag = FilterTag::EqualityMatch;
        let mut node = BerNode::constructed(BerClass::ContextSpecific, tag.tag(), tag.label());
        node.append_child(BerNode::primitive(
            BerClass::Universal,
            OCTET_STRING_TAG,
            attribute.as_bytes().to_vec(),
            "attributeDesc",
        ));
        node.append_child(BerNode::primitive(
            BerClass::Universal,
            OCTET_STRING_TAG,
            value.as_bytes().to_vec(),
            "assertionValue",
        ));
        node
    }

    #[test]
    fn test_decompile_equality() {
        assert_eq!(
            FilterDecompiler::decompile(&equality("cn", "John")).unwrap(),
            "(cn=John)"
        );
    }

    #[test]
    fn test_decompile_and_keeps_child_order() {
        let tag = FilterTag::And;
        let mut node = BerNode::constructed(BerClass::ContextSpecific, tag.tag(), tag.label());
        node.append_child(equality("a", "1"));
        node.append_child(equality("b", "2"));
        assert_eq!(
            FilterDecompiler::decompile(&node).unwrap(),
            "(&(a=1)(b=2))"
        );
    }

    #[test]
    fn test_decompile_not() {
        let tag = FilterTag::Not;
        let mut node = BerNode::constructed(BerClass::ContextSpecific, tag.tag(), tag.label());
        node.append_child(equality("a", "1"));
        assert_eq!(FilterDecompiler::decompile(&node).unwrap(), "(!(a=1))");
    }

    #[test]
    fn test_decompile_extensible_match_is_unsupported() {
        let node = BerNode::constructed(
            BerClass::ContextSpecific,
            FilterTag::ExtensibleMatch.tag(),
            "extensibleMatch",
        );
        assert_eq!(
            FilterDecompiler::decompile(&node),
            Err(DecompileError::UnsupportedFilterKind { tag: 9 })
        );
    }

    #[test]
    fn test_decompile_unknown_tag_is_unsupported() {
        let node = BerNode::constructed(BerClass::ContextSpecific, 42, "mystery");
        assert_eq!(
            FilterDecompiler::decompile(&node),
            Err(DecompileError::UnsupportedFilterKind { tag: 42 })
        );
    }

    #[test]
    fn test_decompile_missing_children_is_decompile_error() {
        // A Not node with no child at all.
        let node = BerNode::constructed(
            BerClass::ContextSpecific,
            FilterTag::Not.tag(),
            "not",
        );
        assert!(matches!(
            FilterDecompiler::decompile(&node),
            Err(DecompileError::FilterDecompileError { .. })
        ));
    }

    #[test]
    fn test_decompile_primitive_operator_node_is_decompile_error() {
        // An And node that is primitive instead of constructed.
        let node = BerNode::primitive(
            BerClass::ContextSpecific,
            FilterTag::And.tag(),
            b"oops".to_vec(),
            "and",
        );
        assert!(matches!(
            FilterDecompiler::decompile(&node),
            Err(DecompileError::FilterDecompileError { .. })
        ));
    }

    #[test]
    fn test_decompile_non_utf8_payload_is_decompile_error() {
        let tag = FilterTag::EqualityMatch;
        let mut node = BerNode::constructed(BerClass::ContextSpecific, tag.tag(), tag.label());
        node.append_child(BerNode::primitive(
            BerClass::Universal,
            OCTET_STRING_TAG,
            vec![0xff, 0xfe],
            "attributeDesc",
        ));
        node.append_child(BerNode::primitive(
            BerClass::Universal,
            OCTET_STRING_TAG,
            b"x".to_vec(),
            "assertionValue",
        ));
        assert!(matches!(
            FilterDecompiler::decompile(&node),
            Err(DecompileError::FilterDecompileError { .. })
        ));
    }
}
