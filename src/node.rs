//! Node module: the tagged tree element produced and consumed by the translators.
//!
//! This module provides the BerNode type, an append-order-preserving building block
//! for filter trees. A node is either primitive (byte payload) or constructed
//! (ordered children), never both.

use crate::tag::BerClass;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
enum NodeContent {
    Primitive(Vec<u8>),
    Constructed(Vec<BerNode>),
}

/// A tagged tree element. Trees are built append-only and owned by the caller;
/// nothing is shared or pooled across translation calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BerNode {
    class: BerClass,
    tag: u32,
    label: String,
    content: NodeContent,
}

impl BerNode {
    /// Create a primitive node carrying a byte payload.
    pub fn primitive(
        class: BerClass,
        tag: u32,
        payload: impl Into<Vec<u8>>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            class,
            tag,
            label: label.into(),
            content: NodeContent::Primitive(payload.into()),
        }
    }

    /// Create a constructed node with an empty child list.
    pub fn constructed(class: BerClass, tag: u32, label: impl Into<String>) -> Self {
        Self {
            class,
            tag,
            label: label.into(),
            content: NodeContent::Constructed(Vec::new()),
        }
    }

    /// Append a child, preserving insertion order. Child order is significant
    /// for round-tripping. Only meaningful on constructed nodes.
    pub fn append_child(&mut self, child: BerNode) {
        match &mut self.content {
            NodeContent::Constructed(children) => children.push(child),
            NodeContent::Primitive(_) => {
                debug_assert!(false, "append_child on a primitive node");
            }
        }
    }

    pub fn class(&self) -> BerClass {
        self.class
    }

    pub fn tag(&self) -> u32 {
        self.tag
    }

    /// Diagnostic label; never interpreted by either translation direction.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self.content, NodeContent::Primitive(_))
    }

    pub fn is_constructed(&self) -> bool {
        matches!(self.content, NodeContent::Constructed(_))
    }

    /// Byte payload of a primitive node.
    pub fn payload(&self) -> Option<&[u8]> {
        match &self.content {
            NodeContent::Primitive(payload) => Some(payload),
            NodeContent::Constructed(_) => None,
        }
    }

    /// Payload of a primitive node viewed as UTF-8 text.
    pub fn payload_str(&self) -> Option<&str> {
        self.payload().and_then(|p| std::str::from_utf8(p).ok())
    }

    /// Ordered children of a constructed node.
    pub fn children(&self) -> Option<&[BerNode]> {
        match &self.content {
            NodeContent::Constructed(children) => Some(children),
            NodeContent::Primitive(_) => None,
        }
    }

    /// Child at `index` of a constructed node, if present.
    pub fn child(&self, index: usize) -> Option<&BerNode> {
        self.children().and_then(|c| c.get(index))
    }
}

impl fmt::Display for BerNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.content {
            NodeContent::Primitive(payload) => write!(
                f,
                "{:?}/{} ({}): {} bytes",
                self.class,
                self.tag,
                self.label,
                payload.len()
            ),
            NodeContent::Constructed(children) => write!(
                f,
                "{:?}/{} ({}): {} children",
                self.class,
                self.tag,
                self.label,
                children.len()
            ),
        }
    }
}
