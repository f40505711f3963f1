use std::collections::BTreeMap;

use crate::{
    dom::node::{Element, Node},
    foundation::error::{FolioError, FolioResult},
};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeId(pub u32);

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Element {
        tag: String,
        id: Option<String>,
        classes: Vec<String>,
        attrs: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocNode {
    pub parent: Option<NodeId>,
    pub kind: NodeKind,
    pub children: Vec<NodeId>,
}

/// Flattened element tree with stable [`NodeId`]s (document order).
///
/// Every lookup returns `Option` or an empty list when nothing matches.
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<DocNode>,
    ids: BTreeMap<String, NodeId>,
}

impl Document {
    pub fn from_root(root: Node) -> FolioResult<Self> {
        let mut doc = Self {
            nodes: Vec::new(),
            ids: BTreeMap::new(),
        };
        doc.push(root, None)?;
        Ok(doc)
    }

    fn push(&mut self, node: Node, parent: Option<NodeId>) -> FolioResult<NodeId> {
        let idx = NodeId(
            u32::try_from(self.nodes.len())
                .map_err(|_| FolioError::validation("document has too many nodes"))?,
        );
        match node {
            Node::Text(t) => {
                self.nodes.push(DocNode {
                    parent,
                    kind: NodeKind::Text(t),
                    children: Vec::new(),
                });
            }
            Node::Element(Element {
                tag,
                id,
                classes,
                attrs,
                children,
            }) => {
                if let Some(id) = &id
                    && self.ids.insert(id.clone(), idx).is_some()
                {
                    return Err(FolioError::validation(format!(
                        "duplicate element id '{id}'"
                    )));
                }
                self.nodes.push(DocNode {
                    parent,
                    kind: NodeKind::Element {
                        tag,
                        id,
                        classes,
                        attrs,
                    },
                    children: Vec::new(),
                });
                for child in children {
                    let cid = self.push(child, Some(idx))?;
                    self.nodes[idx.0 as usize].children.push(cid);
                }
            }
        }
        Ok(idx)
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&DocNode> {
        self.nodes.get(id.0 as usize)
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.node(id)?.kind {
            NodeKind::Element { tag, .. } => Some(tag.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    pub fn element_id(&self, id: NodeId) -> Option<&str> {
        match &self.node(id)?.kind {
            NodeKind::Element { id: eid, .. } => eid.as_deref(),
            NodeKind::Text(_) => None,
        }
    }

    pub fn classes(&self, id: NodeId) -> &[String] {
        match self.node(id).map(|n| &n.kind) {
            Some(NodeKind::Element { classes, .. }) => classes.as_slice(),
            _ => &[],
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.classes(id).iter().any(|c| c == class)
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.node(id)?.kind {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    /// Strict descendants of `scope` in document order.
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    pub fn query_class_within(&self, scope: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&id| self.has_class(id, class))
            .collect()
    }

    pub fn query_tag_within(&self, scope: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&id| self.tag(id) == Some(tag))
            .collect()
    }

    /// Concatenated text of a subtree.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        if let Some(NodeKind::Text(t)) = self.node(id).map(|n| &n.kind) {
            out.push_str(t);
        }
        for d in self.descendants(id) {
            if let Some(NodeKind::Text(t)) = self.node(d).map(|n| &n.kind) {
                out.push_str(t);
            }
        }
        out
    }
}

/// How a reveal request names its targets; resolved against a [`Document`] at mount.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "by", rename_all = "snake_case")]
pub enum Selector {
    Id { id: String },
    ClassWithin { scope: String, class: String },
    TagWithin { scope: String, tag: String },
}

impl Selector {
    pub fn id(id: &str) -> Self {
        Self::Id { id: id.to_string() }
    }

    pub fn class_within(scope: &str, class: &str) -> Self {
        Self::ClassWithin {
            scope: scope.to_string(),
            class: class.to_string(),
        }
    }

    pub fn tag_within(scope: &str, tag: &str) -> Self {
        Self::TagWithin {
            scope: scope.to_string(),
            tag: tag.to_string(),
        }
    }

    /// Matching nodes in document order; empty when the scope or target is absent.
    pub fn resolve(&self, doc: &Document) -> Vec<NodeId> {
        match self {
            Self::Id { id } => doc.get_element_by_id(id).into_iter().collect(),
            Self::ClassWithin { scope, class } => doc
                .get_element_by_id(scope)
                .map(|s| doc.query_class_within(s, class))
                .unwrap_or_default(),
            Self::TagWithin { scope, tag } => doc
                .get_element_by_id(scope)
                .map(|s| doc.query_tag_within(s, tag))
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dom/document.rs"]
mod tests;
