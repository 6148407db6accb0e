//! Declaration tree built in document order.
//!
//! Nodes live in an arena owned by the tree; `parent` is an index used only
//! for upward traversal while composing qualified names.

pub mod naming;

pub use naming::{LegacyNaming, NamingConvention, SymmetricNaming};

use dotnetdomain_api::{ConstructKind, Signature};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct ObjectNode {
    kind: ConstructKind,
    signature: Signature,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl ObjectNode {
    pub fn kind(&self) -> ConstructKind {
        self.kind
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

#[derive(Debug, Clone)]
pub struct DeclarationTree {
    nodes: Vec<ObjectNode>,
    roots: Vec<NodeId>,
    scope: Vec<NodeId>,
    naming: Arc<dyn NamingConvention>,
}

impl Default for DeclarationTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclarationTree {
    pub fn new() -> Self {
        Self::with_naming(Arc::new(LegacyNaming))
    }

    pub fn with_naming(naming: Arc<dyn NamingConvention>) -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            scope: Vec::new(),
            naming,
        }
    }

    /// Attach a node under the innermost open node (or as a root) and open it.
    pub fn open(&mut self, kind: ConstructKind, signature: Signature) -> NodeId {
        let id = NodeId(self.nodes.len());
        let parent = self.current();
        self.nodes.push(ObjectNode {
            kind,
            signature,
            parent,
            children: Vec::new(),
        });
        match parent {
            Some(parent) => self.nodes[parent.0].children.push(id),
            None => self.roots.push(id),
        }
        self.scope.push(id);
        id
    }

    /// End the innermost open scope, returning the node that was closed.
    pub fn close(&mut self) -> Option<NodeId> {
        self.scope.pop()
    }

    pub fn current(&self) -> Option<NodeId> {
        self.scope.last().copied()
    }

    /// Number of currently open scopes.
    pub fn depth(&self) -> usize {
        self.scope.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&ObjectNode> {
        self.nodes.get(id.0)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|node| node.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|node| node.children()).unwrap_or_default()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in the order they were opened.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &ObjectNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    /// Registrable name: contributing ancestors' names, root first, then the
    /// node's own full name.
    pub fn fully_qualified_name(&self, id: NodeId) -> Option<String> {
        let node = self.node(id)?;
        let mut segments = vec![node.signature.full_name()];

        let mut current = node.parent;
        while let Some(ancestor_id) = current {
            let Some(ancestor) = self.node(ancestor_id) else {
                break;
            };
            if self.naming.contributes(ancestor.kind) {
                segments.push(ancestor.signature.full_name());
            }
            current = ancestor.parent;
        }

        segments.reverse();
        Some(self.naming.render(&segments))
    }
}
