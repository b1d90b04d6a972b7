use super::attributes::Attributes;
use super::kind::NodeKind;
use super::raw::RawNode;
use super::table::TableData;
use crate::error::ConvertError;
use std::path::Path;

/// Index of a node inside its [`Document`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Pre-order position of the node; the root is `0`.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attributes: Attributes,
    id: Option<String>,
    title: Option<String>,
    text: Option<String>,
    lines: Vec<String>,
    level: usize,
    target: Option<String>,
    subtype: Option<String>,
    caption: Option<String>,
    table: Option<TableData>,
}

/// An immutable document tree.
///
/// Nodes live in a flat arena in pre-order; parents are referenced by index so
/// renderers can ask contextual questions ("am I inside a list item?") without
/// owning cycles.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Document {
    /// Build a document from its owned tree form.
    pub fn from_raw(root: RawNode) -> Self {
        let mut nodes = Vec::new();
        push_node(&mut nodes, root, None);
        Document { nodes }
    }

    /// Decode a JSON tree as produced by a host parser.
    pub fn from_json(json: &str) -> Result<Self, ConvertError> {
        let raw: RawNode = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    /// Read and decode a JSON tree file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConvertError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConvertError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn root(&self) -> Node<'_> {
        Node {
            doc: self,
            index: NodeId(0),
        }
    }

    pub fn node(&self, id: NodeId) -> Option<Node<'_>> {
        (id.0 < self.nodes.len()).then_some(Node {
            doc: self,
            index: id,
        })
    }

    /// Explicit, non-empty document title.
    pub fn title(&self) -> Option<&str> {
        self.root().title().filter(|t| !t.trim().is_empty())
    }

    /// Document-level attribute (`idprefix`, `outfilesuffix`, ...).
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.root().attr(key)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn push_node(nodes: &mut Vec<NodeData>, raw: RawNode, parent: Option<NodeId>) -> NodeId {
    let id = NodeId(nodes.len());
    nodes.push(NodeData {
        kind: raw.kind,
        parent,
        children: Vec::with_capacity(raw.children.len()),
        attributes: raw.attributes,
        id: raw.id,
        title: raw.title,
        text: raw.text,
        lines: raw.lines,
        level: raw.level,
        target: raw.target,
        subtype: raw.subtype,
        caption: raw.caption,
        table: raw.table,
    });
    for child in raw.children {
        let child_id = push_node(nodes, child, Some(id));
        nodes[id.0].children.push(child_id);
    }
    id
}

/// Borrowed handle to one node of a [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct Node<'d> {
    doc: &'d Document,
    index: NodeId,
}

impl<'d> Node<'d> {
    fn data(&self) -> &'d NodeData {
        &self.doc.nodes[self.index.0]
    }

    pub fn node_id(&self) -> NodeId {
        self.index
    }

    pub fn document(&self) -> &'d Document {
        self.doc
    }

    pub fn kind(&self) -> &'d NodeKind {
        &self.data().kind
    }

    pub fn attributes(&self) -> &'d Attributes {
        &self.data().attributes
    }

    pub fn attr(&self, key: &str) -> Option<&'d str> {
        self.data().attributes.get(key)
    }

    /// Block style (`source`, `listing`, ...), as set by the parser.
    pub fn style(&self) -> Option<&'d str> {
        self.attr("style")
    }

    pub fn role(&self) -> Option<&'d str> {
        self.data().attributes.non_empty("role")
    }

    /// Identifier, explicit or auto-generated.
    pub fn id(&self) -> Option<&'d str> {
        self.data().id.as_deref()
    }

    pub fn title(&self) -> Option<&'d str> {
        self.data().title.as_deref()
    }

    pub fn text(&self) -> Option<&'d str> {
        self.data().text.as_deref()
    }

    pub fn lines(&self) -> &'d [String] {
        &self.data().lines
    }

    pub fn level(&self) -> usize {
        self.data().level
    }

    pub fn target(&self) -> Option<&'d str> {
        self.data().target.as_deref()
    }

    pub fn subtype(&self) -> Option<&'d str> {
        self.data().subtype.as_deref()
    }

    pub fn caption(&self) -> Option<&'d str> {
        self.data().caption.as_deref()
    }

    pub fn table(&self) -> Option<&'d TableData> {
        self.data().table.as_ref()
    }

    pub fn children(&self) -> impl Iterator<Item = Node<'d>> + 'd {
        let doc = self.doc;
        self.data()
            .children
            .iter()
            .map(move |&index| Node { doc, index })
    }

    pub fn has_children(&self) -> bool {
        !self.data().children.is_empty()
    }

    pub fn parent(&self) -> Option<Node<'d>> {
        self.data().parent.map(|index| Node {
            doc: self.doc,
            index,
        })
    }

    /// Parent, grandparent, ... up to the document root.
    pub fn ancestors(&self) -> impl Iterator<Item = Node<'d>> + 'd {
        std::iter::successors(self.parent(), |node| node.parent())
    }

    pub fn has_ancestor(&self, kind: &NodeKind) -> bool {
        self.ancestors().any(|node| node.kind() == kind)
    }
}
