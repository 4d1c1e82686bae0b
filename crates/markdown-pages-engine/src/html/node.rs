use crate::error::NodeError;

/// HTML attributes in insertion order.
///
/// Values are written verbatim between double quotes; no entity escaping
/// is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing an existing value in place so order is kept.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Writes ` key="value"` for each attribute, each with a leading space.
    pub fn write_html(&self, out: &mut String) {
        for (key, value) in &self.0 {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

/// A node with no children: raw text, or text wrapped in a single tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    tag: Option<String>,
    text: String,
    attributes: Attributes,
}

impl LeafNode {
    /// Untagged text, serialized verbatim.
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            tag: None,
            text: text.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn new(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            text: text.into(),
            attributes: Attributes::new(),
        }
    }

    /// Builds a leaf, rejecting attributes on an untagged leaf.
    pub fn try_new(
        tag: Option<String>,
        text: impl Into<String>,
        attributes: Attributes,
    ) -> Result<Self, NodeError> {
        let text = text.into();
        if tag.is_none() && !attributes.is_empty() {
            return Err(NodeError::UntaggedAttributes { text });
        }
        Ok(Self {
            tag,
            text,
            attributes,
        })
    }

    pub fn with_attributes(
        tag: impl Into<String>,
        text: impl Into<String>,
        attributes: Attributes,
    ) -> Self {
        Self {
            tag: Some(tag.into()),
            text: text.into(),
            attributes,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn write_html(&self, out: &mut String) {
        match &self.tag {
            None => out.push_str(&self.text),
            Some(tag) => {
                write_open(out, tag, &self.attributes);
                out.push_str(&self.text);
                write_close(out, tag);
            }
        }
    }
}

/// A tagged node owning an ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerNode {
    tag: String,
    attributes: Attributes,
    children: Vec<HtmlNode>,
}

impl ContainerNode {
    /// Creates a container without attributes. An empty tag is rejected.
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Result<Self, NodeError> {
        Self::builder().tag(tag).children(children).build()
    }

    pub fn builder() -> ContainerBuilder {
        ContainerBuilder::default()
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn children(&self) -> &[HtmlNode] {
        &self.children
    }

    fn write_html(&self, out: &mut String) {
        write_open(out, &self.tag, &self.attributes);
        for child in &self.children {
            child.write_html(out);
        }
        write_close(out, &self.tag);
    }
}

/// Step-by-step construction of a [`ContainerNode`].
///
/// Both the tag and the children list must be set before [`build`](Self::build);
/// an explicitly empty children list is fine.
#[derive(Debug, Default)]
pub struct ContainerBuilder {
    tag: Option<String>,
    attributes: Attributes,
    children: Option<Vec<HtmlNode>>,
}

impl ContainerBuilder {
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn children(mut self, children: Vec<HtmlNode>) -> Self {
        self.children = Some(children);
        self
    }

    /// Appends one child, starting the children list if needed.
    pub fn child(mut self, child: impl Into<HtmlNode>) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child.into());
        self
    }

    pub fn build(self) -> Result<ContainerNode, NodeError> {
        let tag = match self.tag {
            Some(tag) if !tag.is_empty() => tag,
            _ => return Err(NodeError::MissingTag),
        };
        let children = self.children.ok_or(NodeError::MissingChildren)?;
        Ok(ContainerNode {
            tag,
            attributes: self.attributes,
            children,
        })
    }
}

/// A renderable HTML node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Container(ContainerNode),
}

impl HtmlNode {
    /// Serializes the node depth-first into an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            HtmlNode::Leaf(leaf) => leaf.write_html(out),
            HtmlNode::Container(container) => container.write_html(out),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag(),
            HtmlNode::Container(container) => Some(container.tag()),
        }
    }

    /// Children of a container; a leaf has none.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Container(container) => container.children(),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ContainerNode> for HtmlNode {
    fn from(container: ContainerNode) -> Self {
        HtmlNode::Container(container)
    }
}

fn write_open(out: &mut String, tag: &str, attributes: &Attributes) {
    out.push('<');
    out.push_str(tag);
    attributes.write_html(out);
    out.push('>');
}

fn write_close(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
