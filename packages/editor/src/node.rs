//! # Layout Nodes
//!
//! The typed elements of the layout tree.
//!
//! A node's `props` are a tagged variant with a fixed field schema per node
//! type rather than a free-form map. The tag is the node's `type` and is not
//! serialized with the props, so on the wire `props` stays a plain JSON
//! object; deserialization decodes the object against the schema selected by
//! the `type` field.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};

/// Stable string identity of a node.
pub type NodeId = String;

/// Kind of layout element. Only `Container` may own children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Button,
    Text,
    Image,
    List,
    Divider,
    Container,
}

impl NodeType {
    /// Whether nodes of this type may have children.
    pub fn is_container(&self) -> bool {
        matches!(self, NodeType::Container)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ButtonProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TextProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ImageProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ListProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DividerProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContainerProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

/// Per-type node properties, exhaustive over [`NodeType`].
///
/// Every field is optional; the presentation layer supplies defaults for
/// absent values. Partial updates reuse the same variants: a patch merges its
/// `Some` fields over the node's current props.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NodeProps {
    Button(ButtonProps),
    Text(TextProps),
    Image(ImageProps),
    List(ListProps),
    Divider(DividerProps),
    Container(ContainerProps),
}

impl NodeProps {
    /// Empty props for the given node type (serializes as `{}`).
    pub fn empty(node_type: NodeType) -> Self {
        match node_type {
            NodeType::Button => NodeProps::Button(ButtonProps::default()),
            NodeType::Text => NodeProps::Text(TextProps::default()),
            NodeType::Image => NodeProps::Image(ImageProps::default()),
            NodeType::List => NodeProps::List(ListProps::default()),
            NodeType::Divider => NodeProps::Divider(DividerProps::default()),
            NodeType::Container => NodeProps::Container(ContainerProps::default()),
        }
    }

    /// The node type this variant belongs to.
    pub fn node_type(&self) -> NodeType {
        match self {
            NodeProps::Button(_) => NodeType::Button,
            NodeProps::Text(_) => NodeType::Text,
            NodeProps::Image(_) => NodeType::Image,
            NodeProps::List(_) => NodeType::List,
            NodeProps::Divider(_) => NodeType::Divider,
            NodeProps::Container(_) => NodeType::Container,
        }
    }

    /// Decode a raw JSON object against the schema for `node_type`.
    pub fn from_value(
        node_type: NodeType,
        value: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        // A missing props field arrives as Null; treat it as the empty object.
        let value = if value.is_null() {
            serde_json::Value::Object(serde_json::Map::new())
        } else {
            value
        };

        Ok(match node_type {
            NodeType::Button => NodeProps::Button(serde_json::from_value(value)?),
            NodeType::Text => NodeProps::Text(serde_json::from_value(value)?),
            NodeType::Image => NodeProps::Image(serde_json::from_value(value)?),
            NodeType::List => NodeProps::List(serde_json::from_value(value)?),
            NodeType::Divider => NodeProps::Divider(serde_json::from_value(value)?),
            NodeType::Container => NodeProps::Container(serde_json::from_value(value)?),
        })
    }

    /// Shallow merge: every `Some` field of `patch` overwrites the current
    /// value. Returns `false` if the patch variant does not match.
    #[must_use]
    pub fn merge(&mut self, patch: NodeProps) -> bool {
        fn over<T>(slot: &mut Option<T>, patch: Option<T>) {
            if patch.is_some() {
                *slot = patch;
            }
        }

        match (self, patch) {
            (NodeProps::Button(cur), NodeProps::Button(p)) => {
                over(&mut cur.text, p.text);
                over(&mut cur.variant, p.variant);
                over(&mut cur.color, p.color);
            }
            (NodeProps::Text(cur), NodeProps::Text(p)) => {
                over(&mut cur.text, p.text);
                over(&mut cur.variant, p.variant);
                over(&mut cur.color, p.color);
            }
            (NodeProps::Image(cur), NodeProps::Image(p)) => {
                over(&mut cur.src, p.src);
                over(&mut cur.alt, p.alt);
                over(&mut cur.width, p.width);
                over(&mut cur.height, p.height);
            }
            (NodeProps::List(cur), NodeProps::List(p)) => {
                over(&mut cur.items, p.items);
            }
            (NodeProps::Divider(cur), NodeProps::Divider(p)) => {
                over(&mut cur.orientation, p.orientation);
                over(&mut cur.variant, p.variant);
                over(&mut cur.color, p.color);
            }
            (NodeProps::Container(cur), NodeProps::Container(p)) => {
                over(&mut cur.max_width, p.max_width);
                over(&mut cur.padding, p.padding);
                over(&mut cur.background_color, p.background_color);
            }
            _ => return false,
        }
        true
    }
}

/// A single element of the layout tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub props: NodeProps,
    pub parent_id: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl Node {
    /// New detached root-level node with empty props.
    pub fn new(id: impl Into<NodeId>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            node_type,
            props: NodeProps::empty(node_type),
            parent_id: None,
            children: Vec::new(),
        }
    }

    /// Replace the props (must match the node type to be meaningful).
    pub fn with_props(mut self, props: NodeProps) -> Self {
        self.props = props;
        self
    }
}

// Deserialized by hand: the props object has no discriminant of its own, so
// it must be decoded against the schema named by the sibling `type` field.
impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct RawNode {
            id: NodeId,
            #[serde(rename = "type")]
            node_type: NodeType,
            #[serde(default)]
            props: serde_json::Value,
            #[serde(default)]
            parent_id: Option<NodeId>,
            #[serde(default)]
            children: Vec<NodeId>,
        }

        let raw = RawNode::deserialize(deserializer)?;
        let props = NodeProps::from_value(raw.node_type, raw.props).map_err(|e| {
            D::Error::custom(format!("invalid props for node `{}`: {}", raw.id, e))
        })?;

        Ok(Node {
            id: raw.id,
            node_type: raw.node_type,
            props,
            parent_id: raw.parent_id,
            children: raw.children,
        })
    }
}
