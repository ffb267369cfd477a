//! Dotted field paths and copy-on-write access into widget records.
//!
//! Every record in a widget is held behind an [`Arc`]. Writing a leaf rebuilds
//! only the records on the way from the root to that leaf; every sibling
//! record keeps pointing at the same allocation as before.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Field path errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("Empty field path")]
    Empty,
    #[error("Empty segment in field path: {0}")]
    EmptySegment(String),
    #[error("Unknown field `{segment}` in path {path}")]
    UnknownSegment { path: String, segment: String },
    #[error("Path {path} continues past leaf field `{segment}`")]
    ThroughLeaf { path: String, segment: String },
    #[error("Path {0} names a record, not a leaf field")]
    NotALeaf(String),
    #[error("Field {0} is read-only")]
    ReadOnly(String),
    #[error("Invalid value {value:?} for field {path}")]
    InvalidValue { path: String, value: String },
}

impl PathError {
    /// Unknown segment at `depth` of `path`.
    pub fn unknown(path: &FieldPath, depth: usize) -> Self {
        PathError::UnknownSegment {
            path: path.to_string(),
            segment: path.segment(depth).unwrap_or_default().to_string(),
        }
    }

    /// Path that keeps going after reaching a leaf at `depth - 1`.
    pub fn through_leaf(path: &FieldPath, depth: usize) -> Self {
        PathError::ThroughLeaf {
            path: path.to_string(),
            segment: path.segment(depth.saturating_sub(1)).unwrap_or_default().to_string(),
        }
    }
}

/// A validated dotted path such as `props.styling.fontSize`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse a dotted path. Empty paths and empty segments are rejected.
    pub fn parse(path: &str) -> Result<Self, PathError> {
        if path.is_empty() {
            return Err(PathError::Empty);
        }
        let segments: Vec<String> = path.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(PathError::EmptySegment(path.to_string()));
        }
        Ok(Self { segments })
    }

    /// The empty path, used as the prefix when enumerating leaves.
    pub(crate) fn root() -> Self {
        Self::default()
    }

    /// This path extended by one segment.
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Self { segments }
    }

    /// Segment at `depth`, if the path is that long.
    pub fn segment(&self, depth: usize) -> Option<&str> {
        self.segments.get(depth).map(String::as_str)
    }

    /// Iterate over the segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Last segment (the leaf name).
    pub fn leaf(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl FromStr for FieldPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

/// A node of a widget's field tree: either a record of named children or a leaf.
///
/// `depth` is the index of the segment this node should consume next; a node
/// reached with `depth == path.len()` is the target of the access.
pub trait Node: Clone {
    /// Read the leaf at `path`, or `None` if any segment is missing or the
    /// path ends on a record.
    fn read_at(&self, path: &FieldPath, depth: usize) -> Option<Cow<'_, str>>;

    /// Return a copy of this node with the leaf at `path` replaced.
    ///
    /// Never mutates `self`. Records not on the path are shared, not copied.
    fn write_at(&self, path: &FieldPath, depth: usize, value: &str) -> Result<Self, PathError>;

    /// Append the path of every writable leaf below this node.
    fn collect_leaves(&self, prefix: &FieldPath, out: &mut Vec<FieldPath>);
}

impl Node for String {
    fn read_at(&self, path: &FieldPath, depth: usize) -> Option<Cow<'_, str>> {
        (depth == path.len()).then(|| Cow::Borrowed(self.as_str()))
    }

    fn write_at(&self, path: &FieldPath, depth: usize, value: &str) -> Result<Self, PathError> {
        if depth == path.len() {
            Ok(value.to_string())
        } else {
            Err(PathError::through_leaf(path, depth))
        }
    }

    fn collect_leaves(&self, prefix: &FieldPath, out: &mut Vec<FieldPath>) {
        out.push(prefix.clone());
    }
}

impl<T: Node> Node for Arc<T> {
    fn read_at(&self, path: &FieldPath, depth: usize) -> Option<Cow<'_, str>> {
        self.as_ref().read_at(path, depth)
    }

    fn write_at(&self, path: &FieldPath, depth: usize, value: &str) -> Result<Self, PathError> {
        self.as_ref().write_at(path, depth, value).map(Arc::new)
    }

    fn collect_leaves(&self, prefix: &FieldPath, out: &mut Vec<FieldPath>) {
        self.as_ref().collect_leaves(prefix, out);
    }
}

/// Implement [`Node`] for a record struct by naming each field's path segment.
///
/// Every field listed must itself implement [`Node`]; fields that are records
/// should be wrapped in `Arc` so that writes share them.
macro_rules! record_node {
    ($ty:ty { $($field:ident: $name:literal),+ $(,)? }) => {
        impl $crate::path::Node for $ty {
            fn read_at(
                &self,
                path: &$crate::path::FieldPath,
                depth: usize,
            ) -> Option<std::borrow::Cow<'_, str>> {
                match path.segment(depth)? {
                    $($name => $crate::path::Node::read_at(&self.$field, path, depth + 1),)+
                    _ => None,
                }
            }

            #[allow(clippy::needless_update)]
            fn write_at(
                &self,
                path: &$crate::path::FieldPath,
                depth: usize,
                value: &str,
            ) -> Result<Self, $crate::path::PathError> {
                match path.segment(depth) {
                    $(Some($name) => Ok(Self {
                        $field: $crate::path::Node::write_at(&self.$field, path, depth + 1, value)?,
                        ..self.clone()
                    }),)+
                    Some(_) => Err($crate::path::PathError::unknown(path, depth)),
                    None => Err($crate::path::PathError::NotALeaf(path.to_string())),
                }
            }

            fn collect_leaves(
                &self,
                prefix: &$crate::path::FieldPath,
                out: &mut Vec<$crate::path::FieldPath>,
            ) {
                $($crate::path::Node::collect_leaves(&self.$field, &prefix.child($name), out);)+
            }
        }
    };
}

pub(crate) use record_node;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Inner {
        a: String,
        b: String,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Outer {
        left: Arc<Inner>,
        right: Arc<Inner>,
        name: String,
    }

    record_node!(Inner { a: "a", b: "b" });
    record_node!(Outer { left: "left", right: "right", name: "name" });

    fn sample() -> Arc<Outer> {
        let inner = |a: &str, b: &str| {
            Arc::new(Inner {
                a: a.to_string(),
                b: b.to_string(),
            })
        };
        Arc::new(Outer {
            left: inner("1", "2"),
            right: inner("3", "4"),
            name: "root".to_string(),
        })
    }

    fn path(s: &str) -> FieldPath {
        FieldPath::parse(s).unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let p = path("props.styling.fontSize");
        assert_eq!(p.len(), 3);
        assert_eq!(p.leaf(), Some("fontSize"));
        assert_eq!(p.to_string(), "props.styling.fontSize");
        assert_eq!("props.text".parse::<FieldPath>().unwrap(), path("props.text"));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(FieldPath::parse(""), Err(PathError::Empty));
        assert!(matches!(FieldPath::parse("props..text"), Err(PathError::EmptySegment(_))));
        assert!(matches!(FieldPath::parse("props."), Err(PathError::EmptySegment(_))));
    }

    #[test]
    fn test_read() {
        let root = sample();
        assert_eq!(root.read_at(&path("left.b"), 0).as_deref(), Some("2"));
        assert_eq!(root.read_at(&path("name"), 0).as_deref(), Some("root"));
        // Missing segments and records are not values.
        assert_eq!(root.read_at(&path("middle.a"), 0), None);
        assert_eq!(root.read_at(&path("left"), 0), None);
        assert_eq!(root.read_at(&path("name.deeper"), 0), None);
    }

    #[test]
    fn test_write_shares_siblings() {
        let before = sample();
        let after = before.write_at(&path("left.a"), 0, "9").unwrap();

        assert_eq!(before.left.a, "1");
        assert_eq!(after.left.a, "9");
        assert!(!Arc::ptr_eq(&before, &after));
        assert!(!Arc::ptr_eq(&before.left, &after.left));
        assert!(Arc::ptr_eq(&before.right, &after.right));
    }

    #[test]
    fn test_write_errors() {
        let root = sample();
        assert_eq!(
            root.write_at(&path("left.c"), 0, "x"),
            Err(PathError::UnknownSegment {
                path: "left.c".to_string(),
                segment: "c".to_string()
            })
        );
        assert_eq!(
            root.write_at(&path("left"), 0, "x"),
            Err(PathError::NotALeaf("left".to_string()))
        );
        assert_eq!(
            root.write_at(&path("name.deeper"), 0, "x"),
            Err(PathError::ThroughLeaf {
                path: "name.deeper".to_string(),
                segment: "name".to_string()
            })
        );
    }

    #[test]
    fn test_collect_leaves() {
        let mut leaves = Vec::new();
        sample().collect_leaves(&FieldPath::root(), &mut leaves);
        let leaves: Vec<String> = leaves.iter().map(ToString::to_string).collect();
        assert_eq!(leaves, vec!["left.a", "left.b", "right.a", "right.b", "name"]);
    }
}
