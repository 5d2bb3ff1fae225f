//! Toy filesystem
//!
//! A read-only directory tree the terminal browses with `ls` and `cd`.
//! Nothing here touches real storage: the tree is built once at session
//! start and never mutated.
//!
//! Design: paths are plain `/`-separated strings, resolved by walking
//! components from the root.

pub mod seed;

use serde::Deserialize;
use std::collections::BTreeMap;

pub use seed::portfolio;

/// Path separator
pub const SEPARATOR: char = '/';

/// Size label shown by `ls -l` for directories
const DIR_SIZE_LABEL: &str = "4.0K";

/// Date label shown by `ls -l` when a node carries none
const DEFAULT_MODIFIED: &str = "2024-01-15";

/// A node in the tree
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Directory {
        #[serde(default)]
        children: BTreeMap<String, Node>,
    },
    File {
        size: String,
        modified: String,
    },
}

impl Node {
    /// An empty directory
    pub fn dir() -> Self {
        Node::Directory {
            children: BTreeMap::new(),
        }
    }

    /// A directory with the given entries
    pub fn dir_with<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Node)>,
        S: Into<String>,
    {
        Node::Directory {
            children: entries.into_iter().map(|(n, c)| (n.into(), c)).collect(),
        }
    }

    pub fn file(size: impl Into<String>, modified: impl Into<String>) -> Self {
        Node::File {
            size: size.into(),
            modified: modified.into(),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    /// Size label for long listings
    pub fn size_label(&self) -> &str {
        match self {
            Node::Directory { .. } => DIR_SIZE_LABEL,
            Node::File { size, .. } => size,
        }
    }

    /// Modification label for long listings
    pub fn modified_label(&self) -> &str {
        match self {
            Node::Directory { .. } => DEFAULT_MODIFIED,
            Node::File { modified, .. } => modified,
        }
    }

    /// Permission string for long listings
    pub fn permissions(&self) -> &'static str {
        match self {
            Node::Directory { .. } => "drwxr-xr-x",
            Node::File { .. } => "-rw-r--r--",
        }
    }
}

/// A listed directory entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry<'a> {
    pub name: &'a str,
    pub node: &'a Node,
}

impl DirEntry<'_> {
    /// Name as shown in listings (directories get a trailing separator)
    pub fn display_name(&self) -> String {
        if self.node.is_dir() {
            format!("{}{}", self.name, SEPARATOR)
        } else {
            self.name.to_string()
        }
    }
}

/// The filesystem tree
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Node")]
pub struct ToyFs {
    root: Node,
}

impl ToyFs {
    /// Build from a root node. A file root is replaced by an empty directory.
    pub fn new(root: Node) -> Self {
        if root.is_dir() {
            Self { root }
        } else {
            Self { root: Node::dir() }
        }
    }

    /// Look up a node by absolute path
    pub fn get(&self, path: &str) -> Option<&Node> {
        let path = normalize_path(path);
        let mut node = &self.root;
        for part in path.split(SEPARATOR).filter(|p| !p.is_empty()) {
            match node {
                Node::Directory { children } => node = children.get(part)?,
                Node::File { .. } => return None,
            }
        }
        Some(node)
    }

    /// Is there a directory at this absolute path?
    pub fn is_dir(&self, path: &str) -> bool {
        self.get(path).map(Node::is_dir).unwrap_or(false)
    }

    /// List a directory. Returns None if the path is absent or a file.
    pub fn list(&self, path: &str) -> Option<Vec<DirEntry<'_>>> {
        match self.get(path)? {
            Node::Directory { children } => Some(
                children
                    .iter()
                    .map(|(name, node)| DirEntry { name, node })
                    .collect(),
            ),
            Node::File { .. } => None,
        }
    }
}

impl From<Node> for ToyFs {
    fn from(root: Node) -> Self {
        Self::new(root)
    }
}

impl Default for ToyFs {
    fn default() -> Self {
        portfolio()
    }
}

/// Resolve `path` against `cwd`: absolute paths stand alone, anything else
/// is appended to `cwd`. The result is normalized.
pub fn resolve_path(cwd: &str, path: &str) -> String {
    if path.starts_with(SEPARATOR) {
        normalize_path(path)
    } else {
        normalize_path(&format!("{}{}{}", cwd, SEPARATOR, path))
    }
}

/// Normalize a path: leading slash, `.` and `..` resolved, no duplicate or
/// trailing separators.
pub fn normalize_path(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split(SEPARATOR) {
        match part {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            p => parts.push(p),
        }
    }
    format!("{}{}", SEPARATOR, parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_fs() -> ToyFs {
        ToyFs::new(Node::dir_with([(
            "home",
            Node::dir_with([
                ("docs", Node::dir()),
                ("notes.txt", Node::file("1.0KB", "2024-02-01")),
            ]),
        )]))
    }

    // ============ lookup ============

    #[test]
    fn test_get_root() {
        let fs = small_fs();
        assert!(fs.is_dir("/"));
    }

    #[test]
    fn test_get_nested() {
        let fs = small_fs();
        assert!(fs.is_dir("/home/docs"));
        assert_eq!(
            fs.get("/home/notes.txt"),
            Some(&Node::file("1.0KB", "2024-02-01"))
        );
    }

    #[test]
    fn test_get_missing() {
        let fs = small_fs();
        assert!(fs.get("/home/nope").is_none());
        assert!(!fs.is_dir("/home/nope"));
    }

    #[test]
    fn test_file_is_not_dir() {
        let fs = small_fs();
        assert!(!fs.is_dir("/home/notes.txt"));
        assert!(fs.get("/home/notes.txt/deeper").is_none());
    }

    #[test]
    fn test_file_root_replaced() {
        let fs = ToyFs::new(Node::file("1B", "2024-01-01"));
        assert!(fs.is_dir("/"));
    }

    // ============ list ============

    #[test]
    fn test_list_sorted() {
        let fs = small_fs();
        let names: Vec<String> = fs
            .list("/home")
            .unwrap()
            .iter()
            .map(|e| e.display_name())
            .collect();
        assert_eq!(names, vec!["docs/", "notes.txt"]);
    }

    #[test]
    fn test_list_file_fails() {
        let fs = small_fs();
        assert!(fs.list("/home/notes.txt").is_none());
    }

    // ============ paths ============

    #[test]
    fn test_normalize_path_simple() {
        assert_eq!(normalize_path("/a/b/c"), "/a/b/c");
    }

    #[test]
    fn test_normalize_path_dots() {
        assert_eq!(normalize_path("/a/./b/../c"), "/a/c");
    }

    #[test]
    fn test_normalize_path_trailing() {
        assert_eq!(normalize_path("/a/b/"), "/a/b");
        assert_eq!(normalize_path("//a//b"), "/a/b");
    }

    #[test]
    fn test_normalize_path_root() {
        assert_eq!(normalize_path("/.."), "/");
        assert_eq!(normalize_path(""), "/");
    }

    #[test]
    fn test_resolve_relative() {
        assert_eq!(resolve_path("/home", "docs"), "/home/docs");
        assert_eq!(resolve_path("/", "home"), "/home");
        assert_eq!(resolve_path("/home/docs", ".."), "/home");
    }

    #[test]
    fn test_resolve_absolute() {
        assert_eq!(resolve_path("/home", "/etc"), "/etc");
    }

    // ============ serde ============

    #[test]
    fn test_deserialize_tree() {
        let json = r#"{
            "type": "directory",
            "children": {
                "a": { "type": "directory" },
                "b.md": { "type": "file", "size": "2KB", "modified": "2024-03-03" }
            }
        }"#;
        let fs: ToyFs = serde_json::from_str(json).unwrap();
        assert!(fs.is_dir("/a"));
        assert_eq!(fs.get("/b.md").unwrap().size_label(), "2KB");
    }
}
