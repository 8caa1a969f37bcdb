//! Directory hierarchy of the files kept by a tree walk.
//!
//! The tree is a recursive enum: a name maps either to a [`Node::File`]
//! leaf or to a nested [`DirectoryNode`]. Directories exist only because a
//! matching file lives somewhere below them, so empty subtrees never
//! appear. Children are kept in lexical order.

use crate::core::{Error, Result};
use crate::errors::BatchOutcome;
use crate::io::FileWalker;
use std::collections::btree_map::{self, BTreeMap};
use std::path::{Component, Path};

/// One entry of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File,
    Directory(DirectoryNode),
}

impl Node {
    pub fn is_file(&self) -> bool {
        matches!(self, Node::File)
    }

    pub fn as_directory(&self) -> Option<&DirectoryNode> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File => None,
        }
    }
}

/// Mapping from entry name to node. The scan root is an unnamed
/// `DirectoryNode`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryNode {
    entries: BTreeMap<String, Node>,
}

impl DirectoryNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Node> {
        self.entries.iter()
    }

    /// Total number of file leaves in this subtree.
    pub fn file_count(&self) -> usize {
        self.entries
            .values()
            .map(|node| match node {
                Node::File => 1,
                Node::Directory(dir) => dir.file_count(),
            })
            .sum()
    }

    /// Insert a file leaf at `components`, creating intermediate
    /// directories as needed.
    pub fn insert_file<S: AsRef<str>>(&mut self, components: &[S]) -> Result<()> {
        let Some((file_name, parents)) = components.split_last() else {
            return Ok(());
        };

        let mut current = self;
        for (depth, part) in parents.iter().enumerate() {
            let entry = current
                .entries
                .entry(part.as_ref().to_string())
                .or_insert_with(|| Node::Directory(DirectoryNode::new()));
            current = match entry {
                Node::Directory(dir) => dir,
                Node::File => return Err(conflict(&components[..=depth])),
            };
        }

        match current.entries.get(file_name.as_ref()) {
            Some(Node::Directory(_)) => Err(conflict(components)),
            _ => {
                current
                    .entries
                    .insert(file_name.as_ref().to_string(), Node::File);
                Ok(())
            }
        }
    }

    /// Build a tree from `/`-separated relative paths.
    pub fn from_relative_paths<I, S>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut root = Self::new();
        for path in paths {
            let components: Vec<&str> = path
                .as_ref()
                .split(['/', '\\'])
                .filter(|c| !c.is_empty() && *c != ".")
                .collect();
            root.insert_file(&components)?;
        }
        Ok(root)
    }
}

impl<'a> IntoIterator for &'a DirectoryNode {
    type Item = (&'a String, &'a Node);
    type IntoIter = btree_map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn conflict<S: AsRef<str>>(components: &[S]) -> Error {
    let path = components
        .iter()
        .map(|c| c.as_ref())
        .collect::<Vec<_>>()
        .join("/");
    Error::PathConflict { path }
}

/// Path components of `path` relative to `root`, as strings.
fn relative_components(root: &Path, path: &Path) -> Option<Vec<String>> {
    let relative = path.strip_prefix(root).ok()?;
    let components: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    (!components.is_empty()).then_some(components)
}

/// Walk `root` once and build the tree of files accepted by `predicate`.
///
/// Unreadable directories are omitted and reported as warnings; only an
/// invalid root fails.
pub fn build<F>(root: &Path, predicate: F) -> Result<BatchOutcome<DirectoryNode>>
where
    F: Fn(&Path) -> bool,
{
    build_with(&FileWalker::new(root.to_path_buf()), predicate)
}

/// Same as [`build`] with a preconfigured walker (exclusions, gitignore).
pub fn build_with<F>(walker: &FileWalker, predicate: F) -> Result<BatchOutcome<DirectoryNode>>
where
    F: Fn(&Path) -> bool,
{
    let outcome = walker.walk_matching(predicate)?;
    let root = walker.root();
    let mut tree = DirectoryNode::new();

    for path in &outcome.value {
        if let Some(components) = relative_components(root, path) {
            tree.insert_file(&components)?;
        }
    }

    log::debug!(
        "Built structure for {}: {} file(s)",
        root.display(),
        tree.file_count()
    );
    Ok(BatchOutcome::new(tree, outcome.warnings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn dir<'a>(node: &'a DirectoryNode, name: &str) -> &'a DirectoryNode {
        node.get(name)
            .and_then(Node::as_directory)
            .unwrap_or_else(|| panic!("{name} should be a directory"))
    }

    #[test]
    fn test_from_relative_paths_nests_directories() {
        let tree = DirectoryNode::from_relative_paths(["a/x.py", "a/b/y.py", "c.py"]).unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get("c.py"), Some(&Node::File));

        let a = dir(&tree, "a");
        assert_eq!(a.len(), 2);
        assert_eq!(a.get("x.py"), Some(&Node::File));

        let b = dir(a, "b");
        assert_eq!(b.len(), 1);
        assert_eq!(b.get("y.py"), Some(&Node::File));
        assert_eq!(tree.file_count(), 3);
    }

    #[test]
    fn test_children_are_lexically_ordered() {
        let tree = DirectoryNode::from_relative_paths(["z.py", "a/m.py", "b.py"]).unwrap();
        let names: Vec<&String> = tree.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b.py", "z.py"]);
    }

    #[test]
    fn test_file_then_directory_conflict() {
        let err = DirectoryNode::from_relative_paths(["a", "a/b.py"]).unwrap_err();
        assert!(matches!(err, Error::PathConflict { ref path } if path == "a"));
    }

    #[test]
    fn test_directory_then_file_conflict() {
        let err = DirectoryNode::from_relative_paths(["a/b.py", "a"]).unwrap_err();
        assert!(matches!(err, Error::PathConflict { ref path } if path == "a"));
    }

    #[test]
    fn test_empty_directory_is_distinct_from_file() {
        assert_ne!(Node::Directory(DirectoryNode::new()), Node::File);
    }

    #[test]
    fn test_build_omits_directories_without_matches() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("pkg/sub")).unwrap();
        fs::create_dir_all(root.join("docs/img")).unwrap();
        fs::write(root.join("pkg/sub/mod.py"), "").unwrap();
        fs::write(root.join("docs/img/logo.png"), "").unwrap();
        fs::write(root.join("main.py"), "").unwrap();

        let outcome = build(root, |p| p.extension().is_some_and(|e| e == "py")).unwrap();
        let tree = outcome.value;

        assert!(outcome.warnings.is_empty());
        assert!(tree.get("docs").is_none());
        assert_eq!(tree.get("main.py"), Some(&Node::File));
        assert_eq!(dir(dir(&tree, "pkg"), "sub").get("mod.py"), Some(&Node::File));
    }

    #[test]
    fn test_build_invalid_root() {
        let temp = TempDir::new().unwrap();
        let err = build(&temp.path().join("missing"), |_| true).unwrap_err();
        assert!(matches!(err, Error::InvalidRoot { .. }));
    }

    #[test]
    fn test_build_with_excluded_subtree_omits_it() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("vendor/lib")).unwrap();
        fs::write(root.join("vendor/lib/six.py"), "").unwrap();
        fs::write(root.join("app.py"), "").unwrap();

        let walker = FileWalker::new(root.to_path_buf()).with_exclude_dir("vendor");
        let outcome = build_with(&walker, |p| walker.should_process(p)).unwrap();

        assert!(outcome.is_clean());
        assert!(outcome.value.get("vendor").is_none());
        assert_eq!(outcome.value.file_count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_build_skips_unreadable_subtree_with_warning() {
        use crate::errors::WarningKind;
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let root = temp.path();
        let locked = root.join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("hidden.py"), "").unwrap();
        fs::write(root.join("main.py"), "").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not apply to root
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let outcome = build(root, |p| p.extension().is_some_and(|e| e == "py"));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        let outcome = outcome.unwrap();

        assert_eq!(outcome.value.get("main.py"), Some(&Node::File));
        assert!(outcome.value.get("locked").is_none());
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].kind, WarningKind::DirectoryAccessFailure);
    }
}
