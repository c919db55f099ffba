//! Collapse package names into the minimal set of covering roots.
//!
//! The names are inserted into a trie below a synthetic common root. A
//! depth-first walk then follows every non-branching chain down to the
//! first node that either branches or is a leaf, and reports that node.

use std::collections::{BTreeMap, BTreeSet};

use shadegen_core::package::PackageName;

use crate::observer::Observer;

const SYNTHETIC_ROOT: usize = 0;

struct TrieNode<'a> {
    /// `None` only for the synthetic root.
    package: Option<PackageName>,
    children: BTreeMap<&'a str, usize>,
}

/// Arena of trie nodes addressed by index; node 0 is the synthetic root.
struct PackageTrie<'a> {
    nodes: Vec<TrieNode<'a>>,
}

impl<'a> PackageTrie<'a> {
    fn new() -> Self {
        Self {
            nodes: vec![TrieNode {
                package: None,
                children: BTreeMap::new(),
            }],
        }
    }

    /// The default package becomes a single child keyed by the empty segment.
    fn insert(&mut self, name: &'a PackageName) {
        let mut current = SYNTHETIC_ROOT;
        for (depth, segment) in name.as_str().split('.').enumerate() {
            current = match self.nodes[current].children.get(segment) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode {
                        package: Some(name.prefix(depth + 1)),
                        children: BTreeMap::new(),
                    });
                    self.nodes[current].children.insert(segment, child);
                    child
                }
            };
        }
    }

    fn collect_roots(&self, index: usize, roots: &mut BTreeSet<PackageName>) {
        let node = &self.nodes[index];
        match &node.package {
            Some(package) if node.children.len() != 1 => {
                roots.insert(package.clone());
            }
            _ => {
                for &child in node.children.values() {
                    self.collect_roots(child, roots);
                }
            }
        }
    }
}

/// Collapse `packages` into root packages.
///
/// Below the synthetic root, a node with exactly one child is never a root:
/// the walk continues into that child, however deep. Nodes that branch or
/// are leaves are roots. So `{a.k, a.b.c}` gives `{a}` while
/// `{com.foo, com.foo.bar}` gives `{com.foo.bar}`.
///
/// Roots never nest, and every root is an ancestor of (or equal to) some
/// input. The default package is accepted and comes back as the default
/// package.
pub fn root_packages<'a, I>(packages: I, observer: &dyn Observer) -> BTreeSet<PackageName>
where
    I: IntoIterator<Item = &'a PackageName>,
{
    let mut trie = PackageTrie::new();
    for package in packages {
        trie.insert(package);
    }

    let mut roots = BTreeSet::new();
    trie.collect_roots(SYNTHETIC_ROOT, &mut roots);

    for root in &roots {
        observer.root_found(root);
    }
    roots
}
