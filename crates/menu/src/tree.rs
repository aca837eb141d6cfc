//! Validated menu forest and configuration loading.

use std::collections::HashSet;

use navshell_types::{FooterColumn, MenuConfigError, MenuEntry};
use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::debug;

/// Menu configuration document shipped with the binary. Used when no config
/// file is found on disk.
const EMBEDDED_MENU: &str = include_str!("../assets/default_menu.json");

static EMBEDDED_CONFIG: Lazy<MenuConfig> = Lazy::new(|| {
    // The embedded document is part of the build; failing to load it is a
    // packaging bug, not a runtime condition.
    MenuConfig::from_json_str(EMBEDDED_MENU).expect("embedded menu configuration is valid")
});

/// Raw on-disk shape of the configuration, before validation.
#[derive(Debug, Deserialize)]
struct RawMenuConfig {
    #[serde(default = "default_brand")]
    brand: String,
    #[serde(default)]
    tagline: String,
    items: Vec<MenuEntry>,
    #[serde(default)]
    footer: Vec<FooterColumn>,
}

fn default_brand() -> String {
    "navshell".to_string()
}

/// Validated navigation configuration: the menu forest plus the branding and
/// footer data the chrome renders around it.
#[derive(Debug, Clone)]
pub struct MenuConfig {
    /// Brand label shown in the navbar and footer.
    pub brand: String,
    /// Footer description line.
    pub tagline: String,
    /// Footer link columns.
    pub footer: Vec<FooterColumn>,
    tree: MenuTree,
}

impl MenuConfig {
    /// Parses and validates a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, MenuConfigError> {
        let raw: RawMenuConfig =
            serde_json::from_str(json).map_err(|e| MenuConfigError::Parse(e.to_string()))?;
        let tree = MenuTree::new(raw.items)?;
        Ok(Self {
            brand: raw.brand,
            tagline: raw.tagline,
            footer: raw.footer,
            tree,
        })
    }

    /// The configuration compiled into the binary, used when no file-based
    /// configuration is supplied or discovered.
    pub fn embedded_default() -> &'static MenuConfig {
        let config = &*EMBEDDED_CONFIG;
        debug!(entries = config.tree.len(), "using embedded menu configuration");
        config
    }

    /// The validated menu forest.
    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }
}

/// Immutable, validated forest of menu entries.
///
/// Construction rejects empty names and duplicate sibling names eagerly; a
/// constructed tree can never produce ambiguous expansion keys. The tree is
/// read-only for its whole lifetime; there are no mutation operations.
#[derive(Debug, Clone)]
pub struct MenuTree {
    entries: Vec<MenuEntry>,
}

impl MenuTree {
    /// Validates the forest and wraps it. Supports arbitrary nesting depth;
    /// names must be non-empty and unique within each sibling list (the same
    /// name may recur under different parents).
    pub fn new(entries: Vec<MenuEntry>) -> Result<Self, MenuConfigError> {
        validate_siblings(&entries, "(top level)")?;
        Ok(Self { entries })
    }

    /// The ordered top-level entries.
    pub fn top_level(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// The ordered children of a group node; empty for leaves.
    pub fn children_of<'a>(&self, entry: &'a MenuEntry) -> &'a [MenuEntry] {
        &entry.children
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the forest has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_siblings(siblings: &[MenuEntry], parent: &str) -> Result<(), MenuConfigError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(siblings.len());
    for entry in siblings {
        if entry.name.is_empty() {
            return Err(MenuConfigError::EmptyName {
                parent: parent.to_string(),
            });
        }
        if !seen.insert(entry.name.as_str()) {
            return Err(MenuConfigError::DuplicateName {
                name: entry.name.clone(),
                parent: parent.to_string(),
            });
        }
        validate_siblings(&entry.children, &entry.name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{MenuConfig, MenuTree};
    use crate::is_active;
    use navshell_types::{MenuConfigError, MenuEntry};

    fn sample_forest() -> Vec<MenuEntry> {
        vec![
            MenuEntry::leaf("Home", "/", "⌂"),
            MenuEntry::group(
                "Products",
                "/products",
                "▤",
                vec![
                    MenuEntry::leaf("All", "/products", "▤"),
                    MenuEntry::leaf("Popular", "/products/popular", "★"),
                ],
            ),
        ]
    }

    #[test]
    fn valid_forest_is_accepted() {
        let tree = MenuTree::new(sample_forest()).expect("valid tree");
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.top_level()[1].children.len(), 2);
    }

    #[test]
    fn duplicate_sibling_names_are_rejected() {
        let entries = vec![
            MenuEntry::leaf("Home", "/", "⌂"),
            MenuEntry::leaf("Home", "/home2", "⌂"),
        ];
        match MenuTree::new(entries) {
            Err(MenuConfigError::DuplicateName { name, parent }) => {
                assert_eq!(name, "Home");
                assert_eq!(parent, "(top level)");
            }
            other => panic!("expected DuplicateName, got {other:?}"),
        }
    }

    #[test]
    fn nested_duplicates_are_rejected_with_parent_context() {
        let entries = vec![MenuEntry::group(
            "About",
            "/about",
            "ℹ",
            vec![
                MenuEntry::leaf("Team", "/about/team", "·"),
                MenuEntry::leaf("Team", "/about/team2", "·"),
            ],
        )];
        match MenuTree::new(entries) {
            Err(MenuConfigError::DuplicateName { name, parent }) => {
                assert_eq!(name, "Team");
                assert_eq!(parent, "About");
            }
            other => panic!("expected DuplicateName, got {other:?}"),
        }
    }

    #[test]
    fn same_name_under_different_parents_is_allowed() {
        let entries = vec![
            MenuEntry::group("A", "/a", "·", vec![MenuEntry::leaf("Overview", "/a/o", "·")]),
            MenuEntry::group("B", "/b", "·", vec![MenuEntry::leaf("Overview", "/b/o", "·")]),
        ];
        assert!(MenuTree::new(entries).is_ok());
    }

    #[test]
    fn empty_names_are_rejected() {
        let entries = vec![MenuEntry::leaf("", "/", "·")];
        assert!(matches!(
            MenuTree::new(entries),
            Err(MenuConfigError::EmptyName { .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            MenuConfig::from_json_str("{ not json"),
            Err(MenuConfigError::Parse(_))
        ));
    }

    #[test]
    fn embedded_default_loads_and_validates() {
        let config = MenuConfig::embedded_default();
        assert!(!config.tree().is_empty());
        assert!(!config.brand.is_empty());
        assert!(!config.footer.is_empty());
    }

    /// End-to-end activation scenario: exact-match only, no ancestor
    /// activation for the parent of the active leaf.
    #[test]
    fn activation_over_a_tree_is_exact_match_only() {
        let tree = MenuTree::new(sample_forest()).expect("valid tree");
        let current = "/products/popular";

        let mut active: Vec<&str> = Vec::new();
        for entry in tree.top_level() {
            if is_active(current, &entry.path) {
                active.push(&entry.name);
            }
            for child in tree.children_of(entry) {
                if is_active(current, &child.path) {
                    active.push(&child.name);
                }
            }
        }
        // Only the Popular leaf is active; Products itself stays inactive.
        assert_eq!(active, vec!["Popular"]);

        assert!(!is_active("/products/popular-query", "/products/popular"));
    }
}
