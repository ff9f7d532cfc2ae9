//! Catalog construction.
//!
//! The `CatalogBuilder` accumulates top-level rulesets in insertion order
//! and checks titles as they arrive. Titles double as row anchors, so an
//! empty or repeated title (anywhere in a variant tree) is rejected when
//! it is added rather than rendered as a broken link.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::core::{CatalogError, Result, VariantDepth};
use crate::ruleset::Ruleset;

/// Accumulates the top-level rulesets of a catalog.
///
/// ## Example
///
/// ```
/// use cgt_ruleset_table::catalog::CatalogBuilder;
/// use cgt_ruleset_table::ruleset::Ruleset;
///
/// let mut builder = CatalogBuilder::new();
/// builder.add(Ruleset::new("Nim", None, true, "Short", "By XOR-rule.", "In P", " ")).unwrap();
///
/// let duplicate = Ruleset::new("Nim", None, true, "Short", "?", "?", " ");
/// assert!(builder.add(duplicate).is_err());
///
/// let catalog = builder.build();
/// assert_eq!(catalog.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CatalogBuilder {
    rulesets: Vec<Ruleset>,
    titles: FxHashSet<String>,
}

impl CatalogBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a top-level ruleset.
    ///
    /// Fails if the ruleset or any of its variants has an empty title, or
    /// a title already used in this catalog. Nothing is added on failure.
    pub fn add(&mut self, ruleset: Ruleset) -> Result<()> {
        let mut incoming = FxHashSet::default();
        for r in ruleset.iter_tree() {
            if r.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle);
            }
            if self.titles.contains(&r.title) || !incoming.insert(r.title.as_str()) {
                return Err(CatalogError::DuplicateTitle {
                    title: r.title.clone(),
                });
            }
        }

        debug!(
            title = %ruleset.title,
            variants = ruleset.variants.len(),
            "Added ruleset to catalog"
        );
        self.titles.extend(incoming.into_iter().map(str::to_string));
        self.rulesets.push(ruleset);
        Ok(())
    }

    /// Append several rulesets, stopping at the first failure.
    pub fn extend<I>(&mut self, rulesets: I) -> Result<()>
    where
        I: IntoIterator<Item = Ruleset>,
    {
        for ruleset in rulesets {
            self.add(ruleset)?;
        }
        Ok(())
    }

    /// Check if a title is already used.
    #[must_use]
    pub fn contains_title(&self, title: &str) -> bool {
        self.titles.contains(title)
    }

    /// Number of top-level rulesets added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rulesets.len()
    }

    /// Check if nothing has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rulesets.is_empty()
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> Catalog {
        Catalog {
            rulesets: self.rulesets,
        }
    }
}

/// A finished, read-only catalog of rulesets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    rulesets: Vec<Ruleset>,
}

impl Catalog {
    /// Top-level rulesets in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Ruleset> {
        self.rulesets.iter()
    }

    /// Top-level rulesets as a slice.
    #[must_use]
    pub fn rulesets(&self) -> &[Ruleset] {
        &self.rulesets
    }

    /// Number of top-level rulesets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rulesets.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rulesets.is_empty()
    }

    /// Number of records, variants included.
    #[must_use]
    pub fn ruleset_count(&self) -> usize {
        self.rulesets.iter().map(|r| r.iter_tree().count()).sum()
    }

    /// Number of table rows the catalog renders to.
    #[must_use]
    pub fn row_count(&self, depth: VariantDepth) -> usize {
        self.rulesets.iter().map(|r| r.row_count(depth)).sum()
    }

    /// Find a ruleset or variant by title.
    #[must_use]
    pub fn find(&self, title: &str) -> Option<&Ruleset> {
        self.rulesets
            .iter()
            .flat_map(Ruleset::iter_tree)
            .find(|r| r.title == title)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Ruleset;
    type IntoIter = std::slice::Iter<'a, Ruleset>;

    fn into_iter(self) -> Self::IntoIter {
        self.rulesets.iter()
    }
}
