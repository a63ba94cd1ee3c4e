//! # Registry Module
//!
//! The authoritative set of tile types, keyed by numeric id.
//!
//! A registry is built once per session from a list of descriptors and is
//! read-only afterwards. Construction never fails: missing entries are dropped
//! with a warning and duplicate ids are reported while the first descriptor for
//! each id is kept.

pub mod descriptor;

pub use descriptor::*;

use log::{error, warn};
use std::collections::{BTreeMap, HashMap};

/// An id that appeared more than once while building a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateId {
    pub id: i32,
    pub occurrences: usize,
}

/// What happened while the registry was built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryReport {
    /// Number of absent descriptors that were ignored
    pub dropped_null: usize,
    /// Ids supplied more than once, in ascending id order
    pub duplicates: Vec<DuplicateId>,
}

impl RegistryReport {
    /// Returns true if construction saw neither nulls nor duplicates.
    pub fn is_clean(&self) -> bool {
        self.dropped_null == 0 && self.duplicates.is_empty()
    }
}

/// Lookup table from type number to descriptor.
///
/// # Examples
///
/// ```
/// use memory_match::{CardType, TypeRegistry};
///
/// let registry = TypeRegistry::from_descriptors(vec![
///     CardType::numbered(3),
///     CardType::new(3, "shadowed"),
///     CardType::numbered(7),
/// ]);
/// assert_eq!(registry.count(), 2);
/// assert_eq!(registry.lookup(3).unwrap().name, "Card 3");
/// assert_eq!(registry.report().duplicates[0].occurrences, 2);
/// ```
#[derive(Debug, Clone)]
pub struct TypeRegistry<D = CardType> {
    lookup: HashMap<i32, D>,
    report: RegistryReport,
}

impl<D> Default for TypeRegistry<D> {
    fn default() -> Self {
        Self {
            lookup: HashMap::new(),
            report: RegistryReport::default(),
        }
    }
}

impl<D: TypeDescriptor> TypeRegistry<D> {
    /// Builds a registry from possibly-absent descriptors.
    pub fn build<I>(descriptors: I) -> Self
    where
        I: IntoIterator<Item = Option<D>>,
    {
        let mut registry = Self::default();
        registry.rebuild(descriptors);
        registry
    }

    /// Builds a registry from descriptors that are all present.
    pub fn from_descriptors<I>(descriptors: I) -> Self
    where
        I: IntoIterator<Item = D>,
    {
        Self::build(descriptors.into_iter().map(Some))
    }

    /// Clears the table and repopulates it from `descriptors`.
    pub fn rebuild<I>(&mut self, descriptors: I)
    where
        I: IntoIterator<Item = Option<D>>,
    {
        self.lookup.clear();
        self.report = RegistryReport::default();

        let mut occurrences: BTreeMap<i32, usize> = BTreeMap::new();
        for descriptor in descriptors {
            let Some(descriptor) = descriptor else {
                self.report.dropped_null += 1;
                continue;
            };
            let id = descriptor.id();
            *occurrences.entry(id).or_insert(0) += 1;
            // First descriptor for an id wins
            self.lookup.entry(id).or_insert(descriptor);
        }

        for (id, count) in occurrences {
            if count > 1 {
                error!(
                    "TypeRegistry: Duplicate type id '{}' found {} times. Ids must be unique.",
                    id, count
                );
                self.report.duplicates.push(DuplicateId {
                    id,
                    occurrences: count,
                });
            }
        }

        if self.report.dropped_null > 0 {
            warn!(
                "TypeRegistry: {} null descriptor entries were ignored.",
                self.report.dropped_null
            );
        }
    }

    /// Returns the descriptor registered for `id`, logging a warning when absent.
    pub fn lookup(&self, id: i32) -> Option<&D> {
        let found = self.lookup.get(&id);
        if found.is_none() {
            warn!("TypeRegistry: type id '{}' not found in registry.", id);
        }
        found
    }

    /// Returns true if `id` resolves, without logging.
    pub fn contains(&self, id: i32) -> bool {
        self.lookup.contains_key(&id)
    }

    /// Number of resolved entries.
    pub fn count(&self) -> usize {
        self.lookup.len()
    }

    /// Returns true if no descriptors resolved.
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// Resolved ids in ascending order.
    pub fn ids(&self) -> Vec<i32> {
        let mut ids: Vec<i32> = self.lookup.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Diagnostics gathered by the last build.
    pub fn report(&self) -> &RegistryReport {
        &self.report
    }
}

impl TypeRegistry<CardType> {
    /// Registry holding one card type per allowed type number.
    pub fn standard() -> Self {
        Self::from_descriptors(CardType::standard_set())
    }
}
