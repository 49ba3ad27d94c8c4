//! Grouped diff output types.
//!
//! The result of a comparison is a [`GroupCountTable`]: one [`DiffGroup`] per
//! distinct set of differing column names. Groups are stored in ascending
//! key order so that identical inputs always serialize identically.

use diffgroup_core_types::schema::RESULT_COLUMNS;
use serde::{Deserialize, Serialize, Serializer};

/// Ordered tuple of the column names that differ for a row pair.
///
/// Order follows the left table's column order. Keys are compared exactly:
/// `[B]`, `[C]` and `[B, C]` are three different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupKey(Vec<String>);

impl GroupKey {
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for GroupKey {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// One row of the result table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffGroup {
    /// Differing column names shared by every row in this group
    pub group: GroupKey,
    /// Number of row pairs in this group (always `indices.len()`)
    pub count: usize,
    /// Originating row indices, ascending
    pub indices: Vec<usize>,
}

/// Result table with the columns `group`, `count`, `indices`.
///
/// Empty when no row pair differs; the column names are still exposed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupCountTable {
    groups: Vec<DiffGroup>,
}

impl GroupCountTable {
    pub(crate) fn from_groups(groups: Vec<DiffGroup>) -> Self {
        Self { groups }
    }

    /// Column names of the result table, in order
    pub fn column_names(&self) -> [&'static str; 3] {
        RESULT_COLUMNS
    }

    /// Number of groups (rows of the result table)
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn groups(&self) -> &[DiffGroup] {
        &self.groups
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiffGroup> {
        self.groups.iter()
    }

    /// Look up the group for an exact key
    pub fn get(&self, key: &GroupKey) -> Option<&DiffGroup> {
        self.groups.iter().find(|g| &g.group == key)
    }

    /// Look up a group by its column names
    pub fn find(&self, names: &[&str]) -> Option<&DiffGroup> {
        self.groups
            .iter()
            .find(|g| g.group.names().iter().map(String::as_str).eq(names.iter().copied()))
    }

    /// Number of row pairs with at least one differing field
    pub fn total_count(&self) -> usize {
        self.groups.iter().map(|g| g.count).sum()
    }

    pub fn into_groups(self) -> Vec<DiffGroup> {
        self.groups
    }
}

impl<'a> IntoIterator for &'a GroupCountTable {
    type Item = &'a DiffGroup;
    type IntoIter = std::slice::Iter<'a, DiffGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

#[derive(Serialize)]
struct GroupCountTableWire<'a> {
    columns: [&'static str; 3],
    rows: &'a [DiffGroup],
}

impl Serialize for GroupCountTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GroupCountTableWire {
            columns: RESULT_COLUMNS,
            rows: &self.groups,
        }
        .serialize(serializer)
    }
}
