use std::collections::HashMap;
use std::fmt::{self, Display};
use std::hash::Hash;

/// A row of a table dataset.
///
/// Columns are addressed through a typed key, so a record type decides which
/// fields exist and the table never has to guess at a field name.
pub trait Record: Clone + PartialEq + 'static {
    type Key: Clone + Eq + Hash + Display + fmt::Debug + 'static;
    type Value: PartialOrd + Display;

    /// Unique identifier, stable for the lifetime of a render.
    fn id(&self) -> String;

    fn field(&self, key: &Self::Key) -> Option<&Self::Value>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: PartialEq> SortConfig<K> {
    pub fn asc(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }

    /// Next sort configuration after selecting `key`.
    ///
    /// A new column starts ascending; the active column flips between
    /// ascending and descending and never goes back to unsorted.
    pub fn toggled(current: Option<&SortConfig<K>>, key: K) -> Self {
        match current {
            Some(active) if active.key == key && active.direction == SortDirection::Asc => Self {
                key,
                direction: SortDirection::Desc,
            },
            _ => Self::asc(key),
        }
    }

    pub fn is_active_asc(current: Option<&SortConfig<K>>, key: &K) -> bool {
        matches!(current, Some(active) if active.key == *key && active.direction == SortDirection::Asc)
    }
}

/// Selected value per filtered field. Missing or empty entries do not
/// constrain anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState<K: Eq + Hash> {
    values: HashMap<K, String>,
}

impl<K: Eq + Hash> Default for FilterState<K> {
    fn default() -> Self {
        Self {
            values: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> FilterState<K> {
    /// Records `value` for `key`; an empty value is the "All" option and
    /// clears the constraint.
    pub fn select(&mut self, key: K, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.values.remove(&key);
        } else {
            self.values.insert(key, value);
        }
    }

    pub fn get(&self, key: &K) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Active constraints only.
    pub fn active(&self) -> impl Iterator<Item = (&K, &str)> {
        self.values
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| (key, value.as_str()))
    }
}

/// Exact-match selector over one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDef<K> {
    pub key: K,
    pub label: String,
    pub options: Vec<String>,
}

impl<K> FilterDef<K> {
    pub fn new(key: K, label: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            key,
            label: label.into(),
            options,
        }
    }

    /// Builds a filter whose options are the distinct values of `key` in `rows`.
    pub fn from_rows<R>(rows: &[R], key: K, label: impl Into<String>) -> Self
    where
        R: Record<Key = K>,
    {
        let options = distinct_options(rows, &key);
        Self::new(key, label, options)
    }
}

/// Distinct rendered values of a field, in first-seen order. Missing values
/// are skipped.
pub fn distinct_options<R: Record>(rows: &[R], key: &R::Key) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    for value in rows.iter().filter_map(|row| row.field(key)) {
        let value = value.to_string();
        if !options.contains(&value) {
            options.push(value);
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_column_starts_ascending() {
        let current = SortConfig::asc("customer");
        let next = SortConfig::toggled(Some(&current), "order");
        assert_eq!(next, SortConfig::asc("order"));
    }

    #[test]
    fn same_column_flips_between_directions() {
        let first = SortConfig::toggled(None, "order");
        assert_eq!(first.direction, SortDirection::Asc);
        let second = SortConfig::toggled(Some(&first), "order");
        assert_eq!(second.direction, SortDirection::Desc);
        let third = SortConfig::toggled(Some(&second), "order");
        assert_eq!(third.direction, SortDirection::Asc);
    }

    #[test]
    fn empty_selection_clears_filter() {
        let mut state = FilterState::default();
        state.select("paymentStatus", "paid");
        assert_eq!(state.get(&"paymentStatus"), Some("paid"));

        state.select("paymentStatus", "");
        assert_eq!(state.get(&"paymentStatus"), None);
        assert_eq!(state.active().count(), 0);
    }
}
