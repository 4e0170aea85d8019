use std::hash::Hash;

use crate::domain::entities::record::{Record, SortConfig};
use crate::usecase::services::query_service::{run_query, TableQuery};

pub const SORT_ASC_GLYPH: &str = " 🔼";
pub const SORT_FALLBACK_GLYPH: &str = " 🔽";

/// Local state of one table view: the committed search text, the selected
/// filter values and the sort configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState<K: Eq + Hash> {
    query: TableQuery<K>,
}

impl<K: Eq + Hash> Default for TableState<K> {
    fn default() -> Self {
        Self {
            query: TableQuery::default(),
        }
    }
}

impl<K> TableState<K>
where
    K: Clone + Eq + Hash + std::fmt::Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.query.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.search = text.into();
        log::debug!("search committed: {:?}", self.query.search);
    }

    /// `""` is the "All" option.
    pub fn select_filter(&mut self, key: K, value: impl Into<String>) {
        let value = value.into();
        log::debug!("filter {key:?} set to {value:?}");
        self.query.filters.select(key, value);
    }

    pub fn filter_value(&self, key: &K) -> &str {
        self.query.filters.get(key).unwrap_or("")
    }

    pub fn sort(&self) -> Option<&SortConfig<K>> {
        self.query.sort.as_ref()
    }

    /// Header click. Returns whether the sort changed; non-sortable columns
    /// ignore the click.
    pub fn click_header(&mut self, key: K, sortable: bool) -> bool {
        if !sortable {
            return false;
        }
        let next = SortConfig::toggled(self.query.sort.as_ref(), key);
        log::debug!("sort by {:?} {:?}", next.key, next.direction);
        self.query.sort = Some(next);
        true
    }

    /// Only an ascending active column gets the up glyph; everything else,
    /// inactive columns included, shows the down glyph.
    pub fn sort_indicator(&self, key: &K) -> &'static str {
        if SortConfig::is_active_asc(self.query.sort.as_ref(), key) {
            SORT_ASC_GLYPH
        } else {
            SORT_FALLBACK_GLYPH
        }
    }

    pub fn visible_rows<'a, R>(&self, rows: &'a [R], columns: &[K]) -> Vec<&'a R>
    where
        R: Record<Key = K>,
    {
        run_query(rows, &self.query, columns)
    }
}
