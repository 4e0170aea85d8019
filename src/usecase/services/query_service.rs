use std::cmp::Ordering;

use crate::domain::entities::record::{FilterState, Record, SortConfig, SortDirection};

/// Everything that narrows or orders the visible rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery<K: Eq + std::hash::Hash> {
    pub search: String,
    pub filters: FilterState<K>,
    pub sort: Option<SortConfig<K>>,
}

impl<K: Eq + std::hash::Hash> Default for TableQuery<K> {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: FilterState::default(),
            sort: None,
        }
    }
}

/// Every active filter must equal the field's rendered value exactly.
pub fn row_matches_filters<R: Record>(row: &R, filters: &FilterState<R::Key>) -> bool {
    filters.active().all(|(key, wanted)| {
        row.field(key)
            .is_some_and(|value| value.to_string() == wanted)
    })
}

/// Case-insensitive substring match against any of `columns`.
///
/// `needle` must already be lower-cased. Missing values never match, and an
/// empty needle matches every row.
pub fn row_matches_search<R: Record>(row: &R, needle: &str, columns: &[R::Key]) -> bool {
    if needle.is_empty() {
        return true;
    }
    columns.iter().any(|key| {
        row.field(key)
            .is_some_and(|value| value.to_string().to_lowercase().contains(needle))
    })
}

pub fn filter_rows<'a, R: Record>(
    rows: &'a [R],
    filters: &FilterState<R::Key>,
    search: &str,
    columns: &[R::Key],
) -> Vec<&'a R> {
    let needle = search.to_lowercase();
    rows.iter()
        .filter(|row| row_matches_filters(*row, filters) && row_matches_search(*row, &needle, columns))
        .collect()
}

/// Total order over optional field values.
///
/// Present values come first, ordered by `partial_cmp`. Missing values, and
/// values that do not compare with themselves (NaN), come after them and
/// compare equal to each other.
pub fn compare_values<V: PartialOrd + ?Sized>(a: Option<&V>, b: Option<&V>) -> Ordering {
    match (a.filter(|v| is_orderable(*v)), b.filter(|v| is_orderable(*v))) {
        (Some(a), Some(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn is_orderable<V: PartialOrd + ?Sized>(value: &V) -> bool {
    value.partial_cmp(value).is_some()
}

/// Stable sort into a new vector; the input is left untouched.
pub fn sort_rows<'a, R: Record>(rows: &[&'a R], sort: Option<&SortConfig<R::Key>>) -> Vec<&'a R> {
    let mut sorted = rows.to_vec();
    let Some(sort) = sort else {
        return sorted;
    };
    sorted.sort_by(|a, b| {
        let ordering = compare_values(a.field(&sort.key), b.field(&sort.key));
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

/// Filters, searches and sorts `rows` in that order.
pub fn run_query<'a, R: Record>(
    rows: &'a [R],
    query: &TableQuery<R::Key>,
    columns: &[R::Key],
) -> Vec<&'a R> {
    let filtered = filter_rows(rows, &query.filters, &query.search, columns);
    sort_rows(&filtered, query.sort.as_ref())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::entities::order::{sample_orders, Order, OrderField};
    use crate::domain::entities::sheet::SheetRow;

    const SEARCH_COLUMNS: [OrderField; 5] = [
        OrderField::Order,
        OrderField::Customer,
        OrderField::Total,
        OrderField::PaymentStatus,
        OrderField::FulfillmentStatus,
    ];

    fn ids(rows: &[&Order]) -> Vec<String> {
        rows.iter().map(|row| row.id.clone()).collect()
    }

    #[test]
    fn search_is_case_insensitive() {
        let orders = sample_orders();
        let rows = filter_rows(&orders, &FilterState::default(), "jAyDoN", &SEARCH_COLUMNS);
        assert_eq!(ids(&rows), vec!["1020"]);
    }

    #[test]
    fn search_ignores_undeclared_columns() {
        let orders = sample_orders();
        // "Jul 20" only appears in the date field, which is not a column here.
        let rows = filter_rows(&orders, &FilterState::default(), "Jul 20", &SEARCH_COLUMNS);
        assert!(rows.is_empty());
    }

    #[test]
    fn empty_query_keeps_rows_in_order() {
        let orders = sample_orders();
        let rows = run_query(&orders, &TableQuery::default(), &SEARCH_COLUMNS);
        assert_eq!(ids(&rows), vec!["1020", "1019", "1018"]);
    }

    #[test]
    fn filters_and_search_combine() {
        let orders = sample_orders();
        let mut filters = FilterState::default();
        filters.select(OrderField::PaymentStatus, "paid");

        let paid = filter_rows(&orders, &filters, "", &SEARCH_COLUMNS);
        assert_eq!(ids(&paid), vec!["1020", "1018"]);

        let paid_leo = filter_rows(&orders, &filters, "leo", &SEARCH_COLUMNS);
        assert_eq!(ids(&paid_leo), vec!["1018"]);
    }

    #[test]
    fn filter_requires_exact_value() {
        let orders = sample_orders();
        let mut filters = FilterState::default();
        filters.select(OrderField::PaymentStatus, "partially");

        assert!(filter_rows(&orders, &filters, "", &SEARCH_COLUMNS).is_empty());
    }

    #[test]
    fn sort_descending_reverses_order() {
        let orders = sample_orders();
        let all: Vec<&Order> = orders.iter().collect();

        let asc = sort_rows(&all, Some(&SortConfig::asc(OrderField::Order)));
        assert_eq!(ids(&asc), vec!["1018", "1019", "1020"]);

        let desc = SortConfig {
            key: OrderField::Order,
            direction: SortDirection::Desc,
        };
        let desc = sort_rows(&all, Some(&desc));
        assert_eq!(ids(&desc), vec!["1020", "1019", "1018"]);

        assert_eq!(ids(&all), vec!["1020", "1019", "1018"]);
    }

    #[test]
    fn sort_is_stable_in_both_directions() {
        let orders = sample_orders();
        let all: Vec<&Order> = orders.iter().collect();

        let asc = sort_rows(&all, Some(&SortConfig::asc(OrderField::PaymentStatus)));
        assert_eq!(ids(&asc), vec!["1020", "1018", "1019"]);

        let desc = SortConfig {
            key: OrderField::PaymentStatus,
            direction: SortDirection::Desc,
        };
        let desc = sort_rows(&all, Some(&desc));
        assert_eq!(ids(&desc), vec!["1019", "1020", "1018"]);
    }

    #[test]
    fn compare_values_places_missing_and_nan_after_present() {
        assert_eq!(compare_values(Some(&1.0), Some(&2.0)), Ordering::Less);
        assert_eq!(compare_values::<str>(Some("b"), Some("a")), Ordering::Greater);

        assert_eq!(compare_values(Some(&2.0), None), Ordering::Less);
        assert_eq!(compare_values::<f64>(None, Some(&2.0)), Ordering::Greater);
        assert_eq!(compare_values::<f64>(None, None), Ordering::Equal);

        assert_eq!(compare_values(Some(&f64::NAN), Some(&2.0)), Ordering::Greater);
        assert_eq!(compare_values(Some(&2.0), Some(&f64::NAN)), Ordering::Less);
        assert_eq!(compare_values(Some(&f64::NAN), None), Ordering::Equal);
    }

    fn gapped_rows(count: usize) -> Vec<SheetRow> {
        (0..count)
            .map(|idx| {
                let mut values = HashMap::new();
                values.insert("name".to_string(), format!("row {idx}"));
                if idx % 3 != 0 {
                    // Reverse-ish order so sorting has work to do.
                    values.insert("v".to_string(), format!("{:03}", (count - idx) * 7 % 101));
                }
                SheetRow::new(idx.to_string(), values)
            })
            .collect()
    }

    fn present_values<'a>(rows: &[&'a SheetRow]) -> Vec<&'a String> {
        rows.iter().filter_map(|row| row.field(&"v".to_string())).collect()
    }

    #[test]
    fn sort_with_missing_values_orders_present_and_keeps_gaps_together() {
        let rows = gapped_rows(60);
        let all: Vec<&SheetRow> = rows.iter().collect();
        let missing = rows.iter().filter(|row| row.field(&"v".to_string()).is_none()).count();
        assert_eq!(missing, 20);

        let asc = sort_rows(&all, Some(&SortConfig::asc("v".to_string())));
        assert_eq!(asc.len(), 60);
        let values = present_values(&asc);
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(asc[..40].iter().all(|row| row.field(&"v".to_string()).is_some()));
        assert!(asc[40..].iter().all(|row| row.field(&"v".to_string()).is_none()));
        // Gaps keep their original relative order.
        let gap_ids: Vec<&str> = asc[40..].iter().map(|row| row.id.as_str()).collect();
        let expected: Vec<String> = (0..60).step_by(3).map(|idx| idx.to_string()).collect();
        assert_eq!(gap_ids, expected.iter().map(String::as_str).collect::<Vec<_>>());

        let desc = SortConfig {
            key: "v".to_string(),
            direction: SortDirection::Desc,
        };
        let desc = sort_rows(&all, Some(&desc));
        assert_eq!(desc.len(), 60);
        let values = present_values(&desc);
        assert!(values.windows(2).all(|pair| pair[0] >= pair[1]));
        assert!(desc[..20].iter().all(|row| row.field(&"v".to_string()).is_none()));
    }

    #[test]
    fn sort_with_missing_values_scales_past_small_inputs() {
        for count in [50, 500, 5000] {
            let rows = gapped_rows(count);
            let all: Vec<&SheetRow> = rows.iter().collect();
            let asc = sort_rows(&all, Some(&SortConfig::asc("v".to_string())));
            assert_eq!(asc.len(), count);
            let values = present_values(&asc);
            assert!(values.windows(2).all(|pair| pair[0] <= pair[1]), "count {count}");
        }
    }
}
