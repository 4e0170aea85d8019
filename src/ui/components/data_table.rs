use std::rc::Rc;

use dioxus::prelude::*;

use crate::config::DEFAULT_SEARCH_DELAY_MS;
use crate::domain::entities::record::{FilterDef, Record, SortConfig, SortDirection};
use crate::ui::hooks::debounce::use_debounce;
use crate::ui::state::table_state::TableState;

pub type CellRenderer<R> = Rc<dyn Fn(Option<&<R as Record>::Value>, &R) -> Element>;

/// How one field is shown in the table.
pub struct ColumnDef<R: Record> {
    pub key: R::Key,
    pub header: String,
    pub render: CellRenderer<R>,
    pub sortable: bool,
}

impl<R: Record> ColumnDef<R> {
    /// Plain-text column, not sortable.
    pub fn new(key: R::Key, header: impl Into<String>) -> Self {
        Self {
            key,
            header: header.into(),
            render: Rc::new(text_cell::<R>),
            sortable: false,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn render(mut self, render: impl Fn(Option<&R::Value>, &R) -> Element + 'static) -> Self {
        self.render = Rc::new(render);
        self
    }
}

impl<R: Record> Clone for ColumnDef<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            render: Rc::clone(&self.render),
            sortable: self.sortable,
        }
    }
}

impl<R: Record> PartialEq for ColumnDef<R> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.header == other.header
            && self.sortable == other.sortable
            && Rc::ptr_eq(&self.render, &other.render)
    }
}

pub fn text_cell<R: Record>(value: Option<&R::Value>, _row: &R) -> Element {
    match value {
        Some(value) => rsx! { "{value}" },
        None => rsx! {},
    }
}

pub fn search_input_style() -> &'static str {
    "border: 1px solid #bbb; padding: 8px; margin-left: 8px; border-radius: 6px;"
}

pub fn table_header_cell_style(sortable: bool) -> String {
    let cursor = if sortable { "pointer" } else { "default" };
    format!(
        "padding: 16px 24px; text-align: left; border-bottom: 1px solid #e5e5e5; font-weight: 500; white-space: nowrap; cursor: {cursor}; user-select: none;"
    )
}

pub fn table_body_cell_style() -> &'static str {
    "padding: 16px 24px; white-space: nowrap; font-weight: 500;"
}

fn aria_sort<K: PartialEq>(sort: Option<&SortConfig<K>>, key: &K) -> &'static str {
    match sort {
        Some(active) if active.key == *key => match active.direction {
            SortDirection::Asc => "ascending",
            SortDirection::Desc => "descending",
        },
        _ => "none",
    }
}

pub fn filter_select_id<K: std::fmt::Display>(key: &K) -> String {
    format!("filter-select-{key}")
}

/// What one `th` shows: label, sort indicator and `aria-sort` state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell<K> {
    pub key: K,
    pub label: String,
    pub sortable: bool,
    pub indicator: &'static str,
    pub aria_sort: &'static str,
}

/// One header cell per column, in column order, whatever rows are visible.
pub fn header_cells<R: Record>(
    columns: &[ColumnDef<R>],
    view: &TableState<R::Key>,
) -> Vec<HeaderCell<R::Key>> {
    columns
        .iter()
        .map(|column| HeaderCell {
            key: column.key.clone(),
            label: column.header.clone(),
            sortable: column.sortable,
            indicator: view.sort_indicator(&column.key),
            aria_sort: aria_sort(view.sort(), &column.key),
        })
        .collect()
}

/// Searchable, filterable, sortable table over `data`.
///
/// Search input is debounced by `search_delay_ms`; filter selections and
/// header clicks apply immediately.
#[component]
pub fn DataTable<R: Record>(
    data: Vec<R>,
    columns: Vec<ColumnDef<R>>,
    #[props(default)] filters: Vec<FilterDef<R::Key>>,
    #[props(default = DEFAULT_SEARCH_DELAY_MS)] search_delay_ms: i64,
) -> Element {
    let mut state = use_signal(TableState::<R::Key>::new);
    let search = use_debounce(search_delay_ms, move |text: String| {
        let mut state = state;
        state.write().set_search(text);
    });

    let view = state();
    let column_keys: Vec<R::Key> = columns.iter().map(|column| column.key.clone()).collect();
    let visible = view.visible_rows(&data, &column_keys);
    let current_search = view.search().to_string();
    let headers = header_cells(&columns, &view);

    rsx! {
        div {
            div { style: "margin-bottom: 16px;",
                label {
                    "Search"
                    input {
                        r#type: "text",
                        placeholder: "Search everywhere",
                        initial_value: "{current_search}",
                        style: search_input_style(),
                        oninput: {
                            let search = search.clone();
                            move |event: FormEvent| search.call(event.value())
                        },
                        onkeydown: move |event: KeyboardEvent| {
                            if event.key() == Key::Enter && search.is_pending() {
                                search.flush();
                            }
                        },
                    }
                }
            }

            if !filters.is_empty() {
                div {
                    {filters.iter().map(|filter| {
                        let field = filter.key.clone();
                        let field_id = filter.key.to_string();
                        let select_id = filter_select_id(&filter.key);
                        let selected = view.filter_value(&filter.key).to_string();
                        let label = filter.label.clone();
                        let options = filter.options.clone();
                        rsx!(
                            div { key: "{field_id}", style: "margin-bottom: 8px;",
                                label { r#for: "{select_id}", "{label}: " }
                                select {
                                    id: "{select_id}",
                                    value: "{selected}",
                                    onchange: move |event: FormEvent| {
                                        state.write().select_filter(field.clone(), event.value());
                                    },
                                    option { value: "", selected: selected.is_empty(), "All" }
                                    for opt in options.iter() {
                                        option {
                                            key: "{opt}",
                                            value: "{opt}",
                                            selected: *opt == selected,
                                            "{opt}"
                                        }
                                    }
                                }
                            }
                        )
                    })}
                }
            }

            table { style: "border-collapse: collapse; table-layout: auto;",
                thead {
                    tr {
                        {headers.into_iter().map(|cell| {
                            let field_id = cell.key.to_string();
                            let HeaderCell {
                                key: field,
                                label,
                                sortable,
                                indicator,
                                aria_sort: sort_state,
                            } = cell;
                            rsx!(
                                th {
                                    key: "{field_id}",
                                    scope: "col",
                                    "aria-sort": sort_state,
                                    "data-column": "{field_id}",
                                    style: table_header_cell_style(sortable),
                                    onclick: move |_| {
                                        state.write().click_header(field.clone(), sortable);
                                    },
                                    "{label}"
                                    span { "{indicator}" }
                                }
                            )
                        })}
                    }
                }
                tbody {
                    {visible.iter().map(|&row| {
                        let row_id = row.id();
                        rsx!(
                            tr {
                                key: "{row_id}",
                                "data-row": "{row_id}",
                                style: "border-bottom: 1px solid #e5e5e5;",
                                {columns.iter().map(|column| {
                                    let field_id = column.key.to_string();
                                    let content = (column.render)(row.field(&column.key), row);
                                    rsx!(
                                        td {
                                            key: "{field_id}-{row_id}",
                                            "data-column": "{field_id}",
                                            style: table_body_cell_style(),
                                            {content}
                                        }
                                    )
                                })}
                            }
                        )
                    })}
                }
            }
        }
    }
}
