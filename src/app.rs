use std::path::Path;

use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::domain::entities::order::{sample_orders, Order, OrderField};
use crate::domain::entities::record::FilterDef;
use crate::domain::entities::sheet::{Sheet, SheetRow};
use crate::infra::import::csv::load_sheet;
use crate::ui::components::data_table::{ColumnDef, DataTable};

#[derive(Debug, Clone, PartialEq)]
pub enum TableSource {
    Orders(Vec<Order>),
    Sheet(Sheet),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSource {
    pub source: TableSource,
    pub status: String,
}

/// Loads the CSV given on the command line, or the built-in orders. A CSV
/// that fails to load falls back to the orders and reports why.
pub fn load_source(csv_path: Option<&Path>) -> LoadedSource {
    let Some(path) = csv_path else {
        return LoadedSource {
            source: TableSource::Orders(sample_orders()),
            status: "Showing sample orders".to_string(),
        };
    };
    match load_sheet(path) {
        Ok(sheet) => {
            let status = format!("Loaded {} rows from {}", sheet.rows.len(), path.display());
            LoadedSource {
                source: TableSource::Sheet(sheet),
                status,
            }
        }
        Err(err) => {
            log::warn!("failed to load {}: {err:#}", path.display());
            LoadedSource {
                source: TableSource::Orders(sample_orders()),
                status: format!("Failed to load {}: {err:#}", path.display()),
            }
        }
    }
}

pub fn order_columns() -> Vec<ColumnDef<Order>> {
    vec![
        ColumnDef::new(OrderField::Order, "Order")
            .sortable()
            .render(|value: Option<&String>, row: &Order| {
                let order = value.map(String::as_str).unwrap_or_default();
                let placed = row.date.clone();
                rsx! {
                    span { title: "{placed}", "{order}" }
                }
            }),
        ColumnDef::new(OrderField::Customer, "Customer").sortable(),
        ColumnDef::new(OrderField::Total, "Total")
            .sortable()
            .render(|value: Option<&String>, _row: &Order| {
                let total = value.map(String::as_str).unwrap_or_default();
                rsx! {
                    div { style: "text-align: right; font-weight: 500;", "{total}" }
                }
            }),
        ColumnDef::new(OrderField::PaymentStatus, "Payment status"),
        ColumnDef::new(OrderField::FulfillmentStatus, "Fulfillment status"),
    ]
}

pub fn order_filters(orders: &[Order]) -> Vec<FilterDef<OrderField>> {
    vec![
        FilterDef::from_rows(orders, OrderField::PaymentStatus, "Payment Status"),
        FilterDef::from_rows(orders, OrderField::FulfillmentStatus, "Fulfillment Status"),
    ]
}

/// Every header of a loaded sheet becomes a sortable text column.
pub fn sheet_columns(sheet: &Sheet) -> Vec<ColumnDef<SheetRow>> {
    sheet
        .columns
        .iter()
        .map(|name| ColumnDef::new(name.clone(), name.clone()).sortable())
        .collect()
}

#[component]
fn OrdersTable(orders: Vec<Order>, search_delay_ms: i64) -> Element {
    let columns = use_hook(order_columns);
    let filters = order_filters(&orders);

    rsx! {
        DataTable::<Order> {
            data: orders,
            columns,
            filters,
            search_delay_ms,
        }
    }
}

#[component]
fn SheetTable(sheet: Sheet, search_delay_ms: i64) -> Element {
    let columns = use_hook(|| sheet_columns(&sheet));

    rsx! {
        DataTable::<SheetRow> {
            data: sheet.rows,
            columns,
            search_delay_ms,
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let csv_path = config.csv_path.clone();
    let loaded = use_hook(move || load_source(csv_path.as_deref()));
    let status = loaded.status.clone();
    let title = config.window_title.clone();
    let search_delay_ms = config.search_delay_ms;

    rsx! {
        div {
            style: "font-family: sans-serif; padding: 12px; background: #fff; min-height: 100vh;",
            h2 { "{title}" }
            p { style: "color: #666; margin: 0 0 12px 0;", "{status}" }
            {match loaded.source {
                TableSource::Orders(orders) => rsx! {
                    OrdersTable { orders, search_delay_ms }
                },
                TableSource::Sheet(sheet) => rsx! {
                    SheetTable { sheet, search_delay_ms }
                },
            }}
        }
    }
}
