use std::fmt;

use crate::domain::entities::record::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderField {
    Order,
    Customer,
    Total,
    PaymentStatus,
    FulfillmentStatus,
}

impl OrderField {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderField::Order => "order",
            OrderField::Customer => "customer",
            OrderField::Total => "total",
            OrderField::PaymentStatus => "paymentStatus",
            OrderField::FulfillmentStatus => "fulfillmentStatus",
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the orders page. `date` is not a column key; the order cell
/// shows it on hover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: String,
    pub order: String,
    pub date: String,
    pub customer: String,
    pub total: String,
    pub payment_status: String,
    pub fulfillment_status: String,
}

impl Record for Order {
    type Key = OrderField;
    type Value = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, key: &OrderField) -> Option<&String> {
        let value = match key {
            OrderField::Order => &self.order,
            OrderField::Customer => &self.customer,
            OrderField::Total => &self.total,
            OrderField::PaymentStatus => &self.payment_status,
            OrderField::FulfillmentStatus => &self.fulfillment_status,
        };
        Some(value)
    }
}

fn order(
    id: &str,
    date: &str,
    customer: &str,
    total: &str,
    payment_status: &str,
    fulfillment_status: &str,
) -> Order {
    Order {
        id: id.to_string(),
        order: format!("#{id}"),
        date: date.to_string(),
        customer: customer.to_string(),
        total: total.to_string(),
        payment_status: payment_status.to_string(),
        fulfillment_status: fulfillment_status.to_string(),
    }
}

pub fn sample_orders() -> Vec<Order> {
    vec![
        order(
            "1020",
            "Jul 20 at 4:34pm",
            "Jaydon Stanton",
            "$969.44",
            "paid",
            "fulfilled",
        ),
        order(
            "1019",
            "Jul 20 at 3:46pm",
            "Ruben Westerfelt",
            "$701.19",
            "partially paid",
            "unfulfilled",
        ),
        order(
            "1018",
            "Jul 20 at 3.44pm",
            "Leo Carder",
            "$798.24",
            "paid",
            "unfulfilled",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_orders_keep_their_placed_dates() {
        let orders = sample_orders();
        let dates: Vec<&str> = orders.iter().map(|o| o.date.as_str()).collect();
        assert_eq!(dates, vec!["Jul 20 at 4:34pm", "Jul 20 at 3:46pm", "Jul 20 at 3.44pm"]);
    }

    #[test]
    fn field_keys_name_the_displayed_columns() {
        let keys: Vec<String> = [
            OrderField::Order,
            OrderField::Customer,
            OrderField::Total,
            OrderField::PaymentStatus,
            OrderField::FulfillmentStatus,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        assert_eq!(
            keys,
            vec!["order", "customer", "total", "paymentStatus", "fulfillmentStatus"]
        );
    }
}
