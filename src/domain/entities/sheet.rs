use std::collections::HashMap;

use crate::domain::entities::record::Record;

/// A record loaded from a delimited file, addressed by header name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub id: String,
    pub values: HashMap<String, String>,
}

impl SheetRow {
    pub fn new(id: impl Into<String>, values: HashMap<String, String>) -> Self {
        Self {
            id: id.into(),
            values,
        }
    }
}

impl Record for SheetRow {
    type Key = String;
    type Value = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, key: &String) -> Option<&String> {
        self.values.get(key)
    }
}

/// Loaded headers plus rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sheet {
    pub columns: Vec<String>,
    pub rows: Vec<SheetRow>,
}
