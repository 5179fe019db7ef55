use serde::{Deserialize, Serialize};

/// A single order record as served on `/orders` and `/expiredOrders`.
///
/// Field order matters: responses serialize as `{"id":...,"item":...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub item: String,
}

impl Order {
    pub fn new(id: u32, item: &str) -> Self {
        Self {
            id,
            item: item.to_string(),
        }
    }
}
