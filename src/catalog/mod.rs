use crate::models::{Order, User};

/// Fixed response payloads for every registered route.
///
/// Built once at process start and shared read-only for the process lifetime;
/// records are never created, updated, or deleted afterwards.
#[derive(Debug)]
pub struct Catalog {
    pub orders: Vec<Order>,
    pub expired_orders: Vec<Order>,
    pub users: Vec<User>,
    pub new_users: Vec<User>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            orders: vec![Order::new(101, "laptop"), Order::new(102, "phone")],
            // id 102 appears twice here; the fixture data really does ship a
            // duplicate id, so it is preserved as-is.
            expired_orders: vec![
                Order::new(102, "Trackball"),
                Order::new(102, "windows xp"),
            ],
            users: vec![User::new(1, "atiq khan"), User::new(2, "noman khan")],
            new_users: vec![User::new(1, "Tallal khan"), User::new(2, "saleem khan")],
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
