mod order;
mod user;

pub use order::Order;
pub use user::User;
