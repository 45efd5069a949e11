//! Use cases (application services)

pub mod order_session;
pub mod take_order;
