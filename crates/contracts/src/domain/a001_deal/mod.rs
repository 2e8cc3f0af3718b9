pub mod aggregate;
pub mod query;

pub use aggregate::Deal;
pub use query::{DealSort, DealsQuery};
