pub mod price;

pub use price::{format_price, price_placeholder};
