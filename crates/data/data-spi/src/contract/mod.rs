//! Contract module containing data traits.

mod data_source;

pub use data_source::DataSource;
