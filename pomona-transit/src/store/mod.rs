mod codec;
mod mutation_ops;
mod query_ops;
mod schema;
mod seed;
mod store_error;
mod transit_store;

pub use store_error::StoreError;
pub use transit_store::TransitStore;
