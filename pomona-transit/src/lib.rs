//! record keeping for a small transit operation: trips, scheduled trip
//! offerings, buses, drivers, stops, and the per-stop record of what actually
//! happened on a given run. this crate owns the relational schema and the
//! transactional operations over it; collecting user input and rendering the
//! returned rows is left to the caller.
pub mod model;
pub mod store;
