pub mod models;
mod snapshot;

pub use crate::snapshot::{Snapshot, LastUpdate};
