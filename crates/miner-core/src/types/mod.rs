pub mod collections;
pub mod host;
pub mod record;
