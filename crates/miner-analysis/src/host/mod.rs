//! Host implementations backed by data captured from a page.

pub mod capture;

pub use capture::{CapturedCollection, CapturedHost, CapturedObject};
