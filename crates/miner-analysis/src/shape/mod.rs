//! Shape inference: the field-path signature of a single record.

pub mod signature;

pub use signature::{signature_of, signature_with_depth, FieldSignature, ShapeInferencer};
