//! Schema inference from untyped records.

mod engine;
mod profile;

pub use engine::{
    DEFAULT_MAX_DISTINCT_VALUES, DEFAULT_SAMPLE_SIZE, InferenceConfig, SchemaInference,
    infer_schema,
};
pub use profile::{FieldProfile, FieldProfiles};
