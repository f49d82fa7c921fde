pub mod linear_transform;
pub mod rotator;

pub use linear_transform::LinearTransform;
pub use rotator::IncrementalRotator;
