//! The generative pipeline: seed -> stream -> gradient, shapes, core mark ->
//! variant.

pub mod core_mark;
pub mod gradient;
pub mod shapes;
pub mod variant;

pub use core_mark::{compose_core_mark, CoreMark, CoreMarkKind, CoreMarkLayer};
pub use gradient::{compose_gradient, GradientDescriptor};
pub use shapes::{generate_shapes, LogoShape, ShapeForm};
pub use variant::{generate_variants, LogoVariant, VariantAssembler, VARIANTS_PER_REQUEST};
