pub mod annotation;
pub mod error;
pub mod traits;
pub mod types;

pub use annotation::{
    AnnotateImageResponse, Block, BoundingPoly, Page, Paragraph, Symbol, TextAnnotation, Vertex,
    Word,
};
pub use error::{Result, TextLensError};
pub use traits::{OcrProvider, Selector};
pub use types::{DetectionMode, Selection};
