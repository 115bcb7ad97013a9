pub mod instagram;
pub mod pdf_extractor;

pub use instagram::*;
pub use pdf_extractor::*;
