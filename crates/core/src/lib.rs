pub mod formatting;
pub mod pipeline;
pub mod segmentation;
pub mod shared;
pub mod transcript;

pub use pipeline::generate_subtitles_use_case::generate_subtitles;
