pub mod resume;

pub use resume::TailoredResume;
