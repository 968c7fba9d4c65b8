pub mod app;
pub mod cli;
pub mod error;
pub mod labels;
pub mod playlist;
pub mod task;
pub mod timecode;
pub mod timeline;
pub mod util;

pub use app::convert;
pub use error::ConvertError;
