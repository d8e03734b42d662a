pub mod format;
pub mod io;
pub mod models;


// Re-export key types for easier usage
pub use format::{Block, Segment, format_reply};
pub use io::*;
pub use models::ReplyFile;
