pub mod reply_file;

pub use reply_file::ReplyFile;
