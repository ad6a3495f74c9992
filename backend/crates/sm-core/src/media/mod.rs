pub mod filename_strategy;
pub mod slug;
pub mod upload_path;
