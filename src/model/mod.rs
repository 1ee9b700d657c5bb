/// Bookmark and Folder records and their JSON decoders
pub mod objects;
/// Retry configuration for the request loop
pub mod retry;
