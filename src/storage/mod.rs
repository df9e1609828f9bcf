pub mod archive;
pub mod backup;
pub mod writer;

pub use archive::{archive_records, read_archive, ArchiveSummary};
pub use backup::create_backup;
pub use writer::{load_json, save_html, save_json};
