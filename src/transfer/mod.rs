//! Plain-text import and export of image URL lists

pub mod export;
pub mod import;

pub use export::{export_contents, export_file_name, DirectoryDownloader, Downloader};
pub use import::{check_extension, parse_url_list, LocalFile, TextFile};
