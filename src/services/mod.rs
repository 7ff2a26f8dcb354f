//! Service modules for the GroupShare endpoints.

mod files;

pub use files::FilesService;
