//! File I/O, frontmatter extraction, reference checks

mod frontmatter;
mod fs;
mod references;

pub use frontmatter::{DELIMITER, FrontmatterCheck, extract};
pub use fs::{FsError, read_skill};
pub use references::{LinkRef, check_references, find_links};
