pub mod catalog_reader;
pub mod descriptor_reader;
pub mod file_writer;

pub use catalog_reader::DirCatalogSource;
pub use descriptor_reader::DirDescriptorSource;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
