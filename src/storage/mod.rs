pub mod memory;

pub use memory::Store;
