pub mod header;
pub mod layout;
pub mod page;

#[cfg(test)]
mod test;

pub use header::Header;
pub use layout::Layout;
pub use page::Page;
