pub mod block_quote;
pub mod code_block;
pub mod header;
pub mod list;
pub mod paragraph;

pub use block_quote::BlockQuote;
pub use code_block::CodeBlock;
pub use header::Header;
pub use list::ListMarker;
pub use paragraph::Paragraph;
