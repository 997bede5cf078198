// Shared UI components

mod code_block;
mod sidebar;

pub use code_block::CodeBlock;
pub use sidebar::Sidebar;
