pub mod align;
pub mod operation;
