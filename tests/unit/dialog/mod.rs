pub mod growing_tree;
pub mod size;
