pub mod candidates;
pub mod entity;
pub mod relations;
