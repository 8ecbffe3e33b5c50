pub mod apply;
pub mod config;
pub mod facts;
pub mod plan;
