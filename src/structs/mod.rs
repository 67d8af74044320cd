pub mod category;
pub mod link;
pub mod suggestion;
