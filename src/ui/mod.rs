pub mod items;
pub mod panels;
pub mod plot;
