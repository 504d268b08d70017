pub mod category;
pub mod restaurant;
pub mod theme;
