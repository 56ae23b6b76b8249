pub mod design;
pub mod models;
pub mod reference;
