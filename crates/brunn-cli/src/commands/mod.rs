pub mod check;
pub mod rules;
pub mod screen;
pub mod survey;
