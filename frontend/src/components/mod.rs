pub mod cards;
pub mod icons;
pub mod links;
pub mod parallax;
pub mod reveal;
