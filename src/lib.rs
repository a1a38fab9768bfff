pub mod juman;
pub mod knp;
pub mod utility;
