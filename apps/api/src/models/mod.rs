pub mod company;
pub mod technology;
pub mod user;
