pub mod crew;
pub mod health;
