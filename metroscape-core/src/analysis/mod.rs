pub mod climate;
pub mod index;
pub mod mobility;
pub mod resources;
pub mod sustainability;
