pub mod generate;
pub mod read;
