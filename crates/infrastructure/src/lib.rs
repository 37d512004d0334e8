pub mod dns;
pub mod hosting;
