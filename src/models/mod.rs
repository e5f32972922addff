pub mod ride;
