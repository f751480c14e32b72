pub mod persons;
