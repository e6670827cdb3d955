pub mod competitors;
