pub mod child_record;
