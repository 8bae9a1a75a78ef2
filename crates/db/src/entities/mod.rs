//! `SeaORM` entity definitions.

pub mod records;
