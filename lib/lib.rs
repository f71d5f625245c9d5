/// Martian Chess domain types and rules.
pub mod chess;
