//! # Domain Services
//!
//! エンティティに属さないビジネスルール

pub mod result_formatter;
