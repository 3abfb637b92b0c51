//! # Data Transfer Objects

pub mod workflow_config;
