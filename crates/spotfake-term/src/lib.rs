#![no_std]

pub mod analytics;
pub mod input;
pub mod render;
pub mod slide;
