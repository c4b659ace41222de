//! Engine for the "spot the fake document" quiz.
//!
//! The crate is `no_std` and allocation free. Hosts drive it by calling
//! [`session::QuizApp::tick`] with a monotonic millisecond clock and render
//! whatever [`session::QuizApp::with_screen`] hands them.

#![no_std]

pub mod analytics;
pub mod bootstrap;
pub mod catalog;
pub mod config;
pub mod input;
pub mod ledger;
pub mod render;
pub mod round;
pub mod session;
pub mod signup;
pub mod text_policy;
pub mod timer;
