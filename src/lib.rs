// src/lib.rs
#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod catalog;
pub mod util;

pub mod viewer;
pub mod tree_view;
pub mod checks;

pub mod session;
