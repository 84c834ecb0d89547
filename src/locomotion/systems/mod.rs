//! Locomotion domain: system modules for per-frame updates.

pub(crate) mod input;
pub(crate) mod locomotion;

pub(crate) use input::{consume_input_edges, read_input};
pub(crate) use locomotion::tick_controllers;
