//! A library which implements the facelet-level state of an NxNxN Rubik's cube:
//! six colored faces together with the edge propagation rules that relate them
//! under face turns.

#![deny(missing_docs)]

pub mod cubenxn;
pub mod error;
