#![doc(hidden)]

//! Yew components, built on the hooks and the DOM-free core.

pub mod atoms;
pub mod foundations;
pub mod molecules;
