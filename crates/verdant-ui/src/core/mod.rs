//! Core, DOM-free primitives and helpers for the component library.
pub mod breakpoints;
pub mod control;
pub mod dialog;
pub mod disclosure;
pub mod floating;
pub mod grid;
pub mod image;
pub mod infinite_scroll;
pub mod outside;
pub mod pagination;
pub mod selection;
pub mod toast;
pub mod ui;
