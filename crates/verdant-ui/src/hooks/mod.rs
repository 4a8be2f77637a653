//! Browser-facing hooks that wire the DOM-free core into Yew components.

mod controllable;
mod disclosure;
mod floating;
mod infinite_scroll;
mod outside;

pub use controllable::{ControlledValue, use_controllable};
pub use disclosure::{DisclosureHandle, use_disclosure};
pub use floating::use_floating_position;
pub use infinite_scroll::use_infinite_scroll;
pub use outside::use_outside_interaction;
