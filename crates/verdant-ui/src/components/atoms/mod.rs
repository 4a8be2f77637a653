//! Presentational building blocks with no compound state.

pub mod avatar;
pub mod button;
pub mod card;
pub mod checkbox;
pub mod grid;
pub mod image_box;
pub mod input;
pub mod portal;
pub mod skeleton;
pub mod spinner;
pub mod text;

pub use avatar::Avatar;
pub use button::Button;
pub use card::Card;
pub use checkbox::Checkbox;
pub use grid::Grid;
pub use image_box::{ContainedImageBox, MasonryImageBox, StandardImageBox};
pub use input::Input;
pub use portal::Portal;
pub use skeleton::Skeleton;
pub use spinner::Spinner;
pub use text::Text;
