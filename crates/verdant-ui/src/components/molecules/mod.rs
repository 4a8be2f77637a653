//! Compound widgets and store-bound hosts.

pub mod dialog;
pub mod dropdown;
pub mod field;
mod floating_menu;
pub mod infinite_scroll;
pub mod message_dialogs;
pub mod multi_select;
pub mod radio_group;
pub mod select;
pub mod toast;

pub use dialog::{
    DialogCancel, DialogConfirm, DialogContent, DialogDescription, DialogFooter, DialogTitle,
    DialogTrigger, use_dialog,
};
pub use dropdown::{
    DropdownHandle, DropdownItem, DropdownMenu, DropdownRoot, DropdownTrigger, use_dropdown,
};
pub use field::{
    FieldDescription, FieldElementsBox, FieldLabel, FieldMessage, FieldRoot, FieldTitle,
};
pub use infinite_scroll::InfiniteScrollContainer;
pub use message_dialogs::{AlertDialogHost, ConfirmDialogHost};
pub use multi_select::{
    MultiSelectHandle, MultiSelectItem, MultiSelectMenu, MultiSelectRoot, MultiSelectTrigger,
    SelectOptions, use_multi_select,
};
pub use radio_group::{RadioGroupHandle, RadioGroupItem, RadioGroupRoot, use_radio_group};
pub use select::Select;
pub use toast::{ToastViewport, use_toast};
