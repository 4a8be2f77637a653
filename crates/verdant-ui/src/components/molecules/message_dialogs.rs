//! Dialog hosts bound to the alert and confirm stores.
//!
//! # Design
//! - Each host renders a controlled dialog whose open flag is the store's flag.
//! - Any close request clears the store.
//! - The confirm host runs the stored action after its reducer returns, so the action may
//!   dispatch to the same store.

use crate::components::molecules::dialog::{
    DialogCancel, DialogConfirm, DialogContent, DialogDescription, DialogFooter, DialogTitle,
    use_dialog,
};
use crate::core::control::Controllable;
use crate::store::{AlertDialogStore, ConfirmDialogStore};
use yew::prelude::*;
use yewdux::prelude::use_store;

const ALERT_TITLE_ID: &str = "alert-dialog-title";
const ALERT_DESCRIPTION_ID: &str = "alert-dialog-description";
const CONFIRM_TITLE_ID: &str = "confirm-dialog-title";
const CONFIRM_DESCRIPTION_ID: &str = "confirm-dialog-description";

#[derive(Properties, PartialEq)]
pub struct MessageDialogProps {
    #[prop_or(AttrValue::Static("OK"))]
    pub confirm_label: AttrValue,
    #[prop_or(AttrValue::Static("Cancel"))]
    pub cancel_label: AttrValue,
}

#[function_component(AlertDialogHost)]
pub fn alert_dialog_host(props: &MessageDialogProps) -> Html {
    let (store, dispatch) = use_store::<AlertDialogStore>();
    let on_change = Callback::from(move |open: bool| {
        if !open {
            dispatch.reduce_mut(AlertDialogStore::clear_alert);
        }
    });
    let handle = use_dialog(&Controllable::controlled(store.dialog.open, on_change));

    html! {
        <DialogContent
            handle={handle.clone()}
            class="alert-dialog"
            labelled_by={ALERT_TITLE_ID}
            described_by={ALERT_DESCRIPTION_ID}
        >
            <DialogTitle id={ALERT_TITLE_ID}>{ store.dialog.title.clone() }</DialogTitle>
            <DialogDescription id={ALERT_DESCRIPTION_ID}>
                { store.dialog.description.clone() }
            </DialogDescription>
            <DialogFooter>
                <DialogConfirm handle={handle}>{ props.confirm_label.clone() }</DialogConfirm>
            </DialogFooter>
        </DialogContent>
    }
}

#[function_component(ConfirmDialogHost)]
pub fn confirm_dialog_host(props: &MessageDialogProps) -> Html {
    let (store, dispatch) = use_store::<ConfirmDialogStore>();
    // Set by the confirm button, consumed by the close request that follows it.
    let confirmed = use_mut_ref(|| false);
    let on_change = {
        let confirmed = confirmed.clone();
        Callback::from(move |open: bool| {
            if open {
                return;
            }
            let run = confirmed.replace(false);
            let mut action = None;
            dispatch.reduce_mut(|store| {
                if run {
                    action = store.confirm();
                } else {
                    store.clear_confirm();
                }
            });
            if let Some(action) = action {
                action.emit(());
            }
        })
    };
    let handle = use_dialog(&Controllable::controlled(store.dialog.open, on_change));
    let on_confirm = Callback::from(move |()| {
        *confirmed.borrow_mut() = true;
    });

    html! {
        <DialogContent
            handle={handle.clone()}
            class="confirm-dialog"
            labelled_by={CONFIRM_TITLE_ID}
            described_by={CONFIRM_DESCRIPTION_ID}
        >
            <DialogTitle id={CONFIRM_TITLE_ID}>{ store.dialog.title.clone() }</DialogTitle>
            <DialogDescription id={CONFIRM_DESCRIPTION_ID}>
                { store.dialog.description.clone() }
            </DialogDescription>
            <DialogFooter>
                <DialogCancel handle={handle.clone()}>{ props.cancel_label.clone() }</DialogCancel>
                <DialogConfirm handle={handle} on_action={on_confirm}>
                    { props.confirm_label.clone() }
                </DialogConfirm>
            </DialogFooter>
        </DialogContent>
    }
}
