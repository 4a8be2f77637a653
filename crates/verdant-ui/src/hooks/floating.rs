use crate::core::floating::{FloatingPosition, Rect, Viewport, compute_position};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::window;
use std::rc::Rc;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

/// Keep a floating element positioned against its trigger while `open`.
///
/// Recomputes synchronously on every window resize and (capturing) scroll
/// event. While closed the returned position is parked off-screen.
#[hook]
pub fn use_floating_position(
    trigger: NodeRef,
    floating: NodeRef,
    open: bool,
    gap: f64,
) -> FloatingPosition {
    let position = use_state(FloatingPosition::hidden);

    {
        let position = position.clone();
        use_effect_with(
            (trigger, floating, open, gap),
            move |(trigger, floating, open, gap)| {
                let mut listeners = Vec::new();
                if *open {
                    let recompute: Rc<dyn Fn()> = {
                        let trigger = trigger.clone();
                        let floating = floating.clone();
                        let gap = *gap;
                        Rc::new(move || {
                            if let Some(next) = measure(&trigger, &floating, gap) {
                                position.set(next);
                            }
                        })
                    };
                    recompute();

                    let target = window();
                    let on_resize = recompute.clone();
                    listeners.push(EventListener::new(&target, "resize", move |_| on_resize()));
                    let on_scroll = recompute;
                    listeners.push(EventListener::new_with_options(
                        &target,
                        "scroll",
                        EventListenerOptions::run_in_capture_phase(),
                        move |_| on_scroll(),
                    ));
                } else {
                    position.set(FloatingPosition::hidden());
                }
                move || drop(listeners)
            },
        );
    }

    *position
}

fn measure(trigger: &NodeRef, floating: &NodeRef, gap: f64) -> Option<FloatingPosition> {
    let trigger = trigger.cast::<Element>()?;
    let floating = floating.cast::<HtmlElement>()?;
    let bounds = trigger.get_bounding_client_rect();
    let win = window();
    let viewport = Viewport {
        height: win.inner_height().ok()?.as_f64()?,
        scroll_x: win.scroll_x().ok()?,
        scroll_y: win.scroll_y().ok()?,
    };
    let rect = Rect {
        top: bounds.top(),
        left: bounds.left(),
        bottom: bounds.bottom(),
        width: bounds.width(),
    };
    Some(compute_position(
        rect,
        f64::from(floating.offset_height()),
        viewport,
        gap,
    ))
}
