use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};
use yew::prelude::*;
use yew_hooks::prelude::use_mount;

use crate::animation::{is_in_view, reveal_style, visible_fraction, Entrance};

/// Registers `handler` on window `scroll` and `resize`, runs it once, and
/// returns a destructor that removes it again.
fn listen_viewport(handler: Rc<dyn Fn()>) -> Box<dyn FnOnce()> {
    let Some(window) = web_sys::window() else {
        return Box::new(|| ());
    };

    handler();
    let callback = {
        let handler = handler.clone();
        Closure::<dyn Fn()>::new(move || handler())
    };
    for event in ["scroll", "resize"] {
        let _ = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
    }

    Box::new(move || {
        for event in ["scroll", "resize"] {
            let _ = window
                .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        }
    })
}

fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Becomes `true` the first time `amount` of the node is on screen and
/// stays `true`.
#[hook]
pub fn use_in_view(node: NodeRef, amount: f64) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |(node, amount)| {
                let node = node.clone();
                let amount = *amount;
                let seen = Rc::new(Cell::new(false));
                let destructor = listen_viewport(Rc::new(move || {
                    if seen.get() {
                        return;
                    }
                    let (Some(window), Some(element)) = (web_sys::window(), node.cast::<Element>()) else {
                        return;
                    };
                    let rect = element.get_bounding_client_rect();
                    let fraction = visible_fraction(rect.top(), rect.bottom(), viewport_height(&window));
                    if is_in_view(fraction, amount) {
                        seen.set(true);
                        in_view.set(true);
                    }
                }));
                move || destructor()
            },
            (node, amount),
        );
    }

    *in_view
}

#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state_eq(|| 0.0_f64);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let destructor = listen_viewport(Rc::new(move || {
                    if let Some(y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                        scroll_y.set(y);
                    }
                }));
                move || destructor()
            },
            (),
        );
    }

    *scroll_y
}

/// `false` during the first render, `true` once mounted in the browser.
#[hook]
pub fn use_is_client() -> bool {
    let mounted = use_state_eq(|| false);
    {
        let mounted = mounted.clone();
        use_mount(move || mounted.set(true));
    }
    *mounted
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub visible: bool,
    #[prop_or(Entrance::Fade)]
    pub entrance: Entrance,
    #[prop_or(0.7)]
    pub duration: f64,
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let style = reveal_style(props.entrance, props.visible, props.duration, props.delay);
    html! {
        <div class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}
