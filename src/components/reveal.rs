//! Decorative reveal-on-scroll wrapper. Purely cosmetic: once the wrapped
//! element scrolls into view it gains `animate-fade-in` and keeps it.

use web_sys::{Element, Event};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{REVEAL_BOTTOM_MARGIN, REVEAL_DEBOUNCE_MS};
use crate::util::debounce::debounce;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let entered = use_state_eq(|| false);

    let check = {
        let node = node.clone();
        let entered = entered.clone();
        move || {
            let Some(element) = node.cast::<Element>() else {
                return;
            };
            let Some(window) = web_sys::window() else {
                return;
            };
            let viewport = window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0);
            if element.get_bounding_client_rect().top() < viewport - REVEAL_BOTTOM_MARGIN {
                entered.set(true);
            }
        }
    };

    {
        // Unlike the nav tracker this handler is debounced; missing a frame
        // of a fade-in is fine.
        let debounced = debounce(REVEAL_DEBOUNCE_MS, check.clone());
        use_event_with_window("scroll", move |_: Event| debounced());
    }

    {
        let check = check.clone();
        // elements already in the first viewport reveal without scrolling
        use_effect_with_deps(
            move |_| {
                check();
                || ()
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!(props.class.clone(), (*entered).then_some("animate-fade-in"))}
        >
            { for props.children.iter() }
        </div>
    }
}
