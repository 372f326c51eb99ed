//! Back-to-top control: hidden until the page is scrolled past a threshold.

use web_sys::{Event, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::SCROLL_TOP_THRESHOLD;

#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_event_with_window("scroll", move |_: Event| {
            if let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                visible.set(scroll_y > SCROLL_TOP_THRESHOLD);
            }
        });
    }

    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    html! {
        <>
            <style>
                {r#"
                    .scroll-to-top {
                        position: fixed;
                        bottom: 20px;
                        right: 20px;
                        width: 50px;
                        height: 50px;
                        border-radius: 50%;
                        background: #2563eb;
                        color: white;
                        border: none;
                        cursor: pointer;
                        font-size: 20px;
                        font-weight: bold;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                        transition: all 0.3s ease;
                        opacity: 0;
                        visibility: hidden;
                        z-index: 1000;
                    }
                    .scroll-to-top.visible {
                        opacity: 1;
                        visibility: visible;
                    }
                    .scroll-to-top:hover {
                        transform: scale(1.1);
                        background: #1d4ed8;
                    }
                "#}
            </style>
            <button
                class={classes!("scroll-to-top", (*visible).then_some("visible"))}
                onclick={onclick}
                aria-label="Back to top"
            >
                {"↑"}
            </button>
        </>
    }
}
