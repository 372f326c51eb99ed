//! Fixed header with the section tabs and the mobile menu. The active-tab
//! state lives in `App`; this component only renders it and reports clicks.

use wasm_bindgen::JsCast;
use web_sys::{
    HtmlElement, KeyboardEvent, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::tracker::{SectionExtent, SectionId};

/// Measure every section element currently in the document, in page order.
pub fn measure_extents() -> Vec<(SectionId, Option<SectionExtent>)> {
    let document = web_sys::window().and_then(|w| w.document());
    SectionId::ALL
        .into_iter()
        .map(|id| {
            let extent = document
                .as_ref()
                .and_then(|d| d.get_element_by_id(id.dom_id()))
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                .map(|el| {
                    let start = el.offset_top() as f64;
                    SectionExtent {
                        start,
                        end: start + el.offset_height() as f64,
                    }
                });
            (id, extent)
        })
        .collect()
}

/// Smooth-scroll so the section's top aligns with the viewport top.
pub fn scroll_to_section(id: SectionId) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(element) = document.get_element_by_id(id.dom_id()) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub active: SectionId,
    pub on_navigate: Callback<String>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let menu_open = use_state_eq(|| false);

    let on_tab = {
        let on_navigate = props.on_navigate.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            let target: HtmlElement = e.target_unchecked_into();
            // clicks can land on a child of the trigger
            let section = target.get_attribute("data-section").or_else(|| {
                target
                    .closest("[data-section]")
                    .ok()
                    .flatten()
                    .and_then(|el| el.get_attribute("data-section"))
            });
            if let Some(section) = section {
                on_navigate.emit(section);
            }
            menu_open.set(false);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    {
        let menu_open = menu_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                menu_open.set(false);
            }
        });
    }

    let tabs = || -> Html {
        SectionId::ALL
            .into_iter()
            .map(|id| {
                html! {
                    <button
                        class={classes!(
                            "tab-trigger",
                            (props.active == id).then_some("active"),
                        )}
                        data-section={id.dom_id()}
                        onclick={on_tab.clone()}
                    >
                        { id.label() }
                    </button>
                }
            })
            .collect()
    };

    html! {
        <nav class="site-nav">
            <style>
                {r#"
                    .site-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 72px;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 0 32px;
                        background: rgba(255, 255, 255, 0.92);
                        backdrop-filter: blur(8px);
                        border-bottom: 1px solid #e5e7eb;
                        z-index: 900;
                    }
                    .nav-logo {
                        font-size: 1.2rem;
                        font-weight: 700;
                        color: #111827;
                        letter-spacing: -0.02em;
                    }
                    .nav-logo span {
                        color: #2563eb;
                    }
                    .nav-tabs {
                        display: flex;
                        gap: 8px;
                    }
                    .tab-trigger {
                        border: none;
                        background: none;
                        padding: 8px 16px;
                        border-radius: 8px;
                        font-size: 15px;
                        font-weight: 500;
                        color: #4b5563;
                        cursor: pointer;
                        transition: all 0.2s ease;
                    }
                    .tab-trigger:hover {
                        color: #111827;
                        background: #f3f4f6;
                    }
                    .tab-trigger.active {
                        color: #2563eb;
                        background: #eff6ff;
                    }
                    .mobile-menu-toggle {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        border: none;
                        background: none;
                        cursor: pointer;
                        padding: 8px;
                    }
                    .mobile-menu-toggle span {
                        width: 22px;
                        height: 2px;
                        background: #111827;
                        transition: transform 0.2s ease;
                    }
                    .mobile-menu-toggle.open span:nth-child(1) {
                        transform: translateY(7px) rotate(45deg);
                    }
                    .mobile-menu-toggle.open span:nth-child(2) {
                        opacity: 0;
                    }
                    .mobile-menu-toggle.open span:nth-child(3) {
                        transform: translateY(-7px) rotate(-45deg);
                    }
                    .mobile-menu {
                        display: none;
                        position: fixed;
                        top: 72px;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        background: white;
                        border-bottom: 1px solid #e5e7eb;
                        padding: 8px 16px 16px;
                        z-index: 890;
                    }
                    @media (max-width: 768px) {
                        .nav-tabs {
                            display: none;
                        }
                        .mobile-menu-toggle {
                            display: flex;
                        }
                        .mobile-menu.open {
                            display: flex;
                        }
                        .mobile-menu .tab-trigger {
                            text-align: left;
                            padding: 12px 8px;
                        }
                    }
                "#}
            </style>
            <div class="nav-logo">{"Dakota "}<span>{"Digital Design"}</span></div>
            <div class="nav-tabs">
                { tabs() }
            </div>
            <button
                class={classes!("mobile-menu-toggle", (*menu_open).then_some("open"))}
                onclick={toggle_menu}
                aria-label="Toggle menu"
            >
                <span></span>
                <span></span>
                <span></span>
            </button>
            <div class={classes!("mobile-menu", (*menu_open).then_some("open"))}>
                { tabs() }
            </div>
        </nav>
    }
}
