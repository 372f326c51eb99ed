use log::{info, Level};
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

mod config;
mod components {
    pub mod notification;
    pub mod reveal;
    pub mod scroll_top;
}
mod contact {
    pub mod contact_form;
    pub mod form;
    pub mod transport;
    pub mod validation;
}
mod navigation {
    pub mod navbar;
    pub mod tracker;
}
mod pages {
    pub mod home;
}
mod util {
    pub mod debounce;
}

use components::notification::{NoticeBoard, NotificationHost, NotificationKind};
use components::scroll_top::ScrollToTop;
use navigation::navbar::{measure_extents, scroll_to_section, NavBar};
use navigation::tracker::{SectionId, SectionTracker};
use pages::home::Home;

#[function_component]
fn App() -> Html {
    let active_section = use_state_eq(|| SectionId::Home);
    let tracker = use_mut_ref(SectionTracker::new);
    let notices = use_state(NoticeBoard::new);

    {
        let active_section = active_section.clone();
        let tracker = tracker.clone();
        // every raw scroll event feeds the tracker; it only reports actual
        // section changes, so re-renders stay rare
        use_event_with_window("scroll", move |_: Event| {
            if let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                let extents = measure_extents();
                if let Some(next) = tracker.borrow_mut().on_scroll(scroll_y, &extents) {
                    active_section.set(next);
                }
            }
        });
    }

    let on_navigate = {
        let active_section = active_section.clone();
        let tracker = tracker.clone();
        Callback::from(move |target: String| {
            // optimistic: the indicator moves before the smooth scroll lands;
            // unknown targets fall through silently
            if let Some(id) = tracker.borrow_mut().navigate_to(&target) {
                active_section.set(id);
                scroll_to_section(id);
            }
        })
    };

    let notify = {
        let notices = notices.clone();
        Callback::from(move |(message, kind): (String, NotificationKind)| {
            let mut board = (*notices).clone();
            board.post(message, kind);
            notices.set(board);
        })
    };

    let on_notice_closed = {
        let notices = notices.clone();
        Callback::from(move |id: u64| {
            let mut board = (*notices).clone();
            board.close(id);
            notices.set(board);
        })
    };

    html! {
        <>
            <NavBar active={*active_section} on_navigate={on_navigate.clone()} />
            <Home on_navigate={on_navigate} notify={notify} />
            <NotificationHost notice={notices.current().cloned()} on_closed={on_notice_closed} />
            <ScrollToTop />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
