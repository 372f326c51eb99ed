//! Transient notification surface: at most one notice on screen, newest
//! wins, auto-dismissed after a fixed dwell plus a short exit transition.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::{NOTICE_ENTER_MS, NOTICE_EXIT_MS, NOTICE_VISIBLE_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl NotificationKind {
    pub fn color(self) -> &'static str {
        match self {
            NotificationKind::Info => "#3b82f6",
            NotificationKind::Success => "#10b981",
            NotificationKind::Error => "#ef4444",
            NotificationKind::Warning => "#f59e0b",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Owns the single visible notice. Posting replaces the current one outright
/// (no queue); ids increase monotonically so a replaced notice's pending
/// dismissal can be told apart from the new one's.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct NoticeBoard {
    next_id: u64,
    current: Option<Notice>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some(Notice {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Ignores ids that have already been replaced.
    pub fn close(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationHostProps {
    pub notice: Option<Notice>,
    pub on_closed: Callback<u64>,
}

#[function_component(NotificationHost)]
pub fn notification_host(props: &NotificationHostProps) -> Html {
    let shown = use_state_eq(|| false);
    let leaving = use_state_eq(|| false);

    {
        let shown = shown.clone();
        let leaving = leaving.clone();
        let on_closed = props.on_closed.clone();
        let key = props.notice.as_ref().map(|n| n.id);
        // Timers are keyed to the notice id: replacing the notice drops the
        // old timeouts, so a stale dismissal can never remove the new one.
        use_effect_with_deps(
            move |key: &Option<u64>| {
                shown.set(false);
                leaving.set(false);
                let mut timers = Vec::new();
                if let Some(id) = *key {
                    let shown = shown.clone();
                    timers.push(Timeout::new(NOTICE_ENTER_MS, move || shown.set(true)));
                    let leaving = leaving.clone();
                    timers.push(Timeout::new(NOTICE_VISIBLE_MS, move || leaving.set(true)));
                    timers.push(Timeout::new(NOTICE_VISIBLE_MS + NOTICE_EXIT_MS, move || {
                        on_closed.emit(id);
                    }));
                }
                move || drop(timers)
            },
            key,
        );
    }

    let Some(notice) = props.notice.clone() else {
        return html! {};
    };

    let class = classes!(
        "notification",
        (*shown && !*leaving).then_some("visible"),
    );

    html! {
        <>
            <style>
                {r#"
                    .notification {
                        position: fixed;
                        top: 20px;
                        right: 20px;
                        padding: 16px 24px;
                        border-radius: 8px;
                        color: white;
                        font-weight: 500;
                        z-index: 1000;
                        max-width: 400px;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                        transform: translateX(calc(100% + 20px));
                        transition: transform 0.3s ease;
                    }
                    .notification.visible {
                        transform: translateX(0);
                    }
                "#}
            </style>
            <div class={class} style={format!("background: {};", notice.kind.color())}>
                { notice.message }
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posting_replaces_the_current_notice() {
        let mut board = NoticeBoard::new();
        board.post("first", NotificationKind::Info);
        board.post("second", NotificationKind::Warning);
        board.post("third", NotificationKind::Success);
        let current = board.current().expect("a notice is visible");
        assert_eq!(current.message, "third");
        assert_eq!(current.kind, NotificationKind::Success);
    }

    #[test]
    fn notice_ids_increase_monotonically() {
        let mut board = NoticeBoard::new();
        let a = board.post("a", NotificationKind::Info);
        let b = board.post("b", NotificationKind::Info);
        assert!(b > a);
    }

    #[test]
    fn closing_the_current_notice_clears_the_board() {
        let mut board = NoticeBoard::new();
        let id = board.post("bye", NotificationKind::Info);
        board.close(id);
        assert!(board.current().is_none());
    }

    #[test]
    fn closing_a_replaced_notice_is_ignored() {
        let mut board = NoticeBoard::new();
        let stale = board.post("old", NotificationKind::Info);
        board.post("new", NotificationKind::Error);
        board.close(stale);
        assert_eq!(board.current().map(|n| n.message.as_str()), Some("new"));
    }

    #[test]
    fn kinds_map_to_fixed_colors() {
        assert_eq!(NotificationKind::Info.color(), "#3b82f6");
        assert_eq!(NotificationKind::Success.color(), "#10b981");
        assert_eq!(NotificationKind::Error.color(), "#ef4444");
        assert_eq!(NotificationKind::Warning.color(), "#f59e0b");
    }

    #[test]
    fn default_kind_is_info() {
        assert_eq!(NotificationKind::default(), NotificationKind::Info);
    }
}
