use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Trailing-edge debounce: each call re-arms the timer, so `f` runs once the
/// calls have been quiet for `ms`. Dropping the pending `Timeout` cancels it.
pub fn debounce(ms: u32, f: impl Fn() + Clone + 'static) -> impl Fn() + Clone {
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    move || {
        let f = f.clone();
        let slot = pending.clone();
        let timeout = Timeout::new(ms, move || {
            slot.borrow_mut().take();
            f();
        });
        *pending.borrow_mut() = Some(timeout);
    }
}
