use dioxus::prelude::*;

/// Marks a submit as running. Returns `false` when one already is, so a
/// second click in the same tick does nothing. Call before `spawn` and
/// clear the flag when the task finishes.
pub fn claim(mut flag: Signal<bool>) -> bool {
    if *flag.peek() {
        return false;
    }
    flag.set(true);
    true
}
