//! Runs test code inside a live component scope so signals can be created
//! and written the way handlers do at runtime.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
struct ScopeProps {
    body: fn() -> String,
}

#[allow(non_snake_case)]
fn Scope(props: ScopeProps) -> Element {
    let outcome = use_hook(|| (props.body)());
    rsx! { "{outcome}" }
}

/// Renders the string returned by `body`, which runs once in a component scope.
pub fn run_in_scope(body: fn() -> String) -> String {
    let mut dom = VirtualDom::new_with_props(Scope, ScopeProps { body });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
