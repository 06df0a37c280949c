use leptos::{html, prelude::*};
use leptos_use::{use_mouse_in_element, UseMouseInElementReturn};

use crate::motion::tilt;

/// Card that leans towards the pointer while it hovers over it.
#[component]
pub fn TiltCard(children: Children) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let UseMouseInElementReturn {
        element_x,
        element_y,
        element_width,
        element_height,
        is_outside,
        ..
    } = use_mouse_in_element(target);

    let style = move || {
        tilt(
            element_x.get(),
            element_y.get(),
            element_width.get(),
            element_height.get(),
            is_outside.get(),
        )
        .style()
    };

    view! {
        <div node_ref=target class="transform-gpu transition-transform duration-200 ease-out" style=style>
            {children()}
        </div>
    }
}
