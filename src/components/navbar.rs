use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};

use crate::viewport::{self, SectionBounds};

const NAV_ITEMS: &[(&str, &str)] = &[
    ("Home", "home"),
    ("Experience", "experiences"),
    ("Services", "services"),
    ("Contact", "contact"),
];

/// Smooth-scrolls the viewport to the section carrying `id`.
pub fn scroll_to_section(id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Ok(Some(element)) = document.query_selector(&format!("#{}", id)) {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let is_scrolled = use_state(|| false);
    let active_section = use_state(|| "home".to_string());
    let menu_open = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        let active_section = active_section.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 50.0);

                    let viewport_height = window_clone
                        .inner_height()
                        .ok()
                        .and_then(|h| h.as_f64())
                        .unwrap_or(0.0);

                    // Bounds are re-read on every event; layout shifts as
                    // images load, so cached rects go stale.
                    let mut bounds = Vec::new();
                    if let Ok(nodes) = document.query_selector_all("section[id]") {
                        for i in 0..nodes.length() {
                            if let Some(element) = nodes
                                .get(i)
                                .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
                            {
                                let rect = element.get_bounding_client_rect();
                                bounds.push(SectionBounds::new(
                                    element.id(),
                                    rect.top(),
                                    rect.bottom(),
                                ));
                            }
                        }
                    }

                    // No match keeps the previous highlight rather than
                    // clearing it.
                    if let Some(id) = viewport::active_section(&bounds, viewport_height) {
                        active_section.set(id.to_string());
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                scroll_callback
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL)
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_link = |label: &'static str, target: &'static str, mobile: bool| -> Html {
        let onclick = {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                scroll_to_section(target);
                menu_open.set(false);
            })
        };
        let active = *active_section == target;
        let class = match (mobile, active) {
            (false, true) => "nav-link active",
            (false, false) => "nav-link",
            (true, true) => "mobile-nav-link active",
            (true, false) => "mobile-nav-link",
        };
        html! {
            <a href={format!("#{}", target)} {class} {onclick}>
                { label }
                { if !mobile && active { html! { <span class="nav-link-underline"></span> } } else { html! {} } }
            </a>
        }
    };

    let logo_click = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("home");
    });

    html! {
        <>
            <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
                <div class="nav-content">
                    <a href="#home" class="nav-logo" onclick={logo_click}>{"Neuron"}</a>

                    <ul class="nav-links">
                        {
                            NAV_ITEMS.iter().map(|&(label, target)| html! {
                                <li key={target}>{ nav_link(label, target, false) }</li>
                            }).collect::<Html>()
                        }
                    </ul>

                    <button
                        class={classes!("burger-menu", (*menu_open).then(|| "open"))}
                        onclick={toggle_menu}
                        aria-label="Toggle menu"
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            <div
                                class="mobile-menu-backdrop"
                                onclick={
                                    let menu_open = menu_open.clone();
                                    Callback::from(move |_| menu_open.set(false))
                                }
                            ></div>
                            <div class="mobile-menu-links">
                                {
                                    NAV_ITEMS.iter().map(|&(label, target)| html! {
                                        <div key={target}>{ nav_link(label, target, true) }</div>
                                    }).collect::<Html>()
                                }
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1.5rem;
                        transition: background 0.3s ease, backdrop-filter 0.3s ease;
                    }

                    .top-nav.scrolled {
                        background: rgba(3, 0, 20, 0.8);
                        backdrop-filter: blur(12px);
                        -webkit-backdrop-filter: blur(12px);
                    }

                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .nav-logo {
                        font-size: 1.25rem;
                        font-weight: 700;
                        text-decoration: none;
                        background: linear-gradient(90deg, #ffffff, #e0e7ff, #c7d2fe);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                        transition: transform 0.2s ease;
                    }

                    .nav-logo:hover {
                        transform: scale(1.05);
                    }

                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }

                    .nav-link {
                        position: relative;
                        padding: 0.25rem 0.5rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-decoration: none;
                        color: rgba(224, 231, 255, 0.8);
                        transition: color 0.2s ease;
                    }

                    .nav-link:hover,
                    .nav-link.active {
                        color: #e0e7ff;
                    }

                    .nav-link-underline {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: -4px;
                        height: 2px;
                        border-radius: 1px;
                        background: linear-gradient(90deg, #6366f1, #a855f7);
                    }

                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        padding: 0.5rem;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }

                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: rgba(224, 231, 255, 0.8);
                        border-radius: 1px;
                        transition: transform 0.2s ease, opacity 0.2s ease;
                    }

                    .burger-menu.open span:nth-child(1) {
                        transform: translateY(7px) rotate(45deg);
                    }

                    .burger-menu.open span:nth-child(2) {
                        opacity: 0;
                    }

                    .burger-menu.open span:nth-child(3) {
                        transform: translateY(-7px) rotate(-45deg);
                    }

                    .mobile-menu {
                        position: fixed;
                        inset: 0;
                        z-index: 40;
                    }

                    .mobile-menu-backdrop {
                        position: absolute;
                        inset: 0;
                        background: rgba(3, 0, 20, 0.98);
                        backdrop-filter: blur(12px);
                    }

                    .mobile-menu-links {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 2rem;
                        padding: 6rem 1.5rem;
                    }

                    .mobile-nav-link {
                        font-size: 1.5rem;
                        font-weight: 700;
                        text-decoration: none;
                        color: rgba(224, 231, 255, 0.6);
                        transition: color 0.2s ease;
                    }

                    .mobile-nav-link:hover {
                        color: #e0e7ff;
                    }

                    .mobile-nav-link.active {
                        background: linear-gradient(90deg, #ffffff, #e0e7ff, #c7d2fe);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }

                        .burger-menu {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </>
    }
}
