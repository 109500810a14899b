use yew::prelude::*;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

mod viewport;
mod components {
    pub mod cursor;
    pub mod navbar;
}
mod sections {
    pub mod contact;
    pub mod experiences;
    pub mod hero;
    pub mod services;
}

use components::cursor::CustomCursor;
use components::navbar::Navbar;
use sections::{contact::Contact, experiences::Experiences, hero::Hero, services::Services};

#[function_component(App)]
fn app() -> Html {
    let scroll_progress = use_state(|| 0.0_f64);

    {
        let scroll_progress = scroll_progress.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    let viewport_height = window_clone
                        .inner_height()
                        .ok()
                        .and_then(|h| h.as_f64())
                        .unwrap_or(0.0);
                    let document_height = document
                        .document_element()
                        .map(|el| el.scroll_height() as f64)
                        .unwrap_or(0.0);

                    scroll_progress.set(viewport::scroll_progress(
                        scroll_y,
                        document_height,
                        viewport_height,
                    ));

                    // Mark sections for their entry animation. The class is
                    // only ever added; scrolling back up keeps content shown.
                    if let Ok(nodes) = document.query_selector_all("section") {
                        for i in 0..nodes.length() {
                            if let Some(element) = nodes
                                .get(i)
                                .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
                            {
                                let rect = element.get_bounding_client_rect();
                                if viewport::should_reveal(
                                    rect.top(),
                                    rect.bottom(),
                                    viewport_height,
                                ) {
                                    let _ = element.class_list().add_1("animate-fade-up");
                                }
                            }
                        }
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                // Initial pass so the bar and the hero are right before the
                // first scroll event arrives.
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

    html! {
        <>
            <CustomCursor />
            <div class="scroll-progress" style={format!("width: {}%;", *scroll_progress)}></div>
            <Navbar />
            <main class="page">
                <div class="page-noise"></div>
                <div class="page-gradient"></div>
                <div class="page-content">
                    <Hero />
                    <Experiences />
                    <Services />
                    <Contact />
                </div>
            </main>
            <style>
                {r#"
                    .scroll-progress {
                        position: fixed;
                        top: 0;
                        left: 0;
                        height: 4px;
                        background: linear-gradient(90deg, #6366f1, #a855f7, #ec4899);
                        z-index: 100;
                        pointer-events: none;
                    }

                    .page {
                        position: relative;
                        min-height: 100vh;
                        overflow: hidden;
                        background: #030014;
                    }

                    .page-noise {
                        position: fixed;
                        inset: 0;
                        background-image: radial-gradient(rgba(255, 255, 255, 0.03) 1px, transparent 1px);
                        background-size: 3px 3px;
                        opacity: 0.2;
                        pointer-events: none;
                        mix-blend-mode: soft-light;
                    }

                    .page-gradient {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, #000000, #0E0725, #030014);
                    }

                    .page-content {
                        position: relative;
                        z-index: 10;
                    }

                    .section-glow {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(
                            circle at center,
                            rgba(99, 102, 241, 0.1),
                            transparent 60%
                        );
                        pointer-events: none;
                    }

                    .section-container {
                        position: relative;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }

                    .section-heading {
                        text-align: center;
                        margin-bottom: 5rem;
                    }

                    .section-heading h2 {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 700;
                        margin: 0 0 1rem 0;
                        background: linear-gradient(90deg, #ffffff, #e0e7ff, #c7d2fe);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    .section-heading-rule {
                        width: 5rem;
                        height: 3px;
                        margin: 0 auto 1.5rem auto;
                        border-radius: 2px;
                        background: linear-gradient(90deg, rgba(99, 102, 241, 0.5), rgba(168, 85, 247, 0.5));
                    }

                    .section-heading p {
                        font-size: 1.25rem;
                        color: rgba(199, 210, 254, 0.6);
                        max-width: 42rem;
                        margin: 0 auto;
                    }

                    section.animate-fade-up {
                        animation: fade-up 0.8s cubic-bezier(0.4, 0, 0.2, 1) both;
                    }

                    @keyframes fade-up {
                        from {
                            opacity: 0;
                            transform: translateY(24px);
                        }
                        to {
                            opacity: 1;
                            transform: translateY(0);
                        }
                    }
                "#}
            </style>
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
