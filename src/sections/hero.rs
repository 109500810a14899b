use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::components::navbar::scroll_to_section;
use crate::viewport;

/// How far the background layers drift for a pointer at the viewport edge.
const PARALLAX_SCALE: f64 = 20.0;

// Pre-computed particle placements (left %, top %, delay s, duration s) so
// the field looks scattered without recomputing positions per render.
const PARTICLES: &[(f64, f64, f64, f64)] = &[
    (4.0, 18.0, 0.0, 4.6),
    (11.0, 72.0, 1.3, 5.4),
    (17.0, 35.0, 0.4, 4.2),
    (23.0, 88.0, 2.1, 5.8),
    (29.0, 12.0, 0.9, 4.9),
    (36.0, 54.0, 1.7, 4.4),
    (42.0, 27.0, 0.2, 5.1),
    (48.0, 81.0, 1.1, 4.7),
    (55.0, 45.0, 2.4, 5.6),
    (61.0, 9.0, 0.6, 4.3),
    (67.0, 66.0, 1.9, 5.2),
    (73.0, 31.0, 0.3, 4.8),
    (79.0, 93.0, 1.5, 5.7),
    (85.0, 50.0, 0.8, 4.5),
    (91.0, 22.0, 2.2, 5.3),
    (96.0, 77.0, 1.0, 4.1),
];

#[function_component(Hero)]
pub fn hero() -> Html {
    let mouse_offset = use_state(|| (0.0_f64, 0.0_f64));

    {
        let mouse_offset = mouse_offset.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let move_callback = Closure::wrap(Box::new(move |event: MouseEvent| {
                    let width = window_clone
                        .inner_width()
                        .ok()
                        .and_then(|w| w.as_f64())
                        .unwrap_or(1.0);
                    let height = window_clone
                        .inner_height()
                        .ok()
                        .and_then(|h| h.as_f64())
                        .unwrap_or(1.0);
                    mouse_offset.set((
                        viewport::pointer_offset(event.client_x() as f64, width, PARALLAX_SCALE),
                        viewport::pointer_offset(event.client_y() as f64, height, PARALLAX_SCALE),
                    ));
                }) as Box<dyn FnMut(MouseEvent)>);

                window
                    .add_event_listener_with_callback(
                        "mousemove",
                        move_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "mousemove",
                            move_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let (x, y) = *mouse_offset;

    let services_click = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("services");
    });
    let contact_click = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("contact");
    });

    html! {
        <section id="home" class="hero">
            <div class="hero-background">
                <div
                    class="hero-image"
                    style={format!("transform: translate({}px, {}px) scale(1.05);", x, y)}
                ></div>
                <div class="hero-shade"></div>
                // Glow drifts against the image for depth.
                <div
                    class="hero-glow"
                    style={format!("transform: translate({}px, {}px);", -x, -y)}
                ></div>
            </div>

            <div class="hero-particles">
                {
                    PARTICLES.iter().enumerate().map(|(i, (left, top, delay, duration))| html! {
                        <span
                            key={i}
                            class="hero-particle"
                            style={format!(
                                "left: {}%; top: {}%; animation-delay: {}s; animation-duration: {}s;",
                                left, top, delay, duration
                            )}
                        ></span>
                    }).collect::<Html>()
                }
            </div>

            <div class="hero-content">
                <div class="hero-heading">
                    <h1>
                        {"Crafting Visual"}
                        <br />
                        <span class="hero-heading-accent">{"Excellence"}</span>
                    </h1>
                    <div
                        class="hero-heading-glow"
                        style={format!("transform: translate({}px, {}px);", x * 0.5, y * 0.5)}
                    ></div>
                </div>
                <p class="hero-subtitle">
                    {"We bring your events to life through cutting-edge audiovisual \
                      solutions, creating unforgettable experiences that captivate and \
                      inspire."}
                </p>
                <div class="hero-cta-group">
                    <a href="#services" class="hero-cta hero-cta-indigo" onclick={services_click}>
                        <span>{"Our Services"}</span>
                    </a>
                    <a href="#contact" class="hero-cta hero-cta-purple" onclick={contact_click}>
                        <span>{"Get in Touch"}</span>
                    </a>
                </div>
            </div>

            <div class="hero-scroll-hint">
                <span>{"Scroll"}</span>
                <svg
                    width="24"
                    height="24"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    <path d="M19 14l-7 7m0 0l-7-7m7 7V3" />
                </svg>
            </div>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }

                    .hero-background {
                        position: absolute;
                        inset: 0;
                    }

                    .hero-image {
                        position: absolute;
                        inset: -40px;
                        background-image: url('https://images.unsplash.com/photo-1492684223066-81342ee5ff30');
                        background-size: cover;
                        background-position: center;
                        opacity: 0.5;
                        will-change: transform;
                    }

                    .hero-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(
                            to bottom,
                            rgba(3, 0, 20, 0.95),
                            rgba(14, 7, 37, 0.98),
                            #030014
                        );
                    }

                    .hero-glow {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(
                            circle at center,
                            rgba(99, 102, 241, 0.2),
                            transparent 60%
                        );
                        will-change: transform;
                    }

                    .hero-particles {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                    }

                    .hero-particle {
                        position: absolute;
                        width: 4px;
                        height: 4px;
                        border-radius: 50%;
                        background: linear-gradient(135deg, rgba(99, 102, 241, 0.3), rgba(168, 85, 247, 0.3));
                        animation: particle-float 5s ease-in-out infinite;
                    }

                    @keyframes particle-float {
                        0%, 100% {
                            transform: translateY(0) scale(1);
                            opacity: 0.2;
                        }
                        50% {
                            transform: translateY(-30px) scale(2);
                            opacity: 0.6;
                        }
                    }

                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1rem;
                        text-align: center;
                    }

                    .hero-heading {
                        position: relative;
                        display: inline-block;
                        margin-bottom: 1.5rem;
                    }

                    .hero-heading h1 {
                        font-size: clamp(3.5rem, 10vw, 6rem);
                        font-weight: 700;
                        line-height: 1.05;
                        margin: 0;
                        background: linear-gradient(90deg, #ffffff, #e0e7ff, #c7d2fe);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    .hero-heading-accent {
                        background: linear-gradient(90deg, #a5b4fc, #e9d5ff, #fbcfe8);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    .hero-heading-glow {
                        position: absolute;
                        inset: -4px;
                        background: linear-gradient(90deg, rgba(99, 102, 241, 0.2), rgba(168, 85, 247, 0.2));
                        filter: blur(24px);
                        z-index: -1;
                        will-change: transform;
                    }

                    .hero-subtitle {
                        font-size: clamp(1.25rem, 2.5vw, 1.5rem);
                        color: rgba(224, 231, 255, 0.8);
                        line-height: 1.6;
                        max-width: 42rem;
                        margin: 0 auto 3rem auto;
                    }

                    .hero-cta-group {
                        display: flex;
                        gap: 1.5rem;
                        justify-content: center;
                        flex-wrap: wrap;
                    }

                    .hero-cta {
                        position: relative;
                        padding: 1rem 2rem;
                        border-radius: 0.5rem;
                        text-decoration: none;
                        font-weight: 500;
                        color: #e0e7ff;
                        backdrop-filter: blur(4px);
                        transition: transform 0.2s ease, border-color 0.3s ease, background 0.3s ease;
                    }

                    .hero-cta:hover {
                        transform: scale(1.05);
                    }

                    .hero-cta:active {
                        transform: scale(0.95);
                    }

                    .hero-cta-indigo {
                        background: rgba(99, 102, 241, 0.1);
                        border: 1px solid rgba(99, 102, 241, 0.2);
                    }

                    .hero-cta-indigo:hover {
                        border-color: rgba(99, 102, 241, 0.4);
                        background: rgba(99, 102, 241, 0.25);
                    }

                    .hero-cta-purple {
                        background: rgba(168, 85, 247, 0.1);
                        border: 1px solid rgba(168, 85, 247, 0.2);
                    }

                    .hero-cta-purple:hover {
                        border-color: rgba(168, 85, 247, 0.4);
                        background: rgba(168, 85, 247, 0.25);
                    }

                    .hero-scroll-hint {
                        position: absolute;
                        bottom: 3rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        color: rgba(199, 210, 254, 0.5);
                    }

                    .hero-scroll-hint span {
                        font-size: 0.875rem;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                    }

                    .hero-scroll-hint svg {
                        animation: scroll-bounce 1.2s ease-in-out infinite;
                    }

                    @keyframes scroll-bounce {
                        0%, 100% {
                            transform: translateY(0);
                        }
                        50% {
                            transform: translateY(8px);
                        }
                    }
                "#}
            </style>
        </section>
    }
}
