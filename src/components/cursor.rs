use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

/// Glowing dot that trails the pointer. Hidden on touch-only layouts where
/// no mousemove events arrive.
#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let position = use_state(|| None::<(f64, f64)>);

    {
        let position = position.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                let move_callback = Closure::wrap(Box::new(move |event: MouseEvent| {
                    position.set(Some((event.client_x() as f64, event.client_y() as f64)));
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

    let style = match *position {
        Some((x, y)) => format!("transform: translate3d({}px, {}px, 0);", x, y),
        None => "opacity: 0;".to_string(),
    };

    html! {
        <>
            <div class="custom-cursor" {style}>
                <div class="custom-cursor-dot"></div>
                <div class="custom-cursor-ring"></div>
            </div>
            <style>
                {r#"
                    .custom-cursor {
                        position: fixed;
                        top: 0;
                        left: 0;
                        z-index: 200;
                        pointer-events: none;
                        transition: opacity 0.3s ease;
                    }

                    .custom-cursor-dot {
                        position: absolute;
                        top: -3px;
                        left: -3px;
                        width: 6px;
                        height: 6px;
                        border-radius: 50%;
                        background: #a5b4fc;
                    }

                    .custom-cursor-ring {
                        position: absolute;
                        top: -16px;
                        left: -16px;
                        width: 32px;
                        height: 32px;
                        border-radius: 50%;
                        border: 1px solid rgba(99, 102, 241, 0.4);
                    }

                    @media (pointer: coarse) {
                        .custom-cursor {
                            display: none;
                        }
                    }
                "#}
            </style>
        </>
    }
}
