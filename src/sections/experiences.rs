use yew::prelude::*;
use web_sys::MouseEvent;

use crate::viewport;

/// Pointer tilt range for a card, same scale the hero uses for the window.
const CARD_TILT_SCALE: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Experience {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub video_url: Option<&'static str>,
    pub stats: &'static [(&'static str, &'static str)],
}

const EXPERIENCES: &[Experience] = &[
    Experience {
        id: 1,
        title: "Corporate Conference",
        description: "Full AV setup with immersive displays and crystal-clear audio systems",
        image: "https://images.unsplash.com/photo-1540575467063-178a50c2df87",
        video_url: None,
        stats: &[
            ("Attendees", "500+"),
            ("Duration", "3 Days"),
            ("Equipment", "12+ Systems"),
        ],
    },
    Experience {
        id: 2,
        title: "Music Festival",
        description: "State-of-the-art stage and sound management for an unforgettable experience",
        image: "https://images.unsplash.com/photo-1470229722913-7c0e2dbbafd3",
        video_url: Some("/experiences/festival.mp4"),
        stats: &[
            ("Attendees", "10,000+"),
            ("Duration", "4 Days"),
            ("Equipment", "50+ Systems"),
        ],
    },
    Experience {
        id: 3,
        title: "Product Launch",
        description: "Cutting-edge product presentation with stunning visual effects",
        image: "https://images.unsplash.com/photo-1505373877841-8d25f7d46678",
        video_url: None,
        stats: &[
            ("Attendees", "300+"),
            ("Duration", "1 Day"),
            ("Equipment", "8+ Systems"),
        ],
    },
    Experience {
        id: 4,
        title: "Wedding Ceremony",
        description: "Elegant audio and lighting setup for your special moment",
        image: "https://images.unsplash.com/photo-1519741497674-611481863552",
        video_url: None,
        stats: &[
            ("Attendees", "200+"),
            ("Duration", "1 Day"),
            ("Equipment", "6+ Systems"),
        ],
    },
];

#[derive(Properties, PartialEq)]
struct ExperienceCardProps {
    experience: Experience,
    on_select: Callback<Experience>,
}

#[function_component(ExperienceCard)]
fn experience_card(props: &ExperienceCardProps) -> Html {
    let hovered = use_state(|| false);
    let tilt = use_state(|| (0.0_f64, 0.0_f64));
    let card_ref = use_node_ref();

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| {
            hovered.set(false);
            tilt.set((0.0, 0.0));
        })
    };
    let onmousemove = {
        let tilt = tilt.clone();
        let card_ref = card_ref.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(element) = card_ref.cast::<web_sys::Element>() {
                let rect = element.get_bounding_client_rect();
                tilt.set((
                    viewport::pointer_offset(
                        event.client_x() as f64 - rect.left(),
                        rect.width(),
                        CARD_TILT_SCALE,
                    ),
                    viewport::pointer_offset(
                        event.client_y() as f64 - rect.top(),
                        rect.height(),
                        CARD_TILT_SCALE,
                    ),
                ));
            }
        })
    };
    let onclick = {
        let on_select = props.on_select.clone();
        let experience = props.experience.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(experience.clone()))
    };

    let (tx, ty) = *tilt;

    html! {
        <div
            ref={card_ref}
            class={classes!("experience-card", (*hovered).then(|| "hovered"))}
            {onmouseenter}
            {onmouseleave}
            {onmousemove}
            {onclick}
        >
            <div
                class="experience-card-media"
                style={format!("transform: translate({}px, {}px);", tx * 0.5, ty * 0.5)}
            >
                <img src={props.experience.image} alt={props.experience.title} loading="lazy" />
                <div class="experience-card-shade"></div>
            </div>

            // Text drifts against the image for the tilt illusion.
            <div
                class="experience-card-body"
                style={format!("transform: translate({}px, {}px);", -tx * 0.5, -ty * 0.5)}
            >
                <h3>{ props.experience.title }</h3>
                <p>{ props.experience.description }</p>

                {
                    if !props.experience.stats.is_empty() {
                        html! {
                            <div class="experience-card-stats">
                                {
                                    props.experience.stats.iter().map(|(label, value)| html! {
                                        <div key={*label}>
                                            <p class="stat-label">{ *label }</p>
                                            <p class="stat-value">{ *value }</p>
                                        </div>
                                    }).collect::<Html>()
                                }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <span class="experience-card-more">
                    {"View Details"}
                    <svg
                        width="16"
                        height="16"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    >
                        <path d="M5 12h14M12 5l7 7-7 7" />
                    </svg>
                </span>
            </div>

            {
                if props.experience.video_url.is_some() {
                    html! {
                        <div class="experience-card-play">
                            <svg
                                width="16"
                                height="16"
                                viewBox="0 0 24 24"
                                fill="currentColor"
                            >
                                <path d="M8 5v14l11-7z" />
                            </svg>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ExperienceModalProps {
    experience: Experience,
    on_close: Callback<()>,
}

#[function_component(ExperienceModal)]
fn experience_modal(props: &ExperienceModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="experience-modal" onclick={close.clone()}>
            <button class="experience-modal-close" onclick={close} aria-label="Close">
                <svg
                    width="24"
                    height="24"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                >
                    <path d="M18 6L6 18M6 6l12 12" />
                </svg>
            </button>

            <div class="experience-modal-body" onclick={swallow}>
                {
                    if let Some(video_url) = props.experience.video_url {
                        html! {
                            <video src={video_url} controls={true} autoplay={true} />
                        }
                    } else {
                        html! {
                            <div class="experience-modal-figure">
                                <img src={props.experience.image} alt={props.experience.title} />
                                <div class="experience-modal-shade"></div>
                                <div class="experience-modal-caption">
                                    <h3>{ props.experience.title }</h3>
                                    <p>{ props.experience.description }</p>
                                </div>
                            </div>
                        }
                    }
                }
            </div>
        </div>
    }
}

#[function_component(Experiences)]
pub fn experiences() -> Html {
    let selected = use_state(|| None::<Experience>);

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |experience: Experience| selected.set(Some(experience)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    html! {
        <section id="experiences" class="experiences">
            <div class="section-glow"></div>

            <div class="section-container">
                <div class="section-heading">
                    <h2>{"Our Experiences"}</h2>
                    <div class="section-heading-rule"></div>
                    <p>
                        {"Discover our portfolio of successful events where we've delivered \
                          exceptional audiovisual experiences"}
                    </p>
                </div>

                <div class="experience-grid">
                    {
                        EXPERIENCES.iter().map(|experience| html! {
                            <ExperienceCard
                                key={experience.id}
                                experience={experience.clone()}
                                on_select={on_select.clone()}
                            />
                        }).collect::<Html>()
                    }
                </div>
            </div>

            {
                if let Some(experience) = (*selected).clone() {
                    html! { <ExperienceModal experience={experience} on_close={on_close} /> }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                    .experiences {
                        position: relative;
                        padding: 8rem 0;
                        overflow: hidden;
                    }

                    .experience-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 2rem;
                    }

                    @media (max-width: 768px) {
                        .experience-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    .experience-card {
                        position: relative;
                        height: 400px;
                        overflow: hidden;
                        border-radius: 1rem;
                        cursor: pointer;
                        background: rgba(14, 7, 37, 0.2);
                        border: 1px solid rgba(99, 102, 241, 0.1);
                    }

                    .experience-card-media {
                        position: absolute;
                        inset: -12px;
                        opacity: 0.75;
                        transition: opacity 0.3s ease;
                        will-change: transform;
                    }

                    .experience-card.hovered .experience-card-media {
                        opacity: 1;
                    }

                    .experience-card-media img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transform: scale(1.1);
                        transition: transform 0.4s ease;
                    }

                    .experience-card.hovered .experience-card-media img {
                        transform: scale(1.15);
                    }

                    .experience-card-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(
                            to bottom,
                            transparent,
                            rgba(3, 0, 20, 0.5),
                            rgba(3, 0, 20, 0.95)
                        );
                        opacity: 0.7;
                        transition: opacity 0.3s ease;
                    }

                    .experience-card.hovered .experience-card-shade {
                        opacity: 0.9;
                    }

                    .experience-card-body {
                        position: absolute;
                        inset: 0;
                        padding: 2rem;
                        display: flex;
                        flex-direction: column;
                        justify-content: flex-end;
                        will-change: transform;
                    }

                    .experience-card-body h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin: 0 0 0.75rem 0;
                        background: linear-gradient(90deg, #ffffff, #e0e7ff, #c7d2fe);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    .experience-card-body > p {
                        color: rgba(199, 210, 254, 0.8);
                        margin: 0 0 1.5rem 0;
                    }

                    .experience-card-stats {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }

                    .stat-label {
                        font-size: 0.875rem;
                        color: #a5b4fc;
                        margin: 0 0 0.25rem 0;
                    }

                    .stat-value {
                        font-weight: 600;
                        color: #ffffff;
                        margin: 0;
                    }

                    .experience-card-more {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #a5b4fc;
                    }

                    .experience-card-more svg {
                        transition: transform 0.3s ease;
                    }

                    .experience-card.hovered .experience-card-more svg {
                        transform: translateX(4px);
                    }

                    .experience-card-play {
                        position: absolute;
                        top: 1.5rem;
                        right: 1.5rem;
                        padding: 0.5rem;
                        border-radius: 50%;
                        background: rgba(99, 102, 241, 0.9);
                        color: #ffffff;
                        backdrop-filter: blur(4px);
                        opacity: 0;
                        transform: scale(0);
                        transition: opacity 0.2s ease, transform 0.2s ease;
                    }

                    .experience-card.hovered .experience-card-play {
                        opacity: 1;
                        transform: scale(1);
                    }

                    .experience-modal {
                        position: fixed;
                        inset: 0;
                        z-index: 60;
                        background: rgba(0, 0, 0, 0.95);
                        backdrop-filter: blur(12px);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        animation: modal-in 0.3s ease both;
                    }

                    @keyframes modal-in {
                        from {
                            opacity: 0;
                        }
                        to {
                            opacity: 1;
                        }
                    }

                    .experience-modal-close {
                        position: absolute;
                        top: 1.5rem;
                        right: 1.5rem;
                        z-index: 10;
                        padding: 0.5rem;
                        border: none;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.1);
                        color: rgba(255, 255, 255, 0.8);
                        cursor: pointer;
                        backdrop-filter: blur(4px);
                        transition: color 0.2s ease, transform 0.2s ease;
                    }

                    .experience-modal-close:hover {
                        color: #ffffff;
                        transform: scale(1.1);
                    }

                    .experience-modal-body {
                        width: 100%;
                        max-width: 72rem;
                        animation: modal-body-in 0.3s ease both;
                    }

                    @keyframes modal-body-in {
                        from {
                            opacity: 0;
                            transform: scale(0.9);
                        }
                        to {
                            opacity: 1;
                            transform: scale(1);
                        }
                    }

                    .experience-modal-body video {
                        width: 100%;
                        border-radius: 1rem;
                        border: 1px solid rgba(99, 102, 241, 0.2);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                    }

                    .experience-modal-figure {
                        position: relative;
                        overflow: hidden;
                        border-radius: 1rem;
                        border: 1px solid rgba(99, 102, 241, 0.2);
                    }

                    .experience-modal-figure img {
                        width: 100%;
                        aspect-ratio: 16 / 9;
                        object-fit: cover;
                        display: block;
                    }

                    .experience-modal-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(
                            to bottom,
                            transparent,
                            rgba(3, 0, 20, 0.5),
                            rgba(3, 0, 20, 0.95)
                        );
                    }

                    .experience-modal-caption {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        padding: 2rem;
                    }

                    .experience-modal-caption h3 {
                        font-size: 1.875rem;
                        font-weight: 700;
                        color: #ffffff;
                        margin: 0 0 1rem 0;
                    }

                    .experience-modal-caption p {
                        font-size: 1.125rem;
                        color: rgba(199, 210, 254, 0.8);
                        max-width: 42rem;
                        margin: 0;
                    }
                "#}
            </style>
        </section>
    }
}
