use yew::prelude::*;

struct Service {
    title: &'static str,
    description: &'static str,
    // One or more path segments in a 24x24 stroke icon.
    icon_path: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        title: "Sound Systems",
        description: "Professional audio solutions for crystal-clear sound at any venue size",
        icon_path: "M12 2a3 3 0 0 0-3 3v7a3 3 0 0 0 6 0V5a3 3 0 0 0-3-3z M19 10v2a7 7 0 0 1-14 0v-2 M12 19v3",
    },
    Service {
        title: "Video Production",
        description: "High-quality video capture and live streaming for your events",
        icon_path: "M23 7l-7 5 7 5V7z M14 5H3a2 2 0 0 0-2 2v10a2 2 0 0 0 2 2h11a2 2 0 0 0 2-2V7a2 2 0 0 0-2-2z",
    },
    Service {
        title: "Lighting Design",
        description: "Creative lighting solutions to set the perfect mood and atmosphere",
        icon_path: "M9 18h6 M10 22h4 M12 2a7 7 0 0 0-4 12.7c.6.5 1 1.2 1 2V17h6v-2.3c0-.8.4-1.5 1-2A7 7 0 0 0 12 2z",
    },
    Service {
        title: "DJ Equipment",
        description: "Top-of-the-line DJ gear and setup for unforgettable performances",
        icon_path: "M9 18V5l12-2v13 M6 21a3 3 0 1 0 0-6 3 3 0 0 0 0 6z M18 19a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
    },
    Service {
        title: "Display Solutions",
        description: "LED walls, projectors, and screens for impactful visual presentations",
        icon_path: "M2 4h20v12H2z M8 20h8 M12 16v4 M10 9l4 3-4 3V9z",
    },
    Service {
        title: "Event Production",
        description: "Full-service event production and technical direction",
        icon_path: "M4 11v8a1 1 0 0 0 1 1h14a1 1 0 0 0 1-1v-8 M20.2 6.2L3.8 9.3 3 5.5 19.4 2.4l.8 3.8z M6.2 5.3l2.8 3.9 M11.5 4.3l2.8 3.9",
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="services">
            <div class="section-glow"></div>

            <div class="section-container">
                <div class="section-heading">
                    <h2>{"Our Services"}</h2>
                    <div class="section-heading-rule"></div>
                    <p>
                        {"Elevate your events with our comprehensive range of professional \
                          audiovisual solutions"}
                    </p>
                </div>

                <div class="service-grid">
                    {
                        SERVICES.iter().enumerate().map(|(index, service)| html! {
                            <div
                                key={service.title}
                                class="service-card"
                                style={format!("animation-delay: {}ms;", index * 100)}
                            >
                                <div class="service-card-icon">
                                    <svg
                                        width="32"
                                        height="32"
                                        viewBox="0 0 24 24"
                                        fill="none"
                                        stroke="currentColor"
                                        stroke-width="2"
                                        stroke-linecap="round"
                                        stroke-linejoin="round"
                                    >
                                        <path d={service.icon_path} />
                                    </svg>
                                </div>
                                <h3>{ service.title }</h3>
                                <p>{ service.description }</p>
                                <div class="service-card-edge"></div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                    .services {
                        position: relative;
                        padding: 8rem 0;
                        overflow: hidden;
                    }

                    .service-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }

                    @media (max-width: 1024px) {
                        .service-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (max-width: 640px) {
                        .service-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    /* Cards stagger in behind the section reveal, 100ms apart. */
                    section.animate-fade-up .service-card {
                        animation: fade-up 0.5s ease both;
                    }

                    .service-card {
                        position: relative;
                        padding: 2rem;
                        border-radius: 0.75rem;
                        background: rgba(14, 7, 37, 0.2);
                        border: 1px solid rgba(99, 102, 241, 0.1);
                        backdrop-filter: blur(4px);
                        transition: transform 0.3s ease, border-color 0.3s ease;
                    }

                    .service-card:hover {
                        transform: translateY(-5px) scale(1.02);
                        border-color: rgba(99, 102, 241, 0.25);
                    }

                    .service-card-icon {
                        margin-bottom: 1.5rem;
                        color: #a5b4fc;
                        transition: transform 0.3s ease;
                    }

                    .service-card:hover .service-card-icon {
                        transform: scale(1.1) rotate(5deg);
                    }

                    .service-card h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin: 0 0 0.75rem 0;
                        background: linear-gradient(90deg, #ffffff, #c7d2fe, #e0e7ff);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    .service-card p {
                        color: rgba(199, 210, 254, 0.6);
                        margin: 0;
                        line-height: 1.6;
                    }

                    .service-card-edge {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        height: 2px;
                        border-radius: 0 0 0.75rem 0.75rem;
                        background: linear-gradient(90deg, rgba(99, 102, 241, 0.3), rgba(168, 85, 247, 0.3));
                        transform: scaleX(0);
                        transition: transform 0.3s ease;
                    }

                    .service-card:hover .service-card-edge {
                        transform: scaleX(1);
                    }
                "#}
            </style>
        </section>
    }
}
