use yew::prelude::*;

struct ContactInfo {
    title: &'static str,
    value: &'static str,
    link: Option<&'static str>,
    icon_path: &'static str,
}

const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        title: "Phone",
        value: "+1 (555) 123-4567",
        link: Some("tel:+15551234567"),
        icon_path: "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z",
    },
    ContactInfo {
        title: "Email",
        value: "contact@neuron.com",
        link: Some("mailto:contact@neuron.com"),
        icon_path: "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z M22 6l-10 7L2 6",
    },
    ContactInfo {
        title: "Location",
        value: "123 AV Street, Audio City, VS 12345",
        link: Some("https://maps.google.com"),
        icon_path: "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z M12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
    },
    ContactInfo {
        title: "Service Area",
        value: "Worldwide Coverage",
        link: None,
        icon_path: "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z M2 12h20 M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
    },
];

const BUSINESS_HOURS: &[(&str, &str)] = &[
    ("Monday - Friday", "9:00 AM - 6:00 PM"),
    ("Saturday", "10:00 AM - 4:00 PM"),
    ("Sunday", "Closed"),
];

fn contact_card(info: &ContactInfo) -> Html {
    html! {
        <div class="contact-card" key={info.title}>
            <div class="contact-card-icon">
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
                    <path d={info.icon_path} />
                </svg>
            </div>
            <div class="contact-card-text">
                <h3>{ info.title }</h3>
                {
                    // Entries without a link render as plain text.
                    match info.link {
                        Some(link) => {
                            let external = link.starts_with("http");
                            html! {
                                <a
                                    href={link}
                                    target={external.then(|| "_blank")}
                                    rel={external.then(|| "noopener noreferrer")}
                                >
                                    { info.value }
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
                                        <path d="M7 17L17 7 M7 7h10v10" />
                                    </svg>
                                </a>
                            }
                        }
                        None => html! { <p>{ info.value }</p> },
                    }
                }
            </div>
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id="contact" class="contact">
            <div class="section-glow"></div>

            <div class="section-container">
                <div class="section-heading">
                    <h2>{"Get in Touch"}</h2>
                    <div class="section-heading-rule"></div>
                    <p>
                        {"Ready to elevate your event? Reach out to us and let's create \
                          something extraordinary together"}
                    </p>
                </div>

                <div class="contact-grid">
                    { CONTACT_INFO.iter().map(contact_card).collect::<Html>() }
                </div>

                <div class="contact-hours">
                    <div class="contact-card-icon">
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
                            <path d="M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z M12 6v6l4 2" />
                        </svg>
                    </div>
                    <div class="contact-hours-table">
                        <h3>{"Business Hours"}</h3>
                        {
                            BUSINESS_HOURS.iter().map(|(day, hours)| html! {
                                <div class="contact-hours-row" key={*day}>
                                    <span class="contact-hours-day">{ *day }</span>
                                    <span>{ *hours }</span>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .contact {
                        position: relative;
                        padding: 8rem 0;
                        overflow: hidden;
                    }

                    .contact-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.5rem;
                        margin-bottom: 3rem;
                    }

                    @media (max-width: 768px) {
                        .contact-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    .contact-card,
                    .contact-hours {
                        position: relative;
                        overflow: hidden;
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: rgba(14, 7, 37, 0.2);
                        border: 1px solid rgba(99, 102, 241, 0.1);
                        transition: border-color 0.3s ease, background 0.3s ease;
                    }

                    .contact-card:hover {
                        border-color: rgba(99, 102, 241, 0.25);
                        background: rgba(99, 102, 241, 0.06);
                    }

                    .contact-card-icon {
                        flex-shrink: 0;
                        padding: 0.75rem;
                        border-radius: 0.75rem;
                        background: rgba(99, 102, 241, 0.1);
                        color: #a5b4fc;
                    }

                    .contact-card-text h3,
                    .contact-hours-table h3 {
                        font-size: 1.125rem;
                        font-weight: 600;
                        color: #c7d2fe;
                        margin: 0 0 0.5rem 0;
                    }

                    .contact-card-text p {
                        color: rgba(224, 231, 255, 0.8);
                        margin: 0;
                    }

                    .contact-card-text a {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: rgba(224, 231, 255, 0.8);
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }

                    .contact-card-text a:hover {
                        color: #e0e7ff;
                    }

                    .contact-card-text a svg {
                        transition: transform 0.3s ease;
                    }

                    .contact-card-text a:hover svg {
                        transform: translate(2px, -2px);
                    }

                    .contact-hours {
                        padding: 2rem;
                    }

                    .contact-hours-table {
                        flex: 1;
                    }

                    .contact-hours-table h3 {
                        margin-bottom: 1rem;
                    }

                    .contact-hours-row {
                        display: flex;
                        justify-content: space-between;
                        gap: 1rem;
                        color: rgba(224, 231, 255, 0.8);
                        margin-bottom: 0.75rem;
                    }

                    .contact-hours-day {
                        font-weight: 500;
                    }
                "#}
            </style>
        </section>
    }
}
