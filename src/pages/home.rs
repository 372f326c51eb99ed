//! The single marketing page: hero, services, portfolio and contact
//! sections. Section ids here are what the nav tracker measures.

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::notification::NotificationKind;
use crate::components::reveal::Reveal;
use crate::contact::contact_form::ContactForm;
use crate::contact::transport::SimulatedTransport;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<String>,
    pub notify: Callback<(String, NotificationKind)>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    // hero buttons and footer anchors route through the same navigation
    // callback as the tabs, so the indicator moves immediately
    let navigate = |target: &'static str| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(target.to_string());
        })
    };

    html! {
        <div class="page">
            <style>
                {r#"
                    * {
                        margin: 0;
                        padding: 0;
                        box-sizing: border-box;
                    }
                    body {
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #111827;
                        background: #ffffff;
                        line-height: 1.6;
                    }
                    .container {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 0 32px;
                    }
                    section {
                        padding: 96px 0;
                    }
                    .section-title {
                        font-size: 2rem;
                        font-weight: 700;
                        text-align: center;
                        margin-bottom: 12px;
                    }
                    .section-description {
                        font-size: 18px;
                        color: #6b7280;
                        text-align: center;
                        max-width: 620px;
                        margin: 0 auto 48px;
                    }
                    .btn {
                        display: inline-flex;
                        align-items: center;
                        gap: 8px;
                        padding: 12px 24px;
                        border-radius: 8px;
                        border: none;
                        font-size: 16px;
                        font-weight: 600;
                        cursor: pointer;
                        transition: all 0.2s ease;
                    }
                    .btn-cta {
                        background: #2563eb;
                        color: white;
                    }
                    .btn-cta:hover {
                        background: #1d4ed8;
                        transform: translateY(-2px);
                    }
                    .btn-cta:disabled {
                        background: #93c5fd;
                        cursor: default;
                        transform: none;
                    }
                    .btn-secondary {
                        background: #f3f4f6;
                        color: #111827;
                    }
                    .btn-secondary:hover {
                        background: #e5e7eb;
                    }

                    .hero-section {
                        padding: 180px 0 120px;
                        text-align: center;
                        background: linear-gradient(180deg, #eff6ff 0%, #ffffff 100%);
                    }
                    .hero-title {
                        font-size: 3rem;
                        font-weight: 800;
                        letter-spacing: -0.03em;
                        line-height: 1.15;
                        margin-bottom: 20px;
                    }
                    .hero-title span {
                        color: #2563eb;
                    }
                    .hero-description {
                        font-size: 19px;
                        color: #6b7280;
                        max-width: 560px;
                        margin: 0 auto 32px;
                    }
                    .hero-buttons {
                        display: flex;
                        gap: 16px;
                        justify-content: center;
                    }
                    .trust-grid {
                        display: flex;
                        gap: 32px;
                        justify-content: center;
                        margin-top: 56px;
                        color: #6b7280;
                        font-size: 14px;
                    }

                    .card-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 24px;
                    }
                    .service-card,
                    .portfolio-card {
                        background: white;
                        border: 1px solid #e5e7eb;
                        border-radius: 12px;
                        padding: 28px;
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.06);
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .portfolio-card:hover {
                        transform: translateY(-8px);
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.12);
                    }
                    .card-icon {
                        font-size: 28px;
                        margin-bottom: 16px;
                    }
                    .service-card h3,
                    .portfolio-card h3 {
                        font-size: 1.15rem;
                        margin-bottom: 8px;
                    }
                    .service-card p,
                    .portfolio-card p {
                        color: #6b7280;
                        font-size: 15px;
                    }
                    .portfolio-tags {
                        display: flex;
                        gap: 8px;
                        margin-top: 16px;
                        flex-wrap: wrap;
                    }
                    .portfolio-tags span {
                        background: #eff6ff;
                        color: #2563eb;
                        font-size: 12px;
                        font-weight: 600;
                        padding: 4px 10px;
                        border-radius: 999px;
                    }

                    .testimonials-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 24px;
                        margin-top: 48px;
                    }
                    .testimonial {
                        background: #f9fafb;
                        border-radius: 12px;
                        padding: 24px;
                        font-size: 15px;
                        color: #374151;
                    }
                    .testimonial cite {
                        display: block;
                        margin-top: 12px;
                        font-style: normal;
                        font-weight: 600;
                        color: #111827;
                    }

                    .animate-fade-in {
                        animation: fadeInUp 0.6s ease both;
                    }
                    @keyframes fadeInUp {
                        from {
                            opacity: 0;
                            transform: translateY(16px);
                        }
                        to {
                            opacity: 1;
                            transform: translateY(0);
                        }
                    }

                    .contact-section {
                        background: #f9fafb;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1.2fr;
                        gap: 48px;
                        align-items: start;
                    }
                    .contact-info h3 {
                        margin-bottom: 12px;
                    }
                    .contact-info p {
                        color: #6b7280;
                        margin-bottom: 16px;
                    }
                    .contact-form {
                        background: white;
                        border: 1px solid #e5e7eb;
                        border-radius: 12px;
                        padding: 32px;
                    }
                    .form-group {
                        margin-bottom: 20px;
                    }
                    .form-group label {
                        display: block;
                        font-size: 14px;
                        font-weight: 600;
                        margin-bottom: 6px;
                    }
                    .form-group input,
                    .form-group textarea {
                        width: 100%;
                        padding: 10px 14px;
                        border: 1px solid #d1d5db;
                        border-radius: 8px;
                        font-size: 15px;
                        font-family: inherit;
                        transition: border-color 0.2s ease, box-shadow 0.2s ease;
                    }
                    .form-group input:focus,
                    .form-group textarea:focus {
                        outline: none;
                        border-color: #2563eb;
                        box-shadow: 0 0 0 2px rgba(37, 99, 235, 0.15);
                    }
                    .form-group input.error,
                    .form-group textarea.error {
                        border-color: #ef4444;
                        box-shadow: 0 0 0 2px rgba(239, 68, 68, 0.1);
                    }
                    .field-error {
                        color: #ef4444;
                        font-size: 12px;
                        margin-top: 4px;
                        display: block;
                    }

                    footer {
                        border-top: 1px solid #e5e7eb;
                        padding: 32px 0;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        color: #6b7280;
                        font-size: 14px;
                    }
                    footer a {
                        color: #6b7280;
                        text-decoration: none;
                        margin-left: 16px;
                    }
                    footer a:hover {
                        color: #111827;
                    }

                    @media (max-width: 768px) {
                        .container {
                            padding: 0 16px;
                        }
                        .hero-section {
                            padding-top: 140px;
                        }
                        .hero-title {
                            font-size: 2rem;
                        }
                        .hero-description,
                        .section-description {
                            font-size: 16px;
                        }
                        .card-grid,
                        .contact-grid {
                            grid-template-columns: 1fr;
                        }
                        .contact-form {
                            padding: 24px;
                        }
                    }
                    @media (max-width: 480px) {
                        .hero-buttons {
                            flex-direction: column;
                            width: 100%;
                        }
                        .btn {
                            width: 100%;
                            justify-content: center;
                        }
                        .trust-grid {
                            flex-direction: column;
                            gap: 8px;
                        }
                        .testimonials-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>

            <section id="home" class="hero-section">
                <div class="container">
                    <h1 class="hero-title">
                        {"Websites that win customers for "}<span>{"South Dakota"}</span>{" businesses"}
                    </h1>
                    <p class="hero-description">
                        {"Dakota Digital Design builds fast, search-friendly sites for local \
                          shops, trades and professionals. Designed, launched and cared for \
                          right here at home."}
                    </p>
                    <div class="hero-buttons">
                        <button class="btn btn-cta" data-section="contact" onclick={navigate("contact")}>
                            {"Get a free quote"}
                        </button>
                        <button class="btn btn-secondary" data-section="portfolio" onclick={navigate("portfolio")}>
                            {"See our work"}
                        </button>
                    </div>
                    <div class="trust-grid">
                        <div>{"⭐ 40+ local businesses served"}</div>
                        <div>{"⚡ Sites live in under 3 weeks"}</div>
                        <div>{"📞 Replies within 2 hours"}</div>
                    </div>
                </div>
            </section>

            <section id="services">
                <div class="container">
                    <h2 class="section-title">{"What we do"}</h2>
                    <p class="section-description">
                        {"Everything a small business needs to look sharp online, without \
                          the agency runaround."}
                    </p>
                    <div class="card-grid">
                        <Reveal class="service-card">
                            <div class="card-icon">{"🎨"}</div>
                            <h3>{"Web design"}</h3>
                            <p>{"Custom designs built around your brand, not a template. \
                                 Mobile-first and accessible from day one."}</p>
                        </Reveal>
                        <Reveal class="service-card">
                            <div class="card-icon">{"🔍"}</div>
                            <h3>{"Local SEO"}</h3>
                            <p>{"Show up when your neighbors search. We handle maps listings, \
                                 reviews and the technical details."}</p>
                        </Reveal>
                        <Reveal class="service-card">
                            <div class="card-icon">{"🛠️"}</div>
                            <h3>{"Hosting & care"}</h3>
                            <p>{"Updates, backups and a real person to call when something \
                                 needs changing. No tickets, no queues."}</p>
                        </Reveal>
                    </div>
                </div>
            </section>

            <section id="portfolio">
                <div class="container">
                    <h2 class="section-title">{"Recent work"}</h2>
                    <p class="section-description">
                        {"A few of the projects we've shipped for businesses across the state."}
                    </p>
                    <div class="card-grid">
                        <Reveal class="portfolio-card">
                            <h3>{"Badlands Outfitters"}</h3>
                            <p>{"E-commerce storefront for a Rapid City gear shop, with \
                                 in-store pickup and inventory sync."}</p>
                            <div class="portfolio-tags">
                                <span>{"E-commerce"}</span>
                                <span>{"Branding"}</span>
                            </div>
                        </Reveal>
                        <Reveal class="portfolio-card">
                            <h3>{"Prairie Family Dental"}</h3>
                            <p>{"Appointment-first site for a Sioux Falls clinic. Online \
                                 booking doubled within two months."}</p>
                            <div class="portfolio-tags">
                                <span>{"Booking"}</span>
                                <span>{"Local SEO"}</span>
                            </div>
                        </Reveal>
                        <Reveal class="portfolio-card">
                            <h3>{"Missouri River Lodge"}</h3>
                            <p>{"Photography-heavy marketing site for a hunting lodge, tied \
                                 into their reservation system."}</p>
                            <div class="portfolio-tags">
                                <span>{"Marketing"}</span>
                                <span>{"Photography"}</span>
                            </div>
                        </Reveal>
                    </div>
                    <div class="testimonials-grid">
                        <Reveal class="testimonial">
                            {"\"They rebuilt our site in two weeks and calls from the website \
                              tripled. Worth every penny.\""}
                            <cite>{"— Hannah K., Badlands Outfitters"}</cite>
                        </Reveal>
                        <Reveal class="testimonial">
                            {"\"Finally a web company that answers the phone. Updates happen \
                              the same day we ask.\""}
                            <cite>{"— Dr. Paulsen, Prairie Family Dental"}</cite>
                        </Reveal>
                    </div>
                </div>
            </section>

            <section id="contact" class="contact-section">
                <div class="container">
                    <h2 class="section-title">{"Let's talk about your project"}</h2>
                    <p class="section-description">
                        {"Tell us what you need and we'll get back to you within two hours, \
                          weekdays 8-6 Central."}
                    </p>
                    <div class="contact-grid">
                        <div class="contact-info">
                            <h3>{"Dakota Digital Design"}</h3>
                            <p>{"312 Main Ave, Suite 4"}<br/>{"Sioux Falls, SD 57104"}</p>
                            <p>{"(605) 555-0142"}<br/>{"hello@dakotadigital.design"}</p>
                            <p>{"Prefer email? Use the form and we'll take it from there."}</p>
                        </div>
                        <ContactForm<SimulatedTransport>
                            transport={SimulatedTransport::default()}
                            notify={props.notify.clone()}
                        />
                    </div>
                </div>
            </section>

            <div class="container">
                <footer>
                    <div>{"© 2025 Dakota Digital Design"}</div>
                    <div>
                        <a href="#services" onclick={navigate("services")}>{"Services"}</a>
                        <a href="#portfolio" onclick={navigate("portfolio")}>{"Portfolio"}</a>
                        <a href="#contact" onclick={navigate("contact")}>{"Contact"}</a>
                    </div>
                </footer>
            </div>
        </div>
    }
}
