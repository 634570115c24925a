use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::animation::{particles, transform_range, Entrance};
use crate::components::icons::{Icon, IconKind};
use crate::components::reveal::{use_in_view, use_is_client, use_scroll_y, Reveal};

/// Share of a section that must be on screen before it animates in.
const REVEAL_AMOUNT: f64 = 0.3;
const PARTICLE_COUNT: usize = 10;

const NAV_LINKS: [(&str, &str); 3] = [
    ("#what-is", "What is equiTeee?"),
    ("#pathways", "Pathways"),
    ("#how-it-works", "How It Works"),
];

struct Audience {
    icon: IconKind,
    title: &'static str,
    blurb: &'static str,
    delay: f64,
}

const AUDIENCES: [Audience; 3] = [
    Audience {
        icon: IconKind::Briefcase,
        title: "For Students & Professionals",
        blurb: "Gain valuable experience and equity while working with innovative startups.",
        delay: 0.3,
    },
    Audience {
        icon: IconKind::Pen,
        title: "For Startups",
        blurb: "Connect with top talent and offer equity as part of your compensation package.",
        delay: 0.5,
    },
    Audience {
        icon: IconKind::Dollar,
        title: "For Investors",
        blurb: "Discover promising startups and invest in their future growth.",
        delay: 0.7,
    },
];

struct Pathway {
    icon: IconKind,
    title: &'static str,
    blurb: &'static str,
    perks: [&'static str; 3],
    cta: &'static str,
    delay: f64,
}

const PATHWAYS: [Pathway; 3] = [
    Pathway {
        icon: IconKind::GraduationCap,
        title: "Intern",
        blurb: "Gain hands-on experience through internships. Earn cash, equity, or both.",
        perks: ["Real-world experience", "Flexible schedules", "Equity opportunities"],
        cta: "Start Interning",
        delay: 0.2,
    },
    Pathway {
        icon: IconKind::Building,
        title: "Work",
        blurb: "Find full-time or part-time roles at startups. Negotiate equity as part of your compensation.",
        perks: ["Full & part-time roles", "Equity compensation", "Career growth"],
        cta: "Find Work",
        delay: 0.4,
    },
    Pathway {
        icon: IconKind::Dollar,
        title: "Buy Equity",
        blurb: "Invest in startups you believe in. Own a piece of the future.",
        perks: ["Curated startups", "Transparent terms", "Portfolio management"],
        cta: "Start Investing",
        delay: 0.6,
    },
];

struct Step {
    number: u8,
    title: &'static str,
    blurb: &'static str,
    badge_delay: f64,
    text_delay: f64,
}

const STEPS: [Step; 3] = [
    Step {
        number: 1,
        title: "Sign up and create your profile",
        blurb: "Create an account and build your profile showcasing your skills, experience, and interests.",
        badge_delay: 0.2,
        text_delay: 0.3,
    },
    Step {
        number: 2,
        title: "Choose your path: intern, work, or invest",
        blurb: "Select the pathway that aligns with your goals and interests.",
        badge_delay: 0.5,
        text_delay: 0.6,
    },
    Step {
        number: 3,
        title: "Connect with startups and start your journey",
        blurb: "Browse opportunities, connect with startups, and begin your equiTeee journey.",
        badge_delay: 0.8,
        text_delay: 0.9,
    },
];

const SOCIALS: [(IconKind, &str); 4] = [
    (IconKind::Facebook, "Facebook"),
    (IconKind::Twitter, "Twitter"),
    (IconKind::LinkedIn, "LinkedIn"),
    (IconKind::Instagram, "Instagram"),
];

const COMPANY_LINKS: [&str; 4] = ["About Us", "Careers", "Blog", "Press"];
const RESOURCE_LINKS: [&str; 4] = ["Help Center", "Startup Guide", "Equity 101", "FAQ"];

// The sign-up and newsletter forms are not wired to anything yet.
fn ignore_submit() -> Callback<SubmitEvent> {
    Callback::from(|e: SubmitEvent| e.prevent_default())
}

#[function_component(LandingHeader)]
fn landing_header() -> Html {
    let is_client = use_is_client();
    let menu_open = use_state(|| false);
    let teacup_hover = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };
    let on_cup_enter = {
        let teacup_hover = teacup_hover.clone();
        Callback::from(move |_: MouseEvent| {
            if is_client {
                teacup_hover.set(true);
            }
        })
    };
    let on_cup_leave = {
        let teacup_hover = teacup_hover.clone();
        Callback::from(move |_: MouseEvent| {
            if is_client {
                teacup_hover.set(false);
            }
        })
    };

    let hovering = is_client && *teacup_hover;

    html! {
        <header class="landing-header">
            <div class="container header-row">
                <div class="brand">
                    <div class="teacup" onmouseenter={on_cup_enter} onmouseleave={on_cup_leave}>
                        if is_client {
                            <span class={classes!("steam", hovering.then(|| "visible"))}>
                                <Icon kind={IconKind::Steam} />
                            </span>
                        }
                        <span class={classes!("cup", hovering.then(|| "wiggle"))}>
                            <Icon kind={IconKind::Coffee} />
                        </span>
                    </div>
                    <span class="brand-name">{"equiTeee"}</span>
                </div>
                <nav class="desktop-nav">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link">{*label}</a>
                    }) }
                    <a href="#sign-up" class="btn btn-primary pop">{"Join equiTeee"}</a>
                </nav>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span class="sr-only">{"Toggle menu"}</span>
                    <Icon kind={IconKind::Menu} />
                </button>
            </div>
            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                <div class="container mobile-menu-links">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                    <a href="#sign-up" class="btn btn-primary btn-block" onclick={close_menu.clone()}>
                        {"Join equiTeee"}
                    </a>
                </div>
            </div>
        </header>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), REVEAL_AMOUNT);
    let is_client = use_is_client();
    let scroll_y = use_scroll_y();

    let (text_style, image_style) = if is_client {
        (
            format!("transform: translateY({}px);", transform_range(scroll_y, (0.0, 500.0), (0.0, -50.0))),
            format!("transform: translateY({}px);", transform_range(scroll_y, (0.0, 500.0), (0.0, 100.0))),
        )
    } else {
        (String::new(), String::new())
    };

    html! {
        <section ref={node} class="hero">
            <div class="container hero-grid" style={text_style}>
                <Reveal visible={in_view} entrance={Entrance::SlideX(-50.0)} delay={0.2} class="hero-copy">
                    <h1 class="hero-title">
                        {"Work, Learn, Own—"}
                        <Reveal visible={in_view} duration={1.0} delay={0.8} class="accent">
                            {"Your Future, Your Teee."}
                        </Reveal>
                    </h1>
                    <Reveal visible={in_view} delay={1.0}>
                        <p class="lead muted">
                            {"Connecting talent with early-stage startups through internships, jobs, and equity opportunities."}
                        </p>
                    </Reveal>
                    <Reveal visible={in_view} entrance={Entrance::SlideY(20.0)} delay={1.2} class="hero-actions">
                        <a href="#sign-up" class="btn btn-primary btn-lg pop">{"Join equiTeee"}</a>
                        <a href="#what-is" class="btn btn-outline btn-lg pop">
                            {"Learn More "}
                            <Icon kind={IconKind::ChevronDown} size={16} />
                        </a>
                    </Reveal>
                </Reveal>
                <div class="hero-image-wrap" style={image_style}>
                    <Reveal visible={in_view} entrance={Entrance::Scale(0.8)} delay={0.5} class="hero-image">
                        <img src="/assets/hero.png" alt="People working together" />
                    </Reveal>
                </div>
            </div>

            <div class="blob blob-green"></div>
            <div class="blob blob-orange"></div>

            if is_client {
                <div class="particles">
                    { for particles(PARTICLE_COUNT).into_iter().map(|p| {
                        let style = format!(
                            "width: {size}px; height: {size}px; left: {}%; top: {}%; --rise: {}px; animation-duration: {}s; animation-delay: {}s;",
                            p.left_pct, p.top_pct, p.rise_px, p.duration_s, p.delay_s, size = p.size_px,
                        );
                        html! { <div class="particle" style={style}></div> }
                    }) }
                </div>
            }
        </section>
    }
}

#[function_component(WhatIs)]
fn what_is() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), REVEAL_AMOUNT);

    html! {
        <section id="what-is" ref={node} class="section section-white">
            <div class="container">
                <Reveal visible={in_view} entrance={Entrance::SlideY(50.0)} class="section-intro">
                    <h2 class="section-title">{"What is equiTeee?"}</h2>
                    <p class="lead muted wide">
                        {"equiTeee is a platform where you can intern, work, or invest in early-stage startups—and even earn equity for your skills. Whether you're looking to gain experience, build a career, or own a piece of the future, equiTeee has a pathway for you."}
                    </p>
                </Reveal>
                <div class="two-col">
                    <Reveal visible={in_view} entrance={Entrance::SlideX(-50.0)} delay={0.2} class="feature-image">
                        <img src="/assets/page1.png" alt="equiTeee platform visualization" />
                    </Reveal>
                    <div class="audience-list">
                        { for AUDIENCES.iter().map(|a| html! {
                            <Reveal visible={in_view} entrance={Entrance::SlideX(50.0)} delay={a.delay} class="audience">
                                <div class="icon-bubble tilt">
                                    <Icon kind={a.icon} />
                                </div>
                                <div>
                                    <h3>{a.title}</h3>
                                    <p class="muted">{a.blurb}</p>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Pathways)]
fn pathways() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), REVEAL_AMOUNT);

    html! {
        <section id="pathways" ref={node} class="section section-lime">
            <div class="container">
                <Reveal visible={in_view} entrance={Entrance::SlideY(50.0)} class="section-intro">
                    <h2 class="section-title">{"Your Path, Your Future"}</h2>
                    <p class="lead muted">
                        {"Choose the pathway that aligns with your goals and start your journey with equiTeee."}
                    </p>
                </Reveal>
                <div class="three-col">
                    { for PATHWAYS.iter().map(|p| html! {
                        <Reveal visible={in_view} entrance={Entrance::SlideY(50.0)} delay={p.delay}>
                            <div class="pathway-card">
                                <div class="pathway-glow"></div>
                                <div class="pathway-body">
                                    <div class="icon-bubble icon-bubble-lg spin-hover">
                                        <Icon kind={p.icon} size={32} />
                                    </div>
                                    <h3>{p.title}</h3>
                                    <p class="muted">{p.blurb}</p>
                                    <ul class="perks">
                                        { for p.perks.iter().map(|perk| html! {
                                            <li>
                                                <Icon kind={IconKind::Check} size={16} class="accent" />
                                                {*perk}
                                            </li>
                                        }) }
                                    </ul>
                                    <a href="#sign-up" class="btn btn-outline btn-block pathway-cta pop">{p.cta}</a>
                                </div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(HowItWorks)]
fn how_it_works() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), REVEAL_AMOUNT);

    html! {
        <section id="how-it-works" ref={node} class="section section-white">
            <div class="container">
                <Reveal visible={in_view} entrance={Entrance::SlideY(50.0)} class="section-intro">
                    <h2 class="section-title">{"How It Works"}</h2>
                    <p class="lead muted">
                        {"Getting started with equiTeee is simple. Follow these steps to begin your journey."}
                    </p>
                </Reveal>
                <div class="timeline">
                    <div class={classes!("timeline-line", in_view.then(|| "grown"))}></div>
                    { for STEPS.iter().map(|step| {
                        // Even steps sit on the left of the line.
                        let left = step.number % 2 == 0;
                        let offset = if left { -50.0 } else { 50.0 };
                        html! {
                            <div class={classes!("timeline-step", left.then(|| "step-left"))}>
                                <div class="step-spacer"></div>
                                <Reveal visible={in_view} entrance={Entrance::Scale(0.0)} duration={0.5} delay={step.badge_delay} class="step-badge">
                                    <span>{step.number.to_string()}</span>
                                </Reveal>
                                <Reveal visible={in_view} entrance={Entrance::SlideX(offset)} delay={step.text_delay} class="step-text">
                                    <h3>{step.title}</h3>
                                    <p class="muted">{step.blurb}</p>
                                </Reveal>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(SignUp)]
fn sign_up() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), REVEAL_AMOUNT);

    html! {
        <section id="sign-up" ref={node} class="section section-cta">
            <div class="container">
                <Reveal visible={in_view} entrance={Entrance::SlideY(50.0)} class="section-intro">
                    <h2 class="section-title">{"Ready to Own Your Future?"}</h2>
                    <p class="lead muted">
                        {"Join equiTeee today and start your journey with internships, jobs, or equity opportunities."}
                    </p>
                    <Reveal visible={in_view} entrance={Entrance::SlideY(30.0)} delay={0.3} class="signup-box">
                        <form class="signup-form" onsubmit={ignore_submit()}>
                            <Reveal visible={in_view} entrance={Entrance::SlideX(-20.0)} duration={0.5} delay={0.4}>
                                <input type="text" placeholder="Full Name" required=true />
                            </Reveal>
                            <Reveal visible={in_view} entrance={Entrance::SlideX(-20.0)} duration={0.5} delay={0.5}>
                                <input type="email" placeholder="Email Address" required=true />
                            </Reveal>
                            <Reveal visible={in_view} entrance={Entrance::SlideX(-20.0)} duration={0.5} delay={0.6}>
                                <select>
                                    <option value="" disabled=true selected=true>{"I'm interested in..."}</option>
                                    <option value="intern">{"Internships"}</option>
                                    <option value="work">{"Jobs"}</option>
                                    <option value="invest">{"Investing"}</option>
                                </select>
                            </Reveal>
                            <Reveal visible={in_view} entrance={Entrance::SlideY(20.0)} duration={0.5} delay={0.7}>
                                <button type="submit" class="btn btn-primary btn-lg btn-block pop-soft">
                                    {"Sign Up Now"}
                                </button>
                            </Reveal>
                        </form>
                        <Reveal visible={in_view} delay={0.8}>
                            <p class="fine-print muted">
                                {"By signing up, you agree to our "}
                                <a href="#">{"Terms of Service"}</a>
                                {" and "}
                                <a href="#">{"Privacy Policy"}</a>
                                {"."}
                            </p>
                        </Reveal>
                    </Reveal>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="landing-footer">
            <div class="container footer-grid">
                <div>
                    <div class="brand footer-brand">
                        <Icon kind={IconKind::Coffee} />
                        <span class="brand-name">{"equiTeee"}</span>
                    </div>
                    <p class="small muted">
                        {"Connecting talent with early-stage startups through internships, jobs, and equity opportunities."}
                    </p>
                    <div class="socials">
                        { for SOCIALS.iter().map(|(icon, label)| html! {
                            <a href="#" class="social-link">
                                <Icon kind={*icon} size={20} />
                                <span class="sr-only">{*label}</span>
                            </a>
                        }) }
                    </div>
                </div>
                <div>
                    <h3 class="footer-heading">{"Company"}</h3>
                    <ul class="footer-links">
                        { for COMPANY_LINKS.iter().map(|label| html! { <li><a href="#">{*label}</a></li> }) }
                    </ul>
                </div>
                <div>
                    <h3 class="footer-heading">{"Resources"}</h3>
                    <ul class="footer-links">
                        { for RESOURCE_LINKS.iter().map(|label| html! { <li><a href="#">{*label}</a></li> }) }
                    </ul>
                </div>
                <div>
                    <h3 class="footer-heading">{"Stay Updated"}</h3>
                    <p class="small muted">
                        {"Subscribe to our newsletter for the latest opportunities and updates."}
                    </p>
                    <form class="newsletter" onsubmit={ignore_submit()}>
                        <input type="email" placeholder="Your email" />
                        <button type="submit" class="btn btn-outline tilt">
                            <Icon kind={IconKind::ArrowRight} size={16} />
                        </button>
                    </form>
                </div>
            </div>
            <div class="container footer-bottom">
                <p class="tiny muted">{format!("© {} equiTeee. All rights reserved.", year)}</p>
                <div class="legal-links">
                    <a href="#">{"Terms of Service"}</a>
                    <a href="#">{"Privacy Policy"}</a>
                    <a href="#">{"Cookie Policy"}</a>
                    <Link<Route> to={Route::Login}>{"Log in"}</Link<Route>>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <LandingHeader />
            <main>
                <Hero />
                <WhatIs />
                <Pathways />
                <HowItWorks />
                <SignUp />
            </main>
            <Footer />
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        color: #1f2a1f;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .container {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 2rem;
        box-sizing: border-box;
        width: 100%;
    }
    .muted { color: #6b7280; }
    .accent { color: #2e7d32; }
    .small { font-size: 0.875rem; }
    .tiny { font-size: 0.75rem; }
    .sr-only {
        position: absolute;
        width: 1px;
        height: 1px;
        overflow: hidden;
        clip: rect(0, 0, 0, 0);
        white-space: nowrap;
    }

    /* header */
    .landing-header {
        position: sticky;
        top: 0;
        z-index: 40;
        background: rgba(255, 255, 255, 0.8);
        backdrop-filter: blur(10px);
        border-bottom: 1px solid #e5e7eb;
        animation: headerIn 0.5s ease-out both;
    }
    @keyframes headerIn {
        from { transform: translateY(-100px); opacity: 0; }
        to { transform: translateY(0); opacity: 1; }
    }
    .header-row {
        height: 4rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .brand {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        color: #2e7d32;
        transition: transform 0.2s cubic-bezier(.34,1.56,.64,1);
    }
    .brand:hover { transform: scale(1.05); }
    .brand-name {
        font-size: 1.25rem;
        font-weight: 700;
    }
    .teacup { position: relative; display: inline-flex; }
    .steam {
        position: absolute;
        top: -0.75rem;
        left: 50%;
        transform: translateX(-50%);
        opacity: 0;
        transition: opacity 0.3s ease;
    }
    .steam.visible {
        opacity: 1;
        animation: steamBob 1.5s ease-in-out infinite;
    }
    @keyframes steamBob {
        0%, 100% { transform: translate(-50%, -2px); }
        50% { transform: translate(-50%, 2px); }
    }
    .cup { display: inline-flex; }
    .cup.wiggle { animation: cupWiggle 0.5s ease-in-out; }
    @keyframes cupWiggle {
        0%, 100% { transform: rotate(0deg); }
        33% { transform: rotate(5deg); }
        66% { transform: rotate(-5deg); }
    }
    .desktop-nav {
        display: flex;
        align-items: center;
        gap: 1.5rem;
    }
    .nav-link {
        font-size: 0.875rem;
        font-weight: 500;
        color: inherit;
        text-decoration: none;
        transition: color 0.2s ease;
    }
    .nav-link:hover { color: #2e7d32; }
    .burger-menu {
        display: none;
        background: none;
        border: none;
        cursor: pointer;
        color: inherit;
    }
    .mobile-menu {
        max-height: 0;
        opacity: 0;
        overflow: hidden;
        transition: max-height 0.3s ease, opacity 0.3s ease;
    }
    .mobile-menu.open {
        max-height: 20rem;
        opacity: 1;
        border-top: 1px solid #e5e7eb;
    }
    .mobile-menu-links {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        padding-top: 1rem;
        padding-bottom: 1rem;
    }

    /* buttons */
    .btn {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        height: 2.5rem;
        padding: 0 1rem;
        border-radius: 0.375rem;
        font-size: 0.875rem;
        font-weight: 500;
        text-decoration: none;
        cursor: pointer;
        transition: transform 0.15s ease, background 0.2s ease, color 0.2s ease;
        box-sizing: border-box;
    }
    .btn-primary {
        background: #2e7d32;
        color: #fff;
        border: none;
    }
    .btn-outline {
        background: #fff;
        color: inherit;
        border: 1px solid #d1d5db;
    }
    .btn-lg { height: 2.75rem; padding: 0 2rem; font-size: 1rem; }
    .btn-block { width: 100%; }
    .pop:hover { transform: scale(1.05); }
    .pop:active { transform: scale(0.95); }
    .pop-soft:hover { transform: scale(1.03); }
    .pop-soft:active { transform: scale(0.97); }
    .tilt { transition: transform 0.2s ease; }
    .tilt:hover { transform: scale(1.1) rotate(5deg); }

    /* hero */
    .hero {
        position: relative;
        overflow: hidden;
        background: linear-gradient(135deg, #e8f5e9 0%, #ffffff 50%, #fff8e1 100%);
        padding: 8rem 0;
    }
    .hero-grid {
        position: relative;
        z-index: 10;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        align-items: center;
    }
    .hero-copy {
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .hero-title {
        font-size: 3.75rem;
        font-weight: 700;
        letter-spacing: -0.025em;
        margin: 0;
    }
    .hero-title .accent { display: inline; }
    .lead { font-size: 1.25rem; max-width: 600px; }
    .lead.wide { max-width: 800px; }
    .hero-actions {
        display: flex;
        gap: 1rem;
        margin-top: 1rem;
    }
    .hero-image-wrap { position: relative; height: 500px; }
    .hero-image, .hero-image img {
        width: 100%;
        height: 100%;
    }
    .hero-image img {
        object-fit: cover;
        border-radius: 9999px;
    }
    .blob {
        position: absolute;
        width: 16rem;
        height: 16rem;
        border-radius: 9999px;
        filter: blur(64px);
        opacity: 0;
        animation: blobIn 2s ease-out forwards;
    }
    .blob-green {
        top: 25%;
        right: 0;
        background: rgba(46, 125, 50, 0.1);
    }
    .blob-orange {
        bottom: 0;
        left: 25%;
        background: rgba(253, 186, 116, 0.2);
        animation-delay: 0.5s;
    }
    @keyframes blobIn { to { opacity: 0.7; } }
    .particles {
        position: absolute;
        inset: 0;
        overflow: hidden;
    }
    .particle {
        position: absolute;
        border-radius: 9999px;
        background: rgba(46, 125, 50, 0.2);
        opacity: 0;
        animation-name: particleFloat;
        animation-iteration-count: infinite;
        animation-timing-function: ease-in-out;
    }
    @keyframes particleFloat {
        0% { transform: translateY(0); opacity: 0; }
        50% { opacity: 0.7; }
        100% { transform: translateY(var(--rise)); opacity: 0; }
    }

    /* sections */
    .section { padding: 5rem 0; }
    .section-white { background: #fff; }
    .section-lime { background: linear-gradient(135deg, #f9fbe7 0%, #ffffff 100%); }
    .section-cta { background: linear-gradient(135deg, rgba(46,125,50,0.1) 0%, rgba(253,186,116,0.2) 100%); }
    .section-intro {
        display: flex;
        flex-direction: column;
        align-items: center;
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-title {
        font-size: 3rem;
        font-weight: 700;
        letter-spacing: -0.025em;
        margin: 0 0 1rem;
    }
    .two-col {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 2rem;
        align-items: center;
    }
    .three-col {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .feature-image img {
        width: 100%;
        height: 400px;
        object-fit: contain;
        border-radius: 0.5rem;
    }
    .audience-list {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .audience {
        display: flex;
        align-items: flex-start;
        gap: 1rem;
    }
    .audience h3 { font-size: 1.25rem; margin: 0; }
    .icon-bubble {
        display: flex;
        align-items: center;
        justify-content: center;
        flex-shrink: 0;
        padding: 0.75rem;
        border-radius: 9999px;
        background: rgba(46, 125, 50, 0.1);
        color: #2e7d32;
    }
    .icon-bubble-lg {
        width: 4rem;
        height: 4rem;
        padding: 0;
        margin-bottom: 1rem;
    }
    .spin-hover { transition: transform 0.2s ease; }
    .spin-hover:hover { transform: rotate(10deg); }

    /* pathways */
    .pathway-card {
        position: relative;
        overflow: hidden;
        border: 1px solid #e5e7eb;
        border-radius: 0.5rem;
        background: #fff;
        padding: 1.5rem;
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }
    .pathway-card:hover {
        transform: translateY(-10px);
        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
    }
    .pathway-glow {
        position: absolute;
        inset: 0;
        background: linear-gradient(90deg, rgba(46,125,50,0.1), transparent);
        opacity: 0;
        transition: opacity 0.3s ease;
    }
    .pathway-card:hover .pathway-glow { opacity: 1; }
    .pathway-card:hover .pathway-cta {
        background: #2e7d32;
        color: #fff;
    }
    .pathway-body { position: relative; z-index: 10; }
    .pathway-body h3 { font-size: 1.5rem; margin: 0 0 0.5rem; }
    .perks {
        list-style: none;
        padding: 0;
        margin: 0 0 1.5rem;
        font-size: 0.875rem;
    }
    .perks li {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        margin-bottom: 0.5rem;
    }

    /* timeline */
    .timeline { position: relative; }
    .timeline-line {
        position: absolute;
        left: 50%;
        top: 0;
        width: 2px;
        height: 0;
        margin-left: -1px;
        background: #e5e7eb;
        transition: height 1.5s ease-out;
    }
    .timeline-line.grown { height: 100%; }
    .timeline-step {
        position: relative;
        display: flex;
        justify-content: space-between;
        align-items: center;
        margin-bottom: 3rem;
    }
    .timeline-step.step-left { flex-direction: row-reverse; }
    .timeline-step.step-left .step-text { text-align: right; }
    .step-spacer, .step-text { width: 41.6%; }
    .step-text h3 { font-size: 1.25rem; margin: 0 0 0.5rem; }
    .step-badge {
        position: absolute;
        left: 50%;
        margin-left: -0.75rem;
        width: 1.5rem;
        height: 1.5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 9999px;
        background: #2e7d32;
        color: #fff;
        font-size: 0.75rem;
        font-weight: 700;
    }

    /* sign-up */
    .signup-box {
        width: 100%;
        max-width: 28rem;
        margin: 2rem auto 0;
    }
    .signup-form {
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .signup-form input, .signup-form select, .newsletter input {
        width: 100%;
        height: 2.5rem;
        padding: 0 0.75rem;
        border: 1px solid #d1d5db;
        border-radius: 0.375rem;
        background: #fff;
        box-sizing: border-box;
        font-size: 0.875rem;
    }
    .fine-print { font-size: 0.75rem; margin-top: 1rem; }
    .fine-print a { color: inherit; text-underline-offset: 2px; }
    .fine-print a:hover { color: #2e7d32; }

    /* footer */
    .landing-footer {
        border-top: 1px solid #e5e7eb;
        background: rgba(243, 244, 246, 0.4);
        padding: 3rem 0;
        opacity: 0;
        animation: footerIn 1s ease-out 0.5s forwards;
    }
    @keyframes footerIn { to { opacity: 1; } }
    .footer-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
    }
    .footer-brand { margin-bottom: 1rem; }
    .footer-heading { font-weight: 700; margin: 0 0 1rem; font-size: 1rem; }
    .footer-links {
        list-style: none;
        padding: 0;
        margin: 0;
    }
    .footer-links li {
        margin-bottom: 0.5rem;
        transition: transform 0.2s ease;
    }
    .footer-links li:hover { transform: translateX(3px); }
    .footer-links a, .legal-links a, .social-link {
        font-size: 0.875rem;
        color: #6b7280;
        text-decoration: none;
    }
    .footer-links a:hover, .legal-links a:hover, .social-link:hover { color: #2e7d32; }
    .socials { display: flex; gap: 1rem; }
    .social-link {
        display: inline-flex;
        transition: transform 0.2s ease;
    }
    .social-link:hover { transform: translateY(-3px) scale(1.1); }
    .newsletter { display: flex; gap: 0.5rem; }
    .footer-bottom {
        margin-top: 3rem;
        padding-top: 2rem;
        border-top: 1px solid #e5e7eb;
        display: flex;
        justify-content: space-between;
        align-items: center;
        gap: 1rem;
    }
    .legal-links { display: flex; gap: 1rem; }
    .legal-links a { font-size: 0.75rem; }

    @media (max-width: 768px) {
        .desktop-nav { display: none; }
        .burger-menu { display: inline-flex; }
        .hero { padding: 5rem 0; }
        .hero-grid, .two-col, .three-col, .footer-grid { grid-template-columns: 1fr; }
        .hero-title { font-size: 2.25rem; }
        .hero-actions { flex-direction: column; }
        .hero-image-wrap { height: 300px; }
        .section-title { font-size: 1.875rem; }
        .timeline-line, .step-badge { left: 1rem; }
        .timeline-step, .timeline-step.step-left { display: block; }
        .step-spacer { display: none; }
        .step-text, .timeline-step.step-left .step-text {
            width: auto;
            margin-left: 3rem;
            text-align: left;
        }
        .footer-bottom { flex-direction: column; }
    }
    @media (min-width: 769px) {
        .mobile-menu { display: none; }
    }
"#;
