use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    Coffee,
    ArrowLeft,
    ArrowRight,
    ChevronDown,
    CheckCircle,
    Check,
    Briefcase,
    Pen,
    Dollar,
    GraduationCap,
    Building,
    Facebook,
    Twitter,
    LinkedIn,
    Instagram,
    Menu,
    Steam,
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(24)]
    pub size: u32,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let size = props.size.to_string();

    if props.kind == IconKind::Steam {
        return html! {
            <svg class={props.class.clone()} width="20" height="10" viewBox="0 0 20 10" fill="none">
                <path d="M1 5C3 1 7 1 10 5C13 9 17 9 19 5" stroke="currentColor" stroke-width="2" stroke-linecap="round" />
            </svg>
        };
    }

    let body = match props.kind {
        IconKind::Coffee => html! {
            <>
                <path d="M17 8h1a4 4 0 1 1 0 8h-1" />
                <path d="M3 8h14v9a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4Z" />
                <line x1="6" x2="6" y1="2" y2="4" />
                <line x1="10" x2="10" y1="2" y2="4" />
                <line x1="14" x2="14" y1="2" y2="4" />
            </>
        },
        IconKind::ArrowLeft => html! {
            <>
                <path d="m12 19-7-7 7-7" />
                <path d="M19 12H5" />
            </>
        },
        IconKind::ArrowRight => html! {
            <>
                <path d="M5 12h14" />
                <path d="m12 5 7 7-7 7" />
            </>
        },
        IconKind::ChevronDown => html! { <path d="m6 9 6 6 6-6" /> },
        IconKind::CheckCircle => html! {
            <>
                <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14" />
                <polyline points="22 4 12 14.01 9 11.01" />
            </>
        },
        IconKind::Check => html! { <polyline points="20 6 9 17 4 12" /> },
        IconKind::Briefcase => html! {
            <>
                <path d="M18 8V7c0-1.1-.9-2-2-2H8c-1.1 0-2 .9-2 2v1" />
                <path d="M3 9a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V9z" />
                <path d="M13 15V9" />
                <path d="M17 15V9" />
                <path d="M9 15V9" />
            </>
        },
        IconKind::Pen => html! {
            <>
                <path d="M12 20h9" />
                <path d="M16.5 3.5a2.121 2.121 0 0 1 3 3L7 19l-4 1 1-4L16.5 3.5z" />
            </>
        },
        IconKind::Dollar => html! {
            <>
                <path d="M12 2v20" />
                <path d="M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6" />
            </>
        },
        IconKind::GraduationCap => html! {
            <>
                <path d="M22 10v6M2 10l10-5 10 5-10 5z" />
                <path d="M6 12v5c3 3 9 3 12 0v-5" />
            </>
        },
        IconKind::Building => html! {
            <>
                <rect width="20" height="14" x="2" y="7" rx="2" ry="2" />
                <path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16" />
            </>
        },
        IconKind::Facebook => html! {
            <path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z" />
        },
        IconKind::Twitter => html! {
            <path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z" />
        },
        IconKind::LinkedIn => html! {
            <>
                <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" />
                <rect width="4" height="12" x="2" y="9" />
                <circle cx="4" cy="4" r="2" />
            </>
        },
        IconKind::Instagram => html! {
            <>
                <rect width="20" height="20" x="2" y="2" rx="5" ry="5" />
                <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
                <line x1="17.5" x2="17.51" y1="6.5" y2="6.5" />
            </>
        },
        IconKind::Menu => html! {
            <>
                <line x1="4" x2="20" y1="12" y2="12" />
                <line x1="4" x2="20" y1="6" y2="6" />
                <line x1="4" x2="20" y1="18" y2="18" />
            </>
        },
        IconKind::Steam => html! {},
    };

    html! {
        <svg
            class={props.class.clone()}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            { body }
        </svg>
    }
}
