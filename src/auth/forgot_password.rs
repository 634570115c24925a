use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;

use crate::Route;
use crate::auth::reset::{ResetFlow, ResetStatus};
use crate::auth::reset_service::reset_service;
use crate::components::icons::{Icon, IconKind};

const FORGOT_PASSWORD_CSS: &str = r#"
    .forgot-page {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        background: linear-gradient(135deg, #e8f5e9 0%, #ffffff 50%, #fff8e1 100%);
        color: #1f2a1f;
    }
    .forgot-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        max-width: 1200px;
        width: 100%;
        margin: 0 auto;
        padding: 1.5rem 2rem;
        box-sizing: border-box;
    }
    .forgot-back {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-size: 0.875rem;
        font-weight: 500;
        color: inherit;
        text-decoration: none;
        transition: transform 0.15s ease;
    }
    .forgot-back:hover { transform: scale(1.05); }
    .forgot-back:active { transform: scale(0.95); }
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
    .brand-cup-idle {
        display: inline-flex;
        animation: cupWobble 6s ease-in-out infinite;
    }
    @keyframes cupWobble {
        0% { transform: rotate(0deg) translateY(0); }
        5% { transform: rotate(5deg) translateY(-2px); }
        11% { transform: rotate(-5deg) translateY(0); }
        16%, 100% { transform: rotate(0deg) translateY(0); }
    }
    .header-spacer { width: 5rem; }
    .forgot-main {
        flex: 1;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 2.5rem 1rem;
    }
    .forgot-card {
        width: 100%;
        max-width: 28rem;
        background: #ffffff;
        border-radius: 0.5rem;
        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
        padding: 2rem;
        box-sizing: border-box;
        animation: cardIn 0.5s ease-out both;
    }
    @keyframes cardIn {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .forgot-card h1, .forgot-card h2 {
        font-size: 1.5rem;
        font-weight: 700;
        margin: 0 0 0.5rem;
    }
    .muted { color: #6b7280; }
    .forgot-intro {
        text-align: center;
        margin-bottom: 1.5rem;
    }
    .forgot-form label {
        display: block;
        font-size: 0.875rem;
        font-weight: 500;
        margin-bottom: 0.5rem;
    }
    .forgot-form input {
        width: 100%;
        height: 2.5rem;
        padding: 0 0.75rem;
        border: 1px solid #d1d5db;
        border-radius: 0.375rem;
        box-sizing: border-box;
        margin-bottom: 1rem;
    }
    .reset-button {
        width: 100%;
        height: 2.75rem;
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        border: none;
        border-radius: 0.375rem;
        background: #2e7d32;
        color: #ffffff;
        font-size: 1rem;
        cursor: pointer;
        transition: transform 0.15s ease, opacity 0.2s ease;
    }
    .reset-button:hover:not(:disabled) { transform: scale(1.02); }
    .reset-button:active:not(:disabled) { transform: scale(0.98); }
    .reset-button:disabled {
        opacity: 0.6;
        cursor: not-allowed;
    }
    .loading-spinner {
        display: inline-block;
        width: 16px;
        height: 16px;
        border: 3px solid rgba(255,255,255,.3);
        border-radius: 50%;
        border-top-color: #fff;
        animation: spin 1s linear infinite;
    }
    @keyframes spin { to { transform: rotate(360deg); } }
    .reset-confirmation {
        text-align: center;
        padding: 1.5rem 0;
    }
    .confirmation-icon {
        display: flex;
        justify-content: center;
        margin-bottom: 1rem;
        color: #22c55e;
        animation: popIn 0.45s cubic-bezier(.34,1.56,.64,1) both;
    }
    @keyframes popIn {
        from { transform: scale(0); }
        to { transform: scale(1); }
    }
    .confirmation-email { font-weight: 500; }
    .try-again {
        background: none;
        border: none;
        padding: 0;
        color: #2e7d32;
        cursor: pointer;
        font-size: inherit;
    }
    .try-again:hover, .forgot-footer a:hover { text-decoration: underline; }
    .forgot-footer {
        margin-top: 1.5rem;
        text-align: center;
        font-size: 0.875rem;
    }
    .forgot-footer a {
        color: #2e7d32;
        text-decoration: none;
    }
"#;

#[function_component(ForgotPassword)]
pub fn forgot_password() -> Html {
    // Bumped whenever the flow changes so the page re-renders.
    let rerender = use_state(|| ());
    let flow = use_memo(
        move |_| ResetFlow::new(reset_service(), move || rerender.set(())),
        (),
    );
    let state = flow.snapshot();

    let oninput = {
        let flow = flow.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            flow.update_email(input.value());
        })
    };

    let onsubmit = {
        let flow = flow.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(pending) = flow.submit() {
                spawn_local(pending);
            }
        })
    };

    let try_again = {
        let flow = flow.clone();
        Callback::from(move |_: MouseEvent| flow.reset())
    };

    let card = if state.status() == ResetStatus::Submitted {
        html! {
            <div class="reset-confirmation">
                <div class="confirmation-icon">
                    <Icon kind={IconKind::CheckCircle} size={64} />
                </div>
                <h2>{"Check your email"}</h2>
                <p class="muted" style="margin-bottom: 1.5rem;">
                    {"We've sent a password reset link to "}
                    <span class="confirmation-email">{state.email()}</span>
                </p>
                <p class="muted" style="font-size: 0.875rem;">
                    {"Didn't receive the email? Check your spam folder or "}
                    <button class="try-again" onclick={try_again}>{"try again"}</button>
                </p>
            </div>
        }
    } else {
        let submitting = state.submit_disabled();
        html! {
            <>
                <div class="forgot-intro">
                    <h1>{"Reset your password"}</h1>
                    <p class="muted">
                        {"Enter your email address and we'll send you a link to reset your password"}
                    </p>
                </div>
                <form class="forgot-form" onsubmit={onsubmit}>
                    <label for="email">{"Email"}</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="john@example.com"
                        required=true
                        value={state.email().to_string()}
                        oninput={oninput}
                    />
                    <button type="submit" class="reset-button" disabled={submitting}>
                        if submitting {
                            <>
                                <span class="loading-spinner"></span>
                                {"Sending reset link..."}
                            </>
                        } else {
                            <>{"Send reset link"}</>
                        }
                    </button>
                </form>
            </>
        }
    };

    html! {
        <div class="forgot-page">
            <style>{FORGOT_PASSWORD_CSS}</style>
            <header class="forgot-header">
                <Link<Route> to={Route::Login} classes="forgot-back">
                    <Icon kind={IconKind::ArrowLeft} size={16} />
                    <span>{"Back to Login"}</span>
                </Link<Route>>
                <div class="brand">
                    <span class="brand-cup-idle">
                        <Icon kind={IconKind::Coffee} />
                    </span>
                    <span class="brand-name">{"equiTeee"}</span>
                </div>
                <div class="header-spacer"></div>
            </header>
            <main class="forgot-main">
                <div class="forgot-card">
                    { card }
                    <div class="forgot-footer">
                        <Link<Route> to={Route::Login}>{"Back to login"}</Link<Route>>
                    </div>
                </div>
            </main>
        </div>
    }
}
