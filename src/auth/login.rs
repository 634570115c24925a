use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

// Sign-in lives outside this app; the page only routes people onward.
#[function_component(Login)]
pub fn login() -> Html {
    html! {
        <div style="min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 2rem; background: linear-gradient(135deg, #e8f5e9 0%, #ffffff 50%, #fff8e1 100%);">
            <div style="background: #fff; border-radius: 0.5rem; box-shadow: 0 10px 25px rgba(0,0,0,0.1); padding: 2rem; width: 100%; max-width: 28rem; text-align: center;">
                <h1 style="font-size: 1.5rem; margin: 0 0 1rem;">{"Login"}</h1>
                <p style="color: #6b7280; margin-bottom: 1.5rem;">
                    {"Sign-in is coming soon to equiTeee."}
                </p>
                <p style="font-size: 0.875rem;">
                    <Link<Route> to={Route::ForgotPassword}>{"Forgot your password?"}</Link<Route>>
                    {" · "}
                    <Link<Route> to={Route::Home}>{"Back home"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}
