use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod animation;
mod components {
    pub mod icons;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}
mod auth {
    pub mod reset;
    pub mod reset_service;
    pub mod forgot_password;
    pub mod login;
}

use pages::landing::Landing;
use auth::{
    forgot_password::ForgotPassword,
    login::Login,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::ForgotPassword => {
            info!("Rendering Forgot password page");
            html! { <ForgotPassword /> }
        },
        Route::Login => {
            info!("Rendering Login page");
            html! { <Login /> }
        },
        Route::NotFound => {
            info!("Rendering Not found page");
            html! {
                <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem;">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to equiTeee"}</Link<Route>>
                </div>
            }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_resolve_from_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/forgot-password"), Some(Route::ForgotPassword));
        assert_eq!(Route::recognize("/login"), Some(Route::Login));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }

    #[test]
    fn routes_render_to_paths() {
        assert_eq!(Route::ForgotPassword.to_path(), "/forgot-password");
        assert_eq!(Route::Login.to_path(), "/login");
    }
}
