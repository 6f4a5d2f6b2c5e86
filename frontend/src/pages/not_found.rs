use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found">
            <img src={config::LOGO_SRC} alt={config::SITE_NAME} width="48" height="48" />
            <h1>{"Page not found"}</h1>
            <p>{"The page you were looking for does not exist."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to Ibn Rajab Academy"}
            </Link<Route>>
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 16px;
                        text-align: center;
                        background: #f1e9de;
                        color: #5b2f2a;
                    }

                    .not-found-link {
                        background: #5b2f2a;
                        color: #f1e9de;
                        padding: 12px 28px;
                        border-radius: 9999px;
                        text-decoration: none;
                    }
                "#}
            </style>
        </main>
    }
}
