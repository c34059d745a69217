use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found-page" style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem;">
            <h1>{"Página não encontrada"}</h1>
            <Link<Route> to={Route::Home} classes="cta-button">
                {"Voltar para o início"}
            </Link<Route>>
        </main>
    }
}
