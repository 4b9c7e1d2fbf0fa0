//! Page footer with the copyright line.

use leptos::prelude::*;

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

/// Copyright notice. The year is omitted until the browser has supplied it.
pub fn copyright_line(year: Option<u32>) -> String {
    match year {
        Some(year) => format!("© {year} Chagas Representações. Todos os direitos reservados."),
        None => "© Chagas Representações. Todos os direitos reservados.".to_owned(),
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    // Filled in after hydration so server and browser render the same markup.
    let year = RwSignal::new(None::<u32>);

    #[cfg(feature = "hydrate")]
    Effect::new(move || year.set(Some(js_sys::Date::new_0().get_full_year())));

    view! {
        <footer class="site-footer">
            <p>{move || copyright_line(year.get())}</p>
            <p class="site-footer__note">"Produtos gerados pela API Gemini do Google."</p>
        </footer>
    }
}
