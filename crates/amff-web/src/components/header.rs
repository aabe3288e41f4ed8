use amff_core::page::{CONTACT_EMAIL, FOOTER_COPYRIGHT, SUBTITLE, TAGLINE, TITLE};
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <div class="header">
            <h1>{TITLE}</h1>
            <p>{TAGLINE}</p>
            <div class="subtitle">{SUBTITLE}</div>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let mailto = format!("mailto:{}", CONTACT_EMAIL);
    view! {
        <footer class="footer">
            <p>{FOOTER_COPYRIGHT}</p>
            <p>"Contact: "<a href=mailto>{CONTACT_EMAIL}</a></p>
        </footer>
    }
}
