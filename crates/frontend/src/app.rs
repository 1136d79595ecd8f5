use crate::settings::common_use_cases::CommonUseCasesView;
use crate::shared::config::{self, UseCasesConfig};
use contracts::usecases::common_use_cases::default_catalog;
use leptos::prelude::*;
use web_sys::window;

/// Inline `<script type="application/toml" id=...>` the host page may use to override defaults
const CONFIG_ELEMENT_ID: &str = "use-cases-config";

#[component]
pub fn App() -> impl IntoView {
    // Provide the configuration to the whole app via context.
    provide_context(host_config());

    let page_size = window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| config::page_size_from_query(&search));
    let (items, _set_items) = signal(default_catalog());

    view! {
        <div class="settings-view">
            <h2 class="settings-view__title">"Common use cases"</h2>
            {match page_size {
                Some(page_size) => view! { <CommonUseCasesView items=items page_size=page_size /> }.into_any(),
                None => view! { <CommonUseCasesView items=items /> }.into_any(),
            }}
        </div>
    }
}

fn host_config() -> UseCasesConfig {
    let source = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    config::load_config(source.as_deref())
}
