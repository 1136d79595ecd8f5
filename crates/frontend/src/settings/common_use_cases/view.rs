use super::render::{EntryRender, IconRender, UseCasesRender};
use super::state::CommonUseCasesState;
use crate::shared::config::UseCasesConfig;
use crate::shared::disclosure::AnchorId;
use crate::shared::icon_registry::{IconAsset, InlineIconRegistry, SvgIconLocation};
use crate::shared::icons::icon;
use contracts::usecases::common_use_cases::UseCaseItem;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Common use cases list with "show more", expandable entries and icon tooltips.
///
/// All interaction state lives in one `CommonUseCasesState` owned by this
/// instance; the markup is derived from `CommonUseCasesState::render`.
#[component]
pub fn CommonUseCasesView(
    /// Use cases to show, in display order
    #[prop(into)]
    items: Signal<Vec<UseCaseItem>>,

    /// Entries per page (defaults to the configured page size)
    #[prop(optional)]
    page_size: Option<usize>,
) -> impl IntoView {
    let config = use_context::<UseCasesConfig>().unwrap_or_default();
    let page_size = page_size.unwrap_or(config.disclosure.page_size);
    let dismiss_delay_ms = config.overlay.dismiss_delay_ms;

    let state = match CommonUseCasesState::new(items.get_untracked(), page_size) {
        Ok(state) => RwSignal::new(state),
        Err(e) => {
            log::error!("common use cases: {}", e);
            return view! {
                <div class="common-use-cases common-use-cases--error">
                    {icon("info")}
                    <span>{e.to_string()}</span>
                </div>
            }
            .into_any();
        }
    };

    let registry = StoredValue::new((
        InlineIconRegistry,
        SvgIconLocation::new(config.icons.svg_icon_location),
    ));
    let rendered: Memo<UseCasesRender> =
        Memo::new(move |_| state.with(|s| registry.with_value(|r| s.render(r))));

    // New input data starts the list over
    Effect::new(move |prev: Option<()>| {
        let next = items.get();
        if prev.is_some() {
            state.update(|s| s.set_items(next));
        }
    });

    on_cleanup(move || {
        state.try_update(|s| s.teardown());
    });

    view! {
        <div class="common-use-cases">
            <For
                each=move || rendered.get().entries
                key=|entry| entry.key()
                children=move |entry| {
                    view! {
                        <UseCaseEntry
                            entry=entry
                            rendered=rendered
                            state=state
                            dismiss_delay_ms=dismiss_delay_ms
                        />
                    }
                }
            />
            {move || {
                rendered.get().show_more.map(|more| {
                    view! {
                        <div class="common-use-cases__show-more">
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| state.update(|s| s.show_more())
                            >
                                {more.label()}
                            </Button>
                        </div>
                    }
                })
            }}
        </div>
    }
    .into_any()
}

/// One expandable entry. Static content comes from `entry`, the flags that
/// change while the entry is mounted are read from `rendered`.
#[component]
fn UseCaseEntry(
    entry: EntryRender,
    rendered: Memo<UseCasesRender>,
    state: RwSignal<CommonUseCasesState>,
    dismiss_delay_ms: u32,
) -> impl IntoView {
    let id = entry.id.clone();
    let current = Memo::new({
        let id = id.clone();
        move |_| rendered.with(|r| r.entries.iter().find(|e| e.id == id).cloned())
    });
    let expanded = move || current.with(|e| e.as_ref().is_some_and(|e| e.expanded));
    let overlay_open = Signal::derive(move || {
        current.with(|e| {
            e.as_ref()
                .and_then(|e| e.icon.as_ref())
                .is_some_and(|i| i.overlay_open)
        })
    });

    let toggle = {
        let id = id.clone();
        move |_| state.update(|s| s.toggle(&id))
    };
    let toggle_by_key = {
        let id = id.clone();
        move |ev: leptos::ev::KeyboardEvent| {
            if is_activation_key(&ev.key()) {
                // Space would scroll the page
                ev.prevent_default();
                state.update(|s| s.toggle(&id));
            }
        }
    };

    let entry_class = entry.panel_class();
    let description = entry.description.clone();
    let learn_more_url = entry.learn_more_url.clone();

    view! {
        <div
            data-use-case=id.to_string()
            class=move || current.with(|e| e.as_ref().map_or(entry_class, EntryRender::panel_class))
        >
            <div
                class="use-case-panel__header"
                role="button"
                tabindex="0"
                aria-expanded=move || expanded().to_string()
                on:click=toggle
                on:keydown=toggle_by_key
            >
                {move || icon(current.with(|e| e.as_ref().map_or("chevron-right", EntryRender::chevron_icon)))}
                {entry.icon.map(|icon_render| view! {
                    <UseCaseIcon icon_render=icon_render overlay_open=overlay_open state=state dismiss_delay_ms=dismiss_delay_ms />
                })}
                <span class="use-case-panel__title">{entry.title}</span>
            </div>
            <Show when=expanded>
                <div class="use-case-panel__body">
                    <p class="use-case-panel__description">{description.clone()}</p>
                    {learn_more_url.clone().map(|url| view! {
                        <a class="use-case-panel__link" href=url target="_blank" rel="noopener">
                            "Learn more"
                        </a>
                    })}
                </div>
            </Show>
        </div>
    }
}

/// Icon affordance with its tooltip overlay
#[component]
fn UseCaseIcon(
    icon_render: IconRender,
    #[prop(into)] overlay_open: Signal<bool>,
    state: RwSignal<CommonUseCasesState>,
    dismiss_delay_ms: u32,
) -> impl IntoView {
    let anchor = icon_render.anchor.clone();
    let tooltip = icon_render.tooltip.clone();
    let on_enter = {
        let anchor = anchor.clone();
        move |_| open_overlay(state, &anchor)
    };
    let on_focus = {
        let anchor = anchor.clone();
        move |_| open_overlay(state, &anchor)
    };
    let on_click = {
        let anchor = anchor.clone();
        move |ev: leptos::ev::MouseEvent| {
            // the header underneath toggles the entry
            ev.stop_propagation();
            open_overlay(state, &anchor);
        }
    };
    let on_leave = {
        let anchor = anchor.clone();
        move |_| close_overlay_later(state, anchor.clone(), dismiss_delay_ms)
    };
    let on_blur = {
        let anchor = anchor.clone();
        move |_| close_overlay_later(state, anchor.clone(), dismiss_delay_ms)
    };

    let asset = match icon_render.asset {
        IconAsset::Inline(name) => icon(&name),
        IconAsset::Url(src) => view! {
            <img src=src width="20" height="20" alt="" aria-hidden="true" />
        }
        .into_any(),
    };

    view! {
        <span
            class="use-case-panel__icon"
            id=anchor.to_string()
            tabindex="0"
            on:mouseenter=on_enter
            on:mouseleave=on_leave
            on:focus=on_focus
            on:blur=on_blur
            on:click=on_click
        >
            {asset}
            <Show when=move || overlay_open.get()>
                <div class="use-case-panel__overlay" role="tooltip">
                    {tooltip.clone()}
                </div>
            </Show>
        </span>
    }
}

fn open_overlay(state: RwSignal<CommonUseCasesState>, anchor: &AnchorId) {
    let anchor = anchor.clone();
    state.update(|s| s.open_overlay(anchor));
}

/// Close after the dismiss delay. Any open in the meantime, including a
/// re-enter of the same anchor, keeps the overlay.
fn close_overlay_later(state: RwSignal<CommonUseCasesState>, anchor: AnchorId, delay_ms: u32) {
    let opened_at = state.with_untracked(|s| s.overlay_generation());
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        state.try_update(|s| s.close_overlay_deferred(&anchor, opened_at));
    });
}

/// Keys that activate a `role="button"` element
fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("Escape"));
    }
}
