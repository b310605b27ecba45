//! Page-control strip for the appointment list.

use leptos::prelude::*;

use crate::state::pagination::{PageItem, Pager};

/// Renders the pager's control strip and reports page changes upward.
///
/// The pager is derived from live state, so the strip rebuilds whenever the
/// current page or the collection size changes.
#[component]
pub fn Pagination(pager: Signal<Pager>, on_page: Callback<usize>) -> impl IntoView {
    view! {
        <div class="pagination">
            {move || {
                let pager = pager.get();
                pager
                    .page_items()
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Prev { enabled } => view! {
                            <button
                                class="pagination__button pagination__button--edge"
                                disabled={!enabled}
                                on:click=move |_| on_page.run(pager.prev_page())
                            >
                                "Trước"
                            </button>
                        }
                            .into_any(),
                        PageItem::Page { number, current } => view! {
                            <button
                                class={if current {
                                    "pagination__button pagination__button--current"
                                } else {
                                    "pagination__button"
                                }}
                                on:click=move |_| on_page.run(number)
                            >
                                {number}
                            </button>
                        }
                            .into_any(),
                        PageItem::Ellipsis => view! {
                            <span class="pagination__dots">"..."</span>
                        }
                            .into_any(),
                        PageItem::Next { enabled } => view! {
                            <button
                                class="pagination__button pagination__button--edge"
                                disabled={!enabled}
                                on:click=move |_| on_page.run(pager.next_page())
                            >
                                "Tiếp"
                            </button>
                        }
                            .into_any(),
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
