//! Appointment listing page with client-side pagination.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::appointment_row::AppointmentRow;
use crate::components::pagination::Pagination;
use crate::net::types::Appointment;
use crate::state::admin::AdminState;
use crate::state::pagination::Pager;

/// Appointment list — fetches the full collection once a credential token
/// is present, then paginates it in memory at 10 rows per page.
///
/// Failures are swallowed: the list renders empty and the failure is only
/// logged. Without a token the page stays on its loading spinner.
#[component]
pub fn AppointmentsPage() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    let navigate = use_navigate();

    let is_loading = RwSignal::new(true);
    let current_page = RwSignal::new(1_usize);

    // Track the token alone so refreshing the collection below does not
    // retrigger the fetch.
    let token = Memo::new(move |_| admin.read().token.clone());

    Effect::new(move || {
        if token.get().is_none() {
            return;
        }
        is_loading.set(true);
        leptos::task::spawn_local(async move {
            let fetched = crate::net::api::fetch_all_appointments()
                .await
                .unwrap_or_default();
            admin.update(|state| state.appointments = fetched);
            is_loading.set(false);
        });
    });

    // Rebuilt from live state on every read, so it can never go stale.
    let pager = move || Pager {
        current_page: current_page.get(),
        total: admin.read().appointments.len(),
    };

    let current_rows = move || -> Vec<Appointment> {
        let (start, end) = pager().page_bounds();
        admin.read().appointments[start..end].to_vec()
    };

    // Page changes also push a cosmetic `?page=` query parameter; it is
    // never read back on load.
    let paginate = Callback::new(move |page: usize| {
        let mut pager = pager();
        pager.goto(page);
        let page = pager.current_page;
        current_page.set(page);
        navigate(
            &format!("/all-appointments?page={page}"),
            NavigateOptions::default(),
        );
    });

    view! {
        <div class="appointments-page">
            <p class="appointments-page__title">"Tất cả các cuộc hẹn"</p>

            <div class="appointments-page__table">
                <div class="appointments-page__header">
                    <p>"#"</p>
                    <p>"Bác sĩ"</p>
                    <p>"Bệnh nhân"</p>
                    <p>"Ngày"</p>
                    <p>"Ca"</p>
                    <p>"Trạng thái"</p>
                </div>

                {move || {
                    if is_loading.get() {
                        return view! {
                            <div class="appointments-page__loading">
                                <div class="appointments-page__spinner"></div>
                            </div>
                        }
                            .into_any();
                    }
                    let rows = current_rows();
                    if rows.is_empty() {
                        view! {
                            <div class="appointments-page__empty">"Không có cuộc hẹn nào"</div>
                        }
                            .into_any()
                    } else {
                        rows.into_iter()
                            .enumerate()
                            .map(|(index, appointment)| {
                                view! {
                                    <AppointmentRow ordinal={index + 1} appointment=appointment/>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </div>

            <Show when=move || pager().controls_visible()>
                <Pagination pager=Signal::derive(pager) on_page=paginate/>
            </Show>
        </div>
    }
}
