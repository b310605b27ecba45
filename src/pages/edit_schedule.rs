//! Work-schedule edit form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::ScheduleRecord;
use crate::state::schedule_form::ScheduleForm;
use crate::util::format;

/// Schedule edit page — loads the record named by the route parameter,
/// mirrors it into a local form, and submits a patch on confirmation.
///
/// While the record is absent (still fetching, fetch failed, or the id is
/// unknown) the page shows its loading placeholder indefinitely; there is
/// no error state. After submit it navigates back to the schedule listing
/// whether or not the update succeeded.
#[component]
pub fn EditSchedulePage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();

    let schedule = RwSignal::new(None::<ScheduleRecord>);
    let form = RwSignal::new(ScheduleForm::default());

    let schedule_id = Memo::new(move |_| params.read().get("id"));

    // Fetch the record once per id.
    Effect::new(move || {
        let Some(id) = schedule_id.get() else {
            return;
        };
        leptos::task::spawn_local(async move {
            if let Some(record) = crate::net::api::fetch_schedule(&id).await {
                form.set(ScheduleForm::from_record(&record));
                schedule.set(Some(record));
            }
        });
    });

    let submit = Callback::new(move |()| {
        let Some(id) = schedule_id.get_untracked() else {
            return;
        };
        let Some(patch) = form.with_untracked(ScheduleForm::to_patch) else {
            return;
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let _ = crate::net::api::update_schedule(&id, &patch).await;
            navigate("/doctor-work-schedule", NavigateOptions::default());
        });
    });

    view! {
        <Show
            when=move || schedule.read().is_some()
            fallback=|| view! { <p class="schedule-edit__loading">"Loading..."</p> }
        >
            <div class="schedule-edit">
                <div class="schedule-edit__card">
                    <h2 class="schedule-edit__title">"Chỉnh Sửa Lịch Làm Việc của Bác Sĩ"</h2>

                    <form
                        class="schedule-edit__form"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            submit.run(());
                        }
                    >
                        <div class="schedule-edit__field">
                            <label class="schedule-edit__label">"Ngày làm việc"</label>
                            <input
                                type="date"
                                class="schedule-edit__input"
                                min=format::today_iso()
                                prop:value=move || form.read().date_value()
                                on:input=move |ev| {
                                    form.update(|f| f.set_date(&event_target_value(&ev)));
                                }
                            />
                        </div>

                        <div class="schedule-edit__field">
                            <label class="schedule-edit__label">"Ca làm việc"</label>
                            <select
                                class="schedule-edit__input"
                                required=true
                                prop:value=move || form.read().time_slot.clone()
                                on:change=move |ev| {
                                    form.update(|f| f.set_slot(&event_target_value(&ev)));
                                }
                            >
                                <option value="" disabled=true>"Chọn ca làm việc"</option>
                                <option value="morning">"Buổi sáng"</option>
                                <option value="afternoon">"Buổi chiều"</option>
                            </select>
                        </div>

                        <button type="submit" class="schedule-edit__submit">
                            "Cập nhật Lịch Làm Việc"
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
