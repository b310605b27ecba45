//! REST API helpers for communicating with the booking backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Option` so fetch/update failures degrade UI
//! behavior without crashing hydration. Failures are logged to the console
//! but never surfaced to the user; the pages render empty or stay on their
//! loading placeholder instead.

#![allow(clippy::unused_async)]

use super::types::{Appointment, SchedulePatch, ScheduleRecord};

/// Fetch the full appointment collection from `/api/admin/appointments`.
/// Returns `None` on any failure or on the server.
pub async fn fetch_all_appointments() -> Option<Vec<Appointment>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/admin/appointments")
            .send()
            .await
            .map_err(|e| log::warn!("appointment fetch failed: {e}"))
            .ok()?;
        if !resp.ok() {
            log::warn!("appointment fetch failed: {}", resp.status());
            return None;
        }
        resp.json::<Vec<Appointment>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch a single work schedule from `/api/doctor/schedules/{id}`.
/// Returns `None` if the record is absent, on any failure, or on the server.
pub async fn fetch_schedule(id: &str) -> Option<ScheduleRecord> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/doctor/schedules/{id}");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| log::warn!("schedule fetch failed: {e}"))
            .ok()?;
        if !resp.ok() {
            log::warn!("schedule fetch failed: {}", resp.status());
            return None;
        }
        resp.json::<ScheduleRecord>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

/// Update a work schedule via `PUT /api/doctor/schedules/{id}`.
///
/// Returns `Some(())` on success; callers currently ignore the outcome and
/// navigate away regardless, matching the listing page's fire-and-forget
/// policy.
pub async fn update_schedule(id: &str, patch: &SchedulePatch) -> Option<()> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/doctor/schedules/{id}");
        let resp = gloo_net::http::Request::put(&url)
            .json(patch)
            .map_err(|e| log::warn!("schedule update failed: {e}"))
            .ok()?
            .send()
            .await
            .map_err(|e| log::warn!("schedule update failed: {e}"))
            .ok()?;
        if !resp.ok() {
            log::warn!("schedule update failed: {}", resp.status());
            return None;
        }
        Some(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, patch);
        None
    }
}
