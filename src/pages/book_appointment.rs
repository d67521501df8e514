//! Appointment booking form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reachable by anonymous visitors from the landing page (demonstration
//! flow) as well as by signed-in patients from their dashboard. The form
//! posts to `/api/appointments`; booking management beyond the confirmation
//! shown here requires an account.

#[cfg(test)]
#[path = "book_appointment_test.rs"]
mod book_appointment_test;

use leptos::prelude::*;

use crate::components::header::Header;
use crate::net;
use crate::net::types::{Appointment, BookingRequest, Doctor};

/// Booking page — practitioner select, slot, and reason.
#[component]
pub fn BookAppointmentPage() -> impl IntoView {
    let doctors = RwSignal::new(Vec::<Doctor>::new());
    let doctors_error = RwSignal::new(None::<String>);
    let doctor_id = RwSignal::new(String::new());
    let slot = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let confirmed = RwSignal::new(None::<Appointment>);

    leptos::task::spawn_local(async move {
        match net::api::fetch_doctors().await {
            Ok(items) => doctors.set(items),
            Err(e) => doctors_error.set(Some(e)),
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let booking = match validate_booking(&doctor_id.get(), &slot.get(), &reason.get()) {
            Ok(booking) => booking,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Requesting your appointment...".to_owned());

        leptos::task::spawn_local(async move {
            match net::api::create_appointment(&booking).await {
                Ok(appt) => {
                    confirmed.set(Some(appt));
                    info.set(String::new());
                }
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="booking-page">
            <Header/>
            <h1>"Schedule a Consultation"</h1>

            <Show
                when=move || confirmed.get().is_none()
                fallback=move || {
                    view! {
                        <div class="confirmation-panel">
                            <h2>"Appointment requested"</h2>
                            {move || {
                                confirmed
                                    .get()
                                    .map(|appt| {
                                        view! {
                                            <p>
                                                {format!(
                                                    "Your consultation is {} for {}.",
                                                    appt.status,
                                                    appt.slot,
                                                )}
                                            </p>
                                        }
                                    })
                            }}
                            <p>
                                <a href="/login">"Login or sign up"</a>
                                " to manage your bookings, or " <a href="/">"return home"</a> "."
                            </p>
                        </div>
                    }
                }
            >
                {move || {
                    doctors_error
                        .get()
                        .map(|e| view! { <p class="page-error">{e}</p> })
                }}
                <form class="booking-form" on:submit=on_submit>
                    <label class="dialog__label">
                        "Practitioner"
                        <select
                            class="form__select"
                            on:change=move |ev| doctor_id.set(event_target_value(&ev))
                        >
                            <option value="">"Choose a practitioner..."</option>
                            {move || {
                                doctors
                                    .get()
                                    .into_iter()
                                    .map(|d| {
                                        view! {
                                            <option value=d.id.clone()>
                                                {format!("{} — {}", d.name, d.specialty)}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Time"
                        <input
                            class="form__input"
                            type="datetime-local"
                            prop:value=move || slot.get()
                            on:input=move |ev| slot.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Reason for visit"
                        <textarea
                            class="form__textarea"
                            rows="3"
                            placeholder="Briefly describe what you'd like to discuss"
                            prop:value=move || reason.get()
                            on:input=move |ev| reason.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Book Now"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </Show>
        </div>
    }
}

/// Validate and normalize the booking form values.
fn validate_booking(doctor_id: &str, slot: &str, reason: &str) -> Result<BookingRequest, &'static str> {
    if doctor_id.is_empty() {
        return Err("Choose a practitioner.");
    }
    if slot.is_empty() {
        return Err("Choose a time for the consultation.");
    }
    let reason = reason.trim();
    if reason.is_empty() {
        return Err("Briefly describe the reason for your visit.");
    }
    Ok(BookingRequest {
        doctor_id: doctor_id.to_owned(),
        slot: slot.to_owned(),
        reason: reason.to_owned(),
    })
}
