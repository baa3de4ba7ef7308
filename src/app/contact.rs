use leptos::{
    either::Either,
    ev::SubmitEvent,
    prelude::*,
    task::spawn_local,
};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::contact::{
    ContactError, ContactSink, ContactState, ContactTiming, FormField, SimulatedSink,
    SubmissionPhase, Ticket,
};

const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border-gray-300 shadow-sm focus:border-indigo-500 focus:ring-indigo-500 transition-colors";

#[component]
pub fn Contact() -> impl IntoView {
    let timing = use_context::<ContactTiming>().unwrap_or_default();
    let sink = SimulatedSink::new(timing.latency);
    let state = RwSignal::new(ContactState::new());

    // Cleared when this scope is disposed, so a pending reset never fires
    // into a torn-down form.
    let UseTimeoutFnReturn {
        start: start_reset,
        ..
    } = use_timeout_fn(
        move |ticket: Ticket| {
            state.update(|s| {
                s.reset_status(ticket);
            });
        },
        timing.status_display_ms(),
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let submission = match state.try_update(|s| s.begin_submit()) {
            Some(Ok(submission)) => submission,
            Some(Err(err)) => {
                log::warn!("contact form not submitted: {err}");
                return;
            }
            None => return,
        };
        let ticket = submission.ticket;
        let start_reset = start_reset.clone();
        spawn_local(async move {
            let outcome = sink.deliver(submission.message).await;
            if finish_delivery(state, ticket, outcome) {
                start_reset(ticket);
            }
        });
    };

    let is_submitting = move || state.with(|s| s.is_submitting());

    view! {
        <section class="py-20">
            <div class="container mx-auto px-6">
                <h2 class="text-3xl font-bold text-center mb-12">"Feel free to connect"</h2>
                <div class="max-w-2xl mx-auto">
                    <form on:submit=on_submit class="space-y-6">
                        {FormField::ALL
                            .into_iter()
                            .map(|field| view! { <Field field state /> })
                            .collect_view()}
                        <button
                            type="submit"
                            disabled=is_submitting
                            class=move || {
                                if is_submitting() {
                                    "w-full py-2 px-4 rounded-md transition-all duration-300 bg-gray-400 cursor-not-allowed"
                                } else {
                                    "w-full py-2 px-4 rounded-md transition-all duration-300 bg-indigo-600 hover:bg-indigo-500 text-white"
                                }
                            }
                        >
                            {move || if is_submitting() { "Sending..." } else { "Send Message" }}
                        </button>
                        {move || {
                            let phase = state.with(|s| s.phase());
                            phase
                                .notice()
                                .map(|text| {
                                    let class = if phase == SubmissionPhase::Error {
                                        "text-red-600 text-center"
                                    } else {
                                        "text-green-600 text-center"
                                    };
                                    view! {
                                        <div class=class role="status">
                                            {text}
                                        </div>
                                    }
                                })
                        }}
                    </form>
                </div>
            </div>
        </section>
    }
}

/// Settles `ticket` with the delivery outcome. True when the status reset
/// should be scheduled: the ticket was current and the form still exists.
fn finish_delivery(
    state: RwSignal<ContactState>,
    ticket: Ticket,
    outcome: Result<(), ContactError>,
) -> bool {
    // try_update is a no-op once the section has been disposed
    state
        .try_update(|s| {
            let settled = s.settle(ticket, outcome);
            if settled {
                if let Some(err) = s.last_error() {
                    log::warn!("contact message delivery failed: {err:?}");
                }
            }
            settled
        })
        .unwrap_or(false)
}

#[component]
fn Field(field: FormField, state: RwSignal<ContactState>) -> impl IntoView {
    let value = move || state.with(|s| s.field(field).to_string());

    view! {
        <div>
            <label for=field.id() class="block text-sm font-medium text-gray-700">
                {field.label()}
            </label>
            {match field.input_type() {
                Some(kind) => {
                    Either::Left(
                        view! {
                            <input
                                type=kind
                                id=field.id()
                                prop:value=value
                                on:input=move |ev| {
                                    state.update(|s| s.input(field, event_target_value(&ev)))
                                }
                                class=INPUT_CLASS
                                required
                            />
                        },
                    )
                }
                None => {
                    Either::Right(
                        view! {
                            <textarea
                                id=field.id()
                                rows="4"
                                prop:value=value
                                on:input=move |ev| {
                                    state.update(|s| s.input(field, event_target_value(&ev)))
                                }
                                class=INPUT_CLASS
                                required
                            ></textarea>
                        },
                    )
                }
            }}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn submitted(owner: &Owner) -> (RwSignal<ContactState>, Ticket) {
        owner.with(|| {
            let state = RwSignal::new(ContactState::new());
            state.update(|s| {
                s.input(FormField::Name, "Ana");
                s.input(FormField::Email, "a@b.com");
                s.input(FormField::Message, "Hi");
            });
            let ticket = state
                .try_update(|s| s.begin_submit())
                .expect("signal should be live")
                .expect("form should be complete")
                .ticket;
            (state, ticket)
        })
    }

    #[test]
    fn test_successful_delivery_schedules_reset() {
        let owner = Owner::new();
        let (state, ticket) = submitted(&owner);

        assert!(owner.with(|| finish_delivery(state, ticket, Ok(()))));

        state.with_untracked(|s| {
            assert_eq!(s.phase(), SubmissionPhase::Success);
            assert!(s.form().is_blank());
        });
    }

    #[test]
    fn test_failed_delivery_schedules_reset_and_keeps_fields() {
        let owner = Owner::new();
        let (state, ticket) = submitted(&owner);
        let err = ContactError::SubmissionFailed("relay refused".to_string());

        assert!(owner.with(|| finish_delivery(state, ticket, Err(err.clone()))));

        state.with_untracked(|s| {
            assert_eq!(s.phase(), SubmissionPhase::Error);
            assert_eq!(s.last_error(), Some(&err));
            assert_eq!(s.field(FormField::Message), "Hi");
        });
    }

    #[test]
    fn test_repeated_delivery_does_not_schedule_second_reset() {
        let owner = Owner::new();
        let (state, ticket) = submitted(&owner);

        assert!(owner.with(|| finish_delivery(state, ticket, Ok(()))));
        assert!(!owner.with(|| finish_delivery(state, ticket, Ok(()))));
    }

    #[test]
    fn test_delivery_after_teardown_is_dropped() {
        let owner = Owner::new();
        let (state, ticket) = submitted(&owner);
        owner.unset();

        let later = Owner::new();
        assert!(!later.with(|| finish_delivery(state, ticket, Ok(()))));
    }
}
