//! Phone + SMS code sign-in.
//!
//! The SMS side is simulated (see `util::sms`): any valid number gets a code,
//! and the code is always 1234.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::auth::{AuthState, AuthStep, sign_out};
use crate::util::phone::{digits_only, is_complete_code, is_valid_phone};

/// Trimmed phone as typed, if it has a valid number in it.
fn validate_phone_input(raw: &str) -> Result<String, &'static str> {
    let phone = raw.trim();
    if is_valid_phone(phone) {
        Ok(phone.to_owned())
    } else {
        Err("Введите корректный номер телефона")
    }
}

/// Digits of a complete code.
fn validate_code_input(raw: &str) -> Result<String, &'static str> {
    let code = digits_only(raw);
    if is_complete_code(&code) {
        Ok(code)
    } else {
        Err("Введите полный код из 4 цифр")
    }
}

/// The phone form is for signed-out visitors on the first step only.
fn shows_phone_form(state: &AuthState) -> bool {
    state.step == AuthStep::Phone && !state.is_authenticated()
}

#[cfg(feature = "hydrate")]
fn run_resend_countdown(auth: RwSignal<AuthState>, ticket: u64) {
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
            let mut running = false;
            auth.update(|a| running = a.tick(ticket));
            if !running {
                break;
            }
        }
    });
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let phone = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());

    let on_request_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().busy {
            return;
        }
        let phone_value = match validate_phone_input(&phone.get_untracked()) {
            Ok(value) => value,
            Err(message) => {
                auth.update(|a| a.fail(message));
                return;
            }
        };
        auth.update(|a| a.begin_request("Отправка..."));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if crate::util::sms::send_code(&digits_only(&phone_value)).await {
                let mut ticket = 0;
                auth.update(|a| ticket = a.code_sent(phone_value));
                run_resend_countdown(auth, ticket);
            } else {
                auth.update(|a| a.fail("Ошибка отправки кода. Попробуйте позже."));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = phone_value;
    };

    let on_verify_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().busy {
            return;
        }
        let code_value = match validate_code_input(&code.get_untracked()) {
            Ok(value) => value,
            Err(message) => {
                auth.update(|a| a.fail(message));
                return;
            }
        };
        auth.update(|a| a.begin_request("Проверка..."));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if !crate::util::sms::verify_code(&code_value).await {
                code.set(String::new());
                auth.update(AuthState::rejected_code);
                return;
            }
            let session = crate::util::session::AuthSession {
                phone: auth.get_untracked().phone,
                timestamp: crate::util::clock::now_ms(),
            };
            let storage = crate::util::storage::BrowserStorage;
            if let Err(e) = crate::util::session::save_session(&storage, &session) {
                log::warn!("sign-in marker not saved: {e}");
            }
            auth.update(|a| a.signed_in(session));
            gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = code_value;
    };

    let on_resend = move |_| {
        if !auth.get_untracked().can_resend() {
            return;
        }
        let mut ticket = 0;
        auth.update(|a| {
            ticket = a.start_countdown();
            a.notice = Some(crate::state::notice::Notice::success("Код отправлен повторно"));
        });

        #[cfg(feature = "hydrate")]
        {
            let phone_digits = digits_only(&auth.get_untracked().phone);
            leptos::task::spawn_local(async move {
                crate::util::sms::send_code(&phone_digits).await;
            });
            run_resend_countdown(auth, ticket);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ticket;
    };

    let step = move || auth.get().step;
    let busy = move || auth.get().busy;

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Вход"</h1>

                <Show when=move || auth.with(shows_phone_form)>
                    <form class="login-form" id="phoneForm" on:submit=on_request_code>
                        <p class="login-card__subtitle">"Введите номер телефона"</p>
                        <input
                            id="phoneInput"
                            class="login-input"
                            type="tel"
                            placeholder="+7 (999) 123-45-67"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                        <button class="login-button wb-auth-submit" type="submit" disabled=busy>
                            {move || if busy() { "Отправка..." } else { "Получить код" }}
                        </button>
                    </form>
                </Show>

                <Show when=move || step() == AuthStep::Code>
                    <form class="login-form" id="codeForm" on:submit=on_verify_code>
                        <p class="login-card__subtitle">
                            "Код отправлен на "
                            <span id="codePhone">{move || auth.get().phone}</span>
                        </p>
                        <input
                            class="login-input login-input--code wb-code-input"
                            type="text"
                            inputmode="numeric"
                            maxlength="4"
                            placeholder="1234"
                            prop:value=move || code.get()
                            on:input=move |ev| code.set(digits_only(&event_target_value(&ev)))
                        />
                        <button class="login-button wb-auth-submit" type="submit" disabled=busy>
                            {move || if busy() { "Проверка..." } else { "Войти" }}
                        </button>
                        <div class="login-form__actions">
                            <button
                                type="button"
                                class="login-link"
                                id="changePhone"
                                on:click=move |_| auth.update(AuthState::back_to_phone)
                            >
                                "Изменить номер"
                            </button>
                            <button
                                type="button"
                                class="login-link"
                                id="resendCode"
                                disabled=move || !auth.get().can_resend()
                                on:click=on_resend
                            >
                                {move || {
                                    let left = auth.get().resend_in;
                                    if left > 0 {
                                        format!("Отправить повторно через {left}")
                                    } else {
                                        "Отправить повторно".to_owned()
                                    }
                                }}
                            </button>
                        </div>
                    </form>
                </Show>

                <Show when=move || step() == AuthStep::Done || auth.get().is_authenticated()>
                    <p class="login-message">
                        "Вы вошли как "
                        {move || auth.get().session.map(|s| s.phone).unwrap_or_default()}
                    </p>
                    <button type="button" class="login-link" id="logoutBtn" on:click=move |_| sign_out(auth)>
                        "Выйти"
                    </button>
                </Show>

                {move || {
                    auth.get().notice.map(|n| {
                        let class = n.class();
                        view! { <p class=class>{n.text}</p> }
                    })
                }}
            </div>
        </div>
    }
}
