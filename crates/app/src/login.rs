use crate::auth::use_session;
use dioxus::prelude::*;
use shared_types::{AppError, DemoAccount, InFlight, Role, ALL_ROLES};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, FormSelect, Input,
};
use std::collections::HashMap;

/// Role selection and sign-in. The selected role must match the account.
#[component]
pub fn LoginPage() -> Element {
    let mut gate = use_session();
    let mut role = use_signal(|| Role::Student);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut flight = use_signal(InFlight::default);

    let demo_accounts = use_resource(|| async move {
        server::api::demo_accounts().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load demo accounts");
            Vec::new()
        })
    });

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        let ticket = flight.write().begin();
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let result = server::api::login(email(), password(), role()).await;
        if !flight.write().finish(ticket) {
            return;
        }
        match result {
            Ok(user) => gate.sign_in(user),
            Err(e) => {
                let err_str = e.to_string();
                let fe = AppError::parse_field_errors(&err_str);
                if fe.is_empty() {
                    error_msg.set(Some(AppError::friendly_message(&err_str)));
                } else {
                    field_errors.set(fe);
                }
            }
        }
    };

    let mut fill_demo = move |account: DemoAccount| {
        role.set(account.role);
        email.set(account.email);
        password.set(account.password);
        error_msg.set(None);
        field_errors.set(HashMap::new());
    };

    let role_options: Vec<(String, String)> = ALL_ROLES
        .iter()
        .map(|r| (r.as_str().to_string(), r.display_name().to_string()))
        .collect();
    let loading = flight.read().is_loading();
    let accounts = demo_accounts.read().as_ref().cloned().unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    div { class: "auth-brand", "IntelliSkool" }
                    CardTitle { "Sign In" }
                    CardDescription { "Choose your role and enter your school credentials" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", role: "alert", "{err}" }
                    }

                    form { class: "auth-form", onsubmit: handle_login,
                        FormSelect {
                            label: "I am a".to_string(),
                            value: role().as_str().to_string(),
                            options: role_options,
                            disabled: loading,
                            onchange: move |evt: Event<FormData>| {
                                if let Some(parsed) = Role::parse(&evt.value()) {
                                    role.set(parsed);
                                }
                            },
                        }
                        Input {
                            label: "Email".to_string(),
                            input_type: "email".to_string(),
                            placeholder: "you@intelliskool.edu".to_string(),
                            value: email(),
                            error: field_errors.read().get("email").cloned(),
                            disabled: loading,
                            on_input: move |evt: FormEvent| email.set(evt.value()),
                        }
                        Input {
                            label: "Password".to_string(),
                            input_type: "password".to_string(),
                            value: password(),
                            error: field_errors.read().get("password").cloned(),
                            disabled: loading,
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            submit: true,
                            disabled: loading,
                            class: "auth-submit",
                            if loading { "Signing in..." } else { "Sign In" }
                        }
                    }

                    if !accounts.is_empty() {
                        div { class: "auth-demo",
                            p { class: "auth-demo-title", "Demo accounts" }
                            ul { class: "auth-demo-list",
                                for account in accounts {
                                    li { key: "{account.email}", class: "auth-demo-item",
                                        Badge { variant: BadgeVariant::Outline, "{account.role}" }
                                        span { class: "auth-demo-email", "{account.email}" }
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            size: ButtonSize::Small,
                                            disabled: loading,
                                            onclick: {
                                                let account = account.clone();
                                                move |_: MouseEvent| fill_demo(account.clone())
                                            },
                                            "Use"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
