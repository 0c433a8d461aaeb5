//! Admin Page Component
//!
//! Login gate in front of the dashboard.

use leptos::prelude::*;

use crate::auth::AuthError;
use crate::components::AdminDashboard;
use crate::context::use_app_context;

#[component]
pub fn AdminPage() -> impl IntoView {
    let ctx = use_app_context();
    let (authenticated, set_authenticated) = signal(ctx.gate.is_authenticated());

    let gate = StoredValue::new(ctx.gate.clone());
    let on_logout = move || {
        if let Err(err) = gate.with_value(|gate| gate.logout()) {
            log::error!("logout failed: {}", err);
        }
        set_authenticated.set(false);
    };

    view! {
        <div class="admin" dir="rtl">
            <Show
                when=move || authenticated.get()
                fallback=move || view! { <LoginForm on_login=move || set_authenticated.set(true) /> }
            >
                <AdminDashboard on_logout=on_logout />
            </Show>
        </div>
    }
}

pub fn login_error_message(err: &AuthError) -> String {
    match err {
        AuthError::WrongPassword => "كلمة المرور غير صحيحة".to_string(),
        AuthError::Storage(err) => format!("تعذر تسجيل الدخول: {}", err),
    }
}

#[component]
fn LoginForm(#[prop(into)] on_login: Callback<()>) -> impl IntoView {
    let gate = StoredValue::new(use_app_context().gate);
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match gate.with_value(|gate| gate.login(&password.get_untracked())) {
            Ok(()) => {
                set_error.set(None);
                on_login.run(());
            }
            Err(err) => {
                set_error.set(Some(login_error_message(&err)));
                set_password.set(String::new());
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"تسجيل دخول المسؤول"</h1>
                <p>"الرجاء إدخال كلمة المرور للوصول إلى لوحة التحكم."</p>
                <form on:submit=submit>
                    <input
                        type="password"
                        placeholder="كلمة المرور"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    {move || error.get().map(|message| view! { <p class="login-error" role="alert">{message}</p> })}
                    <button type="submit">"دخول"</button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StoreError;

    #[test]
    fn test_login_error_messages() {
        assert_eq!(login_error_message(&AuthError::WrongPassword), "كلمة المرور غير صحيحة");
        let storage = login_error_message(&AuthError::Storage(StoreError::Unavailable));
        assert!(storage.starts_with("تعذر تسجيل الدخول"));
    }
}
