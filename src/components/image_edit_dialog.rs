//! Image Edit Dialog Component
//!
//! Asks for a new image link for one image field, previewing it before the
//! edit is committed to the working document.

use leptos::prelude::*;

use crate::components::Modal;
use crate::editor::{EditError, EditRequest};
use crate::store::{store_replace_working, use_admin_store, AdminStateStoreFields};

pub fn edit_error_message(err: &EditError) -> String {
    match err {
        EditError::EmptyValue => "رابط الصورة لا يمكن أن يكون فارغاً".to_string(),
        EditError::ItemNotFound { .. } => "العنصر لم يعد موجوداً".to_string(),
        EditError::FieldNotApplicable { .. } => err.to_string(),
    }
}

#[component]
pub fn ImageEditDialog(request: EditRequest, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let store = use_admin_store();
    let (value, set_value) = signal(request.current.clone());
    let (error, set_error) = signal(None::<String>);
    let request = StoredValue::new(request);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let next = value.get_untracked();
        if !request.with_value(|r| r.is_change(&next)) {
            on_close.run(());
            return;
        }
        let result = store
            .working()
            .with_untracked(|doc| request.with_value(|r| r.commit(doc, next)));
        match result {
            Ok(doc) => {
                store_replace_working(&store, doc);
                on_close.run(());
            }
            Err(err) => {
                log::warn!("image edit rejected: {}", err);
                set_error.set(Some(edit_error_message(&err)));
            }
        }
    };

    view! {
        <Modal class="image-edit-dialog" on_close=on_close>
            <form class="image-edit-form" on:submit=submit>
                <h3>"أدخل رابط الصورة الجديد:"</h3>
                <img class="image-edit-preview" src=move || value.get() alt="" />
                <input
                    type="url"
                    dir="ltr"
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        set_error.set(None);
                        set_value.set(event_target_value(&ev));
                    }
                />
                {move || error.get().map(|message| view! { <p class="form-error" role="alert">{message}</p> })}
                <div class="dialog-actions">
                    <button type="submit" class="primary">"تطبيق"</button>
                    <button type="button" on:click=move |_| on_close.run(())>"إلغاء"</button>
                </div>
            </form>
        </Modal>
    }
}
