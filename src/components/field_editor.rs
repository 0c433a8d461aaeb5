//! Dashboard Field Editors
//!
//! Inputs bound to one scalar field of the working document. Text edits
//! apply on every keystroke; image fields show a thumbnail and are changed
//! through the image edit dialog.

use leptos::prelude::*;

use crate::context::now_ms;
use crate::editor::{EditCommand, EditTarget, Field};
use crate::store::{store_apply, use_admin_store, AdminStateStoreFields};

pub fn field_label(field: Field) -> &'static str {
    match field {
        Field::HeroTitle => "العنوان الرئيسي",
        Field::HeroSubtitle => "العنوان الفرعي",
        Field::HeroBackgroundImage => "صورة الخلفية",
        Field::AboutTitle => "العنوان",
        Field::AboutText => "النص",
        Field::AboutImageUrl => "الصورة",
        Field::FurnitureTitle | Field::StoreTitle | Field::ClientsTitle => "عنوان القسم",
        Field::StoreSubtitle => "وصف القسم",
        Field::ContactPhone => "الهاتف",
        Field::ContactEmail => "البريد الإلكتروني",
        Field::ContactAddress => "العنوان",
    }
}

#[component]
pub fn TextField(field: Field, #[prop(optional)] multiline: bool) -> impl IntoView {
    let store = use_admin_store();
    let value = move || store.working().with(|doc| field.read(doc).to_string());
    let on_input = move |ev: web_sys::Event| {
        let command = EditCommand::SetField {
            field,
            value: event_target_value(&ev),
        };
        store_apply(&store, &command, now_ms());
    };

    let input = if multiline {
        view! { <textarea rows="4" prop:value=value on:input=on_input></textarea> }.into_any()
    } else {
        view! { <input type="text" prop:value=value on:input=on_input /> }.into_any()
    };

    view! {
        <label class="field">
            <span class="field-label">{field_label(field)}</span>
            {input}
        </label>
    }
}

/// Clickable thumbnail of an image, any field kind
#[component]
pub fn ImageThumb(
    #[prop(into)] src: Signal<String>,
    target: EditTarget,
    #[prop(into)] on_edit: Callback<EditTarget>,
) -> impl IntoView {
    view! {
        <button type="button" class="image-thumb" title="تغيير الصورة" on:click=move |_| on_edit.run(target)>
            <img src=move || src.get() alt="" />
            <span class="image-thumb-hint">"تغيير"</span>
        </button>
    }
}

#[component]
pub fn ImageField(field: Field, #[prop(into)] on_edit: Callback<EditTarget>) -> impl IntoView {
    let store = use_admin_store();
    let src = Signal::derive(move || store.working().with(|doc| field.read(doc).to_string()));

    view! {
        <div class="field">
            <span class="field-label">{field_label(field)}</span>
            <ImageThumb src=src target=EditTarget::Field(field) on_edit=on_edit />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_fields_are_labelled_as_images() {
        for field in [Field::HeroBackgroundImage, Field::AboutImageUrl] {
            assert!(field.is_image());
            assert!(field_label(field).contains("صورة") || field_label(field).contains("الصورة"));
        }
    }
}
