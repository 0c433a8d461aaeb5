//! Dashboard List Editor
//!
//! Rows for one list section with add, remove and reorder.

use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, ImageThumb};
use crate::context::now_ms;
use crate::editor::{items, EditCommand, EditTarget, ItemField, ListSection};
use crate::models::ItemId;
use crate::store::{store_apply, use_admin_store, AdminStateStoreFields};

pub fn item_field_label(field: ItemField) -> &'static str {
    match field {
        ItemField::Name => "الاسم",
        ItemField::ImageUrl => "الصورة",
        ItemField::LogoUrl => "الشعار",
        ItemField::Description => "الوصف",
        ItemField::WebsiteUrl => "رابط الموقع",
        ItemField::Price => "السعر",
        ItemField::ProductUrl => "رابط المنتج",
    }
}

pub fn add_label(section: ListSection) -> &'static str {
    match section {
        ListSection::Furniture => "إضافة منتج",
        ListSection::Store => "إضافة منتج للمتجر",
        ListSection::Clients => "إضافة عميل",
    }
}

#[component]
pub fn ListEditor(section: ListSection, #[prop(into)] on_edit_image: Callback<EditTarget>) -> impl IntoView {
    let store = use_admin_store();
    let ids = Memo::new(move |_| store.working().with(|doc| items(doc, section).ids()));

    view! {
        <div class="list-editor">
            <For
                each=move || ids.get()
                key=|id| *id
                children=move |id| view! { <ItemRow section=section id=id on_edit_image=on_edit_image /> }
            />
            <button
                type="button"
                class="add-item-btn"
                on:click=move |_| store_apply(&store, &EditCommand::AddItem { section }, now_ms())
            >
                {add_label(section)}
            </button>
        </div>
    }
}

#[component]
fn ItemRow(section: ListSection, id: ItemId, on_edit_image: Callback<EditTarget>) -> impl IntoView {
    let store = use_admin_store();
    let value = move |field: ItemField| {
        move || {
            store
                .working()
                .with(|doc| items(doc, section).field(section, id, field).unwrap_or_default())
        }
    };
    let move_by = move |offset: isize| {
        move |_: web_sys::MouseEvent| store_apply(&store, &EditCommand::MoveItem { section, id, offset }, now_ms())
    };

    let image_field = section.image_field();
    let text_inputs = section
        .text_fields()
        .iter()
        .map(|field| {
            let field = *field;
            view! {
                <input
                    type="text"
                    class="item-input"
                    placeholder=item_field_label(field)
                    prop:value=value(field)
                    on:input=move |ev| {
                        let command = EditCommand::SetItemField {
                            section,
                            id,
                            field,
                            value: event_target_value(&ev),
                        };
                        store_apply(&store, &command, now_ms());
                    }
                />
            }
        })
        .collect_view();

    view! {
        <div class="item-row">
            <ImageThumb
                src=Signal::derive(value(image_field))
                target=EditTarget::Item { section, id, field: image_field }
                on_edit=on_edit_image
            />
            <div class="item-fields">{text_inputs}</div>
            <div class="item-actions">
                <button type="button" class="move-btn" title="تحريك للأعلى" on:click=move_by(-1)>"▲"</button>
                <button type="button" class="move-btn" title="تحريك للأسفل" on:click=move_by(1)>"▼"</button>
                <DeleteConfirmButton
                    label=format!("حذف العنصر {}", id)
                    on_confirm=move || store_apply(&store, &EditCommand::RemoveItem { section, id }, now_ms())
                />
            </div>
        </div>
    }
}
