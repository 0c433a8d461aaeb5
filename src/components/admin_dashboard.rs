//! Admin Dashboard Component
//!
//! Editor for every section of the document. Edits go to a working copy
//! that is written to the content store only when saved.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ImageEditDialog, ImageField, ListEditor, TextField};
use crate::context::use_app_context;
use crate::editor::{EditRequest, EditTarget, Field, ListSection};
use crate::store::{store_record_save, AdminState, AdminStateStoreFields};

#[component]
fn AdminSection(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section class="admin-section">
            <h2>{title}</h2>
            <div class="admin-section-body">{children()}</div>
        </section>
    }
}

#[component]
pub fn AdminDashboard(#[prop(into)] on_logout: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(AdminState::new(ctx.store.load()));
    provide_context(store);
    let content_store = StoredValue::new(ctx.store);

    let (editing, set_editing) = signal(None::<EditRequest>);
    let open_image = move |target: EditTarget| {
        match store.working().with_untracked(|doc| EditRequest::open(doc, target)) {
            Ok(request) => set_editing.set(Some(request)),
            Err(err) => {
                log::warn!("cannot edit {:?}: {}", target, err);
                store.edit_error().set(Some(err.to_string()));
            }
        }
    };

    let save = move |_| {
        let result = store
            .working()
            .with_untracked(|doc| content_store.with_value(|content| content.save(doc)));
        store_record_save(&store, result);
    };

    let (activity, set_activity) = signal(Vec::<String>::new());

    let dirty = move || store.working().with(|working| store.saved().with(|saved| working != saved));

    let status_line = move || {
        store.status().with(|status| {
            let class = if status.is_error() { "status-line error" } else { "status-line ok" };
            status.message().map(|message| view! { <p class=class role="status">{message}</p> })
        })
    };

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"لوحة التحكم"</h1>
                <div class="dashboard-actions">
                    <a href="/" target="_blank" rel="noopener noreferrer" class="btn">"عرض الموقع"</a>
                    <button type="button" class="btn danger" on:click=move |_| on_logout.run(())>"تسجيل الخروج"</button>
                </div>
            </header>

            {move || store.edit_error().get().map(|message| view! {
                <p class="edit-error" role="alert">{message}</p>
            })}

            <AdminSection title="القسم الرئيسي">
                <TextField field=Field::HeroTitle />
                <TextField field=Field::HeroSubtitle />
                <ImageField field=Field::HeroBackgroundImage on_edit=open_image />
            </AdminSection>

            <AdminSection title="عن الشركة">
                <TextField field=Field::AboutTitle />
                <TextField field=Field::AboutText multiline=true />
                <ImageField field=Field::AboutImageUrl on_edit=open_image />
            </AdminSection>

            <AdminSection title="المنتجات">
                <TextField field=Field::FurnitureTitle />
                <ListEditor section=ListSection::Furniture on_edit_image=open_image />
            </AdminSection>

            <AdminSection title="المتجر">
                <TextField field=Field::StoreTitle />
                <TextField field=Field::StoreSubtitle />
                <ListEditor section=ListSection::Store on_edit_image=open_image />
            </AdminSection>

            <AdminSection title="شركاء النجاح">
                <TextField field=Field::ClientsTitle />
                <ListEditor section=ListSection::Clients on_edit_image=open_image />
            </AdminSection>

            <AdminSection title="بيانات التواصل">
                <TextField field=Field::ContactPhone />
                <TextField field=Field::ContactEmail />
                <TextField field=Field::ContactAddress />
            </AdminSection>

            <footer class="dashboard-footer">
                <Show when=dirty>
                    <p class="unsaved">"توجد تغييرات غير محفوظة"</p>
                </Show>
                {status_line}
                <button type="button" class="btn primary save-btn" on:click=save>"حفظ جميع التغييرات"</button>
                <details class="activity-log">
                    <summary on:click=move |_| set_activity.set(console_logger::recent())>"سجل النشاط"</summary>
                    <pre dir="ltr">{move || activity.get().join("\n")}</pre>
                </details>
            </footer>

            {move || editing.get().map(|request| view! {
                <ImageEditDialog request=request on_close=move || set_editing.set(None) />
            })}
        </div>
    }
}
