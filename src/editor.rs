//! Content Editing Commands
//!
//! Every admin edit is an `EditCommand` applied to a document version,
//! producing the next version. Only the section an edit touches is copied;
//! the rest is shared with the previous version.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::models::{Client, Entity, FurnitureItem, ItemId, SiteContent, StoreProduct};

/// Scalar fields of the document
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    HeroTitle,
    HeroSubtitle,
    HeroBackgroundImage,
    AboutTitle,
    AboutText,
    AboutImageUrl,
    FurnitureTitle,
    StoreTitle,
    StoreSubtitle,
    ClientsTitle,
    ContactPhone,
    ContactEmail,
    ContactAddress,
}

impl Field {
    /// Image fields must never be blank
    pub fn is_image(self) -> bool {
        matches!(self, Field::HeroBackgroundImage | Field::AboutImageUrl)
    }

    pub fn read(self, doc: &SiteContent) -> &str {
        match self {
            Field::HeroTitle => &doc.hero.title,
            Field::HeroSubtitle => &doc.hero.subtitle,
            Field::HeroBackgroundImage => &doc.hero.background_image,
            Field::AboutTitle => &doc.about.title,
            Field::AboutText => &doc.about.text,
            Field::AboutImageUrl => &doc.about.image_url,
            Field::FurnitureTitle => &doc.furniture.title,
            Field::StoreTitle => &doc.store.title,
            Field::StoreSubtitle => &doc.store.subtitle,
            Field::ClientsTitle => &doc.clients.title,
            Field::ContactPhone => &doc.contact.phone,
            Field::ContactEmail => &doc.contact.email,
            Field::ContactAddress => &doc.contact.address,
        }
    }

    fn write(self, doc: &mut SiteContent, value: String) {
        match self {
            Field::HeroTitle => Arc::make_mut(&mut doc.hero).title = value,
            Field::HeroSubtitle => Arc::make_mut(&mut doc.hero).subtitle = value,
            Field::HeroBackgroundImage => Arc::make_mut(&mut doc.hero).background_image = value,
            Field::AboutTitle => Arc::make_mut(&mut doc.about).title = value,
            Field::AboutText => Arc::make_mut(&mut doc.about).text = value,
            Field::AboutImageUrl => Arc::make_mut(&mut doc.about).image_url = value,
            Field::FurnitureTitle => Arc::make_mut(&mut doc.furniture).title = value,
            Field::StoreTitle => Arc::make_mut(&mut doc.store).title = value,
            Field::StoreSubtitle => Arc::make_mut(&mut doc.store).subtitle = value,
            Field::ClientsTitle => Arc::make_mut(&mut doc.clients).title = value,
            Field::ContactPhone => Arc::make_mut(&mut doc.contact).phone = value,
            Field::ContactEmail => Arc::make_mut(&mut doc.contact).email = value,
            Field::ContactAddress => Arc::make_mut(&mut doc.contact).address = value,
        }
    }
}

/// Sections holding an ordered list of items
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListSection {
    Furniture,
    Store,
    Clients,
}

impl fmt::Display for ListSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListSection::Furniture => write!(f, "furniture"),
            ListSection::Store => write!(f, "store"),
            ListSection::Clients => write!(f, "clients"),
        }
    }
}

impl ListSection {
    /// The item field shown as a thumbnail
    pub fn image_field(self) -> ItemField {
        match self {
            ListSection::Furniture | ListSection::Store => ItemField::ImageUrl,
            ListSection::Clients => ItemField::LogoUrl,
        }
    }

    /// Plain text item fields, in display order
    pub fn text_fields(self) -> &'static [ItemField] {
        match self {
            ListSection::Furniture => &[ItemField::Name],
            ListSection::Store => &[ItemField::Name, ItemField::Price, ItemField::ProductUrl],
            ListSection::Clients => &[ItemField::Name, ItemField::Description, ItemField::WebsiteUrl],
        }
    }
}

/// Fields of list items. Which ones exist depends on the section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemField {
    Name,
    ImageUrl,
    LogoUrl,
    Description,
    WebsiteUrl,
    Price,
    ProductUrl,
}

impl ItemField {
    pub fn is_image(self) -> bool {
        matches!(self, ItemField::ImageUrl | ItemField::LogoUrl)
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemField::Name => "name",
            ItemField::ImageUrl => "imageUrl",
            ItemField::LogoUrl => "logoUrl",
            ItemField::Description => "description",
            ItemField::WebsiteUrl => "websiteUrl",
            ItemField::Price => "price",
            ItemField::ProductUrl => "productUrl",
        };
        write!(f, "{}", name)
    }
}

/// A single edit of the document
#[derive(Clone, Debug, PartialEq)]
pub enum EditCommand {
    SetField {
        field: Field,
        value: String,
    },
    SetItemField {
        section: ListSection,
        id: ItemId,
        field: ItemField,
        value: String,
    },
    AddItem {
        section: ListSection,
    },
    RemoveItem {
        section: ListSection,
        id: ItemId,
    },
    /// Move an item by `offset` positions, clamped to the list bounds
    MoveItem {
        section: ListSection,
        id: ItemId,
        offset: isize,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("no item {id} in {section}")]
    ItemNotFound { section: ListSection, id: ItemId },

    #[error("{section} items have no {field} field")]
    FieldNotApplicable { section: ListSection, field: ItemField },

    #[error("image link cannot be empty")]
    EmptyValue,
}

/// Apply `command` to `doc`, returning the next version.
///
/// `clock_ms` seeds ids of added items; it only needs to be roughly
/// increasing, uniqueness is guaranteed against the existing ids.
pub fn apply(doc: &SiteContent, command: &EditCommand, clock_ms: u64) -> Result<SiteContent, EditError> {
    let mut next = doc.clone();
    match command {
        EditCommand::SetField { field, value } => {
            if field.is_image() && value.trim().is_empty() {
                return Err(EditError::EmptyValue);
            }
            field.write(&mut next, value.clone());
        }
        EditCommand::SetItemField {
            section,
            id,
            field,
            value,
        } => {
            if field.is_image() && value.trim().is_empty() {
                return Err(EditError::EmptyValue);
            }
            items_mut(&mut next, *section).set_field(*section, *id, *field, value.clone())?;
        }
        EditCommand::AddItem { section } => {
            items_mut(&mut next, *section).add(clock_ms);
        }
        EditCommand::RemoveItem { section, id } => {
            items_mut(&mut next, *section).remove(*section, *id)?;
        }
        EditCommand::MoveItem { section, id, offset } => {
            items_mut(&mut next, *section).move_by(*section, *id, *offset)?;
        }
    }
    Ok(next)
}

/// Id for a new item: time-derived, but always above every existing id.
/// When the largest id is `u64::MAX` the smallest unused id is taken instead.
pub fn fresh_id<T: Entity>(items: &[T], clock_ms: u64) -> ItemId {
    let Some(max) = items.iter().map(Entity::id).max() else {
        return clock_ms;
    };
    match max.checked_add(1) {
        Some(above) => above.max(clock_ms),
        None => {
            let taken: HashSet<ItemId> = items.iter().map(Entity::id).collect();
            (0..=ItemId::MAX).find(|id| !taken.contains(id)).unwrap_or(max)
        }
    }
}

/// Item types the editor can create and change
pub trait EditableItem: Entity {
    fn placeholder(id: ItemId) -> Self;
    fn field(&self, field: ItemField) -> Option<String>;
    /// Returns `false` when this item type has no such field
    fn set_field(&mut self, field: ItemField, value: String) -> bool;
}

impl EditableItem for FurnitureItem {
    fn placeholder(id: ItemId) -> Self {
        Self {
            id,
            name: "منتج جديد".to_string(),
            image_url: format!("https://source.unsplash.com/800x800/?furniture&{}", id),
        }
    }

    fn field(&self, field: ItemField) -> Option<String> {
        match field {
            ItemField::Name => Some(self.name.clone()),
            ItemField::ImageUrl => Some(self.image_url.clone()),
            _ => None,
        }
    }

    fn set_field(&mut self, field: ItemField, value: String) -> bool {
        match field {
            ItemField::Name => self.name = value,
            ItemField::ImageUrl => self.image_url = value,
            _ => return false,
        }
        true
    }
}

impl EditableItem for StoreProduct {
    fn placeholder(id: ItemId) -> Self {
        Self {
            id,
            name: "منتج جديد".to_string(),
            image_url: format!("https://picsum.photos/800/800?random={}", id),
            price: String::new(),
            product_url: String::new(),
        }
    }

    fn field(&self, field: ItemField) -> Option<String> {
        match field {
            ItemField::Name => Some(self.name.clone()),
            ItemField::ImageUrl => Some(self.image_url.clone()),
            ItemField::Price => Some(self.price.clone()),
            ItemField::ProductUrl => Some(self.product_url.clone()),
            _ => None,
        }
    }

    fn set_field(&mut self, field: ItemField, value: String) -> bool {
        match field {
            ItemField::Name => self.name = value,
            ItemField::ImageUrl => self.image_url = value,
            ItemField::Price => self.price = value,
            ItemField::ProductUrl => self.product_url = value,
            _ => return false,
        }
        true
    }
}

impl EditableItem for Client {
    fn placeholder(id: ItemId) -> Self {
        Self {
            id,
            name: "عميل جديد".to_string(),
            logo_url: format!("https://picsum.photos/200/100?grayscale&random={}", id),
            description: None,
            website_url: None,
        }
    }

    fn field(&self, field: ItemField) -> Option<String> {
        match field {
            ItemField::Name => Some(self.name.clone()),
            ItemField::LogoUrl => Some(self.logo_url.clone()),
            ItemField::Description => Some(self.description.clone().unwrap_or_default()),
            ItemField::WebsiteUrl => Some(self.website_url.clone().unwrap_or_default()),
            _ => None,
        }
    }

    fn set_field(&mut self, field: ItemField, value: String) -> bool {
        let optional = |value: String| Some(value).filter(|v| !v.is_empty());
        match field {
            ItemField::Name => self.name = value,
            ItemField::LogoUrl => self.logo_url = value,
            ItemField::Description => self.description = optional(value),
            ItemField::WebsiteUrl => self.website_url = optional(value),
            _ => return false,
        }
        true
    }
}

/// Object-safe view of one list section
pub trait ItemList {
    fn ids(&self) -> Vec<ItemId>;
    fn field(&self, section: ListSection, id: ItemId, field: ItemField) -> Result<String, EditError>;
    fn set_field(&mut self, section: ListSection, id: ItemId, field: ItemField, value: String) -> Result<(), EditError>;
    fn add(&mut self, clock_ms: u64) -> ItemId;
    fn remove(&mut self, section: ListSection, id: ItemId) -> Result<(), EditError>;
    fn move_by(&mut self, section: ListSection, id: ItemId, offset: isize) -> Result<(), EditError>;
}

impl<T: EditableItem> ItemList for Vec<T> {
    fn ids(&self) -> Vec<ItemId> {
        self.iter().map(Entity::id).collect()
    }

    fn field(&self, section: ListSection, id: ItemId, field: ItemField) -> Result<String, EditError> {
        let item = self
            .iter()
            .find(|item| item.id() == id)
            .ok_or(EditError::ItemNotFound { section, id })?;
        item.field(field)
            .ok_or(EditError::FieldNotApplicable { section, field })
    }

    fn set_field(&mut self, section: ListSection, id: ItemId, field: ItemField, value: String) -> Result<(), EditError> {
        let item = self
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or(EditError::ItemNotFound { section, id })?;
        if item.set_field(field, value) {
            Ok(())
        } else {
            Err(EditError::FieldNotApplicable { section, field })
        }
    }

    fn add(&mut self, clock_ms: u64) -> ItemId {
        let id = fresh_id(self, clock_ms);
        self.push(T::placeholder(id));
        id
    }

    fn remove(&mut self, section: ListSection, id: ItemId) -> Result<(), EditError> {
        let before = self.len();
        self.retain(|item| item.id() != id);
        if self.len() == before {
            return Err(EditError::ItemNotFound { section, id });
        }
        Ok(())
    }

    fn move_by(&mut self, section: ListSection, id: ItemId, offset: isize) -> Result<(), EditError> {
        let from = self
            .iter()
            .position(|item| item.id() == id)
            .ok_or(EditError::ItemNotFound { section, id })?;
        let last = self.len() as isize - 1;
        let to = (from as isize + offset).clamp(0, last) as usize;
        let item = self.remove(from);
        self.insert(to, item);
        Ok(())
    }
}

/// Read-only access to a list section
pub fn items(doc: &SiteContent, section: ListSection) -> &dyn ItemList {
    match section {
        ListSection::Furniture => &doc.furniture.items,
        ListSection::Store => &doc.store.items,
        ListSection::Clients => &doc.clients.items,
    }
}

/// Writable access; copies the section if a previous version still shares it
fn items_mut(doc: &mut SiteContent, section: ListSection) -> &mut dyn ItemList {
    match section {
        ListSection::Furniture => &mut Arc::make_mut(&mut doc.furniture).items,
        ListSection::Store => &mut Arc::make_mut(&mut doc.store).items,
        ListSection::Clients => &mut Arc::make_mut(&mut doc.clients).items,
    }
}

/// What an edit is aimed at
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditTarget {
    Field(Field),
    Item {
        section: ListSection,
        id: ItemId,
        field: ItemField,
    },
}

impl EditTarget {
    fn is_image(&self) -> bool {
        match self {
            EditTarget::Field(field) => field.is_image(),
            EditTarget::Item { field, .. } => field.is_image(),
        }
    }
}

/// An open edit: the target plus the value it had when the edit started
#[derive(Clone, Debug, PartialEq)]
pub struct EditRequest {
    pub target: EditTarget,
    pub current: String,
}

impl EditRequest {
    pub fn open(doc: &SiteContent, target: EditTarget) -> Result<Self, EditError> {
        let current = match target {
            EditTarget::Field(field) => field.read(doc).to_string(),
            EditTarget::Item { section, id, field } => items(doc, section).field(section, id, field)?,
        };
        Ok(Self { target, current })
    }

    /// Whether committing `value` would change anything
    pub fn is_change(&self, value: &str) -> bool {
        self.current != value
    }

    pub fn command(&self, value: String) -> EditCommand {
        match self.target {
            EditTarget::Field(field) => EditCommand::SetField { field, value },
            EditTarget::Item { section, id, field } => EditCommand::SetItemField {
                section,
                id,
                field,
                value,
            },
        }
    }

    /// Finish the edit against the latest document version
    pub fn commit(&self, doc: &SiteContent, value: String) -> Result<SiteContent, EditError> {
        if self.target.is_image() && value.trim().is_empty() {
            return Err(EditError::EmptyValue);
        }
        apply(doc, &self.command(value), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn doc() -> SiteContent {
        SiteContent::default()
    }

    fn assert_unique(ids: Vec<ItemId>) {
        let set: HashSet<_> = ids.iter().collect();
        assert_eq!(set.len(), ids.len(), "duplicate ids in {:?}", ids);
    }

    #[test]
    fn test_set_field_leaves_previous_version_alone() {
        let before = doc();
        let after = apply(
            &before,
            &EditCommand::SetField {
                field: Field::HeroTitle,
                value: "جديد".to_string(),
            },
            0,
        )
        .unwrap();

        assert_eq!(after.hero.title, "جديد");
        assert_eq!(before.hero.title, "منسج للأثاث");
    }

    #[test]
    fn test_untouched_sections_are_shared() {
        let before = doc();
        let after = apply(&before, &EditCommand::AddItem { section: ListSection::Furniture }, 1).unwrap();

        assert!(!Arc::ptr_eq(&before.furniture, &after.furniture));
        assert!(Arc::ptr_eq(&before.hero, &after.hero));
        assert!(Arc::ptr_eq(&before.store, &after.store));
        assert!(Arc::ptr_eq(&before.clients, &after.clients));
        assert!(Arc::ptr_eq(&before.contact, &after.contact));
    }

    #[test]
    fn test_blank_image_is_rejected() {
        let result = apply(
            &doc(),
            &EditCommand::SetField {
                field: Field::AboutImageUrl,
                value: "   ".to_string(),
            },
            0,
        );
        assert_eq!(result, Err(EditError::EmptyValue));

        // Plain text may be cleared
        let cleared = apply(
            &doc(),
            &EditCommand::SetField {
                field: Field::HeroSubtitle,
                value: String::new(),
            },
            0,
        )
        .unwrap();
        assert_eq!(cleared.hero.subtitle, "");
    }

    #[test]
    fn test_add_with_stale_clock_still_unique() {
        let mut current = doc();
        for _ in 0..5 {
            current = apply(&current, &EditCommand::AddItem { section: ListSection::Clients }, 3).unwrap();
        }
        assert_eq!(current.clients.items.len(), 11);
        assert_unique(items(&current, ListSection::Clients).ids());
        assert_eq!(current.clients.items.last().unwrap().name, "عميل جديد");
    }

    #[test]
    fn test_add_after_max_id_does_not_overflow() {
        let mut current = doc();
        Arc::make_mut(&mut current.furniture).items[0].id = u64::MAX;
        let next = apply(
            &current,
            &EditCommand::AddItem { section: ListSection::Furniture },
            1_700_000_000_000,
        )
        .unwrap();
        assert_eq!(next.furniture.items.len(), current.furniture.items.len() + 1);
        assert_unique(items(&next, ListSection::Furniture).ids());
        assert_eq!(next.furniture.items.last().unwrap().id, 0);
    }

    #[test]
    fn test_add_uses_clock_when_ahead() {
        let next = apply(
            &doc(),
            &EditCommand::AddItem { section: ListSection::Furniture },
            1_700_000_000_000,
        )
        .unwrap();
        assert_eq!(next.furniture.items.last().unwrap().id, 1_700_000_000_000);
    }

    #[test]
    fn test_ids_stay_unique_through_add_remove_sequences() {
        let mut current = doc();
        let mut clock = 0;
        for round in 0..20 {
            clock += 1;
            current = apply(&current, &EditCommand::AddItem { section: ListSection::Store }, clock).unwrap();
            if round % 3 == 0 {
                let id = current.store.items[round % current.store.items.len()].id;
                current = apply(
                    &current,
                    &EditCommand::RemoveItem {
                        section: ListSection::Store,
                        id,
                    },
                    clock,
                )
                .unwrap();
            }
            assert_unique(items(&current, ListSection::Store).ids());
        }
    }

    #[test]
    fn test_removed_id_is_not_reused() {
        let added = apply(&doc(), &EditCommand::AddItem { section: ListSection::Furniture }, 0).unwrap();
        let new_id = added.furniture.items.last().unwrap().id;
        assert_eq!(new_id, 5);

        let removed = apply(
            &added,
            &EditCommand::RemoveItem {
                section: ListSection::Furniture,
                id: 2,
            },
            0,
        )
        .unwrap();
        let again = apply(&removed, &EditCommand::AddItem { section: ListSection::Furniture }, 0).unwrap();
        assert_eq!(again.furniture.items.last().unwrap().id, 6);
    }

    #[test]
    fn test_remove_missing_item() {
        let result = apply(
            &doc(),
            &EditCommand::RemoveItem {
                section: ListSection::Clients,
                id: 99,
            },
            0,
        );
        assert_eq!(
            result,
            Err(EditError::ItemNotFound {
                section: ListSection::Clients,
                id: 99
            })
        );
    }

    #[test]
    fn test_item_field_by_section() {
        let priced = apply(
            &doc(),
            &EditCommand::SetItemField {
                section: ListSection::Store,
                id: 3,
                field: ItemField::Price,
                value: "999 ر.س".to_string(),
            },
            0,
        )
        .unwrap();
        assert_eq!(priced.store.items[2].price, "999 ر.س");

        let wrong = apply(
            &doc(),
            &EditCommand::SetItemField {
                section: ListSection::Furniture,
                id: 1,
                field: ItemField::Price,
                value: "1".to_string(),
            },
            0,
        );
        assert_eq!(
            wrong,
            Err(EditError::FieldNotApplicable {
                section: ListSection::Furniture,
                field: ItemField::Price
            })
        );
    }

    #[test]
    fn test_client_optional_fields_clear_to_none() {
        let next = apply(
            &doc(),
            &EditCommand::SetItemField {
                section: ListSection::Clients,
                id: 1,
                field: ItemField::WebsiteUrl,
                value: String::new(),
            },
            0,
        )
        .unwrap();
        assert_eq!(next.clients.items[0].website_url, None);
    }

    #[test]
    fn test_client_optional_fields_keep_typed_whitespace() {
        let set = |current: &SiteContent, value: &str| {
            apply(
                current,
                &EditCommand::SetItemField {
                    section: ListSection::Clients,
                    id: 1,
                    field: ItemField::Description,
                    value: value.to_string(),
                },
                0,
            )
            .unwrap()
        };
        let cleared = set(&doc(), "");
        let spaced = set(&cleared, " ");
        assert_eq!(spaced.clients.items[0].description.as_deref(), Some(" "));
        let typed = set(&spaced, " خشب");
        assert_eq!(
            items(&typed, ListSection::Clients).field(ListSection::Clients, 1, ItemField::Description).unwrap(),
            " خشب"
        );
    }

    #[test]
    fn test_move_item_clamps() {
        let moved = apply(
            &doc(),
            &EditCommand::MoveItem {
                section: ListSection::Furniture,
                id: 1,
                offset: 1,
            },
            0,
        )
        .unwrap();
        assert_eq!(items(&moved, ListSection::Furniture).ids(), vec![2, 1, 3, 4]);

        let to_front = apply(
            &moved,
            &EditCommand::MoveItem {
                section: ListSection::Furniture,
                id: 4,
                offset: -10,
            },
            0,
        )
        .unwrap();
        assert_eq!(items(&to_front, ListSection::Furniture).ids(), vec![4, 2, 1, 3]);
    }

    #[test]
    fn test_request_then_commit() {
        let base = doc();
        let target = EditTarget::Item {
            section: ListSection::Furniture,
            id: 2,
            field: ItemField::ImageUrl,
        };
        let request = EditRequest::open(&base, target).unwrap();
        assert_eq!(request.current, base.furniture.items[1].image_url);
        assert!(!request.is_change(&request.current));

        let next = request.commit(&base, "https://img.example/new.jpg".to_string()).unwrap();
        assert_eq!(next.furniture.items[1].image_url, "https://img.example/new.jpg");

        assert_eq!(request.commit(&base, "".to_string()), Err(EditError::EmptyValue));
    }

    #[test]
    fn test_request_for_missing_item() {
        let target = EditTarget::Item {
            section: ListSection::Store,
            id: 404,
            field: ItemField::Name,
        };
        assert!(matches!(
            EditRequest::open(&doc(), target),
            Err(EditError::ItemNotFound { id: 404, .. })
        ));
    }

    #[test]
    fn test_section_fields_exist_on_new_items() {
        for section in [ListSection::Furniture, ListSection::Store, ListSection::Clients] {
            let doc = apply(&doc(), &EditCommand::AddItem { section }, 5_000).unwrap();
            let list = items(&doc, section);
            let id = *list.ids().last().unwrap();

            assert!(!list.field(section, id, section.image_field()).unwrap().is_empty());
            for field in section.text_fields() {
                assert!(list.field(section, id, *field).is_ok(), "{} has no {}", section, field);
                assert!(!field.is_image());
            }
        }
    }
}
