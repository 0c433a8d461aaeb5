//! Site Content Models
//!
//! The editable document rendered by the public site and edited by the
//! admin page. Sections sit behind `Arc` so a new version of the document
//! shares every section it did not change with the previous version.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Identifier of an item inside a list section
pub type ItemId = u64;

/// Anything stored in an ordered, id-keyed list
pub trait Entity: Clone {
    fn id(&self) -> ItemId;
}

/// The whole editable document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub hero: Arc<Hero>,
    #[serde(default)]
    pub about: Arc<About>,
    #[serde(default)]
    pub furniture: Arc<FurnitureSection>,
    #[serde(default)]
    pub store: Arc<StoreSection>,
    #[serde(default)]
    pub clients: Arc<ClientsSection>,
    #[serde(default)]
    pub contact: Arc<Contact>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub background_image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct About {
    pub title: String,
    pub text: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FurnitureItem {
    pub id: ItemId,
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FurnitureSection {
    pub title: String,
    pub items: Vec<FurnitureItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreProduct {
    pub id: ItemId,
    pub name: String,
    pub image_url: String,
    pub price: String,
    pub product_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<StoreProduct>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ItemId,
    pub name: String,
    pub logo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientsSection {
    pub title: String,
    pub items: Vec<Client>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Entity for FurnitureItem {
    fn id(&self) -> ItemId {
        self.id
    }
}

impl Entity for StoreProduct {
    fn id(&self) -> ItemId {
        self.id
    }
}

impl Entity for Client {
    fn id(&self) -> ItemId {
        self.id
    }
}

impl Client {
    /// Website link, if one is set and not blank
    pub fn website(&self) -> Option<&str> {
        self.website_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

impl Contact {
    /// `tel:` link with whitespace removed
    pub fn tel_href(&self) -> String {
        format!("tel:{}", strip(&self.phone, |c| c.is_whitespace()))
    }

    /// WhatsApp chat link; wa.me wants bare digits
    pub fn whatsapp_href(&self) -> String {
        format!("https://wa.me/{}", strip(&self.phone, |c| c.is_whitespace() || c == '+'))
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email.trim())
    }
}

fn strip(value: &str, drop: impl Fn(char) -> bool) -> String {
    value.chars().filter(|c| !drop(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_uses_camel_case_names() {
        let json = serde_json::to_value(SiteContent::default()).unwrap();
        assert!(json["hero"]["backgroundImage"].is_string());
        assert!(json["about"]["imageUrl"].is_string());
        assert!(json["store"]["items"][0]["productUrl"].is_string());
        assert!(json["clients"]["items"][0]["logoUrl"].is_string());
        assert!(json["clients"]["items"][0]["websiteUrl"].is_string());
    }

    #[test]
    fn test_older_document_without_store_section() {
        let mut json = serde_json::to_value(SiteContent::default()).unwrap();
        json.as_object_mut().unwrap().remove("store");
        json["hero"]["title"] = "عنوان".into();

        let doc: SiteContent = serde_json::from_value(json).unwrap();
        assert_eq!(doc.hero.title, "عنوان");
        assert_eq!(doc.store, SiteContent::default().store);
    }

    #[test]
    fn test_client_optional_fields() {
        let client: Client =
            serde_json::from_str(r#"{"id": 7, "name": "Roshn", "logoUrl": "https://x/logo.png"}"#).unwrap();
        assert_eq!(client.description, None);
        assert_eq!(client.website(), None);

        let json = serde_json::to_string(&client).unwrap();
        assert!(!json.contains("websiteUrl"));

        let blank = Client {
            website_url: Some("  ".to_string()),
            ..client
        };
        assert_eq!(blank.website(), None);
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        assert!(serde_json::from_str::<SiteContent>(r#"{"hero": 5}"#).is_err());
        assert!(serde_json::from_str::<SiteContent>(r#"[1, 2, 3]"#).is_err());
        assert!(serde_json::from_str::<SiteContent>(r#"{"furniture": {"items": [{"id": "x"}]}}"#).is_err());
    }

    #[test]
    fn test_contact_links() {
        let contact = Contact {
            phone: "+966 56 793 0000".to_string(),
            email: " info@mansaj.sa ".to_string(),
            address: String::new(),
        };
        assert_eq!(contact.tel_href(), "tel:+966567930000");
        assert_eq!(contact.whatsapp_href(), "https://wa.me/966567930000");
        assert_eq!(contact.mailto_href(), "mailto:info@mansaj.sa");
    }
}
