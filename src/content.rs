//! Default Site Content
//!
//! The document a fresh browser starts with, and the value any missing
//! or unreadable section falls back to.

use crate::models::{
    About, Client, ClientsSection, Contact, FurnitureItem, FurnitureSection, Hero, ItemId, StoreProduct,
    StoreSection,
};

impl Default for Hero {
    fn default() -> Self {
        Self {
            title: "منسج للأثاث".to_string(),
            subtitle: "نصنع من الخشب حكايات، ومن الأثاث بيوتاً تنبض بالحياة".to_string(),
            background_image: unsplash("photo-1618220179428-22790b461013", 1920),
        }
    }
}

impl Default for About {
    fn default() -> Self {
        Self {
            title: "فن الصناعة، برؤية عصرية".to_string(),
            text: "في منسج، نؤمن بأن الأثاث هو روح المكان. منذ تأسيسنا في قلب المملكة العربية السعودية، ونحن ملتزمون بتقديم تصاميم فريدة تجمع بين الأصالة والعصرية، مستخدمين أجود أنواع الأخشاب والمواد لنصنع قطعاً فنية تدوم لأجيال.".to_string(),
            image_url: unsplash("photo-1616046229478-9901c5536a45", 800),
        }
    }
}

impl Default for FurnitureSection {
    fn default() -> Self {
        let items = [
            (1, "أثاث منزلي", "photo-1555041469-a586c61ea9bc"),
            (2, "أثاث مكتبي", "photo-1522071820081-009f0129c71c"),
            (3, "تصميم مخصص", "photo-1572377323861-c46372d892a0"),
            (4, "مشاريع فندقية", "photo-1566073771259-6a8506099945"),
        ];
        Self {
            title: "إبداعاتنا".to_string(),
            items: items
                .into_iter()
                .map(|(id, name, photo)| FurnitureItem {
                    id,
                    name: name.to_string(),
                    image_url: unsplash(photo, 800),
                })
                .collect(),
        }
    }
}

impl Default for StoreSection {
    fn default() -> Self {
        let items: [(ItemId, &str, &str, &str); 12] = [
            (1, "كرسي استرخاء 'هدوء'", "photo-1567538096630-e0c55bd6374c", "1,850 ر.س"),
            (2, "طاولة قهوة 'تلاقي' الرخامية", "photo-1613203425412-894ac0c0836e", "2,300 ر.س"),
            (3, "مصباح أرضي 'شعاع' المعدني", "photo-1594213280092-6072385a7b6a", "950 ر.س"),
            (4, "أريكة 'واحة' من الكتان الفاخر", "photo-1558211583-d26f610c1a01", "6,200 ر.س"),
            (5, "مكتب 'إلهام' من خشب الجوز", "photo-1449247709967-d4461a6a6103", "3,100 ر.س"),
            (6, "خزانة كتب 'أرفف الحكمة'", "photo-1594224457494-0125557884bf", "2,750 ر.س"),
            (7, "سرير 'أحلام' المنجد", "photo-1505693416388-ac5ce068fe85", "5,400 ر.س"),
            (8, "طاولة طعام 'ملتقى العائلة'", "photo-1551215717-8bc7995a9742", "7,800 ر.س"),
            (9, "سجادة 'الكثبان' الصوفية", "photo-1617462205522-8257d383b334", "1,500 ر.س"),
            (10, "مرآة 'أصداء' بإطار نحاسي", "photo-1616627561859-48b434316135", "650 ر.س"),
            (11, "وحدة تلفاز 'سينما' العصرية", "photo-1593359677879-a4bb92f829d1", "2,950 ر.س"),
            (12, "مقعد 'همسة' بجانب السرير", "photo-1543464264-8c0e4a74212a", "1,100 ر.س"),
        ];
        Self {
            title: "من متجرنا".to_string(),
            subtitle: "منتجات مختارة بعناية يمكنك شراؤها الآن".to_string(),
            items: items
                .into_iter()
                .map(|(id, name, photo, price)| StoreProduct {
                    id,
                    name: name.to_string(),
                    image_url: unsplash(photo, 800),
                    price: price.to_string(),
                    product_url: format!("https://example.com/store/product{}", id),
                })
                .collect(),
        }
    }
}

impl Default for ClientsSection {
    fn default() -> Self {
        let items: [(ItemId, &str, &str, &str); 6] = [
            (
                1,
                "NEOM",
                "مشروع مدينة المستقبل الطموح في المملكة العربية السعودية، تشرفنا بتوريد أثاث لمكاتبهم الإدارية ومرافق الضيافة.",
                "https://www.neom.com/",
            ),
            (
                2,
                "Red Sea Global",
                "أحد أكثر المشاريع السياحية المتجددة طموحًا في العالم، ساهمنا في تأثيث الفلل الفاخرة والمناطق المشتركة.",
                "https://www.redseaglobal.com/",
            ),
            (
                3,
                "Aramco",
                "شركة الطاقة والكيميائيات الرائدة عالميًا، قمنا بتنفيذ مشاريع تأثيث مكتبي مخصصة تلبي أعلى معايير الجودة.",
                "https://www.aramco.com/",
            ),
            (
                4,
                "Roshn",
                "مطور عقاري وطني يهدف لرفع جودة الحياة، ونفخر بكوننا أحد الموردين المعتمدين للأثاث في مشاريعهم السكنية.",
                "https://www.roshn.sa/",
            ),
            (
                5,
                "Diriyah Gate",
                "مشروع تطوير بوابة الدرعية التاريخية، شاركنا في تصميم وتصنيع قطع أثاث تراثية بلمسة عصرية للمناطق الثقافية.",
                "https://www.diriyah.sa/",
            ),
            (
                6,
                "مجموعة الكفاح القابضة",
                "نفخر بشراكتنا مع مجموعة الكفاح، إحدى أبرز المجموعات الاستثمارية في المملكة، حيث قمنا بتأثيث مقرهم الرئيسي الجديد بتصاميم مكتبية عصرية تعكس هويتهم الرائدة.",
                "https://www.kifah.com/",
            ),
        ];
        Self {
            title: "شركاء النجاح".to_string(),
            items: items
                .into_iter()
                .map(|(id, name, description, website)| Client {
                    id,
                    name: name.to_string(),
                    logo_url: format!("https://picsum.photos/200/200?grayscale&random={}", 20 + id),
                    description: Some(description.to_string()),
                    website_url: Some(website.to_string()),
                })
                .collect(),
        }
    }
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            phone: "+966567930000".to_string(),
            email: "info@mansaj.sa".to_string(),
            address: "الأحساء، المملكة العربية السعودية".to_string(),
        }
    }
}

fn unsplash(photo: &str, width: u32) -> String {
    format!("https://images.unsplash.com/{}?q=80&w={}&auto=format&fit=crop", photo, width)
}

#[cfg(test)]
mod tests {
    use crate::models::{Entity, SiteContent};
    use std::collections::HashSet;

    #[test]
    fn test_default_lists_are_populated() {
        let doc = SiteContent::default();
        assert_eq!(doc.furniture.items.len(), 4);
        assert_eq!(doc.store.items.len(), 12);
        assert_eq!(doc.clients.items.len(), 6);
        assert_eq!(doc.contact.phone, "+966567930000");
    }

    #[test]
    fn test_default_ids_are_unique() {
        let doc = SiteContent::default();
        let unique = |ids: Vec<u64>| ids.iter().collect::<HashSet<_>>().len() == ids.len();
        assert!(unique(doc.furniture.items.iter().map(Entity::id).collect()));
        assert!(unique(doc.store.items.iter().map(Entity::id).collect()));
        assert!(unique(doc.clients.items.iter().map(Entity::id).collect()));
    }
}
