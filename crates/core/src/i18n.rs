//! Translation lookup.
//!
//! A [`TranslationCatalog`] maps (language, key) to a display string. A
//! missing entry is not an error: `translate` returns the key itself, so
//! an untranslated key stays visible and debuggable instead of rendering
//! as nothing.
//!
//! Two catalogs exist in the console - general UI strings and
//! admin-surface strings - with identical lookup semantics. They are
//! separate instances on purpose: a key present in one is not visible
//! through the other.

use std::collections::HashMap;

use crate::types::Language;

/// A (language, key) → display-string table.
#[derive(Debug, Clone, Default)]
pub struct TranslationCatalog {
    strings: HashMap<Language, HashMap<String, String>>,
}

impl TranslationCatalog {
    /// Creates an empty catalog. Every lookup falls back to the key.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a translation, replacing any previous value for the key.
    pub fn insert(
        &mut self,
        language: Language,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.strings
            .entry(language)
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Looks up `key` for `language`, falling back to the key itself.
    ///
    /// Never panics, never returns an empty placeholder.
    #[must_use]
    pub fn translate<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
        self.strings
            .get(&language)
            .and_then(|table| table.get(key))
            .map_or(key, String::as_str)
    }

    /// True iff the key has an entry for the language.
    #[must_use]
    pub fn contains(&self, language: Language, key: &str) -> bool {
        self.strings
            .get(&language)
            .is_some_and(|table| table.contains_key(key))
    }

    /// The built-in general UI strings.
    #[must_use]
    pub fn ui_defaults() -> Self {
        let mut catalog = Self::new();
        for (key, en, hi, ar) in UI_STRINGS {
            catalog.insert(Language::En, *key, *en);
            catalog.insert(Language::Hi, *key, *hi);
            catalog.insert(Language::Ar, *key, *ar);
        }
        catalog
    }

    /// The built-in admin-surface strings.
    #[must_use]
    pub fn admin_defaults() -> Self {
        let mut catalog = Self::new();
        for (key, en, hi, ar) in ADMIN_STRINGS {
            catalog.insert(Language::En, *key, *en);
            catalog.insert(Language::Hi, *key, *hi);
            catalog.insert(Language::Ar, *key, *ar);
        }
        catalog
    }
}

/// General UI strings: (key, en, hi, ar).
const UI_STRINGS: &[(&str, &str, &str, &str)] = &[
    ("ui.language", "Language", "भाषा", "اللغة"),
    ("ui.dashboard", "Dashboard", "डैशबोर्ड", "لوحة التحكم"),
    ("ui.users", "Users", "उपयोगकर्ता", "المستخدمون"),
    ("ui.reports", "Reports", "रिपोर्ट", "التقارير"),
    ("ui.settings", "Settings", "सेटिंग्स", "الإعدادات"),
    ("ui.welcome", "Welcome", "स्वागत है", "مرحبا"),
    ("ui.region", "Region", "क्षेत्र", "المنطقة"),
];

/// Admin-surface strings: (key, en, hi, ar).
const ADMIN_STRINGS: &[(&str, &str, &str, &str)] = &[
    ("admin.identity", "Admin identity", "प्रशासक पहचान", "هوية المسؤول"),
    ("admin.role", "Role", "भूमिका", "الدور"),
    ("admin.plan", "Plan", "योजना", "الخطة"),
    ("admin.features", "Unlocked features", "उपलब्ध सुविधाएँ", "الميزات المتاحة"),
    ("admin.switch", "Switch identity", "पहचान बदलें", "تبديل الهوية"),
    ("admin.access.editable", "Can edit", "संपादन कर सकते हैं", "يمكن التحرير"),
    ("admin.access.read_only", "Read only", "केवल पढ़ने के लिए", "للقراءة فقط"),
];
