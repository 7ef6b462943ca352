use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pre-submit checks the form itself enforces before anything leaves the
/// browser-side draft. Messages are the toasts shown to the visitor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Pilih minimal satu jenis website")]
    NoWebsiteType,

    #[error("Pilih status logo (sudah ada atau minta dibuatkan)")]
    MissingLogoStatus,

    #[error("Pilih status foto produk/layanan")]
    MissingPhotoStatus,

    #[error("Pilih ekstensi domain yang diinginkan")]
    MissingDomain,

    #[error("Pilih status hosting")]
    MissingHostingStatus,
}

/// In-memory draft of an order: everything the visitor types, minus the
/// fields the server assigns (id, status, timestamps).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderDraft {
    pub full_name: String,
    pub business_name: String,
    pub whatsapp: String,
    pub email: String,
    pub website_types: Vec<String>,
    pub page_count: String,
    pub logo_status: String,
    pub photo_status: String,
    pub domain: String,
    pub hosting_status: String,
    pub main_color: String,
    pub reference_website: String,
    pub special_notes: String,
}

impl OrderDraft {
    /// Checkbox semantics: add the type when checked, drop it when unchecked.
    pub fn set_website_type(&mut self, website_type: &str, checked: bool) {
        if checked {
            if !self.website_types.iter().any(|t| t == website_type) {
                self.website_types.push(website_type.to_string());
            }
        } else {
            self.website_types.retain(|t| t != website_type);
        }
    }

    /// The form's own gate, applied in the order the visitor sees the fields.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.website_types.is_empty() {
            return Err(FormError::NoWebsiteType);
        }
        if self.logo_status.is_empty() {
            return Err(FormError::MissingLogoStatus);
        }
        if self.photo_status.is_empty() {
            return Err(FormError::MissingPhotoStatus);
        }
        if self.domain.is_empty() {
            return Err(FormError::MissingDomain);
        }
        if self.hosting_status.is_empty() {
            return Err(FormError::MissingHostingStatus);
        }
        Ok(())
    }

    /// Back to the empty initial values, for the "new order" button on the
    /// submitted screen.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> OrderDraft {
        OrderDraft {
            full_name: "Ana".into(),
            business_name: "Toko Ana".into(),
            whatsapp: "08123456789".into(),
            email: "ana@toko.id".into(),
            website_types: vec!["company-profile".into()],
            page_count: "3".into(),
            logo_status: "ada".into(),
            photo_status: "buat".into(),
            domain: "com".into(),
            hosting_status: "buat".into(),
            ..Default::default()
        }
    }

    #[test]
    fn toggle_adds_once_and_removes() {
        let mut draft = OrderDraft::default();
        draft.set_website_type("blog", true);
        draft.set_website_type("blog", true);
        assert_eq!(draft.website_types, vec!["blog".to_string()]);

        draft.set_website_type("blog", false);
        assert!(draft.website_types.is_empty());
    }

    #[test]
    fn validation_follows_form_order() {
        let mut draft = OrderDraft::default();
        assert_eq!(draft.validate(), Err(FormError::NoWebsiteType));

        draft.set_website_type("blog", true);
        assert_eq!(draft.validate(), Err(FormError::MissingLogoStatus));

        draft.logo_status = "ada".into();
        assert_eq!(draft.validate(), Err(FormError::MissingPhotoStatus));

        draft.photo_status = "ada".into();
        assert_eq!(draft.validate(), Err(FormError::MissingDomain));

        draft.domain = "my.id".into();
        assert_eq!(draft.validate(), Err(FormError::MissingHostingStatus));

        draft.hosting_status = "buat".into();
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn reset_restores_initial_values() {
        let mut draft = filled_draft();
        draft.reset();
        assert_eq!(draft, OrderDraft::default());
    }

    #[test]
    fn draft_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(filled_draft()).unwrap();
        assert!(value.get("fullName").is_some());
        assert!(value.get("websiteTypes").is_some());
        assert!(value.get("pageCount").is_some());
    }
}
