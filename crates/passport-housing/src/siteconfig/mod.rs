//! The remote site-configuration document (branding, contact,
//! navigation, announcements) and its fail-open provider.

mod provider;

pub use provider::SiteDataProvider;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub name: String,
    pub domain: String,
    pub logo: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub accent_color: Option<String>,
    pub font_family: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    pub default_meta_title: Option<String>,
    pub default_meta_description: Option<String>,
    pub favicon: Option<String>,
}

/// A CMS-authored page. Content is opaque to this crate; rendering
/// belongs to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitePage {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub structured_data: Option<Value>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_desc: Option<String>,
    #[serde(default)]
    pub show_in_nav: bool,
    #[serde(default)]
    pub nav_order: i32,
    #[serde(default)]
    pub template: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementKind {
    Info,
    Warning,
    Alert,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: AnnouncementKind,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
    #[serde(default)]
    pub dismissible: bool,
    #[serde(default)]
    pub priority: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub order: i32,
}

/// One site's configuration for the lifetime of one page render.
/// Fetched (or substituted with [`SiteData::fallback`]) once, then read
/// everywhere; there is no mutation API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteData {
    pub brand: Brand,
    pub contact: Contact,
    #[serde(default)]
    pub social_media: BTreeMap<String, String>,
    pub seo: Seo,
    #[serde(default)]
    pub pages: Vec<SitePage>,
    #[serde(default)]
    pub announcements: Vec<Announcement>,
    #[serde(default)]
    pub navigation: Vec<NavItem>,
}

impl SiteData {
    /// The hardcoded document used whenever the remote source is
    /// unreachable. Callers never see the difference.
    pub fn fallback() -> Self {
        Self {
            brand: Brand {
                name: "Passport Student Housing".to_string(),
                domain: "passportstudenthoming.com".to_string(),
                logo: None,
                primary_color: Some("#1e40af".to_string()),
                secondary_color: Some("#dc2626".to_string()),
                accent_color: Some("#f59e0b".to_string()),
                font_family: None,
            },
            contact: Contact {
                email: "info@passportstudenthoming.com".to_string(),
                phone: Some("(216) 702-7666".to_string()),
                address: Some("Cleveland Heights, OH".to_string()),
            },
            social_media: BTreeMap::from([(
                "youtube".to_string(),
                "https://youtube.com".to_string(),
            )]),
            seo: Seo {
                default_meta_title: Some(
                    "Passport Student Housing | Cleveland Heights & University Circle Rentals"
                        .to_string(),
                ),
                default_meta_description: Some(
                    "Quality student and young professional housing near Case Western Reserve \
                     University, Cleveland Clinic, and University Circle. Affordable apartments \
                     and houses in Cleveland Heights."
                        .to_string(),
                ),
                favicon: None,
            },
            pages: Vec::new(),
            announcements: Vec::new(),
            navigation: vec![
                nav("Home", "/", 0),
                nav("Properties", "/properties", 1),
                nav("Summer Sublets", "/summer-sublets", 2),
                nav("About", "/about", 3),
                nav("Contact", "/contact", 4),
            ],
        }
    }

    pub fn page(&self, slug: &str) -> Option<&SitePage> {
        self.pages.iter().find(|page| page.slug == slug)
    }

    /// Navigation entries by ascending `order`.
    pub fn sorted_navigation(&self) -> Vec<&NavItem> {
        let mut entries: Vec<&NavItem> = self.navigation.iter().collect();
        entries.sort_by_key(|item| item.order);
        entries
    }

    /// Announcements by descending `priority`, highest first.
    pub fn active_announcements(&self) -> Vec<&Announcement> {
        let mut entries: Vec<&Announcement> = self.announcements.iter().collect();
        entries.sort_by_key(|announcement| std::cmp::Reverse(announcement.priority));
        entries
    }
}

fn nav(title: &str, slug: &str, order: i32) -> NavItem {
    NavItem {
        title: title.to_string(),
        slug: slug.to_string(),
        order,
    }
}
