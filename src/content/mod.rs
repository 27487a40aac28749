//! Read-only page copy. Everything here is built at compile time and lives for
//! the whole page.

pub mod navigation;
pub mod problems;
pub mod products;
pub mod risks;
pub mod stakeholders;
pub mod technology;

use log::warn;

use crate::error::{Result, SiteError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub fn non_empty<'a, T>(items: &'a [T], name: &'static str) -> Result<&'a [T]> {
    if items.is_empty() {
        Err(SiteError::EmptyContent(name))
    } else {
        Ok(items)
    }
}

/// Like [`non_empty`] but logs and yields `None`, for sections that simply
/// skip rendering.
pub fn renderable<'a, T>(items: &'a [T], name: &'static str) -> Option<&'a [T]> {
    match non_empty(items, name) {
        Ok(items) => Some(items),
        Err(e) => {
            warn!("Skipping section: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slices_are_rejected() {
        let empty: [ContentItem; 0] = [];
        assert!(matches!(
            non_empty(&empty, "products"),
            Err(SiteError::EmptyContent("products"))
        ));
        assert!(renderable(&empty, "products").is_none());
    }

    #[test]
    fn shipped_content_is_complete() {
        assert!(non_empty(products::PRODUCTS, "products").is_ok());
        assert!(non_empty(risks::RISKS, "risks").is_ok());
        assert!(non_empty(stakeholders::STAKEHOLDERS, "stakeholders").is_ok());
        assert!(non_empty(problems::PROBLEM_CARDS, "problems").is_ok());
        assert!(non_empty(technology::METRICS, "metrics").is_ok());

        for product in products::PRODUCTS {
            assert!(!product.item.features.is_empty(), "{} has no features", product.item.id);
        }
        for stakeholder in stakeholders::STAKEHOLDERS {
            assert!(!stakeholder.item.features.is_empty());
        }
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<&str> = products::PRODUCTS.iter().map(|p| p.item.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products::PRODUCTS.len());
    }
}
