use super::domain::Property;
use super::listings::standard_listings;

/// Canonical URL-friendly form of a neighborhood name: lowercase with
/// spaces turned into hyphens. Both the filter-option generator and the
/// filter predicate go through this one function, so a slug built on one
/// side always matches on the other.
pub fn neighborhood_slug(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "-")
}

/// Read-only property portfolio. Every query preserves catalog order
/// and borrows from the catalog rather than copying it.
#[derive(Debug, Clone)]
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    /// The live portfolio.
    pub fn standard() -> Self {
        Self::new(standard_listings())
    }

    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Look up a property by its stable id. Unknown ids are a valid
    /// outcome (they feed the not-found page), not an error.
    pub fn property_by_id(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.id == id)
    }

    pub fn featured(&self) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|property| property.featured)
            .collect()
    }

    pub fn summer_sublets(&self) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|property| property.summer_sublet)
            .collect()
    }

    /// Exact string equality on the stored neighborhood name. The
    /// slug-normalizing variant lives in [`ListingFilter`].
    pub fn by_neighborhood(&self, neighborhood: &str) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|property| property.neighborhood == neighborhood)
            .collect()
    }

    pub fn by_bedrooms(&self, bedrooms: u32) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|property| property.has_bedroom_count(bedrooms))
            .collect()
    }

    pub fn total_bedrooms(&self) -> u32 {
        self.properties
            .iter()
            .map(Property::total_bedrooms)
            .sum()
    }

    pub fn summer_sublet_bedrooms(&self) -> u32 {
        self.summer_sublets()
            .iter()
            .map(|property| property.total_bedrooms())
            .sum()
    }

    /// Distinct neighborhood names, sorted, for the filter dropdown.
    pub fn neighborhoods(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .properties
            .iter()
            .map(|property| property.neighborhood.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Distinct unit bedroom counts, ascending, for the filter dropdown.
    pub fn bedroom_options(&self) -> Vec<u32> {
        let mut counts: Vec<u32> = self
            .properties
            .iter()
            .flat_map(|property| property.units.iter().map(|unit| unit.bedrooms))
            .collect();
        counts.sort_unstable();
        counts.dedup();
        counts
    }

    pub fn filter(&self, filter: &ListingFilter) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|property| filter.matches(property))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Listing-page filter. Both criteria combine with AND; an absent (or
/// empty) criterion matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    /// Neighborhood slug as it appears in the listings URL, e.g.
    /// `university-circle`. Matched against the stored name through
    /// [`neighborhood_slug`], so casing and hyphen/space differences
    /// are irrelevant.
    pub neighborhood: Option<String>,
    /// Matches properties with at least one unit of exactly this size.
    pub bedrooms: Option<u32>,
}

impl ListingFilter {
    pub fn is_empty(&self) -> bool {
        self.neighborhood.as_deref().map_or(true, str::is_empty) && self.bedrooms.is_none()
    }

    pub fn matches(&self, property: &Property) -> bool {
        if let Some(value) = self.neighborhood.as_deref() {
            if !value.is_empty() && neighborhood_slug(&property.neighborhood) != neighborhood_slug(value)
            {
                return false;
            }
        }

        if let Some(bedrooms) = self.bedrooms {
            if !property.has_bedroom_count(bedrooms) {
                return false;
            }
        }

        true
    }
}
