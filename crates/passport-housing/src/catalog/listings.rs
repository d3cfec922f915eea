use super::domain::{Property, PropertyType, Unit};

fn unit(id: &str, bedrooms: u32, floor: Option<&str>) -> Unit {
    Unit {
        id: id.to_string(),
        bedrooms,
        bathrooms: None,
        floor: floor.map(str::to_string),
        rent: None,
        available: true,
        available_date: None,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// The company's current portfolio, in display order. Order matters:
/// derived subsequences (featured, summer sublets, filters) preserve it.
pub(super) fn standard_listings() -> Vec<Property> {
    vec![
        Property {
            id: "lee-road-2419".to_string(),
            address: "2419 Lee Road".to_string(),
            city: "Cleveland Heights".to_string(),
            state: "OH".to_string(),
            zip: "44118".to_string(),
            neighborhood: "Cleveland Heights".to_string(),
            property_type: PropertyType::MultiFamily,
            units: vec![
                unit("lee-2419-1", 2, Some("1st Floor")),
                unit("lee-2419-2", 2, Some("2nd Floor")),
                unit("lee-2419-3", 1, Some("3rd Floor")),
            ],
            features: strings(&[
                "Hardwood Floors",
                "Updated Kitchen",
                "On-Site Laundry",
                "Off-Street Parking",
            ]),
            nearby_schools: strings(&[
                "Case Western Reserve University",
                "Cleveland Institute of Art",
            ]),
            distance_to_campus: None,
            images: Vec::new(),
            featured: true,
            summer_sublet: false,
        },
        Property {
            id: "mayfield-road-2584".to_string(),
            address: "2584 Mayfield Road".to_string(),
            city: "Cleveland Heights".to_string(),
            state: "OH".to_string(),
            zip: "44118".to_string(),
            neighborhood: "Cleveland Heights".to_string(),
            property_type: PropertyType::MultiFamily,
            units: vec![
                unit("mayfield-2584-1", 2, Some("1st Floor")),
                unit("mayfield-2584-2", 2, Some("2nd Floor")),
                unit("mayfield-2584-3", 1, Some("3rd Floor")),
            ],
            features: strings(&["Hardwood Floors", "Updated Kitchen", "On-Site Laundry"]),
            nearby_schools: strings(&["Case Western Reserve University"]),
            distance_to_campus: None,
            images: Vec::new(),
            featured: false,
            summer_sublet: false,
        },
        Property {
            id: "stillman-road-2109".to_string(),
            address: "2109 Stillman Road".to_string(),
            city: "Cleveland Heights".to_string(),
            state: "OH".to_string(),
            zip: "44118".to_string(),
            neighborhood: "Cleveland Heights".to_string(),
            property_type: PropertyType::MultiFamily,
            units: vec![
                unit("stillman-2109-1", 2, Some("1st Floor")),
                unit("stillman-2109-2", 2, Some("2nd Floor")),
                unit("stillman-2109-3", 1, Some("3rd Floor")),
            ],
            features: strings(&["Hardwood Floors", "Updated Kitchen", "On-Site Laundry"]),
            nearby_schools: strings(&["Case Western Reserve University"]),
            distance_to_campus: None,
            images: Vec::new(),
            featured: false,
            summer_sublet: false,
        },
        Property {
            id: "rexwood-road-2189".to_string(),
            address: "2189 Rexwood Road".to_string(),
            city: "Cleveland Heights".to_string(),
            state: "OH".to_string(),
            zip: "44118".to_string(),
            neighborhood: "Cleveland Heights".to_string(),
            property_type: PropertyType::MultiFamily,
            units: vec![
                unit("rexwood-2189-1", 2, Some("1st Floor")),
                unit("rexwood-2189-2", 2, Some("2nd Floor")),
                unit("rexwood-2189-3", 1, Some("3rd Floor")),
            ],
            features: strings(&["Hardwood Floors", "Updated Kitchen", "On-Site Laundry"]),
            nearby_schools: strings(&["Case Western Reserve University"]),
            distance_to_campus: None,
            images: Vec::new(),
            featured: false,
            summer_sublet: false,
        },
        Property {
            id: "e-108th-1520".to_string(),
            address: "1520 E. 108th Street".to_string(),
            city: "Cleveland".to_string(),
            state: "OH".to_string(),
            zip: "44106".to_string(),
            neighborhood: "University Circle".to_string(),
            property_type: PropertyType::SingleFamily,
            units: vec![unit("e108-1520-1", 7, None)],
            features: strings(&[
                "Large Common Areas",
                "Multiple Bathrooms",
                "Walking Distance to CWRU",
                "Off-Street Parking",
            ]),
            nearby_schools: strings(&["Case Western Reserve University", "Cleveland Clinic"]),
            distance_to_campus: Some("0.3 miles".to_string()),
            images: Vec::new(),
            featured: true,
            summer_sublet: true,
        },
        Property {
            id: "e-107th-1522".to_string(),
            address: "1522 E. 107th Street".to_string(),
            city: "Cleveland".to_string(),
            state: "OH".to_string(),
            zip: "44106".to_string(),
            neighborhood: "University Circle".to_string(),
            property_type: PropertyType::SingleFamily,
            units: vec![unit("e107-1522-1", 7, None)],
            features: strings(&[
                "Large Common Areas",
                "Multiple Bathrooms",
                "Walking Distance to CWRU",
                "Off-Street Parking",
            ]),
            nearby_schools: strings(&["Case Western Reserve University", "Cleveland Clinic"]),
            distance_to_campus: Some("0.3 miles".to_string()),
            images: Vec::new(),
            featured: false,
            summer_sublet: true,
        },
        Property {
            id: "e-106th-1512".to_string(),
            address: "1512 E. 106th Street".to_string(),
            city: "Cleveland".to_string(),
            state: "OH".to_string(),
            zip: "44106".to_string(),
            neighborhood: "University Circle".to_string(),
            property_type: PropertyType::SingleFamily,
            units: vec![unit("e106-1512-1", 8, None)],
            features: strings(&[
                "Large Common Areas",
                "Multiple Bathrooms",
                "Walking Distance to CWRU",
                "Off-Street Parking",
            ]),
            nearby_schools: strings(&["Case Western Reserve University", "Cleveland Clinic"]),
            distance_to_campus: Some("0.3 miles".to_string()),
            images: Vec::new(),
            featured: false,
            summer_sublet: true,
        },
        Property {
            id: "bellfield-road-2332".to_string(),
            address: "2332 Bellfield Road".to_string(),
            city: "Cleveland Heights".to_string(),
            state: "OH".to_string(),
            zip: "44106".to_string(),
            neighborhood: "Cleveland Heights".to_string(),
            property_type: PropertyType::MultiFamily,
            units: vec![
                unit("bellfield-2332-1", 4, Some("Side A")),
                unit("bellfield-2332-2", 4, Some("Side B")),
            ],
            features: strings(&["Spacious Units", "Updated Kitchen", "Off-Street Parking"]),
            nearby_schools: strings(&["Case Western Reserve University"]),
            distance_to_campus: None,
            images: Vec::new(),
            featured: true,
            summer_sublet: false,
        },
        Property {
            id: "ashurst-road-2403".to_string(),
            address: "2403 Ashurst Road".to_string(),
            city: "University Heights".to_string(),
            state: "OH".to_string(),
            zip: "44118".to_string(),
            neighborhood: "University Heights".to_string(),
            property_type: PropertyType::MultiFamily,
            units: vec![
                unit("ashurst-2403-1", 2, Some("Unit 1")),
                unit("ashurst-2403-2", 2, Some("Unit 2")),
            ],
            features: strings(&["Quiet Neighborhood", "Updated Kitchen", "Off-Street Parking"]),
            nearby_schools: strings(&[
                "Case Western Reserve University",
                "John Carroll University",
            ]),
            distance_to_campus: None,
            images: Vec::new(),
            featured: false,
            summer_sublet: false,
        },
        Property {
            id: "scarborough-3237".to_string(),
            address: "3237-39 E. Scarborough Road".to_string(),
            city: "Cleveland Heights".to_string(),
            state: "OH".to_string(),
            zip: "44118".to_string(),
            neighborhood: "Cleveland Heights".to_string(),
            property_type: PropertyType::MultiFamily,
            units: vec![
                unit("scarborough-3237-1", 4, Some("Unit 1")),
                unit("scarborough-3237-2", 4, Some("Unit 2")),
            ],
            features: strings(&["Large Units", "Updated Kitchen", "Off-Street Parking"]),
            nearby_schools: strings(&["Case Western Reserve University"]),
            distance_to_campus: None,
            images: Vec::new(),
            featured: false,
            summer_sublet: false,
        },
        Property {
            id: "grandview-2256".to_string(),
            address: "2256-58 Grandview Avenue".to_string(),
            city: "Cleveland Heights".to_string(),
            state: "OH".to_string(),
            zip: "44106".to_string(),
            neighborhood: "Cleveland Heights".to_string(),
            property_type: PropertyType::MultiFamily,
            units: vec![
                unit("grandview-2256-1", 5, Some("Unit 1")),
                unit("grandview-2256-2", 5, Some("Unit 2")),
            ],
            features: strings(&[
                "Extra Large Units",
                "Updated Kitchen",
                "Off-Street Parking",
                "Great for Groups",
            ]),
            nearby_schools: strings(&["Case Western Reserve University"]),
            distance_to_campus: None,
            images: Vec::new(),
            featured: true,
            summer_sublet: false,
        },
        Property {
            id: "bellfield-road-2298".to_string(),
            address: "2298 Bellfield Road".to_string(),
            city: "Cleveland Heights".to_string(),
            state: "OH".to_string(),
            zip: "44106".to_string(),
            neighborhood: "Cleveland Heights".to_string(),
            property_type: PropertyType::MultiFamily,
            units: vec![
                unit("bellfield-2298-1", 2, Some("Unit 1")),
                unit("bellfield-2298-2", 2, Some("Unit 2")),
                unit("bellfield-2298-3", 2, Some("Unit 3")),
                unit("bellfield-2298-4", 2, Some("Unit 4")),
            ],
            features: strings(&[
                "Multiple Units Available",
                "Updated Kitchen",
                "On-Site Laundry",
            ]),
            nearby_schools: strings(&["Case Western Reserve University"]),
            distance_to_campus: None,
            images: Vec::new(),
            featured: false,
            summer_sublet: false,
        },
        Property {
            id: "e-120th-1907".to_string(),
            address: "1907 E. 120th Street".to_string(),
            city: "Cleveland".to_string(),
            state: "OH".to_string(),
            zip: "44106".to_string(),
            neighborhood: "University Circle".to_string(),
            property_type: PropertyType::MultiFamily,
            units: vec![
                unit("e120-1907-1", 1, Some("Unit 1")),
                unit("e120-1907-2", 1, Some("Unit 2")),
                unit("e120-1907-3", 2, Some("Unit 3")),
                unit("e120-1907-4", 2, Some("Unit 4")),
            ],
            features: strings(&[
                "Near University Circle",
                "Updated Kitchen",
                "On-Site Laundry",
            ]),
            nearby_schools: strings(&[
                "Case Western Reserve University",
                "Cleveland Institute of Art",
            ]),
            distance_to_campus: None,
            images: Vec::new(),
            featured: false,
            summer_sublet: false,
        },
        Property {
            id: "fairview-court-12306".to_string(),
            address: "12306 Fairview Court".to_string(),
            city: "Cleveland".to_string(),
            state: "OH".to_string(),
            zip: "44106".to_string(),
            neighborhood: "Cleveland".to_string(),
            property_type: PropertyType::MultiFamily,
            units: vec![
                unit("fairview-12306-1", 2, Some("Unit 1")),
                unit("fairview-12306-2", 4, Some("Unit 2")),
            ],
            features: strings(&["Quiet Street", "Updated Kitchen", "Off-Street Parking"]),
            nearby_schools: strings(&["Case Western Reserve University"]),
            distance_to_campus: None,
            images: Vec::new(),
            featured: false,
            summer_sublet: false,
        },
    ]
}
