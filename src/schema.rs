//! # Schema Table Module
//!
//! The fixed classification of Open Graph `type` values into schemas.
//! Schemas are listed in declaration order; lookups walk them in that order
//! and the first match wins.

use std::fmt;

/// The schema an Open Graph object belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Schema {
    Activity,
    Business,
    Group,
    Organization,
    Person,
    Place,
    Product,
    Website,
}

impl Schema {
    /// Every schema, in declaration order
    pub const ALL: [Schema; 8] = [
        Schema::Activity,
        Schema::Business,
        Schema::Group,
        Schema::Organization,
        Schema::Person,
        Schema::Place,
        Schema::Product,
        Schema::Website,
    ];

    /// The schema name as used in Open Graph documents
    pub const fn name(self) -> &'static str {
        match self {
            Schema::Activity => "activity",
            Schema::Business => "business",
            Schema::Group => "group",
            Schema::Organization => "organization",
            Schema::Person => "person",
            Schema::Place => "place",
            Schema::Product => "product",
            Schema::Website => "website",
        }
    }

    /// The `type` literals classified under this schema
    pub const fn types(self) -> &'static [&'static str] {
        match self {
            Schema::Activity => &["activity", "sport"],
            Schema::Business => &["bar", "company", "cafe", "hotel", "restaurant"],
            Schema::Group => &["cause", "sports_league", "sports_team"],
            Schema::Organization => &["band", "government", "non_profit", "school", "university"],
            Schema::Person => &[
                "actor",
                "athlete",
                "author",
                "director",
                "musician",
                "politician",
                "public_figure",
            ],
            Schema::Place => &["city", "country", "landmark", "state_province"],
            Schema::Product => &[
                "album", "book", "drink", "food", "game", "movie", "product", "song", "tv_show",
            ],
            Schema::Website => &["blog", "website"],
        }
    }

    /// Whether `object_type` is one of this schema's literals
    pub fn contains(self, object_type: &str) -> bool {
        self.types().contains(&object_type)
    }

    /// The first schema whose type list contains `object_type`
    pub fn for_type(object_type: &str) -> Option<Schema> {
        Schema::ALL
            .into_iter()
            .find(|schema| schema.contains(object_type))
    }

    /// Look up a schema by its name
    pub fn from_name(name: &str) -> Option<Schema> {
        Schema::ALL.into_iter().find(|schema| schema.name() == name)
    }

    /// Every type literal across all schemas, in table order
    pub fn all_types() -> impl Iterator<Item = &'static str> {
        Schema::ALL
            .into_iter()
            .flat_map(|schema| schema.types().iter().copied())
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_type() {
        assert_eq!(Schema::for_type("movie"), Some(Schema::Product));
        assert_eq!(Schema::for_type("cafe"), Some(Schema::Business));
        assert_eq!(Schema::for_type("public_figure"), Some(Schema::Person));
        assert_eq!(Schema::for_type("activity"), Some(Schema::Activity));
        assert_eq!(Schema::for_type("article"), None);
        assert_eq!(Schema::for_type("Movie"), None);
    }

    #[test]
    fn test_table_is_partitioned() {
        let types: Vec<_> = Schema::all_types().collect();
        assert_eq!(types.len(), 37);
        for object_type in &types {
            let owners = Schema::ALL
                .iter()
                .filter(|schema| schema.contains(object_type))
                .count();
            assert_eq!(owners, 1, "{} appears in more than one schema", object_type);
        }
    }

    #[test]
    fn test_declaration_order() {
        let names: Vec<_> = Schema::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec![
                "activity",
                "business",
                "group",
                "organization",
                "person",
                "place",
                "product",
                "website"
            ]
        );
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Schema::from_name("place"), Some(Schema::Place));
        assert_eq!(Schema::from_name("Place"), None);
        assert_eq!(Schema::Place.to_string(), "place");
    }
}
