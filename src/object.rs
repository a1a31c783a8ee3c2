//! # Graph Object Module
//!
//! [`GraphObject`] wraps the attributes collected from a document and
//! classifies them against the schema table.
//!
//! ## Key Components
//!
//! - `object_type` / `schema`: derived classification of the object
//! - `is_type` / `is_schema`: table-driven predicates, with named wrappers
//!   such as `is_movie()` or `is_business_schema()` generated from the table
//! - `valid`: checks the mandatory attributes (`title`, `type`, `image`, `url`)

use std::fmt;

use crate::attributes::{AttributeMap, Group, Value};
use crate::schema::Schema;

/// Attributes every complete Open Graph object carries, in check order
pub const MANDATORY_ATTRIBUTES: [&str; 4] = ["title", "type", "image", "url"];

/// An Open Graph object extracted from a single document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphObject {
    attributes: AttributeMap,
}

impl From<AttributeMap> for GraphObject {
    fn from(attributes: AttributeMap) -> Self {
        Self { attributes }
    }
}

impl GraphObject {
    /// Create an object over already-collected attributes
    pub fn new(attributes: AttributeMap) -> Self {
        Self { attributes }
    }

    /// Look up an attribute
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Look up a scalar attribute
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Look up a namespace group (`article`, `book` or `video`)
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.get(name).and_then(Value::as_group)
    }

    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    pub fn into_attributes(self) -> AttributeMap {
        self.attributes
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// The object type, i.e. the `og:type` content
    pub fn object_type(&self) -> Option<&str> {
        self.get_str("type")
    }

    /// The schema the object type belongs to
    pub fn schema(&self) -> Option<Schema> {
        self.object_type().and_then(Schema::for_type)
    }

    /// Whether the object type is exactly `literal`
    pub fn is_type(&self, literal: &str) -> bool {
        self.object_type() == Some(literal)
    }

    /// Whether the object type is the schema name itself or one of its types
    pub fn is_schema(&self, schema: Schema) -> bool {
        match self.object_type() {
            Some(object_type) => object_type == schema.name() || schema.contains(object_type),
            None => false,
        }
    }

    /// Whether every mandatory attribute is present and non-empty
    pub fn valid(&self) -> bool {
        MANDATORY_ATTRIBUTES
            .iter()
            .all(|key| self.has_content(key))
    }

    /// The mandatory attributes that are absent or empty, in check order
    pub fn missing_attributes(&self) -> Vec<&'static str> {
        MANDATORY_ATTRIBUTES
            .iter()
            .copied()
            .filter(|key| !self.has_content(key))
            .collect()
    }

    fn has_content(&self, key: &str) -> bool {
        self.get(key).is_some_and(|value| !value.is_empty())
    }
}

macro_rules! type_predicates {
    ($($method:ident => $literal:literal),* $(,)?) => {
        impl GraphObject {
            $(
                #[doc = concat!("Whether the object type is `", $literal, "`")]
                pub fn $method(&self) -> bool {
                    self.is_type($literal)
                }
            )*
        }
    };
}

macro_rules! schema_predicates {
    ($($method:ident => $schema:expr),* $(,)?) => {
        impl GraphObject {
            $(
                #[doc = concat!("Whether the object belongs to `", stringify!($schema), "`")]
                pub fn $method(&self) -> bool {
                    self.is_schema($schema)
                }
            )*
        }
    };
}

type_predicates! {
    is_activity => "activity",
    is_sport => "sport",
    is_bar => "bar",
    is_company => "company",
    is_cafe => "cafe",
    is_hotel => "hotel",
    is_restaurant => "restaurant",
    is_cause => "cause",
    is_sports_league => "sports_league",
    is_sports_team => "sports_team",
    is_band => "band",
    is_government => "government",
    is_non_profit => "non_profit",
    is_school => "school",
    is_university => "university",
    is_actor => "actor",
    is_athlete => "athlete",
    is_author => "author",
    is_director => "director",
    is_musician => "musician",
    is_politician => "politician",
    is_public_figure => "public_figure",
    is_city => "city",
    is_country => "country",
    is_landmark => "landmark",
    is_state_province => "state_province",
    is_album => "album",
    is_book => "book",
    is_drink => "drink",
    is_food => "food",
    is_game => "game",
    is_movie => "movie",
    is_product => "product",
    is_song => "song",
    is_tv_show => "tv_show",
    is_blog => "blog",
    is_website => "website",
}

schema_predicates! {
    is_activity_schema => Schema::Activity,
    is_business_schema => Schema::Business,
    is_group_schema => Schema::Group,
    is_organization_schema => Schema::Organization,
    is_person_schema => Schema::Person,
    is_place_schema => Schema::Place,
    is_product_schema => Schema::Product,
    is_website_schema => Schema::Website,
}

impl fmt::Display for GraphObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.attributes.iter() {
            match value {
                Value::Scalar(content) => writeln!(f, "{}: {}", key, content)?,
                Value::Group(group) => {
                    for (sub_key, entry) in group.iter() {
                        writeln!(f, "{}:{}: {}", key, sub_key, entry)?;
                    }
                }
            }
        }
        Ok(())
    }
}
