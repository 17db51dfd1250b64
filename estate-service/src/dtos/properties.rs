//! OpenAPI shapes of a property listing. Handlers store and return listings
//! as schemaless documents, so fields beyond these pass through untouched.
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Descriptive fields of a property, shared by requests and responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetails {
    /// The address of the property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "742 Evergreen Terrace")]
    pub address: Option<String>,
    /// The city where the property is located.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Springfield")]
    pub city: Option<String>,
    /// The state where the property is located.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "IL")]
    pub state: Option<String>,
    /// The zip code of the property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 62704)]
    pub zip: Option<i64>,
    /// The value of the property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 350000)]
    pub property_value: Option<i64>,
    /// The monthly rental income from the property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 2100)]
    pub monthly_rental_income: Option<i64>,
    /// The square footage of the property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 1450)]
    pub square_feet: Option<i64>,
    /// The number of bedrooms in the property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 3)]
    pub bedrooms: Option<i64>,
    /// The number of bathrooms in the property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 2)]
    pub bathrooms: Option<i64>,
    /// The availability status of the property (e.g. "Available", "Not Available").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Available")]
    pub availability: Option<String>,
    /// The URL of the property image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// List of amenities available at the property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    /// Additional notes or description of the property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body of `POST /api/properties`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PropertyRequest {
    /// The ID of the property.
    #[schema(example = "prop-001")]
    pub id: String,
    #[serde(flatten)]
    pub details: PropertyDetails,
}

/// Body of `PUT /api/properties/{id}`: only the supplied fields are `$set`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PropertyUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub details: PropertyDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct PropertyResponse {
    /// ObjectId assigned by MongoDB, as a hex string.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    pub id: String,
    #[serde(flatten)]
    pub details: PropertyDetails,
}
