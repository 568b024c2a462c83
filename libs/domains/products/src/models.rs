use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Supported price currencies
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Usd,
    Gbp,
}

/// Product entity
///
/// The id is assigned by the repository at creation time and never
/// reassigned. `price` is strictly positive for every stored product;
/// that invariant is enforced at the HTTP boundary, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Price (currency-agnostic magnitude)
    pub price: f64,
    /// Currency of the price
    pub currency: Currency,
}

/// DTO for creating a new product
///
/// All fields must be present in the request body. An empty
/// `description` is legal; presence is what is checked, not truthiness.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    pub description: String,
    #[validate(range(exclusive_min = 0.0, message = "Price must be a positive number"))]
    pub price: f64,
    pub currency: Currency,
}

/// DTO for updating an existing product
///
/// Merge semantics: present fields overwrite, absent fields are left
/// unchanged. Present fields must satisfy the same rules as on creation.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "Price must be a positive number"))]
    pub price: Option<f64>,
    pub currency: Option<Currency>,
}

/// Query filters for listing products
///
/// Provided filters combine with logical AND; absent fields impose no
/// constraint. `price` is parsed leniently so that a malformed value
/// drops the filter instead of failing the request (read paths stay
/// permissive).
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct ProductFilter {
    /// Case-insensitive substring match against the product name
    pub name: Option<String>,
    /// Exact price match
    #[serde(default, deserialize_with = "lenient_f64")]
    #[param(value_type = Option<f64>)]
    pub price: Option<f64>,
    /// Exact currency code match (e.g. "EUR"); an unknown code simply
    /// matches nothing
    pub currency: Option<String>,
}

impl ProductFilter {
    /// Whether a product satisfies every provided filter.
    ///
    /// Each filter is a pure predicate over a single field, so they
    /// commute; an empty filter matches everything.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(ref name) = self.name {
            if !product.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }

        if let Some(price) = self.price {
            if product.price != price {
                return false;
            }
        }

        if let Some(ref currency) = self.currency {
            // Codes are matched case-sensitively; anything that is not a
            // known currency code matches nothing.
            match Currency::from_str(currency) {
                Ok(code) if code == product.currency => {}
                _ => return false,
            }
        }

        true
    }
}

/// Deserialize an optional float, treating unparseable input as absent.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse::<f64>().ok()))
}

impl Product {
    /// Create a new product from a CreateProduct DTO, assigning a fresh id
    pub fn new(input: CreateProduct) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            price: input.price,
            currency: input.currency,
        }
    }

    /// Apply updates from an UpdateProduct DTO (shallow field overwrite)
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(currency) = update.currency {
            self.currency = currency;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn product(name: &str, price: f64, currency: Currency) -> Product {
        Product {
            id: Uuid::now_v7(),
            name: name.to_string(),
            description: String::new(),
            price,
            currency,
        }
    }

    #[test]
    fn test_currency_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Currency::Eur).unwrap(), "\"EUR\"");
        assert_eq!(
            serde_json::from_str::<Currency>("\"GBP\"").unwrap(),
            Currency::Gbp
        );
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert_eq!("EUR".parse::<Currency>().unwrap(), Currency::Eur);
        assert!("eur".parse::<Currency>().is_err());
    }

    #[test]
    fn test_new_assigns_unique_ids() {
        let input = CreateProduct {
            name: "Monitor".to_string(),
            description: String::new(),
            price: 350.0,
            currency: Currency::Usd,
        };
        let a = Product::new(input.clone());
        let b = Product::new(input);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_apply_update_merges_present_fields_only() {
        let mut p = product("Monitor", 350.0, Currency::Usd);
        let original_id = p.id;

        p.apply_update(UpdateProduct {
            price: Some(5.0),
            ..Default::default()
        });

        assert_eq!(p.id, original_id);
        assert_eq!(p.name, "Monitor");
        assert_eq!(p.price, 5.0);
        assert_eq!(p.currency, Currency::Usd);
    }

    #[test]
    fn test_create_product_rejects_non_positive_price() {
        let zero = CreateProduct {
            name: "Monitor".to_string(),
            description: String::new(),
            price: 0.0,
            currency: Currency::Usd,
        };
        assert!(zero.validate().is_err());

        let negative = CreateProduct {
            price: -5.0,
            ..zero
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_create_product_allows_empty_description() {
        let input = CreateProduct {
            name: "Monitor".to_string(),
            description: String::new(),
            price: 350.0,
            currency: Currency::Usd,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_update_product_validates_present_price_only() {
        let no_price = UpdateProduct::default();
        assert!(no_price.validate().is_ok());

        let bad_price = UpdateProduct {
            price: Some(-1.0),
            ..Default::default()
        };
        assert!(bad_price.validate().is_err());
    }

    #[test]
    fn test_filter_name_is_case_insensitive_substring() {
        let filter = ProductFilter {
            name: Some("x".to_string()),
            ..Default::default()
        };

        assert!(filter.matches(&product("Laptop Pro X", 1200.0, Currency::Eur)));
        assert!(filter.matches(&product("Gaming Maus XYZ", 65.99, Currency::Eur)));
        assert!(!filter.matches(&product("Monitor", 350.0, Currency::Usd)));
    }

    #[test]
    fn test_filter_currency_matches_exact_code() {
        let filter = ProductFilter {
            currency: Some("USD".to_string()),
            ..Default::default()
        };

        assert!(filter.matches(&product("Monitor", 350.0, Currency::Usd)));
        assert!(!filter.matches(&product("Monitor", 350.0, Currency::Eur)));

        // Lowercase and unknown codes match nothing
        let lowercase = ProductFilter {
            currency: Some("usd".to_string()),
            ..Default::default()
        };
        assert!(!lowercase.matches(&product("Monitor", 350.0, Currency::Usd)));

        let unknown = ProductFilter {
            currency: Some("CHF".to_string()),
            ..Default::default()
        };
        assert!(!unknown.matches(&product("Monitor", 350.0, Currency::Usd)));
    }

    #[test]
    fn test_filter_combines_with_and() {
        let filter = ProductFilter {
            name: Some("monitor".to_string()),
            price: Some(350.0),
            currency: Some("USD".to_string()),
        };

        assert!(filter.matches(&product("UHD Monitor 27 Zoll", 350.0, Currency::Usd)));
        assert!(!filter.matches(&product("UHD Monitor 27 Zoll", 349.0, Currency::Usd)));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = ProductFilter::default();
        assert!(filter.matches(&product("Anything", 1.0, Currency::Gbp)));
    }

    #[test]
    fn test_lenient_price_drops_unparseable_values() {
        let filter: ProductFilter =
            serde_urlencoded::from_str("price=not-a-number").unwrap();
        assert_eq!(filter.price, None);

        let filter: ProductFilter = serde_urlencoded::from_str("price=65.99").unwrap();
        assert_eq!(filter.price, Some(65.99));
    }
}
