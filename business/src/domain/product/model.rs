use bigdecimal::BigDecimal;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub delivery_price: BigDecimal,
}

pub struct NewProductProps {
    /// Caller-chosen identifier; the nil UUID asks for a fresh one.
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub delivery_price: BigDecimal,
}

impl Product {
    pub fn new(props: NewProductProps) -> Self {
        let id = if props.id.is_nil() {
            Uuid::new_v4()
        } else {
            props.id
        };

        Self {
            id,
            name: props.name,
            description: props.description,
            price: props.price,
            delivery_price: props.delivery_price,
        }
    }

    /// Constructor for data already persisted in the repository (no id assignment).
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: Option<String>,
        price: BigDecimal,
        delivery_price: BigDecimal,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            delivery_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(id: Uuid) -> NewProductProps {
        NewProductProps {
            id,
            name: "Samsung Galaxy S7".to_string(),
            description: Some("Newest mobile product from Samsung.".to_string()),
            price: BigDecimal::from(1024),
            delivery_price: BigDecimal::from(16),
        }
    }

    #[test]
    fn should_keep_id_when_provided() {
        let id = Uuid::new_v4();

        let product = Product::new(props(id));

        assert_eq!(product.id, id);
        assert_eq!(product.name, "Samsung Galaxy S7");
    }

    #[test]
    fn should_assign_fresh_id_when_nil() {
        let product = Product::new(props(Uuid::nil()));

        assert!(!product.id.is_nil());
    }

    #[test]
    fn should_assign_distinct_ids_to_separate_products() {
        let first = Product::new(props(Uuid::nil()));
        let second = Product::new(props(Uuid::nil()));

        assert_ne!(first.id, second.id);
    }
}
