use uuid::Uuid;

/// A purchasable variant of a product. `product_id` is not checked against
/// the products table.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductOption {
    pub id: Uuid,
    pub product_id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

pub struct NewProductOptionProps {
    pub id: Uuid,
    pub product_id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

impl ProductOption {
    pub fn new(props: NewProductOptionProps) -> Self {
        let id = if props.id.is_nil() {
            Uuid::new_v4()
        } else {
            props.id
        };

        Self {
            id,
            product_id: props.product_id,
            name: props.name,
            description: props.description,
        }
    }

    pub fn from_repository(
        id: Uuid,
        product_id: Uuid,
        name: String,
        description: Option<String>,
    ) -> Self {
        Self {
            id,
            product_id,
            name,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_assign_fresh_id_when_nil() {
        let product_id = Uuid::new_v4();

        let option = ProductOption::new(NewProductOptionProps {
            id: Uuid::nil(),
            product_id,
            name: "White".to_string(),
            description: None,
        });

        assert!(!option.id.is_nil());
        assert_eq!(option.product_id, product_id);
    }

    #[test]
    fn should_keep_id_when_provided() {
        let id = Uuid::new_v4();

        let option = ProductOption::new(NewProductOptionProps {
            id,
            product_id: Uuid::new_v4(),
            name: "Black".to_string(),
            description: Some("Black Samsung Galaxy S7".to_string()),
        });

        assert_eq!(option.id, id);
    }
}
