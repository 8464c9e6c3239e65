//! Static category listing shown on the storefront home page.
//!
//! Category names are not checked against `Product::category`; a product may
//! carry any category string.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: &'static str,
    pub image_url: &'static str,
}

const CATEGORIES: [Category; 5] = [
    Category {
        name: "Dresses",
        image_url: "/images/category-dresses.jpg",
    },
    Category {
        name: "Tops",
        image_url: "/images/category-tops.jpg",
    },
    Category {
        name: "Casual Wear",
        image_url: "/images/category-casual-wear.jpg",
    },
    Category {
        name: "Shoes",
        image_url: "/images/category-shoes.jpg",
    },
    Category {
        name: "Accessories",
        image_url: "/images/category-accessories.jpg",
    },
];

/// The fixed category list, in display order.
pub fn list_categories() -> &'static [Category] {
    &CATEGORIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_list() {
        let names: Vec<_> = list_categories().iter().map(|c| c.name).collect();
        assert_eq!(names, ["Dresses", "Tops", "Casual Wear", "Shoes", "Accessories"]);
        assert_eq!(list_categories(), list_categories());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(list_categories()[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Dresses", "imageUrl": "/images/category-dresses.jpg" })
        );
    }
}
