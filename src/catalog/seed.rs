//! Initial catalog contents.

use crate::catalog::mapper::{validate_create, ValidationErrors};
use crate::catalog::model::{CreateProductRequest, NewProduct, Product};
use crate::catalog::repository::{ProductRepository, RepositoryResult};

struct SeedProduct {
    name: &'static str,
    price: f64,
    description: &'static str,
    category: &'static str,
    image_url: &'static str,
    sizes: &'static [&'static str],
}

const APPAREL_SIZES: &[&str] = &["S", "M", "L", "XL"];

const SEED_PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        name: "Summer Dress",
        price: 999.0,
        description: "This elegant summer dress is perfect for sunny days...",
        category: "Dresses",
        image_url: "/images/summer-dress.png",
        sizes: APPAREL_SIZES,
    },
    SeedProduct {
        name: "Casual T-Shirt",
        price: 1090.90,
        description: "A classic and comfortable T-shirt for everyday wear...",
        category: "Tops",
        image_url: "/images/casual-t-shirt.png",
        sizes: APPAREL_SIZES,
    },
    SeedProduct {
        name: "Evening Gown",
        price: 1199.0,
        description: "An elegant gown perfect for special occasions...",
        category: "Dresses",
        image_url: "/images/evening-gown-1.jpg",
        sizes: &["S", "M", "L"],
    },
    SeedProduct {
        name: "Casual Wear",
        price: 799.0,
        description: "Comfortable and chic outfit for a casual day out...",
        category: "Outfits",
        image_url: "/images/casual-wear-1.jpg",
        sizes: &["M", "L", "XL"],
    },
    SeedProduct {
        name: "Flower Flask",
        price: 599.0,
        description: "Complete your look with our stylish Flower Flask...",
        category: "Accessories",
        image_url: "/images/flower-flask.jpg",
        sizes: &["One Size"],
    },
    SeedProduct {
        name: "Jeans",
        price: 899.0,
        description: "Classic straight-leg jeans made from durable, high-quality denim.",
        category: "Casual Wear",
        image_url: "/images/jeans.jpg",
        sizes: &["28", "30", "32", "34", "36"],
    },
    SeedProduct {
        name: "Kurti",
        price: 1500.0,
        description: "A beautifully embroidered kurti, perfect for both casual and festive occasions.",
        category: "Tops",
        image_url: "/images/kurti.jpg",
        sizes: APPAREL_SIZES,
    },
    SeedProduct {
        name: "Shoes",
        price: 1200.0,
        description: "Stylish and comfortable leather shoes to complete any outfit.",
        category: "Shoes",
        image_url: "/images/shoes.jpg",
        sizes: &["5", "6", "7", "8", "9"],
    },
];

/// The seed catalog, validated the same way as API create requests.
pub fn seed_products() -> Result<Vec<NewProduct>, ValidationErrors> {
    SEED_PRODUCTS
        .iter()
        .map(|p| {
            validate_create(CreateProductRequest {
                name: Some(p.name.to_string()),
                price: Some(p.price),
                description: Some(p.description.to_string()),
                category: Some(p.category.to_string()),
                image_url: Some(p.image_url.to_string()),
                sizes: Some(p.sizes.iter().map(|s| s.to_string()).collect()),
            })
        })
        .collect()
}

/// Replace the whole collection with `products`.
///
/// Returns the number of documents removed and the inserted products.
pub async fn reseed(
    repo: &ProductRepository,
    products: &[NewProduct],
) -> RepositoryResult<(u64, Vec<Product>)> {
    let removed = repo.clear().await?;
    tracing::info!(removed, "Deleted existing products");

    let mut inserted = Vec::with_capacity(products.len());
    for product in products {
        inserted.push(repo.insert(product).await?);
    }
    tracing::info!(inserted = inserted.len(), "Inserted seed products");
    Ok((removed, inserted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::sync::Arc;

    #[test]
    fn test_seed_products_are_valid() {
        let products = seed_products().unwrap();
        assert_eq!(products.len(), 8);
        assert_eq!(products[1].price, 1090.90);
        assert_eq!(products[5].sizes.len(), 5);
    }

    #[tokio::test]
    async fn test_reseed_replaces_collection() {
        let store = MemoryStore::new();
        let repo = ProductRepository::new(Arc::new(store.clone()));
        let products = seed_products().unwrap();

        reseed(&repo, &products).await.unwrap();
        let (removed, inserted) = reseed(&repo, &products).await.unwrap();

        assert_eq!(removed, 8);
        assert_eq!(inserted.len(), 8);
        assert_eq!(store.len(), 8);
        assert_eq!(repo.list_all().await.unwrap().len(), 8);
    }
}
