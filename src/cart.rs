//! Shared data holder for the Single Responsibility and Open/Closed examples.

use serde::Deserialize;

/// A product of any e-commerce catalogue.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    name: String,
    price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

/// Products in insertion order.
///
/// The cart only aggregates. Printing and persisting are left to
/// collaborators that borrow it immutably.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Cart {
    products: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product: Product) {
        tracing::debug!(product = product.name(), price = product.price(), "added to cart");
        self.products.push(product);
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn total(&self) -> f64 {
        self.products.iter().map(Product::price).sum()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<Product> for Cart {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut cart = Cart::new();
        for product in iter {
            cart.add(product);
        }
        cart
    }
}
