//! Pattern 1: Single Responsibility
//!
//! `violated::ShoppingCart` aggregates, prints and persists. The
//! `followed` module keeps aggregation on [`Cart`] and moves printing and
//! persisting into collaborators that only borrow it.

use crate::cart::Product;
use crate::config::Scenario;
use crate::console::{self, Transcript};

pub(crate) const INVOICE_HEADER: &str = "Shopping Cart Invoice:";

pub(crate) fn invoice_line(product: &Product) -> String {
    format!("{} - Rs {}", product.name(), console::amount(product.price()))
}

pub(crate) fn saved_line(product: &Product, destination: &str) -> String {
    format!(
        "Product : {} with price: {} saved to {}.",
        product.name(),
        console::amount(product.price()),
        destination
    )
}

// ============================================================================
// Violated: one type, three reasons to change
// ============================================================================

pub mod violated {
    use super::*;

    #[derive(Debug, Default)]
    pub struct ShoppingCart {
        products: Vec<Product>,
    }

    impl ShoppingCart {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn add_product(&mut self, product: Product) {
            self.products.push(product);
        }

        pub fn products(&self) -> &[Product] {
            &self.products
        }

        // 1. Aggregation
        pub fn calculate_total(&self) -> f64 {
            self.products.iter().map(Product::price).sum()
        }

        // 2. Presentation
        pub fn print_invoice(&self) -> Transcript {
            let mut out = Transcript::new();
            out.line(INVOICE_HEADER);
            for product in &self.products {
                out.line(invoice_line(product));
            }
            out.line(format!("Total: Rs {}", console::amount(self.calculate_total())));
            out
        }

        // 3. Persistence
        pub fn save_to_database(&self) -> Transcript {
            let mut out = Transcript::new();
            for product in &self.products {
                tracing::debug!(product = product.name(), "saving product");
                out.line(saved_line(product, "database"));
            }
            out
        }
    }

    /// Everything `p1_srp_violated` prints.
    pub fn run(scenario: &Scenario) -> Transcript {
        let mut cart = ShoppingCart::new();
        for product in &scenario.cart {
            cart.add_product(product.clone());
        }

        let mut out = cart.print_invoice();
        out.append(cart.save_to_database());
        out
    }
}

// ============================================================================
// Followed: data holder plus read-only collaborators
// ============================================================================

pub mod followed {
    use super::*;
    use crate::cart::Cart;

    /// Renders the invoice for a cart it never mutates.
    #[derive(Debug, Clone, Copy)]
    pub struct ShoppingCartPrinter<'a> {
        cart: &'a Cart,
    }

    impl<'a> ShoppingCartPrinter<'a> {
        pub fn new(cart: &'a Cart) -> Self {
            Self { cart }
        }

        pub fn print_invoice(&self) -> Transcript {
            let mut out = Transcript::new();
            out.line(INVOICE_HEADER);
            for product in self.cart.products() {
                out.line(invoice_line(product));
            }
            out
        }
    }

    /// Persists a cart's products to the (stand-in) database.
    #[derive(Debug, Clone, Copy)]
    pub struct SaveProduct<'a> {
        cart: &'a Cart,
    }

    impl<'a> SaveProduct<'a> {
        pub fn new(cart: &'a Cart) -> Self {
            Self { cart }
        }

        pub fn save_to_db(&self) -> Transcript {
            let mut out = Transcript::new();
            for product in self.cart.products() {
                tracing::debug!(product = product.name(), "saving product");
                out.line(saved_line(product, "database"));
            }
            out
        }
    }

    /// Everything `p1_srp_followed` prints.
    pub fn run(scenario: &Scenario) -> Transcript {
        let cart = scenario.cart();

        let mut out = ShoppingCartPrinter::new(&cart).print_invoice();
        out.line(format!("Total price : {}", console::amount(cart.total())));
        out.append(SaveProduct::new(&cart).save_to_db());
        out
    }
}
