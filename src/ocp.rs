//! Pattern 2: Open/Closed
//!
//! Adding a persistence target to `violated::SaveProductToDb` means editing
//! it. In `followed`, every target is its own [`followed::SaveProduct`]
//! implementation and existing code stays closed.

use crate::cart::Cart;
use crate::config::Scenario;
use crate::console::{self, Transcript};
use crate::srp::followed::ShoppingCartPrinter;
use crate::srp::saved_line;

pub(crate) const SAVING_BANNER: &str = "--- Saving Products ---";

fn save_all(cart: &Cart, destination: &str) -> Transcript {
    let mut out = Transcript::new();
    for product in cart.products() {
        tracing::debug!(product = product.name(), destination, "saving product");
        out.line(saved_line(product, destination));
    }
    out
}

// ============================================================================
// Violated: one method per target
// ============================================================================

pub mod violated {
    use super::*;

    #[derive(Debug, Clone, Copy)]
    pub struct SaveProductToDb<'a> {
        cart: &'a Cart,
    }

    impl<'a> SaveProductToDb<'a> {
        pub fn new(cart: &'a Cart) -> Self {
            Self { cart }
        }

        pub fn save_to_sql(&self) -> Transcript {
            save_all(self.cart, "SQL DB")
        }

        pub fn save_to_mongo(&self) -> Transcript {
            save_all(self.cart, "MongoDB")
        }

        pub fn save_to_file(&self) -> Transcript {
            save_all(self.cart, "File Path")
        }
    }

    /// Everything `p2_ocp_violated` prints.
    pub fn run(scenario: &Scenario) -> Transcript {
        let cart = scenario.cart();

        let mut out = ShoppingCartPrinter::new(&cart).print_invoice();
        out.banner(SAVING_BANNER);

        // Adding a target means editing SaveProductToDb
        let save_product = SaveProductToDb::new(&cart);
        out.append(save_product.save_to_sql());
        out.blank();
        out.append(save_product.save_to_mongo());
        out.blank();
        out.append(save_product.save_to_file());
        out
    }
}

// ============================================================================
// Followed: one trait, one type per target
// ============================================================================

pub mod followed {
    use super::*;

    pub trait SaveProduct {
        /// Human-readable target name, used in diagnostics.
        fn target(&self) -> &'static str;

        fn save(&self) -> Transcript;
    }

    #[derive(Debug, Clone, Copy)]
    pub struct SaveProductToSqlDb<'a> {
        cart: &'a Cart,
    }

    impl<'a> SaveProductToSqlDb<'a> {
        pub fn new(cart: &'a Cart) -> Self {
            Self { cart }
        }
    }

    impl SaveProduct for SaveProductToSqlDb<'_> {
        fn target(&self) -> &'static str {
            "SQL"
        }

        fn save(&self) -> Transcript {
            save_all(self.cart, "SQL database")
        }
    }

    #[derive(Debug, Clone, Copy)]
    pub struct SaveProductToNoSqlDb<'a> {
        cart: &'a Cart,
    }

    impl<'a> SaveProductToNoSqlDb<'a> {
        pub fn new(cart: &'a Cart) -> Self {
            Self { cart }
        }
    }

    impl SaveProduct for SaveProductToNoSqlDb<'_> {
        fn target(&self) -> &'static str {
            "NoSQL"
        }

        fn save(&self) -> Transcript {
            save_all(self.cart, "NoSQL database")
        }
    }

    #[derive(Debug, Clone, Copy)]
    pub struct SaveProductToFile<'a> {
        cart: &'a Cart,
    }

    impl<'a> SaveProductToFile<'a> {
        pub fn new(cart: &'a Cart) -> Self {
            Self { cart }
        }
    }

    impl SaveProduct for SaveProductToFile<'_> {
        fn target(&self) -> &'static str {
            "file"
        }

        fn save(&self) -> Transcript {
            save_all(self.cart, "file")
        }
    }

    /// Run every target in order, separating them with a blank line.
    pub fn save_everywhere(targets: &[&dyn SaveProduct]) -> Transcript {
        let mut out = Transcript::new();
        for (i, target) in targets.iter().enumerate() {
            if i > 0 {
                out.blank();
            }
            tracing::debug!(store = target.target(), "saving cart");
            out.append(target.save());
        }
        out
    }

    /// Everything `p2_ocp_followed` prints.
    pub fn run(scenario: &Scenario) -> Transcript {
        let cart = scenario.cart();

        let mut out = ShoppingCartPrinter::new(&cart).print_invoice();
        out.line(format!("Total: Rs {}", console::amount(cart.total())));
        out.banner(SAVING_BANNER);

        let sql = SaveProductToSqlDb::new(&cart);
        let nosql = SaveProductToNoSqlDb::new(&cart);
        let file = SaveProductToFile::new(&cart);
        out.append(save_everywhere(&[&sql, &nosql, &file]));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::followed::*;
    use super::*;
    use crate::cart::Product;

    fn cart() -> Cart {
        [Product::new("Laptop", 50000.0), Product::new("Mouse", 2000.0)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_violated_targets() {
        let cart = cart();
        let saver = violated::SaveProductToDb::new(&cart);

        assert_eq!(
            saver.save_to_sql().lines()[0],
            "Product : Laptop with price: 50000.0 saved to SQL DB."
        );
        assert_eq!(
            saver.save_to_mongo().lines()[1],
            "Product : Mouse with price: 2000.0 saved to MongoDB."
        );
        assert_eq!(
            saver.save_to_file().lines()[0],
            "Product : Laptop with price: 50000.0 saved to File Path."
        );
    }

    #[test]
    fn test_each_target_is_its_own_type() {
        let cart = cart();

        let sql = SaveProductToSqlDb::new(&cart);
        let nosql = SaveProductToNoSqlDb::new(&cart);
        let file = SaveProductToFile::new(&cart);

        assert_eq!(
            sql.save().lines()[0],
            "Product : Laptop with price: 50000.0 saved to SQL database."
        );
        assert_eq!(
            nosql.save().lines()[0],
            "Product : Laptop with price: 50000.0 saved to NoSQL database."
        );
        assert_eq!(
            file.save().lines()[1],
            "Product : Mouse with price: 2000.0 saved to file."
        );
    }

    // A new target plugs in without touching the existing ones.
    struct SaveProductToMemory<'a> {
        cart: &'a Cart,
    }

    impl SaveProduct for SaveProductToMemory<'_> {
        fn target(&self) -> &'static str {
            "memory"
        }

        fn save(&self) -> Transcript {
            let mut out = Transcript::new();
            out.line(format!("{} products kept in memory", self.cart.len()));
            out
        }
    }

    #[test]
    fn test_save_everywhere_accepts_new_targets() {
        let cart = cart();
        let sql = SaveProductToSqlDb::new(&cart);
        let memory = SaveProductToMemory { cart: &cart };

        let out = save_everywhere(&[&sql, &memory]);
        assert_eq!(
            out.lines(),
            [
                "Product : Laptop with price: 50000.0 saved to SQL database.",
                "Product : Mouse with price: 2000.0 saved to SQL database.",
                "",
                "2 products kept in memory",
            ]
        );
    }

    #[test]
    fn test_save_everywhere_with_no_targets() {
        assert!(save_everywhere(&[]).is_empty());
    }
}
