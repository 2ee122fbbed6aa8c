//! Customer Repository
//!
//! The account-bound cart lives inside the customer row and is always
//! written whole. Last write wins; there is no version check on the cart
//! field (two tabs mutating the same account can lose an update).

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{CartLine, Customer, CustomerCreate};

const CUSTOMER_TABLE: &str = "customer";

#[derive(Clone)]
pub struct CustomerRepository {
    base: BaseRepository,
}

impl CustomerRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Customer>> {
        let customers: Vec<Customer> = self
            .base
            .db()
            .query("SELECT * FROM customer WHERE email = $email LIMIT 1")
            .bind(("email", email.to_string()))
            .await?
            .take(0)?;
        Ok(customers.into_iter().next())
    }

    pub async fn create(&self, data: CustomerCreate) -> RepoResult<Customer> {
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Customer {} already exists",
                data.email
            )));
        }

        let customer = Customer::new(data.name, data.email);
        let created: Option<Customer> = self
            .base
            .db()
            .create(CUSTOMER_TABLE)
            .content(customer)
            .await?;

        created.ok_or_else(|| RepoError::Database("Failed to create customer".to_string()))
    }

    /// Replace the embedded cart in full.
    pub async fn set_cart(&self, email: &str, cart: Vec<CartLine>) -> RepoResult<Customer> {
        let customers: Vec<Customer> = self
            .base
            .db()
            .query("UPDATE customer SET cart = $cart WHERE email = $email RETURN AFTER")
            .bind(("cart", cart))
            .bind(("email", email.to_string()))
            .await?
            .take(0)?;
        customers
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Customer {} not found", email)))
    }
}
