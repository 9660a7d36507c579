use std::time::Duration;

use reqwest::Client;
use tokio::time::timeout;
use tracing::debug;

use crate::api::error::StoreError;
use crate::api::types::{NewProduct, Product};

/// HTTP client for the product store.
///
/// Each method issues exactly one request. Timeouts are enforced around the
/// whole call so slow bodies count against the same budget as slow
/// connects.
pub struct StoreClient {
    client: Client,
    base_url: String,
    request_timeout: Duration,
}

impl StoreClient {
    pub fn new(
        base_url: impl Into<String>,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .expect("Failed to build store client");

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            client,
            base_url,
            request_timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /products` — the full catalog.
    pub async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        self.bounded(async {
            let url = format!("{}/products", self.base_url);
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|source| StoreError::Connection { source })?;
            check_status(&response)?;
            response
                .json::<Vec<Product>>()
                .await
                .map_err(|source| StoreError::Decode { source })
        })
        .await
    }

    /// `GET /products/{id}` — a single product.
    pub async fn get_product(&self, id: u64) -> Result<Product, StoreError> {
        self.bounded(async {
            let url = format!("{}/products/{}", self.base_url, id);
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|source| StoreError::Connection { source })?;
            check_status(&response)?;
            response
                .json::<Product>()
                .await
                .map_err(|source| StoreError::Decode { source })
        })
        .await
    }

    /// `POST /products` — create a product, returning the stored copy.
    pub async fn create_product(&self, product: &NewProduct) -> Result<Product, StoreError> {
        self.bounded(async {
            let url = format!("{}/products", self.base_url);
            let response = self
                .client
                .post(&url)
                .json(product)
                .send()
                .await
                .map_err(|source| StoreError::Connection { source })?;
            check_status(&response)?;
            response
                .json::<Product>()
                .await
                .map_err(|source| StoreError::Decode { source })
        })
        .await
    }

    /// `DELETE /products/{id}` — remove a product. The response payload is
    /// discarded; only the status matters.
    pub async fn delete_product(&self, id: u64) -> Result<(), StoreError> {
        self.bounded(async {
            let url = format!("{}/products/{}", self.base_url, id);
            let response = self
                .client
                .delete(&url)
                .send()
                .await
                .map_err(|source| StoreError::Connection { source })?;
            check_status(&response)?;
            Ok(())
        })
        .await
    }

    /// Confirms a cart addition against the store.
    ///
    /// The store exposes no cart resource, so the commit probes the product
    /// itself: one request per interaction, success means the speculative
    /// quantity may be folded into committed state. No payload reaches the
    /// caller.
    pub async fn confirm_cart_add(&self, product_id: u64) -> Result<(), StoreError> {
        self.bounded(async {
            let url = format!("{}/products/{}", self.base_url, product_id);
            debug!(product_id, "confirming cart addition");
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|source| StoreError::Connection { source })?;
            check_status(&response)?;
            Ok(())
        })
        .await
    }

    async fn bounded<T>(
        &self,
        fut: impl std::future::Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        match timeout(self.request_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }
}

fn check_status(response: &reqwest::Response) -> Result<(), StoreError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(StoreError::Status {
            status: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped_from_base_url() {
        let client = StoreClient::new(
            "http://127.0.0.1:9/",
            Duration::from_secs(1),
            Duration::from_secs(1),
        );
        assert_eq!(client.base_url(), "http://127.0.0.1:9");
    }
}
