use super::error::BackendError;
use super::types::{LlmRequest, LlmResponse};
use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, BackendError>;

    fn name(&self) -> &str;

    fn model_info(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct TestClient;

    #[async_trait]
    impl LlmClient for TestClient {
        async fn generate(&self, _request: LlmRequest) -> Result<LlmResponse, BackendError> {
            Ok(LlmResponse::text(
                "Test response",
                Duration::from_millis(10),
            ))
        }

        fn name(&self) -> &str {
            "TestClient"
        }
    }

    #[tokio::test]
    async fn test_client_trait() {
        let client = TestClient;
        assert_eq!(client.name(), "TestClient");
        assert!(client.model_info().is_none());

        let response = client.generate(LlmRequest::new("hi")).await.unwrap();
        assert_eq!(response.content, "Test response");
    }
}
