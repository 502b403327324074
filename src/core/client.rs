//! Address translation client

use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{ChatCompletionRequest, ChatCompletionResponse, TranslationRequest};
use crate::core::prompt;
use crate::core::transport::{ChatTransport, HttpTransport};

/// Translates postal addresses between locale formats through a chat-completion model
#[derive(Clone)]
pub struct AddressTranslator {
    transport: Arc<dyn ChatTransport>,
    has_api_key: bool,
}

impl fmt::Debug for AddressTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressTranslator")
            .field("has_api_key", &self.has_api_key)
            .finish_non_exhaustive()
    }
}

impl AddressTranslator {
    /// Create a translator talking HTTP to the configured endpoint
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(&config, Arc::new(transport)))
    }

    /// Create a translator over an arbitrary transport
    pub fn with_transport(config: &TranslatorConfig, transport: Arc<dyn ChatTransport>) -> Self {
        Self {
            transport,
            has_api_key: config.has_api_key(),
        }
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        Self::new(TranslatorConfig::from_env()?)
    }

    /// Convert `address` from the `source_locale` format into the `target_locale` format
    pub async fn translate_address(
        &self,
        address: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> Result<String> {
        self.translate(&TranslationRequest::new(address, source_locale, target_locale))
            .await
    }

    /// Translate a single request
    ///
    /// Returns the trimmed content of the first response choice. Failures are
    /// logged and returned unchanged.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<String> {
        info!(
            "Sending address translation request: address={:?}, source_locale={}, target_locale={}, api_key={}",
            request.address,
            request.source_locale,
            request.target_locale,
            if self.has_api_key { "Present" } else { "Missing" }
        );

        let body = ChatCompletionRequest::new(prompt::build_messages(request));

        let result = self
            .transport
            .complete(&body)
            .await
            .and_then(extract_translation);

        if let Err(e) = &result {
            log_failure(e);
        }

        result
    }

    /// Translate every request concurrently, results in input order
    pub async fn translate_batch(&self, requests: Vec<TranslationRequest>) -> Vec<Result<String>> {
        let handles: Vec<_> = requests
            .into_iter()
            .map(|request| {
                let translator = self.clone();
                tokio::spawn(async move { translator.translate(&request).await })
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            let result = handle
                .await
                .unwrap_or_else(|e| Err(TranslationError::Internal(e.to_string())));
            results.push(result);
        }

        results
    }
}

fn extract_translation(response: ChatCompletionResponse) -> Result<String> {
    if let Some(usage) = &response.usage {
        debug!(
            "Token usage: prompt={}, completion={}, total={}",
            usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
        );
    }

    let content = response
        .first_content()
        .ok_or_else(|| TranslationError::MalformedResponse {
            message: "No choices[0].message.content in response".to_string(),
        })?;

    Ok(content.trim().to_string())
}

fn log_failure(err: &TranslationError) {
    match err {
        TranslationError::Remote {
            status,
            status_text,
            body,
        } => error!(
            "Address translation failed: status={}, status_text={}, body={}",
            status,
            status_text,
            body.as_deref().unwrap_or("<empty>")
        ),
        other => error!("Address translation failed ({}): {}", other.kind(), other),
    }
}
