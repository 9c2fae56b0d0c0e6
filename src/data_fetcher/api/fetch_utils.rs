//! Generic page fetching with a courtesy delay and status code mapping

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Body of a successfully fetched page together with the URL it was served
/// from after redirects.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: String,
    pub body: String,
}

/// Fetches one page as text.
///
/// Sleeps for `delay` before issuing the request so consecutive calls stay
/// under the site's rate limit. Any non-200 status is mapped onto a specific
/// `AppError` variant; network failures become timeout or connection errors.
/// There are no retries: callers decide how to degrade.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - URL to fetch
/// * `delay` - Pre-request delay, zero to skip
#[instrument(skip(client))]
pub(super) async fn fetch_page(
    client: &Client,
    url: &str,
    delay: Duration,
) -> Result<FetchedPage, AppError> {
    if !delay.is_zero() {
        debug!("Waiting {delay:?} before request");
        tokio::time::sleep(delay).await;
    }

    info!("Fetching page: {url}");

    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else if e.is_connect() {
                AppError::network_connection(url, e.to_string())
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    let status = response.status();
    let final_url = response.url().to_string();
    debug!("Response status: {status} (final URL: {final_url})");

    if status.as_u16() != 200 {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let body = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    info!("Fetched {} bytes from {}", body.len(), final_url);

    Ok(FetchedPage {
        url: final_url,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn fetch_status(status: u16) -> Result<FetchedPage, AppError> {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(status).set_body_string("body"))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let url = format!("{}/page", mock_server.uri());
        fetch_page(&client, &url, Duration::ZERO).await
    }

    #[tokio::test]
    async fn test_fetch_page_success() {
        let page = fetch_status(200).await.unwrap();
        assert_eq!(page.body, "body");
        assert!(page.url.ends_with("/page"));
    }

    #[tokio::test]
    async fn test_fetch_page_maps_status_codes() {
        assert!(matches!(
            fetch_status(404).await,
            Err(AppError::ApiNotFound { .. })
        ));
        assert!(matches!(
            fetch_status(429).await,
            Err(AppError::ApiRateLimit { .. })
        ));
        assert!(matches!(
            fetch_status(403).await,
            Err(AppError::ApiClientError { status: 403, .. })
        ));
        assert!(matches!(
            fetch_status(503).await,
            Err(AppError::ApiServiceUnavailable { status: 503, .. })
        ));
        assert!(matches!(
            fetch_status(500).await,
            Err(AppError::ApiServerError { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_page_non_200_success_is_not_data() {
        let result = fetch_status(204).await;
        assert!(matches!(
            result,
            Err(AppError::ApiServerError { status: 204, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_page_connection_failure() {
        let client = create_test_http_client();
        let result = fetch_page(&client, "http://127.0.0.1:1/page", Duration::ZERO).await;
        let error = result.unwrap_err();
        assert!(error.is_upstream_unavailable(), "unexpected error: {error:?}");
    }
}
