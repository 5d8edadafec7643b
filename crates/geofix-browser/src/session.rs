use crate::{Error, Result};
use chromiumoxide::Page;
use chromiumoxide::browser::Browser;
use futures::StreamExt;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_RETRY_DELAY: Duration = Duration::from_millis(500);
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// A CDP session against one page of a launched Chrome instance.
pub struct PageSession {
    browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
}

impl PageSession {
    /// Connect to Chrome's debugging endpoint and adopt its initial page.
    pub async fn connect(debugging_port: u16) -> Result<Self> {
        let endpoint = format!("http://localhost:{}", debugging_port);
        tracing::info!("Connecting to Chrome on port {}", debugging_port);

        // Chrome may not have opened its debugging port yet
        let (browser, mut handler) = {
            let mut retries = CONNECT_ATTEMPTS;
            loop {
                tracing::debug!("Attempting CDP connection to {}...", endpoint);
                match Browser::connect(&endpoint).await {
                    Ok(result) => {
                        tracing::info!("CDP connection established");
                        break result;
                    }
                    Err(e) => {
                        retries -= 1;
                        if retries == 0 {
                            return Err(Error::Cdp(format!(
                                "Failed to connect to Chrome after {} attempts: {}",
                                CONNECT_ATTEMPTS, e
                            )));
                        }
                        tracing::info!("CDP connection attempt failed, retrying... ({} left)", retries);
                        tokio::time::sleep(CONNECT_RETRY_DELAY).await;
                    }
                }
            }
        };

        // The handler stream must be driven for any CDP command to complete
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("CDP handler event error (continuing): {}", e);
                }
            }
        });

        // Give Chrome a moment to create its initial target
        tokio::time::sleep(Duration::from_millis(500)).await;

        let page = if let Some(page) = browser.pages().await?.first() {
            tracing::debug!("Adopting Chrome's initial page");
            page.clone()
        } else {
            tracing::debug!("No initial page, opening one");
            browser.new_page("about:blank").await?
        };

        Ok(Self {
            browser,
            page,
            handler_task,
        })
    }

    pub async fn navigate(&self, url: &str) -> Result<()> {
        tracing::info!("Loading {}", url);
        self.page
            .goto(url)
            .await
            .map_err(|e| Error::Page(format!("Navigation to '{}' failed: {}", url, e)))?;
        Ok(())
    }

    /// Poll the element's text until it is nonempty or `timeout` expires.
    ///
    /// Returns the trimmed text, or an empty string once the bound
    /// expires. The caller cannot tell a denied or timed-out geolocation
    /// request apart from a callback that never fired; the capture page
    /// reports all of them as empty text.
    pub async fn wait_for_text(&self, selector: &str, timeout: Duration) -> Result<String> {
        let start = Instant::now();

        loop {
            if let Ok(element) = self.page.find_element(selector).await {
                match element.inner_text().await {
                    Ok(Some(text)) if !text.trim().is_empty() => {
                        tracing::debug!(
                            "Element '{}' populated after {}ms",
                            selector,
                            start.elapsed().as_millis()
                        );
                        return Ok(text.trim().to_string());
                    }
                    Ok(_) => {}
                    Err(e) => {
                        return Err(Error::Page(format!(
                            "Failed to read text of '{}': {}",
                            selector, e
                        )));
                    }
                }
            }

            if start.elapsed() >= timeout {
                tracing::info!(
                    "Element '{}' still empty after {}ms, giving up",
                    selector,
                    timeout.as_millis()
                );
                return Ok(String::new());
            }

            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Close the browser and stop the CDP handler task.
    pub async fn shutdown(mut self) {
        if let Err(e) = self.browser.close().await {
            tracing::warn!("Error closing browser: {}", e);
        }
        self.handler_task.abort();
    }
}

// Note: exercising PageSession requires a running Chrome instance; the
// capture path is covered by the CLI integration tests.
