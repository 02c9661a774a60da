use reqwest::Client;
use serde::Serialize;
use tracing::info;

use super::ExportError;
use crate::generator::GeneratedItem;
use crate::links::Reference;
use crate::request::PostType;

/// Form fields posted to the spreadsheet webhook
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookPayload {
    #[serde(rename = "postData")]
    pub post_data: String,
    #[serde(rename = "sheetName")]
    pub sheet_name: String,
}

impl WebhookPayload {
    /// Social posts go out as a JSON string array. Statistics go out as
    /// `{text, link}` objects; items without a source get an empty link.
    pub fn build(post_type: PostType, items: &[GeneratedItem]) -> Result<Self, ExportError> {
        let post_data = match post_type {
            PostType::SocialMedia => {
                let texts: Vec<&str> = items.iter().map(|item| item.text.as_str()).collect();
                serde_json::to_string(&texts)?
            }
            PostType::Statistic => {
                let rows: Vec<Reference> = items
                    .iter()
                    .map(|item| {
                        item.reference.clone().unwrap_or_else(|| Reference {
                            display_text: item.text.replace('"', ""),
                            url: String::new(),
                        })
                    })
                    .collect();
                serde_json::to_string(&rows)?
            }
        };

        Ok(Self {
            post_data,
            sheet_name: post_type.label().to_string(),
        })
    }
}

pub struct SheetWebhook {
    http: Client,
    url: String,
}

impl SheetWebhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            url: url.into(),
        }
    }

    /// Post the items as a form to the webhook
    pub async fn send(&self, post_type: PostType, items: &[GeneratedItem]) -> Result<(), ExportError> {
        let payload = WebhookPayload::build(post_type, items)?;

        let response = self.http.post(&self.url).form(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ExportError::Webhook {
                status: status.as_u16(),
                body,
            });
        }

        info!(items = items.len(), sheet = %payload.sheet_name, "Exported to webhook");
        Ok(())
    }
}
