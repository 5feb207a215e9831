// =============================================================================
// Next Frame Web - Netlify Forms Transport
// =============================================================================
// Table of Contents:
// 1. Transport
// 2. Request Building
// =============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use web_sys::{File, FormData};

use super::encoding::{url_encode, Encoding, URL_ENCODED};
use super::{SubmitError, Transport};
use crate::submission::{Submission, PHOTOS_FIELD};

// -----------------------------------------------------------------------------
// 1. Transport
// -----------------------------------------------------------------------------

/// POSTs submissions to the site's forms endpoint.
#[derive(Clone, Debug)]
pub struct NetlifyTransport {
    endpoint: String,
}

impl NetlifyTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl Transport<File> for NetlifyTransport {
    fn name(&self) -> &str {
        "netlify"
    }

    async fn send(&self, submission: &Submission<File>) -> Result<(), SubmitError> {
        let request = match Encoding::for_submission(submission) {
            Encoding::UrlEncoded => Request::post(&self.endpoint)
                .header("Content-Type", URL_ENCODED)
                .body(url_encode(&submission.record)),
            // No Content-Type header: the browser adds the multipart boundary.
            Encoding::Multipart => Request::post(&self.endpoint).body(multipart_body(submission)?),
        }
        .map_err(|e| SubmitError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(SubmitError::Rejected {
                status: response.status(),
            })
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Request Building
// -----------------------------------------------------------------------------

/// Record fields in order, then one `photos` part per file.
fn multipart_body(submission: &Submission<File>) -> Result<FormData, SubmitError> {
    let encode_err = |e: wasm_bindgen::JsValue| SubmitError::Encode(format!("{e:?}"));

    let form = FormData::new().map_err(encode_err)?;
    for (name, value) in submission.record.iter() {
        form.append_with_str(name, value).map_err(encode_err)?;
    }
    for file in &submission.attachments {
        form.append_with_blob_and_filename(PHOTOS_FIELD, file, &file.name())
            .map_err(encode_err)?;
    }
    Ok(form)
}
