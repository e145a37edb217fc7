use reqwest::multipart::{Form, Part};

use super::types::{SelectedFile, UploadError};

/// Where submissions go unless a caller overrides it.
pub const UPLOAD_ENDPOINT: &str = "http://localhost:8080/upload";

/// Performs one submission attempt: encode the selection, POST it, turn
/// the outcome into the lines the user sees.
pub struct Uploader {
    endpoint: String,
    client: reqwest::Client,
}

impl Default for Uploader {
    fn default() -> Self {
        Self::new(UPLOAD_ENDPOINT)
    }
}

impl Uploader {
    pub fn new(endpoint: impl Into<String>) -> Self {
        // No timeout: an attempt stays suspended until the server answers
        // or the connection drops.
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Runs a single attempt and returns the message list to display:
    /// one line per item on success, one fixed line otherwise.
    pub async fn submit(&self, files: &[SelectedFile], upload_dir: &str) -> Vec<String> {
        match self.perform(files, upload_dir).await {
            Ok(lines) => lines,
            Err(err) => {
                match &err {
                    UploadError::EmptySelection => {
                        log::debug!("submit called with empty selection")
                    }
                    UploadError::ServerRejected { status } => {
                        log::warn!("server rejected upload: {}", status)
                    }
                    UploadError::Transport(source) => {
                        log::warn!("upload transport failure: {}", source)
                    }
                }
                vec![err.to_string()]
            }
        }
    }

    async fn perform(
        &self,
        files: &[SelectedFile],
        upload_dir: &str,
    ) -> Result<Vec<String>, UploadError> {
        if files.is_empty() {
            return Err(UploadError::EmptySelection);
        }

        log::info!("uploading {} file(s) to {}", files.len(), self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(build_form(files, upload_dir))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploadError::ServerRejected { status });
        }

        let body = response.text().await?;
        // One message per line, untrimmed; an empty body still yields a
        // single empty message.
        Ok(body.split('\n').map(str::to_string).collect())
    }
}

/// One `file` part per selected file, in selection order, then the
/// destination directory as the trailing `uploadDir` text field.
fn build_form(files: &[SelectedFile], upload_dir: &str) -> Form {
    let mut form = Form::new();
    for file in files {
        form = form.part(
            "file",
            Part::bytes(file.data.clone()).file_name(file.name.clone()),
        );
    }
    form.text("uploadDir", upload_dir.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_files() -> Vec<SelectedFile> {
        vec![
            SelectedFile::new("a.txt", b"alpha".to_vec()),
            SelectedFile::new("b.txt", b"bravo".to_vec()),
        ]
    }

    async fn mock_upload_server(template: ResponseTemplate, expected_hits: u64) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload"))
            .respond_with(template)
            .expect(expected_hits)
            .mount(&server)
            .await;
        server
    }

    fn uploader_for(server: &MockServer) -> Uploader {
        Uploader::new(format!("{}/upload", server.uri()))
    }

    #[tokio::test]
    async fn empty_selection_short_circuits_without_network() {
        let server = mock_upload_server(ResponseTemplate::new(200), 0).await;
        let uploader = uploader_for(&server);

        let messages = uploader.submit(&[], "./uploads").await;

        assert_eq!(messages, vec!["Please select at least one file.".to_string()]);
        // expect(0) on the mock verifies no request arrived on drop
    }

    #[tokio::test]
    async fn success_body_becomes_one_message_per_line() {
        let template = ResponseTemplate::new(200)
            .set_body_string("a.txt uploaded\nb.txt uploaded");
        let server = mock_upload_server(template, 1).await;
        let uploader = uploader_for(&server);

        let messages = uploader.submit(&sample_files(), "./uploads").await;

        assert_eq!(
            messages,
            vec!["a.txt uploaded".to_string(), "b.txt uploaded".to_string()]
        );
    }

    #[tokio::test]
    async fn request_carries_file_parts_in_order_and_dir_last() {
        let server = mock_upload_server(ResponseTemplate::new(200), 1).await;
        let uploader = uploader_for(&server);

        uploader.submit(&sample_files(), "./incoming").await;

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let body = String::from_utf8_lossy(&requests[0].body).into_owned();

        assert_eq!(body.matches("name=\"file\"").count(), 2);
        assert_eq!(body.matches("name=\"uploadDir\"").count(), 1);
        assert!(body.contains("./incoming"));

        let first = body.find("filename=\"a.txt\"").unwrap();
        let second = body.find("filename=\"b.txt\"").unwrap();
        let dir = body.find("name=\"uploadDir\"").unwrap();
        assert!(first < second);
        assert!(second < dir);
    }

    #[tokio::test]
    async fn empty_directory_is_sent_verbatim() {
        let server = mock_upload_server(ResponseTemplate::new(200), 1).await;
        let uploader = uploader_for(&server);

        uploader.submit(&sample_files(), "").await;

        let requests = server.received_requests().await.unwrap();
        let body = String::from_utf8_lossy(&requests[0].body).into_owned();
        assert_eq!(body.matches("name=\"uploadDir\"").count(), 1);
    }

    #[tokio::test]
    async fn empty_success_body_yields_single_empty_message() {
        let server = mock_upload_server(ResponseTemplate::new(200), 1).await;
        let uploader = uploader_for(&server);

        let messages = uploader.submit(&sample_files(), "./uploads").await;

        assert_eq!(messages, vec![String::new()]);
    }

    #[tokio::test]
    async fn trailing_newline_keeps_trailing_empty_message() {
        let template = ResponseTemplate::new(200).set_body_string("done\n");
        let server = mock_upload_server(template, 1).await;
        let uploader = uploader_for(&server);

        let messages = uploader.submit(&sample_files(), "./uploads").await;

        assert_eq!(messages, vec!["done".to_string(), String::new()]);
    }

    #[tokio::test]
    async fn rejected_status_is_reported_without_detail() {
        let template = ResponseTemplate::new(404).set_body_string("no such endpoint");
        let server = mock_upload_server(template, 1).await;
        let uploader = uploader_for(&server);

        let messages = uploader.submit(&sample_files(), "./uploads").await;

        assert_eq!(messages, vec!["File upload failed.".to_string()]);
    }

    #[tokio::test]
    async fn connection_refused_is_a_transport_error() {
        // Bind to grab a free port, then drop the listener so nothing
        // answers there.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let uploader = Uploader::new(format!("http://{}/upload", addr));
        let messages = uploader.submit(&sample_files(), "./uploads").await;

        assert_eq!(messages, vec!["Error uploading file.".to_string()]);
    }

    #[tokio::test]
    async fn identical_submissions_produce_identical_messages() {
        let template = ResponseTemplate::new(200)
            .set_body_string("a.txt uploaded\nb.txt uploaded");
        let server = mock_upload_server(template, 2).await;
        let uploader = uploader_for(&server);

        let files = sample_files();
        let first = uploader.submit(&files, "./uploads").await;
        let second = uploader.submit(&files, "./uploads").await;

        assert_eq!(first, second);
    }
}
