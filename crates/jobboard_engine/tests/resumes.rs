use jobboard_engine::{
    BackendClient, ClientSettings, FailureKind, ResumeFile, ResumeStore, UploadRejection, PDF_MIME,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> BackendClient {
    BackendClient::new(ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    })
    .expect("client")
}

fn resume(mime_type: &str, size: usize) -> ResumeFile {
    ResumeFile {
        file_name: "cv.pdf".to_string(),
        mime_type: mime_type.to_string(),
        bytes: vec![b'%'; size],
    }
}

async fn upload_endpoint_never_called(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/v1/resume/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(0)
        .mount(server)
        .await;
}

#[tokio::test]
async fn list_returns_uploaded_resumes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/resume"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "resumes": [{
                "id": "r1",
                "originalName": "cv.pdf",
                "uploadedAt": "2026-10-10T08:00:00Z",
                "fileUrl": "https://files.example/r1.pdf"
            }]
        })))
        .mount(&server)
        .await;

    let resumes = ResumeStore::list(&client_for(&server)).await.expect("list ok");

    assert_eq!(resumes.len(), 1);
    assert_eq!(resumes[0].original_name, "cv.pdf");
    assert_eq!(resumes[0].file_url, "https://files.example/r1.pdf");
}

#[tokio::test]
async fn pdf_is_uploaded_as_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/resume/upload"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .upload(Some(&resume(PDF_MIME, 2048)))
        .await
        .expect("upload ok");
}

#[tokio::test]
async fn oversized_pdf_is_rejected_without_network_call() {
    let server = MockServer::start().await;
    upload_endpoint_never_called(&server).await;

    let err = client_for(&server)
        .upload(Some(&resume(PDF_MIME, 6 * 1024 * 1024)))
        .await
        .unwrap_err();

    assert_eq!(err.message, "File size should be under 5 MB!");
    assert!(matches!(
        err.kind,
        FailureKind::Validation(UploadRejection::TooLarge { .. })
    ));
}

#[tokio::test]
async fn non_pdf_is_rejected_without_network_call() {
    let server = MockServer::start().await;
    upload_endpoint_never_called(&server).await;

    let err = client_for(&server)
        .upload(Some(&resume("application/msword", 1024)))
        .await
        .unwrap_err();

    assert_eq!(err.message, "Only PDF files are allowed!");
}

#[tokio::test]
async fn missing_file_is_rejected_without_network_call() {
    let server = MockServer::start().await;
    upload_endpoint_never_called(&server).await;

    let err = client_for(&server).upload(None).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Validation(UploadRejection::NoFile));
    assert_eq!(err.message, "Please select a PDF resume first!");
}

#[tokio::test]
async fn server_side_upload_failure_is_a_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/resume/upload"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "success": false })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .upload(Some(&resume(PDF_MIME, 10)))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Rejected { message: None });
}
