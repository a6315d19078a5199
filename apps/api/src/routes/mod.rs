pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers as matching;
use crate::resume::handlers as resume;
use crate::state::AppState;
use crate::tools::handlers as tools;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/api/v1/resumes/validate", post(resume::handle_validate))
        .route("/api/v1/resumes/skills", post(resume::handle_extract_skills))
        .route("/api/v1/resumes/upload", post(resume::handle_upload))
        .route("/api/v1/analyze", post(resume::handle_analyze))
        // Matching API
        .route("/api/v1/jobs/best-match", post(matching::handle_best_match))
        .route(
            "/api/v1/jobs/alternatives",
            post(matching::handle_alternatives),
        )
        .route("/api/v1/skills/demand", post(matching::handle_skill_demand))
        // Tool API
        .route("/api/v1/tools", get(tools::handle_list_tools))
        .route("/api/v1/tools/:name", post(tools::handle_invoke_tool))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::tools::tests::sample_toolkit;

    fn app() -> Router {
        let config = Config::from_vars(|_| None).unwrap();
        build_router(AppState {
            toolkit: sample_toolkit(),
            config,
        })
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["jobs_loaded"], 3);
        assert_eq!(body["skill_extractor"], "vocabulary");
    }

    #[tokio::test]
    async fn test_validate_empty_resume_is_a_normal_response() {
        let (status, body) =
            send(post_json("/api/v1/resumes/validate", json!({"resume_text": ""}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], false);
    }

    #[tokio::test]
    async fn test_extract_skills() {
        let (status, body) = send(post_json(
            "/api/v1/resumes/skills",
            json!({"resume_text": "Software engineer with Python and Docker experience"}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["skills"], json!(["Python", "Docker"]));
    }

    #[tokio::test]
    async fn test_best_match_and_alternatives() {
        let (status, body) = send(post_json(
            "/api/v1/jobs/best-match",
            json!({"skills": ["react", "css"]}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["company_name"], "Globex");
        assert_eq!(body["salary"], "Not specified");

        let (_, body) = send(post_json(
            "/api/v1/jobs/alternatives",
            json!({"skills": ["cobol"]}),
        ))
        .await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_skill_demand() {
        let (status, body) = send(post_json(
            "/api/v1/skills/demand",
            json!({"skills": ["Python"]}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["Python"]["jobs_mentioning"], 1);
        assert_eq!(body["Python"]["percentage"], 33.3);
        assert_eq!(body["Python"]["demand_level"], "High");
    }

    #[tokio::test]
    async fn test_analyze() {
        let (status, body) = send(post_json(
            "/api/v1/analyze",
            json!({"resume_text": "Experience: data pipelines in Python and SQL. Skills: AWS."}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["best_match"]["company_name"], "Initech");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_tool_listing_and_invocation() {
        let (status, body) = send(Request::get("/api/v1/tools").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 6);
        assert_eq!(body[0]["name"], "validate_resume");

        let (status, body) = send(post_json(
            "/api/v1/tools/find_best_job_match",
            json!({"skills": ["python"]}),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["company_name"], "Initech");
    }

    #[tokio::test]
    async fn test_unknown_tool_is_404() {
        let (status, body) = send(post_json("/api/v1/tools/nope", json!({}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_bad_tool_arguments_are_400() {
        let (status, body) = send(post_json(
            "/api/v1/tools/get_skill_statistics",
            json!({"skills": "python"}),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    fn multipart_request(field: &str, file_name: &str, content: &str) -> Request<Body> {
        let boundary = "XBOUNDARYX";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
             Content-Type: text/plain\r\n\r\n\
             {content}\r\n\
             --{boundary}--\r\n"
        );
        Request::post("/api/v1/resumes/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_upload_text_resume() {
        let (status, body) = send(multipart_request(
            "file",
            "resume.txt",
            "Work experience: React and TypeScript development",
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["skills"], json!(["React", "Typescript"]));
    }

    #[tokio::test]
    async fn test_upload_without_file_part_is_400() {
        let (status, body) = send(multipart_request("attachment", "resume.txt", "Python")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
