pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::candidate::handlers as candidate;
use crate::grammar_client::handlers as grammar;
use crate::interview::handlers as interview;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Level 1: résumé scan
        .route("/api/scan_resume", post(resume::handle_scan_resume))
        .route(
            "/api/scan_resume/text",
            post(resume::handle_scan_resume_text),
        )
        // Levels 2–5: interview answers
        .route(
            "/api/get_level2_question",
            get(interview::handle_get_level2_question),
        )
        .route("/api/judge_level2", post(interview::handle_judge_level2))
        .route("/api/judge_level3", post(interview::handle_judge_level3))
        .route("/api/judge_level4", post(interview::handle_judge_level4))
        .route("/api/judge_level5", post(interview::handle_judge_level5))
        // Grammar + final tally
        .route("/api/grammar_check", post(grammar::handle_grammar_check))
        .route(
            "/api/candidates/score",
            post(candidate::handle_score_candidate),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::grammar_client::tests::StubChecker;
    use crate::interview::questions::QuestionBank;
    use crate::resume::scorer::KeywordResumeScorer;
    use crate::upstream::UpstreamPolicy;

    const BOUNDARY: &str = "hirequest-test-boundary";

    fn app_with(grammar: StubChecker, policy: UpstreamPolicy) -> Router {
        let config = Config {
            upstream_policy: policy,
            ..Config::default()
        };
        build_router(AppState {
            config,
            resume_scorer: Arc::new(KeywordResumeScorer::default()),
            grammar: Arc::new(grammar),
            questions: QuestionBank::default(),
        })
    }

    fn app() -> Router {
        app_with(StubChecker(Some(2)), UpstreamPolicy::Degrade)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart(field: &str, file_name: &str, content: &str) -> Request<Body> {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
             Content-Type: text/plain\r\n\r\n\
             {content}\r\n\
             --{BOUNDARY}--\r\n"
        );
        Request::post("/api/scan_resume")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::get("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "hirequest-api");
    }

    #[tokio::test]
    async fn test_scan_resume_text_empty_scores_zero() {
        let (status, body) = send(
            app(),
            post_json("/api/scan_resume/text", json!({ "resume_text": "" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 0);
        assert_eq!(body["char_class"], "Novice Recruiter");
        assert_eq!(body["scorer_backend"], "keyword");
    }

    #[tokio::test]
    async fn test_scan_resume_text_missing_field_scores_zero() {
        let (status, body) = send(app(), post_json("/api/scan_resume/text", json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 0);
        assert_eq!(body["char_class"], "Novice Recruiter");
    }

    #[tokio::test]
    async fn test_scan_resume_upload() {
        let resume = "jane@example.com 555-123-4567 Education Experience python sql";
        let (status, body) = send(app(), multipart("resume", "cv.txt", resume)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["score"].as_u64().unwrap() > 0);
        assert_eq!(body["xp"], body["score"].as_u64().unwrap() * 10);
    }

    #[tokio::test]
    async fn test_scan_resume_requires_file_field() {
        let (status, body) = send(app(), multipart("other", "cv.txt", "text")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "No file uploaded");
    }

    #[tokio::test]
    async fn test_scan_resume_rejects_empty_filename() {
        let (status, body) = send(app(), multipart("resume", "", "text")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "No file selected");
    }

    #[tokio::test]
    async fn test_get_level2_question_hides_keywords() {
        let request = Request::get("/api/get_level2_question")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["id"].as_u64().is_some());
        assert!(body.get("keywords").is_none());
    }

    #[tokio::test]
    async fn test_judge_level2_short_answer() {
        let (status, body) = send(
            app(),
            post_json("/api/judge_level2", json!({ "id": 1, "answer": "I would listen" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 10);
        assert_eq!(body["too_short"], true);
    }

    #[tokio::test]
    async fn test_judge_level2_unknown_question() {
        let (status, _) = send(
            app(),
            post_json("/api/judge_level2", json!({ "id": 99, "answer": "anything" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_judge_level3_blank_answer_is_rejected() {
        let (status, body) = send(
            app(),
            post_json("/api/judge_level3", json!({ "answer": "   " })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_grammar_check() {
        let (status, body) = send(
            app(),
            post_json("/api/grammar_check", json!({ "text": "Their is a error." })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["grammar_score"], 90);
        assert_eq!(body["degraded"], false);
    }

    #[tokio::test]
    async fn test_grammar_check_surfaces_upstream_failure() {
        let app = app_with(StubChecker(None), UpstreamPolicy::Surface);
        let (status, body) = send(
            app,
            post_json("/api/grammar_check", json!({ "text": "Some text." })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
    }

    #[tokio::test]
    async fn test_score_candidate() {
        let (status, body) = send(
            app(),
            post_json(
                "/api/candidates/score",
                json!({
                    "ats_score": 75,
                    "grammar_score": 85,
                    "answers": [
                        { "score": 90, "elapsed_seconds": 30 },
                        { "score": 90, "elapsed_seconds": 45 },
                        { "score": 90, "elapsed_seconds": 50 }
                    ]
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        // 75×0.25 + 85×0.25 + 90×0.5 = 85
        assert_eq!(body["total_score"], 85);
        assert_eq!(body["time_bonus"], true);
        assert_eq!(body["badges"].as_array().map(Vec::len), Some(4));
    }

    #[tokio::test]
    async fn test_score_candidate_rejects_out_of_range() {
        let (status, _) = send(
            app(),
            post_json("/api/candidates/score", json!({ "ats_score": 150 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
