//! Integration specifications for the humanize pipeline and its HTTP surface.
//!
//! Scenarios run end-to-end through the public service facade and router so
//! fallback tagging, history persistence, and response shapes are validated
//! without reaching into private modules.

mod common {
    use std::sync::{Arc, Mutex};

    use textify::workflows::humanize::{
        DetectionGateway, DetectionReport, EntryId, GatewayError, HistoryEntry, HistoryError,
        HistoryRepository, HumanizeService, RewriteGateway, RewriteOutcome, Tone, ToneTransformer,
    };

    #[derive(Default, Clone)]
    pub(super) struct MemoryHistory {
        entries: Arc<Mutex<Vec<HistoryEntry>>>,
    }

    impl HistoryRepository for MemoryHistory {
        fn insert(&self, entry: HistoryEntry) -> Result<HistoryEntry, HistoryError> {
            let mut guard = self.entries.lock().expect("lock");
            if guard.iter().any(|existing| existing.id == entry.id) {
                return Err(HistoryError::Conflict);
            }
            guard.insert(0, entry.clone());
            Ok(entry)
        }

        fn fetch(&self, id: &EntryId) -> Result<Option<HistoryEntry>, HistoryError> {
            let guard = self.entries.lock().expect("lock");
            Ok(guard.iter().find(|entry| &entry.id == id).cloned())
        }

        fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
            Ok(self.entries.lock().expect("lock").clone())
        }

        fn toggle_favorite(&self, id: &EntryId) -> Result<HistoryEntry, HistoryError> {
            let mut guard = self.entries.lock().expect("lock");
            let entry = guard
                .iter_mut()
                .find(|entry| &entry.id == id)
                .ok_or(HistoryError::NotFound)?;
            entry.is_favorite = !entry.is_favorite;
            Ok(entry.clone())
        }

        fn delete(&self, id: &EntryId) -> Result<(), HistoryError> {
            let mut guard = self.entries.lock().expect("lock");
            let before = guard.len();
            guard.retain(|entry| &entry.id != id);
            if guard.len() == before {
                return Err(HistoryError::NotFound);
            }
            Ok(())
        }
    }

    pub(super) struct DownRewrite;

    impl RewriteGateway for DownRewrite {
        fn rewrite(
            &self,
            _text: &str,
            _tone: Option<Tone>,
        ) -> Result<RewriteOutcome, GatewayError> {
            Err(GatewayError::Transport("dns failure".to_string()))
        }
    }

    pub(super) struct DownDetection;

    impl DetectionGateway for DownDetection {
        fn detect(&self, _text: &str) -> Result<DetectionReport, GatewayError> {
            Err(GatewayError::Transport("dns failure".to_string()))
        }
    }

    pub(super) fn build_service(
        seed: u64,
    ) -> (Arc<HumanizeService<MemoryHistory>>, Arc<MemoryHistory>) {
        let repository = Arc::new(MemoryHistory::default());
        let service = Arc::new(HumanizeService::with_transformer(
            ToneTransformer::seeded(seed),
            repository.clone(),
            Box::new(DownRewrite),
            Box::new(DownDetection),
        ));
        (service, repository)
    }
}

mod pipeline {
    use super::common::*;
    use textify::workflows::humanize::{HistoryRepository, HumanizeRequest, RewriteSource};

    #[test]
    fn offline_humanize_records_tagged_history() {
        let (service, repository) = build_service(19);

        let outcome = service
            .humanize(HumanizeRequest {
                text: "I can't believe this is good.".to_string(),
                tone: "formal".to_string(),
            })
            .expect("humanize succeeds");

        assert_eq!(outcome.result.source, RewriteSource::Engine);
        // The normalizer expanded the contraction before the table pass.
        assert!(outcome.result.humanized_text.contains("cannot"));
        assert!(!outcome.result.humanized_text.to_lowercase().contains("good"));

        let stored = repository.list().expect("history lists");
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].tone, "formal");
        assert_eq!(stored[0].source, RewriteSource::Engine);
        assert!(!stored[0].is_favorite);
    }

    #[test]
    fn history_lists_newest_first() {
        let (service, _) = build_service(27);

        for text in ["first entry text", "second entry text", "third entry text"] {
            service
                .humanize(HumanizeRequest {
                    text: text.to_string(),
                    tone: "concise".to_string(),
                })
                .expect("humanize succeeds");
        }

        let entries = service.history().expect("history lists");
        assert_eq!(entries.len(), 3);
        assert!(entries[0].original_text.starts_with("third"));
        assert!(entries[2].original_text.starts_with("first"));
    }

    #[test]
    fn every_tone_terminates_on_arbitrary_input() {
        let (service, _) = build_service(5);
        let inputs = [
            "",
            " ",
            "word",
            "A very long sentence that keeps going and going with many words to trim down.",
            "Unicode touché naïve — fine.",
        ];

        for tone in ["formal", "friendly", "concise", "persuasive", "creative", "unknown"] {
            for input in inputs {
                let result = service.humanize(textify::workflows::humanize::HumanizeRequest {
                    text: input.to_string(),
                    tone: tone.to_string(),
                });
                if input.trim().is_empty() {
                    assert!(result.is_err(), "blank input accepted for {tone}");
                } else {
                    result.unwrap_or_else(|err| panic!("{tone} failed on {input:?}: {err}"));
                }
            }
        }
    }
}

mod routing {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use textify::workflows::humanize::humanize_router;
    use tower::ServiceExt;

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    #[tokio::test]
    async fn post_humanize_returns_fallback_payload() {
        let (service, _) = build_service(33);
        let router = humanize_router(service);

        let response = router
            .oneshot(json_request(
                "POST",
                "/api/v1/humanize",
                json!({ "text": "This is good.", "tone": "formal" }),
            ))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");

        assert_eq!(payload.get("source"), Some(&json!("engine")));
        assert_eq!(payload.get("tone"), Some(&json!("formal")));
        let humanized = payload
            .get("humanizedText")
            .and_then(Value::as_str)
            .expect("humanized text present");
        assert!(!humanized.to_lowercase().contains("good"));
        let level = payload
            .get("plagiarismLevel")
            .and_then(Value::as_u64)
            .expect("level present");
        assert!((1..=9).contains(&level));
        assert!(payload.get("stats").is_some());
    }

    #[tokio::test]
    async fn post_humanize_rejects_blank_text() {
        let (service, _) = build_service(2);
        let router = humanize_router(service);

        let response = router
            .oneshot(json_request(
                "POST",
                "/api/v1/humanize",
                json!({ "text": "   ", "tone": "formal" }),
            ))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn post_originality_uses_heuristic_when_detector_is_down() {
        let (service, _) = build_service(2);
        let router = humanize_router(service);

        let response = router
            .oneshot(json_request(
                "POST",
                "/api/v1/originality",
                json!({ "text": "Plain short text." }),
            ))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(payload.get("plagiarismLevel"), Some(&json!(1)));
        assert_eq!(payload.get("source"), Some(&json!("heuristic")));
        assert_eq!(
            payload.get("plagiarizedSections"),
            Some(&json!([]))
        );
    }

    #[tokio::test]
    async fn get_tones_lists_the_five_styles() {
        let (service, _) = build_service(2);
        let router = humanize_router(service);

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/tones")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        let tones = payload
            .get("tones")
            .and_then(Value::as_array)
            .expect("tones array");
        assert_eq!(tones.len(), 5);
        assert_eq!(tones[0].get("value"), Some(&json!("formal")));
    }

    #[tokio::test]
    async fn history_round_trip_over_http() {
        let (service, _) = build_service(44);
        let router = humanize_router(service);

        let created = router
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/humanize",
                json!({ "text": "Keep this around for later.", "tone": "friendly" }),
            ))
            .await
            .expect("router dispatch");
        assert_eq!(created.status(), StatusCode::OK);
        let body = to_bytes(created.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let created_payload: Value = serde_json::from_slice(&body).expect("json");
        let id = created_payload
            .get("id")
            .and_then(Value::as_str)
            .expect("id present")
            .to_string();

        let listed = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/history")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(listed.status(), StatusCode::OK);
        let body = to_bytes(listed.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let entries: Value = serde_json::from_slice(&body).expect("json");
        let entries = entries.as_array().expect("array");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].get("id"), Some(&json!(id.clone())));
        assert_eq!(entries[0].get("isFavorite"), Some(&json!(false)));

        let favorited = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/v1/history/{id}/favorite"))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(favorited.status(), StatusCode::OK);
        let body = to_bytes(favorited.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let favorited_payload: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(favorited_payload.get("isFavorite"), Some(&json!(true)));

        let deleted = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/v1/history/{id}"))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

        let missing = router
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/v1/history/{id}"))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }
}
