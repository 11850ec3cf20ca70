use wf_core::{Error, ItineraryEditor};
use wf_itinerary::{Currency, RecommendationCategory};

use chrono::NaiveDate;
use reqwest::StatusCode;
use tracing_test::traced_test;
use wf_api::{Recommendations, RecommendationItem};

mod common;

use common::{guide, signed_in, FakeBackend};

fn today() -> NaiveDate {
	NaiveDate::from_ymd_opt(2030, 5, 1).unwrap()
}

fn filled_editor() -> ItineraryEditor {
	let mut editor = ItineraryEditor::new();
	let draft = editor.draft_mut();
	draft.set_title("Spring in Kyoto");
	draft.set_destination("Kyoto");
	draft.set_duration(2);
	editor
}

#[tokio::test]
#[traced_test]
async fn validation_blocks_submission() {
	let backend = FakeBackend::new();
	let mut session = signed_in("u1", "ada");
	let mut editor = ItineraryEditor::new();
	editor.draft_mut().set_destination("Paris");

	let err = editor.submit(&backend, &mut session, today()).await.unwrap_err();

	assert!(matches!(err, Error::Validation(_)));
	assert_eq!(editor.error(), Some("Please fill in title and destination"));
	assert!(backend.calls().is_empty());
	assert!(!editor.is_submitting());
}

#[tokio::test]
#[traced_test]
async fn past_start_date_is_rejected_before_any_request() {
	let backend = FakeBackend::new();
	let mut session = signed_in("u1", "ada");
	let mut editor = filled_editor();
	editor
		.draft_mut()
		.set_start_date(NaiveDate::from_ymd_opt(2030, 4, 30));

	editor.submit(&backend, &mut session, today()).await.unwrap_err();

	assert_eq!(
		editor.error(),
		Some("Start date must be today or a future date")
	);
	assert_eq!(backend.count("create_itinerary"), 0);
}

#[tokio::test]
#[traced_test]
async fn successful_create_sends_payload_and_resets_draft() {
	let backend = FakeBackend::new();
	let mut session = signed_in("u1", "ada");
	let mut editor = filled_editor();
	editor.draft_mut().set_start_date(Some(today()));
	editor.draft_mut().set_budget_amount("");
	editor.draft_mut().set_currency(Currency::EUR);

	let created = editor.submit(&backend, &mut session, today()).await.unwrap();

	assert_eq!(created.id, "it-new");
	assert_eq!(backend.calls(), vec!["create_itinerary Spring in Kyoto"]);

	let payload = backend.payloads.lock().unwrap().pop().unwrap();
	assert_eq!(payload.duration_days, 2);
	assert_eq!(payload.start_date, Some(today()));
	assert_eq!(payload.end_date, None);
	assert!(payload.budget.is_none());

	assert_eq!(editor.draft().title(), "");
	assert_eq!(editor.draft().days().len(), 1);
	assert_eq!(editor.error(), None);
}

#[tokio::test]
#[traced_test]
async fn server_failure_keeps_draft_and_message() {
	let backend = FakeBackend::new();
	backend.fail(
		"create_itinerary",
		StatusCode::BAD_REQUEST,
		Some("Destination is not supported"),
	);
	let mut session = signed_in("u1", "ada");
	let mut editor = filled_editor();

	editor.submit(&backend, &mut session, today()).await.unwrap_err();

	assert_eq!(editor.error(), Some("Destination is not supported"));
	assert_eq!(editor.draft().title(), "Spring in Kyoto");
	assert_eq!(editor.draft().days().len(), 2);
	assert!(!editor.is_submitting());

	// no server message, page fallback
	backend.fail("create_itinerary", StatusCode::BAD_GATEWAY, None);
	let mut editor = filled_editor();
	let err = editor.submit(&backend, &mut session, today()).await.unwrap_err();
	assert!(matches!(err, Error::Api(_)));
	assert_eq!(err.to_string(), "Bad Gateway");
	assert_eq!(editor.error(), Some("Error creating itinerary"));
}

#[tokio::test]
#[traced_test]
async fn expired_token_signs_out() {
	let backend = FakeBackend::new();
	backend.fail("create_itinerary", StatusCode::UNAUTHORIZED, Some("Token expired"));
	let mut session = signed_in("u1", "ada");
	let mut editor = filled_editor();

	editor.submit(&backend, &mut session, today()).await.unwrap_err();

	assert!(!session.is_authenticated());
	assert_eq!(editor.draft().destination(), "Kyoto");
}

#[tokio::test]
#[traced_test]
async fn editing_updates_the_stored_itinerary() {
	let backend = FakeBackend::new();
	let mut session = signed_in("u1", "ada");
	let mut editor = filled_editor();
	let stored = editor.submit(&backend, &mut session, today()).await.unwrap();

	let mut editor = ItineraryEditor::edit(stored);
	assert!(editor.is_editing());
	assert_eq!(editor.draft().days().len(), 2);
	editor.draft_mut().add_day();

	editor.submit(&backend, &mut session, today()).await.unwrap();

	assert_eq!(backend.count("update_itinerary"), 1);
	assert_eq!(backend.payloads.lock().unwrap().last().unwrap().duration_days, 3);
}

#[tokio::test]
#[traced_test]
async fn update_failure_uses_update_fallback() {
	let backend = FakeBackend::new();
	let mut session = signed_in("u1", "ada");
	let stored = filled_editor()
		.submit(&backend, &mut session, today())
		.await
		.unwrap();
	backend.fail("update_itinerary", StatusCode::INTERNAL_SERVER_ERROR, Some(""));

	let mut editor = ItineraryEditor::edit(stored);
	editor.submit(&backend, &mut session, today()).await.unwrap_err();

	// an empty server message counts as none
	assert_eq!(editor.error(), Some("Error updating itinerary"));

	backend.fail("update_itinerary", StatusCode::CONFLICT, Some("Itinerary was deleted"));
	editor.submit(&backend, &mut session, today()).await.unwrap_err();
	assert_eq!(editor.error(), Some("Itinerary was deleted"));
}

#[tokio::test]
#[traced_test]
async fn guide_selection_drives_destination_and_imports() {
	let mut kyoto = guide("g1", "Kyoto", "Kyoto");
	kyoto.recommendations = Recommendations {
		dining: vec![RecommendationItem {
			name: "Nishiki Market".to_string(),
			description: "Street food".to_string(),
			..Default::default()
		}],
		..Default::default()
	};

	let backend = FakeBackend::new();
	*backend.guides.lock().unwrap() = vec![guide("g0", "Osaka", "Osaka"), kyoto];
	let session = signed_in("u1", "ada");

	let mut editor = ItineraryEditor::new();
	editor.load_guides(&backend, &session).await;
	assert_eq!(editor.guides().len(), 2);

	editor.select_guide(Some("g1"));
	assert_eq!(editor.draft().destination(), "Kyoto");
	assert!(editor
		.recommendations(RecommendationCategory::Lodging)
		.is_empty());

	let dining = editor.recommendations(RecommendationCategory::Dining);
	assert_eq!(dining.len(), 1);

	editor.draft_mut().set_duration(2);
	assert!(!editor.import_recommendation(&dining[0], 0));
	assert!(!editor.import_recommendation(&dining[0], 3));
	assert!(editor.import_recommendation(&dining[0], 2));

	let items = editor.draft().days()[1].items();
	assert_eq!(items.len(), 1);
	assert_eq!(items[0].activity, "Nishiki Market");
	assert_eq!(items[0].location, "Kyoto");
	assert_eq!(items[0].notes, "Dining: Street food");

	editor.select_guide(None);
	assert_eq!(editor.draft().destination(), "");
	assert!(editor.selected_guide().is_none());
}

#[tokio::test]
#[traced_test]
async fn failed_guide_load_leaves_picker_empty() {
	let backend = FakeBackend::new();
	backend.fail("list_guides", StatusCode::SERVICE_UNAVAILABLE, None);

	let mut editor = ItineraryEditor::new();
	editor.load_guides(&backend, &signed_in("u1", "ada")).await;

	assert!(editor.guides().is_empty());
	assert_eq!(editor.error(), None);
	assert!(logs_contain("Failed to fetch guides"));
}

#[test]
fn rejected_end_date_is_reported_inline() {
	let mut editor = filled_editor();
	let start = NaiveDate::from_ymd_opt(2030, 6, 10).unwrap();
	editor.draft_mut().set_start_date(Some(start));

	editor.set_end_date(NaiveDate::from_ymd_opt(2030, 6, 9));
	assert_eq!(
		editor.error(),
		Some("End date must be same or after start date")
	);
	assert_eq!(editor.draft().end_date(), None);

	editor.set_end_date(Some(start));
	assert_eq!(editor.error(), None);
	assert_eq!(editor.draft().end_date(), Some(start));
}

#[tokio::test]
#[traced_test]
async fn second_submit_is_refused_while_one_is_in_flight() {
	let backend = FakeBackend::new();
	let mut session = signed_in("u1", "ada");
	let mut editor = filled_editor();

	let flag = editor.submitting_flag();
	flag.store(true, std::sync::atomic::Ordering::Release);

	let err = editor.submit(&backend, &mut session, today()).await.unwrap_err();
	assert!(matches!(err, Error::SubmitInFlight));
	assert_eq!(backend.count("create_itinerary"), 0);

	flag.store(false, std::sync::atomic::Ordering::Release);
	editor.submit(&backend, &mut session, today()).await.unwrap();
	assert!(!flag.load(std::sync::atomic::Ordering::Acquire));
}
