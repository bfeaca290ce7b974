//! Tests for the POI lifecycle service.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ports::{MockPoiRepository, PoiRepositoryError};
use crate::domain::{ErrorCode, PoiCategory};
use crate::test_support::{draft, fixture_clock, fixture_timestamp, inactive, poi};

fn poi_id(value: i64) -> PoiId {
    PoiId::new(value).expect("fixture id")
}

fn service(repo: MockPoiRepository) -> PoiCommandService<MockPoiRepository> {
    PoiCommandService::new(Arc::new(repo), fixture_clock())
}

#[rstest]
#[tokio::test]
async fn create_assigns_id_and_persists_record() {
    let mut repo = MockPoiRepository::new();
    repo.expect_next_id()
        .times(1)
        .return_once(|| Ok(poi_id(12)));
    repo.expect_save()
        .withf(|poi| poi.id().get() == 12 && poi.name() == "Warung Bu Ani")
        .times(1)
        .return_once(|_| Ok(()));

    let created = service(repo)
        .create(draft("Warung Bu Ani", PoiCategory::Kuliner, -6.2088, 106.8456))
        .await
        .expect("create succeeds");

    assert_eq!(created.id(), poi_id(12));
    assert_eq!(created.category(), PoiCategory::Kuliner);
    assert!(created.is_active());
    assert_eq!(created.created_at(), fixture_timestamp());
    assert_eq!(created.updated_at(), fixture_timestamp());
}

#[rstest]
#[case("  ", "name")]
#[case("", "name")]
#[tokio::test]
async fn create_rejects_invalid_draft_before_reserving_id(
    #[case] name: &str,
    #[case] field: &str,
) {
    let mut repo = MockPoiRepository::new();
    repo.expect_next_id().never();
    repo.expect_save().never();

    let error = service(repo)
        .create(draft(name, PoiCategory::Layanan, 0.0, 0.0))
        .await
        .expect_err("blank name rejected");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        error.details().and_then(|details| details.get("field")),
        Some(&serde_json::json!(field))
    );
}

#[rstest]
#[tokio::test]
async fn create_rejects_out_of_range_latitude() {
    let mut repo = MockPoiRepository::new();
    repo.expect_next_id().never();

    let error = service(repo)
        .create(draft("Pantai", PoiCategory::Wisata, 91.0, 0.0))
        .await
        .expect_err("latitude rejected");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        error.details().and_then(|details| details.get("field")),
        Some(&serde_json::json!("latitude"))
    );
}

#[rstest]
#[tokio::test]
async fn create_maps_connection_failure_to_unavailable() {
    let mut repo = MockPoiRepository::new();
    repo.expect_next_id()
        .times(1)
        .return_once(|| Err(PoiRepositoryError::connection("store offline")));

    let error = service(repo)
        .create(draft("Pasar", PoiCategory::Belanja, 0.0, 0.0))
        .await
        .expect_err("connection failure surfaces");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}

#[rstest]
#[tokio::test]
async fn update_applies_patch_and_refreshes_timestamp() {
    let existing = poi(3, PoiCategory::Kuliner, -6.2, 106.8);
    let mut repo = MockPoiRepository::new();
    repo.expect_find_by_id()
        .withf(|id| id.get() == 3)
        .times(1)
        .return_once(move |_| Ok(Some(existing)));
    repo.expect_save()
        .withf(|poi| poi.name() == "Renamed" && poi.rating() == Some(4.0))
        .times(1)
        .return_once(|_| Ok(()));
    let patch = PoiPatch {
        name: Some("Renamed".to_owned()),
        rating: Some(Some(4.0)),
        ..PoiPatch::default()
    };

    let updated = service(repo)
        .update(poi_id(3), patch)
        .await
        .expect("update succeeds");

    assert_eq!(updated.name(), "Renamed");
    assert_eq!(updated.category(), PoiCategory::Kuliner);
    assert_eq!(updated.updated_at(), fixture_timestamp());
}

#[rstest]
#[tokio::test]
async fn update_of_unknown_id_is_not_found() {
    let mut repo = MockPoiRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));
    repo.expect_save().never();

    let error = service(repo)
        .update(poi_id(999), PoiPatch::default())
        .await
        .expect_err("missing record");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "Point of Interest with ID 999 not found");
}

#[rstest]
#[tokio::test]
async fn update_rejects_rating_above_scale() {
    let existing = poi(3, PoiCategory::Kuliner, -6.2, 106.8);
    let mut repo = MockPoiRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(existing)));
    repo.expect_save().never();
    let patch = PoiPatch {
        rating: Some(Some(5.5)),
        ..PoiPatch::default()
    };

    let error = service(repo)
        .update(poi_id(3), patch)
        .await
        .expect_err("rating rejected");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[case(poi(8, PoiCategory::Wisata, 0.0, 0.0))]
#[case(inactive(&poi(8, PoiCategory::Wisata, 0.0, 0.0)))]
#[tokio::test]
async fn delete_soft_deletes_record(#[case] existing: Poi) {
    let mut repo = MockPoiRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(existing)));
    repo.expect_save()
        .withf(|poi| poi.id().get() == 8 && !poi.is_active())
        .times(1)
        .return_once(|_| Ok(()));

    service(repo)
        .delete(poi_id(8))
        .await
        .expect("delete succeeds");
}

#[rstest]
#[tokio::test]
async fn delete_of_unknown_id_is_not_found() {
    let mut repo = MockPoiRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

    let error = service(repo)
        .delete(poi_id(42))
        .await
        .expect_err("missing record");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn delete_maps_query_failure_to_internal() {
    let mut repo = MockPoiRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(|_| Err(PoiRepositoryError::query("bad statement")));

    let error = service(repo)
        .delete(poi_id(1))
        .await
        .expect_err("query failure surfaces");

    assert_eq!(error.code(), ErrorCode::InternalError);
}
