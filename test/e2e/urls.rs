//! End-to-end permalink scenarios.
//!
//! Walks the same flows a browser does: follow a link built from an entity,
//! then load the resulting URL (and stale variants of it) and check where it
//! lands.
//!
//! ## Running
//!
//! ```bash
//! cargo test -p permalink-e2e --test urls
//! ```

use permalink_routes::{
    CatalogEntry, CollectionTarget, DatabaseTarget, EntityLookup, Resolution, Route, RouteCodec,
    RouteFamily, StaticLookup, ROOT_COLLECTION_PATH, USERS_COLLECTION_PATH,
};
use permalink_slug::{EntityRef, SlugCodec, SAVED_QUESTIONS_VIRTUAL_DB_ID};

const SAMPLE_DB_ID: i64 = 1;
const ORDERS_QUESTION_ID: i64 = 1;
const ORDERS_DASHBOARD_ID: i64 = 1;
const ADMIN_PERSONAL_COLLECTION_ID: i64 = 1;
const NORMAL_PERSONAL_COLLECTION_ID: i64 = 5;
const FIRST_COLLECTION_ID: i64 = 9;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

fn sample_instance() -> StaticLookup {
    let catalog = serde_json::json!([
        {"family": "database", "entity": {"kind": "entity", "id": SAMPLE_DB_ID, "name": "Sample Database"}},
        {"family": "question", "entity": {"kind": "entity", "id": ORDERS_QUESTION_ID, "name": "Orders"}},
        {"family": "dashboard", "entity": {"kind": "entity", "id": ORDERS_DASHBOARD_ID, "name": "Orders in a dashboard"}},
        {"family": "collection", "entity": {"kind": "entity", "id": FIRST_COLLECTION_ID, "name": "First collection"}},
        {"family": "collection", "entity": {"kind": "personal_collection", "id": ADMIN_PERSONAL_COLLECTION_ID, "first_name": "Bobby", "last_name": "Tables"}},
        {"family": "collection", "entity": {"kind": "personal_collection", "id": NORMAL_PERSONAL_COLLECTION_ID, "first_name": "Robert", "last_name": "Tableton"}},
    ]);
    let entries: Vec<CatalogEntry> = serde_json::from_value(catalog).unwrap();
    entries.into_iter().collect()
}

/// Build the link a list view renders, then load it.
fn follow(codec: &RouteCodec, lookup: &StaticLookup, family: RouteFamily, id: i64) -> String {
    let entity = lookup
        .lookup(family, id)
        .unwrap_or_else(|| panic!("{family} {id} missing from sample instance"));
    let path = codec.path(family, &entity);

    let resolution = codec.resolve(&path, lookup).unwrap();
    assert_eq!(resolution.redirect_to(), None, "{path} should be canonical");
    path
}

#[test]
fn browse_databases_slugifies_database_name() {
    init_tracing();
    let codec = RouteCodec::default();
    let path = follow(&codec, &sample_instance(), RouteFamily::Database, SAMPLE_DB_ID);
    assert_eq!(path, format!("/browse/databases/{SAMPLE_DB_ID}-sample-database"));
}

#[test]
fn saved_questions_database_opens_in_both_forms() {
    init_tracing();
    let codec = RouteCodec::default();
    let lookup = sample_instance();

    for url in [
        format!("/browse/databases/{SAVED_QUESTIONS_VIRTUAL_DB_ID}"),
        format!("/browse/databases/{SAVED_QUESTIONS_VIRTUAL_DB_ID}-saved-questions"),
    ] {
        let resolution = codec.resolve(&url, &lookup).unwrap();
        assert_eq!(
            resolution,
            Resolution::Canonical {
                route: Route::Database(DatabaseTarget::SavedQuestions)
            },
            "{url}"
        );
        assert_eq!(
            codec.slug_codec().decode(url.rsplit('/').next().unwrap()).unwrap(),
            SAVED_QUESTIONS_VIRTUAL_DB_ID
        );
    }
}

#[test]
fn dashboard_urls_are_slugified() {
    init_tracing();
    let codec = RouteCodec::default();
    let path = follow(&codec, &sample_instance(), RouteFamily::Dashboard, ORDERS_DASHBOARD_ID);
    assert_eq!(path, format!("/dashboard/{ORDERS_DASHBOARD_ID}-orders-in-a-dashboard"));
}

#[test]
fn question_urls_are_slugified() {
    init_tracing();
    let codec = RouteCodec::default();
    let path = follow(&codec, &sample_instance(), RouteFamily::Question, ORDERS_QUESTION_ID);
    assert_eq!(path, format!("/question/{ORDERS_QUESTION_ID}-orders"));
}

#[test]
fn collection_names_are_slugified() {
    init_tracing();
    let codec = RouteCodec::default();
    let path = follow(&codec, &sample_instance(), RouteFamily::Collection, FIRST_COLLECTION_ID);
    assert_eq!(path, format!("/collection/{FIRST_COLLECTION_ID}-first-collection"));
}

#[test]
fn personal_collection_names_are_slugified() {
    init_tracing();
    let codec = RouteCodec::default();
    let lookup = sample_instance();

    let admin = follow(&codec, &lookup, RouteFamily::Collection, ADMIN_PERSONAL_COLLECTION_ID);
    assert_eq!(
        admin,
        format!("/collection/{ADMIN_PERSONAL_COLLECTION_ID}-bobby-tables-s-personal-collection")
    );

    let normal = follow(&codec, &lookup, RouteFamily::Collection, NORMAL_PERSONAL_COLLECTION_ID);
    assert_eq!(
        normal,
        format!("/collection/{NORMAL_PERSONAL_COLLECTION_ID}-robert-tableton-s-personal-collection")
    );
}

#[test]
fn users_collections_page_is_not_slugified() {
    init_tracing();
    let codec = RouteCodec::default();
    let resolution = codec.resolve(USERS_COLLECTION_PATH, &StaticLookup::new()).unwrap();
    assert_eq!(
        resolution.route(),
        &Route::Collection(CollectionTarget::Users)
    );
    assert_eq!(resolution.redirect_to(), None);

    let root = codec.resolve(ROOT_COLLECTION_PATH, &StaticLookup::new()).unwrap();
    assert_eq!(root.route().entity_id(), None);
}

#[test]
fn stale_and_bare_urls_land_on_the_same_entity() {
    init_tracing();
    let codec = RouteCodec::default();
    let lookup = sample_instance();
    let canonical = format!("/dashboard/{ORDERS_DASHBOARD_ID}-orders-in-a-dashboard");

    for url in [
        format!("/dashboard/{ORDERS_DASHBOARD_ID}"),
        format!("/dashboard/{ORDERS_DASHBOARD_ID}-stale-old-name"),
        format!("/dashboard/{ORDERS_DASHBOARD_ID}-orders-in-a-dashboard-any-garbage-suffix"),
    ] {
        let resolution = codec.resolve(&url, &lookup).unwrap();
        assert_eq!(resolution.route(), &Route::Dashboard(ORDERS_DASHBOARD_ID), "{url}");
        assert_eq!(resolution.redirect_to(), Some(canonical.as_str()), "{url}");
    }
}

#[test]
fn renamed_entity_keeps_old_permalink() {
    init_tracing();
    let codec = RouteCodec::default();
    let old_link = codec.path(RouteFamily::Question, &EntityRef::entity(42, "Old revenue"));

    let mut lookup = StaticLookup::new();
    lookup.insert(RouteFamily::Question, EntityRef::entity(42, "Revenue by month"));

    let resolution = codec.resolve(&old_link, &lookup).unwrap();
    assert_eq!(resolution.redirect_to(), Some("/question/42-revenue-by-month"));
}

#[test]
fn configured_virtual_database_id() {
    init_tracing();
    let codec = RouteCodec::new(SlugCodec::new(permalink_slug::CodecConfig {
        saved_questions_db_id: 7,
    }));

    assert_eq!(codec.slug_codec().decode("7-saved-questions").unwrap(), 7);
    assert_eq!(codec.slug_codec().decode("7").unwrap(), 7);
    assert_eq!(
        codec.parse("/browse/databases/7").unwrap(),
        Route::Database(DatabaseTarget::SavedQuestions)
    );
}
