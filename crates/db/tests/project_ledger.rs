//! Integration tests for project CRUD and the financial save rules.
//!
//! Exercises the repository layer against a real database:
//! - Defaults applied on create
//! - Clamping and auto-completion on every write path
//! - Patch semantics of update
//! - Status filtering and ordering of list

use givehub_core::project::{STATUS_ACTIVE, STATUS_COMPLETED, STATUS_PENDING};
use givehub_db::models::project::{CreateProject, ProjectListParams, UpdateProject};
use givehub_db::repositories::ProjectRepo;
use rust_decimal::Decimal;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

fn new_project(name: &str, target: &str) -> CreateProject {
    CreateProject {
        name: name.to_string(),
        description: "A worthy cause".to_string(),
        target_amount: Some(dec(target)),
        deadline: Some(chrono::Utc::now() + chrono::Duration::days(30)),
        status: None,
        image_url: None,
    }
}

// ---------------------------------------------------------------------------
// Test: Defaults on create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_defaults_to_active_with_nothing_collected(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Clean Water", "500"))
        .await
        .unwrap();
    assert_eq!(project.status, STATUS_ACTIVE);
    assert_eq!(project.current_amount, Decimal::ZERO);
    assert_eq!(project.target_amount, dec("500"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_without_target_completes_immediately(pool: PgPool) {
    // Zero collected meets a zero target, so the save rules fire on insert.
    let input = CreateProject {
        target_amount: None,
        ..new_project("Targetless", "0")
    };
    let project = ProjectRepo::create(&pool, &input).await.unwrap();
    assert_eq!(project.target_amount, Decimal::ZERO);
    assert_eq!(project.status, STATUS_COMPLETED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_respects_explicit_pending_status(pool: PgPool) {
    let input = CreateProject {
        status: Some(STATUS_PENDING.to_string()),
        ..new_project("Under Review", "0")
    };
    let project = ProjectRepo::create(&pool, &input).await.unwrap();
    assert_eq!(project.status, STATUS_PENDING);
}

// ---------------------------------------------------------------------------
// Test: Save rules on update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_update_preserves_collected_amount(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Steady", "500"))
        .await
        .unwrap();
    ProjectRepo::save_collected(&pool, project.id, dec("450"))
        .await
        .unwrap()
        .unwrap();

    let patch = UpdateProject {
        name: Some("Steady II".to_string()),
        ..Default::default()
    };
    let updated = ProjectRepo::update(&pool, project.id, &patch)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.current_amount, dec("450"));
    assert_eq!(updated.status, STATUS_ACTIVE);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_reaching_target_never_advances_pending_project(pool: PgPool) {
    let input = CreateProject {
        status: Some(STATUS_PENDING.to_string()),
        ..new_project("Still Pending", "100")
    };
    let project = ProjectRepo::create(&pool, &input).await.unwrap();

    let updated = ProjectRepo::save_collected(&pool, project.id, dec("100"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, STATUS_PENDING);
    assert_eq!(updated.current_amount, dec("100"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_patches_only_provided_fields(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Patchwork", "500"))
        .await
        .unwrap();

    let patch = UpdateProject {
        name: Some("Patchwork II".to_string()),
        ..Default::default()
    };
    let updated = ProjectRepo::update(&pool, project.id, &patch)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Patchwork II");
    assert_eq!(updated.description, project.description);
    assert_eq!(updated.target_amount, project.target_amount);
    assert_eq!(updated.deadline, project.deadline);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_project_returns_none(pool: PgPool) {
    let patch = UpdateProject {
        name: Some("Ghost".to_string()),
        ..Default::default()
    };
    let updated = ProjectRepo::update(&pool, 999_999, &patch).await.unwrap();
    assert!(updated.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_lowering_target_clamps_existing_collected(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Shrinking", "1000"))
        .await
        .unwrap();
    ProjectRepo::save_collected(&pool, project.id, dec("600"))
        .await
        .unwrap()
        .unwrap();

    let patch = UpdateProject {
        target_amount: Some(dec("400")),
        ..Default::default()
    };
    let updated = ProjectRepo::update(&pool, project.id, &patch)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.target_amount, dec("400"));
    assert_eq!(updated.current_amount, dec("400"));
    assert_eq!(updated.status, STATUS_COMPLETED);
}

// ---------------------------------------------------------------------------
// Test: save_collected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_save_collected_applies_save_rules(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Recorder", "500"))
        .await
        .unwrap();

    let updated = ProjectRepo::save_collected(&pool, project.id, dec("450"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.current_amount, dec("450"));
    assert_eq!(updated.status, STATUS_ACTIVE);

    let updated = ProjectRepo::save_collected(&pool, project.id, dec("620"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.current_amount, dec("500"));
    assert_eq!(updated.status, STATUS_COMPLETED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_save_collected_missing_project_returns_none(pool: PgPool) {
    let updated = ProjectRepo::save_collected(&pool, 999_999, dec("10"))
        .await
        .unwrap();
    assert!(updated.is_none());
}

// ---------------------------------------------------------------------------
// Test: List and count
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_list_filters_by_status_and_orders_newest_first(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("First", "100"))
        .await
        .unwrap();
    ProjectRepo::create(&pool, &new_project("Second", "100"))
        .await
        .unwrap();
    let pending = CreateProject {
        status: Some(STATUS_PENDING.to_string()),
        ..new_project("Third", "100")
    };
    ProjectRepo::create(&pool, &pending).await.unwrap();

    let all = ProjectRepo::list(&pool, &ProjectListParams::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].name, "Third");

    let active_only = ProjectRepo::list(
        &pool,
        &ProjectListParams {
            status: Some(STATUS_ACTIVE.to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(active_only.len(), 2);
    assert!(active_only.iter().all(|p| p.status == STATUS_ACTIVE));

    let by_status = ProjectRepo::list_by_status(&pool, STATUS_ACTIVE).await.unwrap();
    assert_eq!(by_status.len(), 2);
    assert_eq!(by_status[0].name, "Second");

    assert_eq!(ProjectRepo::count_all(&pool).await.unwrap(), 3);
    assert_eq!(
        ProjectRepo::count_by_status(&pool, STATUS_PENDING).await.unwrap(),
        1
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_searches_name_and_description(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("Clean Water", "100"))
        .await
        .unwrap();
    let mut described = new_project("Second", "100");
    described.description = "Fresh water wells".to_string();
    ProjectRepo::create(&pool, &described).await.unwrap();
    ProjectRepo::create(&pool, &new_project("School Meals", "100"))
        .await
        .unwrap();

    let params = ProjectListParams {
        q: Some("water".to_string()),
        ..Default::default()
    };
    let matches = ProjectRepo::list(&pool, &params).await.unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(ProjectRepo::count(&pool, &params).await.unwrap(), 2);

    let all = ProjectRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].name, "School Meals");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_pagination(pool: PgPool) {
    for i in 0..5 {
        ProjectRepo::create(&pool, &new_project(&format!("Project {i}"), "100"))
            .await
            .unwrap();
    }

    let page = ProjectRepo::list(
        &pool,
        &ProjectListParams {
            limit: Some(2),
            offset: Some(2),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].name, "Project 2");
    assert_eq!(page[1].name, "Project 1");
}

// ---------------------------------------------------------------------------
// Test: Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_removes_row(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Doomed", "100"))
        .await
        .unwrap();

    assert!(ProjectRepo::delete(&pool, project.id).await.unwrap());
    assert!(ProjectRepo::find_by_id(&pool, project.id)
        .await
        .unwrap()
        .is_none());
    assert!(!ProjectRepo::delete(&pool, project.id).await.unwrap());
}
