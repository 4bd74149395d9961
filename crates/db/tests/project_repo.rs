//! Integration tests for `ProjectRepo` against a real database.

use folio_db::models::project::CreateProject;
use folio_db::repositories::ProjectRepo;
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(title: &str, category: &str) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        description: format!("{title} description"),
        category: category.to_string(),
        image: "iVBORw0KGgo=".to_string(),
        featured: false,
    }
}

// ---------------------------------------------------------------------------
// Create / find
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_assigns_id_and_timestamp(pool: PgPool) {
    let before = chrono::Utc::now() - chrono::Duration::seconds(5);
    let project = ProjectRepo::create(&pool, &new_project("Dunes", "photography"))
        .await
        .unwrap();

    assert!(!project.id.is_nil());
    assert_eq!(project.title, "Dunes");
    assert_eq!(project.image, "iVBORw0KGgo=");
    assert!(!project.featured);
    assert!(project.created_at >= before);
}

#[sqlx::test(migrations = "./migrations")]
async fn create_generates_distinct_ids(pool: PgPool) {
    let a = ProjectRepo::create(&pool, &new_project("A", "photography"))
        .await
        .unwrap();
    let b = ProjectRepo::create(&pool, &new_project("A", "photography"))
        .await
        .unwrap();
    assert_ne!(a.id, b.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn find_by_id_round_trips(pool: PgPool) {
    let created = ProjectRepo::create(
        &pool,
        &CreateProject {
            featured: true,
            ..new_project("Reel", "videography")
        },
    )
    .await
    .unwrap();

    let found = ProjectRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("project should exist");
    assert_eq!(found.id, created.id);
    assert_eq!(found.category, "videography");
    assert!(found.featured);
}

#[sqlx::test(migrations = "./migrations")]
async fn find_by_unknown_id_returns_none(pool: PgPool) {
    let found = ProjectRepo::find_by_id(&pool, Uuid::new_v4()).await.unwrap();
    assert!(found.is_none());
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn list_without_filter_returns_all_in_insertion_order(pool: PgPool) {
    for (title, category) in [
        ("First", "photography"),
        ("Second", "3d_design"),
        ("Third", "videography"),
    ] {
        ProjectRepo::create(&pool, &new_project(title, category))
            .await
            .unwrap();
    }

    let all = ProjectRepo::list(&pool, None).await.unwrap();
    let titles: Vec<&str> = all.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn list_filters_by_exact_category(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("Lens", "photography"))
        .await
        .unwrap();
    ProjectRepo::create(&pool, &new_project("Render", "3d_design"))
        .await
        .unwrap();
    ProjectRepo::create(&pool, &new_project("Caps", "Photography"))
        .await
        .unwrap();

    let photos = ProjectRepo::list(&pool, Some("photography")).await.unwrap();
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0].title, "Lens");

    let none = ProjectRepo::list(&pool, Some("animation")).await.unwrap();
    assert!(none.is_empty());
}
