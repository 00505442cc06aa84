//! Handlers for the staff console under `/api/v1/admin`.
//!
//! Full CRUD on projects, read/update/delete on donations (donations are
//! only ever created through the public form), and the field layout for
//! the two variants of the project form.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use givehub_core::donation;
use givehub_core::error::CoreError;
use givehub_core::project;
use givehub_core::types::DbId;
use givehub_db::models::donation::{
    Donation, DonationListParams, DonationWithProject, UpdateDonation,
};
use givehub_db::models::project::{CreateProject, ProjectListParams, UpdateProject};
use givehub_db::repositories::{DonationRepo, ProjectRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::project::ProjectView;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// One page of projects plus the total match count.
#[derive(Debug, Serialize)]
pub struct ProjectPage {
    pub items: Vec<ProjectView>,
    pub total: i64,
}

/// One page of donations plus the total match count.
///
/// Admin payloads carry donor emails and real names; masking applies
/// only to the public surface.
#[derive(Debug, Serialize)]
pub struct DonationPage {
    pub items: Vec<DonationWithProject>,
    pub total: i64,
}

/// One titled group of fields on the project form.
#[derive(Debug, Serialize)]
pub struct FieldGroup {
    pub title: &'static str,
    pub fields: &'static [&'static str],
}

/// Field layout for one variant of the project form.
#[derive(Debug, Serialize)]
pub struct FormConfig {
    pub mode: &'static str,
    pub groups: Vec<FieldGroup>,
    pub readonly_fields: &'static [&'static str],
}

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Which variant of the project form to describe.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    Add,
    Edit,
}

/// Query params for `GET /admin/projects/form-config`.
#[derive(Debug, Deserialize)]
pub struct FormConfigParams {
    pub mode: FormMode,
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

fn validate_create_project(input: &CreateProject) -> Result<(), CoreError> {
    project::validate_name(&input.name)?;
    if let Some(target) = input.target_amount {
        project::validate_target_amount(target)?;
    }
    if let Some(ref status) = input.status {
        project::validate_status(status)?;
    }
    if let Some(ref url) = input.image_url {
        project::validate_image_url(url)?;
    }
    Ok(())
}

fn validate_update_project(input: &UpdateProject) -> Result<(), CoreError> {
    if let Some(ref name) = input.name {
        project::validate_name(name)?;
    }
    if let Some(target) = input.target_amount {
        project::validate_target_amount(target)?;
    }
    if let Some(ref status) = input.status {
        project::validate_status(status)?;
    }
    if let Some(ref url) = input.image_url {
        project::validate_image_url(url)?;
    }
    Ok(())
}

fn validate_update_donation(input: &UpdateDonation) -> Result<(), CoreError> {
    if let Some(ref name) = input.donor_name {
        donation::validate_donor_name(name)?;
    }
    if let Some(ref email) = input.email {
        donation::validate_email(email)?;
    }
    if let Some(amount) = input.amount {
        donation::validate_amount(amount)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Project handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/projects?status=&q=&limit=&offset=
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Json<DataResponse<ProjectPage>>> {
    let projects = ProjectRepo::list(&state.pool, &params).await?;
    let total = ProjectRepo::count(&state.pool, &params).await?;

    let now = chrono::Utc::now();
    let items = projects
        .into_iter()
        .map(|project| ProjectView::from_project(project, now))
        .collect();
    Ok(Json(DataResponse {
        data: ProjectPage { items, total },
    }))
}

/// POST /api/v1/admin/projects
pub async fn create_project(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<ProjectView>>)> {
    validate_create_project(&input)?;

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = project.id, name = %project.name, "Project created");

    let view = ProjectView::from_project(project, chrono::Utc::now());
    Ok((StatusCode::CREATED, Json(DataResponse { data: view })))
}

/// GET /api/v1/admin/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProjectView>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(DataResponse {
        data: ProjectView::from_project(project, chrono::Utc::now()),
    }))
}

/// PUT /api/v1/admin/projects/{id}
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<DataResponse<ProjectView>>> {
    validate_update_project(&input)?;

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    tracing::info!(project_id = project.id, "Project updated");

    Ok(Json(DataResponse {
        data: ProjectView::from_project(project, chrono::Utc::now()),
    }))
}

/// DELETE /api/v1/admin/projects/{id}
///
/// Hard delete; the project's donations cascade with it.
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(project_id = id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}

/// GET /api/v1/admin/projects/form-config?mode=add|edit
///
/// The two fixed field layouts for the project form. The collected
/// amount and the derived displays are never operator-editable; the add
/// variant leaves them out of the visible groups entirely.
pub async fn project_form_config(
    Query(params): Query<FormConfigParams>,
) -> Json<DataResponse<FormConfig>> {
    let config = match params.mode {
        FormMode::Add => FormConfig {
            mode: "add",
            groups: vec![
                FieldGroup {
                    title: "Basics",
                    fields: &["name", "description", "image_url"],
                },
                FieldGroup {
                    title: "Finances",
                    fields: &["target_amount"],
                },
                FieldGroup {
                    title: "Schedule",
                    fields: &["deadline"],
                },
                FieldGroup {
                    title: "Status",
                    fields: &["status"],
                },
            ],
            readonly_fields: &[
                "current_amount",
                "progress_percentage",
                "days_remaining",
                "created_at",
            ],
        },
        FormMode::Edit => FormConfig {
            mode: "edit",
            groups: vec![
                FieldGroup {
                    title: "Basics",
                    fields: &["name", "description", "image_url"],
                },
                FieldGroup {
                    title: "Finances",
                    fields: &["target_amount", "current_amount", "progress_percentage"],
                },
                FieldGroup {
                    title: "Schedule",
                    fields: &["deadline", "days_remaining", "created_at"],
                },
                FieldGroup {
                    title: "Status",
                    fields: &["status"],
                },
            ],
            readonly_fields: &[
                "current_amount",
                "progress_percentage",
                "days_remaining",
                "created_at",
            ],
        },
    };
    Json(DataResponse { data: config })
}

// ---------------------------------------------------------------------------
// Donation handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/donations?project_id=&is_anonymous=&q=&limit=&offset=
pub async fn list_donations(
    State(state): State<AppState>,
    Query(params): Query<DonationListParams>,
) -> AppResult<Json<DataResponse<DonationPage>>> {
    let items = DonationRepo::list(&state.pool, &params).await?;
    let total = DonationRepo::count(&state.pool, &params).await?;
    Ok(Json(DataResponse {
        data: DonationPage { items, total },
    }))
}

/// GET /api/v1/admin/donations/{id}
pub async fn get_donation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Donation>>> {
    let donation = DonationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Donation",
            id,
        }))?;
    Ok(Json(DataResponse { data: donation }))
}

/// PUT /api/v1/admin/donations/{id}
///
/// Correct a donation record. May move it to another project. Stored
/// project totals are not re-aggregated by corrections.
pub async fn update_donation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDonation>,
) -> AppResult<Json<DataResponse<Donation>>> {
    validate_update_donation(&input)?;

    let donation = DonationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Donation",
            id,
        }))?;
    tracing::info!(donation_id = donation.id, "Donation corrected");

    Ok(Json(DataResponse { data: donation }))
}

/// DELETE /api/v1/admin/donations/{id}
///
/// Removes the record without touching the project's stored total.
pub async fn delete_donation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = DonationRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(donation_id = id, "Donation deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Donation",
            id,
        }))
    }
}
