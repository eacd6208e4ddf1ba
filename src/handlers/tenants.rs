//! # Tenants API Handlers
//!
//! This module contains handlers for the tenant resource: profile lookup,
//! signup/update, current residences, and favorite property management.

use crate::error::{self, ApiError, ApiJson, ErrorType};
use crate::geo::{self, Coordinates};
use crate::repositories::{
    CreateTenantData, PropertyRepository, TenantRepository, UpdateTenantData,
};
use crate::server::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::location::Model as LocationModel;
use crate::models::property::Model as PropertyModel;
use crate::models::tenant::Model as TenantModel;

/// Request payload for creating a tenant on first signup
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateTenantRequestDto {
    /// Identity-provider subject id (unique, immutable)
    #[schema(example = "us-east-1:f3a1...")]
    pub cognito_id: String,
    /// Display name
    #[schema(example = "Jamie Doe")]
    pub name: String,
    /// Contact email address
    #[schema(example = "jamie@example.com")]
    pub email: String,
    /// Contact phone number
    #[schema(example = "+1-555-0100")]
    pub phone_number: String,
}

/// Request payload for updating a tenant; omitted fields are preserved
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTenantRequestDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

/// Property information as embedded in tenant responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PropertySummaryDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price_per_month: f64,
    pub beds: i32,
    pub baths: i32,
    pub location_id: i32,
}

impl From<PropertyModel> for PropertySummaryDto {
    fn from(model: PropertyModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price_per_month: model.price_per_month,
            beds: model.beds,
            baths: model.baths,
            location_id: model.location_id,
        }
    }
}

/// Tenant profile with its favorited properties
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TenantDto {
    pub id: i32,
    pub cognito_id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub favorites: Vec<PropertySummaryDto>,
}

impl TenantDto {
    fn from_parts(tenant: TenantModel, favorites: Vec<PropertyModel>) -> Self {
        Self {
            id: tenant.id,
            cognito_id: tenant.cognito_id,
            name: tenant.name,
            email: tenant.email,
            phone_number: tenant.phone_number,
            favorites: favorites
                .into_iter()
                .map(PropertySummaryDto::from)
                .collect(),
        }
    }
}

/// Location with decoded coordinates, embedded in residence responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LocationDto {
    pub id: i32,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    /// Decoded from the stored geometry; null when the location has none
    pub coordinates: Option<Coordinates>,
}

impl LocationDto {
    fn from_parts(location: LocationModel, coordinates: Option<Coordinates>) -> Self {
        Self {
            id: location.id,
            address: location.address,
            city: location.city,
            state: location.state,
            country: location.country,
            postal_code: location.postal_code,
            coordinates,
        }
    }
}

/// A property the tenant currently lives in, with its location
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResidenceDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price_per_month: f64,
    pub beds: i32,
    pub baths: i32,
    pub location: Option<LocationDto>,
}

/// Get a tenant by identity-provider subject id, including favorites
#[utoipa::path(
    get,
    path = "/tenants/{cognito_id}",
    params(
        ("cognito_id" = String, Path, description = "Identity-provider subject id")
    ),
    responses(
        (status = 200, description = "Tenant retrieved successfully", body = TenantDto),
        (status = 404, description = "Tenant not found", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "tenants"
)]
pub async fn get_tenant(
    State(state): State<AppState>,
    Path(cognito_id): Path<String>,
) -> Result<Json<TenantDto>, ApiError> {
    let repo = TenantRepository::new(&state.db);

    let tenant = repo
        .find_by_cognito_id(&cognito_id)
        .await?
        .ok_or_else(|| error::tenant_not_found(&cognito_id))?;

    let favorites = repo.favorites(&tenant).await?;

    Ok(Json(TenantDto::from_parts(tenant, favorites)))
}

/// Create a new tenant on first signup
#[utoipa::path(
    post,
    path = "/tenants",
    request_body = CreateTenantRequestDto,
    responses(
        (status = 201, description = "Tenant created successfully", body = TenantDto),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 409, description = "Tenant already exists", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "tenants"
)]
pub async fn create_tenant(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateTenantRequestDto>,
) -> Result<(StatusCode, Json<TenantDto>), ApiError> {
    if request.cognito_id.trim().is_empty() {
        return Err(error::validation_error(
            "cognito_id is required and cannot be empty",
            serde_json::json!({ "field": "cognito_id" }),
        ));
    }

    let repo = TenantRepository::new(&state.db);
    let data = CreateTenantData {
        cognito_id: request.cognito_id.trim().to_string(),
        name: request.name,
        email: request.email,
        phone_number: request.phone_number,
    };

    let tenant = match repo.create(data).await {
        Ok(tenant) => tenant,
        Err(err) if error::is_unique_violation(&err) => {
            return Err(
                ErrorType::Conflict.with_message("A tenant with this cognito_id already exists")
            );
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(tenant_id = tenant.id, "Created tenant");

    Ok((
        StatusCode::CREATED,
        Json(TenantDto::from_parts(tenant, Vec::new())),
    ))
}

/// Update an existing tenant; omitted fields are preserved
#[utoipa::path(
    put,
    path = "/tenants/{cognito_id}",
    params(
        ("cognito_id" = String, Path, description = "Identity-provider subject id")
    ),
    request_body = UpdateTenantRequestDto,
    responses(
        (status = 200, description = "Tenant updated successfully", body = TenantDto),
        (status = 400, description = "Malformed request body", body = ApiError),
        (status = 404, description = "Tenant not found", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "tenants"
)]
pub async fn update_tenant(
    State(state): State<AppState>,
    Path(cognito_id): Path<String>,
    ApiJson(request): ApiJson<UpdateTenantRequestDto>,
) -> Result<Json<TenantDto>, ApiError> {
    let repo = TenantRepository::new(&state.db);

    let data = UpdateTenantData {
        name: request.name,
        email: request.email,
        phone_number: request.phone_number,
    };

    let tenant = repo
        .update(&cognito_id, data)
        .await?
        .ok_or_else(|| error::tenant_not_found(&cognito_id))?;

    let favorites = repo.favorites(&tenant).await?;

    Ok(Json(TenantDto::from_parts(tenant, favorites)))
}

/// List the properties a tenant currently lives in, with decoded coordinates
#[utoipa::path(
    get,
    path = "/tenants/{cognito_id}/current-residences",
    params(
        ("cognito_id" = String, Path, description = "Identity-provider subject id")
    ),
    responses(
        (status = 200, description = "Current residences (may be empty)", body = [ResidenceDto]),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "tenants"
)]
pub async fn get_current_residences(
    State(state): State<AppState>,
    Path(cognito_id): Path<String>,
) -> Result<Json<Vec<ResidenceDto>>, ApiError> {
    let tenant_repo = TenantRepository::new(&state.db);
    let property_repo = PropertyRepository::new(&state.db);

    // An unknown tenant simply has no residences
    let Some(tenant) = tenant_repo.find_by_cognito_id(&cognito_id).await? else {
        return Ok(Json(Vec::new()));
    };

    let mut residences = Vec::new();
    for (property, location) in property_repo.residences_for_tenant(&tenant).await? {
        let location = match location {
            Some(location) => {
                // The geometry column is unusable through the ORM; re-fetch
                // it raw as WKT and decode to a longitude/latitude pair.
                let wkt = property_repo.location_wkt(location.id).await?;
                let coordinates = geo::decode_point(wkt.as_deref())?;
                Some(LocationDto::from_parts(location, coordinates))
            }
            None => None,
        };

        residences.push(ResidenceDto {
            id: property.id,
            name: property.name,
            description: property.description,
            price_per_month: property.price_per_month,
            beds: property.beds,
            baths: property.baths,
            location,
        });
    }

    Ok(Json(residences))
}

/// Add a property to the tenant's favorites
#[utoipa::path(
    post,
    path = "/tenants/{cognito_id}/favorites/{property_id}",
    params(
        ("cognito_id" = String, Path, description = "Identity-provider subject id"),
        ("property_id" = i32, Path, description = "Property identifier")
    ),
    responses(
        (status = 200, description = "Favorite added", body = TenantDto),
        (status = 404, description = "Tenant not found", body = ApiError),
        (status = 409, description = "Property already favorited", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "tenants"
)]
pub async fn add_favorite_property(
    State(state): State<AppState>,
    Path((cognito_id, property_id)): Path<(String, i32)>,
) -> Result<Json<TenantDto>, ApiError> {
    let repo = TenantRepository::new(&state.db);

    let tenant = repo
        .find_by_cognito_id(&cognito_id)
        .await?
        .ok_or_else(|| error::tenant_not_found(&cognito_id))?;

    // The join table's composite key decides duplicates, so two concurrent
    // adds for the same pair cannot both succeed.
    match repo.add_favorite(tenant.id, property_id).await {
        Ok(()) => {}
        Err(err) if error::is_unique_violation(&err) => {
            return Err(ApiError::new(
                StatusCode::CONFLICT,
                "ALREADY_FAVORITED",
                "Property already added as favorite",
            )
            .with_details(serde_json::json!({ "property_id": property_id })));
        }
        Err(err) => return Err(err.into()),
    }

    let favorites = repo.favorites(&tenant).await?;

    Ok(Json(TenantDto::from_parts(tenant, favorites)))
}

/// Remove a property from the tenant's favorites
#[utoipa::path(
    delete,
    path = "/tenants/{cognito_id}/favorites/{property_id}",
    params(
        ("cognito_id" = String, Path, description = "Identity-provider subject id"),
        ("property_id" = i32, Path, description = "Property identifier")
    ),
    responses(
        (status = 200, description = "Favorite removed (no-op when absent)", body = TenantDto),
        (status = 404, description = "Tenant not found", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "tenants"
)]
pub async fn remove_favorite_property(
    State(state): State<AppState>,
    Path((cognito_id, property_id)): Path<(String, i32)>,
) -> Result<Json<TenantDto>, ApiError> {
    let repo = TenantRepository::new(&state.db);

    let tenant = repo
        .find_by_cognito_id(&cognito_id)
        .await?
        .ok_or_else(|| error::tenant_not_found(&cognito_id))?;

    let removed = repo.remove_favorite(tenant.id, property_id).await?;
    tracing::debug!(
        tenant_id = tenant.id,
        property_id,
        removed,
        "Removed favorite"
    );

    let favorites = repo.favorites(&tenant).await?;

    Ok(Json(TenantDto::from_parts(tenant, favorites)))
}
