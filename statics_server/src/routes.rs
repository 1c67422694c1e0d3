//! Route handlers.

use axum::Json;
use serde::{Deserialize, Serialize};

use statics_core::api::{
    self, AnalysisResponse, BeamRequest, CenterOfMassReply, TorsorAtReply, TorsorAtRequest,
};
use statics_core::calculations::frame::{solve_frame, FrameAnalysis, FrameModel};
use statics_core::calculations::mass::{self, CenterOfMass3d, PointMass};
use statics_core::calculations::reactions::ReactionSet;
use statics_core::calculations::truss::{solve_truss, TrussAnalysis, TrussModel};
use statics_core::equations::section::{
    composite_centroid, CompositeCentroid, ISection, ISectionProperties, PlacedShape,
    RectangularSection, SectionProperties,
};

use crate::error::{ApiError, ApiJson};

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Deserialize)]
pub struct PointMassesRequest {
    pub points: Vec<PointMass>,
}

#[derive(Debug, Deserialize)]
pub struct ForceFromTorsorRequest {
    pub torsor: f64,
    pub distance: f64,
}

#[derive(Debug, Deserialize)]
pub struct CompositeRequest {
    pub shapes: Vec<PlacedShape>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ForceReply {
    pub force: f64,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn analyze(ApiJson(request): ApiJson<BeamRequest>) -> ApiResult<AnalysisResponse> {
    let response = api::analyze(&request)?;
    log::info!(
        "analyzed L={} with {} samples",
        request.beam.length,
        response.analysis.diagrams.positions.len()
    );
    Ok(Json(response))
}

pub async fn reactions(ApiJson(request): ApiJson<BeamRequest>) -> ApiResult<ReactionSet> {
    Ok(Json(api::reactions(&request)?))
}

pub async fn center_of_mass(
    ApiJson(request): ApiJson<BeamRequest>,
) -> ApiResult<CenterOfMassReply> {
    Ok(Json(api::center_of_mass(&request)?))
}

pub async fn torsor_at(ApiJson(request): ApiJson<TorsorAtRequest>) -> ApiResult<TorsorAtReply> {
    Ok(Json(api::torsor_at(&request)?))
}

pub async fn rectangular_section(
    ApiJson(section): ApiJson<RectangularSection>,
) -> ApiResult<SectionProperties> {
    Ok(Json(section.properties()?))
}

pub async fn i_section(ApiJson(section): ApiJson<ISection>) -> ApiResult<ISectionProperties> {
    Ok(Json(section.properties()?))
}

pub async fn composite_section(
    ApiJson(request): ApiJson<CompositeRequest>,
) -> ApiResult<CompositeCentroid> {
    Ok(Json(composite_centroid(&request.shapes)?))
}

pub async fn truss(ApiJson(model): ApiJson<TrussModel>) -> ApiResult<TrussAnalysis> {
    let result = solve_truss(&model)?;
    log::info!("solved truss with {} bars", result.bar_forces.len());
    Ok(Json(result))
}

pub async fn frame(ApiJson(model): ApiJson<FrameModel>) -> ApiResult<FrameAnalysis> {
    let result = solve_frame(&model)?;
    log::info!("solved frame with {} nodes", result.displacements.len());
    Ok(Json(result))
}

pub async fn center_of_mass_3d(
    ApiJson(request): ApiJson<PointMassesRequest>,
) -> ApiResult<CenterOfMass3d> {
    Ok(Json(mass::center_of_mass_3d(&request.points)?))
}

pub async fn force_from_torsor(
    ApiJson(request): ApiJson<ForceFromTorsorRequest>,
) -> ApiResult<ForceReply> {
    let force = mass::force_from_torsor(request.torsor, request.distance)?;
    Ok(Json(ForceReply { force }))
}
