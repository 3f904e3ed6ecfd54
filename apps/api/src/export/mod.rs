//! Export pipeline — capture → flatten → paginate → assemble → download.
//!
//! Failures anywhere in the pipeline surface once as a generic export error
//! and are never retried; the data store is untouched either way.

pub mod handlers;
pub mod pagination;
pub mod pdf;
pub mod raster;

use bytes::Bytes;
use chrono::NaiveDate;
use tracing::info;

use crate::errors::AppError;
use crate::export::pagination::plan_pages;
use crate::export::pdf::assemble_pdf;
use crate::export::raster::{SurfaceCapture, SurfaceRasterizer};
use crate::models::resume::ResumeData;
use crate::render::TemplateId;

/// The finished download.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Runs the full pipeline for one captured surface.
pub async fn export_resume(
    rasterizer: &dyn SurfaceRasterizer,
    capture: SurfaceCapture,
    snapshot: &ResumeData,
    template: TemplateId,
    date: NaiveDate,
) -> Result<ExportedDocument, AppError> {
    let raster = rasterizer.rasterize(&capture).await?;
    let plan = plan_pages(raster.width, raster.height)?;
    info!(
        "Paginating {}x{} raster (scale {}x) over {} page(s)",
        raster.width,
        raster.height,
        capture.scale,
        plan.page_count()
    );

    let pdf = assemble_pdf(&raster, &plan)?;
    Ok(ExportedDocument {
        file_name: export_file_name(snapshot, template, date),
        bytes: Bytes::from(pdf),
    })
}

/// `<FullName|"Resume">_<template>_<YYYY-MM-DD>.pdf`
pub fn export_file_name(snapshot: &ResumeData, template: TemplateId, date: NaiveDate) -> String {
    let name = snapshot.personal_info.full_name.trim();
    let name = if name.is_empty() { "Resume" } else { name };
    format!("{}_{}_{}.pdf", name, template, date.format("%Y-%m-%d"))
}
