use std::path::Path;

use notation_core::{
    embed_url, EmbedStatus, PublishStep, PublishedNotation, ScoreId, SliceId, UploadResult,
};
use notation_logging::{notation_debug, notation_info, notation_warn};
use serde::Deserialize;

use crate::{
    markup, CallContext, ClientError, HtmlDocument, MultipartFile, PublishError, RequestSpec,
    Session,
};

const CREATE_PATH: &str = "/manage/create-via-import/";
const DELETE_PATH: &str = "/api/v1/slices/delete-multiple/";
const UPLOAD_FIELD: &str = "score";
const UPLOAD_TYPE_FIELD: &str = "type";
const BINARY_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, Deserialize)]
struct UploadResponse {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ScoreData {
    slug: Option<String>,
}

/// Create, upload, resolve, embed-toggle and delete slices.
///
/// Holds no per-call state; every identifier is passed in and handed back.
#[derive(Debug, Clone)]
pub struct NotationManager {
    session: Session,
}

impl NotationManager {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Create an empty slice and return its id, scraped from the HTML reply.
    pub async fn create_notation(&self, ctx: &CallContext) -> Result<SliceId, ClientError> {
        let spec = RequestSpec::post(CREATE_PATH);
        let call = spec.describe();
        let html = self.session.execute_text(ctx, spec).await?;

        let slice_id = HtmlDocument::parse(&html)
            .first(&markup::created_slice_id())
            .map_err(|source| ClientError::Selector {
                call: call.clone(),
                source,
            })?
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| ClientError::extraction(&call, "slice id"))?;

        notation_info!("Created slice {}", slice_id);
        Ok(SliceId::new(slice_id))
    }

    /// Upload `bytes` as the notation of `slice_id` under the base name of `filename`.
    pub async fn upload_notation(
        &self,
        ctx: &CallContext,
        slice_id: &SliceId,
        bytes: Vec<u8>,
        filename: &str,
    ) -> Result<UploadResult, ClientError> {
        let file_name = base_name(filename);
        let byte_len = bytes.len();
        let spec = RequestSpec::post(format!(
            "/api/v1/slices/{}/notation/",
            slice_id.path_segment()
        ))
        .multipart(
            MultipartFile {
                field: UPLOAD_FIELD.to_string(),
                file_name: file_name.clone(),
                content_type: BINARY_CONTENT_TYPE.to_string(),
                bytes,
                fields: vec![(UPLOAD_TYPE_FIELD.to_string(), BINARY_CONTENT_TYPE.to_string())],
            },
        );
        let call = spec.describe();
        let response: UploadResponse = self.session.execute(ctx, spec).await?;
        let name = response
            .name
            .ok_or_else(|| ClientError::extraction(&call, "uploaded file name"))?;

        notation_debug!(
            "Uploaded {} ({} bytes) to slice {} as {}",
            file_name,
            byte_len,
            slice_id,
            name
        );
        Ok(UploadResult { name })
    }

    /// Read `path` and upload it with [`NotationManager::upload_notation`].
    pub async fn upload_notation_file(
        &self,
        ctx: &CallContext,
        slice_id: &SliceId,
        path: &Path,
    ) -> Result<UploadResult, ClientError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ClientError::Io {
                path: path.display().to_string(),
                source,
            })?;
        self.upload_notation(ctx, slice_id, bytes, &path.to_string_lossy())
            .await
    }

    /// Resolve the score slug behind `slice_id`.
    pub async fn get_score_id(
        &self,
        ctx: &CallContext,
        slice_id: &SliceId,
    ) -> Result<ScoreId, ClientError> {
        let spec = RequestSpec::get(format!(
            "/slices/{}/edit/scoredata/",
            slice_id.path_segment()
        ));
        let call = spec.describe();
        let data: ScoreData = self.session.execute(ctx, spec).await?;
        data.slug
            .filter(|slug| !slug.is_empty())
            .map(ScoreId::new)
            .ok_or_else(|| ClientError::extraction(&call, "score slug"))
    }

    pub async fn set_embed_enabled(
        &self,
        ctx: &CallContext,
        score_id: &ScoreId,
        enabled: bool,
    ) -> Result<(), ClientError> {
        let status = EmbedStatus::from_enabled(enabled);
        let spec = RequestSpec::post(format!("/api/v1/scores/{}/", score_id.path_segment()))
            .form([("embed_status", status.code().to_string())]);
        self.session.execute_raw(ctx, spec).await?;
        notation_debug!("Score {} embed status set to {:?}", score_id, status);
        Ok(())
    }

    pub async fn enable_embed(
        &self,
        ctx: &CallContext,
        score_id: &ScoreId,
    ) -> Result<(), ClientError> {
        self.set_embed_enabled(ctx, score_id, true).await
    }

    pub async fn disable_embed(
        &self,
        ctx: &CallContext,
        score_id: &ScoreId,
    ) -> Result<(), ClientError> {
        self.set_embed_enabled(ctx, score_id, false).await
    }

    pub async fn delete_notation(
        &self,
        ctx: &CallContext,
        slice_id: &SliceId,
    ) -> Result<(), ClientError> {
        let spec = RequestSpec::post(DELETE_PATH).form([("ids", slice_id.as_str())]);
        self.session.execute_raw(ctx, spec).await?;
        notation_info!("Deleted slice {}", slice_id);
        Ok(())
    }

    /// Create → upload → resolve score → enable embed, then derive the embed URL.
    ///
    /// Stops at the first failing step. A slice created before the failure is
    /// left on the service and reported in [`PublishError::orphaned`].
    pub async fn publish(
        &self,
        ctx: &CallContext,
        bytes: Vec<u8>,
        filename: &str,
    ) -> Result<PublishedNotation, PublishError> {
        let slice_id = self
            .create_notation(ctx)
            .await
            .map_err(|source| PublishError {
                step: PublishStep::Create,
                orphaned: None,
                source,
            })?;
        let failed = |step: PublishStep| {
            let slice_id = slice_id.clone();
            move |source: ClientError| {
                let orphaned = step.leaves_slice_behind().then_some(slice_id);
                if let Some(slice_id) = &orphaned {
                    notation_warn!("Publish stopped at {}; slice {} left in place", step, slice_id);
                }
                PublishError {
                    step,
                    orphaned,
                    source,
                }
            }
        };

        let upload = self
            .upload_notation(ctx, &slice_id, bytes, filename)
            .await
            .map_err(failed(PublishStep::Upload))?;
        let score_id = self
            .get_score_id(ctx, &slice_id)
            .await
            .map_err(failed(PublishStep::ResolveScore))?;
        self.enable_embed(ctx, &score_id)
            .await
            .map_err(failed(PublishStep::EnableEmbed))?;
        let embed_url = embed_url(self.session.base_address(), &slice_id)
            .map_err(|err| ClientError::Config(err.to_string()))
            .map_err(failed(PublishStep::DeriveUrl))?;

        notation_info!("Published {} as slice {} ({})", filename, slice_id, embed_url);
        Ok(PublishedNotation {
            slice_id,
            score_id,
            upload,
            embed_url,
        })
    }

    /// Read `path` and [`NotationManager::publish`] it.
    ///
    /// A read failure stops before any remote call.
    pub async fn publish_file(
        &self,
        ctx: &CallContext,
        path: &Path,
    ) -> Result<PublishedNotation, PublishError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| PublishError {
            step: PublishStep::ReadFile,
            orphaned: None,
            source: ClientError::Io {
                path: path.display().to_string(),
                source,
            },
        })?;
        self.publish(ctx, bytes, &path.to_string_lossy()).await
    }

    /// Delete `previous` if given, then publish.
    ///
    /// A failed delete is logged and otherwise ignored. The caller keeps the
    /// returned slice id and passes it back in on the next call.
    pub async fn republish(
        &self,
        ctx: &CallContext,
        previous: Option<&SliceId>,
        bytes: Vec<u8>,
        filename: &str,
    ) -> Result<PublishedNotation, PublishError> {
        if let Some(previous) = previous {
            if let Err(err) = self.delete_notation(ctx, previous).await {
                notation_warn!("Ignoring failed delete of previous slice {}: {}", previous, err);
            }
        }
        self.publish(ctx, bytes, filename).await
    }
}

fn base_name(filename: &str) -> String {
    Path::new(filename)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string())
}
