use std::path::Path;

use notation_core::{CatalogEntry, PublishedNotation, ScoreId, SliceId, UploadResult};

use crate::{
    CallContext, ClientError, ClientSettings, NotationManager, PublishError, ScoreCatalog, Session,
};

/// Notation lifecycle and score catalog over one shared [`Session`].
#[derive(Debug, Clone)]
pub struct SliceClient {
    notations: NotationManager,
    catalog: ScoreCatalog,
}

impl SliceClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        Ok(Self::from_session(Session::new(settings)?))
    }

    pub fn from_session(session: Session) -> Self {
        Self {
            notations: NotationManager::new(session.clone()),
            catalog: ScoreCatalog::new(session),
        }
    }

    pub async fn create_notation(&self, ctx: &CallContext) -> Result<SliceId, ClientError> {
        self.notations.create_notation(ctx).await
    }

    pub async fn upload_notation(
        &self,
        ctx: &CallContext,
        slice_id: &SliceId,
        bytes: Vec<u8>,
        filename: &str,
    ) -> Result<UploadResult, ClientError> {
        self.notations
            .upload_notation(ctx, slice_id, bytes, filename)
            .await
    }

    pub async fn upload_notation_file(
        &self,
        ctx: &CallContext,
        slice_id: &SliceId,
        path: &Path,
    ) -> Result<UploadResult, ClientError> {
        self.notations.upload_notation_file(ctx, slice_id, path).await
    }

    pub async fn get_score_id(
        &self,
        ctx: &CallContext,
        slice_id: &SliceId,
    ) -> Result<ScoreId, ClientError> {
        self.notations.get_score_id(ctx, slice_id).await
    }

    pub async fn set_embed_enabled(
        &self,
        ctx: &CallContext,
        score_id: &ScoreId,
        enabled: bool,
    ) -> Result<(), ClientError> {
        self.notations
            .set_embed_enabled(ctx, score_id, enabled)
            .await
    }

    pub async fn delete_notation(
        &self,
        ctx: &CallContext,
        slice_id: &SliceId,
    ) -> Result<(), ClientError> {
        self.notations.delete_notation(ctx, slice_id).await
    }

    pub async fn publish_file(
        &self,
        ctx: &CallContext,
        path: &Path,
    ) -> Result<PublishedNotation, PublishError> {
        self.notations.publish_file(ctx, path).await
    }

    pub async fn republish(
        &self,
        ctx: &CallContext,
        previous: Option<&SliceId>,
        bytes: Vec<u8>,
        filename: &str,
    ) -> Result<PublishedNotation, PublishError> {
        self.notations
            .republish(ctx, previous, bytes, filename)
            .await
    }

    pub async fn list_scores(&self, ctx: &CallContext) -> Result<Vec<CatalogEntry>, ClientError> {
        self.catalog.list_scores(ctx).await
    }
}
