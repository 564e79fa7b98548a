use std::path::Path;

use notation_core::{CatalogEntry, PublishedNotation, ScoreId, SliceId, UploadResult};

use crate::{CallContext, ClientError, ClientSettings, PublishError, Session, SliceClient};

/// Synchronous front for [`SliceClient`].
///
/// Each method blocks the calling thread until the call finishes. Must not be
/// used from inside an async runtime.
pub struct BlockingClient {
    runtime: tokio::runtime::Runtime,
    client: SliceClient,
}

impl BlockingClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        Self::from_session(Session::new(settings)?)
    }

    pub fn from_session(session: Session) -> Result<Self, ClientError> {
        Ok(Self {
            runtime: build_runtime()?,
            client: SliceClient::from_session(session),
        })
    }

    pub fn create_notation(&self, ctx: &CallContext) -> Result<SliceId, ClientError> {
        self.runtime.block_on(self.client.create_notation(ctx))
    }

    pub fn upload_notation(
        &self,
        ctx: &CallContext,
        slice_id: &SliceId,
        bytes: Vec<u8>,
        filename: &str,
    ) -> Result<UploadResult, ClientError> {
        self.runtime
            .block_on(self.client.upload_notation(ctx, slice_id, bytes, filename))
    }

    pub fn upload_notation_file(
        &self,
        ctx: &CallContext,
        slice_id: &SliceId,
        path: &Path,
    ) -> Result<UploadResult, ClientError> {
        self.runtime
            .block_on(self.client.upload_notation_file(ctx, slice_id, path))
    }

    pub fn get_score_id(
        &self,
        ctx: &CallContext,
        slice_id: &SliceId,
    ) -> Result<ScoreId, ClientError> {
        self.runtime.block_on(self.client.get_score_id(ctx, slice_id))
    }

    pub fn set_embed_enabled(
        &self,
        ctx: &CallContext,
        score_id: &ScoreId,
        enabled: bool,
    ) -> Result<(), ClientError> {
        self.runtime
            .block_on(self.client.set_embed_enabled(ctx, score_id, enabled))
    }

    pub fn delete_notation(
        &self,
        ctx: &CallContext,
        slice_id: &SliceId,
    ) -> Result<(), ClientError> {
        self.runtime.block_on(self.client.delete_notation(ctx, slice_id))
    }

    pub fn publish_file(
        &self,
        ctx: &CallContext,
        path: &Path,
    ) -> Result<PublishedNotation, PublishError> {
        self.runtime.block_on(self.client.publish_file(ctx, path))
    }

    pub fn republish(
        &self,
        ctx: &CallContext,
        previous: Option<&SliceId>,
        bytes: Vec<u8>,
        filename: &str,
    ) -> Result<PublishedNotation, PublishError> {
        self.runtime
            .block_on(self.client.republish(ctx, previous, bytes, filename))
    }

    pub fn list_scores(&self, ctx: &CallContext) -> Result<Vec<CatalogEntry>, ClientError> {
        self.runtime.block_on(self.client.list_scores(ctx))
    }
}

fn build_runtime() -> Result<tokio::runtime::Runtime, ClientError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(ClientError::Runtime)
}
