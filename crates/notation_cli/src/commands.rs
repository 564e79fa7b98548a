use std::time::Duration;

use anyhow::{Context, Result};
use notation_client::{BlockingClient, CallContext, ClientSettings, ScoreId, SliceId};
use notation_logging::{notation_info, notation_warn};
use serde::Serialize;

use crate::cli::{Args, Command};

pub fn run(args: Args) -> Result<()> {
    let settings = ClientSettings {
        request_timeout: Duration::from_secs(args.timeout_secs),
        ..ClientSettings::new(args.base_address, args.session)
    };
    let client = BlockingClient::new(settings).context("failed to set up the service client")?;
    let ctx = CallContext::new();

    match args.command {
        Command::List => {
            let entries = client.list_scores(&ctx)?;
            notation_info!("Found {} scores", entries.len());
            print_json(&entries)
        }
        Command::Publish { file, replace } => {
            let bytes = std::fs::read(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let previous = replace.map(SliceId::new);
            let filename = file.to_string_lossy();
            match client.republish(&ctx, previous.as_ref(), bytes, &filename) {
                Ok(published) => print_json(&published),
                Err(err) => {
                    if let Some(orphan) = &err.orphaned {
                        notation_warn!(
                            "Slice {} was created but not finished; pass --replace {} to clean it up",
                            orphan,
                            orphan
                        );
                    }
                    Err(err.into())
                }
            }
        }
        Command::Create => {
            let slice_id = client.create_notation(&ctx)?;
            println!("{slice_id}");
            Ok(())
        }
        Command::Upload { slice_id, file } => {
            let result = client.upload_notation_file(&ctx, &SliceId::new(slice_id), &file)?;
            print_json(&result)
        }
        Command::ScoreId { slice_id } => {
            let score_id = client.get_score_id(&ctx, &SliceId::new(slice_id))?;
            println!("{score_id}");
            Ok(())
        }
        Command::Embed { score_id, disable } => {
            client.set_embed_enabled(&ctx, &ScoreId::new(score_id), !disable)?;
            Ok(())
        }
        Command::Delete { slice_id } => {
            client.delete_notation(&ctx, &SliceId::new(slice_id))?;
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render output")?;
    println!("{rendered}");
    Ok(())
}
