use std::path::PathBuf;
use std::sync::mpsc::Sender;

use tokio::sync::mpsc;

use crate::gateway::client::GatewayClient;
use crate::gateway::error::GatewayError;
use crate::gateway::query::ListQuery;
use crate::gateway::types::GalleryImage;
use crate::ui::events::AppEvent;

/// A validated upload ready to leave the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSubmission {
    pub file_path: PathBuf,
    pub title: String,
    pub description: String,
}

/// Work requests from the UI thread to the gateway worker.
///
/// Every command carries the generation current at send time; the matching
/// response event echoes it so the App can drop superseded results.
#[derive(Debug)]
pub enum GatewayCommand {
    ListCountries { query: ListQuery, generation: u64 },
    LoadCountry { name: String, generation: u64 },
    LoadImages { name: String, generation: u64 },
    UploadImage {
        name: String,
        submission: ImageSubmission,
        generation: u64,
    },
}

pub type GatewayCommandSender = mpsc::Sender<GatewayCommand>;

/// Drives gateway I/O on the tokio runtime.
///
/// Each command runs in its own task so a slow request never blocks the
/// others; upload-then-refresh is the only ordered sequence and runs inside
/// a single task.
pub async fn run(
    mut commands: mpsc::Receiver<GatewayCommand>,
    client: GatewayClient,
    events: Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        let client = client.clone();
        let events = events.clone();
        tokio::spawn(async move {
            handle(command, client, events).await;
        });
    }
}

async fn handle(command: GatewayCommand, client: GatewayClient, events: Sender<AppEvent>) {
    match command {
        GatewayCommand::ListCountries { query, generation } => {
            let result = client.list_countries(&query).await;
            let _ = events.send(AppEvent::CountriesLoaded { generation, result });
        }
        GatewayCommand::LoadCountry { name, generation } => {
            let result = client.country(&name).await;
            let _ = events.send(AppEvent::CountryLoaded { generation, result });
        }
        GatewayCommand::LoadImages { name, generation } => {
            let result = fetch_gallery(&client, &name).await;
            let _ = events.send(AppEvent::ImagesLoaded { generation, result });
        }
        GatewayCommand::UploadImage {
            name,
            submission,
            generation,
        } => match upload(&client, &name, submission).await {
            Ok(()) => {
                let _ = events.send(AppEvent::UploadFinished {
                    generation,
                    result: Ok(()),
                });
                // Refresh strictly after the upload response is observed:
                // the gallery must reflect server truth, not a local insert.
                let result = fetch_gallery(&client, &name).await;
                let _ = events.send(AppEvent::ImagesLoaded { generation, result });
            }
            Err(err) => {
                let _ = events.send(AppEvent::UploadFinished {
                    generation,
                    result: Err(err),
                });
            }
        },
    }
}

async fn fetch_gallery(
    client: &GatewayClient,
    name: &str,
) -> Result<Vec<GalleryImage>, GatewayError> {
    let records = client.images(name).await?;
    Ok(records.into_iter().map(GalleryImage::from_record).collect())
}

async fn upload(
    client: &GatewayClient,
    name: &str,
    submission: ImageSubmission,
) -> Result<(), GatewayError> {
    let bytes = tokio::fs::read(&submission.file_path)
        .await
        .map_err(|source| GatewayError::UploadFile {
            path: submission.file_path.clone(),
            source,
        })?;
    let file_name = submission
        .file_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    client
        .upload_image(name, file_name, bytes, submission.title, submission.description)
        .await
}
