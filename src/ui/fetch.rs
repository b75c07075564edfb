//! Background worker executing fetch commands on the tokio runtime.

use std::sync::mpsc::Sender;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::dog::{DogClient, FetchError};
use crate::ui::app::{UiCommand, UiCommandSender};
use crate::ui::events::AppEvent;
use crate::ui::viewer::LoadedDog;

/// Capacity of the command queue between the UI loop and the worker.
pub const COMMAND_QUEUE_CAPACITY: usize = 4;

/// Fetch one dog and try to download its picture.
///
/// A picture failure is logged and leaves `picture` empty; only the
/// API call itself can fail the attempt.
pub async fn fetch_dog(client: &DogClient) -> Result<LoadedDog, FetchError> {
    let dog = client.fetch_random_dog().await?;
    let picture = match client.fetch_picture(&dog.image_url).await {
        Ok(picture) => {
            debug!(
                width = picture.width(),
                height = picture.height(),
                "Picture decoded"
            );
            Some(picture)
        }
        Err(err) => {
            warn!(error = %err, "Picture unavailable, showing URL only");
            None
        }
    };
    Ok(LoadedDog { dog, picture })
}

/// Spawn the fetch worker and return the sender the UI dispatches on.
///
/// Commands are handled one at a time, so two queued reloads still
/// produce sequential, never overlapping, requests. The worker stops
/// when every sender is dropped or the event receiver goes away.
pub fn spawn_fetch_worker(
    runtime: &Handle,
    client: DogClient,
    events: Sender<AppEvent>,
) -> UiCommandSender {
    let (tx, mut rx) = mpsc::channel(COMMAND_QUEUE_CAPACITY);

    runtime.spawn(async move {
        info!(endpoint = client.endpoint(), "Fetch worker started");
        while let Some(command) = rx.recv().await {
            match command {
                UiCommand::FetchDog => {
                    let outcome = fetch_dog(&client).await;
                    if events.send(AppEvent::DogFetched(outcome)).is_err() {
                        debug!("Event loop gone, stopping fetch worker");
                        break;
                    }
                }
            }
        }
        debug!("Fetch worker stopped");
    });

    tx
}
