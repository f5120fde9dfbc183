use crate::cli::params::DumpParams;
use crate::cli::progress::{make_spinner, make_sync_progress_bar, print_summary};
use crate::download::{SyncReport, sync_media};
use crate::error::QuizDumpError;
use crate::manifest::{fetch_manifest, save_questions, save_text_lists};
use crate::media::{find_path_collisions, select_media};
use indicatif::HumanBytes;
use reqwest::Client;

pub async fn run_dump(params: DumpParams) -> Result<SyncReport, QuizDumpError> {
    let DumpParams {
        credentials,
        preferences,
        output_dir,
        endpoint,
        client_type,
        sync_options,
    } = params;

    let client = Client::builder().build()?;
    let spinner = make_spinner("Fetching questions");

    let staged = async {
        let manifest = fetch_manifest(&client, &endpoint, &client_type, &credentials).await?;
        let media_items = manifest.media_items()?;

        spinner.set_message("Saving questions");
        save_questions(&manifest, &output_dir)?;

        spinner.set_message("Saving texts");
        let text_paths = save_text_lists(&manifest, &output_dir)?;
        tracing::info!("Saved {} text lists", text_paths.len());

        spinner.set_message("Downloading media");
        let selection = select_media(media_items, &preferences);
        for collision in find_path_collisions(&output_dir, &selection.items)? {
            tracing::warn!(
                path = %collision.path.display(),
                ids = ?collision.ids,
                "Media items with different content share a destination; only the first will be kept"
            );
        }
        Ok::<_, QuizDumpError>(selection)
    }
    .await;
    spinner.finish_and_clear();
    let selection = staged?;

    tracing::info!(
        "Syncing {} media items ({}) to {}",
        selection.len(),
        HumanBytes(selection.total_size),
        output_dir.display()
    );

    let progress = make_sync_progress_bar(selection.total_size);
    let result = sync_media(&client, &selection, &output_dir, sync_options, &progress).await;
    match &result {
        Ok(_) => progress.finish(),
        Err(_) => progress.abandon(),
    }

    let report = result?;
    print_summary(&report);
    Ok(report)
}
