mod commands;
pub mod core;

use tauri::{AppHandle, Manager, Runtime};

use crate::core::github_search::{GithubClient, SearchConfig};
use crate::core::search_bridge::{subscribe, EventSink, SearchBridge};

/// Builds the one shared client, wires it to the `github-search` event and stores it
/// for the commands.
fn install_search<R: Runtime>(app: &AppHandle<R>, config: SearchConfig) -> anyhow::Result<()> {
    let client = GithubClient::new(config)?;
    log::info!(
        "[setup] GitHub API base url: {}",
        client.config().api_base_url
    );

    let bridge = SearchBridge::new(client.clone(), EventSink::new(app.clone()));
    subscribe(app, bridge);
    app.manage(client);
    Ok(())
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }
            install_search(app.handle(), SearchConfig::from_env())?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::github_search,
            commands::build_search_query
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
