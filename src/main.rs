use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{debug, error, info, warn};
use parking_lot::deadlock;
use tokio::runtime::Builder;
use tokio::sync::broadcast::error::RecvError;
use tokio_shutdown::Shutdown;
use private_tracker::bencode::structs::metainfo::Metainfo;
use private_tracker::common::common::setup_logging;
use private_tracker::config::structs::configuration::Configuration;
use private_tracker::http::http::http_service;
use private_tracker::reaper::structs::peer_reaper::PeerReaper;
use private_tracker::security::structs::secret_verifier::SecretVerifier;
use private_tracker::structs::Cli;
use private_tracker::tracker::structs::broadcast_stat_publisher::BroadcastStatPublisher;
use private_tracker::tracker::structs::memory_torrent_store::MemoryTorrentStore;
use private_tracker::tracker::structs::memory_user_store::MemoryUserStore;
use private_tracker::tracker::structs::torrent_tracker::TorrentTracker;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Some(secret) = &args.issue_tag {
        let verifier = SecretVerifier::new(&config.tracker_config.shared_key);
        return match verifier.issue(secret) {
            Some(tag) => {
                println!("{}", Metainfo::private_announce_url(&args.announce_base, secret, &tag));
                Ok(())
            }
            None => {
                eprintln!("[ERROR] The secret must be a hex string");
                exit(1)
            }
        };
    }

    if let Err(error) = setup_logging(&config) {
        eprintln!("[ERROR] {error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let users = Arc::new(MemoryUserStore::from_config(&config.users));
            info!("[BOOT] Registered {} users", users.len());

            let torrents = Arc::new(MemoryTorrentStore::new());
            if let Some(torrents_dir) = &config.tracker_config.torrents_dir {
                match torrents.load_dir(torrents_dir) {
                    Ok(loaded) => info!("[BOOT] Registered {loaded} torrents from {torrents_dir}"),
                    Err(error) => {
                        error!("[BOOT] {error}");
                        exit(1);
                    }
                }
            }

            let stat_publisher = Arc::new(BroadcastStatPublisher::new(1024));
            let tracker = Arc::new(TorrentTracker::new(
                config.clone(),
                users,
                torrents,
                Some(stat_publisher.clone())
            ));

            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(_) => {
                    error!("[BOOT] Unable to install the shutdown handler");
                    exit(1);
                }
            };

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                warn!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    warn!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        warn!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        warn!("[DEADLOCK] {:#?}", t.backtrace());
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let mut http_handles = Vec::new();
            let mut http_futures = Vec::new();

            for http_server_object in &config.http_server {
                if http_server_object.enabled {
                    let address: SocketAddr = match http_server_object.bind_address.parse() {
                        Ok(address) => address,
                        Err(_) => {
                            error!("[HTTP] Invalid bind address {}", http_server_object.bind_address);
                            exit(1);
                        }
                    };

                    match http_service(address, tracker.clone(), http_server_object.clone()).await {
                        Ok((handle, future)) => {
                            http_handles.push(handle);
                            http_futures.push(future);
                        }
                        Err(error) => {
                            error!("[HTTP] Unable to bind to {address}: {error}");
                            exit(1);
                        }
                    }
                }
            }

            if !http_futures.is_empty() {
                tokio::spawn(async move {
                    if let Err(error) = try_join_all(http_futures).await {
                        error!("[HTTP] Server stopped with an error: {error}");
                    }
                });
            }

            let publish_handler = tokio_shutdown.clone();
            let mut stat_updates = stat_publisher.subscribe();
            tokio::spawn(async move {
                loop {
                    tokio::select! {
                        update = stat_updates.recv() => {
                            match update {
                                Ok(update) => debug!("[STATS] {} - Seeds: {} - Peers: {}", update.info_hash, update.seeders, update.leechers),
                                Err(RecvError::Lagged(skipped)) => debug!("[STATS] Skipped {skipped} swarm updates"),
                                Err(RecvError::Closed) => return,
                            }
                        }
                        _ = publish_handler.handle() => {
                            return;
                        }
                    }
                }
            });

            let stats_handler = tokio_shutdown.clone();
            let tracker_spawn_stats = tracker.clone();
            let console_interval = tracker_spawn_stats.config.log_console_interval;
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let stats = tracker_spawn_stats.get_stats();
                            info!(
                                "[STATS] Torrents: {} - Unloaded: {} - Reaped: {}",
                                stats.torrents, stats.torrents_unloaded, stats.peers_reaped
                            );
                            info!(
                                "[STATS TCP] A4:{} A6:{} | Invalid:{} NoUser:{} BadTag:{} NoTorrent:{} BadStats:{}",
                                stats.tcp4_announces_handled, stats.tcp6_announces_handled,
                                stats.invalid_requests, stats.users_not_found, stats.authentication_failures,
                                stats.torrents_not_found, stats.malformed_stats
                            );
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            let (reaper_tx, reaper_rx) = tokio::sync::watch::channel(false);
            let reaper = PeerReaper::for_tracker(&tracker);
            let reaper_task = tokio::spawn(reaper.run(tracker.clone(), reaper_rx));

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");

                    let _ = reaper_tx.send(true);
                    let _ = reaper_task.await;

                    for handle in http_handles {
                        handle.stop(true).await;
                    }

                    tokio_shutdown.handle().await;
                    tokio::time::sleep(Duration::from_secs(1)).await;

                    info!("Server shutting down completed");
                    Ok(())
                }
            }
        })
}
