//! Utility functions for channel name handling.

/// Normalizes a channel name: trimmed, lowercase, without the leading `#`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_channel(" #SomeChannel "), "somechannel");
/// ```
pub fn normalize_channel(channel: &str) -> String {
    channel.trim().trim_start_matches('#').to_lowercase()
}

/// Merges the configured channels with the ones given on the command line.
///
/// Names are normalized, empty names are dropped and duplicates are removed,
/// keeping the first occurrence so configured channels come first.
pub fn merge_channels(configured: &[String], extra: &[String]) -> Vec<String> {
    let mut channels: Vec<String> = Vec::new();

    for channel in configured.iter().chain(extra) {
        let channel = normalize_channel(channel);
        if !channel.is_empty() && !channels.contains(&channel) {
            channels.push(channel);
        }
    }

    channels
}
