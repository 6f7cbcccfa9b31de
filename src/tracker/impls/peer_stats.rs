use crate::tracker::enums::stats_error::StatsError;
use crate::tracker::structs::peer_stats::PeerStats;

impl PeerStats {
    /// Parses the three decimal counters; any negative, padded or non-numeric value fails the lot.
    pub fn parse(uploaded: &str, downloaded: &str, left: &str) -> Result<PeerStats, StatsError>
    {
        fn counter(value: &str) -> Result<u64, StatsError> {
            value.parse::<u64>().map_err(|_| StatsError::MalformedStats)
        }

        Ok(PeerStats {
            uploaded: counter(uploaded)?,
            downloaded: counter(downloaded)?,
            left: counter(left)?,
        })
    }
}
